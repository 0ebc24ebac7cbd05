//! Terminal User Interface for the onboarding wizard

pub mod app;
pub mod events;
pub mod modal;
pub mod screens;
pub mod state;
pub mod theme;

use crate::config::OnboardConfig;
use crate::wizard::SinkChain;
use crate::Result;

/// Run the interactive onboarding wizard
pub async fn run_onboarding_wizard(config: OnboardConfig, sink: SinkChain) -> Result<()> {
    app::App::new(config, Box::new(sink)).run().await
}
