use std::path::PathBuf;

use super::CommandHandler;
use crate::config::OnboardConfig;
use crate::wizard::{JsonFileSink, LogSink, SinkChain};
use crate::Result;

/// Handler for the `run` command
pub struct RunCommand {
    pub config: OnboardConfig,
    pub record_out: Option<PathBuf>,
}

impl CommandHandler for RunCommand {
    #[cfg(feature = "tui")]
    fn execute(&self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(crate::cli::tui::run_onboarding_wizard(
            self.config.clone(),
            self.sink(),
        ))
    }

    #[cfg(not(feature = "tui"))]
    fn execute(&self) -> Result<()> {
        Err(crate::OnboardError::Cli(
            "the interactive wizard requires the `tui` feature".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "run"
    }
}

impl RunCommand {
    /// Create new run command
    pub fn new(config: OnboardConfig, record_out: Option<PathBuf>) -> Self {
        Self { config, record_out }
    }

    /// Sinks receiving the completion record: the JSON file if requested, then the log.
    /// The log entry is only written once the file write succeeded.
    pub fn sink(&self) -> SinkChain {
        let chain = match &self.record_out {
            Some(path) => SinkChain::new().with(JsonFileSink::new(path.clone())),
            None => SinkChain::new(),
        };
        chain.with(LogSink)
    }
}
