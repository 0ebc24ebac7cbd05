use super::CommandHandler;
use crate::config::{ConfigSource, OnboardConfig};
use crate::Result;

/// Handler for the `check-config` command
pub struct CheckConfigCommand {
    pub config: OnboardConfig,
    pub source: ConfigSource,
}

impl CommandHandler for CheckConfigCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.summary());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "check-config"
    }
}

impl CheckConfigCommand {
    /// Create new check-config command
    pub fn new(config: OnboardConfig, source: ConfigSource) -> Self {
        Self { config, source }
    }

    /// Summary of a configuration that loaded and validated
    pub fn summary(&self) -> String {
        let timings = &self.config.timings;
        [
            format!("✓ Configuration OK ({})", self.source),
            format!("  Brand:              {}", self.config.brand),
            format!("  Themes:             {}", self.config.themes.len()),
            format!("  Product types:      {}", self.config.product_types.len()),
            format!("  Product categories: {}", self.config.product_categories.len()),
            format!(
                "  Name/description:   min {} / max {} characters",
                self.config.validation.product_name_min, self.config.validation.description_max
            ),
            format!(
                "  Notifications:      show {}ms, dismiss {}ms, slide {}ms",
                timings.notification_show_ms,
                timings.notification_dismiss_ms,
                timings.notification_slide_ms
            ),
            format!("  Completion delay:   {}ms", timings.completion_delay_ms),
        ]
        .join("\n")
    }
}
