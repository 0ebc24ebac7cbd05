use super::CommandHandler;
use crate::config::OnboardConfig;
use crate::{OnboardError, Result};

/// Handler for the `themes` command
pub struct ThemesCommand {
    pub config: OnboardConfig,
    pub format: String,
}

impl CommandHandler for ThemesCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "themes"
    }
}

impl ThemesCommand {
    /// Create new themes command
    pub fn new(config: OnboardConfig, format: String) -> Self {
        Self { config, format }
    }

    /// Render the theme list in the requested format
    pub fn render(&self) -> Result<String> {
        match self.format.as_str() {
            "json" => Ok(serde_json::to_string_pretty(&self.config.themes)?),
            "text" => {
                let width = self
                    .config
                    .themes
                    .iter()
                    .map(|theme| theme.id.len())
                    .max()
                    .unwrap_or(0);
                let lines: Vec<String> = self
                    .config
                    .themes
                    .iter()
                    .map(|theme| {
                        format!(
                            "{:<width$}  {} - {}",
                            theme.id,
                            theme.display_name,
                            theme.description,
                            width = width
                        )
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            other => Err(OnboardError::Cli(format!(
                "Unknown format '{}'. Expected: text, json",
                other
            ))),
        }
    }
}
