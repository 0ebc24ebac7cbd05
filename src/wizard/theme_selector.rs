use serde::{Deserialize, Serialize};

use crate::{OnboardError, Result};

/// A selectable theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOption {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

impl ThemeOption {
    pub fn new(id: &str, display_name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Single-select list of theme options
#[derive(Debug, Clone)]
pub struct ThemeSelector {
    options: Vec<ThemeOption>,
    selected: Option<usize>,
    /// Highlighted row (keyboard focus), independent of the selection
    cursor: usize,
}

impl ThemeSelector {
    pub fn new(options: Vec<ThemeOption>) -> Self {
        Self {
            options,
            selected: None,
            cursor: 0,
        }
    }

    pub fn options(&self) -> &[ThemeOption] {
        &self.options
    }

    /// Mark `theme_id` as the only selected option
    pub fn select(&mut self, theme_id: &str) -> Result<&ThemeOption> {
        let index = self
            .options
            .iter()
            .position(|option| option.id == theme_id)
            .ok_or_else(|| OnboardError::UnknownTheme(theme_id.to_string()))?;
        self.selected = Some(index);
        self.cursor = index;
        Ok(&self.options[index])
    }

    pub fn selected(&self) -> Option<&ThemeOption> {
        self.selected.map(|index| &self.options[index])
    }

    pub fn is_selected(&self, theme_id: &str) -> bool {
        self.selected().is_some_and(|option| option.id == theme_id)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn option_at_cursor(&self) -> Option<&ThemeOption> {
        self.options.get(self.cursor)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }
}
