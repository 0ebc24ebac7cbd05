use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::wizard::theme_selector::ThemeOption;

/// Root configuration for the onboarding wizard (onboard.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardConfig {
    /// Product brand shown in the header and on the completion page
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Theme options offered on the first step, in display order
    #[serde(default = "default_themes")]
    pub themes: Vec<ThemeOption>,

    /// Options for the product type choice field
    #[serde(default = "default_product_types")]
    pub product_types: Vec<String>,

    /// Options for the product category choice field
    #[serde(default = "default_product_categories")]
    pub product_categories: Vec<String>,

    #[serde(default)]
    pub validation: ValidationRules,

    #[serde(default)]
    pub timings: Timings,
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            themes: default_themes(),
            product_types: default_product_types(),
            product_categories: default_product_categories(),
            validation: ValidationRules::default(),
            timings: Timings::default(),
        }
    }
}

/// Length limits used by field-specific validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Minimum number of characters in a product name
    #[serde(default = "default_product_name_min")]
    pub product_name_min: usize,

    /// A description must stay at or below this many characters
    #[serde(default = "default_description_max")]
    pub description_max: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            product_name_min: default_product_name_min(),
            description_max: default_description_max(),
        }
    }
}

/// Delays for UI transitions, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Delay before a new notification slides into view
    #[serde(default = "default_notification_show_ms")]
    pub notification_show_ms: u64,

    /// Time from creation until a notification starts sliding out
    #[serde(default = "default_notification_dismiss_ms")]
    pub notification_dismiss_ms: u64,

    /// Length of the slide-out before the notification is removed
    #[serde(default = "default_notification_slide_ms")]
    pub notification_slide_ms: u64,

    /// Length of the fade-in applied to a freshly shown step
    #[serde(default = "default_step_fade_ms")]
    pub step_fade_ms: u64,

    /// Delay between a successful completion and the completion page
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_show_ms: default_notification_show_ms(),
            notification_dismiss_ms: default_notification_dismiss_ms(),
            notification_slide_ms: default_notification_slide_ms(),
            step_fade_ms: default_step_fade_ms(),
            completion_delay_ms: default_completion_delay_ms(),
        }
    }
}

impl Timings {
    pub fn notification_show(&self) -> Duration {
        Duration::from_millis(self.notification_show_ms)
    }

    pub fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }

    pub fn notification_slide(&self) -> Duration {
        Duration::from_millis(self.notification_slide_ms)
    }

    pub fn step_fade(&self) -> Duration {
        Duration::from_millis(self.step_fade_ms)
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }
}

fn default_brand() -> String {
    "Cloudnix".to_string()
}

fn default_themes() -> Vec<ThemeOption> {
    vec![
        ThemeOption::new("startup", "Startup", "Bold colors and a fast, energetic layout"),
        ThemeOption::new("corporate", "Corporate", "Clean, structured and trustworthy"),
        ThemeOption::new("creative", "Creative", "Expressive typography for makers and studios"),
        ThemeOption::new("minimal", "Minimal", "Plenty of whitespace, nothing in the way"),
    ]
}

fn default_product_types() -> Vec<String> {
    ["Physical Product", "Digital Product", "Service", "Subscription"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_product_categories() -> Vec<String> {
    [
        "Electronics",
        "Clothing & Apparel",
        "Home & Garden",
        "Software",
        "Food & Beverage",
        "Other",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_product_name_min() -> usize {
    2
}

fn default_description_max() -> usize {
    200
}

fn default_notification_show_ms() -> u64 {
    100
}

fn default_notification_dismiss_ms() -> u64 {
    5000
}

fn default_notification_slide_ms() -> u64 {
    300
}

fn default_step_fade_ms() -> u64 {
    500
}

fn default_completion_delay_ms() -> u64 {
    2000
}
