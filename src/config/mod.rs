pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, ConfigSource};
pub use types::{OnboardConfig, Timings, ValidationRules};
