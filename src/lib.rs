pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod wizard;

pub use error::{OnboardError, Result};
