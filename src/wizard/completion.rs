//! Completion record and the collaborators that consume it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

use super::state::WizardState;
use crate::{OnboardError, Result};

/// Payload produced when the wizard finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub theme: Option<String>,
    pub product: BTreeMap<String, String>,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl CompletionRecord {
    pub fn from_state(state: &WizardState, timestamp: DateTime<Utc>) -> Self {
        Self {
            theme: state.selected_theme().map(str::to_string),
            product: state
                .form_data()
                .iter()
                .map(|(name, value)| (name.as_str().to_string(), value.clone()))
                .collect(),
            timestamp,
        }
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Consumer of completion records
pub trait CompletionSink {
    fn submit(&self, record: &CompletionRecord) -> Result<()>;
}

/// Emits the record as a single log event
#[derive(Debug, Default)]
pub struct LogSink;

impl CompletionSink for LogSink {
    fn submit(&self, record: &CompletionRecord) -> Result<()> {
        let payload = serde_json::to_string(record)?;
        info!(record = %payload, "Onboarding data");
        Ok(())
    }
}

/// Writes the record as pretty JSON to a file
#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CompletionSink for JsonFileSink {
    fn submit(&self, record: &CompletionRecord) -> Result<()> {
        let payload = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, payload).map_err(|e| {
            OnboardError::Submit(format!(
                "Failed to write completion record to {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Fans a record out to several sinks; the first failure stops the fan-out
#[derive(Default)]
pub struct SinkChain {
    sinks: Vec<Box<dyn CompletionSink + Send>>,
}

impl std::fmt::Debug for SinkChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkChain")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl SinkChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl CompletionSink + Send + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

impl CompletionSink for SinkChain {
    fn submit(&self, record: &CompletionRecord) -> Result<()> {
        for sink in &self.sinks {
            sink.submit(record)?;
        }
        Ok(())
    }
}

/// Static thank-you page shown after completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionView {
    pub headline: String,
    pub message: String,
    pub restart_label: &'static str,
}

impl CompletionView {
    pub fn for_brand(brand: &str) -> Self {
        Self {
            headline: format!("Welcome to {}!", brand),
            message: "Your onboarding is complete. We're setting up your account and will send you an email with next steps.".to_string(),
            restart_label: "Start Over",
        }
    }
}
