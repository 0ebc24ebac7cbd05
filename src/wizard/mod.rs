//! Host-independent onboarding wizard core
//!
//! Everything here is driven by explicit calls from a host event loop: user
//! input maps to controller operations and the host calls
//! [`StepController::tick`] with the current time so scheduled transitions fire.

pub mod completion;
pub mod controller;
pub mod fields;
pub mod notification;
pub mod scheduler;
pub mod state;
pub mod theme_selector;
pub mod upload;
pub mod validator;

pub use completion::{CompletionRecord, CompletionSink, CompletionView, JsonFileSink, LogSink, SinkChain};
pub use controller::{Shortcut, StepController, StepOutcome, View};
pub use fields::FieldName;
pub use notification::{Notification, Severity, ToastPhase};
pub use state::{MarkerState, ProgressIndicator, Step, StepView, WizardState};
pub use upload::{DragEvent, FileCandidate};
