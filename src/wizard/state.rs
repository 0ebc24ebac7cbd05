use std::collections::BTreeMap;

use super::fields::FieldName;

/// Last valid value per field
pub type FormData = BTreeMap<FieldName, String>;

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Theme = 1,
    Product = 2,
    Pricing = 3,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Theme, Step::Product, Step::Pricing];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Step> {
        match number {
            1 => Some(Step::Theme),
            2 => Some(Step::Product),
            3 => Some(Step::Pricing),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Theme => "Choose a Theme",
            Step::Product => "Product Details",
            Step::Pricing => "Pricing & Stock",
        }
    }
}

/// Session state owned by the step controller
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub(crate) current_step: Step,
    pub(crate) selected_theme: Option<String>,
    pub(crate) form_data: FormData,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: Step::Theme,
            selected_theme: None,
            form_data: FormData::new(),
        }
    }
}

impl WizardState {
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn selected_theme(&self) -> Option<&str> {
        self.selected_theme.as_deref()
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }
}

/// Display state of one progress marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Completed,
    Active,
    Neutral,
}

/// Progress indicator: one marker per step, one connecting line between neighbours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressIndicator {
    pub markers: Vec<MarkerState>,
    pub lines: Vec<bool>,
}

impl ProgressIndicator {
    pub fn for_step(current: Step) -> Self {
        let current = current.number() as usize;
        let markers = Step::ALL
            .iter()
            .map(|step| {
                let number = step.number() as usize;
                if number < current {
                    MarkerState::Completed
                } else if number == current {
                    MarkerState::Active
                } else {
                    MarkerState::Neutral
                }
            })
            .collect();
        let lines = (0..Step::ALL.len() - 1).map(|index| index + 1 < current).collect();

        Self { markers, lines }
    }
}

/// Result of `StepController::render`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// The single step marked active
    pub active: Step,
    pub progress: ProgressIndicator,
    /// True while the step's fade-in is running
    pub fading_in: bool,
    /// Whether the step's continue control is enabled
    pub advance_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_bounds() {
        assert_eq!(Step::Theme.prev(), None);
        assert_eq!(Step::Theme.next(), Some(Step::Product));
        assert_eq!(Step::Pricing.next(), None);
        assert!(Step::Pricing.is_last());
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
    }

    #[test]
    fn test_progress_for_last_step() {
        let progress = ProgressIndicator::for_step(Step::Pricing);
        assert_eq!(
            progress.markers,
            vec![MarkerState::Completed, MarkerState::Completed, MarkerState::Active]
        );
        assert_eq!(progress.lines, vec![true, true]);
    }
}
