//! Terminal-side UI state: keyboard focus and text input buffers

use std::collections::HashMap;
use tui_input::Input;

use crate::wizard::fields::FieldKind;
use crate::wizard::{FieldName, Step, StepController};

/// Focusable control on the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Themes,
    Field(FieldName),
    Upload,
    Back,
    Continue,
}

/// Tab order of a step's controls
pub fn focus_order(step: Step) -> Vec<Focus> {
    match step {
        Step::Theme => vec![Focus::Themes, Focus::Continue],
        Step::Product => vec![
            Focus::Field(FieldName::ProductType),
            Focus::Field(FieldName::ProductCategory),
            Focus::Field(FieldName::ProductName),
            Focus::Field(FieldName::ProductDescription),
            Focus::Upload,
            Focus::Back,
            Focus::Continue,
        ],
        Step::Pricing => vec![
            Focus::Field(FieldName::NetPrice),
            Focus::Field(FieldName::ListPrice),
            Focus::Field(FieldName::StockLevel),
            Focus::Back,
            Focus::Continue,
        ],
    }
}

#[derive(Debug)]
pub struct UiState {
    pub focus: Focus,
    /// Edit buffers for free-text fields
    pub inputs: HashMap<FieldName, Input>,
    /// Open file path prompt (the picker / drop zone)
    pub path_prompt: Option<Input>,
}

impl UiState {
    pub fn new(controller: &StepController) -> Self {
        let inputs = controller
            .form()
            .iter()
            .filter(|field| !matches!(field.spec.kind, FieldKind::Choice(_)))
            .map(|field| (field.name(), Input::new(field.value.clone())))
            .collect();

        Self {
            focus: focus_order(controller.current_step())[0],
            inputs,
            path_prompt: None,
        }
    }

    /// Focus the first control of `step`
    pub fn reset_focus(&mut self, step: Step) {
        self.focus = focus_order(step)[0];
    }

    /// Move focus forward or backward. Returns the field that lost focus, if any.
    pub fn move_focus(&mut self, step: Step, forward: bool) -> Option<FieldName> {
        let order = focus_order(step);
        let position = order.iter().position(|focus| *focus == self.focus).unwrap_or(0);
        let next = if forward {
            (position + 1) % order.len()
        } else {
            (position + order.len() - 1) % order.len()
        };

        let blurred = match self.focus {
            Focus::Field(name) => Some(name),
            _ => None,
        };
        self.focus = order[next];
        blurred
    }

    pub fn focused_field(&self) -> Option<FieldName> {
        match self.focus {
            Focus::Field(name) => Some(name),
            _ => None,
        }
    }

    pub fn input(&self, name: FieldName) -> Option<&Input> {
        self.inputs.get(&name)
    }
}
