//! Field-level and step-level validation

use tracing::debug;

use super::fields::{
    FieldKind, FieldName, Form, FormField, PRICING_STEP_REQUIRED, PRODUCT_STEP_REQUIRED,
};
use super::state::{FormData, Step};
use crate::config::ValidationRules;

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Validates fields and records valid values into the form data
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator {
    rules: ValidationRules,
}

impl FormValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate one field. The previous annotation is always cleared first; on
    /// success the trimmed value is written to `form_data`, on failure the field
    /// gets an error annotation and `form_data` is left untouched.
    ///
    /// A number field whose text is not a finite number counts as empty.
    pub fn validate_field(&self, field: &mut FormField, form_data: &mut FormData) -> bool {
        let value = match field.spec.kind {
            FieldKind::Number => sanitize_number(&field.value),
            _ => field.value.trim().to_string(),
        };
        let name = field.name();

        clear_field_error(field);

        let required = field.spec.required || name.is_always_required();
        if required && value.is_empty() {
            return reject(field, REQUIRED_MESSAGE.to_string());
        }

        if let Some(message) = self.field_rule_violation(name, &value) {
            return reject(field, message);
        }

        debug!(field = %name, "Field valid");
        form_data.insert(name, value);
        true
    }

    /// Validate every gating field of a step; every field is evaluated so each
    /// offending one is annotated
    pub fn validate_step(&self, step: Step, form: &mut Form, form_data: &mut FormData) -> bool {
        let mut valid = true;
        for &name in required_fields(step) {
            if !self.validate_field(form.field_mut(name), form_data) {
                valid = false;
            }
        }
        debug!(step = step.number(), valid, "Step validated");
        valid
    }

    fn field_rule_violation(&self, name: FieldName, value: &str) -> Option<String> {
        let length = value.chars().count();
        match name {
            FieldName::ProductName if length < self.rules.product_name_min => Some(format!(
                "Product name must be at least {} characters",
                self.rules.product_name_min
            )),
            FieldName::ProductDescription if length > self.rules.description_max => Some(format!(
                "Description must be less than {} characters",
                self.rules.description_max
            )),
            _ => None,
        }
    }
}

/// Fields that gate leaving `step`
pub fn required_fields(step: Step) -> &'static [FieldName] {
    match step {
        Step::Theme => &[],
        Step::Product => &PRODUCT_STEP_REQUIRED,
        Step::Pricing => &PRICING_STEP_REQUIRED,
    }
}

/// Drop the error annotation without re-running validation (input event)
pub fn clear_field_error(field: &mut FormField) {
    field.error = None;
}

fn sanitize_number(raw: &str) -> String {
    let value = raw.trim();
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => value.to_string(),
        _ => String::new(),
    }
}

fn reject(field: &mut FormField, message: String) -> bool {
    debug!(field = %field.name(), %message, "Field invalid");
    field.error = Some(message);
    false
}
