//! Form fields of the product and pricing steps

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::state::Step;
use crate::config::OnboardConfig;
use crate::OnboardError;

/// Known form fields, serialized with their markup names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    ProductType,
    ProductCategory,
    ProductName,
    ProductDescription,
    NetPrice,
    ListPrice,
    StockLevel,
}

/// Fields that are always required, regardless of the markup flag
pub const ALWAYS_REQUIRED: [FieldName; 3] = [
    FieldName::ProductType,
    FieldName::ProductCategory,
    FieldName::ProductName,
];

/// Fields that gate leaving the product step
pub const PRODUCT_STEP_REQUIRED: [FieldName; 3] = ALWAYS_REQUIRED;

/// Fields that gate the pricing step. The product name is checked again here.
pub const PRICING_STEP_REQUIRED: [FieldName; 4] = [
    FieldName::ProductName,
    FieldName::NetPrice,
    FieldName::ListPrice,
    FieldName::StockLevel,
];

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::ProductType,
        FieldName::ProductCategory,
        FieldName::ProductName,
        FieldName::ProductDescription,
        FieldName::NetPrice,
        FieldName::ListPrice,
        FieldName::StockLevel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::ProductType => "productType",
            FieldName::ProductCategory => "productCategory",
            FieldName::ProductName => "productName",
            FieldName::ProductDescription => "productDescription",
            FieldName::NetPrice => "netPrice",
            FieldName::ListPrice => "listPrice",
            FieldName::StockLevel => "stockLevel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::ProductType => "Product Type",
            FieldName::ProductCategory => "Category",
            FieldName::ProductName => "Product Name",
            FieldName::ProductDescription => "Description",
            FieldName::NetPrice => "Net Price",
            FieldName::ListPrice => "List Price",
            FieldName::StockLevel => "Stock Level",
        }
    }

    /// Step whose screen shows this field
    pub fn step(&self) -> Step {
        match self {
            FieldName::ProductType
            | FieldName::ProductCategory
            | FieldName::ProductName
            | FieldName::ProductDescription => Step::Product,
            FieldName::NetPrice | FieldName::ListPrice | FieldName::StockLevel => Step::Pricing,
        }
    }

    pub fn is_always_required(&self) -> bool {
        ALWAYS_REQUIRED.contains(self)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = OnboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| OnboardError::UnknownField(s.to_string()))
    }
}

/// Input control kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    /// Single choice out of fixed options; empty until chosen
    Choice(Vec<String>),
}

/// Static description of a field as laid out in the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub kind: FieldKind,
    /// The markup-level required flag
    pub required: bool,
    pub placeholder: &'static str,
}

/// A field control: its current raw value and inline error annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            error: None,
        }
    }

    pub fn name(&self) -> FieldName {
        self.spec.name
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Step through the options of a choice field; no-op for other kinds
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        let FieldKind::Choice(options) = &self.spec.kind else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        let position = options.iter().position(|option| *option == self.value);
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.value = options[next].clone();
        true
    }
}

/// All field controls of the wizard, in layout order
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn from_config(config: &OnboardConfig) -> Self {
        let spec = |name: FieldName, kind: FieldKind, required: bool, placeholder: &'static str| FieldSpec {
            name,
            kind,
            required,
            placeholder,
        };
        let fields = vec![
            spec(
                FieldName::ProductType,
                FieldKind::Choice(config.product_types.clone()),
                true,
                "Select product type",
            ),
            spec(
                FieldName::ProductCategory,
                FieldKind::Choice(config.product_categories.clone()),
                true,
                "Select category",
            ),
            spec(FieldName::ProductName, FieldKind::Text, true, "Enter product name"),
            spec(
                FieldName::ProductDescription,
                FieldKind::TextArea,
                false,
                "Describe your product",
            ),
            spec(FieldName::NetPrice, FieldKind::Number, true, "0.00"),
            spec(FieldName::ListPrice, FieldKind::Number, true, "0.00"),
            spec(FieldName::StockLevel, FieldKind::Number, true, "0"),
        ];

        Self {
            fields: fields.into_iter().map(FormField::new).collect(),
        }
    }

    // Controls are stored in `FieldName::ALL` order, so the discriminant is the index.
    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name as usize]
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[name as usize]
    }

    /// Field controls shown on a step, in layout order
    pub fn fields_for_step(&self, step: Step) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(move |field| field.name().step() == step)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }
}
