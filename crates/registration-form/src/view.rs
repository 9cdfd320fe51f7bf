// File: src/view.rs
// Purpose: Read-only snapshot handed to the rendering layer after each event

use crate::engine::FormValidationEngine;
use crate::field::{Field, InputKind};
use serde::Serialize;

/// One input as the renderer should draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    /// Input type after applying password visibility
    pub input_kind: InputKind,
    /// Error message, "" when the field is clear
    pub error: &'static str,
    /// Must be non-blank at submit time
    pub required: bool,
}

impl FieldView {
    pub fn is_masked(&self) -> bool {
        self.input_kind == InputKind::Password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub submitted: bool,
    pub show_password: bool,
    pub fields: Vec<FieldView>,
}

impl FormView {
    pub const TITLE: &'static str = "Registration Form";
    pub const SUCCESS_MESSAGE: &'static str = "Registration successful!";

    pub(crate) fn from_engine(engine: &FormValidationEngine) -> Self {
        let show_password = engine.show_password();
        let fields = engine
            .form()
            .iter()
            .map(|(field, value)| FieldView {
                field,
                label: field.label(),
                value: value.to_string(),
                input_kind: visible_kind(field, show_password),
                error: engine.errors().message(field),
                required: field.is_required(),
            })
            .collect();

        Self {
            submitted: engine.is_submitted(),
            show_password,
            fields,
        }
    }

    pub fn title(&self) -> &'static str {
        Self::TITLE
    }

    pub fn field(&self, field: Field) -> &FieldView {
        // `fields` is built in Field::ALL order
        &self.fields[field.index()]
    }

    /// Label for the visibility toggle button
    pub fn toggle_label(&self) -> &'static str {
        if self.show_password {
            "Hide Password"
        } else {
            "Show Password"
        }
    }
}

// The confirmation input stays masked regardless of the toggle.
fn visible_kind(field: Field, show_password: bool) -> InputKind {
    match field {
        Field::Password if show_password => InputKind::Text,
        other => other.input_kind(),
    }
}
