// File: src/event.rs
// Purpose: Input events from the rendering layer and their dispatch to the engine

use crate::engine::FormValidationEngine;
use crate::error::FormError;
use crate::field::Field;
use crate::state::ErrorState;
use serde::{Deserialize, Serialize};

/// A user action forwarded by the renderer.
///
/// On the wire each event is one JSON object tagged by `event`:
///
/// ```json
/// {"event":"field_changed","field":"email","value":"jane@example.com"}
/// {"event":"password_visibility_toggled"}
/// {"event":"submit_requested"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    SubmitRequested,
    PasswordVisibilityToggled,
}

/// What an event did, so the renderer knows which view to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A field was stored and its rules re-run
    Validated,
    /// The submit gate passed; show the success view
    Submitted,
    /// The submit gate failed with these errors
    Rejected(ErrorState),
    /// Password masking changed to the carried visibility
    VisibilityChanged(bool),
    /// The form was already submitted; the change had no effect
    Ignored,
}

impl FormEvent {
    pub fn field_changed(field: Field, value: impl Into<String>) -> Self {
        FormEvent::FieldChanged {
            field,
            value: value.into(),
        }
    }

    /// Decode one JSON event line
    pub fn parse_line(line: &str) -> Result<Self, FormError> {
        let value: serde_json::Value = serde_json::from_str(line)?;

        // Report unknown field keys by name rather than as a serde variant error
        if let Some(name) = value.get("field").and_then(|f| f.as_str()) {
            name.parse::<Field>()?;
        }

        Ok(serde_json::from_value(value)?)
    }
}

impl FormValidationEngine {
    /// Apply one renderer event
    pub fn dispatch(&mut self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::FieldChanged { .. } if self.is_submitted() => {
                tracing::warn!("Ignoring field change after submit");
                EventOutcome::Ignored
            }
            FormEvent::FieldChanged { field, value } => {
                self.on_field_change(field, value);
                EventOutcome::Validated
            }
            FormEvent::SubmitRequested => match self.submit() {
                Ok(_) => EventOutcome::Submitted,
                Err(errors) => EventOutcome::Rejected(errors),
            },
            FormEvent::PasswordVisibilityToggled => {
                EventOutcome::VisibilityChanged(self.toggle_password_visibility())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;

    #[test]
    fn test_parse_field_changed() {
        let event =
            FormEvent::parse_line(r#"{"event":"field_changed","field":"pincode","value":"123456"}"#)
                .unwrap();
        assert_eq!(event, FormEvent::field_changed(Field::Pincode, "123456"));
    }

    #[test]
    fn test_parse_unit_events() {
        assert_eq!(
            FormEvent::parse_line(r#"{"event":"submit_requested"}"#).unwrap(),
            FormEvent::SubmitRequested
        );
        assert_eq!(
            FormEvent::parse_line(r#"{"event":"password_visibility_toggled"}"#).unwrap(),
            FormEvent::PasswordVisibilityToggled
        );
    }

    #[test]
    fn test_parse_unknown_field() {
        let err =
            FormEvent::parse_line(r#"{"event":"field_changed","field":"nickname","value":"x"}"#)
                .unwrap_err();
        assert!(matches!(err, FormError::UnknownField(name) if name == "nickname"));
    }

    #[test]
    fn test_parse_malformed_line() {
        let err = FormEvent::parse_line("not json").unwrap_err();
        assert!(matches!(err, FormError::InvalidEvent(_)));

        let err = FormEvent::parse_line(r#"{"event":"reset"}"#).unwrap_err();
        assert!(matches!(err, FormError::InvalidEvent(_)));
    }

    #[test]
    fn test_dispatch_outcomes() {
        let mut engine = FormValidationEngine::new();

        let outcome = engine.dispatch(FormEvent::field_changed(Field::Email, "bad"));
        assert_eq!(outcome, EventOutcome::Validated);
        assert_eq!(engine.error(Field::Email), Some(FieldError::InvalidEmail));

        let outcome = engine.dispatch(FormEvent::PasswordVisibilityToggled);
        assert_eq!(outcome, EventOutcome::VisibilityChanged(true));

        match engine.dispatch(FormEvent::SubmitRequested) {
            EventOutcome::Rejected(errors) => {
                assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
                assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
