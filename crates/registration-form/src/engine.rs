// File: src/engine.rs
// Purpose: Form state machine - field changes, the submit gate, password visibility

use crate::error::FieldError;
use crate::field::Field;
use crate::rules;
use crate::state::{ErrorState, FormState};
use crate::view::FormView;

/// Lifecycle of one registration session. There is no way back to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

/// Proof of a successful submit, carrying the values that passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub form: FormState,
}

/// Owns the field values and their errors, and decides when the form is complete.
///
/// Every event is handled completely before the method returns; the engine
/// holds no background work and needs no locking.
#[derive(Debug, Clone, Default)]
pub struct FormValidationEngine {
    form: FormState,
    errors: ErrorState,
    phase: Phase,
    show_password: bool,
}

impl FormValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the password visibility toggle already set
    pub fn with_password_visible(show_password: bool) -> Self {
        Self {
            show_password,
            ..Self::default()
        }
    }

    /// Store a new value and re-run the rules that depend on it.
    ///
    /// Both the changed field and, for password edits, the confirmation are
    /// checked against the values as they stand after this change. Each error
    /// entry is written at most once per call.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) -> &ErrorState {
        if self.phase == Phase::Submitted {
            tracing::warn!("Ignoring change to {} after submit", field);
            return &self.errors;
        }

        self.form.set(field, value.into());

        let verdict = rules::inline_check(field, &self.form).err();
        self.errors.set(field, verdict);

        if field == Field::Password {
            let confirmation =
                rules::inline_check(Field::ConfirmPassword, &self.form).err();
            self.errors.set(Field::ConfirmPassword, confirmation);
        }

        tracing::debug!(
            "Field {} changed: {}",
            field,
            verdict.map(|e| e.message()).unwrap_or("ok")
        );

        &self.errors
    }

    /// The submit gate.
    ///
    /// Succeeds only when every required field is non-blank and no inline
    /// error is outstanding. On failure the required-field errors are merged
    /// into the error state and a copy of it is returned.
    pub fn submit(&mut self) -> Result<Submitted, ErrorState> {
        if self.phase == Phase::Submitted {
            return Ok(Submitted {
                form: self.form.clone(),
            });
        }

        let mut missing = ErrorState::default();
        for field in Field::REQUIRED {
            if let Err(err) = rules::check_required(self.form.get(field)) {
                missing.set(field, Some(err));
            }
        }

        if missing.is_clear() && self.errors.is_clear() {
            self.phase = Phase::Submitted;
            tracing::info!("Registration submitted");
            return Ok(Submitted {
                form: self.form.clone(),
            });
        }

        self.errors.merge(&missing);
        tracing::debug!(
            "Submit rejected: {} field(s) with errors",
            self.errors.iter().filter(|(_, e)| e.is_some()).count()
        );
        Err(self.errors)
    }

    /// Flip password masking; returns the new visibility
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Snapshot for the rendering layer
    pub fn view(&self) -> FormView {
        FormView::from_engine(self)
    }
}
