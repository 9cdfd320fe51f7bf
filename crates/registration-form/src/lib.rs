//! # registration-form
//!
//! The non-rendering half of a user registration form: thirteen typed
//! fields, per-field rules checked as the user types, and a submit gate
//! that decides when the form is complete.
//!
//! ## Quick Start
//!
//! ```rust
//! use registration_form::{Field, FormValidationEngine};
//!
//! let mut engine = FormValidationEngine::new();
//!
//! let errors = engine.on_field_change(Field::Pincode, "12a456");
//! assert_eq!(errors.message(Field::Pincode), "Pincode must be 6 digits as integers");
//!
//! // Required fields are still empty, so the gate stays closed.
//! let rejected = engine.submit().unwrap_err();
//! assert_eq!(rejected.message(Field::Name), "This field is required");
//! assert!(!engine.is_submitted());
//! ```
//!
//! ## Architecture
//!
//! - [`field`] - the fixed field set, labels and input kinds
//! - [`rules`] - pure field rules (regex and character-class checks)
//! - [`state`] - [`FormState`] and [`ErrorState`] records
//! - [`engine`] - [`FormValidationEngine`], the Editing -> Submitted machine
//! - [`event`] - renderer events and their dispatch
//! - [`view`] - the snapshot a renderer reads after each event

pub mod engine;
pub mod error;
pub mod event;
pub mod field;
pub mod rules;
pub mod state;
pub mod view;

pub use engine::{FormValidationEngine, Phase, Submitted};
pub use error::{ErrorKind, FieldError, FormError};
pub use event::{EventOutcome, FormEvent};
pub use field::{Field, InputKind};
pub use state::{ErrorState, FormState};
pub use view::{FieldView, FormView};
