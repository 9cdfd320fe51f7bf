// File: src/render.rs
// Purpose: Terminal rendering of a FormView (text or JSON)

use crate::config::DisplayConfig;
use anyhow::Result;
use registration_form::{FieldView, FormView};

/// Output format for the final view
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

pub fn render(view: &FormView, format: Format, display: &DisplayConfig) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(view, display)),
        Format::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

/// Either the success message or the form with inline errors
pub fn render_text(view: &FormView, display: &DisplayConfig) -> String {
    if view.submitted {
        return format!("{}\n", FormView::SUCCESS_MESSAGE);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", view.title()));
    out.push_str(&format!("{}\n", "=".repeat(view.title().len())));

    for field in &view.fields {
        out.push_str(&format!(
            "{:<24} {}\n",
            field.label,
            shown_value(field, display.mask_char)
        ));
        if field.field == registration_form::Field::Password {
            out.push_str(&format!("{:<24} [{}]\n", "", view.toggle_label()));
        }
        if !field.error.is_empty() {
            out.push_str(&format!("{:<24} ! {}\n", "", field.error));
        }
    }

    out
}

fn shown_value(field: &FieldView, mask_char: char) -> String {
    if field.is_masked() {
        std::iter::repeat(mask_char)
            .take(field.value.chars().count())
            .collect()
    } else {
        field.value.clone()
    }
}
