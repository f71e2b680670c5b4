//! Request validation at the transport boundary.
//!
//! Request types derive [`validator::Validate`]; [`validate_request`] runs the
//! derived rules and folds any failures into a single [`CoreError::Validation`]
//! so handlers can bail out with `?` before touching a service.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules of `input`.
pub fn validate_request<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten field errors into `"field: message"` fragments, sorted by field so
/// the output is stable across runs.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value ({})", err.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
