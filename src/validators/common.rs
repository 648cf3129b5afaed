//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to `ApiError::Validation`.
///
/// Messages are sorted and de-duplicated so the rendered error does not
/// depend on the iteration order of the underlying map.
///
/// # Example
/// ```ignore
/// payload.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    errors.sort();
    errors.dedup();
    ApiError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn messages_are_sorted_and_deduplicated() {
        let mut errors = ValidationErrors::new();
        let mut required = ValidationError::new("required");
        required.message = Some("username is required".into());
        errors.add("username", required.clone());
        errors.add("username", required);
        let mut email = ValidationError::new("length");
        email.message = Some("email is required".into());
        errors.add("email", email);

        match validation_errors_to_api_error(errors) {
            ApiError::Validation(messages) => assert_eq!(
                messages,
                vec!["email is required", "username is required"]
            ),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_message_falls_back_to_field_name() {
        let mut errors = ValidationErrors::new();
        errors.add("id", ValidationError::new("range"));

        match validation_errors_to_api_error(errors) {
            ApiError::Validation(messages) => assert_eq!(messages, vec!["id is invalid"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
