//! Bridge from `validator` derive output to the domain error model.

use categorydesk_core::{DomainResult, ValidationErrors};
use heck::ToLowerCamelCase;
use validator::Validate;

/// Run the derived validation rules for `input`.
///
/// Field names are reported in their wire (camelCase) form, sorted so the
/// error list is stable across runs.
pub fn check<T: Validate>(input: &T) -> DomainResult<()> {
    match input.validate() {
        Ok(()) => Ok(()),
        Err(errs) => into_domain(&errs).into_result(),
    }
}

pub fn into_domain(errs: &validator::ValidationErrors) -> ValidationErrors {
    let mut fields: Vec<_> = errs
        .field_errors()
        .into_iter()
        .map(|(field, list)| (field.to_string().to_lower_camel_case(), list))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = ValidationErrors::new();
    for (field, list) in fields {
        for e in list.iter() {
            let message = e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string());
            out.push(field.clone(), message);
        }
    }
    out
}
