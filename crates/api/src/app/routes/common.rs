use categorydesk_core::RecordId;

use crate::app::errors::ApiError;

/// Parse a numeric path id; anything else is a 400.
pub fn parse_id(raw: &str) -> Result<RecordId, ApiError> {
    Ok(raw.parse::<RecordId>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use categorydesk_core::DomainError;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("7").unwrap(), RecordId::new(7));
    }

    #[test]
    fn garbage_ids_are_validation_errors() {
        let err = parse_id("seven").unwrap_err();
        assert!(matches!(err.domain(), DomainError::Validation(_)));
    }
}
