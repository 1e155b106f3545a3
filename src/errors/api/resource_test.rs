#[cfg(test)]
mod tests {
    use crate::errors::ApiError;
    use crate::errors::internal::{InternalError, ItemError, PersonError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let db_err = DbErr::Custom("disk I/O error".to_string());
        let internal_err = InternalError::database("list_items", db_err);
        let api_err = ApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.message(), "An internal error occurred");
    }

    #[test]
    fn test_transaction_error_does_not_leak_details() {
        let db_err = DbErr::Custom("database is locked".to_string());
        let api_err = ApiError::from_internal_error(InternalError::transaction_begin(db_err));

        assert_eq!(api_err.status_code(), 500);
        assert!(!api_err.message().contains("locked"));
    }

    #[test]
    fn test_item_not_found_converts_to_404() {
        let api_err = ApiError::from_internal_error(ItemError::NotFound(7).into());

        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.message(), "Item not found: 7");
        assert!(matches!(api_err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_unresolved_person_reference_converts_to_404() {
        let api_err = ApiError::from_internal_error(ItemError::PersonNotFound(42).into());

        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.message(), "Person not found: 42");
    }

    #[test]
    fn test_person_not_found_converts_to_404() {
        let api_err = ApiError::from(InternalError::from(PersonError::NotFound(10)));

        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.to_string(), "Person not found: 10");
    }

    #[test]
    fn test_validation_error_converts_to_400() {
        let internal_err = InternalError::validation("name", "must not be empty");
        let api_err = ApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 400);
        assert_eq!(api_err.message(), "Invalid name: must not be empty");
    }
}
