use uuid::Uuid;

use crate::error::ApiError;

/// Owner gate applied before any mutation. The row's owner id comes from a
/// fresh read, never from the client.
pub fn authorize_owner(owner_id: Uuid, requester_id: Uuid, action: &str) -> Result<(), ApiError> {
    if owner_id != requester_id {
        return Err(ApiError::forbidden(format!(
            "Not authorized to {} this resource",
            action
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn owner_passes() {
        let id = Uuid::new_v4();
        assert!(authorize_owner(id, id, "edit").is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let err = authorize_owner(Uuid::new_v4(), Uuid::new_v4(), "delete").unwrap_err();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert!(err.to_string().contains("delete"));
    }
}
