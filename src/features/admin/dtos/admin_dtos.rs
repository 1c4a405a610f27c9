use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// =============================================================================
// BULK ACTIONS
// =============================================================================

/// Records selected for a bulk action
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkActionDto {
    #[validate(length(min = 1, message = "Select at least one record"))]
    pub ids: Vec<Uuid>,
}

/// Outcome of a bulk action
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkActionResultDto {
    pub action: String,
    /// Rows matched by the selection, including rows already in the target state
    pub affected: u64,
}

/// A bulk action offered for a resource
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminActionDto {
    pub action: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_action_requires_ids() {
        let empty: BulkActionDto = serde_json::from_str(r#"{"ids": []}"#).unwrap();
        assert!(empty.validate().is_err());

        let one: BulkActionDto =
            serde_json::from_str(r#"{"ids": ["0190f3a4-8a5e-7cc0-9d3c-2b1f7e8e9a10"]}"#).unwrap();
        assert!(one.validate().is_ok());
    }

    #[test]
    fn test_bulk_action_rejects_malformed_ids() {
        assert!(serde_json::from_str::<BulkActionDto>(r#"{"ids": ["not-a-uuid"]}"#).is_err());
    }
}
