use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::app::db;

/// Request body for creating a board. `name` is optional here so a missing
/// name surfaces as a validation error rather than a body rejection.
///
/// Length limits count characters and apply to the trimmed values; call
/// [`CreateBoardRequest::trimmed`] before `validate`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateBoardRequest {
    #[validate(length(max = 255, message = "Board name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 2000, message = "Board description must be at most 2000 characters"))]
    pub description: Option<String>,
}

impl CreateBoardRequest {
    /// Trim both fields. A blank description becomes `None`; a blank name stays empty.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.map(|n| n.trim().to_string()),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}

/// First field message from a failed validation, name before description.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    ["name", "description"]
        .iter()
        .filter_map(|field| fields.get(field))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request body".to_string())
}

/// Full board record, as returned from create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub organization_id: String,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<db::boards::Board> for BoardResponse {
    fn from(board: db::boards::Board) -> Self {
        Self {
            id: board.id,
            name: board.name,
            description: board.description,
            organization_id: board.organization_id,
            created_by: board.created_by,
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

/// Externally exposed board projection used by list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummaryResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<db::boards::BoardSummary> for BoardSummaryResponse {
    fn from(board: db::boards::BoardSummary) -> Self {
        Self {
            id: board.id,
            name: board.name,
            description: board.description,
            created_by: board.created_by,
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListBoardsResponse {
    pub boards: Vec<BoardSummaryResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBoardResponse {
    pub board: BoardResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: Option<&str>) -> CreateBoardRequest {
        CreateBoardRequest {
            name: Some(name.to_string()),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn padding_does_not_count_towards_limits() {
        let padded = request(&format!("Sprint{}", " ".repeat(300)), Some(&format!("plans{}", " ".repeat(2100))));
        let trimmed = padded.trimmed();
        assert!(trimmed.validate().is_ok());
        assert_eq!(trimmed.name.as_deref(), Some("Sprint"));
        assert_eq!(trimmed.description.as_deref(), Some("plans"));
    }

    #[test]
    fn limits_are_counted_in_characters() {
        assert!(request(&"é".repeat(255), None).trimmed().validate().is_ok());
        let errors = request(&"é".repeat(256), None).trimmed().validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Board name must be at most 255 characters");
    }

    #[test]
    fn each_field_reports_its_own_message() {
        let errors = request("Sprint", Some(&"x".repeat(2001))).trimmed().validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "Board description must be at most 2000 characters"
        );
    }

    #[test]
    fn blank_description_is_dropped() {
        assert_eq!(request("Sprint", Some("   ")).trimmed().description, None);
    }
}
