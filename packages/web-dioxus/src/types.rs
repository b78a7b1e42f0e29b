//! Type definitions for GraphQL API responses
//!
//! Wire records are loosely typed (string tags, unchecked counts); anything
//! entering the discovery workflow is validated into `discovery` entities at
//! this boundary rather than threaded through as untyped data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use discovery::{DiscoveredItem, DiscoveryUser, FeedError, SourceTag};

// ============================================================================
// Discovery Feed Types
// ============================================================================

/// A discovered application as the feed reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredAppDto {
    pub id: String,
    pub name: String,
    /// Free-form source tags; unknown tags are dropped on ingestion.
    pub source_icons: Vec<String>,
    pub users: Vec<DiscoveredAppUserDto>,
    pub last_used: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredAppUserDto {
    pub email: String,
    pub count: u32,
}

impl DiscoveredAppDto {
    /// Validate this record into a workflow item.
    pub fn into_item(self) -> Result<DiscoveredItem, FeedError> {
        let sources: Vec<SourceTag> = self
            .source_icons
            .iter()
            .filter_map(|tag| SourceTag::parse(tag))
            .collect();
        let users = self
            .users
            .into_iter()
            .map(|u| DiscoveryUser {
                email: u.email,
                count: u.count,
            })
            .collect();
        DiscoveredItem::new(self.id, self.name, sources, users, self.last_used)
    }
}

// ============================================================================
// Client Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub active_contracts: Option<i32>,
    pub created_at: String,
}

// ============================================================================
// Lead Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Converted => "Converted",
            LeadStatus::Lost => "Lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: LeadStatus,
    pub source: Option<String>,
    pub created_at: String,
}

// ============================================================================
// Category Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub subcategories: Option<Vec<Subcategory>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Contract Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    Draft,
    Active,
    Expired,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub title: String,
    pub status: ContractStatus,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub created_at: String,
}

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub member_id: Uuid,
    pub email: String,
    pub is_admin: bool,
}

// ============================================================================
// GraphQL Response Wrappers
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDiscoveriesResponse {
    pub discoveries: Vec<DiscoveredAppDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClientsResponse {
    pub clients: Vec<Client>,
}

/// `client` is null when the id does not exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClientResponse {
    pub client: Option<Client>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLeadsResponse {
    pub leads: Vec<Lead>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetContractsResponse {
    pub contracts: Vec<Contract>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_drops_unknown_source_tags() {
        let dto = DiscoveredAppDto {
            id: "d1".into(),
            name: "Figma".into(),
            source_icons: vec![
                "google_workspace".into(),
                "slack_connector".into(),
                "chrome_extension".into(),
            ],
            users: vec![DiscoveredAppUserDto {
                email: "kim@example.com".into(),
                count: 2,
            }],
            last_used: "2 days ago".into(),
        };

        let item = dto.into_item().unwrap();
        assert_eq!(
            item.sources,
            vec![SourceTag::GoogleWorkspace, SourceTag::ChromeExtension]
        );
    }

    #[test]
    fn test_client_detail_response_handles_missing_client() {
        let missing: GetClientResponse = serde_json::from_str(r#"{"client": null}"#).unwrap();
        assert!(missing.client.is_none());

        let found: GetClientResponse = serde_json::from_str(
            r#"{
                "client": {
                    "id": "c1",
                    "name": "Acme Co",
                    "contactEmail": "ops@acme.example",
                    "phone": null,
                    "category": "Manufacturing",
                    "activeContracts": 2,
                    "createdAt": "2024-03-01"
                }
            }"#,
        )
        .unwrap();
        let client = found.client.unwrap();
        assert_eq!(client.name, "Acme Co");
        assert_eq!(client.active_contracts, Some(2));
    }

    #[test]
    fn test_dto_with_invalid_record_fails_validation() {
        let dto = DiscoveredAppDto {
            id: String::new(),
            name: "Figma".into(),
            source_icons: vec![],
            users: vec![],
            last_used: String::new(),
        };
        assert!(dto.into_item().is_err());
    }
}
