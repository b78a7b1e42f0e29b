//! GraphQL mutation definitions

// ============================================================================
// AUTH MUTATIONS
// ============================================================================

pub const LOGIN: &str = r#"
  mutation Login($email: String!, $password: String!) {
    login(email: $email, password: $password)
  }
"#;

// ============================================================================
// LEAD MUTATIONS
// ============================================================================

pub const UPDATE_LEAD_STATUS: &str = r#"
  mutation UpdateLeadStatus($leadId: ID!, $status: LeadStatusInput!) {
    updateLeadStatus(leadId: $leadId, status: $status) {
      id
      status
    }
  }
"#;
