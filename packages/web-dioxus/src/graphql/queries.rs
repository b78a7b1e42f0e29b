//! GraphQL query definitions

// ============================================================================
// DISCOVERY QUERIES
// ============================================================================

pub const GET_DISCOVERIES: &str = r#"
  query GetDiscoveries {
    discoveries {
      id
      name
      sourceIcons
      users {
        email
        count
      }
      lastUsed
    }
  }
"#;

// ============================================================================
// ADMIN QUERIES
// ============================================================================

pub const GET_CLIENTS: &str = r#"
  query GetClients($limit: Int) {
    clients(limit: $limit) {
      id
      name
      contactEmail
      phone
      category
      activeContracts
      createdAt
    }
  }
"#;

pub const GET_CLIENT: &str = r#"
  query GetClient($id: ID!) {
    client(id: $id) {
      id
      name
      contactEmail
      phone
      category
      activeContracts
      createdAt
    }
  }
"#;

pub const GET_LEADS: &str = r#"
  query GetLeads($limit: Int) {
    leads(limit: $limit) {
      id
      name
      email
      phone
      status
      source
      createdAt
    }
  }
"#;

pub const GET_CATEGORIES: &str = r#"
  query GetCategories {
    categories {
      id
      name
      description
      subcategories {
        id
        name
      }
    }
  }
"#;

pub const GET_CONTRACTS: &str = r#"
  query GetContracts($limit: Int) {
    contracts(limit: $limit) {
      id
      clientId
      clientName
      title
      status
      startsAt
      endsAt
      createdAt
    }
  }
"#;

pub const GET_ADMIN_STATS: &str = r#"
  query GetAdminStats {
    clients { id }
    leads { id status }
    contracts { id status }
    discoveries { id }
  }
"#;
