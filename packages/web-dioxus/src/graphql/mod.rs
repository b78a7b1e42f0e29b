//! GraphQL wire layer: client plus the query/mutation documents.

mod client;
mod mutations;
mod queries;

pub use client::{ClientError, GraphQLClient};
pub use mutations::{LOGIN, UPDATE_LEAD_STATUS};
pub use queries::{
    GET_ADMIN_STATS, GET_CATEGORIES, GET_CLIENT, GET_CLIENTS, GET_CONTRACTS, GET_DISCOVERIES,
    GET_LEADS,
};

#[cfg(feature = "server")]
pub use client::server_client;
