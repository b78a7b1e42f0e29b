//! Thin GraphQL-over-HTTP client.
//!
//! The endpoint is resolved at each call site and handed to the client
//! explicitly. There is deliberately no module-global endpoint or token:
//! captured-at-load globals go stale across login/logout.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct RequestBody<V: Serialize> {
    query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<V>,
}

#[derive(Debug, Deserialize)]
struct ResponseBody<T> {
    data: Option<T>,
    errors: Option<Vec<ResponseError>>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
    #[serde(default)]
    path: Option<Vec<String>>,
}

/// Error type for GraphQL operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("graphql error: {0}")]
    GraphQL(String),

    #[error("response contained no data")]
    NoData,
}

#[derive(Clone)]
pub struct GraphQLClient {
    http: reqwest::Client,
    endpoint: String,
    bearer: Option<String>,
}

impl GraphQLClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            bearer: None,
        }
    }

    /// Attach a bearer token to every request this client sends.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Execute a query and unwrap the `data` envelope.
    ///
    /// GraphQL reports errors in-band; all error messages are joined into a
    /// single `ClientError::GraphQL` so callers see the full picture.
    pub async fn query<V, R>(&self, query: &'static str, variables: Option<V>) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&RequestBody { query, variables });

        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let body: ResponseBody<R> = request.send().await?.json().await?;

        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let joined = errors
                    .iter()
                    .map(|e| match &e.path {
                        Some(path) => format!("{} (at {})", e.message, path.join(".")),
                        None => e.message.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(ClientError::GraphQL(joined));
            }
        }

        body.data.ok_or(ClientError::NoData)
    }

    /// Mutations travel the same wire shape as queries.
    pub async fn mutate<V, R>(&self, mutation: &'static str, variables: Option<V>) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        self.query(mutation, variables).await
    }
}

/// Build a client for server-side requests. The endpoint is read from the
/// environment on every call so a redeploy or env change takes effect
/// without restarting anything that cached it.
#[cfg(feature = "server")]
pub fn server_client() -> GraphQLClient {
    let endpoint =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());
    GraphQLClient::new(endpoint)
}
