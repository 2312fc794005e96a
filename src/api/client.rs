// src/api/client.rs
//! HTTP client for the Confluence GraphQL endpoint.
//!
//! A thin wrapper around reqwest. One client is shared by every request; the
//! site and credential vary per call, so they are applied per request rather
//! than as default headers.

use super::parser::parse_page_tree_response;
use super::query::GraphQlRequest;
use crate::error::AppError;
use crate::model::PageTreeNode;
use crate::types::{Credential, Domain, PageId};
use reqwest::{header, Client, Response};
use std::time::Duration;

/// Performs page tree queries against `https://{domain}.atlassian.net/cgraphql`.
#[derive(Clone)]
pub struct ConfluenceHttpClient {
    client: Client,
    depth: u8,
    endpoint: Option<String>,
}

impl ConfluenceHttpClient {
    /// Creates a client whose calls time out after `timeout` and whose tree
    /// queries reach `depth` levels below the requested page.
    pub fn new(timeout: Duration, depth: u8) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(crate::constants::SERVER_HEADER_VALUE)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            depth,
            endpoint: None,
        })
    }

    /// Sends every query to `endpoint` instead of the site's own `/cgraphql`.
    ///
    /// Page URLs in the bookmark file still point at the requested site.
    pub fn with_graphql_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Creates the headers for one authenticated GraphQL call.
    fn create_headers(credential: &Credential) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let mut auth_value = header::HeaderValue::from_str(&credential.basic_auth_header())
            .map_err(|e| {
                AppError::Validation(crate::types::ValidationError::InvalidCredential {
                    reason: e.to_string(),
                })
            })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Posts a GraphQL document to the site's endpoint.
    pub async fn post_graphql(
        &self,
        domain: &Domain,
        credential: &Credential,
        body: &GraphQlRequest<'_>,
    ) -> Result<Response, AppError> {
        let url = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => domain.graphql_endpoint(),
        };
        log::debug!("POST {} ({})", url, body.operation_name);

        let response = self
            .client
            .post(&url)
            .headers(Self::create_headers(credential)?)
            .json(body)
            .send()
            .await?;

        log::debug!("{} responded {}", url, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::PageTreeSource for ConfluenceHttpClient {
    async fn fetch_page_tree(
        &self,
        domain: &Domain,
        credential: &Credential,
        page_id: &PageId,
    ) -> Result<PageTreeNode, AppError> {
        let body = GraphQlRequest::page_tree(page_id, self.depth);
        let response = self.post_graphql(domain, credential, &body).await?;
        let result = extract_response_text(response).await?;
        parse_page_tree_response(result, page_id)
    }

    fn tree_depth(&self) -> u8 {
        self.depth
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PageTreeSource;

    #[test]
    fn headers_carry_basic_auth() {
        let credential = Credential::new("me@acme.com:token123").unwrap();
        let headers = ConfluenceHttpClient::create_headers(&credential).unwrap();
        let auth = headers.get(header::AUTHORIZATION).unwrap();
        assert_eq!(auth, "Basic bWVAYWNtZS5jb206dG9rZW4xMjM=");
        assert!(auth.is_sensitive());
    }

    #[test]
    fn client_reports_configured_depth() {
        let client = ConfluenceHttpClient::new(Duration::from_secs(5), 3).unwrap();
        assert_eq!(client.tree_depth(), 3);
    }
}
