//! HTTP transport for the contact form endpoint.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::contact::{FormTransport, TransportResponse};
use crate::error::SubmitError;

/// Posts form-encoded fields to a fixed endpoint and asks for JSON back.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl FormTransport for HttpTransport {
    async fn post_form(&self, fields: &[(&str, &str)]) -> Result<TransportResponse, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting contact form");

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Contact form request failed");
                SubmitError::from(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
