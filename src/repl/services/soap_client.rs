//! # SOAP Client
//!
//! Performs the request/response exchange with the calculator service.

use super::body::{decode_text, decompress, ACCEPTED_ENCODINGS};
use super::soap::{
    build_envelope, extract_fault, extract_result, RemoteOperation, SOAP_ACTION_HEADER,
    SOAP_CONTENT_TYPE,
};
use crate::error::{CalcError, CalcResult};
use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use reqwest::header::{
    HeaderMap, HeaderName, ACCEPT_ENCODING, AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE,
};

/// Where and how to reach the calculator service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapEndpoint {
    target: String,
    proxy_prefix: Option<String>,
    credentials: Option<(String, String)>,
}

impl SoapEndpoint {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            proxy_prefix: None,
            credentials: None,
        }
    }

    /// Route requests through a prefixing proxy such as cors-anywhere
    pub fn with_proxy_prefix(mut self, prefix: Option<String>) -> Self {
        self.proxy_prefix = prefix.filter(|p| !p.trim().is_empty());
        self
    }

    /// Send HTTP basic credentials with every request
    pub fn with_credentials(mut self, user: String, password: String) -> Self {
        self.credentials = Some((user, password));
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn proxy_prefix(&self) -> Option<&str> {
        self.proxy_prefix.as_deref()
    }

    /// The URL requests are posted to
    pub fn url(&self) -> String {
        match &self.proxy_prefix {
            Some(prefix) => format!("{prefix}{}", self.target),
            None => self.target.clone(),
        }
    }

    fn basic_auth(&self) -> Option<String> {
        self.credentials
            .as_ref()
            .map(|(user, password)| format!("Basic {}", STANDARD.encode(format!("{user}:{password}"))))
    }
}

/// HTTP client speaking the calculator's SOAP dialect
#[derive(Debug, Clone)]
pub struct SoapClient {
    client: reqwest::Client,
    endpoint: SoapEndpoint,
}

impl SoapClient {
    pub fn new(endpoint: SoapEndpoint) -> Result<Self> {
        tracing::debug!("Creating SoapClient for {}", endpoint.url());
        let client = reqwest::Client::builder()
            .user_agent(concat!("soapcalc/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &SoapEndpoint {
        &self.endpoint
    }

    /// Invoke `operation` remotely and return the result text unmodified
    pub async fn call(&self, operation: RemoteOperation, a: &str, b: &str) -> CalcResult<String> {
        let envelope =
            build_envelope(operation, a, b).map_err(|e| CalcError::Request(e.to_string()))?;
        let url = self.endpoint.url();

        tracing::info!("POST {} ({} {} {})", url, a, operation.symbol(), b);
        tracing::debug!("Request envelope: {}", envelope);

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header(SOAP_ACTION_HEADER, operation.soap_action())
            .header(ACCEPT_ENCODING, ACCEPTED_ENCODINGS)
            .body(envelope);
        if let Some(auth) = self.endpoint.basic_auth() {
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("SOAP request to {} failed: {}", url, e);
            CalcError::Network(e.to_string())
        })?;

        let status = response.status();
        let content_encoding = header_value(response.headers(), CONTENT_ENCODING);
        let content_type = header_value(response.headers(), CONTENT_TYPE);

        let raw: Bytes = response
            .bytes()
            .await
            .map_err(|e| CalcError::Network(e.to_string()))?;
        let body = decompress(&raw, content_encoding.as_deref())?;
        let text = decode_text(&body, content_type.as_deref());

        tracing::debug!("Response {}: {}", status.as_u16(), text);

        if !status.is_success() {
            let fault = extract_fault(&text);
            tracing::warn!(
                "{} answered HTTP {} (fault: {:?})",
                url,
                status.as_u16(),
                fault
            );
            return Err(CalcError::Transport {
                status: status.as_u16(),
                fault,
            });
        }

        extract_result(operation, &text)
    }
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
