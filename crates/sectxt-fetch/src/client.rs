use crate::retrieve::FetchError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::error::Error as _;
use std::time::Duration;

pub const USER_AGENT: &str = concat!("sectxt/", env!("CARGO_PKG_VERSION"));

const TIMEOUT: Duration = Duration::from_secs(5);

/// The parts of an HTTP response the probe loop looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// URL after following redirects.
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("TLS certificate rejected: {0}")]
    Certificate(String),
    #[error("request failed: {0}")]
    Other(String),
}

pub trait HttpClient {
    /// GET `url`, following redirects. With `verify_tls` off, certificate errors are ignored.
    fn get(&self, url: &str, verify_tls: bool) -> Result<HttpResponse, TransportError>;
}

/// Blocking reqwest client pair: one verifying certificates, one not.
pub struct ReqwestClient {
    verified: Client,
    insecure: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            verified: build(false)?,
            insecure: build(true)?,
        })
    }
}

fn build(accept_invalid_certs: bool) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, verify_tls: bool) -> Result<HttpResponse, TransportError> {
        let client = if verify_tls {
            &self.verified
        } else {
            &self.insecure
        };

        let resp = client.get(url).send().map_err(classify)?;
        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
        let body = resp.bytes().map_err(classify)?.to_vec();

        Ok(HttpResponse {
            status,
            final_url,
            content_type,
            body,
        })
    }
}

/// reqwest does not expose a dedicated TLS error kind; look through the source chain.
fn classify(err: reqwest::Error) -> TransportError {
    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    let message = chain.join(": ");

    let lowered = message.to_ascii_lowercase();
    if lowered.contains("certificate") || lowered.contains("tls handshake") {
        TransportError::Certificate(message)
    } else {
        TransportError::Other(message)
    }
}
