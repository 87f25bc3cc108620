use crate::client::{HttpClient, HttpResponse, TransportError};
use crate::decode::decode_body;
use crate::{LEGACY_PATH, WELL_KNOWN_PATH};
use sectxt_domain::Diagnostics;
use sectxt_types::ids;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid target '{0}': a URL must include a host")]
    InvalidTarget(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Outcome of probing one host.
#[derive(Clone, Debug, Default)]
pub struct Retrieved {
    /// Decoded body of the first location that answered 200.
    pub content: Option<String>,
    /// `[requested, final]` after a redirect, else `[requested]`. Empty when nothing was found.
    pub urls: Vec<String>,
    /// Serving problems, in discovery order.
    pub diagnostics: Diagnostics,
}

/// Host (with port) from a bare domain or a URL.
pub fn host_of(target: &str) -> Result<String, FetchError> {
    let target = target.trim();
    if target.contains("://") {
        let url = Url::parse(target).map_err(|_| FetchError::InvalidTarget(target.to_string()))?;
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| FetchError::InvalidTarget(target.to_string()))?;
        return Ok(match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        });
    }

    let host = target.trim_end_matches('/');
    if host.is_empty() {
        return Err(FetchError::InvalidTarget(target.to_string()));
    }
    Ok(host.to_string())
}

/// Probe order: https before http, well-known before legacy.
pub fn candidate_urls(host: &str) -> Vec<(String, &'static str, &'static str)> {
    let mut out = Vec::with_capacity(4);
    for scheme in ["https", "http"] {
        for path in [WELL_KNOWN_PATH, LEGACY_PATH] {
            out.push((format!("{scheme}://{host}/{path}"), scheme, path));
        }
    }
    out
}

pub fn retrieve(target: &str, client: &dyn HttpClient) -> Result<Retrieved, FetchError> {
    let host = host_of(target)?;
    let mut retrieved = Retrieved::default();

    for (url, scheme, path) in candidate_urls(&host) {
        let Some(resp) = probe(client, &url, &mut retrieved.diagnostics) else {
            continue;
        };
        if resp.status != 200 {
            debug!(url = %url, status = resp.status, "candidate rejected");
            continue;
        }

        info!(url = %url, final_url = %resp.final_url, "security.txt located");
        inspect(&resp, scheme, path, &mut retrieved.diagnostics);
        retrieved.content = Some(decode_body(&resp.body, &mut retrieved.diagnostics));
        retrieved.urls = if resp.final_url.is_empty() || resp.final_url == url {
            vec![url]
        } else {
            vec![url, resp.final_url]
        };
        return Ok(retrieved);
    }

    warn!(host = %host, "no security.txt found");
    retrieved
        .diagnostics
        .error(ids::CODE_NO_SECURITY_TXT, "security.txt could not be located.", None);
    Ok(retrieved)
}

/// One GET with the TLS fallback. `None` means skip to the next candidate.
fn probe(client: &dyn HttpClient, url: &str, out: &mut Diagnostics) -> Option<HttpResponse> {
    debug!(url = %url, "probing");
    match client.get(url, true) {
        Ok(resp) => Some(resp),
        Err(TransportError::Certificate(reason)) => {
            warn!(url = %url, %reason, "invalid certificate; retrying without verification");
            if !out.errors().iter().any(|d| d.code == ids::CODE_INVALID_CERT) {
                out.error(
                    ids::CODE_INVALID_CERT,
                    "security.txt must be served with a valid TLS certificate.",
                    None,
                );
            }
            client
                .get(url, false)
                .inspect_err(|err| debug!(url = %url, error = %err, "insecure retry failed"))
                .ok()
        }
        Err(err) => {
            debug!(url = %url, error = %err, "request failed");
            None
        }
    }
}

fn inspect(resp: &HttpResponse, scheme: &str, path: &str, out: &mut Diagnostics) {
    if scheme != "https" {
        out.error(
            ids::CODE_INVALID_URI_SCHEME,
            "Insecure URI scheme HTTP is not allowed. The security.txt file access MUST use the \"https\" scheme",
            None,
        );
    }

    if path != WELL_KNOWN_PATH {
        out.error(
            ids::CODE_LOCATION,
            "security.txt was located on the top-level path (legacy place), but must be placed \
             under the '/.well-known/' path.",
            None,
        );
    }

    let Some(content_type) = resp.content_type.as_deref() else {
        out.error(
            ids::CODE_NO_CONTENT_TYPE,
            "HTTP Content-Type header must be sent.",
            None,
        );
        return;
    };

    let (media_type, charset) = parse_content_type(content_type);
    if !media_type.eq_ignore_ascii_case("text/plain") {
        out.error(
            ids::CODE_INVALID_MEDIA,
            "Media type in Content-Type header must be 'text/plain'.",
            None,
        );
    }

    // RFC 9116 defaults the charset to utf-8.
    if let Some(charset) = charset {
        let charset = charset.to_ascii_lowercase();
        if charset != "utf-8" && charset != "csutf8" {
            out.error(
                ids::CODE_INVALID_CHARSET,
                "Charset parameter in Content-Type header must be 'utf-8' if present.",
                None,
            );
        }
    }
}

/// `text/plain; charset="utf-8"` -> (`text/plain`, `Some("utf-8")`).
fn parse_content_type(value: &str) -> (&str, Option<&str>) {
    let mut parts = value.split(';');
    let media_type = parts.next().unwrap_or_default().trim();
    let charset = parts.find_map(|param| {
        let (key, val) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| val.trim().trim_matches('"'))
    });
    (media_type, charset)
}
