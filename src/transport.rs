//! The seam between this crate and whatever actually speaks HTTP.
//!
//! [`Transport`] is the one interface; hosts plug in an adapter for their
//! HTTP library. One adapter ships here — [`HyperTransport`], for the
//! hyper/`http` stack — and anything else (a test double, a CGI bridge,
//! another server library) is an `impl Transport` away.

use bytes::Bytes;
use http::header;
use http_body_util::BodyExt;
use tracing::warn;

/// What a host transport must surface about the incoming request.
///
/// Everything is borrowed and cheap: the transport captured these values
/// when it accepted the request, and
/// [`RequestContext::capture`](crate::RequestContext::capture) reads each
/// exactly once.
pub trait Transport {
    /// The request method as sent, e.g. `"GET"`.
    fn method(&self) -> &str;

    /// The host (and optional port) the client addressed, e.g.
    /// `"localhost:8080"`.
    fn host(&self) -> &str;

    /// The raw request path + query as sent, e.g. `"/clients/report?x=1"`.
    fn request_uri(&self) -> &str;

    /// The path of the entry script handling the request, e.g.
    /// `"/app/index.php"`. Its directory becomes the deployment base path.
    fn script_name(&self) -> &str;

    /// Whether the connection is TLS-terminated.
    fn is_secure(&self) -> bool;

    /// The server port the request arrived on.
    fn port(&self) -> u16;

    /// The request body, already read to completion. The transport owns the
    /// single read of the stream; this is the captured result.
    fn body(&self) -> &[u8];
}

/// [`Transport`] adapter for the hyper / [`http`] stack.
///
/// Built from an `http::Request` whose body gets collected up front; a body
/// that fails mid-read degrades to empty rather than erroring, so a
/// truncated upload still yields a usable (if parameter-less) context.
///
/// ```no_run
/// use portico::{HyperTransport, RequestContext};
///
/// # async fn handle(req: http::Request<hyper::body::Incoming>) {
/// let transport = HyperTransport::from_incoming(req)
///     .await
///     .with_script_name("/app/index.php");
/// let ctx = RequestContext::capture(&transport);
/// # }
/// ```
#[derive(Debug)]
pub struct HyperTransport {
    method: String,
    host: String,
    request_uri: String,
    script_name: String,
    secure: bool,
    port: u16,
    body: Bytes,
}

impl HyperTransport {
    /// Adapts any `http::Request`, collecting its body.
    pub async fn from_request<B>(req: http::Request<B>) -> Self
    where
        B: BodyExt,
        B::Error: std::fmt::Display,
    {
        let (parts, body) = req.into_parts();

        let body = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                warn!("body read failed, continuing with empty body: {e}");
                Bytes::new()
            }
        };

        let host = parts
            .uri
            .authority()
            .map(|a| a.as_str().to_owned())
            .or_else(|| {
                parts
                    .headers
                    .get(header::HOST)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| "localhost".to_owned());

        let secure = parts.uri.scheme_str() == Some("https");
        let port = parts
            .uri
            .port_u16()
            .or_else(|| host.rsplit_once(':').and_then(|(_, p)| p.parse().ok()))
            .unwrap_or(if secure { 443 } else { 80 });

        let request_uri = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_owned())
            .unwrap_or_else(|| "/".to_owned());

        Self {
            method: parts.method.as_str().to_owned(),
            host,
            request_uri,
            script_name: "/".to_owned(),
            secure,
            port,
            body,
        }
    }

    /// [`from_request`](Self::from_request) for hyper's server-side body.
    pub async fn from_incoming(req: http::Request<hyper::body::Incoming>) -> Self {
        Self::from_request(req).await
    }

    /// Sets the entry-script path for mounted deployments. Defaults to `/`
    /// (mounted at the root).
    pub fn with_script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = script_name.into();
        self
    }

    /// Marks the connection TLS-terminated. hyper's server-side request
    /// URIs carry no scheme, so a host terminating TLS itself (or behind a
    /// terminating proxy) states it here.
    pub fn with_tls(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

impl Transport for HyperTransport {
    fn method(&self) -> &str { &self.method }
    fn host(&self) -> &str { &self.host }
    fn request_uri(&self) -> &str { &self.request_uri }
    fn script_name(&self) -> &str { &self.script_name }
    fn is_secure(&self) -> bool { self.secure }
    fn port(&self) -> u16 { self.port }
    fn body(&self) -> &[u8] { &self.body }
}
