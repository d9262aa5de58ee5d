//! The per-request snapshot and its accessors.

use std::collections::HashMap;
use std::sync::OnceLock;

use bytes::Bytes;
use tracing::debug;

use crate::error::Error;
use crate::method::Method;
use crate::params::{Params, Source};
use crate::redirect::Redirect;
use crate::transport::Transport;
use crate::uri;

/// Everything a controller may ask about the current request, captured once
/// from the host transport and frozen.
///
/// One `RequestContext` per incoming request — the host constructs it and
/// hands it to the controller. It is never shared across requests and never
/// mutated after capture; the single lazy bit (raw-body parameters) is an
/// internal cache, invisible to callers.
///
/// ```
/// use portico::{RequestContext, Source, Transport};
/// # struct T;
/// # impl Transport for T {
/// #     fn method(&self) -> &str { "GET" }
/// #     fn host(&self) -> &str { "localhost" }
/// #     fn request_uri(&self) -> &str { "/clients/report?format=csv" }
/// #     fn script_name(&self) -> &str { "/index.php" }
/// #     fn is_secure(&self) -> bool { false }
/// #     fn port(&self) -> u16 { 80 }
/// #     fn body(&self) -> &[u8] { b"" }
/// # }
/// # let transport = T;
/// let ctx = RequestContext::capture(&transport);
///
/// assert!(ctx.is_get());
/// assert_eq!(ctx.uri_segments(), ["clients", "report"]);
/// assert_eq!(ctx.param(Source::Query, "format"), Some("csv"));
/// assert_eq!(ctx.build_url(Some("clients"), None), "http://localhost/clients");
/// ```
#[derive(Debug)]
pub struct RequestContext {
    scheme_host: String,
    base_path: String,
    full_url: String,
    method: Method,
    query: Params,
    form: Params,
    body: Bytes,
    raw_body: OnceLock<Params>,
}

impl RequestContext {
    /// Captures the snapshot from a host transport.
    ///
    /// The scheme is `https` when the transport reports TLS or port 443,
    /// else `http`. The base path is the script path minus the entry-script
    /// filename. Query and form parameters parse here; raw-body parameters
    /// parse on first access.
    pub fn capture<T: Transport>(transport: &T) -> Self {
        let scheme = if transport.is_secure() || transport.port() == 443 {
            "https"
        } else {
            "http"
        };
        let scheme_host = format!("{scheme}://{}", transport.host());
        let base_path = uri::base_path(transport.script_name());

        let request_uri = transport.request_uri();
        let full_url = format!("{scheme_host}{request_uri}");

        let query_string = request_uri.split_once('?').map_or("", |(_, q)| q);
        let body = Bytes::copy_from_slice(transport.body());

        let method: Method = transport.method().parse().unwrap_or(Method::Other);

        debug!(%method, url = %full_url, "request context captured");

        Self {
            scheme_host,
            base_path,
            full_url,
            method,
            query: Params::parse(query_string.as_bytes()),
            form: Params::parse(&body),
            body,
            raw_body: OnceLock::new(),
        }
    }

    pub fn scheme_host(&self) -> &str { &self.scheme_host }
    pub fn base_path(&self) -> &str { &self.base_path }
    pub fn full_url(&self) -> &str { &self.full_url }
    pub fn method(&self) -> Method { self.method }

    /// The request path split into its non-empty segments, in order, with
    /// the deployment prefix removed and any trailing `?query` stripped.
    ///
    /// `http://localhost/app/clients/report?x=1` under base `/app/` yields
    /// `["clients", "report"]`.
    pub fn uri_segments(&self) -> Vec<String> {
        let prefix = format!("{}{}", self.scheme_host, self.base_path);
        uri::segments(&self.full_url, &prefix)
    }

    /// The value of one parameter, or `None` if the key is absent. Absence
    /// is an answer, not an error.
    pub fn param(&self, source: Source, key: &str) -> Option<&str> {
        self.store(source).get(key)
    }

    /// A copy of every parameter for `source` — detached from the store, so
    /// callers can own and mutate it freely.
    pub fn params(&self, source: Source) -> HashMap<String, String> {
        self.store(source).to_map()
    }

    /// Builds an absolute URL for a controller/action pair.
    ///
    /// With both: `<scheme_host><base>/controller/action`. With one:
    /// `<scheme_host><base>/name`. With neither: `<scheme_host><base>`,
    /// unchanged. Joining the base and the suffix can double a separator;
    /// that double is collapsed (see [`uri::collapse`] for the exact,
    /// single-pass semantics).
    pub fn build_url(&self, controller: Option<&str>, action: Option<&str>) -> String {
        let suffix = target_suffix(controller, action).unwrap_or_default();
        let path = uri::collapse(&format!("{}{suffix}", self.base_path));
        format!("{}{path}", self.scheme_host)
    }

    /// Computes the redirect instruction for a controller/action pair.
    ///
    /// The target is the same suffix `build_url` would use, as a rooted
    /// path: `/controller/action`, `/controller`, or `/action`. With
    /// neither argument there is nowhere to go and this fails with
    /// [`Error::MissingRedirectTarget`] — before any side effect, since the
    /// instruction is only ever emitted by the host once returned.
    pub fn redirect(&self, controller: Option<&str>, action: Option<&str>) -> Result<Redirect, Error> {
        let location = target_suffix(controller, action).ok_or(Error::MissingRedirectTarget)?;
        debug!(%location, "redirect computed");
        Ok(Redirect::to(location))
    }

    pub fn is_get(&self) -> bool { self.method == Method::Get }
    pub fn is_post(&self) -> bool { self.method == Method::Post }
    pub fn is_put(&self) -> bool { self.method == Method::Put }
    pub fn is_delete(&self) -> bool { self.method == Method::Delete }

    /// Resolves a source to its parsed store. Raw-body parses here, once;
    /// the captured bytes are the single read the transport already did.
    fn store(&self, source: Source) -> &Params {
        match source {
            Source::Query => &self.query,
            Source::Form => &self.form,
            Source::RawBody => self.raw_body.get_or_init(|| Params::parse(&self.body)),
        }
    }
}

/// The shared controller/action branch: both, controller only, action only,
/// or — `None` — neither.
fn target_suffix(controller: Option<&str>, action: Option<&str>) -> Option<String> {
    match (controller, action) {
        (Some(c), Some(a)) => Some(format!("/{c}/{a}")),
        (Some(c), None)    => Some(format!("/{c}")),
        (None, Some(a))    => Some(format!("/{a}")),
        (None, None)       => None,
    }
}
