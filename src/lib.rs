//! # portico
//!
//! A thin request-state accessor for controllers.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The HTTP library handles the wire: parsing, routing, responding. portico
//! does not — by design. Controllers ask one object about the current
//! request instead of reaching into the transport, so controller code never
//! changes when the transport does.
//!
//! What the host transport already owns — portico intentionally ignores:
//!
//! - **Routing / dispatch** — pick your router; portico doesn't care
//! - **Sessions and cookies** — your framework's job
//! - **The wire protocol** — hyper, or whatever you adapt
//! - **Cancellation / timeouts** — the server's loop, not this crate
//!
//! What's left for portico — the one object every controller touches:
//!
//! - Path segments — `/clients/report?x=1` → `["clients", "report"]`
//! - Parameters by source — query string, form body, raw body
//! - Method predicates — `is_get` / `is_post` / `is_put` / `is_delete`
//! - URL building and redirects — from a controller/action pair
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use portico::{HyperTransport, RequestContext, Source};
//!
//! # async fn controller(req: http::Request<hyper::body::Incoming>) {
//! let transport = HyperTransport::from_incoming(req).await;
//! let ctx = RequestContext::capture(&transport);
//!
//! if ctx.is_post() {
//!     let name = ctx.param(Source::Form, "name").unwrap_or("anonymous");
//!     // … create the thing …
//!     let _ = ctx.redirect(Some("clients"), Some("report"));
//! } else {
//!     let page = ctx.param(Source::Query, "page").unwrap_or("1");
//!     let _link = ctx.build_url(Some("clients"), None);
//!     // … render page `page` …
//! }
//! # }
//! ```
//!
//! One context per request. The host constructs it, the controller reads
//! it, the request ends, it's gone. There is no global instance to leak
//! state between requests.

mod context;
mod error;
mod method;
mod params;
mod redirect;
mod transport;
mod uri;

pub use context::RequestContext;
pub use error::Error;
pub use method::Method;
pub use params::{Params, Source};
pub use redirect::Redirect;
pub use transport::{HyperTransport, Transport};
