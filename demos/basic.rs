//! Minimal portico example — a controller behind a hyper server.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/clients/report?format=csv
//!   curl -X POST http://localhost:3000/clients -d 'name=alice'
//!   curl -i -X POST http://localhost:3000/clients -d ''

use std::convert::Infallible;
use std::net::SocketAddr;

use bytes::Bytes;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use portico::{HyperTransport, RequestContext, Source};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr: SocketAddr = "0.0.0.0:3000".parse().unwrap();
    let listener = TcpListener::bind(addr).await.expect("bind failed");
    info!(%addr, "portico demo listening");

    loop {
        let (stream, _) = match listener.accept().await {
            Ok(v) => v,
            Err(e) => {
                error!("accept error: {e}");
                continue;
            }
        };

        tokio::spawn(async move {
            let svc = service_fn(|req| async move {
                let transport = HyperTransport::from_incoming(req).await;
                let ctx = RequestContext::capture(&transport);
                Ok::<_, Infallible>(clients_controller(&ctx))
            });

            if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                .serve_connection(TokioIo::new(stream), svc)
                .await
            {
                error!("connection error: {e}");
            }
        });
    }
}

// One controller, two verbs — everything it knows about the request comes
// from the context, nothing from hyper.
fn clients_controller(ctx: &RequestContext) -> http::Response<Full<Bytes>> {
    if ctx.is_post() {
        return match ctx.param(Source::Form, "name") {
            // created — send the client to the report page
            Some(_name) => ctx
                .redirect(Some("clients"), Some("report"))
                .expect("target given")
                .into_response(),
            None => plain(http::StatusCode::UNPROCESSABLE_ENTITY, "missing `name`"),
        };
    }

    let segments = ctx.uri_segments();
    let format = ctx.param(Source::Query, "format").unwrap_or("html");
    let self_link = ctx.build_url(Some("clients"), Some("report"));

    plain(
        http::StatusCode::OK,
        format!("segments: {segments:?}\nformat: {format}\nself: {self_link}\n"),
    )
}

fn plain(status: http::StatusCode, body: impl Into<String>) -> http::Response<Full<Bytes>> {
    http::Response::builder()
        .status(status)
        .header("content-type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.into().into_bytes())))
        .unwrap()
}
