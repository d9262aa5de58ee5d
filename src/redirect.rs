//! The redirect instruction handed back to the host transport.

use bytes::Bytes;
use http::{Response, StatusCode, header};
use http_body_util::Full;

/// An instruction to send the client somewhere else.
///
/// [`RequestContext::redirect`](crate::RequestContext::redirect) computes
/// one; the host emits it. Emission is the host's job on purpose — a
/// controller that returns a `Redirect` has produced no output yet, so a
/// bad redirect can still fail cleanly with nothing on the wire.
///
/// Defaults to `302 Found`, the status a bare `location` header has always
/// implied. Use [`with_status`](Redirect::with_status) for the other 3xx
/// codes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Redirect {
    location: String,
    status: StatusCode,
}

impl Redirect {
    pub(crate) fn to(location: String) -> Self {
        Self { location, status: StatusCode::FOUND }
    }

    /// Replaces the default `302 Found`, e.g. with
    /// `StatusCode::SEE_OTHER` for a post-form redirect.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// The target path, e.g. `/clients/report`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Converts the instruction into a ready-to-send HTTP response with the
    /// `location` header set and an empty body.
    ///
    /// # Panics
    ///
    /// Panics if the location contains bytes not permitted in a header
    /// value (control characters). Controller and action names are path
    /// segments; none of them should.
    pub fn into_response(self) -> Response<Full<Bytes>> {
        Response::builder()
            .status(self.status)
            .header(header::LOCATION, self.location)
            .body(Full::new(Bytes::new()))
            .expect("redirect location must be a valid header value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_302_found() {
        let r = Redirect::to("/clients".to_owned());
        assert_eq!(r.status(), StatusCode::FOUND);
        assert_eq!(r.location(), "/clients");
    }

    #[test]
    fn with_status_overrides_the_code() {
        let r = Redirect::to("/clients".to_owned()).with_status(StatusCode::SEE_OTHER);
        assert_eq!(r.status(), StatusCode::SEE_OTHER);
    }

    #[test]
    fn into_response_sets_status_and_location() {
        let resp = Redirect::to("/clients/report".to_owned()).into_response();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers()[header::LOCATION], "/clients/report");
    }
}
