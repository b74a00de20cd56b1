//! API middleware
//!
//! Every request is tagged with a claim reference, a UUID v7 carried in the
//! `x-claim-ref` header. A caller-supplied reference is kept as is.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header carrying the claim reference on requests and responses
pub const CLAIM_REF_HEADER: &str = "x-claim-ref";

/// Generates time-ordered claim references
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeClaimRef;

impl MakeRequestId for MakeClaimRef {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::now_v7().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Builds the tracing span for one request
pub fn request_span(request: &Request<Body>) -> Span {
    let claim_ref = request
        .headers()
        .get(CLAIM_REF_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        claim_ref = %claim_ref,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_refs_are_v7_uuids() {
        let request = Request::new(Body::empty());
        let id = MakeClaimRef.make_request_id(&request).unwrap();
        let parsed = Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();

        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_claim_refs_are_unique() {
        let request = Request::new(Body::empty());
        let first = MakeClaimRef.make_request_id(&request).unwrap();
        let second = MakeClaimRef.make_request_id(&request).unwrap();

        assert_ne!(first.header_value(), second.header_value());
    }
}
