use crate::api::{requests::RequestDescriptor, responses::AuthorizationResponse};
use tracing::info;

/// The header the CDN uses to pass the shared secret to the origin.
pub const ORIGIN_VERIFY_HEADER: &str = "x-origin-verify";

/// Checks if the request is authorized by comparing the [`ORIGIN_VERIFY_HEADER`] value to the secret.
///
/// The comparison is exact and not constant-time. A missing header or a missing secret is always unauthorized.
pub fn verify_request(descriptor: &RequestDescriptor, secret: Option<&str>) -> AuthorizationResponse {
    info!("Event: {}", descriptor.to_log_string());

    let is_authorized = is_header_authorized(descriptor.header(ORIGIN_VERIFY_HEADER), secret);
    if is_authorized {
        info!("Authorization successful");
    } else {
        info!("Authorization failed - invalid or missing header");
    }

    AuthorizationResponse::from(is_authorized)
}

/// Whether a header value matches the secret, both must be present.
pub fn is_header_authorized(header: Option<&str>, secret: Option<&str>) -> bool {
    match (header, secret) {
        (Some(header), Some(secret)) => header == secret,
        _ => false,
    }
}
