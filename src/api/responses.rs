use serde::{Deserialize, Serialize};

/// The routes an authorization decision can be returned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionRoute {
    /// `POST /`, the decision is carried in the body only.
    AuthorizerEvent,
    /// `GET /verify`, the request itself is being gated.
    RequestGate,
}

/// The response for an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    #[serde(rename = "isAuthorized")]
    pub is_authorized: bool,
}

impl AuthorizationResponse {
    /// The HTTP status to send this decision with on the given route.
    pub fn status_code(&self, route: DecisionRoute) -> u16 {
        match route {
            DecisionRoute::AuthorizerEvent => 200,
            DecisionRoute::RequestGate if self.is_authorized => 200,
            DecisionRoute::RequestGate => 403,
        }
    }
}

impl From<bool> for AuthorizationResponse {
    fn from(is_authorized: bool) -> Self {
        AuthorizationResponse { is_authorized }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_authorizer_field_name() {
        let body = serde_json::to_string(&AuthorizationResponse::from(true)).unwrap();
        assert_eq!(body, r#"{"isAuthorized":true}"#);

        let body = serde_json::to_string(&AuthorizationResponse::from(false)).unwrap();
        assert_eq!(body, r#"{"isAuthorized":false}"#);
    }

    #[test]
    fn authorizer_events_always_return_ok() {
        for is_authorized in [true, false] {
            let response = AuthorizationResponse::from(is_authorized);
            assert_eq!(response.status_code(DecisionRoute::AuthorizerEvent), 200);
        }
    }

    #[test]
    fn request_gate_forbids_unauthorized_requests() {
        let authorized = AuthorizationResponse::from(true);
        let unauthorized = AuthorizationResponse::from(false);

        assert_eq!(authorized.status_code(DecisionRoute::RequestGate), 200);
        assert_eq!(unauthorized.status_code(DecisionRoute::RequestGate), 403);
    }
}
