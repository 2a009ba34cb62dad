//! Route configuration for member endpoints.
//!
//! Configures Axum router with member-related routes.

use axum::routing::{get, put};
use axum::Router;

use super::handlers::{add_member, list_members, remove_member, update_member, MemberAppState};

/// Creates the member router with all endpoints.
///
/// Routes:
/// - `GET /api/members` - List the roster
/// - `POST /api/members` - Register a member
/// - `PUT /api/members/:id` - Patch a member
/// - `DELETE /api/members/:id` - Remove a member
pub fn member_router() -> Router<MemberAppState> {
    Router::new()
        .route("/api/members", get(list_members).post(add_member))
        .route("/api/members/:id", put(update_member).delete(remove_member))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        member_router().with_state(MemberAppState {
            members: Arc::new(InMemoryStore::new()),
        })
    }

    fn post_member(name: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/members")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!(r#"{{"name":"{}"}}"#, name)))
            .unwrap()
    }

    #[tokio::test]
    async fn register_then_list_roundtrips() {
        let app = router();

        let response = app.clone().oneshot(post_member("Awa")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/members")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let members: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(members[0]["id"], 1);
        assert_eq!(members[0]["name"], "Awa");
        assert_eq!(members[0]["status"], "active");
    }

    #[tokio::test]
    async fn blank_name_returns_bad_request() {
        let response = router().oneshot(post_member("   ")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn removing_unknown_member_returns_not_found() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/members/9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
