use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    router::router,
    service::auth::{token::TokenService, AuthService},
    state::AppState,
};


/// Router wired to a fresh in-memory database plus a token for a seeded admin.
struct TestApp {
    context: TestContext,
    router: Router,
    token: String,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        let admin = factory::create_admin(&db).await.unwrap();
        let tokens = TokenService::new("controller-test-secret", Duration::hours(1));
        let (token, _) = AuthService::new(&db, &tokens)
            .login(&admin.email, factory::admin::DEFAULT_PASSWORD)
            .await
            .unwrap();

        Self {
            context,
            router: router().with_state(AppState::new(db, tokens)),
            token,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    /// Sends an authenticated request and returns status plus parsed JSON body.
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let auth = format!("Bearer {}", self.token);
        self.send_with(method, uri, Some(&auth), body).await
    }

    async fn send_with(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
