use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_client::get_client;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::signup::signup;
use super::handlers::update_client::update_client;
use super::middleware::authorize_client;
use crate::client::ports::ClientServicePort;
use crate::session::ports::SessionServicePort;

#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<dyn ClientServicePort>,
    pub session_service: Arc<dyn SessionServicePort>,
}

pub fn create_router(
    client_service: Arc<dyn ClientServicePort>,
    session_service: Arc<dyn SessionServicePort>,
) -> Router {
    let state = AppState {
        client_service,
        session_service,
    };

    let public_routes = Router::new()
        .route("/api/v1/auth/signup", post(signup))
        .route("/api/v1/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/clients/:client_id", get(get_client))
        .route("/api/v1/clients/:client_id", put(update_client))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authorize_client,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use mockall::mock;
    use tower::ServiceExt;

    use super::*;
    use crate::client::errors::ClientError;
    use crate::client::models::BusinessType;
    use crate::client::models::Client;
    use crate::client::models::ClientId;
    use crate::client::models::EmailAddress;
    use crate::client::models::SignupCommand;
    use crate::client::models::UpdateClientCommand;
    use crate::session::errors::SessionError;
    use crate::session::models::TokenRecord;
    use crate::session::ports::TokenRepository;
    use crate::session::service::SessionService;
    use auth::TokenCodec;

    mock! {
        pub TestClientService {}

        #[async_trait]
        impl ClientServicePort for TestClientService {
            async fn signup(&self, command: SignupCommand) -> Result<Client, ClientError>;
            async fn login(&self, email: &EmailAddress, password: &str) -> Result<Client, ClientError>;
            async fn get_client(&self, id: &ClientId) -> Result<Client, ClientError>;
            async fn update_client(&self, id: &ClientId, command: UpdateClientCommand) -> Result<Client, ClientError>;
        }
    }

    mock! {
        pub TestTokenRepository {}

        #[async_trait]
        impl TokenRepository for TestTokenRepository {
            async fn upsert(&self, record: TokenRecord) -> Result<(), SessionError>;
            async fn delete(&self, client_id: &ClientId) -> Result<(), SessionError>;
            async fn find_by_client_id(&self, client_id: &ClientId) -> Result<Option<TokenRecord>, SessionError>;
        }
    }

    const ACCESS_SECRET: &[u8] = b"access_secret_key_32_bytes_long!!";

    fn test_client() -> Client {
        Client::new(
            "Test Client".to_string(),
            EmailAddress::new("a@b.com".to_string()).unwrap(),
            "1 Test Street".to_string(),
            "0700000000".to_string(),
            BusinessType::Retail,
            "api-key-1".to_string(),
            "$argon2id$hash".to_string(),
        )
    }

    fn session_service(access_ttl: i64) -> Arc<SessionService<MockTestTokenRepository>> {
        Arc::new(SessionService::new(
            TokenCodec::new(ACCESS_SECRET, access_ttl),
            TokenCodec::new(b"refresh_secret_key_32_bytes_long!", 86400),
            Arc::new(MockTestTokenRepository::new()),
        ))
    }

    fn get_request(uri: &str, token_header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(value) = token_header {
            builder = builder.header("Token", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_gate_rejects_missing_header() {
        let mut client_service = MockTestClientService::new();
        client_service.expect_get_client().times(0);

        let router = create_router(Arc::new(client_service), session_service(900));

        let uri = format!("/api/v1/clients/{}", ClientId::new());
        let response = router.oneshot(get_request(&uri, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_gate_rejects_malformed_header() {
        let mut client_service = MockTestClientService::new();
        client_service.expect_get_client().times(0);

        let router = create_router(Arc::new(client_service), session_service(900));

        let uri = format!("/api/v1/clients/{}", ClientId::new());
        for header in ["token-without-scheme", "Bearer a b", "Basic abc"] {
            let response = router
                .clone()
                .oneshot(get_request(&uri, Some(header)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_gate_rejects_expired_token_without_invoking_handler() {
        let mut client_service = MockTestClientService::new();
        // Rejection short-circuits the pipeline
        client_service.expect_get_client().times(0);

        let service = session_service(-10);
        let client = test_client();
        let pair = service.issue_pair(&client).unwrap();

        let router = create_router(Arc::new(client_service), service);

        let uri = format!("/api/v1/clients/{}", client.id);
        let header = format!("Bearer {}", pair.access_token);
        let response = router
            .oneshot(get_request(&uri, Some(header.as_str())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_gate_passes_valid_token_to_handler() {
        let client = test_client();
        let client_id = client.id;

        let mut client_service = MockTestClientService::new();
        let returned = client.clone();
        client_service
            .expect_get_client()
            .withf(move |id| *id == client_id)
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let service = session_service(900);
        let pair = service.issue_pair(&client).unwrap();

        let router = create_router(Arc::new(client_service), service);

        let uri = format!("/api/v1/clients/{}", client_id);
        let header = format!("Bearer {}", pair.access_token);
        let response = router
            .oneshot(get_request(&uri, Some(header.as_str())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
