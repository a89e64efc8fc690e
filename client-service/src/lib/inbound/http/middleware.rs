use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::client::models::ClientSnapshot;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved identity of an authenticated
/// request for downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    pub client: ClientSnapshot,
}

/// Middleware that resolves the bearer token on an inbound request.
///
/// Rejections short-circuit the pipeline with a 401 response; the
/// downstream handler only ever runs with an `AuthenticatedClient`
/// extension attached.
pub async fn authorize_client(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let client = state
        .session_service
        .resolve_access_token(token)
        .map_err(|_| {
            ApiError::Unauthorized("sorry, you're not authorized for this request".to_string())
                .into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedClient { client });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    // The original wire convention allows the bearer credential in
    // either the standard Authorization header or a legacy Token header
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .or_else(|| req.headers().get("token"));

    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(ApiError::Unauthorized("empty token value".to_string()).into_response());
        }
    };

    let header = header.to_str().map_err(|_| {
        ApiError::Unauthorized("invalid token header encoding".to_string()).into_response()
    })?;

    parse_bearer(header).ok_or_else(|| {
        ApiError::Unauthorized(
            "must provide Authorization header with format `Bearer {token}`".to_string(),
        )
        .into_response()
    })
}

/// Split a header value of the shape `Bearer <token>`.
///
/// Exactly one non-empty token segment is required after the literal
/// scheme prefix; anything else is malformed.
fn parse_bearer(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bearer_accepts_single_segment() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_parse_bearer_rejects_missing_prefix() {
        assert_eq!(parse_bearer("abc.def.ghi"), None);
        assert_eq!(parse_bearer("bearer abc.def.ghi"), None);
        assert_eq!(parse_bearer("Basic abc"), None);
    }

    #[test]
    fn test_parse_bearer_rejects_empty_token() {
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer("Bearer"), None);
    }

    #[test]
    fn test_parse_bearer_rejects_multiple_segments() {
        assert_eq!(parse_bearer("Bearer abc def"), None);
    }
}
