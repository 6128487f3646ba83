//! Bearer-token middleware. Validates the `Authorization` header and makes
//! the authenticated user id available to handlers as a request extension.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::auth::jwt::validate_token;
use crate::errors::AppError;
use crate::state::AppState;

/// Identity of the authenticated caller, inserted by `require_auth`.
/// Handlers extract it with `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&req)
        .ok_or_else(|| AppError::Unauthorized("Token não fornecido".to_string()))?;

    let claims = validate_token(&token, &state.config.jwt_secret)?;

    req.extensions_mut().insert(CurrentUser { id: claims.sub });
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: &str) -> Request {
        Request::builder()
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_bearer_token_extracted() {
        let req = request_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_is_none() {
        let req = Request::builder().body(Body::empty()).unwrap();
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn test_wrong_scheme_is_none() {
        let req = request_with_auth("Basic dXNlcjpwYXNz");
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn test_empty_bearer_is_none() {
        let req = request_with_auth("Bearer ");
        assert!(bearer_token(&req).is_none());
    }
}
