use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Missing token is 401, wrong token is 403.
pub fn check_admin_token(expected: &str, provided: Option<&str>) -> Result<(), AppError> {
    let provided = provided
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthorized)?;

    // Length leaks, content does not.
    let matches = provided.len() == expected.len()
        && provided
            .bytes()
            .zip(expected.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0;

    if matches {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Middleware for every `/api/v1/admin` route.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = check_admin_token(&state.config.admin_token, provided) {
        warn!("Rejected admin request to {}: {e}", request.uri().path());
        return Err(e);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_unauthorized() {
        assert!(matches!(
            check_admin_token("secret", None),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            check_admin_token("secret", Some("  ")),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_wrong_token_is_forbidden() {
        assert!(matches!(
            check_admin_token("secret", Some("secreT")),
            Err(AppError::Forbidden)
        ));
        assert!(matches!(
            check_admin_token("secret", Some("secret-but-longer")),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_matching_token_passes() {
        assert!(check_admin_token("secret", Some("secret")).is_ok());
    }
}
