use http::StatusCode;

/// What the session layer must do about a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Nothing session-related; the response proceeds to normal handling.
    Proceed,
    /// The backend no longer honors the credential: drop it and land the
    /// user at login.
    ClearSession,
}

/// The authorization response policy, as a pure function so it is testable
/// without a transport.
///
/// 401 means the token is missing/expired; 403 means it is valid but
/// insufficient. Both clear the session: a stale role embedded in an old
/// token gets the same treatment as an expired login, and a fresh login
/// mints a token with current claims.
pub fn auth_policy(status: StatusCode) -> AuthAction {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AuthAction::ClearSession,
        _ => AuthAction::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_and_forbidden_clear_the_session() {
        assert_eq!(auth_policy(StatusCode::UNAUTHORIZED), AuthAction::ClearSession);
        assert_eq!(auth_policy(StatusCode::FORBIDDEN), AuthAction::ClearSession);
    }

    #[test]
    fn other_statuses_proceed() {
        for status in [
            StatusCode::OK,
            StatusCode::CREATED,
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert_eq!(auth_policy(status), AuthAction::Proceed, "{}", status);
        }
    }
}
