use serde_json::Value;
use tracing::{info, warn};

use shared::types::AuthError;
use shared::types::auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest, TokenResponse, VerifyRequest,
};

use crate::api::{ApiClient, QueryParams};
use crate::session::Credential;

/// Authentication flows.
///
/// Every operation maps its failure to the generic per-operation
/// [`AuthError`] — the server's detail is logged but never shown, so a
/// login error cannot reveal whether an account exists. Credential writes
/// happen only here (login / Telegram login / deep-link adoption) and in
/// the API client's 401/403 policy.
pub struct AuthStore {
    api: ApiClient,
}

impl AuthStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, email_or_telegram_id: &str, password: &str) -> Result<(), AuthError> {
        let request = LoginRequest {
            email_or_telegram_id: email_or_telegram_id.to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse =
            self.api.post("/auth/login", &request).await.map_err(|e| {
                warn!("Login failed: {}", e);
                AuthError::Login
            })?;

        self.api.session().save(Credential::from_token(response.token));
        info!("Logged in");
        Ok(())
    }

    /// Telegram Mini App login. The payload is the host's signed init
    /// data, passed through untouched — its shape belongs to Telegram and
    /// the backend, not to this client.
    pub async fn login_with_telegram(&self, payload: &Value) -> Result<(), AuthError> {
        let response: TokenResponse =
            self.api.post("/auth/telegram", payload).await.map_err(|e| {
                warn!("Telegram login failed: {}", e);
                AuthError::TelegramLogin
            })?;

        self.api.session().save(Credential::from_token(response.token));
        info!("Logged in via Telegram");
        Ok(())
    }

    pub async fn register(
        &self,
        email_or_telegram_id: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let request = RegisterRequest {
            email_or_telegram_id: email_or_telegram_id.to_string(),
            password: password.to_string(),
        };
        self.api
            .post::<_, Value>("/auth/register", &request)
            .await
            .map_err(|e| {
                warn!("Registration failed: {}", e);
                AuthError::Registration
            })?;
        Ok(())
    }

    pub async fn verify(
        &self,
        email_or_telegram_id: &str,
        verification_code: &str,
    ) -> Result<(), AuthError> {
        let request = VerifyRequest {
            email_or_telegram_id: email_or_telegram_id.to_string(),
            verification_code: verification_code.to_string(),
        };
        self.api
            .post::<_, Value>("/auth/verify", &request)
            .await
            .map_err(|e| {
                warn!("Verification failed: {}", e);
                AuthError::Verification
            })?;
        Ok(())
    }

    pub async fn resend_verification(&self, email_or_telegram_id: &str) -> Result<(), AuthError> {
        let query = QueryParams::new().text("emailOrTelegramId", Some(email_or_telegram_id));
        self.api
            .post_with_query::<Value>("/auth/resend", &query)
            .await
            .map_err(|e| {
                warn!("Resend failed: {}", e);
                AuthError::Resend
            })?;
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.api
            .post::<_, Value>("/auth/forgot-password", &request)
            .await
            .map_err(|e| {
                warn!("Forgot-password failed: {}", e);
                AuthError::ForgotPassword
            })?;
        Ok(())
    }

    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        self.api
            .post::<_, Value>("/auth/reset-password", &request)
            .await
            .map_err(|e| {
                warn!("Password reset failed: {}", e);
                AuthError::ResetPassword
            })?;
        Ok(())
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        self.api
            .post::<_, Value>("/auth/change-password", &request)
            .await
            .map_err(|e| {
                warn!("Password change failed: {}", e);
                AuthError::ChangePassword
            })?;
        Ok(())
    }

    /// Drop the session and land at login (no-op redirect when already
    /// there).
    pub fn logout(&self) {
        info!("Logging out");
        self.api.session().clear();
        self.api.navigator().force_login();
    }

    /// Deep-link bootstrap: adopt a token delivered via the start
    /// parameter without a login round-trip. Returns whether a credential
    /// was adopted.
    pub fn adopt_token(&self, token: &str) -> bool {
        let credential = Credential::from_token(token.trim());
        if !credential.is_plausible() {
            return false;
        }
        info!("Adopting deep-link token");
        self.api.session().save(credential);
        true
    }
}
