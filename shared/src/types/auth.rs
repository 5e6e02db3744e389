use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Auth wire types
// ---------------------------------------------------------------------------

/// `POST /auth/login` body. The account key is an email address or a
/// numeric Telegram id — the backend disambiguates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_telegram_id: String,
    pub password: String,
}

/// Successful login / Telegram-login response envelope.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email_or_telegram_id: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub email_or_telegram_id: String,
    pub verification_code: String,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

/// Change-password request for a logged-in account.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

// ---------------------------------------------------------------------------
// Auth errors
// ---------------------------------------------------------------------------

/// Per-operation auth failure.
///
/// Auth flows deliberately discard the server's failure detail and surface
/// one generic message per operation — login errors must not leak whether
/// an account exists or which part of the credentials was wrong.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Login failed")]
    Login,
    #[error("Telegram login failed")]
    TelegramLogin,
    #[error("Registration failed")]
    Registration,
    #[error("Verification failed")]
    Verification,
    #[error("Failed to resend verification code")]
    Resend,
    #[error("Failed to send password reset email")]
    ForgotPassword,
    #[error("Password reset failed")]
    ResetPassword,
    #[error("Password change failed")]
    ChangePassword,
}
