pub mod app_config;
pub mod auth;
pub mod claims;
pub mod instruction_link;
pub mod json_error;
pub mod order;
pub mod page;
pub mod scan_log;
pub mod user;

pub use self::auth::AuthError;
pub use self::claims::{Role, TokenClaims, decode_claims};
pub use self::json_error::ErrorBody;
pub use self::page::{PageEnvelope, Paginated};
