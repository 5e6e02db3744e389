pub mod cookie;
pub mod credential;
pub mod identity;
pub mod store;

pub use self::credential::Credential;
pub use self::identity::role_of;
pub use self::store::SessionStore;
