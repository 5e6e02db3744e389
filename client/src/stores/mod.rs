pub mod auth;
pub mod instruction_links;
pub mod orders;
pub mod scan_logs;
pub mod users;

pub use self::auth::AuthStore;
pub use self::instruction_links::InstructionLinksStore;
pub use self::orders::OrdersStore;
pub use self::scan_logs::ScanLogsStore;
pub use self::users::UsersStore;
