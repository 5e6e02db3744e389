pub mod guard;
pub mod table;

pub use self::guard::{Access, Navigator, evaluate};
pub use self::table::{Route, RouteRequirement, RouteTable, app_routes, names};
