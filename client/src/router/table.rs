use shared::types::Role;

// ---------------------------------------------------------------------------
// Route names
// ---------------------------------------------------------------------------

/// Canonical route names. Redirect targets reference these, so they live
/// here rather than being stringly scattered across callers.
pub mod names {
    pub const HOME: &str = "home";
    pub const LOGIN: &str = "login";
    pub const REGISTER: &str = "register";
    pub const VERIFY: &str = "verify";
    pub const FORGOT_PASSWORD: &str = "forgot-password";
    pub const RESET_PASSWORD: &str = "reset-password";
    pub const PROFILE: &str = "profile";
    pub const ALL_ORDERS: &str = "all-orders";
    pub const ALL_ORDER_DETAILS: &str = "all-order-details";
    pub const ADMIN_UPLOAD_ORDERS: &str = "admin-upload-orders";
    pub const ADMIN_USERS: &str = "admin-users";
    pub const ADMIN_SCAN_LOGS: &str = "admin-scan-logs";
}

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

/// Access requirements declared on a route at table-construction time.
#[derive(Debug, Clone, Default)]
pub struct RouteRequirement {
    pub requires_auth: bool,
    pub guest_only: bool,
    /// Minimum role, checked against the role hierarchy. Implies
    /// `requires_auth` in every route this table builds.
    pub required_role: Option<Role>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub requirement: RouteRequirement,
}

/// Declarative navigation table.
///
/// Three access tiers mirror what the views need:
///
///   open       — reachable by anyone (`/verify` is deliberately open:
///                a user may land on it from an email link whether or not
///                they are logged in).
///   guest_only — auth screens that make no sense once logged in.
///   authed     — requires an active credential; optionally role-gated.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route with no access requirement.
    pub fn open(mut self, name: &'static str, path: &'static str) -> Self {
        self.routes.push(Route {
            name,
            path,
            requirement: RouteRequirement::default(),
        });
        self
    }

    /// Route reachable only while anonymous.
    pub fn guest_only(mut self, name: &'static str, path: &'static str) -> Self {
        self.routes.push(Route {
            name,
            path,
            requirement: RouteRequirement {
                guest_only: true,
                ..Default::default()
            },
        });
        self
    }

    /// Route requiring an active credential.
    pub fn authed(mut self, name: &'static str, path: &'static str) -> Self {
        self.routes.push(Route {
            name,
            path,
            requirement: RouteRequirement {
                requires_auth: true,
                ..Default::default()
            },
        });
        self
    }

    /// Route requiring an active credential whose role satisfies `role`.
    pub fn role_gated(mut self, name: &'static str, path: &'static str, role: Role) -> Self {
        self.routes.push(Route {
            name,
            path,
            requirement: RouteRequirement {
                requires_auth: true,
                guest_only: false,
                required_role: Some(role),
            },
        });
        self
    }

    pub fn find(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Resolve a concrete path (query string tolerated) to a route.
    pub fn match_path(&self, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|r| Self::path_matches(r.path, path))
    }

    pub fn path_matches(route_path: &str, request_path: &str) -> bool {
        // Strip query string from the incoming path before comparing.
        let clean = request_path.split('?').next().unwrap_or(request_path);

        // Exact match.
        if route_path == clean {
            return true;
        }

        // Segment-by-segment matching for `:param` wildcards.
        // e.g.  "/all-orders/:orderId"  matches  "/all-orders/LP42"
        let route_segs: Vec<&str> = route_path.split('/').collect();
        let path_segs: Vec<&str> = clean.split('/').collect();

        if route_segs.len() != path_segs.len() {
            return false;
        }

        route_segs
            .iter()
            .zip(path_segs.iter())
            .all(|(r, p)| r.starts_with(':') || r == p)
    }
}

/// The application's navigation table.
pub fn app_routes() -> RouteTable {
    use names::*;

    RouteTable::new()
        .authed(HOME, "/")
        .guest_only(LOGIN, "/login")
        .guest_only(REGISTER, "/register")
        .open(VERIFY, "/verify")
        .guest_only(FORGOT_PASSWORD, "/forgot-password")
        .guest_only(RESET_PASSWORD, "/reset-password")
        .authed(PROFILE, "/profile")
        .authed(ALL_ORDERS, "/all-orders")
        .authed(ALL_ORDER_DETAILS, "/all-orders/:orderId")
        .role_gated(ADMIN_UPLOAD_ORDERS, "/admin/upload-orders", Role::Admin)
        .role_gated(ADMIN_USERS, "/admin/users", Role::Admin)
        .role_gated(ADMIN_SCAN_LOGS, "/admin/scan-logs", Role::Admin)
}
