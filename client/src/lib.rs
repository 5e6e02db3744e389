//! Headless front-end for the shipment-tracking backend.
//!
//! The pieces, leaves first: the session store (credential lifecycle +
//! cookie-record persistence), the route table and access evaluator, the
//! API client (bearer attach on the way out, 401/403 policy on the way
//! in), and one state container per entity the views render. The backend
//! REST API is an external collaborator; nothing here implements
//! server-side behavior.

pub mod api;
pub mod router;
pub mod session;
pub mod stores;
pub mod util;
