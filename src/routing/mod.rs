//! Route table and the navigation guard that gates transitions.

pub mod guard;
pub mod routes;
