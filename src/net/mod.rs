//! Network layer: typed wire envelopes and the HTTP auth client.

pub mod api;
pub mod types;
