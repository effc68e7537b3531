//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs so it can be unit-tested without a reactive
//! runtime; the app wires each one into an `RwSignal` provided via context.

pub mod session;
