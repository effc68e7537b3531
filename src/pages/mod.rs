//! Routed page components.

pub mod dashboard;
pub mod jobs;
pub mod login;
pub mod monitoring_rules;
pub mod register;
pub mod scan_results;
