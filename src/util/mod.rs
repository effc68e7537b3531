//! Browser-environment helpers.

pub mod storage;
