//! End-to-end tests that read and modify directory entries.

pub mod provisioning_flow;
