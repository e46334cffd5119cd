//! Integration test suite for the attribute catalog and enumerations.
//!
//! ## Test Organization
//!
//! - `common/` - Shared fixtures and assertion macros
//! - `properties/` - Property tests over every declared enumeration
//!   - `enum_properties` - round-trip, rejection, case sensitivity
//!   - `determinism` - concurrent callers and the process-wide registry
//! - `integration/` - Reading and modifying directory entries end to end
//!
//! ## Usage
//!
//! ```bash
//! cargo test
//! cargo test properties::
//! ```

extern crate provisioning_attrs;

#[macro_use]
pub mod common;
pub mod integration;
pub mod properties;
