//! Property tests over every declared enumeration.

pub mod determinism;
pub mod enum_properties;
