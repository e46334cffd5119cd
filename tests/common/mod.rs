//! Common test utilities: fixtures and assertion macros.

use provisioning_attrs::EnumDefinition;
use provisioning_attrs::enums;

pub mod fixtures;

/// Assert that a result failed with an "invalid request" class error.
#[macro_export]
macro_rules! assert_invalid_request {
    ($result:expr) => {
        match $result {
            Err(err) if err.is_invalid_request() => {}
            Err(other) => panic!("Expected invalid request error, got {:?}", other),
            Ok(_) => panic!("Expected invalid request error, but validation passed"),
        }
    };
}

/// Assert that an error's message contains a substring.
#[macro_export]
macro_rules! assert_error_message_contains {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(err) => assert!(
                err.to_string().contains($substring),
                "Error message '{}' does not contain '{}'",
                err.to_string(),
                $substring
            ),
            Ok(_) => panic!(
                "Expected error containing '{}', but validation passed",
                $substring
            ),
        }
    };
}

/// Every declared definition paired with its position, for proptest selection.
pub fn indexed_definitions() -> Vec<(usize, &'static EnumDefinition)> {
    enums::all().iter().enumerate().collect()
}

/// Total number of declared variants across every enumeration.
pub fn total_variants() -> usize {
    enums::all().iter().map(EnumDefinition::len).sum()
}
