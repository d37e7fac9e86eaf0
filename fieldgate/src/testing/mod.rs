//! Test support: fixtures and assertion helpers.
//!
//! Exposed as a normal module so downstream crates can reuse the fixtures
//! in their own tests.

mod assertions;
mod fixtures;

pub use assertions::{assert_failed, assert_passed, assert_violates};
pub use fixtures::{course_registry, Course};
