//! Course Registry - a small in-memory course catalogue served over HTTP
//!
//! The service keeps an ordered list of courses in process memory and offers:
//! - Listing and lookup by id
//! - Creation with size-based id assignment
//! - In-place renames
//! - Schema-style validation of the `name` field

pub mod api;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use registry::CourseRegistry;
