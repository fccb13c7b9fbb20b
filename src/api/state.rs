//! API server state

use std::sync::Arc;

use crate::registry::CourseRegistry;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Course registry shared by every handler
    pub registry: Arc<CourseRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<CourseRegistry>) -> Self {
        Self { registry }
    }
}
