//! Course registry
//!
//! The registry owns the ordered course collection. Every operation holds the
//! collection lock for its whole body, so a lookup, its validation and the
//! following mutation are never interleaved with another writer.

use serde_json::Value;
use tokio::sync::RwLock;

use crate::types::{seed_courses, Course, CourseId};
use crate::validation::validate_course;
use crate::{Error, Result};

/// In-memory, insertion-ordered collection of courses
pub struct CourseRegistry {
    courses: RwLock<Vec<Course>>,
}

impl CourseRegistry {
    /// Create a registry holding the given records, in order
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
        }
    }

    /// Create a registry holding the three startup records
    pub fn seeded() -> Self {
        Self::with_courses(seed_courses())
    }

    /// All courses in insertion order
    pub async fn list(&self) -> Vec<Course> {
        self.courses.read().await.clone()
    }

    /// Number of stored courses
    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.courses.read().await.is_empty()
    }

    /// First course whose id matches
    pub async fn get(&self, id: CourseId) -> Result<Course> {
        let courses = self.courses.read().await;
        courses
            .iter()
            .find(|course| course.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Validate the payload and append a new course.
    ///
    /// The id is the collection size plus one, not the largest id plus one.
    /// This stays unique only while nothing is ever removed.
    pub async fn create(&self, payload: &Value) -> Result<Course> {
        let mut courses = self.courses.write().await;

        let name = validate_course(payload).map_err(|report| {
            tracing::debug!(%report, ?payload, "Rejected course creation");
            report
        })?;

        let course = Course::new(courses.len() as CourseId + 1, name);
        courses.push(course.clone());

        tracing::info!(id = course.id, name = %course.name, "Course created");
        Ok(course)
    }

    /// Rename an existing course. The lookup happens before validation, so an
    /// unknown id is reported as not found whatever the payload.
    pub async fn update(&self, id: CourseId, payload: &Value) -> Result<Course> {
        let mut courses = self.courses.write().await;

        let course = courses
            .iter_mut()
            .find(|course| course.id == id)
            .ok_or(Error::NotFound)?;

        let name = validate_course(payload).map_err(|report| {
            tracing::debug!(id, %report, "Rejected course update");
            report
        })?;

        course.name = name;

        tracing::info!(id, name = %course.name, "Course updated");
        Ok(course.clone())
    }
}

impl Default for CourseRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_registry() {
        let registry = CourseRegistry::seeded();
        let courses = registry.list().await;

        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0], Course::new(1, "course1"));
        assert_eq!(courses[2], Course::new(3, "course3"));
    }

    #[tokio::test]
    async fn test_create_assigns_size_based_id() {
        let registry = CourseRegistry::seeded();

        let first = registry.create(&json!({ "name": "algebra" })).await.unwrap();
        assert_eq!(first, Course::new(4, "algebra"));

        let second = registry.create(&json!({ "name": "geometry" })).await.unwrap();
        assert_eq!(second.id, 5);

        let courses = registry.list().await;
        assert_eq!(courses.len(), 5);
        assert_eq!(courses.last(), Some(&second));
    }

    #[tokio::test]
    async fn test_create_id_follows_size_not_max_id() {
        let registry = CourseRegistry::with_courses(vec![Course::new(10, "physics")]);

        let course = registry.create(&json!({ "name": "chemistry" })).await.unwrap();
        assert_eq!(course.id, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload_without_mutation() {
        let registry = CourseRegistry::seeded();

        for payload in [json!({}), json!({ "name": "ab" }), json!({ "name": 7 })] {
            let err = registry.create(&payload).await.unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }

        assert_eq!(registry.len().await, 3);
    }

    #[tokio::test]
    async fn test_get() {
        let registry = CourseRegistry::seeded();

        assert_eq!(registry.get(2).await.unwrap(), Course::new(2, "course2"));
        assert!(matches!(registry.get(99).await, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let registry = CourseRegistry::seeded();

        let created = registry.create(&json!({ "name": "abc" })).await.unwrap();
        let fetched = registry.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_renames_in_place() {
        let registry = CourseRegistry::seeded();

        let updated = registry
            .update(1, &json!({ "name": "geometry" }))
            .await
            .unwrap();
        assert_eq!(updated, Course::new(1, "geometry"));

        let courses = registry.list().await;
        assert_eq!(courses[0], Course::new(1, "geometry"));
        assert_eq!(courses.len(), 3);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_before_validation() {
        let registry = CourseRegistry::seeded();

        let err = registry.update(99, &json!({ "name": "x" })).await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
        assert_eq!(registry.list().await, seed_courses());
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_payload_without_mutation() {
        let registry = CourseRegistry::seeded();

        let err = registry.update(1, &json!({ "name": "x" })).await.unwrap_err();
        match err {
            Error::Validation(report) => assert_eq!(
                report.first_message(),
                "\"name\" length must be at least 3 characters long"
            ),
            other => panic!("Unexpected error: {other:?}"),
        }
        assert_eq!(registry.get(1).await.unwrap().name, "course1");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_creates_get_distinct_sequential_ids() {
        const CREATES: u64 = 200;
        let registry = Arc::new(CourseRegistry::seeded());

        let handles: Vec<_> = (0..CREATES)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry
                        .create(&json!({ "name": format!("course-{i}") }))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = BTreeSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id);
        }

        let expected: BTreeSet<CourseId> = (4..=CREATES + 3).collect();
        assert_eq!(ids, expected);
        assert_eq!(registry.len().await as u64, CREATES + 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_updates_and_creates_keep_ids_stable() {
        let registry = Arc::new(CourseRegistry::seeded());

        let handles: Vec<_> = (0..100u64)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    if i % 2 == 0 {
                        registry
                            .update(1 + i % 3, &json!({ "name": format!("renamed-{i}") }))
                            .await
                            .map(|course| course.id)
                    } else {
                        registry
                            .create(&json!({ "name": format!("added-{i}") }))
                            .await
                            .map(|course| course.id)
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let courses = registry.list().await;
        let ids: Vec<CourseId> = courses.iter().map(|course| course.id).collect();
        assert_eq!(ids, (1..=53).collect::<Vec<_>>());
    }
}
