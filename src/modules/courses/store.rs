use std::sync::Arc;

use tokio::sync::RwLock;

use super::models::Course;

/// In-memory course table.
///
/// Records keep insertion order and every lookup is a linear scan by id. Each
/// operation holds the lock for its whole duration, so concurrent handlers
/// never observe a half-applied mutation.
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    courses: Arc<RwLock<Vec<Course>>>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(RwLock::new(courses)),
        }
    }

    /// Snapshot of every course in current order.
    pub async fn list(&self) -> Vec<Course> {
        self.courses.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Course> {
        self.courses
            .read()
            .await
            .iter()
            .find(|course| course.id == id)
            .cloned()
    }

    /// Append a course to the end of the table.
    pub async fn insert(&self, course: Course) {
        tracing::debug!(id = %course.id, "inserting course");
        self.courses.write().await.push(course);
    }

    /// Swap the first course matching `id` for `course`, keeping its position.
    ///
    /// The stored record always keeps `id`, whatever `course.id` holds.
    /// Returns the stored record, or `None` when nothing matches.
    pub async fn replace(&self, id: &str, mut course: Course) -> Option<Course> {
        let mut courses = self.courses.write().await;
        let slot = courses.iter_mut().find(|existing| existing.id == id)?;

        course.id = id.to_string();
        *slot = course.clone();
        tracing::debug!(id, "replaced course");
        Some(course)
    }

    /// Remove the first course matching `id`, shifting later records down.
    pub async fn remove(&self, id: &str) -> Option<Course> {
        let mut courses = self.courses.write().await;
        let index = courses.iter().position(|course| course.id == id)?;

        tracing::debug!(id, "removing course");
        Some(courses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::courses::models::seed_courses;

    fn course(id: &str, name: &str) -> Course {
        Course {
            id: id.to_string(),
            name: name.to_string(),
            ..Course::default()
        }
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[tokio::test]
    async fn insert_appends_in_order() {
        let store = CourseStore::new();
        store.insert(course("a", "A")).await;
        store.insert(course("b", "B")).await;

        assert_eq!(ids(&store.list().await), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn find_returns_first_match() {
        let store = CourseStore::with_courses(vec![
            course("dup", "first"),
            course("dup", "second"),
        ]);

        assert_eq!(store.find_by_id("dup").await.unwrap().name, "first");
        assert!(store.find_by_id("nope").await.is_none());
    }

    #[tokio::test]
    async fn replace_keeps_position_and_id() {
        let store = CourseStore::with_courses(seed_courses());
        store.insert(course("c", "C")).await;

        let updated = store
            .replace("1", course("hijacked", "Renamed"))
            .await
            .unwrap();
        assert_eq!(updated.id, "1");

        let courses = store.list().await;
        assert_eq!(ids(&courses), vec!["1", "2", "c"]);
        assert_eq!(courses[0].name, "Renamed");
    }

    #[tokio::test]
    async fn replace_missing_is_none() {
        let store = CourseStore::with_courses(seed_courses());
        assert!(store.replace("9", course("9", "X")).await.is_none());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn remove_shifts_remaining_records() {
        let store = CourseStore::with_courses(vec![
            course("a", "A"),
            course("b", "B"),
            course("c", "C"),
        ]);

        assert_eq!(store.remove("b").await.unwrap().name, "B");
        assert_eq!(ids(&store.list().await), vec!["a", "c"]);
        assert!(store.remove("b").await.is_none());
    }

    #[tokio::test]
    async fn concurrent_inserts_are_not_lost() {
        let store = CourseStore::new();
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(course(&i.to_string(), "N")).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.len().await, 32);
    }
}
