pub mod handlers;
pub mod id;
pub mod models;
pub mod store;

use async_trait::async_trait;
use axum::{routing::get, Router};
use courses_kernel::{InitCtx, Module};
use serde_json::json;

use store::CourseStore;

/// Courses module: CRUD over the in-memory course table
pub struct CoursesModule {
    store: CourseStore,
}

impl CoursesModule {
    pub fn new() -> Self {
        Self::with_store(CourseStore::new())
    }

    pub fn with_store(store: CourseStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CourseStore {
        &self.store
    }
}

impl Default for CoursesModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for CoursesModule {
    fn name(&self) -> &'static str {
        "courses"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.store.seed {
            for course in models::seed_courses() {
                self.store.insert(course).await;
            }
        }

        let courses = self.store.len().await;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            courses,
            "courses module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route(
                "/",
                get(handlers::list_courses).post(handlers::create_course),
            )
            .route(
                "/{id}",
                get(handlers::get_course)
                    .post(handlers::update_course)
                    .delete(handlers::delete_course),
            )
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let course = json!({ "$ref": "#/components/schemas/Course" });
        let error = json!({
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorBody" }
                }
            }
        });
        let id_param = json!([{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "string" }
        }]);
        let course_response = |description: &str| {
            json!({
                "description": description,
                "content": { "application/json": { "schema": course.clone() } }
            })
        };
        let with_description = |description: &str| {
            let mut response = error.clone();
            response["description"] = json!(description);
            response
        };

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List courses",
                        "tags": ["Courses"],
                        "responses": {
                            "200": {
                                "description": "Every course in insertion order",
                                "content": {
                                    "application/json": {
                                        "schema": { "type": "array", "items": course }
                                    }
                                }
                            },
                            "500": with_description("Encoding failure")
                        }
                    },
                    "post": {
                        "summary": "Create a course",
                        "tags": ["Courses"],
                        "requestBody": {
                            "content": { "application/json": { "schema": course } }
                        },
                        "responses": {
                            "201": course_response("Created course with a generated id"),
                            "400": with_description("Empty body or missing name")
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get a course",
                        "tags": ["Courses"],
                        "parameters": id_param,
                        "responses": {
                            "200": course_response("The course"),
                            "404": with_description("Course not found")
                        }
                    },
                    "post": {
                        "summary": "Replace a course",
                        "tags": ["Courses"],
                        "parameters": id_param,
                        "requestBody": {
                            "content": { "application/json": { "schema": course } }
                        },
                        "responses": {
                            "200": course_response("Updated course"),
                            "400": with_description("Empty id, empty body or missing name"),
                            "404": with_description("Course not found")
                        }
                    },
                    "delete": {
                        "summary": "Delete a course",
                        "tags": ["Courses"],
                        "parameters": id_param,
                        "responses": {
                            "200": course_response("Removed course"),
                            "400": with_description("Empty id"),
                            "404": with_description("Course not found")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Course": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "price": { "type": "number" },
                            "author": { "$ref": "#/components/schemas/Author" }
                        },
                        "required": ["name"]
                    },
                    "Author": {
                        "type": "object",
                        "properties": {
                            "fullname": { "type": "string" },
                            "website": { "type": "string" }
                        }
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "courses module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let courses = self.store.len().await;
        tracing::info!(
            module = self.name(),
            courses,
            "courses module stopped"
        );
        Ok(())
    }
}

/// Create a new instance of the courses module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(CoursesModule::new())
}
