//! Student endpoints
//!
//! | Method | Path           | Effect                          |
//! |--------|----------------|---------------------------------|
//! | GET    | `/`            | list all students               |
//! | GET    | `/add`         | empty create form               |
//! | POST   | `/add`         | insert, redirect to `/`         |
//! | GET    | `/update/{id}` | edit form pre-filled from `id`  |
//! | POST   | `/update/{id}` | overwrite `id`, redirect to `/` |
//! | GET    | `/delete/{id}` | delete `id`, redirect to `/`    |
//!
//! Update and delete never check that `id` exists; showing the edit form for
//! a missing id is a 404.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Router,
};

use crate::db::StudentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{StudentId, ValidStudentForm};
use crate::http::server::AppState;
use crate::views::{Template, ViewData};

/// GET / - list all students
async fn list_students(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let students = StudentRepo::new(&state.pool).list_all().await?;
    let page = state
        .views
        .render(Template::StudentList, ViewData::Students(&students))?;
    Ok(Html(page))
}

/// GET /add - empty create form
async fn add_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let page = state.views.render(Template::AddStudent, ViewData::Empty)?;
    Ok(Html(page))
}

/// POST /add - insert a student
async fn create_student(
    State(state): State<Arc<AppState>>,
    ValidStudentForm(student): ValidStudentForm,
) -> Result<Redirect, ApiError> {
    let id = StudentRepo::new(&state.pool).insert(&student).await?;
    tracing::info!(id, "student created");
    Ok(Redirect::to("/"))
}

/// GET /update/{id} - edit form for an existing student
async fn edit_form(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Html<String>, ApiError> {
    let student = StudentRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "student",
            id: id.to_string(),
        })?;

    let page = state
        .views
        .render(Template::UpdateStudent, ViewData::Student(&student))?;
    Ok(Html(page))
}

/// POST /update/{id} - overwrite a student's fields
async fn update_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
    ValidStudentForm(student): ValidStudentForm,
) -> Result<Redirect, ApiError> {
    let changed = StudentRepo::new(&state.pool).update(id, &student).await?;
    if changed == 0 {
        tracing::debug!(id, "update matched no student");
    } else {
        tracing::info!(id, "student updated");
    }
    Ok(Redirect::to("/"))
}

/// GET /delete/{id} - remove a student
async fn delete_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Redirect, ApiError> {
    let removed = StudentRepo::new(&state.pool).delete(id).await?;
    if removed == 0 {
        tracing::debug!(id, "delete matched no student");
    } else {
        tracing::info!(id, "student deleted");
    }
    Ok(Redirect::to("/"))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_students))
        .route("/add", get(add_form).post(create_student))
        .route("/update/{id}", get(edit_form).post(update_student))
        .route("/delete/{id}", get(delete_student))
}
