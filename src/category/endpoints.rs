//! JSON request handlers for the `/categories` routes.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{
        FromRef, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    app_state::lock_connection,
    category::{
        Category, CategoryForm, CategoryName, create_category, delete_category,
        get_all_categories, get_category, update_category,
    },
    database_id::CategoryId,
    responses::{Created, Deleted, Updated},
};

/// The state needed by the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryState {
    /// The database connection for managing categories.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle category creation, responds with the new ID.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    payload: Result<Json<CategoryForm>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(form) = payload?;
    let name = CategoryName::new(&form.name)?;

    let connection = lock_connection(&state.db_connection)?;
    let category = create_category(name, form.category_type, &connection)?;
    tracing::debug!("Created category {} \"{}\"", category.id, category.name);

    Ok((StatusCode::CREATED, Json(Created { id: category.id })))
}

/// List every category in the order they were created.
pub async fn list_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_categories(&connection).map(Json)
}

/// Get a single category, responds with 404 if it does not exist.
pub async fn get_category_endpoint(
    State(state): State<CategoryState>,
    category_id: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<Category>, Error> {
    let Path(category_id) = category_id?;
    let connection = lock_connection(&state.db_connection)?;

    get_category(category_id, &connection).map(Json)
}

/// Replace a category's name and type, responds with 404 if it does not exist.
pub async fn update_category_endpoint(
    State(state): State<CategoryState>,
    category_id: Result<Path<CategoryId>, PathRejection>,
    payload: Result<Json<CategoryForm>, JsonRejection>,
) -> Result<Json<Updated>, Error> {
    let Path(category_id) = category_id?;
    let Json(form) = payload?;
    let name = CategoryName::new(&form.name)?;

    let connection = lock_connection(&state.db_connection)?;
    update_category(category_id, name, form.category_type, &connection)?;

    Ok(Json(Updated {
        updated_id: category_id,
    }))
}

/// Delete a category, responds with 404 if it does not exist.
///
/// Transactions in the category are not modified.
pub async fn delete_category_endpoint(
    State(state): State<CategoryState>,
    category_id: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<Deleted>, Error> {
    let Path(category_id) = category_id?;
    let connection = lock_connection(&state.db_connection)?;

    delete_category(category_id, &connection)?;

    Ok(Json(Deleted {
        deleted_id: category_id,
    }))
}
