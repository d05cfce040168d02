//! JSON bodies returned by the write endpoints.

use serde::{Deserialize, Serialize};

use crate::database_id::DatabaseId;

/// The response to a successful create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: DatabaseId,
}

/// The response to a successful update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Updated {
    #[serde(rename = "updatedID")]
    pub updated_id: DatabaseId,
}

/// The response to a successful delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    #[serde(rename = "deletedID")]
    pub deleted_id: DatabaseId,
}
