use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record as accepted and returned by the API. All fields are required.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct User {
    pub last_name: String,
    pub first_name: String,
    pub age: i64,
}
