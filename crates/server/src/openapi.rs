use utoipa::OpenApi;
use utoipa::ToSchema;

use common::types::HttpError;
use service::users::User;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "User store API", description = "Create, read and delete users held in memory"),
    paths(
        crate::routes::health,
        crate::routes::users::get_user,
        crate::routes::users::create_user,
        crate::routes::users::delete_user,
    ),
    components(schemas(HealthResponse, User, HttpError)),
    tags((name = "health"), (name = "user"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_user_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths["/user/{user_id}"]["get"].is_object());
        assert!(paths["/user"]["put"].is_object());
        assert!(paths["/user"]["delete"].is_object());
        assert!(paths["/health"]["get"].is_object());
    }

    #[test]
    fn user_schema_requires_all_fields() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let user = &doc["components"]["schemas"]["User"];
        let mut required: Vec<&str> = user["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        required.sort_unstable();
        assert_eq!(required, ["age", "first_name", "last_name"]);
        assert_eq!(user["properties"]["age"]["type"], "integer");
    }
}
