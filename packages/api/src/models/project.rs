use serde::{Deserialize, Serialize};

/// A named container of detection records, as listed by `/api/project/list`.
///
/// The backend sends Mongo-style `_id` / `project_name`; any other fields it
/// includes (`user_id`, timestamps) are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "project_name", alias = "name", default)]
    pub name: String,
}

/// Body of `POST /api/project/create` and `PUT /api/project/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectNameRequest {
    pub project_name: String,
}
