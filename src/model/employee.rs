use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "EMP-001",
        "name": "John Doe",
        "designation": "Machine Operator",
        "department": "Assembly",
        "picture_url": "https://cdn.example.com/emp-001.png"
    })
)]
pub struct Employee {
    #[schema(example = "EMP-001")]
    pub id: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "Machine Operator", nullable = true)]
    #[serde(default)]
    pub designation: Option<String>,

    #[schema(example = "Assembly", nullable = true)]
    #[serde(default)]
    pub department: Option<String>,

    /// Public URL to the employee picture
    #[schema(example = "https://cdn.example.com/emp-001.png", nullable = true)]
    #[serde(default, alias = "employee_picture_link")]
    pub picture_url: Option<String>,
}

impl Employee {
    /// Overlay `update` onto `self`: present optional fields replace, absent ones are kept.
    pub fn merge(&mut self, update: Employee) {
        self.name = update.name;
        if update.designation.is_some() {
            self.designation = update.designation;
        }
        if update.department.is_some() {
            self.department = update.department;
        }
        if update.picture_url.is_some() {
            self.picture_url = update.picture_url;
        }
    }
}

/// Whether an upsert created a new row or touched an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}
