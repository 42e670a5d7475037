use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::{IntoParams, ToSchema};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "first_name": "John",
        "last_name": "Doe",
        "email": "john.doe@company.com",
        "position": "Software Engineer",
        "department": "Engineering",
        "salary": 75000.0,
        "hire_date": "2023-01-15",
        "status": "active",
        "phone": "+1-555-0123",
        "address": "123 Main St, Anytown, USA"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Software Engineer")]
    pub position: String,

    /// Free-text label, departments are derived from whatever values appear
    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = 75000.0)]
    pub salary: f64,

    #[schema(
        example = "2023-01-15",
        value_type = String,
        format = "date"
    )]
    pub hire_date: NaiveDate,

    pub status: EmployeeStatus,

    #[schema(example = "+1-555-0123", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = "123 Main St, Anytown, USA", nullable = true)]
    pub address: Option<String>,
}

impl Employee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john@email.com", format = "email")]
    pub email: String,
    #[schema(example = "Software Engineer")]
    pub position: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 75000.0)]
    pub salary: f64,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub hire_date: NaiveDate,
    #[serde(default = "default_status")]
    pub status: EmployeeStatus,
    pub phone: Option<String>,
    pub address: Option<String>,
}

fn default_status() -> EmployeeStatus {
    EmployeeStatus::Active
}

/// Partial update, absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    #[schema(example = "2026-01-01", format = "date", value_type = Option<String>)]
    pub hire_date: Option<NaiveDate>,
    pub status: Option<EmployeeStatus>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UpdateEmployee {
    /// Shallow merge over `employee`.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(v) = self.first_name {
            employee.first_name = v;
        }
        if let Some(v) = self.last_name {
            employee.last_name = v;
        }
        if let Some(v) = self.email {
            employee.email = v;
        }
        if let Some(v) = self.position {
            employee.position = v;
        }
        if let Some(v) = self.department {
            employee.department = v;
        }
        if let Some(v) = self.salary {
            employee.salary = v;
        }
        if let Some(v) = self.hire_date {
            employee.hire_date = v;
        }
        if let Some(v) = self.status {
            employee.status = v;
        }
        if self.phone.is_some() {
            employee.phone = self.phone;
        }
        if self.address.is_some() {
            employee.address = self.address;
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EmployeeQuery {
    /// Filter by exact department label
    pub department: Option<String>,
    /// Filter by status (`active` / `inactive`)
    pub status: Option<EmployeeStatus>,
    /// Search by name or email
    pub search: Option<String>,
}

impl EmployeeQuery {
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(department) = &self.department {
            if &employee.department != department {
                return false;
            }
        }

        if let Some(status) = self.status {
            if employee.status != status {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = [&employee.first_name, &employee.last_name, &employee.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}
