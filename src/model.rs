//! ERP entity models and their REST collection paths.
//!
//! Wire shapes follow the backend's conventions: snake_case fields,
//! SCREAMING_SNAKE_CASE status enums, optional fields omitted rather than
//! sent as null where the backend tolerates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{EntityId, Resource, RestResource, StatusFlag};
use crate::table::Tabular;

/// An application login account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Role name as the backend reports it (e.g. `admin`, `hr`, `cashier`).
    pub role: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for User {
    const LABEL: &'static str = "user";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl RestResource for User {
    const PATH: &'static str = "users";
}

impl StatusFlag for User {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Tabular for User {
    fn columns() -> &'static [&'static str] {
        &["username", "email", "first_name", "last_name", "role", "is_active"]
    }

    fn value(&self, column: &str) -> Option<String> {
        match column {
            "username" => Some(self.username.clone()),
            "email" => Some(self.email.clone()),
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            "role" => Some(self.role.clone()),
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

/// Reference to the employee managing a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerRef {
    pub id: EntityId,
    pub name: String,
    pub position: String,
}

/// An organisational department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    pub cost_center: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<ManagerRef>,
}

impl Resource for Department {
    const LABEL: &'static str = "department";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl RestResource for Department {
    const PATH: &'static str = "departments";
}

impl Tabular for Department {
    fn columns() -> &'static [&'static str] {
        &["name", "cost_center", "manager"]
    }

    fn value(&self, column: &str) -> Option<String> {
        match column {
            "name" => Some(self.name.clone()),
            "cost_center" => Some(self.cost_center.clone()),
            "manager" => self.manager.as_ref().map(|m| m.name.clone()),
            _ => None,
        }
    }
}

/// Employment status as the backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Inactive,
}

/// An employee record (the HR view, distinct from the login [`User`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub status: EmployeeStatus,
}

impl Resource for Employee {
    const LABEL: &'static str = "employee";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl RestResource for Employee {
    const PATH: &'static str = "employees";
}

impl StatusFlag for Employee {
    fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Deactivation maps to `INACTIVE`; `ON_LEAVE` is only ever set by the
    /// backend's leave workflow.
    fn set_active(&mut self, active: bool) {
        self.status = if active {
            EmployeeStatus::Active
        } else {
            EmployeeStatus::Inactive
        };
    }
}

impl Tabular for Employee {
    fn columns() -> &'static [&'static str] {
        &["name", "position", "department", "salary", "status"]
    }

    fn value(&self, column: &str) -> Option<String> {
        match column {
            "name" => Some(self.name.clone()),
            "position" => Some(self.position.clone()),
            "department" => self.department.clone(),
            "salary" => self.salary.map(|s| format!("{s:.2}")),
            "status" => Some(
                match self.status {
                    EmployeeStatus::Active => "ACTIVE",
                    EmployeeStatus::OnLeave => "ON_LEAVE",
                    EmployeeStatus::Inactive => "INACTIVE",
                }
                .to_string(),
            ),
            _ => None,
        }
    }
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub sku: String,
    pub price: f64,
    /// Units on hand across all stores.
    pub quantity: u32,
    pub is_active: bool,
}

impl Resource for Product {
    const LABEL: &'static str = "product";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl RestResource for Product {
    const PATH: &'static str = "products";
}

impl StatusFlag for Product {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Tabular for Product {
    fn columns() -> &'static [&'static str] {
        &["name", "sku", "price", "quantity", "is_active"]
    }

    fn value(&self, column: &str) -> Option<String> {
        match column {
            "name" => Some(self.name.clone()),
            "sku" => Some(self.sku.clone()),
            "price" => Some(format!("{:.2}", self.price)),
            "quantity" => Some(self.quantity.to_string()),
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

/// A physical store location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLocation {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub is_active: bool,
}

impl Resource for StoreLocation {
    const LABEL: &'static str = "store";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl RestResource for StoreLocation {
    const PATH: &'static str = "stores";
}

impl StatusFlag for StoreLocation {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Tabular for StoreLocation {
    fn columns() -> &'static [&'static str] {
        &["name", "location", "is_active"]
    }

    fn value(&self, column: &str) -> Option<String> {
        match column {
            "name" => Some(self.name.clone()),
            "location" => Some(self.location.clone()),
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_status_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_value(EmployeeStatus::OnLeave).unwrap(),
            json!("ON_LEAVE")
        );
        let status: EmployeeStatus = serde_json::from_value(json!("ACTIVE")).unwrap();
        assert_eq!(status, EmployeeStatus::Active);
    }

    #[test]
    fn employee_active_flag_round_trips_through_status() {
        let mut employee = Employee {
            id: 1,
            name: "T. Moyo".into(),
            position: "Accountant".into(),
            department: Some("Finance".into()),
            salary: Some(65000.0),
            status: EmployeeStatus::OnLeave,
        };
        assert!(!employee.is_active());
        employee.set_active(true);
        assert_eq!(employee.status, EmployeeStatus::Active);
        employee.set_active(false);
        assert_eq!(employee.status, EmployeeStatus::Inactive);
    }

    #[test]
    fn department_decodes_without_a_manager() {
        let dept: Department = serde_json::from_value(json!({
            "id": 3,
            "name": "Stores",
            "cost_center": "CC-300",
        }))
        .unwrap();
        assert_eq!(dept.manager, None);
        assert_eq!(dept.value("manager"), None);
    }

    #[test]
    fn tabular_values_cover_every_declared_column() {
        let user = User {
            id: 1,
            username: "tmoyo".into(),
            email: "tmoyo@example.com".into(),
            first_name: "Tendai".into(),
            last_name: "Moyo".into(),
            role: "hr".into(),
            is_active: true,
            created_at: None,
        };
        for column in User::columns() {
            assert!(user.value(column).is_some(), "missing value for {column}");
        }
        assert_eq!(user.value("no_such_column"), None);
    }

    #[test]
    fn rest_paths_match_the_backend_collections() {
        assert_eq!(User::PATH, "users");
        assert_eq!(Department::PATH, "departments");
        assert_eq!(Employee::PATH, "employees");
        assert_eq!(Product::PATH, "products");
        assert_eq!(StoreLocation::PATH, "stores");
    }
}
