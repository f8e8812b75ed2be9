//! Typed wrappers for the HR domain verbs exposed as action sub-resources.

use serde_json::{Value, json};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::Employee;
use crate::resource::EntityId;

/// HR operations that don't fit the generic CRUD surface.
#[derive(Debug, Clone)]
pub struct HrService {
    api: ApiClient,
}

impl HrService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Approve a pending leave request.
    pub async fn approve_leave(&self, id: EntityId) -> Result<Value, ApiError> {
        self.api
            .post_action("leave-requests", id, "approve", &json!({}))
            .await
    }

    /// Reject a pending leave request.
    pub async fn reject_leave(&self, id: EntityId) -> Result<Value, ApiError> {
        self.api
            .post_action("leave-requests", id, "reject", &json!({}))
            .await
    }

    /// Assign an employee as a department's manager.
    pub async fn assign_manager(
        &self,
        department_id: EntityId,
        employee_id: EntityId,
    ) -> Result<Value, ApiError> {
        self.api
            .post_action(
                "departments",
                department_id,
                "assign_manager",
                &json!({ "employee_id": employee_id }),
            )
            .await
    }

    /// Mark a payroll run as paid.
    pub async fn mark_payroll_paid(&self, id: EntityId) -> Result<Value, ApiError> {
        self.api
            .post_action("payrolls", id, "mark_as_paid", &json!({}))
            .await
    }

    /// The calling user's employee record.
    ///
    /// Users without one (e.g. system administrators) get `Ok(None)`, not
    /// an error; every other failure propagates.
    pub async fn my_employee_profile(&self) -> Result<Option<Employee>, ApiError> {
        self.api.get_optional("employees/me/").await
    }
}
