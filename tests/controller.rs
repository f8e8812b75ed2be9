//! Optimistic controller behaviour against a scripted in-memory backend.
//!
//! Exercises the snapshot / local-apply / reconcile-or-rollback contract
//! without touching the network: the backend is a script of canned
//! responses, and the shared view store is inspected for the notifications
//! each outcome must emit.

use std::cell::{Cell, RefCell};

use finplus_client::{
    ApiError, EntityId, NotificationKind, Resource, ResourceBackend, ResourceController,
    StatusBackend, StatusFlag, User, ViewStore,
};

fn user(id: EntityId, username: &str, active: bool) -> User {
    User {
        id,
        username: username.into(),
        email: format!("{username}@example.com"),
        first_name: "Test".into(),
        last_name: "User".into(),
        role: "hr".into(),
        is_active: active,
        created_at: None,
    }
}

fn server_error(message: Option<&str>) -> ApiError {
    ApiError::Status {
        status: 500,
        message: message.map(str::to_string),
    }
}

/// Scripted backend: canned list, toggleable failure, call recording.
#[derive(Default)]
struct ScriptedBackend {
    list_result: RefCell<Vec<User>>,
    /// Fail the next call with this message (None inside = generic failure).
    fail_with: RefCell<Option<Option<String>>>,
    /// Id assigned to the next created record.
    next_created_id: Cell<EntityId>,
    /// Role stamped onto update responses, to exercise reconciliation.
    update_role_override: RefCell<Option<String>>,
    status_calls: RefCell<Vec<(EntityId, bool)>>,
    /// After this many successful set_status calls, fail the rest.
    fail_status_after: Cell<Option<usize>>,
}

impl ScriptedBackend {
    fn fail_next(&self, message: Option<&str>) {
        *self.fail_with.borrow_mut() = Some(message.map(str::to_string));
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.fail_with.borrow_mut().take().map(|message| ApiError::Status {
            status: 500,
            message,
        })
    }
}

impl ResourceBackend<User> for ScriptedBackend {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.list_result.borrow().clone())
    }

    async fn create(&self, draft: &User) -> Result<User, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut created = draft.clone();
        created.set_id(self.next_created_id.get());
        Ok(created)
    }

    async fn update(&self, record: &User) -> Result<User, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut server = record.clone();
        if let Some(role) = self.update_role_override.borrow().clone() {
            server.role = role;
        }
        Ok(server)
    }

    async fn delete(&self, _id: EntityId) -> Result<(), ApiError> {
        match self.take_failure() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl StatusBackend<User> for ScriptedBackend {
    async fn set_status(&self, id: EntityId, active: bool) -> Result<(), ApiError> {
        if let Some(limit) = self.fail_status_after.get() {
            if self.status_calls.borrow().len() >= limit {
                return Err(server_error(None));
            }
        }
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.status_calls.borrow_mut().push((id, active));
        Ok(())
    }
}

fn controller_with(
    items: Vec<User>,
) -> (ResourceController<User, ScriptedBackend>, ViewStore) {
    let backend = ScriptedBackend {
        list_result: RefCell::new(items),
        ..ScriptedBackend::default()
    };
    let view = ViewStore::new();
    (ResourceController::new(backend, view.clone()), view)
}

async fn seeded(items: Vec<User>) -> (ResourceController<User, ScriptedBackend>, ViewStore) {
    let (mut controller, view) = controller_with(items);
    controller.refresh().await.unwrap();
    // Seeding is not part of the behaviour under test.
    view.dispatch_notification(finplus_client::NotificationAction::ClearNotifications);
    (controller, view)
}

#[tokio::test]
async fn refresh_loads_the_list_and_clears_the_loading_flag() {
    let (mut controller, view) = controller_with(vec![user(1, "amai", true)]);
    controller.refresh().await.unwrap();
    assert_eq!(controller.items().len(), 1);
    assert!(!view.ui().loading);
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_list_and_notifies() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true)]).await;

    // Backend list would now be different, but the fetch fails.
    *controller_backend(&controller).list_result.borrow_mut() = vec![];
    controller_backend(&controller).fail_next(None);

    assert!(controller.refresh().await.is_err());
    assert_eq!(controller.items().len(), 1);
    assert!(!view.ui().loading);

    let notifications = view.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Error);
    assert_eq!(notifications[0].message, "Failed to load users");
}

#[tokio::test]
async fn create_replaces_the_temp_record_in_place_by_temp_id() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true), user(2, "baba", true)]).await;
    controller_backend(&controller).next_created_id.set(99);

    controller.create(user(0, "chipo", true)).await.unwrap();

    // Length is "length before create + 1" and the new record sits at the
    // index where the temp record was appended.
    assert_eq!(controller.items().len(), 3);
    assert_eq!(controller.items()[2].id, 99);
    assert_eq!(controller.items()[2].username, "chipo");
    // No temporary (negative) ids survive.
    assert!(controller.items().iter().all(|u| u.id > 0));

    let notifications = view.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Success);
    assert_eq!(notifications[0].message, "User created successfully!");
}

#[tokio::test]
async fn failed_create_rolls_back_and_surfaces_the_server_message() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true)]).await;
    controller_backend(&controller).fail_next(Some("Username already taken"));

    let err = controller.create(user(0, "amai", true)).await.unwrap_err();
    assert!(err.is_status(500));

    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].id, 1);

    let notifications = view.notifications();
    assert_eq!(notifications[0].kind, NotificationKind::Error);
    assert_eq!(notifications[0].message, "Username already taken");
}

#[tokio::test]
async fn failed_create_without_a_server_message_uses_the_generic_one() {
    let (mut controller, view) = seeded(vec![]).await;
    controller_backend(&controller).fail_next(None);

    controller.create(user(0, "chipo", true)).await.unwrap_err();
    assert_eq!(view.notifications()[0].message, "Failed to create user");
}

#[tokio::test]
async fn update_reconciles_fields_from_the_server_response() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true)]).await;
    // The server normalises the role on save.
    *controller_backend(&controller).update_role_override.borrow_mut() = Some("manager".into());

    let mut edited = user(1, "amai", true);
    edited.role = "MANAGER".into();
    controller.update(edited).await.unwrap();

    assert_eq!(controller.items()[0].role, "manager");
    assert_eq!(view.notifications()[0].message, "User updated successfully!");
}

#[tokio::test]
async fn failed_update_restores_the_snapshot() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true)]).await;
    controller_backend(&controller).fail_next(None);

    let mut edited = user(1, "amai", true);
    edited.email = "changed@example.com".into();
    controller.update(edited).await.unwrap_err();

    assert_eq!(controller.items()[0].email, "amai@example.com");
    assert_eq!(view.notifications()[0].message, "Failed to save user");
}

#[tokio::test]
async fn failed_delete_restores_both_records_in_original_order() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true), user(2, "baba", true)]).await;
    controller_backend(&controller).fail_next(None);

    controller.delete(1).await.unwrap_err();

    let ids: Vec<_> = controller.items().iter().map(|u| u.id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(view.notifications()[0].message, "Failed to delete user");
}

#[tokio::test]
async fn successful_delete_removes_only_the_target() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true), user(2, "baba", true)]).await;

    controller.delete(1).await.unwrap();

    let ids: Vec<_> = controller.items().iter().map(|u| u.id).collect();
    assert_eq!(ids, [2]);
    assert_eq!(view.notifications()[0].message, "User deleted successfully!");
}

#[tokio::test]
async fn toggle_status_flips_the_flag_and_calls_the_backend() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true)]).await;

    controller.toggle_status(1).await.unwrap();

    assert!(!controller.items()[0].is_active());
    assert_eq!(
        controller_backend(&controller).status_calls.borrow().clone(),
        vec![(1, false)]
    );
    assert_eq!(
        view.notifications()[0].message,
        "User deactivated successfully!"
    );
}

#[tokio::test]
async fn toggle_status_on_an_unknown_id_is_a_no_op() {
    let (mut controller, view) = seeded(vec![user(1, "amai", true)]).await;

    controller.toggle_status(42).await.unwrap();

    assert!(controller.items()[0].is_active());
    assert!(controller_backend(&controller).status_calls.borrow().is_empty());
    assert!(view.notifications().is_empty());
}

#[tokio::test]
async fn failed_toggle_rolls_the_flag_back() {
    let (mut controller, view) = seeded(vec![user(1, "amai", false)]).await;
    controller_backend(&controller).fail_next(None);

    controller.toggle_status(1).await.unwrap_err();

    assert!(!controller.items()[0].is_active());
    assert_eq!(
        view.notifications()[0].message,
        "Failed to update user status"
    );
}

#[tokio::test]
async fn bulk_set_status_touches_only_the_targeted_ids() {
    let (mut controller, view) = seeded(vec![
        user(1, "amai", false),
        user(2, "baba", false),
        user(3, "chipo", false),
    ])
    .await;

    controller.bulk_set_status(&[1, 3], true).await.unwrap();

    let active: Vec<_> = controller.items().iter().map(StatusFlag::is_active).collect();
    assert_eq!(active, [true, false, true]);
    assert_eq!(
        controller_backend(&controller).status_calls.borrow().clone(),
        vec![(1, true), (3, true)]
    );
    assert_eq!(view.notifications()[0].message, "Selected users activated!");
}

#[tokio::test]
async fn bulk_failure_midway_rolls_back_every_record() {
    let (mut controller, view) = seeded(vec![
        user(1, "amai", false),
        user(2, "baba", false),
        user(3, "chipo", false),
    ])
    .await;
    // First set_status call succeeds, the second fails.
    controller_backend(&controller).fail_status_after.set(Some(1));

    controller.bulk_set_status(&[1, 2, 3], true).await.unwrap_err();

    let active: Vec<_> = controller.items().iter().map(StatusFlag::is_active).collect();
    assert_eq!(active, [false, false, false]);
    assert_eq!(
        view.notifications()[0].message,
        "Failed to update some users"
    );
}

#[tokio::test]
async fn bulk_with_no_ids_does_nothing() {
    let (mut controller, view) = seeded(vec![user(1, "amai", false)]).await;

    controller.bulk_set_status(&[], true).await.unwrap();

    assert!(controller_backend(&controller).status_calls.borrow().is_empty());
    assert!(view.notifications().is_empty());
}

/// The controller owns its backend; tests reach it through this accessor.
fn controller_backend<'a>(
    controller: &'a ResourceController<User, ScriptedBackend>,
) -> &'a ScriptedBackend {
    controller.backend()
}
