//! Optimistic per-entity list controllers.
//!
//! Each controller owns the last-fetched collection for one entity type and
//! applies mutations optimistically: snapshot the collection, apply the
//! change locally, issue the backend call, then reconcile with the server
//! response on success or restore the snapshot on failure. Outcomes surface
//! through the shared [`ViewStore`] notification list.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::notification::NotificationKind;
use crate::store::ViewStore;

/// Server-assigned entity identity.
///
/// Persisted records carry positive ids; controllers hand out negative
/// temporaries for in-flight creates, so the two ranges cannot collide at
/// the point of generation.
pub type EntityId = i64;

/// An entity with client-visible identity, unique within its collection.
pub trait Resource: Clone {
    /// Lowercase singular label used in notification messages
    /// (e.g. `"department"`).
    const LABEL: &'static str;

    /// This record's identity.
    fn id(&self) -> EntityId;

    /// Replace this record's identity. Used to stamp temporary ids onto
    /// optimistic drafts.
    fn set_id(&mut self, id: EntityId);
}

/// Entities carrying an activation flag that can be toggled.
pub trait StatusFlag {
    /// Whether the record is currently active.
    fn is_active(&self) -> bool;

    /// Set the active flag.
    fn set_active(&mut self, active: bool);
}

/// Marker for entities fetched from a REST collection.
pub trait RestResource {
    /// Collection path segment under the API base URL, without slashes
    /// (e.g. `"employees"`).
    const PATH: &'static str;
}

/// Backend collaborator for one entity collection.
///
/// [`RestBackend`] is the production implementation; tests script an
/// in-memory one.
#[allow(async_fn_in_trait)]
pub trait ResourceBackend<T: Resource> {
    /// Fetch the full collection.
    async fn list(&self) -> Result<Vec<T>, ApiError>;

    /// Create `draft` and return the record as stored by the server,
    /// including its real identity.
    async fn create(&self, draft: &T) -> Result<T, ApiError>;

    /// Persist `record` and return the server's view of it.
    async fn update(&self, record: &T) -> Result<T, ApiError>;

    /// Delete the record with the given id.
    async fn delete(&self, id: EntityId) -> Result<(), ApiError>;
}

/// Backend extension for entities with a toggleable active flag.
#[allow(async_fn_in_trait)]
pub trait StatusBackend<T: Resource + StatusFlag>: ResourceBackend<T> {
    /// Set the record's active flag on the server.
    async fn set_status(&self, id: EntityId, active: bool) -> Result<(), ApiError>;
}

/// [`ResourceBackend`] over the REST API, one collection per entity type.
#[derive(Debug, Clone)]
pub struct RestBackend<T> {
    api: ApiClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RestBackend<T> {
    /// Wrap an [`ApiClient`] for entity type `T`.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }
}

impl<T> ResourceBackend<T> for RestBackend<T>
where
    T: Resource + RestResource + Serialize + DeserializeOwned,
{
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.api.list(&format!("{}/", T::PATH)).await
    }

    /// `POST` the draft to the collection. The server assigns identity and
    /// ignores the temporary client id in the payload.
    async fn create(&self, draft: &T) -> Result<T, ApiError> {
        self.api.post(&format!("{}/", T::PATH), draft).await
    }

    async fn update(&self, record: &T) -> Result<T, ApiError> {
        self.api
            .put(&format!("{}/{}/", T::PATH, record.id()), record)
            .await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}/", T::PATH, id)).await
    }
}

impl<T> StatusBackend<T> for RestBackend<T>
where
    T: Resource + RestResource + StatusFlag + Serialize + DeserializeOwned,
{
    async fn set_status(&self, id: EntityId, active: bool) -> Result<(), ApiError> {
        let _body: serde_json::Value = self
            .api
            .patch(
                &format!("{}/{}/", T::PATH, id),
                &json!({ "is_active": active }),
            )
            .await?;
        Ok(())
    }
}

/// First temporary id handed out for optimistic creates.
const FIRST_TEMP_ID: EntityId = -1;

/// Component-local list state with optimistic mutations.
///
/// Overlapping operations on one controller are not coordinated: each
/// captures its own snapshot at invocation time, so a failing operation can
/// roll back over a later successful one. The backend remains the source of
/// truth; a [`refresh`](Self::refresh) reconverges.
pub struct ResourceController<T: Resource, B: ResourceBackend<T>> {
    backend: B,
    view: ViewStore,
    items: Vec<T>,
    next_temp_id: EntityId,
}

impl<T: Resource, B: ResourceBackend<T>> ResourceController<T, B> {
    /// Create an empty controller reporting through `view`.
    pub fn new(backend: B, view: ViewStore) -> Self {
        Self {
            backend,
            view,
            items: Vec::new(),
            next_temp_id: FIRST_TEMP_ID,
        }
    }

    /// The current collection, in fetch/insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The backend collaborator.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn alloc_temp_id(&mut self) -> EntityId {
        let id = self.next_temp_id;
        self.next_temp_id -= 1;
        id
    }

    /// Roll back and emit an error notification, preferring the server's
    /// own message over the generic fallback.
    fn fail(&mut self, prev: Vec<T>, err: &ApiError, fallback: String) {
        warn!(entity = T::LABEL, error = %err, "mutation failed, rolling back");
        self.items = prev;
        let message = err
            .server_message()
            .map(str::to_string)
            .unwrap_or(fallback);
        self.view.notify(NotificationKind::Error, message);
    }

    fn succeed(&self, message: String) {
        self.view.notify(NotificationKind::Success, message);
    }

    /// Fetch the collection, driving the global loading flag while the
    /// request is in flight. A failed fetch keeps the previous list.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.view.set_loading(true);
        let result = self.backend.list().await;
        self.view.set_loading(false);
        match result {
            Ok(items) => {
                debug!(entity = T::LABEL, count = items.len(), "list refreshed");
                self.items = items;
                Ok(())
            }
            Err(err) => {
                warn!(entity = T::LABEL, error = %err, "list fetch failed");
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Failed to load {}s", T::LABEL));
                self.view.notify(NotificationKind::Error, message);
                Err(err)
            }
        }
    }

    /// Optimistically append `draft` and create it on the backend.
    ///
    /// The draft is stamped with a temporary negative id until the server
    /// responds; the temp record is then replaced in place, matched by the
    /// temporary id rather than by position, so concurrent edits cannot
    /// misplace the swap. On failure the whole snapshot is restored.
    pub async fn create(&mut self, mut draft: T) -> Result<(), ApiError> {
        let prev = self.items.clone();
        let temp_id = self.alloc_temp_id();
        draft.set_id(temp_id);
        self.items.push(draft.clone());

        match self.backend.create(&draft).await {
            Ok(created) => {
                if let Some(slot) = self.items.iter_mut().find(|r| r.id() == temp_id) {
                    *slot = created;
                }
                self.succeed(format!("{} created successfully!", capitalize(T::LABEL)));
                Ok(())
            }
            Err(err) => {
                self.fail(prev, &err, format!("Failed to create {}", T::LABEL));
                Err(err)
            }
        }
    }

    /// Replace the matching record in place and push the change to the
    /// backend, reconciling local state with the server's response.
    pub async fn update(&mut self, record: T) -> Result<(), ApiError> {
        let prev = self.items.clone();
        let id = record.id();
        for slot in self.items.iter_mut() {
            if slot.id() == id {
                *slot = record.clone();
            }
        }

        match self.backend.update(&record).await {
            Ok(server) => {
                for slot in self.items.iter_mut() {
                    if slot.id() == id {
                        *slot = server.clone();
                    }
                }
                self.succeed(format!("{} updated successfully!", capitalize(T::LABEL)));
                Ok(())
            }
            Err(err) => {
                self.fail(prev, &err, format!("Failed to save {}", T::LABEL));
                Err(err)
            }
        }
    }

    /// Remove the record and delete it on the backend. A failed delete
    /// restores the exact previous contents and order.
    pub async fn delete(&mut self, id: EntityId) -> Result<(), ApiError> {
        let prev = self.items.clone();
        self.items.retain(|r| r.id() != id);

        match self.backend.delete(id).await {
            Ok(()) => {
                self.succeed(format!("{} deleted successfully!", capitalize(T::LABEL)));
                Ok(())
            }
            Err(err) => {
                self.fail(prev, &err, format!("Failed to delete {}", T::LABEL));
                Err(err)
            }
        }
    }
}

impl<T, B> ResourceController<T, B>
where
    T: Resource + StatusFlag,
    B: StatusBackend<T>,
{
    /// Flip the record's active flag, optimistically.
    ///
    /// An unknown id is a no-op: nothing is sent to the backend.
    pub async fn toggle_status(&mut self, id: EntityId) -> Result<(), ApiError> {
        let prev = self.items.clone();
        let mut target = None;
        for slot in self.items.iter_mut() {
            if slot.id() == id {
                let next = !slot.is_active();
                slot.set_active(next);
                target = Some(next);
            }
        }
        let Some(active) = target else {
            return Ok(());
        };

        match self.backend.set_status(id, active).await {
            Ok(()) => {
                self.succeed(format!(
                    "{} {} successfully!",
                    capitalize(T::LABEL),
                    if active { "activated" } else { "deactivated" }
                ));
                Ok(())
            }
            Err(err) => {
                self.fail(prev, &err, format!("Failed to update {} status", T::LABEL));
                Err(err)
            }
        }
    }

    /// Set the active flag on every record whose id is in `ids`.
    ///
    /// Backend calls go out one per touched record; the first failure
    /// aborts the rest and rolls the whole collection back.
    pub async fn bulk_set_status(&mut self, ids: &[EntityId], active: bool) -> Result<(), ApiError> {
        if ids.is_empty() {
            return Ok(());
        }
        let prev = self.items.clone();
        let mut touched = Vec::new();
        for slot in self.items.iter_mut() {
            if ids.contains(&slot.id()) {
                slot.set_active(active);
                touched.push(slot.id());
            }
        }

        for id in &touched {
            if let Err(err) = self.backend.set_status(*id, active).await {
                self.fail(prev, &err, format!("Failed to update some {}s", T::LABEL));
                return Err(err);
            }
        }
        self.succeed(format!(
            "Selected {}s {}!",
            T::LABEL,
            if active { "activated" } else { "deactivated" }
        ));
        Ok(())
    }
}

/// Uppercase the first character: `"department"` -> `"Department"`.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
