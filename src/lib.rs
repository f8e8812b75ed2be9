//! Client-side state core of the Finance Plus ERP frontend.
//!
//! Three cooperating pieces, all in-memory:
//!
//! - a **view-state store** ([`ViewStore`]) folding pure reducers over the
//!   UI triple (sidebar, theme, loading) and the transient notification
//!   list;
//! - **per-entity list controllers** ([`ResourceController`]) that apply
//!   CRUD mutations optimistically against a [`ResourceBackend`] and roll
//!   back to a snapshot when the backend rejects them;
//! - **pure utilities**: display formatting, invoice numbering,
//!   client-side table queries, CSV export, locale lookup, and
//!   pre-submission validation.
//!
//! The backend is the source of truth; nothing here persists state beyond
//! the lifetime of the owning view.

mod api;
mod error;
mod export;
mod format;
mod i18n;
mod model;
mod notification;
mod resource;
mod service;
mod store;
mod table;
mod ui;
mod validate;

pub use api::{ApiClient, ListPayload};
pub use error::{ApiError, ExportError};
pub use export::{csv_string, write_csv};
pub use format::{
    DateInput, InvoiceNumberConfig, format_currency, format_date, format_date_time,
    generate_invoice_number,
};
pub use i18n::LocaleBundle;
pub use model::{Department, Employee, EmployeeStatus, ManagerRef, Product, StoreLocation, User};
pub use notification::{Notification, NotificationAction, NotificationKind, NotificationState};
pub use resource::{
    EntityId, Resource, ResourceBackend, ResourceController, RestBackend, RestResource,
    StatusBackend, StatusFlag,
};
pub use service::HrService;
pub use store::ViewStore;
pub use table::{SortDirection, Tabular, TableQuery};
pub use ui::{Theme, UiAction, UiState};
pub use validate::{ValidationErrors, Validator};
