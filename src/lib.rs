//! # docflow
//!
//! Session model for the DocFlow transport-paperwork front-end.
//!
//! All state lives in memory inside a [`app::DocflowApp`]; the only durable
//! value is the mock login flag, kept behind a [`session::SessionStore`].
//! The browser shell lives in the `docflow_web` crate and only renders what
//! this crate exposes.
//!
//! ## Quick Start
//!
//! ```
//! use docflow::prelude::*;
//!
//! let mut app = DocflowApp::new(DocflowConfig::default());
//! let mut store = MemoryStore::new();
//!
//! app.login(&mut store).unwrap();
//! app.ingest_files_now(vec![IncomingFile::new("a.pdf", "application/pdf")]);
//! app.set_smr(true);
//! app.export().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`app`]: root controller owning all state
//! - [`library`]: append-only document list and selection
//! - [`categories`]: warehouse receipt / SMR / TTN flags
//! - [`session`]: mock credentials and the durable login flag
//! - [`config`]: presentation constants loaded from JSON

#[path = "core/app.rs"]
pub mod app;

#[path = "core/categories.rs"]
pub mod categories;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/document.rs"]
pub mod document;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/export.rs"]
pub mod export;

#[path = "core/library.rs"]
pub mod library;

#[path = "core/notify.rs"]
pub mod notify;

#[path = "core/plans.rs"]
pub mod plans;

#[path = "core/session.rs"]
pub mod session;

#[path = "core/transport_order.rs"]
pub mod transport_order;

/// Prelude module for convenient imports.
///
/// ```
/// use docflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::{DocflowApp, Effect};
    pub use crate::categories::{CategoryFlags, WaybillKind};
    pub use crate::config::DocflowConfig;
    pub use crate::document::{Document, DocumentId, IncomingFile, GENERIC_TYPE_LABEL};
    pub use crate::error::DocflowError;
    pub use crate::export::{DocumentExporter, ExportRequest, NoopExporter};
    pub use crate::library::DocumentLibrary;
    pub use crate::notify::{Toast, ToastLevel, ToastQueue};
    pub use crate::plans::{DocumentQuota, SubscriptionPlan};
    pub use crate::session::{
        AcceptAll, CredentialVerifier, Credentials, MemoryStore, SessionStore, LOGGED_IN_KEY,
        LOGGED_IN_VALUE,
    };
    pub use crate::transport_order::{InputKind, OrderField, ShareTarget, TransportOrder};
}
