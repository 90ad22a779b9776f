// src/lib.rs

//! snapd-http
//!
//! A synchronous client for snapd's REST API, reachable only through the
//! UNIX domain socket at `/run/snapd.socket`. Covers the snap lifecycle
//! (install, remove, refresh, ...), services, configuration, interfaces,
//! assertions, users, confdb, recovery systems, validation sets, FDE
//! keyslots, and snapshots.
//!
//! Permissions are those of the calling user; most mutating operations
//! require root.
//!
//! # Example
//!
//! ```no_run
//! use snapd_http::{InstallOptions, SnapdClient};
//!
//! let client = SnapdClient::new();
//!
//! // Asynchronous operations return a change id; wait_for polls it.
//! let response = client.install("hello-world", &InstallOptions::default())?;
//! client.wait_for(response)?;
//!
//! let snaps = client.list()?;
//! # let _ = snaps;
//! # Ok::<(), snapd_http::Error>(())
//! ```

pub mod api;
mod error;
pub mod http;
pub mod types;

pub use api::apps::ServiceOptions;
pub use api::changes::DEFAULT_POLL_INTERVAL;
pub use api::interfaces::{ConnectionFilter, InterfaceFilter};
pub use api::snaps::{
    HoldLevel, HoldOptions, InstallOptions, RefreshOptions, RevertOptions, SideloadOptions,
};
pub use api::users::AddUserOptions;
pub use error::{ApiError, Error, Result};
pub use http::{BASE_URL, SNAPD_SOCKET, SnapdClient};
pub use types::{
    COMPLETE_STATUSES, ERROR_STATUSES, FileUpload, FormData, INCOMPLETE_STATUSES, Payload,
    RequestBody, ResponseKind, SUCCESS_STATUSES, SnapdResponse,
};
