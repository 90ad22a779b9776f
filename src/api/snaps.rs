// src/api/snaps.rs

//! Snap lifecycle operations: install, remove, refresh, revert, enable,
//! disable, hold, switch, and sideloading of local snap files.
//!
//! Single-snap operations POST to `/snaps/<name>`; the `*_all` variants
//! POST one batched action to `/snaps`.

use std::path::Path;

use serde_json::{Map, Value, json};

use crate::Result;
use crate::http::SnapdClient;
use crate::types::{FileUpload, FormData, RequestBody, SnapdResponse};

/// Hold level for [`SnapdClient::hold`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoldLevel {
    /// Hold general refreshes and auto-refreshes.
    #[default]
    General,
    /// Hold only auto-refreshes.
    AutoRefresh,
}

impl HoldLevel {
    fn as_str(self) -> &'static str {
        match self {
            HoldLevel::General => "general",
            HoldLevel::AutoRefresh => "auto-refresh",
        }
    }
}

/// Options for [`SnapdClient::hold`] and [`SnapdClient::hold_all`].
#[derive(Debug, Clone)]
pub struct HoldOptions {
    pub level: HoldLevel,
    /// RFC3339 timestamp to hold the snap until, or `"forever"`.
    pub time: String,
}

impl Default for HoldOptions {
    fn default() -> Self {
        Self {
            level: HoldLevel::General,
            time: "forever".to_string(),
        }
    }
}

/// Options for [`SnapdClient::install`].
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Revision to install. Defaults to latest.
    pub revision: Option<String>,
    /// Channel to track. Defaults to stable.
    pub channel: Option<String>,
    /// Install in classic containment mode.
    pub classic: bool,
}

/// Options for [`SnapdClient::refresh`].
#[derive(Debug, Clone, Default)]
pub struct RefreshOptions {
    /// Revision to refresh to. Defaults to latest.
    pub revision: Option<String>,
    /// Channel to switch tracking to. Defaults to stable.
    pub channel: Option<String>,
    /// Change the snap to classic containment mode.
    pub classic: bool,
}

/// Options for [`SnapdClient::revert`].
#[derive(Debug, Clone, Default)]
pub struct RevertOptions {
    /// Revision to switch to. Defaults to the revision used prior to the
    /// last refresh.
    pub revision: Option<String>,
    /// `Some(true)` switches to classic confinement, `Some(false)` to
    /// strict; `None` leaves confinement as-is.
    pub classic: Option<bool>,
}

/// Options for [`SnapdClient::sideload`].
#[derive(Debug, Clone, Default)]
pub struct SideloadOptions {
    /// Put snaps in classic mode and disable security confinement.
    pub classic: bool,
    /// Install even without pre-acknowledged signatures.
    pub dangerous: bool,
    /// Put snaps in development mode and disable security confinement.
    pub devmode: bool,
    /// Put snaps in enforced confinement mode.
    pub jailmode: bool,
    /// Make any system restart immediate and without delay (snapd 2.52+).
    pub system_restart_immediate: bool,
}

impl SnapdClient {
    /// List installed snaps.
    pub fn list(&self) -> Result<SnapdResponse> {
        self.get("/snaps")
    }

    /// Install the snap `name`.
    pub fn install(&self, name: &str, options: &InstallOptions) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "install".into());
        if let Some(revision) = &options.revision {
            body.insert("revision".to_string(), revision.as_str().into());
        }
        if let Some(channel) = &options.channel {
            body.insert("channel".to_string(), channel.as_str().into());
        }
        if options.classic {
            body.insert("classic".to_string(), true.into());
        }
        self.post(&format!("/snaps/{name}"), RequestBody::Json(Value::Object(body)))
    }

    /// Install all snaps in `names`, latest revision of the stable channel,
    /// strict confinement.
    pub fn install_all(&self, names: &[&str]) -> Result<SnapdResponse> {
        self.post(
            "/snaps",
            json!({"action": "install", "snaps": names}).into(),
        )
    }

    /// Sideload snaps from local files as a multipart upload.
    pub fn sideload<P: AsRef<Path>>(
        &self,
        paths: &[P],
        options: &SideloadOptions,
    ) -> Result<SnapdResponse> {
        let mut form = FormData::new().field("action", "install");
        if options.classic {
            form = form.field("classic", "true");
        }
        if options.dangerous {
            form = form.field("dangerous", "true");
        }
        if options.devmode {
            form = form.field("devmode", "true");
        }
        if options.jailmode {
            form = form.field("jailmode", "true");
        }
        if options.system_restart_immediate {
            form = form.field("system-restart-immediate", "true");
        }
        for path in paths {
            form = form.file(FileUpload::new("snap", path.as_ref()));
        }
        self.post("/snaps", RequestBody::Form(form))
    }

    /// Refresh the snap `name`.
    pub fn refresh(&self, name: &str, options: &RefreshOptions) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "refresh".into());
        if let Some(revision) = &options.revision {
            body.insert("revision".to_string(), revision.as_str().into());
        }
        if let Some(channel) = &options.channel {
            body.insert("channel".to_string(), channel.as_str().into());
        }
        if options.classic {
            body.insert("classic".to_string(), true.into());
        }
        self.post(&format!("/snaps/{name}"), RequestBody::Json(Value::Object(body)))
    }

    /// Refresh the snaps in `names` to their latest revision; with an empty
    /// slice, all snaps are refreshed.
    pub fn refresh_all(&self, names: &[&str]) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "refresh".into());
        if !names.is_empty() {
            body.insert("snaps".to_string(), names.into());
        }
        self.post("/snaps", RequestBody::Json(Value::Object(body)))
    }

    /// Revert the snap `name` to a previously installed revision.
    pub fn revert(&self, name: &str, options: &RevertOptions) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "revert".into());
        if let Some(revision) = &options.revision {
            body.insert("revision".to_string(), revision.as_str().into());
        }
        if let Some(classic) = options.classic {
            body.insert("classic".to_string(), classic.into());
        }
        self.post(&format!("/snaps/{name}"), RequestBody::Json(Value::Object(body)))
    }

    /// Revert all snaps in `names` to the revision used prior to the last
    /// refresh.
    pub fn revert_all(&self, names: &[&str]) -> Result<SnapdResponse> {
        self.post("/snaps", json!({"action": "revert", "snaps": names}).into())
    }

    /// Uninstall the snap `name`.
    pub fn remove(&self, name: &str) -> Result<SnapdResponse> {
        self.post(&format!("/snaps/{name}"), json!({"action": "remove"}).into())
    }

    /// Uninstall all snaps in `names`.
    pub fn remove_all(&self, names: &[&str]) -> Result<SnapdResponse> {
        self.post("/snaps", json!({"action": "remove", "snaps": names}).into())
    }

    /// Enable a previously disabled snap.
    pub fn enable(&self, name: &str) -> Result<SnapdResponse> {
        self.post(&format!("/snaps/{name}"), json!({"action": "enable"}).into())
    }

    /// Like [`SnapdClient::enable`], for several snaps.
    ///
    /// NOTE: as of 2024-01-08, enable/disable is not yet supported for
    /// multiple snaps by snapd itself.
    pub fn enable_all(&self, names: &[&str]) -> Result<SnapdResponse> {
        self.post("/snaps", json!({"action": "enable", "snaps": names}).into())
    }

    /// Disable the snap `name`, making its binaries and services
    /// unavailable.
    pub fn disable(&self, name: &str) -> Result<SnapdResponse> {
        self.post(&format!("/snaps/{name}"), json!({"action": "disable"}).into())
    }

    /// Like [`SnapdClient::disable`], for several snaps.
    ///
    /// NOTE: as of 2024-01-08, enable/disable is not yet supported for
    /// multiple snaps by snapd itself.
    pub fn disable_all(&self, names: &[&str]) -> Result<SnapdResponse> {
        self.post("/snaps", json!({"action": "disable", "snaps": names}).into())
    }

    /// Hold refreshes of the snap `name`.
    pub fn hold(&self, name: &str, options: &HoldOptions) -> Result<SnapdResponse> {
        self.post(
            &format!("/snaps/{name}"),
            json!({
                "action": "hold",
                "hold-level": options.level.as_str(),
                "time": options.time,
            })
            .into(),
        )
    }

    /// Hold refreshes of all snaps in `names`.
    pub fn hold_all(&self, names: &[&str], options: &HoldOptions) -> Result<SnapdResponse> {
        self.post(
            "/snaps",
            json!({
                "action": "hold",
                "snaps": names,
                "hold-level": options.level.as_str(),
                "time": options.time,
            })
            .into(),
        )
    }

    /// Remove the hold on the snap `name`, letting it refresh on its usual
    /// schedule.
    pub fn unhold(&self, name: &str) -> Result<SnapdResponse> {
        self.post(&format!("/snaps/{name}"), json!({"action": "unhold"}).into())
    }

    /// Remove the holds on all snaps in `names`.
    pub fn unhold_all(&self, names: &[&str]) -> Result<SnapdResponse> {
        self.post("/snaps", json!({"action": "unhold", "snaps": names}).into())
    }

    /// Switch the tracking channel of the snap `name`.
    pub fn switch(&self, name: &str, channel: &str) -> Result<SnapdResponse> {
        self.post(
            &format!("/snaps/{name}"),
            json!({"action": "switch", "channel": channel}).into(),
        )
    }

    /// Switch the tracking channels of all snaps in `names`.
    ///
    /// NOTE: as of 2024-01-08, switch is not yet supported for multiple
    /// snaps by snapd itself.
    pub fn switch_all(&self, names: &[&str], channel: &str) -> Result<SnapdResponse> {
        self.post(
            "/snaps",
            json!({"action": "switch", "channel": channel, "snaps": names}).into(),
        )
    }
}
