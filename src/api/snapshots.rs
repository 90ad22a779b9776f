// src/api/snapshots.rs

//! Snapshots of snap user, system, and configuration data.

use serde_json::{Map, Value};

use crate::Result;
use crate::http::SnapdClient;
use crate::types::{RequestBody, SnapdResponse};

impl SnapdClient {
    /// List all snapshots.
    pub fn snapshots(&self) -> Result<SnapdResponse> {
        self.get("/snapshots")
    }

    /// Save a snapshot of the current state.
    ///
    /// `snaps` restricts the snapshot to those snaps, `users` to those
    /// users' data; `None` means no restriction.
    pub fn save_snapshot(
        &self,
        snaps: Option<&[&str]>,
        users: Option<&[&str]>,
    ) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "snapshot".into());
        if let Some(users) = users {
            body.insert("users".to_string(), users.into());
        }
        if let Some(snaps) = snaps {
            body.insert("snaps".to_string(), snaps.into());
        }
        self.post("/snaps", RequestBody::Json(Value::Object(body)))
    }

    /// Delete the snapshot set identified by `set_id`.
    pub fn forget_snapshot(
        &self,
        set_id: &str,
        snaps: Option<&[&str]>,
        users: Option<&[&str]>,
    ) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "forget".into());
        body.insert("set".to_string(), set_id.into());
        if let Some(snaps) = snaps {
            body.insert("snaps".to_string(), snaps.into());
        }
        if let Some(users) = users {
            body.insert("users".to_string(), users.into());
        }
        self.post("/snapshots", RequestBody::Json(Value::Object(body)))
    }
}
