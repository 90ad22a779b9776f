// src/api/validation_sets.rs

//! Validation sets: named sets of snaps validated together.

use serde_json::{Map, Value, json};

use crate::Result;
use crate::http::SnapdClient;
use crate::types::{RequestBody, SnapdResponse};

impl SnapdClient {
    /// List all enabled validation sets.
    pub fn get_validation_sets(&self) -> Result<SnapdResponse> {
        self.get("/validation-sets")
    }

    /// Get one validation set by developer account id and name.
    pub fn get_validation_set(&self, account_id: &str, name: &str) -> Result<SnapdResponse> {
        self.get(&format!("/validation-sets/{account_id}/{name}"))
    }

    /// Refresh the snaps of a validation set, optionally pinned to a
    /// sequence.
    pub fn refresh_validation_set(
        &self,
        account_id: &str,
        name: &str,
        sequence: Option<i64>,
    ) -> Result<SnapdResponse> {
        let mut validation_set = format!("{account_id}/{name}");
        if let Some(sequence) = sequence {
            validation_set.push_str(&format!("={sequence}"));
        }
        self.post(
            "/snaps",
            json!({"action": "refresh", "validation-sets": [validation_set]}).into(),
        )
    }

    /// Apply a validation set in enforcing mode.
    pub fn enforce_validation_set(
        &self,
        account_id: &str,
        name: &str,
        sequence: Option<i64>,
    ) -> Result<SnapdResponse> {
        self.apply_validation_set(account_id, name, "enforce", sequence)
    }

    /// Apply a validation set in monitoring mode.
    pub fn monitor_validation_set(
        &self,
        account_id: &str,
        name: &str,
        sequence: Option<i64>,
    ) -> Result<SnapdResponse> {
        self.apply_validation_set(account_id, name, "monitor", sequence)
    }

    /// Forget a validation set.
    pub fn forget_validation_set(
        &self,
        account_id: &str,
        name: &str,
        sequence: Option<i64>,
    ) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "forget".into());
        if let Some(sequence) = sequence {
            body.insert("sequence".to_string(), sequence.into());
        }
        self.post(
            &format!("/validation-sets/{account_id}/{name}"),
            RequestBody::Json(Value::Object(body)),
        )
    }

    fn apply_validation_set(
        &self,
        account_id: &str,
        name: &str,
        mode: &str,
        sequence: Option<i64>,
    ) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "apply".into());
        body.insert("mode".to_string(), mode.into());
        if let Some(sequence) = sequence {
            body.insert("sequence".to_string(), sequence.into());
        }
        self.post(
            &format!("/validation-sets/{account_id}/{name}"),
            RequestBody::Json(Value::Object(body)),
        )
    }
}
