// src/api/options.rs

//! Snap configuration: get and set snap options.

use serde_json::Value;

use crate::Result;
use crate::http::SnapdClient;
use crate::types::{RequestBody, SnapdResponse};

impl SnapdClient {
    /// Get configuration values for the snap `name`.
    ///
    /// With a non-empty `keys`, only those keys are retrieved; dotted keys
    /// reach into nested values.
    pub fn get_conf(&self, name: &str, keys: &[&str]) -> Result<SnapdResponse> {
        let mut query = Vec::new();
        if !keys.is_empty() {
            query.push(("keys", keys.join(",")));
        }
        self.get_with_query(&format!("/snaps/{name}/conf"), &query)
    }

    /// Set configuration values for the snap `name`.
    ///
    /// `config` is a key-value mapping; keys can be dotted, and `null`
    /// unsets an option.
    pub fn set_conf(&self, name: &str, config: Value) -> Result<SnapdResponse> {
        self.put(&format!("/snaps/{name}/conf"), RequestBody::Json(config))
    }
}
