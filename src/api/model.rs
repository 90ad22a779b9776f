// src/api/model.rs

//! The system's model assertion.

use serde_json::json;

use crate::Result;
use crate::http::SnapdClient;
use crate::types::SnapdResponse;

impl SnapdClient {
    /// Get the active model assertion of the system.
    pub fn get_model(&self) -> Result<SnapdResponse> {
        self.get("/model")
    }

    /// Replace the current model assertion of the system.
    ///
    /// `offline` enables offline remodelling.
    pub fn remodel(&self, new_model_assertion: &str, offline: bool) -> Result<SnapdResponse> {
        self.post(
            "/model",
            json!({"new-model": new_model_assertion, "offline": offline}).into(),
        )
    }
}
