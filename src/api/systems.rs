// src/api/systems.rs

//! Recovery systems and system actions.

use serde_json::json;

use crate::Result;
use crate::http::SnapdClient;
use crate::types::SnapdResponse;

impl SnapdClient {
    /// List all recovery systems.
    pub fn get_recovery_systems(&self) -> Result<SnapdResponse> {
        self.get("/systems")
    }

    /// Get the recovery system with the given label.
    pub fn get_recovery_system(&self, label: &str) -> Result<SnapdResponse> {
        self.get(&format!("/systems/{label}"))
    }

    /// Perform an action with the current active recovery system.
    ///
    /// `action` is `"reboot"`, `"create"`, or `"do"`; `mode` is `"run"`,
    /// `"recover"`, `"install"`, or `"factory-reset"`.
    pub fn perform_system_action(&self, action: &str, mode: &str) -> Result<SnapdResponse> {
        self.post("/systems", json!({"action": action, "mode": mode}).into())
    }

    /// Perform an action with the recovery system labelled `label`.
    pub fn perform_recovery_action(
        &self,
        label: &str,
        action: &str,
        mode: &str,
    ) -> Result<SnapdResponse> {
        self.post(
            &format!("/systems/{label}"),
            json!({"action": action, "mode": mode}).into(),
        )
    }
}
