// src/api/users.rs

//! User accounts managed by snapd.

use serde_json::json;

use crate::Result;
use crate::http::SnapdClient;
use crate::types::SnapdResponse;

/// Flags for [`SnapdClient::add_user`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddUserOptions {
    pub sudoer: bool,
    pub known: bool,
    pub force_managed: bool,
    pub automatic: bool,
}

impl SnapdClient {
    /// Get information on user accounts.
    pub fn list_users(&self) -> Result<SnapdResponse> {
        self.get("/users")
    }

    /// Create a local user.
    pub fn add_user(
        &self,
        username: &str,
        email: &str,
        options: &AddUserOptions,
    ) -> Result<SnapdResponse> {
        self.post(
            "/users",
            json!({
                "action": "create",
                "username": username,
                "email": email,
                "sudoer": options.sudoer,
                "known": options.known,
                "force-managed": options.force_managed,
                "automatic": options.automatic,
            })
            .into(),
        )
    }

    /// Remove a local user.
    pub fn remove_user(&self, username: &str) -> Result<SnapdResponse> {
        self.post(
            "/users",
            json!({"action": "remove", "username": username}).into(),
        )
    }
}
