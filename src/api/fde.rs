// src/api/fde.rs

//! Full-disk-encryption keyslots on system volumes.

use serde_json::json;

use crate::Result;
use crate::http::SnapdClient;
use crate::types::SnapdResponse;

impl SnapdClient {
    /// Enumerate keyslots.
    pub fn get_keyslots(&self) -> Result<SnapdResponse> {
        self.get("/system-volumes")
    }

    /// Generate a recovery key; the result carries a key id for
    /// [`SnapdClient::update_recovery_key`].
    pub fn generate_recovery_key(&self) -> Result<SnapdResponse> {
        self.post(
            "/system-volumes",
            json!({"action": "generate-recovery-key"}).into(),
        )
    }

    /// Add, or with `replace` set replace, the recovery key for a keyslot.
    ///
    /// `key_id` is the id from generating the recovery key.
    pub fn update_recovery_key(
        &self,
        key_id: &str,
        keyslot_name: &str,
        replace: bool,
    ) -> Result<SnapdResponse> {
        let action = if replace {
            "replace-recovery-key"
        } else {
            "add-recovery-key"
        };
        self.post(
            "/system-volumes",
            json!({
                "action": action,
                "key-id": key_id,
                "keyslots": [{"name": keyslot_name}],
            })
            .into(),
        )
    }
}
