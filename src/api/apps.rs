// src/api/apps.rs

//! Apps and services: listing, start/stop/restart of snap services.

use serde_json::json;

use crate::Result;
use crate::http::SnapdClient;
use crate::types::SnapdResponse;

/// Filters for [`SnapdClient::get_apps`].
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    /// Return only services.
    pub services_only: bool,
    /// List apps for these snaps only.
    pub names: Vec<String>,
}

impl SnapdClient {
    /// List available apps.
    pub fn get_apps(&self, options: &ServiceOptions) -> Result<SnapdResponse> {
        let mut query = Vec::new();
        if options.services_only {
            query.push(("select", "service".to_string()));
        }
        if !options.names.is_empty() {
            query.push(("names", options.names.join(",")));
        }
        self.get_with_query("/apps", &query)
    }

    /// Start the service `name`.
    ///
    /// `enable` arranges to have the service start at system start.
    pub fn start(&self, name: &str, enable: bool) -> Result<SnapdResponse> {
        self.post(
            "/apps",
            json!({"action": "start", "names": [name], "enable": enable}).into(),
        )
    }

    /// Start the services in `names`.
    pub fn start_all(&self, names: &[&str], enable: bool) -> Result<SnapdResponse> {
        self.post(
            "/apps",
            json!({"action": "start", "names": names, "enable": enable}).into(),
        )
    }

    /// Stop the service `name`.
    ///
    /// `disable` arranges to no longer start the service at system start.
    pub fn stop(&self, name: &str, disable: bool) -> Result<SnapdResponse> {
        self.post(
            "/apps",
            json!({"action": "stop", "names": [name], "disable": disable}).into(),
        )
    }

    /// Stop the services in `names`.
    pub fn stop_all(&self, names: &[&str], disable: bool) -> Result<SnapdResponse> {
        self.post(
            "/apps",
            json!({"action": "stop", "names": names, "disable": disable}).into(),
        )
    }

    /// Restart the service `name`.
    ///
    /// `reload` tries to reload the service instead of restarting it.
    pub fn restart(&self, name: &str, reload: bool) -> Result<SnapdResponse> {
        self.post(
            "/apps",
            json!({"action": "restart", "names": [name], "reload": reload}).into(),
        )
    }

    /// Restart the services in `names`.
    pub fn restart_all(&self, names: &[&str], reload: bool) -> Result<SnapdResponse> {
        self.post(
            "/apps",
            json!({"action": "restart", "names": names, "reload": reload}).into(),
        )
    }
}
