// src/api/interfaces.rs

//! Interfaces and connections between snap plugs and slots.

use serde_json::json;

use crate::Result;
use crate::http::SnapdClient;
use crate::types::SnapdResponse;

/// Filters for [`SnapdClient::get_interfaces`].
#[derive(Debug, Clone, Default)]
pub struct InterfaceFilter {
    /// `"all"` includes unconnected slots and plugs.
    pub select: Option<String>,
    /// Include only slot connections.
    pub slots: bool,
    /// Include only plug connections.
    pub plugs: bool,
    /// Include additional documentation details.
    pub doc: bool,
    /// Restrict to these interface names (comma-separated).
    pub names: Option<String>,
}

/// Filters for [`SnapdClient::get_connections`].
#[derive(Debug, Clone, Default)]
pub struct ConnectionFilter {
    /// Restrict to connections of this snap.
    pub snap: Option<String>,
    /// `"all"` includes unconnected slots and plugs.
    pub select: Option<String>,
    /// Restrict to this interface.
    pub interface: Option<String>,
}

impl SnapdClient {
    /// Retrieve interfaces.
    pub fn get_interfaces(&self, filter: &InterfaceFilter) -> Result<SnapdResponse> {
        let mut query = Vec::new();
        if let Some(select) = &filter.select {
            query.push(("select", select.clone()));
        }
        if filter.slots {
            query.push(("slots", "true".to_string()));
        }
        if filter.plugs {
            query.push(("plugs", "true".to_string()));
        }
        if filter.doc {
            query.push(("doc", "true".to_string()));
        }
        if let Some(names) = &filter.names {
            query.push(("names", names.clone()));
        }
        self.get_with_query("/interfaces", &query)
    }

    /// Retrieve connections.
    pub fn get_connections(&self, filter: &ConnectionFilter) -> Result<SnapdResponse> {
        let mut query = Vec::new();
        if let Some(snap) = &filter.snap {
            query.push(("snap", snap.clone()));
        }
        if let Some(select) = &filter.select {
            query.push(("select", select.clone()));
        }
        if let Some(interface) = &filter.interface {
            query.push(("interface", interface.clone()));
        }
        self.get_with_query("/connections", &query)
    }

    /// Establish a connection between a snap plug and a snap slot.
    pub fn connect_interface(
        &self,
        slot_snap: &str,
        slot: &str,
        plug_snap: &str,
        plug: &str,
    ) -> Result<SnapdResponse> {
        self.post(
            "/interfaces",
            json!({
                "action": "connect",
                "slots": [{"snap": slot_snap, "slot": slot}],
                "plugs": [{"snap": plug_snap, "plug": plug}],
            })
            .into(),
        )
    }

    /// Remove an existing connection between a snap plug and a snap slot.
    pub fn disconnect_interface(
        &self,
        slot_snap: &str,
        slot: &str,
        plug_snap: &str,
        plug: &str,
    ) -> Result<SnapdResponse> {
        self.post(
            "/interfaces",
            json!({
                "action": "disconnect",
                "slots": [{"snap": slot_snap, "slot": slot}],
                "plugs": [{"snap": plug_snap, "plug": plug}],
            })
            .into(),
        )
    }
}
