// src/api/mod.rs

//! Endpoint wrappers for snapd's REST API, grouped by area.
//!
//! Every operation here is a thin pass-through: build a JSON body, form
//! body, or query string and delegate to the transport in [`crate::http`].
//! See <https://snapcraft.io/docs/snapd-api> for the wire documentation.

pub mod apps;
pub mod assertions;
pub mod changes;
pub mod confdb;
pub mod fde;
pub mod interfaces;
pub mod model;
pub mod options;
pub mod snaps;
pub mod snapshots;
pub mod systems;
pub mod users;
pub mod validation_sets;
