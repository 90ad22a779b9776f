// src/api/assertions.rs

//! Assertions: signed metadata documents in snapd's trust system.

use crate::Result;
use crate::http::SnapdClient;
use crate::types::{RequestBody, SnapdResponse};

impl SnapdClient {
    /// List the assertion types known to the system.
    pub fn get_assertion_types(&self) -> Result<SnapdResponse> {
        self.get("/assertions")
    }

    /// Fetch all assertions of the given type.
    ///
    /// The result is a raw stream of assertions separated by double
    /// newlines, not JSON. `filters` is an (assertion-header, value)
    /// list; examples of headers are username, authority-id, account-id,
    /// series, publisher, snap-name, and publisher-id.
    pub fn get_assertions(
        &self,
        assertion_type: &str,
        filters: &[(&str, String)],
    ) -> Result<SnapdResponse> {
        self.get_with_query(&format!("/assertions/{assertion_type}"), filters)
    }

    /// Add an assertion to the system assertion database.
    ///
    /// The assertion may also be a newer revision of a pre-existing
    /// assertion that it will replace.
    pub fn add_assertion(&self, assertion: &str) -> Result<SnapdResponse> {
        self.post("/assertions", RequestBody::Assertion(assertion.to_string()))
    }
}
