// src/api/changes.rs

//! Change tracking: asynchronous operations return a change id which is
//! polled until the change reaches a complete status.

use std::time::Duration;

use serde_json::Value;

use crate::Result;
use crate::http::SnapdClient;
use crate::types::{COMPLETE_STATUSES, ResponseKind, SnapdResponse};

/// Interval [`SnapdClient::wait_for`] sleeps between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl SnapdClient {
    /// Check the status of the change with id `cid`.
    pub fn check_change(&self, cid: &str) -> Result<SnapdResponse> {
        self.get(&format!("/changes/{cid}"))
    }

    /// Check the status of all changes.
    pub fn check_changes(&self) -> Result<SnapdResponse> {
        self.get_with_query("/changes", &[("select", "all".to_string())])
    }

    /// Block until the change behind `response` has finished.
    ///
    /// Synchronous responses come back unchanged. For asynchronous ones the
    /// change is polled at [`DEFAULT_POLL_INTERVAL`] until its status is in
    /// [`COMPLETE_STATUSES`]; the original response is then returned. A
    /// finished change is not necessarily a successful one: callers that
    /// care should inspect the final change status themselves.
    ///
    /// There is no overall deadline. A change that never completes blocks
    /// forever, unless the client was built with
    /// [`SnapdClient::with_timeout`], which bounds each individual poll.
    pub fn wait_for(&self, response: SnapdResponse) -> Result<SnapdResponse> {
        self.wait_for_with_interval(response, DEFAULT_POLL_INTERVAL)
    }

    /// Like [`SnapdClient::wait_for`], with a caller-chosen poll interval.
    pub fn wait_for_with_interval(
        &self,
        response: SnapdResponse,
        interval: Duration,
    ) -> Result<SnapdResponse> {
        if response.kind == ResponseKind::Sync {
            return Ok(response);
        }
        let Some(cid) = response.change.clone() else {
            return Ok(response);
        };

        loop {
            std::thread::sleep(interval);

            let change = self.check_change(&cid)?;
            let complete = change
                .result
                .as_json()
                .and_then(|result| result.get("status"))
                .and_then(Value::as_str)
                .is_some_and(|status| COMPLETE_STATUSES.contains(&status));
            if complete {
                return Ok(response);
            }
        }
    }
}
