// src/api/confdb.rs

//! Confdb: schema-backed, permissioned configuration views.

use serde_json::{Map, Value, json};

use crate::Result;
use crate::http::SnapdClient;
use crate::types::{RequestBody, SnapdResponse};

impl SnapdClient {
    /// Get configuration values from a confdb view.
    ///
    /// `keys` are paths into rules defined in the view; with an empty
    /// slice, all readable view rules are matched.
    pub fn get_confdb(
        &self,
        account: &str,
        confdb_schema: &str,
        view: &str,
        keys: &[&str],
    ) -> Result<SnapdResponse> {
        let mut query = Vec::new();
        if !keys.is_empty() {
            query.push(("keys", keys.join(",")));
        }
        self.get_with_query(&format!("/confdb/{account}/{confdb_schema}/{view}"), &query)
    }

    /// Set configuration values in a confdb view.
    ///
    /// `config` maps configuration paths to values; `null` unsets a value.
    pub fn set_confdb(
        &self,
        account: &str,
        confdb_schema: &str,
        view: &str,
        config: Value,
    ) -> Result<SnapdResponse> {
        self.put(
            &format!("/confdb/{account}/{confdb_schema}/{view}"),
            json!({"values": config}).into(),
        )
    }

    /// Grant an operator the ability to remotely manage confdb views.
    ///
    /// `authentications` are methods like `"operator-key"` or `"store"`;
    /// `views` are in the form `<account-id>/<schema>/<view-name>`.
    pub fn delegate_confdb(
        &self,
        operator_id: &str,
        authentications: &[&str],
        views: &[&str],
    ) -> Result<SnapdResponse> {
        self.post(
            "/confdb",
            json!({
                "action": "delegate",
                "operator-id": operator_id,
                "authentications": authentications,
                "views": views,
            })
            .into(),
        )
    }

    /// Withdraw an operator's ability to remotely manage confdb views.
    ///
    /// Omitting `authentications` withdraws all authentication methods;
    /// omitting `views` withdraws access from all views.
    pub fn undelegate_confdb(
        &self,
        operator_id: &str,
        authentications: Option<&[&str]>,
        views: Option<&[&str]>,
    ) -> Result<SnapdResponse> {
        let mut body = Map::new();
        body.insert("action".to_string(), "undelegate".into());
        body.insert("operator-id".to_string(), operator_id.into());
        if let Some(authentications) = authentications {
            body.insert("authentications".to_string(), authentications.into());
        }
        if let Some(views) = views {
            body.insert("views".to_string(), views.into());
        }
        self.post("/confdb", RequestBody::Json(Value::Object(body)))
    }
}
