//! `query_student_portal`: personal data behind a login.

use std::collections::HashMap;
use std::sync::Arc;

use concierge_core::config::CacheConfig;
use concierge_core::errors::ToolError;
use concierge_core::text::{contains_any, normalize};
use concierge_core::traits::{IPortalClient, ITool, PortalData};
use concierge_core::{Credentials, PortalKind, ToolContract, ToolInput, ToolName, ToolResult};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::contracts::contract_for;

/// Which portal pages a query asks for.
pub fn portal_data_for_query(query: &str) -> PortalData {
    let q = normalize(query);
    if contains_any(&q, &["result", "grade", "mark"]) {
        PortalData::Results
    } else if contains_any(&q, &["dashboard", "attendance"]) {
        PortalData::Dashboard
    } else {
        PortalData::All
    }
}

/// Cache input for a portal call: portal, upper-cased username, data kind
/// and a digest of the full credentials.
///
/// The cache is shared by every session, so an entry is only reachable with
/// the password that produced it. The password itself never appears.
pub fn portal_cache_input(credentials: &Credentials, data: PortalData) -> String {
    let username = credentials.username.to_uppercase();
    format!(
        "portal_{}_{}_{}_{}",
        credentials.portal_kind.as_str(),
        username,
        data.as_str(),
        credentials_digest(&username, &credentials.password, credentials.portal_kind)
    )
}

fn credentials_digest(username: &str, password: &str, kind: PortalKind) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in [kind.as_str(), username, password] {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    let hex = hasher.finalize().to_hex();
    hex.as_str()[..16].to_string()
}

fn portal_title(kind: PortalKind) -> &'static str {
    match kind {
        PortalKind::Regular => "Regular Portal",
        PortalKind::Autonomous => "Autonomous Portal",
    }
}

/// Portal client for deployments without portal access.
pub struct UnconfiguredPortal;

impl IPortalClient for UnconfiguredPortal {
    fn fetch(&self, _credentials: &Credentials, _data: PortalData) -> Result<Map<String, Value>, ToolError> {
        Err(ToolError::Unavailable {
            tool: ToolName::StudentPortal.as_str().into(),
        })
    }
}

pub struct PortalTool {
    clients: HashMap<PortalKind, Arc<dyn IPortalClient>>,
    contract: ToolContract,
}

impl PortalTool {
    pub fn new(cache: &CacheConfig) -> Self {
        Self {
            clients: HashMap::new(),
            contract: contract_for(ToolName::StudentPortal, cache),
        }
    }

    pub fn with_client(mut self, kind: PortalKind, client: Arc<dyn IPortalClient>) -> Self {
        self.clients.insert(kind, client);
        self
    }
}

impl ITool for PortalTool {
    fn contract(&self) -> &ToolContract {
        &self.contract
    }

    fn call(&self, input: &ToolInput) -> Result<ToolResult, ToolError> {
        let credentials = input
            .credentials
            .as_ref()
            .ok_or(ToolError::MissingCredentials)?;
        let client = self
            .clients
            .get(&credentials.portal_kind)
            .ok_or_else(|| ToolError::Unavailable {
                tool: ToolName::StudentPortal.as_str().into(),
            })?;

        let data_kind = portal_data_for_query(&input.query);
        let username = credentials.username.to_uppercase();
        debug!(
            portal = credentials.portal_kind.as_str(),
            username = %username,
            data = data_kind.as_str(),
            "portal fetch"
        );

        let data = client.fetch(credentials, data_kind).map_err(|e| {
            if matches!(e, ToolError::LoginRejected { .. }) {
                warn!(portal = credentials.portal_kind.as_str(), "portal login rejected");
            }
            e
        })?;

        let mut payload = Map::new();
        payload.insert("portal".into(), json!(portal_title(credentials.portal_kind)));
        payload.insert("data_kind".into(), json!(data_kind.as_str()));
        payload.insert("username".into(), json!(username));
        payload.insert("data".into(), Value::Object(data));
        Ok(ToolResult::ok(payload))
    }
}
