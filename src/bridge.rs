//! Built-in procedures served under the `splay.bridge` namespace.
//!
//! A server answers `info` and `health` so clients can check which bridge they talk to
//! before resolving components.

use serde::{Deserialize, Serialize};
use splay_core::Descriptor;
use splay_registry::ProcedurePath;

/// Namespace of the built-in procedures.
pub const BRIDGE_NAMESPACE: &str = "splay.bridge";

/// Names of the built-in procedures.
pub const BUILTIN_PROCEDURES: [&str; 2] = ["info", "health"];

/// Answer of the `info` procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeInfo {
    /// Package name.
    pub name: String,
    /// Package version.
    pub version: String,
}

/// Liveness reported by the `health` procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Serving requests.
    Ok,
}

/// Answer of the `health` procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Current status.
    pub status: HealthStatus,
}

/// Package name and version of this bridge.
#[must_use]
pub fn info() -> BridgeInfo {
    BridgeInfo {
        name: env!("CARGO_PKG_NAME").to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    }
}

/// Liveness of this bridge.
#[must_use]
pub const fn health() -> Health {
    Health {
        status: HealthStatus::Ok,
    }
}

/// Path of a built-in procedure, e.g. `splay.bridge.info`.
#[must_use]
pub fn procedure_path(name: &str) -> ProcedurePath {
    ProcedurePath::new(Some(BRIDGE_NAMESPACE), name)
}

/// Answers a built-in procedure as a descriptor, for transports that only carry
/// descriptors.
///
/// The answer is a node typed after the procedure path with the fields of the answer
/// as props. Returns `None` for any other path.
#[must_use]
pub fn answer(path: &ProcedurePath) -> Option<Descriptor> {
    if path.namespace() != Some(BRIDGE_NAMESPACE) {
        return None;
    }
    let value = match path.name() {
        "info" => serde_json::to_value(info()),
        "health" => serde_json::to_value(health()),
        _ => return None,
    }
    .ok()?;
    let serde_json::Value::Object(props) = value else {
        return None;
    };
    Some(Descriptor::new(path.to_string()).with_props(props))
}
