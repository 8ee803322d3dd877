//! Pipeline stage and demand status enums.
//!
//! Wire values are the Portuguese strings the backend and the original
//! dataset use (`"coleta"`, `"em andamento"`, ...); the enums exist so the
//! rest of the codebase never handles raw strings.

use serde::{Deserialize, Serialize};

/// One of the three fulfillment pipeline phases a client passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Data collection ("coleta").
    #[serde(rename = "coleta")]
    Collection,
    /// Menu creation ("criação").
    #[serde(rename = "criação")]
    Creation,
    /// Deployment at the client ("implantação").
    #[serde(rename = "implantação")]
    Deployment,
}

/// All stages in pipeline order.
pub const STAGES: [Stage; 3] = [Stage::Collection, Stage::Creation, Stage::Deployment];

impl Stage {
    /// Wire/storage string for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Collection => "coleta",
            Stage::Creation => "criação",
            Stage::Deployment => "implantação",
        }
    }

    /// Parse a wire string into a stage.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "coleta" => Some(Stage::Collection),
            "criação" => Some(Stage::Creation),
            "implantação" => Some(Stage::Deployment),
            _ => None,
        }
    }

    /// Demand display-id prefix for this stage (`COL001`, `CRI001`, ...).
    pub fn demand_prefix(&self) -> &'static str {
        match self {
            Stage::Collection => "COL",
            Stage::Creation => "CRI",
            Stage::Deployment => "IMP",
        }
    }

    /// The stage that follows this one, or `None` after the final stage.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Collection => Some(Stage::Creation),
            Stage::Creation => Some(Stage::Deployment),
            Stage::Deployment => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a demand within its stage.
///
/// Transitions are unconstrained: any status may move to any other. `Done`
/// is terminal in practice because the board removes the entry from its
/// stage and hands it off as soon as the status lands on `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandStatus {
    #[serde(rename = "aguardando")]
    Waiting,
    #[serde(rename = "em andamento")]
    InProgress,
    #[serde(rename = "concluído")]
    Done,
}

impl DemandStatus {
    /// Wire/storage string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandStatus::Waiting => "aguardando",
            DemandStatus::InProgress => "em andamento",
            DemandStatus::Done => "concluído",
        }
    }

    /// Parse a wire string into a status.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "aguardando" => Some(DemandStatus::Waiting),
            "em andamento" => Some(DemandStatus::InProgress),
            "concluído" => Some(DemandStatus::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for DemandStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
