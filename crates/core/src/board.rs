//! The workflow board: one shared, ordered collection of demands keyed by
//! pipeline stage.
//!
//! The board replaces three isolated per-stage tables with a single
//! collection whose entries carry a [`Stage`] tag, so moving a demand
//! between stages is one atomic field update instead of a delete in one
//! table and an insert in another. Completing a demand performs the real
//! hand-off: the entry is re-tagged into the next stage with an adapted
//! display id and a reset status, or leaves the board as a finished record
//! when it completes the final stage.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::demand::{DemandItem, NewDemand};
use crate::error::CoreError;
use crate::report::FinishedRecord;
use crate::search::matches_text;
use crate::stage::{DemandStatus, Stage};

/// Result of a status change on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// The status changed in place; the demand stays in its stage.
    None,
    /// The demand completed a non-final stage and moved to the next one.
    Advanced { key: String, to: Stage },
    /// The demand completed the final stage and left the board.
    Finished(FinishedRecord),
}

struct BoardEntry {
    stage: Stage,
    demand: DemandItem,
    /// Date the demand first entered the board; survives hand-offs so the
    /// finished record can report total pipeline time.
    entered: NaiveDate,
}

/// In-memory collection of all demands across the three pipeline stages.
#[derive(Default)]
pub struct WorkflowBoard {
    entries: Vec<BoardEntry>,
}

impl WorkflowBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board seeded with the original sample rows for all three stages.
    pub fn with_sample_data() -> Self {
        let entered = NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid seed date");
        let mut board = Self::new();
        let seed = |id: &str, client: &str, responsible: &str, deadline: &str, status| DemandItem {
            key: Uuid::new_v4().to_string(),
            id: id.to_string(),
            client: client.to_string(),
            responsible: responsible.to_string(),
            deadline: deadline.parse().expect("valid seed date"),
            status,
        };

        use DemandStatus::*;
        let rows = [
            (Stage::Collection, seed("COL001", "Restaurante A", "João Silva", "2025-05-30", Waiting)),
            (Stage::Collection, seed("COL002", "Pizzaria B", "Maria Santos", "2025-05-25", InProgress)),
            (Stage::Collection, seed("COL003", "Lanchonete C", "Carlos Oliveira", "2025-06-05", Done)),
            (Stage::Creation, seed("CRI001", "Restaurante A", "Ana Souza", "2025-06-10", Waiting)),
            (Stage::Creation, seed("CRI002", "Pizzaria B", "Pedro Costa", "2025-06-15", InProgress)),
            (Stage::Deployment, seed("IMP001", "Lanchonete C", "Roberto Alves", "2025-06-25", Waiting)),
            (Stage::Deployment, seed("IMP002", "Cafeteria D", "Fernanda Lima", "2025-07-05", InProgress)),
        ];
        for (stage, demand) in rows {
            board.entries.push(BoardEntry {
                stage,
                demand,
                entered,
            });
        }
        board
    }

    /// Add a demand to a stage from validated form input.
    ///
    /// Assigns a fresh key, normalizes the fields via [`NewDemand::build`]
    /// and rejects display ids already present anywhere on the board.
    pub fn add_demand(
        &mut self,
        stage: Stage,
        form: &NewDemand,
        today: NaiveDate,
    ) -> Result<DemandItem, CoreError> {
        let demand = form.build(stage, Uuid::new_v4().to_string())?;

        if self.entries.iter().any(|e| e.demand.id == demand.id) {
            return Err(CoreError::Conflict(format!(
                "demand id {} already exists on the board",
                demand.id
            )));
        }

        tracing::debug!(demand_id = %demand.id, stage = %stage, "Demand added to board");
        self.entries.push(BoardEntry {
            stage,
            demand: demand.clone(),
            entered: today,
        });
        Ok(demand)
    }

    /// All demands currently in `stage`, in insertion order.
    pub fn demands(&self, stage: Stage) -> Vec<&DemandItem> {
        self.entries
            .iter()
            .filter(|e| e.stage == stage)
            .map(|e| &e.demand)
            .collect()
    }

    /// Derived view of a stage filtered by a free-text query against the
    /// demand id and client name. Never mutates the board.
    pub fn search(&self, stage: Stage, query: &str) -> Vec<&DemandItem> {
        self.entries
            .iter()
            .filter(|e| e.stage == stage)
            .filter(|e| matches_text(query, &[e.demand.id.as_str(), e.demand.client.as_str()]))
            .map(|e| &e.demand)
            .collect()
    }

    /// Look up a demand and its current stage by key.
    pub fn get(&self, key: &str) -> Option<(Stage, &DemandItem)> {
        self.entries
            .iter()
            .find(|e| e.demand.key == key)
            .map(|e| (e.stage, &e.demand))
    }

    /// Change a demand's status.
    ///
    /// Any status may move to any other. Setting [`DemandStatus::Done`]
    /// removes the demand from its current stage and hands it off: to the
    /// next stage with an adapted id and a `Waiting` status, or off the
    /// board entirely as a [`FinishedRecord`] when it completes the final
    /// stage. `today` stamps the completion date of a finishing demand.
    pub fn set_status(
        &mut self,
        key: &str,
        status: DemandStatus,
        today: NaiveDate,
    ) -> Result<Handoff, CoreError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.demand.key == key)
            .ok_or_else(|| CoreError::NotFound {
                entity: "demand",
                key: key.to_string(),
            })?;

        self.entries[index].demand.status = status;
        if status != DemandStatus::Done {
            return Ok(Handoff::None);
        }

        let stage = self.entries[index].stage;
        match stage.next() {
            Some(next) => {
                let adapted = self.adapted_id(next, &self.entries[index].demand.id);
                let entry = &mut self.entries[index];
                tracing::info!(
                    demand_id = %entry.demand.id,
                    from = %stage,
                    to = %next,
                    "Demanda movida para a próxima etapa"
                );
                entry.stage = next;
                entry.demand.id = adapted;
                entry.demand.status = DemandStatus::Waiting;
                Ok(Handoff::Advanced {
                    key: key.to_string(),
                    to: next,
                })
            }
            None => {
                let entry = self.entries.remove(index);
                tracing::info!(
                    client = %entry.demand.client,
                    "Cliente finalizado e movido para Clientes Finalizados"
                );
                Ok(Handoff::Finished(FinishedRecord {
                    name: entry.demand.client,
                    implementer: entry.demand.responsible,
                    completion_date: today,
                    total_time_days: (today - entry.entered).num_days(),
                }))
            }
        }
    }

    /// Move a demand to another stage without touching its status.
    ///
    /// The display id is re-prefixed for the target stage; the move is a
    /// single field update on the shared collection, so it can never leave
    /// the demand in both stages or in neither.
    pub fn transition(&mut self, key: &str, new_stage: Stage) -> Result<(), CoreError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.demand.key == key)
            .ok_or_else(|| CoreError::NotFound {
                entity: "demand",
                key: key.to_string(),
            })?;

        if self.entries[index].stage == new_stage {
            return Ok(());
        }

        let adapted = self.adapted_id(new_stage, &self.entries[index].demand.id);
        let entry = &mut self.entries[index];
        entry.stage = new_stage;
        entry.demand.id = adapted;
        Ok(())
    }

    /// Total number of demands on the board, across all stages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-prefix a display id for a target stage, falling back to the next
    /// free sequence number when the re-prefixed id already exists (the
    /// sample data uses the same numeric suffixes in every stage).
    fn adapted_id(&self, target: Stage, current: &str) -> String {
        let suffix = STAGE_PREFIXES
            .iter()
            .find_map(|prefix| current.strip_prefix(prefix))
            .unwrap_or(current);
        let candidate = format!("{}{suffix}", target.demand_prefix());

        if !self.entries.iter().any(|e| e.demand.id == candidate) {
            return candidate;
        }

        let next = self
            .entries
            .iter()
            .filter_map(|e| e.demand.id.strip_prefix(target.demand_prefix()))
            .filter_map(|s| s.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        format!("{}{next:03}", target.demand_prefix())
    }
}

const STAGE_PREFIXES: [&str; 3] = ["COL", "CRI", "IMP"];
