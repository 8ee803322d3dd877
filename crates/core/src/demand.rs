//! Demand items: units of work tracked within a single pipeline stage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::stage::{DemandStatus, Stage};
use crate::validation::{parse_flexible_date, Schema};

/// A demand row on the workflow board.
///
/// `key` is the stable internal identity (survives hand-off between
/// stages); `id` is the stage-prefixed display id shown in the table
/// (`COL001`, `CRI002`, ...). `client` is a display reference to a client
/// name, deliberately not a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandItem {
    pub key: String,
    pub id: String,
    pub client: String,
    pub responsible: String,
    pub deadline: NaiveDate,
    pub status: DemandStatus,
}

/// Raw demand form input, as submitted from the stage-local modal.
///
/// All fields arrive as strings; [`NewDemand::validate`] applies the form
/// schema and [`NewDemand::build`] normalizes them into a [`DemandItem`].
#[derive(Debug, Clone)]
pub struct NewDemand {
    pub id: String,
    pub client: String,
    pub responsible: String,
    pub deadline: String,
    pub status: DemandStatus,
}

impl NewDemand {
    /// Validate the demand form before submission.
    pub fn validate(&self) -> Result<(), CoreError> {
        let errors = demand_schema().check(&[
            ("id", &self.id),
            ("client", &self.client),
            ("responsible", &self.responsible),
            ("deadline", &self.deadline),
        ]);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }

    /// Normalize the form into a [`DemandItem`] for the given stage.
    ///
    /// The deadline is normalized to a calendar date and the display id
    /// gains the stage prefix when the user typed only the number (the
    /// original form rendered the prefix as decoration in front of the
    /// input).
    pub fn build(&self, stage: Stage, key: String) -> Result<DemandItem, CoreError> {
        self.validate()?;

        let deadline = parse_flexible_date(self.deadline.trim()).ok_or_else(|| {
            CoreError::invalid("deadline", "Por favor, selecione uma data válida!")
        })?;

        Ok(DemandItem {
            key,
            id: prefixed_id(stage, self.id.trim()),
            client: self.client.trim().to_string(),
            responsible: self.responsible.trim().to_string(),
            deadline,
            status: self.status,
        })
    }
}

/// Prepend the stage prefix unless the id already carries it.
pub fn prefixed_id(stage: Stage, raw: &str) -> String {
    if raw.starts_with(stage.demand_prefix()) {
        raw.to_string()
    } else {
        format!("{}{raw}", stage.demand_prefix())
    }
}

fn demand_schema() -> Schema {
    Schema::new()
        .required("id", "Por favor, insira o ID!")
        .required("client", "Por favor, selecione o cliente!")
        .required("responsible", "Por favor, selecione o responsável!")
        .required("deadline", "Por favor, selecione uma data!")
        .date("deadline", "Por favor, selecione uma data válida!")
}
