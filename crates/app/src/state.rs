//! Composed application state and the named operations that mutate it.

use chrono::NaiveDate;
use menuflow_core::board::{Handoff, WorkflowBoard};
use menuflow_core::client::NewClient;
use menuflow_core::demand::{DemandItem, NewDemand};
use menuflow_core::report::FinishedClientsReport;
use menuflow_core::stage::{DemandStatus, Stage};
use menuflow_core::tasks::TaskList;
use menuflow_core::types::ClientId;
use menuflow_gateway::ClientApi;

use crate::config::AppConfig;
use crate::directory::ClientDirectory;
use crate::error::{AppError, AppResult};
use crate::notifications::Notifications;
use crate::session::Session;
use crate::views::ClientsView;

/// All state containers of the application, one per view, plus the
/// gateway-backed client cache.
pub struct AppState {
    pub directory: ClientDirectory,
    pub board: WorkflowBoard,
    pub report: FinishedClientsReport,
    pub tasks: TaskList,
    pub clients_view: ClientsView,
    pub session: Session,
    pub notifications: Notifications,
}

impl AppState {
    /// Build the state with the sample datasets seeded.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            directory: ClientDirectory::new(ClientApi::new(config.gateway_url.clone())),
            board: WorkflowBoard::with_sample_data(),
            report: FinishedClientsReport::with_sample_data(),
            tasks: TaskList::with_sample_data(),
            clients_view: ClientsView::new(),
            session: Session::new(),
            notifications: Notifications::new(),
        }
    }

    /// Create a client through the gateway.
    ///
    /// Validation failures and request failures both surface as a queued
    /// notification; a failed mutation leaves every local store unchanged.
    pub async fn create_client(&mut self, form: &NewClient) -> AppResult<()> {
        let result = self.directory.create(form).await;
        match result {
            Ok(_) => Ok(()),
            Err(err) => Err(self.notify_failure(err)),
        }
    }

    /// Update a client through the gateway.
    pub async fn update_client(&mut self, id: ClientId, form: &NewClient) -> AppResult<()> {
        let result = self.directory.update(id, form).await;
        match result {
            Ok(_) => Ok(()),
            Err(err) => Err(self.notify_failure(err)),
        }
    }

    /// Delete a client through the gateway.
    pub async fn delete_client(&mut self, id: ClientId) -> AppResult<()> {
        let result = self.directory.delete(id).await;
        match result {
            Ok(()) => Ok(()),
            Err(err) => Err(self.notify_failure(err)),
        }
    }

    /// Add a demand to a stage table.
    pub fn add_demand(
        &mut self,
        stage: Stage,
        form: &NewDemand,
        today: NaiveDate,
    ) -> AppResult<DemandItem> {
        match self.board.add_demand(stage, form, today) {
            Ok(demand) => Ok(demand),
            Err(err) => Err(self.notify_failure(AppError::Core(err))),
        }
    }

    /// Change a demand's status, wiring the hand-off end to end: a demand
    /// completing the final stage lands in the finished-clients report, a
    /// demand completing any other stage moves to the next stage's table.
    pub fn set_demand_status(
        &mut self,
        key: &str,
        status: DemandStatus,
        today: NaiveDate,
    ) -> AppResult<()> {
        let handoff = match self.board.set_status(key, status, today) {
            Ok(handoff) => handoff,
            Err(err) => return Err(self.notify_failure(AppError::Core(err))),
        };

        match handoff {
            Handoff::None => {}
            Handoff::Advanced { to, .. } => {
                self.notifications.info(format!("Demanda movida para {to}"));
            }
            Handoff::Finished(record) => {
                let row = self.report.admit(record);
                self.notifications.info(format!(
                    "Cliente {} finalizado e movido para Clientes Finalizados",
                    row.name
                ));
            }
        }
        Ok(())
    }

    fn notify_failure(&mut self, err: AppError) -> AppError {
        self.notifications.error(err.to_string());
        err
    }
}
