use std::sync::Arc;

use tablemates_core::{
    domain::{
        common::AdminAccess,
        dashboard::{DashboardView, StoreEvent},
    },
    infrastructure::{
        feedback::PostgresFeedbackRepository, health::PostgresHealthCheckRepository,
        notification::RelayMailer, profile::PostgresProfileRepository,
    },
};
use tokio::sync::{RwLock, mpsc::UnboundedSender};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub admin_access: AdminAccess,
    pub dashboard: Arc<RwLock<DashboardView>>,
    pub profile_repository: Arc<PostgresProfileRepository>,
    pub feedback_repository: Arc<PostgresFeedbackRepository>,
    pub health_repository: Arc<PostgresHealthCheckRepository>,
    pub mailer: Arc<RelayMailer>,
    pub events: UnboundedSender<StoreEvent>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        admin_access: AdminAccess,
        profile_repository: PostgresProfileRepository,
        feedback_repository: PostgresFeedbackRepository,
        health_repository: PostgresHealthCheckRepository,
        mailer: RelayMailer,
        events: UnboundedSender<StoreEvent>,
    ) -> Self {
        Self {
            args,
            admin_access,
            dashboard: Arc::new(RwLock::new(DashboardView::new())),
            profile_repository: Arc::new(profile_repository),
            feedback_repository: Arc::new(feedback_repository),
            health_repository: Arc::new(health_repository),
            mailer: Arc::new(mailer),
            events,
        }
    }
}
