use metrics_exporter_prometheus::PrometheusHandle;
use readiness_ai::assessment::{
    AssessmentSnapshot, PublishError, ReportPublisher, ReportSubmission, SnapshotError,
    SnapshotStore,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySnapshotStore {
    snapshot: Arc<Mutex<Option<AssessmentSnapshot>>>,
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<AssessmentSnapshot>, SnapshotError> {
        Ok(self
            .snapshot
            .lock()
            .expect("snapshot mutex poisoned")
            .clone())
    }

    fn save(&self, snapshot: &AssessmentSnapshot) -> Result<(), SnapshotError> {
        *self.snapshot.lock().expect("snapshot mutex poisoned") = Some(snapshot.clone());
        Ok(())
    }
}

/// Publisher wired to the `APP_WEBHOOK_URL` endpoint. Delivery is a stub: the
/// submission is logged against the endpoint, not sent over the network.
#[derive(Debug, Clone, Default)]
pub(crate) struct WebhookPublisher {
    endpoint: Option<String>,
}

impl WebhookPublisher {
    pub(crate) fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }
}

impl ReportPublisher for WebhookPublisher {
    fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    fn publish(&self, submission: &ReportSubmission) -> Result<(), PublishError> {
        match &self.endpoint {
            Some(endpoint) => {
                info!(%endpoint, company = %submission.company, "report queued for webhook delivery");
                Ok(())
            }
            None => Err(PublishError::Transport(
                "no webhook endpoint configured".to_string(),
            )),
        }
    }
}
