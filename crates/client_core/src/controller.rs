//! Loading state machine: `Idle -> Loading -> {Loaded, Failed}`.
//!
//! The controller owns the only writable copy of [`DisplayState`] and publishes
//! each transition on a `watch` channel. One fetch per controller; later calls
//! to [`LoadController::load`] are ignored.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use shared::domain::Record;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    config::Settings,
    error::{FetchError, LoadError},
    pipeline::{transform, NamePolicy},
    transport::{HttpRecordSource, RecordSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Status,
    Timeout,
    Decode,
    MalformedName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReason {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&LoadError> for FailureReason {
    fn from(err: &LoadError) -> Self {
        let kind = match err {
            LoadError::Fetch(FetchError::Transport(_) | FetchError::InvalidEndpoint(_)) => {
                FailureKind::Transport
            }
            LoadError::Fetch(FetchError::Status { .. }) => FailureKind::Status,
            LoadError::Fetch(FetchError::Timeout { .. }) => FailureKind::Timeout,
            LoadError::Fetch(FetchError::Decode(_)) => FailureKind::Decode,
            LoadError::MalformedName(_) => FailureKind::MalformedName,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FailureReason),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub phase: LoadPhase,
    /// Pipeline output. Empty until a load succeeds, and after a failure.
    pub records: Vec<Record>,
}

impl DisplayState {
    /// True from construction until the fetch resolves either way.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    pub fn failure(&self) -> Option<&FailureReason> {
        match &self.phase {
            LoadPhase::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

pub struct LoadController {
    source: Arc<dyn RecordSource>,
    policy: NamePolicy,
    state: watch::Sender<DisplayState>,
    started: AtomicBool,
}

impl LoadController {
    pub fn new(source: Arc<dyn RecordSource>, policy: NamePolicy) -> Self {
        let (state, _) = watch::channel(DisplayState::default());
        Self {
            source,
            policy,
            state,
            started: AtomicBool::new(false),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let source = HttpRecordSource::from_settings(settings)?;
        Ok(Self::new(Arc::new(source), settings.name_policy))
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    /// Runs [`Self::load`] on the current tokio runtime.
    pub fn start(self: &Arc<Self>) -> JoinHandle<LoadPhase> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.load().await })
    }

    /// Fetches once, shapes the result and publishes the final state.
    ///
    /// Failures are logged and published as [`LoadPhase::Failed`]; they are
    /// never returned as errors.
    pub async fn load(&self) -> LoadPhase {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("records load already requested; ignoring duplicate call");
            return self.snapshot().phase;
        }

        self.publish(LoadPhase::Loading, Vec::new());

        match self.fetch_and_shape().await {
            Ok(records) => {
                info!(count = records.len(), "records loaded");
                self.publish(LoadPhase::Loaded, records);
            }
            Err(err) => {
                error!("failed to load records: {err}");
                self.publish(LoadPhase::Failed(FailureReason::from(&err)), Vec::new());
            }
        }

        self.snapshot().phase
    }

    async fn fetch_and_shape(&self) -> Result<Vec<Record>, LoadError> {
        let raw = self.source.fetch_records().await?;
        let fetched = raw.len();
        let records = transform(raw, self.policy)?;
        debug!(
            fetched,
            kept = records.len(),
            policy = self.policy.as_str(),
            "records shaped for display"
        );
        Ok(records)
    }

    fn publish(&self, phase: LoadPhase, records: Vec<Record>) {
        debug!(?phase, count = records.len(), "publishing display state");
        self.state.send_replace(DisplayState { phase, records });
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
