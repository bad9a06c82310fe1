// Background analysis requests

use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{AnalysisError, Classifier};
use crate::app::App;
use crate::events::AppEvent;

/// Guarantees exactly one `AnalysisFinished` event per spawned request.
///
/// If the task is dropped before `complete` runs (panic, runtime shutdown),
/// the guard reports `AnalysisError::Aborted` so the form never stays in flight.
struct CompletionGuard {
    tx: Option<mpsc::UnboundedSender<AppEvent>>,
}

impl CompletionGuard {
    const fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    fn complete(mut self, result: Result<bool, AnalysisError>) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(AppEvent::AnalysisFinished(result));
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            debug!("Analysis task ended without a result");
            let _ = tx.send(AppEvent::AnalysisFinished(Err(AnalysisError::Aborted)));
        }
    }
}

pub fn spawn_analysis(
    classifier: Arc<dyn Classifier>,
    text: String,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    let guard = CompletionGuard::new(event_tx);

    tokio::spawn(async move {
        let result = classifier.classify(&text).await;
        guard.complete(result);
    })
}

/// Starts an analysis of the current draft if the form allows it.
pub fn submit(
    app: &mut App,
    classifier: &Arc<dyn Classifier>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) -> Option<JoinHandle<()>> {
    let text = app.start_submission()?;
    Some(spawn_analysis(Arc::clone(classifier), text, event_tx.clone()))
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::AnalysisFinished(result) => app.finish_submission(result),
    }
}
