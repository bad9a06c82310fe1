// Event types for async communication

use crate::api::AnalysisError;

#[derive(Debug)]
pub enum AppEvent {
    /// The classification request resolved, one way or another
    AnalysisFinished(Result<bool, AnalysisError>),
}
