//! Top-level error taxonomy

use thiserror::Error;

use crate::services::plot_service::PlotError;
use crate::store::StoreError;

/// Errors that abort a whole invocation.
///
/// Per-user fetch, delete and summary failures are reported and skipped
/// by the command layer instead of surfacing here.
#[derive(Debug, Error)]
pub enum AppError {
    /// No action flag given, or no users resolved; caller prints usage
    #[error("nothing to do")]
    Usage,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Plot(#[from] PlotError),
}
