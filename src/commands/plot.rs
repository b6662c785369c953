use std::path::Path;
use tracing::debug;

use crate::models::plot::PlotOptions;
use crate::services::plot_service::{self, PlotError};
use crate::store::TrendStore;

/// Render one chart covering every selected user; all-or-nothing
pub fn execute(
    store: &TrendStore,
    users: &[String],
    options: &PlotOptions,
    scratch: &Path,
) -> Result<(), PlotError> {
    debug!("plotting user(s): {}", users.join(", "));
    plot_service::compose_and_render(users, store, options, scratch)
}
