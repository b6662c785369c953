use std::path::PathBuf;

use crate::store::StoreError;

const XDG_PREFIX: &str = "reddit-utils";
const TREND_SUBDIR: &str = "karma-trends";
const PLOT_SCRIPT: &str = "karma.p";

/// Resolved application directories.
///
/// Trend data lives under the XDG data home, the gnuplot scratch script
/// under the XDG cache home; both honour the usual environment overrides
/// and fall back to the home-relative defaults.
#[derive(Debug, Clone)]
pub struct AppDirs {
    /// Directory of per-account trend files
    pub trend_dir: PathBuf,
    /// Scratch file the gnuplot script is written to
    pub plot_script: PathBuf,
}

impl AppDirs {
    /// Resolve and create the data and cache locations
    pub fn resolve() -> Result<Self, StoreError> {
        let base = xdg::BaseDirectories::with_prefix(XDG_PREFIX)?;
        let trend_dir = base.create_data_directory(TREND_SUBDIR)?;
        let plot_script = base.place_cache_file(PLOT_SCRIPT)?;
        Ok(Self {
            trend_dir,
            plot_script,
        })
    }
}
