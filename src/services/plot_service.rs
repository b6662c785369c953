use std::fs;
use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

use crate::models::plot::PlotOptions;
use crate::store::{StoreError, TrendStore};

const GNUPLOT_BIN: &str = "gnuplot";
const DEFAULT_TERMINAL: &str = "png";

/// Plot composition and rendering errors
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no trending data found for user {0:?}")]
    NoTrendData(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to write plot script: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to run gnuplot: {0}")]
    Spawn(std::io::Error),
    #[error("gnuplot exited with {0}")]
    Render(std::process::ExitStatus),
}

/// Build the gnuplot script for one or more users' karma trends.
///
/// Pure text generation; nothing is written and no subprocess is
/// spawned. Fails fast on the first user without trend data rather
/// than chart a partial user set.
pub fn compose(
    accounts: &[String],
    store: &TrendStore,
    options: &PlotOptions,
) -> Result<String, PlotError> {
    let mut series = Vec::new();
    for account in accounts {
        let path = store.log_path(account)?;
        let has_data = fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false);
        if !has_data {
            return Err(PlotError::NoTrendData(account.clone()));
        }

        if !options.only_total {
            series.push(plot_expr(&path, "1:3", &format!("{} comment", account)));
            series.push(plot_expr(&path, "1:2", &format!("{} submission", account)));
        }
        series.push(plot_expr(&path, "1:($2+$3)", &format!("{} total", account)));
    }

    let title = if accounts.len() == 1 {
        format!("{}'s karma on reddit.com", accounts[0])
    } else {
        format!("karma comparison ({})", accounts.join(", "))
    };

    let terminal = options
        .output
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| DEFAULT_TERMINAL.to_string());

    Ok(format!(
        "set xlabel \"Date\"\n\
         set ylabel \"Karma\"\n\
         set terminal {terminal} size {dimensions}\n\
         set output {output:?}\n\
         set title {title:?}\n\
         set samples 3000\n\
         set xdata time\n\
         set format x \"%d-%b-%y\"\n\
         set timefmt \"%s\"\n\
         plot {series}\n",
        terminal = terminal,
        dimensions = options.dimensions.as_gnuplot(),
        output = options.output,
        title = title,
        series = series.join(", "),
    ))
}

/// Write the script to the scratch file and hand it to gnuplot
pub fn render(script: &str, scratch: &Path) -> Result<(), PlotError> {
    fs::write(scratch, script)?;
    debug!("running {} on {}", GNUPLOT_BIN, scratch.display());
    let status = Command::new(GNUPLOT_BIN)
        .arg(scratch)
        .status()
        .map_err(PlotError::Spawn)?;
    if !status.success() {
        return Err(PlotError::Render(status));
    }
    Ok(())
}

pub fn compose_and_render(
    accounts: &[String],
    store: &TrendStore,
    options: &PlotOptions,
    scratch: &Path,
) -> Result<(), PlotError> {
    let script = compose(accounts, store, options)?;
    render(&script, scratch)
}

fn plot_expr(data: &Path, using: &str, label: &str) -> String {
    format!("{:?} using {} title {:?} with linespoints", data, using, label)
}
