pub mod delete;
pub mod fetch;
pub mod list;
pub mod plot;
pub mod summary;

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::config::AppDirs;
use crate::models::plot::{Dimensions, PlotOptions};
use crate::models::summary::SummaryOptions;
use crate::services::summary_service;
use crate::store::TrendStore;
use crate::utils::AppError;

/// Interpret the requested actions and run them in a fixed order.
///
/// `--list` short-circuits everything else; `--delete` short-circuits
/// fetch/plot/summary. Fetch always runs before the plot render: a
/// combined fetch-and-plot invocation charts the rows it just wrote.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let dirs = AppDirs::resolve()?;
    let store = TrendStore::open(dirs.trend_dir.clone())?;

    if cli.list {
        list::execute(&store)?;
        return Ok(());
    }

    if !cli.fetch && !cli.plot && !cli.summary && !cli.delete {
        return Err(AppError::Usage);
    }

    let users = resolve_users(cli, &store)?;
    if users.is_empty() {
        return Err(AppError::Usage);
    }

    if cli.delete {
        delete::execute(&store, &users);
        return Ok(());
    }

    if cli.fetch {
        fetch::execute(&store, &users);
    }
    if cli.plot {
        plot::execute(&store, &users, &plot_options(cli), &dirs.plot_script)?;
    }
    if cli.summary {
        summary::execute(&store, &users, &summary_options(cli));
    }

    Ok(())
}

/// Explicit names first (positionals, then --user), then every
/// previously trended user when --all is given; first occurrence wins
fn resolve_users(cli: &Cli, store: &TrendStore) -> Result<Vec<String>, AppError> {
    let mut users: Vec<String> = cli.users.clone();
    if let Some(user) = &cli.user {
        users.push(user.clone());
    }
    if cli.all {
        let known = store.list_accounts().map_err(AppError::Store)?;
        debug!("picked up {} users: {:?}", known.len(), known);
        users.extend(known);
    }

    let mut seen = HashSet::new();
    users.retain(|user| seen.insert(user.clone()));
    Ok(users)
}

fn plot_options(cli: &Cli) -> PlotOptions {
    let mut options = PlotOptions::default();
    if let Some(input) = &cli.dimensions {
        match Dimensions::parse(input) {
            Some(dimensions) => {
                debug!("using dimensions {}", dimensions.as_gnuplot());
                options.dimensions = dimensions;
            }
            None => warn!("invalid dimensions {:?}", input),
        }
    }
    if let Some(output) = &cli.output {
        debug!("outputting plot to {:?}", output);
        options.output = output.clone();
    }
    if cli.only_total {
        debug!("will only plot the total karma");
        options.only_total = true;
    }
    options
}

fn summary_options(cli: &Cli) -> SummaryOptions {
    let mut options = SummaryOptions::default();
    if let Some(format) = &cli.summary_format {
        options.template = summary_service::unescape_template(format);
        debug!("changed summary output format to {:?}", options.template);
    }
    if let Some(format) = &cli.summary_time_format {
        options.time_format = format.clone();
        debug!("changed summary time format to {:?}", options.time_format);
    }
    options
}
