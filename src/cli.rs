use clap::Parser;
use std::path::PathBuf;

/// Track, trend, plot and summarize reddit users' submission and
/// comment karma
#[derive(Debug, Parser)]
#[command(name = "karma-trends", version)]
pub struct Cli {
    /// Reddit usernames to operate on
    #[arg(value_name = "USERS")]
    pub users: Vec<String>,

    /// Reddit username
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Plot karma for the selected users
    #[arg(short, long)]
    pub plot: bool,

    /// List all trended users
    #[arg(short, long)]
    pub list: bool,

    /// Include all previously trended users in the operation
    #[arg(short, long)]
    pub all: bool,

    /// Plot dimensions
    #[arg(short = 'x', long, value_name = "WIDTHxHEIGHT")]
    pub dimensions: Option<String>,

    /// Delete the selected users' trending data
    #[arg(short, long)]
    pub delete: bool,

    /// Output plot to file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print lots of extra information
    #[arg(short, long)]
    pub verbose: bool,

    /// Update karma trend data for the selected users
    #[arg(short = 'k', long = "fetch-karma")]
    pub fetch: bool,

    /// Print a karma summary for the selected users
    #[arg(short, long)]
    pub summary: bool,

    /// Change the summary output format, e.g.
    /// "DATETIME USERNAME(LINK_KARMA, COMMENT_KARMA) UNIXTIME"
    #[arg(short = 'j', long = "summary-format", value_name = "FORMAT")]
    pub summary_format: Option<String>,

    /// strftime pattern for the DATETIME summary token
    #[arg(short = 't', long = "summary-time-format", value_name = "FORMAT")]
    pub summary_time_format: Option<String>,

    /// Only plot the total karma, handy when plotting multiple users
    /// at once
    #[arg(short = 'y', long = "only-total")]
    pub only_total: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_and_flag_users() {
        let cli = Cli::try_parse_from(["karma-trends", "-u", "alice", "bob", "carol"])
            .expect("parse");
        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert_eq!(cli.users, vec!["bob".to_string(), "carol".to_string()]);
    }

    #[test]
    fn test_parse_short_action_flags() {
        let cli = Cli::try_parse_from(["karma-trends", "-k", "-p", "-y", "alice"]).expect("parse");
        assert!(cli.fetch);
        assert!(cli.plot);
        assert!(cli.only_total);
        assert!(!cli.delete);
        assert!(!cli.summary);
    }

    #[test]
    fn test_parse_plot_options() {
        let cli = Cli::try_parse_from([
            "karma-trends",
            "--plot",
            "--dimensions",
            "800x600",
            "--output",
            "chart.svg",
            "alice",
        ])
        .expect("parse");
        assert_eq!(cli.dimensions.as_deref(), Some("800x600"));
        assert_eq!(cli.output, Some(PathBuf::from("chart.svg")));
    }
}
