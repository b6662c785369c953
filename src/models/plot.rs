//! Plot option models

use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

lazy_static! {
    static ref DIMENSIONS_RE: Regex = Regex::new(r"^\d+x\d+$").unwrap();
}

/// Chart dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Parse a `WIDTHxHEIGHT` command line argument, e.g. `1600x900`
    pub fn parse(input: &str) -> Option<Self> {
        if !DIMENSIONS_RE.is_match(input) {
            return None;
        }
        let (width, height) = input.split_once('x')?;
        Some(Self {
            width: width.parse().ok()?,
            height: height.parse().ok()?,
        })
    }

    /// Format for the gnuplot `size` argument, e.g. `1600,900`
    pub fn as_gnuplot(&self) -> String {
        format!("{},{}", self.width, self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
        }
    }
}

/// Options for one plot invocation
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub output: PathBuf,
    pub dimensions: Dimensions,
    pub only_total: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("karma-plot.png"),
            dimensions: Dimensions::default(),
            only_total: false,
        }
    }
}
