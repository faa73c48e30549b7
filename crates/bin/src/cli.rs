//! CLI argument definitions for the semisort binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use semisort::sort::{OverlayMode, SortConfig, SortOrder};

use crate::output::OutputFormat;

/// Fallback order for undecided criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Smaller numbers and earlier text first
    Asc,
    /// Larger numbers and later text first
    Desc,
}

impl From<Order> for SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => SortOrder::Asc,
            Order::Desc => SortOrder::Desc,
        }
    }
}

/// How `basedOn` overlay values are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Overlay {
    /// Any non-null value overrides the document field
    Present,
    /// Only truthy values override the document field
    Truthy,
}

impl From<Overlay> for OverlayMode {
    fn from(overlay: Overlay) -> Self {
        match overlay {
            Overlay::Present => OverlayMode::Present,
            Overlay::Truthy => OverlayMode::Truthy,
        }
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned columns
    Human,
    /// Compact JSON on one line
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Priority-driven sorting of JSON documents
#[derive(Parser, Debug)]
#[command(name = "semisort")]
#[command(about = "semisort: sort JSON documents by ordered field priorities")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "SEMISORT_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort the documents of a JSON request
    Sort(SortArgs),
    /// Print the rank of a value in a priority list
    Rank(RankArgs),
    /// Print a random request of newspaper documents
    Generate(GenerateArgs),
}

/// Arguments for the sort command
#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// Request file; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Match priorities ignoring case
    #[arg(short = 'i', long, env = "SEMISORT_CASE_INSENSITIVE")]
    pub case_insensitive: bool,

    /// Fallback order when priorities do not decide
    #[arg(short, long, env = "SEMISORT_ORDER")]
    pub order: Option<Order>,

    /// Overlay rule for basedOn values
    #[arg(long, env = "SEMISORT_OVERLAY")]
    pub overlay: Option<Overlay>,

    /// Resolve criterion fields as dotted paths into nested documents
    #[arg(short, long, env = "SEMISORT_NESTED_FIELDS")]
    pub nested_fields: bool,
}

impl SortArgs {
    /// Applies the flags on top of the request's own options.
    ///
    /// Flags that were not given leave the request value in place.
    pub fn apply(&self, mut config: SortConfig) -> SortConfig {
        if self.case_insensitive {
            config.case_insensitive = true;
        }
        if let Some(order) = self.order {
            config.order = Some(order.into());
        }
        if let Some(overlay) = self.overlay {
            config.overlay = overlay.into();
        }
        config
    }
}

/// Arguments for the rank command
#[derive(clap::Args, Debug)]
pub struct RankArgs {
    /// Value to look up; parsed as JSON when possible, otherwise text
    #[arg(short, long)]
    pub value: String,

    /// Priority list, highest priority first
    #[arg(required = true)]
    pub priorities: Vec<String>,

    /// Match priorities ignoring case
    #[arg(short = 'i', long, env = "SEMISORT_CASE_INSENSITIVE")]
    pub case_insensitive: bool,
}

/// Arguments for the generate command
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Number of documents to generate
    #[arg(short, long, default_value_t = 10)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(short, long, env = "SEMISORT_SEED")]
    pub seed: Option<u64>,
}
