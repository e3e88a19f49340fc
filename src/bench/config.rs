use crate::traversal::Order;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// How the driver renders its report.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Times unbalanced, AVL, and red black trees on a library of book titles.
#[derive(Clone, Debug, Parser, PartialEq)]
#[command(name = "tree-bench", version)]
pub struct Config {
    /// Library of titles, one per line
    #[arg(long = "unsorted", value_name = "PATH", default_value = "SciFiLiBooks.txt")]
    pub unsorted_path: PathBuf,

    /// The same library in sorted order; derived from the unsorted library if absent
    #[arg(long = "sorted", value_name = "PATH", default_value = "SciFiLiSorted.txt")]
    pub sorted_path: PathBuf,

    /// Title to search for
    #[arg(long = "search", value_name = "TITLE", default_value = "The Maze Runner")]
    pub search_key: String,

    /// Title to remove
    #[arg(long = "remove", value_name = "TITLE", default_value = "War of the Worlds")]
    pub remove_key: String,

    /// Report format
    #[arg(long, value_enum, ignore_case = true, default_value_t = Format::Text)]
    pub format: Format,

    /// One of off, error, warn, info, debug, or trace
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Print every tree after the removal in in, pre, or post order
    #[arg(long, value_name = "ORDER")]
    pub show: Option<Order>,
}

impl Default for Config {
    fn default() -> Self {
        Config::parse_from(["tree-bench"])
    }
}
