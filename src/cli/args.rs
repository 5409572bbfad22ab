use crate::engine::Strategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shortpath",
    version,
    about = "Single-source shortest paths with Dijkstra's algorithm"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Node selection strategy (overrides `[engine] strategy`)
    #[arg(long, global = true, value_enum)]
    pub strategy: Option<Strategy>,
    /// Extra field delimiters besides whitespace, e.g. ":"
    #[arg(long, global = true, value_name = "CHARS")]
    pub delimiters: Option<String>,
    /// Separator between labels in a rendered path
    #[arg(long, global = true)]
    pub separator: Option<String>,
    /// Config file to use instead of ./shortpath.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Disable colored output (overrides `[output] color`)
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Log search progress to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in node0..node5 graph and dump every node's state
    Demo {
        #[arg(long)]
        json: bool,
    },
    /// Read a query stream and dump every node's state
    Dump {
        /// Read input from file instead of stdin
        #[arg(long, short, value_name = "FILE")]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Read a query stream and print the shortest path
    Route {
        /// Read input from file instead of stdin
        #[arg(long, short, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
