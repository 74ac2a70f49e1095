use std::io::Write;

use clap::{Parser, Subcommand};

use crate::{catalog::Catalog, error::Result, query::parse_query, serialize};

#[derive(Parser, Debug)]
#[command(
    name = "rscsig",
    about = "Search the C function signatures exported by csig-std",
    version
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every indexed function
    List,
    /// Rank indexed functions against a query
    Search {
        /// e.g. "int (int, int)" or "add :: int (int, int)"
        query: String,
        /// How many results to print
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
    /// Write the bincode catalog snapshot to stdout
    Export,
    /// Print the C header the catalog is built from
    Decls,
}

impl Cli {
    pub fn run(self, out: &mut impl Write) -> Result<()> {
        match self.command {
            Command::List => {
                let catalog = Catalog::builtin()?;
                for func in catalog.functions() {
                    writeln!(out, "{func}")?;
                }
            }
            Command::Search { query, top } => {
                let catalog = Catalog::builtin()?;
                let query = parse_query(&query)?;
                log::info!("query: {query:?}");
                for func in catalog.search(&query, top) {
                    writeln!(out, "{func}")?;
                }
            }
            Command::Export => {
                let bytes = serialize::encode(&Catalog::builtin()?)?;
                out.write_all(&bytes)?;
            }
            Command::Decls => {
                out.write_all(csig_std::C_HEADER.as_bytes())?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
