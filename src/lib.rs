//! # biobox-taxid
//!
//! A library for adding a `TAXID` column to CAMI biobox binning files.
//!
//! Binning benchmarks such as AMBER can score taxonomic binning only when each
//! binned sequence carries a TaxID. Binners don't produce one, but bin
//! classifiers do. `biobox-taxid` joins a biobox file against the output of
//! such a classifier and writes the biobox file back out with the extra column.
//!
//! ## Features
//!
//! - **BAT**: takes the deepest rank of each bin's lineage, dropping BAT's `*` marker
//! - **GTDB-Tk**: chains GTDB names through gtdb_to_taxdump and taxonkit to NCBI TaxIDs
//! - **Direct tables**: any contig2taxid or binid2taxid table with chosen columns
//! - **Directory inputs**: merges every BAT or GTDB-Tk output file of a directory
//! - **All or nothing**: a missing key or malformed row aborts the run before
//!   anything is written
//!
//! ## Example
//!
//! ```rust,no_run
//! use biobox_taxid::pipeline::{run, RunConfig, Tool};
//! use biobox_taxid::resolve::TracingObserver;
//!
//! let mut config = RunConfig::new("bins.binning", Tool::Bat);
//! config.tool_output = Some("out.bin2classification.txt".into());
//!
//! let summary = run(&config, &mut TracingObserver).unwrap();
//! println!("wrote {} rows to {}", summary.records_written, summary.output.display());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Tables, modes, and output records
//! - [`parsing`]: Loaders for biobox, BAT, GTDB-Tk, taxonkit, gtdb_to_taxdump, and id tables
//! - [`resolve`]: The join resolver and its progress observer
//! - [`output`]: The CAMI binning writer
//! - [`pipeline`]: Configuration validation and end-to-end runs
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod pipeline;
pub mod resolve;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::mapping::Mapping;
pub use crate::core::types::*;
pub use crate::pipeline::{PipelineError, RunConfig, RunSummary, Tool};
pub use crate::resolve::{LookupError, Resolver, TaxonSource};
