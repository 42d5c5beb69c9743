//! Command-line interface for biobox-taxid.
//!
//! A single command adds a `TAXID` column to a biobox binning file. The
//! `--tool` option picks where the TaxIDs come from:
//!
//! - **bat**: a BAT `bin2classification` file or directory
//! - **gtdb**: a GTDB-Tk summary plus the gtdb_to_taxdump and taxonkit crosswalks
//! - **direct**: a contig2taxid or binid2taxid table with user-chosen columns
//!
//! ## Usage
//!
//! ```text
//! # BAT
//! biobox-taxid bins.binning --tool bat --tool-output out.bin2classification.txt
//!
//! # GTDB-Tk, with all summaries of a run directory
//! biobox-taxid bins.binning --tool gtdb --tool-output classify/ \
//!     -g ncbi-gtdb_map.tsv -t name2taxid.tsv
//!
//! # kraken2 per-contig output (sequence id in column 2, taxid in column 3)
//! biobox-taxid bins.binning --tool direct -c kraken.out --key-col 2 --taxid-col 3
//! ```

use clap::Parser;

pub mod add;

#[derive(Parser)]
#[command(name = "biobox-taxid")]
#[command(version)]
#[command(about = "Add a TAXID column to a biobox binning file")]
#[command(
    long_about = "biobox-taxid adds a TAXID column to a binning file in CAMI biobox format, for use with AMBER.\n\nTaxIDs come from BAT, from GTDB-Tk (translated to NCBI names with gtdb_to_taxdump and to TaxIDs with taxonkit), or from a plain contig2taxid/binid2taxid table."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: add::AddArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the run summary
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
