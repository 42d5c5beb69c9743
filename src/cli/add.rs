use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::output::DEFAULT_SAMPLE_ID;
use crate::pipeline::{self, RunConfig, RunSummary, Tool};
use crate::resolve::TracingObserver;

#[derive(Args)]
pub struct AddArgs {
    /// Binning file in biobox format
    pub biobox: PathBuf,

    /// Tool whose output provides the TaxIDs
    #[arg(long, value_enum)]
    pub tool: Tool,

    /// BAT bin2classification file or GTDB-Tk summary file.
    /// A directory loads every file in it.
    #[arg(long)]
    pub tool_output: Option<PathBuf>,

    /// gtdb_to_taxdump ncbi-gtdb_map.py output (GTDB mode)
    #[arg(short = 'g', long)]
    pub gtdb_to_taxdump: Option<PathBuf>,

    /// taxonkit name2taxid output (GTDB mode)
    #[arg(short = 't', long)]
    pub taxonkit: Option<PathBuf>,

    /// Column of the taxonkit output holding the name (1-based)
    #[arg(long, default_value = "1")]
    pub name_col: usize,

    /// contig2taxid table, e.g. kraken2 output (direct mode)
    #[arg(short = 'c', long)]
    pub contig2taxid: Option<PathBuf>,

    /// binid2taxid table (direct mode)
    #[arg(short = 'b', long)]
    pub binid2taxid: Option<PathBuf>,

    /// Column holding the contig or bin id in the direct table (1-based)
    #[arg(long)]
    pub key_col: Option<usize>,

    /// Column holding the TaxID in the direct table (1-based)
    #[arg(long)]
    pub taxid_col: Option<usize>,

    /// Directory relative input paths are resolved against
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output file (default: <biobox stem>_<mode>.tsv next to the biobox file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Value for the @SampleID header line
    #[arg(long, default_value = DEFAULT_SAMPLE_ID)]
    pub sample_id: String,
}

impl AddArgs {
    fn to_config(&self) -> RunConfig {
        RunConfig {
            biobox: self.biobox.clone(),
            tool: self.tool,
            tool_output: self.tool_output.clone(),
            gtdb_to_taxdump: self.gtdb_to_taxdump.clone(),
            taxonkit: self.taxonkit.clone(),
            name_col: self.name_col,
            contig2taxid: self.contig2taxid.clone(),
            binid2taxid: self.binid2taxid.clone(),
            key_col: self.key_col,
            taxid_col: self.taxid_col,
            input_dir: self.input_dir.clone(),
            output: self.output.clone(),
            sample_id: self.sample_id.clone(),
        }
    }
}

/// Execute the add-taxid run
///
/// # Errors
///
/// Returns an error if the configuration is incomplete, an input is malformed,
/// a lookup fails, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AddArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.to_config();
    let summary = pipeline::run(&config, &mut TracingObserver)?;

    match format {
        OutputFormat::Text => print_text_summary(&summary, verbose),
        OutputFormat::Json => print_json_summary(&summary)?,
    }

    Ok(())
}

fn print_text_summary(summary: &RunSummary, verbose: bool) {
    println!(
        "Wrote {} records ({} mode) to {}",
        summary.records_written,
        summary.mode,
        summary.output.display()
    );

    if summary.fallbacks_used > 0 {
        println!(
            "{} taxonkit lookups used the name after the last '_'",
            summary.fallbacks_used
        );
    }

    if verbose {
        for table in &summary.tables {
            println!("  {}: {} entries ({})", table.stage, table.entries, table.input);
        }
    }
}

fn print_json_summary(summary: &RunSummary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
