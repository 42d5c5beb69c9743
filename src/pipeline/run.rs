use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::mapping::Mapping;
use crate::core::types::{Mode, Stage};
use crate::output::write_binning_file;
use crate::parsing::biobox::parse_biobox_file;
use crate::parsing::classifier::{load_bat, load_gtdb_summary};
use crate::parsing::columns::parse_id_table_file;
use crate::parsing::crosswalk::{parse_gtdb_to_taxdump_file, parse_taxonkit_file};
use crate::parsing::ParseError;
use crate::pipeline::config::{ConfigError, Inputs, RunConfig, RunPlan};
use crate::resolve::{LookupError, ResolveObserver, Resolver, TaxonSource};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Failed to write {}: {error}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

/// One loaded table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub stage: Stage,
    pub input: String,
    pub entries: usize,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub mode: Mode,
    pub output: PathBuf,
    pub records_written: usize,
    pub fallbacks_used: usize,
    pub tables: Vec<TableSummary>,
}

/// Validate `config` and execute it.
///
/// # Errors
///
/// Returns `PipelineError::Config` before any file is read if the mode lacks
/// inputs, otherwise the first parse, lookup, or write error.
pub fn run(
    config: &RunConfig,
    observer: &mut dyn ResolveObserver,
) -> Result<RunSummary, PipelineError> {
    let plan = config.validate()?;
    execute(&plan, observer)
}

/// Load every table of `plan`, resolve all biobox rows, then write the output.
///
/// Nothing is written unless every row resolved.
///
/// # Errors
///
/// Returns the first parse, lookup, or write error.
pub fn execute(
    plan: &RunPlan,
    observer: &mut dyn ResolveObserver,
) -> Result<RunSummary, PipelineError> {
    let mut loader = TableLoader {
        observer,
        tables: Vec::new(),
    };

    let biobox = loader.load(Stage::Biobox, &plan.biobox, parse_biobox_file)?;
    let source = loader.load_source(&plan.inputs)?;
    let TableLoader { observer, tables } = loader;

    let resolution = Resolver::new(&biobox, &source).resolve(observer)?;

    write_binning_file(&plan.output, &plan.sample_id, &resolution.records).map_err(|error| {
        PipelineError::Write {
            path: plan.output.clone(),
            error,
        }
    })?;

    Ok(RunSummary {
        mode: source.mode(),
        output: plan.output.clone(),
        records_written: resolution.records.len(),
        fallbacks_used: resolution.fallbacks_used,
        tables,
    })
}

struct TableLoader<'o> {
    observer: &'o mut dyn ResolveObserver,
    tables: Vec<TableSummary>,
}

impl TableLoader<'_> {
    fn load<F>(&mut self, stage: Stage, path: &Path, parse: F) -> Result<Mapping, ParseError>
    where
        F: FnOnce(&Path) -> Result<Mapping, ParseError>,
    {
        let mapping = parse(path)?;
        let input = path.display().to_string();
        self.observer.table_loaded(stage, &input, mapping.len());
        self.tables.push(TableSummary {
            stage,
            input,
            entries: mapping.len(),
        });
        Ok(mapping)
    }

    fn load_source(&mut self, inputs: &Inputs) -> Result<TaxonSource, ParseError> {
        let source = match inputs {
            Inputs::Direct { table, columns } => TaxonSource::Direct {
                contig2taxid: self.load(Stage::Contig2Taxid, table, |p| {
                    parse_id_table_file(p, *columns)
                })?,
            },
            Inputs::DirectByBin { table, columns } => TaxonSource::DirectByBin {
                binid2taxid: self.load(Stage::Binid2Taxid, table, |p| {
                    parse_id_table_file(p, *columns)
                })?,
            },
            Inputs::Bat { classification } => TaxonSource::Bat {
                bat: self.load(Stage::Bat, classification, load_bat)?,
            },
            Inputs::Gtdb {
                summary,
                gtdb_to_taxdump,
                taxonkit,
                name_col,
            } => TaxonSource::Gtdb {
                bin_to_name: self.load(Stage::GtdbSummary, summary, load_gtdb_summary)?,
                gtdb_to_ncbi: self.load(
                    Stage::GtdbToNcbi,
                    gtdb_to_taxdump,
                    parse_gtdb_to_taxdump_file,
                )?,
                taxonkit: self.load(Stage::Taxonkit, taxonkit, |p| {
                    parse_taxonkit_file(p, *name_col)
                })?,
            },
        };
        Ok(source)
    }
}
