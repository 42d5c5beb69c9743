use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::core::types::Mode;
use crate::output::DEFAULT_SAMPLE_ID;
use crate::parsing::columns::ColumnSpec;
use crate::utils::validation::{
    derive_output_path, resolve_input, to_zero_based, ValidationError,
};

/// Classifier whose output provides the TaxIDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Tool {
    /// BAT bin2classification output
    Bat,
    /// GTDB-Tk summary plus gtdb_to_taxdump and taxonkit crosswalks
    Gtdb,
    /// A contig2taxid or binid2taxid table
    Direct,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bat => write!(f, "BAT"),
            Self::Gtdb => write!(f, "GTDB"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

/// The selected mode is missing inputs or was given unusable options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{tool} mode requires {option}")]
    MissingInput { tool: Tool, option: &'static str },

    #[error("direct mode requires --contig2taxid or --binid2taxid")]
    MissingDirectTable,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Everything a run was asked to do, as given by the user
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub biobox: PathBuf,
    pub tool: Tool,
    /// BAT bin2classification or GTDB-Tk summary, file or directory
    pub tool_output: Option<PathBuf>,
    pub gtdb_to_taxdump: Option<PathBuf>,
    pub taxonkit: Option<PathBuf>,
    /// 1-based name column of the taxonkit table
    pub name_col: usize,
    pub contig2taxid: Option<PathBuf>,
    pub binid2taxid: Option<PathBuf>,
    /// 1-based key column of the direct table
    pub key_col: Option<usize>,
    /// 1-based taxid column of the direct table
    pub taxid_col: Option<usize>,
    pub input_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sample_id: String,
}

impl RunConfig {
    /// A config with every optional input unset
    pub fn new(biobox: impl Into<PathBuf>, tool: Tool) -> Self {
        Self {
            biobox: biobox.into(),
            tool,
            tool_output: None,
            gtdb_to_taxdump: None,
            taxonkit: None,
            name_col: 1,
            contig2taxid: None,
            binid2taxid: None,
            key_col: None,
            taxid_col: None,
            input_dir: None,
            output: None,
            sample_id: DEFAULT_SAMPLE_ID.to_string(),
        }
    }

    /// Check that the selected mode has everything it needs and resolve paths.
    /// Touches no files.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first missing input or invalid option.
    pub fn validate(&self) -> Result<RunPlan, ConfigError> {
        let input_dir = self.input_dir.as_deref();
        let resolve = |path: &Path| resolve_input(input_dir, path);
        let require = |path: &Option<PathBuf>, option: &'static str| {
            path.as_deref()
                .map(resolve)
                .ok_or(ConfigError::MissingInput {
                    tool: self.tool,
                    option,
                })
        };

        let inputs = match self.tool {
            Tool::Bat => {
                self.warn_unused(&[
                    (self.gtdb_to_taxdump.is_some(), "--gtdb-to-taxdump"),
                    (self.taxonkit.is_some(), "--taxonkit"),
                    (self.contig2taxid.is_some(), "--contig2taxid"),
                    (self.binid2taxid.is_some(), "--binid2taxid"),
                ]);
                Inputs::Bat {
                    classification: require(&self.tool_output, "--tool-output")?,
                }
            }
            Tool::Gtdb => {
                self.warn_unused(&[
                    (self.contig2taxid.is_some(), "--contig2taxid"),
                    (self.binid2taxid.is_some(), "--binid2taxid"),
                ]);
                Inputs::Gtdb {
                    summary: require(&self.tool_output, "--tool-output")?,
                    gtdb_to_taxdump: require(&self.gtdb_to_taxdump, "--gtdb-to-taxdump")?,
                    taxonkit: require(&self.taxonkit, "--taxonkit")?,
                    name_col: to_zero_based(self.name_col, "--name-col")?,
                }
            }
            Tool::Direct => self.direct_inputs(input_dir)?,
        };

        let biobox = resolve(&self.biobox);
        let output = match &self.output {
            Some(path) => path.clone(),
            None => derive_output_path(&biobox, inputs.mode())?,
        };

        Ok(RunPlan {
            biobox,
            inputs,
            output,
            sample_id: self.sample_id.clone(),
        })
    }

    fn direct_inputs(&self, input_dir: Option<&Path>) -> Result<Inputs, ConfigError> {
        self.warn_unused(&[
            (self.tool_output.is_some(), "--tool-output"),
            (self.gtdb_to_taxdump.is_some(), "--gtdb-to-taxdump"),
            (self.taxonkit.is_some(), "--taxonkit"),
        ]);

        if self.contig2taxid.is_none() && self.binid2taxid.is_none() {
            return Err(ConfigError::MissingDirectTable);
        }
        let key_col = self.key_col.ok_or(ConfigError::MissingInput {
            tool: Tool::Direct,
            option: "--key-col",
        })?;
        let taxid_col = self.taxid_col.ok_or(ConfigError::MissingInput {
            tool: Tool::Direct,
            option: "--taxid-col",
        })?;
        let columns = ColumnSpec {
            key: to_zero_based(key_col, "--key-col")?,
            value: to_zero_based(taxid_col, "--taxid-col")?,
        };

        match (&self.contig2taxid, &self.binid2taxid) {
            (Some(contig2taxid), binid2taxid) => {
                if binid2taxid.is_some() {
                    warn!("Both --contig2taxid and --binid2taxid given, using --contig2taxid");
                }
                Ok(Inputs::Direct {
                    table: resolve_input(input_dir, contig2taxid),
                    columns,
                })
            }
            (None, Some(binid2taxid)) => Ok(Inputs::DirectByBin {
                table: resolve_input(input_dir, binid2taxid),
                columns,
            }),
            (None, None) => Err(ConfigError::MissingDirectTable),
        }
    }

    fn warn_unused(&self, options: &[(bool, &str)]) {
        for (_, option) in options.iter().filter(|(given, _)| *given) {
            warn!("{option} is not used in {} mode and will be ignored", self.tool);
        }
    }
}

/// Resolved input paths for one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inputs {
    Direct {
        table: PathBuf,
        columns: ColumnSpec,
    },
    DirectByBin {
        table: PathBuf,
        columns: ColumnSpec,
    },
    Bat {
        classification: PathBuf,
    },
    Gtdb {
        summary: PathBuf,
        gtdb_to_taxdump: PathBuf,
        taxonkit: PathBuf,
        /// 0-based
        name_col: usize,
    },
}

impl Inputs {
    pub fn mode(&self) -> Mode {
        match self {
            Self::Direct { .. } => Mode::Direct,
            Self::DirectByBin { .. } => Mode::DirectByBin,
            Self::Bat { .. } => Mode::Bat,
            Self::Gtdb { .. } => Mode::Gtdb,
        }
    }
}

/// A validated run: every path resolved, every column 0-based
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub biobox: PathBuf,
    pub inputs: Inputs,
    pub output: PathBuf,
    pub sample_id: String,
}

impl RunPlan {
    pub fn mode(&self) -> Mode {
        self.inputs.mode()
    }
}
