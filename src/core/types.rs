use serde::Serialize;

/// How the TaxID for each biobox row is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// sequence id -> taxid via a contig2taxid table
    Direct,
    /// sequence id -> bin id -> taxid via a binid2taxid table
    DirectByBin,
    /// sequence id -> bin id -> taxid via a BAT bin2classification table
    Bat,
    /// sequence id -> bin id -> GTDB name -> NCBI name -> taxid
    Gtdb,
}

impl Mode {
    /// Suffix appended to the biobox file stem when deriving the output name
    pub fn output_suffix(self) -> &'static str {
        match self {
            Self::Direct => "contig2taxid",
            Self::DirectByBin => "binid2taxid",
            Self::Bat => "bat_taxid",
            Self::Gtdb => "gtdb_taxid",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct (contig2taxid)"),
            Self::DirectByBin => write!(f, "direct (binid2taxid)"),
            Self::Bat => write!(f, "BAT"),
            Self::Gtdb => write!(f, "GTDB"),
        }
    }
}

/// A table consulted during resolution. Used to name the hop that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Biobox,
    Contig2Taxid,
    Binid2Taxid,
    Bat,
    GtdbSummary,
    GtdbToNcbi,
    Taxonkit,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Biobox => write!(f, "biobox"),
            Self::Contig2Taxid => write!(f, "contig2taxid"),
            Self::Binid2Taxid => write!(f, "binid2taxid"),
            Self::Bat => write!(f, "BAT bin2classification"),
            Self::GtdbSummary => write!(f, "GTDB-Tk summary"),
            Self::GtdbToNcbi => write!(f, "gtdb_to_taxdump"),
            Self::Taxonkit => write!(f, "taxonkit"),
        }
    }
}

/// One output row: a biobox entry with its resolved TaxID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRecord {
    pub sequence_id: String,
    pub bin_id: String,
    pub tax_id: String,
}

impl ResolvedRecord {
    pub fn new(
        sequence_id: impl Into<String>,
        bin_id: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            bin_id: bin_id.into(),
            tax_id: tax_id.into(),
        }
    }
}
