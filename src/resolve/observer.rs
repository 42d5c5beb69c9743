use tracing::{debug, info};

use crate::core::types::{ResolvedRecord, Stage};

/// Receives progress events from a run.
///
/// The loaders and resolver never print; everything a user might want to see
/// goes through this trait. All methods default to doing nothing.
pub trait ResolveObserver {
    /// A table finished loading
    fn table_loaded(&mut self, _stage: Stage, _input: &str, _entries: usize) {}

    /// A taxonkit lookup only succeeded after rewriting the NCBI name
    fn fallback_used(&mut self, _sequence_id: &str, _ncbi_name: &str, _rewritten: &str) {}

    /// A biobox row received its TaxID
    fn record_resolved(&mut self, _record: &ResolvedRecord) {}
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolveObserver for NoopObserver {}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolveObserver for TracingObserver {
    fn table_loaded(&mut self, stage: Stage, input: &str, entries: usize) {
        info!("Loaded {entries} entries from {stage} table {input}");
    }

    fn fallback_used(&mut self, sequence_id: &str, ncbi_name: &str, rewritten: &str) {
        debug!(
            "'{ncbi_name}' not found in taxonkit table, using '{rewritten}' for sequence {sequence_id}"
        );
    }

    fn record_resolved(&mut self, record: &ResolvedRecord) {
        debug!(
            "{} -> {} -> {}",
            record.sequence_id, record.bin_id, record.tax_id
        );
    }
}
