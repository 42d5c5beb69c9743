use serde::Serialize;
use thiserror::Error;

use crate::core::mapping::Mapping;
use crate::core::types::{Mode, ResolvedRecord, Stage};
use crate::parsing::tsv::last_segment;
use crate::resolve::observer::ResolveObserver;

/// A required key was absent from one of the tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "'{key}' not found in {stage} table while resolving sequence '{sequence_id}'{}",
    fallback_note(.fallback.as_deref())
)]
pub struct LookupError {
    /// Table that was missing the key
    pub stage: Stage,
    pub key: String,
    /// The biobox row being resolved
    pub sequence_id: String,
    /// Rewritten taxonkit name that was also tried, if any
    pub fallback: Option<String>,
}

fn fallback_note(fallback: Option<&str>) -> String {
    fallback
        .map(|name| format!(" (also tried '{name}')"))
        .unwrap_or_default()
}

fn lookup<'m>(
    mapping: &'m Mapping,
    key: &str,
    stage: Stage,
    sequence_id: &str,
) -> Result<&'m str, LookupError> {
    mapping.get(key).ok_or_else(|| LookupError {
        stage,
        key: key.to_string(),
        sequence_id: sequence_id.to_string(),
        fallback: None,
    })
}

/// The auxiliary tables for one mode
#[derive(Debug, Clone)]
pub enum TaxonSource {
    Direct {
        contig2taxid: Mapping,
    },
    DirectByBin {
        binid2taxid: Mapping,
    },
    Bat {
        bat: Mapping,
    },
    Gtdb {
        bin_to_name: Mapping,
        gtdb_to_ncbi: Mapping,
        taxonkit: Mapping,
    },
}

impl TaxonSource {
    pub fn mode(&self) -> Mode {
        match self {
            Self::Direct { .. } => Mode::Direct,
            Self::DirectByBin { .. } => Mode::DirectByBin,
            Self::Bat { .. } => Mode::Bat,
            Self::Gtdb { .. } => Mode::Gtdb,
        }
    }
}

/// All records of a run, in biobox order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub records: Vec<ResolvedRecord>,
    /// Number of taxonkit lookups that needed the `_` rewrite
    pub fallbacks_used: usize,
}

/// Joins biobox rows against the tables of a [`TaxonSource`]
pub struct Resolver<'a> {
    biobox: &'a Mapping,
    source: &'a TaxonSource,
}

impl<'a> Resolver<'a> {
    pub fn new(biobox: &'a Mapping, source: &'a TaxonSource) -> Self {
        Self { biobox, source }
    }

    /// Resolve every biobox row, stopping at the first missing key.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` naming the missing key and the table it was missing from.
    pub fn resolve(
        &self,
        observer: &mut dyn ResolveObserver,
    ) -> Result<Resolution, LookupError> {
        let mut records = Vec::with_capacity(self.biobox.len());
        let mut fallbacks_used = 0;

        for (sequence_id, bin_id) in self.biobox.iter() {
            let (tax_id, used_fallback) = self.tax_id_for(sequence_id, bin_id, observer)?;
            if used_fallback {
                fallbacks_used += 1;
            }

            let record = ResolvedRecord::new(sequence_id, bin_id, tax_id);
            observer.record_resolved(&record);
            records.push(record);
        }

        Ok(Resolution {
            records,
            fallbacks_used,
        })
    }

    fn tax_id_for(
        &self,
        sequence_id: &str,
        bin_id: &str,
        observer: &mut dyn ResolveObserver,
    ) -> Result<(String, bool), LookupError> {
        match self.source {
            TaxonSource::Direct { contig2taxid } => {
                let tax_id = lookup(contig2taxid, sequence_id, Stage::Contig2Taxid, sequence_id)?;
                Ok((tax_id.to_string(), false))
            }
            TaxonSource::DirectByBin { binid2taxid } => {
                let tax_id = lookup(binid2taxid, bin_id, Stage::Binid2Taxid, sequence_id)?;
                Ok((tax_id.to_string(), false))
            }
            TaxonSource::Bat { bat } => {
                let tax_id = lookup(bat, bin_id, Stage::Bat, sequence_id)?;
                Ok((tax_id.to_string(), false))
            }
            TaxonSource::Gtdb {
                bin_to_name,
                gtdb_to_ncbi,
                taxonkit,
            } => {
                let gtdb_name = lookup(bin_to_name, bin_id, Stage::GtdbSummary, sequence_id)?;
                let ncbi_name = lookup(gtdb_to_ncbi, gtdb_name, Stage::GtdbToNcbi, sequence_id)?;

                match taxonkit.get(ncbi_name) {
                    Some("") => {
                        // taxonkit listed the name but could not resolve it
                        return Err(LookupError {
                            stage: Stage::Taxonkit,
                            key: ncbi_name.to_string(),
                            sequence_id: sequence_id.to_string(),
                            fallback: None,
                        });
                    }
                    Some(tax_id) => return Ok((tax_id.to_string(), false)),
                    None => {}
                }

                // GTDB-style names keep a rank prefix ("g__Foo") taxonkit does not know
                let rewritten = last_segment(ncbi_name, '_');
                match taxonkit.get(rewritten) {
                    Some(tax_id) if rewritten != ncbi_name => {
                        observer.fallback_used(sequence_id, ncbi_name, rewritten);
                        Ok((tax_id.to_string(), true))
                    }
                    _ => Err(LookupError {
                        stage: Stage::Taxonkit,
                        key: ncbi_name.to_string(),
                        sequence_id: sequence_id.to_string(),
                        fallback: (rewritten != ncbi_name).then(|| rewritten.to_string()),
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::observer::NoopObserver;

    fn mapping(pairs: &[(&str, &str)]) -> Mapping {
        pairs.iter().copied().collect()
    }

    #[derive(Default)]
    struct Recorder {
        fallbacks: Vec<(String, String)>,
        resolved: usize,
    }

    impl ResolveObserver for Recorder {
        fn fallback_used(&mut self, _sequence_id: &str, ncbi_name: &str, rewritten: &str) {
            self.fallbacks
                .push((ncbi_name.to_string(), rewritten.to_string()));
        }

        fn record_resolved(&mut self, _record: &ResolvedRecord) {
            self.resolved += 1;
        }
    }

    #[test]
    fn test_direct_by_bin_keeps_biobox_order() {
        let biobox = mapping(&[("s1", "b1"), ("s2", "b2")]);
        let source = TaxonSource::DirectByBin {
            binid2taxid: mapping(&[("b2", "200"), ("b1", "100")]),
        };

        let resolution = Resolver::new(&biobox, &source)
            .resolve(&mut NoopObserver)
            .unwrap();
        assert_eq!(
            resolution.records,
            vec![
                ResolvedRecord::new("s1", "b1", "100"),
                ResolvedRecord::new("s2", "b2", "200"),
            ]
        );
        assert_eq!(resolution.fallbacks_used, 0);
    }

    #[test]
    fn test_direct_uses_sequence_id() {
        let biobox = mapping(&[("s1", "b1"), ("s2", "b1")]);
        let source = TaxonSource::Direct {
            contig2taxid: mapping(&[("s1", "562"), ("s2", "1280")]),
        };

        let resolution = Resolver::new(&biobox, &source)
            .resolve(&mut NoopObserver)
            .unwrap();
        assert_eq!(resolution.records[0].tax_id, "562");
        assert_eq!(resolution.records[1].tax_id, "1280");
        assert_eq!(resolution.records[1].bin_id, "b1");
    }

    #[test]
    fn test_missing_bin_names_key_and_stage() {
        let biobox = mapping(&[("s1", "bin1")]);
        let source = TaxonSource::DirectByBin {
            binid2taxid: mapping(&[("bin2", "7")]),
        };

        let err = Resolver::new(&biobox, &source)
            .resolve(&mut NoopObserver)
            .unwrap_err();
        assert_eq!(err.key, "bin1");
        assert_eq!(err.stage, Stage::Binid2Taxid);
        assert_eq!(err.sequence_id, "s1");
        assert!(err.to_string().contains("'bin1'"));
    }

    #[test]
    fn test_bat_lookup() {
        let biobox = mapping(&[("s1", "bin_1")]);
        let source = TaxonSource::Bat {
            bat: mapping(&[("bin_1", "3")]),
        };
        let resolution = Resolver::new(&biobox, &source)
            .resolve(&mut NoopObserver)
            .unwrap();
        assert_eq!(resolution.records, vec![ResolvedRecord::new("s1", "bin_1", "3")]);
    }

    #[test]
    fn test_gtdb_chain() {
        let biobox = mapping(&[("s1", "b1")]);
        let source = TaxonSource::Gtdb {
            bin_to_name: mapping(&[("b1", "s__Y")]),
            gtdb_to_ncbi: mapping(&[("s__Y", "NCBI_Y")]),
            taxonkit: mapping(&[("NCBI_Y", "55")]),
        };

        let mut recorder = Recorder::default();
        let resolution = Resolver::new(&biobox, &source)
            .resolve(&mut recorder)
            .unwrap();
        assert_eq!(resolution.records, vec![ResolvedRecord::new("s1", "b1", "55")]);
        assert!(recorder.fallbacks.is_empty());
        assert_eq!(recorder.resolved, 1);
    }

    #[test]
    fn test_gtdb_fallback_strips_prefix() {
        let biobox = mapping(&[("s1", "b1")]);
        let source = TaxonSource::Gtdb {
            bin_to_name: mapping(&[("b1", "g__Foo")]),
            gtdb_to_ncbi: mapping(&[("g__Foo", "g__Foo")]),
            taxonkit: mapping(&[("Foo", "1234")]),
        };

        let mut recorder = Recorder::default();
        let resolution = Resolver::new(&biobox, &source)
            .resolve(&mut recorder)
            .unwrap();
        assert_eq!(resolution.records[0].tax_id, "1234");
        assert_eq!(resolution.fallbacks_used, 1);
        assert_eq!(
            recorder.fallbacks,
            vec![("g__Foo".to_string(), "Foo".to_string())]
        );
    }

    #[test]
    fn test_gtdb_fallback_miss_reports_both_names() {
        let biobox = mapping(&[("s1", "b1")]);
        let source = TaxonSource::Gtdb {
            bin_to_name: mapping(&[("b1", "g__Foo")]),
            gtdb_to_ncbi: mapping(&[("g__Foo", "g__Foo")]),
            taxonkit: mapping(&[("Bar", "1")]),
        };

        let err = Resolver::new(&biobox, &source)
            .resolve(&mut NoopObserver)
            .unwrap_err();
        assert_eq!(err.stage, Stage::Taxonkit);
        assert_eq!(err.key, "g__Foo");
        assert_eq!(err.fallback.as_deref(), Some("Foo"));
        assert!(err.to_string().contains("also tried 'Foo'"));
    }

    #[test]
    fn test_unresolved_taxonkit_name_skips_fallback() {
        let biobox = mapping(&[("s1", "b1")]);
        let source = TaxonSource::Gtdb {
            bin_to_name: mapping(&[("b1", "s__Foo_bar")]),
            gtdb_to_ncbi: mapping(&[("s__Foo_bar", "Foo_bar")]),
            taxonkit: mapping(&[("Foo_bar", ""), ("bar", "999")]),
        };

        let mut recorder = Recorder::default();
        let err = Resolver::new(&biobox, &source)
            .resolve(&mut recorder)
            .unwrap_err();
        assert_eq!(err.stage, Stage::Taxonkit);
        assert_eq!(err.key, "Foo_bar");
        assert!(err.fallback.is_none());
        assert!(recorder.fallbacks.is_empty());
        assert_eq!(recorder.resolved, 0);
    }

    #[test]
    fn test_source_mode() {
        let source = TaxonSource::Bat { bat: Mapping::new() };
        assert_eq!(source.mode(), Mode::Bat);
    }

    #[test]
    fn test_gtdb_missing_hop_is_named() {
        let biobox = mapping(&[("s1", "b1")]);
        let source = TaxonSource::Gtdb {
            bin_to_name: mapping(&[("b1", "s__Y")]),
            gtdb_to_ncbi: mapping(&[]),
            taxonkit: mapping(&[]),
        };

        let err = Resolver::new(&biobox, &source)
            .resolve(&mut NoopObserver)
            .unwrap_err();
        assert_eq!(err.stage, Stage::GtdbToNcbi);
        assert_eq!(err.key, "s__Y");
        assert!(err.fallback.is_none());
    }

    #[test]
    fn test_name_without_underscore_has_no_fallback() {
        let biobox = mapping(&[("s1", "b1")]);
        let source = TaxonSource::Gtdb {
            bin_to_name: mapping(&[("b1", "s__Y")]),
            gtdb_to_ncbi: mapping(&[("s__Y", "Escherichia coli")]),
            taxonkit: mapping(&[]),
        };

        let err = Resolver::new(&biobox, &source)
            .resolve(&mut NoopObserver)
            .unwrap_err();
        assert_eq!(err.key, "Escherichia coli");
        assert!(err.fallback.is_none());
    }
}
