//! Join resolver: chains biobox rows through the classifier tables to a TaxID.
//!
//! The [`TaxonSource`] carries the tables for exactly one mode, so the
//! mode-specific lookup chain is decided in one place:
//!
//! 1. **Direct**: `contig2taxid[sequence]`
//! 2. **DirectByBin**: `binid2taxid[biobox[sequence]]`
//! 3. **Bat**: `bat[biobox[sequence]]`
//! 4. **Gtdb**: `taxonkit[gtdb_to_ncbi[summary[biobox[sequence]]]]`, retrying
//!    the last hop with the part of the NCBI name after its final `_`
//!
//! A missing key at any hop is a [`LookupError`] and stops the run.
//!
//! ## Example
//!
//! ```rust
//! use biobox_taxid::core::Mapping;
//! use biobox_taxid::resolve::{NoopObserver, Resolver, TaxonSource};
//!
//! let biobox: Mapping = [("s1", "b1"), ("s2", "b2")].into_iter().collect();
//! let source = TaxonSource::DirectByBin {
//!     binid2taxid: [("b1", "100"), ("b2", "200")].into_iter().collect(),
//! };
//!
//! let resolution = Resolver::new(&biobox, &source)
//!     .resolve(&mut NoopObserver)
//!     .unwrap();
//! assert_eq!(resolution.records[1].tax_id, "200");
//! ```

pub mod engine;
pub mod observer;

pub use engine::{LookupError, Resolution, Resolver, TaxonSource};
pub use observer::{NoopObserver, ResolveObserver, TracingObserver};
