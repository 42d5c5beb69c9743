//! Core data types for adding TaxIDs to biobox binning files.
//!
//! - [`Mapping`]: An insertion-ordered string table loaded from one input
//! - [`Mode`]: Which classifier output the TaxIDs come from
//! - [`Stage`]: The table consulted at each resolution hop
//! - [`ResolvedRecord`]: A `SEQUENCEID`/`BINID`/`TAXID` output row
//!
//! ## Tables per mode
//!
//! | Mode          | Tables (in lookup order)                        |
//! |---------------|-------------------------------------------------|
//! | Direct        | contig2taxid                                    |
//! | DirectByBin   | biobox, binid2taxid                             |
//! | Bat           | biobox, bin2classification                      |
//! | Gtdb          | biobox, summary, gtdb_to_taxdump, taxonkit      |

pub mod mapping;
pub mod types;

pub use mapping::Mapping;
pub use types::{Mode, ResolvedRecord, Stage};
