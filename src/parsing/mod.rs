//! Table loaders for the inputs of a TaxID run.
//!
//! Every loader turns one tab-separated format into a [`Mapping`](crate::core::Mapping):
//!
//! | Format                     | Skipped lines              | Key              | Value                         |
//! |----------------------------|----------------------------|------------------|-------------------------------|
//! | biobox                     | `@`, `#`                   | column 1         | column 2 (exactly 2 columns)  |
//! | contig2taxid / binid2taxid | `#`                        | caller column    | caller column                 |
//! | BAT bin2classification     | `#`                        | column 1 to `.`  | last rank of column 4, no `*` |
//! | GTDB-Tk summary            | `user_genome`, `#`         | column 1         | last rank of column 2         |
//! | taxonkit name2taxid        | `#`                        | caller column    | last column                   |
//! | gtdb_to_taxdump            | `ncbi_taxonomy`, `#`       | column 1         | column 2                      |
//!
//! BAT and GTDB-Tk inputs may also be directories; every regular file inside is
//! loaded in name order and merged, later files winning on duplicate bin ids.
//! Files ending in `.gz` are decompressed on the fly.

pub mod biobox;
pub mod classifier;
pub mod columns;
pub mod crosswalk;
pub mod input;
pub mod tsv;

pub use tsv::ParseError;
