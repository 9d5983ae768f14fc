//! Field segmentation and normalization for threat-intelligence group tables
//!
//! The BSI publishes its catalogs of active APT and cybercrime groups as HTML
//! tables whose cells hold several items glued together without a delimiter:
//! sector names, aliases or characteristic statements. This crate recovers
//! the items with an ordered cascade of rules tuned to both catalogs and
//! assembles one structured record per table row.
//!
//! # Architecture
//!
//! - **Rules**: a TOML rule configuration (embedded default, or loaded from
//!   disk) compiled into a [`RuleSet`]
//! - **Segmenters**: text normalization, alias parsing, sector, property and
//!   sentence segmentation, crime characteristics structuring
//! - **Assembly**: per-catalog record assemblers and the batch
//!   [`CatalogProcessor`]
//!
//! Parsing a row never fails. Only batch-level problems, such as a table
//! without a header row, surface as [`CatalogError`].
//!
//! # Example
//!
//! ```rust
//! use ctitab_core::{Catalog, CatalogProcessor, RawTable};
//!
//! let table = RawTable::new(
//!     vec!["Gruppenname und Aliase".into(), "Wirtschaftszweig in Deutschland nach WZ 2008".into()],
//!     vec![vec!["APT28 / Fancy Bear".into(), "VerwaltungLuftfahrt".into()]],
//! );
//!
//! let records = CatalogProcessor::new(Catalog::Apt).process_table(&table).unwrap();
//! assert_eq!(records.group_names(), vec!["APT28"]);
//! ```

pub mod aliases;
pub mod assembler;
pub mod catalog;
pub mod characteristics;
pub mod error;
pub mod records;
pub mod rules;
pub mod segment;
pub mod table;
pub mod text;

pub use aliases::{parse_apt_aliases, parse_crime_aliases, AliasParser, GroupAliases};
pub use assembler::{assemble_all, AptAssembler, CrimeAssembler, RecordAssembler};
pub use catalog::{Catalog, CatalogProcessor};
pub use characteristics::{parse_characteristics, Characteristics, CharacteristicsParser};
pub use error::{CatalogError, Result};
pub use records::{AptGroupRecord, CatalogRecords, CrimeGroupRecord};
pub use rules::{RuleConfig, RuleSet};
pub use segment::{split_properties, split_sectors, split_sentences};
pub use table::{RawRow, RawTable};
pub use text::normalize;
