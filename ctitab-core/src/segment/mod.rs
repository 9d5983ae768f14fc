//! Segmenters for concatenated table cells
//!
//! Each segmenter is compiled from the rule configuration. The free
//! functions use the embedded rules.

pub mod properties;
pub mod sectors;
pub mod sentences;

pub use properties::{split_properties, PropertySegmenter};
pub use sectors::{split_sectors, SectorSegmenter};
pub use sentences::{split_sentences, SentenceSegmenter};
