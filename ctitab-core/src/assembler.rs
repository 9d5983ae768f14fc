//! Record assembly
//!
//! An assembler looks up the catalog's columns in a raw row, normalizes each
//! cell and runs it through the matching parser. Missing columns read as
//! empty cells, so assembly cannot fail.

use crate::aliases::{AliasParser, AptAliases, CrimeAliases};
use crate::records::{AptGroupRecord, CrimeGroupRecord};
use crate::rules::RuleSet;
use crate::table::RawRow;
use crate::text::{normalize, normalize_opt};

/// Turns one raw row into one catalog record
pub trait RecordAssembler: Sync {
    type Record: Send;

    fn assemble(&self, row: &RawRow) -> Self::Record;
}

/// Assembler for the APT catalog
#[derive(Debug, Clone, Copy)]
pub struct AptAssembler<'r> {
    rules: &'r RuleSet,
}

impl<'r> AptAssembler<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }
}

impl RecordAssembler for AptAssembler<'_> {
    type Record = AptGroupRecord;

    fn assemble(&self, row: &RawRow) -> AptGroupRecord {
        let columns = &self.rules.columns().apt;
        let name = normalize_opt(row.get(&columns.name));
        let sectors = normalize_opt(row.get(&columns.sectors));
        let characteristics = normalize_opt(row.get(&columns.characteristics));

        let properties = self.rules.properties();
        let record = AptGroupRecord::new(
            AptAliases.parse(&name),
            self.rules.sectors().split(&sectors),
            properties.split(&characteristics),
            properties.empty_sentinel(),
        );
        log::trace!("Assembled APT record: {}", record.group_name());
        record
    }
}

/// Assembler for the crime catalog
#[derive(Debug, Clone, Copy)]
pub struct CrimeAssembler<'r> {
    rules: &'r RuleSet,
}

impl<'r> CrimeAssembler<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }
}

impl RecordAssembler for CrimeAssembler<'_> {
    type Record = CrimeGroupRecord;

    fn assemble(&self, row: &RawRow) -> CrimeGroupRecord {
        let columns = &self.rules.columns().crime;
        let name = normalize(row.first_of(&columns.name));
        let description = normalize_opt(row.get(&columns.description));
        let characteristics = normalize_opt(row.get(&columns.characteristics));

        let record = CrimeGroupRecord::new(
            CrimeAliases.parse(&name),
            self.rules.sentences().split(&description),
            self.rules.characteristics().parse(&characteristics),
        );
        log::trace!("Assembled crime record: {}", record.group_name());
        record
    }
}

/// Assemble every row, keeping row order
pub fn assemble_all<A: RecordAssembler>(
    assembler: &A,
    rows: &[RawRow],
    parallel: bool,
) -> Vec<A::Record> {
    map_rows(assembler, rows, parallel)
}

#[cfg(feature = "parallel")]
fn map_rows<A: RecordAssembler>(assembler: &A, rows: &[RawRow], parallel: bool) -> Vec<A::Record> {
    use rayon::prelude::*;

    if parallel {
        rows.par_iter().map(|row| assembler.assemble(row)).collect()
    } else {
        rows.iter().map(|row| assembler.assemble(row)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_rows<A: RecordAssembler>(assembler: &A, rows: &[RawRow], _parallel: bool) -> Vec<A::Record> {
    rows.iter().map(|row| assembler.assemble(row)).collect()
}
