// ---------------------------------------------------------------------------
// Record – one line of scores.jsonl
// ---------------------------------------------------------------------------

/// A single scored sample. Only the p-value is kept; other fields on the
/// source line are dropped during loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub pvalue: f64,
}

impl Record {
    pub fn new(pvalue: f64) -> Self {
        Self { pvalue }
    }

    /// Whether the p-value lies in the closed unit interval.
    pub fn in_unit_range(&self) -> bool {
        (0.0..=1.0).contains(&self.pvalue)
    }
}

// ---------------------------------------------------------------------------
// RecordSet – the complete loaded file
// ---------------------------------------------------------------------------

/// All records of one scores file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn from_records(records: Vec<Record>) -> Self {
        RecordSet { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Count of records whose p-value falls outside `[0, 1]`.
    pub fn out_of_range(&self) -> usize {
        self.records.iter().filter(|r| !r.in_unit_range()).count()
    }
}
