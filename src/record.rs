// src/record.rs
//! One lookup's worth of data, and the ordered batch of them.
//!
//! Fields are `Option<String>`: a selector miss leaves the field `None`.
//! Absent and empty only become the same thing when a row is rendered for export.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    CompanyName,
    TaxCode,
    Address,
    Owner,
    OperatingDay,
    ManagedBy,
    Status,
    DateUpdate,
}

impl Field {
    /// Output column order. Never changes, whatever was found.
    pub const ALL: [Field; 8] = [
        Field::CompanyName,
        Field::TaxCode,
        Field::Address,
        Field::Owner,
        Field::OperatingDay,
        Field::ManagedBy,
        Field::Status,
        Field::DateUpdate,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column header in the output table.
    pub fn header(self) -> &'static str {
        match self {
            Field::CompanyName  => "CompanyName",
            Field::TaxCode      => "TaxCode",
            Field::Address      => "Address",
            Field::Owner        => "Owner",
            Field::OperatingDay => "OperatingDay",
            Field::ManagedBy    => "ManagedBy",
            Field::Status       => "Status",
            Field::DateUpdate   => "DateUpdate",
        }
    }

    pub fn headers() -> [&'static str; 8] {
        Field::ALL.map(Field::header)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultRecord {
    values: [Option<String>; 8],
}

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Overwrites any earlier value for `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    /// Builder-style `set`, handy for expected values in tests.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    pub fn found_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Render in column order; absent fields become blank.
    pub fn to_row(&self) -> [String; 8] {
        Field::ALL.map(|f| self.get(f).map(|v| s!(v)).unwrap_or_default())
    }
}

/// Records in input order, one per identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultBatch {
    records: Vec<ResultRecord>,
}

impl ResultBatch {
    pub fn with_capacity(n: usize) -> Self {
        Self { records: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    pub fn rows(&self) -> Vec<[String; 8]> {
        self.records.iter().map(ResultRecord::to_row).collect()
    }
}

impl From<Vec<ResultRecord>> for ResultBatch {
    fn from(records: Vec<ResultRecord>) -> Self {
        Self { records }
    }
}
