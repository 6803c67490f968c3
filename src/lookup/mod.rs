//! Airport lookup table.
//!
//! Maps both the short (IATA, 3 letters) and the long (ICAO, 4 letters) code
//! of every airport row to its display name and to its municipality.

mod loader;

use std::{collections::HashMap, fs, path::Path};

use crate::{
    config::Columns,
    error::{LookupDefect, PrettifyError},
};

/// One validated data row of the lookup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRow {
    pub name: String,
    pub short_code: String,
    pub long_code: String,
    pub locality: String,
}

/// Code → name and code → locality mappings, built together from the same rows.
///
/// Every key of one mapping is also a key of the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    name_of: HashMap<String, String>,
    locality_of: HashMap<String, String>,
    rows: usize,
}

impl LookupTable {
    /// Parse a comma-separated lookup document.
    ///
    /// The load is all-or-nothing: the first malformed row rejects the whole
    /// document.
    pub fn parse(content: &str, columns: &Columns) -> Result<Self, LookupDefect> {
        let rows = loader::parse_rows(content, columns)?;
        let mut table = Self::default();
        for row in rows {
            table.insert(row);
        }
        if table.is_empty() {
            return Err(LookupDefect::NoEntries);
        }
        Ok(table)
    }

    /// Read and parse a lookup file.
    pub fn load(path: &Path, columns: &Columns) -> Result<Self, PrettifyError> {
        if !path.exists() {
            return Err(PrettifyError::LookupNotFound(path.to_path_buf()));
        }
        let content =
            fs::read_to_string(path).map_err(|err| PrettifyError::io("read", path, err))?;
        Ok(Self::parse(&content, columns)?)
    }

    /// Replace the table contents in full with a freshly parsed document.
    ///
    /// The table is cleared first; on failure it stays empty rather than
    /// keeping entries from an earlier load.
    pub fn reload(&mut self, content: &str, columns: &Columns) -> Result<(), LookupDefect> {
        self.clear();
        *self = Self::parse(content, columns)?;
        Ok(())
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.name_of.get(code).map(String::as_str)
    }

    pub fn locality_of(&self, code: &str) -> Option<&str> {
        self.locality_of.get(code).map(String::as_str)
    }

    /// Number of airport rows loaded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of distinct codes known to the table.
    pub fn len(&self) -> usize {
        self.name_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_of.is_empty()
    }

    pub fn clear(&mut self) {
        self.name_of.clear();
        self.locality_of.clear();
        self.rows = 0;
    }

    fn insert(&mut self, row: AirportRow) {
        let AirportRow {
            name,
            short_code,
            long_code,
            locality,
        } = row;

        self.name_of.insert(short_code.clone(), name.clone());
        self.name_of.insert(long_code.clone(), name);
        self.locality_of.insert(short_code, locality.clone());
        self.locality_of.insert(long_code, locality);
        self.rows += 1;
    }
}
