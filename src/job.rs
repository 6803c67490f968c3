//! One file-to-file prettify run.
//!
//! Fatal checks happen in a fixed order (input, then lookup, then the lookup
//! contents) and the output file is written only after the whole document
//! has been rewritten. The write goes through a sibling temp file that is
//! renamed into place, so a failed write never leaves a truncated output.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    config::Columns,
    error::PrettifyError,
    lookup::LookupTable,
    markup::Palette,
    pipeline::{Rewrite, prettify},
};

/// Inputs of a single run.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub lookup: &'a Path,
    pub columns: &'a Columns,
    pub palette: Palette,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct JobOutcome {
    pub rewrite: Rewrite,
    /// Airport rows in the lookup table.
    pub airports: usize,
}

impl Job<'_> {
    pub fn run(&self) -> Result<JobOutcome, PrettifyError> {
        if !self.input.exists() {
            return Err(PrettifyError::InputNotFound(self.input.to_path_buf()));
        }
        if !self.lookup.exists() {
            return Err(PrettifyError::LookupNotFound(self.lookup.to_path_buf()));
        }

        let table = LookupTable::load(self.lookup, self.columns)?;
        let text = read_document(self.input)?;
        let rewrite = prettify(&text, &table, self.palette);

        write_atomically(self.output, &rewrite.text)?;

        Ok(JobOutcome {
            rewrite,
            airports: table.rows(),
        })
    }
}

/// Read the input document, re-joining its lines with `\n`.
fn read_document(path: &Path) -> Result<String, PrettifyError> {
    let content = fs::read_to_string(path).map_err(|err| PrettifyError::io("read", path, err))?;
    Ok(content.lines().collect::<Vec<_>>().join("\n"))
}

fn write_atomically(path: &Path, content: &str) -> Result<(), PrettifyError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let write_err = |err: io::Error| PrettifyError::io("write", path, err);

    let mut file = NamedTempFile::new_in(&dir).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
