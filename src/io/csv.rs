//! Timing export for repeated generation runs

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use csv::{Terminator, Writer, WriterBuilder};

use crate::algorithm::Seed;
use crate::io::configuration::CSV_HEADER;
use crate::io::error::{MazeError, Result, file_system};

/// One generation run as recorded in the CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingRecord {
    /// Seed the run was generated from
    pub seed: Seed,
    /// Number of rows
    pub length: usize,
    /// Number of columns
    pub width: usize,
    /// Wall-clock generation time
    pub elapsed: Duration,
    /// Verification outcome
    pub passed: bool,
}

impl TimingRecord {
    fn fields(&self) -> [String; 5] {
        [
            self.seed.to_string(),
            self.length.to_string(),
            self.width.to_string(),
            self.elapsed.as_nanos().to_string(),
            String::from(if self.passed { "True" } else { "False" }),
        ]
    }
}

/// Append-only CSV of run timings
pub struct TimingCsv {
    path: PathBuf,
    writer: Writer<File>,
}

impl TimingCsv {
    /// Create (or truncate) the file and write the header row
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the parent directory cannot be created and
    /// `CsvExport` if the file cannot be opened or the header written
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }

        let writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_path(path)
            .map_err(|e| csv_export(path, e))?;

        let mut csv = Self {
            path: path.to_path_buf(),
            writer,
        };
        csv.write_fields(CSV_HEADER.split(','))?;
        Ok(csv)
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one run and flush it to disk
    ///
    /// # Errors
    ///
    /// Returns `CsvExport` if the row cannot be encoded or written and
    /// `FileSystem` if it cannot be flushed
    pub fn append(&mut self, record: &TimingRecord) -> Result<()> {
        self.write_fields(record.fields())
    }

    fn write_fields<I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.writer
            .write_record(fields)
            .map_err(|e| csv_export(&self.path, e))?;
        self.writer
            .flush()
            .map_err(|e| file_system(&self.path, "flush csv", e))
    }
}

fn csv_export(path: &Path, source: csv::Error) -> MazeError {
    MazeError::CsvExport {
        path: path.to_path_buf(),
        source,
    }
}
