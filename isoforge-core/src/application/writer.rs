// isoforge-core/src/application/writer.rs

use std::path::PathBuf;
use tracing::info;

use crate::domain::report::{Issue, RunReport};
use crate::error::IsoforgeError;
use crate::infrastructure::fs::write_lines;

/// Writes one line per record to a named file under the target directory.
pub struct OutputWriter {
    target_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    /// Every record is serialized before anything touches the disk. A failure
    /// (serialization or IO) aborts this file only: it is reported as
    /// `WriteFailed` and `None` is returned.
    pub fn write<R, F>(
        &self,
        file_name: &str,
        records: &[R],
        serialize: F,
        report: &mut RunReport,
    ) -> Option<PathBuf>
    where
        F: Fn(&R) -> Result<String, IsoforgeError>,
    {
        let result = records
            .iter()
            .map(&serialize)
            .collect::<Result<Vec<String>, IsoforgeError>>()
            .and_then(|lines| {
                write_lines(&self.target_dir, file_name, &lines).map_err(IsoforgeError::from)
            });

        match result {
            Ok(path) => {
                info!(file = file_name, lines = records.len(), "File written");
                report.files.push(file_name.to_string());
                Some(path)
            }
            Err(e) => {
                report.record(Issue::WriteFailed {
                    file: file_name.to_string(),
                    detail: e.to_string(),
                });
                None
            }
        }
    }
}
