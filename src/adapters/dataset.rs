//! Parser for the line-based point dataset.
//!
//! The dataset alternates two kinds of lines:
//! - a point name, e.g. `Springfield, IL`
//! - its coordinates as `<x> - <y>`, e.g. `39.78 - -89.65`
//!
//! Blank lines are ignored. Any other malformed line aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use super::PointRegistry;
use crate::core::{Coordinates, NamedPoint};
use crate::ports::Place;

/// Error type for dataset loading
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset not found at: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid point name at line {line}: {content:?}")]
    InvalidName { line: usize, content: String },
    #[error("invalid coordinates at line {line}: {content:?}")]
    InvalidCoordinates { line: usize, content: String },
    #[error("point {name:?} has no coordinates line")]
    MissingCoordinates { name: String },
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Letters, spaces and . ' - ( ) , with an optional ", XX" region suffix
        Regex::new(r"^[a-zA-Z'.\s\-(),]+(,\s[a-zA-Z]{2})?$").unwrap()
    })
}

fn coordinates_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // The separator needs whitespace on both sides so it cannot take y's sign
        Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+))\s+-\s+([-+]?(?:\d+\.?\d*|\.\d+))\s*$")
            .unwrap()
    })
}

/// Check whether `line` is an acceptable point name
///
/// # Example
/// ```
/// use proximity_search::adapters::dataset::is_valid_name;
/// assert!(is_valid_name("Springfield, IL"));
/// assert!(!is_valid_name("Route 66"));
/// ```
pub fn is_valid_name(line: &str) -> bool {
    name_pattern().is_match(line)
}

/// Parse a `<x> - <y>` coordinates line
///
/// Returns `None` if the line does not match the format.
pub fn parse_coordinates(line: &str) -> Option<Coordinates> {
    let captures = coordinates_pattern().captures(line)?;
    let x: f64 = captures.get(1)?.as_str().parse().ok()?;
    let y: f64 = captures.get(2)?.as_str().parse().ok()?;
    Some(Coordinates::new(x, y))
}

/// Reader for point datasets
pub struct DatasetReader;

impl DatasetReader {
    /// Load a dataset file into a registry
    pub fn load<P: AsRef<Path>>(path: P) -> Result<PointRegistry, DatasetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }

        let registry = Self::read(File::open(path)?)?;
        tracing::info!(path = %path.display(), count = registry.len(), "Loaded dataset");
        Ok(registry)
    }

    /// Read a dataset into a registry
    pub fn read<R: Read>(reader: R) -> Result<PointRegistry, DatasetError> {
        Ok(Self::records(reader)?.into_iter().collect())
    }

    /// Read a dataset into records, in file order
    pub fn records<R: Read>(reader: R) -> Result<Vec<NamedPoint>, DatasetError> {
        let reader = BufReader::new(reader);
        let mut records = Vec::new();
        let mut pending_name: Option<String> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                continue;
            }

            match pending_name.take() {
                None => {
                    if !is_valid_name(line) {
                        return Err(DatasetError::InvalidName {
                            line: line_number,
                            content: line.to_string(),
                        });
                    }
                    pending_name = Some(line.to_string());
                }
                Some(name) => {
                    let coordinates =
                        parse_coordinates(line).ok_or_else(|| DatasetError::InvalidCoordinates {
                            line: line_number,
                            content: line.to_string(),
                        })?;
                    records.push(NamedPoint::new(name, coordinates));
                }
            }
        }

        if let Some(name) = pending_name {
            return Err(DatasetError::MissingCoordinates { name });
        }

        Ok(records)
    }
}
