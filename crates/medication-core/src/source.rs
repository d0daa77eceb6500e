//! Record sources
//!
//! The screen never owns its data. A [`MedicationSource`] supplies the record
//! list, so the seeded demonstration data can be swapped for a real file
//! without touching any rendering code.

use std::path::{Path, PathBuf};

use crate::error::{RecordError, RecordResult};
use crate::types::MedicationRecord;

/// Supplies the ordered list of records to display.
pub trait MedicationSource {
    /// Load all records in display order
    fn load(&self) -> RecordResult<Vec<MedicationRecord>>;

    /// Short human-readable description used in logs
    fn describe(&self) -> String;
}

/// The three demonstration records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleMedications;

impl MedicationSource for SampleMedications {
    fn load(&self) -> RecordResult<Vec<MedicationRecord>> {
        Ok(sample_medications())
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}

/// Build the seeded demonstration records.
pub fn sample_medications() -> Vec<MedicationRecord> {
    vec![
        MedicationRecord::new(
            "アモキシシリン錠250mg",
            "気管支炎の治療",
            "1日3回",
            "東京中央クリニック",
            "2025年12月20日",
            ["08:00", "12:30", "19:00"],
        ),
        MedicationRecord::new(
            "ロキソプロフェンNa錠60mg",
            "痛み止め",
            "1日2回",
            "都立総合病院",
            "2025年12月15日",
            ["09:00", "21:00"],
        ),
        MedicationRecord::new(
            "オメプラゾール錠20mg",
            "胃酸の分泌を抑える",
            "1日1回",
            "東京中央クリニック",
            "2025年11月10日",
            ["07:30"],
        ),
    ]
}

/// Records stored as a JSON array on disk.
///
/// ```json
/// [{ "name": "...", "description": "...", "frequency": "...",
///    "hospital": "...", "prescriptionDate": "...", "times": ["08:00"] }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MedicationSource for JsonFileSource {
    fn load(&self) -> RecordResult<Vec<MedicationRecord>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| RecordError::Read {
            path: self.path.clone(),
            source,
        })?;
        let records = parse_records(&contents)?;
        tracing::info!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded medication records"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a JSON array of records.
///
/// No validation beyond shape: empty strings and empty `times` are kept.
pub fn parse_records(json: &str) -> RecordResult<Vec<MedicationRecord>> {
    Ok(serde_json::from_str(json)?)
}
