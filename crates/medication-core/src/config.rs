//! Record source selection
//!
//! Binaries pick their record source in this order:
//!
//! 1. an explicit `--records <PATH>` argument
//! 2. `<config dir>/medication-record/records.json`, when that file exists
//! 3. the built-in sample

use std::path::PathBuf;

use crate::error::RecordResult;
use crate::source::{JsonFileSource, MedicationSource, SampleMedications};
use crate::types::MedicationBook;

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "medication-record";

/// File name of the default record file
pub const RECORDS_FILE_NAME: &str = "records.json";

/// Default record file location (e.g. `~/.config/medication-record/records.json`)
pub fn default_records_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(RECORDS_FILE_NAME))
}

/// Choose a record source from an explicit path and a fallback location.
pub fn resolve_source(
    explicit: Option<PathBuf>,
    fallback: Option<PathBuf>,
) -> Box<dyn MedicationSource> {
    if let Some(path) = explicit {
        return Box::new(JsonFileSource::new(path));
    }
    match fallback {
        Some(path) if path.is_file() => Box::new(JsonFileSource::new(path)),
        _ => Box::new(SampleMedications),
    }
}

/// Load a full book (default header and counters) from a source
pub fn load_book(source: &dyn MedicationSource) -> RecordResult<MedicationBook> {
    let records = source.load()?;
    tracing::info!(source = %source.describe(), count = records.len(), "Medication book ready");
    Ok(MedicationBook::with_records(records))
}
