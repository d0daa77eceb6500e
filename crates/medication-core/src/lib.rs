//! Medication Record Core Library
//!
//! Data model and record sources for the medication record book screen.
//!
//! ## Overview
//!
//! A medication record book ("お薬手帳") shows a patient header with summary
//! counters, a tab strip, and one card per prescribed medication. This crate
//! holds everything that screen displays; rendering lives in
//! `medication-ui`.
//!
//! ## Core Principles
//!
//! - **Plain strings**: dates, frequencies and times are display text, never parsed
//! - **Injected data**: records come from a [`MedicationSource`], not a literal baked into a component
//! - **Literal counters**: [`SummaryCounters`] are independent of the record list
//!
//! ## Quick Start
//!
//! ```
//! use medication_core::{MedicationSource, SampleMedications};
//!
//! let records = SampleMedications.load().unwrap();
//! for record in &records {
//!     println!("{} ({})", record.name, record.times.join(", "));
//! }
//! assert_eq!(records.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod source;
pub mod types;

// Re-exports
pub use config::{default_records_path, load_book, resolve_source};
pub use error::{RecordError, RecordResult};
pub use source::{parse_records, sample_medications, JsonFileSource, MedicationSource, SampleMedications};
pub use types::*;
