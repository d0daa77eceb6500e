//! Medication Record screen
//!
//! Composes header, tab strip and card list from a [`MedicationBook`].

use dioxus::prelude::*;
use medication_core::MedicationBook;

use crate::components::{MedicationList, RecordHeader, TabStrip};

/// Properties for the MedicationRecordApp component
#[derive(Clone, PartialEq, Props)]
pub struct MedicationRecordAppProps {
    /// Data shown on screen. Defaults to the demonstration book.
    #[props(default = MedicationBook::sample())]
    pub book: MedicationBook,
}

impl Default for MedicationRecordAppProps {
    fn default() -> Self {
        Self {
            book: MedicationBook::sample(),
        }
    }
}

/// Full medication record screen.
///
/// There is exactly one state: the header counters come from
/// `book.summary` and are never recomputed from `book.records`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     // demonstration data
///     MedicationRecordApp {}
///
///     // injected data
///     MedicationRecordApp { book: MedicationBook::with_records(records) }
/// }
/// ```
#[component]
pub fn MedicationRecordApp(props: MedicationRecordAppProps) -> Element {
    let book = &props.book;

    rsx! {
        div { class: "medication-app",
            RecordHeader { profile: book.profile.clone(), summary: book.summary }
            TabStrip {}
            MedicationList { records: book.records.clone() }
        }
    }
}
