use dioxus::prelude::*;
use medication_ui::{MedicationRecordApp, GLOBAL_STYLES};

use crate::get_book;

/// Root application component.
///
/// Provides global styles and mounts the medication record screen with the
/// book loaded at startup.
#[component]
pub fn App() -> Element {
    let book = use_hook(get_book);

    rsx! {
        style { {GLOBAL_STYLES} }
        MedicationRecordApp { book: book }
    }
}
