//! Static HTML rendering
//!
//! Renders components to strings with `dioxus-ssr`. Used by the CLI export
//! and by tests that assert on rendered structure. Output is deterministic:
//! the same input always produces the same bytes.

use dioxus::prelude::*;
use medication_core::{MedicationBook, MedicationRecord};

use crate::app::{MedicationRecordApp, MedicationRecordAppProps};
use crate::components::{MedicationCard, MedicationCardProps};
use crate::theme::GLOBAL_STYLES;

/// Render a single medication card
pub fn render_card(record: &MedicationRecord) -> String {
    let mut dom = VirtualDom::new_with_props(
        MedicationCard,
        MedicationCardProps {
            record: record.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render the full screen fragment, without the surrounding document
pub fn render_app(book: &MedicationBook) -> String {
    let mut dom = VirtualDom::new_with_props(
        MedicationRecordApp,
        MedicationRecordAppProps { book: book.clone() },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a standalone HTML page with the global stylesheet inlined
pub fn render_document(book: &MedicationBook) -> String {
    let mut dom = VirtualDom::new_with_props(
        MedicationDocument,
        MedicationDocumentProps { book: book.clone() },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    tracing::debug!(records = book.records.len(), bytes = html.len(), "Rendered medication record page");

    format!("<!DOCTYPE html>\n{}\n", html)
}

/// Document shell around the screen
#[component]
fn MedicationDocument(book: MedicationBook) -> Element {
    rsx! {
        html { lang: "ja",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{book.profile.title}" }
                style { dangerous_inner_html: GLOBAL_STYLES }
            }
            body {
                MedicationRecordApp { book: book.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_fragment() {
        let book = MedicationBook::sample();
        let page = render_document(&book);
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"ja\">"));
        assert!(page.contains("<meta charset=\"utf-8\""));
        assert!(page.contains("<title>お薬手帳</title>"));
        assert!(page.contains(&render_app(&book)));
    }

    #[test]
    fn document_inlines_styles() {
        let page = render_document(&MedicationBook::sample());
        assert!(page.contains(".medication-card {"));
        assert!(page.contains("'Hiragino Sans'"));
    }

    #[test]
    fn document_title_is_escaped() {
        let mut book = MedicationBook::sample();
        book.profile.title = "a<b>&c".to_string();
        let page = render_document(&book);
        assert!(page.contains("<title>a&lt;b&gt;&amp;c</title>"));
        assert!(!page.contains("<b>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let book = MedicationBook::sample();
        assert_eq!(render_document(&book), render_document(&book));
    }
}
