//! Record Header - patient identity, title and summary counters.

use dioxus::prelude::*;
use medication_core::{PatientProfile, SummaryCounters};

use crate::assets::Asset;

/// Props for the record header.
#[derive(Props, Clone, PartialEq)]
pub struct RecordHeaderProps {
    /// Title and patient name
    pub profile: PatientProfile,
    /// Fixed summary counters
    pub summary: SummaryCounters,
}

/// Blue gradient header with identity line, settings button and summary grid.
#[component]
pub fn RecordHeader(props: RecordHeaderProps) -> Element {
    rsx! {
        header { class: "record-header",
            div { class: "record-header__inner",
                div { class: "record-header__top",
                    div { class: "record-header__identity",
                        div { class: "record-header__avatar",
                            img {
                                class: "icon-lg",
                                src: Asset::AppIcon.url(),
                                alt: Asset::AppIcon.alt(),
                            }
                        }
                        div { class: "record-header__names",
                            p { class: "record-header__title", "{props.profile.title}" }
                            p { class: "record-header__patient", "{props.profile.display_name}" }
                        }
                    }
                    SettingsButton {}
                }
                SummaryGrid { summary: props.summary }
            }
        }
    }
}

/// Circular settings button.
///
/// Has no settings screen behind it; a click is only logged.
#[component]
pub fn SettingsButton() -> Element {
    rsx! {
        button {
            class: "settings-btn",
            r#type: "button",
            "aria-label": "Settings",
            onclick: move |_| {
                tracing::debug!("Settings button clicked; no settings screen is wired");
            },
            div { class: "settings-btn__layers",
                img {
                    class: "settings-btn__layer",
                    src: Asset::SettingsVectorOuter.url(),
                    alt: Asset::SettingsVectorOuter.alt(),
                }
                img {
                    class: "settings-btn__layer",
                    src: Asset::SettingsVectorInner.url(),
                    alt: Asset::SettingsVectorInner.alt(),
                }
            }
        }
    }
}

/// Three-cell grid of summary counters.
#[component]
pub fn SummaryGrid(summary: SummaryCounters) -> Element {
    rsx! {
        div { class: "summary-panel",
            div { class: "summary-grid",
                for (value, label) in summary.cells() {
                    div { class: "summary-cell",
                        p { class: "summary-value", "{value}" }
                        p { class: "summary-label", "{label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_header(summary: SummaryCounters) -> String {
        let mut dom = VirtualDom::new_with_props(
            RecordHeader,
            RecordHeaderProps {
                profile: PatientProfile::default(),
                summary,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn header_shows_identity() {
        let html = render_header(SummaryCounters::default());
        assert!(html.contains("お薬手帳"));
        assert!(html.contains("田中 太郎 様"));
    }

    #[test]
    fn header_shows_literal_counters() {
        let html = render_header(SummaryCounters::default());
        assert!(html.contains("<p class=\"summary-value\">3</p>"));
        assert!(html.contains("<p class=\"summary-value\">12</p>"));
        assert!(html.contains("<p class=\"summary-value\">2</p>"));
        assert!(html.contains("服用中の薬"));
        assert!(html.contains("今月の服用"));
        assert!(html.contains("処方箋"));
    }

    #[test]
    fn header_keeps_settings_button() {
        let html = render_header(SummaryCounters::default());
        assert!(html.contains("class=\"settings-btn\""));
        assert!(html.contains(Asset::SettingsVectorOuter.url()));
        assert!(html.contains(Asset::SettingsVectorInner.url()));
    }
}
