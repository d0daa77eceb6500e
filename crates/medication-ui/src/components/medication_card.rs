//! Medication Card Component
//!
//! Displays one medication record: icon, name and description, frequency and
//! hospital, prescription date, and a row of dosing-time badges.

use dioxus::prelude::*;
use medication_core::MedicationRecord;

use crate::assets::Asset;

/// Label above the prescription date
pub const PRESCRIPTION_DATE_LABEL: &str = "処方日";

/// Properties for the MedicationCard component
#[derive(Clone, PartialEq, Props)]
pub struct MedicationCardProps {
    /// The record to display, owned by value
    pub record: MedicationRecord,
}

/// Card for a single medication record
///
/// # Design Notes
///
/// - Blue icon tile on the left, date column right-aligned
/// - Frequency and hospital each preceded by a 12px icon
/// - One pill badge per entry in `times`, in order; an empty list leaves
///   the badge row empty but still rendered below the divider
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MedicationCard {
///         record: MedicationRecord::new(
///             "オメプラゾール錠20mg",
///             "胃酸の分泌を抑える",
///             "1日1回",
///             "東京中央クリニック",
///             "2025年11月10日",
///             ["07:30"],
///         )
///     }
/// }
/// ```
#[component]
pub fn MedicationCard(props: MedicationCardProps) -> Element {
    let record = &props.record;

    rsx! {
        article { class: "medication-card",
            div { class: "medication-card__body",
                div { class: "medication-card__icon",
                    img {
                        class: "icon-md",
                        src: Asset::MedicationIcon.url(),
                        alt: Asset::MedicationIcon.alt(),
                    }
                }

                div { class: "medication-card__details",
                    h3 { class: "medication-card__name", "{record.name}" }
                    p { class: "medication-card__description", "{record.description}" }
                    div { class: "medication-card__meta",
                        MetaField { icon: Asset::ClockIcon, text: record.frequency.clone() }
                        MetaField { icon: Asset::HospitalIcon, text: record.hospital.clone() }
                    }
                }

                div { class: "medication-card__date",
                    span { class: "medication-card__date-label", "{PRESCRIPTION_DATE_LABEL}" }
                    span { class: "medication-card__date-value", "{record.prescription_date}" }
                }
            }

            div { class: "medication-card__times",
                for (index, time) in record.times.iter().enumerate() {
                    TimeBadge { key: "{index}", time: time.clone() }
                }
            }
        }
    }
}

/// Small icon followed by a line of meta text
#[component]
fn MetaField(icon: Asset, text: String) -> Element {
    rsx! {
        span { class: "meta-field",
            img { class: "icon-xs", src: icon.url(), alt: icon.alt() }
            span { "{text}" }
        }
    }
}

/// A single dosing-time pill
#[component]
pub fn TimeBadge(
    /// Time of day as displayed (e.g. "08:00")
    time: String,
) -> Element {
    rsx! {
        span { class: "time-badge", "{time}" }
    }
}
