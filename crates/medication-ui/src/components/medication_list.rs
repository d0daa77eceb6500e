//! Medication List - one card per record, in order.

use dioxus::prelude::*;
use medication_core::MedicationRecord;

use super::MedicationCard;

/// Props for the medication list.
#[derive(Props, Clone, PartialEq)]
pub struct MedicationListProps {
    /// Records in display order
    pub records: Vec<MedicationRecord>,
}

/// Vertical list of medication cards, keyed by position.
#[component]
pub fn MedicationList(props: MedicationListProps) -> Element {
    rsx! {
        main { class: "medication-list",
            for (index, record) in props.records.iter().enumerate() {
                MedicationCard { key: "{index}", record: record.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medication_core::sample_medications;

    fn render_list(records: Vec<MedicationRecord>) -> String {
        let mut dom = VirtualDom::new_with_props(MedicationList, MedicationListProps { records });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn list_renders_card_per_record() {
        let html = render_list(sample_medications());
        assert_eq!(html.matches("<article class=\"medication-card\"").count(), 3);
    }

    #[test]
    fn list_keeps_record_order() {
        let html = render_list(sample_medications());
        let first = html.find("アモキシシリン錠250mg").unwrap();
        let second = html.find("ロキソプロフェンNa錠60mg").unwrap();
        let third = html.find("オメプラゾール錠20mg").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn empty_list_renders_container_only() {
        let html = render_list(vec![]);
        assert!(html.contains("class=\"medication-list\""));
        assert!(!html.contains("medication-card"));
    }
}
