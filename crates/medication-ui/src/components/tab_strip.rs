//! Tab Strip Component
//!
//! Two-tab bar under the header. Only the medication list exists, so the
//! active tab is fixed and clicking either tab changes nothing.

use dioxus::prelude::*;

use crate::assets::Asset;

/// Views offered by the tab strip
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Tab {
    /// "お薬リスト" - the card list
    MedicationList,
    /// "服用カレンダー" - not implemented
    DosingCalendar,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Tab; 2] = [Tab::MedicationList, Tab::DosingCalendar];

    /// The tab rendered as active
    pub const ACTIVE: Tab = Tab::MedicationList;

    pub fn label(&self) -> &'static str {
        match self {
            Tab::MedicationList => "お薬リスト",
            Tab::DosingCalendar => "服用カレンダー",
        }
    }

    pub fn icon(&self) -> Asset {
        match self {
            Tab::MedicationList => Asset::ListIcon,
            Tab::DosingCalendar => Asset::CalendarIcon,
        }
    }

    pub fn is_active(&self) -> bool {
        *self == Self::ACTIVE
    }
}

/// Navigation bar with the two tabs
#[component]
pub fn TabStrip() -> Element {
    rsx! {
        nav { class: "tab-strip",
            div { class: "tab-strip__row", role: "tablist",
                for tab in Tab::ALL {
                    TabButton { key: "{tab.label()}", tab: tab }
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: Tab) -> Element {
    let active = tab.is_active();
    let icon = tab.icon();

    rsx! {
        button {
            class: if active { "tab active" } else { "tab" },
            r#type: "button",
            role: "tab",
            "aria-selected": if active { "true" } else { "false" },
            onclick: move |_| {
                tracing::debug!(?tab, "Tab clicked; tab switching is not implemented");
            },
            img { class: "icon-sm", src: icon.url(), alt: icon.alt() }
            span { class: "tab__label", "{tab.label()}" }
        }
    }
}
