//! Medication Record UI Components
//!
//! Dioxus components for the medication record book screen:
//!
//! ```text
//! MedicationRecordApp
//! ├── RecordHeader   identity line, title, settings button, SummaryGrid
//! ├── TabStrip       "お薬リスト" (active) | "服用カレンダー" (inactive)
//! └── MedicationList
//!     └── MedicationCard × N
//!         └── TimeBadge × times.len()
//! ```
//!
//! Rendering is one-directional: the app hands each record to a card by
//! value and the card renders it. Nothing mutates, and the decorative
//! controls (settings button, tabs) only log when clicked.
//!
//! ## Palette
//!
//! - **Blue (#3b82f6 → #2563eb)**: header gradient, active tab, badges
//! - **Gray (#f9fafb)**: page background
//! - **White**: cards and the tab bar

pub mod app;
pub mod assets;
pub mod components;
pub mod render;
pub mod theme;

pub use app::*;
pub use assets::Asset;
pub use components::*;
pub use render::{render_app, render_card, render_document};
pub use theme::GLOBAL_STYLES;
