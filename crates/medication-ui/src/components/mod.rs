//! Screen building blocks
//!
//! Every component is a pure function of its props. Class names map to
//! rules in [`crate::theme::GLOBAL_STYLES`].

mod medication_card;
mod medication_list;
mod record_header;
mod tab_strip;

pub use medication_card::*;
pub use medication_list::*;
pub use record_header::*;
pub use tab_strip::*;
