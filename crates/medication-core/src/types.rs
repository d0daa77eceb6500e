//! Medication record book types
//!
//! Every field is display text. Nothing here is parsed, validated or
//! normalized: an empty name renders as an empty heading, an empty `times`
//! list renders as an empty badge row.

use serde::{Deserialize, Serialize};

/// One medication's display data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    /// Medication name with dose (e.g. "アモキシシリン錠250mg")
    pub name: String,

    /// Purpose or indication
    pub description: String,

    /// Human-readable dosing frequency (e.g. "1日3回")
    pub frequency: String,

    /// Prescribing institution
    pub hospital: String,

    /// Prescription date as shown to the patient (e.g. "2025年12月20日")
    pub prescription_date: String,

    /// Times of day in display order. Duplicates are allowed.
    #[serde(default)]
    pub times: Vec<String>,
}

impl MedicationRecord {
    /// Create a record from its display fields
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        frequency: impl Into<String>,
        hospital: impl Into<String>,
        prescription_date: impl Into<String>,
        times: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            frequency: frequency.into(),
            hospital: hospital.into(),
            prescription_date: prescription_date.into(),
            times: times.into_iter().map(Into::into).collect(),
        }
    }
}

/// Header summary counters.
///
/// These are independent literals. They are deliberately not computed from
/// the record list, so `active_medications` can disagree with the number of
/// cards on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounters {
    /// "服用中の薬"
    pub active_medications: u32,
    /// "今月の服用"
    pub monthly_doses: u32,
    /// "処方箋"
    pub prescriptions: u32,
}

impl Default for SummaryCounters {
    fn default() -> Self {
        Self {
            active_medications: 3,
            monthly_doses: 12,
            prescriptions: 2,
        }
    }
}

impl SummaryCounters {
    pub const ACTIVE_MEDICATIONS_LABEL: &'static str = "服用中の薬";
    pub const MONTHLY_DOSES_LABEL: &'static str = "今月の服用";
    pub const PRESCRIPTIONS_LABEL: &'static str = "処方箋";

    /// (value, label) pairs in display order
    pub fn cells(&self) -> [(u32, &'static str); 3] {
        [
            (self.active_medications, Self::ACTIVE_MEDICATIONS_LABEL),
            (self.monthly_doses, Self::MONTHLY_DOSES_LABEL),
            (self.prescriptions, Self::PRESCRIPTIONS_LABEL),
        ]
    }
}

/// Header identity block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Patient name with honorific, shown under the title
    pub display_name: String,
    /// Screen title
    pub title: String,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            display_name: "田中 太郎 様".to_string(),
            title: "お薬手帳".to_string(),
        }
    }
}

/// Everything a single medication record screen displays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MedicationBook {
    pub profile: PatientProfile,
    pub summary: SummaryCounters,
    pub records: Vec<MedicationRecord>,
}

impl MedicationBook {
    /// Book with the default header and the given records
    pub fn with_records(records: Vec<MedicationRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// The demonstration book: default header and the three seeded records
    pub fn sample() -> Self {
        Self::with_records(crate::source::sample_medications())
    }
}
