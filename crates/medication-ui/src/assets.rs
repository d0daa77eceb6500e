//! Remote image assets
//!
//! Each asset is a fixed URL. Nothing is fetched or cached here; a broken
//! URL renders as the host's broken-image placeholder.

/// Image assets referenced by the screen
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Asset {
    /// App icon in the header identity circle
    AppIcon,
    /// Settings button, outer vector layer
    SettingsVectorOuter,
    /// Settings button, inner vector layer
    SettingsVectorInner,
    /// Pill icon on every medication card
    MedicationIcon,
    /// Clock icon before the dosing frequency
    ClockIcon,
    /// Building icon before the hospital name
    HospitalIcon,
    /// Icon of the medication list tab
    ListIcon,
    /// Icon of the dosing calendar tab
    CalendarIcon,
}

impl Asset {
    /// Every asset, in catalogue order
    pub const ALL: [Asset; 8] = [
        Asset::AppIcon,
        Asset::SettingsVectorOuter,
        Asset::SettingsVectorInner,
        Asset::MedicationIcon,
        Asset::ClockIcon,
        Asset::HospitalIcon,
        Asset::ListIcon,
        Asset::CalendarIcon,
    ];

    pub fn url(&self) -> &'static str {
        match self {
            Asset::AppIcon => "https://www.figma.com/api/mcp/asset/7136254f-4a68-4d38-94a7-af8efb31bc00",
            Asset::SettingsVectorOuter => "https://www.figma.com/api/mcp/asset/25f6f411-ce6a-44ed-8cd6-03b0bbbf9a5f",
            Asset::SettingsVectorInner => "https://www.figma.com/api/mcp/asset/8b8c14a3-8ab5-4fad-a9bd-d4a1f64909c3",
            Asset::MedicationIcon => "https://www.figma.com/api/mcp/asset/da36f345-d295-4874-b90c-169d15b99c26",
            Asset::ClockIcon => "https://www.figma.com/api/mcp/asset/65929782-6a6d-429b-a780-b701c522ac54",
            Asset::HospitalIcon => "https://www.figma.com/api/mcp/asset/5b3b0d7b-0b3f-4802-b97a-6399203cdc27",
            Asset::ListIcon => "https://www.figma.com/api/mcp/asset/6ec6a0dc-9d29-4c56-aec8-13f570bd94aa",
            Asset::CalendarIcon => "https://www.figma.com/api/mcp/asset/d5784944-f130-4eaf-8069-2edd5001f7c3",
        }
    }

    /// Alt text for the `img` element
    pub fn alt(&self) -> &'static str {
        match self {
            Asset::AppIcon => "Icon",
            Asset::SettingsVectorOuter | Asset::SettingsVectorInner => "Settings",
            Asset::MedicationIcon => "Medication",
            Asset::ClockIcon => "Clock",
            Asset::HospitalIcon => "Hospital",
            Asset::ListIcon => "List",
            Asset::CalendarIcon => "Calendar",
        }
    }
}
