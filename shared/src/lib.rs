use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slot ID in format: "slot::<uuid-v4>"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: String,
    /// Calendar date of the slot, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    /// Local time of day in zero-padded 24h format (HH:MM)
    pub start_time: String,
    /// Local time of day in zero-padded 24h format (HH:MM)
    pub end_time: String,
}

/// Raw payload submitted by the slot entry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    /// Date in YYYY-MM-DD format
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Response after a slot was stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotResponse {
    pub slot: AvailabilitySlot,
    pub success_message: String,
}

/// A single cell of a Sunday-aligned month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    /// Placeholder for weekdays before the 1st of the month
    Blank,
    /// Actual day within the month
    Day(NaiveDate),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day(date) => Some(*date),
        }
    }
}

/// Supported timezone codes for the profile and the header selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Timezone {
    Utc,
    // North America
    Est,
    Cst,
    Pst,
    Akst,
    Hst,
    // South America
    Brt,
    Art,
    // Europe
    Gmt,
    Cet,
    Eet,
    Msk,
    // Asia
    Ist,
    #[serde(rename = "CST_CN")]
    CstCn,
    Jst,
    Kst,
    // Australia
    Aest,
    Acst,
    // Africa
    Cat,
    Eat,
    Wat,
    // Middle East
    Gst,
    Ast,
}

impl Default for Timezone {
    fn default() -> Self {
        Timezone::Utc
    }
}

impl Timezone {
    /// All supported timezones in display order
    pub fn all() -> &'static [Timezone] {
        use Timezone::*;
        &[
            Utc, Est, Cst, Pst, Akst, Hst, Brt, Art, Gmt, Cet, Eet, Msk, Ist, CstCn, Jst, Kst,
            Aest, Acst, Cat, Eat, Wat, Gst, Ast,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Timezone::Utc => "UTC",
            Timezone::Est => "EST",
            Timezone::Cst => "CST",
            Timezone::Pst => "PST",
            Timezone::Akst => "AKST",
            Timezone::Hst => "HST",
            Timezone::Brt => "BRT",
            Timezone::Art => "ART",
            Timezone::Gmt => "GMT",
            Timezone::Cet => "CET",
            Timezone::Eet => "EET",
            Timezone::Msk => "MSK",
            Timezone::Ist => "IST",
            Timezone::CstCn => "CST_CN",
            Timezone::Jst => "JST",
            Timezone::Kst => "KST",
            Timezone::Aest => "AEST",
            Timezone::Acst => "ACST",
            Timezone::Cat => "CAT",
            Timezone::Eat => "EAT",
            Timezone::Wat => "WAT",
            Timezone::Gst => "GST",
            Timezone::Ast => "AST",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timezone::Utc => "UTC (Coordinated Universal Time)",
            Timezone::Est => "EST (Eastern Standard Time)",
            Timezone::Cst => "CST (Central Standard Time)",
            Timezone::Pst => "PST (Pacific Standard Time)",
            Timezone::Akst => "AKST (Alaska Standard Time)",
            Timezone::Hst => "HST (Hawaii-Aleutian Standard Time)",
            Timezone::Brt => "BRT (Brasília Time)",
            Timezone::Art => "ART (Argentina Time)",
            Timezone::Gmt => "GMT (Greenwich Mean Time)",
            Timezone::Cet => "CET (Central European Time)",
            Timezone::Eet => "EET (Eastern European Time)",
            Timezone::Msk => "MSK (Moscow Standard Time)",
            Timezone::Ist => "IST (India Standard Time)",
            Timezone::CstCn => "CST (China Standard Time)",
            Timezone::Jst => "JST (Japan Standard Time)",
            Timezone::Kst => "KST (Korea Standard Time)",
            Timezone::Aest => "AEST (Australian Eastern Standard Time)",
            Timezone::Acst => "ACST (Australian Central Standard Time)",
            Timezone::Cat => "CAT (Central Africa Time)",
            Timezone::Eat => "EAT (East Africa Time)",
            Timezone::Wat => "WAT (West Africa Time)",
            Timezone::Gst => "GST (Gulf Standard Time)",
            Timezone::Ast => "AST (Arabia Standard Time)",
        }
    }

    /// UTC offset as displayed next to the label, e.g. "+05:30"
    pub fn offset(&self) -> &'static str {
        match self {
            Timezone::Utc | Timezone::Gmt => "+00:00",
            Timezone::Est => "-05:00",
            Timezone::Cst => "-06:00",
            Timezone::Pst => "-08:00",
            Timezone::Akst => "-09:00",
            Timezone::Hst => "-10:00",
            Timezone::Brt | Timezone::Art => "-03:00",
            Timezone::Cet | Timezone::Wat => "+01:00",
            Timezone::Eet | Timezone::Cat => "+02:00",
            Timezone::Msk | Timezone::Eat | Timezone::Ast => "+03:00",
            Timezone::Gst => "+04:00",
            Timezone::Ist => "+05:30",
            Timezone::CstCn => "+08:00",
            Timezone::Jst | Timezone::Kst => "+09:00",
            Timezone::Acst => "+09:30",
            Timezone::Aest => "+10:00",
        }
    }

    /// Label and offset as shown in dropdowns
    pub fn display_label(&self) -> String {
        format!("{} {}", self.label(), self.offset())
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneParseError(pub String);

impl fmt::Display for TimezoneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown timezone code: {}", self.0)
    }
}

impl std::error::Error for TimezoneParseError {}

impl FromStr for Timezone {
    type Err = TimezoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timezone::all()
            .iter()
            .copied()
            .find(|tz| tz.code() == s)
            .ok_or_else(|| TimezoneParseError(s.to_string()))
    }
}

/// Local user profile, held for the session only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional phone number, empty when not provided
    pub phone: String,
    pub timezone: Timezone,
}

impl UserProfile {
    /// "First Last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        SlotBookConfig::default().seed_profile
    }
}

/// Compile-time defaults for the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotBookConfig {
    pub app_name: String,
    pub default_timezone: Timezone,
    pub seed_profile: UserProfile,
}

impl Default for SlotBookConfig {
    fn default() -> Self {
        Self {
            app_name: "SlotBook".to_string(),
            default_timezone: Timezone::Utc,
            seed_profile: UserProfile {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: String::new(),
                timezone: Timezone::Utc,
            },
        }
    }
}

impl AvailabilitySlot {
    /// Generate a collision-resistant slot ID
    pub fn generate_id() -> String {
        format!("slot::{}", uuid::Uuid::new_v4())
    }

    /// True when the slot covers exactly the given date and time range
    pub fn matches_triple(&self, date: NaiveDate, start_time: &str, end_time: &str) -> bool {
        self.date == date && self.start_time == start_time && self.end_time == end_time
    }

    /// "09:00 - 10:30"
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// Date in YYYY-MM-DD format
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slot() -> AvailabilitySlot {
        AvailabilitySlot {
            id: "slot::0b5a0c9e-3f4e-4f7e-9a51-6f3ad2b6a1c2".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            start_time: "09:00".to_string(),
            end_time: "10:30".to_string(),
        }
    }

    #[test]
    fn test_generate_slot_id() {
        let id = AvailabilitySlot::generate_id();
        let raw = id.strip_prefix("slot::").unwrap();
        assert!(uuid::Uuid::parse_str(raw).is_ok());

        // Two ids generated back to back never collide
        assert_ne!(AvailabilitySlot::generate_id(), AvailabilitySlot::generate_id());
    }

    #[test]
    fn test_slot_serializes_date_as_plain_date() {
        let json = serde_json::to_value(sample_slot()).unwrap();
        assert_eq!(json["date"], "2024-06-12");
        assert_eq!(json["start_time"], "09:00");
        assert_eq!(json["end_time"], "10:30");
    }

    #[test]
    fn test_matches_triple() {
        let slot = sample_slot();
        let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();

        assert!(slot.matches_triple(date, "09:00", "10:30"));
        assert!(!slot.matches_triple(date, "09:00", "11:00"));
        assert!(!slot.matches_triple(date.succ_opt().unwrap(), "09:00", "10:30"));
    }

    #[test]
    fn test_slot_labels() {
        let slot = sample_slot();
        assert_eq!(slot.time_range_label(), "09:00 - 10:30");
        assert_eq!(slot.date_string(), "2024-06-12");
    }

    #[test]
    fn test_calendar_cell() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(CalendarCell::Blank.date(), None);
        assert_eq!(CalendarCell::Day(date).date(), Some(date));
    }

    #[test]
    fn test_timezone_codes_round_trip_through_from_str() {
        for tz in Timezone::all() {
            assert_eq!(tz.code().parse::<Timezone>().unwrap(), *tz);
        }
        assert!("MARS".parse::<Timezone>().is_err());
    }

    #[test]
    fn test_timezone_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Timezone::Utc).unwrap(), "\"UTC\"");
        assert_eq!(serde_json::to_string(&Timezone::Akst).unwrap(), "\"AKST\"");
        assert_eq!(serde_json::to_string(&Timezone::CstCn).unwrap(), "\"CST_CN\"");
    }

    #[test]
    fn test_timezone_labels() {
        assert_eq!(Timezone::default(), Timezone::Utc);
        assert_eq!(Timezone::all().len(), 23);
        assert_eq!(Timezone::Ist.offset(), "+05:30");
        assert_eq!(
            Timezone::Utc.display_label(),
            "UTC (Coordinated Universal Time) +00:00"
        );
    }

    #[test]
    fn test_seed_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.display_name(), "John Doe");
        assert_eq!(profile.initials(), "JD");
        assert_eq!(profile.email, "john.doe@example.com");
        assert!(!profile.has_phone());
        assert_eq!(profile.timezone, Timezone::Utc);
    }

    #[test]
    fn test_default_config() {
        let config = SlotBookConfig::default();
        assert_eq!(config.app_name, "SlotBook");
        assert_eq!(config.default_timezone, Timezone::Utc);
        assert_eq!(config.seed_profile, UserProfile::default());
    }
}
