use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(value: u32) -> Self {
        Color(value & 0xFF_FF_FF)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid color '{}': expected #rrggbb", s));
        }
        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|e| format!("Invalid color '{}': {}", s, e))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Display category of a calendar event; exactly one applies per event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCategory {
    Custom,
    OutcomeHappened,
    OutcomeNotHappened,
    StatusPostponed,
    StatusRescheduled,
    RoomA,
    RoomB,
    Uncategorized,
}

impl ColorCategory {
    /// Every category, in resolution order
    pub const ALL: [ColorCategory; 8] = [
        ColorCategory::Custom,
        ColorCategory::OutcomeHappened,
        ColorCategory::OutcomeNotHappened,
        ColorCategory::StatusPostponed,
        ColorCategory::StatusRescheduled,
        ColorCategory::RoomA,
        ColorCategory::RoomB,
        ColorCategory::Uncategorized,
    ];

    /// Localized legend label
    pub fn label(&self) -> String {
        match self {
            ColorCategory::Custom => t!("category_custom"),
            ColorCategory::OutcomeHappened => t!("category_outcome_happened"),
            ColorCategory::OutcomeNotHappened => t!("category_outcome_not_happened"),
            ColorCategory::StatusPostponed => t!("category_status_postponed"),
            ColorCategory::StatusRescheduled => t!("category_status_rescheduled"),
            ColorCategory::RoomA => t!("category_room_a"),
            ColorCategory::RoomB => t!("category_room_b"),
            ColorCategory::Uncategorized => t!("category_uncategorized"),
        }
        .to_string()
    }
}

/// One row of the calendar legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub category: ColorCategory,
    pub label: String,
    pub color: Color,
}
