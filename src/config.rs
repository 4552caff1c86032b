use crate::components::availability::{Room, DEFAULT_ROOMS};
use crate::error::{config_error, env_error, AssistantResult};
use crate::utils::time::parse_hour_boundary;
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// First bookable hour of the business day
pub const DEFAULT_BUSINESS_START: &str = "09:00";
/// End of the business day; the last slot ends here
pub const DEFAULT_BUSINESS_END: &str = "17:00";
/// Days scanned for open slots, starting today
pub const DEFAULT_HORIZON_DAYS: u32 = 2;
/// Room alternatives turned into candidates per slot
pub const DEFAULT_ALTERNATIVES_PER_SLOT: usize = 2;
/// Upper bound on suggestions returned from one run
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
/// Trailing window of past events consulted when generating subjects
pub const DEFAULT_HISTORY_DAYS: i64 = 30;
/// Longest accepted suggestion horizon
pub const MAX_HORIZON_DAYS: u32 = 366;
/// Longest accepted subject history window
pub const MAX_HISTORY_DAYS: i64 = 3650;

/// Optional file overriding the suggestion defaults
pub const SUGGESTIONS_CONFIG_PATH: &str = "config/suggestions.toml";
/// Default location of the calendar snapshot
pub const DEFAULT_CALENDAR_SNAPSHOT: &str = "data/calendar.json";

/// Tunables of the suggestion engine
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionConfig {
    pub business_start_hour: u32,
    /// Exclusive; `17` means the last slot is 16:00-17:00
    pub business_end_hour: u32,
    pub horizon_days: u32,
    pub alternatives_per_slot: usize,
    pub max_suggestions: usize,
    pub history_days: i64,
    /// Display name of the person running the assistant
    pub operator_name: Option<String>,
    pub rooms: Vec<Room>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            business_start_hour: 9,
            business_end_hour: 17,
            horizon_days: DEFAULT_HORIZON_DAYS,
            alternatives_per_slot: DEFAULT_ALTERNATIVES_PER_SLOT,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            history_days: DEFAULT_HISTORY_DAYS,
            operator_name: None,
            rooms: DEFAULT_ROOMS.clone(),
        }
    }
}

/// On-disk shape of `config/suggestions.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuggestionsFile {
    business_start: Option<String>,
    business_end: Option<String>,
    horizon_days: Option<u32>,
    alternatives_per_slot: Option<usize>,
    max_suggestions: Option<usize>,
    history_days: Option<i64>,
    operator_name: Option<String>,
    rooms: Option<Vec<Room>>,
}

impl SuggestionConfig {
    /// Parse a TOML document and merge it over the defaults
    pub fn from_toml_str(content: &str) -> AssistantResult<Self> {
        let file: SuggestionsFile = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(start) = file.business_start {
            config.business_start_hour = parse_hour_boundary(&start)
                .ok_or_else(|| config_error(&format!("Invalid business_start '{}'", start)))?;
        }
        if let Some(end) = file.business_end {
            config.business_end_hour = parse_hour_boundary(&end)
                .ok_or_else(|| config_error(&format!("Invalid business_end '{}'", end)))?;
        }
        if let Some(days) = file.horizon_days {
            if days > MAX_HORIZON_DAYS {
                return Err(config_error(&format!(
                    "horizon_days {} exceeds the maximum of {}",
                    days, MAX_HORIZON_DAYS
                )));
            }
            config.horizon_days = days;
        }
        if let Some(count) = file.alternatives_per_slot {
            config.alternatives_per_slot = count;
        }
        if let Some(count) = file.max_suggestions {
            config.max_suggestions = count;
        }
        if let Some(days) = file.history_days {
            if !(0..=MAX_HISTORY_DAYS).contains(&days) {
                return Err(config_error(&format!(
                    "history_days {} is outside 0..={}",
                    days, MAX_HISTORY_DAYS
                )));
            }
            config.history_days = days;
        }
        if file.operator_name.is_some() {
            config.operator_name = file.operator_name;
        }
        if let Some(rooms) = file.rooms {
            if rooms.is_empty() {
                return Err(config_error("At least one room must be configured"));
            }
            config.rooms = rooms;
        }

        Ok(config)
    }

    /// Read tunables from a TOML file; a missing file means defaults
    pub fn from_file(path: &Path) -> AssistantResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Business hours as a range of slot start hours
    pub fn slot_hours(&self) -> std::ops::Range<u32> {
        self.business_start_hour..self.business_end_hour.min(24)
    }
}

/// Main configuration structure for the assistant
#[derive(Debug, Clone)]
pub struct Config {
    /// IANA timezone of the shared calendar
    pub timezone: String,
    /// Locale for generated text
    pub locale: String,
    /// JSON snapshot read by the calendar store
    pub calendar_snapshot: PathBuf,
    pub suggestions: SuggestionConfig,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AssistantResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from("UTC"));
        timezone
            .parse::<Tz>()
            .map_err(|_| env_error("TIMEZONE"))?;

        let locale = env::var("ASSISTANT_LOCALE").unwrap_or_else(|_| String::from("en"));
        let calendar_snapshot = env::var("CALENDAR_SNAPSHOT")
            .unwrap_or_else(|_| String::from(DEFAULT_CALENDAR_SNAPSHOT))
            .into();

        // Suggestion tunables from file if it exists
        let mut suggestions = SuggestionConfig::from_file(Path::new(SUGGESTIONS_CONFIG_PATH))?;

        // Environment wins over the file for the operator name
        if let Ok(name) = env::var("OPERATOR_NAME") {
            if !name.trim().is_empty() {
                suggestions.operator_name = Some(name.trim().to_string());
            }
        }

        Ok(Config {
            timezone,
            locale,
            calendar_snapshot,
            suggestions,
        })
    }

    /// Parsed calendar timezone
    pub fn tz(&self) -> AssistantResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone '{}'", self.timezone)))
    }

    /// Current wall-clock time on the calendar's local clock
    pub fn local_now(&self) -> AssistantResult<NaiveDateTime> {
        Ok(Utc::now().with_timezone(&self.tz()?).naive_local())
    }
}
