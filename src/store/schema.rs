use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::content::model::VocabEntry;
use crate::vocab::SavedWords;

pub const DEFAULT_FONT_SIZE: u32 = 20;
pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 40;

/// Everything remembered between sessions, stored as one JSON record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub dark_mode: bool,
    pub font_size: u32,
    pub line_spacing: bool,
    pub show_transliteration: bool,
    pub show_english: bool,
    pub highlight_difficult: bool,
    pub saved_words: SavedWords,
    pub streak: u32,
    #[serde(deserialize_with = "lenient_date")]
    pub last_visit: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_story_id")]
    pub last_read_story_id: Option<i64>,
    pub last_read_chapter: usize,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: DEFAULT_FONT_SIZE,
            line_spacing: false,
            show_transliteration: false,
            show_english: false,
            highlight_difficult: false,
            saved_words: SavedWords::default(),
            streak: 0,
            last_visit: None,
            last_read_story_id: None,
            last_read_chapter: 0,
        }
    }
}

impl UserPreferences {
    pub fn adjust_font_size(&mut self, delta: i32) {
        let size = (self.font_size as i64 + delta as i64)
            .clamp(MIN_FONT_SIZE as i64, MAX_FONT_SIZE as i64);
        self.font_size = size as u32;
    }
}

impl UserPreferences {
    /// Build from a stored record one field at a time. A field that is
    /// missing or has the wrong shape takes its default; the rest survive.
    /// Saved words keep every well-formed entry.
    pub fn from_record(record: &Value) -> Self {
        let defaults = Self::default();
        let Some(map) = record.as_object() else {
            log::warn!("preferences record is not an object; using defaults");
            return defaults;
        };

        let saved_words = match map.get("savedWords") {
            Some(Value::Array(items)) => SavedWords::from_entries(
                items
                    .iter()
                    .filter_map(|item| VocabEntry::deserialize(item).ok())
                    .collect(),
            ),
            Some(other) => {
                log::warn!("ignoring savedWords of unexpected shape: {other}");
                defaults.saved_words
            }
            None => defaults.saved_words,
        };

        Self {
            dark_mode: field(map, "darkMode", defaults.dark_mode),
            font_size: field(map, "fontSize", defaults.font_size)
                .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            line_spacing: field(map, "lineSpacing", defaults.line_spacing),
            show_transliteration: field(map, "showTransliteration", defaults.show_transliteration),
            show_english: field(map, "showEnglish", defaults.show_english),
            highlight_difficult: field(map, "highlightDifficult", defaults.highlight_difficult),
            saved_words,
            streak: field(map, "streak", defaults.streak),
            last_visit: map
                .get("lastVisit")
                .and_then(|v| lenient_date(v).ok())
                .flatten(),
            last_read_story_id: map
                .get("lastReadStoryId")
                .and_then(|v| lenient_story_id(v).ok())
                .flatten(),
            last_read_chapter: field(map, "lastReadChapter", defaults.last_read_chapter),
        }
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str, fallback: T) -> T {
    match map.get(key) {
        None | Some(Value::Null) => fallback,
        Some(value) => T::deserialize(value).unwrap_or_else(|e| {
            log::warn!("ignoring preference {key}: {e}");
            fallback
        }),
    }
}

/// ISO dates, plus the `Mon Oct 19 2026` form older records carry.
/// Anything else reads as no visit.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let Some(Value::String(text)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let text = text.trim();
    Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%a %b %d %Y"))
        .ok())
}

/// Story ids were sometimes written as strings; accept both.
fn lenient_story_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Number(id)) => Some(id),
        Some(RawId::Text(text)) => text.trim().parse().ok(),
        Some(RawId::Other(_)) | None => None,
    })
}
