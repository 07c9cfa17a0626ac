use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::store::schema::UserPreferences;

pub const PREFERENCES_FILE: &str = "preferences.json";

/// Write-through storage for [`UserPreferences`] in a per-user data directory.
pub struct PreferenceStore {
    base_dir: PathBuf,
}

impl PreferenceStore {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(default_data_dir())
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self) -> PathBuf {
        self.base_dir.join(PREFERENCES_FILE)
    }

    /// Missing or unreadable records yield defaults rather than an error.
    pub fn load(&self) -> UserPreferences {
        let path = self.file_path();
        if !path.exists() {
            return UserPreferences::default();
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                return UserPreferences::default();
            }
        };
        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(record) => UserPreferences::from_record(&record),
            Err(e) => {
                log::warn!("discarding corrupt preferences in {}: {e}", path.display());
                UserPreferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &UserPreferences) -> Result<()> {
        let path = self.file_path();
        let tmp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(prefs)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("urdu-reader")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::VocabEntry;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, PreferenceStore) {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, store) = make_test_store();
        assert_eq!(store.load(), UserPreferences::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let (_dir, store) = make_test_store();
        fs::write(store.file_path(), "{\"darkMode\": tru").unwrap();
        assert_eq!(store.load(), UserPreferences::default());
    }

    #[test]
    fn test_wrong_type_keeps_other_fields() {
        let (_dir, store) = make_test_store();
        fs::write(
            store.file_path(),
            r#"{"fontSize": "huge", "streak": 3, "lastVisit": "Mon Oct 19 2026",
                "savedWords": [{"word": "دن", "transliteration": "din", "meaning": "day"}]}"#,
        )
        .unwrap();
        let prefs = store.load();
        assert_eq!(prefs.font_size, 20);
        assert_eq!(prefs.streak, 3);
        assert_eq!(prefs.saved_words.len(), 1);
        assert_eq!(prefs.last_visit, NaiveDate::from_ymd_opt(2026, 10, 19));
    }

    #[test]
    fn test_round_trip() {
        let (_dir, store) = make_test_store();
        let mut prefs = UserPreferences::default();
        prefs.dark_mode = true;
        prefs.font_size = 26;
        prefs.streak = 4;
        prefs.last_visit = NaiveDate::from_ymd_opt(2024, 1, 31);
        prefs.last_read_story_id = Some(2);
        prefs.last_read_chapter = 1;
        prefs.saved_words.insert(VocabEntry::new("دن", "din", "day"));
        store.save(&prefs).unwrap();

        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (dir, store) = make_test_store();
        store.save(&UserPreferences::default()).unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(leftovers.is_empty(), "no residual .tmp files");
        assert!(store.file_path().exists());
    }
}
