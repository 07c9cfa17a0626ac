use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::content::filter::{self, StoryFilter};
use crate::content::model::{Chapter, GrammarLesson, Story, VocabEntry};
use crate::content::repository::Content;
use crate::exercise::{ExerciseError, ExerciseState, Verdict};
use crate::notice::Notice;
use crate::quiz::{AnswerFeedback, QuizError, QuizPhase, QuizSession};
use crate::store::json_store::PreferenceStore;
use crate::store::schema::UserPreferences;
use crate::streak;
use crate::text::{AnnotatedToken, annotate_chapter};
use crate::ui::theme::Theme;
use crate::vocab::VocabError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Stories,
    Grammar,
    Vocabulary,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Stories, Tab::Grammar, Tab::Vocabulary];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Stories => "Stories",
            Tab::Grammar => "Grammar",
            Tab::Vocabulary => "Vocabulary",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Stories => Tab::Grammar,
            Tab::Grammar => Tab::Vocabulary,
            Tab::Vocabulary => Tab::Stories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::Stories => Tab::Vocabulary,
            Tab::Grammar => Tab::Stories,
            Tab::Vocabulary => Tab::Grammar,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Reading,
    Grammar,
    Quiz,
}

/// The "continue reading" line on the welcome screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContinueReading<'a> {
    pub story: &'a Story,
    /// One-based chapter to resume at.
    pub chapter_number: usize,
    pub total_chapters: usize,
}

pub struct App {
    pub tab: Tab,
    pub screen: Screen,
    pub stories: Vec<Story>,
    pub grammar: Vec<GrammarLesson>,
    pub prefs: UserPreferences,
    pub config: Config,
    pub theme: Theme,
    pub notice: Notice,
    /// Blocking validation message; input is swallowed until dismissed.
    pub alert: Option<String>,
    pub confirm_clear: bool,
    pub filter: StoryFilter,
    pub search_editing: bool,
    pub story_selected: usize,
    pub grammar_selected: usize,
    pub vocab_selected: usize,
    pub word_cursor: Option<usize>,
    pub tooltip_open: bool,
    pub exercise: ExerciseState,
    pub quiz: Option<QuizSession>,
    pub should_quit: bool,
    current_story: Option<usize>,
    current_chapter: usize,
    current_lesson: Option<usize>,
    quiz_advance_at: Option<Instant>,
    store: Option<PreferenceStore>,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, content: Content, store: Option<PreferenceStore>) -> Self {
        let prefs = store.as_ref().map(|s| s.load()).unwrap_or_default();
        let theme = Theme::load(config.theme_name(prefs.dark_mode)).unwrap_or_default();

        let mut notice = Notice::default();
        for message in [content.stories.notice, content.grammar.notice]
            .into_iter()
            .flatten()
        {
            notice.show(message);
        }

        Self {
            tab: Tab::Stories,
            screen: Screen::Welcome,
            stories: content.stories.items,
            grammar: content.grammar.items,
            prefs,
            config,
            theme,
            notice,
            alert: None,
            confirm_clear: false,
            filter: StoryFilter::default(),
            search_editing: false,
            story_selected: 0,
            grammar_selected: 0,
            vocab_selected: 0,
            word_cursor: None,
            tooltip_open: false,
            exercise: ExerciseState::default(),
            quiz: None,
            should_quit: false,
            current_story: None,
            current_chapter: 0,
            current_lesson: None,
            quiz_advance_at: None,
            store,
            rng: SmallRng::from_entropy(),
        }
    }

    fn persist(&self) {
        if let Some(ref store) = self.store
            && let Err(e) = store.save(&self.prefs)
        {
            log::error!("failed to save preferences: {e:#}");
        }
    }

    fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // Navigation

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.show_welcome();
        self.quiz = None;
        self.quiz_advance_at = None;
        self.confirm_clear = false;
        self.search_editing = false;
        self.clamp_selections();
    }

    pub fn show_welcome(&mut self) {
        self.screen = Screen::Welcome;
        self.close_tooltip();
    }

    pub fn back(&mut self) {
        match self.screen {
            Screen::Welcome => {}
            Screen::Reading => self.show_welcome(),
            Screen::Grammar => self.switch_tab(Tab::Grammar),
            Screen::Quiz => self.switch_tab(Tab::Vocabulary),
        }
    }

    fn clamp_selections(&mut self) {
        let visible = self.visible_story_count();
        self.story_selected = self.story_selected.min(visible.saturating_sub(1));
        self.grammar_selected = self
            .grammar_selected
            .min(self.grammar.len().saturating_sub(1));
        self.vocab_selected = self
            .vocab_selected
            .min(self.prefs.saved_words.len().saturating_sub(1));
    }

    /// Move the sidebar selection of the active tab by `delta` rows.
    pub fn move_selection(&mut self, delta: isize) {
        let len = match self.tab {
            Tab::Stories => self.visible_story_count(),
            Tab::Grammar => self.grammar.len(),
            Tab::Vocabulary => self.prefs.saved_words.len(),
        };
        let selected = match self.tab {
            Tab::Stories => &mut self.story_selected,
            Tab::Grammar => &mut self.grammar_selected,
            Tab::Vocabulary => &mut self.vocab_selected,
        };
        if len == 0 {
            *selected = 0;
            return;
        }
        *selected = selected.saturating_add_signed(delta).min(len - 1);
    }

    // Story listing

    pub fn story_groups(&self) -> BTreeMap<u32, Vec<&Story>> {
        filter::group_by_difficulty(self.filter.apply(&self.stories))
    }

    /// Filtered stories in display order: ascending level, source order within.
    pub fn visible_stories(&self) -> Vec<&Story> {
        self.story_groups().into_values().flatten().collect()
    }

    fn visible_story_count(&self) -> usize {
        self.stories.iter().filter(|s| self.filter.matches(s)).count()
    }

    pub fn cycle_difficulty_filter(&mut self) {
        let levels = filter::levels(&self.stories);
        self.filter.cycle_difficulty(&levels);
        self.story_selected = 0;
    }

    pub fn begin_search(&mut self) {
        self.search_editing = true;
    }

    pub fn end_search(&mut self) {
        self.search_editing = false;
    }

    pub fn search_push(&mut self, text: &str) {
        self.filter.search.push_str(text);
        self.story_selected = 0;
    }

    pub fn search_pop(&mut self) {
        self.filter.search.pop();
        self.story_selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.filter.search.clear();
        self.story_selected = 0;
    }

    // Reading

    pub fn story_by_id(&self, id: i64) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    pub fn current_story(&self) -> Option<&Story> {
        self.current_story.and_then(|idx| self.stories.get(idx))
    }

    pub fn current_chapter_index(&self) -> usize {
        self.current_chapter
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.current_story()
            .and_then(|s| s.chapters.get(self.current_chapter))
    }

    pub fn open_selected_story(&mut self) -> bool {
        let Some(id) = self.visible_stories().get(self.story_selected).map(|s| s.id) else {
            return false;
        };
        self.open_story(id, None)
    }

    pub fn open_story(&mut self, id: i64, chapter: Option<usize>) -> bool {
        self.open_story_on(id, chapter, Local::now().date_naive())
    }

    /// Open a story at `chapter` (clamped), recording the visit as happening on `today`.
    pub fn open_story_on(&mut self, id: i64, chapter: Option<usize>, today: NaiveDate) -> bool {
        let Some(idx) = self.stories.iter().position(|s| s.id == id) else {
            log::warn!("story {id} not found");
            return false;
        };
        self.current_story = Some(idx);
        self.current_chapter = self.stories[idx].clamp_chapter(chapter.unwrap_or(0));
        self.screen = Screen::Reading;
        self.reset_word_cursor();
        self.record_last_read();

        self.prefs.streak = streak::touch(self.prefs.streak, self.prefs.last_visit, today);
        self.prefs.last_visit = Some(today);
        self.persist();
        true
    }

    fn record_last_read(&mut self) {
        if let Some(story) = self.current_story() {
            self.prefs.last_read_story_id = Some(story.id);
            self.prefs.last_read_chapter = self.current_chapter;
        }
    }

    pub fn continue_reading_summary(&self) -> Option<ContinueReading<'_>> {
        let story = self.story_by_id(self.prefs.last_read_story_id?)?;
        let total = story.chapter_count();
        Some(ContinueReading {
            story,
            chapter_number: (self.prefs.last_read_chapter + 1).clamp(1, total.max(1)),
            total_chapters: total,
        })
    }

    pub fn continue_reading(&mut self) -> bool {
        let Some(id) = self.continue_reading_summary().map(|c| c.story.id) else {
            return false;
        };
        self.open_story(id, Some(self.prefs.last_read_chapter))
    }

    pub fn has_prev_chapter(&self) -> bool {
        self.current_story.is_some() && self.current_chapter > 0
    }

    pub fn has_next_chapter(&self) -> bool {
        self.current_story()
            .is_some_and(|s| self.current_chapter + 1 < s.chapter_count())
    }

    pub fn shows_chapter_nav(&self) -> bool {
        self.current_story().is_some_and(|s| s.chapter_count() > 1)
    }

    pub fn next_chapter(&mut self) -> bool {
        if !self.has_next_chapter() {
            return false;
        }
        self.current_chapter += 1;
        self.after_chapter_change();
        true
    }

    pub fn prev_chapter(&mut self) -> bool {
        if !self.has_prev_chapter() {
            return false;
        }
        self.current_chapter -= 1;
        self.after_chapter_change();
        true
    }

    fn after_chapter_change(&mut self) {
        self.reset_word_cursor();
        self.record_last_read();
        self.persist();
    }

    pub fn current_tokens(&self) -> Vec<AnnotatedToken<'_>> {
        self.current_chapter()
            .map(annotate_chapter)
            .unwrap_or_default()
    }

    fn interactive_positions(&self) -> Vec<usize> {
        self.current_tokens()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_interactive())
            .map(|(i, _)| i)
            .collect()
    }

    fn reset_word_cursor(&mut self) {
        self.word_cursor = None;
        self.tooltip_open = false;
    }

    /// Step the word cursor through vocabulary tokens, wrapping at the ends.
    pub fn move_word_cursor(&mut self, forward: bool) {
        let positions = self.interactive_positions();
        if positions.is_empty() {
            self.word_cursor = None;
            return;
        }
        let next = match self.word_cursor.and_then(|c| positions.iter().position(|&p| p == c)) {
            None if forward => 0,
            None => positions.len() - 1,
            Some(i) if forward => (i + 1) % positions.len(),
            Some(i) => (i + positions.len() - 1) % positions.len(),
        };
        self.word_cursor = Some(positions[next]);
        self.tooltip_open = false;
    }

    pub fn open_tooltip(&mut self) {
        self.tooltip_open = self.tooltip_entry_at_cursor().is_some();
    }

    pub fn close_tooltip(&mut self) {
        self.tooltip_open = false;
    }

    fn tooltip_entry_at_cursor(&self) -> Option<&VocabEntry> {
        let cursor = self.word_cursor?;
        self.current_tokens().get(cursor)?.vocab
    }

    pub fn tooltip_entry(&self) -> Option<&VocabEntry> {
        if !self.tooltip_open {
            return None;
        }
        self.tooltip_entry_at_cursor()
    }

    // Display preferences

    pub fn toggle_dark_mode(&mut self) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        if let Some(theme) = Theme::load(self.config.theme_name(self.prefs.dark_mode)) {
            self.theme = theme;
        }
        self.persist();
    }

    pub fn toggle_transliteration(&mut self) {
        self.prefs.show_transliteration = !self.prefs.show_transliteration;
        self.persist();
    }

    pub fn toggle_english(&mut self) {
        self.prefs.show_english = !self.prefs.show_english;
        self.persist();
    }

    pub fn toggle_highlight_difficult(&mut self) {
        self.prefs.highlight_difficult = !self.prefs.highlight_difficult;
        self.persist();
    }

    pub fn toggle_line_spacing(&mut self) {
        self.prefs.line_spacing = !self.prefs.line_spacing;
        self.persist();
    }

    pub fn adjust_font_size(&mut self, delta: i32) {
        self.prefs.adjust_font_size(delta);
        self.persist();
    }

    // Saved vocabulary

    pub fn is_saved(&self, word: &str) -> bool {
        self.prefs.saved_words.contains(word)
    }

    /// Save a copy of `entry`. No-op (and no write) when already saved.
    pub fn save_word(&mut self, entry: &VocabEntry) -> bool {
        if !self.prefs.saved_words.insert(entry.clone()) {
            return false;
        }
        self.persist();
        true
    }

    pub fn save_tooltip_word(&mut self) -> bool {
        let Some(entry) = self.tooltip_entry().cloned() else {
            return false;
        };
        self.save_word(&entry)
    }

    pub fn delete_saved_word(&mut self, index: usize) -> Result<VocabEntry, VocabError> {
        let removed = self.prefs.saved_words.remove(index)?;
        self.persist();
        self.clamp_selections();
        Ok(removed)
    }

    pub fn delete_selected_word(&mut self) {
        if self.prefs.saved_words.is_empty() {
            return;
        }
        if let Err(e) = self.delete_saved_word(self.vocab_selected) {
            log::warn!("{e}");
        }
    }

    pub fn request_clear_words(&mut self) {
        if !self.prefs.saved_words.is_empty() {
            self.confirm_clear = true;
        }
    }

    pub fn resolve_clear_words(&mut self, confirmed: bool) {
        self.confirm_clear = false;
        if confirmed {
            self.prefs.saved_words.clear();
            self.vocab_selected = 0;
            self.persist();
        }
    }

    // Grammar

    pub fn current_lesson(&self) -> Option<&GrammarLesson> {
        self.current_lesson.and_then(|idx| self.grammar.get(idx))
    }

    pub fn open_lesson(&mut self, index: usize) -> bool {
        if index >= self.grammar.len() {
            return false;
        }
        self.current_lesson = Some(index);
        self.exercise = ExerciseState::default();
        self.screen = Screen::Grammar;
        true
    }

    pub fn open_selected_lesson(&mut self) -> bool {
        self.open_lesson(self.grammar_selected)
    }

    pub fn select_exercise_option(&mut self, option: usize) {
        let Some(exercise) = self.current_lesson().and_then(|l| l.exercise.clone()) else {
            return;
        };
        match self.exercise.select(&exercise, option) {
            Ok(()) | Err(ExerciseError::AlreadySubmitted) => {}
            Err(e) => log::debug!("exercise selection ignored: {e}"),
        }
    }

    pub fn submit_exercise(&mut self) -> Option<Verdict> {
        let exercise = self.current_lesson().and_then(|l| l.exercise.clone())?;
        match self.exercise.submit(&exercise) {
            Ok(verdict) => Some(verdict),
            Err(ExerciseError::NoSelection) => {
                self.show_alert(ExerciseError::NoSelection.to_string());
                None
            }
            Err(_) => None,
        }
    }

    // Quiz

    pub fn start_quiz(&mut self) -> bool {
        match QuizSession::start(
            self.prefs.saved_words.as_slice(),
            self.config.quiz_questions,
            &mut self.rng,
        ) {
            Ok(session) => {
                self.quiz = Some(session);
                self.quiz_advance_at = None;
                self.screen = Screen::Quiz;
                true
            }
            Err(e) => {
                self.show_alert(e.to_string());
                false
            }
        }
    }

    pub fn restart_quiz(&mut self) -> bool {
        let Some(ref mut quiz) = self.quiz else {
            return false;
        };
        if quiz.phase() != QuizPhase::Finished {
            return false;
        }
        match quiz.restart(self.prefs.saved_words.as_slice(), &mut self.rng) {
            Ok(()) => {
                self.quiz_advance_at = None;
                true
            }
            Err(e) => {
                self.quiz = None;
                self.screen = Screen::Welcome;
                self.show_alert(e.to_string());
                false
            }
        }
    }

    pub fn answer_quiz(&mut self, option: usize) -> Result<AnswerFeedback, QuizError> {
        self.answer_quiz_at(option, Instant::now())
    }

    pub fn answer_quiz_at(
        &mut self,
        option: usize,
        now: Instant,
    ) -> Result<AnswerFeedback, QuizError> {
        let quiz = self.quiz.as_mut().ok_or(QuizError::Finished)?;
        let feedback = quiz.answer(option)?;
        self.quiz_advance_at = Some(now + Duration::from_millis(self.config.quiz_feedback_ms));
        Ok(feedback)
    }

    /// Run deferred transitions that are due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(due) = self.quiz_advance_at
            && now >= due
        {
            self.quiz_advance_at = None;
            if let Some(ref mut quiz) = self.quiz {
                quiz.advance();
            }
        }
    }

    pub fn quiz_locked(&self) -> bool {
        self.quiz_advance_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repository::{ContentSource, LoadOutcome};
    use tempfile::TempDir;

    fn chapter(text: &str, vocab: Vec<VocabEntry>) -> Chapter {
        Chapter {
            urdu_text: text.to_string(),
            transliteration: String::new(),
            english_meaning: String::new(),
            vocab,
            difficult_words: Vec::new(),
        }
    }

    fn stories() -> Vec<Story> {
        vec![
            Story {
                id: 1,
                title: "پیاسا کوا".to_string(),
                description: "The thirsty crow".to_string(),
                difficulty: 2,
                chapters: vec![
                    chapter(
                        "ایک دن ایک کوا",
                        vec![
                            VocabEntry::new("دن", "din", "day"),
                            VocabEntry::new("کوا", "kawwa", "crow"),
                        ],
                    ),
                    chapter("پانی", vec![VocabEntry::new("پانی", "paani", "water")]),
                ],
            },
            Story {
                id: 2,
                title: "بلی".to_string(),
                description: "A cat".to_string(),
                difficulty: 1,
                chapters: vec![chapter("بلی", vec![])],
            },
        ]
    }

    fn content(stories: Vec<Story>) -> Content {
        Content {
            stories: LoadOutcome {
                items: stories,
                source: ContentSource::Embedded,
                notice: None,
            },
            grammar: LoadOutcome {
                items: Vec::new(),
                source: ContentSource::Embedded,
                notice: None,
            },
        }
    }

    fn make_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        let app = App::new(Config::default(), content(stories()), Some(store));
        (dir, app)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn test_tab_switch_resets_screen() {
        let (_dir, mut app) = make_app();
        app.open_story(1, None);
        assert_eq!(app.screen, Screen::Reading);
        app.switch_tab(Tab::Grammar);
        assert_eq!(app.tab, Tab::Grammar);
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[test]
    fn test_open_story_clamps_chapter() {
        let (_dir, mut app) = make_app();
        assert!(app.open_story(1, Some(99)));
        assert_eq!(app.current_chapter_index(), 1);
        assert!(!app.open_story(42, None));
    }

    #[test]
    fn test_chapter_navigation_bounds() {
        let (_dir, mut app) = make_app();
        app.open_story(1, None);
        assert!(!app.has_prev_chapter());
        assert!(app.next_chapter());
        assert!(!app.has_next_chapter());
        assert!(!app.next_chapter());
        assert_eq!(app.prefs.last_read_chapter, 1);
        assert!(app.prev_chapter());
        assert_eq!(app.prefs.last_read_chapter, 0);
    }

    #[test]
    fn test_single_chapter_story_hides_nav() {
        let (_dir, mut app) = make_app();
        app.open_story(2, None);
        assert!(!app.shows_chapter_nav());
        app.open_story(1, None);
        assert!(app.shows_chapter_nav());
    }

    #[test]
    fn test_streak_updates_on_story_open() {
        let (_dir, mut app) = make_app();
        app.open_story_on(1, None, day(1));
        assert_eq!(app.prefs.streak, 1);
        app.open_story_on(2, None, day(1));
        assert_eq!(app.prefs.streak, 1);
        app.open_story_on(1, None, day(2));
        assert_eq!(app.prefs.streak, 2);
        app.open_story_on(1, None, day(5));
        assert_eq!(app.prefs.streak, 1);
        assert_eq!(app.prefs.last_visit, Some(day(5)));
    }

    #[test]
    fn test_continue_summary() {
        let (_dir, mut app) = make_app();
        assert!(app.continue_reading_summary().is_none());
        app.open_story(1, Some(1));
        let summary = app.continue_reading_summary().unwrap();
        assert_eq!(summary.story.id, 1);
        assert_eq!(summary.chapter_number, 2);
        assert_eq!(summary.total_chapters, 2);
    }

    #[test]
    fn test_continue_hidden_for_missing_story() {
        let (_dir, mut app) = make_app();
        app.prefs.last_read_story_id = Some(77);
        assert!(app.continue_reading_summary().is_none());
        assert!(!app.continue_reading());
    }

    #[test]
    fn test_continue_clamps_stale_chapter() {
        let (_dir, mut app) = make_app();
        app.prefs.last_read_story_id = Some(1);
        app.prefs.last_read_chapter = 9;
        assert_eq!(app.continue_reading_summary().unwrap().chapter_number, 2);
        assert!(app.continue_reading());
        assert_eq!(app.current_chapter_index(), 1);
    }

    #[test]
    fn test_visible_stories_grouped_by_level() {
        let (_dir, mut app) = make_app();
        let ids: Vec<i64> = app.visible_stories().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
        app.search_push("crow");
        let ids: Vec<i64> = app.visible_stories().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1]);
        assert!(app.open_selected_story());
        assert_eq!(app.current_story().unwrap().id, 1);
    }

    #[test]
    fn test_word_cursor_and_tooltip_save() {
        let (_dir, mut app) = make_app();
        app.open_story(1, None);
        app.move_word_cursor(true);
        assert_eq!(app.word_cursor, Some(1));
        app.open_tooltip();
        assert_eq!(app.tooltip_entry().unwrap().word, "دن");
        assert!(app.save_tooltip_word());
        assert!(!app.save_tooltip_word());
        assert!(app.is_saved("دن"));
        app.move_word_cursor(true);
        assert_eq!(app.word_cursor, Some(3));
        app.move_word_cursor(true);
        assert_eq!(app.word_cursor, Some(1));
        app.move_word_cursor(false);
        assert_eq!(app.word_cursor, Some(3));
    }

    #[test]
    fn test_quiz_requires_three_words() {
        let (_dir, mut app) = make_app();
        app.save_word(&VocabEntry::new("دن", "din", "day"));
        assert!(!app.start_quiz());
        assert!(app.alert.as_deref().unwrap().contains("at least 3"));
        assert!(app.quiz.is_none());
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[test]
    fn test_quiz_answer_locks_until_tick() {
        let (_dir, mut app) = make_app();
        for (w, m) in [("دن", "day"), ("رات", "night"), ("پانی", "water")] {
            app.save_word(&VocabEntry::new(w, "", m));
        }
        assert!(app.start_quiz());
        let t0 = Instant::now();
        let correct = app.quiz.as_ref().unwrap().current_question().unwrap().answer;
        app.answer_quiz_at(correct, t0).unwrap();
        assert!(app.quiz_locked());
        assert_eq!(app.answer_quiz_at(correct, t0), Err(QuizError::AlreadyAnswered));

        app.tick(t0 + Duration::from_millis(100));
        assert_eq!(app.quiz.as_ref().unwrap().current_index(), 0);
        app.tick(t0 + Duration::from_millis(1500));
        assert_eq!(app.quiz.as_ref().unwrap().current_index(), 1);
        assert_eq!(app.quiz.as_ref().unwrap().score(), 1);
        assert!(!app.quiz_locked());
    }

    #[test]
    fn test_leaving_quiz_discards_it() {
        let (_dir, mut app) = make_app();
        for w in ["a", "b", "c"] {
            app.save_word(&VocabEntry::new(w, "", w));
        }
        app.switch_tab(Tab::Vocabulary);
        app.start_quiz();
        app.back();
        assert!(app.quiz.is_none());
        assert_eq!(app.tab, Tab::Vocabulary);
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let (_dir, mut app) = make_app();
        app.save_word(&VocabEntry::new("دن", "din", "day"));
        app.request_clear_words();
        assert!(app.confirm_clear);
        app.resolve_clear_words(false);
        assert_eq!(app.prefs.saved_words.len(), 1);
        app.request_clear_words();
        app.resolve_clear_words(true);
        assert!(app.prefs.saved_words.is_empty());
    }

    #[test]
    fn test_delete_out_of_range() {
        let (_dir, mut app) = make_app();
        assert_eq!(
            app.delete_saved_word(0),
            Err(VocabError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_notices_from_loading() {
        let mut c = content(stories());
        c.grammar.notice = Some("Using inline grammar data because fetch failed.");
        let app = App::new(Config::default(), c, None);
        assert_eq!(
            app.notice.message(),
            Some("Using inline grammar data because fetch failed.")
        );
    }
}
