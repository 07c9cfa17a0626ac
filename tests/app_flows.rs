use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tempfile::TempDir;

use urdu_reader::app::{App, Screen, Tab};
use urdu_reader::config::Config;
use urdu_reader::content::model::{Chapter, Story, VocabEntry};
use urdu_reader::content::repository::{Content, ContentRepository, ContentSource, LoadOutcome};
use urdu_reader::quiz::QuizPhase;
use urdu_reader::store::json_store::PreferenceStore;

fn offline_content() -> Content {
    ContentRepository::new(None, Duration::from_secs(1)).load_all()
}

fn two_chapter_story() -> Story {
    let chapter = |text: &str| Chapter {
        urdu_text: text.to_string(),
        transliteration: String::new(),
        english_meaning: String::new(),
        vocab: vec![VocabEntry::new("دن", "din", "day")],
        difficult_words: Vec::new(),
    };
    Story {
        id: 10,
        title: "دو باب".to_string(),
        description: "Two chapters".to_string(),
        difficulty: 1,
        chapters: vec![chapter("ایک دن"), chapter("دوسرا دن")],
    }
}

fn app_with(dir: &TempDir, stories: Vec<Story>) -> App {
    let store = PreferenceStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    let content = Content {
        stories: LoadOutcome {
            items: stories,
            source: ContentSource::Remote,
            notice: None,
        },
        grammar: LoadOutcome {
            items: Vec::new(),
            source: ContentSource::Remote,
            notice: None,
        },
    };
    App::new(Config::default(), content, Some(store))
}

#[test]
fn offline_start_uses_bundled_content_with_notice() {
    let content = offline_content();
    assert_eq!(content.stories.source, ContentSource::Embedded);
    assert_eq!(content.grammar.source, ContentSource::Embedded);
    assert!(!content.stories.items.is_empty());
    assert!(!content.grammar.items.is_empty());

    let app = App::new(Config::default(), content, None);
    assert!(app.notice.is_visible());
    assert_eq!(app.screen, Screen::Welcome);
    assert_eq!(app.tab, Tab::Stories);
}

#[test]
fn two_chapter_navigation_toggles_controls() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, vec![two_chapter_story()]);

    assert!(app.open_story(10, None));
    assert_eq!(app.current_chapter_index(), 0);
    assert!(!app.has_prev_chapter());
    assert!(app.has_next_chapter());

    assert!(app.next_chapter());
    assert_eq!(app.current_chapter_index(), 1);
    assert!(!app.has_next_chapter());
    assert!(app.has_prev_chapter());

    assert!(app.prev_chapter());
    assert_eq!(app.current_chapter_index(), 0);
    assert!(!app.has_prev_chapter());
}

#[test]
fn preferences_survive_restart() {
    let dir = TempDir::new().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    {
        let mut app = app_with(&dir, vec![two_chapter_story()]);
        app.open_story_on(10, Some(1), today);
        app.toggle_dark_mode();
        app.toggle_line_spacing();
        app.adjust_font_size(100);
        app.save_word(&VocabEntry::new("دن", "din", "day"));
    }

    let app = app_with(&dir, vec![two_chapter_story()]);
    assert!(app.prefs.dark_mode);
    assert!(app.prefs.line_spacing);
    assert_eq!(app.prefs.font_size, 40);
    assert_eq!(app.prefs.streak, 1);
    assert_eq!(app.prefs.last_visit, Some(today));
    assert_eq!(app.prefs.last_read_story_id, Some(10));
    assert_eq!(app.prefs.saved_words.len(), 1);

    let summary = app.continue_reading_summary().unwrap();
    assert_eq!(summary.chapter_number, 2);
    assert_eq!(summary.total_chapters, 2);
}

#[test]
fn continue_reading_hidden_when_story_disappears() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = app_with(&dir, vec![two_chapter_story()]);
        app.open_story(10, Some(1));
    }
    let mut app = app_with(&dir, Vec::new());
    assert!(app.continue_reading_summary().is_none());
    assert!(!app.continue_reading());
    assert_eq!(app.screen, Screen::Welcome);
}

#[test]
fn corrupt_preferences_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("preferences.json"), "{ not json").unwrap();
    let app = app_with(&dir, vec![two_chapter_story()]);
    assert_eq!(app.prefs.font_size, 20);
    assert!(app.prefs.saved_words.is_empty());
    assert!(app.alert.is_none());
}

#[test]
fn full_quiz_round_from_saved_words() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, vec![two_chapter_story()]);
    for (word, meaning) in [("دن", "day"), ("رات", "night"), ("پانی", "water"), ("آگ", "fire")] {
        app.save_word(&VocabEntry::new(word, "", meaning));
    }
    app.switch_tab(Tab::Vocabulary);
    assert!(app.start_quiz());
    assert_eq!(app.screen, Screen::Quiz);

    let total = app.quiz.as_ref().unwrap().total();
    assert_eq!(total, 4);

    let mut now = Instant::now();
    for _ in 0..total {
        let question = app.quiz.as_ref().unwrap().current_question().unwrap().clone();
        assert_eq!(question.options.len(), 4);
        assert_eq!(
            question
                .options
                .iter()
                .filter(|o| o.as_str() == question.correct_meaning())
                .count(),
            1
        );
        app.answer_quiz_at(question.answer, now).unwrap();
        now += Duration::from_millis(app.config.quiz_feedback_ms);
        app.tick(now);
    }

    let quiz = app.quiz.as_ref().unwrap();
    assert_eq!(quiz.phase(), QuizPhase::Finished);
    assert_eq!(quiz.score(), total);

    assert!(app.restart_quiz());
    let quiz = app.quiz.as_ref().unwrap();
    assert_eq!(quiz.phase(), QuizPhase::InProgress);
    assert_eq!(quiz.score(), 0);
}

#[test]
fn grammar_exercise_requires_selection() {
    let content = offline_content();
    let mut app = App::new(Config::default(), content, None);
    let index = app
        .grammar
        .iter()
        .position(|l| l.exercise.is_some())
        .unwrap();
    let correct = app.grammar[index].exercise.as_ref().unwrap().correct_answer;

    app.switch_tab(Tab::Grammar);
    assert!(app.open_lesson(index));
    assert_eq!(app.screen, Screen::Grammar);

    assert!(app.submit_exercise().is_none());
    assert_eq!(app.alert.as_deref(), Some("Please select an answer"));
    app.dismiss_alert();

    app.select_exercise_option(correct);
    let verdict = app.submit_exercise().unwrap();
    assert_eq!(verdict.message(), "Great job! Correct answer.");

    app.back();
    assert_eq!(app.tab, Tab::Grammar);
    assert_eq!(app.screen, Screen::Welcome);
}

#[test]
fn saved_word_list_management() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, vec![two_chapter_story()]);
    app.open_story(10, None);
    app.move_word_cursor(true);
    app.open_tooltip();
    assert!(app.save_tooltip_word());
    app.save_word(&VocabEntry::new("رات", "raat", "night"));

    app.switch_tab(Tab::Vocabulary);
    app.vocab_selected = 1;
    app.delete_selected_word();
    assert_eq!(app.prefs.saved_words.len(), 1);
    assert_eq!(app.vocab_selected, 0);

    app.request_clear_words();
    app.resolve_clear_words(true);
    let app = app_with(&dir, vec![two_chapter_story()]);
    assert!(app.prefs.saved_words.is_empty());
}
