use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use urdu_reader::app::{App, Screen, Tab};
use urdu_reader::config::Config;
use urdu_reader::content::repository::ContentRepository;
use urdu_reader::event::{AppEvent, EventHandler};
use urdu_reader::logging;
use urdu_reader::store::json_store::PreferenceStore;
use urdu_reader::ui::components::grammar_view::GrammarView;
use urdu_reader::ui::components::popup::{AlertPopup, NoticeBanner, WordTooltip};
use urdu_reader::ui::components::quiz_view::QuizView;
use urdu_reader::ui::components::reading_view::ReadingView;
use urdu_reader::ui::components::sidebar::{LessonList, SavedWordList, StoryList};
use urdu_reader::ui::components::welcome::Welcome;
use urdu_reader::ui::layout::{AppLayout, pack_hint_lines};

#[derive(Parser)]
#[command(
    name = "urdu-reader",
    version,
    about = "Read Urdu stories with inline vocabulary, grammar lessons and quizzes"
)]
struct Cli {
    #[arg(long, help = "Base URL serving stories.json and grammar.json")]
    content_url: Option<String>,

    #[arg(long, help = "Skip the network and use the bundled content")]
    offline: bool,

    #[arg(long, help = "Directory for preferences and the log file")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Log level (error, warn, info, debug, trace)")]
    log_level: Option<String>,

    #[arg(long, help = "Write the effective configuration to the config file and exit")]
    write_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Some(url) = cli.content_url {
        config.content_url = url;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.to_string_lossy().to_string();
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.validate();

    if cli.write_config {
        config.save()?;
        println!("wrote {}", Config::config_path().display());
        return Ok(());
    }

    let data_dir = config.data_path();
    if let Err(e) = logging::init(&data_dir, &config.log_level) {
        eprintln!("logging disabled: {e:#}");
    }
    if let Some(e) = config_error {
        log::warn!("config unreadable, using defaults: {e:#}");
    }

    let store = match PreferenceStore::with_base_dir(data_dir) {
        Ok(store) => Some(store),
        Err(e) => {
            log::error!("preferences will not be saved: {e:#}");
            None
        }
    };

    let base_url = if cli.offline {
        None
    } else {
        config.content_base_url()
    };
    let repository =
        ContentRepository::new(base_url, Duration::from_secs(config.fetch_timeout_secs));
    let content = repository.load_all();

    let mut app = App::new(config, content, store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("{err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Paste(text) => {
                if app.search_editing {
                    app.search_push(text.trim());
                }
            }
            AppEvent::Tick | AppEvent::Resize => {}
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Modal states swallow input
    if app.alert.is_some() {
        app.dismiss_alert();
        return;
    }
    if app.confirm_clear {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.resolve_clear_words(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.resolve_clear_words(false)
            }
            _ => {}
        }
        return;
    }
    if app.search_editing {
        match key.code {
            KeyCode::Esc => {
                app.clear_search();
                app.end_search();
            }
            KeyCode::Enter | KeyCode::Down => app.end_search(),
            KeyCode::Backspace => app.search_pop(),
            KeyCode::Char(ch) => app.search_push(ch.encode_utf8(&mut [0; 4])),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => return app.switch_tab(app.tab.next()),
        KeyCode::BackTab => return app.switch_tab(app.tab.prev()),
        KeyCode::Char('D') => return app.toggle_dark_mode(),
        KeyCode::Char('N') => return app.notice.dismiss(),
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Welcome => handle_listing_key(app, key),
        Screen::Reading => handle_reading_key(app, key),
        Screen::Grammar => handle_grammar_key(app, key),
        Screen::Quiz => handle_quiz_key(app, key),
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1),
        KeyCode::Char('c') => {
            app.continue_reading();
        }
        KeyCode::Esc => app.should_quit = true,
        _ => {}
    }

    match (app.tab, key.code) {
        (Tab::Stories, KeyCode::Enter) => {
            app.open_selected_story();
        }
        (Tab::Stories, KeyCode::Char('/')) => app.begin_search(),
        (Tab::Stories, KeyCode::Char('f')) => app.cycle_difficulty_filter(),
        (Tab::Grammar, KeyCode::Enter) => {
            app.open_selected_lesson();
        }
        (Tab::Vocabulary, KeyCode::Char('s')) => {
            app.start_quiz();
        }
        (Tab::Vocabulary, KeyCode::Char('x') | KeyCode::Delete) => app.delete_selected_word(),
        (Tab::Vocabulary, KeyCode::Char('C')) => app.request_clear_words(),
        _ => {}
    }
}

fn handle_reading_key(app: &mut App, key: KeyEvent) {
    if app.tooltip_open {
        match key.code {
            KeyCode::Char('s') => {
                app.save_tooltip_word();
                return;
            }
            KeyCode::Esc | KeyCode::Enter => {
                app.close_tooltip();
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char('n') | KeyCode::Right => {
            app.next_chapter();
        }
        KeyCode::Char('p') | KeyCode::Left => {
            app.prev_chapter();
        }
        KeyCode::Char('w') | KeyCode::Char('l') => app.move_word_cursor(true),
        KeyCode::Char('b') | KeyCode::Char('h') => app.move_word_cursor(false),
        KeyCode::Enter => app.open_tooltip(),
        KeyCode::Char('t') => app.toggle_transliteration(),
        KeyCode::Char('e') => app.toggle_english(),
        KeyCode::Char('d') => app.toggle_highlight_difficult(),
        KeyCode::Char('L') => app.toggle_line_spacing(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_font_size(2),
        KeyCode::Char('-') => app.adjust_font_size(-2),
        _ => {}
    }
}

fn option_index(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(ch @ '1'..='9') => Some(ch as usize - '1' as usize),
        _ => None,
    }
}

fn handle_grammar_key(app: &mut App, key: KeyEvent) {
    if let Some(option) = option_index(key.code) {
        app.select_exercise_option(option);
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Enter => {
            app.submit_exercise();
        }
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    if let Some(option) = option_index(key.code) {
        if let Err(e) = app.answer_quiz(option) {
            log::debug!("quiz input ignored: {e}");
        }
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char('r') => {
            app.restart_quiz();
        }
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()).fg(colors.fg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(
        area,
        app.notice.is_visible(),
        app.screen != Screen::Welcome,
    );

    render_header(frame, app, layout.header);

    if let (Some(rect), Some(message)) = (layout.notice, app.notice.message()) {
        frame.render_widget(NoticeBanner::new(message, &app.theme), rect);
    }

    if let Some(rect) = layout.sidebar {
        render_sidebar(frame, app, rect);
    }

    if !layout.main.is_empty() {
        render_main(frame, app, layout.main);
    }

    render_footer(frame, app, layout.footer);

    if let Some(entry) = app.tooltip_entry() {
        frame.render_widget(
            WordTooltip::new(entry, app.is_saved(&entry.word), &app.theme),
            area,
        );
    }
    if app.confirm_clear {
        frame.render_widget(
            AlertPopup::new(
                "Are you sure you want to delete all saved words?",
                "[y] Yes  [n] No",
                &app.theme,
            ),
            area,
        );
    }
    if let Some(ref message) = app.alert {
        frame.render_widget(
            AlertPopup::new(message, "Press any key", &app.theme),
            area,
        );
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let base = Style::default().fg(colors.header_fg()).bg(colors.header_bg());

    let mut spans = vec![Span::styled(
        " اردو ",
        base.fg(colors.accent()).add_modifier(Modifier::BOLD),
    )];
    for tab in Tab::ALL {
        let style = if tab == app.tab {
            base.fg(colors.accent())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base
        };
        spans.push(Span::styled(" │ ", base.fg(colors.muted())));
        spans.push(Span::styled(tab.label(), style));
    }
    spans.push(Span::styled(
        format!(
            "   streak {} · font {} · {}",
            app.prefs.streak,
            app.prefs.font_size,
            if app.prefs.dark_mode { "dark" } else { "light" },
        ),
        base.fg(colors.muted()),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(base),
    );
    frame.render_widget(header, area);
}

fn render_sidebar(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.screen == Screen::Welcome;
    match app.tab {
        Tab::Stories => frame.render_widget(
            StoryList::new(
                app.story_groups(),
                &app.filter,
                app.story_selected,
                app.search_editing,
                focused,
                &app.theme,
            ),
            area,
        ),
        Tab::Grammar => frame.render_widget(
            LessonList::new(&app.grammar, app.grammar_selected, focused, &app.theme),
            area,
        ),
        Tab::Vocabulary => frame.render_widget(
            SavedWordList::new(
                app.prefs.saved_words.as_slice(),
                app.vocab_selected,
                focused,
                &app.theme,
            ),
            area,
        ),
    }
}

fn render_main(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    match app.screen {
        Screen::Welcome => frame.render_widget(
            Welcome::new(
                app.tab,
                app.prefs.streak,
                app.continue_reading_summary(),
                &app.theme,
            ),
            area,
        ),
        Screen::Reading => {
            if let Some(story) = app.current_story() {
                let tokens = app.current_tokens();
                frame.render_widget(
                    ReadingView::new(
                        story,
                        app.current_chapter_index(),
                        &tokens,
                        &app.prefs,
                        app.word_cursor,
                        &app.theme,
                    ),
                    area,
                );
            }
        }
        Screen::Grammar => {
            if let Some(lesson) = app.current_lesson() {
                frame.render_widget(GrammarView::new(lesson, &app.exercise, &app.theme), area);
            }
        }
        Screen::Quiz => {
            if let Some(ref quiz) = app.quiz {
                frame.render_widget(QuizView::new(quiz, &app.theme), area);
            }
        }
    }
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let hints: Vec<&str> = if app.search_editing {
        vec!["type to search", "[Enter] done", "[Esc] clear"]
    } else {
        match app.screen {
            Screen::Welcome => {
                let mut hints = vec!["[Tab] switch", "[j/k] move"];
                match app.tab {
                    Tab::Stories => {
                        hints.extend(["[Enter] read", "[/] search", "[f] level"]);
                    }
                    Tab::Grammar => hints.push("[Enter] open"),
                    Tab::Vocabulary => hints.extend(["[s] quiz", "[x] delete", "[C] clear all"]),
                }
                if app.continue_reading_summary().is_some() {
                    hints.push("[c] continue");
                }
                hints.extend(["[D] theme", "[q] quit"]);
                hints
            }
            Screen::Reading => {
                let mut hints = Vec::new();
                if app.shows_chapter_nav() {
                    if app.has_prev_chapter() {
                        hints.push("[p] prev chapter");
                    }
                    if app.has_next_chapter() {
                        hints.push("[n] next chapter");
                    }
                }
                hints.extend([
                    "[w/b] word",
                    "[Enter] details",
                    "[t] translit",
                    "[e] english",
                    "[d] difficult",
                    "[L] spacing",
                    "[+/-] font",
                    "[Esc] back",
                ]);
                hints
            }
            Screen::Grammar => vec!["[1-9] choose", "[Enter] check", "[Esc] back"],
            Screen::Quiz => vec!["[1-4] answer", "[Esc] back"],
        }
    };

    let lines: Vec<Line> = pack_hint_lines(&hints, area.width as usize)
        .into_iter()
        .take(area.height as usize)
        .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.muted()))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
