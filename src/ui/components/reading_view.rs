use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::model::Story;
use crate::store::schema::UserPreferences;
use crate::text::AnnotatedToken;
use crate::ui::theme::Theme;

pub struct ReadingView<'a> {
    story: &'a Story,
    chapter_index: usize,
    tokens: &'a [AnnotatedToken<'a>],
    prefs: &'a UserPreferences,
    cursor: Option<usize>,
    theme: &'a Theme,
}

impl<'a> ReadingView<'a> {
    pub fn new(
        story: &'a Story,
        chapter_index: usize,
        tokens: &'a [AnnotatedToken<'a>],
        prefs: &'a UserPreferences,
        cursor: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            story,
            chapter_index,
            tokens,
            prefs,
            cursor,
            theme,
        }
    }

    fn token_style(&self, index: usize, token: &AnnotatedToken) -> Style {
        let colors = &self.theme.colors;
        if self.cursor == Some(index) {
            return Style::default()
                .fg(colors.cursor_fg())
                .bg(colors.cursor_bg())
                .add_modifier(Modifier::BOLD);
        }
        let mut style = Style::default().fg(colors.fg());
        if token.is_interactive() {
            style = style.fg(colors.vocab()).add_modifier(Modifier::UNDERLINED);
        }
        if token.is_difficult && self.prefs.highlight_difficult {
            style = style.fg(colors.difficult()).add_modifier(Modifier::BOLD);
        }
        style
    }
}

/// Greedy word wrap: tokens are re-joined with single spaces and broken
/// only between tokens. A token wider than `width` gets a line of its own.
pub fn wrap_tokens<'s>(spans: Vec<Span<'s>>, width: usize) -> Vec<Line<'s>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'s>> = Vec::new();
    let mut used = 0usize;

    for span in spans {
        let w = span.width();
        if !current.is_empty() && used + 1 + w > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            used += 1;
        }
        used += w;
        current.push(span);
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

impl Widget for ReadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let total = self.story.chapter_count();
        let block = Block::bordered()
            .title(format!(" {} ", self.story.title))
            .title_bottom(
                Line::from(format!(" Chapter {} of {total} ", self.chapter_index + 1))
                    .right_aligned(),
            )
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(chapter) = self.story.chapters.get(self.chapter_index) else {
            return;
        };
        let width = inner.width.saturating_sub(2).max(1) as usize;

        let spans: Vec<Span> = self
            .tokens
            .iter()
            .enumerate()
            .map(|(i, t)| Span::styled(t.token, self.token_style(i, t)))
            .collect();

        let mut lines: Vec<Line> = vec![Line::from("")];
        for line in wrap_tokens(spans, width) {
            lines.push(line.alignment(Alignment::Right));
            if self.prefs.line_spacing {
                lines.push(Line::from(""));
            }
        }

        let muted = Style::default().fg(colors.muted());
        if self.prefs.show_transliteration && !chapter.transliteration.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                chapter.transliteration.as_str(),
                muted.add_modifier(Modifier::ITALIC),
            )));
        }
        if self.prefs.show_english && !chapter.english_meaning.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(chapter.english_meaning.as_str(), muted)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Vocabulary",
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )));
        if chapter.vocab.is_empty() {
            lines.push(Line::from(Span::styled(
                "No difficult words in this chapter.",
                muted,
            )));
        }
        for entry in &chapter.vocab {
            let saved = if self.prefs.saved_words.contains(&entry.word) {
                " ✓"
            } else {
                ""
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}{saved}", entry.word),
                    Style::default().fg(colors.vocab()),
                ),
                Span::styled(format!("  {}", entry.transliteration), muted),
                Span::raw(format!("  {}", entry.meaning)),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::new().padding(ratatui::widgets::Padding::horizontal(1)))
            .render(inner, buf);
    }
}
