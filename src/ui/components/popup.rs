use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::content::model::VocabEntry;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// Modal message box. Any key dismisses it.
pub struct AlertPopup<'a> {
    message: &'a str,
    hint: &'a str,
    theme: &'a Theme,
}

impl<'a> AlertPopup<'a> {
    pub fn new(message: &'a str, hint: &'a str, theme: &'a Theme) -> Self {
        Self {
            message,
            hint,
            theme,
        }
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let rect = centered_rect(52, 7, area);
        Clear.render(rect, buf);

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.error()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()));
        let inner = block.inner(rect);
        block.render(rect, buf);

        Paragraph::new(vec![
            Line::from(""),
            Line::from(self.message),
            Line::from(""),
            Line::from(Span::styled(self.hint, Style::default().fg(colors.muted()))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}

/// Word details for the token under the reading cursor.
pub struct WordTooltip<'a> {
    entry: &'a VocabEntry,
    saved: bool,
    theme: &'a Theme,
}

impl<'a> WordTooltip<'a> {
    pub fn new(entry: &'a VocabEntry, saved: bool, theme: &'a Theme) -> Self {
        Self {
            entry,
            saved,
            theme,
        }
    }
}

impl Widget for WordTooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let rect = centered_rect(40, 8, area);
        Clear.render(rect, buf);

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.header_bg()).fg(colors.fg()));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let action = if self.saved {
            Span::styled("Saved ✓", Style::default().fg(colors.success()))
        } else {
            Span::styled("[s] Save word", Style::default().fg(colors.accent()))
        };

        Paragraph::new(vec![
            Line::from(Span::styled(
                self.entry.word.as_str(),
                Style::default()
                    .fg(colors.vocab())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.entry.transliteration.as_str(),
                Style::default()
                    .fg(colors.muted())
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(self.entry.meaning.as_str()),
            Line::from(""),
            Line::from(action),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}

/// One-line dismissible banner for load failures.
pub struct NoticeBanner<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> NoticeBanner<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for NoticeBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        Paragraph::new(Line::from(vec![
            Span::raw(format!(" {} ", self.message)),
            Span::styled("[N] dismiss", Style::default().add_modifier(Modifier::DIM)),
        ]))
        .style(Style::default().bg(colors.notice_bg()).fg(colors.notice_fg()))
        .render(area, buf);
    }
}
