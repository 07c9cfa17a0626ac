use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::app::{ContinueReading, Tab};
use crate::ui::theme::Theme;

pub struct Welcome<'a> {
    tab: Tab,
    streak: u32,
    continue_reading: Option<ContinueReading<'a>>,
    theme: &'a Theme,
}

impl<'a> Welcome<'a> {
    pub fn new(
        tab: Tab,
        streak: u32,
        continue_reading: Option<ContinueReading<'a>>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            tab,
            streak,
            continue_reading,
            theme,
        }
    }
}

impl Widget for Welcome<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()))
            .padding(Padding::uniform(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let muted = Style::default().fg(colors.muted());
        let mut lines = vec![
            Line::from(Span::styled(
                "اردو",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Learn Urdu through stories"),
            Line::from(""),
            Line::from(Span::styled(
                format!("Reading streak: {} day{}", self.streak, if self.streak == 1 { "" } else { "s" }),
                Style::default().fg(colors.accent()),
            )),
            Line::from(""),
        ];

        if let Some(c) = self.continue_reading {
            lines.push(Line::from(vec![
                Span::raw("Continue: "),
                Span::styled(c.story.title.as_str(), Style::default().fg(colors.vocab())),
                Span::raw(format!(" (Chapter {} of {})", c.chapter_number, c.total_chapters)),
            ]));
            lines.push(Line::from(Span::styled("[c] Continue reading", muted)));
            lines.push(Line::from(""));
        }

        let hint = match self.tab {
            Tab::Stories => "Pick a story from the list and press Enter to start reading.",
            Tab::Grammar => "Pick a lesson from the list and press Enter to study it.",
            Tab::Vocabulary => "Review your saved words, or press [s] to start a quiz.",
        };
        lines.push(Line::from(Span::styled(hint, muted)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
