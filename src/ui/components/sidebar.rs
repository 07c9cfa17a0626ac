use std::collections::BTreeMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::filter::StoryFilter;
use crate::content::metrics;
use crate::content::model::{GrammarLesson, Story, VocabEntry};
use crate::ui::theme::Theme;

fn list_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let colors = &theme.colors;
    let border = if focused {
        colors.border_focused()
    } else {
        colors.border()
    };
    Block::bordered()
        .title(format!(" {title} "))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg()).fg(colors.fg()))
}

fn row_style(selected: bool, theme: &Theme) -> Style {
    let colors = &theme.colors;
    if selected {
        Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.fg())
    }
}

/// Keep the selected row on screen by dropping leading lines.
fn scroll_offset(selected_line: usize, height: u16) -> u16 {
    let height = height as usize;
    if height == 0 || selected_line < height {
        0
    } else {
        (selected_line + 1 - height) as u16
    }
}

pub struct StoryList<'a> {
    groups: BTreeMap<u32, Vec<&'a Story>>,
    filter: &'a StoryFilter,
    selected: usize,
    search_editing: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> StoryList<'a> {
    pub fn new(
        groups: BTreeMap<u32, Vec<&'a Story>>,
        filter: &'a StoryFilter,
        selected: usize,
        search_editing: bool,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            groups,
            filter,
            selected,
            search_editing,
            focused,
            theme,
        }
    }
}

impl Widget for StoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = list_block("Stories", self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let level = match self.filter.difficulty {
            Some(l) => format!("Level {l}"),
            None => "All levels".to_string(),
        };
        let cursor = if self.search_editing { "_" } else { "" };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(" / ", Style::default().fg(colors.muted())),
                Span::styled(
                    format!("{}{cursor}", self.filter.search),
                    Style::default().fg(if self.search_editing {
                        colors.accent()
                    } else {
                        colors.fg()
                    }),
                ),
            ]),
            Line::from(Span::styled(
                format!(" [f] {level}"),
                Style::default().fg(colors.muted()),
            )),
            Line::from(""),
        ];

        if self.groups.is_empty() {
            lines.push(Line::from(Span::styled(
                " No stories found",
                Style::default().fg(colors.muted()),
            )));
            Paragraph::new(lines).render(inner, buf);
            return;
        }

        let mut row = 0usize;
        let mut selected_line = 0usize;
        for (level, stories) in &self.groups {
            lines.push(Line::from(Span::styled(
                format!(" Level {level}"),
                Style::default()
                    .fg(colors.muted())
                    .add_modifier(Modifier::BOLD),
            )));
            for story in stories {
                let selected = row == self.selected;
                if selected {
                    selected_line = lines.len() + 1;
                }
                let marker = if selected { ">" } else { " " };
                lines.push(Line::from(Span::styled(
                    format!(" {marker} {}", story.title),
                    row_style(selected, self.theme),
                )));
                lines.push(Line::from(Span::styled(
                    format!(
                        "     {} ch · {} min · {} vocab",
                        story.chapter_count(),
                        metrics::reading_time(story),
                        metrics::vocab_count(story),
                    ),
                    Style::default().fg(colors.muted()),
                )));
                row += 1;
            }
        }

        Paragraph::new(lines)
            .scroll((scroll_offset(selected_line, inner.height), 0))
            .render(inner, buf);
    }
}

pub struct LessonList<'a> {
    lessons: &'a [GrammarLesson],
    selected: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> LessonList<'a> {
    pub fn new(lessons: &'a [GrammarLesson], selected: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            lessons,
            selected,
            focused,
            theme,
        }
    }
}

impl Widget for LessonList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = list_block("Grammar", self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.lessons.is_empty() {
            Paragraph::new(Span::styled(
                " No grammar lessons available",
                Style::default().fg(colors.muted()),
            ))
            .render(inner, buf);
            return;
        }

        let mut lines = Vec::with_capacity(self.lessons.len() * 2);
        for (i, lesson) in self.lessons.iter().enumerate() {
            let selected = i == self.selected;
            let marker = if selected { ">" } else { " " };
            lines.push(Line::from(Span::styled(
                format!(" {marker} {}", lesson.title),
                row_style(selected, self.theme),
            )));
            lines.push(Line::from(Span::styled(
                format!("     {}", lesson.subtitle),
                Style::default().fg(colors.muted()),
            )));
        }

        Paragraph::new(lines)
            .scroll((scroll_offset(self.selected * 2 + 1, inner.height), 0))
            .render(inner, buf);
    }
}

pub struct SavedWordList<'a> {
    words: &'a [VocabEntry],
    selected: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SavedWordList<'a> {
    pub fn new(words: &'a [VocabEntry], selected: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            words,
            selected,
            focused,
            theme,
        }
    }
}

impl Widget for SavedWordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let title = format!("Saved words ({})", self.words.len());
        let block = list_block(&title, self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.words.is_empty() {
            Paragraph::new(Span::styled(
                " No saved words yet",
                Style::default().fg(colors.muted()),
            ))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .words
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let selected = i == self.selected;
                let marker = if selected { ">" } else { " " };
                Line::from(vec![
                    Span::styled(format!(" {marker} {}", entry.word), row_style(selected, self.theme)),
                    Span::styled(
                        format!("  {} · {}", entry.transliteration, entry.meaning),
                        Style::default().fg(colors.muted()),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .scroll((scroll_offset(self.selected, inner.height), 0))
            .render(inner, buf);
    }
}
