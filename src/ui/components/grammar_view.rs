use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::content::model::GrammarLesson;
use crate::exercise::{ExerciseState, Verdict};
use crate::ui::theme::Theme;

pub struct GrammarView<'a> {
    lesson: &'a GrammarLesson,
    state: &'a ExerciseState,
    theme: &'a Theme,
}

impl<'a> GrammarView<'a> {
    pub fn new(lesson: &'a GrammarLesson, state: &'a ExerciseState, theme: &'a Theme) -> Self {
        Self {
            lesson,
            state,
            theme,
        }
    }
}

impl Widget for GrammarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let muted = Style::default().fg(colors.muted());
        let heading = Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD);

        let block = Block::bordered()
            .title(format!(" {} ", self.lesson.title))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(self.lesson.subtitle.as_str(), muted)),
            Line::from(""),
            Line::from(self.lesson.explanation.as_str()),
        ];

        if !self.lesson.examples.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Examples", heading)));
            for example in &self.lesson.examples {
                lines.push(Line::from(Span::styled(
                    example.urdu.as_str(),
                    Style::default().fg(colors.vocab()),
                )));
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", example.transliteration), muted),
                    Span::raw(format!("  {}", example.meaning)),
                ]));
            }
        }

        if let Some(ref exercise) = self.lesson.exercise {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Exercise", heading)));
            lines.push(Line::from(exercise.question.as_str()));

            let verdict = self.state.verdict();
            for (i, option) in exercise.options.iter().enumerate() {
                let selected = self.state.selected() == Some(i);
                let mut style = Style::default().fg(colors.fg());
                if selected {
                    style = style.fg(colors.accent()).add_modifier(Modifier::BOLD);
                }
                match verdict {
                    Some(Verdict::Correct) if selected => style = style.fg(colors.success()),
                    Some(Verdict::Incorrect { correct }) if correct == i => {
                        style = style.fg(colors.success())
                    }
                    Some(Verdict::Incorrect { .. }) if selected => style = style.fg(colors.error()),
                    _ => {}
                }
                let marker = if selected { "(•)" } else { "( )" };
                lines.push(Line::from(Span::styled(
                    format!("  {marker} [{}] {option}", i + 1),
                    style,
                )));
            }

            lines.push(Line::from(""));
            match verdict {
                Some(v) => {
                    let color = if v == Verdict::Correct {
                        colors.success()
                    } else {
                        colors.error()
                    };
                    lines.push(Line::from(Span::styled(
                        v.message(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )));
                }
                None => lines.push(Line::from(Span::styled("[Enter] Check answer", muted))),
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
