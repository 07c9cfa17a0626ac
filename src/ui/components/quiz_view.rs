use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::quiz::{QuizPhase, QuizSession};
use crate::ui::theme::Theme;

pub struct QuizView<'a> {
    quiz: &'a QuizSession,
    theme: &'a Theme,
}

impl<'a> QuizView<'a> {
    pub fn new(quiz: &'a QuizSession, theme: &'a Theme) -> Self {
        Self { quiz, theme }
    }

    fn question_lines(&self) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        let Some(question) = self.quiz.current_question() else {
            return Vec::new();
        };
        let pending = self.quiz.pending();

        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "Question {} of {}",
                    self.quiz.current_index() + 1,
                    self.quiz.total()
                ),
                Style::default().fg(colors.muted()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                question.word.as_str(),
                Style::default()
                    .fg(colors.vocab())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                question.transliteration.as_str(),
                Style::default()
                    .fg(colors.muted())
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
        ];

        for (i, option) in question.options.iter().enumerate() {
            let style = match pending {
                Some(fb) if i == fb.correct => Style::default()
                    .fg(colors.success())
                    .add_modifier(Modifier::BOLD),
                Some(fb) if i == fb.chosen => Style::default().fg(colors.error()),
                Some(_) => Style::default().fg(colors.muted()),
                None => Style::default().fg(colors.fg()),
            };
            lines.push(Line::from(Span::styled(format!("[{}] {option}", i + 1), style)));
        }

        if let Some(fb) = pending {
            lines.push(Line::from(""));
            let (text, color) = if fb.is_correct() {
                ("Correct!", colors.success())
            } else {
                ("Not quite.", colors.error())
            };
            lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
        }
        lines
    }

    fn result_lines(&self) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        let tier = self
            .quiz
            .feedback_tier()
            .map(|t| t.message())
            .unwrap_or_default();
        vec![
            Line::from(Span::styled(
                "Quiz complete",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{}/{}", self.quiz.score(), self.quiz.total()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(tier),
            Line::from(""),
            Line::from(Span::styled(
                "[r] Try again   [Esc] Back",
                Style::default().fg(colors.muted()),
            )),
        ]
    }
}

impl Widget for QuizView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(" Vocabulary quiz ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()))
            .padding(Padding::uniform(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.quiz.phase() {
            QuizPhase::InProgress => self.question_lines(),
            QuizPhase::Finished => self.result_lines(),
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
