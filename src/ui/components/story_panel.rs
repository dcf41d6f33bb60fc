use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::state::{Phase, Session};
use crate::ui::theme::Theme;

/// The reference text, one span per token. After a check each token is
/// colored by its verdict; during typing the current token is highlighted.
pub struct StoryPanel<'a> {
    session: &'a Session,
    theme: &'a Theme,
    selected_word: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WordState {
    Pending,
    Current,
    Correct,
    Incorrect,
    Selected,
}

fn word_state(session: &Session, idx: usize, selected_word: Option<usize>) -> WordState {
    if selected_word == Some(idx) {
        return WordState::Selected;
    }
    if let Some(report) = session.report() {
        return match report.verdicts.get(idx) {
            Some(v) if v.correct => WordState::Correct,
            Some(_) => WordState::Incorrect,
            None => WordState::Pending,
        };
    }
    if session.phase() == Phase::InProgress && idx == session.current_word() {
        return WordState::Current;
    }
    WordState::Pending
}

impl<'a> StoryPanel<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme, selected_word: Option<usize>) -> Self {
        Self {
            session,
            theme,
            selected_word,
        }
    }
}

impl Widget for StoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title = self
            .session
            .exercise()
            .and_then(|ex| ex.title.as_deref())
            .unwrap_or("Practice text");

        let block = Block::bordered()
            .title(format!(" {title} "))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let Some(exercise) = self.session.exercise() else {
            Paragraph::new(Line::from(Span::styled(
                "No text loaded. Pick a story or enter your own.",
                Style::default().fg(colors.fg_dim()),
            )))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
            return;
        };

        let mut spans: Vec<Span> = Vec::new();
        for (idx, token) in exercise.tokens().iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            let style = match word_state(self.session, idx, self.selected_word) {
                WordState::Pending => Style::default().fg(colors.fg()),
                WordState::Current => Style::default()
                    .fg(colors.word_current_fg())
                    .bg(colors.word_current_bg()),
                WordState::Correct => Style::default().fg(colors.word_correct()),
                WordState::Incorrect => Style::default()
                    .fg(colors.word_incorrect())
                    .bg(colors.word_incorrect_bg())
                    .add_modifier(Modifier::UNDERLINED),
                WordState::Selected => Style::default()
                    .fg(colors.bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            };
            spans.push(Span::styled(token.clone(), style));
        }

        if !exercise.is_typable() {
            spans.push(Span::styled(
                "This text has no typable words.",
                Style::default().fg(colors.warning()),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
