use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::state::Session;
use crate::session::timer::format_elapsed;
use crate::ui::theme::Theme;

/// Verdict summary shown after a check: score, time, speed, and the list of
/// misspelled words with what the reference expected.
pub struct ResultsPanel<'a> {
    session: &'a Session,
    theme: &'a Theme,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme) -> Self {
        Self { session, theme }
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Results ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let Some(report) = self.session.report() else {
            Paragraph::new(Line::from(Span::styled(
                "Press Enter to check your spelling.",
                Style::default().fg(colors.fg_dim()),
            )))
            .block(block)
            .render(area, buf);
            return;
        };

        let total = report.verdicts.len();
        let all_correct = report.correct_count == total && total > 0;

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{}/{total} correct", report.correct_count),
                Style::default()
                    .fg(if all_correct {
                        colors.success()
                    } else {
                        colors.warning()
                    })
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "   {}   {} wpm",
                    format_elapsed(self.session.elapsed_secs()),
                    self.session.wpm()
                ),
                Style::default().fg(colors.fg()),
            ),
        ])];

        if all_correct {
            lines.push(Line::from(Span::styled(
                "Perfect! Every word matched.",
                Style::default().fg(colors.success()),
            )));
        } else if report.errors.is_empty() {
            lines.push(Line::from(Span::styled(
                "No misspellings, but the word counts differ.",
                Style::default().fg(colors.warning()),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Misspelled:",
                Style::default().fg(colors.error()),
            )));
            for error in &report.errors {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {}", error.typed),
                        Style::default()
                            .fg(colors.word_incorrect())
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                    Span::styled("  expected  ", Style::default().fg(colors.fg_dim())),
                    Span::styled(
                        error.reference.clone(),
                        Style::default().fg(colors.word_correct()),
                    ),
                ]));
            }
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
