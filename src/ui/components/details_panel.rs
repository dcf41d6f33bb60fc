use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::lookup::LookupState;
use crate::ui::theme::Theme;

/// Dictionary panel: one definition per looked-up word, plus the translate
/// hint. Rendered in the sidebar on wide terminals and as a popup elsewhere.
pub struct DetailsPanel<'a> {
    lookup: &'a LookupState,
    theme: &'a Theme,
    translate_language: &'a str,
    as_popup: bool,
}

impl<'a> DetailsPanel<'a> {
    pub fn new(
        lookup: &'a LookupState,
        theme: &'a Theme,
        translate_language: &'a str,
        as_popup: bool,
    ) -> Self {
        Self {
            lookup,
            theme,
            translate_language,
            as_popup,
        }
    }
}

impl Widget for DetailsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if self.as_popup {
            Clear.render(area, buf);
        }

        let block = Block::bordered()
            .title(" Dictionary ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));

        let lines: Vec<Line> = match self.lookup {
            LookupState::Idle => vec![Line::from(Span::styled(
                "Ctrl+D, then pick a word to look it up.",
                Style::default().fg(colors.fg_dim()),
            ))],
            LookupState::Loading { word, .. } => vec![Line::from(Span::styled(
                format!("Looking up \"{word}\"..."),
                Style::default().fg(colors.fg_dim()),
            ))],
            LookupState::Failed { word, message } => vec![
                Line::from(Span::styled(
                    word.clone(),
                    Style::default()
                        .fg(colors.fg())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(colors.error()),
                )),
            ],
            LookupState::Ready(def) => {
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        def.word.clone(),
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        def.phonetic
                            .as_deref()
                            .map(|p| format!("  {p}"))
                            .unwrap_or_default(),
                        Style::default().fg(colors.fg_dim()),
                    ),
                ])];
                lines.push(Line::from(Span::styled(
                    def.part_of_speech.clone(),
                    Style::default()
                        .fg(colors.fg_dim())
                        .add_modifier(Modifier::ITALIC),
                )));
                lines.push(Line::from(Span::styled(
                    def.definition.clone(),
                    Style::default().fg(colors.fg()),
                )));
                if let Some(example) = &def.example {
                    lines.push(Line::from(Span::styled(
                        format!("\"{example}\""),
                        Style::default().fg(colors.fg_dim()),
                    )));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("t: translate to '{}' in browser", self.translate_language),
                    Style::default().fg(colors.accent_dim()),
                )));
                lines
            }
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
