use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::state::Session;
use crate::ui::theme::Theme;

/// The typed text, with a block cursor at the end while the field is active.
pub struct InputArea<'a> {
    session: &'a Session,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> InputArea<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme, focused: bool) -> Self {
        Self {
            session,
            theme,
            focused,
        }
    }
}

impl Widget for InputArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused && self.session.can_type() {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(" Type the text ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));

        let mut spans = vec![Span::styled(
            self.session.input(),
            Style::default().fg(colors.fg()),
        )];
        if self.focused && self.session.can_type() {
            spans.push(Span::styled(
                " ",
                Style::default()
                    .bg(colors.word_current_bg())
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        } else if self.session.input().is_empty() {
            let placeholder = if self.session.can_type() {
                "Start typing to begin..."
            } else {
                "Input disabled: nothing to type."
            };
            spans = vec![Span::styled(
                placeholder,
                Style::default().fg(colors.fg_dim()),
            )];
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
