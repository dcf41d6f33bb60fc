use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::stories::{Level, Story};
use crate::ui::theme::Theme;

/// Story picker: level tabs across the top, the level's stories below.
pub struct Picker<'a> {
    pub level: Level,
    pub stories: &'a [Story],
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> Picker<'a> {
    pub fn new(level: Level, stories: &'a [Story], selected: usize, theme: &'a Theme) -> Self {
        Self {
            level,
            stories,
            selected,
            theme,
        }
    }
}

impl Widget for &Picker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "spellr",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Terminal Spelling Practice",
                Style::default().fg(colors.fg()),
            )),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let mut tabs: Vec<Span> = Vec::new();
        for level in Level::ALL {
            if !tabs.is_empty() {
                tabs.push(Span::raw("   "));
            }
            let style = if level == self.level {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(colors.fg_dim())
            };
            tabs.push(Span::styled(level.label(), style));
        }
        Paragraph::new(Line::from(tabs))
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        let story_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.stories
                    .iter()
                    .map(|_| Constraint::Length(1))
                    .collect::<Vec<_>>(),
            )
            .split(layout[2]);

        for (i, story) in self.stories.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let text = format!(" {indicator} {}", story.title);

            let p = Paragraph::new(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(if is_selected {
                        colors.accent()
                    } else {
                        colors.fg()
                    })
                    .add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
            )));
            if i < story_layout.len() {
                p.render(story_layout[i], buf);
            }
        }

        if self.stories.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No stories bundled for this level.",
                Style::default().fg(colors.warning()),
            )))
            .render(layout[2], buf);
        }
    }
}
