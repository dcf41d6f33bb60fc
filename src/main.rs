mod app;
mod config;
mod event;
mod lookup;
mod prompt;
mod session;
mod speech;
mod stories;
mod text;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use app::{App, AppScreen, TRANSLATE_LANGUAGES};
use config::Config;
use event::{AppEvent, EventHandler};
use lookup::LookupState;
use session::state::Phase;
use session::timer::format_elapsed;
use stories::Level;
use ui::components::details_panel::DetailsPanel;
use ui::components::input_area::InputArea;
use ui::components::picker::Picker;
use ui::components::results_panel::ResultsPanel;
use ui::components::story_panel::StoryPanel;
use ui::layout::AppLayout;
use ui::line_input::InputResult;

#[derive(Parser)]
#[command(name = "spellr", version, about = "Terminal spelling practice with word-by-word feedback")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Use the light palette")]
    light: bool,

    #[arg(short, long, help = "Story level (beginner, medium, advanced)")]
    level: Option<String>,

    #[arg(long, value_name = "FILE", help = "Practice a text file instead of a bundled story")]
    text: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if cli.light {
        config.dark_mode = false;
    }

    let events = EventHandler::new(Duration::from_millis(250));
    let mut app = App::new(config, events.sender());

    if let Some(level) = cli.level.as_deref().and_then(parse_level) {
        app.set_level(level);
    }
    if let Some(path) = &cli.text {
        let text = fs::read_to_string(path)?;
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string());
        app.start_text(title, text);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn init_logging() {
    let Some(data_dir) = dirs::data_dir() else {
        return;
    };
    let log_dir = data_dir.join("spellr");
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    if let Ok(file) = fs::File::create(log_dir.join("spellr.log")) {
        let _ = simplelog::WriteLogger::init(
            simplelog::LevelFilter::Info,
            simplelog::Config::default(),
            file,
        );
    }
}

fn parse_level(name: &str) -> Option<Level> {
    Level::ALL
        .into_iter()
        .find(|l| l.as_str().eq_ignore_ascii_case(name))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => {}
            AppEvent::Resize(_, _) => {}
            AppEvent::Lookup { seq, word, result } => app.on_lookup(seq, word, result),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Picker => handle_picker_key(app, key),
        AppScreen::CustomText => handle_custom_text_key(app, key),
        AppScreen::Practice => handle_practice_key(app, key),
        AppScreen::Settings => handle_settings_key(app, key),
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.prev_level(),
        KeyCode::Right | KeyCode::Char('l') => app.next_level(),
        KeyCode::Down | KeyCode::Char('j') => app.picker_next(),
        KeyCode::Up | KeyCode::Char('k') => app.picker_prev(),
        KeyCode::Enter => app.start_selected_story(),
        KeyCode::Char('r') => app.start_random_story(),
        KeyCode::Char('c') => app.go_to_custom_text(),
        KeyCode::Char('s') => app.go_to_settings(),
        _ => {}
    }
}

fn handle_custom_text_key(app: &mut App, key: KeyEvent) {
    match app.custom_input.handle(key) {
        InputResult::Submit => app.start_custom_text(),
        InputResult::Cancel => app.go_to_picker(),
        InputResult::Continue => {}
    }
}

fn handle_practice_key(app: &mut App, key: KeyEvent) {
    // Word-select mode captures navigation keys until Esc
    if app.word_select.is_some() {
        match key.code {
            KeyCode::Esc => app.exit_word_select(),
            KeyCode::Left | KeyCode::Char('h') => app.select_prev_word(),
            KeyCode::Right | KeyCode::Char('l') => app.select_next_word(),
            KeyCode::Enter | KeyCode::Char('d') => app.lookup_selected(),
            KeyCode::Char('t') => app.translate_selected(),
            KeyCode::Char('s') => app.speak_selected(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.go_to_picker(),
        KeyCode::Enter => app.check(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => app.reset(),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.enter_word_select()
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(ch),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if let Err(err) = app.config.save() {
                log::warn!("failed to save config: {err}");
            }
            app.go_to_picker();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.settings_selected > 0 {
                app.settings_selected -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.settings_selected < App::SETTINGS_FIELDS - 1 {
                app.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.settings_cycle_forward(),
        KeyCode::Left | KeyCode::Char('h') => app.settings_cycle_backward(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Picker => render_picker(frame, app),
        AppScreen::CustomText => render_custom_text(frame, app),
        AppScreen::Practice => render_practice(frame, app),
        AppScreen::Settings => render_settings(frame, app),
    }
}

fn render_picker(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " spellr ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} stories", app.level.label().to_lowercase()),
            Style::default().fg(colors.fg_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    let picker_area = ui::layout::centered_rect(55, 85, layout[1]);
    let picker = Picker::new(app.level, &app.picker_stories, app.picker_selected, app.theme);
    frame.render_widget(&picker, picker_area);

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Enter] Start  [r] Random  [←/→] Level  [c] Custom text  [s] Settings  [q] Quit ",
        Style::default().fg(colors.fg_dim()),
    )));
    frame.render_widget(footer, layout[2]);
}

fn render_custom_text(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let popup = ui::layout::centered_rect(70, 30, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Custom practice text ")
        .border_style(Style::default().fg(colors.border_focused()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(popup);
    block.render(popup, frame.buffer_mut());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let hint = Paragraph::new(Line::from(Span::styled(
        " Paste or type the text to practice, then press Enter.",
        Style::default().fg(colors.fg_dim()),
    )));
    frame.render_widget(hint, layout[0]);

    let (before, cursor_ch, after) = app.custom_input.render_parts();
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(before, Style::default().fg(colors.fg())),
    ];
    match cursor_ch {
        Some(ch) => spans.push(Span::styled(
            ch.to_string(),
            Style::default()
                .fg(colors.word_current_fg())
                .bg(colors.word_current_bg()),
        )),
        None => spans.push(Span::styled(
            " ",
            Style::default().bg(colors.word_current_bg()),
        )),
    }
    spans.push(Span::styled(after, Style::default().fg(colors.fg())));
    frame.render_widget(Paragraph::new(Line::from(spans)), layout[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Enter] Practice  [Esc] Back ",
        Style::default().fg(colors.fg_dim()),
    )));
    frame.render_widget(footer, layout[2]);
}

fn render_practice(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let app_layout = AppLayout::new(area);
    let tier = app_layout.tier;

    // Header: title plus elapsed time, and speed once checked
    let title = app
        .session
        .exercise()
        .and_then(|ex| ex.title.as_deref())
        .unwrap_or("Custom text");
    let timing = match app.session.phase() {
        Phase::InProgress => format!(" | {}", format_elapsed(app.session.elapsed_secs())),
        Phase::Checked => format!(
            " | {} | {} wpm",
            format_elapsed(app.session.elapsed_secs()),
            app.session.wpm()
        ),
        _ => String::new(),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            timing,
            Style::default().fg(colors.fg_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, app_layout.header);

    let show_results =
        app.session.phase() == Phase::Checked && tier.show_results_inline(area.height);

    let mut constraints: Vec<Constraint> = vec![Constraint::Min(5), Constraint::Length(4)];
    if show_results {
        constraints.push(Constraint::Length(8));
    }
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(app_layout.main);

    let story = StoryPanel::new(&app.session, app.theme, app.word_select);
    frame.render_widget(story, main_layout[0]);

    let input_focused = app.word_select.is_none();
    let input = InputArea::new(&app.session, app.theme, input_focused);
    frame.render_widget(input, main_layout[1]);

    if show_results {
        let results = ResultsPanel::new(&app.session, app.theme);
        frame.render_widget(results, main_layout[2]);
    }

    if let Some(sidebar_area) = app_layout.sidebar {
        let details = DetailsPanel::new(
            &app.lookup,
            app.theme,
            &app.config.translate_language,
            false,
        );
        frame.render_widget(details, sidebar_area);
    } else if app.word_select.is_some() && app.lookup != LookupState::Idle {
        let popup = ui::layout::centered_rect(70, 50, area);
        let details = DetailsPanel::new(
            &app.lookup,
            app.theme,
            &app.config.translate_language,
            true,
        );
        frame.render_widget(details, popup);
    }

    let hints: Vec<&str> = if app.word_select.is_some() {
        vec![
            "[←/→] Word",
            "[Enter] Define",
            "[s] Say",
            "[t] Translate",
            "[Esc] Back",
        ]
    } else {
        vec![
            "[Enter] Check",
            "[Ctrl+R] Reset",
            "[Ctrl+D] Look up a word",
            "[Esc] Stories",
        ]
    };
    let hint_lines = ui::layout::pack_hint_lines(&hints, app_layout.footer.width as usize);
    let footer_lines: Vec<Line> = hint_lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.fg_dim()))))
        .collect();
    frame.render_widget(Paragraph::new(footer_lines), app_layout.footer);
}

fn render_settings(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let centered = ui::layout::centered_rect(60, 80, area);

    let block = Block::bordered()
        .title(" Settings ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let on_off = |value: bool| if value { "on" } else { "off" };
    let fields: Vec<(&str, String)> = vec![
        ("Dark mode", on_off(app.config.dark_mode).to_string()),
        ("Theme", app.config.theme.clone()),
        ("Case sensitive", on_off(app.config.case_sensitive).to_string()),
        (
            "Check punctuation",
            on_off(app.config.check_punctuation).to_string(),
        ),
        (
            "Read next word aloud",
            on_off(app.config.read_next_word).to_string(),
        ),
        ("Translate to", app.config.translate_language.clone()),
    ];
    debug_assert_eq!(fields.len(), App::SETTINGS_FIELDS);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(fields.len() as u16 * 2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        "  Use arrows to navigate, Enter/Right to change, ESC to save & exit",
        Style::default().fg(colors.fg_dim()),
    )));
    header.render(layout[0], frame.buffer_mut());

    let field_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(2))
                .collect::<Vec<_>>(),
        )
        .split(layout[1]);

    for (i, (label, value)) in fields.iter().enumerate() {
        let is_selected = i == app.settings_selected;
        let indicator = if is_selected { " > " } else { "   " };

        let label_style = Style::default()
            .fg(if is_selected {
                colors.accent()
            } else {
                colors.fg()
            })
            .add_modifier(if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });
        let value_style = Style::default().fg(if is_selected {
            colors.warning()
        } else {
            colors.fg_dim()
        });

        let lines = vec![
            Line::from(Span::styled(format!("{indicator}{label}:"), label_style)),
            Line::from(Span::styled(format!("     < {value} >"), value_style)),
        ];
        Paragraph::new(lines).render(field_layout[i], frame.buffer_mut());
    }

    let translate_hint = format!(
        "  Translate languages: {}",
        TRANSLATE_LANGUAGES.join(", ")
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        translate_hint,
        Style::default().fg(colors.accent_dim()),
    )));
    footer.render(layout[3], frame.buffer_mut());
}
