use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use punctuation_practice_config::Config;
use punctuation_practice_engine::{
    DragPayload, DragSource, Inventory, Outcome, Session, Snapshot, io,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    process,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Sentence,
    Palette,
}

struct App {
    session: Session,
    cursor: usize,
    palette_state: ListState,
    focus: Focus,
    status: String,
}

impl App {
    fn new(reference: String) -> Self {
        let session = Session::new(reference);
        let mut palette_state = ListState::default();
        if !session.state().usage().is_empty() {
            palette_state.select(Some(0));
        }

        Self {
            session,
            cursor: 0,
            palette_state,
            focus: Focus::Palette,
            status: String::new(),
        }
    }

    fn slot_count(&self) -> usize {
        self.session.state().slots().len()
    }

    fn next_slot(&mut self) {
        self.focus = Focus::Sentence;
        self.cursor = (self.cursor + 1) % self.slot_count();
    }

    fn previous_slot(&mut self) {
        self.focus = Focus::Sentence;
        self.cursor = if self.cursor == 0 {
            self.slot_count() - 1
        } else {
            self.cursor - 1
        };
    }

    fn next_palette_entry(&mut self) {
        let len = self.session.state().usage().len();
        if len == 0 {
            return;
        }
        self.focus = Focus::Palette;
        let i = match self.palette_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.palette_state.select(Some(i));
    }

    /// Space/Enter: pick up from the focused source, or drop on the focused slot
    fn pick_or_drop(&mut self) {
        if self.session.is_dragging() {
            self.status = match self.session.end_drag(Some(self.cursor)) {
                Ok(_) => String::new(),
                Err(e) => format!("Drop rejected: {e}"),
            };
            return;
        }

        let source = match self.focus {
            Focus::Sentence => DragSource::Slot(self.cursor),
            Focus::Palette => {
                let Some(mark) = self
                    .palette_state
                    .selected()
                    .and_then(|i| self.session.state().usage().iter().nth(i))
                    .map(|(mark, _)| mark)
                else {
                    return;
                };
                DragSource::Palette(mark)
            }
        };

        match self.session.start_drag(source) {
            Ok(payload) => {
                self.focus = Focus::Sentence;
                self.status = format!("Carrying '{}' (Esc drops it outside)", payload.mark);
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn drop_outside(&mut self) {
        if !self.session.is_dragging() {
            return;
        }
        self.status = match self.session.cancel_drag() {
            Ok(_) => String::new(),
            Err(e) => format!("Drop rejected: {e}"),
        };
    }

    fn submit(&mut self) {
        if self.session.is_dragging() {
            return;
        }
        if self.session.submit().is_none() {
            self.status = "Place every mark before submitting".to_string();
        } else {
            self.status.clear();
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.cursor = 0;
        self.status.clear();
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    // Determine the exercise set from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = if args.len() == 2 {
        Config::new(&args[1])
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                eprintln!("Error: No exercise file provided and no config file found");
                eprintln!("Usage: {} <exercise-file>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <exercise-file>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [exercise-file]", args[0]);
        process::exit(1);
    };
    let Config {
        exercises_path,
        exercise_index,
    } = config;

    let exercises = io::read_exercise_set(&exercises_path)
        .with_context(|| format!("Loading exercises from '{}'", exercises_path.display()))?;
    let reference = exercises.get(exercise_index).cloned().ok_or_else(|| {
        anyhow!(
            "Exercise {exercise_index} requested but '{}' only has {}",
            exercises_path.display(),
            exercises.len()
        )
    })?;
    log::info!("practicing exercise {exercise_index}: {reference:?}");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(reference);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Right | KeyCode::Char('l') => app.next_slot(),
                KeyCode::Left | KeyCode::Char('h') => app.previous_slot(),
                KeyCode::Tab => app.next_palette_entry(),
                KeyCode::Enter | KeyCode::Char(' ') => app.pick_or_drop(),
                KeyCode::Esc => app.drop_outside(),
                KeyCode::Char('s') => app.submit(),
                KeyCode::Char('r') => app.reset(),
                _ => {}
            }
        }
    }
}

fn sentence_line(snapshot: &Snapshot, cursor: usize, focus: Focus) -> Line<'static> {
    let drop_zone = Style::default()
        .fg(Color::Rgb(194, 65, 12))
        .add_modifier(Modifier::UNDERLINED);
    let mark_style = Style::default().fg(Color::Rgb(194, 65, 12)).bg(Color::Rgb(255, 237, 213));

    let mut spans = Vec::new();
    for slot in &snapshot.slots {
        let focused = slot.index == cursor && (focus == Focus::Sentence || snapshot.dragging);
        let word_style = if focused {
            Style::default().bg(Color::Yellow).fg(Color::Black)
        } else {
            Style::default()
        };
        spans.push(Span::styled(slot.word.clone(), word_style));

        let (text, style) = match slot.punctuation {
            Some(mark) => (mark.to_string(), mark_style),
            None if snapshot.dragging => ("_".to_string(), drop_zone),
            None => (" ".to_string(), Style::default()),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn sentence_title(active: Option<DragPayload>) -> String {
    match active {
        Some(payload) => format!("Drop '{}' on a word", payload.mark),
        None => "Add the punctuation to the text".to_string(),
    }
}

fn palette_title(usage: &Inventory) -> String {
    format!(
        "Punctuation ({}/{} placed)",
        usage.total_placed(),
        usage.total_required()
    )
}

fn outcome_line(outcome: Outcome) -> Line<'static> {
    match outcome {
        Outcome::Correct => Line::from(Span::styled(
            "Correct! ✅",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Outcome::Incorrect => Line::from(Span::styled(
            "Incorrect! ❌",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Outcome::InProgress => Line::from(""),
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let snapshot = app.session.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(5),
                Constraint::Min(4),
                Constraint::Length(3),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.area());

    // Sentence panel
    let sentence = Paragraph::new(vec![sentence_line(&snapshot, app.cursor, app.focus)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(sentence_title(app.session.active_drag())),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(sentence, chunks[0]);

    // Palette panel
    let palette_items: Vec<ListItem> = snapshot
        .palette
        .iter()
        .map(|entry| {
            let text = format!("[ {} ]  {} left", entry.mark, entry.remaining);
            let style = if entry.available {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let highlight = if app.focus == Focus::Palette && !snapshot.dragging {
        Style::default().bg(Color::Yellow).fg(Color::Black)
    } else {
        Style::default()
    };
    let palette = List::new(palette_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(palette_title(app.session.state().usage())),
        )
        .highlight_style(highlight);
    f.render_stateful_widget(palette, chunks[1], &mut app.palette_state);

    // Status panel
    let submit_hint = if snapshot.submission_enabled {
        "s: Submit"
    } else {
        "s: Submit (place every mark first)"
    };
    let mut status_lines = vec![outcome_line(snapshot.outcome)];
    if !app.status.is_empty() {
        status_lines.push(Line::from(app.status.clone()));
    }
    let status = Paragraph::new(status_lines)
        .block(Block::default().borders(Borders::ALL).title(submit_hint));
    f.render_widget(status, chunks[2]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("←/→: Choose word | "),
        Span::raw("Tab: Choose mark | "),
        Span::raw("Space/Enter: Pick up / Drop | "),
        Span::raw("Esc: Drop outside | "),
        Span::raw("r: Reset"),
    ]);
    f.render_widget(Paragraph::new(vec![help_text]), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use punctuation_practice_engine::PunctuationMark;

    #[test]
    fn test_keyboard_drag_places_palette_mark_on_cursor() {
        let mut app = App::new("Hi there. you ok?".to_string());

        // Palette has focus with "." selected; pick it up then move to "there"
        app.pick_or_drop();
        assert!(app.session.is_dragging());
        app.next_slot();
        app.pick_or_drop();

        let state = app.session.state();
        assert_eq!(
            state.slot(1).unwrap().punctuation(),
            Some(PunctuationMark::Period)
        );
        assert_eq!(state.slot(2).unwrap().word(), "You");
        assert!(app.status.is_empty());
    }

    #[test]
    fn test_escape_drops_carried_mark_outside() {
        let mut app = App::new("Hi there.".to_string());
        app.pick_or_drop();
        app.next_slot();
        app.pick_or_drop();

        // Pick the period back up from the sentence and drop it nowhere
        app.pick_or_drop();
        app.drop_outside();

        assert!(!app.session.state().slot(1).unwrap().is_filled());
        assert!(!app.session.is_dragging());
    }

    #[test]
    fn test_submit_before_all_marks_placed_sets_status() {
        let mut app = App::new("Hi there.".to_string());

        app.submit();

        assert_eq!(app.status, "Place every mark before submitting");
        assert_eq!(app.session.state().outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_titles_follow_drag_and_usage() {
        let mut app = App::new("Hi there, you.".to_string());
        assert_eq!(
            sentence_title(app.session.active_drag()),
            "Add the punctuation to the text"
        );
        assert_eq!(
            palette_title(app.session.state().usage()),
            "Punctuation (0/2 placed)"
        );

        // "," is first in the palette; carry it onto "there"
        app.pick_or_drop();
        assert_eq!(
            sentence_title(app.session.active_drag()),
            "Drop ',' on a word"
        );
        app.next_slot();
        app.pick_or_drop();

        assert_eq!(
            palette_title(app.session.state().usage()),
            "Punctuation (1/2 placed)"
        );
        assert_eq!(app.session.snapshot().palette[0].remaining, 0);
    }

    #[test]
    fn test_cursor_wraps_around_slots() {
        let mut app = App::new("One two three.".to_string());

        app.previous_slot();
        assert_eq!(app.cursor, 2);
        app.next_slot();
        assert_eq!(app.cursor, 0);
    }
}
