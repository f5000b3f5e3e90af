//! Interactive TUI form: edit the profile and watch every message update.

pub mod app;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use outreach_core::{Block, Clipboard, OutreachProfile};

use app::App;

/// Launch the interactive form seeded with `profile`.
pub fn run_form(profile: OutreachProfile, clipboard: Box<dyn Clipboard>) -> Result<()> {
    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(profile, clipboard);
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Nothing changes between key presses, so block until the next event.
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Clear status message on any keypress.
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('u') => app.clear_field(),
            KeyCode::Char('y') => app.copy(Block::Intro),
            KeyCode::Char('f') => app.copy(Block::FollowUp),
            KeyCode::Char('p') => app.copy(Block::Plan),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.cycle_choice(false),
        KeyCode::Right => app.cycle_choice(true),
        KeyCode::Enter => app.enter(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::PageDown => app.scroll_output_down(),
        KeyCode::PageUp => app.scroll_output_up(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app::Field;
    use outreach_core::ClipboardError;

    struct NoClipboard;

    impl Clipboard for NoClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("test".into()))
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn keys_drive_the_form() {
        let mut app = App::new(OutreachProfile::default(), Box::new(NoClipboard));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Country);
        for c in "UAE".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.output.intro.contains("buyers in UAE"));
        assert_eq!(app.output.advice[0], "Use warm greetings; show respect and patience.");

        ctrl(&mut app, 'u');
        assert!(app.profile.country.is_empty());
    }

    #[test]
    fn ctrl_shortcuts_do_not_type() {
        let mut app = App::new(OutreachProfile::default(), Box::new(NoClipboard));
        app.focus = Field::Country;
        ctrl(&mut app, 'y');
        assert!(app.profile.country.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Copy failed. Select and copy manually.")
        );

        press(&mut app, KeyCode::Char('x'));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = App::new(OutreachProfile::default(), Box::new(NoClipboard));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(OutreachProfile::default(), Box::new(NoClipboard));
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
