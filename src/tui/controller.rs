use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && (is_interrupt(key.code, key.modifiers) || handle_key(app, key.code))
                {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn is_interrupt(code: KeyCode, modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c'))
}

/// Apply one key press. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.help_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match app.scene {
        Scene::Setup => match code {
            KeyCode::Up | KeyCode::BackTab => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down | KeyCode::Tab => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::MenuBackspace);
            }
            KeyCode::Esc => {
                // nothing to return to yet
                if !app.handle_input(InputAction::MenuCancel) {
                    return true;
                }
            }
            KeyCode::Char(c) => {
                let _ = app.handle_input(InputAction::MenuChar(c));
            }
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char('?') => {
                let _ = app.handle_input(InputAction::ToggleHelp);
            }
            KeyCode::Char(' ') => {
                let _ = app.handle_input(InputAction::Step);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::PlayHand);
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let _ = app.handle_input(InputAction::ToggleAuto);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let _ = app.handle_input(InputAction::NewGame);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
    }
    false
}
