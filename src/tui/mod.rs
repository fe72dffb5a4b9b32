pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(250);

    let result: anyhow::Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.input_mode == app::InputMode::Help {
        // Any key exits help
        app.dismiss_help();
        return;
    }

    match app.screen {
        app::Screen::Setup => match key.code {
            KeyCode::Esc => app.should_quit = true,
            KeyCode::F(1) => app.show_help(),
            KeyCode::Tab | KeyCode::Down => app.next_setup_field(),
            KeyCode::BackTab | KeyCode::Up => app.previous_setup_field(),
            KeyCode::Left | KeyCode::Right if app.setup_field == app::SetupField::Holes => {
                app.toggle_holes()
            }
            KeyCode::Enter => app.start_round(),
            KeyCode::Backspace => app.setup_backspace(),
            KeyCode::Char(c) => app.setup_type(c),
            _ => {}
        },
        app::Screen::Play => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('?') | KeyCode::F(1) => app.show_help(),
            KeyCode::Tab | KeyCode::Down => app.next_input(),
            KeyCode::BackTab | KeyCode::Up => app.previous_input(),
            KeyCode::Enter => app.submit_hole(),
            KeyCode::Backspace => app.input_backspace(),
            KeyCode::Char(c) => app.type_digit(c),
            _ => {}
        },
        app::Screen::Finished => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('?') | KeyCode::F(1) => app.show_help(),
            KeyCode::Char('e') => app.export_round(),
            KeyCode::Char('n') => app.new_round(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keyboard_round_flow() {
        let mut app = App::new(&Config::default(), ThemeColors::dark(), false);
        type_str(&mut app, "Ann");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Bo");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Cy");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, app::Screen::Play);

        type_str(&mut app, "3");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "3");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        let round = app.round.as_ref().unwrap();
        assert_eq!(round.current_hole(), 2);
        let points: Vec<u32> = round.players().iter().map(|p| p.total_score).collect();
        assert_eq!(points, vec![4, 4, 1]);
    }

    #[test]
    fn test_q_is_typed_in_setup_but_quits_in_play() {
        let mut app = App::new(&Config::default(), ThemeColors::dark(), false);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.names[0], "q");

        app.screen = app::Screen::Play;
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_dismissed_by_any_key() {
        let mut app = App::new(&Config::default(), ThemeColors::dark(), false);
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.input_mode, app::InputMode::Help);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_mode, app::InputMode::Normal);
        assert!(app.names[0].is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = App::new(&Config::default(), ThemeColors::dark(), false);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
