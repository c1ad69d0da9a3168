use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::app::App;
use crate::ui::page::Section;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
    if quit {
        app.request_quit();
        return;
    }

    // The intro plays out on its own; only quitting is allowed.
    if app.is_loading() {
        return;
    }

    let page = app.page_height().saturating_sub(1).max(1) as isize;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-page),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(page),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Tab => {
            let next = app.current_section().next();
            app.jump_to(next);
        }
        KeyCode::BackTab => {
            let prev = app.current_section().prev();
            app.jump_to(prev);
        }
        KeyCode::Char('m') => app.toggle_projects(),
        KeyCode::Char(c) => {
            if let Some(section) = Section::from_digit(c) {
                app.jump_to(section);
            }
        }
        _ => {}
    }
}
