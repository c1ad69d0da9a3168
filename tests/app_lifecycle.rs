mod common;

use common::Harness;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use termfolio::config::Config;
use termfolio::ui::app::{App, Screen};
use termfolio::ui::input::handle_key;
use termfolio::ui::page::Section;
use termfolio::ui::render::draw;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Moves time forward in 10 ms frames, the way the runtime loop does.
fn pump(harness: &Harness, app: &mut App, ms: u64) {
    for _ in 0..ms / 10 {
        harness.advance(10, |id| {
            app.on_timer(id);
        });
        app.on_frame().expect("frame should succeed");
    }
}

fn portfolio_app(harness: &Harness) -> App {
    App::new(harness.handle(), Config::default(), true).expect("app should start")
}

fn hero_text(app: &App) -> String {
    match app.screen() {
        Screen::Portfolio(portfolio) => portfolio.typewriter.text().to_string(),
        Screen::Loading { .. } => panic!("still loading"),
    }
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn intro_hands_over_to_the_portfolio() {
    let harness = Harness::new();
    let mut app = App::new(harness.handle(), Config::default(), false).expect("app should start");
    assert!(app.is_loading());
    assert!(app.page_state().is_none());

    pump(&harness, &mut app, 6490);
    assert!(app.is_loading());

    pump(&harness, &mut app, 10);
    assert!(!app.is_loading());
    assert!(!app.should_quit());
    assert_eq!(app.page_state().map(|page| page.scroll), Some(0));
    // Only the typewriter's timer is left; the intro cleaned up after itself.
    assert_eq!(harness.pending(), 1);
}

#[test]
fn typewriter_starts_once_revealed() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);
    assert_eq!(hero_text(&app), "");

    pump(&harness, &mut app, 150);
    assert_eq!(hero_text(&app), "W");
    pump(&harness, &mut app, 150);
    assert_eq!(hero_text(&app), "We");
}

#[test]
fn skip_intro_mounts_the_page_directly() {
    let harness = Harness::new();
    let app = portfolio_app(&harness);
    assert!(!app.is_loading());
    assert_eq!(harness.pending(), 1);
}

#[test]
fn quit_keys_work_in_every_screen() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let harness = Harness::new();
        let mut app = App::new(harness.handle(), Config::default(), false).expect("app");
        handle_key(&mut app, key(code));
        assert!(app.should_quit());
    }

    let harness = Harness::new();
    let mut app = portfolio_app(&harness);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn navigation_is_ignored_while_loading() {
    let harness = Harness::new();
    let mut app = App::new(harness.handle(), Config::default(), false).expect("app");
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Char('m')));
    assert!(app.is_loading());
    assert!(app.page_state().is_none());
    assert!(!app.should_quit());
}

#[test]
fn scrolling_is_clamped() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);

    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.page_state().map(|p| p.scroll), Some(0));

    handle_key(&mut app, key(KeyCode::Char('j')));
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.page_state().map(|p| p.scroll), Some(2));
    handle_key(&mut app, key(KeyCode::Char('k')));
    assert_eq!(app.page_state().map(|p| p.scroll), Some(1));

    handle_key(&mut app, key(KeyCode::End));
    let bottom = app.page_state().map(|p| p.scroll).unwrap_or_default();
    assert!(bottom > 0);
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.page_state().map(|p| p.scroll), Some(bottom));

    handle_key(&mut app, key(KeyCode::Home));
    assert_eq!(app.page_state().map(|p| p.scroll), Some(0));
}

#[test]
fn page_keys_move_by_a_screen() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);
    let step = app.page_height() - 1;

    handle_key(&mut app, key(KeyCode::PageDown));
    assert_eq!(app.page_state().map(|p| p.scroll), Some(step));
    handle_key(&mut app, key(KeyCode::PageUp));
    assert_eq!(app.page_state().map(|p| p.scroll), Some(0));
}

#[test]
fn number_keys_jump_to_sections() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);

    handle_key(&mut app, key(KeyCode::Char('2')));
    assert_eq!(app.current_section(), Section::About);
    handle_key(&mut app, key(KeyCode::Char('3')));
    assert_eq!(app.current_section(), Section::Skills);
    handle_key(&mut app, key(KeyCode::Char('1')));
    assert_eq!(app.current_section(), Section::Home);
    assert_eq!(app.page_state().map(|p| p.scroll), Some(0));
}

#[test]
fn tab_cycles_sections() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);

    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.current_section(), Section::About);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.current_section(), Section::Skills);
    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.current_section(), Section::About);
}

#[test]
fn m_toggles_all_projects() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);

    handle_key(&mut app, key(KeyCode::Char('m')));
    assert_eq!(app.page_state().map(|p| p.show_all_projects), Some(true));
    handle_key(&mut app, key(KeyCode::Char('m')));
    assert_eq!(app.page_state().map(|p| p.show_all_projects), Some(false));
}

#[test]
fn collapsing_projects_reclamps_scroll() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);

    handle_key(&mut app, key(KeyCode::Char('m')));
    handle_key(&mut app, key(KeyCode::End));
    let expanded_bottom = app.page_state().map(|p| p.scroll).unwrap_or_default();

    handle_key(&mut app, key(KeyCode::Char('m')));
    let collapsed = app.page_state().map(|p| p.scroll).unwrap_or_default();
    assert!(collapsed < expanded_bottom);
}

#[test]
fn resize_reclamps_scroll() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);
    handle_key(&mut app, key(KeyCode::End));
    let bottom = app.page_state().map(|p| p.scroll).unwrap_or_default();

    app.on_resize(80, 60);
    let after = app.page_state().map(|p| p.scroll).unwrap_or_default();
    assert!(after < bottom);
}

#[test]
fn splash_and_page_render() {
    let harness = Harness::new();
    let mut app = App::new(harness.handle(), Config::default(), false).expect("app");

    pump(&harness, &mut app, 1000);
    let splash = screen_text(&app);
    assert!(splash.contains("Loading Portfolio..."));
    assert!(splash.contains("40%"));

    pump(&harness, &mut app, 2000);
    assert!(screen_text(&app).contains("W E L C O M E"));

    pump(&harness, &mut app, 3500);
    let page = screen_text(&app);
    assert!(page.contains("Sudhanshu Sharma"));
    assert!(page.contains("q: Quit"));
}

#[test]
fn section_jumps_follow_the_current_width() {
    let harness = Harness::new();
    let mut app = portfolio_app(&harness);

    handle_key(&mut app, key(KeyCode::Char('3')));
    let wide = app.page_state().map(|p| p.scroll).unwrap_or_default();

    // Narrower text wraps onto more lines, pushing Skills further down.
    app.on_resize(40, 24);
    handle_key(&mut app, key(KeyCode::Char('3')));
    let narrow = app.page_state().map(|p| p.scroll).unwrap_or_default();
    assert!(narrow > wide);
    assert_eq!(app.current_section(), Section::Skills);

    // Typing in the hero does not move the anchors.
    pump(&harness, &mut app, 600);
    assert_eq!(app.current_section(), Section::Skills);
    assert_eq!(app.page_state().map(|p| p.scroll), Some(narrow));
}
