//! Loading and welcome screens shown while the intro runs.

use std::time::Duration;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_box;
use crate::ui::loading::{LoadingPhase, LoadingState};
use crate::ui::theme::{
    CORNER, PROGRESS_FILL, PROGRESS_TRACK, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
const SPINNER_FRAME: Duration = Duration::from_millis(120);
const DOT_FRAME: Duration = Duration::from_millis(300);
const BAR_WIDTH: usize = 32;
const CORNER_SIZE: u16 = 6;

pub fn draw_splash(frame: &mut Frame<'_>, state: &LoadingState, now: Duration) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    draw_corners(frame, area);

    let lines = match state.phase {
        LoadingPhase::Loading => loading_lines(state, now),
        LoadingPhase::Welcome => welcome_lines(now, false),
        LoadingPhase::Complete => welcome_lines(now, true),
    };
    let height = lines.len() as u16;
    let target = centered_box(BAR_WIDTH as u16 + 8, height, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

/// Left and right spinner glyphs, offset by half a turn.
pub fn spinner_glyphs(now: Duration) -> (char, char) {
    let index = (now.as_millis() / SPINNER_FRAME.as_millis()) as usize % SPINNER.len();
    (SPINNER[index], SPINNER[(index + 2) % SPINNER.len()])
}

pub fn progress_bar(progress: u8, width: usize) -> (String, String) {
    let filled = usize::from(progress.min(100)) * width / 100;
    ("━".repeat(filled), "─".repeat(width - filled))
}

/// Index of the highlighted welcome dot.
pub fn active_dot(now: Duration) -> usize {
    (now.as_millis() / DOT_FRAME.as_millis()) as usize % 3
}

fn loading_lines(state: &LoadingState, now: Duration) -> Vec<Line<'static>> {
    let (left, right) = spinner_glyphs(now);
    let (filled, empty) = progress_bar(state.progress, BAR_WIDTH);
    vec![
        Line::from(Span::styled(
            format!("{left}  Loading Portfolio...  {right}"),
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(filled, Style::default().fg(PROGRESS_FILL)),
            Span::styled(empty, Style::default().fg(PROGRESS_TRACK)),
        ]),
        Line::from(Span::styled(
            format!("{}%", state.progress),
            Style::default().fg(TEXT_MUTED),
        )),
    ]
}

fn welcome_lines(now: Duration, fading: bool) -> Vec<Line<'static>> {
    let fade = if fading {
        Modifier::DIM
    } else {
        Modifier::empty()
    };
    let active = active_dot(now);
    let dots: Vec<Span<'static>> = (0..3)
        .map(|i| {
            if i == active {
                Span::styled(" ● ", Style::default().fg(TEXT_PRIMARY).add_modifier(fade))
            } else {
                Span::styled(" · ", Style::default().fg(TEXT_DIM).add_modifier(fade))
            }
        })
        .collect();

    vec![
        Line::from(Span::styled(
            "W E L C O M E",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD | fade),
        )),
        Line::default(),
        Line::from(Span::styled(
            "to my digital world",
            Style::default().fg(TEXT_MUTED).add_modifier(fade),
        )),
        Line::default(),
        Line::from(dots),
    ]
}

fn draw_corners(frame: &mut Frame<'_>, area: Rect) {
    if area.width < CORNER_SIZE * 2 + 2 || area.height < 4 {
        return;
    }
    let style = Style::default().fg(CORNER);
    let bar = "─".repeat(CORNER_SIZE as usize - 1);
    let right = area.x + area.width - CORNER_SIZE;
    let bottom = area.y + area.height - 1;

    let corners = [
        (area.x, area.y, format!("┌{bar}")),
        (right, area.y, format!("{bar}┐")),
        (area.x, bottom, format!("└{bar}")),
        (right, bottom, format!("{bar}┘")),
    ];
    for (x, y, text) in corners {
        frame.render_widget(
            Paragraph::new(Span::styled(text, style)),
            Rect::new(x, y, CORNER_SIZE, 1),
        );
    }
}
