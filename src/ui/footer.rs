use crate::ui::theme::{GLOBAL_BORDER, TEXT_PRIMARY};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left, version on the right.
    pub fn widget(&self, area: Rect, show_all_projects: bool) -> Paragraph<'static> {
        let hints = Self::hints(show_all_projects);
        let version = format!("v{} ", VERSION);

        // Padding by char count, the hints contain multi-byte glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl Footer {
    fn hints(show_all_projects: bool) -> String {
        let projects = if show_all_projects {
            "m: Fewer projects"
        } else {
            "m: More projects"
        };
        format!(" ↑↓/PgUp/PgDn: Scroll │ 1-4/Tab: Jump │ {} │ q: Quit", projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_project_toggle() {
        assert!(Footer::hints(false).contains("More projects"));
        assert!(Footer::hints(true).contains("Fewer projects"));
    }
}
