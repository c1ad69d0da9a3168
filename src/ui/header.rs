use crate::ui::page::Section;
use crate::ui::theme::{ACCENT_BLUE, GLOBAL_BORDER, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation bar. The section currently in view is highlighted.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, name: &str, current: Section) -> Paragraph<'static> {
        let brand_style = Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(TEXT_DIM);

        let mut spans = vec![
            Span::styled("  ", brand_style),
            Span::styled(name.to_string(), brand_style),
            Span::styled("  │ ", separator_style),
        ];
        for section in Section::ALL {
            let style = if section == current {
                Style::default()
                    .fg(ACCENT_BLUE)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(TEXT_MUTED)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{} {}", section.index() + 1, section.title()),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
