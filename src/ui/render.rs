use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::page::Section;
use crate::ui::splash::draw_splash;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    if let Screen::Loading { sequencer, .. } = app.screen() {
        draw_splash(frame, sequencer.state(), app.now());
        return;
    }

    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let page = app.page_state().cloned().unwrap_or_default();

    let content = app.page_content(body.width);
    let current = content
        .as_ref()
        .map_or(Section::Home, |content| content.section_at(page.scroll));

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(&app.config().profile.name, current), header);

    frame.render_widget(Clear, body);
    if let Some(content) = content {
        let visible: Vec<_> = content
            .lines
            .into_iter()
            .skip(page.scroll)
            .take(body.height as usize)
            .collect();
        frame.render_widget(Paragraph::new(visible), body);
    }

    let footer_widget = Footer::new();
    frame.render_widget(
        footer_widget.widget(footer, page.show_all_projects),
        footer,
    );
}
