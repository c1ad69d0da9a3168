//! Builds the scrollable portfolio page as a flat list of lines.
//!
//! The page is rebuilt every frame for the current width; each section
//! records the line it starts on so the header can highlight it and the
//! number keys can jump to it.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::config::{Profile, Project};
use crate::ui::layout::wrap_text;
use crate::ui::page::{PageState, Section};
use crate::ui::theme::{
    ACCENT_BLUE, ACCENT_PURPLE, PROGRESS_FILL, PROGRESS_TRACK, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

const INDENT: &str = "  ";
/// Non-featured projects shown before "show all" is toggled.
pub const COLLAPSED_PROJECTS: usize = 3;
const SKILL_NAME_WIDTH: usize = 14;
const MAX_SKILL_BAR: usize = 30;

/// What the hero's typewriter line currently shows.
#[derive(Debug, Clone, Copy)]
pub struct HeroText<'a> {
    pub text: &'a str,
    pub cursor_visible: bool,
}

/// Section anchors and page length. Independent of the typewriter text, so
/// it only changes with the width or the projects toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetrics {
    anchors: [usize; 4],
    line_count: usize,
}

impl PageMetrics {
    pub fn anchor(&self, section: Section) -> usize {
        self.anchors[section.index()]
    }

    /// Section whose heading is at or above `scroll`.
    pub fn section_at(&self, scroll: usize) -> Section {
        Section::ALL
            .into_iter()
            .rev()
            .find(|section| self.anchor(*section) <= scroll)
            .unwrap_or(Section::Home)
    }

    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.line_count.saturating_sub(viewport_height)
    }
}

pub struct PageContent {
    pub lines: Vec<Line<'static>>,
    pub metrics: PageMetrics,
}

impl PageContent {
    pub fn anchor(&self, section: Section) -> usize {
        self.metrics.anchor(section)
    }

    pub fn section_at(&self, scroll: usize) -> Section {
        self.metrics.section_at(scroll)
    }

    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.metrics.max_scroll(viewport_height)
    }
}

pub fn build_page(profile: &Profile, page: &PageState, hero: HeroText<'_>, width: u16) -> PageContent {
    let mut builder = PageBuilder {
        lines: Vec::new(),
        anchors: [0; 4],
        text_width: (width as usize).saturating_sub(INDENT.len() * 2).max(10),
    };

    builder.hero(profile, hero);
    builder.about(profile);
    builder.skills(profile);
    builder.projects(profile, page.show_all_projects);

    let metrics = PageMetrics {
        anchors: builder.anchors,
        line_count: builder.lines.len(),
    };
    PageContent {
        lines: builder.lines,
        metrics,
    }
}

/// Text progress bar, `width` cells of filled and empty blocks.
pub fn level_bar(level: u8, width: usize) -> (String, String) {
    let filled = (usize::from(level.min(100)) * width + 50) / 100;
    ("█".repeat(filled), "░".repeat(width - filled))
}

struct PageBuilder {
    lines: Vec<Line<'static>>,
    anchors: [usize; 4],
    text_width: usize,
}

impl PageBuilder {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn styled(&mut self, text: impl Into<String>, style: Style) {
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(text.into(), style),
        ]));
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.text_width) {
            self.styled(line, style);
        }
    }

    fn heading(&mut self, section: Section, title: &str) {
        self.anchors[section.index()] = self.lines.len();
        self.blank();
        self.styled(
            title.to_string(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
        self.styled(
            "─".repeat(title.chars().count().max(8)),
            Style::default().fg(ACCENT_PURPLE),
        );
        self.blank();
    }

    fn hero(&mut self, profile: &Profile, hero: HeroText<'_>) {
        self.anchors[Section::Home.index()] = self.lines.len();
        let muted = Style::default().fg(TEXT_MUTED);

        self.blank();
        self.styled(profile.greeting.clone(), Style::default().fg(ACCENT_BLUE));
        self.styled(
            profile.name.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
        self.blank();

        let cursor = if hero.cursor_visible { "|" } else { " " };
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("{} ", profile.tagline_prefix), muted),
            Span::styled(
                hero.text.to_string(),
                Style::default()
                    .fg(ACCENT_PURPLE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(cursor, Style::default().fg(ACCENT_PURPLE)),
        ]));
        self.blank();

        self.paragraph(&profile.description, muted);

        if !profile.socials.is_empty() {
            self.blank();
            for social in &profile.socials {
                self.lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(format!("{:<10}", social.label), Style::default().fg(TEXT_PRIMARY)),
                    Span::styled(social.url.clone(), Style::default().fg(ACCENT_BLUE)),
                ]));
            }
        }

        self.blank();
        self.styled("↓ Scroll Down", Style::default().fg(TEXT_DIM));
    }

    fn about(&mut self, profile: &Profile) {
        self.heading(Section::About, "About Me");
        let body = Style::default().fg(TEXT_MUTED);

        if !profile.about_title.is_empty() {
            self.styled(
                profile.about_title.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
            self.blank();
        }
        for paragraph in &profile.about {
            self.paragraph(paragraph, body);
            self.blank();
        }

        if !profile.stats.is_empty() {
            let mut spans = vec![Span::raw(INDENT)];
            for stat in &profile.stats {
                spans.push(Span::styled(
                    stat.value.clone(),
                    Style::default()
                        .fg(ACCENT_PURPLE)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(format!(" {}    ", stat.label), body));
            }
            self.lines.push(Line::from(spans));
            self.blank();
        }

        for highlight in &profile.highlights {
            self.styled(
                format!("◆ {}", highlight.title),
                Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
            );
            self.paragraph(&highlight.description, body);
        }
    }

    fn skills(&mut self, profile: &Profile) {
        self.heading(Section::Skills, "My Skills");
        let bar_width = self
            .text_width
            .saturating_sub(SKILL_NAME_WIDTH + 6)
            .clamp(5, MAX_SKILL_BAR);

        for category in &profile.skills {
            self.styled(
                category.title.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
            for skill in &category.skills {
                let (filled, empty) = level_bar(skill.level, bar_width);
                self.lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(
                        format!("{:<width$}", skill.name, width = SKILL_NAME_WIDTH),
                        Style::default().fg(TEXT_MUTED),
                    ),
                    Span::styled(filled, Style::default().fg(PROGRESS_FILL)),
                    Span::styled(empty, Style::default().fg(PROGRESS_TRACK)),
                    Span::styled(format!(" {:>3}%", skill.level), Style::default().fg(TEXT_DIM)),
                ]));
            }
            self.blank();
        }
    }

    fn projects(&mut self, profile: &Profile, show_all: bool) {
        self.heading(Section::Projects, "Featured Projects");

        let (featured, others): (Vec<&Project>, Vec<&Project>) =
            profile.projects.iter().partition(|p| p.featured);

        for project in featured {
            self.project(project);
        }

        if others.is_empty() {
            return;
        }
        self.styled(
            "Other Projects",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
        self.blank();

        let shown = if show_all {
            others.len()
        } else {
            others.len().min(COLLAPSED_PROJECTS)
        };
        for project in &others[..shown] {
            self.project(project);
        }

        if others.len() > COLLAPSED_PROJECTS {
            let hint = if show_all {
                "[m] Show Less".to_string()
            } else {
                format!("[m] Show More ({} hidden)", others.len() - shown)
            };
            self.styled(hint, Style::default().fg(ACCENT_BLUE));
            self.blank();
        }
    }

    fn project(&mut self, project: &Project) {
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("[{}] ", project.initials()),
                Style::default().fg(ACCENT_PURPLE),
            ),
            Span::styled(
                project.title.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        self.paragraph(&project.description, Style::default().fg(TEXT_MUTED));

        if !project.technologies.is_empty() {
            self.styled(
                project.technologies.join(" · "),
                Style::default().fg(ACCENT_BLUE),
            );
        }
        if let Some(github) = &project.github {
            self.styled(format!("Code: {}", github), Style::default().fg(TEXT_DIM));
        }
        if let Some(live) = &project.live {
            self.styled(format!("Live: {}", live), Style::default().fg(TEXT_DIM));
        }
        self.blank();
    }
}
