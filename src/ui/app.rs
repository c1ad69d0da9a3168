use std::time::Duration;

use ratatui::layout::Rect;

use crate::config::Config;
use crate::scheduler::{SchedulerHandle, TimerId};
use crate::ui::error::AppError;
use crate::ui::layout::body_rect;
use crate::ui::loading::{Completion, CompletionStatus, LoadingSequencer};
use crate::ui::mvi::Reducer;
use crate::ui::page::{PageIntent, PageReducer, PageState, Section};
use crate::ui::sections::{build_page, HeroText, PageContent, PageMetrics};
use crate::ui::typewriter::TypewriterCycler;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($target:expr, $reducer:ty, $intent:expr) => {
        $target = <$reducer>::reduce(std::mem::take(&mut $target), $intent);
    };
}

/// The portfolio page once the intro is over.
pub struct Portfolio {
    pub typewriter: TypewriterCycler,
    pub page: PageState,
}

pub enum Screen {
    Loading {
        sequencer: LoadingSequencer,
        completion: Completion,
    },
    Portfolio(Portfolio),
}

pub struct App {
    should_quit: bool,
    scheduler: SchedulerHandle,
    config: Config,
    screen: Screen,
    size: (u16, u16),
    /// Anchors and length of the page at the current size, rebuilt only when
    /// the layout can change.
    metrics: Option<PageMetrics>,
}

impl App {
    /// Mounts the intro (or the page directly when `skip_intro` is set).
    pub fn new(scheduler: SchedulerHandle, config: Config, skip_intro: bool) -> Result<Self, AppError> {
        let screen = if skip_intro {
            Screen::Portfolio(mount_portfolio(&scheduler, &config)?)
        } else {
            let mut sequencer = LoadingSequencer::new(&scheduler, (&config.loading).into());
            let completion = sequencer.run()?;
            Screen::Loading {
                sequencer,
                completion,
            }
        };

        let mut app = Self {
            should_quit: false,
            scheduler,
            config,
            screen,
            size: (80, 24),
            metrics: None,
        };
        app.refresh_metrics();
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading { .. })
    }

    /// Logical time of the scheduler, used for blink and spinner frames.
    pub fn now(&self) -> Duration {
        self.scheduler.borrow().now()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
        self.refresh_metrics();
        // Re-clamp the scroll position for the new geometry.
        self.scroll_by(0);
    }

    /// Routes a fired timer to whichever component armed it.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match &mut self.screen {
            Screen::Loading { sequencer, .. } => sequencer.on_timer(id),
            Screen::Portfolio(portfolio) => portfolio.typewriter.on_timer(id),
        }
    }

    /// Per-frame housekeeping: swaps the intro for the page once it completes.
    pub fn on_frame(&mut self) -> Result<(), AppError> {
        let status = match &mut self.screen {
            Screen::Loading { completion, .. } => completion.status(),
            Screen::Portfolio(_) => return Ok(()),
        };

        match status {
            CompletionStatus::Pending => {}
            CompletionStatus::Fired => {
                let portfolio = mount_portfolio(&self.scheduler, &self.config)?;
                // Dropping the old screen tears the sequencer down.
                self.screen = Screen::Portfolio(portfolio);
                self.refresh_metrics();
                tracing::info!("portfolio revealed");
            }
            CompletionStatus::Abandoned => {
                tracing::warn!("loading sequence abandoned, quitting");
                self.request_quit();
            }
        }
        Ok(())
    }

    pub fn page_state(&self) -> Option<&PageState> {
        match &self.screen {
            Screen::Portfolio(portfolio) => Some(&portfolio.page),
            Screen::Loading { .. } => None,
        }
    }

    /// Page lines for a body of `width` columns.
    pub fn page_content(&self, width: u16) -> Option<PageContent> {
        let Screen::Portfolio(portfolio) = &self.screen else {
            return None;
        };
        let hero = HeroText {
            text: portfolio.typewriter.text(),
            cursor_visible: TypewriterCycler::cursor_visible(self.now()),
        };
        Some(build_page(&self.config.profile, &portfolio.page, hero, width))
    }

    /// Section currently at the top of the body.
    pub fn current_section(&self) -> Section {
        match (&self.metrics, self.page_state()) {
            (Some(metrics), Some(page)) => metrics.section_at(page.scroll),
            _ => Section::Home,
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let Some(max) = self.max_scroll() else {
            return;
        };
        self.dispatch_page(PageIntent::ScrollBy { delta, max });
    }

    pub fn scroll_to_top(&mut self) {
        self.dispatch_page(PageIntent::ScrollTo { offset: 0, max: 0 });
    }

    pub fn scroll_to_bottom(&mut self) {
        let Some(max) = self.max_scroll() else {
            return;
        };
        self.dispatch_page(PageIntent::ScrollTo { offset: max, max });
    }

    pub fn page_height(&self) -> usize {
        self.body().height as usize
    }

    pub fn jump_to(&mut self, section: Section) {
        let (Some(metrics), Some(max)) = (self.metrics, self.max_scroll()) else {
            return;
        };
        self.dispatch_page(PageIntent::ScrollTo {
            offset: metrics.anchor(section),
            max,
        });
    }

    pub fn toggle_projects(&mut self) {
        self.dispatch_page(PageIntent::ToggleProjects);
        self.refresh_metrics();
        // Collapsing can shorten the page below the current scroll.
        self.scroll_by(0);
    }

    fn body(&self) -> Rect {
        body_rect(Rect::new(0, 0, self.size.0, self.size.1))
    }

    fn max_scroll(&self) -> Option<usize> {
        let height = self.body().height as usize;
        self.metrics.map(|metrics| metrics.max_scroll(height))
    }

    fn refresh_metrics(&mut self) {
        self.metrics = self
            .page_content(self.body().width)
            .map(|content| content.metrics);
    }

    fn dispatch_page(&mut self, intent: PageIntent) {
        if let Screen::Portfolio(portfolio) = &mut self.screen {
            dispatch_mvi!(portfolio.page, PageReducer, intent);
        }
    }
}

fn mount_portfolio(scheduler: &SchedulerHandle, config: &Config) -> Result<Portfolio, AppError> {
    let typewriter = TypewriterCycler::mount(
        scheduler,
        config.typewriter.phrases.clone(),
        (&config.typewriter).into(),
    )?;
    Ok(Portfolio {
        typewriter,
        page: PageState::default(),
    })
}
