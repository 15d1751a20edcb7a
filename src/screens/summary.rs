use chrono::{Local, TimeZone};

use crate::app::AppContext;
use crate::screens::{ScreenController, ScreenKind};
use crate::stats::{ProgressRing, WeeklyChart};
use crate::theme::{ThemeSurface, apply_theme};

pub trait SummaryView: ThemeSurface {
    fn render_progress(&mut self, ring: &ProgressRing);
    fn render_counts(&mut self, created: usize, completed: usize);
    fn render_chart(&mut self, chart: &WeeklyChart);
}

/// Progress ring, created/completed counters and the weekly chart. Weekdays
/// are taken in `tz`.
pub struct SummaryController<V: SummaryView, Tz: TimeZone = Local> {
    view: V,
    tz: Tz,
}

impl<V: SummaryView> SummaryController<V, Local> {
    pub fn new(view: V) -> Self {
        Self::with_timezone(view, Local)
    }
}

impl<V: SummaryView, Tz: TimeZone> SummaryController<V, Tz> {
    pub fn with_timezone(view: V, tz: Tz) -> Self {
        Self { view, tz }
    }

    pub fn refresh(&mut self, ctx: &AppContext) {
        let quests = ctx.quests.all();
        self.view.render_progress(&ProgressRing::for_quests(quests));
        self.view
            .render_counts(ctx.quests.count(), ctx.quests.count_completed());
        self.view
            .render_chart(&WeeklyChart::from_quests_in(quests, &self.tz));
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: SummaryView, Tz: TimeZone> ScreenController for SummaryController<V, Tz> {
    fn activate(&mut self, ctx: &AppContext) {
        apply_theme(ctx.settings.get(), ScreenKind::Summary, &mut self.view);
        self.refresh(ctx);
        tracing::info!("summary screen initialized");
    }

    fn quests_changed(&mut self, ctx: &AppContext) {
        self.refresh(ctx);
    }
}
