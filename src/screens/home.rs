use chrono::{Local, NaiveDate};

use crate::app::AppContext;
use crate::error::AppResult;
use crate::screens::{ScreenController, ScreenKind};
use crate::stats::ProgressRing;
use crate::theme::{ThemeSurface, apply_theme};
use crate::types::Quest;

pub const EMPTY_QUESTS_MESSAGE: &str = "No quests yet! Add a new one to begin your magic journey.";

pub enum QuestList<'a> {
    Empty(&'static str),
    Quests(&'a [Quest]),
}

impl<'a> QuestList<'a> {
    pub fn from_quests(quests: &'a [Quest]) -> Self {
        if quests.is_empty() {
            QuestList::Empty(EMPTY_QUESTS_MESSAGE)
        } else {
            QuestList::Quests(quests)
        }
    }
}

pub trait HomeView: ThemeSurface {
    fn render_date(&mut self, date: &str);
    fn render_quests(&mut self, list: QuestList<'_>);
    fn render_progress(&mut self, ring: &ProgressRing);
}

/// Header date, e.g. "Friday, October 16".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

pub struct HomeController<V: HomeView> {
    view: V,
    today: NaiveDate,
}

impl<V: HomeView> HomeController<V> {
    pub fn new(view: V) -> Self {
        Self::with_date(view, Local::now().date_naive())
    }

    pub fn with_date(view: V, today: NaiveDate) -> Self {
        Self { view, today }
    }

    /// Re-renders the list and the progress ring.
    pub fn refresh(&mut self, ctx: &AppContext) {
        self.view
            .render_quests(QuestList::from_quests(ctx.quests.all()));
        self.view
            .render_progress(&ProgressRing::for_quests(ctx.quests.all()));
    }

    /// Status toggle clicked for quest `id`. Returns the new completion
    /// state, or `None` for an unknown id, which changes nothing and triggers
    /// no re-render.
    pub fn toggle(&mut self, ctx: &mut AppContext, id: &str) -> AppResult<Option<bool>> {
        let completed = ctx.quests.toggle_completion(id)?;
        if completed.is_some() {
            self.quests_changed(ctx);
        }
        Ok(completed)
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: HomeView> ScreenController for HomeController<V> {
    fn activate(&mut self, ctx: &AppContext) {
        apply_theme(ctx.settings.get(), ScreenKind::Home, &mut self.view);
        self.view.render_date(&format_date(self.today));
        self.refresh(ctx);
        tracing::info!("home screen initialized");
    }

    fn quests_changed(&mut self, ctx: &AppContext) {
        self.refresh(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::memory_context;
    use crate::quests::tests::quest;
    use crate::screens::testing::{Rendered, RecordingView};
    use crate::theme::Theme;

    fn controller() -> HomeController<RecordingView> {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        HomeController::with_date(RecordingView::default(), date)
    }

    #[test]
    fn test_activate_empty_shows_message_and_zero() {
        let (ctx, _) = memory_context();
        let mut home = controller();
        home.activate(&ctx);

        assert_eq!(
            home.view().log,
            vec![
                Rendered::Theme(Theme::Light),
                Rendered::Date("Friday, October 16".to_string()),
                Rendered::Empty(EMPTY_QUESTS_MESSAGE.to_string()),
                Rendered::Progress(0),
            ]
        );
    }

    #[test]
    fn test_toggle_persists_and_rerenders() {
        let (mut ctx, backend) = memory_context();
        for id in ["a", "b", "c", "d"] {
            ctx.quests.add(quest(id, false, "2024-05-06T08:00:00Z")).unwrap();
        }
        let mut home = controller();
        home.activate(&ctx);
        assert_eq!(home.view().last_progress(), Some(0));

        let writes = backend.writes();
        assert_eq!(home.toggle(&mut ctx, "b").unwrap(), Some(true));
        assert_eq!(backend.writes(), writes + 1);
        assert_eq!(home.view().last_progress(), Some(25));
        assert!(ctx.quests.get("b").unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_does_not_render() {
        let (mut ctx, _) = memory_context();
        ctx.quests.add(quest("a", false, "2024-05-06T08:00:00Z")).unwrap();
        let mut home = controller();
        home.activate(&ctx);
        let rendered = home.view().log.len();

        assert_eq!(home.toggle(&mut ctx, "missing").unwrap(), None);
        assert_eq!(home.view().log.len(), rendered);
    }
}
