//! Screen controllers. Each one binds a view to the repositories in
//! [`AppContext`](crate::app::AppContext); the view traits are the only
//! contact with presentation.

pub mod add_quest;
pub mod home;
pub mod settings;
pub mod summary;

use crate::app::AppContext;

pub use add_quest::{AddQuestController, AddQuestView, QuestForm, SubmitOutcome};
pub use home::{HomeController, HomeView, QuestList};
pub use settings::{SettingsController, SettingsInput, SettingsView};
pub use summary::{SummaryController, SummaryView};

/// Marker for the screen that is currently active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Home,
    AddQuest,
    Summary,
    Settings,
}

/// Blocking user-facing message.
pub trait Alerts {
    fn alert(&mut self, message: &str);
}

pub trait ScreenController {
    /// First render after the screen becomes active.
    fn activate(&mut self, ctx: &AppContext);

    /// Called after the quest collection changed. Screens that show no quest
    /// data ignore it.
    fn quests_changed(&mut self, _ctx: &AppContext) {}
}
