use chrono::{DateTime, Utc};
use ulid::Ulid;

use crate::app::AppContext;
use crate::error::{AppResult, ValidationError};
use crate::screens::{Alerts, ScreenController, ScreenKind};
use crate::theme::{ThemeSurface, apply_theme};
use crate::types::{Difficulty, Quest, QuestType, ReminderFrequency};

/// State of the quest creation form. `None` means nothing selected in that
/// group yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestForm {
    pub name: String,
    pub quest_type: Option<QuestType>,
    pub difficulty: Option<Difficulty>,
    pub reminder: bool,
    /// Only ever `Some` while `reminder` is on.
    pub frequency: Option<ReminderFrequency>,
}

impl QuestForm {
    /// Turning reminders on picks `Daily` when no frequency is selected;
    /// turning them off clears the selection.
    pub fn set_reminder(&mut self, enabled: bool) {
        self.reminder = enabled;
        if !enabled {
            self.frequency = None;
        } else if self.frequency.is_none() {
            self.frequency = Some(ReminderFrequency::Daily);
        }
    }

    /// Frequency buttons are hidden while reminders are off.
    pub fn select_frequency(&mut self, frequency: ReminderFrequency) -> bool {
        if !self.reminder || frequency == ReminderFrequency::None {
            return false;
        }
        self.frequency = Some(frequency);
        true
    }

    pub fn frequency_options_visible(&self) -> bool {
        self.reminder
    }

    /// Checks name, then type, then difficulty, stopping at the first gap.
    pub fn validate(&self) -> Result<QuestDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let quest_type = self.quest_type.ok_or(ValidationError::MissingType)?;
        let difficulty = self.difficulty.ok_or(ValidationError::MissingDifficulty)?;
        let reminder_frequency = if self.reminder {
            self.frequency.unwrap_or(ReminderFrequency::Daily)
        } else {
            ReminderFrequency::None
        };

        Ok(QuestDraft {
            name: name.to_string(),
            quest_type,
            difficulty,
            reminder: self.reminder,
            reminder_frequency,
        })
    }
}

/// A validated form, ready to become a [`Quest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestDraft {
    pub name: String,
    pub quest_type: QuestType,
    pub difficulty: Difficulty,
    pub reminder: bool,
    pub reminder_frequency: ReminderFrequency,
}

impl QuestDraft {
    pub fn into_quest(self, created_at: DateTime<Utc>) -> Quest {
        Quest {
            id: Ulid::new().to_string(),
            name: self.name,
            quest_type: self.quest_type,
            difficulty: self.difficulty,
            reminder: self.reminder,
            reminder_frequency: self.reminder_frequency,
            completed: false,
            created_at,
        }
    }
}

pub trait AddQuestView: ThemeSurface + Alerts {
    fn render_form(&mut self, form: &QuestForm);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    /// Quest stored; the caller should switch to `next`.
    Created { id: String, next: ScreenKind },
}

pub struct AddQuestController<V: AddQuestView> {
    view: V,
    form: QuestForm,
}

impl<V: AddQuestView> AddQuestController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            form: QuestForm::default(),
        }
    }

    pub fn form(&self) -> &QuestForm {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
        self.view.render_form(&self.form);
    }

    pub fn select_type(&mut self, quest_type: QuestType) {
        self.form.quest_type = Some(quest_type);
        self.view.render_form(&self.form);
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.form.difficulty = Some(difficulty);
        self.view.render_form(&self.form);
    }

    pub fn set_reminder(&mut self, enabled: bool) {
        self.form.set_reminder(enabled);
        self.view.render_form(&self.form);
    }

    pub fn select_frequency(&mut self, frequency: ReminderFrequency) {
        if self.form.select_frequency(frequency) {
            self.view.render_form(&self.form);
        }
    }

    /// Validates and stores the form as a new quest. A rejected form leaves
    /// the repository and the form untouched.
    pub fn submit(&mut self, ctx: &mut AppContext, now: DateTime<Utc>) -> AppResult<SubmitOutcome> {
        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(%err, "quest form rejected");
                self.view.alert(&err.to_string());
                return Ok(SubmitOutcome::Rejected(err));
            }
        };

        let quest = draft.into_quest(now);
        let id = quest.id.clone();
        let message = format!("Quest \"{}\" crafted!", quest.name);
        ctx.quests.add(quest)?;
        self.quests_changed(ctx);
        self.view.alert(&message);

        self.form = QuestForm::default();
        self.view.render_form(&self.form);

        Ok(SubmitOutcome::Created {
            id,
            next: ScreenKind::Home,
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: AddQuestView> ScreenController for AddQuestController<V> {
    fn activate(&mut self, ctx: &AppContext) {
        apply_theme(ctx.settings.get(), ScreenKind::AddQuest, &mut self.view);
        self.view.render_form(&self.form);
        tracing::info!("add quest screen initialized");
    }
}
