use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::metadata::{PKG_DESCRIPTION, PKG_NAME, PKG_VERSION};
use crate::screens::{QuestForm, SettingsInput};
use crate::theme::Theme;
use crate::types::{Difficulty, QuestType, ReminderFrequency};

#[derive(Parser, Debug, Clone)]
#[command(name = PKG_NAME)]
#[command(version = PKG_VERSION)]
#[command(about = PKG_DESCRIPTION, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Directory holding the quest and settings records
    #[arg(long, env = "MAGIC_QUESTS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show today's quests and overall progress
    Home,
    /// Mark a quest done (or not done) and show the home screen
    Toggle {
        /// Quest id as listed on the home screen
        id: String,
    },
    /// Craft a new quest
    Add(AddArgs),
    /// Show progress, counters and the weekly chart
    Summary,
    /// Change preferences, then show them
    Settings(SettingsArgs),
    /// Print version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AddArgs {
    /// Quest name
    #[arg(long)]
    pub name: Option<String>,

    /// Type of magic
    #[arg(long = "type", value_enum)]
    pub quest_type: Option<QuestType>,

    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Enable a reminder with this frequency
    #[arg(long, value_enum)]
    pub reminder: Option<ReminderFrequency>,

    /// Fill the form with prompts instead of flags
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,
}

impl AddArgs {
    pub fn form(&self) -> QuestForm {
        let mut form = QuestForm {
            name: self.name.clone().unwrap_or_default(),
            quest_type: self.quest_type,
            difficulty: self.difficulty,
            ..QuestForm::default()
        };
        if let Some(frequency) = self.reminder.filter(|f| *f != ReminderFrequency::None) {
            form.set_reminder(true);
            form.select_frequency(frequency);
        }
        form
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    #[arg(long, value_name = "BOOL")]
    pub daily_whispers: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub weekly_spells: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub monthly_visions: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub haptic_feedback: Option<bool>,

    /// Volume, 0 to 100
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub volume: Option<u8>,

    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Open the profile editor
    #[arg(long, default_value_t = false)]
    pub edit_profile: bool,
}

impl SettingsArgs {
    /// One input event per provided flag, in declaration order.
    pub fn inputs(&self) -> Vec<SettingsInput> {
        let mut inputs = Vec::new();
        if let Some(v) = self.daily_whispers {
            inputs.push(SettingsInput::DailyWhispers(v));
        }
        if let Some(v) = self.weekly_spells {
            inputs.push(SettingsInput::WeeklySpells(v));
        }
        if let Some(v) = self.monthly_visions {
            inputs.push(SettingsInput::MonthlyVisions(v));
        }
        if let Some(v) = self.haptic_feedback {
            inputs.push(SettingsInput::HapticFeedback(v));
        }
        if let Some(v) = self.volume {
            inputs.push(SettingsInput::Volume(v));
        }
        if let Some(theme) = self.theme {
            inputs.push(SettingsInput::Theme(theme));
        }
        if self.edit_profile {
            inputs.push(SettingsInput::EditProfile);
        }
        inputs
    }
}
