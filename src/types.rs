use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum QuestType {
    Health,
    Career,
    Hobby,
    Other,
}

impl QuestType {
    /// Symbol name of the icon shown next to a quest of this type.
    pub fn icon(self) -> &'static str {
        match self {
            QuestType::Health => "favorite",
            QuestType::Career => "settings",
            QuestType::Hobby => "brush",
            QuestType::Other => "category",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestType::Health => "Health",
            QuestType::Career => "Career",
            QuestType::Hobby => "Hobby",
            QuestType::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Difficulty {
    Apprentice,
    Adept,
    Archmage,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Apprentice => "Apprentice",
            Difficulty::Adept => "Adept",
            Difficulty::Archmage => "Archmage",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReminderFrequency {
    Daily,
    Weekly,
    Monthly,
    None,
}

impl ReminderFrequency {
    /// Frequencies offered as buttons on the add-quest form.
    pub const CHOICES: [ReminderFrequency; 3] = [
        ReminderFrequency::Daily,
        ReminderFrequency::Weekly,
        ReminderFrequency::Monthly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReminderFrequency::Daily => "Daily",
            ReminderFrequency::Weekly => "Weekly",
            ReminderFrequency::Monthly => "Monthly",
            ReminderFrequency::None => "None",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    pub difficulty: Difficulty,
    pub reminder: bool,
    pub reminder_frequency: ReminderFrequency,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Quest {
    /// Material symbol used for the completion toggle.
    pub fn status_icon(&self) -> &'static str {
        if self.completed {
            "task_alt"
        } else {
            "radio_button_unchecked"
        }
    }
}

pub const MAX_VOLUME: u8 = 100;
pub const DEFAULT_VOLUME: u8 = 75;

/// Accepts a number or a numeric string (older records stored the slider
/// value as text) and clamps it to `0..=MAX_VOLUME`. Anything else falls back
/// to [`DEFAULT_VOLUME`] so the rest of the record survives.
fn lenient_volume<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawVolume {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let level = match RawVolume::deserialize(deserializer)? {
        RawVolume::Number(n) => Some(n),
        RawVolume::Text(text) => text.trim().parse::<f64>().ok(),
        RawVolume::Other(_) => None,
    };
    match level.filter(|n| n.is_finite()) {
        Some(n) => Ok(n.round().clamp(0.0, f64::from(MAX_VOLUME)) as u8),
        None => {
            tracing::warn!("unreadable stored volume, using default");
            Ok(DEFAULT_VOLUME)
        }
    }
}

/// User preferences. Missing fields in a stored record fall back to the
/// defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub daily_whispers: bool,
    pub weekly_spells: bool,
    pub monthly_visions: bool,
    pub haptic_feedback: bool,
    #[serde(deserialize_with = "lenient_volume")]
    pub volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            daily_whispers: true,
            weekly_spells: false,
            monthly_visions: false,
            haptic_feedback: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Settings {
    /// Merge every field present in `update`, leaving the rest untouched.
    pub fn merge(&mut self, update: &SettingsUpdate) {
        if let Some(v) = update.dark_mode {
            self.dark_mode = v;
        }
        if let Some(v) = update.daily_whispers {
            self.daily_whispers = v;
        }
        if let Some(v) = update.weekly_spells {
            self.weekly_spells = v;
        }
        if let Some(v) = update.monthly_visions {
            self.monthly_visions = v;
        }
        if let Some(v) = update.haptic_feedback {
            self.haptic_feedback = v;
        }
        if let Some(v) = update.volume {
            self.volume = v.min(MAX_VOLUME);
        }
    }
}

/// Partial settings record; `None` leaves the stored value alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub dark_mode: Option<bool>,
    pub daily_whispers: Option<bool>,
    pub weekly_spells: Option<bool>,
    pub monthly_visions: Option<bool>,
    pub haptic_feedback: Option<bool>,
    pub volume: Option<u8>,
}

impl SettingsUpdate {
    pub fn dark_mode(value: bool) -> Self {
        Self {
            dark_mode: Some(value),
            ..Self::default()
        }
    }

    pub fn daily_whispers(value: bool) -> Self {
        Self {
            daily_whispers: Some(value),
            ..Self::default()
        }
    }

    pub fn weekly_spells(value: bool) -> Self {
        Self {
            weekly_spells: Some(value),
            ..Self::default()
        }
    }

    pub fn monthly_visions(value: bool) -> Self {
        Self {
            monthly_visions: Some(value),
            ..Self::default()
        }
    }

    pub fn haptic_feedback(value: bool) -> Self {
        Self {
            haptic_feedback: Some(value),
            ..Self::default()
        }
    }

    pub fn volume(value: u8) -> Self {
        Self {
            volume: Some(value),
            ..Self::default()
        }
    }
}
