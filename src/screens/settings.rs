use crate::app::AppContext;
use crate::error::AppResult;
use crate::screens::{Alerts, ScreenController, ScreenKind};
use crate::theme::{Theme, ThemeSurface, apply_theme};
use crate::types::{Settings, SettingsUpdate};

pub const HAPTIC_PULSE_MS: u32 = 50;
pub const EDIT_PROFILE_MESSAGE: &str = "Edit Profile is not available yet.";

/// One input event on the settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsInput {
    DailyWhispers(bool),
    WeeklySpells(bool),
    MonthlyVisions(bool),
    HapticFeedback(bool),
    Volume(u8),
    Theme(Theme),
    EditProfile,
}

impl SettingsInput {
    fn update(self) -> Option<SettingsUpdate> {
        Some(match self {
            SettingsInput::DailyWhispers(v) => SettingsUpdate::daily_whispers(v),
            SettingsInput::WeeklySpells(v) => SettingsUpdate::weekly_spells(v),
            SettingsInput::MonthlyVisions(v) => SettingsUpdate::monthly_visions(v),
            SettingsInput::HapticFeedback(v) => SettingsUpdate::haptic_feedback(v),
            SettingsInput::Volume(v) => SettingsUpdate::volume(v),
            SettingsInput::Theme(theme) => SettingsUpdate::dark_mode(theme.is_dark()),
            SettingsInput::EditProfile => return None,
        })
    }
}

pub trait SettingsView: ThemeSurface + Alerts {
    fn render_settings(&mut self, settings: &Settings);

    fn haptic_pulse(&mut self, _duration_ms: u32) {}

    /// Whether the view offers an edit-profile entry.
    fn supports_edit_profile(&self) -> bool {
        false
    }
}

pub struct SettingsController<V: SettingsView> {
    view: V,
}

impl<V: SettingsView> SettingsController<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    /// Applies one input: a single-field update, persisted immediately, then
    /// the theme is re-applied.
    pub fn handle(&mut self, ctx: &mut AppContext, input: SettingsInput) -> AppResult<()> {
        let Some(update) = input.update() else {
            if self.view.supports_edit_profile() {
                self.view.alert(EDIT_PROFILE_MESSAGE);
            }
            return Ok(());
        };

        let settings = match input {
            SettingsInput::Theme(theme) => ctx.settings.set_theme(theme)?,
            _ => ctx.settings.set(&update)?,
        };
        apply_theme(settings, ScreenKind::Settings, &mut self.view);

        if input == SettingsInput::HapticFeedback(true) {
            self.view.haptic_pulse(HAPTIC_PULSE_MS);
        }
        Ok(())
    }

    pub fn refresh(&mut self, ctx: &AppContext) {
        self.view.render_settings(ctx.settings.get());
        apply_theme(ctx.settings.get(), ScreenKind::Settings, &mut self.view);
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: SettingsView> ScreenController for SettingsController<V> {
    fn activate(&mut self, ctx: &AppContext) {
        self.refresh(ctx);
        tracing::info!("settings screen initialized");
    }
}
