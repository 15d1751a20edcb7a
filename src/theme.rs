use clap::ValueEnum;

use crate::screens::ScreenKind;
use crate::types::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Active state of the light/dark buttons on the settings screen. Only
/// constructible from a [`Theme`], so exactly one button is ever active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeButtons {
    theme: Theme,
}

impl ThemeButtons {
    pub fn for_theme(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn light_active(self) -> bool {
        self.theme == Theme::Light
    }

    pub fn dark_active(self) -> bool {
        self.theme == Theme::Dark
    }
}

/// Presentation hooks the theme applier drives.
pub trait ThemeSurface {
    fn apply_theme(&mut self, theme: Theme);

    /// Only called while the settings screen is active.
    fn show_theme_buttons(&mut self, _buttons: ThemeButtons) {}
}

/// Applies `settings.dark_mode` to `surface` and, on the settings screen,
/// refreshes the two theme buttons.
pub fn apply_theme<S>(settings: &Settings, screen: ScreenKind, surface: &mut S) -> Theme
where
    S: ThemeSurface + ?Sized,
{
    let theme = Theme::from_dark_mode(settings.dark_mode);
    surface.apply_theme(theme);
    if screen == ScreenKind::Settings {
        surface.show_theme_buttons(ThemeButtons::for_theme(theme));
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Surface {
        theme: Option<Theme>,
        buttons: Option<ThemeButtons>,
    }

    impl ThemeSurface for Surface {
        fn apply_theme(&mut self, theme: Theme) {
            self.theme = Some(theme);
        }

        fn show_theme_buttons(&mut self, buttons: ThemeButtons) {
            self.buttons = Some(buttons);
        }
    }

    #[test]
    fn test_buttons_are_complements() {
        for theme in [Theme::Light, Theme::Dark] {
            let buttons = ThemeButtons::for_theme(theme);
            assert_ne!(buttons.light_active(), buttons.dark_active());
            assert_eq!(buttons.dark_active(), theme.is_dark());
        }
    }

    #[test]
    fn test_buttons_only_updated_on_settings_screen() {
        let settings = Settings {
            dark_mode: true,
            ..Settings::default()
        };

        let mut surface = Surface::default();
        assert_eq!(apply_theme(&settings, ScreenKind::Home, &mut surface), Theme::Dark);
        assert_eq!(surface.theme, Some(Theme::Dark));
        assert!(surface.buttons.is_none());

        apply_theme(&settings, ScreenKind::Settings, &mut surface);
        let buttons = surface.buttons.unwrap();
        assert!(buttons.dark_active());
        assert!(!buttons.light_active());
    }
}
