//! Terminal presentation for every screen.
//!
//! Controllers push fragments into a [`TerminalView`] as they render; the
//! binary paints the final frame once with [`TerminalView::present`].

use std::io::{self, Write};

use colored::{Color, ColoredString, Colorize};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::AppResult;
use crate::screens::{AddQuestView, Alerts, HomeView, QuestForm, QuestList, SettingsView, SummaryView};
use crate::stats::{ProgressRing, WeeklyChart};
use crate::theme::{Theme, ThemeButtons, ThemeSurface};
use crate::types::{Difficulty, Quest, QuestType, ReminderFrequency, Settings};

const GAUGE_WIDTH: usize = 20;
const BAR_WIDTH: usize = 10;

struct Palette {
    accent: Color,
    muted: Color,
    done: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                accent: Color::Magenta,
                muted: Color::BrightBlack,
                done: Color::Green,
            },
            Theme::Dark => Palette {
                accent: Color::BrightCyan,
                muted: Color::White,
                done: Color::BrightGreen,
            },
        }
    }
}

enum ListFragment {
    Empty(String),
    Quests(Vec<Quest>),
}

#[derive(Default)]
pub struct TerminalView {
    theme: Option<Theme>,
    buttons: Option<ThemeButtons>,
    date: Option<String>,
    list: Option<ListFragment>,
    progress: Option<ProgressRing>,
    counts: Option<(usize, usize)>,
    chart: Option<WeeklyChart>,
    form: Option<QuestForm>,
    settings: Option<Settings>,
    alerts: Vec<String>,
    haptic: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn present_stdout(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.present(&mut out)?;
        out.flush()
    }

    /// Writes the current frame: pending alerts first, then every fragment
    /// that was rendered.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        let palette = Palette::for_theme(self.theme.unwrap_or(Theme::Light));

        for alert in &self.alerts {
            writeln!(out, "{} {}", "!".color(palette.accent).bold(), alert.bold())?;
        }
        if self.haptic {
            writeln!(out, "{}", "~ bzz ~".color(palette.muted).italic())?;
        }

        if let Some(date) = &self.date {
            writeln!(out, "{}", date.color(palette.muted))?;
        }
        if let Some(ring) = &self.progress {
            writeln!(out, "{}", gauge(ring, &palette))?;
        }
        if let Some((created, completed)) = self.counts {
            writeln!(
                out,
                "Quests created: {}   Quests completed: {}",
                created.to_string().color(palette.accent).bold(),
                completed.to_string().color(palette.done).bold()
            )?;
        }
        if let Some(list) = &self.list {
            write_list(out, list, &palette)?;
        }
        if let Some(chart) = &self.chart {
            writeln!(out, "{}", "Weekly Arcana".color(palette.accent).bold())?;
            for (label, value) in chart.bars() {
                let filled = usize::from(value) * BAR_WIDTH / 100;
                writeln!(
                    out,
                    "  {label} {}{} {value:>3}%",
                    "█".repeat(filled).color(palette.accent),
                    "·".repeat(BAR_WIDTH - filled).color(palette.muted)
                )?;
            }
        }
        if let Some(form) = self.form.as_ref().filter(|f| **f != QuestForm::default()) {
            write_form(out, form, &palette)?;
        }
        if let Some(settings) = &self.settings {
            write_settings(out, settings, self.buttons, &palette)?;
        }
        Ok(())
    }
}

fn gauge(ring: &ProgressRing, palette: &Palette) -> String {
    let share = (ring.circumference - ring.dash_offset) / ring.circumference;
    let filled = ((share * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH);
    format!(
        "({}{}) {}",
        "●".repeat(filled).color(palette.done),
        "○".repeat(GAUGE_WIDTH - filled).color(palette.muted),
        format!("{}%", ring.percentage).bold()
    )
}

fn type_glyph(quest_type: QuestType) -> &'static str {
    match quest_type.icon() {
        "favorite" => "♥",
        "settings" => "⚙",
        "brush" => "✎",
        _ => "◆",
    }
}

fn status_glyph(quest: &Quest) -> &'static str {
    match quest.status_icon() {
        "task_alt" => "✔",
        _ => "○",
    }
}

fn write_list(out: &mut impl Write, list: &ListFragment, palette: &Palette) -> io::Result<()> {
    match list {
        ListFragment::Empty(message) => writeln!(out, "{}", message.color(palette.muted)),
        ListFragment::Quests(quests) => {
            for quest in quests {
                let name: ColoredString = if quest.completed {
                    quest.name.color(palette.done).strikethrough()
                } else {
                    quest.name.normal()
                };
                writeln!(
                    out,
                    "  {} {} {}  {}",
                    status_glyph(quest).color(palette.done),
                    type_glyph(quest.quest_type).color(palette.accent),
                    name,
                    quest.id.color(palette.muted)
                )?;
            }
            Ok(())
        }
    }
}

fn write_form(out: &mut impl Write, form: &QuestForm, palette: &Palette) -> io::Result<()> {
    let unset = || "-".color(palette.muted).to_string();
    writeln!(out, "{}", "New quest".color(palette.accent).bold())?;
    writeln!(out, "  Name:       {}", form.name)?;
    writeln!(
        out,
        "  Type:       {}",
        form.quest_type.map(|t| t.label().to_string()).unwrap_or_else(unset)
    )?;
    writeln!(
        out,
        "  Difficulty: {}",
        form.difficulty.map(|d| d.label().to_string()).unwrap_or_else(unset)
    )?;
    if form.frequency_options_visible() {
        let options: Vec<String> = ReminderFrequency::CHOICES
            .iter()
            .map(|f| {
                if form.frequency == Some(*f) {
                    format!("[{}]", f.label()).color(palette.accent).bold().to_string()
                } else {
                    f.label().to_string()
                }
            })
            .collect();
        writeln!(out, "  Reminder:   {}", options.join(" "))?;
    } else {
        writeln!(out, "  Reminder:   off")?;
    }
    Ok(())
}

fn write_settings(
    out: &mut impl Write,
    settings: &Settings,
    buttons: Option<ThemeButtons>,
    palette: &Palette,
) -> io::Result<()> {
    let toggle = |on: bool| {
        if on {
            "on".color(palette.done).bold()
        } else {
            "off".color(palette.muted)
        }
    };
    writeln!(out, "{}", "Settings".color(palette.accent).bold())?;
    writeln!(out, "  Daily whispers   {}", toggle(settings.daily_whispers))?;
    writeln!(out, "  Weekly spells    {}", toggle(settings.weekly_spells))?;
    writeln!(out, "  Monthly visions  {}", toggle(settings.monthly_visions))?;
    writeln!(out, "  Haptic feedback  {}", toggle(settings.haptic_feedback))?;
    writeln!(out, "  Volume           {}", settings.volume)?;
    if let Some(buttons) = buttons {
        let button = |label: &str, active: bool| {
            if active {
                format!("[{label}]").color(palette.accent).bold()
            } else {
                format!(" {label} ").color(palette.muted)
            }
        };
        writeln!(
            out,
            "  Theme            {} {}",
            button("Light", buttons.light_active()),
            button("Dark", buttons.dark_active())
        )?;
    }
    Ok(())
}

impl ThemeSurface for TerminalView {
    fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn show_theme_buttons(&mut self, buttons: ThemeButtons) {
        self.buttons = Some(buttons);
    }
}

impl Alerts for TerminalView {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

impl HomeView for TerminalView {
    fn render_date(&mut self, date: &str) {
        self.date = Some(date.to_string());
    }

    fn render_quests(&mut self, list: QuestList<'_>) {
        self.list = Some(match list {
            QuestList::Empty(message) => ListFragment::Empty(message.to_string()),
            QuestList::Quests(quests) => ListFragment::Quests(quests.to_vec()),
        });
    }

    fn render_progress(&mut self, ring: &ProgressRing) {
        self.progress = Some(*ring);
    }
}

impl SummaryView for TerminalView {
    fn render_progress(&mut self, ring: &ProgressRing) {
        self.progress = Some(*ring);
    }

    fn render_counts(&mut self, created: usize, completed: usize) {
        self.counts = Some((created, completed));
    }

    fn render_chart(&mut self, chart: &WeeklyChart) {
        self.chart = Some(*chart);
    }
}

impl AddQuestView for TerminalView {
    fn render_form(&mut self, form: &QuestForm) {
        self.form = Some(form.clone());
    }
}

impl SettingsView for TerminalView {
    fn render_settings(&mut self, settings: &Settings) {
        self.settings = Some(settings.clone());
    }

    fn haptic_pulse(&mut self, _duration_ms: u32) {
        self.haptic = true;
    }

    fn supports_edit_profile(&self) -> bool {
        true
    }
}

/// Walks the user through the creation form. An empty name is accepted here
/// so the form's own validation reports it.
pub fn prompt_quest_form() -> AppResult<QuestForm> {
    let theme = ColorfulTheme::default();
    let mut form = QuestForm::default();

    form.name = Input::<String>::with_theme(&theme)
        .with_prompt("Quest name")
        .allow_empty(true)
        .interact_text()?;

    let types = [QuestType::Health, QuestType::Career, QuestType::Hobby, QuestType::Other];
    let labels: Vec<&str> = types.iter().map(|t| t.label()).collect();
    let picked = Select::with_theme(&theme)
        .with_prompt("Type of magic")
        .items(&labels[..])
        .default(0)
        .interact()?;
    form.quest_type = types.get(picked).copied();

    let levels = [Difficulty::Apprentice, Difficulty::Adept, Difficulty::Archmage];
    let labels: Vec<&str> = levels.iter().map(|d| d.label()).collect();
    let picked = Select::with_theme(&theme)
        .with_prompt("Difficulty")
        .items(&labels[..])
        .default(0)
        .interact()?;
    form.difficulty = levels.get(picked).copied();

    let reminder = Confirm::with_theme(&theme)
        .with_prompt("Remind me?")
        .default(false)
        .interact()?;
    form.set_reminder(reminder);
    if reminder {
        let labels: Vec<&str> = ReminderFrequency::CHOICES.iter().map(|f| f.label()).collect();
        let picked = Select::with_theme(&theme)
            .with_prompt("How often")
            .items(&labels[..])
            .default(0)
            .interact()?;
        if let Some(frequency) = ReminderFrequency::CHOICES.get(picked) {
            form.select_frequency(*frequency);
        }
    }

    Ok(form)
}
