use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use magic_quests::app::AppContext;
use magic_quests::cli::{AddArgs, Cli, Command, GlobalOptions, SettingsArgs};
use magic_quests::config::AppConfig;
use magic_quests::error::AppResult;
use magic_quests::metadata::{PKG_NAME, PKG_VERSION};
use magic_quests::screens::{
    AddQuestController, HomeController, ScreenController, ScreenKind, SettingsController,
    SubmitOutcome, SummaryController,
};
use magic_quests::store::{FileStore, PersistentStore};
use magic_quests::terminal::{TerminalView, prompt_quest_form};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| magic_quests::config::log_filter(cli.options.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn load_context(options: &GlobalOptions) -> AppResult<AppContext> {
    let config = AppConfig::resolve(options)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "loading records");
    Ok(AppContext::load(PersistentStore::new(FileStore::new(
        &config.data_dir,
    ))))
}

fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Command::Version => println!("{PKG_NAME} {PKG_VERSION}"),
        Command::Home => show_home(&load_context(&cli.options)?)?,
        Command::Toggle { id } => {
            let mut ctx = load_context(&cli.options)?;
            let mut home = HomeController::new(TerminalView::new());
            home.activate(&ctx);
            if home.toggle(&mut ctx, &id)?.is_none() {
                tracing::warn!(%id, "no quest with this id");
            }
            home.view().present_stdout()?;
        }
        Command::Add(args) => add_quest(&mut load_context(&cli.options)?, &args)?,
        Command::Summary => {
            let ctx = load_context(&cli.options)?;
            let mut summary = SummaryController::new(TerminalView::new());
            summary.activate(&ctx);
            summary.view().present_stdout()?;
        }
        Command::Settings(args) => change_settings(&mut load_context(&cli.options)?, &args)?,
    }
    Ok(())
}

fn show_home(ctx: &AppContext) -> AppResult<()> {
    let mut home = HomeController::new(TerminalView::new());
    home.activate(ctx);
    home.view().present_stdout()?;
    Ok(())
}

fn add_quest(ctx: &mut AppContext, args: &AddArgs) -> AppResult<()> {
    let mut screen = AddQuestController::new(TerminalView::new());
    screen.activate(ctx);

    let form = if args.interactive {
        prompt_quest_form()?
    } else {
        args.form()
    };
    screen.set_name(form.name);
    if let Some(quest_type) = form.quest_type {
        screen.select_type(quest_type);
    }
    if let Some(difficulty) = form.difficulty {
        screen.select_difficulty(difficulty);
    }
    screen.set_reminder(form.reminder);
    if let Some(frequency) = form.frequency {
        screen.select_frequency(frequency);
    }

    let outcome = screen.submit(ctx, Utc::now())?;
    screen.view().present_stdout()?;
    if let SubmitOutcome::Created {
        next: ScreenKind::Home,
        ..
    } = outcome
    {
        show_home(ctx)?;
    }
    Ok(())
}

fn change_settings(ctx: &mut AppContext, args: &SettingsArgs) -> AppResult<()> {
    let mut screen = SettingsController::new(TerminalView::new());
    screen.activate(ctx);
    for input in args.inputs() {
        screen.handle(ctx, input)?;
    }
    screen.refresh(ctx);
    screen.view().present_stdout()?;
    Ok(())
}
