use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use medsupply::app::{App, InputMode};
use medsupply::config::{self, Config};
use medsupply::core::Screen;
use medsupply::domain::{
    CapabilityEntry, Destination, HomePanels, PanelId, Role, ShellViews, ViewId,
};
use medsupply::{logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "medsupply",
    version,
    about = "MedSupply AI: role-gated logistics dashboard for the terminal"
)]
struct Args {
    /// Config file (default: $MEDSUPPLY_CONFIG or ~/.config/medsupply/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start signed in with a role accepted upstream (admin, warehouse, supplier, community)
    #[arg(long)]
    role: Option<String>,

    /// Log file (default: ~/.local/share/medsupply/medsupply.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print the views and Home panels each role may open
    Capabilities {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref())?;

    if let Some(Cmd::Capabilities { json }) = args.command {
        return print_capabilities(json);
    }

    // Reject a bad role before the terminal is taken over
    let startup_role = match args.role.as_deref() {
        Some(raw) => Some(raw.parse::<Role>().context("--role")?),
        None => config.startup_role()?,
    };

    let explicit_log = args.log_file.as_deref().or(config.log_file.as_deref());
    logging::setup(
        explicit_log,
        config::default_log_file().as_deref(),
        config.log_filter.as_deref(),
    )?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting medsupply");

    let mut app = App::new();
    app.status_ttl = config.status_ttl();
    if let Some(role) = startup_role {
        app.login(role);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    config: &Config,
) -> Result<()> {
    let tick_rate = config.tick_rate();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.screen() == Screen::Login {
        handle_login_mode(app, key);
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_login_mode(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Command => handle_command_mode(app, key),
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => app.move_login_selection(false),
            KeyCode::Down | KeyCode::Char('j') => app.move_login_selection(true),
            KeyCode::Enter => {
                app.login_selected();
            }
            KeyCode::Char(':') => app.enter_command(),
            _ => {}
        },
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char(':') | KeyCode::Char('/') => app.enter_command(),
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('j') | KeyCode::Down => {
            app.cycle_view(true);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cycle_view(false);
        }
        KeyCode::Tab => app.cycle_panel(true),
        KeyCode::BackTab => app.cycle_panel(false),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            app.go_to_shortcut(ch);
        }
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn print_capabilities(json: bool) -> Result<()> {
    let views: Vec<CapabilityEntry<ViewId>> = Role::ALL
        .iter()
        .map(|role| CapabilityEntry::of::<ShellViews>(*role))
        .collect();
    let panels: Vec<CapabilityEntry<PanelId>> = Role::ALL
        .iter()
        .map(|role| CapabilityEntry::of::<HomePanels>(*role))
        .collect();

    if json {
        let doc = serde_json::json!({ "views": views, "panels": panels });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Views (* = default)");
    for entry in &views {
        println!("  {:<10} {}", entry.role, format_entry(entry));
    }
    println!();
    println!("Home panels (* = default)");
    for entry in &panels {
        println!("  {:<10} {}", entry.role, format_entry(entry));
    }
    Ok(())
}

fn format_entry<I: Destination>(entry: &CapabilityEntry<I>) -> String {
    entry
        .permitted
        .iter()
        .map(|id| {
            if *id == entry.default {
                format!("{}*", id.as_str())
            } else {
                id.as_str().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
