use std::time::{Duration, Instant};

use tracing::warn;

use crate::core::{
    parse_command, Action, Command, NavigateTarget, NotifyLevel, Screen, SessionRequest, Shell,
};
use crate::domain::{Destination, Role, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    /// Session, navigation and panel state
    pub shell: Shell,
    pub input_mode: InputMode,
    pub command: CommandBar,
    /// Highlighted entry of the login surface, an index into `Role::ALL`
    pub login_selection: usize,
    pub status: Option<StatusMessage>,
    pub status_ttl: Duration,
    pub help_open: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            shell: Shell::new(),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            login_selection: 0,
            status: None,
            status_ttl: Duration::from_secs(3),
            help_open: false,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.shell.screen()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > self.status_ttl {
                self.status = None;
            }
        }
    }

    // === Login surface ===

    pub fn selected_login_role(&self) -> Role {
        Role::ALL[self.login_selection % Role::ALL.len()]
    }

    pub fn move_login_selection(&mut self, forward: bool) {
        let len = Role::ALL.len();
        self.login_selection = if forward {
            (self.login_selection + 1) % len
        } else {
            (self.login_selection + len - 1) % len
        };
    }

    pub fn login(&mut self, role: Role) -> ViewId {
        let view = self.shell.login(role);
        self.after_login(role);
        view
    }

    fn after_login(&mut self, role: Role) {
        self.help_open = false;
        self.set_status(format!("Signed in as {}", role.title()), StatusLevel::Info);
    }

    pub fn login_selected(&mut self) -> ViewId {
        self.login(self.selected_login_role())
    }

    pub fn logout(&mut self) {
        self.shell.logout();
        self.help_open = false;
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
        self.set_status("Signed out", StatusLevel::Info);
    }

    // === Navigation ===

    /// Digit shortcuts address the full view list; the shell decides what is shown.
    pub fn go_to_shortcut(&mut self, key: char) -> Option<ViewId> {
        let requested = ViewId::from_shortcut(key)?;
        Some(self.shell.go_to(requested))
    }

    pub fn cycle_view(&mut self, forward: bool) -> ViewId {
        self.shell.cycle_view(forward)
    }

    pub fn cycle_panel(&mut self, forward: bool) {
        self.shell.cycle_panel(forward);
    }

    pub fn toggle_help(&mut self) {
        self.help_open = !self.help_open;
    }

    // === Command bar ===

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = parse_command(&input);
        let action = self.execute_command(&cmd);
        self.command.last = Some(input);
        self.exit_command();
        self.apply_action(action);
    }

    pub fn execute_command(&self, cmd: &Command) -> Action {
        match cmd {
            Command::GoTo(view) => Action::Navigate(NavigateTarget::View(view.clone())),
            Command::Panel(panel) => Action::Navigate(NavigateTarget::Panel(panel.clone())),
            Command::Login(role) => Action::Session(SessionRequest::Login(role.clone())),
            Command::Logout => Action::Session(SessionRequest::Logout),
            Command::WhoAmI => match self.shell.role() {
                Some(role) => {
                    let since = self
                        .shell
                        .session()
                        .since()
                        .map(|at| at.format("%H:%M:%S").to_string())
                        .unwrap_or_default();
                    Action::Notify(
                        format!("{} ({}) since {}", role.title(), role, since),
                        NotifyLevel::Info,
                    )
                }
                None => Action::Notify("Not signed in".to_string(), NotifyLevel::Info),
            },
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                warn!(command = %s, "unknown command");
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Navigate(target) => {
                if self.shell.role().is_none() {
                    self.set_status("Sign in first", StatusLevel::Warn);
                    return;
                }
                match target {
                    NavigateTarget::View(id) => {
                        self.shell.go_to_named(&id);
                    }
                    NavigateTarget::Panel(id) => {
                        if self.shell.select_panel_named(&id).is_none() {
                            self.set_status("Panels live on the Home view", StatusLevel::Warn);
                        }
                    }
                }
            }
            Action::Session(SessionRequest::Login(raw)) => match self.shell.login_as(&raw) {
                Ok(_) => {
                    if let Some(role) = self.shell.role() {
                        self.after_login(role);
                    }
                }
                Err(err) => self.set_status(err.to_string(), StatusLevel::Error),
            },
            Action::Session(SessionRequest::Logout) => self.logout(),
            Action::Notify(msg, level) => {
                let level = match level {
                    NotifyLevel::Info => StatusLevel::Info,
                    NotifyLevel::Warn => StatusLevel::Warn,
                };
                self.set_status(msg, level);
            }
            Action::ToggleHelp => self.toggle_help(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Header breadcrumb, e.g. `Home / Warehouse`.
    pub fn view_breadcrumb(&self) -> String {
        match self.screen() {
            Screen::Login => "Sign in".to_string(),
            Screen::View { view, panel, .. } => {
                let mut parts = vec![view.title().to_string()];
                if let Some(panel) = panel {
                    parts.push(panel.title().to_string());
                }
                parts.join(" / ")
            }
        }
    }
}
