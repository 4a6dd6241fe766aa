//! Actions that commands return to communicate with the app

/// Actions returned by commands to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a view or panel
    Navigate(NavigateTarget),

    /// Change who is logged in
    Session(SessionRequest),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Toggle the help popup
    ToggleHelp,

    /// Request quit
    Quit,
}

/// Navigation targets, by id as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateTarget {
    View(String),
    Panel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRequest {
    Login(String),
    Logout,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
}
