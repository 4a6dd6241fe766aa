pub mod action;
pub mod command;
pub mod navigation;
pub mod router;
pub mod session;
pub mod shell;

pub use crate::domain::ShellError;

pub use action::{Action, NavigateTarget, NotifyLevel, SessionRequest};
pub use command::{parse_command, Command};
pub use navigation::NavigationState;
pub use router::{CapabilityRouter, PanelRouter};
pub use session::{landing_view, Session, SessionState};
pub use shell::{Screen, Shell};
