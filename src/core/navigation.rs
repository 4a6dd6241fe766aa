//! Shell-level view cursor

use crate::domain::{CapabilityTable, Role, ShellViews, ViewId};

use super::router::CapabilityRouter;

/// Which top-level view the shell shows.
///
/// Without a role there is no cursor and the view sits on [`NavigationState::PARKED`].
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    cursor: Option<CapabilityRouter<ShellViews>>,
}

impl NavigationState {
    /// Value held while nobody is logged in. Never rendered.
    pub const PARKED: ViewId = ViewId::Dashboard;

    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cursor for a new role, starting at `initial` (clamped).
    pub fn reseed(&mut self, role: Role, initial: ViewId) -> ViewId {
        let cursor = CapabilityRouter::starting_at(role, initial);
        let view = cursor.current();
        self.cursor = Some(cursor);
        view
    }

    pub fn park(&mut self) {
        self.cursor = None;
    }

    pub fn role(&self) -> Option<Role> {
        self.cursor.as_ref().map(|cursor| cursor.role())
    }

    pub fn current(&self) -> ViewId {
        self.cursor
            .as_ref()
            .map(|cursor| cursor.current())
            .unwrap_or(Self::PARKED)
    }

    /// Request a view. Refused requests land on the role's default; while
    /// parked nothing moves.
    pub fn go_to(&mut self, requested: ViewId) -> ViewId {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.go_to(requested),
            None => Self::PARKED,
        }
    }

    pub fn go_to_default(&mut self) -> ViewId {
        match self.cursor.as_mut() {
            Some(cursor) => {
                let view = ShellViews::default_for(cursor.role());
                cursor.go_to(view)
            }
            None => Self::PARKED,
        }
    }

    pub fn cycle(&mut self, forward: bool) -> ViewId {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.cycle(forward),
            None => Self::PARKED,
        }
    }

    pub fn permitted(&self) -> Vec<ViewId> {
        self.cursor
            .as_ref()
            .map(|cursor| cursor.permitted())
            .unwrap_or_default()
    }
}
