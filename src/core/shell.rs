//! The shell context: session, view cursor and the home view's panel cursor
//!
//! One [`Shell`] exists per running client and is owned by whatever drives the
//! render loop. All transitions are synchronous and go through this type.

use tracing::{debug, warn};

use crate::domain::{
    permitted_panels, permitted_views, CapabilityTable, Destination, HomePanels, PanelId, Role,
    ShellError, ViewId,
};

use super::navigation::NavigationState;
use super::router::PanelRouter;
use super::session::{Session, SessionState};

/// What the presentation layer must draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    View {
        role: Role,
        view: ViewId,
        /// Set only while `view` is [`ViewId::Home`].
        panel: Option<PanelId>,
    },
}

#[derive(Debug, Default)]
pub struct Shell {
    session: SessionState,
    navigation: NavigationState,
    home: Option<PanelRouter>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        self.session.session()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.session().role()
    }

    pub fn current_view(&self) -> ViewId {
        self.navigation.current()
    }

    pub fn current_panel(&self) -> Option<PanelId> {
        self.home.as_ref().map(|home| home.current())
    }

    /// Log in with an upstream-accepted role. Returns the view to render.
    pub fn login(&mut self, role: Role) -> ViewId {
        let (_, landing) = self.session.login(role);
        let view = self.navigation.reseed(role, landing);
        self.home = None;
        self.sync_home();
        debug!(role = %role, view = %view, "logged in");
        view
    }

    /// Textual login; the session is untouched when `raw` names no role.
    pub fn login_as(&mut self, raw: &str) -> Result<ViewId, ShellError> {
        let role = raw.parse::<Role>().inspect_err(|err| {
            warn!(error = %err, "login rejected");
        })?;
        Ok(self.login(role))
    }

    pub fn logout(&mut self) {
        let previous = self.role();
        self.session.logout();
        self.navigation.park();
        self.home = None;
        if let Some(role) = previous {
            debug!(role = %role, "logged out");
        }
    }

    /// Request a view. The returned view is authoritative.
    pub fn go_to(&mut self, requested: ViewId) -> ViewId {
        let before = self.navigation.current();
        let view = self.navigation.go_to(requested);
        self.after_view_change(before, view)
    }

    /// Request a view by id. Text naming no view is refused like an unpermitted view.
    pub fn go_to_named(&mut self, id: &str) -> ViewId {
        match ViewId::from_id(id) {
            Some(view) => self.go_to(view),
            None => {
                let before = self.navigation.current();
                let view = self.navigation.go_to_default();
                self.after_view_change(before, view)
            }
        }
    }

    /// Step to the next or previous permitted view.
    pub fn cycle_view(&mut self, forward: bool) -> ViewId {
        let before = self.navigation.current();
        let view = self.navigation.cycle(forward);
        self.after_view_change(before, view)
    }

    /// Panel cursor of the "home" view, present only while it is shown.
    pub fn home(&self) -> Option<&PanelRouter> {
        self.home.as_ref()
    }

    /// Select a tab on the "home" view. `None` when "home" is not shown.
    pub fn select_panel(&mut self, requested: PanelId) -> Option<PanelId> {
        self.home
            .as_mut()
            .map(|home| home.select_panel(requested))
    }

    /// Select a tab by id. Text naming no panel lands on the role's default panel.
    pub fn select_panel_named(&mut self, id: &str) -> Option<PanelId> {
        let home = self.home.as_mut()?;
        let panel = match PanelId::from_id(id) {
            Some(panel) => panel,
            None => HomePanels::default_for(home.role()),
        };
        Some(home.select_panel(panel))
    }

    pub fn cycle_panel(&mut self, forward: bool) -> Option<PanelId> {
        self.home.as_mut().map(|home| home.cycle(forward))
    }

    /// Views to draw in the sidebar for the logged-in role.
    pub fn permitted_views(&self) -> Vec<ViewId> {
        self.role().map(permitted_views).unwrap_or_default()
    }

    /// Tabs to draw on the "home" view for the logged-in role.
    pub fn permitted_panels(&self) -> Vec<PanelId> {
        self.role().map(permitted_panels).unwrap_or_default()
    }

    pub fn screen(&self) -> Screen {
        match self.role() {
            None => Screen::Login,
            Some(role) => Screen::View {
                role,
                view: self.navigation.current(),
                panel: self.current_panel(),
            },
        }
    }

    fn after_view_change(&mut self, before: ViewId, view: ViewId) -> ViewId {
        if view != before {
            debug!(from = %before, to = %view, "view changed");
        }
        self.sync_home();
        view
    }

    // The panel cursor lives exactly as long as "home" is on screen.
    fn sync_home(&mut self) {
        match self.role() {
            Some(role) if self.navigation.current() == ViewId::Home => {
                if self.home.is_none() {
                    self.home = Some(PanelRouter::mount(role));
                }
            }
            _ => {
                if self.home.take().is_some() {
                    debug!("home panels unmounted");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_shell_shows_login() {
        let shell = Shell::new();
        assert_eq!(shell.screen(), Screen::Login);
        assert_eq!(shell.current_view(), ViewId::Dashboard);
        assert!(shell.permitted_views().is_empty());
        assert!(shell.home().is_none());
    }

    #[test]
    fn test_login_landing_views() {
        let cases = [
            (Role::Community, ViewId::Community),
            (Role::Supplier, ViewId::Supplier),
            (Role::Admin, ViewId::Dashboard),
            (Role::Warehouse, ViewId::Dashboard),
        ];
        for (role, expected) in cases {
            let mut shell = Shell::new();
            assert_eq!(shell.login(role), expected);
            assert_eq!(shell.current_view(), expected);
        }
    }

    #[test]
    fn test_invalid_login_leaves_session_unauthenticated() {
        let mut shell = Shell::new();
        let err = shell.login_as("not-a-role").unwrap_err();
        assert_eq!(err, ShellError::InvalidRole("not-a-role".to_string()));
        assert!(!shell.session().is_authenticated());
        assert_eq!(shell.screen(), Screen::Login);
    }

    #[test]
    fn test_invalid_login_keeps_existing_role() {
        let mut shell = Shell::new();
        shell.login(Role::Supplier);
        assert!(shell.login_as("root").is_err());
        assert_eq!(shell.role(), Some(Role::Supplier));
        assert_eq!(shell.current_view(), ViewId::Supplier);
    }

    #[test]
    fn test_home_mounts_and_unmounts_panels() {
        let mut shell = Shell::new();
        shell.login(Role::Admin);
        assert!(shell.select_panel(PanelId::Warehouse).is_none());

        shell.go_to(ViewId::Home);
        assert_eq!(shell.current_panel(), Some(PanelId::Dashboard));
        assert_eq!(shell.select_panel(PanelId::Warehouse), Some(PanelId::Warehouse));

        // Re-requesting home keeps the mounted cursor.
        shell.go_to(ViewId::Home);
        assert_eq!(shell.current_panel(), Some(PanelId::Warehouse));

        shell.go_to(ViewId::Supplier);
        assert_eq!(shell.current_panel(), None);

        shell.go_to(ViewId::Home);
        assert_eq!(shell.current_panel(), Some(PanelId::Dashboard));
    }

    #[test]
    fn test_unknown_view_name_falls_back_to_default() {
        let mut shell = Shell::new();
        shell.login(Role::Supplier);
        shell.go_to(ViewId::Home);
        assert_eq!(shell.go_to_named("reports"), ViewId::Supplier);
        assert_eq!(shell.go_to_named("Home"), ViewId::Supplier);
        assert_eq!(shell.go_to_named("home"), ViewId::Home);
    }

    #[test]
    fn test_unknown_panel_name_falls_back_to_default_panel() {
        let mut shell = Shell::new();
        shell.login(Role::Warehouse);
        assert_eq!(shell.select_panel_named("supplier"), None);
        shell.go_to(ViewId::Home);
        assert_eq!(shell.select_panel_named("supplier"), Some(PanelId::Supplier));
        assert_eq!(shell.select_panel_named("orders"), Some(PanelId::Dashboard));
    }

    #[test]
    fn test_go_to_while_logged_out_is_parked() {
        let mut shell = Shell::new();
        assert_eq!(shell.go_to(ViewId::Community), ViewId::Dashboard);
        assert_eq!(shell.cycle_view(true), ViewId::Dashboard);
        assert_eq!(shell.screen(), Screen::Login);
    }

    #[test]
    fn test_relogin_rebuilds_cursor_and_drops_panels() {
        let mut shell = Shell::new();
        shell.login(Role::Admin);
        shell.go_to(ViewId::Home);
        shell.select_panel(PanelId::Warehouse);

        assert_eq!(shell.login(Role::Community), ViewId::Community);
        assert_eq!(shell.current_panel(), None);
        shell.go_to(ViewId::Home);
        assert_eq!(shell.current_panel(), Some(PanelId::Community));
    }
}
