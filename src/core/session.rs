//! Who is logged in

use chrono::{DateTime, Local};

use crate::domain::{Role, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated {
        role: Role,
        since: DateTime<Local>,
    },
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Unauthenticated => None,
            Session::Authenticated { role, .. } => Some(*role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn since(&self) -> Option<DateTime<Local>> {
        match self {
            Session::Unauthenticated => None,
            Session::Authenticated { since, .. } => Some(*since),
        }
    }
}

/// View shown right after login. Evaluated once per login, before the
/// navigation cursor exists.
pub fn landing_view(role: Role) -> ViewId {
    match role {
        Role::Community => ViewId::Community,
        Role::Supplier => ViewId::Supplier,
        Role::Admin | Role::Warehouse => ViewId::Dashboard,
    }
}

/// Sole owner of the session role.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Session,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Bind the session to `role`, replacing any previous role.
    pub fn login(&mut self, role: Role) -> (Session, ViewId) {
        self.session = Session::Authenticated {
            role,
            since: Local::now(),
        };
        (self.session, landing_view(role))
    }

    pub fn logout(&mut self) -> Session {
        self.session = Session::Unauthenticated;
        self.session
    }
}
