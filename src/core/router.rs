//! Role-gated cursor over one capability table
//!
//! The shell sidebar and the tabs of the "home" view are both instances of
//! [`CapabilityRouter`]; they differ only in the table they are bound to.

use std::marker::PhantomData;

use tracing::debug;

use crate::domain::{resolve, CapabilityTable, HomePanels, PanelId, Role};

/// Current destination for a fixed role. Every write goes through [`resolve`],
/// so `current()` is always permitted for `role()`.
#[derive(Debug, Clone)]
pub struct CapabilityRouter<T: CapabilityTable> {
    role: Role,
    current: T::Id,
    table: PhantomData<T>,
}

impl<T: CapabilityTable> CapabilityRouter<T> {
    /// Router positioned on the role's default destination.
    pub fn new(role: Role) -> Self {
        Self::starting_at(role, T::default_for(role))
    }

    /// Router positioned on `requested`, or the default when it is refused.
    pub fn starting_at(role: Role, requested: T::Id) -> Self {
        Self {
            role,
            current: resolve::<T>(role, requested),
            table: PhantomData,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn current(&self) -> T::Id {
        self.current
    }

    pub fn permitted(&self) -> Vec<T::Id> {
        T::permitted(self.role)
    }

    /// Move to `requested` if permitted, else to the default. Returns where we landed.
    pub fn go_to(&mut self, requested: T::Id) -> T::Id {
        self.current = resolve::<T>(self.role, requested);
        self.current
    }

    /// Step through the permitted destinations in menu order, wrapping.
    pub fn cycle(&mut self, forward: bool) -> T::Id {
        let permitted = self.permitted();
        let len = permitted.len();
        let idx = permitted
            .iter()
            .position(|id| *id == self.current)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.go_to(permitted[next])
    }
}

/// Tab cursor owned by the "home" view.
pub type PanelRouter = CapabilityRouter<HomePanels>;

impl CapabilityRouter<HomePanels> {
    /// Panel cursor for a freshly shown "home" view.
    pub fn mount(role: Role) -> Self {
        let router = Self::starting_at(role, HomePanels::INITIAL);
        debug!(role = %role, panel = %router.current(), "home panels mounted");
        router
    }

    pub fn select_panel(&mut self, requested: PanelId) -> PanelId {
        let before = self.current;
        let panel = self.go_to(requested);
        if panel != before {
            debug!(panel = %panel, "panel selected");
        }
        panel
    }
}
