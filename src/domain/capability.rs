//! Capability tables: which destinations each role may reach
//!
//! Two tables exist, one per navigation layer:
//! - [`ShellViews`]: sidebar views of the shell
//! - [`HomePanels`]: tabs inside the "home" view
//!
//! They are deliberately not derived from one another. SUPPLIER reaches a
//! different set at each layer.

use serde::Serialize;

use super::destination::{Destination, PanelId, ViewId};
use super::role::Role;

/// Role → (permitted set, default) for one kind of destination.
///
/// Implementations must keep `default_for(role)` inside the permitted set.
pub trait CapabilityTable {
    type Id: Destination;

    /// Whether `role` may reach `id`.
    fn allows(role: Role, id: Self::Id) -> bool;

    /// Destination used when a request is refused.
    fn default_for(role: Role) -> Self::Id;

    /// Permitted destinations in menu order.
    fn permitted(role: Role) -> Vec<Self::Id> {
        Self::Id::ALL
            .iter()
            .copied()
            .filter(|id| Self::allows(role, *id))
            .collect()
    }
}

/// Returns `requested` when permitted for `role`, the role's default otherwise.
pub fn resolve<T: CapabilityTable>(role: Role, requested: T::Id) -> T::Id {
    if T::allows(role, requested) {
        requested
    } else {
        T::default_for(role)
    }
}

/// Top-level view table.
#[derive(Debug, Clone, Copy)]
pub struct ShellViews;

impl CapabilityTable for ShellViews {
    type Id = ViewId;

    fn allows(role: Role, view: ViewId) -> bool {
        match role {
            Role::Admin | Role::Warehouse => true,
            Role::Supplier => matches!(view, ViewId::Home | ViewId::Supplier | ViewId::Community),
            Role::Community => matches!(view, ViewId::Home | ViewId::Community),
        }
    }

    fn default_for(role: Role) -> ViewId {
        match role {
            Role::Admin | Role::Warehouse => ViewId::Dashboard,
            Role::Supplier => ViewId::Supplier,
            Role::Community => ViewId::Community,
        }
    }
}

/// Panel table of the "home" view, filtered from the master panel list.
#[derive(Debug, Clone, Copy)]
pub struct HomePanels;

impl HomePanels {
    /// Every role starts on this panel, clamped through [`resolve`].
    pub const INITIAL: PanelId = PanelId::Dashboard;
}

impl CapabilityTable for HomePanels {
    type Id = PanelId;

    fn allows(role: Role, panel: PanelId) -> bool {
        match role {
            Role::Community => panel == PanelId::Community,
            Role::Supplier => panel == PanelId::Supplier,
            Role::Admin | Role::Warehouse => true,
        }
    }

    // Roles without the dashboard tab keep exactly one panel; that one is the fallback.
    fn default_for(role: Role) -> PanelId {
        match role {
            Role::Admin | Role::Warehouse => PanelId::Dashboard,
            Role::Supplier => PanelId::Supplier,
            Role::Community => PanelId::Community,
        }
    }
}

/// One row of a capability table, for listing and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityEntry<I> {
    pub role: Role,
    pub permitted: Vec<I>,
    pub default: I,
}

impl<I: Destination> CapabilityEntry<I> {
    pub fn of<T: CapabilityTable<Id = I>>(role: Role) -> Self {
        Self {
            role,
            permitted: T::permitted(role),
            default: T::default_for(role),
        }
    }
}

pub fn permitted_views(role: Role) -> Vec<ViewId> {
    ShellViews::permitted(role)
}

pub fn permitted_panels(role: Role) -> Vec<PanelId> {
    HomePanels::permitted(role)
}
