//! Domain layer - roles, destinations and the capability tables binding them

pub mod capability;
pub mod destination;
pub mod error;
pub mod role;

pub use capability::{
    permitted_panels, permitted_views, resolve, CapabilityEntry, CapabilityTable, HomePanels,
    ShellViews,
};
pub use destination::{Destination, PanelId, ViewId};
pub use error::ShellError;
pub use role::Role;
