//! MedSupply AI terminal shell.
//!
//! The navigation core lives in [`domain`] (roles, destinations, capability
//! tables) and [`core`] (routers, session and the [`core::Shell`] context).
//! [`app`] and [`ui`] are the terminal presentation on top of it.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod ui;
