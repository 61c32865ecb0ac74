//! Interactive behavior and content of the Louisville nurse organizing brief.
//!
//! The crate is host-agnostic: controllers read and write a [`dom::Page`],
//! start timers through a [`schedule::Scheduler`] and build charts through a
//! [`charts::ChartBackend`]. Headless implementations of all three ship
//! here; the browser adapters live in [`web`] behind the `web` feature.

pub mod app;
pub mod charts;
pub mod config;
pub mod content;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod markup;
pub mod schedule;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use app::{update, Brief, Effect, Msg};
pub use config::{BriefConfig, Deployment, Widget};
pub use error::{BriefError, Result};
