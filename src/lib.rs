//! Serialization of app icon badging settings.
//!
//! The library turns a [`BadgeConfig`] into the ordered argument list consumed
//! by the `badge` executable, and a [`ShieldConfig`] into the query string of
//! the shields.io static endpoint. Both serializers are pure; the only side
//! effects live behind [`BadgeTool`] (process invocation) and
//! [`ShieldService`] (HTTP), so the core stays testable without either.

mod arguments;
mod client;
mod color;
mod config;
mod error;
mod gravity;
mod runner;
mod settings;
mod shield;

pub use arguments::{Argument, BadgeArguments, serialize};
pub use client::{SHIELDS_IO_ENDPOINT, ShieldService, ShieldsIoClient, ShieldsIoClientBuilder};
pub use color::{Color, NamedColor, ParseColorError};
pub use config::{load_config, parse_config};
pub use error::{Error, io_error, shield_io_error};
pub use gravity::{Gravity, ParseGravityError};
pub use runner::{BADGE_EXECUTABLE, BadgeRunner, BadgeTool, ProcessBadgeTool, run_badge};
pub use settings::{BadgeConfig, ShieldGeometry};
pub use shield::{ShieldConfig, ShieldLink, ShieldStyle};
