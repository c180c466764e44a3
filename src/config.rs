// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! YAML configuration documents describing a badge run.
//!
//! The document is a direct mirror of [`BadgeConfig`]: every key is optional
//! except the shield's `label`, `message` and `color`. Colors are names or hex
//! strings, gravities are their compass names, links are a URL or a
//! `{ left, right }` mapping. Unknown keys are rejected so typos surface as
//! errors instead of silently dropped arguments.
//!
//! ```yaml
//! dark: true
//! badge_gravity: NorthEast
//! shield:
//!   label: version
//!   message: 1.2.0
//!   color: "#ff69b4"
//!   link: https://example.com
//! shield_geometry: { dx: 0, dy: -10 }
//! glob: "/**/*.appiconset/*.{png,PNG}"
//! ```

use std::{fs, path::Path};

use crate::{
    error::{self, Error},
    settings::BadgeConfig,
};

/// Loads badge settings from the YAML file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Parse`](Error::Parse) when the document is not a valid badge
/// configuration.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use icon_badge::load_config;
///
/// # fn main() -> Result<(), icon_badge::Error> {
/// let config = load_config(Path::new("badge.yaml"))?;
/// println!("{}", config.to_arguments());
/// # Ok(())
/// # }
/// ```
pub fn load_config(path: &Path,) -> Result<BadgeConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses badge settings from the provided YAML document string.
///
/// An empty document yields [`BadgeConfig::default`].
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded.
pub fn parse_config(contents: &str,) -> Result<BadgeConfig, Error,>
{
    if contents.trim().is_empty() {
        return Ok(BadgeConfig::default(),);
    }

    Ok(serde_yaml::from_str(contents,)?,)
}
