// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Settings for one invocation of the badge executable.
//!
//! Every optional value is an [`Option`]: absence means the corresponding
//! argument is omitted, never that a fallback value is sent. The only field
//! that always reaches the command line is [`BadgeConfig::badge_gravity`].

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{gravity::Gravity, shield::ShieldConfig};

/// Signed displacement of the shield from its gravity anchor.
///
/// Rendered as `<sign><|dx|><sign><|dy|>%`, with `+` for zero and positive
/// offsets.
///
/// # Examples
///
/// ```
/// use icon_badge::ShieldGeometry;
///
/// assert_eq!(ShieldGeometry::new(100, -20,).to_string(), "+100-20%");
/// assert_eq!(ShieldGeometry::new(0, 0,).to_string(), "+0+0%");
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default,)]
#[serde(deny_unknown_fields)]
pub struct ShieldGeometry
{
    /// Horizontal offset.
    pub dx: i32,
    /// Vertical offset.
    pub dy: i32,
}

impl ShieldGeometry
{
    /// Creates a geometry from horizontal and vertical offsets.
    pub const fn new(dx: i32, dy: i32,) -> Self
    {
        Self {
            dx, dy,
        }
    }
}

fn sign(value: i32,) -> char
{
    if value < 0 { '-' } else { '+' }
}

impl fmt::Display for ShieldGeometry
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        write!(
            f,
            "{}{}{}{}%",
            sign(self.dx,),
            self.dx.unsigned_abs(),
            sign(self.dy,),
            self.dy.unsigned_abs()
        )
    }
}

/// Desired badging behavior for one run of the badge executable.
///
/// # Examples
///
/// ```
/// use icon_badge::{BadgeConfig, Gravity};
///
/// let config = BadgeConfig {
///     dark: true, ..BadgeConfig::default()
/// };
/// assert_eq!(config.badge_gravity, Gravity::SouthEast);
/// assert_eq!(config.to_arguments().render(), "--dark --badge_gravity SouthEast");
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default,)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig
{
    /// Print more output while badging.
    pub verbose: bool,

    /// Use the dark badge instead of the white one.
    pub dark: bool,

    /// Use the word "alpha" instead of "beta".
    pub alpha: bool,

    /// Keep or add an alpha channel to the icons.
    pub alpha_channel: bool,

    /// Path of a custom image overlaid instead of the stock badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String,>,

    /// Remove the beta badge.
    pub no_badge: bool,

    /// Position of the badge on the icon.
    pub badge_gravity: Gravity,

    /// Shield overlaid on the icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield: Option<ShieldConfig,>,

    /// Seconds to wait for shields.io before giving up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_io_timeout: Option<i32,>,

    /// Position of the shield relative to its gravity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_geometry: Option<ShieldGeometry,>,

    /// Position of the shield on the icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_gravity: Option<Gravity,>,

    /// Scale factor applied to the shield image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_scale: Option<f64,>,

    /// Only shrink the shield to fit the icon instead of aspect-filling it.
    pub shield_no_resize: bool,

    /// Glob pattern selecting the icon files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glob: Option<String,>,

    /// Convert the icons to grayscale.
    pub grayscale: bool,

    /// Explicit location of the badge executable. Not passed to the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_path: Option<PathBuf,>,
}
