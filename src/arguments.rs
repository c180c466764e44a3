// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Translation of [`BadgeConfig`] into badge executable arguments.
//!
//! The emitted order is fixed and mirrors the option order of the badge tool.
//! Serialization is total: absent values are skipped, nothing is validated
//! and nothing is quoted.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::settings::BadgeConfig;

/// Single logical command-line argument.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum Argument
{
    /// A flag without a value, e.g. `--dark`.
    Switch(&'static str,),
    /// A flag followed by its value, e.g. `--glob *.png`.
    Value
    {
        /// Flag including the leading dashes.
        flag:  &'static str,
        /// Raw value, passed through unescaped.
        value: String,
    },
}

impl Argument
{
    fn value(flag: &'static str, value: impl ToString,) -> Self
    {
        Self::Value {
            flag,
            value: value.to_string(),
        }
    }

    /// Flag of the argument.
    pub fn flag(&self,) -> &'static str
    {
        match self {
            Self::Switch(flag,)
            | Self::Value {
                flag, ..
            } => *flag,
        }
    }
}

impl fmt::Display for Argument
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        match self {
            Self::Switch(flag,) => f.write_str(flag,),
            Self::Value {
                flag,
                value,
            } => write!(f, "{flag} {value}"),
        }
    }
}

/// Ordered arguments for one badge invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default,)]
pub struct BadgeArguments
{
    arguments: Vec<Argument,>,
}

impl BadgeArguments
{
    fn switch(&mut self, enabled: bool, flag: &'static str,)
    {
        if enabled {
            self.arguments.push(Argument::Switch(flag,),);
        }
    }

    fn option<T: ToString,>(&mut self, flag: &'static str, value: Option<T,>,)
    {
        if let Some(value,) = value {
            self.arguments.push(Argument::value(flag, value,),);
        }
    }

    /// Number of logical arguments.
    pub fn len(&self,) -> usize
    {
        self.arguments.len()
    }

    /// Whether no argument was emitted.
    pub fn is_empty(&self,) -> bool
    {
        self.arguments.is_empty()
    }

    /// Iterates over the logical arguments in emission order.
    pub fn iter(&self,) -> std::slice::Iter<'_, Argument,>
    {
        self.arguments.iter()
    }

    /// Splits every argument into process tokens: the flag, then its value
    /// as a separate token. Values containing whitespace stay intact.
    pub fn to_tokens(&self,) -> Vec<String,>
    {
        let mut tokens = Vec::with_capacity(self.arguments.len() * 2,);
        for argument in &self.arguments {
            match argument {
                Argument::Switch(flag,) => tokens.push((*flag).to_owned(),),
                Argument::Value {
                    flag,
                    value,
                } => {
                    tokens.push((*flag).to_owned(),);
                    tokens.push(value.clone(),);
                }
            }
        }
        tokens
    }

    /// Space-joined `--flag value` rendering of the arguments.
    pub fn render(&self,) -> String
    {
        self.to_string()
    }
}

impl fmt::Display for BadgeArguments
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        for (index, argument,) in self.arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(" ",)?;
            }
            write!(f, "{argument}")?;
        }
        Ok((),)
    }
}

impl<'a,> IntoIterator for &'a BadgeArguments
{
    type IntoIter = std::slice::Iter<'a, Argument,>;
    type Item = &'a Argument;

    fn into_iter(self,) -> Self::IntoIter
    {
        self.arguments.iter()
    }
}

impl Serialize for BadgeArguments
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        self.to_tokens().serialize(serializer,)
    }
}

/// Serializes `config` into badge executable arguments.
///
/// # Examples
///
/// ```
/// use icon_badge::{BadgeConfig, ShieldGeometry, serialize};
///
/// let config = BadgeConfig {
///     shield_geometry: Some(ShieldGeometry::new(100, -20,),),
///     ..BadgeConfig::default()
/// };
/// assert_eq!(
///     serialize(&config,).render(),
///     "--badge_gravity SouthEast --shield_geometry +100-20%"
/// );
/// ```
pub fn serialize(config: &BadgeConfig,) -> BadgeArguments
{
    let mut arguments = BadgeArguments::default();

    arguments.switch(config.verbose, "--verbose",);
    arguments.switch(config.dark, "--dark",);
    arguments.switch(config.alpha, "--alpha",);
    arguments.switch(config.alpha_channel, "--alpha_channel",);
    arguments.option("--custom", config.custom.as_deref(),);
    arguments.switch(config.no_badge, "--no_badge",);
    arguments.option("--badge_gravity", Some(config.badge_gravity,),);
    arguments.option("--shield_parameters", config.shield.as_ref().map(|shield| shield.to_query(),),);
    arguments.option("--shield_io_timeout", config.shield_io_timeout,);
    arguments.option("--shield_geometry", config.shield_geometry,);
    arguments.option("--shield_gravity", config.shield_gravity,);
    arguments.option("--shield_scale", config.shield_scale,);
    arguments.switch(config.shield_no_resize, "--shield_no_resize",);
    arguments.option("--glob", config.glob.as_deref(),);
    arguments.switch(config.grayscale, "--grayscale",);

    arguments
}

impl BadgeConfig
{
    /// Serializes the settings into badge executable arguments; see
    /// [`serialize`].
    pub fn to_arguments(&self,) -> BadgeArguments
    {
        serialize(self,)
    }
}

#[cfg(test)]
mod tests
{
    use std::path::PathBuf;

    use proptest::prelude::*;

    use super::{Argument, serialize};
    use crate::{
        color::Color,
        gravity::Gravity,
        settings::{BadgeConfig, ShieldGeometry},
        shield::ShieldConfig,
    };

    fn everything() -> BadgeConfig
    {
        BadgeConfig {
            verbose:           true,
            dark:              true,
            alpha:             true,
            alpha_channel:     true,
            custom:            Some("art/custom badge.png".to_owned(),),
            no_badge:          true,
            badge_gravity:     Gravity::NorthWest,
            shield:            Some(ShieldConfig::new("v", "1.0", Color::rgb(255, 105, 180,),),),
            shield_io_timeout: Some(10,),
            shield_geometry:   Some(ShieldGeometry::new(100, -20,),),
            shield_gravity:    Some(Gravity::North,),
            shield_scale:      Some(0.75,),
            shield_no_resize:  true,
            glob:              Some("/**/*.appiconset/*.{png,PNG}".to_owned(),),
            grayscale:         true,
            tool_path:         Some(PathBuf::from("/opt/badge/bin/badge",),),
        }
    }

    proptest! {
        #[test]
        fn serialization_is_deterministic(dx in any::<i32>(), dy in any::<i32>(), scale in -1.0e6_f64..1.0e6) {
            let config = BadgeConfig {
                shield_geometry: Some(ShieldGeometry::new(dx, dy)),
                shield_scale: Some(scale),
                ..everything()
            };
            let expected = format!("--shield_geometry {}", ShieldGeometry::new(dx, dy));
            prop_assert_eq!(serialize(&config), serialize(&config));
            prop_assert!(serialize(&config).render().contains(&expected));
        }
    }

    #[test]
    fn defaults_emit_only_badge_gravity()
    {
        let arguments = serialize(&BadgeConfig::default(),);
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments.render(), "--badge_gravity SouthEast");
    }

    #[test]
    fn geometry_is_signed()
    {
        let config = BadgeConfig {
            shield_geometry: Some(ShieldGeometry::new(100, -20,),), ..BadgeConfig::default()
        };
        assert!(serialize(&config,).render().contains("--shield_geometry +100-20%"));
    }

    #[test]
    fn every_field_is_emitted_in_order()
    {
        let flags: Vec<_,> = serialize(&everything(),).iter().map(Argument::flag,).collect();
        assert_eq!(
            flags,
            [
                "--verbose",
                "--dark",
                "--alpha",
                "--alpha_channel",
                "--custom",
                "--no_badge",
                "--badge_gravity",
                "--shield_parameters",
                "--shield_io_timeout",
                "--shield_geometry",
                "--shield_gravity",
                "--shield_scale",
                "--shield_no_resize",
                "--glob",
                "--grayscale",
            ]
        );
    }

    #[test]
    fn render_joins_flags_and_values()
    {
        assert_eq!(
            serialize(&everything(),).render(),
            "--verbose --dark --alpha --alpha_channel --custom art/custom badge.png --no_badge \
             --badge_gravity NorthWest --shield_parameters label=v&message=1.0&color=ff69b4 \
             --shield_io_timeout 10 --shield_geometry +100-20% --shield_gravity North \
             --shield_scale 0.75 --shield_no_resize --glob /**/*.appiconset/*.{png,PNG} --grayscale"
        );
    }

    #[test]
    fn tokens_keep_values_whole()
    {
        let config = BadgeConfig {
            custom: Some("my icons/overlay.png".to_owned(),), ..BadgeConfig::default()
        };
        assert_eq!(
            serialize(&config,).to_tokens(),
            ["--custom", "my icons/overlay.png", "--badge_gravity", "SouthEast"]
        );
    }

    #[test]
    fn shield_parameters_match_the_shield_query()
    {
        let shield = ShieldConfig::new("build status", "passing", Color::named("green",).expect("known",),);
        let config = BadgeConfig {
            shield: Some(shield.clone(),), ..BadgeConfig::default()
        };

        let tokens = serialize(&config,).to_tokens();
        let position = tokens.iter().position(|token| token == "--shield_parameters",).expect("flag",);
        assert_eq!(tokens[position + 1], shield.to_query());
    }

    #[test]
    fn scale_uses_plain_decimal_text()
    {
        let whole = BadgeConfig {
            shield_scale: Some(2.0,), ..BadgeConfig::default()
        };
        let fractional = BadgeConfig {
            shield_scale: Some(1.5,), ..BadgeConfig::default()
        };
        assert!(serialize(&whole,).render().ends_with("--shield_scale 2"));
        assert!(serialize(&fractional,).render().ends_with("--shield_scale 1.5"));
    }

    #[test]
    fn glob_is_emitted_only_when_present()
    {
        assert!(!serialize(&BadgeConfig::default(),).render().contains("--glob"));

        let config = BadgeConfig {
            glob: Some("*.png".to_owned(),), ..BadgeConfig::default()
        };
        assert!(serialize(&config,).render().ends_with("--glob *.png"));
    }

    #[test]
    fn tool_path_is_never_emitted()
    {
        let config = BadgeConfig {
            tool_path: Some(PathBuf::from("/usr/local/bin/badge",),), ..BadgeConfig::default()
        };
        assert_eq!(serialize(&config,).render(), "--badge_gravity SouthEast");
    }

    #[test]
    fn tokens_serialize_as_json_array()
    {
        let json = serde_json::to_string(&serialize(&BadgeConfig::default(),),).expect("json",);
        assert_eq!(json, "[\"--badge_gravity\",\"SouthEast\"]");
    }
}
