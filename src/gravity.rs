// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Placement anchors for badges and shields on an icon.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Compass position on the icon used to anchor a badge or shield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default,)]
pub enum Gravity
{
    /// The top-left of the image.
    NorthWest,
    /// The top-center of the image.
    North,
    /// The top-right of the image.
    NorthEast,
    /// The left-center of the image.
    West,
    /// The center of the image.
    Center,
    /// The right-center of the image.
    East,
    /// The bottom-left of the image.
    SouthWest,
    /// The bottom-center of the image.
    South,
    /// The bottom-right of the image.
    #[default]
    SouthEast,
}

impl Gravity
{
    /// Every gravity in declaration order.
    pub const ALL: [Self; 9] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::West,
        Self::Center,
        Self::East,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Name passed to the badge executable.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Self::NorthWest => "NorthWest",
            Self::North => "North",
            Self::NorthEast => "NorthEast",
            Self::West => "West",
            Self::Center => "Center",
            Self::East => "East",
            Self::SouthWest => "SouthWest",
            Self::South => "South",
            Self::SouthEast => "SouthEast",
        }
    }
}

impl fmt::Display for Gravity
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}

/// Error returned when text does not name a [`Gravity`].
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct ParseGravityError
{
    input: String,
}

impl fmt::Display for ParseGravityError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        write!(f, "unknown gravity '{}'", self.input)
    }
}

impl std::error::Error for ParseGravityError {}

impl FromStr for Gravity
{
    type Err = ParseGravityError;

    /// Accepts the gravity name in any case, with or without `_`/`-`
    /// separators (`south_east`, `SouthEast`, `south-east`).
    fn from_str(input: &str,) -> Result<Self, Self::Err,>
    {
        let folded: String = input
            .trim()
            .chars()
            .filter(|&ch| !matches!(ch, '_' | '-' | ' '),)
            .collect();

        Self::ALL
            .into_iter()
            .find(|gravity| gravity.as_str().eq_ignore_ascii_case(&folded,),)
            .ok_or_else(|| ParseGravityError {
                input: input.trim().to_owned(),
            },)
    }
}

impl Serialize for Gravity
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str(),)
    }
}

impl<'de,> Deserialize<'de,> for Gravity
{
    fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error,>
    where
        D: Deserializer<'de,>,
    {
        let raw = String::deserialize(deserializer,)?;
        raw.parse().map_err(serde::de::Error::custom,)
    }
}

#[cfg(test)]
mod tests
{
    use super::{Gravity, ParseGravityError};

    #[test]
    fn default_is_south_east()
    {
        assert_eq!(Gravity::default(), Gravity::SouthEast);
    }

    #[test]
    fn names_match_member_names()
    {
        let names: Vec<_,> = Gravity::ALL.iter().map(ToString::to_string,).collect();
        assert_eq!(
            names,
            [
                "NorthWest",
                "North",
                "NorthEast",
                "West",
                "Center",
                "East",
                "SouthWest",
                "South",
                "SouthEast"
            ]
        );
    }

    #[test]
    fn parse_is_case_and_separator_insensitive()
    {
        assert_eq!("south_east".parse::<Gravity,>(), Ok(Gravity::SouthEast));
        assert_eq!("North-West".parse::<Gravity,>(), Ok(Gravity::NorthWest));
        assert_eq!(" center ".parse::<Gravity,>(), Ok(Gravity::Center));
    }

    #[test]
    fn parse_rejects_unknown_names()
    {
        let error = "up".parse::<Gravity,>().expect_err("unknown gravity",);
        assert_eq!(
            error,
            ParseGravityError {
                input: "up".to_owned(),
            }
        );
        assert_eq!(error.to_string(), "unknown gravity 'up'");

        let error = " North--By-West ".parse::<Gravity,>().expect_err("unknown gravity",);
        assert_eq!(error.to_string(), "unknown gravity 'North--By-West'");
    }
}
