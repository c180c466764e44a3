// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Color values understood by shields.io and their textual encoding.
//!
//! A [`Color`] is either one of the well-known CSS/X11 named colors or an
//! explicit RGB triple. Named-ness is decided at construction time and never
//! inferred from channel values: `Color::rgb(255, 105, 180)` encodes as
//! `ff69b4` even though `hotpink` carries the same channels.
//!
//! Encoded tokens are always lowercase and never carry an alpha channel or a
//! leading `#`, which keeps them safe for both query strings and identities.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

static HEX_COLOR: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9A-Fa-f]{2})?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$",)
        .expect("hex color pattern is valid",)
},);

/// Named colors, stored lowercase, with their RGB channels.
static NAMED_COLORS: &[(&str, [u8; 3],)] = &[
    ("aliceblue", [240, 248, 255,],),
    ("antiquewhite", [250, 235, 215,],),
    ("aqua", [0, 255, 255,],),
    ("aquamarine", [127, 255, 212,],),
    ("azure", [240, 255, 255,],),
    ("beige", [245, 245, 220,],),
    ("bisque", [255, 228, 196,],),
    ("black", [0, 0, 0,],),
    ("blanchedalmond", [255, 235, 205,],),
    ("blue", [0, 0, 255,],),
    ("blueviolet", [138, 43, 226,],),
    ("brown", [165, 42, 42,],),
    ("burlywood", [222, 184, 135,],),
    ("cadetblue", [95, 158, 160,],),
    ("chartreuse", [127, 255, 0,],),
    ("chocolate", [210, 105, 30,],),
    ("coral", [255, 127, 80,],),
    ("cornflowerblue", [100, 149, 237,],),
    ("cornsilk", [255, 248, 220,],),
    ("crimson", [220, 20, 60,],),
    ("cyan", [0, 255, 255,],),
    ("darkblue", [0, 0, 139,],),
    ("darkcyan", [0, 139, 139,],),
    ("darkgoldenrod", [184, 134, 11,],),
    ("darkgray", [169, 169, 169,],),
    ("darkgreen", [0, 100, 0,],),
    ("darkkhaki", [189, 183, 107,],),
    ("darkmagenta", [139, 0, 139,],),
    ("darkolivegreen", [85, 107, 47,],),
    ("darkorange", [255, 140, 0,],),
    ("darkorchid", [153, 50, 204,],),
    ("darkred", [139, 0, 0,],),
    ("darksalmon", [233, 150, 122,],),
    ("darkseagreen", [143, 188, 143,],),
    ("darkslateblue", [72, 61, 139,],),
    ("darkslategray", [47, 79, 79,],),
    ("darkturquoise", [0, 206, 209,],),
    ("darkviolet", [148, 0, 211,],),
    ("deeppink", [255, 20, 147,],),
    ("deepskyblue", [0, 191, 255,],),
    ("dimgray", [105, 105, 105,],),
    ("dodgerblue", [30, 144, 255,],),
    ("firebrick", [178, 34, 34,],),
    ("floralwhite", [255, 250, 240,],),
    ("forestgreen", [34, 139, 34,],),
    ("fuchsia", [255, 0, 255,],),
    ("gainsboro", [220, 220, 220,],),
    ("ghostwhite", [248, 248, 255,],),
    ("gold", [255, 215, 0,],),
    ("goldenrod", [218, 165, 32,],),
    ("gray", [128, 128, 128,],),
    ("green", [0, 128, 0,],),
    ("greenyellow", [173, 255, 47,],),
    ("honeydew", [240, 255, 240,],),
    ("hotpink", [255, 105, 180,],),
    ("indianred", [205, 92, 92,],),
    ("indigo", [75, 0, 130,],),
    ("ivory", [255, 255, 240,],),
    ("khaki", [240, 230, 140,],),
    ("lavender", [230, 230, 250,],),
    ("lavenderblush", [255, 240, 245,],),
    ("lawngreen", [124, 252, 0,],),
    ("lemonchiffon", [255, 250, 205,],),
    ("lightblue", [173, 216, 230,],),
    ("lightcoral", [240, 128, 128,],),
    ("lightcyan", [224, 255, 255,],),
    ("lightgoldenrodyellow", [250, 250, 210,],),
    ("lightgray", [211, 211, 211,],),
    ("lightgreen", [144, 238, 144,],),
    ("lightpink", [255, 182, 193,],),
    ("lightsalmon", [255, 160, 122,],),
    ("lightseagreen", [32, 178, 170,],),
    ("lightskyblue", [135, 206, 250,],),
    ("lightslategray", [119, 136, 153,],),
    ("lightsteelblue", [176, 196, 222,],),
    ("lightyellow", [255, 255, 224,],),
    ("lime", [0, 255, 0,],),
    ("limegreen", [50, 205, 50,],),
    ("linen", [250, 240, 230,],),
    ("magenta", [255, 0, 255,],),
    ("maroon", [128, 0, 0,],),
    ("mediumaquamarine", [102, 205, 170,],),
    ("mediumblue", [0, 0, 205,],),
    ("mediumorchid", [186, 85, 211,],),
    ("mediumpurple", [147, 112, 219,],),
    ("mediumseagreen", [60, 179, 113,],),
    ("mediumslateblue", [123, 104, 238,],),
    ("mediumspringgreen", [0, 250, 154,],),
    ("mediumturquoise", [72, 209, 204,],),
    ("mediumvioletred", [199, 21, 133,],),
    ("midnightblue", [25, 25, 112,],),
    ("mintcream", [245, 255, 250,],),
    ("mistyrose", [255, 228, 225,],),
    ("moccasin", [255, 228, 181,],),
    ("navajowhite", [255, 222, 173,],),
    ("navy", [0, 0, 128,],),
    ("oldlace", [253, 245, 230,],),
    ("olive", [128, 128, 0,],),
    ("olivedrab", [107, 142, 35,],),
    ("orange", [255, 165, 0,],),
    ("orangered", [255, 69, 0,],),
    ("orchid", [218, 112, 214,],),
    ("palegoldenrod", [238, 232, 170,],),
    ("palegreen", [152, 251, 152,],),
    ("paleturquoise", [175, 238, 238,],),
    ("palevioletred", [219, 112, 147,],),
    ("papayawhip", [255, 239, 213,],),
    ("peachpuff", [255, 218, 185,],),
    ("peru", [205, 133, 63,],),
    ("pink", [255, 192, 203,],),
    ("plum", [221, 160, 221,],),
    ("powderblue", [176, 224, 230,],),
    ("purple", [128, 0, 128,],),
    ("rebeccapurple", [102, 51, 153,],),
    ("red", [255, 0, 0,],),
    ("rosybrown", [188, 143, 143,],),
    ("royalblue", [65, 105, 225,],),
    ("saddlebrown", [139, 69, 19,],),
    ("salmon", [250, 128, 114,],),
    ("sandybrown", [244, 164, 96,],),
    ("seagreen", [46, 139, 87,],),
    ("seashell", [255, 245, 238,],),
    ("sienna", [160, 82, 45,],),
    ("silver", [192, 192, 192,],),
    ("skyblue", [135, 206, 235,],),
    ("slateblue", [106, 90, 205,],),
    ("slategray", [112, 128, 144,],),
    ("snow", [255, 250, 250,],),
    ("springgreen", [0, 255, 127,],),
    ("steelblue", [70, 130, 180,],),
    ("tan", [210, 180, 140,],),
    ("teal", [0, 128, 128,],),
    ("thistle", [216, 191, 216,],),
    ("tomato", [255, 99, 71,],),
    ("transparent", [255, 255, 255,],),
    ("turquoise", [64, 224, 208,],),
    ("violet", [238, 130, 238,],),
    ("wheat", [245, 222, 179,],),
    ("white", [255, 255, 255,],),
    ("whitesmoke", [245, 245, 245,],),
    ("yellow", [255, 255, 0,],),
    ("yellowgreen", [154, 205, 50,],),
];

/// Entry of the well-known named color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub struct NamedColor
{
    name: &'static str,
    rgb:  [u8; 3],
}

impl NamedColor
{
    /// Looks up a named color, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use icon_badge::NamedColor;
    ///
    /// let color = NamedColor::lookup("HotPink",).expect("known color",);
    /// assert_eq!(color.name(), "hotpink");
    /// assert!(NamedColor::lookup("not-a-color").is_none());
    /// ```
    pub fn lookup(name: &str,) -> Option<Self,>
    {
        let trimmed = name.trim();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _,)| candidate.eq_ignore_ascii_case(trimmed,),)
            .map(|&(name, rgb,)| Self {
                name, rgb,
            },)
    }

    /// Lowercase name of the color.
    pub fn name(&self,) -> &'static str
    {
        self.name
    }

    /// Red, green and blue channels of the color.
    pub fn rgb(&self,) -> [u8; 3]
    {
        self.rgb
    }
}

/// Color accepted by the shield color parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub enum Color
{
    /// One of the well-known named colors.
    Named(NamedColor,),
    /// An explicit RGB triple.
    Rgb
    {
        /// Red channel.
        red:   u8,
        /// Green channel.
        green: u8,
        /// Blue channel.
        blue:  u8,
    },
}

impl Color
{
    /// Creates an unnamed color from its channels.
    pub const fn rgb(red: u8, green: u8, blue: u8,) -> Self
    {
        Self::Rgb {
            red, green, blue,
        }
    }

    /// Creates an unnamed color from ARGB channels. The alpha channel is
    /// discarded.
    pub const fn argb(_alpha: u8, red: u8, green: u8, blue: u8,) -> Self
    {
        Self::rgb(red, green, blue,)
    }

    /// Creates a named color, returning `None` when the name is unknown.
    pub fn named(name: &str,) -> Option<Self,>
    {
        NamedColor::lookup(name,).map(Self::Named,)
    }

    /// Red, green and blue channels regardless of representation.
    pub fn channels(&self,) -> [u8; 3]
    {
        match self {
            Self::Named(named,) => named.rgb(),
            Self::Rgb {
                red,
                green,
                blue,
            } => [*red, *green, *blue,],
        }
    }

    /// Encodes the color as its lowercase name or as six lowercase hex
    /// digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use icon_badge::Color;
    ///
    /// assert_eq!(Color::named("Red").expect("known color").to_token(), "red");
    /// assert_eq!(Color::rgb(255, 105, 180).to_token(), "ff69b4");
    /// assert_eq!(Color::argb(0x80, 1, 2, 3).to_token(), "010203");
    /// ```
    pub fn to_token(&self,) -> String
    {
        match self {
            Self::Named(named,) => named.name().to_owned(),
            Self::Rgb {
                red,
                green,
                blue,
            } => format!("{red:02x}{green:02x}{blue:02x}"),
        }
    }
}

impl From<NamedColor,> for Color
{
    fn from(named: NamedColor,) -> Self
    {
        Self::Named(named,)
    }
}

impl fmt::Display for Color
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(&self.to_token(),)
    }
}

/// Error returned when text is neither a known color name nor a hex color.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct ParseColorError
{
    input: String,
}

impl fmt::Display for ParseColorError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        write!(
            f,
            "'{}' is neither a named color nor a hex color (rrggbb or aarrggbb)",
            self.input
        )
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color
{
    type Err = ParseColorError;

    /// Parses a color name (any case) or `#rrggbb` / `#aarrggbb` hex text; the
    /// `#` is optional and alpha is dropped.
    fn from_str(input: &str,) -> Result<Self, Self::Err,>
    {
        let trimmed = input.trim();
        if let Some(named,) = Self::named(trimmed,) {
            return Ok(named,);
        }

        let captures = HEX_COLOR.captures(trimmed,).ok_or_else(|| ParseColorError {
            input: trimmed.to_owned(),
        },)?;

        let channel = |index: usize| {
            u8::from_str_radix(&captures[index], 16,).map_err(|_| ParseColorError {
                input: trimmed.to_owned(),
            },)
        };

        Ok(Self::rgb(channel(1,)?, channel(2,)?, channel(3,)?,),)
    }
}

impl Serialize for Color
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_token(),)
    }
}

impl<'de,> Deserialize<'de,> for Color
{
    fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error,>
    where
        D: Deserializer<'de,>,
    {
        let raw = String::deserialize(deserializer,)?;
        raw.parse().map_err(serde::de::Error::custom,)
    }
}
