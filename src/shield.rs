// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Shield settings and their shields.io query-string encoding.
//!
//! A [`ShieldConfig`] describes the label/message banner rendered by the
//! shields.io static endpoint. The module derives two strings from it: a
//! compact `label-message-color` identity used for logging and assertions,
//! and the form-encoded query sent over the wire. Fetching the rendered SVG
//! goes through a [`ShieldService`] so callers can swap the transport.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use crate::{
    client::{ShieldService, ShieldsIoClient},
    color::Color,
    error::Error,
};

/// Visual presets offered by shields.io.
///
/// The style is part of the settings model but is not emitted into the query
/// string; shields.io falls back to `plastic` for the static endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default,)]
#[serde(rename_all = "kebab-case")]
pub enum ShieldStyle
{
    /// The default shield style.
    #[default]
    Plastic,
    /// A flat style with no gradient.
    Flat,
    /// A flat style with square edges.
    #[serde(alias = "flat_square")]
    FlatSquare,
    /// A large badge with uppercase text.
    #[serde(alias = "for_the_badge")]
    ForTheBadge,
    /// A badge in the style of a social button.
    Social,
}

impl ShieldStyle
{
    /// Name of the style as understood by shields.io.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Self::Plastic => "plastic",
            Self::Flat => "flat",
            Self::FlatSquare => "flat-square",
            Self::ForTheBadge => "for-the-badge",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for ShieldStyle
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}

/// Click targets for the left and optionally the right half of a shield.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
#[serde(from = "LinkInput")]
pub struct ShieldLink
{
    /// Target of the label side, or of the whole shield when `right` is
    /// absent.
    pub left:  Url,
    /// Target of the message side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Url,>,
}

impl ShieldLink
{
    /// Links the whole shield to a single target.
    pub fn single(left: Url,) -> Self
    {
        Self {
            left, right: None,
        }
    }

    /// Links the label and message halves to separate targets.
    pub fn pair(left: Url, right: Url,) -> Self
    {
        Self {
            left, right: Some(right,),
        }
    }
}

/// Configuration accepts either a bare URL or a `{ left, right }` mapping.
#[derive(Deserialize,)]
#[serde(untagged)]
enum LinkInput
{
    Single(Url,),
    Pair
    {
        left:  Url,
        #[serde(default)]
        right: Option<Url,>,
    },
}

impl From<LinkInput,> for ShieldLink
{
    fn from(input: LinkInput,) -> Self
    {
        match input {
            LinkInput::Single(left,) => Self::single(left,),
            LinkInput::Pair {
                left,
                right,
            } => Self {
                left, right,
            },
        }
    }
}

/// Visual and textual content of a shields.io banner.
///
/// # Examples
///
/// ```
/// use icon_badge::{Color, ShieldConfig};
///
/// let shield = ShieldConfig::new("build", "passing", Color::rgb(255, 105, 180,),);
/// assert_eq!(shield.identity(), "build-passing-ff69b4");
/// assert_eq!(shield.to_query(), "label=build&message=passing&color=ff69b4");
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq,)]
#[serde(deny_unknown_fields)]
pub struct ShieldConfig
{
    /// Style preset of the shield.
    #[serde(default)]
    pub style: ShieldStyle,

    /// Left-hand text.
    pub label: String,

    /// Right-hand text.
    pub message: String,

    /// Background color of the message side.
    pub color: Color,

    /// Named simple-icons logo or a base64-encoded image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String,>,

    /// Logo color; shields.io honours it for named logos only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_color: Option<Color,>,

    /// Horizontal space reserved for the logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_width: Option<i32,>,

    /// Click targets of the shield.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ShieldLink,>,

    /// Background color of the label side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<Color,>,

    /// HTTP cache lifetime requested from shields.io.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_seconds: Option<i32,>,
}

impl ShieldConfig
{
    /// Creates a shield with the required fields and every option absent.
    pub fn new(label: impl Into<String,>, message: impl Into<String,>, color: Color,) -> Self
    {
        Self {
            style: ShieldStyle::default(),
            label: label.into(),
            message: message.into(),
            color,
            logo: None,
            logo_color: None,
            logo_width: None,
            link: None,
            label_color: None,
            cache_seconds: None,
        }
    }

    /// Returns `label-message-color`, the human-readable identity of the
    /// shield. It is never sent over the wire.
    pub fn identity(&self,) -> String
    {
        let color = self.color.to_token();
        [self.label.as_str(), self.message.as_str(), color.as_str(),].join("-",)
    }

    /// Encodes the shield as an `application/x-www-form-urlencoded` query.
    ///
    /// Keys appear in a fixed order: `label`, `message`, `color`, followed by
    /// `logo`, `logoColor`, `logoWidth`, `link`, `labelColor` and
    /// `cacheSeconds` when present. A two-sided link repeats the `link` key.
    /// A blank logo is treated as absent.
    pub fn to_query(&self,) -> String
    {
        let mut query = form_urlencoded::Serializer::new(String::new(),);

        query
            .append_pair("label", &self.label,)
            .append_pair("message", &self.message,)
            .append_pair("color", &self.color.to_token(),);

        if let Some(logo,) = self.logo.as_deref().filter(|logo| !logo.trim().is_empty(),) {
            query.append_pair("logo", logo,);
        }

        if let Some(logo_color,) = self.logo_color {
            query.append_pair("logoColor", &logo_color.to_token(),);
        }

        if let Some(width,) = self.logo_width {
            query.append_pair("logoWidth", &width.to_string(),);
        }

        if let Some(link,) = &self.link {
            query.append_pair("link", link.left.as_str(),);
            if let Some(right,) = &link.right {
                query.append_pair("link", right.as_str(),);
            }
        }

        if let Some(label_color,) = self.label_color {
            query.append_pair("labelColor", &label_color.to_token(),);
        }

        if let Some(cache_seconds,) = self.cache_seconds {
            query.append_pair("cacheSeconds", &cache_seconds.to_string(),);
        }

        query.finish()
    }

    /// Downloads the rendered shield from shields.io.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failures and
    /// [`Error::ShieldStatus`] when the service rejects the request.
    pub async fn fetch(&self,) -> Result<String, Error,>
    {
        let client = ShieldsIoClient::new()?;
        self.fetch_with(&client,).await
    }

    /// Downloads the rendered shield through the provided service.
    ///
    /// # Errors
    ///
    /// Propagates the errors reported by `service`.
    pub async fn fetch_with<S,>(&self, service: &S,) -> Result<String, Error,>
    where
        S: ShieldService,
    {
        service.fetch_svg(&self.to_query(),).await
    }
}

impl fmt::Display for ShieldConfig
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(&self.identity(),)
    }
}
