// SPDX-License-Identifier: MPL-2.0
//! Theme presets and per-token overrides for notification cards.

use super::options::normalize;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in color scheme of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
    Glass,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [ThemePreset::Dark, ThemePreset::Light, ThemePreset::Glass];

    /// Parses a preset name; unknown names resolve to [`ThemePreset::Dark`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "light" => ThemePreset::Light,
            "glass" => ThemePreset::Glass,
            _ => ThemePreset::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreset::Dark => "dark",
            ThemePreset::Light => "light",
            ThemePreset::Glass => "glass",
        }
    }

    #[must_use]
    pub fn tokens(self) -> ThemeTokens {
        match self {
            ThemePreset::Dark => ThemeTokens {
                background: Color::from_rgba8(20, 20, 20, 0.92),
                text: Color::from_rgb8(0xf5, 0xf5, 0xf5),
                muted: Color::from_rgb8(0xd6, 0xd6, 0xd6),
                border: Color::from_rgba8(255, 255, 255, 0.1),
                shadow: Color::from_rgba8(0, 0, 0, 0.25),
            },
            ThemePreset::Light => ThemeTokens {
                background: Color::from_rgba8(255, 255, 255, 0.98),
                text: Color::from_rgb8(0x14, 0x14, 0x14),
                muted: Color::from_rgb8(0x3a, 0x3a, 0x3a),
                border: Color::from_rgba8(0, 0, 0, 0.08),
                shadow: Color::from_rgba8(0, 0, 0, 0.12),
            },
            ThemePreset::Glass => ThemeTokens {
                background: Color::from_rgba8(24, 24, 24, 0.55),
                text: Color::WHITE,
                muted: Color::from_rgb8(0xe5, 0xe5, 0xe5),
                border: Color::from_rgba8(255, 255, 255, 0.2),
                shadow: Color::from_rgba8(0, 0, 0, 0.35),
            },
        }
    }
}

impl From<String> for ThemePreset {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ThemePreset> for String {
    fn from(preset: ThemePreset) -> Self {
        preset.as_str().to_string()
    }
}

/// A single overridable color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeToken {
    Background,
    Text,
    Muted,
    Border,
    Shadow,
}

impl ThemeToken {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "background" | "bg" | "snackybg" => Some(ThemeToken::Background),
            "text" | "snackytext" => Some(ThemeToken::Text),
            "muted" | "snackymuted" => Some(ThemeToken::Muted),
            "border" | "snackyborder" => Some(ThemeToken::Border),
            "shadow" | "snackyshadow" => Some(ThemeToken::Shadow),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeToken::Background => "background",
            ThemeToken::Text => "text",
            ThemeToken::Muted => "muted",
            ThemeToken::Border => "border",
            ThemeToken::Shadow => "shadow",
        }
    }
}

/// Resolved colors handed to the presenter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeTokens {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub shadow: Color,
}

impl ThemeTokens {
    /// Preset colors with `overrides` applied token by token.
    #[must_use]
    pub fn resolve(preset: ThemePreset, overrides: &ThemeOverrides) -> Self {
        let mut tokens = preset.tokens();
        for (token, color) in overrides.iter() {
            *tokens.slot_mut(token) = color;
        }
        tokens
    }

    #[must_use]
    pub fn get(&self, token: ThemeToken) -> Color {
        match token {
            ThemeToken::Background => self.background,
            ThemeToken::Text => self.text,
            ThemeToken::Muted => self.muted,
            ThemeToken::Border => self.border,
            ThemeToken::Shadow => self.shadow,
        }
    }

    fn slot_mut(&mut self, token: ThemeToken) -> &mut Color {
        match token {
            ThemeToken::Background => &mut self.background,
            ThemeToken::Text => &mut self.text,
            ThemeToken::Muted => &mut self.muted,
            ThemeToken::Border => &mut self.border,
            ThemeToken::Shadow => &mut self.shadow,
        }
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        ThemePreset::default().tokens()
    }
}

/// Partial token map layered over a preset.
///
/// Serialized as a table of token name to hex color. Unknown token names and
/// unparsable colors are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ThemeOverrides {
    entries: BTreeMap<ThemeToken, Color>,
}

impl ThemeOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, token: ThemeToken, color: Color) -> Self {
        self.entries.insert(token, color);
        self
    }

    #[must_use]
    pub fn get(&self, token: ThemeToken) -> Option<Color> {
        self.entries.get(&token).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeToken, Color)> + '_ {
        self.entries.iter().map(|(token, color)| (*token, *color))
    }
}

impl From<BTreeMap<String, String>> for ThemeOverrides {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let entries = raw
            .iter()
            .filter_map(|(name, value)| Some((ThemeToken::parse(name)?, parse_hex(value)?)))
            .collect();
        Self { entries }
    }
}

impl From<ThemeOverrides> for BTreeMap<String, String> {
    fn from(overrides: ThemeOverrides) -> Self {
        overrides
            .iter()
            .map(|(token, color)| (token.as_str().to_string(), to_hex(color)))
            .collect()
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`.
#[must_use]
pub fn parse_hex(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { u8::MAX };
    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
#[must_use]
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}
