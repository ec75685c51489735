use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Memory ordering of a 4-D (batch, channel, height, width) tensor.
///
/// - `Nchw`   — plain batch/channel/height/width ordering.
/// - `Nc4hw`  — channels packed in groups of 4.
/// - `Nc32hw` — channels packed in groups of 32.
///
/// The discriminants are part of the plugin ABI and are also the serialized
/// form, so `Nc4hw` is stored as `1` in JSON.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum DLayout {
    #[default]
    Nchw = 0,
    Nc4hw = 1,
    Nc32hw = 2,
}

impl DLayout {
    /// Every layout, in ordinal order.
    pub const ALL: [DLayout; 3] = [DLayout::Nchw, DLayout::Nc4hw, DLayout::Nc32hw];

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Canonical upper-case name, as used by the plugin headers.
    pub fn as_str(self) -> &'static str {
        match self {
            DLayout::Nchw => "NCHW",
            DLayout::Nc4hw => "NC4HW",
            DLayout::Nc32hw => "NC32HW",
        }
    }

    /// Number of channels packed together in the innermost vector.
    pub fn channel_group(self) -> usize {
        match self {
            DLayout::Nchw => 1,
            DLayout::Nc4hw => 4,
            DLayout::Nc32hw => 32,
        }
    }

    /// Parses either a canonical name (`"nc4hw"`) or an ordinal (`"1"`).
    pub fn from_name_or_ordinal(s: &str) -> Result<DLayout> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed.parse();
        }
        match trimmed.parse::<i32>() {
            Ok(ordinal) => DLayout::try_from(ordinal),
            Err(_) => Err(LayoutError::OrdinalOutOfRange(trimmed.to_string())),
        }
    }
}

impl TryFrom<i32> for DLayout {
    type Error = LayoutError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(DLayout::Nchw),
            1 => Ok(DLayout::Nc4hw),
            2 => Ok(DLayout::Nc32hw),
            other => Err(LayoutError::InvalidOrdinal(other)),
        }
    }
}

impl From<DLayout> for i32 {
    fn from(layout: DLayout) -> i32 {
        layout.ordinal()
    }
}

impl FromStr for DLayout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        DLayout::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| LayoutError::UnknownName(name.to_string()))
    }
}

impl fmt::Display for DLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
