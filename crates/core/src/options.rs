// crates/core/src/options.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output layout for one result line, selected by numeric index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `name has N characters in M lines.`
    #[default]
    Sentence,
    /// Bare columns, better for sorting.
    Plain,
    /// Right-aligned columns with digit grouping.
    Aligned,
    /// Zero-padded columns showing the full path.
    Zeros,
}

impl OutputStyle {
    /// Highest accepted style index.
    pub const MAX_INDEX: u8 = 3;

    /// Map a numeric style index from the command line.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sentence),
            1 => Some(Self::Plain),
            2 => Some(Self::Aligned),
            3 => Some(Self::Zeros),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Sentence => 0,
            Self::Plain => 1,
            Self::Aligned => 2,
            Self::Zeros => 3,
        }
    }
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_index)
            .ok_or_else(|| {
                format!(
                    "Output style must be an index from 0 to {}: {s}",
                    Self::MAX_INDEX
                )
            })
    }
}
