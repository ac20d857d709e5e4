//! Game formats.
//!
//! The backend encodes formats as small integers. A card's own format is
//! the most restrictive format it is legal in, so legality is an ordering
//! check: all star (1) < key selection (2) < diva selection (3).

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// Tournament format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Format {
    /// Every card is legal.
    #[default]
    AllStar = 1,
    /// Key selection card pool.
    KeySelection = 2,
    /// Diva selection card pool (smallest).
    DivaSelection = 3,
}

impl Format {
    /// All formats, widest first.
    pub const ALL: [Format; 3] = [Format::AllStar, Format::KeySelection, Format::DivaSelection];

    /// Wire value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Whether a card whose own format is `card_format` may be played here.
    ///
    /// ```
    /// use deck_keeper::cards::Format;
    ///
    /// assert!(Format::AllStar.admits(Format::DivaSelection));
    /// assert!(!Format::DivaSelection.admits(Format::KeySelection));
    /// ```
    #[must_use]
    pub fn admits(self, card_format: Format) -> bool {
        card_format >= self
    }
}

impl TryFrom<u8> for Format {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Format::AllStar),
            2 => Ok(Format::KeySelection),
            3 => Ok(Format::DivaSelection),
            other => Err(Error::InvalidFormat(other)),
        }
    }
}

impl From<Format> for u8 {
    fn from(format: Format) -> Self {
        format.raw()
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::AllStar => write!(f, "all star"),
            Format::KeySelection => write!(f, "key selection"),
            Format::DivaSelection => write!(f, "diva selection"),
        }
    }
}
