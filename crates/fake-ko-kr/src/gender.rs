//! Sex and gender markers used by the providers.
//!
//! [`Sex`] selects registration-number categories and only admits `M` and
//! `F`; Korean registration numbers have no `X` category. [`PassportGender`]
//! is the marker printed on a passport and adds `X`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Sex recorded in a registration number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male (`"M"`).
    #[serde(rename = "M")]
    Male,
    /// Female (`"F"`).
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Returns the single-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Parses an optional gender argument.
    ///
    /// `None` means "either sex" and stays `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidGender`] for anything other than `"M"`
    /// or `"F"`.
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, ProviderError> {
        value.map(str::parse::<Self>).transpose()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(ProviderError::InvalidGender {
                value: other.to_owned(),
            }),
        }
    }
}

/// Gender marker printed on a passport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassportGender {
    /// `M`.
    #[serde(rename = "M")]
    Male,
    /// `F`.
    #[serde(rename = "F")]
    Female,
    /// `X`, the unspecified marker.
    #[serde(rename = "X")]
    Unspecified,
}

/// Selection weights per mille: 49.3% `M`, 49.3% `F`, 1.4% `X`.
const MARKER_WEIGHTS: [(PassportGender, u32); 3] = [
    (PassportGender::Male, 493),
    (PassportGender::Female, 493),
    (PassportGender::Unspecified, 14),
];

const MARKER_WEIGHT_TOTAL: u32 = 1_000;

impl PassportGender {
    /// Draws a marker using the fixed 49.3 / 49.3 / 1.4 weights.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut roll = rng.random_range(0..MARKER_WEIGHT_TOTAL);
        for (marker, weight) in MARKER_WEIGHTS {
            if roll < weight {
                return marker;
            }
            roll -= weight;
        }
        Self::Unspecified
    }

    /// Returns the single-letter marker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unspecified => "X",
        }
    }

    /// Returns the registration-number sex for `M` and `F`.
    #[must_use]
    pub const fn sex(self) -> Option<Sex> {
        match self {
            Self::Male => Some(Sex::Male),
            Self::Female => Some(Sex::Female),
            Self::Unspecified => None,
        }
    }
}

impl fmt::Display for PassportGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
