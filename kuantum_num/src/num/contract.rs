use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which 32-bit wrapping a caller is built against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uint32Contract {
    /// [`super::legacy`], one modulus above the unsigned range.
    Legacy,
    /// [`super::uint32`] and [`super::int32`].
    #[default]
    Corrected,
}

impl Uint32Contract {
    const LEGACY: &'static str = "legacy";
    const CORRECTED: &'static str = "corrected";

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legacy => Self::LEGACY,
            Self::Corrected => Self::CORRECTED,
        }
    }

    #[must_use]
    pub fn uint32(self, n: f64) -> f64 {
        match self {
            Self::Legacy => super::legacy::uint32(n),
            Self::Corrected => super::uint32(n),
        }
    }

    #[must_use]
    pub fn int32(self, n: f64) -> f64 {
        match self {
            Self::Legacy => super::legacy::int32(n),
            Self::Corrected => super::int32(n),
        }
    }
}

impl Display for Uint32Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown uint32 contract: {0:?} (expected \"legacy\" or \"corrected\")")]
pub struct ParseUint32ContractError(pub String);

impl FromStr for Uint32Contract {
    type Err = ParseUint32ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case(Self::LEGACY) {
            Ok(Self::Legacy)
        } else if value.eq_ignore_ascii_case(Self::CORRECTED) {
            Ok(Self::Corrected)
        } else {
            Err(ParseUint32ContractError(s.to_owned()))
        }
    }
}
