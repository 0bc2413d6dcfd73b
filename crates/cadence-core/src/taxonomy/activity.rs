use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// What the listener is doing while the music plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Working,
    Exercising,
    Driving,
    Studying,
}

impl Activity {
    pub const ALL: [Self; 4] = [
        Self::Working,
        Self::Exercising,
        Self::Driving,
        Self::Studying,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Working => "Working",
            Self::Exercising => "Exercising",
            Self::Driving => "Driving",
            Self::Studying => "Studying",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTerm {
                kind: "activity",
                value: s.to_string(),
            })
    }
}
