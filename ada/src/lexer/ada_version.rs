// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use serde::Deserialize;
use strum::{EnumIter, EnumString, IntoEnumIterator};

use super::{keyword, TokenType};

/// A revision of the Ada language. Every revision reserves all keywords of
/// the revisions before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Deserialize, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AdaVersion {
    #[serde(rename = "83", alias = "1983")]
    #[strum(serialize = "83", serialize = "1983", serialize = "ada83")]
    Ada83,

    #[serde(rename = "95", alias = "1995")]
    #[strum(serialize = "95", serialize = "1995", serialize = "ada95")]
    Ada95,

    #[serde(rename = "2005", alias = "05")]
    #[strum(serialize = "2005", serialize = "05", serialize = "ada2005", serialize = "ada05")]
    Ada2005,

    #[default]
    #[serde(rename = "2012", alias = "12")]
    #[strum(serialize = "2012", serialize = "12", serialize = "ada2012", serialize = "ada12")]
    Ada2012,
}

impl AdaVersion {
    pub const LATEST: Self = Self::Ada2012;

    /// Whether `ty` is a reserved word in this revision.
    #[must_use]
    pub fn contains(self, ty: TokenType) -> bool {
        match self {
            Self::Ada83 => keyword::is_ada83_keyword(ty),
            Self::Ada95 => keyword::is_ada95_keyword(ty),
            Self::Ada2005 => keyword::is_ada05_keyword(ty),
            Self::Ada2012 => keyword::is_ada12_keyword(ty),
        }
    }

    /// The first revision that reserves `ty`, if any.
    #[must_use]
    pub fn introduced(ty: TokenType) -> Option<Self> {
        Self::iter().find(|version| version.contains(ty))
    }

    #[must_use]
    pub const fn year(self) -> u16 {
        match self {
            Self::Ada83 => 1983,
            Self::Ada95 => 1995,
            Self::Ada2005 => 2005,
            Self::Ada2012 => 2012,
        }
    }
}

impl Display for AdaVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ada83 => f.write_str("Ada 83"),
            Self::Ada95 => f.write_str("Ada 95"),
            Self::Ada2005 => f.write_str("Ada 2005"),
            Self::Ada2012 => f.write_str("Ada 2012"),
        }
    }
}
