//! Label entities: categories, types and tags.
//!
//! All three kinds share one shape (an id and a unique title) and live in
//! separate tables. [`LabelKind`] selects the table.

use std::fmt;
use std::str::FromStr;

/// Which collection a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Category,
    Type,
    Tag,
}

impl LabelKind {
    pub const ALL: [LabelKind; 3] = [LabelKind::Category, LabelKind::Type, LabelKind::Tag];

    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            LabelKind::Category => "categories",
            LabelKind::Type => "types",
            LabelKind::Tag => "tags",
        }
    }

    /// Singular, human-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelKind::Category => "category",
            LabelKind::Type => "type",
            LabelKind::Tag => "tag",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelKind {
    type Err = String;

    /// Accepts both the singular and the plural (table) name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "category" | "categories" => Ok(LabelKind::Category),
            "type" | "types" => Ok(LabelKind::Type),
            "tag" | "tags" => Ok(LabelKind::Tag),
            other => Err(format!(
                "unknown label kind '{other}' (expected categories, types or tags)"
            )),
        }
    }
}

/// A uniquely titled category, type or tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    pub id: i64,
    pub kind: LabelKind,
    pub title: String,
}

impl Label {
    pub fn new(id: i64, kind: LabelKind, title: String) -> Self {
        Self { id, kind, title }
    }
}
