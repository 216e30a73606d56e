//! # Tag schemes
//!
//! Defines the source BMES tag set and the collapsed BIO tag set used for
//! sequence labeling, plus the collapsing rule between them.

use std::fmt;

/// Character-level segmentation tags in the source corpus (BMES scheme),
/// plus Outside for unannotated characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmesTag {
    /// First character of a multi-character word.
    Begin,
    /// Interior character of a multi-character word.
    Middle,
    /// Last character of a multi-character word.
    End,
    /// Single-character word.
    Single,
    /// Not part of any word.
    Outside,
}

impl BmesTag {
    /// Total number of distinct tags.
    pub const NUM_TAGS: usize = 5;

    /// Get all possible tags in order.
    pub fn all_tags() -> &'static [BmesTag] {
        &[
            BmesTag::Begin,
            BmesTag::Middle,
            BmesTag::End,
            BmesTag::Single,
            BmesTag::Outside,
        ]
    }

    /// Parse a tag from its single-character representation.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(BmesTag::Begin),
            'M' => Some(BmesTag::Middle),
            'E' => Some(BmesTag::End),
            'S' => Some(BmesTag::Single),
            'O' => Some(BmesTag::Outside),
            _ => None,
        }
    }

    /// The single-character representation of this tag.
    pub fn as_char(self) -> char {
        match self {
            BmesTag::Begin => 'B',
            BmesTag::Middle => 'M',
            BmesTag::End => 'E',
            BmesTag::Single => 'S',
            BmesTag::Outside => 'O',
        }
    }

    /// Collapse into the three-way BIO scheme.
    ///
    /// Begin stays Begin; Middle and End become Inside; Single and Outside
    /// both map to Outside, matching the collapsing rule of the corpus
    /// conversion pass.
    pub fn collapse(self) -> BioTag {
        match self {
            BmesTag::Begin => BioTag::Begin,
            BmesTag::Middle | BmesTag::End => BioTag::Inside,
            BmesTag::Single | BmesTag::Outside => BioTag::Outside,
        }
    }
}

impl fmt::Display for BmesTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Collapsed tags emitted into training tables (BIO scheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BioTag {
    /// First character of a word.
    Begin,
    /// Subsequent character of a word.
    Inside,
    /// Not part of any word.
    Outside,
}

impl BioTag {
    /// Total number of distinct tags.
    pub const NUM_TAGS: usize = 3;

    /// Get all possible tags in order.
    pub fn all_tags() -> &'static [BioTag] {
        &[BioTag::Begin, BioTag::Inside, BioTag::Outside]
    }

    /// Get the tag index for tally and tensor operations.
    pub fn index(self) -> usize {
        match self {
            BioTag::Begin => 0,
            BioTag::Inside => 1,
            BioTag::Outside => 2,
        }
    }

    /// Get tag from index.
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(BioTag::Begin),
            1 => Some(BioTag::Inside),
            2 => Some(BioTag::Outside),
            _ => None,
        }
    }

    /// Parse a tag from its single-character representation.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(BioTag::Begin),
            'I' => Some(BioTag::Inside),
            'O' => Some(BioTag::Outside),
            _ => None,
        }
    }

    /// The single-character representation of this tag.
    pub fn as_char(self) -> char {
        match self {
            BioTag::Begin => 'B',
            BioTag::Inside => 'I',
            BioTag::Outside => 'O',
        }
    }
}

impl fmt::Display for BioTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Collapse a raw tag field into a BIO tag.
///
/// This is the permissive path used by the converter: `"B"` maps to Begin,
/// `"M"` and `"E"` map to Inside, and any other value (including `"S"`,
/// empty fields, and multi-character fields) maps to Outside. No validation
/// is performed; use [`BmesTag::from_char`] when the field must be a
/// well-formed BMES tag.
pub fn collapse_field(field: &str) -> BioTag {
    match field {
        "B" => BioTag::Begin,
        "M" | "E" => BioTag::Inside,
        _ => BioTag::Outside,
    }
}
