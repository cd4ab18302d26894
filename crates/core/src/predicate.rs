use std::collections::BTreeSet;
use std::fmt;

use crate::pdf::{Directory, Pdf, Tag};

/// Filter applied to the catalog to produce the visible list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PdfPredicate {
    #[default]
    All,
    /// Any keyword equals (ignoring case) a word of the name, where words
    /// are split on non-alphanumeric characters.
    NameContainsKeywords(Vec<String>),
    HasAllTags(BTreeSet<Tag>),
    InDirectory(Directory),
}

impl PdfPredicate {
    pub fn matches(&self, pdf: &Pdf) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(keywords) => {
                let mut words = pdf
                    .name()
                    .as_str()
                    .split(|c: char| !c.is_alphanumeric())
                    .filter(|w| !w.is_empty());
                words.any(|word| keywords.iter().any(|k| k.eq_ignore_ascii_case(word)))
            }
            Self::HasAllTags(tags) => tags.is_subset(pdf.tags()),
            Self::InDirectory(directory) => pdf.directory() == directory,
        }
    }
}

impl fmt::Display for PdfPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::NameContainsKeywords(keywords) => write!(f, "name {}", keywords.join(" ")),
            Self::HasAllTags(tags) => {
                f.write_str("tags ")?;
                for tag in tags {
                    write!(f, "{tag}")?;
                }
                Ok(())
            }
            Self::InDirectory(directory) => write!(f, "directory {directory}"),
        }
    }
}
