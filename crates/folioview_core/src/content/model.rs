//! Portfolio content domain model.
//!
//! # Responsibility
//! - Define the fixed-shape records behind every rendered block.
//! - Validate the literal content set before it reaches the render layer.
//!
//! # Invariants
//! - `ProjectEntry::title` and `SkillGroup::title` are unique display keys.
//! - Records are immutable after startup; no runtime mutation API exists.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Source record for one project card.
///
/// `href` stays the `"#"` placeholder until a real GitHub/paper/demo link is
/// assigned; the render layer treats that placeholder as a non-navigating
/// link rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Unique display key shown as the card heading.
    pub title: String,
    /// Short card body text.
    pub description: String,
    /// External URL, or `"#"` while the link is unassigned.
    pub href: String,
    /// Ordered badge labels.
    pub tags: Vec<String>,
}

impl ProjectEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        href: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            href: href.into(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }
}

/// One titled skill group with ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Unique display key shown as the group heading.
    pub title: String,
    /// Ordered skill lines rendered as bullet items.
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn new(title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: items.iter().map(|item| (*item).to_string()).collect(),
        }
    }
}

/// Education record rendered inside the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub graduation_year: u16,
    pub double_major: String,
    pub cgpa: String,
    /// Ordered badge labels under the education card.
    pub tags: Vec<String>,
}

/// Fixed page-owner data: identity, copy and static asset paths.
///
/// Contact details are intentionally absent; the conclusion block carries
/// placeholder note lines until the owner supplies real links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown in the navbar brand slot.
    pub brand: String,
    pub headline: String,
    pub sub_headline: String,
    pub summary: String,
    /// Fixed portrait asset path; load failure is the host's concern.
    pub portrait_path: String,
    /// Fixed CV document path exposed as a plain download link.
    pub cv_path: String,
    pub about_paragraphs: Vec<String>,
    pub education: Education,
    /// Muted helper line above the project grid.
    pub projects_note: String,
    pub conclusion: String,
    /// Placeholder note lines standing in for real contact links.
    pub contact_notes: Vec<String>,
    pub copyright: String,
}

/// Validation failure over the literal content set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A project or skill record has an empty title.
    EmptyTitle { section: &'static str },
    /// Two records in the same section share a display key.
    DuplicateTitle {
        section: &'static str,
        title: String,
    },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle { section } => {
                write!(f, "{section} entry has an empty title")
            }
            Self::DuplicateTitle { section, title } => {
                write!(f, "duplicate {section} title: `{title}`")
            }
        }
    }
}

impl Error for ContentError {}
