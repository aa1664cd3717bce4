//! Deterministic card projection from the content store.
//!
//! # Responsibility
//! - Project project/skill records into render-ready card views, in
//!   authoring order, as a pure function of the store.
//! - Classify card links into external, relative and placeholder targets.
//!
//! # Invariants
//! - Projection performs no mutation, randomness or I/O.
//! - One card per source record, order preserved.

use crate::content::model::{ProjectEntry, SkillGroup};
use crate::content::store::ContentStore;
use crate::motion::reveal::{RevealTransition, RevealTrigger};

/// Navigation target of a card hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLink {
    /// Real URL opened in a new browsing context without referrer leakage.
    External { url: String },
    /// Host-relative path (documents, assets) opened in place.
    Relative { path: String },
    /// Authoring placeholder (`"#"`); activating it navigates nowhere.
    Placeholder,
}

impl CardLink {
    /// Classifies a raw href the way the page wires its anchors.
    pub fn classify(href: &str) -> CardLink {
        if href.starts_with("http") {
            CardLink::External {
                url: href.to_string(),
            }
        } else if href == "#" {
            CardLink::Placeholder
        } else {
            CardLink::Relative {
                path: href.to_string(),
            }
        }
    }

    /// Whether activating the link opens a new browsing context.
    pub fn opens_new_context(&self) -> bool {
        matches!(self, CardLink::External { .. })
    }

    /// Whether activating the link navigates at all.
    pub fn navigates(&self) -> bool {
        !matches!(self, CardLink::Placeholder)
    }
}

/// Render-ready project card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub link: CardLink,
    pub tags: Vec<String>,
    /// Staggered fade played on first intersection.
    pub transition: RevealTransition,
    /// Visible fraction required to trigger the reveal.
    pub reveal_threshold: f64,
}

/// Render-ready skill group card.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCard {
    pub title: String,
    pub items: Vec<String>,
    pub transition: RevealTransition,
    pub reveal_threshold: f64,
}

/// Projects one card per `ProjectEntry`, preserving array order.
pub fn project_cards(store: &ContentStore) -> Vec<ProjectCard> {
    store
        .projects
        .iter()
        .enumerate()
        .map(|(index, entry)| project_card(index, entry))
        .collect()
}

fn project_card(index: usize, entry: &ProjectEntry) -> ProjectCard {
    ProjectCard {
        title: entry.title.clone(),
        description: entry.description.clone(),
        link: CardLink::classify(&entry.href),
        tags: entry.tags.clone(),
        transition: RevealTransition::project_card(index),
        reveal_threshold: RevealTrigger::BLOCK_THRESHOLD,
    }
}

/// Projects one card per `SkillGroup`, preserving array order.
pub fn skill_cards(store: &ContentStore) -> Vec<SkillCard> {
    store
        .skills
        .iter()
        .enumerate()
        .map(|(index, group)| skill_card(index, group))
        .collect()
}

fn skill_card(index: usize, group: &SkillGroup) -> SkillCard {
    SkillCard {
        title: group.title.clone(),
        items: group.items.clone(),
        transition: RevealTransition::skill_card(index),
        reveal_threshold: RevealTrigger::BLOCK_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::CardLink;

    #[test]
    fn classify_covers_external_relative_and_placeholder() {
        let external = CardLink::classify("https://example.org/paper");
        assert!(external.opens_new_context());
        assert!(external.navigates());

        let relative = CardLink::classify("/Sayed_Shahriar_Alam_CV.pdf");
        assert!(!relative.opens_new_context());
        assert!(relative.navigates());

        let placeholder = CardLink::classify("#");
        assert!(!placeholder.opens_new_context());
        assert!(!placeholder.navigates());
    }
}
