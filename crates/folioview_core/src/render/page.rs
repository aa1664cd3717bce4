//! Page assembly.
//!
//! # Responsibility
//! - Assemble the fixed navbar and section sequence from the content store.
//!
//! # Invariants
//! - Section order is constant: home, about, projects, skills.
//! - Assembly is a pure function of the store; no mutation, no I/O.

use crate::content::model::Education;
use crate::content::store::ContentStore;
use crate::motion::reveal::{RevealTransition, RevealTrigger};
use crate::render::cards::{project_cards, skill_cards, ProjectCard, SkillCard};
use crate::scroll::surface::SectionId;

/// One labelled control that scrolls to a section when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavAction {
    pub label: String,
    pub target: SectionId,
}

impl NavAction {
    fn new(label: &str, target: SectionId) -> Self {
        Self {
            label: label.to_string(),
            target,
        }
    }
}

/// Top bar: brand, four section buttons and the progress bar slot.
///
/// The progress bar itself is just the smoothed progress value scaled onto
/// a strip; it carries no interactive affordance, so the model only marks
/// its presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navbar {
    pub brand: String,
    pub actions: Vec<NavAction>,
    pub has_progress_bar: bool,
}

/// Hero block: entrance-animated intro plus call-to-action row.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub headline: String,
    pub sub_headline: String,
    pub summary: String,
    /// Plain download hyperlink; no dynamic generation.
    pub cv_path: String,
    pub portrait_path: String,
    /// Plays on mount, not on intersection.
    pub text_transition: RevealTransition,
    pub portrait_transition: RevealTransition,
    pub actions: Vec<NavAction>,
}

/// About block: bio paragraphs next to the education card.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutBlock {
    pub paragraphs: Vec<String>,
    pub education: Education,
    pub transition: RevealTransition,
    pub reveal_threshold: f64,
}

/// Projects block: helper note plus the card grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsBlock {
    pub note: String,
    pub cards: Vec<ProjectCard>,
    pub transition: RevealTransition,
    pub reveal_threshold: f64,
}

/// Conclusion card closing the skills section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConclusionBlock {
    pub text: String,
    /// Authoring placeholders for missing contact links, kept verbatim.
    pub contact_notes: Vec<String>,
    pub actions: Vec<NavAction>,
    pub copyright: String,
}

/// Skills block: group card grid plus the conclusion card.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsBlock {
    pub cards: Vec<SkillCard>,
    pub conclusion: ConclusionBlock,
    pub transition: RevealTransition,
    pub reveal_threshold: f64,
}

/// Body payload of one section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Hero(Hero),
    About(AboutBlock),
    Projects(ProjectsBlock),
    Skills(SkillsBlock),
}

/// One top-level scrollable section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub body: SectionBody,
}

/// Complete render model of the single-page site.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub navbar: Navbar,
    pub sections: Vec<Section>,
}

impl Page {
    /// Looks up a section by id.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// Builds the full page model from the content store.
pub fn build_page(store: &ContentStore) -> Page {
    let profile = &store.profile;
    Page {
        navbar: Navbar {
            brand: profile.brand.clone(),
            actions: vec![
                NavAction::new("Home", SectionId::Home),
                NavAction::new("About", SectionId::About),
                NavAction::new("Projects", SectionId::Projects),
                NavAction::new("Skills", SectionId::Skills),
            ],
            has_progress_bar: true,
        },
        sections: vec![
            Section {
                id: SectionId::Home,
                body: SectionBody::Hero(Hero {
                    headline: profile.headline.clone(),
                    sub_headline: profile.sub_headline.clone(),
                    summary: profile.summary.clone(),
                    cv_path: profile.cv_path.clone(),
                    portrait_path: profile.portrait_path.clone(),
                    text_transition: RevealTransition::hero_text(),
                    portrait_transition: RevealTransition::hero_portrait(),
                    actions: vec![
                        NavAction::new("View Projects", SectionId::Projects),
                        NavAction::new("About Me", SectionId::About),
                    ],
                }),
            },
            Section {
                id: SectionId::About,
                body: SectionBody::About(AboutBlock {
                    paragraphs: profile.about_paragraphs.clone(),
                    education: profile.education.clone(),
                    transition: RevealTransition::section(),
                    reveal_threshold: RevealTrigger::BLOCK_THRESHOLD,
                }),
            },
            Section {
                id: SectionId::Projects,
                body: SectionBody::Projects(ProjectsBlock {
                    note: profile.projects_note.clone(),
                    cards: project_cards(store),
                    transition: RevealTransition::section(),
                    reveal_threshold: RevealTrigger::SECTION_THRESHOLD,
                }),
            },
            Section {
                id: SectionId::Skills,
                body: SectionBody::Skills(SkillsBlock {
                    cards: skill_cards(store),
                    conclusion: ConclusionBlock {
                        text: profile.conclusion.clone(),
                        contact_notes: profile.contact_notes.clone(),
                        actions: vec![
                            NavAction::new("Back to Top", SectionId::Home),
                            NavAction::new("Projects", SectionId::Projects),
                        ],
                        copyright: profile.copyright.clone(),
                    },
                    transition: RevealTransition::section(),
                    reveal_threshold: RevealTrigger::SECTION_THRESHOLD,
                }),
            },
        ],
    }
}
