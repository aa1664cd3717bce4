//! Process-wide immutable content store.
//!
//! # Responsibility
//! - Hold the literal project/skill/profile data behind one shared handle.
//! - Check title uniqueness so duplicate display keys never reach render.
//!
//! # Invariants
//! - The shared store is initialized once and never mutated afterwards.
//! - Project and skill ordering is the authoring order, preserved verbatim.

use crate::content::model::{ContentError, Education, Profile, ProjectEntry, SkillGroup};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

static SHARED_STORE: Lazy<ContentStore> = Lazy::new(default_content);

/// Immutable content set feeding the render layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    pub profile: Profile,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillGroup>,
}

impl ContentStore {
    /// Returns the process-wide store, initializing it on first access.
    pub fn shared() -> &'static ContentStore {
        &SHARED_STORE
    }

    /// Checks title presence and uniqueness across projects and skills.
    ///
    /// # Errors
    /// - `ContentError::EmptyTitle` when a record title is blank.
    /// - `ContentError::DuplicateTitle` when a display key repeats inside
    ///   its section.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_titles("project", self.projects.iter().map(|entry| entry.title.as_str()))?;
        check_titles("skill group", self.skills.iter().map(|group| group.title.as_str()))
    }
}

fn check_titles<'a>(
    section: &'static str,
    titles: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = BTreeSet::new();
    for title in titles {
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle { section });
        }
        if !seen.insert(title) {
            return Err(ContentError::DuplicateTitle {
                section,
                title: title.to_string(),
            });
        }
    }
    Ok(())
}

fn default_content() -> ContentStore {
    ContentStore {
        profile: Profile {
            brand: "Sayed Shahriar Alam".to_string(),
            headline: "Electrical & Electronic Engineer".to_string(),
            sub_headline:
                "Machine Learning • Embedded Systems • Computer Vision • Data & Signal Processing"
                    .to_string(),
            summary:
                "I build intelligent systems that connect real-world hardware with data-driven decision making."
                    .to_string(),
            portrait_path: "assets/image.png".to_string(),
            cv_path: "/Sayed_Shahriar_Alam_CV.pdf".to_string(),
            about_paragraphs: vec![
                "I’m a fresh Electrical & Electronic Engineering graduate from BRAC University with a double major in Electronics and Artificial Intelligence."
                    .to_string(),
                "My experience sits at the intersection of hardware systems and machine learning—working with embedded devices, sensor data, and data-driven models to build reliable intelligent solutions."
                    .to_string(),
            ],
            education: Education {
                degree: "B.Sc. in Electrical & Electronic Engineering".to_string(),
                institution: "BRAC University".to_string(),
                graduation_year: 2026,
                double_major: "Electronics & Artificial Intelligence".to_string(),
                cgpa: "3.44 / 4.00".to_string(),
                tags: vec![
                    "Embedded Systems".to_string(),
                    "Digital Logic".to_string(),
                    "Machine Learning".to_string(),
                    "Signal & Data Processing".to_string(),
                ],
            },
            projects_note:
                "Each project has a hyperlink (`href`) that you can replace later with GitHub / paper / demo links."
                    .to_string(),
            conclusion:
                "I enjoy building reliable, measurable systems—from sensors and embedded logic to ML pipelines and computer vision."
                    .to_string(),
            // Authoring-in-progress placeholders, kept verbatim on purpose.
            contact_notes: vec![
                "Your email + LinkedIn + GitHub".to_string(),
                "Whether you want a “Contact” page".to_string(),
                "Project links (GitHub/demo) to replace the `href: \"#\"` placeholders".to_string(),
            ],
            copyright: "© 2026 Sayed Shahriar Alam".to_string(),
        },
        projects: vec![
            ProjectEntry::new(
                "MediLINK – Intelligent Medication Management System",
                "Designed an embedded smart medication platform integrating electronics, sensor-based intake verification, automated dispensing logic, and centralized data management.",
                "#",
                &["Embedded", "Electronics", "Sensors", "Cloud"],
            ),
            ProjectEntry::new(
                "Heart Disease Risk Prediction Using Clinical Data",
                "Built a clinical decision support workflow using structured datasets, focusing on preprocessing, feature relevance, and model evaluation for reliability.",
                "#",
                &["ML", "Healthcare", "Model Evaluation"],
            ),
            ProjectEntry::new(
                "Predictive Maintenance of Industrial Equipment",
                "Developed a sensor-driven fault prediction pipeline for industrial pumps using time-series modeling and anomaly detection.",
                "#",
                &["Time-Series", "LSTM", "Anomaly Detection"],
            ),
            ProjectEntry::new(
                "Military Threat Detection Using Vision-Based Fusion",
                "Designed a vision-based detection framework combining object detection and deep feature extraction with a focus on real-time robustness.",
                "#",
                &["Computer Vision", "YOLO", "Deep Learning"],
            ),
        ],
        skills: vec![
            SkillGroup::new(
                "Embedded & Electronics",
                &[
                    "Embedded C, Verilog / HDL",
                    "Digital Logic Design",
                    "Sensors & Data Acquisition",
                    "Circuit & System Analysis",
                ],
            ),
            SkillGroup::new(
                "Machine Learning & AI",
                &[
                    "Random Forest, XGBoost, ANN",
                    "LSTM / GRU (Time-Series)",
                    "Feature Engineering & Model Evaluation",
                    "Experiment Tracking & Reporting",
                ],
            ),
            SkillGroup::new(
                "Computer Vision & Edge AI",
                &[
                    "OpenCV, YOLOv8",
                    "ResNet-152 Feature Extraction",
                    "Model Quantization Basics",
                    "Deployment Concepts",
                ],
            ),
            SkillGroup::new(
                "Tools & Workflow",
                &[
                    "Python, C, MATLAB",
                    "Git",
                    "Technical Documentation",
                    "Team Collaboration",
                ],
            ),
        ],
    }
}
