//! Static page content - the catalog every other module derives from.
//!
//! The portfolio's content is fixed at compile time: skill groups with
//! target fill percentages, the project grid, the tech badge strip, and
//! the contact channels. Presentation reads these tables directly; the
//! `filter` module derives visible subsets; the `reveal` module derives
//! activation plans from them.
//!
//! Titles and descriptions are stored as translation keys, not prose -
//! resolve them through [`crate::i18n::t`].

// =============================================================================
// Skills
// =============================================================================

/// One skill bar: display name plus target fill percentage (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A titled group of skills sharing one accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    /// Stable group key, also the first half of activation ids.
    pub category: &'static str,
    /// Translation key for the group heading.
    pub title_key: &'static str,
    /// Accent color (hex) used for the group icon and bar fill.
    pub accent: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        category: "frontend",
        title_key: "skills.frontend.title",
        accent: "#00D9FF", // electric blue
        skills: &[
            Skill { name: "React", level: 95 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "Next.js", level: 80 },
        ],
    },
    SkillGroup {
        category: "styling",
        title_key: "skills.styling.title",
        accent: "#B366FF", // purple glow
        skills: &[
            Skill { name: "CSS3", level: 95 },
            Skill { name: "Tailwind CSS", level: 90 },
            Skill { name: "SASS/SCSS", level: 85 },
            Skill { name: "Figma", level: 80 },
        ],
    },
    SkillGroup {
        category: "tools",
        title_key: "skills.tools.title",
        accent: "#66F0FF", // soft cyan
        skills: &[
            Skill { name: "Git & GitHub", level: 90 },
            Skill { name: "Webpack", level: 75 },
            Skill { name: "Node.js", level: 70 },
            Skill { name: "Jest", level: 65 },
        ],
    },
];

/// Composite activation id for one skill bar: `"{category}-{name}"`.
///
/// Stable across renders - the reveal module keys its activated set on it.
pub fn skill_activation_id(group: &SkillGroup, skill: &Skill) -> String {
    format!("{}-{}", group.category, skill.name)
}

/// Activation ids for every skill, grouped in catalog order.
///
/// Shape matches what [`crate::state::reveal::plan_staged`] expects.
pub fn skill_activation_groups() -> Vec<Vec<String>> {
    SKILL_GROUPS
        .iter()
        .map(|group| {
            group
                .skills
                .iter()
                .map(|skill| skill_activation_id(group, skill))
                .collect()
        })
        .collect()
}

// =============================================================================
// Tech badges
// =============================================================================

/// One badge in the tech stack strip below the skills grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechBadge {
    pub name: &'static str,
    pub color: &'static str,
}

pub static TECH_BADGES: [TechBadge; 8] = [
    TechBadge { name: "react", color: "#00D9FF" },
    TechBadge { name: "javascript", color: "#F7DF1E" },
    TechBadge { name: "html5", color: "#E34C26" },
    TechBadge { name: "css3", color: "#1572B6" },
    TechBadge { name: "sass", color: "#CC6699" },
    TechBadge { name: "nodejs", color: "#339933" },
    TechBadge { name: "git", color: "#F05032" },
    TechBadge { name: "figma", color: "#F24E1E" },
];

/// Activation ids for the tech badge strip, in catalog order.
pub fn tech_badge_activation_ids() -> Vec<String> {
    TECH_BADGES
        .iter()
        .map(|badge| format!("tech-{}", badge.name))
        .collect()
}

// =============================================================================
// Projects
// =============================================================================

/// Project categories. Closed set - the filter's non-"all" values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    React,
    JavaScript,
    Css,
}

/// One card in the projects grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub category: ProjectCategory,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub technologies: &'static [&'static str],
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        category: ProjectCategory::React,
        title_key: "projects.project1.title",
        description_key: "projects.project1.description",
        technologies: &["React", "TypeScript", "Tailwind CSS"],
    },
    Project {
        id: 2,
        category: ProjectCategory::JavaScript,
        title_key: "projects.project2.title",
        description_key: "projects.project2.description",
        technologies: &["Vanilla JS", "CSS Grid", "Local Storage"],
    },
    Project {
        id: 3,
        category: ProjectCategory::Css,
        title_key: "projects.project3.title",
        description_key: "projects.project3.description",
        technologies: &["CSS3", "GSAP", "HTML5"],
    },
    Project {
        id: 4,
        category: ProjectCategory::React,
        title_key: "projects.project4.title",
        description_key: "projects.project4.description",
        technologies: &["React", "Chart.js", "API Integration"],
    },
    Project {
        id: 5,
        category: ProjectCategory::JavaScript,
        title_key: "projects.project5.title",
        description_key: "projects.project5.description",
        technologies: &["JavaScript", "Weather API", "Geolocation"],
    },
    Project {
        id: 6,
        category: ProjectCategory::Css,
        title_key: "projects.project6.title",
        description_key: "projects.project6.description",
        technologies: &["CSS3", "3D Transforms", "Animations"],
    },
];

// =============================================================================
// Contact channels
// =============================================================================

/// One entry in the contact info row (email / phone / location).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub title_key: &'static str,
    pub value: &'static str,
    pub color: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title_key: "contact.info.email",
        value: "alex@example.com",
        color: "#00D9FF",
    },
    ContactChannel {
        title_key: "contact.info.phone",
        value: "+1 (555) 123-4567",
        color: "#B366FF",
    },
    ContactChannel {
        title_key: "contact.info.location",
        value: "San Francisco, CA",
        color: "#66F0FF",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_activation_ids_are_unique() {
        let ids: Vec<String> = skill_activation_groups().into_iter().flatten().collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), 12);
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_skill_activation_id_format() {
        let group = &SKILL_GROUPS[0];
        let skill = &group.skills[0];
        assert_eq!(skill_activation_id(group, skill), "frontend-React");
    }

    #[test]
    fn test_projects_cover_every_category() {
        assert!(PROJECTS.iter().any(|p| p.category == ProjectCategory::React));
        assert!(PROJECTS.iter().any(|p| p.category == ProjectCategory::JavaScript));
        assert!(PROJECTS.iter().any(|p| p.category == ProjectCategory::Css));
    }

    #[test]
    fn test_tech_badge_ids_in_catalog_order() {
        let ids = tech_badge_activation_ids();
        assert_eq!(ids.len(), TECH_BADGES.len());
        assert_eq!(ids[0], "tech-react");
        assert_eq!(ids[7], "tech-figma");
    }
}
