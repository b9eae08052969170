//! Input rules for the skill-exchange marketplace: offering forms and peer reviews.

use serde::{Deserialize, Serialize};

pub const SKILL_LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];

pub const DEFAULT_DURATION_MINUTES: i32 = 60;
pub const MIN_DURATION_MINUTES: i32 = 30;
pub const MAX_DURATION_MINUTES: i32 = 180;
pub const DEFAULT_MAX_LEARNERS: i32 = 1;
pub const MAX_LEARNERS_LIMIT: i32 = 20;

/// Skill categories with the target roles a teacher can choose within each.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming",
        &[
            "Junior Software Developer",
            "Full Stack Developer",
            "Frontend Developer",
            "Backend Developer",
            "Mobile App Developer",
            "DevOps Engineer",
            "Software Architect",
            "Tech Lead",
        ],
    ),
    (
        "Design",
        &[
            "UI/UX Designer",
            "Graphic Designer",
            "Product Designer",
            "Web Designer",
            "Motion Graphics Designer",
            "Creative Director",
        ],
    ),
    (
        "Marketing",
        &[
            "Digital Marketing Specialist",
            "Social Media Manager",
            "Content Marketing Manager",
            "SEO Specialist",
            "Marketing Manager",
            "Brand Manager",
        ],
    ),
    (
        "Business",
        &[
            "Business Analyst",
            "Product Manager",
            "Project Manager",
            "Consultant",
            "Operations Manager",
            "Strategy Manager",
        ],
    ),
    (
        "Languages",
        &[
            "Language Teacher",
            "Translator",
            "Interpreter",
            "Content Writer",
            "Localization Specialist",
        ],
    ),
    (
        "Music",
        &[
            "Music Teacher",
            "Sound Engineer",
            "Music Producer",
            "Composer",
            "Audio Technician",
        ],
    ),
    (
        "Art",
        &[
            "Art Teacher",
            "Illustrator",
            "Art Director",
            "Concept Artist",
            "Visual Artist",
        ],
    ),
    (
        "Writing",
        &[
            "Content Writer",
            "Technical Writer",
            "Copywriter",
            "Editor",
            "Journalist",
        ],
    ),
    (
        "Photography",
        &[
            "Photographer",
            "Photo Editor",
            "Visual Content Creator",
            "Photography Instructor",
        ],
    ),
    (
        "Cooking",
        &[
            "Chef",
            "Culinary Instructor",
            "Food Stylist",
            "Restaurant Manager",
        ],
    ),
    (
        "Fitness",
        &[
            "Personal Trainer",
            "Fitness Instructor",
            "Sports Coach",
            "Wellness Coach",
        ],
    ),
    ("Other", &["Instructor", "Trainer", "Specialist", "Expert"]),
];

pub fn roles_for_category(category: &str) -> Option<&'static [&'static str]> {
    SKILL_CATEGORIES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, roles)| *roles)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewOffering {
    pub teacher_id: uuid::Uuid,
    pub skill_name: String,
    pub skill_category: String,
    pub target_role: String,
    pub description: String,
    pub level: String,
    pub prerequisites: Option<String>,
    pub duration_minutes: Option<i32>,
    pub max_learners: Option<i32>,
    pub demo_video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

fn issue(field: &'static str, message: impl Into<String>) -> ValidationIssue {
    ValidationIssue {
        field,
        message: message.into(),
    }
}

/// Checks a new offering. An empty result means the form is acceptable.
pub fn validate_offering(offering: &NewOffering) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if offering.skill_name.trim().is_empty() {
        issues.push(issue("skill_name", "Please enter a skill name"));
    }

    match roles_for_category(&offering.skill_category) {
        None => issues.push(issue("skill_category", "Please select a skill category")),
        Some(roles) => {
            if !roles.contains(&offering.target_role.as_str()) {
                issues.push(issue(
                    "target_role",
                    format!(
                        "'{}' is not a role offered under {}",
                        offering.target_role, offering.skill_category
                    ),
                ));
            }
        }
    }

    if !SKILL_LEVELS.contains(&offering.level.as_str()) {
        issues.push(issue(
            "level",
            format!("Level must be one of: {}", SKILL_LEVELS.join(", ")),
        ));
    }

    if offering.description.trim().is_empty() {
        issues.push(issue("description", "Please provide a description"));
    }

    let duration = offering.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration) {
        issues.push(issue(
            "duration_minutes",
            format!(
                "Duration must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES} minutes"
            ),
        ));
    }

    let learners = offering.max_learners.unwrap_or(DEFAULT_MAX_LEARNERS);
    if !(1..=MAX_LEARNERS_LIMIT).contains(&learners) {
        issues.push(issue(
            "max_learners",
            format!("Max learners must be between 1 and {MAX_LEARNERS_LIMIT}"),
        ));
    }

    issues
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRatingsInput {
    pub teaching: i32,
    pub communication: i32,
    pub knowledge: i32,
    pub overall: i32,
}

/// Every category must be rated 1–5.
pub fn validate_ratings(r: &ReviewRatingsInput) -> Vec<ValidationIssue> {
    [
        ("teaching", r.teaching),
        ("communication", r.communication),
        ("knowledge", r.knowledge),
        ("overall", r.overall),
    ]
    .into_iter()
    .filter(|(_, v)| !(1..=5).contains(v))
    .map(|(field, v)| issue(field, format!("Rating must be between 1 and 5, got {v}")))
    .collect()
}

/// Trimmed feedback; blank becomes `None`.
pub fn normalize_feedback(feedback: Option<&str>) -> Option<String> {
    feedback
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

pub fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn offering() -> NewOffering {
        NewOffering {
            teacher_id: Uuid::new_v4(),
            skill_name: "React Development".to_string(),
            skill_category: "Programming".to_string(),
            target_role: "Full Stack Developer".to_string(),
            description: "Hooks, state and testing".to_string(),
            level: "intermediate".to_string(),
            prerequisites: None,
            duration_minutes: None,
            max_learners: None,
            demo_video_url: None,
        }
    }

    #[test]
    fn test_valid_offering_has_no_issues() {
        assert!(validate_offering(&offering()).is_empty());
    }

    #[test]
    fn test_role_must_belong_to_category() {
        let mut o = offering();
        o.target_role = "Chef".to_string();
        let issues = validate_offering(&o);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "target_role");
    }

    #[test]
    fn test_unknown_category_reported_once() {
        let mut o = offering();
        o.skill_category = "Juggling".to_string();
        let issues = validate_offering(&o);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "skill_category");
    }

    #[test]
    fn test_blank_fields_and_bad_ranges_collected() {
        let mut o = offering();
        o.skill_name = "   ".to_string();
        o.description = String::new();
        o.level = "expert".to_string();
        o.duration_minutes = Some(15);
        o.max_learners = Some(0);
        let fields: Vec<_> = validate_offering(&o).into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec!["skill_name", "level", "description", "duration_minutes", "max_learners"]
        );
    }

    #[test]
    fn test_duration_bounds_inclusive() {
        let mut o = offering();
        o.duration_minutes = Some(30);
        assert!(validate_offering(&o).is_empty());
        o.duration_minutes = Some(180);
        assert!(validate_offering(&o).is_empty());
        o.duration_minutes = Some(181);
        assert_eq!(validate_offering(&o).len(), 1);
    }

    #[test]
    fn test_ratings_must_all_be_in_range() {
        let ok = ReviewRatingsInput {
            teaching: 5,
            communication: 1,
            knowledge: 3,
            overall: 4,
        };
        assert!(validate_ratings(&ok).is_empty());

        let missing = ReviewRatingsInput {
            teaching: 0,
            communication: 6,
            knowledge: 3,
            overall: 4,
        };
        let issues = validate_ratings(&missing);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "teaching");
        assert_eq!(issues[1].field, "communication");
    }

    #[test]
    fn test_blank_feedback_becomes_none() {
        assert_eq!(normalize_feedback(Some("   ")), None);
        assert_eq!(normalize_feedback(None), None);
        assert_eq!(
            normalize_feedback(Some("  Great session ")),
            Some("Great session".to_string())
        );
    }

    #[test]
    fn test_every_category_has_roles() {
        for (category, roles) in SKILL_CATEGORIES {
            assert!(!roles.is_empty(), "{category} has no roles");
        }
    }
}
