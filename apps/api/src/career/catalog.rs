use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::career::data::{builtin_profiles, builtin_rules};
use crate::career::questions::{OptionId, Question};

/// Static descriptive record for one career path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub growth_path: String,
    pub skills: Vec<String>,
}

/// Awards fixed weights to careers when a question is answered with `option`.
#[derive(Debug, Clone)]
pub struct ScoringRule {
    pub question: Question,
    pub option: String,
    pub weights: Vec<(String, u32)>,
}

/// Authoring mistakes in the profile or rule tables.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("career profile table is empty")]
    Empty,

    #[error("career profile #{0} has an empty title")]
    EmptyTitle(usize),

    #[error("duplicate career title '{0}'")]
    DuplicateTitle(String),

    #[error("rule for {question:?} references unknown option '{option}'")]
    UnknownOption { question: Question, option: String },

    #[error("rule for {question:?} / '{option}' references unknown career '{title}'")]
    UnknownCareer {
        question: Question,
        option: String,
        title: String,
    },

    #[error("rule for {question:?} / '{option}' gives '{title}' a zero weight")]
    ZeroWeight {
        question: Question,
        option: String,
        title: String,
    },

    #[error("more than one rule for {question:?} / '{option}'")]
    DuplicateRule { question: Question, option: String },
}

/// Validated profiles plus rules resolved to (question, option) → [(career index, weight)].
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    profiles: Vec<CareerProfile>,
    by_title: HashMap<String, usize>,
    pub(crate) rules: HashMap<(Question, OptionId), Vec<(usize, u32)>>,
}

impl CareerCatalog {
    pub fn new(profiles: Vec<CareerProfile>, rules: Vec<ScoringRule>) -> Result<Self, CatalogError> {
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_title = HashMap::with_capacity(profiles.len());
        for (i, p) in profiles.iter().enumerate() {
            if p.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(i));
            }
            if by_title.insert(p.title.clone(), i).is_some() {
                return Err(CatalogError::DuplicateTitle(p.title.clone()));
            }
        }

        let mut resolved = HashMap::new();
        for rule in rules {
            let option_id = rule.question.option_id(&rule.option).ok_or_else(|| {
                CatalogError::UnknownOption {
                    question: rule.question,
                    option: rule.option.clone(),
                }
            })?;

            let mut weights = Vec::with_capacity(rule.weights.len());
            for (title, weight) in &rule.weights {
                let idx = *by_title.get(title).ok_or_else(|| CatalogError::UnknownCareer {
                    question: rule.question,
                    option: rule.option.clone(),
                    title: title.clone(),
                })?;
                if *weight == 0 {
                    return Err(CatalogError::ZeroWeight {
                        question: rule.question,
                        option: rule.option.clone(),
                        title: title.clone(),
                    });
                }
                weights.push((idx, *weight));
            }

            if resolved.insert((rule.question, option_id), weights).is_some() {
                return Err(CatalogError::DuplicateRule {
                    question: rule.question,
                    option: rule.option,
                });
            }
        }

        Ok(Self {
            profiles,
            by_title,
            rules: resolved,
        })
    }

    /// The compiled-in catalog. Called once at startup; an error here is a
    /// data-authoring bug and stops the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_profiles(), builtin_rules())
    }

    /// Profiles in declaration order.
    pub fn profiles(&self) -> &[CareerProfile] {
        &self.profiles
    }

    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Every assessment question in presentation order.
    pub fn questions(&self) -> &'static [Question] {
        &Question::ALL
    }

    /// Questions that have at least one scoring rule.
    pub fn weighted_questions(&self) -> Vec<Question> {
        Question::ALL
            .into_iter()
            .filter(|q| self.rules.keys().any(|(rq, _)| rq == q))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(title: &str) -> CareerProfile {
        CareerProfile {
            title: title.to_string(),
            description: String::new(),
            salary_range: String::new(),
            growth_path: String::new(),
            skills: vec![],
        }
    }

    fn r(question: Question, option: &str, weights: &[(&str, u32)]) -> ScoringRule {
        ScoringRule {
            question,
            option: option.to_string(),
            weights: weights.iter().map(|(t, w)| (t.to_string(), *w)).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = CareerCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.profiles()[0].title, "BPO Technical Support");
        assert_eq!(catalog.profiles()[15].title, "Freelance Developer");
    }

    #[test]
    fn test_builtin_leaves_some_questions_unweighted() {
        let catalog = CareerCatalog::builtin().unwrap();
        let weighted = catalog.weighted_questions();
        assert!(weighted.contains(&Question::DomainInterest));
        assert!(!weighted.contains(&Question::LearningStyle));
        assert!(!weighted.contains(&Question::WorkLifeBalance));
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let err = CareerCatalog::new(vec![p("A"), p("A")], vec![]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTitle("A".to_string()));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(
            CareerCatalog::new(vec![], vec![]).unwrap_err(),
            CatalogError::Empty
        );
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = CareerCatalog::new(vec![p("A"), p("  ")], vec![]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyTitle(1));
    }

    #[test]
    fn test_rule_with_unknown_career_rejected() {
        let rules = vec![r(Question::DomainInterest, "Cybersecurity", &[("Ghost", 2)])];
        let err = CareerCatalog::new(vec![p("A")], rules).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCareer { ref title, .. } if title == "Ghost"));
    }

    #[test]
    fn test_rule_with_unknown_option_rejected() {
        let rules = vec![r(Question::DomainInterest, "Underwater basket weaving", &[("A", 2)])];
        let err = CareerCatalog::new(vec![p("A")], rules).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownOption { .. }));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let rules = vec![r(Question::DomainInterest, "Cybersecurity", &[("A", 0)])];
        let err = CareerCatalog::new(vec![p("A")], rules).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroWeight { .. }));
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let rules = vec![
            r(Question::DomainInterest, "Cybersecurity", &[("A", 1)]),
            r(Question::DomainInterest, "Cybersecurity", &[("A", 2)]),
        ];
        let err = CareerCatalog::new(vec![p("A")], rules).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRule { .. }));
    }

    #[test]
    fn test_profile_lookup_by_title() {
        let catalog = CareerCatalog::builtin().unwrap();
        let dev = catalog
            .profiles()
            .iter()
            .find(|p| p.title == "Full Stack Developer")
            .unwrap();
        assert!(dev.skills.iter().any(|s| s == "React"));
        assert!(catalog.contains("Full Stack Developer"));
        assert!(!catalog.contains("Astronaut"));
    }
}
