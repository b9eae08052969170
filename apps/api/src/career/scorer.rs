//! Career-match scoring.
//!
//! Algorithm:
//! 1. Start every known career at 0.
//! 2. For each weighted question, if the answer matches a rule's option, add
//!    the rule's weight to each of its careers.
//! 3. Rank by (score desc, declaration order asc) and keep the first `top_k`.
//!
//! Pure and total: unanswered or unknown answers contribute nothing.

use serde::Serialize;

use crate::career::catalog::{CareerCatalog, CareerProfile};
use crate::career::questions::{AnswerVector, Question};

pub const DEFAULT_TOP_K: usize = 3;

/// Per-call accumulator, indexed by career declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    scores: Vec<u32>,
}

impl ScoreTable {
    fn zeroed(len: usize) -> Self {
        Self {
            scores: vec![0; len],
        }
    }

    fn add(&mut self, career: usize, weight: u32) {
        self.scores[career] = self.scores[career].saturating_add(weight);
    }

    pub fn get(&self, career: usize) -> u32 {
        self.scores[career]
    }

    /// Career indices in ranking order.
    fn ranked(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by_key(|&i| (std::cmp::Reverse(self.scores[i]), i));
        order
    }
}

/// A scored career, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub rank: usize,
    pub score: u32,
    #[serde(flatten)]
    pub profile: CareerProfile,
}

impl CareerCatalog {
    /// Accumulates rule weights for every answered, weighted question.
    pub fn tally(&self, answers: &AnswerVector) -> ScoreTable {
        let mut table = ScoreTable::zeroed(self.len());
        for question in Question::ALL {
            let Some(option) = answers.get(question) else {
                continue;
            };
            if let Some(weights) = self.rules.get(&(question, option)) {
                for &(career, weight) in weights {
                    table.add(career, weight);
                }
            }
        }
        table
    }

    /// Returns the `top_k` best-matching careers. Always `min(top_k, careers)`
    /// results; zero-score careers are still ranked.
    pub fn score(&self, answers: &AnswerVector, top_k: usize) -> Vec<MatchResult> {
        let table = self.tally(answers);
        table
            .ranked()
            .into_iter()
            .take(top_k)
            .enumerate()
            .map(|(pos, career)| MatchResult {
                rank: pos + 1,
                score: table.get(career),
                profile: self.profiles()[career].clone(),
            })
            .collect()
    }

    /// Boundary helper for loosely-typed callers: parses positional answer
    /// strings, then scores them. Never fails.
    pub fn score_raw(&self, raw: &[Option<String>], top_k: Option<usize>) -> RawScore {
        let answers = AnswerVector::from_raw(raw);
        let matches = self.score(&answers, top_k.unwrap_or(DEFAULT_TOP_K));
        RawScore { answers, matches }
    }
}

/// Result of `score_raw`, keeping the parsed answers for callers that store them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScore {
    pub answers: AnswerVector,
    pub matches: Vec<MatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::catalog::ScoringRule;

    fn catalog() -> CareerCatalog {
        CareerCatalog::builtin().unwrap()
    }

    fn answers(pairs: &[(Question, &str)]) -> AnswerVector {
        let mut a = AnswerVector::new();
        for (q, text) in pairs {
            assert!(a.answer(*q, text), "bad fixture answer {text:?}");
        }
        a
    }

    fn score_of(results: &[MatchResult], title: &str) -> Option<u32> {
        results
            .iter()
            .find(|m| m.profile.title == title)
            .map(|m| m.score)
    }

    #[test]
    fn test_empty_answers_return_first_k_in_declaration_order() {
        let c = catalog();
        let results = c.score(&AnswerVector::new(), DEFAULT_TOP_K);
        assert_eq!(results.len(), 3);
        for (i, m) in results.iter().enumerate() {
            assert_eq!(m.score, 0);
            assert_eq!(m.rank, i + 1);
            assert_eq!(m.profile.title, c.profiles()[i].title);
        }
    }

    #[test]
    fn test_unweighted_answers_behave_like_baseline() {
        let c = catalog();
        let a = answers(&[
            (Question::LearningStyle, "Hands-on practice"),
            (Question::WorkLifeBalance, "Standard 9-5 schedule"),
            (Question::ExperienceLevel, "Still in school or college"),
        ]);
        assert_eq!(c.score(&a, 3), c.score(&AnswerVector::new(), 3));
    }

    #[test]
    fn test_domain_interest_software_adds_three_to_both_developers() {
        let c = catalog();
        let baseline = c.tally(&AnswerVector::new());
        let a = answers(&[(
            Question::DomainInterest,
            "Software development and programming",
        )]);
        let table = c.tally(&a);

        let junior = c
            .profiles()
            .iter()
            .position(|p| p.title == "Junior Software Developer")
            .unwrap();
        let full_stack = c
            .profiles()
            .iter()
            .position(|p| p.title == "Full Stack Developer")
            .unwrap();
        assert_eq!(table.get(junior), baseline.get(junior) + 3);
        assert_eq!(table.get(full_stack), baseline.get(full_stack) + 3);

        // Tie at 3: Junior is declared before Full Stack.
        let results = c.score(&a, 2);
        assert_eq!(results[0].profile.title, "Junior Software Developer");
        assert_eq!(results[1].profile.title, "Full Stack Developer");
    }

    #[test]
    fn test_weights_accumulate_additively() {
        let c = catalog();
        // Both questions favour Full Stack: +3 (domain) and +2 (team role).
        let a = answers(&[
            (Question::DomainInterest, "Software development and programming"),
            (Question::TeamRole, "The builder who ships features"),
        ]);
        let results = c.score(&a, c.len());
        assert_eq!(score_of(&results, "Full Stack Developer"), Some(5));
        assert_eq!(score_of(&results, "Junior Software Developer"), Some(5));
        assert_eq!(score_of(&results, "Freelance Developer"), Some(2));
    }

    #[test]
    fn test_entrepreneur_maximised_ranks_first_with_sum_of_weights() {
        let c = catalog();
        let target = "Tech Entrepreneur";

        // Pick, for every question, the option whose rule favours the target.
        let mut a = AnswerVector::new();
        let mut expected: u32 = 0;
        for rule in crate::career::data::builtin_rules() {
            if let Some((_, w)) = rule.weights.iter().find(|(t, _)| t == target) {
                assert!(
                    a.get(rule.question).is_none(),
                    "target appears twice in {:?}",
                    rule.question
                );
                a.answer(rule.question, &rule.option);
                expected += *w;
            }
        }

        let results = c.score(&a, DEFAULT_TOP_K);
        assert_eq!(results[0].profile.title, target);
        assert_eq!(results[0].score, expected);
        assert_eq!(expected, 19);
        assert!(results[1].score < expected);
    }

    #[test]
    fn test_results_sorted_non_increasing_with_declaration_tiebreak() {
        let c = catalog();
        let a = answers(&[
            (Question::ExperienceLevel, "Professional with 3-7 years of experience"),
            (Question::SkillFocus, "Technical and analytical"),
            (Question::RiskAppetite, "Calculated risks are fine"),
        ]);
        let results = c.score(&a, c.len());
        assert_eq!(results.len(), c.len());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let i = c.profiles().iter().position(|p| p == &pair[0].profile).unwrap();
                let j = c.profiles().iter().position(|p| p == &pair[1].profile).unwrap();
                assert!(i < j);
            }
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let c = catalog();
        let raw: Vec<Option<String>> = vec![
            Some("Senior professional with 8+ years of experience".into()),
            Some("Collaborative team settings".into()),
            None,
            Some("Solving complex problems".into()),
        ];
        assert_eq!(c.score_raw(&raw, None), c.score_raw(&raw, None));
        assert_eq!(c.score_raw(&raw, None).answers.answered(), 3);
    }

    #[test]
    fn test_top_k_is_clamped_to_catalog_size() {
        let c = catalog();
        assert_eq!(c.score(&AnswerVector::new(), 100).len(), c.len());
        assert!(c.score(&AnswerVector::new(), 0).is_empty());
    }

    #[test]
    fn test_score_raw_defaults_to_three() {
        let c = catalog();
        assert_eq!(c.score_raw(&[], None).matches.len(), DEFAULT_TOP_K);
        assert_eq!(c.score_raw(&[], Some(5)).matches.len(), 5);
    }

    #[test]
    fn test_garbage_answers_never_fail() {
        let c = catalog();
        let raw: Vec<Option<String>> = (0..25).map(|i| Some(format!("nonsense {i}"))).collect();
        let scored = c.score_raw(&raw, None);
        assert_eq!(scored.answers.answered(), 0);
        assert!(scored.matches.iter().all(|m| m.score == 0));
    }

    #[test]
    fn test_custom_catalog_scores_by_its_own_rules() {
        let profiles = vec![
            CareerProfile {
                title: "First".into(),
                description: String::new(),
                salary_range: String::new(),
                growth_path: String::new(),
                skills: vec![],
            },
            CareerProfile {
                title: "Second".into(),
                description: String::new(),
                salary_range: String::new(),
                growth_path: String::new(),
                skills: vec![],
            },
        ];
        let rules = vec![ScoringRule {
            question: Question::RiskAppetite,
            option: "I prefer stability".into(),
            weights: vec![("Second".into(), 1)],
        }];
        let c = CareerCatalog::new(profiles, rules).unwrap();
        let a = answers(&[(Question::RiskAppetite, "I prefer stability")]);
        let results = c.score(&a, 3);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].profile.title, "Second");
        assert_eq!(results[0].score, 1);
        assert_eq!(results[1].profile.title, "First");
    }
}
