//! Score Aggregator: combines role and skill signals into the feed match score.
//!
//! Range is [15, 99]: every candidate keeps a baseline relevance and no pair
//! is ever reported as a perfect fit.

use std::sync::Arc;

use tracing::debug;

use crate::matching::role::{match_role, RoleMatch};
use crate::matching::skills::{match_skills, SkillMatch};
use crate::matching::synonyms::SynonymTable;
use crate::matching::tokenizer::tokenize;
use crate::matching::{CandidateProfile, JobPosting};

pub const MIN_MATCH_SCORE: f64 = 15.0;
pub const MAX_MATCH_SCORE: f64 = 99.0;
/// Added when the job lists no skills but the role matched.
pub const ROLE_ONLY_FALLBACK_POINTS: f64 = 20.0;
pub const SENIORITY_BONUS_POINTS: f64 = 10.0;

/// Every signal that went into one score. Logged at debug level.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub role: RoleMatch,
    pub skills: SkillMatch,
    pub role_only_fallback: f64,
    pub seniority_bonus: f64,
    /// Sum before clamping; may exceed 100.
    pub raw: f64,
    pub score: i32,
}

/// Feed scorer backed by the synonym table.
#[derive(Debug, Clone)]
pub struct SmartScorer {
    synonyms: Arc<SynonymTable>,
}

impl SmartScorer {
    pub fn new(synonyms: Arc<SynonymTable>) -> Self {
        Self { synonyms }
    }

    pub fn score(&self, candidate: &CandidateProfile, job: JobPosting<'_>) -> i32 {
        self.breakdown(candidate, job).score
    }

    pub fn breakdown(&self, candidate: &CandidateProfile, job: JobPosting<'_>) -> ScoreBreakdown {
        let role = match_role(&candidate.role, job.title, &self.synonyms);
        let skills = match_skills(
            &tokenize(job.skills_requirements),
            &tokenize(&candidate.skills),
        );

        let role_only_fallback = if !skills.has_requirements() && role.matched() {
            ROLE_ONLY_FALLBACK_POINTS
        } else {
            0.0
        };

        let title = job.title.to_lowercase();
        let seniority_bonus =
            if title.contains("senior") && candidate.role.to_lowercase().contains("senior") {
                SENIORITY_BONUS_POINTS
            } else {
                0.0
            };

        let raw = role.points + skills.points + role_only_fallback + seniority_bonus;
        let score = raw.clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE).round() as i32;

        debug!(
            role = %candidate.role,
            title = %job.title,
            role_kind = ?role.kind,
            role_points = role.points,
            skills_matched = skills.matched,
            skills_required = skills.required,
            skill_points = skills.points,
            role_only_fallback,
            seniority_bonus,
            score,
            "Computed match score"
        );

        ScoreBreakdown {
            role,
            skills,
            role_only_fallback,
            seniority_bonus,
            raw,
            score,
        }
    }
}

impl Default for SmartScorer {
    fn default() -> Self {
        Self::new(Arc::new(SynonymTable::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(role: &str, skills: &str, title: &str, required: &str) -> i32 {
        SmartScorer::default().score(
            &CandidateProfile::new(role, skills),
            JobPosting::new(title, required),
        )
    }

    #[test]
    fn test_senior_backend_end_to_end_is_85() {
        let s = score(
            "senior backend engineer",
            "python",
            "Senior Backend Engineer",
            "sql,python",
        );
        assert_eq!(s, 85);
    }

    #[test]
    fn test_breakdown_components() {
        let b = SmartScorer::default().breakdown(
            &CandidateProfile::new("senior backend engineer", "python"),
            JobPosting::new("Senior Backend Engineer", "sql,python"),
        );
        assert_eq!(b.role.points, 50.0);
        assert!((b.skills.points - 25.0).abs() < f64::EPSILON);
        assert_eq!(b.seniority_bonus, 10.0);
        assert_eq!(b.role_only_fallback, 0.0);
        assert!((b.raw - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unrelated_pair_floors_at_15() {
        assert_eq!(score("Chef", "cooking", "Accountant", "excel, tax"), 15);
    }

    #[test]
    fn test_perfect_pair_caps_at_99() {
        assert_eq!(
            score("Senior Rust Engineer", "rust, tokio", "Senior Rust Engineer", "rust, tokio"),
            99
        );
    }

    #[test]
    fn test_role_only_fallback_when_job_lists_no_skills() {
        // direct 50 + fallback 20
        assert_eq!(score("backend engineer", "", "Backend Engineer", ""), 70);
    }

    #[test]
    fn test_no_fallback_without_role_match() {
        assert_eq!(score("Chef", "python", "Accountant", ""), 15);
    }

    #[test]
    fn test_synonym_role_with_partial_skills_rounds() {
        // synonym 45 + 1/3 * 50 = 61.67
        assert_eq!(
            score("Machine Learning Engineer", "pytorch", "AI Researcher", "pytorch, jax, cuda"),
            62
        );
    }

    #[test]
    fn test_seniority_bonus_requires_both_sides() {
        let with_bonus = score("Senior Chef", "", "Senior Accountant", "tax");
        let without = score("Chef", "", "Senior Accountant", "tax");
        assert_eq!(with_bonus, 15);
        assert_eq!(without, 15);
        // Bonus shows once the base score clears the floor.
        assert_eq!(score("senior java developer", "java", "Senior Java Developer", "java, kafka"), 85);
    }

    #[test]
    fn test_score_always_in_bounds() {
        let roles = ["", "senior", "Senior Data Scientist", "frontend dev", "x"];
        let titles = ["", "Senior ML Engineer", "Data Analyst", "Frontend", "senior senior"];
        let skills = ["", "python, sql", "react|vue", "a b c"];
        let scorer = SmartScorer::default();
        for role in roles {
            for title in titles {
                for s in skills {
                    for req in skills {
                        let v = scorer.score(&CandidateProfile::new(role, s), JobPosting::new(title, req));
                        assert!((15..=99).contains(&v), "{role}/{title}/{s}/{req} -> {v}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let first = score("Fullstack Developer", "react, node", "Web Developer", "react, css");
        for _ in 0..10 {
            assert_eq!(
                score("Fullstack Developer", "react, node", "Web Developer", "react, css"),
                first
            );
        }
    }
}
