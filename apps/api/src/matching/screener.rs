//! Application Screener: plain requirement/skill overlap recorded on an application.
//!
//! Kept separate from `SmartScorer`: no synonym expansion, no floor, range [0, 100].

use tracing::debug;

use crate::matching::tokenizer::tokenize;

/// Recorded when the job or candidate has no requirements/skills on file.
pub const DEFAULT_SCREENING_SCORE: i32 = 50;
pub const MAX_SCREENING_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningMethod {
    /// Requirements and skills were compared.
    Overlap,
    /// One side had nothing on file; the default score was used.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningOutcome {
    pub score: i32,
    pub method: ScreeningMethod,
}

/// Screens a candidate's skills against a job's requirements.
///
/// `None` means the field was never recorded and yields the default score.
pub fn screen_application(requirements: Option<&str>, skills: Option<&str>) -> ScreeningOutcome {
    match (requirements, skills) {
        (Some(requirements), Some(skills)) => ScreeningOutcome {
            score: overlap_score(requirements, skills),
            method: ScreeningMethod::Overlap,
        },
        _ => ScreeningOutcome {
            score: DEFAULT_SCREENING_SCORE,
            method: ScreeningMethod::Default,
        },
    }
}

fn overlap_score(requirements: &str, skills: &str) -> i32 {
    if requirements.trim().is_empty() || skills.trim().is_empty() {
        return 0;
    }

    let required = tokenize(requirements);
    if required.is_empty() {
        // Requirements were written but hold no usable tokens.
        return MAX_SCREENING_SCORE;
    }

    let have = tokenize(skills);
    let matched = required
        .iter()
        .filter(|req| {
            have.iter().any(|skill| {
                skill == *req || skill.contains(req.as_str()) || req.contains(skill.as_str())
            })
        })
        .count();

    let score = ((matched as f64 / required.len() as f64) * 100.0) as i32;
    debug!(
        matched,
        required = required.len(),
        score,
        "Screened application"
    );
    score.min(MAX_SCREENING_SCORE)
}
