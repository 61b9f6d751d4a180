//! Skill Matcher: coverage of a job's required skills by a candidate's skills.

/// Full skill budget, scaled by coverage.
pub const SKILL_POINTS: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub matched: usize,
    pub required: usize,
    pub points: f64,
}

impl SkillMatch {
    pub fn has_requirements(&self) -> bool {
        self.required > 0
    }
}

/// A required token counts once if any candidate token contains it or is
/// contained by it. Zero required tokens contribute nothing here.
pub fn match_skills(required: &[String], candidate: &[String]) -> SkillMatch {
    if required.is_empty() {
        return SkillMatch {
            matched: 0,
            required: 0,
            points: 0.0,
        };
    }

    let matched = required
        .iter()
        .filter(|req| {
            candidate
                .iter()
                .any(|have| have.contains(req.as_str()) || req.contains(have.as_str()))
        })
        .count();

    SkillMatch {
        matched,
        required: required.len(),
        points: matched as f64 / required.len() as f64 * SKILL_POINTS,
    }
}
