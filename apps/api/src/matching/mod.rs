// Matching & Ranking Engine
// Scores candidate/job fit for the public job feed and for submitted applications.
// Pure, synchronous string work. The only shared state is the immutable SynonymTable.

pub mod feed;
pub mod role;
pub mod scorer;
pub mod screener;
pub mod skills;
pub mod synonyms;
pub mod tokenizer;

use crate::models::job::JobRow;
use crate::models::user::UserRow;

/// The candidate side of a match: stated role and free-text skill list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateProfile {
    pub role: String,
    pub skills: String,
}

impl CandidateProfile {
    pub fn new(role: impl Into<String>, skills: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            skills: skills.into(),
        }
    }
}

impl From<&UserRow> for CandidateProfile {
    fn from(user: &UserRow) -> Self {
        Self::new(
            user.job_role.clone().unwrap_or_default(),
            user.skills.clone().unwrap_or_default(),
        )
    }
}

/// The job side of a feed match, borrowed from a job row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobPosting<'a> {
    pub title: &'a str,
    pub skills_requirements: &'a str,
}

impl<'a> JobPosting<'a> {
    pub fn new(title: &'a str, skills_requirements: &'a str) -> Self {
        Self {
            title,
            skills_requirements,
        }
    }
}

impl<'a> From<&'a JobRow> for JobPosting<'a> {
    fn from(job: &'a JobRow) -> Self {
        Self::new(
            &job.title,
            job.skills_requirements.as_deref().unwrap_or_default(),
        )
    }
}
