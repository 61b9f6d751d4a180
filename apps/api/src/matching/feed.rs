//! Feed Ranker: reorders the open-job listing for one candidate.

use serde::Serialize;
use tracing::debug;

use crate::matching::scorer::SmartScorer;
use crate::matching::{CandidateProfile, JobPosting};
use crate::models::job::JobRow;

/// A job row as served by the feed. `match_score` is omitted when unscored.
#[derive(Debug, Clone, Serialize)]
pub struct FeedJob {
    #[serde(flatten)]
    pub job: JobRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<i32>,
}

/// Scores every job for `candidate` and sorts by descending score.
///
/// Without a resolved candidate the listing is returned unscored in its
/// original order. Equal scores keep their original relative order.
pub fn rank_feed(
    scorer: &SmartScorer,
    candidate: Option<&CandidateProfile>,
    jobs: Vec<JobRow>,
) -> Vec<FeedJob> {
    let Some(candidate) = candidate else {
        return jobs
            .into_iter()
            .map(|job| FeedJob {
                job,
                match_score: None,
            })
            .collect();
    };

    let mut ranked: Vec<FeedJob> = jobs
        .into_iter()
        .map(|job| {
            let score = scorer.score(candidate, JobPosting::from(&job));
            FeedJob {
                job,
                match_score: Some(score),
            }
        })
        .collect();

    sort_by_score_desc(&mut ranked);
    debug!(jobs = ranked.len(), "Ranked job feed");
    ranked
}

/// Stable descending sort on `match_score`.
fn sort_by_score_desc(feed: &mut [FeedJob]) {
    feed.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_job(title: &str, skills: Option<&str>) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            recruiter_id: Uuid::new_v4(),
            recruiter_email: Some("hiring@example.com".to_string()),
            title: title.to_string(),
            description: format!("{title} role"),
            job_summary: None,
            education_requirements: None,
            skills_requirements: skills.map(String::from),
            requirements: None,
            is_unpaid: false,
            job_type: Some("FULL_TIME".to_string()),
            location_type: Some("REMOTE".to_string()),
            location_city: None,
            salary_min: None,
            salary_max: None,
            currency: None,
            experience_min: None,
            experience_max: None,
            benefits: None,
            status: "OPEN".to_string(),
            created_at: Utc::now(),
        }
    }

    fn titles(feed: &[FeedJob]) -> Vec<&str> {
        feed.iter().map(|f| f.job.title.as_str()).collect()
    }

    #[test]
    fn test_sort_keeps_ties_in_original_order() {
        let mut feed: Vec<FeedJob> = [("a", 40), ("b", 90), ("c", 40), ("d", 60)]
            .into_iter()
            .map(|(title, score)| FeedJob {
                job: make_job(title, None),
                match_score: Some(score),
            })
            .collect();

        sort_by_score_desc(&mut feed);

        let scores: Vec<_> = feed.iter().filter_map(|f| f.match_score).collect();
        assert_eq!(scores, vec![90, 60, 40, 40]);
        assert_eq!(titles(&feed), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rank_feed_orders_by_relevance() {
        let candidate = CandidateProfile::new("backend engineer", "python, sql");
        let jobs = vec![
            make_job("Marketing Lead", Some("seo")),
            make_job("Backend Engineer", Some("python, sql")),
            make_job("Data Analyst", Some("excel")),
            make_job("Marketing Lead II", Some("")),
        ];

        let feed = rank_feed(&SmartScorer::default(), Some(&candidate), jobs);

        assert_eq!(
            titles(&feed),
            vec!["Backend Engineer", "Data Analyst", "Marketing Lead", "Marketing Lead II"]
        );
        let scores: Vec<_> = feed.iter().filter_map(|f| f.match_score).collect();
        assert_eq!(scores, vec![99, 45, 15, 15]);
    }

    #[test]
    fn test_without_candidate_listing_is_untouched() {
        let jobs = vec![
            make_job("Zeta", Some("rust")),
            make_job("Alpha", Some("go")),
        ];
        let ids: Vec<_> = jobs.iter().map(|j| j.id).collect();

        let feed = rank_feed(&SmartScorer::default(), None, jobs);

        assert_eq!(feed.iter().map(|f| f.job.id).collect::<Vec<_>>(), ids);
        assert!(feed.iter().all(|f| f.match_score.is_none()));
    }

    #[test]
    fn test_unscored_feed_omits_match_score_field() {
        let feed = rank_feed(&SmartScorer::default(), None, vec![make_job("Zeta", None)]);
        let json = serde_json::to_value(&feed[0]).unwrap();
        assert!(json.get("match_score").is_none());
        assert_eq!(json["title"], "Zeta");
    }

    #[test]
    fn test_scored_feed_flattens_job_fields() {
        let candidate = CandidateProfile::new("designer", "figma");
        let feed = rank_feed(
            &SmartScorer::default(),
            Some(&candidate),
            vec![make_job("Product Designer", Some("figma"))],
        );
        let json = serde_json::to_value(&feed[0]).unwrap();
        assert_eq!(json["match_score"], 99);
        assert_eq!(json["status"], "OPEN");
    }

    #[test]
    fn test_empty_listing() {
        let candidate = CandidateProfile::new("anything", "");
        assert!(rank_feed(&SmartScorer::default(), Some(&candidate), vec![]).is_empty());
    }
}
