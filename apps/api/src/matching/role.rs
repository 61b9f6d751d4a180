//! Role Matcher: aligns a candidate's stated role with a job title.

use crate::matching::synonyms::SynonymTable;

pub const DIRECT_ROLE_POINTS: f64 = 50.0;
pub const SYNONYM_ROLE_POINTS: f64 = 45.0;

/// Which rule produced the role match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleMatchKind {
    Direct,
    /// Job title holds the key, candidate role holds the term.
    Synonym { key: &'static str, term: &'static str },
    /// Candidate role holds the key, job title holds the term.
    ReverseSynonym { key: &'static str, term: &'static str },
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleMatch {
    pub points: f64,
    pub kind: RoleMatchKind,
}

impl RoleMatch {
    pub fn matched(&self) -> bool {
        self.kind != RoleMatchKind::None
    }
}

/// Scores `role` against `title`. First match wins:
/// 1. direct substring containment either way (50)
/// 2. first synonym key, in table order, linking the two (45)
/// 3. nothing (0)
pub fn match_role(role: &str, title: &str, synonyms: &SynonymTable) -> RoleMatch {
    let role = role.to_lowercase();
    let title = title.to_lowercase();

    // An empty role is contained in every title.
    if title.contains(&role) || role.contains(&title) {
        return RoleMatch {
            points: DIRECT_ROLE_POINTS,
            kind: RoleMatchKind::Direct,
        };
    }

    for entry in synonyms.entries() {
        if title.contains(entry.key) {
            if let Some(term) = entry.term_in(&role) {
                return RoleMatch {
                    points: SYNONYM_ROLE_POINTS,
                    kind: RoleMatchKind::Synonym {
                        key: entry.key,
                        term,
                    },
                };
            }
        }
        if role.contains(entry.key) {
            if let Some(term) = entry.term_in(&title) {
                return RoleMatch {
                    points: SYNONYM_ROLE_POINTS,
                    kind: RoleMatchKind::ReverseSynonym {
                        key: entry.key,
                        term,
                    },
                };
            }
        }
    }

    RoleMatch {
        points: 0.0,
        kind: RoleMatchKind::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::synonyms::SynonymEntry;

    fn table() -> SynonymTable {
        SynonymTable::builtin()
    }

    #[test]
    fn test_direct_containment_title_holds_role() {
        let m = match_role("backend engineer", "Senior Backend Engineer", &table());
        assert_eq!(m.points, 50.0);
        assert_eq!(m.kind, RoleMatchKind::Direct);
        assert!(m.matched());
    }

    #[test]
    fn test_direct_containment_role_holds_title() {
        let m = match_role("Lead Data Engineer", "data engineer", &table());
        assert_eq!(m.kind, RoleMatchKind::Direct);
    }

    #[test]
    fn test_developer_vs_engineer_is_not_direct() {
        // Neither string contains the other and no synonym key links them.
        let m = match_role("backend developer", "Backend Engineer", &table());
        assert_eq!(m.points, 0.0);
        assert!(!m.matched());
    }

    #[test]
    fn test_synonym_title_key_role_term() {
        let m = match_role("Machine Learning Engineer", "AI Researcher", &table());
        assert_eq!(m.points, 45.0);
        assert_eq!(
            m.kind,
            RoleMatchKind::Synonym {
                key: "ai",
                term: "machine learning"
            }
        );
    }

    #[test]
    fn test_reverse_synonym_role_key_title_term() {
        let m = match_role("DevOps Specialist", "Kubernetes Administrator", &table());
        assert_eq!(
            m.kind,
            RoleMatchKind::ReverseSynonym {
                key: "devops",
                term: "kubernetes"
            }
        );
        assert_eq!(m.points, 45.0);
    }

    #[test]
    fn test_first_key_in_table_order_wins() {
        let custom = SynonymTable::from_entries(vec![
            SynonymEntry {
                key: "alpha",
                terms: &["first"],
            },
            SynonymEntry {
                key: "alpha",
                terms: &["second"],
            },
        ]);
        let m = match_role("first second", "alpha team", &custom);
        assert_eq!(
            m.kind,
            RoleMatchKind::Synonym {
                key: "alpha",
                term: "first"
            }
        );
    }

    #[test]
    fn test_unrelated_roles_do_not_match() {
        let m = match_role("Chef", "Accountant", &table());
        assert_eq!(m.kind, RoleMatchKind::None);
        assert_eq!(m.points, 0.0);
    }

    #[test]
    fn test_empty_role_is_direct_match() {
        let m = match_role("", "Anything At All", &table());
        assert_eq!(m.kind, RoleMatchKind::Direct);
    }
}
