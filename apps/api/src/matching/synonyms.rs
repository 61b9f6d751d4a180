//! Synonym Table: static domain taxonomy used by the role matcher.
//!
//! Built once at startup and shared through `AppState` as `Arc<SynonymTable>`.
//! Nothing mutates it after construction.

/// A canonical topic key and its related terms, in lookup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymEntry {
    pub key: &'static str,
    pub terms: &'static [&'static str],
}

const BUILTIN: &[SynonymEntry] = &[
    SynonymEntry {
        key: "frontend",
        terms: &[
            "react", "vue", "angular", "next.js", "javascript", "typescript", "html", "css",
            "tailwind", "web", "ui", "ux",
        ],
    },
    SynonymEntry {
        key: "backend",
        terms: &[
            "go", "golang", "node", "express", "java", "spring", "python", "django", "flask",
            "c#", ".net", "ruby", "rails", "php", "laravel", "api", "database", "sql", "postgres",
        ],
    },
    SynonymEntry {
        key: "ai",
        terms: &[
            "machine learning",
            "ml",
            "deep learning",
            "computer vision",
            "nlp",
            "data scientist",
            "artificial intelligence",
            "pytorch",
            "tensorflow",
            "llm",
            "generative",
        ],
    },
    SynonymEntry {
        key: "ml",
        terms: &[
            "machine learning",
            "ai",
            "deep learning",
            "data scientist",
            "neural networks",
            "pytorch",
            "tensorflow",
        ],
    },
    SynonymEntry {
        key: "data",
        terms: &[
            "analyst", "scientist", "engineer", "sql", "python", "pandas", "spark", "hadoop", "etl",
        ],
    },
    SynonymEntry {
        key: "fullstack",
        terms: &["frontend", "backend", "web", "react", "node", "full-stack"],
    },
    SynonymEntry {
        key: "mobile",
        terms: &["ios", "android", "swift", "kotlin", "flutter", "react native", "dart"],
    },
    SynonymEntry {
        key: "devops",
        terms: &[
            "cloud", "aws", "azure", "gcp", "docker", "kubernetes", "ci/cd", "terraform",
            "ansible", "linux", "sre", "reliability",
        ],
    },
    SynonymEntry {
        key: "web3",
        terms: &[
            "blockchain",
            "solidity",
            "ethereum",
            "smart contract",
            "rust",
            "crypto",
            "defi",
            "nft",
            "token",
        ],
    },
];

/// Immutable, ordered mapping from topic key to related terms.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    /// The marketplace's built-in taxonomy.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.to_vec())
    }

    pub fn from_entries(entries: Vec<SynonymEntry>) -> Self {
        Self { entries }
    }

    /// Entries in iteration order. The role matcher relies on this order.
    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SynonymEntry {
    /// First term of this entry that occurs as a substring of `text`.
    /// `text` must already be lower-cased.
    pub fn term_in(&self, text: &str) -> Option<&'static str> {
        self.terms.iter().copied().find(|term| text.contains(term))
    }
}
