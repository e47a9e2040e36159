//! Skill taxonomy — static category → skill → weight table, plus the flat resume keyword
//! list and the English stop-word set used by the similarity scorer.
//!
//! All tables are built once on first use and never mutated, so they are shared across
//! threads without locking.
//!
//! Matching against the taxonomy is a literal, case-insensitive substring search. Short
//! names overlap: "java" matches inside "javascript" and "r" matches inside almost any
//! word. Downstream weights were tuned with that behaviour in place, so it is kept.

use std::collections::{HashMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    ProgrammingLanguages,
    WebTechnologies,
    Databases,
    CloudPlatforms,
    DataScience,
    MobileDevelopment,
    SoftSkills,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "programming_languages",
            SkillCategory::WebTechnologies => "web_technologies",
            SkillCategory::Databases => "databases",
            SkillCategory::CloudPlatforms => "cloud_platforms",
            SkillCategory::DataScience => "data_science",
            SkillCategory::MobileDevelopment => "mobile_development",
            SkillCategory::SoftSkills => "soft_skills",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical skill with its category and importance weight in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
    pub weight: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Static tables
// ────────────────────────────────────────────────────────────────────────────

type CategoryTable = (SkillCategory, &'static [(&'static str, f64)]);

/// Category order is significant: scans report skills in this order.
const CATEGORY_TABLE: &[CategoryTable] = &[
    (
        SkillCategory::ProgrammingLanguages,
        &[
            ("python", 1.0),
            ("java", 1.0),
            ("javascript", 1.0),
            ("typescript", 1.0),
            ("c++", 1.0),
            ("c#", 1.0),
            ("php", 1.0),
            ("ruby", 1.0),
            ("go", 1.0),
            ("rust", 1.0),
            ("swift", 1.0),
            ("kotlin", 1.0),
            ("scala", 1.0),
        ],
    ),
    (
        SkillCategory::WebTechnologies,
        &[
            ("html", 0.8),
            ("css", 0.8),
            ("react", 1.0),
            ("angular", 1.0),
            ("vue", 1.0),
            ("node.js", 1.0),
            ("express", 0.9),
            ("django", 1.0),
            ("flask", 1.0),
            ("spring", 1.0),
            ("laravel", 1.0),
            ("rails", 1.0),
            ("bootstrap", 0.7),
        ],
    ),
    (
        SkillCategory::Databases,
        &[
            ("mysql", 1.0),
            ("postgresql", 1.0),
            ("mongodb", 1.0),
            ("redis", 0.9),
            ("sqlite", 0.8),
            ("oracle", 1.0),
            ("sql server", 1.0),
            ("cassandra", 0.9),
        ],
    ),
    (
        SkillCategory::CloudPlatforms,
        &[
            ("aws", 1.0),
            ("azure", 1.0),
            ("google cloud", 1.0),
            ("docker", 0.9),
            ("kubernetes", 0.9),
            ("terraform", 0.8),
            ("jenkins", 0.8),
        ],
    ),
    (
        SkillCategory::DataScience,
        &[
            ("machine learning", 1.0),
            ("artificial intelligence", 1.0),
            ("data science", 1.0),
            ("pandas", 0.9),
            ("numpy", 0.9),
            ("scikit-learn", 0.9),
            ("tensorflow", 0.9),
            ("pytorch", 0.9),
            ("r", 0.8),
            ("matplotlib", 0.7),
            ("seaborn", 0.7),
        ],
    ),
    (
        SkillCategory::MobileDevelopment,
        &[
            ("android", 1.0),
            ("ios", 1.0),
            ("react native", 1.0),
            ("flutter", 1.0),
            ("xamarin", 0.8),
            ("ionic", 0.7),
        ],
    ),
    (
        SkillCategory::SoftSkills,
        &[
            ("leadership", 0.8),
            ("communication", 0.8),
            ("teamwork", 0.7),
            ("problem solving", 0.9),
            ("analytical", 0.8),
            ("creative", 0.6),
            ("time management", 0.7),
            ("project management", 0.8),
        ],
    ),
];

/// Flat keyword list for resume-side detection. No category or weight.
pub const RESUME_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node.js",
    "angular",
    "vue.js",
    "html",
    "css",
    "bootstrap",
    "sql",
    "mongodb",
    "mysql",
    "postgresql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "github",
    "gitlab",
    "machine learning",
    "ai",
    "artificial intelligence",
    "data science",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "flask",
    "django",
    "express.js",
    "spring",
    "laravel",
    "rails",
    "android",
    "ios",
    "swift",
    "kotlin",
    "flutter",
    "react native",
    "project management",
    "agile",
    "scrum",
    "leadership",
    "communication",
    "problem solving",
    "analytical",
    "creative",
    "teamwork",
    "time management",
];

/// NLTK English stop words.
const NLTK_STOP_WORD_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re",
    "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
    "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
    "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// English stop list applied by the TF-IDF vectorizer on top of the NLTK list.
const VECTORIZER_STOP_WORD_LIST: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
    "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
    "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
    "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
    "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
    "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
    "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
    "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
    "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
    "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

// ────────────────────────────────────────────────────────────────────────────
// Taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// Read-only skill table with a name index.
pub struct SkillTaxonomy {
    entries: Vec<SkillEntry>,
    by_name: HashMap<String, usize>,
}

impl SkillTaxonomy {
    fn build() -> Self {
        let entries: Vec<SkillEntry> = CATEGORY_TABLE
            .iter()
            .flat_map(|(category, skills)| {
                skills.iter().map(move |(name, weight)| SkillEntry {
                    name: (*name).to_string(),
                    category: *category,
                    weight: *weight,
                })
            })
            .collect();
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.name.clone(), idx))
            .collect();
        Self { entries, by_name }
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    /// Case-insensitive lookup by canonical name.
    pub fn lookup(&self, name: &str) -> Option<&SkillEntry> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    /// Every taxonomy skill whose literal form occurs anywhere in `text`, in table order.
    pub fn scan(&self, text: &str) -> Vec<SkillEntry> {
        if text.is_empty() {
            return Vec::new();
        }
        let text_lower = text.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| text_lower.contains(entry.name.as_str()))
            .cloned()
            .collect()
    }
}

static TAXONOMY: Lazy<SkillTaxonomy> = Lazy::new(SkillTaxonomy::build);

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    NLTK_STOP_WORD_LIST
        .iter()
        .chain(VECTORIZER_STOP_WORD_LIST)
        .copied()
        .collect()
});

/// The process-wide taxonomy.
pub fn taxonomy() -> &'static SkillTaxonomy {
    &TAXONOMY
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}
