//! Candidate/job matching engine.
//!
//! Two pipelines share one immutable skill taxonomy:
//! - raw resume bytes → plain text → `ExtractedProfile`
//! - (`JobInput`, `CandidateInput`) → four subscores → `MatchResult`
//!
//! Everything is synchronous and reentrant. Persistence, transport and auth belong to
//! the host application.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod scoring;
pub mod taxonomy;
pub mod telemetry;

pub use config::Config;
pub use errors::{ExtractionError, WeightError};
pub use extraction::{parse_resume, parse_resume_text, DocumentFormat};
pub use models::matching::{CandidateInput, JobInput, MatchResult, Priority, UpskillRecommendation};
pub use models::profile::{ContactInfo, EducationEntry, ExperienceEntry, ExtractedProfile};
pub use scoring::aggregate::{MatchAggregator, MatchWeights};
pub use taxonomy::{SkillCategory, SkillEntry};
