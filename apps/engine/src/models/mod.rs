pub mod analysis;
pub mod company;
pub mod sections;
pub mod skills;

pub use analysis::{AnalysisDraft, AnalysisPatch, AnalysisRecord};
pub use company::{CompanyIntel, CompanySize, RoundInfo};
pub use sections::KeyedLists;
pub use skills::{ExtractedSkills, SkillConfidence, SkillConfidenceMap};
