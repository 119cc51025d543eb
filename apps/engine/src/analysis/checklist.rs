//! Round-wise preparation checklist.

use crate::analysis::owned;
use crate::models::sections::KeyedLists;
use crate::models::skills::{ExtractedSkills, CLOUD_DEVOPS, CORE_CS, LANGUAGES, TESTING, WEB};

pub const ROUND_APTITUDE: &str = "Round 1: Aptitude & Basics";
pub const ROUND_DSA_CORE: &str = "Round 2: DSA & Core CS";
pub const ROUND_TECHNICAL: &str = "Round 3: Technical Interview";
pub const ROUND_HR: &str = "Round 4: HR & Managerial";

/// Builds the four-round checklist. Item counts are fixed; some items swap wording
/// depending on whether DSA, Web, Cloud/DevOps or Testing skills were found.
pub fn generate_checklist(skills: &ExtractedSkills) -> KeyedLists {
    let has_dsa = skills.category_mentions(CORE_CS, &["dsa", "algorithm"]);
    let has_web = skills.has_category(WEB);
    let has_cloud = skills.has_category(CLOUD_DEVOPS);
    let has_testing = skills.has_category(TESTING);

    let pick = |cond: bool, yes: &str, no: &str| (if cond { yes } else { no }).to_string();

    let language_item = match skills.first_in(LANGUAGES) {
        Some(lang) => format!("Practice {lang} coding questions"),
        None => "Practice coding in your primary language".to_string(),
    };

    let mut checklist = KeyedLists::new();
    checklist.insert(
        ROUND_APTITUDE,
        owned(&[
            "Complete quantitative aptitude practice (20+ problems)",
            "Review logical reasoning patterns",
            "Practice verbal ability and comprehension",
            "Solve previous year aptitude papers",
            "Time yourself on mock aptitude tests",
        ]),
    );
    checklist.insert(
        ROUND_DSA_CORE,
        vec![
            pick(
                has_dsa,
                "Practice array and string problems (10+ each)",
                "Review basic data structures",
            ),
            pick(
                has_dsa,
                "Master sorting and searching algorithms",
                "Understand time complexity basics",
            ),
            "Revise OOP concepts with examples".to_string(),
            "Study DBMS normalization and SQL queries".to_string(),
            "Review OS concepts: processes, threads, memory".to_string(),
            "Understand networking basics: TCP/IP, HTTP".to_string(),
            pick(
                has_dsa,
                "Solve tree and graph problems",
                "Practice basic coding problems",
            ),
        ],
    );
    checklist.insert(
        ROUND_TECHNICAL,
        vec![
            "Prepare project explanations (architecture + challenges)".to_string(),
            pick(
                has_web,
                "Review React/frontend concepts and lifecycle",
                "Review your tech stack deeply",
            ),
            language_item,
            pick(
                has_cloud,
                "Understand Docker and deployment basics",
                "Know how to deploy your projects",
            ),
            pick(
                has_testing,
                "Explain testing strategies you've used",
                "Understand unit testing basics",
            ),
            "Prepare for system design basics (scalability, caching)".to_string(),
            "Review your resume projects line by line".to_string(),
            "Practice explaining technical decisions".to_string(),
        ],
    );
    checklist.insert(
        ROUND_HR,
        owned(&[
            "Prepare \"Tell me about yourself\" (2-min version)",
            "List your strengths with examples",
            "Prepare weakness with improvement plan",
            "Research company culture and values",
            "Prepare questions to ask interviewer",
            "Practice STAR method for behavioral questions",
            "Prepare salary expectation discussion",
        ]),
    );
    checklist
}
