//! 7-day preparation plan.

use crate::analysis::owned;
use crate::models::sections::KeyedLists;
use crate::models::skills::{ExtractedSkills, CLOUD_DEVOPS, CORE_CS, WEB};

pub const DAY_HEADINGS: [&str; 7] = [
    "Day 1: Foundations",
    "Day 2: Core Concepts",
    "Day 3: DSA Practice",
    "Day 4: Advanced DSA",
    "Day 5: Tech Stack & Projects",
    "Day 6: Mock Interviews",
    "Day 7: Final Revision",
];

/// Builds the 7-day plan. Only a literal "dsa" skill counts as DSA here
/// (unlike the checklist, which also accepts "algorithm").
pub fn generate_7day_plan(skills: &ExtractedSkills) -> KeyedLists {
    let has_dsa = skills.category_mentions(CORE_CS, &["dsa"]);
    let has_web = skills.has_category(WEB);
    let has_cloud = skills.has_category(CLOUD_DEVOPS);
    let web_tech = skills.first_in(WEB).unwrap_or("Web");

    let pick = |cond: bool, yes: &str, no: &str| (if cond { yes } else { no }).to_string();

    let days: [Vec<String>; 7] = [
        owned(&[
            "Review core CS fundamentals (OOP, DBMS, OS)",
            "Solve 5 easy coding problems",
            "Revise your strongest programming language",
            "Update resume with quantified achievements",
        ]),
        owned(&[
            "Deep dive into DBMS (normalization, indexing, transactions)",
            "Study OS concepts (scheduling, memory management)",
            "Practice 5 medium coding problems",
            "Review networking basics",
        ]),
        vec![
            pick(
                has_dsa,
                "Solve 10 array and string problems",
                "Practice basic data structure problems",
            ),
            pick(
                has_dsa,
                "Master binary search variations",
                "Learn searching and sorting",
            ),
            pick(
                has_dsa,
                "Practice linked list problems",
                "Understand linked lists basics",
            ),
            "Review time and space complexity".to_string(),
        ],
        vec![
            pick(
                has_dsa,
                "Solve tree and graph problems (5 each)",
                "Practice recursion problems",
            ),
            pick(
                has_dsa,
                "Study dynamic programming basics",
                "Learn problem-solving patterns",
            ),
            "Practice stack and queue problems".to_string(),
            "Solve previous company coding questions".to_string(),
        ],
        vec![
            if has_web {
                format!("Review {web_tech} concepts thoroughly")
            } else {
                "Review your tech stack".to_string()
            },
            "Prepare detailed project explanations".to_string(),
            "Practice system design basics".to_string(),
            pick(
                has_cloud,
                "Review Docker and CI/CD concepts",
                "Understand deployment basics",
            ),
            "Align resume with job requirements".to_string(),
        ],
        owned(&[
            "Take a full mock technical interview",
            "Practice explaining projects out loud",
            "Solve 5 random medium problems under time pressure",
            "Record yourself answering common questions",
            "Review and improve communication",
        ]),
        owned(&[
            "Revise weak areas identified in mocks",
            "Quick review of all core concepts",
            "Solve 3-5 problems for confidence",
            "Prepare questions to ask interviewer",
            "Get good sleep and stay confident",
        ]),
    ];

    DAY_HEADINGS.into_iter().zip(days).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::extract_skills;

    #[test]
    fn test_seven_days_in_order() {
        let plan = generate_7day_plan(&ExtractedSkills::new());
        assert_eq!(plan.headings().collect::<Vec<_>>(), DAY_HEADINGS.to_vec());
        let sizes: Vec<_> = plan.iter().map(|(_, tasks)| tasks.len()).collect();
        assert_eq!(sizes, vec![4, 4, 4, 4, 5, 5, 5]);
    }

    #[test]
    fn test_web_tech_interpolates_first_web_skill() {
        let plan = generate_7day_plan(&extract_skills("Angular and GraphQL"));
        // taxonomy order puts graphql before angular
        assert_eq!(
            plan.get("Day 5: Tech Stack & Projects").unwrap()[0],
            "Review Graphql concepts thoroughly"
        );
    }

    #[test]
    fn test_no_web_uses_generic_stack_task() {
        let plan = generate_7day_plan(&extract_skills("python only"));
        assert_eq!(
            plan.get("Day 5: Tech Stack & Projects").unwrap()[0],
            "Review your tech stack"
        );
    }

    #[test]
    fn test_dsa_branches() {
        let with = generate_7day_plan(&extract_skills("DSA rounds"));
        assert_eq!(
            with.get("Day 3: DSA Practice").unwrap()[0],
            "Solve 10 array and string problems"
        );
        assert_eq!(
            with.get("Day 4: Advanced DSA").unwrap()[1],
            "Study dynamic programming basics"
        );

        // "algorithms" alone is not enough for the plan
        let without = generate_7day_plan(&extract_skills("algorithms"));
        assert_eq!(
            without.get("Day 3: DSA Practice").unwrap()[0],
            "Practice basic data structure problems"
        );
    }

    #[test]
    fn test_cloud_branch() {
        let plan = generate_7day_plan(&extract_skills("Kubernetes"));
        assert_eq!(
            plan.get("Day 5: Tech Stack & Projects").unwrap()[3],
            "Review Docker and CI/CD concepts"
        );
    }
}
