//! Skill extractor: maps raw JD text onto the fixed taxonomy.

use crate::analysis::taxonomy::{GENERAL_SKILLS, SKILL_CATEGORIES};
use crate::models::skills::{ExtractedSkills, GENERAL};

/// Extracts categorized skills from a job description.
///
/// The text is lowercased once; a keyword matches when it is a substring of the text
/// (no word boundaries). Matches are deduplicated per category and title-cased.
/// When nothing matches, the result is exactly `{General: [Aptitude, Communication, Problem Solving]}`.
pub fn extract_skills(jd_text: &str) -> ExtractedSkills {
    let lower = jd_text.to_lowercase();
    let mut extracted = ExtractedSkills::new();

    for (category, keywords) in SKILL_CATEGORIES {
        let mut found: Vec<String> = Vec::new();
        for keyword in keywords.iter().filter(|kw| lower.contains(**kw)) {
            let label = title_case(keyword);
            if !found.contains(&label) {
                found.push(label);
            }
        }
        if !found.is_empty() {
            extracted.insert(*category, found);
        }
    }

    if extracted.is_empty() {
        return general_fallback();
    }

    tracing::debug!(
        categories = extracted.category_count(),
        "Extracted skills from JD"
    );
    extracted
}

/// The synthetic `General` result used when the taxonomy matched nothing.
pub fn general_fallback() -> ExtractedSkills {
    let mut skills = ExtractedSkills::new();
    skills.insert(
        GENERAL,
        GENERAL_SKILLS.iter().map(|s| s.to_string()).collect(),
    );
    skills
}

/// Capitalizes the first character of every space-separated token.
/// "node.js" → "Node.js", "ci/cd" → "Ci/cd", "sql" → "Sql".
pub fn title_case(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skills::{CORE_CS, DATA, LANGUAGES, WEB};

    fn labels(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_react_node_sql_scenario() {
        let skills = extract_skills("We need React, Node.js and SQL experience");
        assert_eq!(skills.category_count(), 2);
        assert_eq!(skills.category(WEB).unwrap(), labels(&["React", "Node.js"]).as_slice());
        assert_eq!(skills.category(DATA).unwrap(), labels(&["Sql"]).as_slice());
        let order: Vec<_> = skills.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Web", "Data"]);
    }

    #[test]
    fn test_react_always_lands_in_web() {
        for jd in ["react", "Senior REACT engineer", "preact fans welcome"] {
            let skills = extract_skills(jd);
            assert!(
                skills.category(WEB).unwrap().contains(&"React".to_string()),
                "missing React for {jd:?}"
            );
        }
    }

    #[test]
    fn test_no_match_yields_general_fallback_only() {
        let skills = extract_skills("Looking for a friendly barista");
        assert_eq!(skills, general_fallback());
        assert_eq!(
            skills.category(GENERAL).unwrap(),
            labels(&["Aptitude", "Communication", "Problem Solving"]).as_slice()
        );
    }

    #[test]
    fn test_empty_text_yields_general_fallback() {
        assert_eq!(extract_skills(""), general_fallback());
    }

    #[test]
    fn test_substring_false_positives_are_kept() {
        let skills = extract_skills("Strong JavaScript developer");
        let langs = skills.category(LANGUAGES).unwrap();
        assert_eq!(langs, labels(&["Java", "Javascript"]).as_slice());
    }

    #[test]
    fn test_multi_word_keywords_title_case_each_token() {
        let skills = extract_skills("Knowledge of data structures and operating system internals on POSIX");
        let core = skills.category(CORE_CS).unwrap();
        assert!(core.contains(&"Data Structures".to_string()));
        assert!(core.contains(&"Operating System".to_string()));
        // "os" also fires inside "posix"
        assert!(core.contains(&"Os".to_string()));
    }

    #[test]
    fn test_keyword_may_appear_in_two_categories() {
        let skills = extract_skills("database design");
        assert!(skills.category(CORE_CS).unwrap().contains(&"Database".to_string()));
        assert!(skills.category(DATA).unwrap().contains(&"Database".to_string()));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let jd = "Python, Django, AWS, Docker, pytest and REST APIs";
        assert_eq!(extract_skills(jd), extract_skills(jd));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("node.js"), "Node.js");
        assert_eq!(title_case("google cloud"), "Google Cloud");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("ci/cd"), "Ci/cd");
    }
}
