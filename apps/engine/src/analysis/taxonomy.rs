//! Skill taxonomy: fixed category → lowercase keyword table.
//!
//! Category order is display order. Keywords are matched by plain substring
//! containment, so short keywords ("os", "api", "java") also fire inside longer words.

use crate::models::skills::{CLOUD_DEVOPS, CORE_CS, DATA, LANGUAGES, TESTING, WEB};

pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        CORE_CS,
        &[
            "dsa",
            "data structures",
            "algorithms",
            "oop",
            "object oriented",
            "dbms",
            "database",
            "os",
            "operating system",
            "networks",
            "networking",
            "computer networks",
        ],
    ),
    (
        LANGUAGES,
        &[
            "java",
            "python",
            "javascript",
            "typescript",
            "c++",
            "c#",
            "golang",
            "go lang",
            "ruby",
            "php",
            "swift",
            "kotlin",
        ],
    ),
    (
        WEB,
        &[
            "react",
            "reactjs",
            "next.js",
            "nextjs",
            "node.js",
            "nodejs",
            "express",
            "rest",
            "restful",
            "api",
            "graphql",
            "angular",
            "vue",
            "html",
            "css",
        ],
    ),
    (
        DATA,
        &[
            "sql",
            "mongodb",
            "postgresql",
            "mysql",
            "redis",
            "nosql",
            "database",
        ],
    ),
    (
        CLOUD_DEVOPS,
        &[
            "aws",
            "azure",
            "gcp",
            "google cloud",
            "docker",
            "kubernetes",
            "k8s",
            "ci/cd",
            "jenkins",
            "linux",
            "devops",
        ],
    ),
    (
        TESTING,
        &[
            "selenium",
            "cypress",
            "playwright",
            "junit",
            "pytest",
            "testing",
            "test automation",
            "jest",
        ],
    ),
];

/// Generic skills reported when no taxonomy keyword matched.
pub const GENERAL_SKILLS: &[&str] = &["Aptitude", "Communication", "Problem Solving"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_unique_within_category() {
        for (category, keywords) in SKILL_CATEGORIES {
            let unique: HashSet<_> = keywords.iter().collect();
            assert_eq!(unique.len(), keywords.len(), "duplicate keyword in {category}");
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (_, keywords) in SKILL_CATEGORIES {
            for kw in *keywords {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }

    #[test]
    fn test_category_order() {
        let names: Vec<_> = SKILL_CATEGORIES.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            names,
            vec!["Core CS", "Languages", "Web", "Data", "Cloud/DevOps", "Testing"]
        );
    }
}
