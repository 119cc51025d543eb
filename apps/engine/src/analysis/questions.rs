//! Likely interview questions.

use crate::models::skills::{ExtractedSkills, CLOUD_DEVOPS, CORE_CS, LANGUAGES, WEB};

pub const MAX_QUESTIONS: usize = 10;

/// Generic questions appended, in this order, until the list holds `MAX_QUESTIONS`.
pub const GENERIC_QUESTIONS: &[&str] = &[
    "Describe a challenging project you worked on and how you solved it.",
    "How do you approach debugging a complex issue?",
    "Explain a time when you had to learn a new technology quickly.",
    "How do you ensure code quality in your projects?",
    "What is your approach to writing clean, maintainable code?",
    "Explain how you would design a URL shortener service.",
    "How do you stay updated with new technologies?",
    "Describe your development workflow from idea to deployment.",
];

/// Builds up to ten interview questions: skill-specific ones first, then generic padding.
///
/// Only the first Languages entry is consulted, and its checks run in order
/// java → python → javascript/typescript, so "Javascript" still gets the Java question
/// whenever "Java" is listed first.
pub fn generate_interview_questions(skills: &ExtractedSkills) -> Vec<String> {
    let mut questions: Vec<&str> = Vec::new();

    if skills.has_category(CORE_CS) {
        if skills.category_mentions(CORE_CS, &["dsa", "algorithm"]) {
            questions.push("Explain the difference between array and linked list. When would you use each?");
            questions.push("How would you optimize search in a sorted array? Explain binary search.");
            questions.push("What is the time complexity of common sorting algorithms?");
        }
        if skills.category_mentions(CORE_CS, &["oop"]) {
            questions.push("Explain the four pillars of OOP with real-world examples.");
        }
        if skills.category_mentions(CORE_CS, &["dbms", "database"]) {
            questions.push("Explain database indexing and when it helps performance.");
            questions.push("What is normalization? Explain with an example.");
        }
        if skills.category_mentions(CORE_CS, &["os"]) {
            questions.push("Explain the difference between process and thread.");
        }
    }

    if skills.has_category(WEB) {
        if skills.category_mentions(WEB, &["react"]) {
            questions.push("Explain React state management options and when to use each.");
            questions.push("What are React hooks? Explain useState and useEffect.");
        }
        if skills.category_mentions(WEB, &["node", "express"]) {
            questions.push("How does Node.js handle asynchronous operations?");
        }
        if skills.category_mentions(WEB, &["rest", "api"]) {
            questions.push("Explain RESTful API design principles and best practices.");
        }
    }

    if let Some(lang) = skills.first_in(LANGUAGES) {
        let lang = lang.to_lowercase();
        if lang.contains("java") {
            questions.push("Explain Java memory management and garbage collection.");
        } else if lang.contains("python") {
            questions.push("What are Python decorators and generators? Provide examples.");
        } else if lang.contains("javascript") || lang.contains("typescript") {
            questions.push("Explain closures and promises in JavaScript.");
        }
    }

    if skills.has_category(CLOUD_DEVOPS) {
        if skills.category_mentions(CLOUD_DEVOPS, &["docker"]) {
            questions.push("What is Docker and how does containerization work?");
        }
        if skills.category_mentions(CLOUD_DEVOPS, &["aws", "cloud"]) {
            questions.push("Explain the benefits of cloud computing and common services.");
        }
    }

    for generic in GENERIC_QUESTIONS {
        if questions.len() >= MAX_QUESTIONS {
            break;
        }
        if !questions.contains(generic) {
            questions.push(*generic);
        }
    }

    questions
        .into_iter()
        .take(MAX_QUESTIONS)
        .map(str::to_string)
        .collect()
}
