//! Round mapping: the expected interview sequence for a company size,
//! with descriptions tuned to the candidate's skill profile.

use crate::models::company::{CompanySize, RoundInfo};
use crate::models::skills::{ExtractedSkills, CORE_CS, WEB};

/// Skill signals interpolated into round descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillSignals {
    pub has_dsa: bool,
    pub has_web: bool,
    pub has_react: bool,
    pub has_node: bool,
}

impl SkillSignals {
    pub fn from_skills(skills: &ExtractedSkills) -> Self {
        Self {
            has_dsa: skills.category_mentions(CORE_CS, &["dsa", "algorithm", "data structures"]),
            has_web: skills.has_category(WEB),
            has_react: skills.category_mentions(WEB, &["react"]),
            has_node: skills.category_mentions(WEB, &["node"]),
        }
    }
}

fn round(name: &str, description: impl Into<String>, why_matters: &str) -> RoundInfo {
    RoundInfo {
        round: name.to_string(),
        description: description.into(),
        why_matters: why_matters.to_string(),
    }
}

/// Returns 4 rounds for Enterprise and Mid-size companies, 3 for Startups, in interview order.
pub fn generate_round_mapping(size: CompanySize, skills: &ExtractedSkills) -> Vec<RoundInfo> {
    let signals = SkillSignals::from_skills(skills);
    match size {
        CompanySize::Enterprise => enterprise_rounds(signals),
        CompanySize::MidSize => midsize_rounds(signals),
        CompanySize::Startup => startup_rounds(signals),
    }
}

fn enterprise_rounds(s: SkillSignals) -> Vec<RoundInfo> {
    vec![
        round(
            "Round 1: Online Assessment",
            "DSA problems (2-3 medium level) + Aptitude + MCQs on core CS",
            "Filters candidates at scale. Tests fundamental problem-solving and CS knowledge. Usually time-bound (60-90 mins).",
        ),
        round(
            "Round 2: Technical Interview - DSA",
            if s.has_dsa {
                "Live coding: Arrays, strings, trees, graphs. Explain approach, optimize, handle edge cases."
            } else {
                "Problem-solving with data structures. Focus on logic and optimization."
            },
            "Evaluates coding ability under pressure, communication skills, and depth of algorithmic thinking.",
        ),
        round(
            "Round 3: Technical Interview - Projects & Stack",
            if s.has_web {
                format!(
                    "Deep dive into your projects. Expect questions on {}, system design basics, and trade-offs.",
                    if s.has_react { "React architecture" } else { "web technologies" }
                )
            } else {
                "Project discussion, architecture decisions, and technical depth in your stack."
                    .to_string()
            },
            "Assesses real-world experience, ability to build production systems, and technical decision-making.",
        ),
        round(
            "Round 4: HR & Behavioral",
            "Tell me about yourself, strengths/weaknesses, conflict resolution, salary expectations.",
            "Evaluates cultural fit, communication skills, career goals alignment, and negotiation readiness.",
        ),
    ]
}

fn midsize_rounds(s: SkillSignals) -> Vec<RoundInfo> {
    vec![
        round(
            "Round 1: Technical Screening",
            if s.has_dsa {
                "Mix of DSA (1-2 easy-medium) + practical coding in your stack"
            } else {
                "Practical coding problems relevant to the role"
            },
            "Quick filter to assess baseline technical competency and coding fluency.",
        ),
        round(
            "Round 2: Technical Deep Dive",
            if s.has_web {
                format!(
                    "{} concepts, {} design, database queries, and project walkthrough.",
                    if s.has_react { "React" } else { "Frontend" },
                    if s.has_node { "Node.js/backend" } else { "API" }
                )
            } else {
                "Deep technical discussion on your projects and tech stack expertise.".to_string()
            },
            "Tests depth of knowledge in relevant technologies and ability to ship features independently.",
        ),
        round(
            "Round 3: System Design / Problem Solving",
            "Design a feature or system (e.g., notification service, URL shortener). Discuss trade-offs.",
            "Evaluates architectural thinking, scalability awareness, and ability to handle ambiguity.",
        ),
        round(
            "Round 4: Culture Fit & Founder Round",
            "Discussion with senior leadership about vision, work style, and mutual expectations.",
            "Ensures alignment with company values, growth mindset, and long-term potential.",
        ),
    ]
}

fn startup_rounds(s: SkillSignals) -> Vec<RoundInfo> {
    vec![
        round(
            "Round 1: Practical Coding Challenge",
            if s.has_web {
                format!(
                    "Build a small feature or fix bugs in {} code. Focus on working solution.",
                    if s.has_react { "React" } else { "frontend" }
                )
            } else {
                "Solve a real-world problem with working code. Less theory, more execution."
                    .to_string()
            },
            "Startups need people who can ship fast. This tests your ability to deliver working code quickly.",
        ),
        round(
            "Round 2: Technical Discussion",
            if s.has_web {
                format!(
                    "Discuss your projects, {}, and how you'd approach building features.",
                    if s.has_react { "React patterns" } else { "web architecture" }
                )
            } else {
                "Walk through your experience, technical decisions, and problem-solving approach."
                    .to_string()
            },
            "Assesses depth of understanding and ability to make pragmatic technical choices under constraints.",
        ),
        round(
            "Round 3: Culture & Vision Fit",
            "Meet the team/founders. Discuss startup life, ownership mindset, and growth trajectory.",
            "Startups need versatile team players who thrive in ambiguity and take ownership. Cultural fit is critical.",
        ),
    ]
}
