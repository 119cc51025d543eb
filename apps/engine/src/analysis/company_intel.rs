//! Company intel: size and industry guessed from the company name.

use crate::models::company::{CompanyIntel, CompanySize};

pub const ENTERPRISE_COMPANIES: &[&str] = &[
    "google",
    "microsoft",
    "amazon",
    "meta",
    "facebook",
    "apple",
    "netflix",
    "infosys",
    "tcs",
    "wipro",
    "cognizant",
    "accenture",
    "capgemini",
    "ibm",
    "oracle",
    "salesforce",
    "adobe",
    "intel",
    "nvidia",
    "jpmorgan",
    "goldman sachs",
    "morgan stanley",
    "deloitte",
    "pwc",
    "walmart",
    "target",
    "uber",
    "airbnb",
    "linkedin",
    "twitter",
    "x corp",
];

pub const MIDSIZE_COMPANIES: &[&str] = &[
    "zomato",
    "swiggy",
    "paytm",
    "razorpay",
    "cred",
    "phonepe",
    "freshworks",
    "zoho",
    "postman",
    "browserstack",
    "clevertap",
    "atlassian",
    "slack",
    "notion",
    "figma",
    "canva",
];

pub const DEFAULT_INDUSTRY: &str = "Technology Services";

/// Industry chain; the first entry with a matching needle wins.
const INDUSTRY_RULES: &[(&[&str], &str)] = &[
    (&["bank", "finance", "capital"], "Financial Services"),
    (&["health", "medical", "pharma"], "Healthcare & Life Sciences"),
    (&["retail", "ecommerce", "shop"], "Retail & E-commerce"),
    (&["consult"], "Consulting Services"),
    (&["food", "delivery"], "Food & Delivery Services"),
];

const ENTERPRISE_FOCUS: &str = "Structured DSA fundamentals, core computer science concepts, system design basics, and behavioral assessment. Emphasis on problem-solving methodology and scalable thinking.";
const MIDSIZE_FOCUS: &str = "Balance of DSA fundamentals and practical tech stack knowledge. Focus on shipping features quickly while maintaining code quality. Cultural fit is important.";
const STARTUP_FOCUS: &str = "Practical problem-solving with real-world scenarios. Deep knowledge of tech stack, ability to wear multiple hats, and fast execution. Less emphasis on theoretical DSA.";

/// Infers size, industry and hiring focus from a company name.
///
/// Total: unknown or empty names resolve to Startup / Technology Services.
/// The enterprise list is checked before the mid-size list.
pub fn infer_company_intel(company_name: &str) -> CompanyIntel {
    let lower = company_name.to_lowercase();
    let size = classify_size(&lower);

    let industry = INDUSTRY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, industry)| *industry)
        .unwrap_or(DEFAULT_INDUSTRY);

    CompanyIntel {
        name: company_name.to_string(),
        industry: industry.to_string(),
        size,
        hiring_focus: hiring_focus(size).to_string(),
    }
}

fn classify_size(lower_name: &str) -> CompanySize {
    if ENTERPRISE_COMPANIES.iter().any(|c| lower_name.contains(c)) {
        CompanySize::Enterprise
    } else if MIDSIZE_COMPANIES.iter().any(|c| lower_name.contains(c)) {
        CompanySize::MidSize
    } else {
        CompanySize::Startup
    }
}

pub fn hiring_focus(size: CompanySize) -> &'static str {
    match size {
        CompanySize::Enterprise => ENTERPRISE_FOCUS,
        CompanySize::MidSize => MIDSIZE_FOCUS,
        CompanySize::Startup => STARTUP_FOCUS,
    }
}
