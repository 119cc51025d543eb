use std::fmt;

use serde::{Deserialize, Serialize};

/// Company size bucket. Drives hiring focus and the interview round sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[default]
    Startup,
    #[serde(rename = "Mid-size")]
    MidSize,
    Enterprise,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "Startup",
            CompanySize::MidSize => "Mid-size",
            CompanySize::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic profile of a company inferred from its name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIntel {
    pub name: String,
    pub industry: String,
    pub size: CompanySize,
    pub hiring_focus: String,
}

/// One stage of the expected interview sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub round: String,
    pub description: String,
    pub why_matters: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_size_serde_uses_display_labels() {
        assert_eq!(
            serde_json::to_string(&CompanySize::MidSize).unwrap(),
            r#""Mid-size""#
        );
        let size: CompanySize = serde_json::from_str(r#""Enterprise""#).unwrap();
        assert_eq!(size, CompanySize::Enterprise);
        assert_eq!(CompanySize::MidSize.to_string(), "Mid-size");
    }

    #[test]
    fn test_company_intel_uses_camel_case_keys() {
        let intel = CompanyIntel {
            name: "Acme".into(),
            industry: "Technology Services".into(),
            size: CompanySize::Startup,
            hiring_focus: "Shipping".into(),
        };
        let value = serde_json::to_value(&intel).unwrap();
        assert_eq!(value["hiringFocus"], "Shipping");
        assert_eq!(value["size"], "Startup");
    }
}
