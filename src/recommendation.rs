//! Tailored Process Recommendation
//!
//! Turns a three-field project profile into a Markdown-flavoured
//! recommendation text. The text is assembled from fixed paragraphs:
//! - one keyed on project type (types without a dedicated rule get the hybrid paragraph)
//! - one keyed on duration
//! - one keyed on risk level
//! - fixed process elements and success factors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HubError;

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Software,
    Construction,
    Research,
    Marketing,
    Infrastructure,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Software => "software",
            ProjectType::Construction => "construction",
            ProjectType::Research => "research",
            ProjectType::Marketing => "marketing",
            ProjectType::Infrastructure => "infrastructure",
            ProjectType::Other => "other",
        }
    }
}

impl Duration {
    pub fn as_str(self) -> &'static str {
        match self {
            Duration::Short => "short",
            Duration::Medium => "medium",
            Duration::Long => "long",
        }
    }
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl FromStr for ProjectType {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "software" => Ok(ProjectType::Software),
            "construction" => Ok(ProjectType::Construction),
            "research" => Ok(ProjectType::Research),
            "marketing" => Ok(ProjectType::Marketing),
            "infrastructure" => Ok(ProjectType::Infrastructure),
            "other" => Ok(ProjectType::Other),
            _ => Err(HubError::InvalidProfile {
                field: "project type",
                value: s.to_string(),
                expected: "software, construction, research, marketing, infrastructure, other",
            }),
        }
    }
}

impl FromStr for Duration {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Duration::Short),
            "medium" => Ok(Duration::Medium),
            "long" => Ok(Duration::Long),
            _ => Err(HubError::InvalidProfile {
                field: "duration",
                value: s.to_string(),
                expected: "short, medium, long",
            }),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(HubError::InvalidProfile {
                field: "risk level",
                value: s.to_string(),
                expected: "low, medium, high",
            }),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProfile {
    pub project_type: ProjectType,
    pub duration: Duration,
    pub risk_level: RiskLevel,
}

impl ProjectProfile {
    pub fn new(project_type: ProjectType, duration: Duration, risk_level: RiskLevel) -> Self {
        Self {
            project_type,
            duration,
            risk_level,
        }
    }

    /// Parse all three fields, failing on the first invalid one.
    pub fn parse(project_type: &str, duration: &str, risk_level: &str) -> Result<Self, HubError> {
        Ok(Self::new(project_type.parse()?, duration.parse()?, risk_level.parse()?))
    }

    /// "Type: software    Duration: short    Risk: high"
    pub fn summary_line(&self) -> String {
        format!(
            "Type: {}    Duration: {}    Risk: {}",
            self.project_type, self.duration, self.risk_level
        )
    }
}

// ============================================================================
// Text
// ============================================================================

pub const RECOMMENDATION_OPENING: &str = "Based on your project profile:";

fn project_type_paragraph(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Software => "🔹 **PMBOK 7 Adaptive Approach**: Given the software development context, leverage PMBOK's flexibility with iterative delivery cycles and continuous stakeholder feedback.",
        ProjectType::Construction => "🔹 **PRINCE2 Process Control**: For construction projects, PRINCE2's stage-based governance and formal control points align well with milestone-driven delivery.",
        ProjectType::Research => "🔹 **ISO 21500 Framework**: Research projects benefit from ISO's flexible framework that accommodates evolving objectives and discoveries.",
        ProjectType::Marketing | ProjectType::Infrastructure | ProjectType::Other => {
            "🔹 **Hybrid Approach**: Consider combining principles from multiple standards for optimal results."
        }
    }
}

fn duration_paragraph(duration: Duration) -> &'static str {
    match duration {
        Duration::Short => "⏱️ **Duration Management**: With a short timeline, prioritize PMBOK's Planning Performance Domain to ensure efficient resource allocation and PRINCE2's stage control for quick decision-making.",
        Duration::Medium => "⏱️ **Duration Management**: For medium-duration projects, implement ISO's systematic approach with regular checkpoints and PMBOK's measurement domain for progress tracking.",
        Duration::Long => "⏱️ **Duration Management**: Long-term projects require PRINCE2's formal governance structure and PMBOK's uncertainty management to adapt over time.",
    }
}

fn risk_paragraph(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "⚠️ **Risk Strategy**: With low risk, use streamlined processes from ISO 21500 while maintaining basic PMBOK principles for stakeholder engagement.",
        RiskLevel::Medium => "⚠️ **Risk Strategy**: Moderate risk calls for PMBOK's Uncertainty Performance Domain combined with PRINCE2's Risk Theme for balanced risk management.",
        RiskLevel::High => "⚠️ **Risk Strategy**: High-risk projects need PRINCE2's formal risk registers, PMBOK's proactive risk strategies, and ISO's systematic risk assessment.",
    }
}

const PROCESS_ELEMENTS: [&str; 5] = [
    "Follow PMBOK's 12 principles for foundational guidance",
    "Adopt PRINCE2's defined roles and responsibilities structure",
    "Align with ISO 21502's governance framework",
    "Implement regular stakeholder reviews from all three standards",
    "Use PRINCE2's stage gates for major decision points",
];

const SUCCESS_FACTORS: [&str; 4] = [
    "Maintain clear communication channels",
    "Document decisions and changes systematically",
    "Regularly assess progress against objectives",
    "Adapt processes based on project needs",
];

/// Build the recommendation text for `profile`.
///
/// Paragraphs are separated by blank lines; list items start with "• ".
pub fn generate_recommendation(profile: &ProjectProfile) -> String {
    let mut text = String::with_capacity(1536);

    text.push_str(RECOMMENDATION_OPENING);
    text.push_str("\n\n");
    text.push_str(project_type_paragraph(profile.project_type));
    text.push_str("\n\n");
    text.push_str(duration_paragraph(profile.duration));
    text.push_str("\n\n");
    text.push_str(risk_paragraph(profile.risk_level));
    text.push_str("\n\n");

    text.push_str("📋 **Recommended Process Elements**:\n");
    for item in PROCESS_ELEMENTS {
        text.push_str(&format!("• {}\n", item));
    }
    text.push('\n');

    text.push_str("💡 **Key Success Factors**:\n");
    for item in SUCCESS_FACTORS {
        text.push_str(&format!("• {}\n", item));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let p = ProjectProfile::parse("Software", " short ", "HIGH").unwrap();
        assert_eq!(p, ProjectProfile::new(ProjectType::Software, Duration::Short, RiskLevel::High));
        assert_eq!(p.summary_line(), "Type: software    Duration: short    Risk: high");
    }

    #[test]
    fn test_invalid_value_names_field() {
        let err = ProjectProfile::parse("software", "forever", "low").unwrap_err();
        match err {
            HubError::InvalidProfile { field, value, .. } => {
                assert_eq!(field, "duration");
                assert_eq!(value, "forever");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_text_structure() {
        let p = ProjectProfile::new(ProjectType::Construction, Duration::Long, RiskLevel::Medium);
        let text = generate_recommendation(&p);
        assert!(text.starts_with("Based on your project profile:\n\n"));
        assert!(text.contains("PRINCE2 Process Control"));
        assert!(text.contains("Long-term projects require"));
        assert!(text.contains("Moderate risk calls for"));
        assert_eq!(text.matches("• ").count(), PROCESS_ELEMENTS.len() + SUCCESS_FACTORS.len());
        assert!(text.ends_with("Adapt processes based on project needs\n"));
    }

    #[test]
    fn test_types_without_rule_get_hybrid() {
        for t in [ProjectType::Marketing, ProjectType::Infrastructure, ProjectType::Other] {
            let text = generate_recommendation(&ProjectProfile::new(t, Duration::Short, RiskLevel::Low));
            assert!(text.contains("**Hybrid Approach**"));
        }
    }
}
