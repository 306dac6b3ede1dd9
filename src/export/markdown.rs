use chrono::{DateTime, Utc};

use crate::comparison::ComparisonResult;
use crate::recommendation::ProjectProfile;
use crate::topics::TopicGuidance;

/// Markdown formatter for comparisons and recommendations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a comparison as markdown
    pub fn format_comparison(
        result: &ComparisonResult,
        guidance: &TopicGuidance,
        generated_at: DateTime<Utc>,
    ) -> String {
        let mut md = String::with_capacity(4096);

        md.push_str(&format!("# Comparison: {}\n\n", result.topic));
        let labels: Vec<&str> = result.selected.iter().map(|id| id.label()).collect();
        md.push_str(&format!("**Standards:** {}  \n", labels.join(", ")));
        md.push_str(&format!(
            "**Generated:** {}\n\n",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        // Side-by-side sections
        for (id, view) in result.views() {
            md.push_str(&format!("## {}: {}\n\n", id.label(), view.title));
            md.push_str(&format!("{}\n\n", view.content));

            if !view.key_points.is_empty() {
                md.push_str("**Key Points:**\n\n");
                for point in &view.key_points {
                    md.push_str(&format!("- {}\n", point));
                }
                md.push('\n');
            }
            if !view.practices.is_empty() {
                md.push_str("**Practices:**\n\n");
                for practice in &view.practices {
                    md.push_str(&format!("- {}\n", practice));
                }
                md.push('\n');
            }
        }

        md.push_str("## Similarities\n\n");
        Self::numbered(&mut md, &result.analysis.similarities);

        md.push_str("## Differences\n\n");
        Self::numbered(&mut md, &result.analysis.differences);

        md.push_str("## Unique Points\n\n");
        if result.analysis.unique_points.is_empty() {
            md.push_str("_None identified._\n\n");
        }
        for unique in &result.analysis.unique_points {
            md.push_str(&format!("### {}\n\n", unique.standard.label()));
            for point in &unique.points {
                md.push_str(&format!("- {}\n", point));
            }
            md.push('\n');
        }

        md.push_str("## Recommendations\n\n");
        md.push_str(&format!("**When to Use:** {}\n\n", guidance.when_to_use));
        md.push_str(&format!("**Best Method:** {}\n", guidance.best_method));

        md
    }

    /// Format a recommendation as markdown
    pub fn format_recommendation(profile: &ProjectProfile, text: &str, generated_at: DateTime<Utc>) -> String {
        let mut md = String::with_capacity(text.len() + 256);
        md.push_str("# Tailored Process Recommendation\n\n");
        md.push_str(&format!("*{}*  \n", profile.summary_line()));
        md.push_str(&format!(
            "*Generated: {}*\n\n",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        md.push_str(text);
        if !text.ends_with('\n') {
            md.push('\n');
        }
        md
    }

    fn numbered(md: &mut String, items: &[String]) {
        if items.is_empty() {
            md.push_str("_None identified._\n\n");
            return;
        }
        for (i, item) in items.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, item));
        }
        md.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use crate::data::StandardsCorpus;
    use crate::recommendation::generate_recommendation;
    use crate::topics::topic_guidance;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_comparison_sections_in_order() {
        let corpus = StandardsCorpus::embedded().unwrap();
        let result = compare(&corpus, "stakeholder-engagement", &[]).unwrap();
        let md = MarkdownFormatter::format_comparison(&result, &topic_guidance("stakeholder-engagement"), fixed_time());

        assert!(md.starts_with(&format!("# Comparison: {}\n", result.topic)));
        assert!(md.contains("**Generated:** 2025-03-01 09:30 UTC"));
        let order = ["## PMBOK 7:", "## PRINCE2:", "## ISO 21502:", "## Similarities", "## Differences", "## Unique Points", "## Recommendations"];
        let positions: Vec<usize> = order.iter().map(|h| md.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(md.contains("1. All standards emphasize stakeholder as a critical aspect"));
    }

    #[test]
    fn test_empty_lists_marked() {
        let corpus = StandardsCorpus::embedded().unwrap();
        let result = compare(&corpus, "communication-reporting", &[]).unwrap();
        let md = MarkdownFormatter::format_comparison(&result, &topic_guidance("communication-reporting"), fixed_time());
        assert!(md.contains("## Similarities\n\n_None identified._"));
        assert!(md.contains("## Differences\n\n_None identified._"));
    }

    #[test]
    fn test_recommendation_header() {
        let profile = ProjectProfile::parse("research", "medium", "high").unwrap();
        let text = generate_recommendation(&profile);
        let md = MarkdownFormatter::format_recommendation(&profile, &text, fixed_time());
        assert!(md.starts_with("# Tailored Process Recommendation\n\n*Type: research    Duration: medium    Risk: high*"));
        assert!(md.ends_with(&text));
    }
}
