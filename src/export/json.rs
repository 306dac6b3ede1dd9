use serde::Serialize;

/// JSON formatter for any exportable payload
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format as pretty-printed JSON
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(value)
    }

    /// Format as compact JSON (no whitespace)
    pub fn format_compact<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use crate::data::StandardsCorpus;
    use crate::export::ComparisonReport;
    use crate::search_index::search;

    #[test]
    fn test_comparison_report_fields() {
        let corpus = StandardsCorpus::embedded().unwrap();
        let result = compare(&corpus, "risk-issues", &[]).unwrap();
        let report = ComparisonReport::new(&result);
        let json = JsonFormatter::format(&report).unwrap();

        assert!(json.contains("\"topicId\": \"risk-issues\""));
        assert!(json.contains("\"keyPoints\""));
        assert!(json.contains("\"uniquePoints\""));
        assert!(json.contains("\"whenToUse\""));
        assert!(json.contains("\"similarityCount\": 1"));
    }

    #[test]
    fn test_format_compact() {
        let corpus = StandardsCorpus::embedded().unwrap();
        let hits = search(&corpus, "risk");
        let json = JsonFormatter::format_compact(&hits).unwrap();

        assert!(!json.contains("\n  "));
        assert!(json.starts_with("[{\"standardId\":\"prince2\""));
    }
}
