//! Severity classification for health reports.
//!
//! Producers send severity as free-form text. The dashboard recognises three categories and
//! treats everything else, including the empty string, as unknown.

/// Display category for a report's severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Mild symptoms.
    Mild,
    /// Moderate symptoms.
    Moderate,
    /// Severe symptoms, highlighted with the high-severity style.
    Severe,
    /// Any value outside the three known categories.
    Unknown,
}

impl Severity {
    /// Classify a raw severity string.
    ///
    /// Matching is case-insensitive and exact: surrounding whitespace is not trimmed, so
    /// `" severe"` is [`Severity::Unknown`]. This function never fails.
    pub fn classify(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "mild" => Severity::Mild,
            "moderate" => Severity::Moderate,
            "severe" => Severity::Severe,
            _ => Severity::Unknown,
        }
    }

    /// Badge style classes used by the HTML renderer.
    pub fn style_class(self) -> &'static str {
        match self {
            Severity::Mild => "bg-green-100 text-green-800",
            Severity::Moderate => "bg-yellow-100 text-yellow-800",
            Severity::Severe => "bg-red-100 text-red-800",
            Severity::Unknown => "bg-gray-100 text-gray-800",
        }
    }

    /// Lower-case category name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Unknown => "unknown",
        }
    }

    /// Badge label for a raw severity value.
    ///
    /// The label echoes what the producer sent, upper-cased, rather than the category name.
    pub fn badge_label(raw: &str) -> String {
        raw.to_uppercase()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_ignores_case() {
        assert_eq!(Severity::classify("SEVERE"), Severity::Severe);
        assert_eq!(Severity::classify("severe"), Severity::Severe);
        assert_eq!(Severity::classify("Severe"), Severity::Severe);
        assert_eq!(Severity::classify("MoDeRaTe"), Severity::Moderate);
        assert_eq!(Severity::classify("mild"), Severity::Mild);
    }

    #[test]
    fn unexpected_values_fall_back_to_unknown() {
        assert_eq!(Severity::classify(""), Severity::Unknown);
        assert_eq!(Severity::classify("unknown-value"), Severity::Unknown);
        assert_eq!(Severity::classify(""), Severity::classify("unknown-value"));
        assert_eq!(Severity::classify(" severe"), Severity::Unknown);
        assert_eq!(Severity::classify("critical"), Severity::Unknown);
    }

    #[test]
    fn style_classes_match_categories() {
        assert_eq!(Severity::Severe.style_class(), "bg-red-100 text-red-800");
        assert_eq!(Severity::Moderate.style_class(), "bg-yellow-100 text-yellow-800");
        assert_eq!(Severity::Mild.style_class(), "bg-green-100 text-green-800");
        assert_eq!(Severity::Unknown.style_class(), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn badge_label_upper_cases_raw_value() {
        assert_eq!(Severity::badge_label("severe"), "SEVERE");
        assert_eq!(Severity::badge_label("Watch"), "WATCH");
        assert_eq!(Severity::badge_label(""), "");
    }
}
