use serde::{Deserialize, Serialize};

/// Server-computed outcome of a submitted sheet.
///
/// Scoring happens remotely; this type only carries what comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    /// Number of questions the student answered. Older servers omit it.
    #[serde(default)]
    pub answered: Option<u32>,
    pub percentage: f64,
    #[serde(default)]
    pub report: String,
}

impl QuizResult {
    /// Percentage rounded to a whole number for display.
    #[must_use]
    pub fn rounded_percentage(&self) -> u32 {
        if !self.percentage.is_finite() || self.percentage <= 0.0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.percentage.round().min(f64::from(u32::MAX)) as u32;
        rounded
    }

    /// Fill in the answered count from the submitted sheet when the server left it out.
    #[must_use]
    pub fn with_answered_fallback(mut self, answered: usize) -> Self {
        if self.answered.is_none() {
            self.answered = Some(u32::try_from(answered).unwrap_or(u32::MAX));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_result_without_answered_field() {
        let json = r#"{"score": 7, "total": 30, "percentage": 23.333, "report": "Keep practicing!"}"#;
        let result: QuizResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.answered, None);
        assert_eq!(result.rounded_percentage(), 23);

        let result = result.with_answered_fallback(12);
        assert_eq!(result.answered, Some(12));
    }

    #[test]
    fn server_answered_count_wins_over_fallback() {
        let json = r#"{"score": 1, "total": 3, "answered": 2, "percentage": 33.3, "report": ""}"#;
        let result: QuizResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.with_answered_fallback(3).answered, Some(2));
    }

    #[test]
    fn rounded_percentage_handles_odd_values() {
        let mut result = QuizResult {
            score: 0,
            total: 0,
            answered: None,
            percentage: f64::NAN,
            report: String::new(),
        };
        assert_eq!(result.rounded_percentage(), 0);
        result.percentage = 66.5;
        assert_eq!(result.rounded_percentage(), 67);
    }
}
