use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::evaluation::HireTier;

/// Identifier wrapper for interview sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Measurements produced for one answered question by the upstream analysis collaborators.
///
/// Every field is optional on the wire: missing, `null` or malformed numbers decode as zero,
/// and nested records of the wrong shape decode as their empty defaults. Numeric strings are
/// read as numbers and fractional counts are truncated.
///
/// The top-level `wpm`, `filler_count` and `filler_ratio` are the session-level speech figures
/// the aggregate averages. The per-question rubric reads `fluency_detailed` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionResult {
    #[serde(deserialize_with = "lenient::or_default")]
    pub question: String,
    #[serde(deserialize_with = "lenient::count")]
    pub question_number: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub transcript: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub violations: Vec<Violation>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub emotion_scores: EmotionScores,
    #[serde(deserialize_with = "lenient::number")]
    pub accuracy: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub fluency: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub fluency_level: FluencyLevel,
    #[serde(deserialize_with = "lenient::or_default")]
    pub fluency_detailed: FluencyDetailed,
    #[serde(deserialize_with = "lenient::or_default")]
    pub has_valid_data: bool,
    #[serde(deserialize_with = "lenient::number")]
    pub wpm: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub filler_count: u32,
    #[serde(deserialize_with = "lenient::number")]
    pub filler_ratio: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub blink_count: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub outfit: String,
    #[serde(deserialize_with = "lenient::number")]
    pub outfit_confidence: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub improvements_applied: ImprovementsApplied,
    #[serde(
        deserialize_with = "lenient::hire_tier",
        skip_serializing_if = "Option::is_none"
    )]
    pub hire_decision: Option<HireTier>,
    #[serde(
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hire_reasons: Vec<String>,
}

impl QuestionResult {
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn is_decided(&self) -> bool {
        self.hire_decision.is_some()
    }
}

/// Proctoring event captured while the candidate answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Violation {
    #[serde(deserialize_with = "lenient::or_default")]
    pub reason: String,
    /// Seconds into the question.
    #[serde(deserialize_with = "lenient::number")]
    pub timestamp: f64,
    #[serde(
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionScores {
    #[serde(deserialize_with = "lenient::number")]
    pub confidence: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub nervousness: f64,
    #[serde(
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence_label: Option<String>,
    #[serde(
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub nervous_label: Option<String>,
}

/// Independently measured speech signals. None of these is derived from another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluencyDetailed {
    /// Words per minute.
    #[serde(deserialize_with = "lenient::number")]
    pub speech_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub speech_rate_normalized: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub grammar_score: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub grammar_errors: u32,
    #[serde(deserialize_with = "lenient::number")]
    pub lexical_diversity: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub coherence_score: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub filler_count: u32,
    #[serde(deserialize_with = "lenient::number")]
    pub filler_ratio: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub pause_ratio: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub num_pauses: u32,
    #[serde(deserialize_with = "lenient::number")]
    pub avg_pause_duration: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub detailed_metrics: WordMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordMetrics {
    #[serde(deserialize_with = "lenient::count")]
    pub total_words: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub meaningful_words: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub unique_words: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub unique_meaningful_words: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub filler_words_detected: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub stopword_filtered: bool,
}

/// Analysis features the upstream pipeline reports as active for a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementsApplied {
    #[serde(deserialize_with = "lenient::or_default")]
    pub no_fake_metrics: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub stopword_filtering: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub quality_weighted_emotions: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub bert_coherence: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub content_similarity_matching: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub filler_word_detection: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub grammar_error_count: bool,
}

/// Categorical fluency grade assigned by the speech analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FluencyLevel {
    Excellent,
    Fluent,
    Moderate,
    NeedsImprovement,
    #[default]
    NoData,
}

impl FluencyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Fluent => "Fluent",
            Self::Moderate => "Moderate",
            Self::NeedsImprovement => "Needs Improvement",
            Self::NoData => "No Data",
        }
    }
}

impl From<String> for FluencyLevel {
    fn from(value: String) -> Self {
        match value.trim() {
            "Excellent" => Self::Excellent,
            "Fluent" => Self::Fluent,
            "Moderate" => Self::Moderate,
            "" | "No Data" | "N/A" => Self::NoData,
            _ => Self::NeedsImprovement,
        }
    }
}

impl From<FluencyLevel> for String {
    fn from(value: FluencyLevel) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

impl SessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
        }
    }
}

/// Explicit interview context replacing page-level globals: one candidate, one run through the
/// question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub guidelines_accepted: bool,
    pub total_questions: usize,
    pub status: SessionStatus,
    pub results: Vec<QuestionResult>,
}

impl InterviewSession {
    /// Zero-based index of the next question awaiting an answer.
    pub fn next_question_index(&self) -> Option<usize> {
        (self.results.len() < self.total_questions).then_some(self.results.len())
    }
}

mod lenient {
    use super::HireTier;
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub(super) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    pub(super) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(as_number(&value).unwrap_or_default())
    }

    pub(super) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        // Float to int `as` truncates and saturates, so negatives land on zero.
        Ok(as_number(&value).unwrap_or_default() as u32)
    }

    /// Labels this engine does not produce decode as undecided.
    pub(super) fn hire_tier<'de, D>(deserializer: D) -> Result<Option<HireTier>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }

    fn as_number(value: &Value) -> Option<f64> {
        let number = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        number.filter(|number| number.is_finite())
    }
}
