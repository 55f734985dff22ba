use super::super::domain::FluencyLevel;
use super::super::evaluation::HireTier;
use serde::Serialize;

/// Overall candidate tier derived from the proportional score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Disqualified,
    Exceptional,
    Strong,
    Moderate,
    Weak,
    NotRecommended,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Disqualified => "Disqualified",
            Self::Exceptional => "Exceptional Candidate",
            Self::Strong => "Strong Candidate",
            Self::Moderate => "Moderate Candidate",
            Self::Weak => "Weak Candidate",
            Self::NotRecommended => "Not Recommended",
        }
    }

    pub const fn detail(self) -> &'static str {
        match self {
            Self::Disqualified => "Candidate showed pattern of policy violations during interview",
            Self::Exceptional => "Outstanding communication, fluency, and technical competence",
            Self::Strong => "Excellent communication skills with minor areas for growth",
            Self::Moderate => "Good potential with notable room for improvement",
            Self::Weak => "Below expectations in multiple areas",
            Self::NotRecommended => "Substantial improvement needed across all metrics",
        }
    }
}

/// Weighted inputs of the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightedComponent {
    Confidence,
    Accuracy,
    Fluency,
    Grammar,
    Vocabulary,
    Coherence,
    Fillers,
}

impl WeightedComponent {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Confidence,
            Self::Accuracy,
            Self::Fluency,
            Self::Grammar,
            Self::Vocabulary,
            Self::Coherence,
            Self::Fillers,
        ]
    }

    pub const fn weight(self) -> f64 {
        match self {
            Self::Confidence => 0.20,
            Self::Accuracy => 0.25,
            Self::Fluency => 0.25,
            Self::Grammar => 0.10,
            Self::Vocabulary => 0.10,
            Self::Coherence => 0.07,
            Self::Fillers => 0.03,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Confidence => "Confidence",
            Self::Accuracy => "Accuracy",
            Self::Fluency => "Fluency",
            Self::Grammar => "Grammar",
            Self::Vocabulary => "Vocabulary",
            Self::Coherence => "Coherence",
            Self::Fillers => "Fillers",
        }
    }

    /// Weight rendered the way the export and dashboard print it, e.g. `"25%"`.
    pub fn weight_label(self) -> String {
        format!("{:.0}%", self.weight() * 100.0)
    }
}

/// Mean of each measured signal over the results that carried valid data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentAverages {
    pub confidence: f64,
    pub accuracy: f64,
    pub fluency: f64,
    pub grammar: f64,
    pub vocabulary: f64,
    pub coherence: f64,
    pub filler_count: f64,
    pub words_per_minute: f64,
    pub speech_rate_normalized: f64,
    pub pause_ratio: f64,
}

impl ComponentAverages {
    /// Value fed into the weighted sum for a component. Fillers are inverted and left unclamped,
    /// so an average above ten fillers yields a negative input.
    pub fn input_for(&self, component: WeightedComponent) -> f64 {
        match component {
            WeightedComponent::Confidence => self.confidence,
            WeightedComponent::Accuracy => self.accuracy,
            WeightedComponent::Fluency => self.fluency,
            WeightedComponent::Grammar => self.grammar,
            WeightedComponent::Vocabulary => self.vocabulary,
            WeightedComponent::Coherence => self.coherence,
            WeightedComponent::Fillers => 100.0 - self.filler_count * 10.0,
        }
    }
}

/// Proportional candidate score over a full interview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateScore {
    pub questions_answered: usize,
    pub total_questions: usize,
    pub max_possible_score: f64,
    pub averages: ComponentAverages,
    pub raw_score: f64,
    pub capped_score: f64,
    pub total_violations: usize,
    pub violation_penalty: f64,
    pub final_score: f64,
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentContributionEntry {
    pub component: WeightedComponent,
    pub component_label: &'static str,
    pub weight: String,
    pub average: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionSummaryEntry {
    pub question_number: usize,
    pub question: String,
    pub decision: HireTier,
    pub decision_label: &'static str,
    pub fluency_level: FluencyLevel,
    pub violation_count: usize,
    pub status_label: String,
    pub has_valid_data: bool,
}

/// Dashboard projection over every result of an interview.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewReport {
    pub questions_answered: usize,
    pub total_questions: usize,
    pub max_possible_score: f64,
    pub total_violations: usize,
    pub questions_with_violations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<AggregateScore>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<ComponentContributionEntry>,
    pub questions: Vec<QuestionSummaryEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}
