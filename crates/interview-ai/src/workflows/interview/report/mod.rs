mod insights;
mod summary;
pub mod views;

pub use summary::{aggregate, aggregate_with};
pub use views::{
    AggregateScore, ComponentAverages, ComponentContributionEntry, InterviewReport,
    QuestionSummaryEntry, Recommendation, WeightedComponent,
};

pub(crate) use insights::generate_observations;
pub(crate) use summary::max_possible_score;
