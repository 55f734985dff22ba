use interview_ai::workflows::interview::{
    aggregate, export_results_csv_string, EvaluationConfig, FluencyLevel, HireEngine, HireTier,
    InterviewReport, Recommendation, ResultsImporter,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/interview_results.json");

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn pipeline_results_are_decided_per_question() {
    let mut results = ResultsImporter::from_path(FIXTURE).expect("fixture imports");
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].fluency_level, FluencyLevel::NoData);
    assert!(!results[1].improvements_applied.no_fake_metrics);

    let engine = HireEngine::new(EvaluationConfig::default());
    let tiers: Vec<HireTier> = results
        .iter_mut()
        .map(|result| engine.attach(result).tier)
        .collect();

    assert_eq!(
        tiers,
        vec![
            HireTier::StrongHire,
            HireTier::WeakMaybe,
            HireTier::NoValidResponse
        ]
    );
    assert!(results[1]
        .hire_reasons
        .contains(&"Speaking too fast (188 WPM - may indicate nervousness)".to_string()));
    assert!(results[1]
        .hire_reasons
        .contains(&"High nervousness (48.0%)".to_string()));
    assert_eq!(results[2].hire_reasons.len(), 2);
}

#[test]
fn partial_interview_is_scored_proportionally() {
    let results = ResultsImporter::from_path(FIXTURE).expect("fixture imports");

    let score = aggregate(&results, 3).expect("two valid answers");

    assert_eq!(score.questions_answered, 2);
    assert_close(score.max_possible_score, 200.0 / 3.0);
    assert_close(score.averages.confidence, 66.5);
    assert_close(score.averages.filler_count, 4.0);
    assert_close(score.raw_score, 71.554);
    assert_close(score.capped_score, 71.554 * 2.0 / 3.0);
    assert_eq!(score.total_violations, 1);
    assert_close(score.final_score, 71.554 * 2.0 / 3.0 - 5.0);
    assert_eq!(score.recommendation, Recommendation::Moderate);
}

#[test]
fn report_and_export_agree_on_the_final_score() {
    let results = ResultsImporter::from_path(FIXTURE).expect("fixture imports");
    let config = EvaluationConfig::default();

    let report = InterviewReport::build(&results, &config);
    let final_score = report
        .score
        .as_ref()
        .map(|score| score.final_score)
        .expect("score present");
    assert_eq!(report.questions_with_violations, 1);
    assert!(report
        .observations
        .iter()
        .any(|observation| observation.starts_with("Moderate Candidate")));

    let csv = export_results_csv_string(&results, &config).expect("export succeeds");
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().expect("headers").clone();
    let score_column = headers
        .iter()
        .position(|header| header == "Overall_Final_Score")
        .expect("score column");

    let mut rows = 0;
    for record in reader.records() {
        let record = record.expect("row parses");
        let exported: f64 = record[score_column].parse().expect("numeric score");
        assert_close(exported, final_score);
        rows += 1;
    }
    assert_eq!(rows, 3);
}
