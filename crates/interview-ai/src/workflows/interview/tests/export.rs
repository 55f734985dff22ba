use chrono::NaiveDate;

use super::common::*;
use crate::workflows::interview::evaluation::HireEngine;
use crate::workflows::interview::export::{export_file_name, export_results_csv_string};

#[test]
fn export_writes_one_row_per_result() {
    let engine = HireEngine::new(evaluation_config());
    let mut decided = with_violations(strong_result(), 1);
    engine.attach(&mut decided);
    let results = vec![decided, unanswered_result()];

    let csv = export_results_csv_string(&results, &evaluation_config()).expect("csv export");
    let mut reader = csv::Reader::from_reader(csv.as_bytes());

    let headers = reader.headers().expect("header row").clone();
    assert_eq!(&headers[0], "Question_Number");
    assert!(headers.iter().any(|header| header == "Speech_Rate_WPM"));
    assert!(headers.iter().any(|header| header == "Overall_Final_Score"));
    assert_eq!(headers.iter().last(), Some("Filler_Word_Detection"));

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows parse");
    assert_eq!(rows.len(), 2);

    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header == name)
            .expect("column present")
    };
    let first = &rows[0];
    assert_eq!(&first[column("Question_Number")], "1");
    assert_eq!(&first[column("Violations_Count")], "1");
    assert_eq!(&first[column("Violation_Penalty_Percent")], "5.0");
    assert_eq!(&first[column("Questions_Answered")], "1");
    assert_eq!(&first[column("Hire_Decision")], "Strong Hire");
    assert_eq!(&first[column("Fluency_Level")], "Fluent");
    assert_eq!(&first[column("Accuracy_Weight")], "25%");
    assert!(first[column("Hire_Reasons")].starts_with("Exceptional candidate"));
    assert_eq!(
        &first[column("Overall_Final_Score")],
        &rows[1][column("Overall_Final_Score")]
    );

    let second = &rows[1];
    assert_eq!(&second[column("Question_Number")], "2");
    assert_eq!(&second[column("Hire_Decision")], "");
    assert_eq!(&second[column("Fluency_Level")], "No Data");
}

#[test]
fn export_without_results_is_empty() {
    let csv = export_results_csv_string(&[], &evaluation_config()).expect("csv export");
    assert!(csv.is_empty());
}

#[test]
fn export_file_name_embeds_the_timestamp() {
    let now = NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 26, 53))
        .expect("valid timestamp");

    assert_eq!(
        export_file_name(now),
        "interview_results_proportional_20250314_092653.csv"
    );
}
