use dossier_scoring::scoring::{
    GradeCode, GradeSheetImportError, GradeSheetImporter, ScoringEngine, ScoringError,
    ScoringSession, SessionState, ShapeMismatch,
};

#[test]
fn reference_sheet_imports_and_scores() {
    let data = include_bytes!("fixtures/reference_grades.csv");
    let engine = ScoringEngine::standard();

    let entries = GradeSheetImporter::from_reader(&data[..], &engine).expect("sheet imports");
    assert_eq!(entries.len(), 10);
    assert_eq!(
        entries[8].comment.as_deref(),
        Some("LTV 62 %"),
        "comments carried over"
    );
    assert!(entries[2].comment.is_none());

    let session = ScoringSession::restore(&engine, entries, None).expect("grid restores");
    let scored = session.compute(&engine).expect("complete sheet scores");
    assert_eq!(scored.state(), SessionState::Scored);

    let result = scored.result().expect("result present");
    assert_eq!(result.final_score, 72.5);
    assert_eq!(result.grade, GradeCode::AMinus);
}

#[test]
fn sheet_with_missing_rows_is_rejected() {
    let csv = "Criterion,Grade,Comment\n0,8,\n1,7,\n";
    let engine = ScoringEngine::standard();

    match GradeSheetImporter::from_reader(csv.as_bytes(), &engine) {
        Err(GradeSheetImportError::Scoring(ScoringError::InputShapeMismatch(
            ShapeMismatch::MissingIndex { index: 2 },
        ))) => {}
        other => panic!("expected missing row error, got {other:?}"),
    }
}

#[test]
fn sheet_with_unknown_criterion_is_rejected() {
    let csv = "Criterion,Grade,Comment\n14,8,\n";
    let engine = ScoringEngine::standard();

    assert!(matches!(
        GradeSheetImporter::from_reader(csv.as_bytes(), &engine),
        Err(GradeSheetImportError::Scoring(ScoringError::InputShapeMismatch(
            ShapeMismatch::IndexOutOfRange { index: 14, .. }
        )))
    ));
}

#[test]
fn off_step_grade_is_rejected() {
    let mut csv = String::from("Criterion,Grade,Comment\n");
    for index in 0..10 {
        let grade = if index == 5 { "6.3" } else { "6" };
        csv.push_str(&format!("{index},{grade},\n"));
    }
    let engine = ScoringEngine::standard();

    assert!(matches!(
        GradeSheetImporter::from_reader(csv.as_bytes(), &engine),
        Err(GradeSheetImportError::Scoring(ScoringError::InvalidGrade { .. }))
    ));
}

#[test]
fn blank_grades_import_as_ungraded() {
    let mut csv = String::from("Criterion,Grade,Comment\n");
    for index in 0..10 {
        let grade = if index % 2 == 0 { "7,5" } else { "" };
        csv.push_str(&format!("{index},\"{grade}\",\n"));
    }
    let engine = ScoringEngine::standard();

    let entries =
        GradeSheetImporter::from_reader(csv.as_bytes(), &engine).expect("partial sheet imports");
    let session = ScoringSession::restore(&engine, entries, None).expect("grid restores");

    assert_eq!(session.graded_count(), 5);
    assert_eq!(session.missing_criteria(), vec![1, 3, 5, 7, 9]);
    assert!(matches!(
        session.compute(&engine),
        Err(ScoringError::IncompleteInput { .. })
    ));
}
