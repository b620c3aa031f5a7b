//! End-to-end pipeline tests: CSV on disk -> fit -> query.

use std::io::Write;

use recomendar::data::TextFrame;
use recomendar::recommend::ContentRecommender;
use recomendar::RecomendarError;

fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write CSV");
    file.flush().expect("flush");
    file
}

#[test]
fn test_csv_to_recommendations() {
    let file = write_catalog(
        "title,overview,genres,keywords\n\
         Star Clash,space war robots,action science,laser battle\n\
         Iron Fleet,space war robots,action science,laser battle\n\
         June Wedding,romantic comedy wedding,romance,love ceremony\n",
    );

    let catalog = TextFrame::from_csv_path(file.path()).expect("catalog loads");
    let mut recommender = ContentRecommender::new();
    recommender.fit(&catalog).expect("fit should succeed");

    let recs = recommender
        .recommend("star clash", 2)
        .expect("title exists");
    assert_eq!(recs.len(), 2);

    assert_eq!(recs[0].0, "Iron Fleet");
    assert!((recs[0].1 - 1.0).abs() < 1e-9);

    assert_eq!(recs[1].0, "June Wedding");
    assert!(recs[1].1.abs() < 1e-9);
}

#[test]
fn test_csv_without_optional_columns() {
    let file = write_catalog(
        "title,overview\n\
         Alpha,deep sea divers\n\
         Beta,deep sea monsters\n\
         Gamma,mountain climbers\n",
    );

    let catalog = TextFrame::from_csv_path(file.path()).expect("catalog loads");
    let mut recommender = ContentRecommender::new();
    recommender.fit(&catalog).expect("fit should succeed");

    let recs = recommender.recommend("Alpha", 2).expect("title exists");
    assert_eq!(recs[0].0, "Beta"); // shares "deep sea"
    assert!(recs[0].1 > recs[1].1);
}

#[test]
fn test_csv_missing_required_column_fails_fit() {
    let file = write_catalog(
        "title,synopsis\n\
         Alpha,deep sea divers\n",
    );

    let catalog = TextFrame::from_csv_path(file.path()).expect("catalog loads");
    let mut recommender = ContentRecommender::new();

    let err = recommender.fit(&catalog).expect_err("overview is required");
    assert!(matches!(err, RecomendarError::MissingColumn { ref column } if column == "overview"));
    assert!(!recommender.is_fitted());
}

#[test]
fn test_empty_cells_load_and_score_zero() {
    let file = write_catalog(
        "title,overview,genres,keywords\n\
         Blank,,the of and,\n\
         Alpha,space war robots,action,laser\n",
    );

    let catalog = TextFrame::from_csv_path(file.path()).expect("catalog loads");
    let mut recommender = ContentRecommender::new();
    recommender.fit(&catalog).expect("fit should succeed");

    // An empty overview plus all-stop-word genres is a zero vector
    let recs = recommender.recommend("Blank", 5).expect("title exists");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].1, 0.0);
}

#[test]
fn test_unknown_title_is_recoverable_per_query() {
    let file = write_catalog(
        "title,overview\n\
         Alpha,deep sea divers\n\
         Beta,deep sea monsters\n",
    );

    let catalog = TextFrame::from_csv_path(file.path()).expect("catalog loads");
    let mut recommender = ContentRecommender::new();
    recommender.fit(&catalog).expect("fit should succeed");

    let err = recommender
        .recommend("Nonexistent Movie XYZ", 3)
        .expect_err("title is absent");
    assert!(matches!(err, RecomendarError::TitleNotFound { .. }));

    // The failed query leaves the engine fully usable
    let recs = recommender.recommend("Alpha", 1).expect("title exists");
    assert_eq!(recs[0].0, "Beta");
}
