pub(crate) use super::*;

fn sample_frame() -> TextFrame {
    TextFrame::new(vec![
        (
            "title".to_string(),
            vec!["Alpha".to_string(), "Beta".to_string()],
        ),
        (
            "overview".to_string(),
            vec!["space war".to_string(), "ocean calm".to_string()],
        ),
    ])
    .expect("sample columns have equal lengths")
}

#[test]
fn test_new_and_shape() {
    let frame = sample_frame();
    assert_eq!(frame.shape(), (2, 2));
    assert_eq!(frame.n_rows(), 2);
    assert_eq!(frame.n_cols(), 2);
}

#[test]
fn test_column_access() {
    let frame = sample_frame();
    let overview = frame.column("overview").expect("column exists");
    assert_eq!(overview, &["space war".to_string(), "ocean calm".to_string()]);
}

#[test]
fn test_column_names() {
    let frame = sample_frame();
    assert_eq!(frame.column_names(), vec!["title", "overview"]);
}

#[test]
fn test_has_column() {
    let frame = sample_frame();
    assert!(frame.has_column("title"));
    assert!(!frame.has_column("genres"));
}

#[test]
fn test_missing_column_error_names_the_column() {
    let frame = sample_frame();
    let err = frame.column("keywords").expect_err("column is absent");
    assert!(matches!(err, RecomendarError::MissingColumn { ref column } if column == "keywords"));
}

#[test]
fn test_new_rejects_no_columns() {
    assert!(TextFrame::new(Vec::new()).is_err());
}

#[test]
fn test_new_rejects_unequal_lengths() {
    let result = TextFrame::new(vec![
        ("a".to_string(), vec!["x".to_string()]),
        ("b".to_string(), vec!["y".to_string(), "z".to_string()]),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_new_rejects_empty_name() {
    let result = TextFrame::new(vec![(String::new(), vec!["x".to_string()])]);
    assert!(result.is_err());
}

#[test]
fn test_new_rejects_duplicate_names() {
    let result = TextFrame::new(vec![
        ("a".to_string(), vec!["x".to_string()]),
        ("a".to_string(), vec!["y".to_string()]),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_new_allows_zero_rows() {
    let frame = TextFrame::new(vec![("title".to_string(), Vec::new())])
        .expect("zero-row columns are valid");
    assert_eq!(frame.shape(), (0, 1));
}

#[test]
fn test_from_csv_path() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "title,overview,genres").expect("write header");
    writeln!(file, "Alpha,\"space, war\",action").expect("write row");
    writeln!(file, "Beta,ocean calm,drama").expect("write row");
    file.flush().expect("flush");

    let frame = TextFrame::from_csv_path(file.path()).expect("CSV loads");
    assert_eq!(frame.shape(), (2, 3));
    assert_eq!(frame.column("title").expect("column exists")[0], "Alpha");
    // Quoted commas stay inside the field
    assert_eq!(
        frame.column("overview").expect("column exists")[0],
        "space, war"
    );
}

#[test]
fn test_from_csv_path_pads_short_records() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "title,overview,genres").expect("write header");
    writeln!(file, "Gamma,plot only").expect("write short row");
    file.flush().expect("flush");

    let frame = TextFrame::from_csv_path(file.path()).expect("CSV loads");
    assert_eq!(frame.column("genres").expect("column exists")[0], "");
}

#[test]
fn test_from_csv_path_missing_file() {
    let result = TextFrame::from_csv_path("/nonexistent/catalog.csv");
    assert!(matches!(result, Err(RecomendarError::Io(_))));
}
