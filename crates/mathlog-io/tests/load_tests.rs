//! Loading attempt files from disk

use mathlog_io::{load_table, open_file, IoError};
use rstest::rstest;
use std::io::Write;

const HEADER: &str = "student_id,problem,operation,difficulty_level,is_correct,time_spent_seconds,attempts_needed,session_number";

fn write_fixture(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_table_preserves_file_order() {
    let file = write_fixture(
        ".csv",
        &format!(
            "{}\nS003,1 + 1,Addition,Easy,True,2.0,1,3\nS001,2 x 2,Multiplication,Medium,False,9.5,2,1\nS002,8 / 4,Division,Hard,True,30.0,4,2\n",
            HEADER
        ),
    );

    let table = load_table(file.path().to_str().unwrap()).unwrap();
    let ids: Vec<&str> = table.iter().map(|r| r.student_id.as_str()).collect();
    assert_eq!(ids, vec!["S003", "S001", "S002"]);
}

#[test]
fn test_load_tsv() {
    let file = write_fixture(
        ".tsv",
        &format!(
            "{}\nS001\t4 - 1\tSubtraction\tEasy\tFalse\t3.25\t1\t5\n",
            HEADER.replace(',', "\t")
        ),
    );

    let reader = open_file(file.path().to_str().unwrap()).unwrap();
    let table = reader.read_records().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].time_spent_seconds, 3.25);
}

#[test]
fn test_header_only_file_is_empty_table() {
    let file = write_fixture(".csv", &format!("{}\n", HEADER));
    let table = load_table(file.path().to_str().unwrap()).unwrap();
    assert!(table.is_empty());
}

#[rstest]
#[case("S001,1 + 1,Addition,Easy,True,-2.0,1,1")]
#[case("S001,1 + 1,Addition,Easy,True,2.0,0,1")]
#[case("S001,1 + 1,Addition,Easy,True,2.0,1,0")]
#[case("S001,1 + 1,Addition,Easy,Perhaps,2.0,1,1")]
#[case("S001,1 + 1,Addition,Trivial,True,2.0,1,1")]
#[case("S001,1 + 1,Addition,Easy,True,fast,1,1")]
fn test_malformed_rows_abort_load(#[case] row: &str) {
    let file = write_fixture(".csv", &format!("{}\n{}\n", HEADER, row));
    let err = load_table(file.path().to_str().unwrap()).unwrap_err();
    assert!(
        matches!(err, IoError::InvalidRecord { line: 2, .. }),
        "unexpected error for row {:?}: {:?}",
        row,
        err
    );
}

#[test]
fn test_missing_file_is_fatal() {
    let err = load_table("/no/such/math_practice_data.csv").unwrap_err();
    assert!(matches!(err, IoError::FileNotFound(_)));
}
