use rstest::rstest;
use xsvkit::{parse_with_header, rows, rows_with_header, Delimiter};

const PLACES: &str = "id,name,place\n10,Bob,State of Connecticut\n100,Michael,\"Manhattan Borough\nNew York County\"";

#[test]
fn header_projection_keys_rows_by_column_name() {
    let maps = rows_with_header(PLACES, Delimiter::Comma);
    assert_eq!(maps.len(), 2);
    assert_eq!(maps[0].get("id").map(String::as_str), Some("10"));
    assert_eq!(maps[0].get("name").map(String::as_str), Some("Bob"));
    assert_eq!(
        maps[0].get("place").map(String::as_str),
        Some("State of Connecticut")
    );
    assert_eq!(
        maps[1].get("place").map(String::as_str),
        Some("Manhattan Borough\nNew York County")
    );
}

#[test]
fn header_row_is_consumed_once() {
    let headered = parse_with_header(PLACES, Delimiter::Comma);
    assert_eq!(headered.header(), ["id", "name", "place"]);
    assert_eq!(headered.rows().len(), 2);
}

#[rstest]
#[case("a,b,c\n1,2", &[("a", "1"), ("b", "2")])]
#[case("a,b\n1,2,3", &[("a", "1"), ("b", "2")])]
#[case("a,b\n1", &[("a", "1")])]
fn projection_zips_positionally(#[case] text: &str, #[case] expected: &[(&str, &str)]) {
    let maps = rows_with_header(text, Delimiter::Comma);
    let entries: Vec<(&str, &str)> = maps[0]
        .iter()
        .map(|(name, cell)| (name.as_str(), cell.as_str()))
        .collect();
    assert_eq!(entries, expected);
}

#[test]
fn short_row_omits_trailing_keys_instead_of_empty_values() {
    let maps = rows_with_header("id,name,place\n10,Bob", Delimiter::Comma);
    assert!(!maps[0].contains_key("place"));
    assert_eq!(maps[0].len(), 2);
}

#[test]
fn duplicate_header_name_last_wins() {
    let maps = rows_with_header("id,id\n1,2", Delimiter::Comma);
    assert_eq!(maps[0].len(), 1);
    assert_eq!(maps[0].get("id").map(String::as_str), Some("2"));
}

#[test]
fn skip_header_mode_returns_raw_rows_from_index_one() {
    let stripped = rows(PLACES, Delimiter::Comma, true);
    assert_eq!(stripped.len(), 2);
    assert_eq!(stripped[0], vec!["10", "Bob", "State of Connecticut"]);
    assert_eq!(
        stripped[1],
        vec!["100", "Michael", "Manhattan Borough\nNew York County"]
    );

    let retained = rows(PLACES, Delimiter::Comma, false);
    assert_eq!(retained.len(), 3);
    assert_eq!(retained[0], vec!["id", "name", "place"]);
}

#[test]
fn empty_input_yields_no_header_and_no_rows() {
    let headered = parse_with_header("", Delimiter::Comma);
    assert!(headered.header().is_empty());
    assert!(headered.is_empty());
    assert!(rows_with_header("", Delimiter::Comma).is_empty());
}

#[test]
fn header_only_input_yields_no_data_rows() {
    assert!(rows_with_header("id,name", Delimiter::Comma).is_empty());
    assert!(rows("id,name", Delimiter::Comma, true).is_empty());
}
