use cfml_format::{dumps, load, DateBlock, FormatError, Message};

const SAMPLE: &str = "#$* date -* 2024-01-01 *- #$*\n@# 09:00:00 #@ $# Bob #$ *# Alice #* content -*&^# hello #^&*-\n*$# end *$#";

fn two_day_log() -> String {
    [
        "#$* date -* 2024-01-01 *- #$*",
        "@# 09:00:00 #@ $# Bob #$ *# Alice #* content -*&^# hello #^&*-",
        "@# 09:01:30 #@ $# Alice #$ *# Bob #* content -*&^# hi, Alice! #^&*-",
        "*$# end *$#",
        "#$* date -* 2024-01-02 *- #$*",
        "@# 18:45:00 #@ $# Carol #$ *# Alice #* content -*&^# dinner at 8? #^&*-",
        "*$# end *$#",
    ]
    .join("\n")
}

#[test]
fn test_sample_parses_and_dumps_byte_identical() {
    let blocks = load(SAMPLE).unwrap();
    assert_eq!(
        blocks,
        vec![DateBlock {
            date: "2024-01-01".to_string(),
            messages: vec![Message {
                time: "09:00:00".to_string(),
                receiver: "Bob".to_string(),
                sender: "Alice".to_string(),
                content: "hello".to_string(),
            }],
        }]
    );
    assert_eq!(dumps(&blocks), SAMPLE);
}

#[test]
fn test_sample_without_end_marker_is_unterminated() {
    let text = SAMPLE.strip_suffix("\n*$# end *$#").unwrap();
    match load(text) {
        Err(FormatError::UnterminatedBlock { date }) => assert_eq!(date, "2024-01-01"),
        other => panic!("Expected UnterminatedBlock, got {:?}", other),
    }
}

#[test]
fn test_multi_block_file() {
    let text = two_day_log();
    let blocks = load(&text).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].messages.len(), 2);
    assert_eq!(blocks[0].messages[1].content, "hi, Alice!");
    assert_eq!(blocks[1].messages[0].receiver, "Carol");
    assert_eq!(dumps(&blocks), text);
}

#[test]
fn test_round_trip_is_semantic() {
    let messy = format!("\n\n   {}\n\n", two_day_log().replace('\n', "\r\n   \r\n"));
    let first = load(&messy).unwrap();
    let second = load(&dumps(&first)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dumps_is_idempotent() {
    let blocks = load(&two_day_log()).unwrap();
    assert_eq!(dumps(&blocks), dumps(&blocks));
}

#[test]
fn test_content_may_contain_delimiter_lookalikes() {
    let text = "#$* date -* d *- #$*\n@# 00:00:00 #@ $# r #$ *# s #* content -*&^# a #^&*- b #^&*-\n*$# end *$#";
    let blocks = load(text).unwrap();
    assert_eq!(blocks[0].messages[0].content, "a #^&*- b");
    assert_eq!(dumps(&blocks), text);
}

#[test]
fn test_error_reports_line_number() {
    let text = "#$* date -* d *- #$*\n\n\n*$# end *$#\n*$# end *$#";
    let err = load(text).unwrap_err();
    assert_eq!(err.line_no(), Some(5));
    assert!(err.to_string().starts_with("line 5:"));
}
