use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use grade_horaria::codec::{CodecError, decode, encode, try_decode};
use grade_horaria::models::{Course, TimeBlock};
use grade_horaria::translator::translate;

fn sample_schedule() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            code: "CIC0004".to_string(),
            name: "Algoritmos e Programação de Computadores".to_string(),
            color: "#4caf50".to_string(),
            blocks: translate("2N12 4N12", "1"),
        },
        Course {
            id: "2".to_string(),
            code: "MAT0025".to_string(),
            name: "Cálculo 1 — turma ç, ã, 日本語, 🎓".to_string(),
            color: "#f44336".to_string(),
            blocks: vec![TimeBlock {
                id: "b".to_string(),
                course_id: "2".to_string(),
                weekday: 0,
                start_time: "08:00".to_string(),
                end_time: "10:00".to_string(),
            }],
        },
    ]
}

fn is_url_safe(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[test]
fn test_round_trip() {
    let schedule = sample_schedule();
    let token = encode(&schedule).expect("encodes");

    assert!(is_url_safe(&token), "{}", token);
    assert_eq!(decode(&token), schedule);
}

#[test]
fn test_round_trip_empty_schedule() {
    let token = encode(&[]).expect("encodes");

    assert!(!token.is_empty());
    assert_eq!(decode(&token), Vec::<Course>::new());
}

#[test]
fn test_round_trip_course_without_blocks() {
    let schedule = vec![Course {
        id: "x".to_string(),
        code: "FIS0001".to_string(),
        name: "Física 1".to_string(),
        color: "#000000".to_string(),
        blocks: Vec::new(),
    }];

    assert_eq!(decode(&encode(&schedule).expect("encodes")), schedule);
}

#[test]
fn test_compresses_repetitive_schedules() {
    let schedule: Vec<Course> = (0..20)
        .map(|i| Course {
            id: i.to_string(),
            code: format!("CIC{:04}", i),
            name: "Estruturas de Dados".to_string(),
            color: "#2196f3".to_string(),
            blocks: translate("2M12 4M12", &i.to_string()),
        })
        .collect();

    let json_len = serde_json::to_string(&schedule).expect("json").len();
    let token = encode(&schedule).expect("encodes");

    assert!(token.len() < json_len, "{} >= {}", token.len(), json_len);
}

#[test]
fn test_decode_garbage_is_empty() {
    assert!(decode("").is_empty());
    assert!(decode("not-valid-encoded-data").is_empty());
    assert!(decode("%%%").is_empty());
    assert!(decode("AAAA").is_empty());
}

#[test]
fn test_try_decode_reports_stage() {
    assert!(matches!(try_decode(""), Err(CodecError::Empty)));
    assert!(matches!(try_decode("***"), Err(CodecError::Base64(_))));
}

#[test]
fn test_decode_rejects_non_sequence_top_level() {
    let object = encode_raw(br#"{"id":"1"}"#);
    let number = encode_raw(b"42");

    assert!(matches!(try_decode(&object), Err(CodecError::Json(_))));
    assert!(decode(&number).is_empty());
}

#[test]
fn test_decode_tolerates_surrounding_whitespace() {
    let schedule = sample_schedule();
    let token = encode(&schedule).expect("encodes");

    assert_eq!(decode(&format!("  {}\n", token)), schedule);
}

fn encode_raw(json: &[u8]) -> String {
    use std::io::Write;

    let mut encoder = flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(json).expect("write");
    URL_SAFE_NO_PAD.encode(encoder.finish().expect("finish"))
}
