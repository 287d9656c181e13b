use grade_horaria::grid::{
    GridError, RowSpan, TOTAL_ROWS, conflicts, hour_rows, layout, place, position_of, span_of,
};
use grade_horaria::models::{Course, TimeBlock};
use grade_horaria::translator::translate;

fn block(id: &str, weekday: u8, start: &str, end: &str) -> TimeBlock {
    TimeBlock {
        id: id.to_string(),
        course_id: "c1".to_string(),
        weekday,
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn course(blocks: Vec<TimeBlock>) -> Course {
    Course {
        id: "c1".to_string(),
        code: "MAT0025".to_string(),
        name: "Cálculo 1".to_string(),
        color: "#2196f3".to_string(),
        blocks,
    }
}

#[test]
fn test_position_of_known_times() {
    assert_eq!(position_of("06:00"), Ok(0));
    assert_eq!(position_of("06:05"), Ok(1));
    assert_eq!(position_of("06:09"), Ok(1));
    assert_eq!(position_of("11:50"), Ok(70));
    assert_eq!(position_of("18:50"), Ok(154));
    assert_eq!(position_of("23:00"), Ok(TOTAL_ROWS));
    assert_eq!(TOTAL_ROWS, 204);
}

#[test]
fn test_position_of_rejects_out_of_range() {
    assert_eq!(position_of("05:55"), Err(GridError::OutOfRange("05:55".to_string())));
    assert_eq!(position_of("23:05"), Err(GridError::OutOfRange("23:05".to_string())));
    assert_eq!(position_of("24:00"), Err(GridError::OutOfRange("24:00".to_string())));
}

#[test]
fn test_position_of_rejects_malformed() {
    for bad in ["", "ab:cd", "0800", "08:", "08:60", "-1:00", "+7:00", "07:+5"] {
        assert_eq!(position_of(bad), Err(GridError::Malformed(bad.to_string())), "{}", bad);
    }
}

#[test]
fn test_span_of_fifty_minute_slot() {
    let span = span_of(&block("b", 1, "08:00", "08:50")).expect("valid span");

    assert_eq!(span, RowSpan { start: 24, end: 34 });
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_of_degenerate_block() {
    assert_eq!(
        span_of(&block("b", 1, "10:00", "10:00")),
        Err(GridError::EmptySpan("b".to_string()))
    );
    assert_eq!(
        span_of(&block("b", 1, "10:00", "09:00")),
        Err(GridError::EmptySpan("b".to_string()))
    );
}

#[test]
fn test_every_slot_in_the_table_has_positive_span() {
    for b in translate("2M123456 2T123456 2N123456", "c") {
        let span = span_of(&b).expect("slot table spans are valid");
        assert!(span.len() >= 10, "{} - {}", b.start_time, b.end_time);
    }
}

#[test]
fn test_place_offsets_for_header_and_gutter() {
    let c = course(vec![block("b1", 1, "18:00", "18:50")]);
    let placement = place(&c, &c.blocks[0]).expect("placeable");

    assert_eq!(placement.column, 3);
    assert_eq!(placement.row, 146);
    assert_eq!(placement.row_span, 10);
    assert_eq!(placement.code, "MAT0025");
    assert_eq!(placement.time_range, "18:00 - 18:50");
}

#[test]
fn test_place_rejects_unknown_weekday() {
    let c = course(vec![block("b1", 9, "08:00", "09:00")]);

    assert_eq!(place(&c, &c.blocks[0]), Err(GridError::Weekday(9)));
}

#[test]
fn test_layout_skips_degenerate_blocks() {
    let c = course(vec![
        block("ok", 2, "08:00", "09:40"),
        block("empty", 2, "10:00", "10:00"),
        block("early", 2, "05:00", "06:00"),
    ]);

    let out = layout(&[c]);

    assert_eq!(out.placements.len(), 1);
    assert_eq!(out.placements[0].block_id, "ok");
    assert_eq!(out.placements[0].row_span, 20);
    assert_eq!(out.skipped, vec!["empty".to_string(), "early".to_string()]);
}

#[test]
fn test_conflicts_same_day_overlap_only() {
    let c = course(vec![
        block("a", 1, "08:00", "09:40"),
        block("b", 1, "09:00", "10:00"),
        block("c", 1, "09:40", "10:30"),
        block("d", 2, "08:00", "09:40"),
    ]);

    let found = conflicts(&[c]);

    let pairs: Vec<(&str, &str)> = found
        .iter()
        .map(|c| (c.first.as_str(), c.second.as_str()))
        .collect();
    assert_eq!(pairs, vec![("a", "b"), ("b", "c")]);
    assert!(found.iter().all(|c| c.weekday == 1));
}

#[test]
fn test_back_to_back_evening_slots_do_not_conflict() {
    let blocks = translate("3N123456", "c1");
    let c = course(blocks);

    assert!(conflicts(&[c]).is_empty());
}

#[test]
fn test_hour_rows() {
    let rows = hour_rows();

    assert_eq!(rows.len(), 17);
    assert_eq!(rows[0].label, "6:00");
    assert_eq!(rows[0].row, 2);
    assert_eq!(rows[16].label, "22:00");
    assert_eq!(rows[16].row, 16 * 12 + 2);
    assert!(rows.iter().all(|r| r.span == 12));
}
