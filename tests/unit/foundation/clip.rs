use super::*;

#[test]
fn run_inside_is_unchanged() {
    assert_eq!(clip_run(2, 5, 10), Some((2, 5)));
}

#[test]
fn run_starting_before_zero_is_shortened() {
    assert_eq!(clip_run(-5, 10, 20), Some((0, 5)));
    assert_eq!(clip_run(-5, 5, 20), None);
}

#[test]
fn run_past_the_end_is_truncated() {
    assert_eq!(clip_run(15, 10, 20), Some((15, 5)));
    assert_eq!(clip_run(20, 1, 20), None);
}

#[test]
fn non_positive_lengths_are_rejected() {
    assert_eq!(clip_run(0, 0, 20), None);
    assert_eq!(clip_run(3, -4, 20), None);
}

#[test]
fn extreme_values_do_not_overflow() {
    assert_eq!(clip_run(i32::MAX, i32::MAX, 20), None);
    assert_eq!(clip_run(i32::MIN, i32::MAX, 20), None);
    assert_eq!(clip_run(-1, i32::MAX, 20), Some((0, 20)));
}

#[test]
fn in_range_rejects_negative_and_limit() {
    assert_eq!(in_range(-1, 4), None);
    assert_eq!(in_range(4, 4), None);
    assert_eq!(in_range(3, 4), Some(3));
}

#[test]
fn round_up_to_alignment() {
    assert_eq!(round_up(0, 8), 0);
    assert_eq!(round_up(1, 8), 8);
    assert_eq!(round_up(8, 8), 8);
    assert_eq!(round_up(13, 4), 16);
    assert_eq!(round_up(13, 1), 13);
}
