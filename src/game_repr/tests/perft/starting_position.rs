use super::*;

// Known node counts for international draughts from the initial position.

#[test]
fn test_perft_starting_position_depth_1() {
    assert_eq!(Position::starting().perft(1), 9);
}

#[test]
fn test_perft_starting_position_depth_2() {
    assert_eq!(Position::starting().perft(2), 81);
}

#[test]
fn test_perft_starting_position_depth_3() {
    assert_eq!(Position::starting().perft(3), 658);
}

#[test]
fn test_perft_starting_position_depth_4() {
    assert_eq!(Position::starting().perft(4), 4265);
}

#[test]
fn test_perft_starting_position_depth_5() {
    assert_eq!(Position::starting().perft(5), 27117);
}

#[test]
fn test_perft_parallel_matches_serial() {
    let pos = Position::starting();
    assert_eq!(pos.perft_parallel(4), pos.perft(4));
}

#[test]
fn test_perft_divide_sums_to_total() {
    let pos = Position::starting();
    let divide = pos.perft_divide(3);

    assert_eq!(divide.len(), 9);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 658);
}
