//! Scenario tests driving a session through whole games.

use tic_tac_toe_classic::game_session::LINES;
use tic_tac_toe_classic::{GameSession, Mark, Outcome};

fn play_all(session: &mut GameSession, cells: &[usize]) {
    for &cell in cells {
        assert_eq!(session.play(cell), Ok(true), "cell {cell} should be accepted");
    }
}

fn contains_line(cells: &[usize]) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|index| cells.contains(index)))
}

/// First `count` cells off `line` that do not themselves complete a line.
fn filler(line: [usize; 3], count: usize) -> Vec<usize> {
    let free: Vec<usize> = (0..9).filter(|i| !line.contains(i)).collect();
    let mut picks = Vec::new();
    for &cell in &free {
        picks.push(cell);
        if contains_line(&picks) {
            picks.pop();
        }
        if picks.len() == count {
            break;
        }
    }
    assert_eq!(picks.len(), count);
    picks
}

/// Interleaves the winner's cells with the loser's so that turns alternate
/// starting from X.
fn winning_sequence(line: [usize; 3], winner: Mark) -> Vec<usize> {
    match winner {
        Mark::X => {
            let other = filler(line, 2);
            vec![line[0], other[0], line[1], other[1], line[2]]
        }
        Mark::O => {
            let other = filler(line, 3);
            vec![other[0], line[0], other[1], line[1], other[2], line[2]]
        }
    }
}

#[test]
fn every_line_wins_for_either_mark() {
    for line in LINES {
        for winner in [Mark::X, Mark::O] {
            let mut session = GameSession::new();
            let moves = winning_sequence(line, winner);
            let (last, rest) = moves.split_last().unwrap();

            play_all(&mut session, rest);
            assert_eq!(session.outcome(), Outcome::InProgress, "{line:?} {winner}");

            play_all(&mut session, &[*last]);
            assert_eq!(session.outcome(), Outcome::Win(winner), "{line:?} {winner}");
        }
    }
}

#[test]
fn top_row_scenario() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(session.outcome(), Outcome::Win(Mark::X));
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    // X O X
    // X O O
    // O X X
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(session.board().iter().all(Option::is_some));
    assert_eq!(session.outcome(), Outcome::Draw);
}

#[test]
fn last_cell_win_is_not_a_draw() {
    // X O X
    // O X O
    // O X X  <- X completes the diagonal with the ninth mark
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 1, 2, 3, 4, 5, 7, 6]);
    assert_eq!(session.outcome(), Outcome::InProgress);

    play_all(&mut session, &[8]);
    assert!(session.board().iter().all(Option::is_some));
    assert_eq!(session.outcome(), Outcome::Win(Mark::X));
}

#[test]
fn replaying_a_taken_cell_keeps_the_turn() {
    let mut session = GameSession::new();
    play_all(&mut session, &[5]);

    assert_eq!(session.play(5), Ok(false));
    assert_eq!(session.board()[5], Some(Mark::X));
    assert_eq!(session.turn(), Mark::O);
}

#[test]
fn nothing_changes_after_a_draw() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = session.clone();

    for cell in 0..9 {
        assert_eq!(session.play(cell), Ok(false));
    }
    assert_eq!(session, before);
}

#[test]
fn reset_mid_game_starts_over() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4, 0]);
    session.reset();

    assert_eq!(session.turn(), Mark::X);
    assert_eq!(session.outcome(), Outcome::InProgress);
    play_all(&mut session, &[0]);
    assert_eq!(session.board()[0], Some(Mark::X));
}
