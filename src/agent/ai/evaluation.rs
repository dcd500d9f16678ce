// Position evaluation function
// Returns score in centipawns (positive = good for side to move)

use crate::game_repr::{Color, Piece, Position, Square, DIRECTIONS};

// Material values in centipawns
const MAN_VALUE: i32 = 100;
const KING_VALUE: i32 = 450;

// Endgame amplification: material counts for more once fewer than
// AMPLIFY_BELOW pieces remain, AMPLIFY_STEP per missing piece.
const AMPLIFY_BELOW: usize = 15;
const AMPLIFY_STEP: f64 = 0.05;

// Phase runs from 0.0 at PHASE_FLOOR pieces to 1.0 at PHASE_FLOOR + PHASE_SPAN.
const PHASE_FLOOR: f64 = 6.0;
const PHASE_SPAN: f64 = 24.0;

/// Tapered evaluation score with middlegame and endgame components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaperedScore {
    pub mg: i32, // Middlegame score
    pub eg: i32, // Endgame score
}

impl TaperedScore {
    pub const fn new(mg: i32, eg: i32) -> Self {
        Self { mg, eg }
    }

    /// Blend middlegame and endgame scores.
    /// phase: 0.0 (endgame) to 1.0 (opening)
    pub fn blend(&self, phase: f64) -> i32 {
        (self.mg as f64 * phase + self.eg as f64 * (1.0 - phase)).round() as i32
    }

    /// Add another tapered score
    pub fn add(&mut self, other: TaperedScore) {
        self.mg += other.mg;
        self.eg += other.eg;
    }

    /// Subtract another tapered score
    pub fn sub(&mut self, other: TaperedScore) {
        self.mg -= other.mg;
        self.eg -= other.eg;
    }
}

// Structural pattern weights (tapered: mg/eg). Equal at both ends, so the
// pattern term does not move with the phase.
const HANGING_PENALTY: TaperedScore = TaperedScore::new(25, 25);
const TRIO_BONUS: TaperedScore = TaperedScore::new(10, 10);

/// Broad game stage derived from the phase value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    pub fn classify(phase: f64) -> Self {
        if phase >= 0.75 {
            GamePhase::Opening
        } else if phase >= 0.25 {
            GamePhase::Middlegame
        } else {
            GamePhase::Endgame
        }
    }
}

/// Material summary of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationBreakdown {
    /// Centipawn sum of White's men and kings
    pub white_material: i32,
    pub black_material: i32,
    pub white_kings: usize,
    pub black_kings: usize,
    /// White-positive material balance after endgame amplification
    pub balance: i32,
}

fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::WhiteMan | Piece::BlackMan => MAN_VALUE,
        Piece::WhiteKing | Piece::BlackKing => KING_VALUE,
        Piece::Empty => 0,
    }
}

/// Calculate game phase based on remaining pieces
/// Returns value from 0.0 (endgame) to 1.0 (opening)
pub fn game_phase(pos: &Position) -> f64 {
    ((pos.total_pieces() as f64 - PHASE_FLOOR) / PHASE_SPAN).clamp(0.0, 1.0)
}

/// Material multiplier: 1.0 with 15 or more pieces, plus 0.05 for each
/// piece below that.
fn endgame_scale(total: usize) -> f64 {
    if total < AMPLIFY_BELOW {
        1.0 + (AMPLIFY_BELOW - total) as f64 * AMPLIFY_STEP
    } else {
        1.0
    }
}

/// Evaluate material for both sides
pub fn evaluate_material(pos: &Position) -> EvaluationBreakdown {
    let mut breakdown = EvaluationBreakdown::default();

    for &piece in pos.squares.iter() {
        let value = piece_value(piece);
        match piece {
            Piece::WhiteMan => breakdown.white_material += value,
            Piece::WhiteKing => {
                breakdown.white_material += value;
                breakdown.white_kings += 1;
            }
            Piece::BlackMan => breakdown.black_material += value,
            Piece::BlackKing => {
                breakdown.black_material += value;
                breakdown.black_kings += 1;
            }
            Piece::Empty => {}
        }
    }

    let raw = breakdown.white_material - breakdown.black_material;
    breakdown.balance = (raw as f64 * endgame_scale(pos.total_pieces())).round() as i32;
    breakdown
}

/// The two squares diagonally behind `sq` for a piece of `color`.
/// `None` when the row behind is off the board.
fn behind_squares(sq: Square, color: Color) -> Option<[Option<Square>; 2]> {
    let back = -color.forward();
    let row = sq.row as i8 + back;
    if !(0..10).contains(&row) {
        return None;
    }

    let mut squares = [None; 2];
    for (slot, &(dr, dc)) in squares
        .iter_mut()
        .zip(DIRECTIONS.iter().filter(|&&(dr, _)| dr == back))
    {
        *slot = sq.offset((dr, dc), 1);
    }
    Some(squares)
}

/// Evaluate structure for one side: unsupported men are "hanging", men
/// backed on both rear diagonals form a "trio". Kings and men on their own
/// home rank are not scored.
fn evaluate_pattern_for(pos: &Position, color: Color) -> TaperedScore {
    let mut score = TaperedScore::default();

    for sq in pos.squares_of(color) {
        if pos.piece_at(sq).is_king() {
            continue;
        }
        let Some(behind) = behind_squares(sq, color) else {
            continue;
        };

        let supporters = behind
            .iter()
            .flatten()
            .filter(|&&b| pos.piece_at(b).is(color))
            .count();

        if supporters == 0 {
            score.sub(HANGING_PENALTY);
        } else if supporters == 2 {
            score.add(TRIO_BONUS);
        }
    }

    score
}

/// White-positive pattern score, tapered by `phase`.
pub fn evaluate_pattern(pos: &Position, phase: f64) -> i32 {
    let mut score = evaluate_pattern_for(pos, Color::White);
    score.sub(evaluate_pattern_for(pos, Color::Black));
    score.blend(phase)
}

/// Static evaluation from White's point of view
pub fn evaluate_white(pos: &Position) -> i32 {
    let phase = game_phase(pos);
    evaluate_material(pos).balance + evaluate_pattern(pos, phase)
}

/// Main evaluation function
/// Returns score in centipawns from the perspective of the side to move
/// Positive score = good for side to move
pub fn evaluate(pos: &Position) -> i32 {
    let score = evaluate_white(pos);
    match pos.side_to_move {
        Color::White => score,
        Color::Black => -score,
    }
}
