//! Headless game loop between two players.
//!
//! The [`Orchestrator`] owns the [`Game`] and both [`Player`]s and drives
//! the turn cycle:
//!
//! ```text
//! [Request Move] -> [Player provides move] -> [Execute Move]
//!   -> [Notify opponent] -> [Check End] -> [Request Move] ...
//! ```
//!
//! A player that returns no move, or a move the game rejects, loses.
//! Reaching the ply cap ends the game as a draw.

use crate::agent::player::{GameResult, Player};
use crate::game::Game;
use crate::game_repr::{Color, Position};

/// Default ply cap for [`Orchestrator::new`]
pub const DEFAULT_MAX_PLIES: usize = 400;

pub struct Orchestrator {
    game: Game,

    /// (white, black)
    players: (Box<dyn Player>, Box<dyn Player>),

    /// The game is drawn after this many plies
    max_plies: usize,

    /// Set once the game has ended
    result: Option<GameResult>,
}

impl Orchestrator {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self::from_position(Position::starting(), white, black)
    }

    pub fn from_position(position: Position, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            game: Game::from_position(position),
            players: (white, black),
            max_plies: DEFAULT_MAX_PLIES,
            result: None,
        }
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn player_mut(&mut self, color: Color) -> &mut dyn Player {
        match color {
            Color::White => self.players.0.as_mut(),
            Color::Black => self.players.1.as_mut(),
        }
    }

    /// Play one ply. Returns the result once the game is over.
    pub fn step(&mut self) -> Option<GameResult> {
        if self.result.is_some() {
            return self.result;
        }
        if let Some(result) = self.check_game_end() {
            return Some(self.handle_game_end(result));
        }

        let side = self.game.side_to_move();
        let player = match side {
            Color::White => self.players.0.as_mut(),
            Color::Black => self.players.1.as_mut(),
        };
        let Some(mv) = player.get_move(&self.game) else {
            log::info!("{:?} has no move to offer and resigns", side);
            return Some(self.handle_game_end(GameResult::from_winner(side.opposite())));
        };

        if !self.game.make_move(&mv) {
            log::warn!("{:?} played illegal move {} and forfeits", side, mv);
            return Some(self.handle_game_end(GameResult::from_winner(side.opposite())));
        }
        log::debug!("ply {}: {:?} {}", self.game.ply_count(), side, mv);

        self.player_mut(side.opposite()).opponent_moved(&mv);

        self.check_game_end().map(|result| self.handle_game_end(result))
    }

    /// Play until the game ends
    pub fn play(&mut self) -> GameResult {
        loop {
            if let Some(result) = self.step() {
                return result;
            }
        }
    }

    fn check_game_end(&self) -> Option<GameResult> {
        let status = self.game.status();
        if let Some(result) = GameResult::from_status(status) {
            log::info!("game over after {} plies: {:?}", self.game.ply_count(), status);
            return Some(result);
        }

        if self.game.ply_count() >= self.max_plies {
            log::info!("ply cap of {} reached, game drawn", self.max_plies);
            return Some(GameResult::Draw);
        }

        None
    }

    fn handle_game_end(&mut self, result: GameResult) -> GameResult {
        self.result = Some(result);
        self.players.0.game_ended(result);
        self.players.1.game_ended(result);
        result
    }
}

/// Play a full game from the starting position
pub fn play_game(white: Box<dyn Player>, black: Box<dyn Player>, max_plies: usize) -> GameResult {
    Orchestrator::new(white, black).with_max_plies(max_plies).play()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Move, Piece, Square};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Plays the first legal move
    struct FirstMove;

    impl Player for FirstMove {
        fn get_move(&mut self, game: &Game) -> Option<Move> {
            game.legal_moves().first().cloned()
        }
    }

    /// Always offers a move that is never legal
    struct Cheater;

    impl Player for Cheater {
        fn get_move(&mut self, _game: &Game) -> Option<Move> {
            Some(Move::new(Square::new(0, 1), Square::new(9, 0)))
        }
    }

    struct Resigner;

    /// Plays the first legal move and counts the replies it is told about
    struct Listener {
        heard: Rc<Cell<usize>>,
    }

    impl Player for Listener {
        fn get_move(&mut self, game: &Game) -> Option<Move> {
            game.legal_moves().first().cloned()
        }

        fn opponent_moved(&mut self, _mv: &Move) {
            self.heard.set(self.heard.get() + 1);
        }
    }

    impl Player for Resigner {
        fn get_move(&mut self, _game: &Game) -> Option<Move> {
            None
        }
    }

    #[test]
    fn test_ply_cap_draws() {
        let mut orchestrator =
            Orchestrator::new(Box::new(FirstMove), Box::new(FirstMove)).with_max_plies(6);

        assert_eq!(orchestrator.play(), GameResult::Draw);
        assert_eq!(orchestrator.game().ply_count(), 6);
    }

    #[test]
    fn test_illegal_move_forfeits() {
        assert_eq!(
            play_game(Box::new(FirstMove), Box::new(Cheater), 100),
            GameResult::WhiteWins
        );
    }

    #[test]
    fn test_resignation() {
        assert_eq!(
            play_game(Box::new(Resigner), Box::new(FirstMove), 100),
            GameResult::BlackWins
        );
    }

    #[test]
    fn test_last_capture_wins() {
        let mut pos = Position::empty(Color::White);
        pos.set_piece(Square::new(6, 3), Piece::WhiteMan);
        pos.set_piece(Square::new(5, 4), Piece::BlackMan);

        let mut orchestrator =
            Orchestrator::from_position(pos, Box::new(FirstMove), Box::new(Resigner));

        assert_eq!(orchestrator.step(), Some(GameResult::WhiteWins));
        assert_eq!(orchestrator.result(), Some(GameResult::WhiteWins));
        assert_eq!(orchestrator.step(), Some(GameResult::WhiteWins));
    }

    #[test]
    fn test_each_step_asks_the_side_to_move() {
        let white_heard = Rc::new(Cell::new(0));
        let black_heard = Rc::new(Cell::new(0));
        let white = Listener { heard: Rc::clone(&white_heard) };
        let black = Listener { heard: Rc::clone(&black_heard) };
        let mut orchestrator = Orchestrator::new(Box::new(white), Box::new(black));

        assert_eq!(orchestrator.step(), None);
        assert_eq!(orchestrator.game().side_to_move(), Color::Black);
        assert_eq!(orchestrator.step(), None);
        assert_eq!(orchestrator.step(), None);

        assert_eq!(orchestrator.game().ply_count(), 3);
        assert_eq!(white_heard.get(), 1);
        assert_eq!(black_heard.get(), 2);
    }
}
