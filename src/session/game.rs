//! The match session: turn order, the end-of-turn pipeline, scoring.

use im::Vector;
use smallvec::SmallVec;

use super::policy::{policy_for, Controller, TurnPolicy};
use super::record::{CellChange, MoveRecord, MoveSource, TurnOutcome};
use super::snapshot::{RoundState, Snapshot};
use crate::board::Board;
use crate::core::{ConfigError, GameMode, GameRng, GameRngState, MoveError, SessionConfig, Side, SideMap};
use crate::opponent::{Decision, HeuristicOpponent, OpponentPolicy, Rule};
use crate::rules::{RoundResult, Rules};

/// One match between two sides.
///
/// The session owns the board and is the only thing that mutates it.
/// Every placement runs the end-of-turn pipeline to completion before the
/// call returns:
///
/// 1. count the placement
/// 2. decay every mark
/// 3. check for a completed line (score it)
/// 4. otherwise check the draw cap
/// 5. otherwise hand the turn over, letting the computer reply if it
///    controls the next side
///
/// ## Example
///
/// ```
/// use decay_tac_toe::core::{SessionConfig, Side};
/// use decay_tac_toe::session::{RoundState, Session};
///
/// let mut session = Session::new(SessionConfig::pvp()).unwrap();
///
/// let outcome = session.request_placement(4, Side::First).unwrap();
/// assert_eq!(outcome.round, RoundState::InProgress { to_move: Side::Second });
///
/// // X cannot move twice.
/// assert!(session.request_placement(0, Side::First).is_err());
/// ```
pub struct Session {
    config: SessionConfig,
    rules: Rules,
    board: Board,
    turns: Box<dyn TurnPolicy>,
    opponent: Box<dyn OpponentPolicy>,
    rng: GameRng,
    move_count: u32,
    current_side: Side,
    starting_side: Side,
    scores: SideMap<u8>,
    round: RoundState,
    history: Vector<MoveRecord>,
}

impl Session {
    /// Start a match with the heuristic computer opponent.
    ///
    /// Fails if the configuration is invalid. If the computer opens the
    /// first round and replies immediately, its move is already on the
    /// board when this returns.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_opponent(config, HeuristicOpponent::default())
    }

    /// Start a match with a custom opponent policy.
    pub fn with_opponent<O: OpponentPolicy + 'static>(
        config: SessionConfig,
        opponent: O,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut session = Self {
            rules: Rules::new(config.rules.clone()),
            board: Board::new(),
            turns: policy_for(config.mode),
            opponent: Box::new(opponent),
            rng: GameRng::new(config.seed),
            move_count: 0,
            current_side: Side::First,
            starting_side: Side::First,
            scores: SideMap::with_value(0),
            round: RoundState::InProgress { to_move: Side::First },
            history: Vector::new(),
            config,
        };

        tracing::info!(mode = %session.config.mode, seed = session.config.seed, "match started");
        session.begin_round(Side::First);
        Ok(session)
    }

    // === Queries ===

    /// The configuration this session was built from.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Who controls each side.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.turns.mode()
    }

    /// Controller of `side`.
    #[must_use]
    pub fn controller(&self, side: Side) -> Controller {
        self.turns.controller(side)
    }

    /// The rule set in force.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Placements made in the current round.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Side whose turn it is (the last mover once the round is over).
    #[must_use]
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Side that opened the current round.
    #[must_use]
    pub fn starting_side(&self) -> Side {
        self.starting_side
    }

    /// Round wins per side.
    #[must_use]
    pub fn scores(&self) -> &SideMap<u8> {
        &self.scores
    }

    /// Current round state.
    #[must_use]
    pub fn round(&self) -> RoundState {
        self.round
    }

    /// Placements of the current round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The side that reached the winning score, if any.
    #[must_use]
    pub fn match_winner(&self) -> Option<Side> {
        let target = self.rules.config().winning_score;
        self.scores
            .iter()
            .find(|(_, score)| **score >= target)
            .map(|(side, _)| side)
    }

    /// Returns `true` when the round is waiting on the computer.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        match self.round {
            RoundState::InProgress { to_move } => self.controller(to_move) == Controller::Computer,
            _ => false,
        }
    }

    /// RNG position, for checkpointing a reproducible game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Everything a renderer needs, detached from the session.
    #[must_use]
    pub fn query_state(&self) -> Snapshot {
        Snapshot {
            mode: self.mode(),
            cells: *self.board.cells(),
            move_count: self.move_count,
            current_side: self.current_side,
            starting_side: self.starting_side,
            scores: self.scores.clone(),
            round: self.round,
            match_winner: self.match_winner(),
            history: self.history.clone(),
        }
    }

    // === Intents ===

    /// Place a mark for `side` at `index`.
    ///
    /// Rejected with no effect if the round is over, it is not `side`'s
    /// turn, `side` is computer-controlled, or the cell is off the board
    /// or taken. Otherwise runs the end-of-turn pipeline, including the
    /// computer's reply when it replies immediately.
    pub fn request_placement(&mut self, index: usize, side: Side) -> Result<TurnOutcome, MoveError> {
        self.check_can_move(side, Controller::Human)
            .inspect_err(|e| tracing::debug!(cell = index, %side, error = %e, "placement rejected"))?;

        let lifetime = self.rules.mark_lifetime();
        self.board
            .place(index, side, lifetime)
            .inspect_err(|e| tracing::debug!(cell = index, %side, error = %e, "placement rejected"))?;

        let mut outcome = self.empty_outcome();
        self.record_placement(index, side, MoveSource::Human, &mut outcome);
        self.end_turn(&mut outcome);

        if self.config.computer_replies_immediately {
            self.run_computer(&mut outcome);
        }

        Ok(self.finish(outcome))
    }

    /// Let the computer make its pending move.
    ///
    /// This is the entry point for presentation layers that show a
    /// "thinking" delay (see `SessionConfig::with_deferred_computer`).
    /// Fails unless the round is in progress and the side to move is
    /// computer-controlled.
    pub fn place_computer_move(&mut self) -> Result<TurnOutcome, MoveError> {
        self.check_can_move(self.current_side, Controller::Computer)?;

        let mut outcome = self.empty_outcome();
        self.computer_turn(&mut outcome);
        Ok(self.finish(outcome))
    }

    /// Start the next round.
    ///
    /// Clears the board and hands the opening move to the other side. Once
    /// the match is decided this starts a new match instead.
    pub fn request_reset(&mut self) -> Snapshot {
        if let Some(winner) = self.match_winner() {
            tracing::info!(%winner, "starting new match");
            self.new_match();
        } else {
            let next = self.starting_side.other();
            tracing::info!(starting = %next, "round reset");
            self.begin_round(next);
        }
        self.query_state()
    }

    /// Continue the computer's random picks from a saved position.
    ///
    /// Together with the same request sequence, a session restored from
    /// `rng_state` replays the computer's moves exactly.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        tracing::debug!(seed = state.seed, word_pos = %state.word_pos, "rng restored");
        self.rng = GameRng::resume(state);
    }

    /// Zero the scores and start a fresh match with X opening.
    pub fn new_match(&mut self) {
        self.scores = SideMap::with_value(0);
        self.begin_round(Side::First);
    }

    // === Pipeline ===

    fn check_can_move(&self, side: Side, expected: Controller) -> Result<(), MoveError> {
        match self.round {
            RoundState::InProgress { to_move } if to_move == side => {}
            RoundState::InProgress { .. } => return Err(MoveError::NotYourTurn(side)),
            RoundState::Won(_) | RoundState::Drawn => return Err(MoveError::RoundOver),
        }
        if self.controller(side) != expected {
            return Err(MoveError::NotYourTurn(side));
        }
        Ok(())
    }

    /// Clear the board for a round opened by `starting`.
    ///
    /// An opening computer move is not returned from here; it shows up in
    /// the round's history and so in the next snapshot.
    fn begin_round(&mut self, starting: Side) {
        self.board.clear();
        self.move_count = 0;
        self.history = Vector::new();
        self.starting_side = starting;
        self.current_side = starting;
        self.round = RoundState::InProgress { to_move: starting };

        if self.config.computer_replies_immediately {
            let mut scratch = self.empty_outcome();
            self.run_computer(&mut scratch);
        }
    }

    /// Play computer moves for as long as the computer holds the turn.
    fn run_computer(&mut self, outcome: &mut TurnOutcome) {
        while self.is_computer_turn() {
            self.computer_turn(outcome);
        }
    }

    fn computer_turn(&mut self, outcome: &mut TurnOutcome) {
        let side = self.current_side;
        match self.opponent.choose_move(&self.board, side, &mut self.rng) {
            Some(decision) => {
                let decision = self.ensure_playable(decision);
                let lifetime = self.rules.mark_lifetime();
                match self.board.place(decision.index, side, lifetime) {
                    Ok(_) => self.record_placement(
                        decision.index,
                        side,
                        MoveSource::Computer(decision.rule),
                        outcome,
                    ),
                    Err(e) => tracing::warn!(%side, error = %e, "computer placement failed"),
                }
            }
            None => tracing::debug!(%side, "computer has no empty cell"),
        }
        // The turn ends even without a placement so the draw cap still applies.
        self.end_turn(outcome);
    }

    /// Replace a decision naming an unusable cell with a random empty one.
    fn ensure_playable(&mut self, decision: Decision) -> Decision {
        if self.board.is_empty(decision.index) {
            return decision;
        }
        tracing::warn!(cell = decision.index, rule = %decision.rule, "opponent chose an unusable cell");
        let empty = self.board.empty_cells();
        match self.rng.choose(&empty) {
            Some(&index) => Decision::new(index, Rule::Random),
            None => decision,
        }
    }

    fn record_placement(&mut self, index: usize, side: Side, source: MoveSource, outcome: &mut TurnOutcome) {
        let lifetime = self.rules.mark_lifetime();
        let record = MoveRecord {
            number: self.move_count + 1,
            side,
            index,
            source,
        };
        tracing::debug!(cell = index, %side, ?source, "mark placed");

        self.history.push_back(record);
        outcome.moves.push(record);
        outcome.changes.push(CellChange::Placed { index, side, lifetime });
    }

    fn end_turn(&mut self, outcome: &mut TurnOutcome) {
        self.move_count += 1;

        for index in self.rules.decay(&mut self.board) {
            tracing::debug!(cell = index, "mark expired");
            outcome.changes.push(CellChange::Expired { index });
        }

        match self.rules.evaluate(&self.board, self.move_count) {
            Some(RoundResult::Won(winner)) => {
                let target = self.rules.config().winning_score;
                let score = &mut self.scores[winner];
                *score = (*score + 1).min(target);
                self.round = RoundState::Won(winner);

                tracing::info!(%winner, score = *score, moves = self.move_count, "round won");
                if *score >= target {
                    tracing::info!(%winner, "match won");
                }
            }
            Some(RoundResult::Drawn) => {
                self.round = RoundState::Drawn;
                tracing::info!(moves = self.move_count, "round drawn");
            }
            None => {
                self.current_side = self.current_side.other();
                self.round = RoundState::InProgress { to_move: self.current_side };
            }
        }
    }

    fn empty_outcome(&self) -> TurnOutcome {
        TurnOutcome {
            moves: SmallVec::new(),
            changes: SmallVec::new(),
            move_count: self.move_count,
            round: self.round,
            scores: self.scores.clone(),
            match_winner: None,
        }
    }

    fn finish(&self, mut outcome: TurnOutcome) -> TurnOutcome {
        outcome.move_count = self.move_count;
        outcome.round = self.round;
        outcome.scores = self.scores.clone();
        outcome.match_winner = self.match_winner();
        outcome
    }
}
