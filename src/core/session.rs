//! One round of hangman
//!
//! `GameSession` owns the target word, the guessed letters and the turn
//! budget, and applies each player input as a state transition.

use super::guess::{Guess, InvalidReason};
use super::word::TargetWord;
use crate::catalog::CandidateWordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, trace};

/// Extra turns granted on top of the word length
pub const EXTRA_TURNS: usize = 2;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
    Quit,
}

impl Status {
    /// `Won`, `Lost` and `Quit` end the session
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of evaluating one player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalOutcome {
    Quit,
    Invalid(InvalidReason),
    Repeated(char),
    WrongLetter { letter: char, remaining_turns: usize },
    CorrectLetter { letter: char, unmatched: usize },
    Won,
    Lost,
}

/// Errors raised by session creation or by play after the round is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("word catalog is empty")]
    EmptyCatalog,

    #[error("session already finished ({status:?})")]
    Finished { status: Status },
}

/// A single position of the displayed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    pub revealed: bool,
}

/// Read-only projection of the current progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub cells: Vec<Cell>,
    /// Interior positions whose letter has not been guessed yet
    pub unmatched: usize,
}

/// Mutable state of one round
#[derive(Debug, Clone)]
pub struct GameSession {
    target: TargetWord,
    guessed: FxHashSet<u8>,
    guess_order: Vec<u8>,
    remaining_turns: usize,
    status: Status,
}

impl GameSession {
    /// Start a session with a target drawn uniformly from `catalog`
    ///
    /// A `seed` makes the draw reproducible; without one the generator is
    /// seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCatalog`] if the catalog has no words.
    pub fn start(catalog: &CandidateWordList, seed: Option<u64>) -> Result<Self, SessionError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::start_with_rng(catalog, &mut rng)
    }

    /// Start a session drawing the target with a caller-owned generator
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCatalog`] if the catalog has no words.
    pub fn start_with_rng<R: Rng + ?Sized>(
        catalog: &CandidateWordList,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let target = catalog.choose(rng).ok_or(SessionError::EmptyCatalog)?;
        debug!(len = target.len(), "drew target word");
        Ok(Self::with_target(target.clone()))
    }

    /// Start a session with a known target
    #[must_use]
    pub fn with_target(target: TargetWord) -> Self {
        let remaining_turns = target.len() + EXTRA_TURNS;
        Self {
            target,
            guessed: FxHashSet::default(),
            guess_order: Vec::new(),
            remaining_turns,
            status: Status::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &TargetWord {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        self.remaining_turns
    }

    /// Accepted letters in the order they were submitted
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guess_order.iter().map(|&b| char::from(b))
    }

    /// Number of accepted letters
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guess_order.len()
    }

    /// Evaluate one raw player input
    ///
    /// Invalid and repeated inputs are reported as outcomes and leave the
    /// state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] once the session has reached a
    /// terminal status; nothing is mutated in that case.
    pub fn submit_guess(&mut self, raw: &str) -> Result<EvalOutcome, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::Finished {
                status: self.status,
            });
        }

        let letter = match Guess::parse(raw) {
            Guess::Quit => {
                debug!("player quit");
                self.status = Status::Quit;
                return Ok(EvalOutcome::Quit);
            }
            Guess::Invalid(reason) => {
                trace!(%reason, "rejected input");
                return Ok(EvalOutcome::Invalid(reason));
            }
            Guess::Letter(letter) => letter,
        };

        if !self.guessed.insert(letter) {
            return Ok(EvalOutcome::Repeated(char::from(letter)));
        }
        self.guess_order.push(letter);

        let outcome = if self.target.interior_has(letter) {
            let unmatched = self.unmatched_count();
            if unmatched == 0 {
                self.status = Status::Won;
                EvalOutcome::Won
            } else {
                EvalOutcome::CorrectLetter {
                    letter: char::from(letter),
                    unmatched,
                }
            }
        } else {
            self.remaining_turns -= 1;
            if self.remaining_turns == 0 {
                self.status = Status::Lost;
                EvalOutcome::Lost
            } else {
                EvalOutcome::WrongLetter {
                    letter: char::from(letter),
                    remaining_turns: self.remaining_turns,
                }
            }
        };

        debug!(?outcome, remaining = self.remaining_turns, "evaluated guess");
        Ok(outcome)
    }

    /// Project the word as the player sees it
    #[must_use]
    pub fn progress_view(&self) -> ProgressView {
        let cells = self
            .target
            .text()
            .bytes()
            .enumerate()
            .map(|(i, b)| Cell {
                letter: char::from(b),
                revealed: self.target.is_edge(i) || self.guessed.contains(&b),
            })
            .collect();

        ProgressView {
            cells,
            unmatched: self.unmatched_count(),
        }
    }

    fn unmatched_count(&self) -> usize {
        self.target
            .interior_letters()
            .filter(|letter| !self.guessed.contains(letter))
            .map(|letter| self.target.interior_positions_of(letter).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str) -> GameSession {
        GameSession::with_target(TargetWord::new(word).unwrap())
    }

    #[test]
    fn new_session_budget_is_length_plus_two() {
        let s = session("hello");
        assert_eq!(s.remaining_turns(), 7);
        assert_eq!(s.status(), Status::InProgress);
        assert_eq!(s.guess_count(), 0);
    }

    #[test]
    fn hello_scenario_wins() {
        let mut s = session("hello");

        assert_eq!(
            s.submit_guess("z").unwrap(),
            EvalOutcome::WrongLetter {
                letter: 'z',
                remaining_turns: 6
            }
        );
        assert_eq!(
            s.submit_guess("l").unwrap(),
            EvalOutcome::CorrectLetter {
                letter: 'l',
                unmatched: 1
            }
        );
        assert_eq!(s.progress_view().unmatched, 1);
        assert_eq!(s.submit_guess("e").unwrap(), EvalOutcome::Won);
        assert_eq!(s.status(), Status::Won);
        assert_eq!(s.progress_view().unmatched, 0);
    }

    #[test]
    fn abcde_scenario_loses_on_seventh_wrong_guess() {
        let mut s = session("abcde");
        for (i, letter) in ["f", "g", "h", "i", "j", "k"].iter().enumerate() {
            let outcome = s.submit_guess(letter).unwrap();
            assert!(matches!(
                outcome,
                EvalOutcome::WrongLetter { remaining_turns, .. } if remaining_turns == 6 - i
            ));
        }
        assert_eq!(s.remaining_turns(), 1);
        assert_eq!(s.submit_guess("l").unwrap(), EvalOutcome::Lost);
        assert_eq!(s.remaining_turns(), 0);
        assert_eq!(s.status(), Status::Lost);
    }

    #[test]
    fn edge_letters_count_as_wrong() {
        let mut s = session("abcde");
        assert!(matches!(
            s.submit_guess("a").unwrap(),
            EvalOutcome::WrongLetter { .. }
        ));
        assert!(matches!(
            s.submit_guess("e").unwrap(),
            EvalOutcome::WrongLetter { .. }
        ));
        assert_eq!(s.remaining_turns(), 5);
    }

    #[test]
    fn invalid_inputs_do_not_mutate() {
        let mut s = session("hello");
        assert_eq!(
            s.submit_guess("ab").unwrap(),
            EvalOutcome::Invalid(InvalidReason::NotSingleCharacter)
        );
        assert_eq!(
            s.submit_guess("1").unwrap(),
            EvalOutcome::Invalid(InvalidReason::NotAlphabetic)
        );
        assert_eq!(s.remaining_turns(), 7);
        assert_eq!(s.guess_count(), 0);
        assert_eq!(s.status(), Status::InProgress);
    }

    #[test]
    fn quit_is_case_insensitive_and_terminal() {
        let mut s = session("hello");
        assert_eq!(s.submit_guess("QUIT").unwrap(), EvalOutcome::Quit);
        assert_eq!(s.status(), Status::Quit);
        assert_eq!(s.remaining_turns(), 7);
    }

    #[test]
    fn repeated_letter_is_idempotent() {
        let mut s = session("hello");
        s.submit_guess("z").unwrap();
        assert_eq!(s.submit_guess("z").unwrap(), EvalOutcome::Repeated('z'));
        assert_eq!(s.submit_guess("Z").unwrap(), EvalOutcome::Repeated('z'));
        assert_eq!(s.remaining_turns(), 6);
        assert_eq!(s.guess_count(), 1);
    }

    #[test]
    fn uppercase_guess_is_lowercased() {
        let mut s = session("hello");
        assert!(matches!(
            s.submit_guess("L").unwrap(),
            EvalOutcome::CorrectLetter { letter: 'l', .. }
        ));
        assert_eq!(s.guessed_letters().collect::<String>(), "l");
    }

    #[test]
    fn terminal_session_rejects_further_guesses() {
        let mut s = session("hello");
        s.submit_guess("l").unwrap();
        s.submit_guess("e").unwrap();
        assert_eq!(s.status(), Status::Won);

        let err = s.submit_guess("x").unwrap_err();
        assert_eq!(
            err,
            SessionError::Finished {
                status: Status::Won
            }
        );
        assert_eq!(s.remaining_turns(), 7);
        assert_eq!(s.guess_count(), 2);
        assert!(s.submit_guess("quit").is_err());
        assert_eq!(s.status(), Status::Won);
    }

    #[test]
    fn progress_view_reveals_edges_and_guessed_interior() {
        let mut s = session("hello");
        let view = s.progress_view();
        let revealed: Vec<bool> = view.cells.iter().map(|c| c.revealed).collect();
        assert_eq!(revealed, vec![true, false, false, false, true]);
        assert_eq!(view.unmatched, 3);

        s.submit_guess("l").unwrap();
        let view = s.progress_view();
        let revealed: Vec<bool> = view.cells.iter().map(|c| c.revealed).collect();
        assert_eq!(revealed, vec![true, false, true, true, true]);
        assert_eq!(view.unmatched, 1);
    }

    #[test]
    fn guessing_edge_letter_does_not_reveal_unrelated_interior() {
        let mut s = session("abcde");
        s.submit_guess("a").unwrap();
        let view = s.progress_view();
        assert!(view.cells[1..4].iter().all(|c| !c.revealed));
        assert_eq!(view.unmatched, 3);
    }

    #[test]
    fn start_rejects_empty_catalog() {
        let catalog = CandidateWordList::default();
        assert_eq!(
            GameSession::start(&catalog, Some(1)).unwrap_err(),
            SessionError::EmptyCatalog
        );
    }

    #[test]
    fn start_is_reproducible_with_seed() {
        let catalog = CandidateWordList::from_words(["apple", "grape", "melon", "peach", "lemon"]);
        let first = GameSession::start(&catalog, Some(41)).unwrap();
        let second = GameSession::start(&catalog, Some(41)).unwrap();
        assert_eq!(first.target(), second.target());
        assert!(catalog.contains(first.target().text()));
        assert_eq!(first.remaining_turns(), first.target().len() + 2);
    }
}
