//! Clue board - progressive emoji reveal for one round
//!
//! A round starts with a few emoji clues open. Every wrong guess opens one
//! more, and after enough wrong guesses the genre and then the lead actor
//! are offered as hints. Once solved, the player may rearrange or replace
//! the emojis to suggest a better clue sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Movie;

/// Errors from clue board edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    /// Edits are only accepted after the title was guessed
    #[error("round is not solved yet")]
    NotSolved,

    #[error("emoji not on the board: {0}")]
    EmojiNotFound(String),

    /// A reorder must contain exactly the current emojis
    #[error("new order is not a permutation of the current emojis")]
    NotAPermutation,
}

/// Result type for clue board operations
pub type ClueResult<T> = Result<T, ClueError>;

/// When clues and hints open up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealSchedule {
    /// Clues open at the start of a round
    pub initial: usize,
    /// Wrong guesses before the genre hint
    pub first_hint: usize,
    /// Wrong guesses before the lead actor hint
    pub second_hint: usize,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            initial: 2,
            first_hint: 3,
            second_hint: 5,
        }
    }
}

/// Where the round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Clues,
    FirstHint,
    SecondHint,
    Solved,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clues => write!(f, "clues"),
            Self::FirstHint => write!(f, "first_hint"),
            Self::SecondHint => write!(f, "second_hint"),
            Self::Solved => write!(f, "solved"),
        }
    }
}

/// A textual hint unlocked by wrong guesses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Hint {
    Genres(String),
    LeadActor(String),
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuessOutcome {
    Correct { attempts: usize },
    Wrong { revealed: usize },
    AlreadySolved,
}

/// Serializable view of a board; closed cards carry no emoji
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub cards: Vec<Option<String>>,
    pub stage: Stage,
    pub wrong_guesses: usize,
    pub hints: Vec<Hint>,
    /// Only present once solved
    pub title: Option<String>,
}

/// Reveal state for a single movie
#[derive(Debug, Clone)]
pub struct ClueBoard {
    title: String,
    emojis: Vec<String>,
    genres: String,
    lead_actor: String,
    schedule: RevealSchedule,
    revealed: usize,
    wrong_guesses: usize,
    solved: bool,
}

impl ClueBoard {
    pub fn new(title: impl Into<String>, emojis: Vec<String>) -> Self {
        Self::with_schedule(title, emojis, RevealSchedule::default())
    }

    pub fn with_schedule(
        title: impl Into<String>,
        emojis: Vec<String>,
        schedule: RevealSchedule,
    ) -> Self {
        let revealed = schedule.initial.min(emojis.len());
        Self {
            title: title.into(),
            emojis,
            genres: String::new(),
            lead_actor: String::new(),
            schedule,
            revealed,
            wrong_guesses: 0,
            solved: false,
        }
    }

    /// Board for a catalog movie, with its genre and lead actor as hints
    pub fn for_movie(movie: &Movie, schedule: RevealSchedule) -> Self {
        let mut board = Self::with_schedule(&movie.movie_name, movie.emoji_array.clone(), schedule);
        board.genres = movie.genres.clone();
        board.lead_actor = movie.lead_actor.clone();
        board
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.solved || index < self.revealed
    }

    /// Open emojis, in order
    pub fn revealed(&self) -> &[String] {
        if self.solved {
            &self.emojis
        } else {
            &self.emojis[..self.revealed]
        }
    }

    /// Open one more clue. Returns false once everything is open.
    pub fn reveal_next(&mut self) -> bool {
        if self.revealed >= self.emojis.len() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn is_exhausted(&self) -> bool {
        self.revealed >= self.emojis.len()
    }

    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    pub fn stage(&self) -> Stage {
        if self.solved {
            Stage::Solved
        } else if self.wrong_guesses >= self.schedule.second_hint {
            Stage::SecondHint
        } else if self.wrong_guesses >= self.schedule.first_hint {
            Stage::FirstHint
        } else {
            Stage::Clues
        }
    }

    /// Hints unlocked so far; blank hint texts are skipped
    pub fn hints(&self) -> Vec<Hint> {
        let mut hints = Vec::new();
        if self.solved {
            return hints;
        }
        if self.wrong_guesses >= self.schedule.first_hint && !self.genres.is_empty() {
            hints.push(Hint::Genres(self.genres.clone()));
        }
        if self.wrong_guesses >= self.schedule.second_hint && !self.lead_actor.is_empty() {
            hints.push(Hint::LeadActor(self.lead_actor.clone()));
        }
        hints
    }

    /// Submit a guess. The guess must equal the title exactly, ignoring
    /// surrounding whitespace; suggestions come from the similarity filter.
    pub fn guess(&mut self, guess: &str) -> GuessOutcome {
        if self.solved {
            return GuessOutcome::AlreadySolved;
        }
        if guess.trim() == self.title.trim() {
            self.solved = true;
            tracing::debug!(wrong_guesses = self.wrong_guesses, "round solved");
            return GuessOutcome::Correct {
                attempts: self.wrong_guesses + 1,
            };
        }

        self.wrong_guesses += 1;
        self.reveal_next();
        tracing::trace!(
            wrong_guesses = self.wrong_guesses,
            revealed = self.revealed,
            stage = %self.stage(),
            "wrong guess"
        );
        GuessOutcome::Wrong {
            revealed: self.revealed,
        }
    }

    /// Swap the first occurrence of `old` for `new`
    pub fn replace_emoji(&mut self, old: &str, new: impl Into<String>) -> ClueResult<()> {
        if !self.solved {
            return Err(ClueError::NotSolved);
        }
        let slot = self
            .emojis
            .iter_mut()
            .find(|e| e.as_str() == old)
            .ok_or_else(|| ClueError::EmojiNotFound(old.to_string()))?;
        *slot = new.into();
        Ok(())
    }

    /// Replace the emoji order with a permutation of the current emojis
    pub fn reorder(&mut self, order: Vec<String>) -> ClueResult<()> {
        if !self.solved {
            return Err(ClueError::NotSolved);
        }
        let mut current = self.emojis.clone();
        let mut proposed = order.clone();
        current.sort_unstable();
        proposed.sort_unstable();
        if current != proposed {
            return Err(ClueError::NotAPermutation);
        }
        self.emojis = order;
        Ok(())
    }

    /// Current emoji sequence including any post-solve edits
    pub fn emojis(&self) -> ClueResult<&[String]> {
        if self.solved {
            Ok(&self.emojis)
        } else {
            Err(ClueError::NotSolved)
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cards: self
                .emojis
                .iter()
                .enumerate()
                .map(|(i, e)| self.is_open(i).then(|| e.clone()))
                .collect(),
            stage: self.stage(),
            wrong_guesses: self.wrong_guesses,
            hints: self.hints(),
            title: self.solved.then(|| self.title.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn emojis(s: &[&str]) -> Vec<String> {
        s.iter().map(|e| e.to_string()).collect()
    }

    fn jaws() -> ClueBoard {
        let movie = Movie::new("m1", "Jaws")
            .with_emojis(["🦈", "🌊", "🏖️", "🚤", "🩸", "👮"])
            .with_genres("Thriller")
            .with_lead_actor("Roy Scheider");
        ClueBoard::for_movie(&movie, RevealSchedule::default())
    }

    #[test]
    fn test_initial_reveal() {
        let board = jaws();
        assert_eq!(board.revealed(), &emojis(&["🦈", "🌊"])[..]);
        assert!(board.is_open(1));
        assert!(!board.is_open(2));
        assert_eq!(board.stage(), Stage::Clues);
    }

    #[test]
    fn test_initial_clamped_to_len() {
        let board = ClueBoard::new("Up", emojis(&["🎈"]));
        assert_eq!(board.revealed().len(), 1);
        assert!(board.is_exhausted());
    }

    #[test]
    fn test_wrong_guesses_reveal_and_unlock_hints() {
        let mut board = jaws();
        assert_eq!(board.guess("Heat"), GuessOutcome::Wrong { revealed: 3 });
        board.guess("Alien");
        assert!(board.hints().is_empty());
        board.guess("Up");
        assert_eq!(board.stage(), Stage::FirstHint);
        assert_eq!(board.hints(), vec![Hint::Genres("Thriller".into())]);
        board.guess("Us");
        assert_eq!(board.guess("Rocky"), GuessOutcome::Wrong { revealed: 6 });
        assert_eq!(board.stage(), Stage::SecondHint);
        assert_eq!(board.hints().len(), 2);
        assert!(board.is_exhausted());
        assert!(!board.reveal_next());
    }

    #[test]
    fn test_correct_guess() {
        let mut board = jaws();
        board.guess("Jaw");
        assert_eq!(board.guess("  Jaws "), GuessOutcome::Correct { attempts: 2 });
        assert_eq!(board.stage(), Stage::Solved);
        assert_eq!(board.guess("Jaws"), GuessOutcome::AlreadySolved);
        assert_eq!(board.revealed().len(), 6);
    }

    #[test]
    fn test_guess_is_case_sensitive() {
        let mut board = jaws();
        assert!(matches!(board.guess("jaws"), GuessOutcome::Wrong { .. }));
    }

    #[test]
    fn test_edits_require_solved() {
        let mut board = jaws();
        assert_eq!(board.replace_emoji("🦈", "🐟"), Err(ClueError::NotSolved));
        assert_eq!(board.reorder(Vec::new()), Err(ClueError::NotSolved));
        assert_eq!(board.emojis(), Err(ClueError::NotSolved));
    }

    #[test]
    fn test_replace_and_reorder() {
        let mut board = ClueBoard::new("Up", emojis(&["🎈", "🏠", "🎈"]));
        board.guess("Up");

        board.replace_emoji("🎈", "👴").unwrap();
        assert_eq!(board.emojis().unwrap(), &emojis(&["👴", "🏠", "🎈"])[..]);
        assert_eq!(
            board.replace_emoji("🐕", "🦴"),
            Err(ClueError::EmojiNotFound("🐕".into()))
        );

        board.reorder(emojis(&["🎈", "🏠", "👴"])).unwrap();
        assert_eq!(board.emojis().unwrap(), &emojis(&["🎈", "🏠", "👴"])[..]);
        assert_eq!(
            board.reorder(emojis(&["🎈", "🎈", "👴"])),
            Err(ClueError::NotAPermutation)
        );
    }

    #[test]
    fn test_snapshot_hides_closed_cards() {
        let mut board = jaws();
        let snap = board.snapshot();
        assert_eq!(snap.cards[0].as_deref(), Some("🦈"));
        assert_eq!(snap.cards[2], None);
        assert_eq!(snap.title, None);

        board.guess("Jaws");
        let snap = board.snapshot();
        assert!(snap.cards.iter().all(Option::is_some));
        assert_eq!(snap.title.as_deref(), Some("Jaws"));
    }
}
