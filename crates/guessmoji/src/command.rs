//! JSON command runner
//!
//! One command in, one response out. The `guessmoji-suggest` binary wires
//! this to stdin/stdout; tests call [`run_command`] directly.

use guessmoji_core::{
    Catalog, ClueBoard, CodeUnit, FilterConfig, Movie, RevealSchedule, SimilarityFilter,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};

/// Command for the suggest runner
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "cmd")]
pub enum Command {
    /// Filter plain titles or catalog rows by similarity to `query`
    Suggest {
        query: String,
        candidates: Option<Vec<String>>,
        catalog: Option<Vec<Movie>>,
        threshold: Option<f64>,
    },
    Distance {
        a: String,
        b: String,
        unit: Option<CodeUnit>,
    },
    /// Replay a round, optionally applying a post-solve reorder
    Round {
        movie: Movie,
        #[serde(default)]
        guesses: Vec<String>,
        #[serde(default)]
        schedule: RevealSchedule,
        reorder: Option<Vec<String>>,
    },
}

/// Response from command execution
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "status")]
pub enum Response {
    Success { result: serde_json::Value },
    Error { message: String },
}

impl From<Result<serde_json::Value>> for Response {
    fn from(result: Result<serde_json::Value>) -> Self {
        match result {
            Ok(result) => Response::Success { result },
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Execute a command. `defaults` supplies the threshold when the command
/// does not carry one.
pub fn run_command(command: Command, defaults: &FilterConfig) -> Result<serde_json::Value> {
    match command {
        Command::Suggest {
            query,
            candidates,
            catalog,
            threshold,
        } => {
            let config = FilterConfig {
                threshold: threshold.unwrap_or(defaults.threshold),
                ..defaults.clone()
            };

            if let Some(movies) = catalog {
                let catalog = Catalog::new(movies)?;
                let hits = catalog.suggest(&query, &config);
                tracing::debug!(query = %query, hits = hits.len(), "catalog suggest");
                return Ok(json!({
                    "count": hits.len(),
                    "fingerprint": catalog.fingerprint(),
                    "movies": hits,
                }));
            }

            let candidates = candidates.ok_or_else(|| {
                Error::Config("suggest needs either `candidates` or `catalog`".to_string())
            })?;
            let matches = SimilarityFilter::new(config).filter(&query, &candidates);
            tracing::debug!(query = %query, matches = matches.len(), "suggest");
            Ok(json!({
                "count": matches.len(),
                "matches": matches,
            }))
        }
        Command::Distance { a, b, unit } => {
            let unit = unit.unwrap_or(defaults.unit);
            Ok(json!({
                "distance": guessmoji_core::str_distance(&a, &b, unit),
                "similarity": guessmoji_core::similarity(&a, &b, unit),
            }))
        }
        Command::Round {
            movie,
            guesses,
            schedule,
            reorder,
        } => {
            let mut board = ClueBoard::for_movie(&movie, schedule);
            let outcomes: Vec<_> = guesses.iter().map(|g| board.guess(g)).collect();
            if let Some(order) = reorder {
                board.reorder(order)?;
            }
            Ok(json!({
                "outcomes": outcomes,
                "board": board.snapshot(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(json: &str) -> Result<serde_json::Value> {
        let command: Command = serde_json::from_str(json)?;
        run_command(command, &FilterConfig::default())
    }

    #[test]
    fn test_suggest_candidates() {
        let v = run(r#"{"cmd":"Suggest","query":"x","candidates":["x","x","y"],"threshold":1.0}"#)
            .unwrap();
        assert_eq!(v, json!({ "count": 2, "matches": ["x", "x"] }));
    }

    #[test]
    fn test_suggest_default_threshold() {
        let command = Command::Suggest {
            query: "Up".into(),
            candidates: Some(vec!["Us".into(), "Jaws".into()]),
            catalog: None,
            threshold: None,
        };
        let strict = FilterConfig::with_threshold(0.9);
        assert_eq!(run_command(command, &strict).unwrap()["count"], 0);
    }

    #[test]
    fn test_suggest_catalog() {
        let v = run(
            r#"{"cmd":"Suggest","query":"Alien","threshold":0.8,"catalog":[
                {"id":"1","movieName":"Alien"},
                {"id":"2","movieName":"Heat"},
                {"id":"3","movieName":"Aliens"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(v["count"], 2);
        assert_eq!(v["movies"][1]["movieName"], "Aliens");
    }

    #[test]
    fn test_suggest_parallel_keeps_order() {
        let candidates: Vec<String> = (0..2000)
            .map(|i| if i % 3 == 0 { format!("Up {}", i) } else { "Jaws".to_string() })
            .collect();
        let expected: Vec<&str> = candidates
            .iter()
            .map(String::as_str)
            .filter(|c| c.starts_with("Up"))
            .collect();
        let command = Command::Suggest {
            query: "Up".into(),
            candidates: Some(candidates.clone()),
            catalog: None,
            threshold: Some(0.25),
        };
        let defaults = FilterConfig {
            parallel_threshold: 16,
            ..FilterConfig::default()
        };
        let v = run_command(command, &defaults).unwrap();
        assert_eq!(v["matches"], json!(expected));
    }

    #[test]
    fn test_suggest_needs_source() {
        let err = run(r#"{"cmd":"Suggest","query":"Up"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_suggest_bad_catalog() {
        let err = run(
            r#"{"cmd":"Suggest","query":"Up","catalog":[
                {"id":"1","movieName":"Up"},{"id":"1","movieName":"Us"}
            ]}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate movie id: 1");
    }

    #[test]
    fn test_distance() {
        let v = run(r#"{"cmd":"Distance","a":"🚀","b":"","unit":"char"}"#).unwrap();
        assert_eq!(v["distance"], 1);
        assert_eq!(v["similarity"].as_f64(), Some(0.0));
    }

    #[test]
    fn test_round_reorder_before_solve_fails() {
        let err = run(
            r#"{"cmd":"Round","movie":{"id":"1","movieName":"Up","emojiArray":["🎈","🏠"]},
                "guesses":["Us"],"reorder":["🏠","🎈"]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Clue(_)));
    }

    #[test]
    fn test_round_solved_and_reordered() {
        let v = run(
            r#"{"cmd":"Round","movie":{"id":"1","movieName":"Up","emojiArray":["🎈","🏠"]},
                "guesses":["Us","Up"],"reorder":["🏠","🎈"]}"#,
        )
        .unwrap();
        assert_eq!(v["outcomes"][1], json!({ "outcome": "correct", "attempts": 2 }));
        assert_eq!(v["board"]["cards"], json!(["🏠", "🎈"]));
    }

    #[test]
    fn test_response_from_error() {
        let response: Response = Err(Error::Config("bad".into())).into();
        let v = serde_json::to_value(&response).unwrap();
        assert_eq!(
            v,
            json!({ "status": "Error", "message": "configuration error: bad" })
        );
    }
}
