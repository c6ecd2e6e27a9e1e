//! GuessMoji WASM bridge
//!
//! Exposes guessmoji-core functions through a WASM-compatible ABI for the
//! browser host. No WASI imports needed; all functions are pure computation
//! with shared memory string passing.
//!
//! # Memory Protocol
//!
//! Strings cross the WASM boundary as (ptr, len) pairs in linear memory.
//! The host allocates via [`wasm_alloc`], writes bytes, calls the function,
//! reads the result, then frees via [`wasm_free`].
//!
//! Return values pack pointer and length into a single u64:
//! `(ptr << 32) | len`
//!
//! Every export takes a JSON request and answers with JSON. Failures are
//! reported as `{"error":"description"}`, never as a trap.

use guessmoji_core::{
    ClueBoard, CodeUnit, FilterConfig, GuessOutcome, RevealSchedule, SimilarityFilter,
    DEFAULT_THRESHOLD,
};
use serde::Deserialize;
use serde_json::json;

// ============================================================================
// Memory management
// ============================================================================

/// Allocate `size` bytes in WASM linear memory. Returns a pointer.
/// The host must call `wasm_free` to release.
#[no_mangle]
pub extern "C" fn wasm_alloc(size: u32) -> u32 {
    let layout = match std::alloc::Layout::from_size_align(size as usize, 1) {
        Ok(l) => l,
        Err(_) => return 0,
    };
    if layout.size() == 0 {
        return 0;
    }
    let ptr = unsafe { std::alloc::alloc(layout) };
    if ptr.is_null() {
        return 0;
    }
    ptr as u32
}

/// Free a buffer previously allocated by `wasm_alloc` or returned by an
/// export function.
#[no_mangle]
pub extern "C" fn wasm_free(ptr: u32, size: u32) {
    if ptr == 0 || size == 0 {
        return;
    }
    let layout = match std::alloc::Layout::from_size_align(size as usize, 1) {
        Ok(l) => l,
        Err(_) => return,
    };
    unsafe {
        std::alloc::dealloc(ptr as *mut u8, layout);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Read a UTF-8 string from WASM linear memory at (ptr, len).
/// A null pointer or invalid UTF-8 yields `None` rather than undefined behaviour.
unsafe fn read_str(ptr: u32, len: u32) -> Option<&'static str> {
    if len == 0 {
        return Some("");
    }
    if ptr == 0 {
        return None;
    }
    let slice = std::slice::from_raw_parts(ptr as *const u8, len as usize);
    std::str::from_utf8(slice).ok()
}

/// Write a string into newly allocated WASM memory and return packed u64.
/// The caller (host) is responsible for freeing via `wasm_free`.
fn write_result(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let len = bytes.len() as u32;
    let ptr = wasm_alloc(len);
    if ptr == 0 {
        return 0;
    }
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr as *mut u8, len as usize);
    }
    ((ptr as u64) << 32) | (len as u64)
}

fn error_json(msg: &str) -> String {
    json!({ "error": msg }).to_string()
}

/// Run a JSON handler against (ptr, len) input and pack its answer.
fn respond(ptr: u32, len: u32, handler: fn(&str) -> Result<String, String>) -> u64 {
    write_result(&respond_json(ptr, len, handler))
}

fn respond_json(ptr: u32, len: u32, handler: fn(&str) -> Result<String, String>) -> String {
    let Some(input) = (unsafe { read_str(ptr, len) }) else {
        return error_json("input is null or not valid UTF-8");
    };
    handler(input).unwrap_or_else(|e| error_json(&e))
}

// ============================================================================
// Version info
// ============================================================================

/// Get the guessmoji-core version. Returns a packed u64 (ptr << 32 | len)
/// pointing to a string containing the version (e.g., "0.1.0").
#[no_mangle]
pub extern "C" fn guessmoji_core_version() -> u64 {
    write_result(env!("CARGO_PKG_VERSION"))
}

// ============================================================================
// Similarity
// ============================================================================

#[derive(Debug, Deserialize)]
struct FilterRequest {
    query: String,
    #[serde(default)]
    candidates: Vec<String>,
    threshold: Option<f64>,
    unit: Option<CodeUnit>,
}

/// `{"query","candidates","threshold"?,"unit"?}` -> `{"matches":[...]}`
pub fn similarity_filter_json(input: &str) -> Result<String, String> {
    let req: FilterRequest =
        serde_json::from_str(input).map_err(|e| format!("invalid filter request: {}", e))?;

    let config = FilterConfig {
        threshold: req.threshold.unwrap_or(DEFAULT_THRESHOLD),
        unit: req.unit.unwrap_or_default(),
        ..FilterConfig::default()
    };
    let matches = SimilarityFilter::new(config).filter(&req.query, &req.candidates);

    Ok(json!({ "matches": matches }).to_string())
}

/// Filter candidate titles by similarity to the query. Takes (ptr, len)
/// pointing to a JSON request and returns a packed u64 to the JSON response.
///
/// On success: `{"matches":["apple","application"]}`
/// On error: `{"error":"description"}`
#[no_mangle]
pub extern "C" fn similarity_filter(ptr: u32, len: u32) -> u64 {
    respond(ptr, len, similarity_filter_json)
}

#[derive(Debug, Deserialize)]
struct DistanceRequest {
    a: String,
    b: String,
    unit: Option<CodeUnit>,
}

/// `{"a","b","unit"?}` -> `{"distance":n,"similarity":x}`
pub fn edit_distance_json(input: &str) -> Result<String, String> {
    let req: DistanceRequest =
        serde_json::from_str(input).map_err(|e| format!("invalid distance request: {}", e))?;
    let unit = req.unit.unwrap_or_default();

    Ok(json!({
        "distance": guessmoji_core::str_distance(&req.a, &req.b, unit),
        "similarity": guessmoji_core::similarity(&req.a, &req.b, unit),
    })
    .to_string())
}

#[no_mangle]
pub extern "C" fn edit_distance(ptr: u32, len: u32) -> u64 {
    respond(ptr, len, edit_distance_json)
}

// ============================================================================
// Clue board
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardRequest {
    title: String,
    emojis: Vec<String>,
    #[serde(default)]
    genres: String,
    #[serde(default)]
    lead_actor: String,
    #[serde(default)]
    schedule: RevealSchedule,
    /// Guesses so far, replayed in order
    #[serde(default)]
    guesses: Vec<String>,
}

/// Replay a round and return its snapshot plus the last guess outcome.
///
/// The board is rebuilt from the request every call, so the host owns all
/// round state.
pub fn clue_board_json(input: &str) -> Result<String, String> {
    let req: BoardRequest =
        serde_json::from_str(input).map_err(|e| format!("invalid board request: {}", e))?;

    let movie = guessmoji_core::Movie::new("", req.title)
        .with_emojis(req.emojis)
        .with_genres(req.genres)
        .with_lead_actor(req.lead_actor);
    let mut board = ClueBoard::for_movie(&movie, req.schedule);

    let last: Option<GuessOutcome> = req.guesses.iter().map(|g| board.guess(g)).last();

    serde_json::to_string(&json!({
        "board": board.snapshot(),
        "last": last,
    }))
    .map_err(|e| format!("serialization failed: {}", e))
}

#[no_mangle]
pub extern "C" fn clue_board(ptr: u32, len: u32) -> u64 {
    respond(ptr, len, clue_board_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn test_filter_reference() {
        let out = similarity_filter_json(
            r#"{"query":"apply","candidates":["apple","application","apricot","banana","grape"],"threshold":0.35}"#,
        )
        .unwrap();
        assert_eq!(parse(&out), json!({ "matches": ["apple", "application"] }));
    }

    #[test]
    fn test_filter_default_threshold() {
        let out = similarity_filter_json(r#"{"query":"Up","candidates":["Us","Jaws"]}"#).unwrap();
        assert_eq!(parse(&out), json!({ "matches": ["Us"] }));
    }

    #[test]
    fn test_filter_char_unit() {
        let out =
            similarity_filter_json(r#"{"query":"a","candidates":["a🚀"],"unit":"char"}"#).unwrap();
        assert_eq!(parse(&out), json!({ "matches": ["a🚀"] }));
    }

    #[test]
    fn test_filter_bad_request() {
        let err = similarity_filter_json(r#"{"candidates":[]}"#).unwrap_err();
        assert!(err.starts_with("invalid filter request"), "{}", err);
        assert_eq!(parse(&error_json(&err))["error"], Value::String(err));
    }

    #[test]
    fn test_null_input_is_an_error() {
        let out = respond_json(0, 16, similarity_filter_json);
        assert_eq!(parse(&out), json!({ "error": "input is null or not valid UTF-8" }));
        assert_eq!(unsafe { read_str(0, 0) }, Some(""));
    }

    #[test]
    fn test_edit_distance() {
        let out = edit_distance_json(r#"{"a":"apple","b":"apply"}"#).unwrap();
        let v = parse(&out);
        assert_eq!(v["distance"], 1);
        assert_eq!(v["similarity"].as_f64(), Some(0.8));
    }

    #[test]
    fn test_clue_board_replay() {
        let out = clue_board_json(
            r#"{
                "title": "Up",
                "emojis": ["🎈", "🏠", "👴", "🐕"],
                "genres": "Animation",
                "schedule": {"firstHint": 1},
                "guesses": ["Us"]
            }"#,
        )
        .unwrap();
        let v = parse(&out);
        assert_eq!(v["board"]["cards"], json!(["🎈", "🏠", "👴", null]));
        assert_eq!(v["board"]["stage"], "first_hint");
        assert_eq!(
            v["board"]["hints"],
            json!([{ "kind": "genres", "value": "Animation" }])
        );
        assert_eq!(v["last"], json!({ "outcome": "wrong", "revealed": 3 }));
        assert_eq!(v["board"]["title"], Value::Null);
    }

    #[test]
    fn test_clue_board_solved() {
        let out = clue_board_json(r#"{"title":"Up","emojis":["🎈","🏠","👴"],"guesses":["Up"]}"#)
            .unwrap();
        let v = parse(&out);
        assert_eq!(v["board"]["title"], "Up");
        assert_eq!(v["last"], json!({ "outcome": "correct", "attempts": 1 }));
    }
}
