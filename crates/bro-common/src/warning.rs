//! Deduplicated diagnostic output.
//!
//! The HTML tokenizer, the CSS tokenizer, and the pipeline crate all report
//! unsupported or malformed input through here instead of `eprintln!`
//! directly, so that a document with the same illegal byte repeated
//! thousands of times prints one line instead of thousands.

use std::collections::HashSet;
use std::sync::Mutex;

const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported or malformed feature. Prints once per unique
/// `(component, message)` pair per process (or since the last
/// [`clear_warnings`]).
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED.lock().unwrap().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{YELLOW}[bro {component}] warning: {message}{RESET}");
    }
}

/// Clear all recorded warnings. Called at the start of each
/// `render_to_png` invocation so repeated in-process use (tests, a
/// long-lived embedder) does not suppress warnings that are newly relevant.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
