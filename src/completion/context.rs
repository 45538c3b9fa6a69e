//! Completion-context inference.
//!
//! Decides which editing situation the cursor is in by inspecting the
//! current line and scanning preceding lines with regular expressions.
//! The enclosing field is resolved as the nearest preceding `- identifier:`
//! declaration line, with no indentation cross-check. Upgrading this to a
//! scope-aware parse would change observable completion behavior, so the
//! heuristic is kept as-is.

use regex::Regex;
use std::sync::OnceLock;

/// Indentation at or beyond this column is treated as a field property block.
pub const PROPERTY_BLOCK_INDENT: usize = 4;

/// The editing situations that hold at a cursor position.
///
/// Several can hold at once; the suggestion sets for all of them are unioned
/// with no precedence rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorContext {
    /// Line has no leading whitespace: offer the top-level form scaffold.
    pub at_root: bool,
    /// Cursor is indented into a property block; the value is the type key
    /// extracted from the nearest preceding field-declaration line.
    pub property_block: Option<String>,
    /// Line prefix ends with `fields:` or a bare list dash: offer the
    /// field-insertion catalog, regardless of indentation.
    pub insertion_point: bool,
}

fn field_decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-\s*(\w+):").unwrap())
}

fn legacy_decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-\s*(input|email):").unwrap())
}

fn fields_tail_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"fields:\s*$").unwrap())
}

fn dash_tail_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-\s*$").unwrap())
}

/// Infer the context set at (line, character).
pub fn infer(text: &str, line: u32, character: u32) -> CursorContext {
    let prefix = line_prefix(text, line, character);
    let indentation = leading_whitespace(prefix);

    let mut ctx = CursorContext::default();

    if indentation == 0 {
        ctx.at_root = true;
    }

    if indentation >= PROPERTY_BLOCK_INDENT {
        ctx.property_block = enclosing_field_type(text, line);
    }

    if fields_tail_re().is_match(prefix) || dash_tail_re().is_match(prefix) {
        ctx.insertion_point = true;
    }

    ctx
}

/// Narrow `:`-trigger path. Scans backward only for the legacy `input` /
/// `email` declaration lines; everything else is handled by [`infer`].
pub fn trigger_field_type(text: &str, line: u32, character: u32) -> Option<String> {
    let prefix = line_prefix(text, line, character);
    if !prefix.ends_with(':') {
        return None;
    }

    let re = legacy_decl_re();
    let lines: Vec<&str> = text.lines().take(line as usize).collect();
    lines
        .iter()
        .rev()
        .find_map(|l| re.captures(l).map(|c| c[1].to_string()))
}

/// Nearest preceding field-declaration line, scanning upward from the line
/// above the cursor. No indentation check against the cursor position.
fn enclosing_field_type(text: &str, line: u32) -> Option<String> {
    let re = field_decl_re();
    let lines: Vec<&str> = text.lines().take(line as usize).collect();
    lines
        .iter()
        .rev()
        .find_map(|l| re.captures(l).map(|c| c[1].to_string()))
}

/// The current line's text up to the cursor column (clamped to line length).
fn line_prefix(text: &str, line: u32, character: u32) -> &str {
    let l = text.lines().nth(line as usize).unwrap_or("");
    match l.char_indices().nth(character as usize) {
        Some((idx, _)) => &l[..idx],
        None => l,
    }
}

fn leading_whitespace(prefix: &str) -> usize {
    prefix.chars().take_while(|c| c.is_whitespace()).count()
}
