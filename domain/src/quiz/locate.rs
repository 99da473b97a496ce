//! Payload location strategies.
//!
//! Models rarely answer with bare JSON. Each [`PayloadLocator`] looks for the
//! quiz array in a different shape of response; the extractor tries them in
//! order and takes the first candidate found.
//!
//! | Locator | Finds |
//! |---------|-------|
//! | [`FencedJsonBlock`] | ` ```json [ ... ] ``` ` |
//! | [`BracketedArray`] | the first balanced `[ { ... } ]` in prose |
//! | [`RawText`] | the whole response |

use serde::{Deserialize, Serialize};

/// Where the quiz records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSource {
    Fenced,
    Bracketed,
    RawText,
    /// Placeholder questions; nothing usable was found
    Fallback,
}

impl std::fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PayloadSource::Fenced => "fenced",
            PayloadSource::Bracketed => "bracketed",
            PayloadSource::RawText => "raw_text",
            PayloadSource::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// One way of finding a candidate JSON payload in a model response
pub trait PayloadLocator: Send + Sync {
    /// Source tag reported when this locator's candidate is used
    fn source(&self) -> PayloadSource;

    /// Return the candidate payload, or `None` if this shape is absent
    fn locate<'a>(&self, response: &'a str) -> Option<&'a str>;
}

/// The default locator chain: fenced block, then bracketed array, then raw text
pub fn default_locators() -> Vec<Box<dyn PayloadLocator>> {
    vec![
        Box::new(FencedJsonBlock),
        Box::new(BracketedArray),
        Box::new(RawText),
    ]
}

/// ` ```json ` fence whose body is an array.
///
/// The body runs from the `[` after the fence marker to the nearest closing
/// fence that is preceded (ignoring whitespace) by `]`.
pub struct FencedJsonBlock;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

impl PayloadLocator for FencedJsonBlock {
    fn source(&self) -> PayloadSource {
        PayloadSource::Fenced
    }

    fn locate<'a>(&self, response: &'a str) -> Option<&'a str> {
        let mut search_from = 0;
        while let Some(offset) = response[search_from..].find(JSON_FENCE) {
            let after_marker = search_from + offset + JSON_FENCE.len();
            search_from = after_marker;

            let body = &response[after_marker..];
            let start = after_marker + (body.len() - body.trim_start().len());
            if !response[start..].starts_with('[') {
                continue;
            }

            let mut close_from = start + 1;
            while let Some(close) = response[close_from..].find(FENCE) {
                let close_at = close_from + close;
                let candidate = response[start..close_at].trim_end();
                if candidate.len() > 1 && candidate.ends_with(']') {
                    return Some(candidate);
                }
                close_from = close_at + FENCE.len();
            }
        }
        None
    }
}

/// First `[` that opens an array of objects, up to its balancing `]`.
///
/// One pass over the response with a stack of open brackets. Brackets inside
/// JSON string literals are ignored; quotes outside any bracket are prose.
/// A start whose brackets never balance (a truncated response) is skipped in
/// favour of the next one.
pub struct BracketedArray;

impl PayloadLocator for BracketedArray {
    fn source(&self) -> PayloadSource {
        PayloadSource::Bracketed
    }

    fn locate<'a>(&self, response: &'a str) -> Option<&'a str> {
        // (byte offset, opening char, opens an array of objects)
        let mut open: Vec<(usize, char, bool)> = Vec::new();
        let mut open_candidates = 0usize;
        let mut best: Option<(usize, usize)> = None;
        let mut in_string = false;
        let mut escaped = false;

        for (i, c) in response.char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' if !open.is_empty() => in_string = true,
                '[' => {
                    let candidate = response[i + 1..].trim_start().starts_with('{');
                    open_candidates += usize::from(candidate);
                    open.push((i, c, candidate));
                }
                '{' => open.push((i, c, false)),
                ']' | '}' => {
                    let Some((start, opener, candidate)) = open.pop() else {
                        continue;
                    };
                    open_candidates -= usize::from(candidate);
                    if !(candidate && opener == '[' && c == ']') {
                        continue;
                    }
                    if best.is_none_or(|(s, _)| start < s) {
                        best = Some((start, i + 1));
                    }
                    // Nothing earlier is still open, so nothing earlier can win
                    if open_candidates == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }

        best.map(|(start, end)| &response[start..end])
    }
}

/// The whole response, trimmed
pub struct RawText;

impl PayloadLocator for RawText {
    fn source(&self) -> PayloadSource {
        PayloadSource::RawText
    }

    fn locate<'a>(&self, response: &'a str) -> Option<&'a str> {
        Some(response.trim())
    }
}
