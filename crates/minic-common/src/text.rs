//! Text helpers.

/// Characters `trim` removes: the C `isspace` set.
const BLANKS: [char; 6] = [' ', '\t', '\n', '\x0B', '\x0C', '\r'];

/// Remove leading and trailing blanks, returning a new string.
/// Interior blanks are kept.
pub fn trim(s: &str) -> String {
    s.trim_matches(&BLANKS[..]).to_string()
}
