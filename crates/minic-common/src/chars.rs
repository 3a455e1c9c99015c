//! Character classes used by the lexer.
//!
//! All predicates are ASCII-only and locale-independent. Any non-ASCII
//! `char` is outside every class. Lexers scanning bytes can classify with
//! `char::from(byte)`, which keeps `0x80..=0xFF` out of every class too.

/// `[A-Za-z]`
pub const fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// `[0-9]`
pub const fn is_digital(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// `[A-Za-z0-9]`
pub const fn is_letter_digital(ch: char) -> bool {
    is_letter(ch) || is_digital(ch)
}

/// `[A-Za-z0-9_]`, the characters allowed after the first one of an identifier.
pub const fn is_letter_digital_underline(ch: char) -> bool {
    is_letter_digital(ch) || ch == '_'
}

/// `[A-Za-z_]`, the characters that may start an identifier.
pub const fn is_letter_underline(ch: char) -> bool {
    is_letter(ch) || ch == '_'
}
