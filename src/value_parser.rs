//! Filter-value parsing
//!
//! Resolves the escape forms RFC 2254 and Active Directory accept inside a
//! filter value (`\HH` hex pairs, `\C` literal escapes, the protected `*`
//! wildcard) into a flat sequence of [`ParsedChar`] records, one per logical
//! character.

use crate::charclass::{char_context, char_context_of, CharCase, CharClass};
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::map_res;
use nom::sequence::preceded;
use nom::IResult;

/// How one logical character was written in the source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedCharFormat {
    /// A plain character.
    Default,
    /// The unescaped wildcard `*`.
    Protected,
    /// A `\HH` hex escape.
    Hex,
    /// A `\C` escape of a character that needs escaping here (DN specials).
    EscapedKnown,
    /// A `\C` escape with no syntactic reason.
    EscapedUnknown,
    /// A character outside the classification table.
    Undefined,
}

/// One logical character of a filter value after escape resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedChar {
    /// Original 1-3 byte spelling (`a`, `\*`, `\20`).
    pub content: String,
    /// What it stands for (`a`, `*`, a space).
    pub content_decoded: String,
    pub format: ParsedCharFormat,
    pub class: CharClass,
    pub case: CharCase,
    /// The source spelling was a hex escape.
    pub is_decoded: bool,
    /// The decoded byte is printable ASCII.
    pub is_printable: bool,
}

// "\" HEXDIG HEXDIG
fn hex_pair(i: &str) -> IResult<&str, u8> {
    preceded(
        char('\\'),
        map_res(
            take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
            |hh| u8::from_str_radix(hh, 16),
        ),
    )(i)
}

// Characters that must be escaped inside a DN value: RFC 4514 specials,
// plus leading space/# and trailing space.
fn is_dn_special(c: char, at_start: bool, at_end: bool) -> bool {
    match c {
        ',' | '\\' | '+' | '<' | '>' | ';' | '"' | '=' | '/' => true,
        ' ' => at_start || at_end,
        '#' => at_start,
        _ => false,
    }
}

fn undefined_char(c: char) -> ParsedChar {
    ParsedChar {
        content: c.to_string(),
        content_decoded: c.to_string(),
        format: ParsedCharFormat::Undefined,
        class: CharClass::Undefined,
        case: CharCase::Undefined,
        is_decoded: false,
        is_printable: false,
    }
}

/// Parses a filter value into its logical characters.
///
/// `is_dn` selects the DN escape classification: a `\C` escape of a DN
/// special character is `EscapedKnown` instead of `EscapedUnknown`.
pub fn parse_value(value: &str, is_dn: bool) -> Vec<ParsedChar> {
    let mut parsed = Vec::new();
    let mut rest = value;
    let mut at_start = true;

    while !rest.is_empty() {
        // \HH
        if let Ok((remaining, byte)) = hex_pair(rest) {
            let ctx = char_context(byte);
            parsed.push(ParsedChar {
                content: rest[..rest.len() - remaining.len()].to_string(),
                content_decoded: (byte as char).to_string(),
                format: ParsedCharFormat::Hex,
                class: ctx.class,
                case: ctx.case,
                is_decoded: true,
                is_printable: ctx.is_printable,
            });
            rest = remaining;
            at_start = false;
            continue;
        }

        let mut chars = rest.char_indices();
        let (_, c) = match chars.next() {
            Some(next) => next,
            None => break,
        };
        match c {
            '*' => {
                let ctx = char_context(b'*');
                parsed.push(ParsedChar {
                    content: "*".to_string(),
                    content_decoded: "*".to_string(),
                    format: ParsedCharFormat::Protected,
                    class: ctx.class,
                    case: ctx.case,
                    is_decoded: false,
                    is_printable: true,
                });
                rest = &rest[1..];
            }
            '\\' => match chars.next() {
                Some((escaped_at, escaped)) => {
                    let after = escaped_at + escaped.len_utf8();
                    let at_end = rest[after..].is_empty();
                    let format = if is_dn && is_dn_special(escaped, at_start, at_end) {
                        ParsedCharFormat::EscapedKnown
                    } else {
                        ParsedCharFormat::EscapedUnknown
                    };
                    let content = &rest[..after];
                    match char_context_of(escaped) {
                        Some(ctx) => parsed.push(ParsedChar {
                            content: content.to_string(),
                            content_decoded: content.to_string(),
                            format,
                            class: ctx.class,
                            case: ctx.case,
                            is_decoded: false,
                            is_printable: ctx.is_printable,
                        }),
                        None => parsed.push(ParsedChar {
                            content: content.to_string(),
                            content_decoded: content.to_string(),
                            format,
                            class: CharClass::Undefined,
                            case: CharCase::Undefined,
                            is_decoded: false,
                            is_printable: false,
                        }),
                    }
                    rest = &rest[after..];
                }
                // trailing backslash
                None => {
                    let ctx = char_context(b'\\');
                    parsed.push(ParsedChar {
                        content: "\\".to_string(),
                        content_decoded: "\\".to_string(),
                        format: ParsedCharFormat::EscapedUnknown,
                        class: ctx.class,
                        case: ctx.case,
                        is_decoded: false,
                        is_printable: true,
                    });
                    rest = "";
                }
            },
            _ => {
                let len = c.len_utf8();
                match char_context_of(c) {
                    Some(ctx) => parsed.push(ParsedChar {
                        content: c.to_string(),
                        content_decoded: c.to_string(),
                        format: ParsedCharFormat::Default,
                        class: ctx.class,
                        case: ctx.case,
                        is_decoded: false,
                        is_printable: ctx.is_printable,
                    }),
                    None => parsed.push(undefined_char(c)),
                }
                rest = &rest[len..];
            }
        }
        at_start = false;
    }
    parsed
}

/// Concatenated decoded form of a parsed value.
pub fn decode_value(parsed: &[ParsedChar]) -> String {
    parsed.iter().map(|p| p.content_decoded.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        let parsed = parse_value("sabi", false);
        assert_eq!(parsed.len(), 4);
        assert!(parsed.iter().all(|p| p.format == ParsedCharFormat::Default));
        assert_eq!(decode_value(&parsed), "sabi");
    }

    #[test]
    fn test_hex_escape() {
        let parsed = parse_value("kr\\62tgt", false);
        assert_eq!(parsed.len(), 6);
        assert_eq!(parsed[2].content, "\\62");
        assert_eq!(parsed[2].content_decoded, "b");
        assert_eq!(parsed[2].format, ParsedCharFormat::Hex);
        assert!(parsed[2].is_decoded);
        assert_eq!(decode_value(&parsed), "krbtgt");
    }

    #[test]
    fn test_hex_escape_control_char() {
        let parsed = parse_value("\\01", false);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].class, CharClass::ControlC0);
        assert!(!parsed[0].is_printable);
    }

    #[test]
    fn test_protected_wildcard() {
        let parsed = parse_value("a*b", false);
        assert_eq!(parsed[1].format, ParsedCharFormat::Protected);
        // escaped wildcard is not protected
        let parsed = parse_value("a\\*b", false);
        assert_eq!(parsed[1].format, ParsedCharFormat::EscapedUnknown);
    }

    #[test]
    fn test_incomplete_hex_is_literal_escape() {
        let parsed = parse_value("\\6", false);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].content, "\\6");
        assert_eq!(parsed[0].format, ParsedCharFormat::EscapedUnknown);
    }

    #[test]
    fn test_trailing_backslash() {
        let parsed = parse_value("abc\\", false);
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[3].content, "\\");
        assert_eq!(parsed[3].format, ParsedCharFormat::EscapedUnknown);
    }

    #[test]
    fn test_dn_specials() {
        let parsed = parse_value("a\\,b", true);
        assert_eq!(parsed[1].format, ParsedCharFormat::EscapedKnown);
        let parsed = parse_value("a\\,b", false);
        assert_eq!(parsed[1].format, ParsedCharFormat::EscapedUnknown);

        // leading space/# and trailing space are DN specials
        let parsed = parse_value("\\ x", true);
        assert_eq!(parsed[0].format, ParsedCharFormat::EscapedKnown);
        let parsed = parse_value("\\#x", true);
        assert_eq!(parsed[0].format, ParsedCharFormat::EscapedKnown);
        let parsed = parse_value("x\\ ", true);
        assert_eq!(parsed[1].format, ParsedCharFormat::EscapedKnown);
        let parsed = parse_value("x\\ y", true);
        assert_eq!(parsed[1].format, ParsedCharFormat::EscapedUnknown);
        let parsed = parse_value("x\\#y", true);
        assert_eq!(parsed[1].format, ParsedCharFormat::EscapedUnknown);
    }

    #[test]
    fn test_round_trip() {
        for value in ["kr\\62tgt", "a b c", "*", "\\2a\\2A", "caf\u{e9}", "x\\"] {
            let parsed = parse_value(value, false);
            let original: String = parsed.iter().map(|p| p.content.as_str()).collect();
            assert_eq!(original, *value);
        }
    }
}
