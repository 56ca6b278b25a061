//! Search-filter tokenizer
//!
//! Single forward pass over the filter string, emitting a flat,
//! position-preserving [`LdapToken`] sequence. Malformed input (unbalanced
//! parentheses, missing comparison operators, server-side shorthand
//! operators) is recovered from and recorded in the [`Diagnostics`] sink;
//! the emitted stream always concatenates back to the (possibly
//! shorthand-rewritten) source byte-for-byte.

use crate::error::{DiagnosticKind, Diagnostics};
use crate::rdn_parser::tokenize_rdns;
use crate::token::{LdapToken, LdapTokenType};

const BIT_AND_OID: &str = "1.2.840.113556.1.4.803";
const BIT_OR_OID: &str = "1.2.840.113556.1.4.804";
const IN_CHAIN_OID: &str = "1.2.840.113556.1.4.1941";

/// Tokenizes a search filter, discarding diagnostics (they are still logged
/// through `tracing`).
pub fn tokenize(filter: &str) -> Vec<LdapToken> {
    let mut diags = Diagnostics::new();
    tokenize_with_diagnostics(filter, &mut diags)
}

/// Tokenizes a search filter, collecting recovered parse problems.
pub fn tokenize_with_diagnostics(filter: &str, diags: &mut Diagnostics) -> Vec<LdapToken> {
    let mut source = filter.to_string();
    let mut tokens: Vec<LdapToken> = Vec::new();
    let mut depth: i32 = 0;
    let mut i = 0;

    while i < source.len() {
        match source.as_bytes()[i] {
            b'(' => {
                reparent_trailing_operators(&mut tokens, depth);
                tokens.push(LdapToken::new(LdapTokenType::GroupStart, "(", i, depth));
                depth += 1;
                i += 1;
            }
            b')' => {
                depth -= 1;
                if depth < 0 {
                    diags.push(
                        DiagnosticKind::NegativeDepth,
                        i,
                        "group end without matching group start",
                    );
                }
                tokens.push(LdapToken::new(LdapTokenType::GroupEnd, ")", i, depth));
                i += 1;
            }
            b' ' => {
                let start = i;
                while i < source.len() && source.as_bytes()[i] == b' ' {
                    i += 1;
                }
                // a Whitespace token directly after a GroupEnd carries the
                // GroupEnd's depth
                let ws_depth = match tokens.last() {
                    Some(t) if t.token_type == LdapTokenType::GroupEnd => t.depth,
                    _ => depth,
                };
                tokens.push(LdapToken::new(
                    LdapTokenType::Whitespace,
                    &source[start..i],
                    start,
                    ws_depth,
                ));
            }
            b'&' | b'|' | b'!' => {
                let op_depth = inherited_operator_depth(&tokens, depth);
                tokens.push(LdapToken::new(
                    LdapTokenType::BooleanOperator,
                    &source[i..i + 1],
                    i,
                    op_depth,
                ));
                i += 1;
            }
            _ => {
                parse_filter_body(&mut source, &mut tokens, &mut i, depth, diags);
            }
        }
    }

    if depth > 0 {
        diags.push(
            DiagnosticKind::UnterminatedGroup,
            source.len(),
            format!("end of input with {} open group(s)", depth),
        );
    }
    tokens
}

// A BooleanOperator run directly after a GroupStart (whitespace allowed in
// between) inherits the GroupStart's depth.
fn inherited_operator_depth(tokens: &[LdapToken], current: i32) -> i32 {
    for t in tokens.iter().rev() {
        match t.token_type {
            LdapTokenType::BooleanOperator | LdapTokenType::Whitespace => continue,
            LdapTokenType::GroupStart => return t.depth,
            _ => return current,
        }
    }
    current
}

// A trailing BooleanOperator/Whitespace run preceding a GroupStart never
// sits deeper than the group it opens.
fn reparent_trailing_operators(tokens: &mut Vec<LdapToken>, group_depth: i32) {
    for t in tokens.iter_mut().rev() {
        match t.token_type {
            LdapTokenType::Whitespace => continue,
            LdapTokenType::BooleanOperator => {
                if t.depth > group_depth {
                    t.depth = group_depth;
                }
            }
            _ => break,
        }
    }
}

// Balanced-parenthesis scan for the end of the filter body starting at
// `start`; escaped characters never terminate the body.
fn find_body_end(source: &str, start: usize) -> usize {
    let bytes = source.as_bytes();
    let mut nest = 0u32;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'(' => {
                nest += 1;
                i += 1;
            }
            b')' => {
                if nest == 0 {
                    return i;
                }
                nest -= 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    bytes.len()
}

// First '=' that is not part of an escape sequence.
fn find_eq(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'=' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

// Rewrites Microsoft server-side shorthand (`attr&value`, `attr|value`,
// `attr<==>value`) and the literal `UNDEFINED` body in place. Returns the
// new body end.
fn normalize_body(
    source: &mut String,
    start: usize,
    end: usize,
    diags: &mut Diagnostics,
) -> usize {
    let body = &source[start..end];

    if body == "UNDEFINED" {
        diags.push(
            DiagnosticKind::UndefinedBodyRewritten,
            start,
            "literal UNDEFINED body rewritten to UNDEFINED=UNDEFINED",
        );
        source.replace_range(start..end, "UNDEFINED=UNDEFINED");
        return start + "UNDEFINED=UNDEFINED".len();
    }

    let rewritten = match find_eq(body) {
        // attr<==>value: the first '=' sits inside the shorthand
        Some(eq) => {
            let b = body.as_bytes();
            if eq > 0
                && eq + 2 < b.len()
                && b[eq - 1] == b'<'
                && b[eq + 1] == b'='
                && b[eq + 2] == b'>'
            {
                let attr = &body[..eq - 1];
                let value = &body[eq + 3..];
                Some((format!("{}:{}:={}", attr, IN_CHAIN_OID, value), "<==>"))
            } else {
                None
            }
        }
        // attr&value / attr|value
        None => body
            .bytes()
            .position(|b| b == b'&' || b == b'|')
            .filter(|&op| op > 0 && op + 1 < body.len())
            .map(|op| {
                let oid = if body.as_bytes()[op] == b'&' {
                    BIT_AND_OID
                } else {
                    BIT_OR_OID
                };
                let rewritten = format!("{}:{}:={}", &body[..op], oid, &body[op + 1..]);
                let original = if body.as_bytes()[op] == b'&' { "&" } else { "|" };
                (rewritten, original)
            }),
    };

    match rewritten {
        Some((new_body, shorthand)) => {
            diags.push(
                DiagnosticKind::ShorthandRewritten,
                start,
                format!("shorthand '{}' operator rewritten to extensible match", shorthand),
            );
            let new_end = start + new_body.len();
            source.replace_range(start..end, &new_body);
            new_end
        }
        None => end,
    }
}

// Parses one filter body (attribute, optional extensible match rule,
// comparison operator, value) starting at `*cursor`; leaves the cursor on
// the closing ')'.
fn parse_filter_body(
    source: &mut String,
    tokens: &mut Vec<LdapToken>,
    cursor: &mut usize,
    depth: i32,
    diags: &mut Diagnostics,
) {
    let start = *cursor;
    let end = find_body_end(source, start);
    let end = normalize_body(source, start, end, diags);
    let body = source[start..end].to_string();

    match find_eq(&body) {
        None => {
            // quirk preserved from the wild: a body with no comparison
            // operator is consumed whole as attribute (plus EMR split)
            if !body.is_empty() {
                diags.push(
                    DiagnosticKind::MissingComparisonOperator,
                    start,
                    "filter body has no comparison operator",
                );
            }
            emit_lhs(tokens, &body, start, depth);
        }
        Some(eq) => {
            let mut op_start = eq;
            if eq > 0 && matches!(body.as_bytes()[eq - 1], b'~' | b'<' | b'>') {
                op_start -= 1;
            }
            emit_lhs(tokens, &body[..op_start], start, depth);
            tokens.push(LdapToken::new(
                LdapTokenType::ComparisonOperator,
                &body[op_start..eq + 1],
                start + op_start,
                depth,
            ));
            emit_value(tokens, &body[eq + 1..], start + eq + 1, depth);
        }
    }
    *cursor = end;
}

// Emits `[ws] attr [ws] [emr] [ws]` for the left-hand side of a filter body.
fn emit_lhs(tokens: &mut Vec<LdapToken>, lhs: &str, base: usize, depth: i32) {
    let emit = |tokens: &mut Vec<LdapToken>, token_type, from: usize, to: usize| {
        if to > from {
            tokens.push(LdapToken::new(token_type, &lhs[from..to], base + from, depth));
        }
    };

    let ws_end = lhs.len() - lhs.trim_start_matches(' ').len();
    emit(tokens, LdapTokenType::Whitespace, 0, ws_end);
    let trimmed_end = lhs.trim_end_matches(' ').len();
    if trimmed_end <= ws_end {
        return;
    }
    let core = &lhs[ws_end..trimmed_end];

    // :emr: is the trailing colon-delimited segment of the lhs
    let emr_split = match core.find(':') {
        Some(colon) if core.ends_with(':') && colon + 1 < core.len() => Some(colon),
        _ => None,
    };
    match emr_split {
        Some(colon) => {
            let attr_part = &core[..colon];
            let attr_end = attr_part.trim_end_matches(' ').len();
            emit(tokens, LdapTokenType::Attribute, ws_end, ws_end + attr_end);
            emit(tokens, LdapTokenType::Whitespace, ws_end + attr_end, ws_end + colon);
            emit(
                tokens,
                LdapTokenType::ExtensibleMatchFilter,
                ws_end + colon,
                trimmed_end,
            );
        }
        None => {
            emit(tokens, LdapTokenType::Attribute, ws_end, trimmed_end);
        }
    }
    emit(tokens, LdapTokenType::Whitespace, trimmed_end, lhs.len());
}

// Escape-aware unit scan of a value: `\HH` is one 3-byte unit, `\C` one
// 2-byte unit. Literal spaces and `\20` count as whitespace units.
fn value_units(rhs: &str) -> Vec<(usize, usize, bool)> {
    let bytes = rhs.as_bytes();
    let mut units = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let len = if bytes[i] == b'\\' {
            if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit()
            {
                3
            } else if i + 1 < bytes.len() {
                2
            } else {
                1
            }
        } else {
            1
        };
        let len = len.min(bytes.len() - i);
        let is_ws = &rhs[i..i + len] == " " || &rhs[i..i + len] == "\\20";
        units.push((i, len, is_ws));
        i += len;
    }
    units
}

// Emits `[ws] value [ws]` for the right-hand side of a filter body, with
// bookend whitespace (literal or `\20`) split off. A value parsing as a DN
// gets its RDN sub-tokens attached.
fn emit_value(tokens: &mut Vec<LdapToken>, rhs: &str, base: usize, depth: i32) {
    let units = value_units(rhs);
    let leading = units.iter().take_while(|&&(_, _, ws)| ws).count();
    let trailing = units[leading..]
        .iter()
        .rev()
        .take_while(|&&(_, _, ws)| ws)
        .count();

    let value_from = units
        .get(leading)
        .map(|&(p, _, _)| p)
        .unwrap_or_else(|| rhs.len());
    let value_to = if trailing == 0 {
        rhs.len()
    } else {
        units[units.len() - trailing].0
    };

    if value_from > 0 {
        tokens.push(LdapToken::new(
            LdapTokenType::Whitespace,
            &rhs[..value_from],
            base,
            depth,
        ));
    }
    if value_to > value_from {
        let content = &rhs[value_from..value_to];
        let mut token = LdapToken::new(LdapTokenType::Value, content, base + value_from, depth);
        if let Some(sub_tokens) = tokenize_rdns(content, base + value_from, depth) {
            token.sub_tokens = sub_tokens;
        }
        tokens.push(token);
    }
    if value_to < rhs.len() {
        tokens.push(LdapToken::new(
            LdapTokenType::Whitespace,
            &rhs[value_to..],
            base + value_to,
            depth,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(tokens: &[LdapToken]) -> Vec<(LdapTokenType, &str, i32)> {
        tokens
            .iter()
            .map(|t| (t.token_type, t.content.as_str(), t.depth))
            .collect()
    }

    fn rebuilt(tokens: &[LdapToken]) -> String {
        tokens.iter().map(|t| t.content.as_str()).collect()
    }

    #[test]
    fn test_tokenize_two_filter_or() {
        let tokens = tokenize("(|(name=sabi)(name=dbo))");
        assert_eq!(tokens.len(), 13);
        assert_eq!(
            kinds(&tokens),
            vec![
                (LdapTokenType::GroupStart, "(", 0),
                (LdapTokenType::BooleanOperator, "|", 0),
                (LdapTokenType::GroupStart, "(", 1),
                (LdapTokenType::Attribute, "name", 2),
                (LdapTokenType::ComparisonOperator, "=", 2),
                (LdapTokenType::Value, "sabi", 2),
                (LdapTokenType::GroupEnd, ")", 1),
                (LdapTokenType::GroupStart, "(", 1),
                (LdapTokenType::Attribute, "name", 2),
                (LdapTokenType::ComparisonOperator, "=", 2),
                (LdapTokenType::Value, "dbo", 2),
                (LdapTokenType::GroupEnd, ")", 1),
                (LdapTokenType::GroupEnd, ")", 0),
            ]
        );
        assert_eq!(rebuilt(&tokens), "(|(name=sabi)(name=dbo))");
    }

    #[test]
    fn test_max_depth_matches_nesting() {
        let tokens = tokenize("(|(name=sabi)(name=dbo))");
        assert_eq!(tokens.iter().map(|t| t.depth).max(), Some(2));
    }

    #[test]
    fn test_whitespace_everywhere() {
        let source = " ( & ( 1.2.840.113556.1.4.8 :1.2.840.113556.1.4.804:= 512 ) )";
        let mut diags = Diagnostics::new();
        let tokens = tokenize_with_diagnostics(source, &mut diags);
        assert_eq!(rebuilt(&tokens), source);
        assert!(diags.is_empty());
        let emr = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::ExtensibleMatchFilter)
            .expect("emr token");
        assert_eq!(emr.content, ":1.2.840.113556.1.4.804:");
        let attr = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::Attribute)
            .expect("attribute token");
        assert_eq!(attr.content, "1.2.840.113556.1.4.8");
        let value = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::Value)
            .expect("value token");
        assert_eq!(value.content, "512");
    }

    #[test]
    fn test_leading_whitespace_depth_zero() {
        let tokens = tokenize("  (a=b)");
        assert_eq!(tokens[0].token_type, LdapTokenType::Whitespace);
        assert_eq!(tokens[0].depth, 0);
    }

    #[test]
    fn test_operator_inherits_group_start_depth() {
        let tokens = tokenize("(&(a=b))");
        assert_eq!(tokens[1].token_type, LdapTokenType::BooleanOperator);
        assert_eq!(tokens[1].depth, 0);
        // chained operators all inherit
        let tokens = tokenize("(&!!|(a=b))");
        for t in &tokens[1..5] {
            assert_eq!(t.token_type, LdapTokenType::BooleanOperator);
            assert_eq!(t.depth, 0);
        }
    }

    #[test]
    fn test_two_char_comparison_operators() {
        for (source, op) in [
            ("(a>=1)", ">="),
            ("(a<=1)", "<="),
            ("(a~=1)", "~="),
        ] {
            let tokens = tokenize(source);
            let comp = tokens
                .iter()
                .find(|t| t.token_type == LdapTokenType::ComparisonOperator)
                .expect("comparison operator");
            assert_eq!(comp.content, op);
            assert_eq!(rebuilt(&tokens), source);
        }
    }

    #[test]
    fn test_shorthand_bit_and() {
        let mut diags = Diagnostics::new();
        let tokens = tokenize_with_diagnostics("(userAccountControl&512)", &mut diags);
        assert_eq!(
            rebuilt(&tokens),
            "(userAccountControl:1.2.840.113556.1.4.803:=512)"
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.entries()[0].kind, DiagnosticKind::ShorthandRewritten);
        let emr = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::ExtensibleMatchFilter)
            .expect("emr token");
        assert_eq!(emr.content, ":1.2.840.113556.1.4.803:");
    }

    #[test]
    fn test_shorthand_bit_or() {
        let tokens = tokenize("(sAMAccountType|805306368)");
        assert_eq!(
            rebuilt(&tokens),
            "(sAMAccountType:1.2.840.113556.1.4.804:=805306368)"
        );
    }

    #[test]
    fn test_shorthand_in_chain() {
        let tokens = tokenize("(memberOf<==>CN=Domain Admins,DC=x)");
        assert_eq!(
            rebuilt(&tokens),
            "(memberOf:1.2.840.113556.1.4.1941:=CN=Domain Admins,DC=x)"
        );
        let value = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::Value)
            .expect("value token");
        assert!(!value.sub_tokens.is_empty());
    }

    #[test]
    fn test_undefined_body_rewrite() {
        let mut diags = Diagnostics::new();
        let tokens = tokenize_with_diagnostics("(UNDEFINED)", &mut diags);
        assert_eq!(rebuilt(&tokens), "(UNDEFINED=UNDEFINED)");
        assert_eq!(diags.entries()[0].kind, DiagnosticKind::UndefinedBodyRewritten);
    }

    #[test]
    fn test_negative_depth_reported() {
        let mut diags = Diagnostics::new();
        let tokens = tokenize_with_diagnostics(")(a=b)", &mut diags);
        assert_eq!(tokens[0].token_type, LdapTokenType::GroupEnd);
        assert_eq!(tokens[0].depth, -1);
        assert_eq!(diags.entries()[0].kind, DiagnosticKind::NegativeDepth);
        assert_eq!(rebuilt(&tokens), ")(a=b)");
    }

    #[test]
    fn test_unterminated_group_reported() {
        let mut diags = Diagnostics::new();
        let tokens = tokenize_with_diagnostics("(a=b", &mut diags);
        assert_eq!(rebuilt(&tokens), "(a=b");
        assert!(diags
            .entries()
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnterminatedGroup));
    }

    #[test]
    fn test_value_with_escaped_parenthesis() {
        let tokens = tokenize("(cn=a\\28b\\29c)");
        let value = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::Value)
            .expect("value token");
        assert_eq!(value.content, "a\\28b\\29c");
        assert_eq!(rebuilt(&tokens), "(cn=a\\28b\\29c)");
    }

    #[test]
    fn test_value_bookend_whitespace_split() {
        let tokens = tokenize("(cn=\\20 dbo \\20)");
        assert_eq!(
            kinds(&tokens)[2..6].to_vec(),
            vec![
                (LdapTokenType::ComparisonOperator, "=", 1),
                (LdapTokenType::Whitespace, "\\20 ", 1),
                (LdapTokenType::Value, "dbo", 1),
                (LdapTokenType::Whitespace, " \\20", 1),
            ]
        );
        assert_eq!(rebuilt(&tokens), "(cn=\\20 dbo \\20)");
    }

    #[test]
    fn test_dn_value_gets_sub_tokens() {
        let tokens = tokenize("(distinguishedName=CN=\"dbo\",CN=Users,DC=contoso,DC=local)");
        let value = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::Value)
            .expect("value token");
        assert_eq!(value.sub_tokens.len(), 15);
        let sub: String = value.sub_tokens.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(sub, value.content);
    }

    #[test]
    fn test_filter_without_comparison_operator() {
        let mut diags = Diagnostics::new();
        let tokens = tokenize_with_diagnostics("(objectClass)", &mut diags);
        // no '=' and no shorthand: whole body becomes the attribute
        assert_eq!(
            kinds(&tokens),
            vec![
                (LdapTokenType::GroupStart, "(", 0),
                (LdapTokenType::Attribute, "objectClass", 1),
                (LdapTokenType::GroupEnd, ")", 0),
            ]
        );
        assert!(diags
            .entries()
            .iter()
            .any(|d| d.kind == DiagnosticKind::MissingComparisonOperator));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_presence_filter() {
        let tokens = tokenize("(servicePrincipalName=*)");
        let value = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::Value)
            .expect("value token");
        assert_eq!(value.content, "*");
    }
}
