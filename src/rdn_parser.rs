//! RDN sub-tokenization of DN-valued filter values
//!
//! A filter value that passes the DN validity check is split into
//! `Attribute / ComparisonOperator / Value / CommaDelimiter / Whitespace`
//! sub-tokens. Validation and splitting run over a sanitized copy of the
//! value in which escaped and hex-encoded structural characters are replaced
//! by length-preserving placeholders, so `=` and `,` are only visible where
//! they are structurally significant. Token offsets always index the
//! original value, and the sub-tokens concatenate back to it byte-exactly.

use crate::token::{LdapToken, LdapTokenType};

// Placeholder bytes. ESC fills both bytes of an escaped pair; HEX fills the
// two trailing bytes of a decoded \3D/\2C/\20 triple, whose decoded char
// sits at the first byte; QUOTE fills everything between double quotes.
const FILLER_ESC: u8 = 0x01;
const FILLER_HEX: u8 = 0x02;
const FILLER_QUOTE: u8 = 0x05;

/// Sanitizes a DN candidate. The result has the same byte length as the
/// input.
pub(crate) fn sanitize(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        // escaped pairs are consumed first, so an escaped quote never
        // closes an encapsulation
        if b == b'\\' && i + 1 < bytes.len() && matches!(bytes[i + 1], b'\\' | b'=' | b',' | b'"')
        {
            let filler = if in_quotes { FILLER_QUOTE } else { FILLER_ESC };
            out.push(filler);
            out.push(filler);
            i += 2;
            continue;
        }
        if in_quotes {
            if b == b'"' {
                in_quotes = false;
                out.push(b'"');
            } else {
                out.push(FILLER_QUOTE);
            }
            i += 1;
            continue;
        }
        match b {
            b'\\' if i + 1 < bytes.len() => {
                let next = bytes[i + 1];
                if i + 2 < bytes.len() {
                    match (next, bytes[i + 2]) {
                        (b'3', b'D') | (b'3', b'd') => {
                            out.extend_from_slice(&[b'=', FILLER_HEX, FILLER_HEX]);
                            i += 3;
                        }
                        (b'2', b'C') | (b'2', b'c') => {
                            out.extend_from_slice(&[b',', FILLER_HEX, FILLER_HEX]);
                            i += 3;
                        }
                        (b'2', b'0') => {
                            out.extend_from_slice(&[b' ', FILLER_HEX, FILLER_HEX]);
                            i += 3;
                        }
                        _ => {
                            out.push(b);
                            i += 1;
                        }
                    }
                } else {
                    out.push(b);
                    i += 1;
                }
            }
            b'"' => {
                in_quotes = true;
                out.push(b'"');
                i += 1;
            }
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }
    out
}

// One structural unit of the sanitized buffer: the byte at `i` plus, for a
// decoded hex escape, its two filler bytes.
#[inline]
fn unit_len(sanitized: &[u8], i: usize) -> usize {
    if i + 2 < sanitized.len()
        && sanitized[i + 1] == FILLER_HEX
        && sanitized[i + 2] == FILLER_HEX
    {
        3
    } else {
        1
    }
}

#[inline]
fn is_space_unit(sanitized: &[u8], i: usize) -> bool {
    sanitized[i] == b' '
}

// Collects the (start, unit_len) pairs of the sanitized buffer.
fn units(sanitized: &[u8]) -> Vec<(usize, usize)> {
    let mut list = Vec::new();
    let mut i = 0;
    while i < sanitized.len() {
        let len = unit_len(sanitized, i);
        list.push((i, len));
        i += len;
    }
    list
}

/// Validates a sanitized DN candidate.
///
/// Requirements: at least one structural `=`, exactly one more `=` than `,`,
/// and every comma-separated component carrying a single `=` preceded by at
/// least one non-whitespace unit. At most one leading `=` (the doubled
/// comparison-operator quirk) is ignored for validation.
pub(crate) fn is_dn(sanitized: &[u8]) -> bool {
    let unit_list = units(sanitized);
    let mut start = 0;
    if let Some(&(pos, _)) = unit_list.first() {
        if sanitized[pos] == b'=' {
            start = 1;
        }
    }
    let unit_list = &unit_list[start..];
    if unit_list.is_empty() {
        return false;
    }

    let eq_count = unit_list.iter().filter(|&&(p, _)| sanitized[p] == b'=').count();
    let comma_count = unit_list.iter().filter(|&&(p, _)| sanitized[p] == b',').count();
    if eq_count == 0 || eq_count as i64 - comma_count as i64 != 1 {
        return false;
    }

    // every component: exactly one '=', with a non-space unit before it
    let mut component_eq = 0usize;
    let mut component_has_attr = false;
    for &(pos, _) in unit_list {
        match sanitized[pos] {
            b',' => {
                if component_eq != 1 {
                    return false;
                }
                component_eq = 0;
                component_has_attr = false;
            }
            b'=' => {
                if !component_has_attr {
                    return false;
                }
                component_eq += 1;
            }
            b' ' => {}
            _ => {
                if component_eq == 0 {
                    component_has_attr = true;
                }
            }
        }
    }
    component_eq == 1
}

/// True iff `value` sanitizes and validates as a DN.
pub fn is_dn_value(value: &str) -> bool {
    is_dn(&sanitize(value))
}

/// Tokenizes a DN-valued filter value into RDN sub-tokens.
///
/// `base` is the absolute offset of the value in the filter source and
/// `depth` the owning `Value` token's depth; both are stamped onto every
/// sub-token. Returns `None` when the value fails DN validation.
pub fn tokenize_rdns(value: &str, base: usize, depth: i32) -> Option<Vec<LdapToken>> {
    let sanitized = sanitize(value);
    if !is_dn(&sanitized) {
        return None;
    }

    let mut tokens = Vec::new();
    let unit_list = units(&sanitized);
    let mut cursor = 0usize; // index into unit_list

    let emit = |tokens: &mut Vec<LdapToken>, token_type, from: usize, to: usize| {
        if to > from {
            tokens.push(LdapToken::new_rdn(
                token_type,
                &value[from..to],
                base + from,
                depth,
            ));
        }
    };

    // doubled comparison operator: a leading '=' belongs to no RDN
    if let Some(&(pos, len)) = unit_list.first() {
        if sanitized[pos] == b'=' {
            emit(&mut tokens, LdapTokenType::ComparisonOperator, pos, pos + len);
            cursor = 1;
        }
    }

    while cursor < unit_list.len() {
        // one RDN: [ws] attr [ws] = [ws] value [ws] [,]
        let rdn_start = cursor;
        let mut eq_at = None;
        let mut comma_at = None;
        for idx in rdn_start..unit_list.len() {
            let (pos, _) = unit_list[idx];
            match sanitized[pos] {
                b'=' if eq_at.is_none() => eq_at = Some(idx),
                b',' => {
                    comma_at = Some(idx);
                    break;
                }
                _ => {}
            }
        }
        let eq_at = eq_at?; // guaranteed by is_dn
        let rdn_end = comma_at.unwrap_or(unit_list.len());

        // leading whitespace then attribute then whitespace before '='
        let mut idx = rdn_start;
        let ws_start = idx;
        while idx < eq_at && is_space_unit(&sanitized, unit_list[idx].0) {
            idx += 1;
        }
        emit(
            &mut tokens,
            LdapTokenType::Whitespace,
            unit_list[ws_start].0,
            unit_list[idx].0,
        );
        let attr_start = idx;
        let mut attr_end = eq_at;
        while attr_end > attr_start && is_space_unit(&sanitized, unit_list[attr_end - 1].0) {
            attr_end -= 1;
        }
        emit(
            &mut tokens,
            LdapTokenType::Attribute,
            unit_list[attr_start].0,
            unit_list[attr_end].0,
        );
        emit(
            &mut tokens,
            LdapTokenType::Whitespace,
            unit_list[attr_end].0,
            unit_list[eq_at].0,
        );

        // comparison operator (1 byte, or 3 when hex-encoded)
        let (eq_pos, eq_len) = unit_list[eq_at];
        emit(
            &mut tokens,
            LdapTokenType::ComparisonOperator,
            eq_pos,
            eq_pos + eq_len,
        );

        // whitespace, value, trailing whitespace
        let mut idx = eq_at + 1;
        let ws_start = idx;
        while idx < rdn_end && is_space_unit(&sanitized, unit_list[idx].0) {
            idx += 1;
        }
        emit(
            &mut tokens,
            LdapTokenType::Whitespace,
            unit_list.get(ws_start).map(|u| u.0).unwrap_or_else(|| value.len()),
            unit_list.get(idx).map(|u| u.0).unwrap_or_else(|| value.len()),
        );
        let value_start = idx;
        let mut value_end = rdn_end;
        while value_end > value_start && is_space_unit(&sanitized, unit_list[value_end - 1].0) {
            value_end -= 1;
        }
        let value_start_pos = unit_list
            .get(value_start)
            .map(|u| u.0)
            .unwrap_or_else(|| value.len());
        let value_end_pos = unit_list
            .get(value_end)
            .map(|u| u.0)
            .unwrap_or_else(|| value.len());
        emit(&mut tokens, LdapTokenType::Value, value_start_pos, value_end_pos);
        let rdn_end_pos = match comma_at {
            Some(idx) => unit_list[idx].0,
            None => value.len(),
        };
        emit(&mut tokens, LdapTokenType::Whitespace, value_end_pos, rdn_end_pos);

        // comma delimiter (1 byte, or 3 when hex-encoded), absent on the
        // final RDN
        match comma_at {
            Some(idx) => {
                let (pos, len) = unit_list[idx];
                emit(&mut tokens, LdapTokenType::CommaDelimiter, pos, pos + len);
                cursor = idx + 1;
            }
            None => break,
        }
    }

    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(tokens: &[LdapToken]) -> Vec<(&LdapTokenType, &str)> {
        tokens
            .iter()
            .map(|t| (&t.token_type, t.content.as_str()))
            .collect()
    }

    #[test]
    fn test_is_dn_value() {
        assert!(is_dn_value("CN=dbo,CN=Users,DC=contoso,DC=local"));
        assert!(is_dn_value("CN=dbo"));
        assert!(is_dn_value(" CN = dbo , DC = local "));
        assert!(!is_dn_value("dbo"));
        assert!(!is_dn_value("CN=dbo,CN"));
        assert!(!is_dn_value("=dbo"));
        assert!(!is_dn_value("a=b=c"));
        assert!(!is_dn_value(""));
        // escaped '=' is not structural
        assert!(!is_dn_value("a\\=b"));
        // hex-encoded '=' is
        assert!(is_dn_value("CN\\3Ddbo"));
    }

    #[test]
    fn test_simple_dn_tokens() {
        let tokens = tokenize_rdns("CN=dbo,DC=local", 0, 1).expect("valid dn");
        assert_eq!(
            contents(&tokens),
            vec![
                (&LdapTokenType::Attribute, "CN"),
                (&LdapTokenType::ComparisonOperator, "="),
                (&LdapTokenType::Value, "dbo"),
                (&LdapTokenType::CommaDelimiter, ","),
                (&LdapTokenType::Attribute, "DC"),
                (&LdapTokenType::ComparisonOperator, "="),
                (&LdapTokenType::Value, "local"),
            ]
        );
        let rebuilt: String = tokens.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(rebuilt, "CN=dbo,DC=local");
    }

    #[test]
    fn test_dn_with_whitespace() {
        let source = " CN = dbo , DC = local";
        let tokens = tokenize_rdns(source, 10, 2).expect("valid dn");
        let rebuilt: String = tokens.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(rebuilt, source);
        assert_eq!(tokens[0].token_type, LdapTokenType::Whitespace);
        assert_eq!(tokens[0].start, 10);
        assert!(tokens.iter().all(|t| t.depth == 2));
        assert!(tokens
            .iter()
            .all(|t| t.sub_type == crate::token::LdapTokenSubType::Rdn));
    }

    #[test]
    fn test_dn_with_hex_encoded_operators() {
        let source = "CN\\3Ddbo\\2CDC=local";
        let tokens = tokenize_rdns(source, 0, 0).expect("valid dn");
        assert_eq!(
            contents(&tokens),
            vec![
                (&LdapTokenType::Attribute, "CN"),
                (&LdapTokenType::ComparisonOperator, "\\3D"),
                (&LdapTokenType::Value, "dbo"),
                (&LdapTokenType::CommaDelimiter, "\\2C"),
                (&LdapTokenType::Attribute, "DC"),
                (&LdapTokenType::ComparisonOperator, "="),
                (&LdapTokenType::Value, "local"),
            ]
        );
    }

    #[test]
    fn test_dn_with_quoted_value() {
        let source = "CN=\"dbo, the = admin\",DC=local";
        let tokens = tokenize_rdns(source, 0, 0).expect("valid dn");
        let rebuilt: String = tokens.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(rebuilt, source);
        assert_eq!(tokens[2].token_type, LdapTokenType::Value);
        assert_eq!(tokens[2].content, "\"dbo, the = admin\"");
    }

    #[test]
    fn test_doubled_comparison_operator() {
        let source = "=CN=dbo";
        let tokens = tokenize_rdns(source, 0, 0).expect("valid dn");
        assert_eq!(
            contents(&tokens),
            vec![
                (&LdapTokenType::ComparisonOperator, "="),
                (&LdapTokenType::Attribute, "CN"),
                (&LdapTokenType::ComparisonOperator, "="),
                (&LdapTokenType::Value, "dbo"),
            ]
        );
        let rebuilt: String = tokens.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_escaped_comma_stays_in_value() {
        let source = "CN=dbo\\,jr,DC=local";
        let tokens = tokenize_rdns(source, 0, 0).expect("valid dn");
        assert_eq!(tokens[2].content, "dbo\\,jr");
    }
}
