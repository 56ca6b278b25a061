//! Attribute and extensible-match-rule registries
//!
//! Lookup logic over the static schema tables in [`crate::schema_data`]:
//! attribute resolution by name (ASCII case-insensitive) or by object
//! identifier, EMR resolution, and OID recognition/normalization.

use crate::schema_data::{AttributeRow, EmrRow, SyntaxRow, ATTRIBUTES, EMR_RULES, SYNTAXES};
use lazy_static::lazy_static;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, opt, recognize};
use nom::multi::many1_count;
use nom::sequence::{pair, preceded};
use nom::IResult;
use std::collections::HashMap;

/// Semantic format of an attribute's values; drives bitwise decomposition,
/// DN sub-parsing, and many detection rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LdapAttributeValueFormat {
    String,
    Int,
    Bitwise,
    Boolean,
    DateTime,
    DnString,
    ByteArray,
    Undefined,
}

lazy_static! {
    static ref ATTRIBUTES_BY_NAME: HashMap<String, &'static AttributeRow> = {
        let mut m = HashMap::with_capacity(ATTRIBUTES.len());
        for row in ATTRIBUTES {
            m.insert(row.name.to_ascii_lowercase(), row);
        }
        m
    };
    static ref ATTRIBUTES_BY_OID: HashMap<&'static str, &'static AttributeRow> = {
        let mut m = HashMap::with_capacity(ATTRIBUTES.len());
        for row in ATTRIBUTES {
            m.insert(row.oid, row);
        }
        m
    };
    static ref SYNTAXES_BY_ID: HashMap<&'static str, &'static SyntaxRow> =
        SYNTAXES.iter().map(|row| (row.syntax_id, row)).collect();
}

// OID ::= [ "OID." ] 1*DIGIT 1*( "." 1*DIGIT )
fn oid_body(i: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, many1_count(preceded(char('.'), digit1))))(i)
}

fn oid_with_prefix(i: &str) -> IResult<&str, &str> {
    preceded(opt(tag_no_case("OID.")), oid_body)(i)
}

/// True iff `s` is an OID, optionally carrying the AD `OID.` prefix.
pub fn is_oid(s: &str) -> bool {
    all_consuming(oid_with_prefix)(s).is_ok()
}

/// Normalizes an OID string: drops a case-insensitive `OID.` prefix and
/// strips leading zeros from each octet while preserving a lone `0`.
///
/// Returns `None` when `s` is not an OID.
pub fn normalize_oid(s: &str) -> Option<String> {
    let (_, body) = all_consuming(oid_with_prefix)(s).ok()?;
    let octets: Vec<&str> = body
        .split('.')
        .map(|octet| {
            let trimmed = octet.trim_start_matches('0');
            if trimmed.is_empty() {
                "0"
            } else {
                trimmed
            }
        })
        .collect();
    Some(octets.join("."))
}

/// True iff normalizing `s` changes it (leading zeros or an `OID.` prefix).
pub fn oid_has_obfuscation(s: &str) -> bool {
    match normalize_oid(s) {
        Some(normalized) => normalized != s,
        None => false,
    }
}

/// Resolves an attribute by name (ASCII case-insensitive).
pub fn attribute_by_name(name: &str) -> Option<&'static AttributeRow> {
    ATTRIBUTES_BY_NAME.get(&name.to_ascii_lowercase()).copied()
}

/// Resolves an attribute by OID; `oid` may carry the `OID.` prefix or
/// zero-padded octets.
pub fn attribute_by_oid(oid: &str) -> Option<&'static AttributeRow> {
    let normalized = normalize_oid(oid)?;
    ATTRIBUTES_BY_OID.get(normalized.as_str()).copied()
}

/// Resolves an attribute the way the enricher does: OID syntax first, name
/// syntax otherwise.
pub fn resolve_attribute(content: &str) -> Option<&'static AttributeRow> {
    if is_oid(content) {
        attribute_by_oid(content)
    } else {
        attribute_by_name(content)
    }
}

/// Per-syntax metadata for an attribute row.
pub fn syntax_by_id(syntax_id: &str) -> Option<&'static SyntaxRow> {
    SYNTAXES_BY_ID.get(syntax_id).copied()
}

/// Resolves an extensible match rule by OID (normalized first).
pub fn emr_by_oid(oid: &str) -> Option<&'static EmrRow> {
    let normalized = normalize_oid(oid)?;
    EMR_RULES.iter().find(|row| row.oid == normalized)
}

/// Resolves an extensible match rule by name (ASCII case-insensitive).
pub fn emr_by_name(name: &str) -> Option<&'static EmrRow> {
    EMR_RULES
        .iter()
        .find(|row| row.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_oid() {
        assert!(is_oid("1.2.840.113556.1.4.8"));
        assert!(is_oid("OID.1.2.840.113556.1.4.8"));
        assert!(is_oid("oid.2.5.4.3"));
        assert!(!is_oid("1"));
        assert!(!is_oid("1.2.840."));
        assert!(!is_oid("name"));
        assert!(!is_oid("1.2.840.113556.1.4.8 "));
    }

    #[test]
    fn test_normalize_oid() {
        assert_eq!(
            normalize_oid("OID.1.2.840.0113556.1.04.008").as_deref(),
            Some("1.2.840.113556.1.4.8")
        );
        assert_eq!(normalize_oid("2.5.4.0").as_deref(), Some("2.5.4.0"));
        assert_eq!(normalize_oid("2.5.4.00").as_deref(), Some("2.5.4.0"));
        assert_eq!(normalize_oid("sn"), None);
    }

    #[test]
    fn test_attribute_lookup() {
        let row = attribute_by_name("useraccountcontrol").expect("known attribute");
        assert_eq!(row.name, "userAccountControl");
        assert_eq!(row.format, LdapAttributeValueFormat::Bitwise);

        let row = attribute_by_oid("1.2.840.113556.1.4.8").expect("known oid");
        assert_eq!(row.name, "userAccountControl");

        let row = attribute_by_oid("OID.1.2.840.113556.1.04.8").expect("obfuscated oid");
        assert_eq!(row.name, "userAccountControl");

        assert!(attribute_by_name("notAnAttribute").is_none());
    }

    #[test]
    fn test_emr_lookup() {
        let rule = emr_by_oid("1.2.840.113556.1.4.803").expect("bit-and rule");
        assert_eq!(rule.name, "LDAP_MATCHING_RULE_BIT_AND");
        let rule = emr_by_oid("1.2.840.113556.1.4.1941").expect("in-chain rule");
        assert_eq!(rule.name, "LDAP_MATCHING_RULE_IN_CHAIN");
        assert!(emr_by_oid("1.2.3").is_none());
        assert!(emr_by_name("ldap_matching_rule_bit_or").is_some());
    }

    #[test]
    fn test_syntax_metadata_present_for_all_rows() {
        for row in ATTRIBUTES {
            assert!(
                syntax_by_id(row.syntax).is_some(),
                "attribute {} references unknown syntax {}",
                row.name,
                row.syntax
            );
        }
    }
}
