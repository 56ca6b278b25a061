//! Detection rule evaluation functions
//!
//! One pure function per rule; the catalog metadata and dispatch live in
//! [`crate::detect`]. Rules compare against the `"Undefined"` sentinels the
//! enricher leaves behind instead of failing, so evaluation never errors.

use crate::charclass::CharClass;
use crate::context::{cancel_double_negations, LogicalBooleanOperator};
use crate::detect::{RuleHit, RuleThresholds};
use crate::filter::{LdapBranch, LdapBranchChild, LdapBranchKind, LdapFilter};
use crate::schema::LdapAttributeValueFormat;
use crate::token::{LdapTokenEnriched, LdapTokenType};
use crate::value_parser::{ParsedChar, ParsedCharFormat};

/// Value strings whose presence in a filter marks sensitive-object hunting.
pub const SENSITIVE_VALUES: &[&str] = &[
    "krbtgt",
    "Domain Admins",
    "Domain Controllers",
    "trustedDomain",
    "Key Distribution Center Service Account",
    "Designated administrators of the domain",
    "All domain controllers in the domain",
    "password",
    "administrator",
];

/// Attributes whose mere presence probe is suspicious.
pub const SENSITIVE_ATTRIBUTES: &[&str] = &[
    "msDS-ExecuteScriptPassword",
    "msDS-ManagedPassword",
    "msFVE-RecoveryPassword",
    "userPassword",
    "unicodePwd",
    "unixUserPassword",
    "msSFU30Password",
    "orclCommonAttribute",
    "defender-tokenData",
    "ms-Mcs-AdmPwd",
    "servicePrincipalName",
];

// suspicious bit positions per bitwise attribute
const UAC_SUSPICIOUS_BITS: &[u64] = &[32, 128, 524288, 4194304, 16777216];
const GROUP_TYPE_SUSPICIOUS_BITS: &[u64] = &[2147483648];
const SAM_ACCOUNT_TYPE_SUSPICIOUS_BITS: &[u64] = &[1, 2];

// ------------------------------------------------------------------ helpers

fn token_hit(token: &LdapTokenEnriched) -> RuleHit {
    RuleHit {
        depth: token.depth,
        start: token.start,
        content: token.content.clone(),
        content_decoded: token.content_decoded.clone(),
    }
}

fn filter_hit(filter: &LdapFilter) -> RuleHit {
    RuleHit {
        depth: filter.depth,
        start: filter.start,
        content: filter.content.clone(),
        content_decoded: filter.content_decoded.clone(),
    }
}

fn value_hit(filter: &LdapFilter) -> RuleHit {
    match &filter.token_dict.value {
        Some(value) => {
            let decoded = filter
                .context
                .value
                .as_ref()
                .map(|ctx| ctx.content_decoded.clone())
                .unwrap_or_else(|| value.content_decoded.clone());
            RuleHit {
                depth: value.depth,
                start: value.start,
                content: value.content.clone(),
                content_decoded: decoded,
            }
        }
        None => filter_hit(filter),
    }
}

fn branch_hit(branch: &LdapBranch) -> RuleHit {
    RuleHit {
        depth: branch.depth,
        start: branch.start,
        content: branch.content.clone(),
        content_decoded: branch.content_decoded.clone(),
    }
}

fn stream_hit(tokens: &[LdapTokenEnriched]) -> RuleHit {
    RuleHit {
        depth: 0,
        start: tokens.first().map(|t| t.start).unwrap_or(0),
        content: tokens.iter().map(|t| t.content.as_str()).collect(),
        content_decoded: tokens.iter().map(|t| t.content_decoded.as_str()).collect(),
    }
}

fn parsed_chars(filter: &LdapFilter) -> &[ParsedChar] {
    filter
        .context
        .value
        .as_ref()
        .map(|ctx| ctx.content_parsed_list.as_slice())
        .unwrap_or(&[])
}

fn value_format(filter: &LdapFilter) -> Option<LdapAttributeValueFormat> {
    filter.context.value.as_ref().and_then(|ctx| ctx.format)
}

fn value_decoded(filter: &LdapFilter) -> &str {
    filter
        .context
        .value
        .as_ref()
        .map(|ctx| ctx.content_decoded.as_str())
        .unwrap_or("")
}

fn has_wildcard(filter: &LdapFilter) -> bool {
    parsed_chars(filter)
        .iter()
        .any(|p| p.format == ParsedCharFormat::Protected)
}

fn attribute_defined(filter: &LdapFilter) -> bool {
    filter
        .token_dict
        .attribute
        .as_ref()
        .map(|t| t.is_defined)
        .unwrap_or(false)
}

fn chain_of(filter: &LdapFilter) -> String {
    match &filter.context.boolean_operator {
        Some(ctx) => {
            let list: String = ctx
                .filter_list_boolean_operator_token_list
                .iter()
                .map(|op| op.operator())
                .collect();
            let filter_ops: String = ctx
                .filter_boolean_operator_token_list
                .iter()
                .map(|op| op.operator())
                .collect();
            format!("{}{}", list, filter_ops)
        }
        None => String::new(),
    }
}

fn inclusion(filter: &LdapFilter) -> bool {
    filter
        .context
        .boolean_operator
        .as_ref()
        .map(|ctx| ctx.logical_filter_inclusion)
        .unwrap_or(true)
}

fn rdn_tokens(filter: &LdapFilter) -> &[LdapTokenEnriched] {
    filter
        .token_dict
        .value
        .as_ref()
        .map(|v| v.sub_tokens.as_slice())
        .unwrap_or(&[])
}

fn contains_hex_escape(content: &str) -> bool {
    let bytes = content.as_bytes();
    bytes.windows(3).any(|w| {
        w[0] == b'\\' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit()
    })
}

// case-insensitive containment of a sensitive literal
fn contains_sensitive(decoded: &str) -> Option<&'static str> {
    let lowered = decoded.to_ascii_lowercase();
    SENSITIVE_VALUES
        .iter()
        .find(|s| lowered.contains(&s.to_ascii_lowercase()))
        .copied()
}

// glob match of the parsed value (Protected chars are wildcards) against a
// candidate string
fn wildcard_pattern_matches(parsed: &[ParsedChar], candidate: &str) -> bool {
    let mut segments: Vec<String> = vec![String::new()];
    let mut saw_wildcard = false;
    for p in parsed {
        if p.format == ParsedCharFormat::Protected {
            saw_wildcard = true;
            segments.push(String::new());
        } else if let Some(last) = segments.last_mut() {
            last.push_str(&p.content_decoded.to_ascii_lowercase());
        }
    }
    if !saw_wildcard || segments.iter().all(|s| s.is_empty()) {
        return false;
    }
    let candidate = candidate.to_ascii_lowercase();
    let anchored_start = !segments[0].is_empty();
    let anchored_end = !segments[segments.len() - 1].is_empty();
    let mut rest = candidate.as_str();
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        match rest.find(segment.as_str()) {
            Some(pos) => {
                if i == 0 && anchored_start && pos != 0 {
                    return false;
                }
                rest = &rest[pos + segment.len()..];
            }
            None => return false,
        }
    }
    if anchored_end && !candidate.ends_with(segments[segments.len() - 1].as_str()) {
        return false;
    }
    true
}

// --------------------------------------------------------- token-level rules

pub(crate) fn boolean_operator_excessive_count(
    tokens: &[LdapTokenEnriched],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    let count = tokens
        .iter()
        .filter(|tok| tok.token_type == LdapTokenType::BooleanOperator)
        .count();
    if count > t.boolean_operator_count {
        vec![stream_hit(tokens)]
    } else {
        Vec::new()
    }
}

pub(crate) fn boolean_operator_non_shallow_excessive_count(
    tokens: &[LdapTokenEnriched],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    let count = tokens
        .iter()
        .filter(|tok| {
            tok.token_type == LdapTokenType::BooleanOperator
                && tok.depth > t.boolean_operator_non_shallow_depth
        })
        .count();
    if count > t.boolean_operator_non_shallow_count {
        vec![stream_hit(tokens)]
    } else {
        Vec::new()
    }
}

pub(crate) fn extensible_match_filter_excessive_count(
    tokens: &[LdapTokenEnriched],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    let count = tokens
        .iter()
        .filter(|tok| tok.token_type == LdapTokenType::ExtensibleMatchFilter)
        .count();
    if count > t.extensible_match_filter_count {
        vec![stream_hit(tokens)]
    } else {
        Vec::new()
    }
}

pub(crate) fn whitespace_excessive_count(
    tokens: &[LdapTokenEnriched],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    let count = tokens
        .iter()
        .filter(|tok| tok.token_type == LdapTokenType::Whitespace)
        .count();
    if count > t.whitespace_count {
        vec![stream_hit(tokens)]
    } else {
        Vec::new()
    }
}

pub(crate) fn large_whitespace_excessive_count(
    tokens: &[LdapTokenEnriched],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    let count = tokens
        .iter()
        .filter(|tok| {
            tok.token_type == LdapTokenType::Whitespace && tok.length > t.large_whitespace_length
        })
        .count();
    if count > t.large_whitespace_count {
        vec![stream_hit(tokens)]
    } else {
        Vec::new()
    }
}

pub(crate) fn whitespace_uncommon_neighbor_excessive_count(
    tokens: &[LdapTokenEnriched],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    // whitespace between filters or at the bookends is ordinary; anything
    // else pads the filter internals
    let uncommon = |tok: &&LdapTokenEnriched| {
        tok.token_type == LdapTokenType::Whitespace
            && !matches!(
                (tok.type_before, tok.type_after),
                (None, _)
                    | (_, None)
                    | (Some(LdapTokenType::GroupEnd), Some(LdapTokenType::GroupStart))
            )
    };
    let count = tokens.iter().filter(uncommon).count();
    if count > t.whitespace_uncommon_neighbor_count {
        vec![stream_hit(tokens)]
    } else {
        Vec::new()
    }
}

// -------------------------------------------------------- filter-level rules

pub(crate) fn filter_excessive_count(
    filters: &[LdapFilter],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    if filters.len() > t.filter_count {
        filters.first().map(filter_hit).into_iter().collect()
    } else {
        Vec::new()
    }
}

pub(crate) fn logically_excluded_filter_excessive_count(
    filters: &[LdapFilter],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    let excluded: Vec<&LdapFilter> = filters.iter().filter(|f| !inclusion(f)).collect();
    if excluded.len() > t.logically_excluded_filter_count {
        excluded.first().map(|f| filter_hit(f)).into_iter().collect()
    } else {
        Vec::new()
    }
}

fn filter_scope_operator(filters: &[LdapFilter], operator: &str) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| f.boolean_operator == operator)
        .map(filter_hit)
        .collect()
}

pub(crate) fn boolean_operator_filter_scope_and(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filter_scope_operator(filters, "&")
}

pub(crate) fn boolean_operator_filter_scope_or(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filter_scope_operator(filters, "|")
}

pub(crate) fn boolean_operator_filter_scope_not(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filter_scope_operator(filters, "!")
}

pub(crate) fn filter_branch_with_gapped_boolean_operator(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| {
            f.context
                .boolean_operator
                .as_ref()
                .map(|ctx| ctx.filter_list_boolean_operator_distance >= 2)
                .unwrap_or(false)
        })
        .map(filter_hit)
        .collect()
}

pub(crate) fn logically_included_filter_branch_not_and(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| cancel_double_negations(&chain_of(f)).contains("!&") && inclusion(f))
        .map(filter_hit)
        .collect()
}

pub(crate) fn logically_excluded_filter_branch_not_or(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| cancel_double_negations(&chain_of(f)).contains("!|") && !inclusion(f))
        .map(filter_hit)
        .collect()
}

fn attribute_rule(
    filters: &[LdapFilter],
    predicate: impl Fn(&LdapFilter, &LdapTokenEnriched) -> bool,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter_map(|f| {
            let attr = f.token_dict.attribute.as_ref()?;
            if predicate(f, attr) {
                Some(token_hit(attr))
            } else {
                None
            }
        })
        .collect()
}

pub(crate) fn undefined_attribute(filters: &[LdapFilter], _t: &RuleThresholds) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        !attr.is_defined
            && attr
                .content
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    })
}

pub(crate) fn undefined_attribute_invalid_special_chars(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        !attr.is_defined
            && attr
                .content
                .chars()
                .any(|c| !c.is_ascii_alphanumeric() && c != '-' && c != '.' && c != '*')
    })
}

pub(crate) fn undefined_attribute_with_wildcard(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        !attr.is_defined && attr.content.contains('*')
    })
}

pub(crate) fn defined_attribute_with_oid_syntax(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        attr.is_defined && attr.format == crate::token::LdapTokenFormat::Oid
    })
}

pub(crate) fn defined_attribute_oid_syntax_with_prefix(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        attr.is_defined && attr.content.len() >= 4 && attr.content[..4].eq_ignore_ascii_case("oid.")
    })
}

pub(crate) fn defined_attribute_oid_syntax_with_zeros(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        if !attr.is_defined || attr.format != crate::token::LdapTokenFormat::Oid {
            return false;
        }
        let body = if attr.content.len() >= 4 && attr.content[..4].eq_ignore_ascii_case("oid.") {
            &attr.content[4..]
        } else {
            attr.content.as_str()
        };
        crate::schema::normalize_oid(body)
            .map(|normalized| normalized != body)
            .unwrap_or(false)
    })
}

pub(crate) fn defined_attribute_with_scattered_case(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        if !attr.is_defined || attr.format != crate::token::LdapTokenFormat::String {
            return false;
        }
        let canonical = &attr.content_decoded;
        attr.content != *canonical
            && attr.content.eq_ignore_ascii_case(canonical)
            && attr.content != canonical.to_ascii_lowercase()
            && attr.content != canonical.to_ascii_uppercase()
    })
}

pub(crate) fn defined_attribute_anr(filters: &[LdapFilter], _t: &RuleThresholds) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        attr.is_defined && attr.content_decoded == "anr"
    })
}

pub(crate) fn attribute_with_adjacent_whitespace(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    attribute_rule(filters, |_, attr| {
        attr.type_before == Some(LdapTokenType::Whitespace)
            || attr.type_after == Some(LdapTokenType::Whitespace)
    })
}

pub(crate) fn sensitive_attribute_presence_filter(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| {
            f.value == "*"
                && SENSITIVE_ATTRIBUTES
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(&f.attribute_decoded))
        })
        .map(filter_hit)
        .collect()
}

fn emr_rule(
    filters: &[LdapFilter],
    predicate: impl Fn(&LdapFilter, &LdapTokenEnriched) -> bool,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter_map(|f| {
            let emr = f.token_dict.extensible_match_filter.as_ref()?;
            if predicate(f, emr) {
                Some(token_hit(emr))
            } else {
                None
            }
        })
        .collect()
}

pub(crate) fn undefined_extensible_match_filter(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    emr_rule(filters, |_, emr| !emr.is_defined)
}

pub(crate) fn defined_extensible_match_filter_name_syntax(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    emr_rule(filters, |_, emr| {
        emr.is_defined && emr.format == crate::token::LdapTokenFormat::String
    })
}

pub(crate) fn defined_extensible_match_filter_oid_syntax_with_zeros(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    emr_rule(filters, |_, emr| {
        emr.is_defined
            && emr.format == crate::token::LdapTokenFormat::Oid
            && emr.content != emr.content_decoded
    })
}

fn emr_oid_rule(filters: &[LdapFilter], oid: &str) -> Vec<RuleHit> {
    emr_rule(filters, |f, _| {
        f.context
            .extensible_match_filter
            .as_ref()
            .map(|ctx| ctx.oid == oid)
            .unwrap_or(false)
    })
}

pub(crate) fn extensible_match_filter_in_chain(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    emr_oid_rule(filters, "1.2.840.113556.1.4.1941")
}

pub(crate) fn extensible_match_filter_dn_with_data(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    emr_oid_rule(filters, "1.2.840.113556.1.4.2253")
}

pub(crate) fn bitwise_extensible_match_filter_for_non_bitwise_attribute(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    emr_rule(filters, |f, _| {
        let bitwise_rule = f
            .context
            .extensible_match_filter
            .as_ref()
            .map(|ctx| {
                ctx.oid == "1.2.840.113556.1.4.803" || ctx.oid == "1.2.840.113556.1.4.804"
            })
            .unwrap_or(false);
        bitwise_rule
            && attribute_defined(f)
            && f.context
                .attribute
                .as_ref()
                .map(|ctx| ctx.value_format != LdapAttributeValueFormat::Bitwise)
                .unwrap_or(false)
    })
}

pub(crate) fn extensible_match_filter_for_undefined_attribute(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    emr_rule(filters, |f, _| {
        f.token_dict.attribute.is_some() && !attribute_defined(f)
    })
}

fn range_comparison(filter: &LdapFilter) -> bool {
    filter.comparison_operator == ">=" || filter.comparison_operator == "<="
}

pub(crate) fn comparison_operator_range_defined_bitwise_attribute(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| {
            range_comparison(f)
                && attribute_defined(f)
                && value_format(f) == Some(LdapAttributeValueFormat::Bitwise)
        })
        .map(filter_hit)
        .collect()
}

pub(crate) fn comparison_operator_range_defined_byte_array_attribute(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| {
            range_comparison(f)
                && attribute_defined(f)
                && value_format(f) == Some(LdapAttributeValueFormat::ByteArray)
        })
        .map(filter_hit)
        .collect()
}

pub(crate) fn comparison_operator_approx_match(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| f.comparison_operator == "~=")
        .map(filter_hit)
        .collect()
}

pub(crate) fn filter_without_comparison_operator(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| f.token_dict.comparison_operator.is_none())
        .map(filter_hit)
        .collect()
}

pub(crate) fn filter_with_empty_value(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| f.token_dict.comparison_operator.is_some() && f.token_dict.value.is_none())
        .map(filter_hit)
        .collect()
}

fn value_rule(
    filters: &[LdapFilter],
    predicate: impl Fn(&LdapFilter) -> bool,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| f.token_dict.value.is_some() && predicate(f))
        .map(value_hit)
        .collect()
}

pub(crate) fn value_with_hex_encoding_for_alphanumeric_chars(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f).iter().any(|p| {
            p.format == ParsedCharFormat::Hex
                && matches!(p.class, CharClass::Alpha | CharClass::Num)
        })
    })
}

pub(crate) fn value_with_hex_encoding_for_special_chars(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f).iter().any(|p| {
            p.format == ParsedCharFormat::Hex
                && p.class == CharClass::Special
                && !matches!(p.content_decoded.as_str(), "(" | ")" | "\\" | "*")
        })
    })
}

pub(crate) fn value_with_escaped_alphanumeric_chars(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f).iter().any(|p| {
            p.format == ParsedCharFormat::EscapedUnknown
                && matches!(p.class, CharClass::Alpha | CharClass::Num)
        })
    })
}

pub(crate) fn value_with_excessive_hex_encoding(
    filters: &[LdapFilter],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f)
            .iter()
            .filter(|p| p.format == ParsedCharFormat::Hex)
            .count()
            > t.value_hex_count
    })
}

pub(crate) fn value_with_non_printable_chars(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f)
            .iter()
            .any(|p| p.format == ParsedCharFormat::Hex && !p.is_printable)
    })
}

pub(crate) fn value_with_trailing_escape(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f)
            .last()
            .map(|p| p.content == "\\")
            .unwrap_or(false)
    })
}

pub(crate) fn value_with_excessive_wildcards(
    filters: &[LdapFilter],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f)
            .iter()
            .filter(|p| p.format == ParsedCharFormat::Protected)
            .count()
            > t.value_wildcard_count
    })
}

pub(crate) fn value_with_adjacent_wildcards(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f).windows(2).any(|w| {
            w[0].format == ParsedCharFormat::Protected
                && w[1].format == ParsedCharFormat::Protected
        })
    })
}

pub(crate) fn value_with_hex_encoded_wildcard(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f)
            .iter()
            .any(|p| p.format == ParsedCharFormat::Hex && p.content_decoded == "*")
    })
}

pub(crate) fn datetime_value_with_obfuscated_milliseconds(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        if value_format(f) != Some(LdapAttributeValueFormat::DateTime) {
            return false;
        }
        let decoded = value_decoded(f);
        let trimmed = match decoded.strip_suffix('Z') {
            Some(t) => t,
            None => return false,
        };
        match trimmed.split_once('.') {
            Some((_, fraction)) => !fraction.is_empty() && fraction != "0",
            None => false,
        }
    })
}

pub(crate) fn datetime_value_nonstandard_format(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        if value_format(f) != Some(LdapAttributeValueFormat::DateTime) || has_wildcard(f) {
            return false;
        }
        let decoded = value_decoded(f);
        // YYYYMMDDhhmmss[.fraction]Z
        let well_formed = decoded
            .strip_suffix('Z')
            .map(|rest| {
                let (stamp, fraction) = match rest.split_once('.') {
                    Some((stamp, fraction)) => (stamp, Some(fraction)),
                    None => (rest, None),
                };
                stamp.len() == 14
                    && stamp.bytes().all(|b| b.is_ascii_digit())
                    && fraction
                        .map(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
                        .unwrap_or(true)
            })
            .unwrap_or(false);
        !decoded.is_empty() && !well_formed
    })
}

pub(crate) fn int_value_with_prepended_zeroes(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        if !matches!(
            value_format(f),
            Some(LdapAttributeValueFormat::Int | LdapAttributeValueFormat::Bitwise)
        ) {
            return false;
        }
        let decoded = value_decoded(f);
        decoded.len() > 1
            && decoded.starts_with('0')
            && decoded.bytes().all(|b| b.is_ascii_digit())
    })
}

pub(crate) fn int_value_non_numeric(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        if value_format(f) != Some(LdapAttributeValueFormat::Int) || has_wildcard(f) {
            return false;
        }
        let decoded = value_decoded(f);
        let digits = decoded.strip_prefix('-').unwrap_or(decoded);
        !decoded.is_empty()
            && (digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()))
    })
}

pub(crate) fn int_value_exceeding_signed_int_range(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        if !matches!(
            value_format(f),
            Some(LdapAttributeValueFormat::Int | LdapAttributeValueFormat::Bitwise)
        ) {
            return false;
        }
        // content, not decoded: the enricher already rewrites wrapped values
        let raw = f
            .context
            .value
            .as_ref()
            .map(|ctx| ctx.content.as_str())
            .unwrap_or("");
        raw.parse::<i64>()
            .map(|n| (1i64 << 31..1i64 << 32).contains(&n))
            .unwrap_or(false)
    })
}

pub(crate) fn boolean_value_nonstandard(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        if value_format(f) != Some(LdapAttributeValueFormat::Boolean) || has_wildcard(f) {
            return false;
        }
        let decoded = value_decoded(f);
        !decoded.is_empty() && decoded != "TRUE" && decoded != "FALSE"
    })
}

pub(crate) fn dn_value_with_wildcard(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        value_format(f) == Some(LdapAttributeValueFormat::DnString) && has_wildcard(f)
    })
}

pub(crate) fn dn_value_invalid_rdn_structure(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        value_format(f) == Some(LdapAttributeValueFormat::DnString)
            && !has_wildcard(f)
            && !value_decoded(f).is_empty()
            && rdn_tokens(f).is_empty()
    })
}

pub(crate) fn bitwise_value_non_numeric(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        value_format(f) == Some(LdapAttributeValueFormat::Bitwise)
            && !has_wildcard(f)
            && !value_decoded(f).is_empty()
            && f.context
                .value
                .as_ref()
                .map(|ctx| ctx.bitwise_addend.is_empty())
                .unwrap_or(false)
    })
}

fn specific_bitwise_addend(
    filters: &[LdapFilter],
    attribute: &str,
    bits: &[u64],
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        f.attribute_decoded == attribute
            && f.context
                .value
                .as_ref()
                .map(|ctx| bits.iter().any(|&bit| ctx.bit_set(bit)))
                .unwrap_or(false)
    })
}

pub(crate) fn specific_bitwise_addend_user_account_control(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    specific_bitwise_addend(filters, "userAccountControl", UAC_SUSPICIOUS_BITS)
}

pub(crate) fn specific_bitwise_addend_group_type(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    specific_bitwise_addend(filters, "groupType", GROUP_TYPE_SUSPICIOUS_BITS)
}

pub(crate) fn specific_bitwise_addend_sam_account_type(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    specific_bitwise_addend(filters, "sAMAccountType", SAM_ACCOUNT_TYPE_SUSPICIOUS_BITS)
}

pub(crate) fn sensitive_value_without_obfuscation(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        !has_wildcard(f)
            && f.value == value_decoded(f)
            && contains_sensitive(value_decoded(f)).is_some()
    })
}

pub(crate) fn sensitive_value_with_hex_encoding(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        parsed_chars(f)
            .iter()
            .any(|p| p.format == ParsedCharFormat::Hex)
            && contains_sensitive(value_decoded(f)).is_some()
    })
}

pub(crate) fn sensitive_value_with_escape_obfuscation(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        let has_escape = parsed_chars(f)
            .iter()
            .any(|p| p.format == ParsedCharFormat::EscapedUnknown);
        // strip the backslashes the escapes leave in the decoded text
        has_escape && contains_sensitive(&value_decoded(f).replace('\\', "")).is_some()
    })
}

pub(crate) fn sensitive_value_matched_with_wildcard(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    value_rule(filters, |f| {
        has_wildcard(f)
            && SENSITIVE_VALUES
                .iter()
                .any(|s| wildcard_pattern_matches(parsed_chars(f), s))
    })
}

pub(crate) fn undefined_filter_literal(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter(|f| f.attribute == "UNDEFINED" && f.value == "UNDEFINED")
        .map(filter_hit)
        .collect()
}

fn rdn_rule(
    filters: &[LdapFilter],
    predicate: impl Fn(&LdapTokenEnriched) -> bool,
) -> Vec<RuleHit> {
    filters
        .iter()
        .flat_map(|f| rdn_tokens(f).iter())
        .filter(|t| predicate(t))
        .map(token_hit)
        .collect()
}

pub(crate) fn rdn_attribute_with_hex_encoding(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    rdn_rule(filters, |t| {
        t.token_type == LdapTokenType::Attribute && contains_hex_escape(&t.content)
    })
}

pub(crate) fn rdn_value_encapsulated_with_double_quotes(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    rdn_rule(filters, |t| {
        t.token_type == LdapTokenType::Value
            && t.content.len() >= 2
            && t.content.starts_with('"')
            && t.content.ends_with('"')
    })
}

pub(crate) fn rdn_comparison_operator_with_hex_encoding(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    rdn_rule(filters, |t| {
        t.token_type == LdapTokenType::ComparisonOperator && contains_hex_escape(&t.content)
    })
}

pub(crate) fn rdn_comma_delimiter_with_hex_encoding(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    rdn_rule(filters, |t| {
        t.token_type == LdapTokenType::CommaDelimiter && contains_hex_escape(&t.content)
    })
}

pub(crate) fn rdn_value_with_hex_encoding(
    filters: &[LdapFilter],
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    rdn_rule(filters, |t| {
        t.token_type == LdapTokenType::Value && contains_hex_escape(&t.content)
    })
}

pub(crate) fn rdn_with_excessive_whitespace(
    filters: &[LdapFilter],
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    filters
        .iter()
        .filter_map(|f| {
            let total: usize = rdn_tokens(f)
                .iter()
                .filter(|t| t.token_type == LdapTokenType::Whitespace)
                .map(|t| t.length)
                .sum();
            if total > t.rdn_whitespace_length {
                f.token_dict.value.as_ref().map(|v| token_hit(v))
            } else {
                None
            }
        })
        .collect()
}

// -------------------------------------------------------- branch-level rules

pub(crate) fn search_filter_excessive_length(
    root: &LdapBranch,
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    if root.length > t.search_filter_length {
        vec![branch_hit(root)]
    } else {
        Vec::new()
    }
}

pub(crate) fn filter_excessive_max_depth(
    root: &LdapBranch,
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    if root.depth_max > t.max_depth {
        vec![branch_hit(root)]
    } else {
        Vec::new()
    }
}

pub(crate) fn filter_boolean_operator_excessive_max_count(
    root: &LdapBranch,
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    if root.boolean_operator_logical_count_max > t.boolean_operator_chain_max {
        vec![branch_hit(root)]
    } else {
        Vec::new()
    }
}

// count of redundant same-operator adjacencies for one operator: repeats in
// a list's leading run plus a single nested list re-stating its parent's
// operator
fn adjacent_repeating_count(root: &LdapBranch, operator: char) -> (usize, Option<RuleHit>) {
    let mut count = 0;
    let mut first_hit = None;
    for branch in root.walk() {
        let children = match &branch.kind {
            LdapBranchKind::FilterList(children) => children,
            LdapBranchKind::Filter(_) => continue,
        };
        // adjacent same-operator pairs in this list's leading chain
        let mut chain = String::new();
        for child in children.iter().skip(1) {
            match child {
                LdapBranchChild::Token(t)
                    if t.token_type == LdapTokenType::Whitespace =>
                {
                    continue
                }
                LdapBranchChild::Token(t)
                    if t.token_type == LdapTokenType::BooleanOperator =>
                {
                    chain.push_str(&t.content);
                }
                _ => break,
            }
        }
        let pairs = chain
            .as_bytes()
            .windows(2)
            .filter(|w| w[0] == operator as u8 && w[1] == operator as u8)
            .count();
        if pairs > 0 {
            count += pairs;
            first_hit.get_or_insert_with(|| branch_hit(branch));
        }
        // single nested list repeating this list's operator
        if branch.boolean_operator == operator.to_string() {
            let nested: Vec<&LdapBranch> = children
                .iter()
                .filter_map(|c| match c {
                    LdapBranchChild::Branch(b) => Some(b),
                    LdapBranchChild::Token(_) => None,
                })
                .collect();
            if nested.len() == 1
                && matches!(nested[0].kind, LdapBranchKind::FilterList(_))
                && nested[0].boolean_operator == operator.to_string()
            {
                count += 1;
                first_hit.get_or_insert_with(|| branch_hit(branch));
            }
        }
    }
    (count, first_hit)
}

fn adjacent_repeating_rule(
    root: &LdapBranch,
    operator: char,
    threshold: usize,
) -> Vec<RuleHit> {
    let (count, hit) = adjacent_repeating_count(root, operator);
    if count >= threshold {
        hit.into_iter().collect()
    } else {
        Vec::new()
    }
}

pub(crate) fn adjacent_repeating_filter_list_and(
    root: &LdapBranch,
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    adjacent_repeating_rule(root, '&', t.adjacent_repeating_count)
}

pub(crate) fn adjacent_repeating_filter_list_or(
    root: &LdapBranch,
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    adjacent_repeating_rule(root, '|', t.adjacent_repeating_count)
}

pub(crate) fn adjacent_repeating_filter_list_not(
    root: &LdapBranch,
    t: &RuleThresholds,
) -> Vec<RuleHit> {
    adjacent_repeating_rule(root, '!', t.adjacent_repeating_count)
}

fn excluded_list_rule(root: &LdapBranch, operator: &str) -> Vec<RuleHit> {
    root.walk()
        .into_iter()
        .filter(|branch| {
            matches!(branch.kind, LdapBranchKind::FilterList(_))
                && branch.boolean_operator == operator
                && branch
                    .context
                    .boolean_operator
                    .as_ref()
                    .map(|ctx| {
                        ctx.logical_filter_list_boolean_operator == LogicalBooleanOperator::Not
                    })
                    .unwrap_or(false)
        })
        .map(branch_hit)
        .collect()
}

pub(crate) fn logically_excluded_filter_list_branch_not_and(
    root: &LdapBranch,
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    excluded_list_rule(root, "&")
}

pub(crate) fn logically_excluded_filter_list_branch_not_or(
    root: &LdapBranch,
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    excluded_list_rule(root, "|")
}

fn single_filter_modifier_rule(root: &LdapBranch, operator: &str) -> Vec<RuleHit> {
    root.walk()
        .into_iter()
        .filter(|branch| {
            if branch.boolean_operator != operator {
                return false;
            }
            let children = match &branch.kind {
                LdapBranchKind::FilterList(children) => children,
                LdapBranchKind::Filter(_) => return false,
            };
            let nested: Vec<&LdapBranch> = children
                .iter()
                .filter_map(|c| match c {
                    LdapBranchChild::Branch(b) => Some(b),
                    LdapBranchChild::Token(_) => None,
                })
                .collect();
            nested.len() == 1 && matches!(nested[0].kind, LdapBranchKind::Filter(_))
        })
        .map(branch_hit)
        .collect()
}

pub(crate) fn boolean_operator_and_modifying_single_filter(
    root: &LdapBranch,
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    single_filter_modifier_rule(root, "&")
}

pub(crate) fn boolean_operator_or_modifying_single_filter(
    root: &LdapBranch,
    _t: &RuleThresholds,
) -> Vec<RuleHit> {
    single_filter_modifier_rule(root, "|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_parser::parse_value;

    #[test]
    fn test_wildcard_pattern_matches() {
        let parsed = parse_value("krb*", false);
        assert!(wildcard_pattern_matches(&parsed, "krbtgt"));
        let parsed = parse_value("*admin*", false);
        assert!(wildcard_pattern_matches(&parsed, "administrator"));
        let parsed = parse_value("kr*tgt", false);
        assert!(wildcard_pattern_matches(&parsed, "krbtgt"));
        let parsed = parse_value("dbo*", false);
        assert!(!wildcard_pattern_matches(&parsed, "krbtgt"));
        // the bare presence wildcard is not a match pattern
        let parsed = parse_value("*", false);
        assert!(!wildcard_pattern_matches(&parsed, "krbtgt"));
        // escaped wildcards are literals
        let parsed = parse_value("krb\\2a", false);
        assert!(!wildcard_pattern_matches(&parsed, "krbtgt"));
    }

    #[test]
    fn test_contains_sensitive() {
        assert_eq!(contains_sensitive("krbtgt"), Some("krbtgt"));
        assert_eq!(
            contains_sensitive("CN=Domain Admins,DC=contoso,DC=local"),
            Some("Domain Admins")
        );
        assert_eq!(contains_sensitive("KRBTGT"), Some("krbtgt"));
        assert_eq!(contains_sensitive("sabi"), None);
    }

    #[test]
    fn test_contains_hex_escape() {
        assert!(contains_hex_escape("\\3D"));
        assert!(contains_hex_escape("CN\\3ddbo"));
        assert!(!contains_hex_escape("CN=dbo"));
        assert!(!contains_hex_escape("a\\zb"));
    }
}
