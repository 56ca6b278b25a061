//! Token enrichment
//!
//! Second pass over the flat token stream: decodes content against the
//! registries and the value parser, resolves neighbor types and
//! syntax/application scopes, and threads the boolean-operator chain state
//! through the stream, snapshotting it into every `GroupStart`'s context.

use crate::context::{
    reduce_operator_chain, LdapAttributeContext, LdapBooleanOperatorContext,
    LdapBooleanOperatorToken, LdapExtensibleMatchFilterContext, LdapValueContext,
};
use crate::error::{DiagnosticKind, Diagnostics};
use crate::rdn_parser::is_dn_value;
use crate::schema::{
    self, is_oid, normalize_oid, resolve_attribute, LdapAttributeValueFormat,
};
use crate::token::{
    LdapToken, LdapTokenEnriched, LdapTokenFormat, LdapTokenScope, LdapTokenSubType, LdapTokenType,
};
use crate::value_parser::{decode_value, parse_value};
use std::collections::BTreeMap;

/// Enriches a token stream, discarding diagnostics.
pub fn to_token_enriched(tokens: Vec<LdapToken>) -> Vec<LdapTokenEnriched> {
    let mut diags = Diagnostics::new();
    to_token_enriched_with_diagnostics(tokens, &mut diags)
}

/// Enriches a token stream, collecting recovered problems (currently only
/// the late DN-validity fix-up).
pub fn to_token_enriched_with_diagnostics(
    tokens: Vec<LdapToken>,
    diags: &mut Diagnostics,
) -> Vec<LdapTokenEnriched> {
    let mut enriched: Vec<LdapTokenEnriched> =
        tokens.into_iter().map(LdapTokenEnriched::from_token).collect();

    decode_pass(&mut enriched, diags);
    neighbor_pass(&mut enriched);
    scope_pass(&mut enriched);
    chain_pass(&mut enriched);
    enriched
}

// ---------------------------------------------------------------- decoding

fn attribute_context_for(content: &str) -> (Option<LdapAttributeContext>, LdapTokenFormat) {
    let format = if is_oid(content) {
        LdapTokenFormat::Oid
    } else {
        LdapTokenFormat::String
    };
    let ctx = resolve_attribute(content).map(|row| {
        let syntax = schema::syntax_by_id(row.syntax);
        let mut ctx = LdapAttributeContext {
            name: row.name.to_string(),
            oid: row.oid.to_string(),
            value_format: row.format,
            syntax_id: row.syntax.to_string(),
            ..LdapAttributeContext::default()
        };
        if let Some(syntax) = syntax {
            ctx.ads_type = syntax.ads_type.to_string();
            ctx.sds_type = syntax.sds_type.to_string();
            ctx.mapi_type = syntax.mapi_type.to_string();
            ctx.syntax_title = syntax.title.to_string();
            ctx.syntax_description = syntax.description.to_string();
        }
        ctx
    });
    (ctx, format)
}

fn enrich_attribute(token: &mut LdapTokenEnriched) {
    let (ctx, format) = attribute_context_for(&token.content);
    token.format = format;
    match ctx {
        Some(ctx) => {
            token.is_defined = true;
            token.content_decoded = ctx.name.clone();
            token.context.attribute = Some(ctx);
        }
        None => {
            token.is_defined = false;
            token.context.attribute = Some(LdapAttributeContext::default());
        }
    }
}

fn enrich_extensible_match_filter(token: &mut LdapTokenEnriched) {
    let inner = token.content.as_str();
    let inner = inner.strip_prefix(':').unwrap_or(inner);
    let inner = inner.strip_suffix(':').unwrap_or(inner);
    let inner = inner.trim_matches(' ');

    let rule = if is_oid(inner) {
        token.format = LdapTokenFormat::Oid;
        schema::emr_by_oid(inner)
    } else {
        token.format = LdapTokenFormat::String;
        schema::emr_by_name(inner)
    };
    match rule {
        Some(rule) => {
            token.is_defined = true;
            token.content_decoded = format!(":{}:", rule.oid);
            token.context.extensible_match_filter = Some(LdapExtensibleMatchFilterContext {
                name: rule.name.to_string(),
                oid: rule.oid.to_string(),
                description: rule.description.to_string(),
            });
        }
        None => {
            token.is_defined = false;
            // an undefined rule in OID form still normalizes
            if token.format == LdapTokenFormat::Oid {
                if let Some(oid) = normalize_oid(inner) {
                    token.content_decoded = format!(":{}:", oid);
                }
            }
            token.context.extensible_match_filter =
                Some(LdapExtensibleMatchFilterContext::default());
        }
    }
}

fn enrich_value(
    token: &mut LdapTokenEnriched,
    attribute_format: Option<LdapAttributeValueFormat>,
    diags: &mut Diagnostics,
) {
    let is_dn = attribute_format == Some(LdapAttributeValueFormat::DnString)
        || !token.sub_tokens.is_empty();
    let parsed = parse_value(&token.content, is_dn);
    let decoded = decode_value(&parsed);
    token.content_decoded = decoded.clone();
    token.format = LdapTokenFormat::String;

    let mut value_ctx = LdapValueContext {
        format: attribute_format,
        content: token.content.clone(),
        content_decoded: decoded.clone(),
        content_parsed_list: parsed,
        bitwise_addend: Vec::new(),
        bitwise_dict: BTreeMap::new(),
    };

    if attribute_format == Some(LdapAttributeValueFormat::Bitwise) {
        if let Some((bits, wrapped)) = bitwise_decompose(&decoded) {
            value_ctx.bitwise_addend = (0..32)
                .filter(|b| bits & (1u32 << b) != 0)
                .map(|b| 1u64 << b)
                .collect();
            value_ctx.bitwise_dict = (0..32).map(|b| (1u64 << b, bits & (1u32 << b) != 0)).collect();
            if let Some(wrapped) = wrapped {
                value_ctx.content_decoded = wrapped.to_string();
            }
        }
    }
    token.context.value = Some(value_ctx);

    // late DN fix-up: sub-tokens attached by the tokenizer are dropped when
    // the decoded value no longer validates as a DN
    if !token.sub_tokens.is_empty() && !is_dn_value(&token.content_decoded) {
        diags.push(
            DiagnosticKind::SubTokensCleared,
            token.start,
            "decoded value fails DN validation, dropping RDN sub-tokens",
        );
        token.sub_tokens.clear();
    } else if !token.sub_tokens.is_empty() {
        enrich_rdn_sub_tokens(&mut token.sub_tokens);
    }
}

// Parses a bitwise value. Returns the 32 bits plus, for values in
// [2^31, 2^32), the negative two's-complement reading.
fn bitwise_decompose(decoded: &str) -> Option<(u32, Option<i64>)> {
    let n: i64 = decoded.trim().parse().ok()?;
    if !(-(1i64 << 31)..1i64 << 32).contains(&n) {
        return None;
    }
    if n >= 0 {
        let wrapped = if n >= 1i64 << 31 {
            Some(n - (1i64 << 32))
        } else {
            None
        };
        Some((n as u32, wrapped))
    } else {
        Some((n as i32 as u32, None))
    }
}

fn enrich_rdn_sub_tokens(sub_tokens: &mut [LdapTokenEnriched]) {
    for token in sub_tokens.iter_mut() {
        token.scope_syntax = LdapTokenScope::NA;
        token.scope_application = LdapTokenScope::NA;
        match token.token_type {
            LdapTokenType::Attribute => enrich_attribute(token),
            LdapTokenType::Value => {
                let parsed = parse_value(&token.content, true);
                token.content_decoded = decode_value(&parsed);
                token.format = LdapTokenFormat::String;
                token.context.value = Some(LdapValueContext {
                    format: None,
                    content: token.content.clone(),
                    content_decoded: token.content_decoded.clone(),
                    content_parsed_list: parsed,
                    bitwise_addend: Vec::new(),
                    bitwise_dict: BTreeMap::new(),
                });
            }
            LdapTokenType::Whitespace => {
                // hex-encoded whitespace reads as a space
                if token.content.contains("\\20") {
                    token.content_decoded = token.content.replace("\\20", " ");
                }
                token.format = LdapTokenFormat::NA;
            }
            _ => {
                token.format = LdapTokenFormat::NA;
            }
        }
    }
}

fn decode_pass(enriched: &mut [LdapTokenEnriched], diags: &mut Diagnostics) {
    let mut last_attribute_format: Option<LdapAttributeValueFormat> = None;
    for i in 0..enriched.len() {
        match enriched[i].token_type {
            LdapTokenType::GroupStart => {
                last_attribute_format = None;
                enriched[i].format = LdapTokenFormat::NA;
            }
            LdapTokenType::Attribute => {
                enrich_attribute(&mut enriched[i]);
                last_attribute_format = enriched[i]
                    .context
                    .attribute
                    .as_ref()
                    .map(|ctx| ctx.value_format);
            }
            LdapTokenType::ExtensibleMatchFilter => {
                enrich_extensible_match_filter(&mut enriched[i]);
            }
            LdapTokenType::Value => {
                enrich_value(&mut enriched[i], last_attribute_format, diags);
            }
            _ => {
                enriched[i].format = LdapTokenFormat::NA;
            }
        }
    }
}

// --------------------------------------------------------------- neighbors

fn neighbor_pass(enriched: &mut [LdapTokenEnriched]) {
    let types: Vec<LdapTokenType> = enriched.iter().map(|t| t.token_type).collect();
    for (i, token) in enriched.iter_mut().enumerate() {
        token.type_before = if i > 0 { Some(types[i - 1]) } else { None };
        token.type_after = types.get(i + 1).copied();

        // RDN sub-tokens neighbor each other; the bookends see the enclosing
        // non-RDN neighbors
        if !token.sub_tokens.is_empty() {
            let sub_types: Vec<LdapTokenType> =
                token.sub_tokens.iter().map(|t| t.token_type).collect();
            let outer_before = token.type_before;
            let outer_after = token.type_after;
            let last = token.sub_tokens.len() - 1;
            for (j, sub) in token.sub_tokens.iter_mut().enumerate() {
                sub.type_before = if j > 0 {
                    Some(sub_types[j - 1])
                } else {
                    outer_before
                };
                sub.type_after = if j < last {
                    Some(sub_types[j + 1])
                } else {
                    outer_after
                };
            }
        }
    }
}

// ------------------------------------------------------------------ scopes

fn next_significant(enriched: &[LdapTokenEnriched], from: usize) -> Option<usize> {
    enriched
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, t)| t.token_type != LdapTokenType::Whitespace)
        .map(|(i, _)| i)
}

fn prev_significant(enriched: &[LdapTokenEnriched], from: usize) -> Option<usize> {
    enriched[..from]
        .iter()
        .rposition(|t| t.token_type != LdapTokenType::Whitespace)
}

// First non-whitespace, non-operator token after `from`.
fn operator_target(enriched: &[LdapTokenEnriched], from: usize) -> Option<usize> {
    enriched.iter().enumerate().skip(from).find_map(|(i, t)| {
        match t.token_type {
            LdapTokenType::Whitespace | LdapTokenType::BooleanOperator => None,
            _ => Some(i),
        }
    })
}

fn scope_pass(enriched: &mut [LdapTokenEnriched]) {
    // group scopes first; operator scopes refer back to them
    for i in 0..enriched.len() {
        match enriched[i].token_type {
            LdapTokenType::GroupStart => {
                let scope = match operator_target(enriched, i + 1).map(|j| enriched[j].token_type)
                {
                    Some(LdapTokenType::GroupStart) => LdapTokenScope::FilterList,
                    Some(LdapTokenType::Attribute) => LdapTokenScope::Filter,
                    _ => LdapTokenScope::Undefined,
                };
                enriched[i].scope_syntax = scope;
                enriched[i].scope_application = scope;
            }
            LdapTokenType::GroupEnd => {
                let scope = match prev_significant(enriched, i).map(|j| enriched[j].token_type) {
                    Some(LdapTokenType::GroupEnd) => LdapTokenScope::FilterList,
                    Some(
                        LdapTokenType::Value
                        | LdapTokenType::Attribute
                        | LdapTokenType::ComparisonOperator
                        | LdapTokenType::ExtensibleMatchFilter,
                    ) => LdapTokenScope::Filter,
                    _ => LdapTokenScope::Undefined,
                };
                enriched[i].scope_syntax = scope;
                enriched[i].scope_application = scope;
            }
            _ => {}
        }
    }

    for i in 0..enriched.len() {
        if enriched[i].token_type != LdapTokenType::BooleanOperator
            || enriched[i].sub_type == LdapTokenSubType::Rdn
        {
            continue;
        }
        let operator = enriched[i].content.as_bytes().first().copied();
        // syntax scope follows the chain's eventual target; application is
        // refined by the immediate follower
        let target = operator_target(enriched, i + 1).map(|j| (j, enriched[j].token_type));
        let immediate = next_significant(enriched, i + 1).map(|j| enriched[j].token_type);
        let syntax = match target {
            Some((_, LdapTokenType::Attribute)) => LdapTokenScope::Filter,
            Some((_, LdapTokenType::GroupStart)) => LdapTokenScope::FilterList,
            _ => LdapTokenScope::Undefined,
        };
        let application = match (operator, syntax) {
            (Some(b'&') | Some(b'|'), LdapTokenScope::Filter) => LdapTokenScope::NA,
            (Some(b'&') | Some(b'|'), LdapTokenScope::FilterList) => LdapTokenScope::FilterList,
            (Some(b'!'), LdapTokenScope::Filter) => LdapTokenScope::Filter,
            (Some(b'!'), LdapTokenScope::FilterList) => match immediate {
                Some(LdapTokenType::BooleanOperator) => LdapTokenScope::BooleanOperator,
                Some(LdapTokenType::GroupStart) => {
                    match target.map(|(j, _)| enriched[j].scope_syntax) {
                        Some(LdapTokenScope::Filter) => LdapTokenScope::Filter,
                        _ => LdapTokenScope::BooleanOperator,
                    }
                }
                _ => LdapTokenScope::Undefined,
            },
            _ => LdapTokenScope::Undefined,
        };
        enriched[i].scope_syntax = syntax;
        enriched[i].scope_application = application;
    }

    // everything else is scope-less
    for token in enriched.iter_mut() {
        if matches!(
            token.token_type,
            LdapTokenType::Attribute
                | LdapTokenType::ExtensibleMatchFilter
                | LdapTokenType::ComparisonOperator
                | LdapTokenType::Value
                | LdapTokenType::Whitespace
                | LdapTokenType::CommaDelimiter
                | LdapTokenType::Undefined
        ) {
            token.scope_syntax = LdapTokenScope::NA;
            token.scope_application = LdapTokenScope::NA;
        }
    }
}

// ------------------------------------------------------------------ chains

fn op_snapshot(token: &LdapTokenEnriched) -> LdapBooleanOperatorToken {
    LdapBooleanOperatorToken {
        content: token.content.clone(),
        start: token.start,
        depth: token.depth,
        scope_syntax: token.scope_syntax,
        scope_application: token.scope_application,
        guid: token.guid,
    }
}

fn chain_string(ops: &[LdapBooleanOperatorToken]) -> String {
    ops.iter().map(|op| op.operator()).collect()
}

fn build_boolean_context(
    group_start: &LdapTokenEnriched,
    active: &[LdapBooleanOperatorToken],
    historical: &[LdapBooleanOperatorToken],
    filter_ops: &[LdapBooleanOperatorToken],
) -> LdapBooleanOperatorContext {
    let filter_list_ops: Vec<LdapBooleanOperatorToken> = active
        .iter()
        .filter(|op| op.scope_syntax == LdapTokenScope::FilterList)
        .cloned()
        .collect();
    let last = filter_list_ops.last().cloned();
    let distance = last
        .as_ref()
        .map(|op| group_start.depth - op.depth)
        .unwrap_or(0);
    let historical_count = historical
        .iter()
        .filter(|op| op.scope_syntax == LdapTokenScope::FilterList)
        .count();

    let list_chain = chain_string(&filter_list_ops);
    let filter_chain = chain_string(filter_ops);
    let leading_filter_negations = filter_chain.chars().take_while(|&c| c == '!').count();
    let negation_count = list_chain.chars().filter(|&c| c == '!').count() + leading_filter_negations;

    let traversal = match group_start.scope_syntax {
        LdapTokenScope::Filter => leading_filter_negations % 2 == 1,
        _ => list_chain.chars().filter(|&c| c == '!').count() % 2 == 1,
    };

    LdapBooleanOperatorContext {
        filter_list_boolean_operator_token_list: filter_list_ops,
        filter_boolean_operator_token_list: filter_ops.to_vec(),
        filter_list_boolean_operator: last,
        filter_list_boolean_operator_distance: distance,
        historical_boolean_operator_count: historical_count,
        logical_filter_boolean_operator: reduce_operator_chain(&format!(
            "{}{}",
            list_chain, filter_chain
        )),
        logical_filter_list_boolean_operator: reduce_operator_chain(&list_chain),
        logical_filter_inclusion: negation_count % 2 == 0,
        negation_boolean_operator_traversal: traversal,
    }
}

fn pop_trailing_consumed(active: &mut Vec<LdapBooleanOperatorToken>) {
    while matches!(active.last(), Some(op) if op.scope_application != LdapTokenScope::FilterList) {
        active.pop();
    }
}

fn pop_trailing_filter_syntax(historical: &mut Vec<LdapBooleanOperatorToken>) {
    while matches!(historical.last(), Some(op) if op.scope_syntax == LdapTokenScope::Filter) {
        historical.pop();
    }
}

fn chain_pass(enriched: &mut [LdapTokenEnriched]) {
    let mut active: Vec<LdapBooleanOperatorToken> = Vec::new();
    let mut historical: Vec<LdapBooleanOperatorToken> = Vec::new();
    let mut guid_counter: u64 = 0;

    for i in 0..enriched.len() {
        match enriched[i].token_type {
            LdapTokenType::BooleanOperator
                if enriched[i].scope_syntax == LdapTokenScope::FilterList =>
            {
                guid_counter += 1;
                enriched[i].guid = Some(guid_counter);
                let snap = op_snapshot(&enriched[i]);
                active.push(snap.clone());
                historical.push(snap);
            }
            LdapTokenType::GroupStart => {
                if enriched[i].scope_application == LdapTokenScope::Filter {
                    // look ahead over the filter body's own operators
                    let mut filter_ops = Vec::new();
                    for token in enriched[i + 1..].iter() {
                        match token.token_type {
                            LdapTokenType::Whitespace => continue,
                            LdapTokenType::BooleanOperator => {
                                filter_ops.push(op_snapshot(token))
                            }
                            _ => break,
                        }
                    }
                    for op in &filter_ops {
                        active.push(op.clone());
                        historical.push(op.clone());
                    }
                    let ctx =
                        build_boolean_context(&enriched[i], &active, &historical, &filter_ops);
                    enriched[i].context.boolean_operator = Some(ctx);
                    pop_trailing_consumed(&mut active);
                    pop_trailing_filter_syntax(&mut historical);
                } else {
                    let ctx = build_boolean_context(&enriched[i], &active, &historical, &[]);
                    enriched[i].context.boolean_operator = Some(ctx);
                }
            }
            LdapTokenType::GroupEnd
                if enriched[i].scope_syntax == LdapTokenScope::FilterList =>
            {
                let end_depth = enriched[i].depth;
                active.retain(|op| op.depth < end_depth);
                historical.retain(|op| op.depth < end_depth);
                pop_trailing_consumed(&mut active);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LogicalBooleanOperator;
    use crate::token_parser::tokenize;

    fn enrich(filter: &str) -> Vec<LdapTokenEnriched> {
        to_token_enriched(tokenize(filter))
    }

    fn find(
        enriched: &[LdapTokenEnriched],
        token_type: LdapTokenType,
    ) -> &LdapTokenEnriched {
        enriched
            .iter()
            .find(|t| t.token_type == token_type)
            .expect("token of requested type")
    }

    #[test]
    fn test_content_preserved() {
        let source = "(|(name=sabi)(name=dbo))";
        let enriched = enrich(source);
        let rebuilt: String = enriched.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_attribute_resolution() {
        let enriched = enrich("(1.2.840.113556.1.4.8=512)");
        let attr = find(&enriched, LdapTokenType::Attribute);
        assert!(attr.is_defined);
        assert_eq!(attr.content_decoded, "userAccountControl");
        assert_eq!(attr.format, LdapTokenFormat::Oid);
        let ctx = attr.context.attribute.as_ref().expect("attribute context");
        assert_eq!(ctx.value_format, LdapAttributeValueFormat::Bitwise);
        assert_eq!(ctx.ads_type, "ADSTYPE_INTEGER");
    }

    #[test]
    fn test_undefined_attribute() {
        let enriched = enrich("(notreal=1)");
        let attr = find(&enriched, LdapTokenType::Attribute);
        assert!(!attr.is_defined);
        assert_eq!(attr.content_decoded, "notreal");
        let ctx = attr.context.attribute.as_ref().expect("attribute context");
        assert_eq!(ctx.name, "Undefined");
        assert_eq!(ctx.syntax_title, "Undefined");
    }

    #[test]
    fn test_emr_resolution() {
        let enriched = enrich("(userAccountControl:1.2.840.113556.1.4.803:=512)");
        let emr = find(&enriched, LdapTokenType::ExtensibleMatchFilter);
        assert!(emr.is_defined);
        assert_eq!(emr.content_decoded, ":1.2.840.113556.1.4.803:");
        let ctx = emr
            .context
            .extensible_match_filter
            .as_ref()
            .expect("emr context");
        assert_eq!(ctx.name, "LDAP_MATCHING_RULE_BIT_AND");
    }

    #[test]
    fn test_emr_obfuscated_oid_normalizes() {
        let enriched = enrich("(userAccountControl:1.2.840.0113556.1.04.803:=512)");
        let emr = find(&enriched, LdapTokenType::ExtensibleMatchFilter);
        assert!(emr.is_defined);
        assert_eq!(emr.content_decoded, ":1.2.840.113556.1.4.803:");
    }

    #[test]
    fn test_value_hex_decoding() {
        let enriched = enrich("(name=kr\\62tgt)");
        let value = find(&enriched, LdapTokenType::Value);
        assert_eq!(value.content, "kr\\62tgt");
        assert_eq!(value.content_decoded, "krbtgt");
    }

    #[test]
    fn test_bitwise_addends() {
        let enriched = enrich("(userAccountControl:1.2.840.113556.1.4.804:=65929)");
        let value = find(&enriched, LdapTokenType::Value);
        let ctx = value.context.value.as_ref().expect("value context");
        assert_eq!(ctx.bitwise_addend, vec![1, 8, 128, 256, 65536]);
        assert_eq!(ctx.bitwise_addend.iter().sum::<u64>(), 65929);
        assert!(ctx.bit_set(128));
        assert!(!ctx.bit_set(2));
    }

    #[test]
    fn test_bitwise_twos_complement_wrap() {
        let enriched = enrich("(userAccountControl=4294967295)");
        let value = find(&enriched, LdapTokenType::Value);
        let ctx = value.context.value.as_ref().expect("value context");
        assert_eq!(ctx.content_decoded, "-1");
        assert_eq!(ctx.bitwise_addend.len(), 32);
        assert_eq!(ctx.bitwise_addend.iter().sum::<u64>(), 4294967295);

        let enriched = enrich("(userAccountControl=2147483648)");
        let value = find(&enriched, LdapTokenType::Value);
        let ctx = value.context.value.as_ref().expect("value context");
        assert_eq!(ctx.content_decoded, "-2147483648");
        assert_eq!(ctx.bitwise_addend, vec![2147483648]);
    }

    #[test]
    fn test_neighbor_types() {
        let enriched = enrich("(a=b)");
        assert_eq!(enriched[0].type_before, None);
        assert_eq!(enriched[0].type_after, Some(LdapTokenType::Attribute));
        assert_eq!(enriched[1].type_before, Some(LdapTokenType::GroupStart));
        assert_eq!(
            enriched[1].type_after,
            Some(LdapTokenType::ComparisonOperator)
        );
        assert_eq!(enriched[4].type_after, None);
    }

    #[test]
    fn test_rdn_bookend_neighbors() {
        let enriched = enrich("(distinguishedName=CN=dbo,DC=local)");
        let value = find(&enriched, LdapTokenType::Value);
        let first = value.sub_tokens.first().expect("rdn tokens");
        let last = value.sub_tokens.last().expect("rdn tokens");
        assert_eq!(first.type_before, Some(LdapTokenType::ComparisonOperator));
        assert_eq!(first.type_after, Some(LdapTokenType::ComparisonOperator));
        assert_eq!(last.type_after, Some(LdapTokenType::GroupEnd));
    }

    #[test]
    fn test_scopes_basic() {
        let enriched = enrich("(&(a=b)(c=d))");
        // outer group opens a filter list
        assert_eq!(enriched[0].scope_syntax, LdapTokenScope::FilterList);
        // & applies to the list
        assert_eq!(enriched[1].scope_syntax, LdapTokenScope::FilterList);
        assert_eq!(enriched[1].scope_application, LdapTokenScope::FilterList);
        // inner groups open filters
        assert_eq!(enriched[2].scope_syntax, LdapTokenScope::Filter);
        let last = enriched.last().expect("tokens");
        assert_eq!(last.scope_syntax, LdapTokenScope::FilterList);
    }

    #[test]
    fn test_filter_scope_operators() {
        // & before an attribute is a syntactic no-op
        let enriched = enrich("(&name=dbo)");
        let op = find(&enriched, LdapTokenType::BooleanOperator);
        assert_eq!(op.scope_syntax, LdapTokenScope::Filter);
        assert_eq!(op.scope_application, LdapTokenScope::NA);

        // ! before an attribute negates the filter
        let enriched = enrich("(!name=dbo)");
        let op = find(&enriched, LdapTokenType::BooleanOperator);
        assert_eq!(op.scope_syntax, LdapTokenScope::Filter);
        assert_eq!(op.scope_application, LdapTokenScope::Filter);
    }

    #[test]
    fn test_not_scope_applications() {
        // ! in front of a leaf filter
        let enriched = enrich("(!(a=b))");
        let op = find(&enriched, LdapTokenType::BooleanOperator);
        assert_eq!(op.scope_syntax, LdapTokenScope::FilterList);
        assert_eq!(op.scope_application, LdapTokenScope::Filter);

        // ! in front of a nested filter list
        let enriched = enrich("(!(&(a=b)(c=d)))");
        let op = enriched
            .iter()
            .find(|t| t.content == "!")
            .expect("not operator");
        assert_eq!(op.scope_syntax, LdapTokenScope::FilterList);
        assert_eq!(op.scope_application, LdapTokenScope::BooleanOperator);
    }

    #[test]
    fn test_guid_only_on_filter_list_operators() {
        let enriched = enrich("(&(!(a=b))(&name=dbo))");
        for token in &enriched {
            if token.token_type == LdapTokenType::BooleanOperator {
                match token.scope_syntax {
                    LdapTokenScope::FilterList => assert!(token.guid.is_some()),
                    _ => assert!(token.guid.is_none()),
                }
            }
        }
    }

    #[test]
    fn test_chain_snapshot_on_filter() {
        let enriched = enrich("(&(a=b)(c=d))");
        let filters: Vec<&LdapTokenEnriched> = enriched
            .iter()
            .filter(|t| {
                t.token_type == LdapTokenType::GroupStart
                    && t.scope_application == LdapTokenScope::Filter
            })
            .collect();
        assert_eq!(filters.len(), 2);
        for group_start in filters {
            let ctx = group_start
                .context
                .boolean_operator
                .as_ref()
                .expect("chain context");
            assert_eq!(ctx.filter_list_boolean_operator_token_list.len(), 1);
            assert_eq!(ctx.historical_boolean_operator_count, 1);
            assert_eq!(ctx.filter_list_boolean_operator_distance, 1);
            assert_eq!(
                ctx.logical_filter_boolean_operator,
                LogicalBooleanOperator::And
            );
            assert!(ctx.logical_filter_inclusion);
        }
    }

    #[test]
    fn test_negated_filter_chain() {
        let enriched = enrich("(&(!(a=b))(c=d))");
        let filters: Vec<&LdapTokenEnriched> = enriched
            .iter()
            .filter(|t| {
                t.token_type == LdapTokenType::GroupStart
                    && t.scope_application == LdapTokenScope::Filter
            })
            .collect();
        let first = filters[0].context.boolean_operator.as_ref().unwrap();
        assert_eq!(first.historical_boolean_operator_count, 2);
        assert!(!first.logical_filter_inclusion);
        assert_eq!(first.logical_filter_boolean_operator, LogicalBooleanOperator::Not);
        // a Filter-scope GroupStart reports traversal for filter-scope
        // negations only; the list-level ! shows through inclusion instead
        assert!(!first.negation_boolean_operator_traversal);

        // sibling after the negated list closed: the ! is gone
        let second = filters[1].context.boolean_operator.as_ref().unwrap();
        assert_eq!(second.historical_boolean_operator_count, 1);
        assert!(second.logical_filter_inclusion);
    }

    #[test]
    fn test_consumed_not_excluded_from_active_but_counted() {
        // the ! scopes to the first filter only, yet the historical count
        // still includes it for the second
        let enriched = enrich("(&(!(a=b)(c=d)))");
        let filters: Vec<&LdapTokenEnriched> = enriched
            .iter()
            .filter(|t| {
                t.token_type == LdapTokenType::GroupStart
                    && t.scope_application == LdapTokenScope::Filter
            })
            .collect();
        assert_eq!(filters.len(), 2);
        let first = filters[0].context.boolean_operator.as_ref().unwrap();
        assert_eq!(first.filter_list_boolean_operator_token_list.len(), 2);
        assert_eq!(first.historical_boolean_operator_count, 2);
        let second = filters[1].context.boolean_operator.as_ref().unwrap();
        assert_eq!(second.filter_list_boolean_operator_token_list.len(), 1);
        assert_eq!(second.historical_boolean_operator_count, 2);
    }

    #[test]
    fn test_gapped_operator_distance() {
        let enriched = enrich("(&((a=b)))");
        let filter = enriched
            .iter()
            .find(|t| {
                t.token_type == LdapTokenType::GroupStart
                    && t.scope_application == LdapTokenScope::Filter
            })
            .expect("filter group start");
        let ctx = filter.context.boolean_operator.as_ref().unwrap();
        assert_eq!(ctx.filter_list_boolean_operator_distance, 2);
    }

    #[test]
    fn test_sub_tokens_cleared_when_decoded_fails_dn() {
        // raw value validates as a DN, decoded form does not
        let mut diags = Diagnostics::new();
        let tokens = tokenize("(cn=a\\5C=b)");
        let value_raw = tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::Value)
            .unwrap();
        assert!(!value_raw.sub_tokens.is_empty());
        let enriched = to_token_enriched_with_diagnostics(tokens, &mut diags);
        let value = find(&enriched, LdapTokenType::Value);
        assert!(value.sub_tokens.is_empty());
        assert!(diags
            .entries()
            .iter()
            .any(|d| d.kind == DiagnosticKind::SubTokensCleared));
    }

    #[test]
    fn test_rdn_whitespace_hex_decode() {
        let enriched = enrich("(distinguishedName=CN=dbo,\\20DC=local)");
        let value = find(&enriched, LdapTokenType::Value);
        let ws = value
            .sub_tokens
            .iter()
            .find(|t| t.token_type == LdapTokenType::Whitespace)
            .expect("rdn whitespace");
        assert_eq!(ws.content, "\\20");
        assert_eq!(ws.content_decoded, " ");
    }
}
