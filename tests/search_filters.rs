use ldap_filter_parser::detect::DetectionId;
use ldap_filter_parser::token::{LdapTokenScope, LdapTokenType};
use ldap_filter_parser::{
    find_evil, summarize, to_branch_str, to_filter_str, to_token_enriched, to_token_enriched_str,
    tokenize, tokenize_with_diagnostics, Diagnostics, FilterOrToken,
};
use pretty_assertions::assert_eq;

fn rebuilt(tokens: &[ldap_filter_parser::LdapToken]) -> String {
    tokens.iter().map(|t| t.content.as_str()).collect()
}

fn fired(detections: &[ldap_filter_parser::Detection], id: DetectionId) -> bool {
    detections.iter().any(|d| d.id == id)
}

#[test]
fn test_two_name_filters_are_benign() {
    let source = "(|(name=sabi)(name=dbo))";
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 13);
    assert_eq!(tokens.iter().map(|t| t.depth).max(), Some(2));

    let filters: Vec<_> = to_filter_str(source)
        .into_iter()
        .filter(|item| matches!(item, FilterOrToken::Filter(_)))
        .collect();
    assert_eq!(filters.len(), 2);

    assert_eq!(find_evil(source, None), Vec::new());
}

#[test]
fn test_whitespace_heavy_bitwise_filter() {
    let source = " ( & ( 1.2.840.113556.1.4.8 :1.2.840.113556.1.4.804:= 512 ) )";
    let enriched = to_token_enriched_str(source);

    let emr = enriched
        .iter()
        .find(|t| t.token_type == LdapTokenType::ExtensibleMatchFilter)
        .expect("emr token");
    assert_eq!(emr.content_decoded, ":1.2.840.113556.1.4.804:");

    let attr = enriched
        .iter()
        .find(|t| t.token_type == LdapTokenType::Attribute)
        .expect("attribute token");
    assert_eq!(attr.content_decoded, "userAccountControl");

    let detections = find_evil(source, None);
    assert!(fired(&detections, DetectionId::ContextWhitespaceExcessiveCount));
}

#[test]
fn test_dn_value_with_quoted_rdn() {
    let source = "(distinguishedName=CN=\"dbo\",CN=Users,DC=contoso,DC=local)";
    let tokens = tokenize(source);
    let value = tokens
        .iter()
        .find(|t| t.token_type == LdapTokenType::Value)
        .expect("value token");
    assert_eq!(value.sub_tokens.len(), 15);
    assert_eq!(rebuilt(&value.sub_tokens), value.content);

    let detections = find_evil(source, None);
    assert!(fired(
        &detections,
        DetectionId::RdnValueEncapsulatedWithDoubleQuotes
    ));
}

#[test]
fn test_hex_encoded_sensitive_value() {
    let source = "(name=kr\\62tgt)";
    let enriched = to_token_enriched_str(source);
    let value = enriched
        .iter()
        .find(|t| t.token_type == LdapTokenType::Value)
        .expect("value token");
    assert_eq!(value.content_decoded, "krbtgt");

    let detections = find_evil(source, None);
    let hit = detections
        .iter()
        .find(|d| d.id == DetectionId::SensitiveValueWithHexEncoding)
        .expect("sensitive value detection");
    assert_eq!(hit.content_decoded, "krbtgt");
}

#[test]
fn test_range_comparison_on_bitwise_attribute() {
    let detections = find_evil("(sAMAccountType>=805306367)", None);
    assert!(fired(
        &detections,
        DetectionId::ComparisonOperatorRangeDefinedBitwiseAttribute
    ));
}

#[test]
fn test_user_account_control_bit_probe() {
    let source = "(userAccountControl:1.2.840.113556.1.4.804:=65929)";
    let enriched = to_token_enriched_str(source);
    let value = enriched
        .iter()
        .find(|t| t.token_type == LdapTokenType::Value)
        .expect("value token");
    let ctx = value.context.value.as_ref().expect("value context");
    assert_eq!(ctx.bitwise_addend, vec![1, 8, 128, 256, 65536]);
    assert_eq!(ctx.bitwise_addend.iter().sum::<u64>(), 65929);

    let detections = find_evil(source, None);
    assert!(fired(
        &detections,
        DetectionId::SpecificBitwiseAddendForDefinedAttributeUserAccountControl
    ));
}

#[test]
fn test_round_trip_property() {
    for source in [
        "(|(name=sabi)(name=dbo))",
        " ( & ( a = b ) ( c = d ) ) ",
        "(!(&(a=b)(|(c=d)(e=*))))",
        "(distinguishedName=CN=\"dbo\",CN=Users,DC=contoso,DC=local)",
        "(cn=\\20 dbo \\20)",
        ")(broken",
        "(a=b",
        "",
        "(&!!|(a=b)(c=d))",
        "(cn=a\\28b\\29c)",
    ] {
        let tokens = tokenize(source);
        assert_eq!(rebuilt(&tokens), *source, "round trip for {:?}", source);

        // enrichment keeps content byte-exact
        let enriched = to_token_enriched(tokens);
        let enriched_content: String = enriched.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(enriched_content, *source);

        for value in enriched.iter().filter(|t| !t.sub_tokens.is_empty()) {
            let sub: String = value.sub_tokens.iter().map(|t| t.content.as_str()).collect();
            assert_eq!(sub, value.content);
        }
    }
}

#[test]
fn test_depth_matches_nesting() {
    for (source, max_depth) in [
        ("(a=b)", 1),
        ("(|(a=b)(c=d))", 2),
        ("(!(&(a=b)(|(c=d)(e=f))))", 4),
    ] {
        let tokens = tokenize(source);
        assert_eq!(tokens.iter().map(|t| t.depth).max(), Some(max_depth));
    }
}

#[test]
fn test_determinism() {
    let source = "(&(!(sAMAccountName=kr\\62tgt))(userAccountControl:1.2.840.113556.1.4.803:=512))";
    let first = find_evil(source, None);
    let second = find_evil(source, None);
    assert_eq!(first, second);
}

#[test]
fn test_logical_inclusion_cancellation() {
    // double negation cancels out
    let enriched = to_token_enriched_str("(&!!(a=b))");
    let filter_start = enriched
        .iter()
        .find(|t| {
            t.token_type == LdapTokenType::GroupStart
                && t.scope_application == LdapTokenScope::Filter
        })
        .expect("filter group start");
    let ctx = filter_start
        .context
        .boolean_operator
        .as_ref()
        .expect("chain context");
    assert!(ctx.logical_filter_inclusion);

    let enriched = to_token_enriched_str("(&(!(a=b)))");
    let filter_start = enriched
        .iter()
        .find(|t| {
            t.token_type == LdapTokenType::GroupStart
                && t.scope_application == LdapTokenScope::Filter
        })
        .expect("filter group start");
    let ctx = filter_start
        .context
        .boolean_operator
        .as_ref()
        .expect("chain context");
    assert!(!ctx.logical_filter_inclusion);
}

#[test]
fn test_shorthand_rewrites() {
    let mut diags = Diagnostics::new();
    let tokens = tokenize_with_diagnostics("(userAccountControl&512)", &mut diags);
    assert_eq!(
        rebuilt(&tokens),
        "(userAccountControl:1.2.840.113556.1.4.803:=512)"
    );
    assert!(!diags.is_empty());

    // the <==> shorthand rewrites to the in-chain rule and reparses cleanly
    let tokens = tokenize("(memberOf<==>CN=Domain Admins,DC=contoso,DC=local)");
    assert_eq!(
        rebuilt(&tokens),
        "(memberOf:1.2.840.113556.1.4.1941:=CN=Domain Admins,DC=contoso,DC=local)"
    );
    let comp = tokens
        .iter()
        .find(|t| t.token_type == LdapTokenType::ComparisonOperator)
        .expect("comparison operator");
    assert_eq!(comp.content, "=");

    let detections = find_evil("(memberOf<==>CN=Domain Admins,DC=contoso,DC=local)", None);
    assert!(fired(&detections, DetectionId::ExtensibleMatchFilterInChain));
    assert!(fired(&detections, DetectionId::SensitiveValueWithoutObfuscation));
}

#[test]
fn test_undefined_literal_rewrite() {
    let tokens = tokenize("(UNDEFINED)");
    assert_eq!(rebuilt(&tokens), "(UNDEFINED=UNDEFINED)");
    let detections = find_evil("(UNDEFINED)", None);
    assert!(fired(&detections, DetectionId::UndefinedFilterLiteral));
}

#[test]
fn test_branch_aggregates() {
    let branch = to_branch_str("(&(a=b)(|(c=d)(e=*)))").expect("balanced filter");
    assert_eq!(branch.filters().len(), 3);
    assert_eq!(branch.depth_max, 2);
    assert_eq!(branch.boolean_operator_logical_count_max, 3);
}

#[test]
fn test_excluded_filter_list_detection() {
    let detections = find_evil("(!(&(a=b)(c=d)))", None);
    assert!(fired(
        &detections,
        DetectionId::LogicallyExcludedFilterListBranchNotAnd
    ));

    let detections = find_evil("(!(|(a=b)(c=d)))", None);
    assert!(fired(
        &detections,
        DetectionId::LogicallyExcludedFilterListBranchNotOr
    ));
}

#[test]
fn test_single_filter_modifier_detections() {
    let detections = find_evil("(&(a=b))", None);
    assert!(fired(
        &detections,
        DetectionId::ContextBooleanOperatorAndModifyingSingleFilter
    ));
    let detections = find_evil("(|(a=b))", None);
    assert!(fired(
        &detections,
        DetectionId::ContextBooleanOperatorOrModifyingSingleFilter
    ));
}

#[test]
fn test_adjacent_repeating_operators() {
    let detections = find_evil("(&(&(a=b)))", None);
    assert!(fired(
        &detections,
        DetectionId::ContextBooleanOperatorAdjacentRepeatingFilterListAndCount
    ));
    let detections = find_evil("(&!!|(a=b)(c=d))", None);
    assert!(fired(
        &detections,
        DetectionId::ContextBooleanOperatorAdjacentRepeatingFilterListNotCount
    ));
}

#[test]
fn test_sensitive_wildcard_match() {
    let detections = find_evil("(sAMAccountName=krb*)", None);
    assert!(fired(&detections, DetectionId::SensitiveValueMatchedWithWildcard));

    // the bare presence wildcard is not a sensitive-value match
    let detections = find_evil("(sAMAccountName=*)", None);
    assert!(!fired(&detections, DetectionId::SensitiveValueMatchedWithWildcard));
}

#[test]
fn test_sensitive_attribute_presence() {
    let detections = find_evil("(ms-Mcs-AdmPwd=*)", None);
    assert!(fired(&detections, DetectionId::SensitiveAttributePresenceFilter));
    let detections = find_evil("(unicodePwd=*)", None);
    assert!(fired(&detections, DetectionId::SensitiveAttributePresenceFilter));
}

#[test]
fn test_id_subset_selection() {
    let source = "(name=kr\\62tgt)";
    let all = find_evil(source, None);
    assert!(all.len() > 1);
    let only = find_evil(source, Some(&[DetectionId::SensitiveValueWithHexEncoding]));
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].id, DetectionId::SensitiveValueWithHexEncoding);
}

#[test]
fn test_empty_filter_short_circuits() {
    assert!(find_evil("", None).is_empty());
}

#[test]
fn test_summary() {
    let source = "(name=kr\\62tgt)";
    let detections = find_evil(source, None);
    let summary = summarize(&detections, source);
    assert_eq!(summary.search_filter, source);
    assert_eq!(summary.detection_count, detections.len());
    assert_eq!(
        summary.total_score,
        detections.iter().map(|d| d.score).sum::<u32>()
    );
    assert_eq!(
        summary.distinct_ids.len(),
        summary.distinct_names.len()
    );
    assert!(summary.distinct_ids.contains(&DetectionId::SensitiveValueWithHexEncoding));
}

#[test]
fn test_detection_id_display() {
    assert_eq!(
        DetectionId::ContextWhitespaceExcessiveCount.to_string(),
        "CONTEXT_WHITESPACE_EXCESSIVE_COUNT"
    );
    assert_eq!(
        DetectionId::SensitiveValueMatchedWithWildcard.to_string(),
        "SENSITIVE_VALUE_MATCHED_WITH_WILDCARD"
    );
}
