//! Filter assembly and parse-tree construction
//!
//! Third and fourth pipeline stages: collapse the enriched token runs
//! between a filter-scope `GroupStart` and its matching `GroupEnd` into
//! [`LdapFilter`] records, then nest filters and filter-lists into an
//! [`LdapBranch`] tree carrying depth and operator-count aggregates.

use crate::context::LdapContext;
use crate::error::FilterError;
use crate::filter::{
    FilterOrToken, LdapBranch, LdapBranchChild, LdapBranchKind, LdapFilter, LdapFilterTokenDict,
};
use crate::token::{LdapTokenEnriched, LdapTokenScope, LdapTokenType};

/// Collapses filter token runs into [`LdapFilter`] records, passing every
/// other token through unchanged.
pub fn to_filter(tokens: Vec<LdapTokenEnriched>) -> Vec<FilterOrToken> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token.token_type == LdapTokenType::GroupStart
            && token.scope_application == LdapTokenScope::Filter
        {
            // the matching GroupEnd is the first one back at this depth;
            // best effort to end-of-stream when the group never closes
            let close = tokens[i..]
                .iter()
                .position(|t| {
                    t.token_type == LdapTokenType::GroupEnd && t.depth <= token.depth
                })
                .map(|off| i + off)
                .unwrap_or(tokens.len() - 1);
            out.push(FilterOrToken::Filter(assemble(&tokens[i..=close])));
            i = close + 1;
        } else {
            out.push(FilterOrToken::Token(token.clone()));
            i += 1;
        }
    }
    out
}

/// As [`to_filter`], dropping the pass-through tokens.
pub fn to_filter_only(tokens: Vec<LdapTokenEnriched>) -> Vec<LdapFilter> {
    to_filter(tokens)
        .into_iter()
        .filter_map(|item| match item {
            FilterOrToken::Filter(filter) => Some(filter),
            FilterOrToken::Token(_) => None,
        })
        .collect()
}

fn assemble(run: &[LdapTokenEnriched]) -> LdapFilter {
    let group_start = &run[0];
    let content: String = run.iter().map(|t| t.content.as_str()).collect();
    let content_decoded: String = run.iter().map(|t| t.content_decoded.as_str()).collect();

    let mut dict = LdapFilterTokenDict::default();
    for token in run {
        let slot = match token.token_type {
            LdapTokenType::BooleanOperator => &mut dict.boolean_operator,
            LdapTokenType::Attribute => &mut dict.attribute,
            LdapTokenType::ExtensibleMatchFilter => &mut dict.extensible_match_filter,
            LdapTokenType::ComparisonOperator => &mut dict.comparison_operator,
            LdapTokenType::Value => &mut dict.value,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(token.clone());
        }
    }

    let project = |t: &Option<LdapTokenEnriched>| -> (String, String) {
        match t {
            Some(t) => (t.content.clone(), t.content_decoded.clone()),
            None => (String::new(), String::new()),
        }
    };
    let (attribute, attribute_decoded) = project(&dict.attribute);
    let (emr, emr_decoded) = project(&dict.extensible_match_filter);
    let (value, value_decoded) = project(&dict.value);
    let comparison_operator = dict
        .comparison_operator
        .as_ref()
        .map(|t| t.content.clone())
        .unwrap_or_default();
    let boolean_operator = dict
        .boolean_operator
        .as_ref()
        .map(|t| t.content.clone())
        .unwrap_or_default();

    // the chain snapshot travels on the GroupStart; the token contexts are
    // folded in so filter-level rules see everything in one place
    let mut context = group_start.context.clone();
    if let Some(attr) = &dict.attribute {
        context.attribute = attr.context.attribute.clone();
    }
    if let Some(emr_token) = &dict.extensible_match_filter {
        context.extensible_match_filter = emr_token.context.extensible_match_filter.clone();
    }
    if let Some(value_token) = &dict.value {
        context.value = value_token.context.value.clone();
    }

    LdapFilter {
        depth: group_start.depth,
        start: group_start.start,
        length: content.len(),
        content,
        content_decoded,
        boolean_operator,
        attribute,
        attribute_decoded,
        extensible_match_filter: emr,
        extensible_match_filter_decoded: emr_decoded,
        comparison_operator,
        value,
        value_decoded,
        token_list: run.to_vec(),
        token_dict: dict,
        context,
    }
}

/// Builds the parse tree. The stream's filter-lists become nested branches;
/// a branch still open at end of input is an invariant violation.
pub fn to_branch(merged: Vec<FilterOrToken>) -> Result<LdapBranch, FilterError> {
    let mut cursor = 0;
    let mut children = Vec::new();
    let mut branch_index = 0;

    while cursor < merged.len() {
        let child = next_child(&merged, &mut cursor, &mut branch_index)?;
        children.push(child);
    }

    Ok(finish_filter_list(
        children,
        0,
        LdapContext::default(),
        String::new(),
        0,
    ))
}

// Consumes one child at the current level. A stray FilterList GroupEnd at
// the top level passes through as a token.
fn next_child(
    merged: &[FilterOrToken],
    cursor: &mut usize,
    branch_index: &mut usize,
) -> Result<LdapBranchChild, FilterError> {
    match &merged[*cursor] {
        FilterOrToken::Filter(filter) => {
            *cursor += 1;
            let index = *branch_index;
            *branch_index += 1;
            Ok(LdapBranchChild::Branch(filter_branch(filter, index)))
        }
        FilterOrToken::Token(token)
            if token.token_type == LdapTokenType::GroupStart
                && token.scope_application == LdapTokenScope::FilterList =>
        {
            let index = *branch_index;
            *branch_index += 1;
            let branch = filter_list_branch(merged, cursor, token.clone(), index)?;
            Ok(LdapBranchChild::Branch(branch))
        }
        FilterOrToken::Token(token) => {
            *cursor += 1;
            Ok(LdapBranchChild::Token(token.clone()))
        }
    }
}

fn filter_list_branch(
    merged: &[FilterOrToken],
    cursor: &mut usize,
    group_start: LdapTokenEnriched,
    index: usize,
) -> Result<LdapBranch, FilterError> {
    let depth = group_start.depth;
    let context = group_start.context.clone();
    let mut children: Vec<LdapBranchChild> = vec![LdapBranchChild::Token(group_start)];
    let mut child_index = 0;
    *cursor += 1;

    loop {
        if *cursor >= merged.len() {
            return Err(FilterError::UnclosedBranch(1));
        }
        if let FilterOrToken::Token(token) = &merged[*cursor] {
            if token.token_type == LdapTokenType::GroupEnd && token.depth <= depth {
                children.push(LdapBranchChild::Token(token.clone()));
                *cursor += 1;
                break;
            }
        }
        let child = next_child(merged, cursor, &mut child_index)?;
        children.push(child);
    }

    // the branch's operator leads its children: within two tokens of the
    // GroupStart, one whitespace allowed in between
    let boolean_operator = children
        .iter()
        .skip(1)
        .take(2)
        .find_map(|child| match child {
            LdapBranchChild::Token(t) if t.token_type == LdapTokenType::BooleanOperator => {
                Some(t.content.clone())
            }
            _ => None,
        })
        .unwrap_or_default();

    Ok(finish_filter_list(
        children,
        depth,
        context,
        boolean_operator,
        index,
    ))
}

fn finish_filter_list(
    children: Vec<LdapBranchChild>,
    depth: i32,
    context: LdapContext,
    boolean_operator: String,
    index: usize,
) -> LdapBranch {
    let mut content = String::new();
    let mut content_decoded = String::new();
    let mut start = None;
    let mut depth_max = depth;
    let mut count_max = 0usize;
    let mut logical_count_max = 0usize;

    for child in &children {
        match child {
            LdapBranchChild::Branch(branch) => {
                if start.is_none() {
                    start = Some(branch.start);
                }
                content.push_str(&branch.content);
                content_decoded.push_str(&branch.content_decoded);
                depth_max = depth_max.max(branch.depth_max);
                count_max = count_max.max(branch.boolean_operator_count_max);
                logical_count_max = logical_count_max.max(branch.boolean_operator_logical_count_max);
            }
            LdapBranchChild::Token(token) => {
                if start.is_none() {
                    start = Some(token.start);
                }
                content.push_str(&token.content);
                content_decoded.push_str(&token.content_decoded);
                depth_max = depth_max.max(token.depth);
            }
        }
    }

    LdapBranch {
        kind: LdapBranchKind::FilterList(children),
        start: start.unwrap_or(0),
        length: content.len(),
        content,
        content_decoded,
        depth,
        depth_max,
        boolean_operator_count_max: count_max,
        boolean_operator_logical_count_max: logical_count_max,
        boolean_operator,
        context,
        index,
    }
}

fn filter_branch(filter: &LdapFilter, index: usize) -> LdapBranch {
    let historical = filter
        .context
        .boolean_operator
        .as_ref()
        .map(|ctx| ctx.historical_boolean_operator_count)
        .unwrap_or(0);
    let logical = if filter.content.contains('*') {
        historical + 1
    } else {
        historical
    };
    LdapBranch {
        kind: LdapBranchKind::Filter(filter.clone()),
        start: filter.start,
        length: filter.length,
        content: filter.content.clone(),
        content_decoded: filter.content_decoded.clone(),
        depth: filter.depth,
        depth_max: filter.depth,
        boolean_operator_count_max: historical,
        boolean_operator_logical_count_max: logical,
        boolean_operator: filter.boolean_operator.clone(),
        context: filter.context.clone(),
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::to_token_enriched;
    use crate::token_parser::tokenize;
    use pretty_assertions::assert_eq;

    fn filters_of(filter: &str) -> Vec<LdapFilter> {
        to_filter_only(to_token_enriched(tokenize(filter)))
    }

    fn branch_of(filter: &str) -> LdapBranch {
        to_branch(to_filter(to_token_enriched(tokenize(filter)))).expect("balanced filter")
    }

    #[test]
    fn test_assemble_two_filters() {
        let filters = filters_of("(|(name=sabi)(name=dbo))");
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].attribute, "name");
        assert_eq!(filters[0].value, "sabi");
        assert_eq!(filters[0].comparison_operator, "=");
        assert_eq!(filters[0].content, "(name=sabi)");
        assert_eq!(filters[0].depth, 1);
        assert_eq!(filters[1].value, "dbo");
    }

    #[test]
    fn test_assemble_decodes() {
        let filters = filters_of("(1.2.840.113556.1.4.8:1.2.840.113556.1.4.803:=kr\\62tgt)");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].attribute_decoded, "userAccountControl");
        assert_eq!(
            filters[0].extensible_match_filter_decoded,
            ":1.2.840.113556.1.4.803:"
        );
        assert_eq!(filters[0].value_decoded, "krbtgt");
    }

    #[test]
    fn test_assemble_filter_scope_operator() {
        let filters = filters_of("(&name=dbo)");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].boolean_operator, "&");
        assert_eq!(filters[0].attribute, "name");
    }

    #[test]
    fn test_filter_without_comparison_operator() {
        let filters = filters_of("(objectClass)");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].attribute, "objectClass");
        assert_eq!(filters[0].comparison_operator, "");
        assert_eq!(filters[0].value, "");
    }

    #[test]
    fn test_branch_single_filter() {
        let branch = branch_of("(a=b)");
        match &branch.kind {
            LdapBranchKind::FilterList(children) => {
                let branches: Vec<_> = children
                    .iter()
                    .filter(|c| matches!(c, LdapBranchChild::Branch(_)))
                    .collect();
                assert_eq!(branches.len(), 1);
            }
            LdapBranchKind::Filter(_) => panic!("root must be a filter list"),
        }
        assert_eq!(branch.filters().len(), 1);
        assert_eq!(branch.depth_max, 1);
        assert_eq!(branch.content, "(a=b)");
    }

    #[test]
    fn test_branch_nesting_and_aggregates() {
        let branch = branch_of("(&(a=b)(|(c=d)(e=*)))");
        assert_eq!(branch.filters().len(), 3);
        // a=b and the nested list under one outer list
        let outer = match &branch.kind {
            LdapBranchKind::FilterList(children) => children
                .iter()
                .find_map(|c| match c {
                    LdapBranchChild::Branch(b) => Some(b),
                    _ => None,
                })
                .expect("outer branch"),
            _ => panic!("root must be a filter list"),
        };
        assert_eq!(outer.boolean_operator, "&");
        // branch depth counts branches, not body tokens
        assert_eq!(outer.depth_max, 2);
        // the wildcard filter bumps the logical count
        assert_eq!(outer.boolean_operator_count_max, 2);
        assert_eq!(outer.boolean_operator_logical_count_max, 3);
        assert_eq!(branch.content, "(&(a=b)(|(c=d)(e=*)))");
    }

    #[test]
    fn test_branch_round_trip_content() {
        for source in [
            "(|(name=sabi)(name=dbo))",
            " ( & ( a = b ) ( c = d ) ) ",
            "(!(&(a=b)(c=d)))",
        ] {
            let branch = branch_of(source);
            assert_eq!(branch.content, source);
        }
    }

    #[test]
    fn test_branch_unclosed_is_error() {
        let merged = to_filter(to_token_enriched(tokenize("((a=b)")));
        assert_eq!(to_branch(merged), Err(FilterError::UnclosedBranch(1)));
    }

    #[test]
    fn test_branch_not_list_operator() {
        let branch = branch_of("(!(&(a=b)(c=d)))");
        let outer = branch
            .walk()
            .into_iter()
            .find(|b| b.boolean_operator == "!")
            .expect("negated list branch");
        match &outer.kind {
            LdapBranchKind::FilterList(_) => {}
            _ => panic!("negation wraps a list"),
        }
    }
}
