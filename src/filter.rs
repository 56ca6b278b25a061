//! Definitions for assembled filters and the parse tree

use crate::context::LdapContext;
use crate::token::{LdapTokenEnriched, LdapTokenType};

/// A single comparison filter, flattened out of its enriched token run.
///
/// String projections are empty when the corresponding token is absent; the
/// full tokens live in `token_list` and `token_dict`.
#[derive(Debug, Clone, PartialEq)]
pub struct LdapFilter {
    pub depth: i32,
    pub start: usize,
    pub length: usize,
    pub content: String,
    pub content_decoded: String,
    /// The filter-scope operator (a `!`/`&`/`|` inside the parentheses).
    pub boolean_operator: String,
    pub attribute: String,
    pub attribute_decoded: String,
    pub extensible_match_filter: String,
    pub extensible_match_filter_decoded: String,
    pub comparison_operator: String,
    pub value: String,
    pub value_decoded: String,
    /// Every enriched token of the filter, `GroupStart` through `GroupEnd`.
    pub token_list: Vec<LdapTokenEnriched>,
    pub token_dict: LdapFilterTokenDict,
    pub context: LdapContext,
}

/// First token of each significant type inside a filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LdapFilterTokenDict {
    pub boolean_operator: Option<LdapTokenEnriched>,
    pub attribute: Option<LdapTokenEnriched>,
    pub extensible_match_filter: Option<LdapTokenEnriched>,
    pub comparison_operator: Option<LdapTokenEnriched>,
    pub value: Option<LdapTokenEnriched>,
}

impl LdapFilterTokenDict {
    pub fn get(&self, token_type: LdapTokenType) -> Option<&LdapTokenEnriched> {
        match token_type {
            LdapTokenType::BooleanOperator => self.boolean_operator.as_ref(),
            LdapTokenType::Attribute => self.attribute.as_ref(),
            LdapTokenType::ExtensibleMatchFilter => self.extensible_match_filter.as_ref(),
            LdapTokenType::ComparisonOperator => self.comparison_operator.as_ref(),
            LdapTokenType::Value => self.value.as_ref(),
            _ => None,
        }
    }
}

/// Output element of the filter assembler: an assembled filter, or a
/// pass-through token between filters.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOrToken {
    Filter(LdapFilter),
    Token(LdapTokenEnriched),
}

/// A child of a filter-list branch.
#[derive(Debug, Clone, PartialEq)]
pub enum LdapBranchChild {
    Branch(LdapBranch),
    Token(LdapTokenEnriched),
}

/// The payload distinguishing a leaf from a nested list.
#[derive(Debug, Clone, PartialEq)]
pub enum LdapBranchKind {
    Filter(LdapFilter),
    FilterList(Vec<LdapBranchChild>),
}

/// One node of the parse tree, with aggregates folded over its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct LdapBranch {
    pub kind: LdapBranchKind,
    pub start: usize,
    pub length: usize,
    pub content: String,
    pub content_decoded: String,
    pub depth: i32,
    /// Deepest depth in this subtree.
    pub depth_max: i32,
    /// Largest historical boolean-operator count over the subtree's filters.
    pub boolean_operator_count_max: usize,
    /// As `boolean_operator_count_max`, plus one for a filter containing a
    /// wildcard (the effective chain the server accounts for).
    pub boolean_operator_logical_count_max: usize,
    /// The operator modifying this branch (leading operator of a list,
    /// filter-scope operator of a leaf).
    pub boolean_operator: String,
    pub context: LdapContext,
    /// Ordinal among the parent's branch children.
    pub index: usize,
}

impl LdapBranch {
    /// Depth-first iterator over this branch and every nested branch.
    pub fn walk(&self) -> Vec<&LdapBranch> {
        let mut out = vec![self];
        if let LdapBranchKind::FilterList(children) = &self.kind {
            for child in children {
                if let LdapBranchChild::Branch(branch) = child {
                    out.extend(branch.walk());
                }
            }
        }
        out
    }

    /// The filters of this subtree, in source order.
    pub fn filters(&self) -> Vec<&LdapFilter> {
        self.walk()
            .into_iter()
            .filter_map(|b| match &b.kind {
                LdapBranchKind::Filter(filter) => Some(filter),
                LdapBranchKind::FilterList(_) => None,
            })
            .collect()
    }
}
