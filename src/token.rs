//! Definitions for search-filter token types

use crate::context::LdapContext;

/// Lexical class of a token emitted by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LdapTokenType {
    GroupStart,
    GroupEnd,
    BooleanOperator,
    Attribute,
    ExtensibleMatchFilter,
    ComparisonOperator,
    Value,
    Whitespace,
    CommaDelimiter,
    Undefined,
}

/// Secondary classification; `Rdn` marks tokens produced by the RDN
/// sub-tokenizer inside a DN-valued `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LdapTokenSubType {
    Rdn,
    Undefined,
}

/// Format resolved for a token during enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LdapTokenFormat {
    String,
    Oid,
    Hex,
    NA,
    Undefined,
}

/// Syntax/application scope resolved for a token during enrichment.
///
/// `None` is the bookend value (nothing before/after); `NA` marks an
/// operator that is syntactically present but logically a no-op (an `&`/`|`
/// inside a filter body).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LdapTokenScope {
    Filter,
    FilterList,
    BooleanOperator,
    NA,
    Undefined,
    None,
}

/// One lexical unit of a search filter.
///
/// Tokens are position-preserving: the concatenation of `content` over a
/// token stream reproduces the tokenized source byte-for-byte, and
/// `start`/`length` index into that source.
#[derive(Debug, Clone, PartialEq)]
pub struct LdapToken {
    pub token_type: LdapTokenType,
    pub sub_type: LdapTokenSubType,
    pub content: String,
    pub start: usize,
    pub length: usize,
    /// Parenthesis-nesting depth at the point this token was emitted; the
    /// outermost `GroupStart` is depth 0. Negative only after an unbalanced
    /// `)` (reported, parsing continues).
    pub depth: i32,
    /// RDN sub-tokens of a `Value` whose text is a valid DN.
    pub sub_tokens: Vec<LdapToken>,
}

impl LdapToken {
    pub fn new(
        token_type: LdapTokenType,
        content: impl Into<String>,
        start: usize,
        depth: i32,
    ) -> Self {
        let content = content.into();
        LdapToken {
            token_type,
            sub_type: LdapTokenSubType::Undefined,
            length: content.len(),
            content,
            start,
            depth,
            sub_tokens: Vec::new(),
        }
    }

    pub fn new_rdn(
        token_type: LdapTokenType,
        content: impl Into<String>,
        start: usize,
        depth: i32,
    ) -> Self {
        let mut token = LdapToken::new(token_type, content, start, depth);
        token.sub_type = LdapTokenSubType::Rdn;
        token
    }
}

/// An [`LdapToken`] decorated by the enrichment pass: decoded content,
/// registry resolution, neighbor types, scopes and contexts.
#[derive(Debug, Clone, PartialEq)]
pub struct LdapTokenEnriched {
    pub token_type: LdapTokenType,
    pub sub_type: LdapTokenSubType,
    pub content: String,
    pub start: usize,
    pub length: usize,
    pub depth: i32,
    pub sub_tokens: Vec<LdapTokenEnriched>,
    /// Canonicalized content: registry name for a defined `Attribute`,
    /// `:OID:` for a defined `ExtensibleMatchFilter`, escape-resolved text
    /// for a `Value`, otherwise a copy of `content`.
    pub content_decoded: String,
    pub format: LdapTokenFormat,
    /// For `Attribute`/`ExtensibleMatchFilter`: content resolves in the
    /// registry.
    pub is_defined: bool,
    pub type_before: Option<LdapTokenType>,
    pub type_after: Option<LdapTokenType>,
    pub scope_syntax: LdapTokenScope,
    pub scope_application: LdapTokenScope,
    pub context: LdapContext,
    /// Identity correlating FilterList-scope `BooleanOperator` tokens with
    /// the chain snapshots that reference them; assigned sequentially per
    /// enrichment pass.
    pub guid: Option<u64>,
}

impl LdapTokenEnriched {
    /// Seeds an enriched token from a raw one; enrichment fields start at
    /// their defaults (`content_decoded` mirrors `content`).
    pub(crate) fn from_token(token: LdapToken) -> Self {
        let LdapToken {
            token_type,
            sub_type,
            content,
            start,
            length,
            depth,
            sub_tokens,
        } = token;
        LdapTokenEnriched {
            token_type,
            sub_type,
            content_decoded: content.clone(),
            content,
            start,
            length,
            depth,
            sub_tokens: sub_tokens
                .into_iter()
                .map(LdapTokenEnriched::from_token)
                .collect(),
            format: LdapTokenFormat::Undefined,
            is_defined: false,
            type_before: None,
            type_after: None,
            scope_syntax: LdapTokenScope::Undefined,
            scope_application: LdapTokenScope::Undefined,
            context: LdapContext::default(),
            guid: None,
        }
    }
}
