//! # LDAP Search-Filter Parser
//!
//! A parser, enricher and obfuscation detector for LDAP search-filter
//! strings (RFC 2254 syntax plus the Microsoft Active Directory quirks seen
//! in the wild: hex escapes, whitespace injection, server-side shorthand
//! operators, zero-padded OIDs).
//!
//! The pipeline is strictly forward and recovering — malformed filters are
//! tokenized best-effort, problems land in a [`Diagnostics`] sink, and the
//! token stream always reproduces its source byte-for-byte:
//!
//! ```text
//! &str -> tokenize -> to_token_enriched -> to_filter -> to_branch
//!                                                    \-> find_evil
//! ```
//!
//! ```
//! use ldap_filter_parser::{find_evil, summarize, tokenize};
//!
//! let tokens = tokenize("(|(name=sabi)(name=dbo))");
//! assert_eq!(tokens.len(), 13);
//!
//! let detections = find_evil("(name=kr\\62tgt)", None);
//! assert!(!detections.is_empty());
//! let summary = summarize(&detections, "(name=kr\\62tgt)");
//! assert!(summary.total_score > 0);
//! ```

#![deny(unstable_features, unused_import_braces, unused_qualifications)]
#![warn(missing_debug_implementations, unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod charclass;
pub mod context;
pub mod detect;
mod detect_rules;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod filter_parser;
pub mod rdn_parser;
pub mod schema;
pub mod schema_data;
pub mod token;
pub mod token_parser;
pub mod value_parser;

pub use crate::detect::{
    find_evil, summarize, Detection, DetectionId, DetectionSummary, DetectionType, Detector,
    RuleThresholds,
};
pub use crate::enrich::{to_token_enriched, to_token_enriched_with_diagnostics};
pub use crate::error::{Diagnostic, DiagnosticKind, Diagnostics, FilterError};
pub use crate::filter::{FilterOrToken, LdapBranch, LdapBranchChild, LdapBranchKind, LdapFilter};
pub use crate::filter_parser::{to_branch, to_filter, to_filter_only};
pub use crate::token::{LdapToken, LdapTokenEnriched, LdapTokenType};
pub use crate::token_parser::{tokenize, tokenize_with_diagnostics};

/// Tokenizes and enriches a filter string in one call.
pub fn to_token_enriched_str(filter: &str) -> Vec<LdapTokenEnriched> {
    to_token_enriched(tokenize(filter))
}

/// Parses a filter string all the way to assembled filters.
pub fn to_filter_str(filter: &str) -> Vec<FilterOrToken> {
    to_filter(to_token_enriched_str(filter))
}

/// Parses a filter string all the way to its branch tree.
pub fn to_branch_str(filter: &str) -> Result<LdapBranch, FilterError> {
    to_branch(to_filter_str(filter))
}

/// As [`to_branch_str`], collecting diagnostics from every stage.
pub fn to_branch_str_with_diagnostics(
    filter: &str,
    diags: &mut Diagnostics,
) -> Result<LdapBranch, FilterError> {
    let tokens = tokenize_with_diagnostics(filter, diags);
    let enriched = to_token_enriched_with_diagnostics(tokens, diags);
    to_branch(to_filter(enriched))
}
