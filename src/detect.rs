//! Detection engine
//!
//! A closed catalog of detection rules evaluated over the enriched parse
//! result in three passes: token-level statistics, per-filter predicates,
//! and branch-tree structure. `find_evil` composes the whole pipeline and
//! never fails: malformed input degrades to whatever the recovering parser
//! produced, and missing enrichment is compared against sentinels.

use crate::detect_rules as rules;
use crate::enrich::to_token_enriched;
use crate::filter::{LdapBranch, LdapFilter};
use crate::filter_parser::{to_branch, to_filter, to_filter_only};
use crate::token::LdapTokenEnriched;
use crate::token_parser::tokenize;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// Which dispatch pass produced a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetectionType {
    Token,
    Filter,
    Branch,
}

/// The closed rule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionId {
    // token-level
    ContextBooleanOperatorExcessiveCount,
    ContextBooleanOperatorNonShallowExcessiveCount,
    ContextExtensibleMatchFilterExcessiveCount,
    ContextWhitespaceExcessiveCount,
    ContextLargeWhitespaceExcessiveCount,
    ContextWhitespaceUncommonNeighborExcessiveCount,
    // filter-level: aggregates and boolean structure
    ContextFilterExcessiveCount,
    ContextLogicallyExcludedFilterExcessiveCount,
    ContextBooleanOperatorFilterScopeAnd,
    ContextBooleanOperatorFilterScopeOr,
    ContextBooleanOperatorFilterScopeNot,
    FilterBranchWithGappedBooleanOperator,
    LogicallyIncludedFilterBranchNotAnd,
    LogicallyExcludedFilterBranchNotOr,
    // filter-level: attributes
    UndefinedAttribute,
    UndefinedAttributeInvalidSpecialChars,
    UndefinedAttributeWithWildcard,
    DefinedAttributeWithOidSyntax,
    DefinedAttributeOidSyntaxWithPrefix,
    DefinedAttributeOidSyntaxWithZeros,
    DefinedAttributeWithScatteredCase,
    DefinedAttributeAnr,
    AttributeWithAdjacentWhitespace,
    SensitiveAttributePresenceFilter,
    // filter-level: extensible match rules
    UndefinedExtensibleMatchFilter,
    DefinedExtensibleMatchFilterNameSyntax,
    DefinedExtensibleMatchFilterOidSyntaxWithZeros,
    ExtensibleMatchFilterInChain,
    ExtensibleMatchFilterDnWithData,
    BitwiseExtensibleMatchFilterForNonBitwiseAttribute,
    ExtensibleMatchFilterForUndefinedAttribute,
    // filter-level: comparison operators
    ComparisonOperatorRangeDefinedBitwiseAttribute,
    ComparisonOperatorRangeDefinedByteArrayAttribute,
    ComparisonOperatorApproxMatch,
    FilterWithoutComparisonOperator,
    FilterWithEmptyValue,
    // filter-level: values
    ValueWithHexEncodingForAlphanumericChars,
    ValueWithHexEncodingForSpecialChars,
    ValueWithEscapedAlphanumericChars,
    ValueWithExcessiveHexEncoding,
    ValueWithNonPrintableChars,
    ValueWithTrailingEscape,
    ValueWithExcessiveWildcards,
    ValueWithAdjacentWildcards,
    ValueWithHexEncodedWildcard,
    DatetimeValueWithObfuscatedMilliseconds,
    DatetimeValueNonstandardFormat,
    IntValueWithPrependedZeroes,
    IntValueNonNumeric,
    IntValueExceedingSignedIntRange,
    BooleanValueNonstandard,
    DnValueWithWildcard,
    DnValueInvalidRdnStructure,
    BitwiseValueNonNumeric,
    SpecificBitwiseAddendForDefinedAttributeUserAccountControl,
    SpecificBitwiseAddendForDefinedAttributeGroupType,
    SpecificBitwiseAddendForDefinedAttributeSamAccountType,
    // filter-level: sensitive values
    SensitiveValueWithoutObfuscation,
    SensitiveValueWithHexEncoding,
    SensitiveValueWithEscapeObfuscation,
    SensitiveValueMatchedWithWildcard,
    UndefinedFilterLiteral,
    // filter-level: RDN sub-structure
    RdnAttributeWithHexEncoding,
    RdnValueEncapsulatedWithDoubleQuotes,
    RdnComparisonOperatorWithHexEncoding,
    RdnCommaDelimiterWithHexEncoding,
    RdnValueWithHexEncoding,
    RdnWithExcessiveWhitespace,
    // branch-level
    ContextSearchFilterExcessiveLength,
    ContextFilterExcessiveMaxDepth,
    ContextFilterBooleanOperatorExcessiveMaxCount,
    ContextBooleanOperatorAdjacentRepeatingFilterListAndCount,
    ContextBooleanOperatorAdjacentRepeatingFilterListOrCount,
    ContextBooleanOperatorAdjacentRepeatingFilterListNotCount,
    LogicallyExcludedFilterListBranchNotAnd,
    LogicallyExcludedFilterListBranchNotOr,
    ContextBooleanOperatorAndModifyingSingleFilter,
    ContextBooleanOperatorOrModifyingSingleFilter,
}

/// One rule firing, positioned in the analyzed filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub detection_type: DetectionType,
    pub author: &'static str,
    pub date: &'static str,
    pub id: DetectionId,
    pub name: &'static str,
    pub example: &'static str,
    pub score: u32,
    pub depth: i32,
    pub start: usize,
    pub content: String,
    pub content_decoded: String,
}

/// Aggregate over a detection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionSummary {
    pub search_filter: String,
    pub total_score: u32,
    pub detection_count: usize,
    pub distinct_ids: Vec<DetectionId>,
    pub distinct_names: Vec<&'static str>,
}

/// Numeric knobs of the rule catalog; every rule fires when its statistic
/// exceeds the configured bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleThresholds {
    pub boolean_operator_count: usize,
    pub boolean_operator_non_shallow_depth: i32,
    pub boolean_operator_non_shallow_count: usize,
    pub extensible_match_filter_count: usize,
    pub whitespace_count: usize,
    pub large_whitespace_length: usize,
    pub large_whitespace_count: usize,
    pub whitespace_uncommon_neighbor_count: usize,
    pub filter_count: usize,
    pub logically_excluded_filter_count: usize,
    pub max_depth: i32,
    /// Operator-chain budget ordinary AD filters accept; a wildcard in the
    /// filter effectively shrinks it by one.
    pub boolean_operator_chain_max: usize,
    pub search_filter_length: usize,
    pub value_hex_count: usize,
    pub value_wildcard_count: usize,
    pub rdn_whitespace_length: usize,
    pub adjacent_repeating_count: usize,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        RuleThresholds {
            boolean_operator_count: 10,
            boolean_operator_non_shallow_depth: 1,
            boolean_operator_non_shallow_count: 5,
            extensible_match_filter_count: 5,
            whitespace_count: 7,
            large_whitespace_length: 5,
            large_whitespace_count: 2,
            whitespace_uncommon_neighbor_count: 2,
            filter_count: 25,
            logically_excluded_filter_count: 5,
            max_depth: 15,
            boolean_operator_chain_max: 4,
            search_filter_length: 2048,
            value_hex_count: 8,
            value_wildcard_count: 3,
            rdn_whitespace_length: 4,
            adjacent_repeating_count: 1,
        }
    }
}

/// A rule firing before catalog metadata is attached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RuleHit {
    pub depth: i32,
    pub start: usize,
    pub content: String,
    pub content_decoded: String,
}

const AUTHOR: &str = "ldap-filter-parser ruleset";

struct RuleMeta {
    id: DetectionId,
    name: &'static str,
    example: &'static str,
    score: u32,
    date: &'static str,
}

type TokenRuleFn = fn(&[LdapTokenEnriched], &RuleThresholds) -> Vec<RuleHit>;
type FilterRuleFn = fn(&[LdapFilter], &RuleThresholds) -> Vec<RuleHit>;
type BranchRuleFn = fn(&LdapBranch, &RuleThresholds) -> Vec<RuleHit>;

macro_rules! meta {
    ($id:ident, $score:expr, $date:literal, $name:literal, $example:literal) => {
        RuleMeta {
            id: DetectionId::$id,
            name: $name,
            example: $example,
            score: $score,
            date: $date,
        }
    };
}

static TOKEN_RULES: &[(RuleMeta, TokenRuleFn)] = &[
    (
        meta!(ContextBooleanOperatorExcessiveCount, 50, "2024-02-11",
            "Excessive boolean operator count",
            "(&(&(&(&(&(&(&(&(&(&(&(a=b)))))))))))"),
        rules::boolean_operator_excessive_count,
    ),
    (
        meta!(ContextBooleanOperatorNonShallowExcessiveCount, 50, "2024-02-11",
            "Excessive boolean operators below the first nesting level",
            "(&(|(&(|(&(|(a=b))))))))"),
        rules::boolean_operator_non_shallow_excessive_count,
    ),
    (
        meta!(ContextExtensibleMatchFilterExcessiveCount, 50, "2024-02-11",
            "Excessive extensible match rule count",
            "(&(a:1.2.840.113556.1.4.803:=1)(b:1.2.840.113556.1.4.803:=1)...)"),
        rules::extensible_match_filter_excessive_count,
    ),
    (
        meta!(ContextWhitespaceExcessiveCount, 25, "2024-02-11",
            "Excessive whitespace token count",
            " ( & ( a = b ) ( c = d ) ) "),
        rules::whitespace_excessive_count,
    ),
    (
        meta!(ContextLargeWhitespaceExcessiveCount, 50, "2024-02-11",
            "Multiple large whitespace runs",
            "(      a=b      )(      c=d      )"),
        rules::large_whitespace_excessive_count,
    ),
    (
        meta!(ContextWhitespaceUncommonNeighborExcessiveCount, 50, "2024-02-11",
            "Whitespace in uncommon positions",
            "( a = b )"),
        rules::whitespace_uncommon_neighbor_excessive_count,
    ),
];

static FILTER_RULES: &[(RuleMeta, FilterRuleFn)] = &[
    (
        meta!(ContextFilterExcessiveCount, 50, "2024-02-18",
            "Excessive filter count",
            "(|(a=1)(a=2)(a=3)...)"),
        rules::filter_excessive_count,
    ),
    (
        meta!(ContextLogicallyExcludedFilterExcessiveCount, 75, "2024-02-18",
            "Excessive logically excluded filters",
            "(&(!(a=1))(!(a=2))(!(a=3))(!(a=4))(!(a=5))(!(a=6))(b=1))"),
        rules::logically_excluded_filter_excessive_count,
    ),
    (
        meta!(ContextBooleanOperatorFilterScopeAnd, 50, "2024-02-18",
            "AND operator inside a filter body",
            "(&name=dbo)"),
        rules::boolean_operator_filter_scope_and,
    ),
    (
        meta!(ContextBooleanOperatorFilterScopeOr, 50, "2024-02-18",
            "OR operator inside a filter body",
            "(|name=dbo)"),
        rules::boolean_operator_filter_scope_or,
    ),
    (
        meta!(ContextBooleanOperatorFilterScopeNot, 50, "2024-02-18",
            "NOT operator inside a filter body",
            "(!name=dbo)"),
        rules::boolean_operator_filter_scope_not,
    ),
    (
        meta!(FilterBranchWithGappedBooleanOperator, 62, "2024-02-18",
            "Boolean operator separated from its filter by extra grouping",
            "(&((a=b)))"),
        rules::filter_branch_with_gapped_boolean_operator,
    ),
    (
        meta!(LogicallyIncludedFilterBranchNotAnd, 62, "2024-02-18",
            "NOT-AND chain resolving to an included filter",
            "(!(&(!(a=b))))"),
        rules::logically_included_filter_branch_not_and,
    ),
    (
        meta!(LogicallyExcludedFilterBranchNotOr, 62, "2024-02-18",
            "NOT-OR chain resolving to an excluded filter",
            "(!|(a=b))"),
        rules::logically_excluded_filter_branch_not_or,
    ),
    (
        meta!(UndefinedAttribute, 38, "2024-03-02",
            "Attribute not present in the schema",
            "(notAnAttribute=1)"),
        rules::undefined_attribute,
    ),
    (
        meta!(UndefinedAttributeInvalidSpecialChars, 75, "2024-03-02",
            "Undefined attribute containing invalid special characters",
            "(na#me=dbo)"),
        rules::undefined_attribute_invalid_special_chars,
    ),
    (
        meta!(UndefinedAttributeWithWildcard, 75, "2024-03-02",
            "Undefined attribute containing a wildcard",
            "(na*me=dbo)"),
        rules::undefined_attribute_with_wildcard,
    ),
    (
        meta!(DefinedAttributeWithOidSyntax, 25, "2024-03-02",
            "Defined attribute referenced by OID",
            "(1.2.840.113556.1.4.221=dbo)"),
        rules::defined_attribute_with_oid_syntax,
    ),
    (
        meta!(DefinedAttributeOidSyntaxWithPrefix, 50, "2024-03-02",
            "Attribute OID carrying the OID. prefix",
            "(OID.1.2.840.113556.1.4.221=dbo)"),
        rules::defined_attribute_oid_syntax_with_prefix,
    ),
    (
        meta!(DefinedAttributeOidSyntaxWithZeros, 75, "2024-03-02",
            "Attribute OID padded with leading zeros",
            "(1.2.840.0113556.1.4.221=dbo)"),
        rules::defined_attribute_oid_syntax_with_zeros,
    ),
    (
        meta!(DefinedAttributeWithScatteredCase, 25, "2024-03-02",
            "Defined attribute with scattered character casing",
            "(sAmAcCoUnTnAmE=dbo)"),
        rules::defined_attribute_with_scattered_case,
    ),
    (
        meta!(DefinedAttributeAnr, 50, "2024-03-02",
            "Ambiguous name resolution probe",
            "(anr=dbo)"),
        rules::defined_attribute_anr,
    ),
    (
        meta!(AttributeWithAdjacentWhitespace, 38, "2024-03-02",
            "Whitespace padding around the attribute",
            "( name =dbo)"),
        rules::attribute_with_adjacent_whitespace,
    ),
    (
        meta!(SensitiveAttributePresenceFilter, 100, "2024-03-02",
            "Presence probe of a credential-bearing attribute",
            "(ms-Mcs-AdmPwd=*)"),
        rules::sensitive_attribute_presence_filter,
    ),
    (
        meta!(UndefinedExtensibleMatchFilter, 75, "2024-03-09",
            "Extensible match rule not in the registry",
            "(a:1.2.3.4:=b)"),
        rules::undefined_extensible_match_filter,
    ),
    (
        meta!(DefinedExtensibleMatchFilterNameSyntax, 50, "2024-03-09",
            "Extensible match rule referenced by name",
            "(a:LDAP_MATCHING_RULE_BIT_AND:=1)"),
        rules::defined_extensible_match_filter_name_syntax,
    ),
    (
        meta!(DefinedExtensibleMatchFilterOidSyntaxWithZeros, 75, "2024-03-09",
            "Extensible match rule OID padded with leading zeros",
            "(a:1.2.840.113556.1.4.0803:=1)"),
        rules::defined_extensible_match_filter_oid_syntax_with_zeros,
    ),
    (
        meta!(ExtensibleMatchFilterInChain, 38, "2024-03-09",
            "Transitive in-chain matching rule",
            "(memberOf:1.2.840.113556.1.4.1941:=CN=Domain Admins,DC=x)"),
        rules::extensible_match_filter_in_chain,
    ),
    (
        meta!(ExtensibleMatchFilterDnWithData, 38, "2024-03-09",
            "DN-with-data matching rule",
            "(a:1.2.840.113556.1.4.2253:=b)"),
        rules::extensible_match_filter_dn_with_data,
    ),
    (
        meta!(BitwiseExtensibleMatchFilterForNonBitwiseAttribute, 62, "2024-03-09",
            "Bitwise matching rule on a non-bitwise attribute",
            "(name:1.2.840.113556.1.4.803:=1)"),
        rules::bitwise_extensible_match_filter_for_non_bitwise_attribute,
    ),
    (
        meta!(ExtensibleMatchFilterForUndefinedAttribute, 62, "2024-03-09",
            "Extensible match rule on an undefined attribute",
            "(notreal:1.2.840.113556.1.4.803:=1)"),
        rules::extensible_match_filter_for_undefined_attribute,
    ),
    (
        meta!(ComparisonOperatorRangeDefinedBitwiseAttribute, 62, "2024-03-16",
            "Range comparison against a bitwise attribute",
            "(sAMAccountType>=805306367)"),
        rules::comparison_operator_range_defined_bitwise_attribute,
    ),
    (
        meta!(ComparisonOperatorRangeDefinedByteArrayAttribute, 62, "2024-03-16",
            "Range comparison against a byte-array attribute",
            "(objectSid>=1)"),
        rules::comparison_operator_range_defined_byte_array_attribute,
    ),
    (
        meta!(ComparisonOperatorApproxMatch, 25, "2024-03-16",
            "Approximate match comparison",
            "(name~=dbo)"),
        rules::comparison_operator_approx_match,
    ),
    (
        meta!(FilterWithoutComparisonOperator, 62, "2024-03-16",
            "Filter body without a comparison operator",
            "(objectClass)"),
        rules::filter_without_comparison_operator,
    ),
    (
        meta!(FilterWithEmptyValue, 50, "2024-03-16",
            "Comparison against an empty value",
            "(name=)"),
        rules::filter_with_empty_value,
    ),
    (
        meta!(ValueWithHexEncodingForAlphanumericChars, 62, "2024-03-23",
            "Hex escapes hiding alphanumeric characters",
            "(name=kr\\62tgt)"),
        rules::value_with_hex_encoding_for_alphanumeric_chars,
    ),
    (
        meta!(ValueWithHexEncodingForSpecialChars, 38, "2024-03-23",
            "Hex escapes hiding special characters that need no escaping",
            "(name=a\\2db)"),
        rules::value_with_hex_encoding_for_special_chars,
    ),
    (
        meta!(ValueWithEscapedAlphanumericChars, 50, "2024-03-23",
            "Backslash escapes on alphanumeric characters",
            "(name=\\d\\b\\o)"),
        rules::value_with_escaped_alphanumeric_chars,
    ),
    (
        meta!(ValueWithExcessiveHexEncoding, 62, "2024-03-23",
            "Value dominated by hex escapes",
            "(name=\\64\\62\\6f\\64\\62\\6f\\64\\62\\6f)"),
        rules::value_with_excessive_hex_encoding,
    ),
    (
        meta!(ValueWithNonPrintableChars, 75, "2024-03-23",
            "Hex escapes decoding to non-printable bytes",
            "(name=\\01dbo)"),
        rules::value_with_non_printable_chars,
    ),
    (
        meta!(ValueWithTrailingEscape, 50, "2024-03-23",
            "Dangling backslash at end of value",
            "(name=dbo\\)"),
        rules::value_with_trailing_escape,
    ),
    (
        meta!(ValueWithExcessiveWildcards, 50, "2024-03-23",
            "Excessive wildcards in one value",
            "(name=*d*b*o*)"),
        rules::value_with_excessive_wildcards,
    ),
    (
        meta!(ValueWithAdjacentWildcards, 50, "2024-03-23",
            "Adjacent wildcards in a value",
            "(name=db**o)"),
        rules::value_with_adjacent_wildcards,
    ),
    (
        meta!(ValueWithHexEncodedWildcard, 38, "2024-03-23",
            "Hex-encoded literal asterisk",
            "(name=dbo\\2a)"),
        rules::value_with_hex_encoded_wildcard,
    ),
    (
        meta!(DatetimeValueWithObfuscatedMilliseconds, 50, "2024-04-06",
            "Generalized-time value with non-zero fractional seconds",
            "(whenCreated>=20230101000000.123Z)"),
        rules::datetime_value_with_obfuscated_milliseconds,
    ),
    (
        meta!(DatetimeValueNonstandardFormat, 38, "2024-04-06",
            "Generalized-time value off the standard format",
            "(whenCreated>=2023-01-01)"),
        rules::datetime_value_nonstandard_format,
    ),
    (
        meta!(IntValueWithPrependedZeroes, 50, "2024-04-06",
            "Integer value padded with leading zeros",
            "(primaryGroupID=0000513)"),
        rules::int_value_with_prepended_zeroes,
    ),
    (
        meta!(IntValueNonNumeric, 38, "2024-04-06",
            "Non-numeric value for an integer attribute",
            "(primaryGroupID=abc)"),
        rules::int_value_non_numeric,
    ),
    (
        meta!(IntValueExceedingSignedIntRange, 62, "2024-04-06",
            "Integer written as its unsigned two's-complement alias",
            "(userAccountControl=4294967295)"),
        rules::int_value_exceeding_signed_int_range,
    ),
    (
        meta!(BooleanValueNonstandard, 38, "2024-04-06",
            "Boolean attribute compared to a non-TRUE/FALSE value",
            "(isDeleted=yes)"),
        rules::boolean_value_nonstandard,
    ),
    (
        meta!(DnValueWithWildcard, 62, "2024-04-06",
            "Wildcard in a DN-valued attribute",
            "(distinguishedName=CN=*,DC=x)"),
        rules::dn_value_with_wildcard,
    ),
    (
        meta!(DnValueInvalidRdnStructure, 50, "2024-04-06",
            "DN-valued attribute with a non-DN value",
            "(distinguishedName=dbo)"),
        rules::dn_value_invalid_rdn_structure,
    ),
    (
        meta!(BitwiseValueNonNumeric, 50, "2024-04-06",
            "Non-numeric value for a bitwise attribute",
            "(userAccountControl=abc)"),
        rules::bitwise_value_non_numeric,
    ),
    (
        meta!(SpecificBitwiseAddendForDefinedAttributeUserAccountControl, 75, "2024-04-13",
            "Suspicious userAccountControl bit probe",
            "(userAccountControl:1.2.840.113556.1.4.804:=65929)"),
        rules::specific_bitwise_addend_user_account_control,
    ),
    (
        meta!(SpecificBitwiseAddendForDefinedAttributeGroupType, 62, "2024-04-13",
            "Suspicious groupType bit probe",
            "(groupType:1.2.840.113556.1.4.803:=2147483648)"),
        rules::specific_bitwise_addend_group_type,
    ),
    (
        meta!(SpecificBitwiseAddendForDefinedAttributeSamAccountType, 62, "2024-04-13",
            "Bitwise probing of the sAMAccountType enumeration",
            "(sAMAccountType:1.2.840.113556.1.4.804:=805306370)"),
        rules::specific_bitwise_addend_sam_account_type,
    ),
    (
        meta!(SensitiveValueWithoutObfuscation, 75, "2024-04-20",
            "Sensitive object referenced in the clear",
            "(name=krbtgt)"),
        rules::sensitive_value_without_obfuscation,
    ),
    (
        meta!(SensitiveValueWithHexEncoding, 100, "2024-04-20",
            "Sensitive object hidden behind hex escapes",
            "(name=kr\\62tgt)"),
        rules::sensitive_value_with_hex_encoding,
    ),
    (
        meta!(SensitiveValueWithEscapeObfuscation, 100, "2024-04-20",
            "Sensitive object hidden behind literal escapes",
            "(name=\\kr\\btgt)"),
        rules::sensitive_value_with_escape_obfuscation,
    ),
    (
        meta!(SensitiveValueMatchedWithWildcard, 88, "2024-04-20",
            "Sensitive object matched through wildcards",
            "(name=krb*)"),
        rules::sensitive_value_matched_with_wildcard,
    ),
    (
        meta!(UndefinedFilterLiteral, 62, "2024-04-20",
            "Literal UNDEFINED filter body",
            "(UNDEFINED)"),
        rules::undefined_filter_literal,
    ),
    (
        meta!(RdnAttributeWithHexEncoding, 62, "2024-04-27",
            "Hex escapes inside an RDN attribute",
            "(distinguishedName=C\\4e=dbo,DC=x)"),
        rules::rdn_attribute_with_hex_encoding,
    ),
    (
        meta!(RdnValueEncapsulatedWithDoubleQuotes, 50, "2024-04-27",
            "RDN value wrapped in double quotes",
            "(distinguishedName=CN=\"dbo\",DC=x)"),
        rules::rdn_value_encapsulated_with_double_quotes,
    ),
    (
        meta!(RdnComparisonOperatorWithHexEncoding, 75, "2024-04-27",
            "Hex-encoded = inside a DN",
            "(distinguishedName=CN\\3Ddbo,DC=x)"),
        rules::rdn_comparison_operator_with_hex_encoding,
    ),
    (
        meta!(RdnCommaDelimiterWithHexEncoding, 75, "2024-04-27",
            "Hex-encoded comma inside a DN",
            "(distinguishedName=CN=dbo\\2CDC=x)"),
        rules::rdn_comma_delimiter_with_hex_encoding,
    ),
    (
        meta!(RdnValueWithHexEncoding, 62, "2024-04-27",
            "Hex escapes inside an RDN value",
            "(distinguishedName=CN=d\\62o,DC=x)"),
        rules::rdn_value_with_hex_encoding,
    ),
    (
        meta!(RdnWithExcessiveWhitespace, 50, "2024-04-27",
            "Whitespace padding inside a DN",
            "(distinguishedName=CN  =  dbo , DC = x)"),
        rules::rdn_with_excessive_whitespace,
    ),
];

static BRANCH_RULES: &[(RuleMeta, BranchRuleFn)] = &[
    (
        meta!(ContextSearchFilterExcessiveLength, 50, "2024-05-04",
            "Search filter of excessive length",
            "(|(a=1)(a=2)...2048 bytes...)"),
        rules::search_filter_excessive_length,
    ),
    (
        meta!(ContextFilterExcessiveMaxDepth, 62, "2024-05-04",
            "Excessive parenthesis nesting depth",
            "(&(&(&(&(&(&(&(&(...))))))))"),
        rules::filter_excessive_max_depth,
    ),
    (
        meta!(ContextFilterBooleanOperatorExcessiveMaxCount, 75, "2024-05-04",
            "Operator chain beyond the server's per-filter budget",
            "(&(&(&(&(&(a=*))))))"),
        rules::filter_boolean_operator_excessive_max_count,
    ),
    (
        meta!(ContextBooleanOperatorAdjacentRepeatingFilterListAndCount, 62, "2024-05-11",
            "Redundant adjacent AND operators",
            "(&(&(a=b)))"),
        rules::adjacent_repeating_filter_list_and,
    ),
    (
        meta!(ContextBooleanOperatorAdjacentRepeatingFilterListOrCount, 62, "2024-05-11",
            "Redundant adjacent OR operators",
            "(|(|(a=b)))"),
        rules::adjacent_repeating_filter_list_or,
    ),
    (
        meta!(ContextBooleanOperatorAdjacentRepeatingFilterListNotCount, 75, "2024-05-11",
            "Stacked NOT operators",
            "(!!(a=b))"),
        rules::adjacent_repeating_filter_list_not,
    ),
    (
        meta!(LogicallyExcludedFilterListBranchNotAnd, 75, "2024-05-11",
            "Filter list excluded through NOT-AND",
            "(!(&(a=b)(c=d)))"),
        rules::logically_excluded_filter_list_branch_not_and,
    ),
    (
        meta!(LogicallyExcludedFilterListBranchNotOr, 75, "2024-05-11",
            "Filter list excluded through NOT-OR",
            "(!(|(a=b)(c=d)))"),
        rules::logically_excluded_filter_list_branch_not_or,
    ),
    (
        meta!(ContextBooleanOperatorAndModifyingSingleFilter, 38, "2024-05-11",
            "AND wrapped around a single filter",
            "(&(a=b))"),
        rules::boolean_operator_and_modifying_single_filter,
    ),
    (
        meta!(ContextBooleanOperatorOrModifyingSingleFilter, 38, "2024-05-11",
            "OR wrapped around a single filter",
            "(|(a=b))"),
        rules::boolean_operator_or_modifying_single_filter,
    ),
];

/// The detection engine, parameterized by thresholds.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    thresholds: RuleThresholds,
}

impl Detector {
    pub fn new() -> Self {
        Detector::default()
    }

    pub fn with_thresholds(thresholds: RuleThresholds) -> Self {
        Detector { thresholds }
    }

    /// Runs the catalog (or the `ids` subset) over a search filter.
    pub fn find_evil(&self, filter: &str, ids: Option<&[DetectionId]>) -> Vec<Detection> {
        if filter.is_empty() {
            return Vec::new();
        }
        let selected = |id: DetectionId| ids.map(|ids| ids.contains(&id)).unwrap_or(true);

        let enriched = to_token_enriched(tokenize(filter));
        let filters = to_filter_only(enriched.clone());
        let branch = to_branch(to_filter(enriched.clone()));

        let mut detections = Vec::new();
        for (meta, eval) in TOKEN_RULES {
            if selected(meta.id) {
                for hit in eval(&enriched, &self.thresholds) {
                    detections.push(attach(meta, DetectionType::Token, hit));
                }
            }
        }
        for (meta, eval) in FILTER_RULES {
            if selected(meta.id) {
                for hit in eval(&filters, &self.thresholds) {
                    detections.push(attach(meta, DetectionType::Filter, hit));
                }
            }
        }
        if let Ok(root) = &branch {
            for (meta, eval) in BRANCH_RULES {
                if selected(meta.id) {
                    for hit in eval(root, &self.thresholds) {
                        detections.push(attach(meta, DetectionType::Branch, hit));
                    }
                }
            }
        }
        detections
    }
}

fn attach(meta: &RuleMeta, detection_type: DetectionType, hit: RuleHit) -> Detection {
    Detection {
        detection_type,
        author: AUTHOR,
        date: meta.date,
        id: meta.id,
        name: meta.name,
        example: meta.example,
        score: meta.score,
        depth: hit.depth,
        start: hit.start,
        content: hit.content,
        content_decoded: hit.content_decoded,
    }
}

/// Runs the full catalog with default thresholds.
pub fn find_evil(filter: &str, ids: Option<&[DetectionId]>) -> Vec<Detection> {
    tracing::debug!(filter_len = filter.len(), "running detection catalog");
    Detector::new().find_evil(filter, ids)
}

/// Aggregates a detection run.
pub fn summarize(detections: &[Detection], source: &str) -> DetectionSummary {
    let mut distinct_ids = Vec::new();
    let mut distinct_names = Vec::new();
    for detection in detections {
        if !distinct_ids.contains(&detection.id) {
            distinct_ids.push(detection.id);
        }
        if !distinct_names.contains(&detection.name) {
            distinct_names.push(detection.name);
        }
    }
    DetectionSummary {
        search_filter: source.to_string(),
        total_score: detections.iter().map(|d| d.score).sum(),
        detection_count: detections.len(),
        distinct_ids,
        distinct_names,
    }
}
