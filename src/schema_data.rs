//! Static schema tables
//!
//! The attribute registry ships the well-known Active Directory schema
//! subset: every attribute the detection rules, the bitwise logic, or the
//! tests reference, plus the common user/computer/group/schema attributes an
//! analyst encounters in real search filters. Per-syntax display metadata is
//! factored into [`SYNTAXES`], keyed by the `attributeSyntax` OID, the same
//! derivation the directory schema itself uses.

use crate::schema::LdapAttributeValueFormat;

/// One attribute of the directory schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRow {
    pub name: &'static str,
    pub oid: &'static str,
    /// Key into [`SYNTAXES`] (`attributeSyntax` OID).
    pub syntax: &'static str,
    pub format: LdapAttributeValueFormat,
}

/// Display/storage metadata shared by every attribute of a syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxRow {
    pub syntax_id: &'static str,
    pub ads_type: &'static str,
    pub sds_type: &'static str,
    pub mapi_type: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One extensible match rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmrRow {
    pub oid: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub static EMR_RULES: &[EmrRow] = &[
    EmrRow {
        oid: "1.2.840.113556.1.4.803",
        name: "LDAP_MATCHING_RULE_BIT_AND",
        description: "Matches when all bits of the assertion value are set in the attribute value",
    },
    EmrRow {
        oid: "1.2.840.113556.1.4.804",
        name: "LDAP_MATCHING_RULE_BIT_OR",
        description: "Matches when any bit of the assertion value is set in the attribute value",
    },
    EmrRow {
        oid: "1.2.840.113556.1.4.1941",
        name: "LDAP_MATCHING_RULE_IN_CHAIN",
        description: "Matches across the transitive closure of a linked DN-valued attribute",
    },
    EmrRow {
        oid: "1.2.840.113556.1.4.2253",
        name: "LDAP_MATCHING_RULE_DN_WITH_DATA",
        description: "Matches DN-with-binary / DN-with-string values on their DN component",
    },
];

pub static SYNTAXES: &[SyntaxRow] = &[
    SyntaxRow { syntax_id: "2.5.5.1",  ads_type: "ADSTYPE_DN_STRING",              sds_type: "Object(DS-DN)",          mapi_type: "PT_OBJECT",  title: "Distinguished Name",   description: "The fully qualified name of an object in the directory" },
    SyntaxRow { syntax_id: "2.5.5.2",  ads_type: "ADSTYPE_CASE_IGNORE_STRING",     sds_type: "String(Object-Identifier)", mapi_type: "Undefined", title: "Object Identifier",   description: "A dotted-decimal OBJECT IDENTIFIER string" },
    SyntaxRow { syntax_id: "2.5.5.3",  ads_type: "ADSTYPE_CASE_EXACT_STRING",      sds_type: "String(Case Sensitive)", mapi_type: "PT_STRING8", title: "Case Sensitive String", description: "A general string compared byte-for-byte" },
    SyntaxRow { syntax_id: "2.5.5.4",  ads_type: "ADSTYPE_CASE_IGNORE_STRING",     sds_type: "String(Teletex)",        mapi_type: "PT_STRING8", title: "Case Insensitive String", description: "A teletex string ignoring case on comparison" },
    SyntaxRow { syntax_id: "2.5.5.5",  ads_type: "ADSTYPE_PRINTABLE_STRING",       sds_type: "String(IA5)",            mapi_type: "PT_STRING8", title: "Printable/IA5 String", description: "An IA5 or printable string, case sensitive" },
    SyntaxRow { syntax_id: "2.5.5.6",  ads_type: "ADSTYPE_NUMERIC_STRING",         sds_type: "String(Numeric)",        mapi_type: "PT_STRING8", title: "Numeric String",       description: "A string of digits" },
    SyntaxRow { syntax_id: "2.5.5.7",  ads_type: "ADSTYPE_DN_WITH_BINARY",         sds_type: "Object(DN-Binary)",      mapi_type: "PT_BINARY",  title: "DN With Binary",       description: "A distinguished name paired with a binary blob" },
    SyntaxRow { syntax_id: "2.5.5.8",  ads_type: "ADSTYPE_BOOLEAN",                sds_type: "Boolean",                mapi_type: "PT_BOOLEAN", title: "Boolean",              description: "TRUE or FALSE" },
    SyntaxRow { syntax_id: "2.5.5.9",  ads_type: "ADSTYPE_INTEGER",                sds_type: "Integer",                mapi_type: "PT_LONG",    title: "Integer",              description: "A 32-bit signed integer or enumeration" },
    SyntaxRow { syntax_id: "2.5.5.10", ads_type: "ADSTYPE_OCTET_STRING",           sds_type: "String(Octet)",          mapi_type: "PT_BINARY",  title: "Octet String",         description: "An opaque byte array" },
    SyntaxRow { syntax_id: "2.5.5.11", ads_type: "ADSTYPE_UTC_TIME",               sds_type: "String(Generalized-Time)", mapi_type: "PT_SYSTIME", title: "Generalized Time",   description: "A time value in generalized-time or UTC-time form" },
    SyntaxRow { syntax_id: "2.5.5.12", ads_type: "ADSTYPE_CASE_IGNORE_STRING",     sds_type: "String(Unicode)",        mapi_type: "PT_UNICODE", title: "Unicode String",       description: "A case-insensitive Unicode string" },
    SyntaxRow { syntax_id: "2.5.5.13", ads_type: "ADSTYPE_OCTET_STRING",           sds_type: "Object(Presentation-Address)", mapi_type: "PT_OBJECT", title: "Presentation Address", description: "An OSI presentation address" },
    SyntaxRow { syntax_id: "2.5.5.14", ads_type: "ADSTYPE_DN_WITH_STRING",         sds_type: "Object(DN-String)",      mapi_type: "PT_OBJECT",  title: "DN With String",       description: "A distinguished name paired with a string" },
    SyntaxRow { syntax_id: "2.5.5.15", ads_type: "ADSTYPE_NT_SECURITY_DESCRIPTOR", sds_type: "String(NT-Sec-Desc)",    mapi_type: "PT_BINARY",  title: "NT Security Descriptor", description: "A Windows security descriptor in binary form" },
    SyntaxRow { syntax_id: "2.5.5.16", ads_type: "ADSTYPE_LARGE_INTEGER",          sds_type: "LargeInteger",           mapi_type: "PT_I8",      title: "Large Integer",        description: "A 64-bit signed integer, often a FILETIME interval" },
    SyntaxRow { syntax_id: "2.5.5.17", ads_type: "ADSTYPE_OCTET_STRING",           sds_type: "String(Sid)",            mapi_type: "PT_BINARY",  title: "SID",                  description: "A Windows security identifier in binary form" },
];

macro_rules! attr {
    ($name:literal, $oid:literal, $syntax:literal, $fmt:ident) => {
        AttributeRow {
            name: $name,
            oid: $oid,
            syntax: $syntax,
            format: LdapAttributeValueFormat::$fmt,
        }
    };
}

pub static ATTRIBUTES: &[AttributeRow] = &[
    // X.500 base attributes (2.5.4.*)
    attr!("objectClass", "2.5.4.0", "2.5.5.2", String),
    attr!("aliasedObjectName", "2.5.4.1", "2.5.5.1", DnString),
    attr!("knowledgeInformation", "2.5.4.2", "2.5.5.4", String),
    attr!("cn", "2.5.4.3", "2.5.5.12", String),
    attr!("sn", "2.5.4.4", "2.5.5.12", String),
    attr!("serialNumber", "2.5.4.5", "2.5.5.5", String),
    attr!("c", "2.5.4.6", "2.5.5.12", String),
    attr!("l", "2.5.4.7", "2.5.5.12", String),
    attr!("st", "2.5.4.8", "2.5.5.12", String),
    attr!("street", "2.5.4.9", "2.5.5.12", String),
    attr!("o", "2.5.4.10", "2.5.5.12", String),
    attr!("ou", "2.5.4.11", "2.5.5.12", String),
    attr!("title", "2.5.4.12", "2.5.5.12", String),
    attr!("description", "2.5.4.13", "2.5.5.12", String),
    attr!("searchGuide", "2.5.4.14", "2.5.5.10", ByteArray),
    attr!("businessCategory", "2.5.4.15", "2.5.5.12", String),
    attr!("postalAddress", "2.5.4.16", "2.5.5.12", String),
    attr!("postalCode", "2.5.4.17", "2.5.5.12", String),
    attr!("postOfficeBox", "2.5.4.18", "2.5.5.12", String),
    attr!("physicalDeliveryOfficeName", "2.5.4.19", "2.5.5.12", String),
    attr!("telephoneNumber", "2.5.4.20", "2.5.5.12", String),
    attr!("telexNumber", "2.5.4.21", "2.5.5.10", ByteArray),
    attr!("teletexTerminalIdentifier", "2.5.4.22", "2.5.5.10", ByteArray),
    attr!("facsimileTelephoneNumber", "2.5.4.23", "2.5.5.12", String),
    attr!("x121Address", "2.5.4.24", "2.5.5.6", String),
    attr!("internationalISDNNumber", "2.5.4.25", "2.5.5.6", String),
    attr!("registeredAddress", "2.5.4.26", "2.5.5.10", ByteArray),
    attr!("destinationIndicator", "2.5.4.27", "2.5.5.5", String),
    attr!("preferredDeliveryMethod", "2.5.4.28", "2.5.5.9", Int),
    attr!("presentationAddress", "2.5.4.29", "2.5.5.13", String),
    attr!("supportedApplicationContext", "2.5.4.30", "2.5.5.2", String),
    attr!("member", "2.5.4.31", "2.5.5.1", DnString),
    attr!("owner", "2.5.4.32", "2.5.5.1", DnString),
    attr!("roleOccupant", "2.5.4.33", "2.5.5.1", DnString),
    attr!("seeAlso", "2.5.4.34", "2.5.5.1", DnString),
    attr!("userPassword", "2.5.4.35", "2.5.5.10", ByteArray),
    attr!("userCertificate", "2.5.4.36", "2.5.5.10", ByteArray),
    attr!("cACertificate", "2.5.4.37", "2.5.5.10", ByteArray),
    attr!("authorityRevocationList", "2.5.4.38", "2.5.5.10", ByteArray),
    attr!("certificateRevocationList", "2.5.4.39", "2.5.5.10", ByteArray),
    attr!("crossCertificatePair", "2.5.4.40", "2.5.5.10", ByteArray),
    attr!("name", "1.2.840.113556.1.4.1", "2.5.5.12", String),
    attr!("givenName", "2.5.4.42", "2.5.5.12", String),
    attr!("initials", "2.5.4.43", "2.5.5.12", String),
    attr!("generationQualifier", "2.5.4.44", "2.5.5.12", String),
    attr!("x500uniqueIdentifier", "2.5.4.45", "2.5.5.10", ByteArray),
    attr!("dnQualifier", "2.5.4.46", "2.5.5.5", String),
    attr!("enhancedSearchGuide", "2.5.4.47", "2.5.5.10", ByteArray),
    attr!("protocolInformation", "2.5.4.48", "2.5.5.10", ByteArray),
    attr!("distinguishedName", "2.5.4.49", "2.5.5.1", DnString),
    attr!("uniqueMember", "2.5.4.50", "2.5.5.7", ByteArray),
    attr!("houseIdentifier", "2.5.4.51", "2.5.5.12", String),
    attr!("deltaRevocationList", "2.5.4.53", "2.5.5.10", ByteArray),
    attr!("attributeCertificateAttribute", "2.5.4.58", "2.5.5.10", ByteArray),

    // X.500 operational (2.5.18.*, 2.5.21.*)
    attr!("createTimeStamp", "2.5.18.1", "2.5.5.11", DateTime),
    attr!("modifyTimeStamp", "2.5.18.2", "2.5.5.11", DateTime),
    attr!("subSchemaSubEntry", "2.5.18.10", "2.5.5.1", DnString),
    attr!("administrativeRole", "2.5.18.5", "2.5.5.2", String),
    attr!("attributeTypes", "2.5.21.5", "2.5.5.12", String),
    attr!("objectClasses", "2.5.21.6", "2.5.5.12", String),
    attr!("matchingRules", "2.5.21.4", "2.5.5.12", String),
    attr!("matchingRuleUse", "2.5.21.8", "2.5.5.12", String),
    attr!("structuralObjectClass", "2.5.21.9", "2.5.5.2", String),
    attr!("governingStructureRule", "2.5.21.10", "2.5.5.9", Int),

    // COSINE / internet attributes (0.9.2342.19200300.100.1.*, 1.3.6.1.*)
    attr!("uid", "0.9.2342.19200300.100.1.1", "2.5.5.12", String),
    attr!("textEncodedORAddress", "0.9.2342.19200300.100.1.2", "2.5.5.12", String),
    attr!("mail", "0.9.2342.19200300.100.1.3", "2.5.5.12", String),
    attr!("info", "0.9.2342.19200300.100.1.4", "2.5.5.12", String),
    attr!("drink", "0.9.2342.19200300.100.1.5", "2.5.5.12", String),
    attr!("roomNumber", "0.9.2342.19200300.100.1.6", "2.5.5.12", String),
    attr!("photo", "0.9.2342.19200300.100.1.7", "2.5.5.10", ByteArray),
    attr!("userClass", "0.9.2342.19200300.100.1.8", "2.5.5.12", String),
    attr!("host", "0.9.2342.19200300.100.1.9", "2.5.5.12", String),
    attr!("manager", "0.9.2342.19200300.100.1.10", "2.5.5.1", DnString),
    attr!("documentIdentifier", "0.9.2342.19200300.100.1.11", "2.5.5.12", String),
    attr!("documentTitle", "0.9.2342.19200300.100.1.12", "2.5.5.12", String),
    attr!("documentVersion", "0.9.2342.19200300.100.1.13", "2.5.5.12", String),
    attr!("documentAuthor", "0.9.2342.19200300.100.1.14", "2.5.5.1", DnString),
    attr!("documentLocation", "0.9.2342.19200300.100.1.15", "2.5.5.12", String),
    attr!("homePhone", "0.9.2342.19200300.100.1.20", "2.5.5.12", String),
    attr!("secretary", "0.9.2342.19200300.100.1.21", "2.5.5.1", DnString),
    attr!("dc", "0.9.2342.19200300.100.1.25", "2.5.5.5", String),
    attr!("associatedDomain", "0.9.2342.19200300.100.1.37", "2.5.5.5", String),
    attr!("associatedName", "0.9.2342.19200300.100.1.38", "2.5.5.1", DnString),
    attr!("homePostalAddress", "0.9.2342.19200300.100.1.39", "2.5.5.12", String),
    attr!("personalTitle", "0.9.2342.19200300.100.1.40", "2.5.5.12", String),
    attr!("mobile", "0.9.2342.19200300.100.1.41", "2.5.5.12", String),
    attr!("pager", "0.9.2342.19200300.100.1.42", "2.5.5.12", String),
    attr!("co", "0.9.2342.19200300.100.1.43", "2.5.5.12", String),
    attr!("uniqueIdentifier", "0.9.2342.19200300.100.1.44", "2.5.5.12", String),
    attr!("organizationalStatus", "0.9.2342.19200300.100.1.45", "2.5.5.12", String),
    attr!("buildingName", "0.9.2342.19200300.100.1.48", "2.5.5.12", String),
    attr!("audio", "0.9.2342.19200300.100.1.55", "2.5.5.10", ByteArray),
    attr!("documentPublisher", "0.9.2342.19200300.100.1.56", "2.5.5.12", String),
    attr!("jpegPhoto", "0.9.2342.19200300.100.1.60", "2.5.5.10", ByteArray),
    attr!("uidNumber", "1.3.6.1.1.1.1.0", "2.5.5.9", Int),
    attr!("gidNumber", "1.3.6.1.1.1.1.1", "2.5.5.9", Int),
    attr!("gecos", "1.3.6.1.1.1.1.2", "2.5.5.12", String),
    attr!("unixHomeDirectory", "1.3.6.1.1.1.1.3", "2.5.5.12", String),
    attr!("loginShell", "1.3.6.1.1.1.1.4", "2.5.5.12", String),
    attr!("shadowLastChange", "1.3.6.1.1.1.1.5", "2.5.5.9", Int),
    attr!("shadowMin", "1.3.6.1.1.1.1.6", "2.5.5.9", Int),
    attr!("shadowMax", "1.3.6.1.1.1.1.7", "2.5.5.9", Int),
    attr!("shadowWarning", "1.3.6.1.1.1.1.8", "2.5.5.9", Int),
    attr!("shadowInactive", "1.3.6.1.1.1.1.9", "2.5.5.9", Int),
    attr!("shadowExpire", "1.3.6.1.1.1.1.10", "2.5.5.9", Int),
    attr!("shadowFlag", "1.3.6.1.1.1.1.11", "2.5.5.9", Int),
    attr!("memberUid", "1.3.6.1.1.1.1.12", "2.5.5.12", String),
    attr!("memberNisNetgroup", "1.3.6.1.1.1.1.13", "2.5.5.12", String),
    attr!("nisNetgroupTriple", "1.3.6.1.1.1.1.14", "2.5.5.12", String),
    attr!("ipServicePort", "1.3.6.1.1.1.1.15", "2.5.5.9", Int),
    attr!("ipServiceProtocol", "1.3.6.1.1.1.1.16", "2.5.5.12", String),
    attr!("ipProtocolNumber", "1.3.6.1.1.1.1.17", "2.5.5.9", Int),
    attr!("ipHostNumber", "1.3.6.1.1.1.1.19", "2.5.5.12", String),
    attr!("ipNetworkNumber", "1.3.6.1.1.1.1.20", "2.5.5.12", String),
    attr!("nisMapName", "1.3.6.1.1.1.1.26", "2.5.5.12", String),
    attr!("nisMapEntry", "1.3.6.1.1.1.1.27", "2.5.5.12", String),
    attr!("labeledURI", "1.3.6.1.4.1.250.1.57", "2.5.5.12", String),
    attr!("carLicense", "2.16.840.1.113730.3.1.1", "2.5.5.12", String),
    attr!("departmentNumber", "2.16.840.1.113730.3.1.2", "2.5.5.12", String),
    attr!("employeeNumber", "2.16.840.1.113730.3.1.3", "2.5.5.12", String),
    attr!("employeeType", "2.16.840.1.113730.3.1.4", "2.5.5.12", String),
    attr!("displayNamePrintable", "1.2.840.113556.1.2.353", "2.5.5.5", String),
    attr!("preferredLanguage", "2.16.840.1.113730.3.1.39", "2.5.5.12", String),
    attr!("userSMIMECertificate", "2.16.840.1.113730.3.1.40", "2.5.5.10", ByteArray),
    attr!("userPKCS12", "2.16.840.1.113730.3.1.216", "2.5.5.10", ByteArray),

    // AD core metadata (1.2.840.113556.1.2.*)
    attr!("instanceType", "1.2.840.113556.1.2.1", "2.5.5.9", Bitwise),
    attr!("whenChanged", "1.2.840.113556.1.2.3", "2.5.5.11", DateTime),
    attr!("displayName", "1.2.840.113556.1.2.13", "2.5.5.12", String),
    attr!("hasMasterNCs", "1.2.840.113556.1.2.14", "2.5.5.1", DnString),
    attr!("whenCreated", "1.2.840.113556.1.2.16", "2.5.5.11", DateTime),
    attr!("uSNCreated", "1.2.840.113556.1.2.19", "2.5.5.16", Int),
    attr!("attributeID", "1.2.840.113556.1.2.30", "2.5.5.2", String),
    attr!("attributeSyntax", "1.2.840.113556.1.2.32", "2.5.5.2", String),
    attr!("isSingleValued", "1.2.840.113556.1.2.33", "2.5.5.8", Boolean),
    attr!("rangeLower", "1.2.840.113556.1.2.34", "2.5.5.9", Int),
    attr!("rangeUpper", "1.2.840.113556.1.2.35", "2.5.5.9", Int),
    attr!("dMDLocation", "1.2.840.113556.1.2.36", "2.5.5.1", DnString),
    attr!("isDeleted", "1.2.840.113556.1.2.48", "2.5.5.8", Boolean),
    attr!("mAPIID", "1.2.840.113556.1.2.49", "2.5.5.9", Int),
    attr!("linkID", "1.2.840.113556.1.2.50", "2.5.5.9", Int),
    attr!("uSNChanged", "1.2.840.113556.1.2.120", "2.5.5.16", Int),
    attr!("uSNLastObjRem", "1.2.840.113556.1.2.121", "2.5.5.16", Int),
    attr!("objectVersion", "1.2.840.113556.1.2.76", "2.5.5.9", Int),
    attr!("adminDisplayName", "1.2.840.113556.1.2.194", "2.5.5.12", String),
    attr!("adminDescription", "1.2.840.113556.1.2.226", "2.5.5.12", String),
    attr!("oMSyntax", "1.2.840.113556.1.2.231", "2.5.5.9", Int),
    attr!("oMObjectClass", "1.2.840.113556.1.2.218", "2.5.5.10", ByteArray),
    attr!("lDAPDisplayName", "1.2.840.113556.1.2.460", "2.5.5.12", String),
    attr!("homeMTA", "1.2.840.113556.1.2.617", "2.5.5.1", DnString),
    attr!("proxyAddresses", "1.2.840.113556.1.2.210", "2.5.5.12", String),
    attr!("legacyExchangeDN", "1.2.840.113556.1.2.612", "2.5.5.12", String),
    attr!("textEncodedORAddressEx", "1.2.840.113556.1.2.611", "2.5.5.12", String),
    attr!("extensionName", "1.2.840.113556.1.2.227", "2.5.5.12", String),
    attr!("schemaVersion", "1.2.840.113556.1.2.471", "2.5.5.9", Int),

    // AD core object attributes (1.2.840.113556.1.4.*)
    attr!("objectGUID", "1.2.840.113556.1.4.2", "2.5.5.10", ByteArray),
    attr!("replPropertyMetaData", "1.2.840.113556.1.4.3", "2.5.5.10", ByteArray),
    attr!("dSASignature", "1.2.840.113556.1.4.5", "2.5.5.10", ByteArray),
    attr!("userAccountControl", "1.2.840.113556.1.4.8", "2.5.5.9", Bitwise),
    attr!("badPwdCount", "1.2.840.113556.1.4.12", "2.5.5.9", Int),
    attr!("codePage", "1.2.840.113556.1.4.13", "2.5.5.9", Int),
    attr!("cOMClassID", "1.2.840.113556.1.4.19", "2.5.5.12", String),
    attr!("cOMProgID", "1.2.840.113556.1.4.20", "2.5.5.12", String),
    attr!("countryCode", "1.2.840.113556.1.4.25", "2.5.5.9", Int),
    attr!("creationTime", "1.2.840.113556.1.4.26", "2.5.5.16", Int),
    attr!("currentValue", "1.2.840.113556.1.4.27", "2.5.5.10", ByteArray),
    attr!("homeDirectory", "1.2.840.113556.1.4.44", "2.5.5.12", String),
    attr!("homeDrive", "1.2.840.113556.1.4.45", "2.5.5.12", String),
    attr!("badPasswordTime", "1.2.840.113556.1.4.49", "2.5.5.16", Int),
    attr!("lastLogoff", "1.2.840.113556.1.4.51", "2.5.5.16", Int),
    attr!("lastLogon", "1.2.840.113556.1.4.52", "2.5.5.16", Int),
    attr!("dBCSPwd", "1.2.840.113556.1.4.55", "2.5.5.10", ByteArray),
    attr!("localeID", "1.2.840.113556.1.4.58", "2.5.5.9", Int),
    attr!("lockoutDuration", "1.2.840.113556.1.4.60", "2.5.5.16", Int),
    attr!("lockOutObservationWindow", "1.2.840.113556.1.4.61", "2.5.5.16", Int),
    attr!("scriptPath", "1.2.840.113556.1.4.62", "2.5.5.12", String),
    attr!("logonHours", "1.2.840.113556.1.4.64", "2.5.5.10", ByteArray),
    attr!("logonWorkstation", "1.2.840.113556.1.4.65", "2.5.5.10", ByteArray),
    attr!("lSACreationTime", "1.2.840.113556.1.4.66", "2.5.5.16", Int),
    attr!("lSAModifiedCount", "1.2.840.113556.1.4.67", "2.5.5.16", Int),
    attr!("machineRole", "1.2.840.113556.1.4.71", "2.5.5.9", Int),
    attr!("lockoutThreshold", "1.2.840.113556.1.4.73", "2.5.5.9", Int),
    attr!("maxPwdAge", "1.2.840.113556.1.4.74", "2.5.5.16", Int),
    attr!("maxRenewAge", "1.2.840.113556.1.4.75", "2.5.5.16", Int),
    attr!("maxStorage", "1.2.840.113556.1.4.76", "2.5.5.16", Int),
    attr!("maxTicketAge", "1.2.840.113556.1.4.77", "2.5.5.16", Int),
    attr!("minPwdAge", "1.2.840.113556.1.4.78", "2.5.5.16", Int),
    attr!("minPwdLength", "1.2.840.113556.1.4.79", "2.5.5.9", Int),
    attr!("minTicketAge", "1.2.840.113556.1.4.80", "2.5.5.16", Int),
    attr!("modifiedCountAtLastProm", "1.2.840.113556.1.4.81", "2.5.5.16", Int),
    attr!("nETBIOSName", "1.2.840.113556.1.4.87", "2.5.5.5", String),
    attr!("nextRid", "1.2.840.113556.1.4.88", "2.5.5.9", Int),
    attr!("unicodePwd", "1.2.840.113556.1.4.90", "2.5.5.10", ByteArray),
    attr!("otherLoginWorkstations", "1.2.840.113556.1.4.91", "2.5.5.12", String),
    attr!("ntPwdHistory", "1.2.840.113556.1.4.94", "2.5.5.10", ByteArray),
    attr!("pwdHistoryLength", "1.2.840.113556.1.4.95", "2.5.5.9", Int),
    attr!("pwdLastSet", "1.2.840.113556.1.4.96", "2.5.5.16", Int),
    attr!("preferredOU", "1.2.840.113556.1.4.97", "2.5.5.1", DnString),
    attr!("primaryGroupID", "1.2.840.113556.1.4.98", "2.5.5.9", Int),
    attr!("priorValue", "1.2.840.113556.1.4.100", "2.5.5.10", ByteArray),
    attr!("privateKey", "1.2.840.113556.1.4.101", "2.5.5.10", ByteArray),
    attr!("profilePath", "1.2.840.113556.1.4.139", "2.5.5.12", String),
    attr!("pwdProperties", "1.2.840.113556.1.4.93", "2.5.5.9", Bitwise),
    attr!("adminCount", "1.2.840.113556.1.4.150", "2.5.5.9", Int),
    attr!("securityIdentifier", "1.2.840.113556.1.4.121", "2.5.5.17", ByteArray),
    attr!("supplementalCredentials", "1.2.840.113556.1.4.125", "2.5.5.10", ByteArray),
    attr!("trustAuthIncoming", "1.2.840.113556.1.4.129", "2.5.5.10", ByteArray),
    attr!("trustAuthOutgoing", "1.2.840.113556.1.4.136", "2.5.5.10", ByteArray),
    attr!("trustDirection", "1.2.840.113556.1.4.132", "2.5.5.9", Bitwise),
    attr!("trustPartner", "1.2.840.113556.1.4.133", "2.5.5.12", String),
    attr!("trustPosixOffset", "1.2.840.113556.1.4.134", "2.5.5.9", Int),
    attr!("trustType", "1.2.840.113556.1.4.135", "2.5.5.9", Int),
    attr!("trustAttributes", "1.2.840.113556.1.4.470", "2.5.5.9", Bitwise),
    attr!("userParameters", "1.2.840.113556.1.4.138", "2.5.5.12", String),
    attr!("userWorkstations", "1.2.840.113556.1.4.86", "2.5.5.12", String),
    attr!("revision", "1.2.840.113556.1.4.145", "2.5.5.9", Int),
    attr!("objectSid", "1.2.840.113556.1.4.146", "2.5.5.17", ByteArray),
    attr!("timeVolChange", "1.2.840.113556.1.4.158", "2.5.5.16", Int),
    attr!("accountExpires", "1.2.840.113556.1.4.159", "2.5.5.16", Int),
    attr!("lmPwdHistory", "1.2.840.113556.1.4.160", "2.5.5.10", ByteArray),
    attr!("groupMembershipSAM", "1.2.840.113556.1.4.166", "2.5.5.10", ByteArray),
    attr!("logonCount", "1.2.840.113556.1.4.169", "2.5.5.9", Int),
    attr!("controlAccessRights", "1.2.840.113556.1.4.200", "2.5.5.10", ByteArray),
    attr!("sAMAccountName", "1.2.840.113556.1.4.221", "2.5.5.12", String),
    attr!("sAMAccountType", "1.2.840.113556.1.4.302", "2.5.5.9", Bitwise),
    attr!("serverName", "1.2.840.113556.1.4.223", "2.5.5.12", String),
    attr!("serverRole", "1.2.840.113556.1.4.157", "2.5.5.9", Int),
    attr!("serverState", "1.2.840.113556.1.4.154", "2.5.5.9", Int),
    attr!("keywords", "1.2.840.113556.1.4.48", "2.5.5.12", String),
    attr!("location", "1.2.840.113556.1.4.222", "2.5.5.12", String),
    attr!("operatingSystem", "1.2.840.113556.1.4.363", "2.5.5.12", String),
    attr!("operatingSystemVersion", "1.2.840.113556.1.4.365", "2.5.5.12", String),
    attr!("operatingSystemServicePack", "1.2.840.113556.1.4.362", "2.5.5.12", String),
    attr!("operatingSystemHotfix", "1.2.840.113556.1.4.415", "2.5.5.12", String),
    attr!("rid", "1.2.840.113556.1.4.153", "2.5.5.9", Int),
    attr!("flags", "1.2.840.113556.1.4.38", "2.5.5.9", Bitwise),
    attr!("options", "1.2.840.113556.1.4.307", "2.5.5.9", Bitwise),
    attr!("systemFlags", "1.2.840.113556.1.4.375", "2.5.5.9", Bitwise),
    attr!("searchFlags", "1.2.840.113556.1.4.334", "2.5.5.9", Bitwise),
    attr!("groupType", "1.2.840.113556.1.4.750", "2.5.5.9", Bitwise),
    attr!("groupAttributes", "1.2.840.113556.1.4.152", "2.5.5.9", Int),
    attr!("memberOf", "1.2.840.113556.1.2.102", "2.5.5.1", DnString),
    attr!("managedBy", "1.2.840.113556.1.4.653", "2.5.5.1", DnString),
    attr!("managedObjects", "1.2.840.113556.1.4.654", "2.5.5.1", DnString),
    attr!("masteredBy", "1.2.840.113556.1.4.1409", "2.5.5.1", DnString),
    attr!("objectCategory", "1.2.840.113556.1.4.782", "2.5.5.1", DnString),
    attr!("defaultObjectCategory", "1.2.840.113556.1.4.783", "2.5.5.1", DnString),
    attr!("sIDHistory", "1.2.840.113556.1.4.609", "2.5.5.17", ByteArray),
    attr!("servicePrincipalName", "1.2.840.113556.1.4.771", "2.5.5.12", String),
    attr!("userPrincipalName", "1.2.840.113556.1.4.656", "2.5.5.12", String),
    attr!("altSecurityIdentities", "1.2.840.113556.1.4.867", "2.5.5.12", String),
    attr!("dNSHostName", "1.2.840.113556.1.4.619", "2.5.5.12", String),
    attr!("displayNameOther", "1.2.840.113556.1.4.717", "2.5.5.12", String),
    attr!("dnsRecord", "1.2.840.113556.1.4.382", "2.5.5.10", ByteArray),
    attr!("dnsRoot", "1.2.840.113556.1.4.28", "2.5.5.12", String),
    attr!("dnsAllowDynamic", "1.2.840.113556.1.4.378", "2.5.5.8", Boolean),
    attr!("dnsAllowXFR", "1.2.840.113556.1.4.379", "2.5.5.8", Boolean),
    attr!("domainReplica", "1.2.840.113556.1.4.158.1", "2.5.5.12", String),
    attr!("fSMORoleOwner", "1.2.840.113556.1.4.369", "2.5.5.1", DnString),
    attr!("gPLink", "1.2.840.113556.1.4.891", "2.5.5.12", String),
    attr!("gPOptions", "1.2.840.113556.1.4.892", "2.5.5.9", Int),
    attr!("gPCFileSysPath", "1.2.840.113556.1.4.894", "2.5.5.12", String),
    attr!("gPCFunctionalityVersion", "1.2.840.113556.1.4.893", "2.5.5.9", Int),
    attr!("gPCMachineExtensionNames", "1.2.840.113556.1.4.1348", "2.5.5.12", String),
    attr!("gPCUserExtensionNames", "1.2.840.113556.1.4.1349", "2.5.5.12", String),
    attr!("wellKnownObjects", "1.2.840.113556.1.4.618", "2.5.5.7", ByteArray),
    attr!("otherWellKnownObjects", "1.2.840.113556.1.4.1359", "2.5.5.7", ByteArray),
    attr!("isCriticalSystemObject", "1.2.840.113556.1.4.868", "2.5.5.8", Boolean),
    attr!("showInAdvancedViewOnly", "1.2.840.113556.1.2.169", "2.5.5.8", Boolean),
    attr!("nTSecurityDescriptor", "1.2.840.113556.1.2.281", "2.5.5.15", ByteArray),
    attr!("lockoutTime", "1.2.840.113556.1.4.662", "2.5.5.16", Int),
    attr!("kerberosEncryptionType", "1.2.840.113556.1.4.1972", "2.5.5.9", Bitwise),
    attr!("lastLogonTimestamp", "1.2.840.113556.1.4.1696", "2.5.5.16", Int),
    attr!("lastKnownParent", "1.2.840.113556.1.4.781", "2.5.5.1", DnString),
    attr!("ipsecName", "1.2.840.113556.1.4.620", "2.5.5.12", String),
    attr!("ipsecID", "1.2.840.113556.1.4.621", "2.5.5.12", String),
    attr!("ipsecData", "1.2.840.113556.1.4.623", "2.5.5.10", ByteArray),
    attr!("ipsecOwnersReference", "1.2.840.113556.1.4.624", "2.5.5.1", DnString),
    attr!("sites", "1.2.840.113556.1.4.1406", "2.5.5.1", DnString),
    attr!("siteObject", "1.2.840.113556.1.4.512", "2.5.5.1", DnString),
    attr!("siteLinkList", "1.2.840.113556.1.4.822", "2.5.5.1", DnString),
    attr!("siteList", "1.2.840.113556.1.4.821", "2.5.5.1", DnString),
    attr!("siteGUID", "1.2.840.113556.1.4.362.1", "2.5.5.10", ByteArray),
    attr!("serverReference", "1.2.840.113556.1.4.515", "2.5.5.1", DnString),
    attr!("serverReferenceBL", "1.2.840.113556.1.4.516", "2.5.5.1", DnString),
    attr!("schemaIDGUID", "1.2.840.113556.1.4.148", "2.5.5.10", ByteArray),
    attr!("attributeSecurityGUID", "1.2.840.113556.1.4.149", "2.5.5.10", ByteArray),
    attr!("schemaFlagsEx", "1.2.840.113556.1.4.120", "2.5.5.9", Int),
    attr!("schemaInfo", "1.2.840.113556.1.4.1358", "2.5.5.10", ByteArray),
    attr!("schemaUpdate", "1.2.840.113556.1.4.481", "2.5.5.11", DateTime),
    attr!("msiScript", "1.2.840.113556.1.4.814", "2.5.5.10", ByteArray),
    attr!("msiScriptName", "1.2.840.113556.1.4.845", "2.5.5.12", String),
    attr!("msiScriptPath", "1.2.840.113556.1.4.15", "2.5.5.12", String),
    attr!("msiScriptSize", "1.2.840.113556.1.4.846", "2.5.5.9", Int),
    attr!("msiFileList", "1.2.840.113556.1.4.671", "2.5.5.12", String),
    attr!("canonicalName", "1.2.840.113556.1.4.916", "2.5.5.12", String),
    attr!("homePostalAddressAD", "1.2.840.113556.1.4.617", "2.5.5.12", String),
    attr!("otherTelephone", "1.2.840.113556.1.4.18", "2.5.5.12", String),
    attr!("otherHomePhone", "1.2.840.113556.1.2.277", "2.5.5.12", String),
    attr!("otherPager", "1.2.840.113556.1.2.118", "2.5.5.12", String),
    attr!("otherFacsimileTelephoneNumber", "1.2.840.113556.1.4.646", "2.5.5.12", String),
    attr!("otherMobile", "1.2.840.113556.1.4.647", "2.5.5.12", String),
    attr!("otherIpPhone", "1.2.840.113556.1.4.722", "2.5.5.12", String),
    attr!("ipPhone", "1.2.840.113556.1.4.721", "2.5.5.12", String),
    attr!("primaryTelexNumber", "1.2.840.113556.1.4.648", "2.5.5.12", String),
    attr!("primaryInternationalISDNNumber", "1.2.840.113556.1.4.649", "2.5.5.12", String),
    attr!("mhsORAddress", "1.2.840.113556.1.4.650", "2.5.5.12", String),
    attr!("otherMailbox", "1.2.840.113556.1.4.651", "2.5.5.12", String),
    attr!("assistant", "1.2.840.113556.1.4.652", "2.5.5.12", String),
    attr!("department", "1.2.840.113556.1.2.141", "2.5.5.12", String),
    attr!("company", "1.2.840.113556.1.2.146", "2.5.5.12", String),
    attr!("division", "1.2.840.113556.1.4.261", "2.5.5.12", String),
    attr!("employeeID", "1.2.840.113556.1.4.35", "2.5.5.12", String),
    attr!("comment", "1.2.840.113556.1.4.156", "2.5.5.12", String),
    attr!("directReports", "1.2.840.113556.1.2.436", "2.5.5.1", DnString),
    attr!("homePostOfficeBox", "1.2.840.113556.1.4.617.1", "2.5.5.12", String),
    attr!("personalPager", "1.2.840.113556.1.4.3000", "2.5.5.12", String),
    attr!("streetAddress", "1.2.840.113556.1.2.256", "2.5.5.12", String),
    attr!("thumbnailPhoto", "2.16.840.1.113730.3.1.35", "2.5.5.10", ByteArray),
    attr!("thumbnailLogo", "2.16.840.1.113730.3.1.36", "2.5.5.10", ByteArray),
    attr!("url", "1.2.840.113556.1.4.749", "2.5.5.12", String),
    attr!("wWWHomePage", "1.2.840.113556.1.2.464", "2.5.5.12", String),
    attr!("notes", "1.2.840.113556.1.4.265", "2.5.5.12", String),
    attr!("userCert", "1.2.840.113556.1.4.645", "2.5.5.10", ByteArray),
    attr!("userSharedFolder", "1.2.840.113556.1.4.751", "2.5.5.12", String),
    attr!("userSharedFolderOther", "1.2.840.113556.1.4.752", "2.5.5.12", String),
    attr!("nameServiceFlags", "1.2.840.113556.1.4.753", "2.5.5.9", Bitwise),
    attr!("groupsToIgnore", "1.2.840.113556.1.4.754", "2.5.5.12", String),
    attr!("groupPriority", "1.2.840.113556.1.4.345", "2.5.5.12", String),
    attr!("desktopProfile", "1.2.840.113556.1.4.346", "2.5.5.12", String),
    attr!("foreignIdentifier", "1.2.840.113556.1.4.356", "2.5.5.10", ByteArray),
    attr!("netbootGUID", "1.2.840.113556.1.4.359", "2.5.5.10", ByteArray),
    attr!("netbootInitialization", "1.2.840.113556.1.4.359.1", "2.5.5.12", String),
    attr!("netbootMachineFilePath", "1.2.840.113556.1.4.361", "2.5.5.12", String),
    attr!("siteServer", "1.2.840.113556.1.4.494", "2.5.5.1", DnString),
    attr!("mailAddress", "1.2.840.113556.1.4.786", "2.5.5.12", String),
    attr!("dSHeuristics", "1.2.840.113556.1.2.212", "2.5.5.12", String),
    attr!("dSCorePropagationData", "1.2.840.113556.1.4.1357", "2.5.5.11", DateTime),
    attr!("msDS-Behavior-Version", "1.2.840.113556.1.4.1459", "2.5.5.9", Int),
    attr!("msDS-PerUserTrustQuota", "1.2.840.113556.1.4.1713", "2.5.5.9", Int),
    attr!("msDS-AllUsersTrustQuota", "1.2.840.113556.1.4.1714", "2.5.5.9", Int),
    attr!("msDS-PerUserTrustTombstonesQuota", "1.2.840.113556.1.4.1715", "2.5.5.9", Int),
    attr!("msDS-AllowedDNSSuffixes", "1.2.840.113556.1.4.1710", "2.5.5.12", String),
    attr!("msDS-AllowedToDelegateTo", "1.2.840.113556.1.4.1787", "2.5.5.12", String),
    attr!("msDS-AllowedToActOnBehalfOfOtherIdentity", "1.2.840.113556.1.4.2182", "2.5.5.15", ByteArray),
    attr!("msDS-SupportedEncryptionTypes", "1.2.840.113556.1.4.1963", "2.5.5.9", Bitwise),
    attr!("msDS-User-Account-Control-Computed", "1.2.840.113556.1.4.1460", "2.5.5.9", Bitwise),
    attr!("msDS-UserPasswordExpiryTimeComputed", "1.2.840.113556.1.4.1996", "2.5.5.16", Int),
    attr!("msDS-KeyVersionNumber", "1.2.840.113556.1.4.1782", "2.5.5.9", Int),
    attr!("msDS-AdditionalDnsHostName", "1.2.840.113556.1.4.1717", "2.5.5.12", String),
    attr!("msDS-AdditionalSamAccountName", "1.2.840.113556.1.4.1718", "2.5.5.12", String),
    attr!("msDS-ExecuteScriptPassword", "1.2.840.113556.1.4.1783", "2.5.5.10", ByteArray),
    attr!("msDS-MachineAccountQuota", "1.2.840.113556.1.4.1411", "2.5.5.9", Int),
    attr!("msDS-SiteName", "1.2.840.113556.1.4.1961", "2.5.5.12", String),
    attr!("msDS-isGC", "1.2.840.113556.1.4.1959", "2.5.5.8", Boolean),
    attr!("msDS-isRODC", "1.2.840.113556.1.4.1960", "2.5.5.8", Boolean),
    attr!("msDS-LastSuccessfulInteractiveLogonTime", "1.2.840.113556.1.4.1970", "2.5.5.16", Int),
    attr!("msDS-LastFailedInteractiveLogonTime", "1.2.840.113556.1.4.1971", "2.5.5.16", Int),
    attr!("msDS-FailedInteractiveLogonCount", "1.2.840.113556.1.4.1973", "2.5.5.9", Int),
    attr!("msDS-ManagedPassword", "1.2.840.113556.1.4.2196", "2.5.5.10", ByteArray),
    attr!("msDS-ManagedPasswordId", "1.2.840.113556.1.4.2197", "2.5.5.10", ByteArray),
    attr!("msDS-ManagedPasswordPreviousId", "1.2.840.113556.1.4.2198", "2.5.5.10", ByteArray),
    attr!("msDS-ManagedPasswordInterval", "1.2.840.113556.1.4.2199", "2.5.5.9", Int),
    attr!("msDS-GroupMSAMembership", "1.2.840.113556.1.4.2200", "2.5.5.15", ByteArray),
    attr!("msDS-HostServiceAccount", "1.2.840.113556.1.4.2056", "2.5.5.1", DnString),
    attr!("msDS-HostServiceAccountBL", "1.2.840.113556.1.4.2057", "2.5.5.1", DnString),
    attr!("msDS-KeyCredentialLink", "1.2.840.113556.1.4.2328", "2.5.5.7", ByteArray),
    attr!("msDS-DelegatedMSAState", "1.2.840.113556.1.4.2371", "2.5.5.9", Int),
    attr!("msDS-GroupManagedServiceAccount", "1.2.840.113556.1.4.2372", "2.5.5.1", DnString),
    attr!("msDS-ShadowPrincipalSid", "1.2.840.113556.1.4.2324", "2.5.5.17", ByteArray),
    attr!("msDS-parentdistname", "1.2.840.113556.1.4.2203", "2.5.5.1", DnString),
    attr!("msDS-ReplValueMetaData", "1.2.840.113556.1.4.1708", "2.5.5.12", String),
    attr!("msDS-ReplAttributeMetaData", "1.2.840.113556.1.4.1707", "2.5.5.12", String),
    attr!("msDS-NcType", "1.2.840.113556.1.4.2024", "2.5.5.9", Int),
    attr!("msDS-PasswordSettingsPrecedence", "1.2.840.113556.1.4.2023", "2.5.5.9", Int),
    attr!("msDS-PasswordReversibleEncryptionEnabled", "1.2.840.113556.1.4.2019", "2.5.5.8", Boolean),
    attr!("msDS-PasswordComplexityEnabled", "1.2.840.113556.1.4.2018", "2.5.5.8", Boolean),
    attr!("msDS-PasswordHistoryLength", "1.2.840.113556.1.4.2017", "2.5.5.9", Int),
    attr!("msDS-MinimumPasswordLength", "1.2.840.113556.1.4.2016", "2.5.5.9", Int),
    attr!("msDS-MinimumPasswordAge", "1.2.840.113556.1.4.2015", "2.5.5.16", Int),
    attr!("msDS-MaximumPasswordAge", "1.2.840.113556.1.4.2014", "2.5.5.16", Int),
    attr!("msDS-LockoutThreshold", "1.2.840.113556.1.4.2025", "2.5.5.9", Int),
    attr!("msDS-LockoutDuration", "1.2.840.113556.1.4.2026", "2.5.5.16", Int),
    attr!("msDS-LockoutObservationWindow", "1.2.840.113556.1.4.2027", "2.5.5.16", Int),
    attr!("msDS-PSOAppliesTo", "1.2.840.113556.1.4.2020", "2.5.5.1", DnString),
    attr!("msDS-PSOApplied", "1.2.840.113556.1.4.2021", "2.5.5.1", DnString),
    attr!("msDS-ResultantPSO", "1.2.840.113556.1.4.2022", "2.5.5.1", DnString),
    attr!("msDS-MembersForAzRole", "1.2.840.113556.1.4.1806", "2.5.5.1", DnString),
    attr!("msDS-TasksForAzRole", "1.2.840.113556.1.4.1814", "2.5.5.1", DnString),
    attr!("msDS-AzApplicationName", "1.2.840.113556.1.4.1798", "2.5.5.12", String),
    attr!("msDS-TrustForestTrustInfo", "1.2.840.113556.1.4.1702", "2.5.5.10", ByteArray),
    attr!("msDS-TombstoneQuotaFactor", "1.2.840.113556.1.4.1847", "2.5.5.9", Int),
    attr!("msDS-ObjectReference", "1.2.840.113556.1.4.1840", "2.5.5.1", DnString),
    attr!("msDS-ObjectReferenceBL", "1.2.840.113556.1.4.1841", "2.5.5.1", DnString),
    attr!("msDS-PrincipalName", "1.2.840.113556.1.4.1865", "2.5.5.12", String),
    attr!("msDS-RevealedUsers", "1.2.840.113556.1.4.1924", "2.5.5.7", ByteArray),
    attr!("msDS-RevealedDSAs", "1.2.840.113556.1.4.1930", "2.5.5.1", DnString),
    attr!("msDS-NeverRevealGroup", "1.2.840.113556.1.4.1926", "2.5.5.1", DnString),
    attr!("msDS-RevealOnDemandGroup", "1.2.840.113556.1.4.1928", "2.5.5.1", DnString),
    attr!("msDS-SecondaryKrbTgtNumber", "1.2.840.113556.1.4.1929", "2.5.5.9", Int),
    attr!("msDS-KrbTgtLink", "1.2.840.113556.1.4.1923", "2.5.5.1", DnString),
    attr!("msDS-KrbTgtLinkBl", "1.2.840.113556.1.4.1931", "2.5.5.1", DnString),
    attr!("msDS-NC-RO-Replica-Locations", "1.2.840.113556.1.4.1967", "2.5.5.1", DnString),
    attr!("msDS-cloudExtensionAttribute1", "1.2.840.113556.1.4.2227", "2.5.5.12", String),
    attr!("msDS-cloudExtensionAttribute2", "1.2.840.113556.1.4.2228", "2.5.5.12", String),
    attr!("msDS-ExternalDirectoryObjectId", "1.2.840.113556.1.4.2310", "2.5.5.12", String),
    attr!("msDS-SourceAnchor", "1.2.840.113556.1.4.2352", "2.5.5.12", String),
    attr!("msTSHomeDirectory", "1.2.840.113556.1.4.2087", "2.5.5.12", String),
    attr!("msTSHomeDrive", "1.2.840.113556.1.4.2088", "2.5.5.12", String),
    attr!("msTSProfilePath", "1.2.840.113556.1.4.2091", "2.5.5.12", String),
    attr!("msTSInitialProgram", "1.2.840.113556.1.4.2101", "2.5.5.12", String),
    attr!("msNPAllowDialin", "1.2.840.113556.1.4.1119", "2.5.5.8", Boolean),
    attr!("msRADIUSCallbackNumber", "1.2.840.113556.1.4.1145", "2.5.5.12", String),
    attr!("msRADIUSFramedIPAddress", "1.2.840.113556.1.4.1153", "2.5.5.9", Int),
    attr!("msRADIUSServiceType", "1.2.840.113556.1.4.1171", "2.5.5.9", Int),
    attr!("msFVE-RecoveryPassword", "1.2.840.113556.1.4.1964", "2.5.5.12", String),
    attr!("msFVE-RecoveryGuid", "1.2.840.113556.1.4.1965", "2.5.5.10", ByteArray),
    attr!("msFVE-VolumeGuid", "1.2.840.113556.1.4.1998", "2.5.5.10", ByteArray),
    attr!("msFVE-KeyPackage", "1.2.840.113556.1.4.1999", "2.5.5.10", ByteArray),
    attr!("msTPM-OwnerInformation", "1.2.840.113556.1.4.1966", "2.5.5.12", String),
    attr!("msTPM-TpmInformationForComputer", "1.2.840.113556.1.4.2109", "2.5.5.1", DnString),
    attr!("msSFU30Name", "1.2.840.113556.1.6.18.1.309", "2.5.5.12", String),
    attr!("msSFU30NisDomain", "1.2.840.113556.1.6.18.1.339", "2.5.5.12", String),
    attr!("msSFU30Password", "1.2.840.113556.1.6.18.1.346", "2.5.5.12", String),
    attr!("msSFU30UidNumber", "1.2.840.113556.1.6.18.1.347", "2.5.5.9", Int),
    attr!("msSFU30GidNumber", "1.2.840.113556.1.6.18.1.348", "2.5.5.9", Int),
    attr!("unixUserPassword", "1.2.840.113556.1.4.1910", "2.5.5.10", ByteArray),
    attr!("msExchMailboxGuid", "1.2.840.113556.1.4.7000.102.50880", "2.5.5.10", ByteArray),
    attr!("msExchMailboxSecurityDescriptor", "1.2.840.113556.1.4.7000.102.80", "2.5.5.15", ByteArray),
    attr!("msExchHomeServerName", "1.2.840.113556.1.4.7000.102.11161", "2.5.5.12", String),
    attr!("msExchUserAccountControl", "1.2.840.113556.1.4.7000.102.50855", "2.5.5.9", Bitwise),
    attr!("msExchRecipientTypeDetails", "1.2.840.113556.1.4.7000.102.50858", "2.5.5.16", Int),
    attr!("ms-Mcs-AdmPwd", "1.2.840.113556.1.8000.2554.50051.45980.28112.18903.35903.6685.1.1", "2.5.5.12", String),
    attr!("ms-Mcs-AdmPwdExpirationTime", "1.2.840.113556.1.8000.2554.50051.45980.28112.18903.35903.6685.1.2", "2.5.5.16", Int),
    attr!("msLAPS-Password", "1.2.840.113556.1.6.44.1.2", "2.5.5.10", ByteArray),
    attr!("msLAPS-EncryptedPassword", "1.2.840.113556.1.6.44.1.3", "2.5.5.10", ByteArray),
    attr!("msLAPS-PasswordExpirationTime", "1.2.840.113556.1.6.44.1.1", "2.5.5.16", Int),
    attr!("defender-tokenData", "1.2.840.113556.1.4.1822", "2.5.5.10", ByteArray),
    attr!("orclCommonAttribute", "2.16.840.1.113894.1.1.3", "2.5.5.12", String),
    attr!("anr", "1.2.840.113556.1.4.1208", "2.5.5.12", String),
    attr!("ntMixedDomain", "1.2.840.113556.1.4.357", "2.5.5.9", Int),
    attr!("rIDAllocationPool", "1.2.840.113556.1.4.371", "2.5.5.16", Int),
    attr!("rIDAvailablePool", "1.2.840.113556.1.4.370", "2.5.5.16", Int),
    attr!("rIDNextRID", "1.2.840.113556.1.4.374", "2.5.5.9", Int),
    attr!("rIDPreviousAllocationPool", "1.2.840.113556.1.4.372", "2.5.5.16", Int),
    attr!("rIDUsedPool", "1.2.840.113556.1.4.373", "2.5.5.16", Int),
    attr!("rIDManagerReference", "1.2.840.113556.1.4.368", "2.5.5.1", DnString),
    attr!("rIDSetReferences", "1.2.840.113556.1.4.669", "2.5.5.1", DnString),
    attr!("repsFrom", "1.2.840.113556.1.2.91", "2.5.5.10", ByteArray),
    attr!("repsTo", "1.2.840.113556.1.2.83", "2.5.5.10", ByteArray),
    attr!("replUpToDateVector", "1.2.840.113556.1.4.4", "2.5.5.10", ByteArray),
    attr!("directReportsBL", "1.2.840.113556.1.2.436.1", "2.5.5.1", DnString),
    attr!("partialAttributeSet", "1.2.840.113556.1.4.640", "2.5.5.10", ByteArray),
    attr!("partialAttributeDeletionList", "1.2.840.113556.1.4.663", "2.5.5.10", ByteArray),
    attr!("prefixMap", "1.2.840.113556.1.4.538", "2.5.5.10", ByteArray),
    attr!("invocationId", "1.2.840.113556.1.2.115", "2.5.5.10", ByteArray),
    attr!("dsServiceName", "1.2.840.113556.1.2.352", "2.5.5.1", DnString),
    attr!("namingContexts", "1.2.840.113556.1.4.471", "2.5.5.1", DnString),
    attr!("defaultNamingContext", "1.2.840.113556.1.4.735", "2.5.5.1", DnString),
    attr!("schemaNamingContext", "1.2.840.113556.1.4.736", "2.5.5.1", DnString),
    attr!("configurationNamingContext", "1.2.840.113556.1.4.737", "2.5.5.1", DnString),
    attr!("rootDomainNamingContext", "1.2.840.113556.1.4.1341", "2.5.5.1", DnString),
    attr!("supportedControl", "1.2.840.113556.1.4.738", "2.5.5.2", String),
    attr!("supportedLDAPVersion", "1.2.840.113556.1.4.739", "2.5.5.9", Int),
    attr!("supportedLDAPPolicies", "1.2.840.113556.1.4.1347", "2.5.5.12", String),
    attr!("supportedSASLMechanisms", "1.2.840.113556.1.4.740", "2.5.5.12", String),
    attr!("supportedCapabilities", "1.2.840.113556.1.4.1351", "2.5.5.2", String),
    attr!("highestCommittedUSN", "1.2.840.113556.1.4.741", "2.5.5.16", Int),
    attr!("dnsHostNameRoot", "1.2.840.113556.1.4.742", "2.5.5.12", String),
    attr!("ldapServiceName", "1.2.840.113556.1.4.743", "2.5.5.12", String),
    attr!("serverDomain", "1.2.840.113556.1.4.744", "2.5.5.12", String),
    attr!("isGlobalCatalogReady", "1.2.840.113556.1.4.1960.1", "2.5.5.8", Boolean),
    attr!("isSynchronized", "1.2.840.113556.1.4.1830", "2.5.5.8", Boolean),
    attr!("pekList", "1.2.840.113556.1.4.865", "2.5.5.10", ByteArray),
    attr!("pekKeyChangeInterval", "1.2.840.113556.1.4.866", "2.5.5.16", Int),
    attr!("privilegeDisplayName", "1.2.840.113556.1.4.634", "2.5.5.12", String),
    attr!("privilegeValue", "1.2.840.113556.1.4.636", "2.5.5.16", Int),
    attr!("privilegeAttributes", "1.2.840.113556.1.4.635", "2.5.5.9", Bitwise),
    attr!("privilegeHolder", "1.2.840.113556.1.4.637", "2.5.5.1", DnString),
    attr!("auditingPolicy", "1.2.840.113556.1.4.202", "2.5.5.10", ByteArray),
    attr!("pKICriticalExtensions", "1.2.840.113556.1.4.1330", "2.5.5.12", String),
    attr!("pKIDefaultCSPs", "1.2.840.113556.1.4.1334", "2.5.5.12", String),
    attr!("pKIDefaultKeySpec", "1.2.840.113556.1.4.1327", "2.5.5.9", Int),
    attr!("pKIEnrollmentAccess", "1.2.840.113556.1.4.1335", "2.5.5.15", ByteArray),
    attr!("pKIExpirationPeriod", "1.2.840.113556.1.4.1331", "2.5.5.10", ByteArray),
    attr!("pKIExtendedKeyUsage", "1.2.840.113556.1.4.1333", "2.5.5.12", String),
    attr!("pKIKeyUsage", "1.2.840.113556.1.4.1328", "2.5.5.10", ByteArray),
    attr!("pKIMaxIssuingDepth", "1.2.840.113556.1.4.1329", "2.5.5.9", Int),
    attr!("pKIOverlapPeriod", "1.2.840.113556.1.4.1332", "2.5.5.10", ByteArray),
    attr!("certificateTemplates", "1.2.840.113556.1.4.823", "2.5.5.12", String),
    attr!("enrollmentProviders", "1.2.840.113556.1.4.825", "2.5.5.12", String),
    attr!("msPKI-Certificate-Name-Flag", "1.2.840.113556.1.4.1432", "2.5.5.9", Bitwise),
    attr!("msPKI-Enrollment-Flag", "1.2.840.113556.1.4.1430", "2.5.5.9", Bitwise),
    attr!("msPKI-Private-Key-Flag", "1.2.840.113556.1.4.1431", "2.5.5.9", Bitwise),
    attr!("msPKI-RA-Signature", "1.2.840.113556.1.4.1429", "2.5.5.9", Int),
    attr!("msPKI-Template-Schema-Version", "1.2.840.113556.1.4.1434", "2.5.5.9", Int),
    attr!("msPKI-Cert-Template-OID", "1.2.840.113556.1.4.1436", "2.5.5.12", String),
    attr!("msPKIAccountCredentials", "1.2.840.113556.1.4.1894", "2.5.5.7", ByteArray),
    attr!("msPKIDPAPIMasterKeys", "1.2.840.113556.1.4.1893", "2.5.5.7", ByteArray),
    attr!("msPKIRoamingTimeStamp", "1.2.840.113556.1.4.1892", "2.5.5.10", ByteArray),
    attr!("mS-DS-CreatorSID", "1.2.840.113556.1.4.1410", "2.5.5.17", ByteArray),
    attr!("mS-DS-ConsistencyGuid", "1.2.840.113556.1.4.1360", "2.5.5.10", ByteArray),
    attr!("mS-DS-MachineAccountQuota", "1.2.840.113556.1.4.1411.1", "2.5.5.9", Int),
    attr!("mSMQDigests", "1.2.840.113556.1.4.948", "2.5.5.10", ByteArray),
    attr!("mSMQOwnerID", "1.2.840.113556.1.4.925", "2.5.5.10", ByteArray),
    attr!("mSMQSignCertificates", "1.2.840.113556.1.4.947", "2.5.5.10", ByteArray),
    attr!("homePhoneAD", "1.2.840.113556.1.2.120.1", "2.5.5.12", String),
    attr!("extensionAttribute1", "1.2.840.113556.1.2.610", "2.5.5.12", String),
    attr!("extensionAttribute2", "1.2.840.113556.1.2.613", "2.5.5.12", String),
    attr!("extensionAttribute3", "1.2.840.113556.1.2.614", "2.5.5.12", String),
    attr!("extensionAttribute4", "1.2.840.113556.1.2.615", "2.5.5.12", String),
    attr!("extensionAttribute5", "1.2.840.113556.1.2.616", "2.5.5.12", String),
    attr!("extensionAttribute6", "1.2.840.113556.1.2.618", "2.5.5.12", String),
    attr!("extensionAttribute7", "1.2.840.113556.1.2.619", "2.5.5.12", String),
    attr!("extensionAttribute8", "1.2.840.113556.1.2.620", "2.5.5.12", String),
    attr!("extensionAttribute9", "1.2.840.113556.1.2.621", "2.5.5.12", String),
    attr!("extensionAttribute10", "1.2.840.113556.1.2.622", "2.5.5.12", String),
    attr!("extensionAttribute11", "1.2.840.113556.1.2.623", "2.5.5.12", String),
    attr!("extensionAttribute12", "1.2.840.113556.1.2.624", "2.5.5.12", String),
    attr!("extensionAttribute13", "1.2.840.113556.1.2.625", "2.5.5.12", String),
    attr!("extensionAttribute14", "1.2.840.113556.1.2.626", "2.5.5.12", String),
    attr!("extensionAttribute15", "1.2.840.113556.1.2.627", "2.5.5.12", String),
    attr!("mailNickname", "1.2.840.113556.1.2.447", "2.5.5.12", String),
    attr!("targetAddress", "1.2.840.113556.1.2.24", "2.5.5.12", String),
    attr!("deliverAndRedirect", "1.2.840.113556.1.2.15", "2.5.5.8", Boolean),
    attr!("homeMDB", "1.2.840.113556.1.2.170", "2.5.5.1", DnString),
    attr!("deletedItemFlags", "1.2.840.113556.1.2.28", "2.5.5.9", Int),
    attr!("garbageCollPeriod", "1.2.840.113556.1.2.301", "2.5.5.9", Int),
    attr!("internetEncoding", "1.2.840.113556.1.2.617.1", "2.5.5.9", Int),
    attr!("mDBUseDefaults", "1.2.840.113556.1.2.296", "2.5.5.8", Boolean),
    attr!("mDBStorageQuota", "1.2.840.113556.1.2.288", "2.5.5.9", Int),
    attr!("mDBOverQuotaLimit", "1.2.840.113556.1.2.290", "2.5.5.9", Int),
    attr!("mDBOverHardQuotaLimit", "1.2.840.113556.1.2.291", "2.5.5.9", Int),
    attr!("msExchArchiveGUID", "1.2.840.113556.1.4.7000.102.50880.1", "2.5.5.10", ByteArray),
    attr!("msExchDelegateListLink", "1.2.840.113556.1.4.7000.102.50880.2", "2.5.5.1", DnString),
    attr!("publicDelegates", "1.2.840.113556.1.2.474", "2.5.5.1", DnString),
    attr!("publicDelegatesBL", "1.2.840.113556.1.2.475", "2.5.5.1", DnString),
    attr!("versionNumber", "1.2.840.113556.1.4.141", "2.5.5.9", Int),
    attr!("volTableGUID", "1.2.840.113556.1.4.205", "2.5.5.10", ByteArray),
    attr!("volTableIdxGUID", "1.2.840.113556.1.4.204", "2.5.5.10", ByteArray),
    attr!("volumeCount", "1.2.840.113556.1.4.507", "2.5.5.9", Int),
    attr!("netbootServer", "1.2.840.113556.1.4.860", "2.5.5.1", DnString),
    attr!("netbootSCPBL", "1.2.840.113556.1.4.864", "2.5.5.1", DnString),
    attr!("printerName", "1.2.840.113556.1.4.300", "2.5.5.12", String),
    attr!("printShareName", "1.2.840.113556.1.4.270", "2.5.5.12", String),
    attr!("printQueue", "1.2.840.113556.1.4.299", "2.5.5.12", String),
    attr!("driverName", "1.2.840.113556.1.4.229", "2.5.5.12", String),
    attr!("driverVersion", "1.2.840.113556.1.4.276", "2.5.5.9", Int),
    attr!("portName", "1.2.840.113556.1.4.228", "2.5.5.12", String),
    attr!("printColor", "1.2.840.113556.1.4.243", "2.5.5.8", Boolean),
    attr!("printDuplexSupported", "1.2.840.113556.1.4.1311", "2.5.5.8", Boolean),
    attr!("printStaplingSupported", "1.2.840.113556.1.4.281", "2.5.5.8", Boolean),
    attr!("printMemory", "1.2.840.113556.1.4.282", "2.5.5.9", Int),
    attr!("printRate", "1.2.840.113556.1.4.286", "2.5.5.9", Int),
    attr!("printRateUnit", "1.2.840.113556.1.4.287", "2.5.5.12", String),
    attr!("priority", "1.2.840.113556.1.4.231", "2.5.5.9", Int),
    attr!("defaultPriority", "1.2.840.113556.1.4.232", "2.5.5.9", Int),
    attr!("serviceClassName", "1.2.840.113556.1.4.509", "2.5.5.12", String),
    attr!("serviceBindingInformation", "1.2.840.113556.1.4.510", "2.5.5.12", String),
    attr!("serviceClassID", "1.2.840.113556.1.4.511", "2.5.5.10", ByteArray),
    attr!("serviceDNSName", "1.2.840.113556.1.4.657", "2.5.5.12", String),
    attr!("serviceDNSNameType", "1.2.840.113556.1.4.659", "2.5.5.12", String),
    attr!("sPNMappings", "1.2.840.113556.1.4.1347.1", "2.5.5.12", String),
    attr!("treeName", "1.2.840.113556.1.4.660", "2.5.5.12", String),
    attr!("dhcpServers", "1.2.840.113556.1.4.701", "2.5.5.12", String),
    attr!("dhcpRanges", "1.2.840.113556.1.4.702", "2.5.5.12", String),
    attr!("dhcpSubnets", "1.2.840.113556.1.4.703", "2.5.5.12", String),
    attr!("frsComputerReference", "1.2.840.113556.1.4.869", "2.5.5.1", DnString),
    attr!("frsComputerReferenceBL", "1.2.840.113556.1.4.870", "2.5.5.1", DnString),
    attr!("fRSMemberReference", "1.2.840.113556.1.4.875", "2.5.5.1", DnString),
    attr!("fRSMemberReferenceBL", "1.2.840.113556.1.4.876", "2.5.5.1", DnString),
    attr!("fRSRootPath", "1.2.840.113556.1.4.487", "2.5.5.12", String),
    attr!("fRSStagingPath", "1.2.840.113556.1.4.488", "2.5.5.12", String),
    attr!("fRSUpdateTimeout", "1.2.840.113556.1.4.485", "2.5.5.9", Int),
    attr!("fRSVersionGUID", "1.2.840.113556.1.4.43", "2.5.5.10", ByteArray),
    attr!("msDFSR-ComputerReference", "1.2.840.113556.1.6.13.3.101", "2.5.5.1", DnString),
    attr!("msDFSR-MemberReference", "1.2.840.113556.1.6.13.3.100", "2.5.5.1", DnString),
    attr!("msDFSR-RootPath", "1.2.840.113556.1.6.13.3.1", "2.5.5.12", String),
    attr!("msDFSR-StagingPath", "1.2.840.113556.1.6.13.3.3", "2.5.5.12", String),
    attr!("msDFSR-Enabled", "1.2.840.113556.1.6.13.3.9", "2.5.5.8", Boolean),
    attr!("msDFSR-Flags", "1.2.840.113556.1.6.13.3.16", "2.5.5.9", Bitwise),
    attr!("msDFSR-Options", "1.2.840.113556.1.6.13.3.17", "2.5.5.9", Bitwise),
    attr!("msDFSR-ReplicationGroupGuid", "1.2.840.113556.1.6.13.3.23", "2.5.5.10", ByteArray),
    attr!("msDFSR-Version", "1.2.840.113556.1.6.13.3.24", "2.5.5.12", String),
    attr!("msieee80211-Data", "1.2.840.113556.1.4.1821", "2.5.5.10", ByteArray),
    attr!("msieee80211-DataType", "1.2.840.113556.1.4.1820", "2.5.5.9", Int),
    attr!("msieee80211-ID", "1.2.840.113556.1.4.1819", "2.5.5.12", String),
    attr!("meetingName", "1.2.840.113556.1.4.318", "2.5.5.12", String),
    attr!("meetingID", "1.2.840.113556.1.4.565", "2.5.5.12", String),
    attr!("meetingURL", "1.2.840.113556.1.4.583", "2.5.5.12", String),
    attr!("meetingIP", "1.2.840.113556.1.4.578", "2.5.5.12", String),
    attr!("meetingScope", "1.2.840.113556.1.4.581", "2.5.5.12", String),
    attr!("meetingType", "1.2.840.113556.1.4.571", "2.5.5.12", String),
    attr!("meetingStartTime", "1.2.840.113556.1.4.587", "2.5.5.11", DateTime),
    attr!("meetingEndTime", "1.2.840.113556.1.4.588", "2.5.5.11", DateTime),
    attr!("categoryId", "1.2.840.113556.1.4.322", "2.5.5.10", ByteArray),
    attr!("mscopeId", "1.2.840.113556.1.4.716", "2.5.5.12", String),
    attr!("networkAddress", "1.2.840.113556.1.2.459", "2.5.5.12", String),
    attr!("physicalLocationObject", "1.2.840.113556.1.4.514", "2.5.5.1", DnString),
    attr!("queryPolicyObject", "1.2.840.113556.1.4.607", "2.5.5.1", DnString),
    attr!("queryPolicyBL", "1.2.840.113556.1.4.608", "2.5.5.1", DnString),
    attr!("lDAPAdminLimits", "1.2.840.113556.1.4.843", "2.5.5.12", String),
    attr!("lDAPIPDenyList", "1.2.840.113556.1.4.844", "2.5.5.10", ByteArray),
    attr!("linkTrackSecret", "1.2.840.113556.1.4.269", "2.5.5.10", ByteArray),
    attr!("mS-SQL-Name", "1.2.840.113556.1.4.1363", "2.5.5.12", String),
    attr!("mS-SQL-RegisteredOwner", "1.2.840.113556.1.4.1364", "2.5.5.12", String),
    attr!("mS-SQL-Contact", "1.2.840.113556.1.4.1365", "2.5.5.12", String),
    attr!("mS-SQL-Location", "1.2.840.113556.1.4.1366", "2.5.5.12", String),
    attr!("mS-SQL-Memory", "1.2.840.113556.1.4.1367", "2.5.5.16", Int),
    attr!("mS-SQL-Build", "1.2.840.113556.1.4.1368", "2.5.5.9", Int),
    attr!("mS-SQL-ServiceAccount", "1.2.840.113556.1.4.1369", "2.5.5.12", String),
    attr!("mS-SQL-CharacterSet", "1.2.840.113556.1.4.1370", "2.5.5.9", Int),
    attr!("mS-SQL-SortOrder", "1.2.840.113556.1.4.1371", "2.5.5.12", String),
    attr!("mS-SQL-TCPIP", "1.2.840.113556.1.4.1377", "2.5.5.12", String),
    attr!("mS-SQL-AppleTalk", "1.2.840.113556.1.4.1378", "2.5.5.12", String),
    attr!("mS-SQL-Status", "1.2.840.113556.1.4.1380", "2.5.5.16", Int),
    attr!("employeeBadgeNumber", "1.2.840.113556.1.4.1459.1", "2.5.5.12", String),
    attr!("roomCapacity", "1.2.840.113556.1.4.1459.2", "2.5.5.9", Int),
    attr!("carLicensePlate", "1.2.840.113556.1.4.1459.3", "2.5.5.12", String),
];
