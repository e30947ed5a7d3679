//! RDF namespaces used by OSLC and Jazz servers.
//!
//! The table is constant data: each [`Namespace`] is a `const` and [`lookup`] resolves a
//! conventional prefix against the static [`NAMESPACES`] slice.
//!
//! # Examples
//!
//! ```
//! use oslc_client::protocol::namespaces::{self, OSLC, OSLC_RM};
//!
//! assert_eq!(OSLC.term("queryBase"), "http://open-services.net/ns/core#queryBase");
//! assert_eq!(OSLC_RM.term("Requirement"), "http://open-services.net/ns/rm#Requirement");
//! assert_eq!(namespaces::lookup("dcterms").unwrap().iri(), "http://purl.org/dc/terms/");
//! ```

#![allow(missing_docs)]

use std::fmt;

/// An RDF namespace IRI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespace(&'static str);

impl Namespace {
    /// Create a namespace from its IRI
    pub const fn new(iri: &'static str) -> Self {
        Namespace(iri)
    }

    /// The namespace IRI
    pub const fn iri(&self) -> &'static str {
        self.0
    }

    /// Build the full IRI of a term in this namespace
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.0, local)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const FOAF: Namespace = Namespace::new("http://xmlns.com/foaf/0.1/");
pub const RDF: Namespace = Namespace::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#");
pub const RDFS: Namespace = Namespace::new("http://www.w3.org/2000/01/rdf-schema#");
pub const OWL: Namespace = Namespace::new("http://www.w3.org/2002/07/owl#");
pub const DC: Namespace = Namespace::new("http://purl.org/dc/elements/1.1/");
pub const DCTERMS: Namespace = Namespace::new("http://purl.org/dc/terms/");
pub const OSLC: Namespace = Namespace::new("http://open-services.net/ns/core#");
pub const OSLC_CM: Namespace = Namespace::new("http://open-services.net/ns/cm#");
pub const OSLC_AM: Namespace = Namespace::new("http://open-services.net/ns/am#");
pub const OSLC_RM: Namespace = Namespace::new("http://open-services.net/ns/rm#");
pub const OSLC_QM: Namespace = Namespace::new("http://open-services.net/ns/qm#");
pub const OSLC_CM10: Namespace = Namespace::new("http://open-services.net/xmlns/cm/1.0/");
pub const OSLC_RM10: Namespace = Namespace::new("http://open-services.net/xmlns/rm/1.0/");
pub const OSLC_QM10: Namespace = Namespace::new("http://open-services.net/xmlns/qm/1.0/");
pub const JD: Namespace = Namespace::new("http://jazz.net/xmlns/prod/jazz/discovery/1.0/");
pub const JFS: Namespace = Namespace::new("http://jazz.net/xmlns/prod/jazz/jfs/1.0/");
pub const JAZZ_RM: Namespace = Namespace::new("http://jazz.net/ns/rm#");
pub const RM_TYPES: Namespace = Namespace::new("http://www.ibm.com/xmlns/rdm/types/");
pub const RRM_NAV: Namespace = Namespace::new("http://com.ibm.rdm/navigation#");
pub const PROCESS: Namespace = Namespace::new("http://jazz.net/ns/process#");
pub const RQM_PROCESS: Namespace = Namespace::new("http://jazz.net/xmlns/prod/jazz/rqm/process/1.0/");
pub const RTC_CM: Namespace = Namespace::new("http://jazz.net/xmlns/prod/jazz/rtc/cm/1.0/");
pub const RTC_EXT: Namespace = Namespace::new("http://jazz.net/xmlns/prod/jazz/rtc/ext/1.0/");

/// Conventional prefixes for every namespace above
pub const NAMESPACES: &[(&str, Namespace)] = &[
    ("foaf", FOAF),
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("owl", OWL),
    ("dc", DC),
    ("dcterms", DCTERMS),
    ("oslc", OSLC),
    ("oslc_cm", OSLC_CM),
    ("oslc_am", OSLC_AM),
    ("oslc_rm", OSLC_RM),
    ("oslc_qm", OSLC_QM),
    ("oslc_cm10", OSLC_CM10),
    ("oslc_rm10", OSLC_RM10),
    ("oslc_qm10", OSLC_QM10),
    ("jd", JD),
    ("jfs", JFS),
    ("jazz_rm", JAZZ_RM),
    ("rm_types", RM_TYPES),
    ("rrm_nav", RRM_NAV),
    ("process", PROCESS),
    ("rqm_process", RQM_PROCESS),
    ("rtc_cm", RTC_CM),
    ("rtc_ext", RTC_EXT),
];

/// Resolve a namespace by its conventional prefix
pub fn lookup(prefix: &str) -> Option<Namespace> {
    NAMESPACES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, ns)| *ns)
}

/// Format an `oslc.prefix` declaration list for the given prefixes, skipping unknown ones.
///
/// ```
/// use oslc_client::protocol::namespaces::prefix_declarations;
///
/// assert_eq!(
///     prefix_declarations(&["dcterms", "nope"]),
///     "dcterms=<http://purl.org/dc/terms/>"
/// );
/// ```
pub fn prefix_declarations(prefixes: &[&str]) -> String {
    prefixes
        .iter()
        .filter_map(|p| lookup(p).map(|ns| format!("{}=<{}>", p, ns)))
        .collect::<Vec<_>>()
        .join(",")
}
