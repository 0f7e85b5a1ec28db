//! # cs-engine
//!
//! The two-stage core of certsync:
//! - **Matcher/Reconciler** ([`reconcile`]): diffs expected DNS names against
//!   discovered certificates per scope, producing add/remove lists and the
//!   deduplicated set of certificates in use.
//! - **Lifecycle Classifier** ([`lifecycle`]): ranks those certificates by
//!   expiry urgency against a day threshold.
//!
//! Both stages are synchronous pure functions over in-memory collections.
//! The classifier takes `now` as a parameter so results are reproducible.

pub mod coverage;
pub mod lifecycle;
pub mod merge;
pub mod reconcile;

pub use coverage::is_covered;
pub use lifecycle::{Classifier, classify, parse_expiry, parse_threshold};
pub use merge::{CertificateSet, merge_certificates};
pub use reconcile::{Reconciler, ScopeMarkers, reconcile};
