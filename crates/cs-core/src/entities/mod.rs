//! Entity structs for certsync domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so results
//! can be saved between stages and validated against their schema.

mod certificate;
mod classified;
mod diff;
mod dns_record;
mod scan_entry;

pub use certificate::Certificate;
pub use classified::ClassifiedCertificate;
pub use diff::{DiffEntry, RemovalDetails};
pub use dns_record::DnsRecord;
pub use scan_entry::ScanEntry;
