//! Serde roundtrip and JsonSchema validation tests for entity and result types.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use cs_core::Scoped;
use cs_core::entities::*;
use cs_core::enums::*;
use cs_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn scan_entry() -> ScanEntry {
    ScanEntry {
        common_name: "old.example.com".into(),
        serial_number: Some("S9".into()),
        scan_name: "Public perimeter".into(),
        expires_on: "2026-11-01".into(),
        status: "Valid".into(),
        ip_or_fqdn: "203.0.113.7".into(),
    }
}

fn certificate() -> Certificate {
    Certificate {
        serial_number: "S1".into(),
        common_name: "*.example.com".into(),
        scan_name: "Public perimeter".into(),
        expires_on: "2026-10-28".into(),
        status: "Valid".into(),
        ip_or_fqdn: "198.51.100.4".into(),
        dns_names: vec!["a.example.com".into(), "b.example.com".into()],
    }
}

roundtrip_and_validate!(
    dns_record_roundtrip,
    DnsRecord,
    DnsRecord::new("a.example.com", Scope::Public)
);

roundtrip_and_validate!(scan_entry_roundtrip, ScanEntry, scan_entry());

roundtrip_and_validate!(
    scan_entry_without_serial_roundtrip,
    ScanEntry,
    ScanEntry {
        serial_number: None,
        ..scan_entry()
    }
);

roundtrip_and_validate!(certificate_roundtrip, Certificate, certificate());

roundtrip_and_validate!(
    add_entry_roundtrip,
    DiffEntry,
    DiffEntry::add(Scope::Private, "db.corp.internal")
);

roundtrip_and_validate!(
    remove_entry_roundtrip,
    DiffEntry,
    DiffEntry::remove(Scope::Public, &scan_entry())
);

roundtrip_and_validate!(
    classified_roundtrip,
    ClassifiedCertificate,
    ClassifiedCertificate {
        certificate: certificate(),
        expiry_date: Utc.with_ymd_and_hms(2026, 10, 28, 0, 0, 0).unwrap(),
        days_until_expiry: 10,
        is_expired: false,
        is_expiring_soon: false,
    }
);

roundtrip_and_validate!(
    reconciliation_roundtrip,
    ReconciliationResult,
    ReconciliationResult {
        add: Scoped::new(vec![DiffEntry::add(Scope::Public, "b.example.com")], vec![]),
        remove: Scoped::new(vec![DiffEntry::remove(Scope::Public, &scan_entry())], vec![]),
        valid_certificates: Scoped::new(vec![certificate()], vec![]),
        unclassified: vec![ScanEntry {
            scan_name: "Adhoc sweep".into(),
            ..scan_entry()
        }],
    }
);

roundtrip_and_validate!(
    report_roundtrip,
    ClassificationReport,
    ClassificationReport::new(
        Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap(),
        30,
        vec![ClassifiedCertificate {
            certificate: certificate(),
            expiry_date: Utc.with_ymd_and_hms(2026, 10, 20, 0, 0, 0).unwrap(),
            days_until_expiry: 2,
            is_expired: false,
            is_expiring_soon: true,
        }],
    )
);

// --- Shape checks ---

#[test]
fn add_entry_omits_details() {
    let value = serde_json::to_value(DiffEntry::add(Scope::Public, "b.example.com")).unwrap();
    assert_eq!(value["action"], "ADD");
    assert_eq!(value["scope"], "public");
    assert!(value.get("details").is_none());
}

#[test]
fn classified_certificate_flattens_certificate_fields() {
    let classified = ClassifiedCertificate {
        certificate: certificate(),
        expiry_date: Utc.with_ymd_and_hms(2026, 10, 28, 0, 0, 0).unwrap(),
        days_until_expiry: 10,
        is_expired: false,
        is_expiring_soon: false,
    };
    let value = serde_json::to_value(&classified).unwrap();
    assert_eq!(value["serial_number"], "S1");
    assert_eq!(value["days_until_expiry"], 10);
    assert!(value.get("certificate").is_none());
}

#[test]
fn report_counts_expired_and_expiring_soon() {
    let base = ClassifiedCertificate {
        certificate: certificate(),
        expiry_date: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
        days_until_expiry: -17,
        is_expired: true,
        is_expiring_soon: false,
    };
    let soon = ClassifiedCertificate {
        days_until_expiry: 1,
        is_expired: false,
        is_expiring_soon: true,
        ..base.clone()
    };
    let report = ClassificationReport::new(
        Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap(),
        30,
        vec![base, soon],
    );
    assert_eq!(report.expired, 1);
    assert_eq!(report.expiring_soon, 1);
}

#[test]
fn changes_iterate_adds_before_removes() {
    let result = ReconciliationResult {
        add: Scoped::new(
            vec![DiffEntry::add(Scope::Public, "p.example.com")],
            vec![DiffEntry::add(Scope::Private, "q.corp.internal")],
        ),
        remove: Scoped::new(vec![DiffEntry::remove(Scope::Public, &scan_entry())], vec![]),
        ..ReconciliationResult::default()
    };
    let names: Vec<&str> = result.changes().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["p.example.com", "q.corp.internal", "old.example.com"]);
    assert_eq!(result.summary().add_private, 1);
    assert_eq!(result.summary().remove_public, 1);
}

// --- Schema rejection tests ---

#[test]
fn schema_rejects_invalid_scope() {
    let schema = serde_json::to_value(schema_for!(DnsRecord)).unwrap();
    let invalid = serde_json::json!({ "name": "a.example.com", "scope": "internal" });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject unknown scope value");
}

#[test]
fn schema_rejects_certificate_without_serial() {
    let schema = serde_json::to_value(schema_for!(Certificate)).unwrap();
    let invalid = serde_json::json!({
        "common_name": "*.example.com",
        "scan_name": "Public perimeter",
        "expires_on": "2026-10-28",
        "status": "Valid",
        "ip_or_fqdn": "198.51.100.4",
        "dns_names": []
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(
        !errors.is_empty(),
        "Should reject certificate without 'serial_number'"
    );
}

// --- Saved output ---

#[test]
fn saved_reconciliation_json_deserializes() {
    let saved = serde_json::json!({
        "add": {
            "public": [{ "action": "ADD", "scope": "public", "name": "new.example.com" }]
        },
        "remove": {
            "public": [{
                "action": "REMOVE",
                "scope": "public",
                "name": "old.example.com",
                "details": {
                    "ip_or_fqdn": "203.0.113.7",
                    "expires_on": "2026-11-01",
                    "status": "Valid"
                }
            }],
            "private": []
        },
        "valid_certificates": {
            "private": [{
                "serial_number": "S1",
                "common_name": "*.example.com",
                "scan_name": "Public perimeter",
                "expires_on": "2026-10-28",
                "status": "Valid",
                "ip_or_fqdn": "198.51.100.4",
                "dns_names": ["a.example.com", "b.example.com"]
            }]
        }
    });

    let result: ReconciliationResult = serde_json::from_value(saved).unwrap();
    assert_eq!(result.add.public, [DiffEntry::add(Scope::Public, "new.example.com")]);
    assert!(result.add.private.is_empty());
    assert_eq!(result.remove.public, [DiffEntry::remove(Scope::Public, &scan_entry())]);
    assert!(result.valid_certificates.public.is_empty());
    assert_eq!(result.valid_certificates.private, [certificate()]);
    assert!(result.unclassified.is_empty());
}
