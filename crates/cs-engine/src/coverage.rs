//! Coverage predicate between an expected DNS name and a certificate common name.

/// Whether a certificate issued for `common_name` covers `dns_name`.
///
/// Comparison is case-insensitive. An exact match covers. A wildcard
/// `*.domain` covers any name that ends with `domain` and has strictly more
/// labels than `domain`, so `*.example.com` covers `foo.example.com` and
/// `foo.bar.example.com` but not `example.com` itself.
///
/// The suffix test is a plain string suffix, not a label boundary check.
#[must_use]
pub fn is_covered(dns_name: &str, common_name: &str) -> bool {
    let dns_name = dns_name.to_lowercase();
    let common_name = common_name.to_lowercase();

    if common_name == dns_name {
        return true;
    }

    match common_name.strip_prefix("*.") {
        Some(domain) => {
            dns_name.ends_with(domain) && label_count(&dns_name) > label_count(domain)
        }
        None => false,
    }
}

fn label_count(name: &str) -> usize {
    name.split('.').count()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::is_covered;

    #[rstest]
    #[case("example.com", "example.com", true)]
    #[case("Example.COM", "example.com", true)]
    #[case("example.com", "*.example.com", false)]
    #[case("foo.example.com", "*.example.com", true)]
    #[case("foo.bar.example.com", "*.example.com", true)]
    #[case("FOO.Example.com", "*.EXAMPLE.com", true)]
    #[case("foo.example.org", "*.example.com", false)]
    #[case("foo.example.com", "bar.example.com", false)]
    #[case("foo.example.com", "*.foo.example.com", false)]
    #[case("*.example.com", "*.example.com", true)]
    fn coverage_cases(#[case] dns_name: &str, #[case] common_name: &str, #[case] expected: bool) {
        assert_eq!(is_covered(dns_name, common_name), expected);
    }

    #[test]
    fn wildcard_needs_an_extra_label() {
        // Same label count as the wildcard domain: never covered.
        assert!(!is_covered("fooexample.com", "*.example.com"));
    }

    #[test]
    fn wildcard_suffix_is_not_label_aligned() {
        assert!(is_covered("a.fooexample.com", "*.example.com"));
    }

    #[test]
    fn bare_asterisk_is_not_a_wildcard() {
        assert!(!is_covered("foo.example.com", "*example.com"));
        assert!(!is_covered("foo.example.com", "*"));
    }
}
