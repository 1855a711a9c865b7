use semver::Version;

/// Prefix shared by every tag ref
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros and
/// strips a single leading `v`.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1.2.3-rc.1" -> Version(1, 2, 3-rc.1)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let core_len = version.find(['-', '+']).unwrap_or(version.len());
    let (core, rest) = version.split_at(core_len);
    let normalized = match core.split('.').count() {
        1 => format!("{core}.0.0{rest}"),
        2 => format!("{core}.0{rest}"),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Returns the short name of a tag ref, or None for anything that is not a tag.
///
/// Peeled entries (`refs/tags/v1.0.0^{}`) are not tags of their own.
pub fn tag_short_name(ref_name: &str) -> Option<&str> {
    let short = ref_name.strip_prefix(TAG_REF_PREFIX)?;
    if short.is_empty() || short.ends_with("^{}") {
        return None;
    }
    Some(short)
}

/// Find the highest semantic version among a set of ref names.
///
/// Branches, peeled refs and tags that do not parse as a version are
/// skipped. Returns None when nothing parses.
pub fn find_latest_tag<'a, I>(ref_names: I) -> Option<Version>
where
    I: IntoIterator<Item = &'a str>,
{
    ref_names
        .into_iter()
        .filter_map(tag_short_name)
        .filter_map(parse_version)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", Some("1.2.3"))]
    #[case("v1.2.3", Some("1.2.3"))]
    #[case("1", Some("1.0.0"))]
    #[case("v1.2", Some("1.2.0"))]
    #[case("v2.0.0-rc.1", Some("2.0.0-rc.1"))]
    #[case("v1.2-beta", Some("1.2.0-beta"))]
    #[case("1.0.0+build.5", Some("1.0.0+build.5"))]
    #[case("main", None)]
    #[case("release-1.0", None)]
    #[case("vv1.0.0", None)]
    #[case("", None)]
    fn parse_version_returns_expected(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            parse_version(input).map(|v| v.to_string()),
            expected.map(|s| s.to_string())
        );
    }

    #[rstest]
    #[case("refs/tags/v1.0.0", Some("v1.0.0"))]
    #[case("refs/tags/release/2024", Some("release/2024"))]
    #[case("refs/tags/v1.0.0^{}", None)]
    #[case("refs/heads/main", None)]
    #[case("HEAD", None)]
    #[case("refs/tags/", None)]
    fn tag_short_name_returns_expected(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(tag_short_name(input), expected);
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec!["refs/tags/v1.0.0", "refs/tags/v2.0.0", "refs/tags/v1.5.0"], Some("2.0.0"))]
    #[case(vec!["refs/tags/v1.5.0", "refs/tags/v2.0.0", "refs/tags/v1.0.0"], Some("2.0.0"))]
    #[case(vec!["refs/tags/1.9.0", "refs/tags/v1.10.0"], Some("1.10.0"))]
    #[case(vec!["refs/tags/v2.0.0-rc.1", "refs/tags/v1.9.9"], Some("2.0.0-rc.1"))]
    #[case(vec!["refs/tags/v2.0.0-rc.1", "refs/tags/v2.0.0"], Some("2.0.0"))]
    #[case(vec!["refs/tags/v2.0.0-alpha", "refs/tags/v2.0.0-beta"], Some("2.0.0-beta"))]
    #[case(vec!["refs/heads/v9.0.0", "refs/tags/v1.0.0"], Some("1.0.0"))]
    #[case(vec!["refs/tags/latest", "refs/tags/v0.1.0", "refs/heads/main"], Some("0.1.0"))]
    #[case(vec!["refs/tags/latest", "refs/heads/main", "HEAD"], None)]
    #[case(vec!["refs/tags/v3.0.0^{}", "refs/tags/v1.0.0"], Some("1.0.0"))]
    fn find_latest_tag_returns_expected(
        #[case] refs: Vec<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            find_latest_tag(refs).map(|v| v.to_string()),
            expected.map(|s| s.to_string())
        );
    }

    #[test]
    fn find_latest_tag_is_independent_of_input_order() {
        let refs = [
            "refs/tags/v0.9.0",
            "refs/tags/v1.0.0-rc.2",
            "refs/tags/v1.0.0",
            "refs/tags/v1.0.0-rc.10",
            "refs/heads/develop",
            "refs/tags/nightly",
        ];

        let forward = find_latest_tag(refs.iter().copied());
        let backward = find_latest_tag(refs.iter().rev().copied());

        assert_eq!(forward, Version::parse("1.0.0").ok());
        assert_eq!(forward, backward);
    }
}
