//! Supported League of Legends API regions.

/// Region codes accepted by the API, in display order.
pub const REGIONS: [&str; 5] = ["BR", "EUNE", "EUW", "NA", "TR"];

/// Region used when the caller does not pick one.
pub const DEFAULT_REGION: &str = "NA";

/// Lookup over the fixed set of region codes.
pub struct RegionRegistry;

impl RegionRegistry {
    /// Returns true iff `code` is exactly one of [`REGIONS`].
    ///
    /// The comparison is case-sensitive and does no trimming, so `"na"` and
    /// `" NA"` are both rejected.
    pub fn is_valid_region(code: &str) -> bool {
        REGIONS.contains(&code)
    }

    pub fn regions() -> &'static [&'static str] {
        &REGIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("BR")]
    #[case("EUNE")]
    #[case("EUW")]
    #[case("NA")]
    #[case("TR")]
    fn accepts_known_regions(#[case] code: &str) {
        assert!(RegionRegistry::is_valid_region(code));
    }

    #[rstest]
    #[case("na")]
    #[case("Euw")]
    #[case("")]
    #[case(" NA")]
    #[case("NA ")]
    #[case("KR")]
    #[case("na1")]
    #[case("EUNE,EUW")]
    fn rejects_everything_else(#[case] code: &str) {
        assert!(!RegionRegistry::is_valid_region(code));
    }

    #[test]
    fn default_region_is_supported() {
        assert!(RegionRegistry::is_valid_region(DEFAULT_REGION));
    }

    #[test]
    fn regions_keep_declaration_order() {
        assert_eq!(RegionRegistry::regions(), &["BR", "EUNE", "EUW", "NA", "TR"]);
    }

    proptest! {
        #[test]
        fn only_listed_codes_are_valid(code in ".*") {
            prop_assert_eq!(
                RegionRegistry::is_valid_region(&code),
                REGIONS.contains(&code.as_str())
            );
        }

        #[test]
        fn lookup_is_idempotent(code in "[A-Za-z]{0,5}") {
            let first = RegionRegistry::is_valid_region(&code);
            for _ in 0..3 {
                prop_assert_eq!(RegionRegistry::is_valid_region(&code), first);
            }
        }
    }
}
