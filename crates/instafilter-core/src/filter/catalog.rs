//! Static filter table.

use serde::Serialize;

/// Parameter kinds a filter may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParamKind {
    Intensity,
    Center,
    Radius,
    Angle,
    Scale,
}

impl ParamKind {
    /// All kinds, in derivation order.
    pub const ALL: [ParamKind; 5] = [
        ParamKind::Intensity,
        ParamKind::Center,
        ParamKind::Radius,
        ParamKind::Angle,
        ParamKind::Scale,
    ];
}

/// Static descriptor of a named filter and the parameter kinds it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    /// Filter identifier, e.g. `"CISepiaTone"`.
    pub name: &'static str,
    /// Parameter kinds the filter accepts. Anything else must not be set.
    pub accepts: &'static [ParamKind],
}

impl FilterSpec {
    pub const fn new(name: &'static str, accepts: &'static [ParamKind]) -> Self {
        Self { name, accepts }
    }

    /// Check whether this filter accepts the given parameter kind.
    #[inline]
    pub fn accepts(&self, kind: ParamKind) -> bool {
        self.accepts.contains(&kind)
    }
}

/// Built-in filters, in menu order.
pub const FILTERS: &[FilterSpec] = &[
    FilterSpec::new("CISepiaTone", &[ParamKind::Intensity]),
    FilterSpec::new(
        "CIVignetteEffect",
        &[ParamKind::Center, ParamKind::Intensity, ParamKind::Radius],
    ),
    FilterSpec::new("CIPhotoEffectInstant", &[]),
    FilterSpec::new("CIPhotoEffectProcess", &[]),
    FilterSpec::new("CITwirlDistortion", &[ParamKind::Angle, ParamKind::Radius]),
    FilterSpec::new(
        "CIBumpDistortion",
        &[ParamKind::Center, ParamKind::Radius, ParamKind::Scale],
    ),
    FilterSpec::new(
        "CICircleSplashDistortion",
        &[ParamKind::Center, ParamKind::Radius],
    ),
    FilterSpec::new("CIBloom", &[ParamKind::Radius, ParamKind::Intensity]),
];

/// Filter selected when a pipeline starts.
pub const DEFAULT_FILTER: &FilterSpec = &FILTERS[0];

/// Look up a filter by name in a catalog.
pub fn find_filter<'a>(catalog: &'a [FilterSpec], name: &str) -> Option<&'a FilterSpec> {
    catalog.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_filter_is_sepia() {
        assert_eq!(DEFAULT_FILTER.name, "CISepiaTone");
        assert!(DEFAULT_FILTER.accepts(ParamKind::Intensity));
    }

    #[test]
    fn test_catalog_has_eight_unique_names() {
        let names: HashSet<_> = FILTERS.iter().map(|f| f.name).collect();
        assert_eq!(FILTERS.len(), 8);
        assert_eq!(names.len(), FILTERS.len());
    }

    #[test]
    fn test_catalog_accepted_sets() {
        let expect = |name: &str, kinds: &[ParamKind]| {
            let spec = find_filter(FILTERS, name).unwrap();
            for kind in ParamKind::ALL {
                assert_eq!(
                    spec.accepts(kind),
                    kinds.contains(&kind),
                    "{} / {:?}",
                    name,
                    kind
                );
            }
        };

        expect("CISepiaTone", &[ParamKind::Intensity]);
        expect(
            "CIVignetteEffect",
            &[ParamKind::Center, ParamKind::Intensity, ParamKind::Radius],
        );
        expect("CIPhotoEffectInstant", &[]);
        expect("CIPhotoEffectProcess", &[]);
        expect("CITwirlDistortion", &[ParamKind::Angle, ParamKind::Radius]);
        expect(
            "CIBumpDistortion",
            &[ParamKind::Center, ParamKind::Radius, ParamKind::Scale],
        );
        expect(
            "CICircleSplashDistortion",
            &[ParamKind::Center, ParamKind::Radius],
        );
        expect("CIBloom", &[ParamKind::Radius, ParamKind::Intensity]);
    }

    #[test]
    fn test_find_filter_unknown() {
        assert!(find_filter(FILTERS, "nonexistent").is_none());
        // Lookup is case-sensitive, like the engine's identifiers
        assert!(find_filter(FILTERS, "cibloom").is_none());
    }
}
