use std::sync::LazyLock;

use super::dictionary::CSS_NAMED_COLOURS;
use crate::color::{LinearRgb, Oklab, Oklch, Srgb};

static CSS_MATCHER: LazyLock<NamedColourMatcher> = LazyLock::new(|| {
    NamedColourMatcher::new(
        CSS_NAMED_COLOURS
            .iter()
            .map(|&(name, bytes)| (name, Srgb::from_bytes(bytes))),
    )
});

/// Nearest-neighbour search over a fixed set of named colours.
///
/// Entries are converted to Oklab once at construction. Matching is a linear
/// scan with Euclidean Oklab distance; when several entries are equally
/// close the one that came first wins.
#[derive(Debug, Clone)]
pub struct NamedColourMatcher {
    names: Vec<&'static str>,
    oklab: Vec<Oklab>,
}

impl NamedColourMatcher {
    /// Build a matcher from `(name, colour)` pairs, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty. A matcher with nothing to match against
    /// is a programming error.
    pub fn new(entries: impl IntoIterator<Item = (&'static str, Srgb)>) -> Self {
        let (names, oklab): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .map(|(name, rgb)| (name, Oklab::from(LinearRgb::from(rgb))))
            .unzip();
        assert!(!names.is_empty(), "named colour dictionary must not be empty");
        Self { names, oklab }
    }

    /// The shared matcher over the 148 CSS named colours.
    pub fn css() -> &'static NamedColourMatcher {
        &CSS_MATCHER
    }

    /// Name of the closest entry together with its Oklab distance.
    pub fn nearest_with_distance(&self, colour: &Oklch) -> (&'static str, f64) {
        let target = Oklab::from(*colour);

        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;
        for (i, &candidate) in self.oklab.iter().enumerate() {
            let dist = target.distance_squared(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (self.names[best_idx], best_dist.sqrt())
    }

    pub fn nearest(&self, colour: &Oklch) -> &'static str {
        self.nearest_with_distance(colour).0
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; construction rejects empty dictionaries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Closest CSS named colour.
///
/// ```
/// use colour_engine::{nearest_name, Oklch, Srgb};
///
/// assert_eq!(nearest_name(&Oklch::from(Srgb::from_u8(250, 0, 5))), "red");
/// ```
pub fn nearest_name(colour: &Oklch) -> &'static str {
    NamedColourMatcher::css().nearest(colour)
}

/// sRGB value of a CSS named colour, case-insensitive.
pub fn lookup_name(name: &str) -> Option<Srgb> {
    let name = name.trim().to_ascii_lowercase();
    CSS_NAMED_COLOURS
        .binary_search_by(|(candidate, _)| (*candidate).cmp(name.as_str()))
        .ok()
        .map(|idx| Srgb::from_bytes(CSS_NAMED_COLOURS[idx].1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches() {
        for &(name, bytes) in CSS_NAMED_COLOURS.iter() {
            let colour = Oklch::from(Srgb::from_bytes(bytes));
            let (found, dist) = NamedColourMatcher::css().nearest_with_distance(&colour);
            assert!(dist < 1e-5, "{name} matched {found} at {dist}");
            // Duplicates resolve to the first spelling in dictionary order.
            let first = CSS_NAMED_COLOURS
                .iter()
                .find(|(_, other)| *other == bytes)
                .map(|(n, _)| *n);
            assert_eq!(Some(found), first);
        }
    }

    #[test]
    fn test_first_minimum_wins() {
        let cyan = Oklch::from(Srgb::from_u8(0, 255, 255));
        assert_eq!(nearest_name(&cyan), "aqua");

        let magenta = Oklch::from(Srgb::from_u8(255, 0, 255));
        assert_eq!(nearest_name(&magenta), "fuchsia");

        let grey = Oklch::from(Srgb::from_u8(128, 128, 128));
        assert_eq!(nearest_name(&grey), "gray");
    }

    #[test]
    fn test_nearest_is_stable() {
        let colour = Oklch::new(0.7, 0.15, 200.0);
        let first = nearest_name(&colour);
        for _ in 0..10 {
            assert_eq!(nearest_name(&colour), first);
        }
    }

    #[test]
    fn test_out_of_gamut_colour_still_matches() {
        let vivid = Oklch::new(0.6, 0.4, 140.0);
        assert!(!nearest_name(&vivid).is_empty());
    }

    #[test]
    fn test_custom_dictionary() {
        let matcher = NamedColourMatcher::new([
            ("dark", Srgb::from_u8(0, 0, 0)),
            ("light", Srgb::from_u8(255, 255, 255)),
        ]);
        assert_eq!(matcher.len(), 2);
        assert_eq!(matcher.nearest(&Oklch::achromatic(0.3)), "dark");
        assert_eq!(matcher.nearest(&Oklch::achromatic(0.8)), "light");
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_empty_dictionary_panics() {
        let _ = NamedColourMatcher::new(std::iter::empty());
    }

    #[test]
    fn test_lookup_name() {
        assert_eq!(lookup_name("RebeccaPurple"), Some(Srgb::from_u8(0x66, 0x33, 0x99)));
        assert_eq!(lookup_name("notacolour"), None);
    }
}
