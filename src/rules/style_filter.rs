//! Allow-list filtering for inline `style` attributes
//!
//! Pasted markup drags along platform styling noise: `mso-*` and `webkit-*`
//! leaks, layout defaults, transparent backgrounds, injected font stacks.
//! The filter walks the `;`-delimited declaration list and keeps only a
//! fixed set of semantic properties. It never adds declarations; it only
//! subtracts. Several platform rules share this logic with slightly
//! different allow-lists, so it is implemented once and parameterized.

/// Declarations whose lower-cased form contains any of these markers are
/// always dropped, regardless of the allow-list in effect.
const LEAK_MARKERS: &[&str] = &[
    "mso-",
    "webkit-",
    "font-variant:",
    "vertical-align:",
    "white-space:pre",
    "white-space:pre-wrap",
    "font-family:arial,sans-serif",
    "font-family:arial",
];

/// Property prefixes retained by every rule that filters styles
pub const BASE_ALLOWED: &[&str] = &[
    "color:",
    "background-color:",
    "font-weight:",
    "font-style:",
    "text-decoration:",
    "font-size:",
    "text-align:",
];

/// Reduced allow-list used when rewriting vendor-styled inline spans
pub const SPAN_ALLOWED: &[&str] = &[
    "color:",
    "background-color:",
    "font-weight:",
    "font-style:",
    "text-decoration:",
];

/// Catch-all allow-list: base set plus `font-family`
pub const GENERAL_ALLOWED: &[&str] = &[
    "color:",
    "background-color:",
    "font-weight:",
    "font-style:",
    "text-decoration:",
    "font-size:",
    "font-family:",
    "text-align:",
];

/// A configured style filter
///
/// `allowed` holds the property prefixes that may survive; `also_remove`
/// holds extra rule-specific markers dropped on top of [`LEAK_MARKERS`]
/// (e.g. a brand font token a particular exporter always injects).
#[derive(Debug, Clone, Copy)]
pub struct StyleFilter {
    allowed: &'static [&'static str],
    also_remove: &'static [&'static str],
}

impl StyleFilter {
    /// Filter with the given allow-list and no extra removals
    #[must_use]
    pub const fn new(allowed: &'static [&'static str]) -> Self {
        Self {
            allowed,
            also_remove: &[],
        }
    }

    /// Filter with the given allow-list plus rule-specific removal markers
    #[must_use]
    pub const fn with_removals(
        allowed: &'static [&'static str],
        also_remove: &'static [&'static str],
    ) -> Self {
        Self {
            allowed,
            also_remove,
        }
    }

    /// Apply the filter to a raw `style` attribute value
    ///
    /// Comparison happens on a lower-cased copy of each declaration; the
    /// retained output preserves the original casing. Returns the rejoined
    /// `;`-separated remainder, or an empty string when nothing survives;
    /// the caller must then omit the `style` attribute entirely rather
    /// than emit `style=""`.
    #[must_use]
    pub fn apply(&self, style: &str) -> String {
        let kept: Vec<&str> = style
            .split(';')
            .filter_map(|segment| {
                let trimmed = segment.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let lowered = trimmed.to_ascii_lowercase();
                if LEAK_MARKERS
                    .iter()
                    .chain(self.also_remove.iter())
                    .any(|marker| lowered.contains(marker))
                {
                    return None;
                }
                if !self.allowed.iter().any(|prefix| lowered.starts_with(prefix)) {
                    return None;
                }
                // Transparent backgrounds are platform defaults, not styling
                if lowered.starts_with("background-color:") && lowered.contains("transparent") {
                    return None;
                }
                Some(trimmed)
            })
            .collect();
        kept.join(";")
    }
}
