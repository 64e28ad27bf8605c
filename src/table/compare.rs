//! Value comparison for sorting.

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

use crate::data::{Field, Record, ValueKind};

use super::sort::SortKey;

/// Locale-aware string ordering using the Unicode Collation Algorithm.
///
/// Uses the CLDR root collation with non-ignorable punctuation, so `@` and
/// `_` sort before digits and letters, accents are secondary differences and
/// lowercase precedes uppercase. Strings that collate equal fall back to
/// byte order.
pub struct TextCollator {
    collator: Collator,
}

impl TextCollator {
    pub fn new() -> Self {
        Self {
            collator: Collator::new(Tailoring::Cldr(Locale::Root), false, true),
        }
    }

    /// Compare two strings in ascending order.
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.collator.collate(a, b)
    }
}

impl Default for TextCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two records by a known field in ascending order.
pub fn compare_field(
    collator: &mut TextCollator,
    a: &Record,
    b: &Record,
    field: Field,
) -> Ordering {
    match field.value_kind() {
        ValueKind::Numeric => a.id.cmp(&b.id),
        ValueKind::Text => collator.compare(&a.text(field), &b.text(field)),
    }
}

/// Compare two records by any sort key in ascending order.
pub fn compare_by_key(
    collator: &mut TextCollator,
    a: &Record,
    b: &Record,
    key: &SortKey,
) -> Ordering {
    match key {
        SortKey::Field(field) => compare_field(collator, a, b, *field),
        SortKey::Other(name) => collator.compare(&a.extra_text(name), &b.extra_text(name)),
    }
}
