//! Conversion from raw SearchAPI places to [`leadscout_core::Listing`].

use leadscout_core::Listing;

use crate::types::{RawNumber, SearchApiLocalResult};

/// Normalizes a raw [`SearchApiLocalResult`] into a [`Listing`].
///
/// Blank text fields become `None`. Unparseable ratings and review counts are
/// dropped rather than defaulted to zero.
#[must_use]
pub fn normalize_listing(raw: SearchApiLocalResult) -> Listing {
    Listing {
        title: raw.title.map(|t| t.trim().to_string()).unwrap_or_default(),
        phone: non_blank(raw.phone),
        address: non_blank(raw.address),
        website: non_blank(raw.website),
        email: non_blank(raw.email),
        rating: raw.rating.as_ref().and_then(RawNumber::as_f64),
        reviews: raw.reviews.as_ref().and_then(RawNumber::as_u64),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
