//! Business listing and lead records passed between pipeline stages.

use std::fmt;

/// Email value recorded when no address could be resolved for a listing.
pub const EMAIL_NOT_FOUND: &str = "Not found";

/// Marker the page reader replies with when a page carries no email address.
pub const NOTHING_HERE: &str = "nothing here";

/// A cleaned maps-search string. Its contents are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One business as returned by the maps-search provider.
///
/// Text fields the provider left blank are `None`; the provider never
/// distinguishes "no phone" from "phone unknown", so neither do we.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub title: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
}

impl Listing {
    /// Builds the output record for this listing with the given email.
    #[must_use]
    pub fn into_record(self, email: String) -> ResultRecord {
        ResultRecord {
            title: self.title,
            phone: self.phone,
            address: self.address,
            website: self.website,
            email,
            rating: self.rating,
            reviews: self.reviews,
        }
    }
}

/// Final per-business lead row. `email` is never empty: it holds either a
/// resolved address or [`EMAIL_NOT_FOUND`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub title: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub email: String,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
}

/// Result of asking the page reader for an email on a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found(String),
    NothingHere,
    /// The probe call itself failed; carries the error message.
    Failed(String),
}

impl ProbeOutcome {
    /// Classifies a raw page-reader reply.
    ///
    /// Blank replies and replies containing the `nothing here` marker (in any
    /// case) are negatives; anything else is taken verbatim as the email.
    #[must_use]
    pub fn from_reply(reply: &str) -> Self {
        let reply = reply.trim();
        if reply.is_empty() || reply.to_lowercase().contains(NOTHING_HERE) {
            Self::NothingHere
        } else {
            Self::Found(reply.to_string())
        }
    }
}

/// Why pagination stopped before the provider ran out of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchHalt {
    pub offset: usize,
    pub reason: String,
}

/// Listings accumulated by the fetcher, plus the page error that cut
/// pagination short, if any. A halt never discards earlier pages.
#[derive(Debug, Clone, Default)]
pub struct FetchedListings {
    pub listings: Vec<Listing>,
    pub halted: Option<FetchHalt>,
}
