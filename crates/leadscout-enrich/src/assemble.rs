//! Merges fetched listings with resolved emails into result records.

use leadscout_core::{Listing, PageProber, ProgressObserver, ResultRecord, EMAIL_NOT_FOUND};

use crate::email::EmailResolver;

/// Builds one [`ResultRecord`] per listing, in input order.
///
/// A provider-supplied email is kept as-is. Otherwise the website, if any, is
/// probed through `resolver`; a listing without a website gets
/// [`EMAIL_NOT_FOUND`] with no probe at all. Listings are processed one at a
/// time and independently of each other.
pub async fn assemble<P, O>(
    listings: Vec<Listing>,
    resolver: &EmailResolver<'_, P, O>,
    observer: &O,
) -> Vec<ResultRecord>
where
    P: PageProber,
    O: ProgressObserver + ?Sized,
{
    let total = listings.len();
    let mut records = Vec::with_capacity(total);

    for (index, listing) in listings.into_iter().enumerate() {
        observer.listing_started(index, total, &listing);

        let email = match (listing.email.as_deref(), listing.website.as_deref()) {
            (Some(email), _) if !email.trim().is_empty() => email.to_string(),
            (_, Some(website)) => resolver.resolve(website).await,
            (_, None) => EMAIL_NOT_FOUND.to_string(),
        };

        let record = listing.into_record(email);
        observer.listing_resolved(index, total, &record);
        records.push(record);
    }

    records
}
