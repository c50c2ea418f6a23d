//! Email discovery across a business website's most likely pages.

use leadscout_core::{PageProber, ProbeOutcome, ProgressObserver, EMAIL_NOT_FOUND};
use url::Url;

/// Pages probed for an email, in order. The empty path is the website as given.
pub const CANDIDATE_PATHS: [&str; 5] = ["", "/contact", "/about", "/contact-us", "/about-us"];

/// Resolves each candidate path against `website`.
///
/// Sub-paths are URL-joined, so an absolute path replaces whatever path the
/// website already had. A website without a scheme (`www.biz.example`) is
/// joined as `https://`; one that still does not parse only yields itself.
#[must_use]
pub fn candidate_urls(website: &str) -> Vec<String> {
    let base = match site_root(website) {
        Ok(base) => Some(base),
        Err(e) => {
            tracing::warn!(
                website,
                error = %e,
                "website is not a valid URL; probing it as-is only"
            );
            None
        }
    };

    CANDIDATE_PATHS
        .iter()
        .filter_map(|path| {
            if path.is_empty() {
                return Some(website.to_string());
            }
            base.as_ref()
                .and_then(|b| b.join(path).ok())
                .map(String::from)
        })
        .collect()
}

/// Parses `website` as a base URL, assuming `https` when no scheme is given.
fn site_root(website: &str) -> Result<Url, url::ParseError> {
    match Url::parse(website) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        // `host:port` parses with the host as the scheme.
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{website}"))
        }
        Err(e) => Err(e),
    }
}

/// Probes a website's candidate pages until one yields an email.
pub struct EmailResolver<'a, P, O: ?Sized> {
    prober: &'a P,
    observer: &'a O,
}

impl<'a, P, O> EmailResolver<'a, P, O>
where
    P: PageProber,
    O: ProgressObserver + ?Sized,
{
    #[must_use]
    pub fn new(prober: &'a P, observer: &'a O) -> Self {
        Self { prober, observer }
    }

    /// Returns the first email found on the website's candidate pages, or
    /// [`EMAIL_NOT_FOUND`] when every page comes back empty.
    ///
    /// A failed probe is reported to the observer and the next page is tried;
    /// it is never returned as the email.
    pub async fn resolve(&self, website: &str) -> String {
        for url in candidate_urls(website) {
            match self.prober.probe_page(&url).await {
                ProbeOutcome::Found(email) => {
                    tracing::debug!(url = %url, email = %email, "email found");
                    return email;
                }
                ProbeOutcome::NothingHere => {}
                ProbeOutcome::Failed(error) => self.observer.probe_failed(&url, &error),
            }
        }

        EMAIL_NOT_FOUND.to_string()
    }
}

#[cfg(test)]
mod tests {
    use leadscout_core::NoopObserver;

    use super::*;
    use crate::test_support::{FakeProber, RecordingObserver};

    #[test]
    fn candidate_urls_for_bare_domain() {
        assert_eq!(
            candidate_urls("https://biz.example"),
            vec![
                "https://biz.example",
                "https://biz.example/contact",
                "https://biz.example/about",
                "https://biz.example/contact-us",
                "https://biz.example/about-us",
            ]
        );
    }

    #[test]
    fn candidate_urls_replace_existing_path() {
        let urls = candidate_urls("https://biz.example/clinics/bandra?ref=maps");
        assert_eq!(urls[0], "https://biz.example/clinics/bandra?ref=maps");
        assert_eq!(urls[1], "https://biz.example/contact");
        assert_eq!(urls[4], "https://biz.example/about-us");
    }

    #[test]
    fn candidate_urls_assume_https_without_scheme() {
        assert_eq!(
            candidate_urls("www.biz.example"),
            vec![
                "www.biz.example",
                "https://www.biz.example/contact",
                "https://www.biz.example/about",
                "https://www.biz.example/contact-us",
                "https://www.biz.example/about-us",
            ]
        );
    }

    #[test]
    fn candidate_urls_assume_https_for_host_and_port() {
        let urls = candidate_urls("biz.example:8443");
        assert_eq!(urls.len(), CANDIDATE_PATHS.len());
        assert_eq!(urls[0], "biz.example:8443");
        assert_eq!(urls[1], "https://biz.example:8443/contact");
    }

    #[test]
    fn candidate_urls_for_unparseable_website_is_website_only() {
        assert_eq!(candidate_urls("http://"), vec!["http://"]);
        assert_eq!(candidate_urls("not a website"), vec!["not a website"]);
    }

    #[tokio::test]
    async fn returns_first_hit_and_stops_probing() {
        let prober = FakeProber::new().with("https://biz.example/contact", "jane@biz.example");
        let resolver = EmailResolver::new(&prober, &NoopObserver);

        let email = resolver.resolve("https://biz.example").await;

        assert_eq!(email, "jane@biz.example");
        assert_eq!(
            prober.calls(),
            vec!["https://biz.example", "https://biz.example/contact"]
        );
    }

    #[tokio::test]
    async fn exhausting_all_paths_is_not_found() {
        let prober = FakeProber::new();
        let resolver = EmailResolver::new(&prober, &NoopObserver);

        let email = resolver.resolve("https://biz.example").await;

        assert_eq!(email, "Not found");
        assert_eq!(prober.calls().len(), CANDIDATE_PATHS.len());
    }

    #[tokio::test]
    async fn failed_probe_is_skipped_and_reported() {
        let prober = FakeProber::new()
            .failing("https://biz.example")
            .with("https://biz.example/about", "hello@biz.example");
        let observer = RecordingObserver::default();
        let resolver = EmailResolver::new(&prober, &observer);

        let email = resolver.resolve("https://biz.example").await;

        assert_eq!(email, "hello@biz.example");
        assert_eq!(observer.probe_failures(), vec!["https://biz.example"]);
        assert_eq!(prober.calls().len(), 3);
    }

    #[tokio::test]
    async fn all_probes_failing_is_not_found() {
        let prober = FakeProber::new().fail_everything();
        let observer = RecordingObserver::default();
        let resolver = EmailResolver::new(&prober, &observer);

        let email = resolver.resolve("https://biz.example").await;

        assert_eq!(email, "Not found");
        assert_eq!(observer.probe_failures().len(), 5);
    }
}
