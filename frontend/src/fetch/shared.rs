//! Optional cross-component cache for content that many sections read.
//!
//! Entries are keyed by a fixed [`CacheKey`]. A request for a key that is
//! already in flight (and started within the dedup window) joins that
//! request, and a stored value is reused until the key's refresh interval
//! has elapsed. Failures never evict a stored value.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Duration, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::api::ApiError;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    HeroSection,
    NavigationItems,
    FooterSection,
    ServiceCards,
    MetricBoxes,
    FaqSection,
    FaqItems,
    SocialLinks,
    SocialSection,
    BenefitsSection,
    WhyChooseUsSection,
    CountryData,
}

impl CacheKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::HeroSection => "hero-section",
            CacheKey::NavigationItems => "navigation-items",
            CacheKey::FooterSection => "footer-section",
            CacheKey::ServiceCards => "service-cards",
            CacheKey::MetricBoxes => "metric-boxes",
            CacheKey::FaqSection => "faq-section",
            CacheKey::FaqItems => "faq-items",
            CacheKey::SocialLinks => "social-links",
            CacheKey::SocialSection => "social-section",
            CacheKey::BenefitsSection => "benefits-section",
            CacheKey::WhyChooseUsSection => "why-choose-us",
            CacheKey::CountryData => "country-data",
        }
    }

    /// How long a stored value is served before it is fetched again.
    pub fn refresh_interval(&self) -> Duration {
        match self {
            CacheKey::HeroSection | CacheKey::MetricBoxes => Duration::minutes(5),
            CacheKey::ServiceCards
            | CacheKey::FaqSection
            | CacheKey::FaqItems
            | CacheKey::BenefitsSection
            | CacheKey::WhyChooseUsSection => Duration::minutes(10),
            CacheKey::SocialLinks | CacheKey::SocialSection => Duration::minutes(30),
            CacheKey::NavigationItems | CacheKey::FooterSection | CacheKey::CountryData => {
                Duration::hours(1)
            }
        }
    }
}

type Value = Rc<dyn Any>;
type InFlight = Shared<LocalBoxFuture<'static, Result<Value, ApiError>>>;

#[derive(Default)]
struct Entry {
    value: Option<(Value, DateTime<Utc>)>,
    in_flight: Option<(InFlight, DateTime<Utc>)>,
}

pub struct SharedCache {
    entries: RefCell<HashMap<&'static str, Entry>>,
    dedup_window: Duration,
}

thread_local! {
    static GLOBAL: Rc<SharedCache> = Rc::new(SharedCache::new(
        Duration::seconds(config::CACHE_DEDUP_WINDOW_SECS),
    ));
}

/// The page-wide cache instance.
pub fn global() -> Rc<SharedCache> {
    GLOBAL.with(Rc::clone)
}

impl SharedCache {
    pub fn new(dedup_window: Duration) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            dedup_window,
        }
    }

    pub fn fetch<T, F, Fut>(
        self: &Rc<Self>,
        key: CacheKey,
        fetch: F,
    ) -> impl Future<Output = Result<Rc<T>, ApiError>> + 'static
    where
        T: 'static,
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        self.fetch_at(key, Utc::now(), fetch)
    }

    /// [`SharedCache::fetch`] with an explicit clock reading.
    pub fn fetch_at<T, F, Fut>(
        self: &Rc<Self>,
        key: CacheKey,
        now: DateTime<Utc>,
        fetch: F,
    ) -> impl Future<Output = Result<Rc<T>, ApiError>> + 'static
    where
        T: 'static,
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let request = self.lookup::<T, F, Fut>(key, now, fetch);
        async move {
            let value = match request {
                Lookup::Fresh(value) => value,
                Lookup::Pending(request) => request.await?,
            };
            value.downcast::<T>().map_err(|_| {
                ApiError::Decode(format!("cached value for {} has another type", key.as_str()))
            })
        }
    }

    fn lookup<T, F, Fut>(self: &Rc<Self>, key: CacheKey, now: DateTime<Utc>, fetch: F) -> Lookup
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        if let Some(found) = self.reusable(key, now) {
            return found;
        }

        // The endpoint runs with no borrow held so it may read the cache itself.
        let pending = fetch();
        let cache = Rc::downgrade(self);
        let request: InFlight = async move {
            let result = pending.await.map(|value| Rc::new(value) as Value);
            record(&cache, key, now, &result);
            result
        }
        .boxed_local()
        .shared();
        self.entries
            .borrow_mut()
            .entry(key.as_str())
            .or_default()
            .in_flight = Some((request.clone(), now));
        Lookup::Pending(request)
    }

    /// A fresh stored value or a joinable in-flight request for `key`.
    fn reusable(&self, key: CacheKey, now: DateTime<Utc>) -> Option<Lookup> {
        let entries = self.entries.borrow();
        let entry = entries.get(key.as_str())?;

        if let Some((value, fetched_at)) = &entry.value {
            if now - *fetched_at < key.refresh_interval() {
                log::debug!("cache hit for {}", key.as_str());
                return Some(Lookup::Fresh(Rc::clone(value)));
            }
        }
        if let Some((request, started_at)) = &entry.in_flight {
            if now - *started_at < self.dedup_window {
                log::debug!("joining in-flight request for {}", key.as_str());
                return Some(Lookup::Pending(request.clone()));
            }
        }
        None
    }

    /// Whether a read of `key` at `now` would go to the network.
    pub fn refresh_due(&self, key: CacheKey, now: DateTime<Utc>) -> bool {
        self.reusable(key, now).is_none()
    }

    /// Forgets one key so the next read goes to the network.
    pub fn invalidate(&self, key: CacheKey) {
        self.entries.borrow_mut().remove(key.as_str());
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn contains(&self, key: CacheKey) -> bool {
        self.entries
            .borrow()
            .get(key.as_str())
            .map_or(false, |entry| entry.value.is_some())
    }
}

enum Lookup {
    Fresh(Value),
    Pending(InFlight),
}

fn record(
    cache: &Weak<SharedCache>,
    key: CacheKey,
    started_at: DateTime<Utc>,
    result: &Result<Value, ApiError>,
) {
    let Some(cache) = cache.upgrade() else {
        return;
    };
    let mut entries = cache.entries.borrow_mut();
    let Some(entry) = entries.get_mut(key.as_str()) else {
        // Invalidated while the request was running.
        return;
    };
    let is_current = entry
        .in_flight
        .as_ref()
        .map_or(false, |(_, at)| *at == started_at);
    if is_current {
        entry.in_flight = None;
    }
    match result {
        Ok(value) => {
            let newer_stored = entry
                .value
                .as_ref()
                .map_or(false, |(_, fetched_at)| *fetched_at > started_at);
            if !newer_stored {
                entry.value = Some((Rc::clone(value), started_at));
            }
        }
        Err(e) => log::error!("refreshing {} failed: {}", key.as_str(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn cache() -> Rc<SharedCache> {
        Rc::new(SharedCache::new(Duration::seconds(60)))
    }

    fn counted(
        calls: &Rc<Cell<u32>>,
        value: &'static str,
    ) -> impl FnOnce() -> futures::future::Ready<Result<String, ApiError>> {
        let calls = Rc::clone(calls);
        move || {
            calls.set(calls.get() + 1);
            futures::future::ready(Ok(value.to_string()))
        }
    }

    #[test]
    fn concurrent_identical_keys_share_one_request() {
        let cache = cache();
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel::<String>();
        let counter = Rc::clone(&calls);

        let first = cache.fetch_at(CacheKey::HeroSection, at(0), move || {
            counter.set(counter.get() + 1);
            async move { rx.await.map_err(|_| ApiError::Network("dropped".into())) }
        });
        let second = cache.fetch_at(CacheKey::HeroSection, at(5), counted(&calls, "other"));
        assert_eq!(calls.get(), 1);

        tx.send("hero".to_string()).unwrap();
        let (a, b) = block_on(futures::future::join(first, second));
        assert_eq!(a.unwrap().as_str(), "hero");
        assert_eq!(b.unwrap().as_str(), "hero");
        assert!(cache.contains(CacheKey::HeroSection));
    }

    #[test]
    fn stored_value_is_reused_until_refresh_interval() {
        let cache = cache();
        let calls = Rc::new(Cell::new(0));

        let v1 = block_on(cache.fetch_at::<String, _, _>(CacheKey::HeroSection, at(0), counted(&calls, "v1")));
        assert_eq!(v1.unwrap().as_str(), "v1");

        let cached = block_on(cache.fetch_at::<String, _, _>(CacheKey::HeroSection, at(299), counted(&calls, "v2")));
        assert_eq!(cached.unwrap().as_str(), "v1");
        assert_eq!(calls.get(), 1);

        let refreshed = block_on(cache.fetch_at::<String, _, _>(CacheKey::HeroSection, at(300), counted(&calls, "v2")));
        assert_eq!(refreshed.unwrap().as_str(), "v2");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn keys_refresh_on_their_own_schedule() {
        assert_eq!(CacheKey::HeroSection.refresh_interval(), Duration::minutes(5));
        assert_eq!(CacheKey::NavigationItems.refresh_interval(), Duration::hours(1));
        assert!(CacheKey::FooterSection.refresh_interval() > CacheKey::ServiceCards.refresh_interval());
    }

    #[test]
    fn failure_keeps_stored_value() {
        let cache = cache();
        let calls = Rc::new(Cell::new(0));
        block_on(cache.fetch_at::<String, _, _>(CacheKey::FaqItems, at(0), counted(&calls, "faq"))).unwrap();

        let failed = block_on(cache.fetch_at::<String, _, _>(CacheKey::FaqItems, at(601), || async {
            Err(ApiError::Timeout)
        }));
        assert_eq!(failed.unwrap_err(), ApiError::Timeout);
        assert!(cache.contains(CacheKey::FaqItems));
    }

    #[test]
    fn invalidate_forces_network_read() {
        let cache = cache();
        let calls = Rc::new(Cell::new(0));
        block_on(cache.fetch_at::<String, _, _>(CacheKey::FooterSection, at(0), counted(&calls, "a"))).unwrap();
        cache.invalidate(CacheKey::FooterSection);
        assert!(!cache.contains(CacheKey::FooterSection));

        let b = block_on(cache.fetch_at::<String, _, _>(CacheKey::FooterSection, at(1), counted(&calls, "b")));
        assert_eq!(b.unwrap().as_str(), "b");
        assert_eq!(calls.get(), 2);

        cache.clear();
        assert!(!cache.contains(CacheKey::FooterSection));
    }

    #[test]
    fn value_older_than_interval_is_due_and_refetched() {
        let cache = cache();
        let calls = Rc::new(Cell::new(0));
        assert!(cache.refresh_due(CacheKey::MetricBoxes, at(0)));

        block_on(cache.fetch_at::<String, _, _>(CacheKey::MetricBoxes, at(0), counted(&calls, "old"))).unwrap();
        assert!(!cache.refresh_due(CacheKey::MetricBoxes, at(299)));
        assert!(cache.refresh_due(CacheKey::MetricBoxes, at(300)));

        let fresh = block_on(cache.fetch_at::<String, _, _>(CacheKey::MetricBoxes, at(300), counted(&calls, "new")));
        assert_eq!(fresh.unwrap().as_str(), "new");
        assert_eq!(calls.get(), 2);
        assert!(!cache.refresh_due(CacheKey::MetricBoxes, at(301)));
    }

    #[test]
    fn pending_request_is_not_due_again() {
        let cache = cache();
        let (_tx, rx) = oneshot::channel::<String>();
        let _pending = cache.fetch_at(CacheKey::CountryData, at(0), move || async move {
            rx.await.map_err(|_| ApiError::Network("dropped".into()))
        });
        assert!(!cache.refresh_due(CacheKey::CountryData, at(30)));
        assert!(cache.refresh_due(CacheKey::CountryData, at(61)));
    }

    #[test]
    fn endpoint_may_read_the_cache_while_starting() {
        let cache = cache();
        let inner = Rc::clone(&cache);
        let seen = block_on(cache.fetch_at(CacheKey::SocialSection, at(0), move || {
            let had_value = inner.contains(CacheKey::SocialSection);
            futures::future::ready(Ok::<_, ApiError>(had_value))
        }));
        assert_eq!(seen.map(|v| *v), Ok(false));
        assert!(cache.contains(CacheKey::SocialSection));
    }

    #[test]
    fn type_mismatch_is_a_decode_error() {
        let cache = cache();
        let calls = Rc::new(Cell::new(0));
        block_on(cache.fetch_at::<String, _, _>(CacheKey::MetricBoxes, at(0), counted(&calls, "m"))).unwrap();

        let wrong = block_on(cache.fetch_at::<u32, _, _>(CacheKey::MetricBoxes, at(1), || async { Ok(1u32) }));
        assert!(matches!(wrong, Err(ApiError::Decode(_))));
    }
}
