//! Load pipeline integration tests.
//!
//! These tests drive the full pipeline through the public API: dynamic
//! source, static fallback, and the eligibility filter, with in-memory
//! collaborators scripting provider and binder state.

use std::sync::Arc;

use contextual_cards::{
    CardLoader, CardRow, ContentDescriptor, HostContext, MemoryCardSource, MemoryPackageSource,
    MemoryProviderResolver, MemoryResourceBinder, StaticCardCatalog, PATH_BATTERY,
    PATH_DATA_USAGE, PATH_DEVICE_INFO, STATIC_CARD_COUNT,
};
use url::Url;

const HOST: &str = "com.test.host";
const HOST_VERSION: i64 = 37;
const AUTHORITY: &str = "com.test.cards";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn card_uri(path: &str) -> Url {
    Url::parse(&format!("content://{AUTHORITY}/{path}")).unwrap()
}

/// Context where the host's static-card authority and `AUTHORITY` both
/// resolve, and the given dynamic URIs bind cleanly.
fn context(source: MemoryCardSource, bindable: &[Url]) -> Arc<HostContext> {
    let mut binder = MemoryResourceBinder::new();
    for path in [PATH_DATA_USAGE, PATH_BATTERY, PATH_DEVICE_INFO] {
        binder.register(
            StaticCardCatalog::card_uri(HOST, path),
            ContentDescriptor::new(),
        );
    }
    for uri in bindable {
        binder.register(uri.clone(), ContentDescriptor::new());
    }

    Arc::new(
        HostContext::new(HOST)
            .with_source(source)
            .with_providers(
                MemoryProviderResolver::new()
                    .with_authority(AUTHORITY)
                    .with_authority(format!("{HOST}.cards")),
            )
            .with_binder(binder)
            .with_packages(MemoryPackageSource::new().with_package(HOST, HOST_VERSION)),
    )
}

// =============================================================================
// Static Fallback
// =============================================================================

/// An empty source yields exactly the three static cards, in fixed order.
#[test]
fn test_empty_source_returns_static_cards() {
    init_logging();
    let loader = CardLoader::new(context(MemoryCardSource::empty(), &[]));

    let cards = loader.load().unwrap();

    assert_eq!(cards.len(), STATIC_CARD_COUNT);
    let names: Vec<_> = cards.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec![PATH_DATA_USAGE, PATH_BATTERY, PATH_DEVICE_INFO]);
    for card in &cards {
        assert!(!card.is_custom());
        assert!(!card.is_half_width());
        assert_eq!(card.ranking_score(), 0.0);
        assert_eq!(card.package_name(), HOST);
        assert_eq!(card.app_version(), HOST_VERSION);
    }
}

/// Fallback cards are filtered like any others: with no provider serving
/// them, the load comes back empty rather than erroring.
#[test]
fn test_static_cards_also_face_the_filter() {
    init_logging();
    let context = Arc::new(
        HostContext::new(HOST)
            .with_source(MemoryCardSource::empty())
            .with_packages(MemoryPackageSource::new().with_package(HOST, HOST_VERSION)),
    );
    let loader = CardLoader::new(context);

    assert!(loader.load().unwrap().is_empty());
}

/// A failed host version lookup stamps -1, never an error.
#[test]
fn test_fallback_with_unknown_host_version() {
    init_logging();
    let context = Arc::new(
        HostContext::new(HOST)
            .with_source(MemoryCardSource::empty())
            .with_providers(MemoryProviderResolver::new().with_authority(format!("{HOST}.cards")))
            .with_binder({
                let mut binder = MemoryResourceBinder::new();
                for path in [PATH_DATA_USAGE, PATH_BATTERY, PATH_DEVICE_INFO] {
                    binder.register(
                        StaticCardCatalog::card_uri(HOST, path),
                        ContentDescriptor::new(),
                    );
                }
                binder
            }),
    );
    let loader = CardLoader::new(context);

    let cards = loader.load().unwrap();
    assert_eq!(cards.len(), STATIC_CARD_COUNT);
    assert!(cards.iter().all(|c| c.app_version() == -1));
}

// =============================================================================
// Dynamic Candidates
// =============================================================================

/// One resolvable candidate and one unresolvable one: exactly the valid
/// card survives.
#[test]
fn test_mixed_validity_keeps_only_valid_candidate() {
    init_logging();
    let valid = card_uri("wifi");
    let source = MemoryCardSource::new(vec![
        CardRow::resource_backed(valid.as_str(), "wifi", "com.test"),
        CardRow::resource_backed("content://com.gone/x", "x", "com.test"),
    ]);
    let loader = CardLoader::new(context(source, &[valid.clone()]));

    let cards = loader.load().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].uri(), Some(&valid));
}

/// Custom rows never reach the result.
#[test]
fn test_custom_rows_never_loaded() {
    init_logging();
    let valid = card_uri("wifi");
    let source = MemoryCardSource::new(vec![
        CardRow::custom("tips", "com.test"),
        CardRow::resource_backed(valid.as_str(), "wifi", "com.test"),
        CardRow::custom("more_tips", "com.test"),
    ]);
    let loader = CardLoader::new(context(source, &[valid]));

    let cards = loader.load().unwrap();
    assert_eq!(cards.len(), 1);
    assert!(cards.iter().all(|c| !c.is_custom()));
}

/// Candidate order survives filtering untouched.
#[test]
fn test_relative_order_preserved() {
    init_logging();
    let first = card_uri("wifi");
    let second = card_uri("bluetooth");
    let third = card_uri("storage");
    let source = MemoryCardSource::new(vec![
        CardRow::resource_backed(first.as_str(), "wifi", "com.test").with_ranking_score(0.1),
        CardRow::resource_backed("content://com.gone/x", "x", "com.test").with_ranking_score(0.9),
        CardRow::resource_backed(second.as_str(), "bluetooth", "com.test").with_ranking_score(0.5),
        CardRow::resource_backed(third.as_str(), "storage", "com.test").with_ranking_score(0.3),
    ]);
    let loader = CardLoader::new(context(source, &[first, second, third]));

    let cards = loader.load().unwrap();
    let names: Vec<_> = cards.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["wifi", "bluetooth", "storage"]);
    // Ranking score is passthrough; no reordering by it.
    assert_eq!(cards[0].ranking_score(), 0.1);
}

// =============================================================================
// Resource Lifecycle
// =============================================================================

/// Each eligibility check acquires and releases exactly one provider
/// handle, pass or fail.
#[test]
fn test_provider_handles_never_leak() {
    init_logging();
    let valid = card_uri("wifi");
    let unbindable = card_uri("broken");
    let source = MemoryCardSource::new(vec![
        CardRow::resource_backed(valid.as_str(), "wifi", "com.test"),
        CardRow::resource_backed(unbindable.as_str(), "broken", "com.test"),
    ]);

    let providers = MemoryProviderResolver::new().with_authority(AUTHORITY);
    let context = Arc::new(
        HostContext::new(HOST)
            .with_source(source)
            .with_providers(providers.clone())
            .with_binder(
                MemoryResourceBinder::new().with_content(valid.clone(), ContentDescriptor::new()),
            )
            .with_packages(MemoryPackageSource::new().with_package(HOST, HOST_VERSION)),
    );
    let loader = CardLoader::new(context);

    let cards = loader.load().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(providers.acquired(AUTHORITY), 2);
    assert_eq!(providers.released(AUTHORITY), 2);
}

/// The source cursor closes on success, on empty, and on error paths.
#[test]
fn test_cursor_closed_on_every_path() {
    init_logging();

    let empty = MemoryCardSource::empty();
    CardLoader::new(context(empty.clone(), &[])).load().unwrap();
    assert_eq!(empty.closes(), 1);

    let valid = card_uri("wifi");
    let full = MemoryCardSource::new(vec![CardRow::resource_backed(
        valid.as_str(),
        "wifi",
        "com.test",
    )]);
    CardLoader::new(context(full.clone(), &[valid]))
        .load()
        .unwrap();
    assert_eq!(full.closes(), 1);

    let failing = MemoryCardSource::new(vec![CardRow::custom("tips", "com.test")])
        .with_step_failure_at(0);
    assert!(CardLoader::new(context(failing.clone(), &[])).load().is_err());
    assert_eq!(failing.closes(), 1);
}
