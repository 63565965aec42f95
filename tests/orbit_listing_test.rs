mod common;

use common::StubCatalog;
use misrkit::orbit_catalog::OrbitListing;
use misrkit::time::format_catalog_timestamp;
use misrkit::{normalize, MisrKitError, OrbitId, PathId};

fn path(value: i64) -> PathId {
    PathId::new(value).unwrap()
}

#[test]
fn test_listing_queries_each_path_once_in_ascending_order() {
    let catalog = StubCatalog::new(&[(168, &[53_422, 53_655]), (169, &[53_524, 53_757])]);
    let (paths, dates) = normalize(169, 168, "2010-01-31", "2010-01-01").unwrap();

    let listing = OrbitListing::query(&catalog, &paths, &dates).unwrap();

    assert_eq!(catalog.queried_paths(), vec![path(168), path(169)]);

    let calls = catalog.calls.borrow();
    assert_eq!(calls.len(), 2);
    for (_, start, end) in calls.iter() {
        assert_eq!(format_catalog_timestamp(start), "2010-01-01T00:00:00Z");
        assert_eq!(format_catalog_timestamp(end), "2010-01-31T23:59:59Z");
    }

    assert_eq!(listing.num_paths(), 2);
    assert_eq!(listing.count(path(168)), 2);
    assert_eq!(listing.count(path(169)), 2);
    assert_eq!(listing.total_orbits(), 4);
    assert!(!listing.is_empty());
}

#[test]
fn test_adapter_order_is_preserved_per_path() {
    // a catalog answering out of ascending order: the listing must not re-sort
    let catalog = StubCatalog::new(&[(42, &[60_000, 53_422, 59_001])]);
    let (paths, dates) = normalize(42, 42, "2010-01-01", "2013-01-01").unwrap();

    let listing = OrbitListing::query(&catalog, &paths, &dates).unwrap();

    let expected: Vec<OrbitId> = [60_000, 53_422, 59_001]
        .iter()
        .map(|orbit| OrbitId::new(*orbit).unwrap())
        .collect();
    assert_eq!(listing.orbits(path(42)).unwrap(), expected.as_slice());
}

#[test]
fn test_first_failure_aborts_the_whole_listing() {
    let catalog = StubCatalog::new(&[(168, &[53_422]), (169, &[53_524])]).failing_for(169);
    let (paths, dates) = normalize(168, 169, "2010-01-01", "2010-01-31").unwrap();

    let err = OrbitListing::query(&catalog, &paths, &dates).unwrap_err();

    assert!(matches!(
        err,
        MisrKitError::CatalogQuery { path: failed, .. } if failed == path(169)
    ));
    // the successful path was queried first, then the failing one, then nothing
    assert_eq!(catalog.queried_paths(), vec![path(168), path(169)]);
}

#[test]
fn test_failure_on_the_first_path_stops_before_the_second() {
    let catalog = StubCatalog::new(&[(168, &[53_422]), (169, &[53_524])]).failing_for(168);
    let (paths, dates) = normalize(168, 169, "2010-01-01", "2010-01-31").unwrap();

    let err = OrbitListing::query(&catalog, &paths, &dates).unwrap_err();

    assert!(matches!(
        err,
        MisrKitError::CatalogQuery { path: failed, .. } if failed == path(168)
    ));
    assert_eq!(catalog.queried_paths(), vec![path(168)]);
}

#[test]
fn test_paths_without_acquisitions_are_listed_empty() {
    let catalog = StubCatalog::new(&[(168, &[53_422])]);
    let (paths, dates) = normalize(168, 170, "2010-01-01", "2010-01-31").unwrap();

    let listing = OrbitListing::query(&catalog, &paths, &dates).unwrap();

    assert_eq!(listing.num_paths(), 3);
    assert_eq!(listing.count(path(168)), 1);
    assert_eq!(listing.count(path(169)), 0);
    assert_eq!(listing.orbits(path(169)).unwrap(), &[] as &[OrbitId]);
    assert_eq!(listing.total_orbits(), 1);
    assert!(!listing.is_empty());
}

#[test]
fn test_iter_follows_ascending_path_order() {
    let catalog = StubCatalog::new(&[(170, &[53_626]), (168, &[53_422]), (169, &[53_524])]);
    let (paths, dates) = normalize(170, 168, "2010-01-01", "2010-01-31").unwrap();

    let listing = OrbitListing::query(&catalog, &paths, &dates).unwrap();

    let listed: Vec<PathId> = listing.iter().map(|(path, _)| path).collect();
    assert_eq!(listed, vec![path(168), path(169), path(170)]);
}

#[test]
fn test_display_writes_one_line_per_path() {
    let catalog = StubCatalog::new(&[(168, &[53_422, 53_655])]);
    let (paths, dates) = normalize(168, 169, "2010-01-01", "2010-01-31").unwrap();

    let listing = OrbitListing::query(&catalog, &paths, &dates).unwrap();

    assert_eq!(
        listing.to_string(),
        "P168: O053422 O053655 (2 orbits)\nP169: no orbits\n"
    );
}
