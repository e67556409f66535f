use setlist::catalog::views::{GENRES, MUSICIANS};
use setlist::catalog::Genre;
use setlist::{
    keys, InMemoryPreferences, InMemoryRecordStore, PageSizePolicy, PageSizePreferences,
    RawParams, RecordStore, Settings,
};

use crate::support;

fn genres(n: usize) -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new();
    for i in 1..=n {
        store
            .insert(&Genre {
                id: format!("g-{:02}", i),
                name: format!("Genre {:02}", i),
            })
            .unwrap();
    }
    store
}

fn names(page: &setlist::Page<setlist::Versioned<Genre>>) -> Vec<String> {
    page.items.iter().map(|g| g.data.name.clone()).collect()
}

#[test]
fn page_past_the_end_shows_last_page() {
    let store = genres(25);
    let params = RawParams::new().with(keys::PAGE, "5");

    let response = GENRES.run(&store, &params, 10).unwrap();

    assert_eq!(response.page.page_index, 3);
    assert_eq!(response.page.total_pages, 3);
    assert_eq!(response.page.total_count, 25);
    assert_eq!(
        names(&response.page),
        vec!["Genre 21", "Genre 22", "Genre 23", "Genre 24", "Genre 25"]
    );
    assert!(response.page.has_previous());
    assert!(!response.page.has_next());
}

#[test]
fn bad_page_values_mean_first_page() {
    let store = genres(25);

    for page in ["0", "-3", "abc", ""] {
        let params = RawParams::new().with(keys::PAGE, page);
        let response = GENRES.run(&store, &params, 10).unwrap();
        assert_eq!(response.page.page_index, 1, "page={page:?}");
        assert_eq!(names(&response.page)[0], "Genre 01");
    }
}

#[test]
fn empty_collection_has_one_empty_page() {
    let store = genres(0);

    let response = GENRES
        .run(&store, &RawParams::new().with(keys::PAGE, "2"), 10)
        .unwrap();

    assert_eq!(response.page.page_index, 1);
    assert_eq!(response.page.total_pages, 1);
    assert!(response.page.items.is_empty());
    assert!(!response.page.has_next());
}

#[test]
fn same_request_twice_gives_same_page() {
    let store = support::catalog();
    let params = RawParams::new()
        .with(keys::SORT_FIELD, "Phone")
        .with(keys::PAGE, "2");

    let first = MUSICIANS.run(&store, &params, 5).unwrap();
    let second = MUSICIANS.run(&store, &params, 5).unwrap();

    assert_eq!(first, second);
}

#[test]
fn page_size_is_remembered_per_view() {
    let store = genres(25);
    let policy = PageSizePolicy::default();
    let prefs = InMemoryPreferences::new();

    let params = RawParams::new().with(keys::PAGE_SIZE_ID, "20");
    let size = policy.resolve(GENRES.key, params.int(keys::PAGE_SIZE_ID), &prefs);
    let response = GENRES.run(&store, &params, size).unwrap();
    assert_eq!(response.page.items.len(), 20);
    assert_eq!(response.page.total_pages, 2);

    // Next request omits the selector.
    let size = policy.resolve(GENRES.key, None, &prefs);
    assert_eq!(size, 20);
    assert_eq!(prefs.get(GENRES.key), Some(20));
    assert_eq!(policy.resolve(MUSICIANS.key, None, &prefs), 5);

    // Sizes outside the allowed list are ignored.
    assert_eq!(policy.resolve(GENRES.key, Some(7), &prefs), 20);
}

#[test]
fn page_size_options_come_from_settings() {
    let settings = Settings::from_json_str(r#"{"page_sizes":[10,25],"default_page_size":25}"#)
        .unwrap();
    let policy = PageSizePolicy::from_settings(&settings);
    let prefs = InMemoryPreferences::new();

    let size = policy.resolve(GENRES.key, None, &prefs);
    assert_eq!(size, 25);

    let selected: Vec<_> = policy
        .options(size)
        .into_iter()
        .filter(|option| option.selected)
        .map(|option| option.size)
        .collect();
    assert_eq!(selected, vec![25]);
}
