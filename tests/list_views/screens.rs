use setlist::catalog::views::{ALBUMS, MUSICIAN_DOCUMENTS, SONGS, SONG_PERFORMANCES};
use setlist::catalog::Performance;
use setlist::{keys, ListResponse, RawParams, RecordStore, SortDirection, SortState};

use crate::support;

fn performers(response: &ListResponse<Performance>) -> Vec<&str> {
    response
        .page
        .items
        .iter()
        .map(|p| p.data.musician_id.as_str())
        .collect()
}

#[test]
fn songs_default_to_title_order() {
    let store = support::catalog();

    let response = SONGS.run(&store, &RawParams::new(), 10).unwrap();

    let titles: Vec<_> = response.page.items.iter().map(|s| s.data.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Black Dog",
            "Jump",
            "Limelight",
            "Panama",
            "Stairway to Heaven",
            "Tom Sawyer"
        ]
    );
}

#[test]
fn songs_sort_by_album_name() {
    let store = support::catalog();
    let params = RawParams::new().with(keys::ACTION_BUTTON, "Album");

    let response = SONGS.run(&store, &params, 10).unwrap();

    let titles: Vec<_> = response.page.items.iter().map(|s| s.data.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            // 1984
            "Jump",
            "Panama",
            // Led Zeppelin IV
            "Black Dog",
            "Stairway to Heaven",
            // Moving Pictures
            "Limelight",
            "Tom Sawyer"
        ]
    );
}

#[test]
fn songs_filter_by_album() {
    let store = support::catalog();
    let params = RawParams::new().with("AlbumID", "a-2");

    let response = SONGS.run(&store, &params, 10).unwrap();

    assert!(response.filtering);
    assert_eq!(response.page.total_count, 2);
    assert!(response.page.items.iter().all(|s| s.data.album_id == "a-2"));
}

#[test]
fn song_performances_default_to_musician_descending() {
    let store = support::catalog();
    let params = RawParams::new().with("SongID", "s-1");

    let response = SONG_PERFORMANCES.run(&store, &params, 10).unwrap();

    assert_eq!(response.sort, SortState::new("Musician", SortDirection::Descending));
    // Page, Jones, Bonham
    assert_eq!(performers(&response), vec!["m-01", "m-02", "m-03"]);
}

#[test]
fn song_performances_sort_by_fee_then_musician() {
    let store = support::catalog();
    let params = RawParams::new()
        .with("SongID", "s-3")
        .with(keys::ACTION_BUTTON, "Fee Paid");

    let response = SONG_PERFORMANCES.run(&store, &params, 10).unwrap();

    assert_eq!(response.sort, SortState::new("Fee Paid", SortDirection::Ascending));
    // 400 Lee, 400 Lifeson, 450 Peart
    assert_eq!(performers(&response), vec!["m-08", "m-10", "m-09"]);
}

#[test]
fn song_performances_sort_by_instrument_name() {
    let store = support::catalog();
    let params = RawParams::new()
        .with("SongID", "s-1")
        .with(keys::ACTION_BUTTON, "Instrument");

    let response = SONG_PERFORMANCES.run(&store, &params, 10).unwrap();

    // Drums, Guitar, Keyboard
    assert_eq!(performers(&response), vec!["m-03", "m-01", "m-02"]);
}

#[test]
fn song_performances_search_comments() {
    let store = support::catalog();
    let params = RawParams::new().with("SearchString", "SOLO");

    let response = SONG_PERFORMANCES.run(&store, &params, 10).unwrap();

    // Page before Lifeson in descending order.
    assert_eq!(performers(&response), vec!["m-01", "m-10"]);
}

#[test]
fn sort_follows_renamed_reference() {
    let store = support::catalog();
    let params = RawParams::new()
        .with("SongID", "s-1")
        .with(keys::ACTION_BUTTON, "Instrument");
    let mut drums = store
        .get_raw::<setlist::catalog::Instrument>(support::DRUMS)
        .unwrap()
        .unwrap();
    drums.data.name = "Percussion".into();
    store.conditional_write(&drums.data, &drums.version).unwrap();

    let response = SONG_PERFORMANCES.run(&store, &params, 10).unwrap();

    // Guitar, Keyboard, Percussion
    assert_eq!(performers(&response), vec!["m-01", "m-02", "m-03"]);
}

#[test]
fn document_search_matches_mime_type() {
    let store = support::catalog();

    let pdfs = MUSICIAN_DOCUMENTS
        .run(&store, &RawParams::new().with("SearchString", "pdf"), 10)
        .unwrap();
    let files: Vec<_> = pdfs.page.items.iter().map(|d| d.data.file_name.as_str()).collect();
    assert_eq!(files, vec!["contract.pdf", "setlist.PDF"]);

    let images = MUSICIAN_DOCUMENTS
        .run(&store, &RawParams::new().with("SearchString", "image/"), 10)
        .unwrap();
    let files: Vec<_> = images.page.items.iter().map(|d| d.data.file_name.as_str()).collect();
    assert_eq!(files, vec!["headshot.png"]);
}

#[test]
fn documents_filter_by_musician() {
    let store = support::catalog();
    let params = RawParams::new().with("MusicianID", "m-01");

    let response = MUSICIAN_DOCUMENTS.run(&store, &params, 10).unwrap();

    let files: Vec<_> = response.page.items.iter().map(|d| d.data.file_name.as_str()).collect();
    assert_eq!(files, vec!["contract.pdf", "headshot.png"]);
}

#[test]
fn albums_sort_by_price_numerically() {
    let store = support::catalog();
    let params = RawParams::new().with(keys::ACTION_BUTTON, "Price");

    let response = ALBUMS.run(&store, &params, 10).unwrap();

    let names: Vec<_> = response.page.items.iter().map(|a| a.data.name.as_str()).collect();
    assert_eq!(names, vec!["Moving Pictures", "1984", "Led Zeppelin IV"]);
}
