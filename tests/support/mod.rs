//! Shared catalog fixtures for the integration tests.

#![allow(dead_code)]

use setlist::catalog::{
    Album, Genre, Instrument, Musician, MusicianDocument, Performance, Song,
};
use setlist::{InMemoryRecordStore, RecordStore};

pub const GUITAR: &str = "i-1";
pub const BASS: &str = "i-2";
pub const DRUMS: &str = "i-3";
pub const KEYBOARD: &str = "i-4";

pub fn instrument(id: &str, name: &str) -> Instrument {
    Instrument {
        id: id.into(),
        name: name.into(),
    }
}

pub fn musician(
    id: &str,
    first: &str,
    last: &str,
    phone: &str,
    dob: &str,
    instrument_id: &str,
    others: &[&str],
) -> Musician {
    Musician {
        id: id.into(),
        first_name: first.into(),
        middle_name: None,
        last_name: last.into(),
        phone: phone.into(),
        dob: dob.into(),
        sin: format!("1000000{}", &id[2..]),
        instrument_id: instrument_id.into(),
        other_instrument_ids: others.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn musicians() -> Vec<Musician> {
    let mut jones = musician("m-02", "John", "Jones", "4165550102", "1946-01-03", BASS, &[KEYBOARD]);
    jones.middle_name = Some("Paul".into());
    let mut anthony = musician("m-07", "Michael", "Sobolewski", "9055550107", "1954-06-20", BASS, &[]);
    anthony.middle_name = Some("Anthony".into());

    vec![
        musician("m-01", "Jimmy", "Page", "4165550101", "1944-01-09", GUITAR, &[BASS]),
        jones,
        musician("m-03", "John", "Bonham", "4165550103", "1948-05-31", DRUMS, &[]),
        musician("m-04", "Robert", "Plant", "9055550104", "1948-08-20", GUITAR, &[]),
        musician("m-05", "Eddie", "Van Halen", "9055550105", "1955-01-26", GUITAR, &[KEYBOARD]),
        musician("m-06", "Alex", "Van Halen", "9055550106", "1953-05-08", DRUMS, &[]),
        anthony,
        musician("m-08", "Geddy", "Lee", "6475550108", "1953-07-29", BASS, &[KEYBOARD]),
        musician("m-09", "Neil", "Peart", "6475550109", "1952-09-12", DRUMS, &[]),
        musician("m-10", "Alex", "Lifeson", "6475550110", "1953-08-27", GUITAR, &[]),
        musician("m-11", "Keith", "Emerson", "6475550111", "1944-11-02", KEYBOARD, &[]),
        musician("m-12", "Carl", "Palmer", "6475550112", "1950-03-20", DRUMS, &[]),
    ]
}

fn album(id: &str, name: &str, year: &str, price: f64) -> Album {
    Album {
        id: id.into(),
        name: name.into(),
        year_produced: year.into(),
        price,
        genre_id: "g-1".into(),
    }
}

fn song(id: &str, title: &str, recorded: &str, album_id: &str) -> Song {
    Song {
        id: id.into(),
        title: title.into(),
        date_recorded: recorded.into(),
        album_id: album_id.into(),
        genre_id: "g-1".into(),
    }
}

fn performance(
    id: &str,
    song_id: &str,
    musician_id: &str,
    instrument_id: &str,
    fee_paid: f64,
    comments: &str,
) -> Performance {
    Performance {
        id: id.into(),
        comments: comments.into(),
        fee_paid,
        song_id: song_id.into(),
        musician_id: musician_id.into(),
        instrument_id: instrument_id.into(),
    }
}

fn document(id: &str, file_name: &str, mime_type: &str, musician_id: &str) -> MusicianDocument {
    MusicianDocument {
        id: id.into(),
        file_name: file_name.into(),
        mime_type: mime_type.into(),
        musician_id: musician_id.into(),
    }
}

/// A store holding the whole catalog.
pub fn catalog() -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new();

    for instrument in [
        instrument(GUITAR, "Guitar"),
        instrument(BASS, "Bass"),
        instrument(DRUMS, "Drums"),
        instrument(KEYBOARD, "Keyboard"),
    ] {
        store.insert(&instrument).unwrap();
    }

    store
        .insert(&Genre {
            id: "g-1".into(),
            name: "Rock".into(),
        })
        .unwrap();
    store
        .insert(&Genre {
            id: "g-2".into(),
            name: "Jazz".into(),
        })
        .unwrap();

    for musician in musicians() {
        store.insert(&musician).unwrap();
    }

    for album in [
        album("a-1", "Led Zeppelin IV", "1971", 24.99),
        album("a-2", "Moving Pictures", "1981", 19.99),
        album("a-3", "1984", "1984", 21.5),
    ] {
        store.insert(&album).unwrap();
    }

    for song in [
        song("s-1", "Stairway to Heaven", "1971-01-01", "a-1"),
        song("s-2", "Black Dog", "1970-12-01", "a-1"),
        song("s-3", "Tom Sawyer", "1980-10-01", "a-2"),
        song("s-4", "Limelight", "1980-11-01", "a-2"),
        song("s-5", "Jump", "1983-09-01", "a-3"),
        song("s-6", "Panama", "1983-10-01", "a-3"),
    ] {
        store.insert(&song).unwrap();
    }

    for performance in [
        performance("p-1", "s-1", "m-01", GUITAR, 500.0, "Twelve-string intro solo"),
        performance("p-2", "s-1", "m-02", KEYBOARD, 350.0, "Recorder parts on keyboard"),
        performance("p-3", "s-1", "m-03", DRUMS, 300.0, "Drums enter at the last verse"),
        performance("p-4", "s-3", "m-08", BASS, 400.0, "Synth bass pedals"),
        performance("p-5", "s-3", "m-09", DRUMS, 450.0, "Odd time signature"),
        performance("p-6", "s-3", "m-10", GUITAR, 400.0, "Solo in one take"),
    ] {
        store.insert(&performance).unwrap();
    }

    for document in [
        document("d-1", "contract.pdf", "application/pdf", "m-01"),
        document("d-2", "headshot.png", "image/png", "m-01"),
        document(
            "d-3",
            "rider.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "m-05",
        ),
        document("d-4", "setlist.PDF", "application/pdf", "m-08"),
    ] {
        store.insert(&document).unwrap();
    }

    store
}
