//! List view definitions for each catalog screen.

use super::models::{Album, Genre, Musician, MusicianDocument, Performance, Song};
use crate::query::{
    CriteriaBuilder, FilterParam, ListView, SearchParam, SortDirection, SortKey, SortOption,
};
use crate::record::FieldPath;

const LAST_NAME: FieldPath = FieldPath::field("last_name");
const FIRST_NAME: FieldPath = FieldPath::field("first_name");

pub const MUSICIANS: ListView<Musician> = ListView::new(
    "musicians",
    &[
        SortOption::new(
            "Musician",
            &[SortKey::follow(LAST_NAME), SortKey::follow(FIRST_NAME)],
        ),
        SortOption::new(
            "Phone",
            &[
                SortKey::follow(FieldPath::field("phone")),
                SortKey::ascending(LAST_NAME),
                SortKey::ascending(FIRST_NAME),
            ],
        ),
        // Ascending age is the most recent date of birth first.
        SortOption::new(
            "Age",
            &[
                SortKey::reverse(FieldPath::field("dob")),
                SortKey::ascending(LAST_NAME),
                SortKey::ascending(FIRST_NAME),
            ],
        ),
        SortOption::new(
            "Primary Instrument",
            &[
                SortKey::follow(FieldPath::reference("instrument_id", "instruments", "name")),
                SortKey::ascending(LAST_NAME),
                SortKey::ascending(FIRST_NAME),
            ],
        ),
    ],
    "Musician",
    SortDirection::Ascending,
    CriteriaBuilder::new(
        &[
            SearchParam::new("SearchName", &["last_name", "first_name"]),
            SearchParam::new("SearchPhone", &["phone"]),
        ],
        &[
            FilterParam::key("InstrumentID", "instrument_id"),
            FilterParam::key("OtherInstrumentID", "other_instrument_ids"),
        ],
    ),
);

pub const SONGS: ListView<Song> = ListView::new(
    "songs",
    &[
        SortOption::new(
            "Title",
            &[
                SortKey::follow(FieldPath::field("title")),
                SortKey::ascending(FieldPath::field("date_recorded")),
            ],
        ),
        SortOption::new(
            "Date Recorded",
            &[
                SortKey::follow(FieldPath::field("date_recorded")),
                SortKey::ascending(FieldPath::field("title")),
            ],
        ),
        SortOption::new(
            "Album",
            &[
                SortKey::follow(FieldPath::reference("album_id", "albums", "name")),
                SortKey::ascending(FieldPath::field("title")),
            ],
        ),
    ],
    "Title",
    SortDirection::Ascending,
    CriteriaBuilder::new(
        &[SearchParam::new("SearchTitle", &["title"])],
        &[
            FilterParam::key("AlbumID", "album_id"),
            FilterParam::key("GenreID", "genre_id"),
        ],
    ),
);

pub const ALBUMS: ListView<Album> = ListView::new(
    "albums",
    &[
        SortOption::new(
            "Name",
            &[
                SortKey::follow(FieldPath::field("name")),
                SortKey::ascending(FieldPath::field("year_produced")),
            ],
        ),
        SortOption::new(
            "Year Produced",
            &[
                SortKey::follow(FieldPath::field("year_produced")),
                SortKey::ascending(FieldPath::field("name")),
            ],
        ),
        SortOption::new(
            "Price",
            &[
                SortKey::follow(FieldPath::field("price")),
                SortKey::ascending(FieldPath::field("name")),
            ],
        ),
    ],
    "Name",
    SortDirection::Ascending,
    CriteriaBuilder::new(
        &[SearchParam::new("SearchName", &["name"])],
        &[FilterParam::key("GenreID", "genre_id")],
    ),
);

pub const GENRES: ListView<Genre> = ListView::new(
    "genres",
    &[SortOption::new(
        "Name",
        &[
            SortKey::follow(FieldPath::field("name")),
            SortKey::ascending(FieldPath::field("id")),
        ],
    )],
    "Name",
    SortDirection::Ascending,
    CriteriaBuilder::new(&[SearchParam::new("SearchName", &["name"])], &[]),
);

const PERFORMER_LAST: FieldPath = FieldPath::reference("musician_id", "musicians", "last_name");
const PERFORMER_FIRST: FieldPath = FieldPath::reference("musician_id", "musicians", "first_name");

/// Performances of songs, usually opened pre-filtered to one song.
pub const SONG_PERFORMANCES: ListView<Performance> = ListView::new(
    "song_performances",
    &[
        SortOption::new(
            "Musician",
            &[SortKey::follow(PERFORMER_LAST), SortKey::follow(PERFORMER_FIRST)],
        ),
        SortOption::new(
            "Instrument",
            &[
                SortKey::follow(FieldPath::reference("instrument_id", "instruments", "name")),
                SortKey::ascending(PERFORMER_LAST),
                SortKey::ascending(PERFORMER_FIRST),
            ],
        ),
        SortOption::new(
            "Fee Paid",
            &[
                SortKey::follow(FieldPath::field("fee_paid")),
                SortKey::ascending(PERFORMER_LAST),
                SortKey::ascending(PERFORMER_FIRST),
            ],
        ),
    ],
    "Musician",
    SortDirection::Descending,
    CriteriaBuilder::new(
        &[SearchParam::new("SearchString", &["comments"])],
        &[
            FilterParam::key("SongID", "song_id"),
            FilterParam::key("MusicianID", "musician_id"),
            FilterParam::key("InstrumentID", "instrument_id"),
        ],
    ),
);

/// Uploaded documents; the search box also matches the MIME type.
pub const MUSICIAN_DOCUMENTS: ListView<MusicianDocument> = ListView::new(
    "musician_documents",
    &[SortOption::new(
        "File Name",
        &[
            SortKey::follow(FieldPath::field("file_name")),
            SortKey::ascending(FieldPath::field("mime_type")),
        ],
    )],
    "File Name",
    SortDirection::Ascending,
    CriteriaBuilder::new(
        &[SearchParam::new("SearchString", &["file_name", "mime_type"])],
        &[FilterParam::key("MusicianID", "musician_id")],
    ),
);
