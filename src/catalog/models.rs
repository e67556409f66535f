//! Catalog records.

use serde::{Deserialize, Serialize};
use setlist_macros::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "instruments", label = "Instrument")]
pub struct Instrument {
    #[record(id)]
    pub id: String,
    #[record(editable, label = "Instrument")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "genres", label = "Genre")]
pub struct Genre {
    #[record(id)]
    pub id: String,
    #[record(editable)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "albums", label = "Album")]
pub struct Album {
    #[record(id)]
    pub id: String,
    #[record(editable)]
    pub name: String,
    #[record(editable)]
    pub year_produced: String,
    #[record(editable, format = "currency")]
    pub price: f64,
    #[record(editable, label = "Genre", reference = "genres", display = "name")]
    pub genre_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "songs", label = "Song")]
pub struct Song {
    #[record(id)]
    pub id: String,
    #[record(editable)]
    pub title: String,
    /// ISO `YYYY-MM-DD`.
    #[record(editable, format = "date")]
    pub date_recorded: String,
    #[record(editable, label = "Album", reference = "albums", display = "name")]
    pub album_id: String,
    #[record(editable, label = "Genre", reference = "genres", display = "name")]
    pub genre_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "musicians", label = "Musician")]
pub struct Musician {
    #[record(id)]
    pub id: String,
    #[record(editable)]
    pub first_name: String,
    #[record(editable)]
    pub middle_name: Option<String>,
    #[record(editable)]
    pub last_name: String,
    /// Digits only.
    #[record(editable, format = "phone")]
    pub phone: String,
    /// ISO `YYYY-MM-DD`.
    #[record(editable, label = "DOB", format = "date")]
    pub dob: String,
    #[record(editable, unique, label = "SIN")]
    pub sin: String,
    #[record(editable, label = "Primary Instrument", reference = "instruments", display = "name")]
    pub instrument_id: String,
    /// Instruments played besides the primary one.
    #[serde(default)]
    pub other_instrument_ids: Vec<String>,
}

impl Musician {
    /// "First M. Last", or "First Last" without a middle name.
    pub fn formal_name(&self) -> String {
        match self.middle_name.as_deref().and_then(|m| m.chars().next()) {
            Some(initial) => format!(
                "{} {}. {}",
                self.first_name,
                initial.to_uppercase(),
                self.last_name
            ),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "performances", label = "Performance")]
pub struct Performance {
    #[record(id)]
    pub id: String,
    #[record(editable)]
    pub comments: String,
    #[record(editable, format = "currency")]
    pub fee_paid: f64,
    #[record(editable, label = "Song", reference = "songs", display = "title")]
    pub song_id: String,
    #[record(editable, label = "Musician", reference = "musicians", display = "last_name")]
    pub musician_id: String,
    #[record(editable, label = "Instrument", reference = "instruments", display = "name")]
    pub instrument_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "musician_documents", label = "Musician Document")]
pub struct MusicianDocument {
    #[record(id)]
    pub id: String,
    #[record(editable)]
    pub file_name: String,
    pub mime_type: String,
    #[record(editable, label = "Musician", reference = "musicians", display = "last_name")]
    pub musician_id: String,
}
