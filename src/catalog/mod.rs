//! The music catalog: musicians, instruments, albums, songs, genres,
//! performances, and musician documents, with one list view per screen.

mod models;
mod summary;
pub mod views;

pub use models::{Album, Genre, Instrument, Musician, MusicianDocument, Performance, Song};
pub use summary::{performance_summary, PerformanceSummary};
