//! Movie entity models and the search filter DTO.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use cinescope_core::types::DbId;

// ---------------------------------------------------------------------------
// Listing row
// ---------------------------------------------------------------------------

/// A movie as returned by listing and search queries.
///
/// `genres` is aggregated from the junction table and `poster` comes from
/// the one-to-one posters table, so one row here is one fully-assembled
/// listing entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub name: String,
    pub date: Option<i32>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub minute: Option<i32>,
    pub rating: Option<f32>,
    pub genres: Vec<String>,
    pub poster: Option<String>,
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// A movie with every related collection attached. Serializes flat: the
/// summary fields sit at the top level next to the relation arrays.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub actors: Vec<ActorCredit>,
    pub crew: Vec<CrewCredit>,
    pub themes: Vec<String>,
    pub studios: Vec<String>,
    pub languages: Vec<MovieLanguage>,
    pub countries: Vec<String>,
    pub releases: Vec<MovieRelease>,
}

/// An actor appearing in a movie, with the role they played.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorCredit {
    pub id: DbId,
    pub name: Option<String>,
    pub role: String,
}

/// A crew member and their job on the movie.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CrewCredit {
    pub role: String,
    pub name: String,
}

/// One language entry (spoken, original, dubbed, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieLanguage {
    #[serde(rename = "type")]
    pub kind: String,
    pub language: String,
}

/// A dated release of the movie in one country.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieRelease {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub rating: Option<String>,
    pub country: String,
}

// ---------------------------------------------------------------------------
// Search filter
// ---------------------------------------------------------------------------

/// Filter parameters for movie search queries.
///
/// Every field is optional and inactive filters contribute no SQL. Year
/// bounds are active only when positive; rating and duration bounds only
/// when non-negative. The genre list is conjunctive: a movie must carry
/// every named genre to match.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub name: Option<String>,
    pub genres: Vec<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_rating: Option<f32>,
    pub max_rating: Option<f32>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub actor_id: Option<DbId>,
    pub actor_name: Option<String>,
}

impl MovieFilter {
    /// Drop values that would build no predicate, so two parameter sets
    /// selecting the same rows compare equal (and share a cache key).
    pub fn normalized(&self) -> MovieFilter {
        MovieFilter {
            name: self.name.clone().filter(|n| !n.is_empty()),
            genres: self
                .genres
                .iter()
                .filter(|g| !g.is_empty())
                .cloned()
                .collect(),
            min_year: self.min_year.filter(|y| *y > 0),
            max_year: self.max_year.filter(|y| *y > 0),
            min_rating: self.min_rating.filter(|r| *r >= 0.0),
            max_rating: self.max_rating.filter(|r| *r >= 0.0),
            min_duration: self.min_duration.filter(|d| *d >= 0),
            max_duration: self.max_duration.filter(|d| *d >= 0),
            actor_id: self.actor_id,
            actor_name: self.actor_name.clone().filter(|n| !n.is_empty()),
        }
    }
}
