//! Catalog records: users, people, planets and favorites.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Person {
    pub id: i64,
    pub name: String,
    /// Centimetres.
    pub height: Option<i64>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

/// Public view of a user. Password and active flag stay in the database.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
}

/// A user row as written by the seeding step.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: i64,
    pub email: String,
    /// Stored as given; there is no authentication layer.
    pub password: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: &'static str,
    pub height: Option<i64>,
    pub gender: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: &'static str,
    pub terrain: Option<&'static str>,
    pub population: Option<i64>,
}

/// What a favorite points at. Exactly one of the two nullable columns is set per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    Person(i64),
}

impl FavoriteTarget {
    /// `(planet_id, people_id)` column values.
    pub fn columns(self) -> (Option<i64>, Option<i64>) {
        match self {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::Person(id) => (None, Some(id)),
        }
    }

    /// None when both or neither column is set.
    pub fn from_columns(planet_id: Option<i64>, people_id: Option<i64>) -> Option<Self> {
        match (planet_id, people_id) {
            (Some(id), None) => Some(FavoriteTarget::Planet(id)),
            (None, Some(id)) => Some(FavoriteTarget::Person(id)),
            _ => None,
        }
    }

    pub fn kind(self) -> FavoriteKind {
        match self {
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
            FavoriteTarget::Person(_) => FavoriteKind::Character,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Planet,
    Character,
}

/// One line of `GET /users/favorites`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FavoriteEntry {
    #[serde(rename = "type")]
    pub kind: FavoriteKind,
    pub name: String,
}

/// Favorite joined with the names of its possible targets.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FavoriteRow {
    pub id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
    pub planet_name: Option<String>,
    pub person_name: Option<String>,
}

impl FavoriteRow {
    pub fn into_entry(self) -> Option<FavoriteEntry> {
        let target = FavoriteTarget::from_columns(self.planet_id, self.people_id)?;
        let name = match target {
            FavoriteTarget::Planet(_) => self.planet_name,
            FavoriteTarget::Person(_) => self.person_name,
        }?;
        Some(FavoriteEntry {
            kind: target.kind(),
            name,
        })
    }
}
