use crate::string_normalization::clean_str;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub struct Person {
    pub id: String,
    pub name: String,
    pub birth: String,
    pub films: FxHashSet<String>,
}

pub struct Film {
    pub id: String,
    pub title: String,
    pub year: String,
    pub cast: FxHashSet<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not open catalog file {path:?}: {source}")]
    Open { path: PathBuf, source: csv::Error },
    #[error("malformed record in {path:?}: {source}")]
    Malformed { path: PathBuf, source: csv::Error },
}

#[derive(Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Deserialize)]
struct FilmRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Deserialize)]
struct CreditRow {
    person_id: String,
    movie_id: String,
}

/// In-memory record store: people and films by id, plus a case-folded
/// name index supporting ambiguity. Built once by `parse_catalog`,
/// read-only afterwards.
#[derive(Default)]
pub struct Catalog {
    pub people: FxHashMap<String, Person>,
    pub films: FxHashMap<String, Film>,
    pub name_lookup: FxHashMap<String, Vec<String>>,
}

impl Catalog {
    /// Look up a person by id. Every id reaching the search comes from the
    /// catalog itself, so a miss is a caller bug.
    ///
    /// # Panics
    ///
    /// Panics when `person_id` is not in the catalog.
    pub fn person(&self, person_id: &str) -> &Person {
        self.people
            .get(person_id)
            .unwrap_or_else(|| panic!("person id '{person_id}' missing from catalog"))
    }

    /// Look up a film by id.
    ///
    /// # Panics
    ///
    /// Panics when `film_id` is not in the catalog.
    pub fn film(&self, film_id: &str) -> &Film {
        self.films
            .get(film_id)
            .unwrap_or_else(|| panic!("film id '{film_id}' missing from catalog"))
    }

    /// All person ids registered under a name, case-folded. Empty when the
    /// name is unknown; more than one entry means the name is ambiguous.
    pub fn person_ids_for_name(&self, name: &str) -> &[String] {
        self.name_lookup
            .get(&clean_str(name))
            .map_or(&[], Vec::as_slice)
    }
}

/// Load `people.csv`, `movies.csv`, and `stars.csv` from a catalog
/// directory.
///
/// Credit rows referencing a person or film that has no catalog record are
/// dropped, keeping the person/film sets symmetric: a film id in someone's
/// film set always resolves to a film listing them in its cast.
pub fn parse_catalog(data_dir: &Path) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::default();

    for row in read_rows::<PersonRow>(&data_dir.join("people.csv"))? {
        let PersonRow { id, name, birth } = row;
        let ids = catalog.name_lookup.entry(clean_str(&name)).or_default();
        if !ids.contains(&id) {
            ids.push(id.clone());
        }
        catalog.people.insert(
            id.clone(),
            Person {
                id,
                name,
                birth,
                films: FxHashSet::default(),
            },
        );
    }

    for row in read_rows::<FilmRow>(&data_dir.join("movies.csv"))? {
        let FilmRow { id, title, year } = row;
        catalog.films.insert(
            id.clone(),
            Film {
                id,
                title,
                year,
                cast: FxHashSet::default(),
            },
        );
    }

    for row in read_rows::<CreditRow>(&data_dir.join("stars.csv"))? {
        let (Some(person), Some(film)) = (
            catalog.people.get_mut(&row.person_id),
            catalog.films.get_mut(&row.movie_id),
        ) else {
            continue;
        };
        person.films.insert(row.movie_id);
        film.cast.insert(row.person_id);
    }

    Ok(catalog)
}

fn read_rows<T>(path: &Path) -> Result<Vec<T>, CatalogError>
where
    T: serde::de::DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}
