use crate::parsing::Catalog;
use rustc_hash::FxHashSet;

/// All `(film_id, person_id)` pairs one hop from `person_id`: every member
/// of the cast of every film the person appeared in.
///
/// The person's own id is part of the result, since each of their films
/// lists them in its cast. Such self-pairs are kept as-is; the search's
/// visited set stops them from ever extending a path.
pub fn neighbors_for_person(person_id: &str, catalog: &Catalog) -> FxHashSet<(String, String)> {
    let person = catalog.person(person_id);
    let mut neighbors = FxHashSet::default();

    for film_id in &person.films {
        let film = catalog.film(film_id);
        for co_star in &film.cast {
            neighbors.insert((film_id.clone(), co_star.clone()));
        }
    }

    neighbors
}
