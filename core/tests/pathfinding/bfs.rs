use degrees_core::{Catalog, Film, Person, bfs_find_path, neighbors_for_person};
use rustc_hash::FxHashSet;

fn build_catalog(people: &[(&str, &str)], films: &[(&str, &str, &[&str])]) -> Catalog {
    let mut catalog = Catalog::default();

    for &(id, name) in people {
        catalog
            .name_lookup
            .entry(name.to_lowercase())
            .or_default()
            .push(id.to_string());
        catalog.people.insert(
            id.to_string(),
            Person {
                id: id.to_string(),
                name: name.to_string(),
                birth: String::new(),
                films: FxHashSet::default(),
            },
        );
    }

    for &(id, title, cast) in films {
        let mut cast_set = FxHashSet::default();
        for &person_id in cast {
            cast_set.insert(person_id.to_string());
            catalog
                .people
                .get_mut(person_id)
                .unwrap()
                .films
                .insert(id.to_string());
        }
        catalog.films.insert(
            id.to_string(),
            Film {
                id: id.to_string(),
                title: title.to_string(),
                year: "2000".to_string(),
                cast: cast_set,
            },
        );
    }

    catalog
}

/// Level-by-level distance computation, independent of the engine's node
/// bookkeeping. Used to cross-check minimality.
fn brute_force_distance(source: &str, target: &str, catalog: &Catalog) -> Option<usize> {
    if source == target {
        return Some(0);
    }

    let mut reached: FxHashSet<String> = FxHashSet::default();
    reached.insert(source.to_string());
    let mut level: Vec<String> = vec![source.to_string()];

    for distance in 1.. {
        let mut next_level = Vec::new();
        for person_id in &level {
            for (_, co_star) in neighbors_for_person(person_id, catalog) {
                if co_star == target {
                    return Some(distance);
                }
                if reached.insert(co_star.clone()) {
                    next_level.push(co_star);
                }
            }
        }
        if next_level.is_empty() {
            return None;
        }
        level = next_level;
    }

    unreachable!()
}

/// Every step must be a real co-appearance: the person reached and the
/// previous person both belong to the step's film cast.
fn assert_path_valid(source: &str, path: &[(String, String)], catalog: &Catalog) {
    let mut previous = source.to_string();
    for (film_id, person_id) in path {
        let cast = &catalog.film(film_id).cast;
        assert!(
            cast.contains(&previous),
            "{previous} not in cast of {film_id}"
        );
        assert!(
            cast.contains(person_id),
            "{person_id} not in cast of {film_id}"
        );
        previous = person_id.clone();
    }
}

#[test]
fn test_zero_degrees_for_identical_endpoints() {
    let catalog = build_catalog(
        &[("a", "Alice"), ("b", "Bob")],
        &[("f1", "First", ["a", "b"].as_slice())],
    );

    let (path, expanded, _) = bfs_find_path("a", "a", &catalog);

    assert_eq!(path, Some(Vec::new()));
    assert_eq!(expanded, 0);
}

#[test]
fn test_direct_connection() {
    let catalog = build_catalog(
        &[("a", "Alice"), ("b", "Bob")],
        &[("f1", "First", ["a", "b"].as_slice())],
    );

    let (path, _, _) = bfs_find_path("a", "b", &catalog);

    assert_eq!(path, Some(vec![("f1".to_string(), "b".to_string())]));
}

#[test]
fn test_two_degree_chain() {
    // Alice and Carol never appeared together; Bob links them.
    let catalog = build_catalog(
        &[("a", "Alice"), ("b", "Bob"), ("c", "Carol")],
        &[
            ("f1", "First", ["a", "b"].as_slice()),
            ("f2", "Second", ["b", "c"].as_slice()),
        ],
    );

    let (path, _, _) = bfs_find_path("a", "c", &catalog);

    assert_eq!(
        path,
        Some(vec![
            ("f1".to_string(), "b".to_string()),
            ("f2".to_string(), "c".to_string()),
        ])
    );
}

#[test]
fn test_no_connection_is_symmetric() {
    let catalog = build_catalog(
        &[("a", "Alice"), ("b", "Bob"), ("d", "Dan")],
        &[("f1", "First", ["a", "b"].as_slice())],
    );

    let (forward, _, _) = bfs_find_path("a", "d", &catalog);
    let (backward, _, _) = bfs_find_path("d", "a", &catalog);

    assert_eq!(forward, None);
    assert_eq!(backward, None);
}

#[test]
fn test_shortcut_beats_longer_chain() {
    // Chain a-b-c-d plus a direct a-c film: the a->d path must go through
    // the shortcut, not the full chain.
    let catalog = build_catalog(
        &[("a", "Alice"), ("b", "Bob"), ("c", "Carol"), ("d", "Dan")],
        &[
            ("f1", "First", ["a", "b"].as_slice()),
            ("f2", "Second", ["b", "c"].as_slice()),
            ("f3", "Third", ["c", "d"].as_slice()),
            ("f4", "Shortcut", ["a", "c"].as_slice()),
        ],
    );

    let (path, _, _) = bfs_find_path("a", "d", &catalog);
    let path = path.unwrap();

    assert_eq!(path.len(), 2);
    assert_eq!(path[0], ("f4".to_string(), "c".to_string()));
    assert_eq!(path[1], ("f3".to_string(), "d".to_string()));
}

#[test]
fn test_path_lengths_match_brute_force_distances() {
    let catalog = build_catalog(
        &[
            ("a", "Alice"),
            ("b", "Bob"),
            ("c", "Carol"),
            ("d", "Dan"),
            ("e", "Eve"),
            ("f", "Frank"),
        ],
        &[
            ("f1", "First", ["a", "b", "c"].as_slice()),
            ("f2", "Second", ["c", "d"].as_slice()),
            ("f3", "Third", ["d", "e"].as_slice()),
            ("f4", "Fourth", ["b", "e"].as_slice()),
            ("f5", "Solo", ["f"].as_slice()),
        ],
    );

    let ids = ["a", "b", "c", "d", "e", "f"];
    for source in ids {
        for target in ids {
            let (path, _, _) = bfs_find_path(source, target, &catalog);
            let distance = brute_force_distance(source, target, &catalog);

            match distance {
                Some(expected) => {
                    let path = path.unwrap_or_else(|| {
                        panic!("no path {source}->{target}, expected distance {expected}")
                    });
                    assert_eq!(path.len(), expected, "path {source}->{target}");
                    assert_path_valid(source, &path, &catalog);
                }
                None => assert_eq!(path, None, "unexpected path {source}->{target}"),
            }
        }
    }
}

#[test]
fn test_returned_steps_are_real_co_appearances() {
    let catalog = build_catalog(
        &[("a", "Alice"), ("b", "Bob"), ("c", "Carol"), ("d", "Dan")],
        &[
            ("f1", "First", ["a", "b"].as_slice()),
            ("f2", "Second", ["b", "c"].as_slice()),
            ("f3", "Third", ["c", "d"].as_slice()),
        ],
    );

    let (path, _, _) = bfs_find_path("a", "d", &catalog);
    let path = path.unwrap();

    assert_eq!(path.len(), 3);
    assert_path_valid("a", &path, &catalog);
    assert_eq!(path.last().unwrap().1, "d");
}

#[test]
fn test_expanded_count_reflects_search_effort() {
    let catalog = build_catalog(
        &[("a", "Alice"), ("b", "Bob"), ("d", "Dan")],
        &[("f1", "First", ["a", "b"].as_slice())],
    );

    // Exhausting Alice's component expands both of its members.
    let (path, expanded, _) = bfs_find_path("a", "d", &catalog);
    assert_eq!(path, None);
    assert_eq!(expanded, 2);
}
