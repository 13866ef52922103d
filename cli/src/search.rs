use degrees_core::{Catalog, PathStep};
use std::io::{self, Write};

use crate::args::Args;

/// Outcome of matching a user-supplied name against the catalog's
/// case-folded name index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    Unique(String),
    Ambiguous(Vec<String>),
    NotFound,
}

#[derive(Debug)]
pub struct SearchRequest {
    pub source: String,
    pub target: String,
    pub source_name: String,
    pub target_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub path: Option<Vec<PathStep>>,
    pub people_expanded: usize,
    pub search_duration: f64,
    pub source_name: String,
    pub target_name: String,
    pub display_options: Args,
}

pub fn match_person_name(name: &str, catalog: &Catalog) -> NameMatch {
    match catalog.person_ids_for_name(name) {
        [] => NameMatch::NotFound,
        [id] => NameMatch::Unique(id.clone()),
        ids => NameMatch::Ambiguous(ids.to_vec()),
    }
}

/// Resolve a name to a single person id, asking the user to pick one when
/// several people share the name.
pub fn resolve_person(name: &str, catalog: &Catalog) -> Result<String, String> {
    match match_person_name(name, catalog) {
        NameMatch::Unique(person_id) => Ok(person_id),
        NameMatch::NotFound => Err(format!("'{name}' not found in catalog")),
        NameMatch::Ambiguous(person_ids) => {
            println!("Which '{name}'?");
            for person_id in &person_ids {
                let person = catalog.person(person_id);
                println!(
                    "  ID: {}, Name: {}, Birth: {}",
                    person.id, person.name, person.birth
                );
            }

            let chosen = read_line("Intended person ID: ")?;
            if person_ids.contains(&chosen) {
                Ok(chosen)
            } else {
                Err(format!("'{chosen}' is not one of the listed IDs"))
            }
        }
    }
}

pub fn create_search_request(
    args: Args,
    source_query: &str,
    target_query: &str,
    catalog: &Catalog,
) -> Result<SearchRequest, String> {
    let source = resolve_person(source_query, catalog)?;
    let target = resolve_person(target_query, catalog)?;

    let source_name = catalog.person(&source).name.clone();
    let target_name = catalog.person(&target).name.clone();

    Ok(SearchRequest {
        source,
        target,
        source_name,
        target_name,
        search_args: args,
    })
}

pub fn read_line(prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|error| error.to_string())?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|error| error.to_string())?;

    Ok(line.trim().to_string())
}
