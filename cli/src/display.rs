use degrees_core::{Catalog, PathStep};

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding connection from {} to {}",
        colors.person_name(&format!("\"{}\"", request.source_name)),
        colors.person_name(&format!("\"{}\"", request.target_name))
    );
    println!("🔍 Searching...");
}

pub fn display_search_results(result: &SearchResult, catalog: &Catalog, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.path {
        Some(path) => {
            display_connection(path, result, catalog, colors);
            if is_verbose {
                display_search_statistics(result.people_expanded, result.search_duration, colors);
            }
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No connection between"),
                colors.person_name(&format!("\"{}\"", result.source_name)),
                colors.person_name(&format!("\"{}\"", result.target_name))
            );
            if is_verbose {
                display_search_statistics(result.people_expanded, result.search_duration, colors);
            }
        }
    }
}

fn display_connection(
    path: &[PathStep],
    result: &SearchResult,
    catalog: &Catalog,
    colors: &ColorScheme,
) {
    let degrees = path.len();
    println!(
        "{} {} degrees of separation.\n",
        colors.success("✅"),
        colors.number(&degrees.to_string())
    );

    let mut flow = vec![
        colors
            .person_name(&format!("\"{}\"", result.source_name))
            .to_string(),
    ];
    flow.extend(path.iter().map(|(_, person_id)| {
        colors
            .person_name(&format!("\"{}\"", catalog.person(person_id).name))
            .to_string()
    }));
    println!("{}", flow.join(" → "));

    // Step-by-step listing only if not in quiet mode
    if result.display_options.quiet {
        return;
    }

    println!();
    let mut previous_name = result.source_name.clone();
    for (step_index, (film_id, person_id)) in path.iter().enumerate() {
        let person = catalog.person(person_id);
        let film = catalog.film(film_id);

        println!(
            "{} {} and {} starred in {} ({})",
            colors.step_number(&format!("{}:", step_index + 1)),
            colors.person_name(&previous_name),
            colors.person_name(&person.name),
            colors.film_title(&film.title),
            film.year,
        );

        previous_name = person.name.clone();
    }
}

fn display_search_statistics(people_expanded: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} people in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(people_expanded)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
