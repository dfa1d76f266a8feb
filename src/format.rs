// Rendering of resolved locations as iZurvive deep links, either as a
// joined chatbot string or as the full catalog listing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Catalog, Location};
use crate::resolver::RankedMatch;

/// Base URL the deep-link fragments attach to.
pub const IZURVIVE_URL: &str = "https://www.izurvive.com/";

/// Default zoom level for generated links.
pub const DEFAULT_ZOOM: i64 = 6;

/// Default separator between joined search results.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Request-scoped formatting options, always passed in explicitly.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub max_results: usize,
    pub separator: String,
    pub zoom: i64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_results: 1,
            separator: DEFAULT_SEPARATOR.to_string(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// The structured catalog listing returned to programmatic consumers.
#[derive(Debug, Serialize)]
pub struct Listing {
    pub url_template: String,
    /// Canonical name -> `#c=<lat>;<lon>;<zoom>` fragment.
    pub locations: BTreeMap<String, String>,
    /// Canonical name -> all known spellings.
    pub spellings: BTreeMap<String, Vec<String>>,
}

/// Map fragment for a location: coordinates truncated toward zero.
fn fragment(location: &Location, zoom: i64) -> String {
    format!(
        "#c={};{};{}",
        location.latitude as i64, location.longitude as i64, zoom
    )
}

/// One search-mode result line, with every literal `;` percent-encoded so
/// joined results stay unambiguous.
pub fn search_result_line(m: &RankedMatch<'_>, zoom: i64) -> String {
    let line = format!(
        "{} - {}{}",
        m.location.name,
        IZURVIVE_URL,
        fragment(m.location, zoom)
    );
    line.replace(';', "%3B")
}

/// Join ranked results into the single chatbot substitution string.
pub fn join_search_results(results: &[RankedMatch<'_>], opts: &FormatOptions) -> String {
    results
        .iter()
        .map(|m| search_result_line(m, opts.zoom))
        .collect::<Vec<_>>()
        .join(&opts.separator)
}

/// Build the structured listing for the whole catalog.
pub fn listing(catalog: &Catalog, zoom: i64) -> Listing {
    let mut locations = BTreeMap::new();
    let mut spellings = BTreeMap::new();

    for location in catalog.all_locations() {
        locations.insert(location.name.clone(), fragment(location, zoom));
        spellings.insert(location.name.clone(), location.spellings.clone());
    }

    Listing {
        url_template: format!("{IZURVIVE_URL}{{location}}"),
        locations,
        spellings,
    }
}

/// Plain-text rendering of the listing, derived from the same data as the
/// structured form.
pub fn listing_text(listing: &Listing) -> String {
    let mut out = String::from("Available search locations:\n");
    for (name, fragment) in &listing.locations {
        out.push_str(&format!("{name}: {IZURVIVE_URL}{fragment}\n"));
        if let Some(spellings) = listing.spellings.get(name) {
            out.push_str(&format!("  Spellings: {}\n", spellings.join(", ")));
        }
    }
    out
}
