//! List facet values for building filter controls.

use anyhow::Result;
use serde_json::json;

use farm_commerce::catalog::catalog;
use farm_commerce::search::{distinct_facet_values, FacetAttribute};

use crate::output::Output;

/// Run the facets command.
pub fn run(out: &Output) -> Result<()> {
    let products = catalog();
    let sizes = distinct_facet_values(&products, FacetAttribute::Size);
    let breeds = distinct_facet_values(&products, FacetAttribute::Breed);
    let kinds = distinct_facet_values(&products, FacetAttribute::Kind);

    if out.is_json() {
        out.json(&json!({
            "size": sizes,
            "breed": breeds,
            "type": kinds,
        }));
        return Ok(());
    }

    out.header("Size");
    for value in &sizes {
        out.list_item(value);
    }

    out.header("Breed");
    for value in &breeds {
        out.list_item(value);
    }

    out.header("Type");
    for value in &kinds {
        out.list_item(value);
    }

    Ok(())
}
