//! List the storefront categories.

use anyhow::Result;
use serde_json::json;

use farm_commerce::catalog::Category;

use crate::output::Output;

/// Run the categories command.
pub fn run(out: &Output) -> Result<()> {
    if out.is_json() {
        let rows: Vec<_> = Category::ALL
            .iter()
            .map(|cat| {
                json!({
                    "slug": cat.as_str(),
                    "name": cat.display_name(),
                    "description": cat.description(),
                })
            })
            .collect();
        out.json(&rows);
        return Ok(());
    }

    out.header("Categories");
    for cat in Category::ALL {
        out.kv(cat.display_name(), cat.description());
    }

    Ok(())
}
