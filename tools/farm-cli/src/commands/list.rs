//! List/filter the catalog.

use anyhow::{bail, Result};
use serde_json::json;

use farm_commerce::catalog::catalog;
use farm_commerce::money::Naira;
use farm_commerce::search::{
    apply_filters, paginate, CategoryFilter, FilterCriteria, Pagination, PriceRange,
    PRICE_SLIDER_MAX,
};
use farm_storefront::ViewMode;

use super::ListArgs;
use crate::output::{stock_badge, Output};

/// Run the list command.
pub fn run(args: ListArgs, out: &Output) -> Result<()> {
    let criteria = build_criteria(&args)?;
    let query = args.query.as_deref().unwrap_or("");

    let Some(view_mode) = ViewMode::from_str(&args.view) else {
        bail!("Unknown view mode: {} (expected grid or list)", args.view);
    };

    out.debug(&format!("criteria: {:?}", criteria));

    let products = catalog();
    let filtered = apply_filters(&products, &criteria, query);
    let pagination = Pagination::new(args.page, view_mode.items_per_page(), filtered.len());
    let visible = paginate(&filtered, args.page, view_mode.items_per_page());

    if out.is_json() {
        out.json(&json!({
            "products": visible,
            "pagination": pagination,
        }));
        return Ok(());
    }

    out.header("Products");

    if filtered.is_empty() {
        out.text("No products found");
        out.text("Try adjusting your search or filter criteria");
        return Ok(());
    }

    let noun = if filtered.len() == 1 { "product" } else { "products" };
    out.info(&format!("{} {} found", filtered.len(), noun));
    out.text("");

    for product in visible {
        match view_mode {
            ViewMode::Grid => {
                out.list_item(&format!(
                    "{}  {}  [{}]  {}",
                    product.name,
                    product.price.display(),
                    product.details.badge(),
                    stock_badge(product.in_stock),
                ));
            }
            ViewMode::List => {
                out.list_item(&format!(
                    "{}  {}  | {}  {}",
                    product.name,
                    product.price.display(),
                    product.details.summary(),
                    stock_badge(product.in_stock),
                ));
            }
        }
    }

    if pagination.total_pages > 1 {
        out.text("");
        out.text(&format!(
            "Page {} of {} (items {}-{} of {})",
            pagination.page,
            pagination.total_pages,
            pagination.start_item(),
            pagination.end_item(),
            pagination.total,
        ));
    }

    Ok(())
}

fn build_criteria(args: &ListArgs) -> Result<FilterCriteria> {
    let Some(category) = CategoryFilter::parse(&args.category) else {
        bail!("Unknown category: {}", args.category);
    };

    let price = PriceRange::new(
        Naira::new(args.min.unwrap_or(0)),
        Naira::new(args.max.unwrap_or(PRICE_SLIDER_MAX)),
    )?;

    Ok(FilterCriteria {
        category,
        price,
        sizes: args.size.clone(),
        breeds: args.breed.clone(),
        kinds: args.kind.clone(),
        in_stock_only: args.in_stock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ListArgs {
        ListArgs {
            category: "all".to_string(),
            min: None,
            max: None,
            size: Vec::new(),
            breed: Vec::new(),
            kind: Vec::new(),
            in_stock: false,
            query: None,
            page: 1,
            view: "grid".to_string(),
        }
    }

    #[test]
    fn test_build_criteria_defaults() {
        let criteria = build_criteria(&args()).unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_build_criteria_rejects_unknown_category() {
        let mut bad = args();
        bad.category = "poultry".to_string();
        assert!(build_criteria(&bad).is_err());
    }

    #[test]
    fn test_build_criteria_rejects_inverted_price_bounds() {
        let mut bad = args();
        bad.min = Some(5000);
        bad.max = Some(100);
        assert!(build_criteria(&bad).is_err());
    }
}
