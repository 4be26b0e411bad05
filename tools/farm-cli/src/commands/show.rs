//! Show one product's detail.

use anyhow::Result;

use farm_commerce::catalog::{catalog, find_product, ProductDetails};
use farm_commerce::error::CommerceError;
use farm_commerce::ids::ProductId;

use super::ShowArgs;
use crate::output::{stock_badge, Output};

/// Run the show command.
pub fn run(args: ShowArgs, out: &Output) -> Result<()> {
    let products = catalog();
    let product = find_product(&products, &ProductId::new(args.id.as_str()))
        .ok_or(CommerceError::ProductNotFound(args.id))?;

    if out.is_json() {
        out.json(product);
        return Ok(());
    }

    out.header(&product.name);
    out.kv("id", product.id.as_str());
    out.kv("category", product.category().display_name());
    out.kv("price", &product.price.display());
    out.kv("availability", &stock_badge(product.in_stock));

    match &product.details {
        ProductDetails::Pigs { breed, size } => {
            out.kv("breed", breed);
            out.kv("size", size);
        }
        ProductDetails::Pork { cut, weight } => {
            out.kv("cut", cut);
            out.kv("weight", weight);
        }
        ProductDetails::Foodstuff { kind, measure } => {
            out.kv("type", kind);
            out.kv("quantity", measure.as_str());
        }
        ProductDetails::Drinks { kind, volume } => {
            out.kv("type", kind);
            out.kv("volume", volume);
        }
    }

    out.kv("image", &product.image);

    Ok(())
}
