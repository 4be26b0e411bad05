//! Product detail page view state.

use farm_commerce::catalog::{Category, Product};
use farm_commerce::money::Naira;

/// Maximum quantity orderable from the detail page stepper.
pub const MAX_QUANTITY: i64 = 10;

/// Extra gallery shots shown alongside the product image.
const PIG_GALLERY: [&str; 3] = [
    "https://images.pexels.com/photos/70080/pexels-photo-70080.jpeg",
    "https://images.pexels.com/photos/1689931/pexels-photo-1689931.jpeg",
    "https://images.pexels.com/photos/51311/pig-animals-sow-about-51311.jpeg",
];

const PORK_GALLERY: [&str; 2] = [
    "https://images.pexels.com/photos/323682/pexels-photo-323682.jpeg",
    "https://images.pexels.com/photos/361184/asparagus-steak-veal-steak-veal-361184.jpeg",
];

/// State for one product's detail page: quantity stepper, favorite flag,
/// and the selected gallery image. Lives and dies with the page.
#[derive(Debug, Clone)]
pub struct DetailView {
    product: Product,
    quantity: i64,
    favorite: bool,
    gallery: Vec<String>,
    selected_image: usize,
}

impl DetailView {
    pub fn new(product: Product) -> Self {
        let mut gallery = vec![product.image.clone()];
        match product.category() {
            Category::Pigs => gallery.extend(PIG_GALLERY.iter().map(|s| s.to_string())),
            Category::Pork => gallery.extend(PORK_GALLERY.iter().map(|s| s.to_string())),
            Category::Foodstuff | Category::Drinks => {}
        }

        Self {
            product,
            quantity: 1,
            favorite: false,
            gallery,
            selected_image: 0,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Step up, capped at [`MAX_QUANTITY`].
    pub fn increment(&mut self) {
        if self.quantity < MAX_QUANTITY {
            self.quantity += 1;
        }
    }

    /// Step down, floored at 1.
    pub fn decrement(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Direct entry; out-of-range values are ignored, like the input box.
    pub fn set_quantity(&mut self, quantity: i64) {
        if (1..=MAX_QUANTITY).contains(&quantity) {
            self.quantity = quantity;
        }
    }

    /// Price for the selected quantity.
    pub fn subtotal(&self) -> Naira {
        self.product.price * self.quantity
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn gallery(&self) -> &[String] {
        &self.gallery
    }

    /// Select a gallery thumbnail; out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) {
        if index < self.gallery.len() {
            self.selected_image = index;
        }
    }

    pub fn selected_image(&self) -> &str {
        &self.gallery[self.selected_image]
    }
}
