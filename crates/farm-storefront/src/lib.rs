//! View-state for the farm-goods storefront pages.
//!
//! Pure, synchronous state reducers for each interactive section of the
//! site, kept apart from rendering and routing:
//!
//! - **Catalog view**: filters, search, pagination, grid/list mode,
//!   favorites; the one piece with real state-transition logic
//! - **Detail view**: quantity stepper, gallery selection
//! - **Featured tabs**: home page category tabs
//! - **Carousel**: hero/testimonial slide rotation with a cancellable
//!   auto-advance timer
//! - **Newsletter**: signup form validation
//!
//! Each view owns its state outright; there is no shared store and
//! nothing survives the view's own lifetime.

pub mod carousel;
pub mod catalog_view;
pub mod detail;
pub mod featured;
pub mod newsletter;

pub use carousel::{AutoAdvance, Carousel, HERO_ROTATION, TESTIMONIALS_ROTATION};
pub use catalog_view::{CatalogView, ViewMode};
pub use detail::{DetailView, MAX_QUANTITY};
pub use featured::FeaturedTabs;
pub use newsletter::{NewsletterError, NewsletterForm, SubscribeState};
