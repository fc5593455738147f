//! Widget catalogue screen generator.
//!
//! Given an element category, builds a demo [`Region`](region::Region) in
//! which every element carries a stable automation identifier, then solves
//! its layout.
//!
//! - [`category`]: the ordered registry of categories
//! - [`dispatch`]: category key → region builder, with a placeholder fallback
//! - [`variants`]: one builder per category
//! - [`region`]: the region tree and its finalization
//! - [`page`]: detail and catalogue list screens around regions
//! - [`snapshot`] / [`render`]: tooling views of a finalized region
//!
//! ```
//! use gallery::prelude::*;
//!
//! let region = build_region("switch", "Switches");
//! let done = region.finalize(350).unwrap();
//! assert!(done.frame("custom_switch").is_some());
//! ```

pub mod category;
pub mod dispatch;
pub mod element;
pub mod page;
pub mod region;
pub mod render;
pub mod snapshot;
pub mod theme;
pub mod variants;

pub mod prelude {
    //! Registry, dispatch, regions and pages.

    pub use crate::category::{find_entry, list_categories, CatalogueEntry, CategoryKey};
    pub use crate::dispatch::{build_category, build_region, build_region_with};
    pub use crate::element::DemoElement;
    pub use crate::page::{CataloguePage, DetailPage};
    pub use crate::region::{finalize, FinalizedRegion, Region, CONTAINER_ID};
    pub use crate::render::{placements, render, Placement};
    pub use crate::snapshot::RegionSnapshot;
    pub use crate::theme::{Theme, ThemeError};
}
