//! Site data and the per-page props handed to layouts.
//!
//! # Module Structure
//!
//! | Module     | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `post`     | `Post`: one entry of the site data                   |
//! | `data`     | `SiteData`: JSON loading, validation, preparation    |
//! | `filter`   | `FilterState` and the keyword filter                 |
//! | `group`    | category/tag options and archive groups              |
//! | `paginate` | page slicing for the `page` list style               |
//! | `props`    | `PageData`: everything one layout renders from       |

mod data;
mod filter;
mod group;
mod paginate;
mod post;
mod props;

pub use data::SiteData;
pub use filter::FilterState;
pub use group::{CategoryOption, TagOption};
pub use paginate::{Pagination, page_path};
pub use post::Post;
pub use props::PageData;
