//! Configuration section definitions.
//!
//! Each module corresponds to a section in `nobelium.toml`:
//!
//! | Module    | TOML Section  | Purpose                                   |
//! |-----------|---------------|-------------------------------------------|
//! | `build`   | `[build]`     | Site data input, output directory         |
//! | `catalog` | `[catalog]`   | Table of contents and scroll-spy tuning   |
//! | `site`    | `[site]`      | Site info (title, author, url, font)      |
//! | `theme`   | `[theme]`     | List style, pagination, 404 fallback      |

mod build;
mod catalog;
mod site;
mod theme;

pub use build::BuildConfig;
pub use catalog::CatalogConfig;
pub use site::SiteInfoConfig;
pub use theme::{PostListStyle, ThemeConfig};
