//! Scroll-spy model for the table of contents.
//!
//! # Module Structure
//!
//! | Module       | Purpose                                                  |
//! |--------------|----------------------------------------------------------|
//! | `heading`    | `HeadingPositionProvider`: heading geometry in DOM order |
//! | `tracker`    | `ScrollSpy`: derives and publishes the active heading    |
//! | `throttle`   | `Throttle`: leading + trailing rate limiter              |
//! | `visibility` | `VisibilityGate`: show-on-scroll flag                    |
//! | `view`       | `PageView`: listeners, timers and teardown of one view   |
//!
//! Everything here is synchronous and takes time as an `Instant` argument, so
//! the same rules run in tests, in `nobelium spy` trace replays, and (as
//! `catalog.js`) in the browser.

mod heading;
mod throttle;
mod tracker;
mod view;
mod visibility;

pub use heading::{DocumentLayout, HeadingPosition, HeadingPositionProvider};
pub use throttle::Throttle;
pub use tracker::{ScrollSpy, SubscriberId};
pub use view::{PageView, ViewEvent};
pub use visibility::VisibilityGate;
