//! Utility modules shared by the renderers and the CLI.

pub mod date;
pub mod hash;
pub mod html;
pub mod plural;
pub mod slug;
