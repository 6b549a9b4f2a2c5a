//! Reusable view pieces of the portfolio page.
//!
//! `header` is the fixed navigation bar, `sections` the anchored page body it
//! scrolls between, `icons` the inline SVG glyphs, and `error_template` the page
//! shown for unknown routes.

pub mod error_template;
pub mod header;
pub mod icons;
pub mod sections;
