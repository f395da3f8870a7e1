#![forbid(unsafe_code)]
//! Scaffold component for Yew apps.
//!
//! Copy [`components::template`] when starting a new component: it shows the
//! props-with-defaults pattern, class composition against a style module,
//! passthrough attributes, and a click callback gated by `disabled`.

pub mod components;
pub mod styles;

pub use components::template::{TemplateComponent, TemplateProps};
pub use components::{ExtraAttrs, merge_attrs};
pub use styles::{StyleError, StyleTokens};
