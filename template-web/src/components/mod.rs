pub mod foundation;
pub mod template;

pub use foundation::{ExtraAttrs, merge_attrs};
pub use template::{TemplateComponent, TemplateProps};
