//! Starting point for new components.
//!
//! ```ignore
//! html! {
//!     <TemplateComponent class="wide" onclick={on_open} attrs={ExtraAttrs::new().with("data-test", "panel")}>
//!         { "Content" }
//!     </TemplateComponent>
//! }
//! ```

use std::rc::Rc;

use crate::components::foundation as f;
use crate::styles::StyleTokens;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TemplateProps {
    #[prop_or_default]
    pub children: f::Children,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub onclick: Option<f::Callback<()>>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub attrs: f::ExtraAttrs,
    #[prop_or_default]
    pub styles: Rc<StyleTokens>,
}

/// Base token, caller classes, then the disabled token when `disabled` is set.
#[must_use]
pub fn compose_classes(styles: &StyleTokens, extra: &f::Classes, disabled: bool) -> f::Classes {
    let mut classes = f::class_list([&*styles.base], extra);
    if disabled {
        classes.push(styles.disabled.to_string());
    }
    classes
}

/// Emits `onclick` on each click unless `disabled` is set.
pub fn click_handler(disabled: bool, onclick: Option<f::Callback<()>>) -> f::Callback<()> {
    f::Callback::from(move |()| {
        if disabled {
            log::debug!("click ignored: template component is disabled");
            return;
        }
        if let Some(cb) = onclick.as_ref() {
            cb.emit(());
        }
    })
}

impl TemplateProps {
    #[must_use]
    pub fn click_callback(&self) -> f::Callback<()> {
        click_handler(self.disabled, self.onclick.clone())
    }
}

#[f::function_component(TemplateComponent)]
pub fn template_component(props: &TemplateProps) -> f::Html {
    let class = compose_classes(&props.styles, &props.class, props.disabled);
    let onclick = props.click_callback().reform(|_: f::MouseEvent| ());
    let container = f::html! {
        <div class={class} onclick={onclick}>
            { for props.children.iter() }
        </div>
    };
    f::merge_attrs(container, &props.attrs)
}
