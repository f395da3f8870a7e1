use std::rc::Rc;

use futures::executor::block_on;
use template_web::{ExtraAttrs, StyleTokens, TemplateComponent, TemplateProps};
use yew::LocalServerRenderer;
use yew::prelude::*;

fn render(props: TemplateProps) -> String {
    block_on(
        LocalServerRenderer::<TemplateComponent>::with_props(props)
            .hydratable(false)
            .render(),
    )
}

fn base_props() -> TemplateProps {
    TemplateProps {
        children: Children::default(),
        class: Classes::new(),
        onclick: None,
        disabled: false,
        attrs: ExtraAttrs::new(),
        styles: Rc::new(StyleTokens::default()),
    }
}

#[test]
fn default_render_has_only_base_class() {
    let html = render(base_props());
    assert!(html.starts_with("<div"));
    assert!(html.contains(r#"class="component-name""#));
    assert!(!html.contains("component-name--disabled"));
}

#[test]
fn caller_class_follows_base_token() {
    let props = TemplateProps {
        class: Classes::from("foo"),
        ..base_props()
    };
    let html = render(props);
    assert!(html.contains(r#"class="component-name foo""#));
}

#[test]
fn disabled_appends_modifier_last() {
    let props = TemplateProps {
        class: Classes::from("foo"),
        disabled: true,
        ..base_props()
    };
    let html = render(props);
    assert!(html.contains(r#"class="component-name foo component-name--disabled""#));
}

#[test]
fn children_render_verbatim() {
    let props = TemplateProps {
        children: Children::new(vec![html! { "hello" }]),
        ..base_props()
    };
    let html = render(props);
    assert!(html.contains(">hello</div>"));
}

#[test]
fn passthrough_attributes_reach_container() {
    let props = TemplateProps {
        attrs: ExtraAttrs::new()
            .with("data-test", "x")
            .with("aria-label", "Panel"),
        ..base_props()
    };
    let html = render(props);
    assert!(html.contains(r#"data-test="x""#));
    assert!(html.contains(r#"aria-label="Panel""#));
}

#[test]
fn style_module_tokens_replace_literals() {
    let styles = StyleTokens::from_module_json(
        r#"{"component-name": "cn_base__1", "component-name--disabled": "cn_off__2"}"#,
    )
    .unwrap();
    let props = TemplateProps {
        disabled: true,
        styles: Rc::new(styles),
        ..base_props()
    };
    let html = render(props);
    assert!(html.contains(r#"class="cn_base__1 cn_off__2""#));
    assert!(!html.contains("component-name"));
}

#[function_component(NestedHarness)]
fn nested_harness() -> Html {
    html! {
        <section>
            <TemplateComponent class="outer" attrs={ExtraAttrs::new().with("id", "panel")}>
                <span>{ "first" }</span>
                <TemplateComponent disabled={true}>{ "second" }</TemplateComponent>
            </TemplateComponent>
        </section>
    }
}

#[test]
fn template_composes_through_html_macro() {
    let html = block_on(
        LocalServerRenderer::<NestedHarness>::new()
            .hydratable(false)
            .render(),
    );
    assert!(html.contains(r#"id="panel""#));
    assert!(html.contains("<span>first</span>"));
    assert!(html.contains(r#"class="component-name component-name--disabled""#));
    assert!(html.contains(">second</div>"));
}
