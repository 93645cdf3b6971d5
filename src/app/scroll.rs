use leptos::{ev::MouseEvent, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::dom::element_by_id;
use crate::effects::scroll::{anchor_target, scroll_destination};

/// Replaces the jump of an in-page anchor with a smooth scroll that leaves
/// room for the fixed navbar. Unknown targets do nothing.
pub fn scroll_to_anchor(ev: MouseEvent, href: &str) {
    ev.prevent_default();
    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(target) = element_by_id(id) else {
        log::debug!("no element for anchor {href}");
        return;
    };
    let nav_height = element_by_id("navbar")
        .map(|nav| nav.offset_height())
        .unwrap_or_default();

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(
        target.offset_top() as f64,
        nav_height as f64,
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class on:click=move |ev| scroll_to_anchor(ev, href)>
            {children()}
        </a>
    }
}
