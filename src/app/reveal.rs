use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::dom::track_pointer;
use crate::{
    config::EffectsConfig,
    effects::{
        reveal::{RevealLatch, DEFAULT_ANIMATION, DEFAULT_REVEAL_THRESHOLD, REVEALED_CLASS},
        with_class,
    },
};

/// Becomes true the first time `target` scrolls into view and stays true.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let threshold = use_context::<EffectsConfig>()
        .map(|cfg| cfg.reveal_threshold)
        .unwrap_or(DEFAULT_REVEAL_THRESHOLD);
    let latch = StoredValue::new(RevealLatch::default());
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            if latch.try_update_value(|l| l.observe(visible)) == Some(true) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    revealed
}

/// Wrapper that animates in once scrolled into view.
#[component]
pub fn Reveal(
    #[prop(into)] class: String,
    #[prop(default = DEFAULT_ANIMATION)] animation: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref);

    view! {
        <div node_ref=node_ref class=move || with_class(&class, REVEALED_CLASS, revealed.get()) data-aos=animation>
            {children()}
        </div>
    }
}

/// A revealed card with a pointer-following glow. `on_reveal` runs once, when
/// the card first becomes visible.
#[component]
pub fn GlowCard(
    #[prop(into)] class: String,
    #[prop(optional)] on_reveal: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref);

    Effect::new(move |_| {
        if revealed.get() {
            if let Some(cb) = on_reveal {
                cb.run(());
            }
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || with_class(&class, REVEALED_CLASS, revealed.get())
            data-aos=DEFAULT_ANIMATION
            on:mouseenter=move |ev| {
                if let Some(el) = node_ref.get_untracked() {
                    track_pointer(&ev, &el);
                }
            }
        >
            {children()}
        </div>
    }
}
