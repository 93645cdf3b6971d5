use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{dom::measure_sections, scroll::scroll_to_anchor};
use crate::{
    config::EffectsConfig,
    effects::{
        navigation::{active_section, is_link_active, is_scrolled, MenuState},
        placeholder::initials,
        with_class,
    },
};

const NAV_LINKS: [(&str, &str); 7] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#education", "Education"),
    ("#experience", "Experience"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar(name: &'static str) -> impl IntoView {
    let config = expect_context::<EffectsConfig>();
    let (threshold, offset) = (config.scrolled_threshold, config.section_offset);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get(), threshold));
    let (current, set_current) = signal(None::<String>);
    let (menu, set_menu) = signal(MenuState::default());

    Effect::new(move |_| {
        let y = scroll_y.get();
        let sections = measure_sections();
        let section = active_section(y, &sections, offset).map(str::to_string);
        if current.with_untracked(|c| *c != section) {
            set_current.set(section);
        }
    });

    let menu_open = move || menu.with(MenuState::is_open);

    view! {
        <nav id="navbar" class=move || with_class("navbar", "scrolled", scrolled.get())>
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| scroll_to_anchor(ev, "#home")>
                    {initials(name)}
                    <span class="logo-dot">"."</span>
                </a>
                <ul class=move || with_class("nav-menu", "active", menu_open())>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class=move || {
                                            with_class(
                                                "nav-link",
                                                "active",
                                                current.with(|c| is_link_active(href, c.as_deref())),
                                            )
                                        }
                                        on:click=move |ev| {
                                            set_menu.update(MenuState::close);
                                            scroll_to_anchor(ev, href);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    id="navToggle"
                    class=move || with_class("nav-toggle", "active", menu_open())
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu.update(MenuState::toggle)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
