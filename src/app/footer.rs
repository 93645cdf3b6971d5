use leptos::prelude::*;

use crate::{build_info::BuildInfo, content::Profile};

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let build = BuildInfo::current();
    let year = build.map(|b| b.year().to_string()).unwrap_or_default();

    view! {
        <footer class="footer">
            <div class="container">
                <p>"© " {year} " " {profile.name.as_str()} ". Built with Rust & Leptos."</p>
                {build
                    .map(|b| {
                        view! { <p class="footer-updated">"Last updated " {b.date_label()}</p> }
                    })}
            </div>
        </footer>
    }
}
