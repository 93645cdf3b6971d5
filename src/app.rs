mod dom;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod scroll;
mod sections;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

pub use dom::greet_console;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use sections::{About, Contact, Education, ExperienceList};
use skills::Skills;

use crate::content::{Portfolio, PORTFOLIO};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match PORTFOLIO.as_ref() {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio /> }),
        Err(e) => {
            log::error!("page content unavailable: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <section class="page-error">
                    <h1>"Something went wrong"</h1>
                    <p>{e.to_string()}</p>
                </section>
            })
        }
    }
}

#[component]
fn PortfolioPage(portfolio: &'static Portfolio) -> impl IntoView {
    provide_context(portfolio.effects.clone());
    let profile = &portfolio.profile;

    view! {
        <Title text=profile.name.clone() />
        <Meta name="description" content=profile.tagline.clone() />
        <Navbar name=profile.name.as_str() />
        <main>
            <Hero portfolio />
            <About portfolio />
            <Education entries=portfolio.education.as_slice() />
            <ExperienceList jobs=portfolio.experience.as_slice() />
            <Skills skills=portfolio.skills.as_slice() />
            <Projects projects=portfolio.projects.as_slice() />
            <Contact profile />
        </main>
        <Footer profile />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
            res.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <section class="page-error">
            <h1>"404"</h1>
            <p>"There's nothing here."</p>
            <a href="/" class="btn btn-primary">
                "Back home"
            </a>
        </section>
    }
}
