use leptos::{html, prelude::*};

use super::{
    dom::on_page_loaded,
    reveal::{GlowCard, Reveal},
    scroll::AnchorLink,
};
use crate::{
    content::{Experience, Portfolio, Profile, TimelineEntry},
    effects::placeholder::{initials, needs_fallback, Fallback, PROFILE_GRADIENT},
};

#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <Reveal class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </Reveal>
    }
}

#[component]
pub fn About(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    view! {
        <section id="about" class="about">
            <div class="container">
                <SectionHeader title="About Me" subtitle="Who I am and what I do" />
                <div class="about-content">
                    <Reveal class="about-image" animation="fade-right">
                        <ProfileImage name=profile.name.as_str() src=profile.image.as_str() />
                    </Reveal>
                    <Reveal class="about-text" animation="fade-left">
                        {portfolio
                            .about
                            .iter()
                            .map(|p| view! { <p>{p.as_str()}</p> })
                            .collect_view()}
                        <div class="about-stats">
                            {portfolio
                                .stats
                                .iter()
                                .map(|s| {
                                    view! {
                                        <div class="stat">
                                            <span class="stat-value">{s.value.as_str()}</span>
                                            <span class="stat-label">{s.label.as_str()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

const INITIALS_STYLE: &str = "display: flex; align-items: center; justify-content: center;";

/// Profile photo that swaps itself for the owner's initials when it can't be
/// shown.
#[component]
fn ProfileImage(name: &'static str, src: &'static str) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let fallback = RwSignal::new(Fallback::default());
    let failed = move || fallback.with(Fallback::is_shown);

    let fail = move || {
        if fallback.try_update(Fallback::fail) == Some(true) {
            log::info!("profile image {src} unavailable, showing initials");
        }
    };
    let check = move || {
        if let Some(img) = img_ref.get_untracked() {
            if needs_fallback(img.complete(), img.natural_height()) {
                fail();
            }
        }
    };

    on_page_loaded(check);

    view! {
        <div class="profile-image-wrapper">
            <img
                id="profileImage"
                node_ref=img_ref
                src=src
                alt=move || if failed() { "" } else { name }
                style=move || {
                    if failed() { format!("background: {PROFILE_GRADIENT}; {INITIALS_STYLE}") } else { String::new() }
                }
                on:error=move |_| fail()
            />
            <Show when=failed>
                <div class="placeholder-initials">{initials(name)}</div>
            </Show>
        </div>
    }
}

#[component]
pub fn Education(entries: &'static [TimelineEntry]) -> impl IntoView {
    view! {
        <section id="education" class="education">
            <div class="container">
                <SectionHeader title="Education" subtitle="Where I learned the fundamentals" />
                <div class="timeline">
                    {entries
                        .iter()
                        .map(|e| {
                            view! {
                                <div class="timeline-item">
                                    <div class="timeline-dot"></div>
                                    <GlowCard class="timeline-card">
                                        <span class="timeline-period">{e.period.as_str()}</span>
                                        <h3>{e.title.as_str()}</h3>
                                        <h4>{e.place.as_str()}</h4>
                                        <p>{e.description.as_str()}</p>
                                    </GlowCard>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceList(jobs: &'static [Experience]) -> impl IntoView {
    view! {
        <section id="experience" class="experience">
            <div class="container">
                <SectionHeader title="Experience" subtitle="Places I've built things" />
                <div class="experience-grid">
                    {jobs
                        .iter()
                        .map(|job| {
                            view! {
                                <GlowCard class="experience-card">
                                    <div class="experience-header">
                                        <h3>{job.role.as_str()}</h3>
                                        <span class="experience-period">{job.period.as_str()}</span>
                                    </div>
                                    <h4 class="experience-company">{job.company.as_str()}</h4>
                                    <ul>
                                        {job
                                            .highlights
                                            .iter()
                                            .map(|h| view! { <li>{h.as_str()}</li> })
                                            .collect_view()}
                                    </ul>
                                </GlowCard>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    let mailto = format!("mailto:{}", profile.email);
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <SectionHeader title="Get In Touch" subtitle="My inbox is always open" />
                <Reveal class="contact-content">
                    <p class="contact-text">
                        "Whether you have a question, a project, or just want to say hi, I'll get back to you."
                    </p>
                    <div class="contact-info">
                        <a class="contact-item" href=mailto>
                            <i class="extra-email"></i>
                            {profile.email.as_str()}
                        </a>
                        <span class="contact-item">
                            <i class="extra-location"></i>
                            {profile.location.as_str()}
                        </span>
                    </div>
                    <div class="social-links">
                        {profile
                            .socials
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href.as_str()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=s.label.as_str()
                                        class="social-link"
                                    >
                                        <i class=s.icon.as_str()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <AnchorLink href="#home" class="btn btn-secondary">
                        "Back to top"
                    </AnchorLink>
                </Reveal>
            </div>
        </section>
    }
}
