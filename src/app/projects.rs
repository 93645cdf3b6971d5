use leptos::{ev::MouseEvent, html, prelude::*};

use super::{dom::on_page_loaded, reveal::use_reveal, sections::SectionHeader};
use crate::{
    content::Project,
    effects::{
        gallery::Carousel,
        placeholder::{needs_fallback, GalleryFallback},
        reveal::{DEFAULT_ANIMATION, REVEALED_CLASS},
        with_class,
    },
};

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <div class="container">
                <SectionHeader title="Projects" subtitle="Things I've built" />
                <div class="projects-grid">
                    {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref);

    view! {
        <div
            node_ref=node_ref
            class=move || with_class("project-card", REVEALED_CLASS, revealed.get())
            data-aos=DEFAULT_ANIMATION
        >
            <Gallery title=project.title.as_str() images=project.images.as_slice() />
            <div class="project-info">
                <h3 class="project-title">{project.title.as_str()}</h3>
                <p class="project-description">{project.description.as_str()}</p>
                <div class="project-tags">
                    {project
                        .tags
                        .iter()
                        .map(|t| view! { <span class="tag">{t.as_str()}</span> })
                        .collect_view()}
                </div>
                {project
                    .link
                    .as_deref()
                    .map(|href| {
                        view! {
                            <a class="project-link" href=href target="_blank" rel="noopener noreferrer">
                                "View source"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

/// Image carousel of one project card. Each card owns its own index.
#[component]
fn Gallery(title: &'static str, images: &'static [String]) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let fallback = RwSignal::new(GalleryFallback::new(images.len()));
    let img_refs = images
        .iter()
        .map(|_| NodeRef::<html::Img>::new())
        .collect::<Vec<_>>();

    let step = move |ev: MouseEvent, f: fn(&mut Carousel) -> usize| {
        ev.stop_propagation();
        carousel.update(|c| {
            f(c);
        });
    };
    let is_current = move |i: usize| carousel.with(|c| c.is_current(i));
    let has_failed = move |i: usize| fallback.with(|f| f.has_failed(i));
    let fail = move |i: usize| {
        if fallback.try_update(|f| f.fail(i)) == Some(true) {
            log::info!("image {} of {title} unavailable, showing placeholder", images[i]);
        }
    };

    on_page_loaded({
        let img_refs = img_refs.clone();
        move || {
            for (i, img_ref) in img_refs.iter().enumerate() {
                if let Some(img) = img_ref.get_untracked() {
                    if needs_fallback(img.complete(), img.natural_height()) {
                        fail(i);
                    }
                }
            }
        }
    });

    let controls = carousel.with_untracked(Carousel::is_navigable).then(|| {
        view! {
            <button class="img-nav-btn prev" aria-label="Previous image" on:click=move |ev| step(ev, Carousel::prev)>
                "‹"
            </button>
            <button class="img-nav-btn next" aria-label="Next image" on:click=move |ev| step(ev, Carousel::next)>
                "›"
            </button>
            <div class="image-dots">
                {(0..images.len())
                    .map(|i| {
                        view! {
                            <div
                                class=move || with_class("image-dot", "active", is_current(i))
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.go_to(i as isize);
                                    })
                                }
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="project-image-wrapper">
            {images
                .iter()
                .zip(img_refs)
                .enumerate()
                .map(|(i, (src, img_ref))| {
                    view! {
                        <img
                            node_ref=img_ref
                            class=move || with_class("project-img", "active", is_current(i))
                            src=src.as_str()
                            alt=move || {
                                if has_failed(i) { String::new() } else { format!("{title} screenshot {}", i + 1) }
                            }
                            style=move || {
                                fallback
                                    .with(|f| f.gradient(i))
                                    .map(|g| format!("background: {g};"))
                                    .unwrap_or_default()
                            }
                            on:error=move |_| fail(i)
                        />
                    }
                })
                .collect_view()}
            <Show when=move || fallback.with(GalleryFallback::is_shown)>
                <ImagePlaceholder />
            </Show>
            {controls}
        </div>
    }
}

#[component]
fn ImagePlaceholder() -> impl IntoView {
    view! {
        <div class="img-placeholder">
            <svg
                width="60"
                height="60"
                viewBox="0 0 24 24"
                fill="none"
                stroke="rgba(0, 212, 255, 0.5)"
                stroke-width="1"
            >
                <rect x="3" y="3" width="18" height="18" rx="2" ry="2" />
                <circle cx="8.5" cy="8.5" r="1.5" />
                <polyline points="21 15 16 10 5 21" />
            </svg>
        </div>
    }
}
