use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

use super::{
    dom::{set_style, viewport_height},
    scroll::AnchorLink,
};
use crate::{
    config::EffectsConfig,
    content::Portfolio,
    effects::{
        parallax::hero_parallax,
        particles::{generate, Particle},
        typing::{TypingSpeeds, Typewriter},
    },
};

#[component]
pub fn Hero(portfolio: &'static Portfolio) -> impl IntoView {
    let config = expect_context::<EffectsConfig>();
    let profile = &portfolio.profile;
    let content_ref = NodeRef::<html::Div>::new();
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let Some(el) = content_ref.get() else {
            return;
        };
        let Some(height) = viewport_height() else {
            return;
        };
        if let Some(p) = hero_parallax(y, height) {
            set_style(&el, "transform", &p.transform());
            set_style(&el, "opacity", &p.opacity.to_string());
        }
    });

    view! {
        <section id="home" class="hero">
            <Particles count=config.particle_count />
            <div class="hero-container">
                <div node_ref=content_ref class="hero-content">
                    <p class="hero-greeting">"Hello, I'm"</p>
                    <h1 class="hero-title">
                        <TypingText texts=portfolio.typing.clone() speeds=config.typing />
                        <span class="typing-cursor">"|"</span>
                    </h1>
                    <h2 class="hero-subtitle">{profile.title.as_str()}</h2>
                    <p class="hero-description">{profile.tagline.as_str()}</p>
                    <div class="hero-buttons">
                        <AnchorLink href="#projects" class="btn btn-primary">
                            "View My Work"
                        </AnchorLink>
                        <AnchorLink href="#contact" class="btn btn-secondary">
                            "Get In Touch"
                        </AnchorLink>
                    </div>
                </div>
            </div>
            <AnchorLink href="#about" class="scroll-indicator">
                <span class="mouse"></span>
            </AnchorLink>
        </section>
    }
}

/// Particles are random, so they only exist client side; the server renders
/// the empty container.
#[component]
fn Particles(count: usize) -> impl IntoView {
    let (particles, set_particles) = signal(Vec::<Particle>::new());

    Effect::new(move |_| {
        let mut rng = fastrand::Rng::new();
        set_particles.set(generate(count, &mut rng));
        log::debug!("spawned {count} particles");
    });

    view! {
        <div id="particles" class="particles">
            {move || {
                particles
                    .get()
                    .into_iter()
                    .map(|p| view! { <div class="particle" style=p.style()></div> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn TypingText(texts: Vec<String>, speeds: TypingSpeeds) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let typewriter = StoredValue::new(Typewriter::new(texts, speeds));
    let timer = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| schedule_tick(typewriter, timer, set_text, Duration::ZERO));
    on_cleanup(move || {
        if let Some(handle) = timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    view! { <span id="typingText" class="typing-text">{text}</span> }
}

fn schedule_tick(
    typewriter: StoredValue<Option<Typewriter>>,
    timer: StoredValue<Option<TimeoutHandle>>,
    text: WriteSignal<String>,
    delay: Duration,
) {
    let res = set_timeout_with_handle(
        move || {
            let Some(Some(step)) = typewriter.try_update_value(|tw| tw.as_mut().map(Typewriter::tick))
            else {
                return;
            };
            if text.try_set(step.text).is_some() {
                // owner is gone
                return;
            }
            schedule_tick(typewriter, timer, text, step.delay);
        },
        delay,
    );
    match res {
        Ok(handle) => {
            timer.try_set_value(Some(handle));
        }
        Err(e) => log::warn!("typing effect stopped: {e:?}"),
    }
}
