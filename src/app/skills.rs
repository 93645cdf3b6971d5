use leptos::{html, prelude::*};

use super::{reveal::GlowCard, sections::SectionHeader};
use crate::{
    content::Skill,
    effects::{skills::SkillBar, with_class},
};

#[component]
pub fn Skills(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="container">
                <SectionHeader title="Skills" subtitle="Tools I reach for" />
                <div class="skills-grid">
                    {skills.iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Skill card whose bar fills to its `data-progress` the first time the card
/// is revealed.
#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    let progress_ref = NodeRef::<html::Div>::new();
    let bar = RwSignal::new(SkillBar::new());
    let fill = Callback::new(move |_: ()| {
        let Some(el) = progress_ref.get_untracked() else {
            return;
        };
        let attr = el.get_attribute("data-progress");
        match bar.try_update(|b| b.animate_from_attribute(attr.as_deref())) {
            Some(Ok(Some(width))) => log::trace!("{} bar filled to {width}", skill.name),
            Some(Err(e)) => log::warn!("{} bar not filled: {e}", skill.name),
            _ => {}
        }
    });

    view! {
        <GlowCard class="skill-card" on_reveal=fill>
            <div class="skill-header">
                <i class=skill.icon.as_str()></i>
                <span class="skill-name">{skill.name.as_str()}</span>
                <span class="skill-percent">{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill-bar">
                <div
                    node_ref=progress_ref
                    class=move || with_class("skill-progress", "animated", bar.with(SkillBar::is_animated))
                    data-progress=skill.level.to_string()
                    style:width=move || bar.with(SkillBar::width)
                ></div>
            </div>
        </GlowCard>
    }
}
