use leptos::prelude::*;

use crate::content::{SkillCategory, SKILLS};
use crate::motion::Pose;

use super::motion::Reveal;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 bg-[#0a0a0a] relative overflow-hidden">
            <div class="absolute inset-0 bg-mesh opacity-30"></div>

            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <Reveal from=Pose::rise(20.0) class="text-center mb-16">
                    <h2 class="text-4xl sm:text-5xl font-bold text-gradient-primary mb-4">
                        "Technical Skills"
                    </h2>
                    <p class="text-xl text-white/70 max-w-2xl mx-auto">
                        "Expertise across the full AI/ML stack, from research to production deployment"
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal from=Pose::rise(30.0) delay={0.2 * i as f64}>
                                    <CategoryCard category />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="card-glass h-full group hover:border-white/20 transition-all duration-500">
            <div class="p-6 pb-4">
                <div class="flex items-center gap-3 mb-2">
                    <div class=format!(
                        "p-3 rounded-xl bg-gradient-to-r {} shadow-lg",
                        category.gradient,
                    )>
                        <i class=format!("icon-{} text-2xl text-white", category.icon)></i>
                    </div>
                    <h3 class="text-xl font-bold text-white group-hover:text-gradient-primary transition-all duration-300">
                        {category.title}
                    </h3>
                </div>
            </div>
            <div class="p-6 pt-0">
                <div class="flex flex-wrap gap-2">
                    {category
                        .items
                        .iter()
                        .enumerate()
                        .map(|(j, item)| {
                            view! {
                                <Reveal
                                    from=Pose::grow(0.8)
                                    delay={0.05 * j as f64}
                                    duration=0.3
                                >
                                    <span class="badge rounded-full bg-white/10 text-white border border-white/20 hover:bg-white/20 hover:border-white/30 transition-all duration-300 cursor-default">
                                        {*item}
                                    </span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
