use leptos::prelude::*;

use crate::content::{Project, ProjectFilter, PROJECTS};
use crate::motion::Pose;

use super::motion::Reveal;

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);

    view! {
        <section id="projects" class="py-24 bg-[#0a0a0a]">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-end justify-between gap-4 flex-wrap">
                    <h2 class="text-3xl sm:text-4xl font-bold text-white">"Featured Projects"</h2>
                    <div
                        role="tablist"
                        class="inline-flex w-full md:w-auto rounded-lg bg-white/10 p-1"
                    >
                        {ProjectFilter::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        role="tab"
                                        aria-selected=move || (filter.get() == tab).to_string()
                                        class=move || {
                                            if filter.get() == tab {
                                                "flex-1 md:flex-none px-4 py-1.5 text-sm rounded-md font-medium transition-colors duration-200 bg-white/90 text-black"
                                            } else {
                                                "flex-1 md:flex-none px-4 py-1.5 text-sm rounded-md font-medium transition-colors duration-200 text-white/70 hover:text-white"
                                            }
                                        }
                                        on:click=move |_| set_filter(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-10 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        filter
                            .get()
                            .apply(&PROJECTS)
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| {
                                view! {
                                    <Reveal from=Pose::rise(12.0) delay={0.05 * i as f64}>
                                        <ProjectCard project />
                                    </Reveal>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group h-full rounded-3xl border border-white/10 bg-gradient-to-br from-white/5 to-white/[0.02] overflow-hidden">
            <div class="p-6 pb-2">
                <h3 class="text-lg font-semibold text-white flex items-center justify-between gap-2">
                    <span>{project.title}</span>
                    <span class="relative group/tip">
                        <span class="badge bg-white/10 border border-white/10">"Premium"</span>
                        <span
                            role="tooltip"
                            class="pointer-events-none absolute right-0 top-full mt-2 whitespace-nowrap rounded-md bg-black/90 px-3 py-1.5 text-sm font-normal opacity-0 group-hover/tip:opacity-100 transition-opacity duration-200"
                        >
                            "Hand‑crafted UI + clean code"
                        </span>
                    </span>
                </h3>
            </div>
            <div class="p-6 pt-2">
                <p class="text-white/70 min-h-16">{project.blurb}</p>
                <div class="mt-4 flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="badge rounded-full bg-white/10 text-white border border-white/10">
                                    {*t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-6 flex items-center gap-3">
                    <a
                        href=project.demo
                        target="_blank"
                        rel="noreferrer"
                        class="btn-sm rounded-full bg-white text-black hover:bg-white/90"
                    >
                        <i class="icon-play mr-2"></i>
                        "Live"
                    </a>
                    <a
                        href=project.code
                        target="_blank"
                        rel="noreferrer"
                        class="btn-sm rounded-full border border-white/20 text-white hover:bg-white/10"
                    >
                        <i class="icon-github mr-2"></i>
                        "Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
