use leptos::prelude::*;

use crate::content::{EXPERTISE, GITHUB_URL, INTRO, OWNER, TAGLINE};
use crate::motion::{map_range, Pose};

use super::motion::{use_motion, Reveal};
use super::particles::OrbitParticles;

#[component]
pub fn Hero() -> impl IntoView {
    let scroll_y = use_motion().scroll_y();
    let parallax = move |extra: &'static str| {
        let y = map_range(scroll_y.get(), (0.0, 600.0), (0.0, 120.0));
        format!("transform: translateY({y:.1}px);{extra}")
    };

    view! {
        <section
            id="home"
            class="relative min-h-[100svh] grid place-items-center overflow-clip bg-mesh dark:bg-[#0a0a0a]"
        >
            <div
                style=move || parallax("")
                class="pointer-events-none absolute -top-24 right-[-10%] h-[55rem] w-[55rem] rounded-full bg-gradient-to-r from-fuchsia-500/30 to-purple-600/20 blur-3xl animate-float"
            ></div>
            <div
                style=move || parallax(" animation-delay: 2s;")
                class="pointer-events-none absolute -top-32 left-[-10%] h-[45rem] w-[45rem] rounded-full bg-gradient-to-r from-cyan-400/30 to-blue-600/20 blur-3xl animate-float"
            ></div>
            <div class="absolute top-1/4 right-1/4 w-32 h-32 bg-gradient-to-r from-pink-400/20 to-rose-400/20 rounded-full blur-2xl animate-pulse-slow"></div>
            <div
                class="absolute bottom-1/4 left-1/4 w-24 h-24 bg-gradient-to-r from-blue-400/20 to-indigo-400/20 rounded-full blur-2xl animate-pulse-slow"
                style="animation-delay: 1s;"
            ></div>

            <div class="relative z-10 max-w-7xl px-6 pt-32 pb-20 w-full grid md:grid-cols-2 items-center gap-16">
                <div class="space-y-6">
                    <Reveal from=Pose::rise(30.0) duration=0.8 class="space-y-2">
                        <h1 class="text-6xl sm:text-7xl font-black tracking-tight text-gradient-primary leading-tight">
                            {OWNER}
                        </h1>
                        <Reveal
                            from=Pose::grow(0.9)
                            delay=0.3
                            class="flex items-center gap-2 text-lg text-white/90 font-medium"
                        >
                            <span class="w-2 h-2 bg-gradient-to-r from-blue-400 to-purple-400 rounded-full animate-pulse"></span>
                            {TAGLINE}
                        </Reveal>
                    </Reveal>
                    <Reveal from=Pose::rise(20.0) delay=0.4 duration=0.8>
                        <p class="text-xl text-white/80 max-w-xl leading-relaxed">{INTRO}</p>
                    </Reveal>
                    <Reveal
                        from=Pose::rise(20.0)
                        delay=0.6
                        duration=0.8
                        class="flex flex-wrap gap-4 pt-4"
                    >
                        <a href="#projects" class="btn-primary inline-flex items-center gap-2">
                            <i class="icon-rocket h-5 w-5"></i>
                            "View Projects"
                        </a>
                        <a href="#contact" class="btn-secondary inline-flex items-center gap-2">
                            <i class="icon-mail h-5 w-5"></i>
                            "Get in touch"
                        </a>
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-secondary inline-flex items-center gap-2"
                        >
                            <i class="icon-github h-5 w-5"></i>
                            "GitHub"
                        </a>
                    </Reveal>
                </div>

                <Reveal from=Pose::grow(0.95) delay=0.3 duration=0.8 class="relative">
                    <ExpertiseCard />
                </Reveal>
            </div>

            // subtle grid overlay
            <div class="pointer-events-none absolute inset-0 bg-grid"></div>

            <ScrollIndicator />
        </section>
    }
}

#[component]
fn ExpertiseCard() -> impl IntoView {
    view! {
        <div class="card-glass relative overflow-hidden">
            <div class="p-6">
                <div class="text-center mb-6">
                    <h3 class="text-xl font-bold text-gradient-secondary mb-2">"Core Expertise"</h3>
                    <p class="text-white/60 text-sm">"Technologies I work with daily"</p>
                </div>
                <div class="grid grid-cols-3 gap-3">
                    {EXPERTISE
                        .iter()
                        .enumerate()
                        .map(|(i, tile)| {
                            view! {
                                <Reveal
                                    from=Pose::new(0.0, 20.0, 0.8)
                                    delay={0.1 * i as f64}
                                    duration=0.5
                                >
                                    <div class="group aspect-square rounded-2xl border border-white/20 bg-white/5 hover:bg-white/10 hover:border-white/30 hover:scale-105 hover:-translate-y-1 transition-all duration-300 cursor-pointer">
                                        <div class="flex flex-col items-center justify-center gap-3 h-full p-4">
                                            <div class=format!(
                                                "p-3 rounded-xl bg-gradient-to-r {} shadow-lg group-hover:shadow-xl transition-all duration-300",
                                                tile.gradient,
                                            )>
                                                <i class=format!(
                                                    "icon-{} text-2xl text-white",
                                                    tile.icon,
                                                )></i>
                                            </div>
                                            <span class="text-sm font-medium text-white/90 group-hover:text-white transition-colors duration-300">
                                                {tile.label}
                                            </span>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <OrbitParticles count=6 />
            </div>
        </div>
    }
}

#[component]
fn ScrollIndicator() -> impl IntoView {
    view! {
        <div
            class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-rise-in"
            style="animation-delay: 1s;"
        >
            <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center animate-breathe">
                <div class="w-1 h-3 bg-white/60 rounded-full mt-2 animate-scroll-dot"></div>
            </div>
            <p class="text-white/50 text-xs mt-2 text-center animate-breathe" style="animation-delay: 0.5s;">
                "Scroll to explore"
            </p>
        </div>
    }
}
