use leptos::prelude::*;

use crate::content::{ABOUT, QUICK_LINKS, STATS};
use crate::motion::Pose;

use super::motion::Reveal;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 bg-[#0a0a0a]">
            <div class="max-w-7xl mx-auto px-4">
                <div class="grid md:grid-cols-5 gap-10 items-start">
                    <Reveal from=Pose::rise(20.0) class="md:col-span-3">
                        <h2 class="text-3xl sm:text-4xl font-bold text-white">"About"</h2>
                        <p class="mt-4 text-white/70 leading-relaxed">{ABOUT}</p>
                        <div class="mt-8 grid grid-cols-3 gap-3">
                            {STATS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <div class="rounded-2xl border border-white/10 bg-white/[0.03]">
                                            <div class="p-6">
                                                <div class="text-3xl font-extrabold text-cyan-400">
                                                    {s.value}
                                                </div>
                                                <div class="text-white/70 text-sm">{s.label}</div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal
                        from=Pose::rise(20.0)
                        delay=0.1
                        class="md:col-span-2 rounded-3xl border border-white/10 bg-gradient-to-br from-white/5 to-white/[0.02]"
                    >
                        <div class="p-6 pb-2">
                            <h3 class="text-lg font-semibold text-white">"Quick Links"</h3>
                        </div>
                        <div class="p-6 pt-2 space-y-3">
                            {QUICK_LINKS
                                .iter()
                                .map(|link| {
                                    let (target, rel, trailing) = if link.external {
                                        (Some("_blank"), Some("noreferrer"), "icon-external-link")
                                    } else {
                                        (None, None, "icon-arrow-right")
                                    };
                                    view! {
                                        <a
                                            class="flex items-center justify-between p-3 rounded-xl border border-white/10 hover:bg-white/[0.04]"
                                            href=link.href
                                            target=target
                                            rel=rel
                                        >
                                            <div class="flex items-center gap-3 text-white/80">
                                                <i class=format!("icon-{} text-xl", link.icon)></i>
                                                {link.label}
                                            </div>
                                            <i class=format!("{trailing} text-white/50")></i>
                                        </a>
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
