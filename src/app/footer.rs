use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::build_info::build_year;
use crate::content::OWNER;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-white/10 bg-[#0a0a0a]">
            <div class="max-w-7xl mx-auto px-4 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="text-white/60">
                    {format!("© {} {OWNER}. Built with care for AI/ML.", build_year())}
                </div>
                <div class="flex items-center gap-4 text-white/60">
                    <a class="hover:text-white" href="#home">
                        "Back to top"
                    </a>
                    <span>"•"</span>
                    <a class="hover:text-white" href="/sitemap.xml">
                        "Sitemap"
                    </a>
                </div>
            </div>
        </footer>
    }
}

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    view! {
        <button
            on:click=move |_| scroll_to_top()
            aria-label="Scroll to top"
            class="fixed bottom-8 right-8 z-50 p-3 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-2xl hover:shadow-blue-500/25 hover:scale-110 hover:-translate-y-1 active:scale-95 transition-all duration-300 group animate-pop-in"
            style="animation-delay: 2s;"
        >
            <i class="icon-arrow-up-right block w-5 h-5 rotate-45 group-hover:rotate-0 transition-transform duration-300"></i>
        </button>
    }
}
