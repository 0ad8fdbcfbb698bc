use leptos::prelude::*;

use crate::content::{NAV_ITEMS, OWNER};
use crate::motion::map_range;

use super::motion::use_motion;

#[component]
pub fn Navbar(dark: ReadSignal<bool>, set_dark: WriteSignal<bool>) -> impl IntoView {
    let scroll_y = use_motion().scroll_y();
    let background = move || {
        let opacity = map_range(scroll_y.get(), (0.0, 200.0), (0.3, 0.9));
        format!("background-color: rgba(10, 10, 12, {opacity:.3});")
    };
    let monogram = OWNER
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect::<String>();

    view! {
        <nav
            style=background
            class="fixed top-0 inset-x-0 z-50 backdrop-blur-xl border-b border-white/10 shadow-2xl"
        >
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <a
                    href="#home"
                    class="text-2xl font-bold text-gradient-primary hover:scale-110 active:scale-95 transition-transform duration-300"
                >
                    {monogram}
                </a>
                <div class="hidden md:flex items-center gap-8 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <a
                                    href=format!("#{}", item.to_lowercase())
                                    class="animate-drop-in text-white/80 hover:text-white hover:-translate-y-0.5 relative group font-medium transition-all duration-300"
                                    style=format!("animation-delay: {:.1}s;", i as f64 * 0.1)
                                >
                                    {*item}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-blue-400 to-purple-400 group-hover:w-full transition-all duration-300"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3">
                    <ThemeToggle dark set_dark />
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeToggle(dark: ReadSignal<bool>, set_dark: WriteSignal<bool>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_dark.update(|d| *d = !*d)
            aria-label="Toggle color theme"
            class="relative p-3 rounded-full bg-white/10 backdrop-blur-sm border border-white/20 hover:bg-white/20 hover:border-white/30 hover:scale-105 active:scale-95 transition-all duration-300 group"
        >
            <div class="flex items-center gap-2">
                <span class="hidden sm:inline text-sm font-medium text-white/90 group-hover:text-white transition-colors duration-300">
                    {move || if dark.get() { "Dark" } else { "Light" }}
                    " mode"
                </span>
                <div class="relative">
                    <i class="icon-sparkles h-5 w-5 text-white/90 group-hover:text-white transition-colors duration-300"></i>
                    <div class="absolute inset-0 rounded-full bg-gradient-to-r from-blue-400 to-purple-400 opacity-0 group-hover:opacity-20 blur-sm animate-breathe"></div>
                </div>
            </div>
        </button>
    }
}
