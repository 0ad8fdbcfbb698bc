mod about;
mod contact;
mod footer;
mod hero;
mod motion;
mod navbar;
mod particles;
mod projects;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::content::OWNER;

use about::About;
use contact::Contact;
use footer::{Footer, ScrollToTop};
use hero::Hero;
use motion::MotionProvider;
use navbar::Navbar;
use particles::FloatingParticles;
use projects::Projects;
use skills::Skills;
use testimonials::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.469.0/font/lucide.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
                <noscript>
                    <style>
                        ".reveal { opacity: 1 !important; transform: none !important; }"
                    </style>
                </noscript>
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta
            name="description"
            content="AI/ML engineer building agentic workflows, RAG systems and LLMOps pipelines."
        />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let (dark, set_dark) = signal(true);

    #[cfg(feature = "hydrate")]
    {
        let (stored_dark, set_stored_dark, _) =
            use_local_storage::<Option<bool>, JsonSerdeWasmCodec>("dark_mode");
        Effect::watch(
            || (),
            move |_, _, _| {
                if let Some(d) = stored_dark.get_untracked() {
                    set_dark(d);
                }
            },
            true,
        );
        Effect::watch(
            move || dark.get(),
            move |d, _, _| set_stored_dark.set(Some(*d)),
            false,
        );
    }

    view! {
        <Title text="Portfolio" />
        <MotionProvider>
            <div
                class="min-h-screen font-sans bg-[#0a0a0a] text-white selection:bg-cyan-400/30 selection:text-white relative overflow-hidden"
                class:dark=dark
            >
                <div class="fixed inset-0 bg-mesh opacity-10 pointer-events-none"></div>
                <FloatingParticles count=20 />
                <Navbar dark set_dark />
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Testimonials />
                <Contact />
                <Footer />
                <ScrollToTop />
            </div>
        </MotionProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen grid place-items-center bg-[#0a0a0a] text-white">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-black text-gradient-primary">"404"</h1>
                <p class="text-white/70">"Nothing lives at this address."</p>
                <a href="/" class="btn-secondary inline-flex items-center gap-2">
                    "Back home"
                </a>
            </div>
        </main>
    }
}
