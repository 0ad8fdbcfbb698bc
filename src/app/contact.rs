use leptos::{html, prelude::*};

use crate::contact::ContactDraft;
use crate::content::{CONTACT, GITHUB_URL, LINKEDIN_URL, RESUME_PATH};
use crate::motion::Pose;

use super::motion::Reveal;

const FIELD_CLASS: &str =
    "rounded-xl bg-white/10 border border-white/10 px-4 py-3 text-white placeholder:text-white/50";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 bg-[#0a0a0a]">
            <div class="max-w-7xl mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-10 items-start">
                    <Reveal from=Pose::rise(20.0)>
                        <h2 class="text-3xl sm:text-4xl font-bold text-white">"Let’s work together"</h2>
                        <p class="mt-4 text-white/70">
                            "I’m open to roles and collaborations in AI/ML, GenAI, and MLOps. Prefer hands‑on engineering with measurable impact."
                        </p>
                        <div class="mt-6 space-y-3 text-white/80">
                            <div class="flex items-center gap-2">
                                <i class="icon-mail"></i>
                                {CONTACT.email}
                            </div>
                            <div class="flex items-center gap-2">
                                <i class="icon-phone"></i>
                                {CONTACT.phone}
                            </div>
                            <div class="flex items-center gap-2">
                                <i class="icon-map-pin"></i>
                                {CONTACT.location}
                            </div>
                        </div>
                        <div class="mt-6 flex gap-3">
                            <a
                                href=RESUME_PATH
                                download
                                class="btn-sm rounded-full border border-white/20 text-white hover:bg-white/10"
                            >
                                <i class="icon-download mr-2"></i>
                                "Resume"
                            </a>
                            <a
                                href=LINKEDIN_URL
                                target="_blank"
                                rel="noreferrer"
                                class="btn-sm rounded-full text-white hover:bg-white/10"
                            >
                                <i class="icon-linkedin mr-2"></i>
                                "LinkedIn"
                            </a>
                            <a
                                href=GITHUB_URL
                                target="_blank"
                                rel="noreferrer"
                                class="btn-sm rounded-full text-white hover:bg-white/10"
                            >
                                <i class="icon-github mr-2"></i>
                                "GitHub"
                            </a>
                        </div>
                    </Reveal>
                    <Reveal
                        from=Pose::rise(20.0)
                        delay=0.1
                        class="rounded-3xl border border-white/10 bg-gradient-to-br from-white/5 to-white/[0.02]"
                    >
                        <div class="p-6 pb-2">
                            <h3 class="text-lg font-semibold text-white">"Send a message"</h3>
                        </div>
                        <div class="p-6 pt-2">
                            <ContactForm />
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<String>);

    let read_input = |node: NodeRef<html::Input>| {
        node.get_untracked()
            .map(|el| el.value())
            .unwrap_or_default()
    };

    view! {
        <form
            class="grid gap-3"
            on:submit=move |ev| {
                ev.prevent_default();
                let draft = ContactDraft {
                    name: read_input(name_ref),
                    email: read_input(email_ref),
                    subject: read_input(subject_ref),
                    message: message_ref
                        .get_untracked()
                        .map(|el| el.value())
                        .unwrap_or_default(),
                };
                match draft.mailto(CONTACT.email) {
                    Ok(link) => {
                        set_error(None);
                        if let Err(e) = window().location().set_href(&link) {
                            log::warn!("couldn't open mail client: {e:?}");
                        }
                    }
                    Err(e) => set_error(Some(e.to_string())),
                }
            }
        >
            <input node_ref=name_ref class=FIELD_CLASS placeholder="Your name" />
            <input node_ref=email_ref type="email" class=FIELD_CLASS placeholder="Your email" />
            <input node_ref=subject_ref class=FIELD_CLASS placeholder="Subject" />
            <textarea node_ref=message_ref rows=5 class=FIELD_CLASS placeholder="Message"></textarea>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <p role="alert" class="text-sm text-rose-400">
                                {e}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="rounded-full bg-white text-black font-medium py-2.5 hover:bg-white/90 active:scale-95 transition-all duration-200"
            >
                "Send"
            </button>
        </form>
    }
}
