use leptos::{either::Either, prelude::*};

use crate::content::{Testimonial, TESTIMONIALS};
use crate::motion::Pose;

use super::motion::Reveal;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-24 bg-[#0a0a0a]">
            <div class="max-w-7xl mx-auto px-4">
                <h2 class="text-3xl sm:text-4xl font-bold text-white text-center">
                    "What people say"
                </h2>
                <div class="mt-10 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, testimonial)| {
                            view! {
                                <Reveal from=Pose::rise(16.0) delay={0.1 * i as f64}>
                                    <TestimonialCard testimonial />
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
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <div class="h-full rounded-3xl border border-white/10 bg-gradient-to-br from-white/5 to-white/[0.02]">
            <div class="p-6">
                <div class="flex items-center gap-3">
                    <Avatar src=testimonial.avatar_url fallback=testimonial.initials() />
                    <div>
                        <div class="text-white font-medium">{testimonial.reviewer}</div>
                        <div class="text-white/60 text-sm">{testimonial.role}</div>
                    </div>
                </div>
                <p class="mt-4 text-white/80">"“" {testimonial.quote} "”"</p>
            </div>
        </div>
    }
}

/// Round avatar that swaps to initials if the image can't be loaded.
#[component]
fn Avatar(src: &'static str, fallback: String) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <span class="relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full bg-white/10">
            {move || {
                if failed.get() {
                    Either::Left(
                        view! {
                            <span class="flex h-full w-full items-center justify-center text-sm font-medium">
                                {fallback.clone()}
                            </span>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <img
                                class="aspect-square h-full w-full"
                                src=src
                                alt="avatar"
                                loading="lazy"
                                on:error=move |_| {
                                    log::warn!("avatar failed to load: {src}");
                                    set_failed(true);
                                }
                            />
                        },
                    )
                }
            }}
        </span>
    }
}
