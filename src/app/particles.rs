use leptos::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

use crate::build_info::particle_seed;
use crate::motion::ParticleField;

/// Page-wide layer of drifting dots.
#[component]
pub fn FloatingParticles(count: usize) -> impl IntoView {
    let mut rng = SmallRng::seed_from_u64(particle_seed());
    let field = ParticleField::scatter(count, &mut rng);

    view! {
        <div class="fixed inset-0 pointer-events-none" aria-hidden="true">
            {field
                .particles()
                .iter()
                .map(|p| {
                    view! {
                        <div
                            class="particle absolute w-1 h-1 bg-white/10 rounded-full"
                            style=p.css()
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Dots looping diagonally across a card.
#[component]
pub fn OrbitParticles(count: usize) -> impl IntoView {
    let field = ParticleField::orbit(count);

    view! {
        <div class="absolute inset-0 pointer-events-none overflow-hidden" aria-hidden="true">
            {field
                .particles()
                .iter()
                .map(|p| {
                    view! {
                        <div
                            class="particle absolute w-1 h-1 bg-white/20 rounded-full"
                            style=p.css()
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
