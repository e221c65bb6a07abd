//! Landing page: banner carousel, latest listings, and static info sections.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::status::{LoadFailed, LoadingSpinner};
use crate::components::toast::log_failure;
use crate::components::visa_card::VisaCard;
use crate::net::api::{VisaApi, VisaQuery};
use crate::net::types::VisaListing;
use crate::state::catalog::LATEST_LIMIT;
use crate::state::fetch::FetchState;
use crate::util::reactive::set_if_live;

/// Carousel auto-advance period.
#[cfg(feature = "csr")]
const SLIDE_INTERVAL_SECS: u64 = 3;

pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

pub static SLIDES: [Slide; 3] = [
    Slide {
        title: "Explore the World",
        subtitle: "Find visa requirements for every destination in one place.",
        image: "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=1600",
    },
    Slide {
        title: "Apply with Confidence",
        subtitle: "Compare fees, processing times and validity before you apply.",
        image: "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=1600",
    },
    Slide {
        title: "Track Your Applications",
        subtitle: "Keep every application you submit on a single dashboard.",
        image: "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?w=1600",
    },
];

/// Index after `current`, wrapping to the first slide.
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index before `current`, wrapping to the last slide.
pub fn prev_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<VisaApi>();
    let latest = RwSignal::new(FetchState::<Vec<VisaListing>>::Loading);
    let slide = RwSignal::new(0_usize);

    leptos::task::spawn_local(async move {
        let result = api.list_visas(&VisaQuery::latest(LATEST_LIMIT)).await;
        if let Err(e) = &result {
            log_failure("load latest visas", e);
        }
        set_if_live(latest, FetchState::from_result(result));
    });

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(SLIDE_INTERVAL_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if slide.try_update(|s| *s = next_slide(*s, SLIDES.len())).is_none() {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="banner">
            {move || {
                let current = &SLIDES[slide.get() % SLIDES.len()];
                view! {
                    <div class="banner__slide" style=format!("background-image: url('{}')", current.image)>
                        <div class="banner__overlay">
                            <h1>{current.title}</h1>
                            <p>{current.subtitle}</p>
                        </div>
                    </div>
                }
            }}
            <button
                class="banner__nav banner__nav--prev"
                aria-label="Previous slide"
                on:click=move |_| slide.update(|s| *s = prev_slide(*s, SLIDES.len()))
            >
                "❮"
            </button>
            <button
                class="banner__nav banner__nav--next"
                aria-label="Next slide"
                on:click=move |_| slide.update(|s| *s = next_slide(*s, SLIDES.len()))
            >
                "❯"
            </button>
        </section>

        <section class="section">
            <h2 class="section__title">"Latest Visas"</h2>
            {move || match latest.get() {
                FetchState::Loading => view! { <LoadingSpinner/> }.into_any(),
                FetchState::Failed(e) => {
                    view! { <LoadFailed message=e.user_message("Failed to load the latest visas.")/> }.into_any()
                }
                FetchState::Ready(visas) => view! {
                    <div class="visa-grid">
                        {visas.into_iter().map(|visa| view! { <VisaCard visa/> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
            <div class="section__cta">
                <A href="/all-visas" attr:class="btn btn--primary">"See all visas"</A>
            </div>
        </section>

        <section class="section section--info">
            <h2 class="section__title">"Why Choose Us"</h2>
            <div class="info-grid">
                <div class="info-card">
                    <h3>"Up-to-date requirements"</h3>
                    <p>"Listings are maintained by the people who process them."</p>
                </div>
                <div class="info-card">
                    <h3>"Transparent fees"</h3>
                    <p>"Every listing shows its fee and processing time up front."</p>
                </div>
                <div class="info-card">
                    <h3>"One dashboard"</h3>
                    <p>"Apply, track and cancel applications from a single page."</p>
                </div>
            </div>
        </section>

        <section class="section section--info">
            <h2 class="section__title">"How It Works"</h2>
            <ol class="steps">
                <li>"Browse visas by country or type."</li>
                <li>"Open a listing and review the details."</li>
                <li>"Apply and follow the application under My Applications."</li>
            </ol>
        </section>
    }
}
