//! Home Page
//!
//! Hero, card programme tiles and a rotating testimonial strip.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::context::{use_app, Route};
use crate::models::CardType;

const ROTATE_MS: u32 = 6_000;

const TESTIMONIALS: &[(&str, &str)] = &[
    ("The card means I no longer have to explain my condition at every till.", "Priya, Manchester"),
    ("Caring for my dad is easier when venues recognise the Carers Card straight away.", "Tom, Bristol"),
    ("Our staff know exactly what support to offer when a customer shows the card.", "Partner venue, Leeds"),
];

fn blurb(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Disability => "Proof of disability accepted by partner venues, with discounts and access support.",
        CardType::Carers => "Recognition for unpaid carers, including free companion entry at many venues.",
        CardType::CustomerSupport => "A discreet way to let staff know you may need a little extra help.",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();
    let (slide, set_slide) = signal(0usize);

    // Dropped with the page, which stops the rotation
    let ticker = StoredValue::new_local(None::<Interval>);
    ticker.set_value(Some(Interval::new(ROTATE_MS, move || {
        set_slide.update(|i| *i = (*i + 1) % TESTIMONIALS.len());
    })));

    view! {
        <section class="hero">
            <h1>"One card. Recognised everywhere."</h1>
            <p>"Apply for a disability, carers or customer support card and unlock discounts at hundreds of partners."</p>
            <div class="hero-actions">
                <button class="btn primary" on:click=move |_| ctx.navigate(Route::Apply(CardType::Disability))>
                    "Apply now"
                </button>
                <button class="btn secondary" on:click=move |_| ctx.navigate(Route::Partners)>
                    "See partners"
                </button>
            </div>
        </section>
        <section class="card-tiles">
            {CardType::ALL
                .into_iter()
                .map(|card_type| {
                    view! {
                        <article class="card-tile">
                            <h2>{card_type.label()}</h2>
                            <p>{blurb(card_type)}</p>
                            <div class="tile-actions">
                                <button class="btn primary" on:click=move |_| ctx.navigate(Route::Apply(card_type))>
                                    "Apply"
                                </button>
                                <button class="btn link" on:click=move |_| ctx.navigate(Route::Renew(card_type))>
                                    "Renew"
                                </button>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </section>
        <section class="lanyard-promo">
            <h2>"Verified lanyards"</h2>
            <p>"Pair your card with a lanyard so staff can spot it at a glance."</p>
            <button class="btn secondary" on:click=move |_| ctx.navigate(Route::Lanyard)>"Order a lanyard"</button>
        </section>
        <section class="testimonials">
            {move || {
                let (quote, who) = TESTIMONIALS[slide.get() % TESTIMONIALS.len()];
                view! {
                    <blockquote>
                        <p>{quote}</p>
                        <cite>{who}</cite>
                    </blockquote>
                }
            }}
            <div class="dots">
                {(0..TESTIMONIALS.len())
                    .map(|i| {
                        view! {
                            <button
                                class=move || if slide.get() == i { "dot active" } else { "dot" }
                                on:click=move |_| set_slide.set(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
