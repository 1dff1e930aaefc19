//! Clickable star rating

use super::icons::StarIcon;
use dioxus::prelude::*;

#[component]
pub fn StarRating(
    #[props(default = 10)] max_rating: u8,
    /// Rating already picked
    rating: Option<u8>,
    on_rate: EventHandler<u8>,
) -> Element {
    // Preview while hovering; the picked rating shows otherwise
    let mut hovered = use_signal(|| None::<u8>);
    let shown = hovered().or(rating);

    rsx! {
        div { class: "rating",
            div { class: "stars",
                for star in 1..=max_rating {
                    span {
                        key: "{star}",
                        role: "button",
                        "data-testid": "star-{star}",
                        onclick: move |_| on_rate.call(star),
                        onmouseenter: move |_| hovered.set(Some(star)),
                        onmouseleave: move |_| hovered.set(None),
                        StarIcon { filled: shown.is_some_and(|s| star <= s) }
                    }
                }
            }
            p { class: "rating-value",
                if let Some(shown) = shown {
                    "{shown}"
                }
            }
        }
    }
}
