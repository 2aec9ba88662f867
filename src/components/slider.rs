use crate::config::Slide;
use crate::state::{SliderAction, SliderState};
use gloo::timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SliderProps {
    pub slides: Vec<Slide>,
    pub interval_ms: u32,
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let count = props.slides.len();
    let state = use_reducer(move || SliderState::new(count));

    // Auto-rotate; nothing to rotate with fewer than two slides.
    {
        let dispatcher = state.dispatcher();
        use_effect_with((count, props.interval_ms), move |(count, ms)| {
            let interval = (*count > 1 && *ms > 0)
                .then(|| Interval::new(*ms, move || dispatcher.dispatch(SliderAction::Tick)));
            move || drop(interval)
        });
    }

    if count == 0 {
        return html! {};
    }

    let go_to = |i: usize| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SliderAction::GoTo(i)))
    };

    html! {
        <div class="relative overflow-hidden rounded-2xl shadow-lg">
            <div
                id="slider-track"
                class="flex transition-transform duration-700 ease-in-out"
                style={format!("transform:{};", state.transform())}
            >
                { for props.slides.iter().map(|slide| html! {
                    <div class="min-w-full relative">
                        <img src={slide.image_url.clone()} alt={slide.caption.clone()} class="w-full h-64 md:h-96 object-cover" />
                        <p class="absolute bottom-12 left-6 text-white text-2xl font-bold drop-shadow">{ slide.caption.clone() }</p>
                    </div>
                }) }
            </div>
            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2" role="tablist">
                { for (0..count).map(|i| {
                    let active = state.is_active(i);
                    html! {
                        <button
                            type="button"
                            role="tab"
                            data-index={i.to_string()}
                            aria-selected={active.to_string()}
                            aria-label={format!("Slide {}", i + 1)}
                            class={classes!("w-3", "h-3", "rounded-full", if active { "bg-white" } else { "bg-white/60" })}
                            onclick={go_to(i)}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
