use crate::bridge::Outlet;
use crate::state::{ToastAction, ToastPhase, ToastState};
use gloo::timers::future::TimeoutFuture;
use yew::prelude::*;

// Removal happens on `transitionend`; this bounds it when no transition runs.
const REMOVE_FALLBACK_MS: u32 = 600;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastHostProps {
    pub outlet: Outlet<String>,
    pub duration_ms: u32,
    #[prop_or_default]
    pub initial: Option<ToastState>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let state = {
        let initial = props.initial.clone().unwrap_or_default();
        use_reducer(move || initial)
    };
    let next_id = use_mut_ref(|| 0u64);

    {
        let dispatcher = state.dispatcher();
        let next_id = next_id.clone();
        let duration = props.duration_ms;
        use_effect_with(props.outlet.clone(), move |outlet| {
            outlet.connect(Callback::from(move |message: String| {
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next += 1;
                    *next
                };
                dispatcher.dispatch(ToastAction::Push { id, message });
                let dispatcher = dispatcher.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    // Let the entering classes paint before transitioning in.
                    TimeoutFuture::new(16).await;
                    dispatcher.dispatch(ToastAction::Show(id));
                    TimeoutFuture::new(duration).await;
                    dispatcher.dispatch(ToastAction::Hide(id));
                    TimeoutFuture::new(REMOVE_FALLBACK_MS).await;
                    dispatcher.dispatch(ToastAction::Remove(id));
                });
            }));
            let outlet = outlet.clone();
            move || outlet.disconnect()
        });
    }

    html! {
        <div id="toastContainer" class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2" role="status" aria-live="polite">
            { for state.toasts.iter().map(|toast| {
                let ontransitionend = {
                    let dispatcher = state.dispatcher();
                    let id = toast.id;
                    let leaving = toast.phase == ToastPhase::Leaving;
                    Callback::from(move |_: TransitionEvent| {
                        if leaving {
                            dispatcher.dispatch(ToastAction::Remove(id));
                        }
                    })
                };
                html! {
                    <div
                        key={toast.id.to_string()}
                        class={classes!(
                            "bg-green-600", "text-white", "px-4", "py-2", "rounded-lg", "shadow-lg",
                            "transition-all", "duration-300", toast.phase_class()
                        )}
                        ontransitionend={ontransitionend}
                    >
                        { toast.message.clone() }
                    </div>
                }
            }) }
        </div>
    }
}
