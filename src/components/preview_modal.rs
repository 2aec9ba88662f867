use super::payment_detail::PaymentDetail;
use crate::bridge::Outlet;
use crate::config::PageConfig;
use crate::model::{MenuItem, payment_methods};
use crate::state::{ModalAction, ModalState};
use crate::util::modal_description;
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewModalProps {
    /// Items to preview arrive here from the menu grid.
    pub preview: Outlet<MenuItem>,
    pub notify: Outlet<String>,
    pub config: Rc<PageConfig>,
    #[prop_or_default]
    pub initial: Option<ModalState>,
}

#[function_component(PreviewModal)]
pub fn preview_modal(props: &PreviewModalProps) -> Html {
    let state = {
        let initial = props.initial.clone();
        let contact = props.config.contact.clone();
        use_reducer(move || initial.unwrap_or_else(|| ModalState::new(payment_methods(&contact))))
    };
    let content_ref = use_node_ref();

    {
        let dispatcher = state.dispatcher();
        use_effect_with(props.preview.clone(), move |outlet| {
            outlet.connect(Callback::from(move |item| {
                dispatcher.dispatch(ModalAction::Open(item));
            }));
            let outlet = outlet.clone();
            move || outlet.disconnect()
        });
    }

    // Escape closes while open.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.is_open(), move |open| {
            let listener = web_sys::window().filter(|_| *open).map(|window| {
                EventListener::new(&window, "keydown", move |e| {
                    let is_escape = e
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|k| k.key() == "Escape");
                    if is_escape {
                        dispatcher.dispatch(ModalAction::Close);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let Some(open) = state.open.as_ref() else {
        return html! {};
    };
    let item = &open.item;

    let on_backdrop = {
        let dispatcher = state.dispatcher();
        let content_ref = content_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let inside_content = match (content_ref.get(), e.target_dyn_into::<Node>()) {
                (Some(content), Some(target)) => content.contains(Some(&target)),
                _ => false,
            };
            dispatcher.dispatch(ModalAction::BackdropClick { inside_content });
        })
    };
    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ModalAction::Close))
    };
    let on_select_bank = {
        let dispatcher = state.dispatcher();
        Callback::from(move |idx| dispatcher.dispatch(ModalAction::SelectBank(idx)))
    };

    let methods = state.methods.iter().enumerate().map(|(idx, method)| {
        let selected = open.method == Some(idx);
        let on_change = {
            let dispatcher = state.dispatcher();
            Callback::from(move |_: Event| dispatcher.dispatch(ModalAction::SelectMethod(idx)))
        };
        html! {
            <label class={classes!(
                "flex", "items-center", "justify-between", "p-3", "border", "rounded-xl",
                "cursor-pointer", "hover:shadow-lg", "transition", "shadow-sm",
                if selected { "bg-green-50 border-green-600 shadow-lg" } else { "bg-white" }
            )}>
                <span class="font-semibold text-gray-900">{ method.label() }</span>
                <input type="radio" name="paymentMethod" value={idx.to_string()} class="ml-2" checked={selected} onchange={on_change} />
            </label>
        }
    });

    let detail = state.selected_method().map(|method| html! {
        <PaymentDetail
            method={method.clone()}
            item={item.clone()}
            bank={open.bank}
            on_select_bank={on_select_bank.clone()}
            account={state.selected_account().map(|a| AttrValue::from(a.to_string()))}
            notify={props.notify.clone()}
            messaging_base={AttrValue::from(props.config.messaging_base.clone())}
        />
    });

    html! {
        <div
            id="previewModal"
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4"
            role="dialog"
            aria-modal="true"
            aria-hidden="false"
            aria-labelledby="modalTitle"
            onclick={on_backdrop}
        >
            <div ref={content_ref} class="relative bg-white rounded-2xl shadow-xl max-w-lg w-full max-h-[90vh] overflow-y-auto p-6">
                <button id="modalClose" type="button" class="absolute top-3 right-3 text-gray-500 hover:text-gray-900" aria-label="Tutup" onclick={on_close}>{"✕"}</button>
                <img id="modalImg" src={item.image_url.clone()} alt={item.name.clone()} class="w-full h-56 object-cover rounded-xl mb-4" />
                <h3 id="modalTitle" class="text-2xl font-bold text-gray-900">{ item.name.clone() }</h3>
                <span id="modalBadge" class="inline-block text-sm font-semibold text-green-700 my-1">{ item.badge.clone() }</span>
                <p id="modalDesc" class="text-gray-600 mb-4">{ modal_description(item) }</p>
                <div id="modalPayment">
                    <div class="flex flex-col gap-3" role="radiogroup" aria-label="Metode pembayaran">
                        { for methods }
                    </div>
                    { for detail }
                </div>
            </div>
        </div>
    }
}
