use super::menu_card::MenuCard;
use crate::bridge::Outlet;
use crate::config::PageConfig;
use crate::model::{Catalog, Category, MenuItem};
use crate::state::{ViewAction, ViewState};
use crate::timers::TimeoutCell;
use crate::util::{deep_link, order_message};
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuSectionProps {
    pub catalog: Rc<Catalog>,
    pub config: Rc<PageConfig>,
    /// Receives the item whose preview was requested.
    pub preview: Outlet<MenuItem>,
    #[prop_or_default]
    pub initial: Option<ViewState>,
}

#[function_component(MenuSection)]
pub fn menu_section(props: &MenuSectionProps) -> Html {
    let view = {
        let initial = props.initial.clone().unwrap_or_default();
        use_reducer(move || initial)
    };
    let draft = use_state(|| view.query.clone());
    let debounce = use_mut_ref(TimeoutCell::new);

    {
        let debounce = debounce.clone();
        use_effect_with((), move |_| move || debounce.borrow_mut().cancel());
    }

    let on_input = {
        let dispatcher = view.dispatcher();
        let draft = draft.clone();
        let debounce = debounce.clone();
        let delay = props.config.search_debounce_ms;
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(value.clone());
            let dispatcher = dispatcher.clone();
            debounce.borrow_mut().schedule(Timeout::new(delay, move || {
                dispatcher.dispatch(ViewAction::Search(value));
            }));
        })
    };

    let select_tab = |category: Category| {
        let dispatcher = view.dispatcher();
        let draft = draft.clone();
        let debounce = debounce.clone();
        Callback::from(move |_: MouseEvent| {
            // A pending search belongs to the previous tab.
            debounce.borrow_mut().cancel();
            draft.set(String::new());
            dispatcher.dispatch(ViewAction::SelectCategory(category));
        })
    };

    let on_load_more = {
        let dispatcher = view.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ViewAction::LoadMore))
    };

    let on_preview = {
        let preview = props.preview.clone();
        Callback::from(move |item: MenuItem| {
            if !preview.emit(item) {
                log::debug!("preview ignored: modal is not mounted");
            }
        })
    };

    let listing = view.listing(&props.catalog);
    let cfg = &props.config;

    html! {
        <section class="flex flex-col gap-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div class="flex gap-2" role="tablist">
                    { for Category::ALL.into_iter().map(|category| {
                        let active = category == view.category;
                        html! {
                            <button
                                type="button"
                                role="tab"
                                data-cat={category.key()}
                                aria-selected={active.to_string()}
                                class={classes!(
                                    "tab-btn", "px-4", "py-2", "rounded-full", "font-semibold", "transition",
                                    if active { "bg-green-500 text-white" } else { "bg-gray-200 text-gray-800" }
                                )}
                                onclick={select_tab(category)}
                            >
                                { category.label() }
                            </button>
                        }
                    }) }
                </div>
                <input
                    id="menuSearch"
                    type="search"
                    placeholder="Cari menu..."
                    class="border rounded-lg px-4 py-2 w-full md:w-64"
                    value={(*draft).clone()}
                    oninput={on_input}
                />
            </div>
            <div id="menu-container" class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                { for listing.items.iter().map(|item| html! {
                    <MenuCard
                        key={item.name.clone()}
                        item={(*item).clone()}
                        order_link={AttrValue::from(deep_link(&cfg.messaging_base, &cfg.contact, &order_message(item)))}
                        on_preview={on_preview.clone()}
                    />
                }) }
            </div>
            if listing.items.is_empty() {
                <p id="menu-empty" class="text-center text-gray-500">{"Menu tidak ditemukan."}</p>
            }
            <div class="text-center">
                <button
                    id="loadMore"
                    type="button"
                    class="px-6 py-2 rounded-lg bg-green-600 text-white font-semibold hover:bg-green-700 transition"
                    style={if listing.has_more { "display:inline-block" } else { "display:none" }}
                    onclick={on_load_more}
                >
                    {"Muat Lebih Banyak"}
                </button>
            </div>
        </section>
    }
}
