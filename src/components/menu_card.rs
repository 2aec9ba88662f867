use crate::model::MenuItem;
use crate::util::format_rupiah;
use web_sys::Element;
use yew::prelude::*;

pub const CARD_BLURB: &str =
    "Disiapkan segar saat Anda pesan. Tambahkan catatan khusus jika diperlukan.";

#[derive(Properties, PartialEq, Clone)]
pub struct MenuCardProps {
    pub item: MenuItem,
    /// Deep link with the pre-filled order message.
    pub order_link: AttrValue,
    pub on_preview: Callback<MenuItem>,
}

#[function_component(MenuCard)]
pub fn menu_card(props: &MenuCardProps) -> Html {
    let item = &props.item;
    let price = format_rupiah(item.price);

    // The whole card previews, except clicks landing on the order link.
    let on_card_click = {
        let cb = props.on_preview.clone();
        let item = item.clone();
        Callback::from(move |e: MouseEvent| {
            let on_link = e
                .target_dyn_into::<Element>()
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            if !on_link {
                cb.emit(item.clone());
            }
        })
    };
    let on_preview_btn = {
        let cb = props.on_preview.clone();
        let item = item.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(item.clone());
        })
    };

    html! {
        <article class="bg-white rounded-2xl shadow-md hover:shadow-xl transition overflow-hidden cursor-pointer" onclick={on_card_click}>
            <div class="relative bg-gray-200 h-44 sm:h-56 md:h-48 lg:h-40 overflow-hidden">
                <img src={item.image_url.clone()} alt={item.name.clone()} class="w-full h-full object-cover hover:scale-105 transition duration-300" loading="lazy" />
                if let Some(badge) = item.badge() {
                    <span class="absolute top-3 right-3 bg-white text-gray-900 text-xs px-3 py-1 rounded-full font-semibold shadow-md">{ badge.to_string() }</span>
                }
            </div>
            <div class="p-5">
                <h4 class="text-lg font-bold text-gray-900 mb-2">{ item.name.clone() }</h4>
                <p class="text-gray-500 text-sm mb-4">{ CARD_BLURB }</p>
                <div class="flex items-center justify-between gap-3">
                    <span class="font-bold text-lg text-green-600">{ price }</span>
                    <div class="flex gap-2">
                        <button type="button" class="preview-btn px-3 py-2 rounded-lg border-2 border-gray-300 hover:bg-gray-100 transition font-semibold text-sm" onclick={on_preview_btn}>{"Lihat"}</button>
                        <a href={props.order_link.clone()} target="_blank" rel="noopener noreferrer" class="px-3 py-2 rounded-lg bg-green-600 text-white hover:bg-green-700 transition font-semibold text-sm">{"Pesan"}</a>
                    </div>
                </div>
            </div>
        </article>
    }
}
