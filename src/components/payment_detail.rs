use crate::bridge::Outlet;
use crate::browser;
use crate::model::{MenuItem, PaymentKind, PaymentMethod};
use crate::util::{copy_notice, deep_link, payment_message, qr_filename};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const ACTION_BTN: &str =
    "w-full px-3 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 transition font-semibold";

#[derive(Properties, PartialEq, Clone)]
pub struct PaymentDetailProps {
    pub method: PaymentMethod,
    pub item: MenuItem,
    /// Selected bank for transfers.
    #[prop_or_default]
    pub bank: usize,
    #[prop_or_default]
    pub on_select_bank: Callback<usize>,
    /// Account number the copy button writes to the clipboard.
    #[prop_or_default]
    pub account: Option<AttrValue>,
    /// Notification outlet for copy/download confirmations.
    pub notify: Outlet<String>,
    pub messaging_base: AttrValue,
}

#[function_component(PaymentDetail)]
pub fn payment_detail(props: &PaymentDetailProps) -> Html {
    let body = match &props.method.kind {
        PaymentKind::Cash { note } => html! {
            <p class="text-gray-600 text-sm">{ note.clone() }</p>
        },
        PaymentKind::BankTransfer { banks } => {
            let on_change = {
                let cb = props.on_select_bank.clone();
                Callback::from(move |e: Event| {
                    let select = e.target_unchecked_into::<HtmlSelectElement>();
                    if let Ok(idx) = select.value().parse::<usize>() {
                        cb.emit(idx);
                    }
                })
            };
            let account = props.account.clone();
            let on_copy = {
                let notify = props.notify.clone();
                Callback::from(move |_: MouseEvent| {
                    let Some(account) = account.as_ref().map(AttrValue::to_string) else {
                        return;
                    };
                    let notify = notify.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match browser::copy_text(&account).await {
                            Ok(()) => {
                                notify.emit(copy_notice(&account));
                            }
                            Err(e) => {
                                log::warn!("{e}");
                                notify.emit("Gagal menyalin nomor rekening".to_string());
                            }
                        }
                    });
                })
            };
            html! {
                <>
                    <select class="border p-2 rounded w-full mb-2 text-gray-700" aria-label="Pilih bank" onchange={on_change}>
                        { for banks.iter().enumerate().map(|(i, bank)| html! {
                            <option value={i.to_string()} selected={i == props.bank}>{ bank.display() }</option>
                        }) }
                    </select>
                    <button type="button" class={classes!("mt-2", ACTION_BTN)} data-account={props.account.clone()} onclick={on_copy}>{"Salin Nomor Rek"}</button>
                </>
            }
        }
        PaymentKind::QrCode { image_url, note } => {
            let on_download = {
                let notify = props.notify.clone();
                let href = image_url.clone();
                let filename = qr_filename(&props.item);
                Callback::from(move |_: MouseEvent| match browser::download(&href, &filename) {
                    Ok(()) => {
                        notify.emit("QRIS berhasil diunduh!".to_string());
                    }
                    Err(e) => log::warn!("QR download failed: {e}"),
                })
            };
            html! {
                <>
                    <img src={image_url.clone()} alt="QRIS" class="w-48 h-48 mx-auto rounded-lg shadow-md mb-2" />
                    <p class="text-gray-600 text-sm text-center mb-2">{ note.clone() }</p>
                    <button type="button" class={classes!("mb-2", ACTION_BTN)} onclick={on_download}>{"Download QRIS"}</button>
                </>
            }
        }
    };

    let confirm_link = deep_link(
        &props.messaging_base,
        &props.method.contact,
        &payment_message(&props.method, &props.item),
    );

    html! {
        <div id="paymentDetail" class="mt-3 p-3 border rounded-xl bg-gray-50 transition-all duration-300">
            { body }
            <a
                href={confirm_link}
                target="_blank"
                rel="noopener noreferrer"
                class="mt-2 w-full inline-block px-4 py-2 bg-green-600 text-white rounded-xl text-center hover:bg-green-700 transition font-semibold"
            >
                {"Kirim Bukti / Konfirmasi"}
            </a>
        </div>
    }
}
