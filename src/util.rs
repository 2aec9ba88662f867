// Text helpers shared by the cards and the payment panel

use crate::model::{MenuItem, PaymentMethod};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Rupiah with id-ID digit grouping, e.g. `Rp 40.000`.
pub fn format_rupiah(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// `<base>/<contact>?text=<message>`; a trailing slash on `base` is ignored.
pub fn deep_link(base: &str, contact: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        base.trim_end_matches('/'),
        contact,
        encode_component(message)
    )
}

pub fn order_message(item: &MenuItem) -> String {
    format!(
        "Halo, saya ingin pesan {} ({})",
        item.name,
        format_rupiah(item.price)
    )
}

pub fn payment_message(method: &PaymentMethod, item: &MenuItem) -> String {
    format!(
        "Saya ingin melakukan pembayaran {} untuk {}",
        method.label(),
        item.name
    )
}

pub fn qr_filename(item: &MenuItem) -> String {
    format!("{}-QRIS.png", item.name)
}

pub fn copy_notice(account: &str) -> String {
    format!("Nomor rekening {account} berhasil disalin!")
}

pub fn modal_description(item: &MenuItem) -> String {
    format!(
        "{} dibuat segar. Tambahkan catatan khusus jika diperlukan.",
        item.name
    )
}
