//! Core data models for the menu page.
//! The catalog and payment methods are built once at startup and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of items generated for every category.
pub const ITEMS_PER_CATEGORY: usize = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Fav,
    Drink,
    Snack,
}

impl Category {
    /// Tab order.
    pub const ALL: [Category; 3] = [Category::Fav, Category::Drink, Category::Snack];

    /// Key carried by the tab buttons (`data-cat`).
    pub fn key(self) -> &'static str {
        match self {
            Category::Fav => "fav",
            Category::Drink => "drink",
            Category::Snack => "snack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Fav => "Favorit",
            Category::Drink => "Minuman",
            Category::Snack => "Snack",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Price in Rupiah (no minor unit is ever displayed).
    pub price: u64,
    pub image_url: String,
    /// Promotional label; empty when the item has none.
    pub badge: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: u64, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_url: image_url.into(),
            badge: String::new(),
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }

    pub fn badge(&self) -> Option<&str> {
        if self.badge.is_empty() {
            None
        } else {
            Some(&self.badge)
        }
    }
}

/// Ordered items per category. Order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: HashMap<Category, Vec<MenuItem>>,
}

impl Catalog {
    pub fn with_category(mut self, category: Category, items: Vec<MenuItem>) -> Self {
        self.items.insert(category, items);
        self
    }

    /// Items of `category`, empty when the category was never populated.
    pub fn items(&self, category: Category) -> &[MenuItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The restaurant's hard-coded menu.
    pub fn generate() -> Self {
        let gen_items = |name: &str, base_price: u64, tags: &str, badge_every: usize, badge: &str| {
            (0..ITEMS_PER_CATEGORY)
                .map(|i| {
                    let item = MenuItem::new(
                        format!("{name} {}", i + 1),
                        (base_price + i as u64) * 1000,
                        format!("https://source.unsplash.com/500x400/?{tags},{i}"),
                    );
                    if i % badge_every == 0 {
                        item.with_badge(badge)
                    } else {
                        item
                    }
                })
                .collect::<Vec<_>>()
        };
        Catalog::default()
            .with_category(
                Category::Fav,
                gen_items("Menu Favorit", 40, "food,meal", 3, "⭐ Best Seller"),
            )
            .with_category(
                Category::Drink,
                gen_items("Minuman", 10, "drink,juice", 4, "🆕 Baru"),
            )
            .with_category(
                Category::Snack,
                gen_items("Snack", 15, "dessert,snack", 5, "🎉 Promo"),
            )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
    pub account: String,
}

impl Bank {
    /// Option text in the bank selector.
    pub fn display(&self) -> String {
        format!("{} - {}", self.name, self.account)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    Cash { note: String },
    BankTransfer { banks: Vec<Bank> },
    QrCode { image_url: String, note: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub kind: PaymentKind,
    /// Messaging contact that receives the payment confirmation.
    pub contact: String,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self.kind {
            PaymentKind::Cash { .. } => "Tunai",
            PaymentKind::BankTransfer { .. } => "Transfer Bank",
            PaymentKind::QrCode { .. } => "QRIS",
        }
    }

    pub fn banks(&self) -> &[Bank] {
        match &self.kind {
            PaymentKind::BankTransfer { banks } => banks,
            _ => &[],
        }
    }
}

/// Methods offered in the preview modal, in display order.
pub fn payment_methods(contact: &str) -> Vec<PaymentMethod> {
    let bank = |name: &str, account: &str| Bank {
        name: name.to_string(),
        account: account.to_string(),
    };
    vec![
        PaymentMethod {
            kind: PaymentKind::Cash {
                note: "Bayar langsung di tempat".to_string(),
            },
            contact: contact.to_string(),
        },
        PaymentMethod {
            kind: PaymentKind::BankTransfer {
                banks: vec![
                    bank("BCA", "1234567890"),
                    bank("Mandiri", "0987654321"),
                    bank("BNI", "1122334455"),
                ],
            },
            contact: contact.to_string(),
        },
        PaymentMethod {
            kind: PaymentKind::QrCode {
                image_url: "https://via.placeholder.com/250x250.png?text=QRIS+Dummy".to_string(),
                note: "Scan QR untuk pembayaran cepat".to_string(),
            },
            contact: contact.to_string(),
        },
    ]
}
