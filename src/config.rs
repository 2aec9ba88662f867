//! Page configuration.
//!
//! Defaults describe the restaurant's own page. A page can override any field
//! through an inline `<script type="application/json" id="menu-config">` block.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use web_sys::Document;

pub const CONFIG_SCRIPT_ID: &str = "menu-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image_url: String,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Element ids the features mount into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorIds {
    pub nav: String,
    pub slider: String,
    pub menu: String,
    pub modal: String,
    pub toasts: String,
}

impl Default for AnchorIds {
    fn default() -> Self {
        Self {
            nav: "mobile-nav".to_string(),
            slider: "slider".to_string(),
            menu: "menu".to_string(),
            modal: "preview-modal".to_string(),
            toasts: "toast-root".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Messaging service the order and confirmation links open.
    pub messaging_base: String,
    /// Restaurant contact id on the messaging service.
    pub contact: String,
    pub search_debounce_ms: u32,
    pub slide_interval_ms: u32,
    pub toast_duration_ms: u32,
    pub slides: Vec<Slide>,
    pub nav_links: Vec<NavLink>,
    pub anchors: AnchorIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        let slide = |n: u32, caption: &str| Slide {
            image_url: format!("https://source.unsplash.com/1200x500/?restaurant,food,{n}"),
            caption: caption.to_string(),
        };
        let link = |label: &str, href: &str| NavLink {
            label: label.to_string(),
            href: href.to_string(),
        };
        Self {
            messaging_base: "https://wa.me".to_string(),
            contact: "6281234567890".to_string(),
            search_debounce_ms: 300,
            slide_interval_ms: 5000,
            toast_duration_ms: 3000,
            slides: vec![
                slide(1, "Hidangan segar setiap hari"),
                slide(2, "Minuman favorit keluarga"),
                slide(3, "Camilan untuk setiap suasana"),
            ],
            nav_links: vec![
                link("Beranda", "#home"),
                link("Menu", "#menu"),
                link("Tentang", "#about"),
                link("Kontak", "#contact"),
            ],
            anchors: AnchorIds::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Config from the page's inline script block, or defaults when there is none
/// or it does not parse.
pub fn load_config(doc: &Document) -> PageConfig {
    let Some(raw) = doc
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {e}");
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_timings() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.search_debounce_ms, 300);
        assert_eq!(cfg.slide_interval_ms, 5000);
        assert_eq!(cfg.toast_duration_ms, 3000);
        assert_eq!(cfg.contact, "6281234567890");
        assert_eq!(cfg.anchors.menu, "menu");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = PageConfig::from_json(r#"{"contact":"62811","anchors":{"modal":"dlg"}}"#)
            .expect("config parses");
        assert_eq!(cfg.contact, "62811");
        assert_eq!(cfg.anchors.modal, "dlg");
        assert_eq!(cfg.anchors.slider, "slider");
        assert_eq!(cfg.slides.len(), 3);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PageConfig::from_json("{contact:").unwrap_err();
        assert!(matches!(err, crate::error::PageError::Config(_)));
    }
}
