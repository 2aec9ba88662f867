//! Display anchors resolved once at startup.

use crate::config::AnchorIds;
use crate::error::{PageError, Result};
use web_sys::{Document, Element};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    Nav,
    Slider,
    Menu,
    Modal,
    Toasts,
}

impl AnchorKind {
    pub const ALL: [AnchorKind; 5] = [
        AnchorKind::Nav,
        AnchorKind::Slider,
        AnchorKind::Menu,
        AnchorKind::Modal,
        AnchorKind::Toasts,
    ];

    pub fn id(self, ids: &AnchorIds) -> &str {
        match self {
            AnchorKind::Nav => &ids.nav,
            AnchorKind::Slider => &ids.slider,
            AnchorKind::Menu => &ids.menu,
            AnchorKind::Modal => &ids.modal,
            AnchorKind::Toasts => &ids.toasts,
        }
    }
}

/// Mount points for each feature; `None` disables that feature.
#[derive(Clone, Debug, Default)]
pub struct Anchors {
    pub ids: AnchorIds,
    pub nav: Option<Element>,
    pub slider: Option<Element>,
    pub menu: Option<Element>,
    pub modal: Option<Element>,
    pub toasts: Option<Element>,
}

impl Anchors {
    pub fn resolve(doc: &Document, ids: &AnchorIds) -> Self {
        let find = |kind: AnchorKind| doc.get_element_by_id(kind.id(ids));
        Self {
            ids: ids.clone(),
            nav: find(AnchorKind::Nav),
            slider: find(AnchorKind::Slider),
            menu: find(AnchorKind::Menu),
            modal: find(AnchorKind::Modal),
            toasts: find(AnchorKind::Toasts),
        }
    }

    pub fn get(&self, kind: AnchorKind) -> Option<&Element> {
        match kind {
            AnchorKind::Nav => self.nav.as_ref(),
            AnchorKind::Slider => self.slider.as_ref(),
            AnchorKind::Menu => self.menu.as_ref(),
            AnchorKind::Modal => self.modal.as_ref(),
            AnchorKind::Toasts => self.toasts.as_ref(),
        }
    }

    pub fn require(&self, kind: AnchorKind) -> Result<&Element> {
        self.get(kind)
            .ok_or_else(|| PageError::MissingAnchor(kind.id(&self.ids).to_string()))
    }

    /// Ids of anchors the page does not provide.
    pub fn missing(&self) -> Vec<&str> {
        AnchorKind::ALL
            .into_iter()
            .filter(|k| self.get(*k).is_none())
            .map(|k| k.id(&self.ids))
            .collect()
    }
}
