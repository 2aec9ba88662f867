//! Mounts each feature into its anchor and wires the outlets between them.

use crate::anchors::{AnchorKind, Anchors};
use crate::bridge::Outlet;
use crate::components::{
    MenuSection, MobileNav, PreviewModal, Slider, ToastHost,
    menu_section::MenuSectionProps, mobile_nav::MobileNavProps,
    preview_modal::PreviewModalProps, slider::SliderProps, toast_host::ToastHostProps,
};
use crate::config::PageConfig;
use crate::model::{Catalog, MenuItem};
use std::rc::Rc;
use yew::Renderer;

/// Shared handles between the separately mounted roots.
#[derive(Clone, Default)]
pub struct Outlets {
    pub preview: Outlet<MenuItem>,
    pub notify: Outlet<String>,
}

/// Renders every feature whose anchor exists; returns what was mounted.
pub fn mount(anchors: &Anchors, config: Rc<PageConfig>, catalog: Rc<Catalog>) -> Vec<AnchorKind> {
    let outlets = Outlets::default();
    let mut mounted = Vec::new();

    for id in anchors.missing() {
        log::warn!("#{id} not found; feature disabled");
    }

    // Receivers first so their outlets are connected before anything can emit.
    if let Some(root) = anchors.get(AnchorKind::Toasts) {
        Renderer::<ToastHost>::with_root_and_props(
            root.clone(),
            ToastHostProps {
                outlet: outlets.notify.clone(),
                duration_ms: config.toast_duration_ms,
                initial: None,
            },
        )
        .render();
        mounted.push(AnchorKind::Toasts);
    }
    if let Some(root) = anchors.get(AnchorKind::Modal) {
        Renderer::<PreviewModal>::with_root_and_props(
            root.clone(),
            PreviewModalProps {
                preview: outlets.preview.clone(),
                notify: outlets.notify.clone(),
                config: config.clone(),
                initial: None,
            },
        )
        .render();
        mounted.push(AnchorKind::Modal);
    }
    if let Some(root) = anchors.get(AnchorKind::Menu) {
        Renderer::<MenuSection>::with_root_and_props(
            root.clone(),
            MenuSectionProps {
                catalog,
                config: config.clone(),
                preview: outlets.preview.clone(),
                initial: None,
            },
        )
        .render();
        mounted.push(AnchorKind::Menu);
    }
    if let Some(root) = anchors.get(AnchorKind::Slider) {
        Renderer::<Slider>::with_root_and_props(
            root.clone(),
            SliderProps {
                slides: config.slides.clone(),
                interval_ms: config.slide_interval_ms,
            },
        )
        .render();
        mounted.push(AnchorKind::Slider);
    }
    if let Some(root) = anchors.get(AnchorKind::Nav) {
        Renderer::<MobileNav>::with_root_and_props(
            root.clone(),
            MobileNavProps {
                links: config.nav_links.clone(),
                initially_open: false,
            },
        )
        .render();
        mounted.push(AnchorKind::Nav);
    }

    log::info!("mounted {} of {} features", mounted.len(), AnchorKind::ALL.len());
    mounted
}
