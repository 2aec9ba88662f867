//! Interactive layer of the restaurant menu page: mobile nav, hero slider,
//! filtered and paginated menu, preview modal with payment options.

pub mod anchors;
pub mod app;
pub mod bridge;
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod state;
pub mod timers;
pub mod util;

use std::rc::Rc;

/// Page entry point: installs logging, reads config, mounts every feature
/// whose anchor the page provides.
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; nothing to mount");
        return;
    };
    let config = Rc::new(config::load_config(&doc));
    let anchors = anchors::Anchors::resolve(&doc, &config.anchors);
    app::mount(&anchors, config, Rc::new(model::Catalog::generate()));
}
