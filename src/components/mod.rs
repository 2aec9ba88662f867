pub mod menu_card;
pub mod menu_section;
pub mod mobile_nav;
pub mod payment_detail;
pub mod preview_modal;
pub mod slider;
pub mod toast_host;

pub use menu_card::MenuCard;
pub use menu_section::MenuSection;
pub use mobile_nav::MobileNav;
pub use payment_detail::PaymentDetail;
pub use preview_modal::PreviewModal;
pub use slider::Slider;
pub use toast_host::ToastHost;
