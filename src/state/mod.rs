pub mod modal;
pub mod slider;
pub mod toast;
pub mod view;

pub use modal::{ModalAction, ModalState, OpenModal};
pub use slider::{SliderAction, SliderState};
pub use toast::{Toast, ToastAction, ToastPhase, ToastState};
pub use view::{Listing, ViewAction, ViewState};
