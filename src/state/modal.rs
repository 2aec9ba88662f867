// Preview modal: Closed <-> Open(item), plus payment selection while open
use crate::model::{Bank, MenuItem, PaymentMethod};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenModal {
    pub item: MenuItem,
    /// Index into the payment methods; at most one selected.
    pub method: Option<usize>,
    /// Selected bank of the transfer method.
    pub bank: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    pub methods: Rc<Vec<PaymentMethod>>,
    pub open: Option<OpenModal>,
}

#[derive(Clone, Debug)]
pub enum ModalAction {
    Open(MenuItem),
    Close,
    /// Click on the modal root; only a click outside the content closes it.
    BackdropClick { inside_content: bool },
    SelectMethod(usize),
    SelectBank(usize),
}

impl ModalState {
    pub fn new(methods: Vec<PaymentMethod>) -> Self {
        Self {
            methods: Rc::new(methods),
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn selected_method(&self) -> Option<&PaymentMethod> {
        let open = self.open.as_ref()?;
        self.methods.get(open.method?)
    }

    pub fn selected_bank(&self) -> Option<&Bank> {
        let open = self.open.as_ref()?;
        self.selected_method()?.banks().get(open.bank)
    }

    /// Account number the copy action writes to the clipboard.
    pub fn selected_account(&self) -> Option<&str> {
        self.selected_bank().map(|b| b.account.as_str())
    }

    fn apply(&mut self, action: ModalAction) {
        match action {
            ModalAction::Open(item) => {
                self.open = Some(OpenModal {
                    item,
                    method: None,
                    bank: 0,
                });
            }
            ModalAction::Close => self.open = None,
            ModalAction::BackdropClick { inside_content } => {
                if !inside_content {
                    self.open = None;
                }
            }
            ModalAction::SelectMethod(idx) => {
                if idx >= self.methods.len() {
                    return;
                }
                if let Some(open) = self.open.as_mut() {
                    open.method = Some(idx);
                    open.bank = 0;
                }
            }
            ModalAction::SelectBank(idx) => {
                let bank_count = self.selected_method().map_or(0, |m| m.banks().len());
                if idx >= bank_count {
                    return;
                }
                if let Some(open) = self.open.as_mut() {
                    open.bank = idx;
                }
            }
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        if new.is_open() != self.is_open() {
            log::debug!("modal open={}", new.is_open());
        }
        Rc::new(new)
    }
}
