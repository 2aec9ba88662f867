// Transient notifications: enter, stay for a while, leave, then get removed
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    /// Transition classes for the current phase.
    pub fn phase_class(&self) -> &'static str {
        match self.phase {
            ToastPhase::Visible => "opacity-100 translate-y-0",
            ToastPhase::Entering | ToastPhase::Leaving => "opacity-0 translate-y-2",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

#[derive(Clone, Debug)]
pub enum ToastAction {
    /// Ids are assigned by the host so it can schedule the toast's timers.
    Push { id: u64, message: String },
    Show(u64),
    Hide(u64),
    Remove(u64),
}

impl ToastState {
    fn set_phase(&mut self, id: u64, phase: ToastPhase) {
        if let Some(t) = self.toasts.iter_mut().find(|t| t.id == id) {
            t.phase = phase;
        }
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ToastAction::Push { id, message } => {
                new.toasts.retain(|t| t.id != id);
                new.toasts.push(Toast {
                    id,
                    message,
                    phase: ToastPhase::Entering,
                });
            }
            ToastAction::Show(id) => new.set_phase(id, ToastPhase::Visible),
            ToastAction::Hide(id) => new.set_phase(id, ToastPhase::Leaving),
            ToastAction::Remove(id) => new.toasts.retain(|t| t.id != id),
        }
        Rc::new(new)
    }
}
