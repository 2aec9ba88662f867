// Hero slider rotation index
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliderState {
    pub index: usize,
    pub count: usize,
}

#[derive(Clone, Copy, Debug)]
pub enum SliderAction {
    /// Timer tick: advance to the next slide, wrapping around.
    Tick,
    /// Indicator dot click.
    GoTo(usize),
}

impl SliderState {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// CSS transform placing the active slide in view.
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }

    pub fn is_active(&self, dot: usize) -> bool {
        dot == self.index
    }
}

impl Reducible for SliderState {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.count == 0 {
            return self;
        }
        let index = match action {
            SliderAction::Tick => (self.index + 1) % self.count,
            SliderAction::GoTo(i) => i % self.count,
        };
        Rc::new(SliderState { index, ..*self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_wraps_around() {
        let mut state = Rc::new(SliderState::new(3));
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.reduce(SliderAction::Tick);
            seen.push(state.index);
        }
        assert_eq!(seen, [1, 2, 0, 1]);
    }

    #[test]
    fn exactly_one_dot_active() {
        let state = Rc::new(SliderState::new(4)).reduce(SliderAction::GoTo(2));
        let active: Vec<_> = (0..4).filter(|d| state.is_active(*d)).collect();
        assert_eq!(active, [2]);
        assert_eq!(state.transform(), "translateX(-200%)");
    }

    #[test]
    fn empty_slider_never_moves() {
        let state = Rc::new(SliderState::new(0)).reduce(SliderAction::Tick);
        assert_eq!(state.index, 0);
    }
}
