use std::rc::Rc;

use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD;

/// Visual mode of the navigation bar, derived from the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStyle {
    Transparent,
    Solid,
}

impl NavStyle {
    pub fn from_offset(offset: f64) -> Self {
        if offset >= SCROLL_THRESHOLD {
            NavStyle::Solid
        } else {
            NavStyle::Transparent
        }
    }

    pub fn is_solid(self) -> bool {
        self == NavStyle::Solid
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

/// Open/closed state of the mobile overlay menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            return self;
        }
        Rc::new(MenuState { open })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_style_switches_at_threshold() {
        assert_eq!(NavStyle::from_offset(0.0), NavStyle::Transparent);
        assert_eq!(NavStyle::from_offset(49.9), NavStyle::Transparent);
        assert_eq!(NavStyle::from_offset(50.0), NavStyle::Solid);
        assert_eq!(NavStyle::from_offset(1200.0), NavStyle::Solid);
    }

    #[test]
    fn negative_overscroll_stays_transparent() {
        assert!(!NavStyle::from_offset(-30.0).is_solid());
    }

    #[test]
    fn toggle_flips_menu() {
        let state = Rc::new(MenuState::default());
        let opened = state.reduce(MenuAction::Toggle);
        assert!(opened.open);
        let closed = opened.reduce(MenuAction::Toggle);
        assert!(!closed.open);
    }

    #[test]
    fn link_selection_closes_open_menu() {
        let opened = Rc::new(MenuState::default()).reduce(MenuAction::Toggle);
        assert!(opened.open);
        assert!(!opened.reduce(MenuAction::Close).open);
    }

    #[test]
    fn close_on_hidden_menu_keeps_state() {
        let state = Rc::new(MenuState::default());
        let after = state.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
