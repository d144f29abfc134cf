use iced::Task;

use super::event::{HeaderEffect, HeaderEvent, HeaderIntent};
use super::state::HeaderState;

/// Reduce a header intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut HeaderState,
    event: HeaderIntent,
) -> Task<HeaderEvent> {
    match event {
        HeaderIntent::ToggleSidebar => {
            state.set_profile_menu_open(false);
            Task::done(HeaderEvent::Effect(HeaderEffect::ToggleSidebar))
        },
        HeaderIntent::ToggleProfileMenu => {
            let open = !state.is_profile_menu_open();
            state.set_profile_menu_open(open);
            Task::none()
        },
        HeaderIntent::DismissProfileMenu => {
            state.set_profile_menu_open(false);
            Task::none()
        },
        HeaderIntent::SignOut => {
            state.set_profile_menu_open(false);
            Task::done(HeaderEvent::Effect(HeaderEffect::SignOut))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::widgets::header::HeaderIntent;
    use crate::widgets::header::state::HeaderState;

    #[test]
    fn given_closed_menu_when_toggled_twice_then_menu_is_closed_again() {
        let mut state = HeaderState::default();
        let _open = reduce(&mut state, HeaderIntent::ToggleProfileMenu);
        assert!(state.is_profile_menu_open());
        let _close = reduce(&mut state, HeaderIntent::ToggleProfileMenu);
        assert!(!state.is_profile_menu_open());
    }

    #[test]
    fn given_open_menu_when_sidebar_toggled_then_menu_is_dismissed() {
        let mut state = HeaderState::default();
        state.set_profile_menu_open(true);
        let _task = reduce(&mut state, HeaderIntent::ToggleSidebar);
        assert!(!state.is_profile_menu_open());
    }

    #[test]
    fn given_open_menu_when_signing_out_then_menu_is_dismissed() {
        let mut state = HeaderState::default();
        state.set_profile_menu_open(true);
        let _task = reduce(&mut state, HeaderIntent::SignOut);
        assert!(!state.is_profile_menu_open());
    }
}
