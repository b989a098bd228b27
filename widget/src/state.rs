//! Widget visibility state machine.
//!
//! Two states, `closed` (initial) and `open`, and one transition: toggle on
//! bubble click. Nothing else changes the state and there is no terminal
//! state while the page stays loaded.

use crate::host::Host;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub is_open: bool,
}

impl WidgetState {
    /// Flip visibility and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }
}

/// A mounted widget: the host page it lives in plus its visibility state.
pub struct Widget<H: Host> {
    host: H,
    state: WidgetState,
}

impl<H: Host> Widget<H> {
    /// Wrap a host whose bootstrap already injected the widget.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self { host, state: WidgetState::default() }
    }

    /// Bubble click: flip the state and sync container visibility.
    ///
    /// The iframe is left alone, so an in-progress conversation survives any
    /// number of toggles.
    pub fn toggle(&mut self) -> bool {
        let open = self.state.toggle();
        self.host.set_container_open(open);
        open
    }

    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.state
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}
