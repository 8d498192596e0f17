//! Domain-window state: the visible sub-range of the 24-hour timeline.

use crate::model::DOMAIN_HOURS;

/// The currently visible time range `[x0, x1]` for the detail chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainWindow {
    pub x0: f64,
    pub x1: f64,
}

impl DomainWindow {
    /// The full 24-hour domain.
    #[must_use]
    pub fn full() -> Self {
        Self {
            x0: 0.0,
            x1: DOMAIN_HOURS,
        }
    }

    /// A window is valid for plotting only when it has positive width.
    /// Inverted or empty windows can arise from unguarded brush input and
    /// must be rendered as "nothing" rather than crashing the scale.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x0 < self.x1
    }

    /// Window width in hours (zero for degenerate windows).
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).max(0.0)
    }
}

impl Default for DomainWindow {
    fn default() -> Self {
        Self::full()
    }
}

/// Holds the single live [`DomainWindow`].
///
/// Exactly one writer mutates this (the brush controller's drag handler) and
/// updates are wholesale replacements, so a reader always observes a
/// consistent `(x0, x1)` pair.
#[derive(Debug, Clone, Default)]
pub struct DomainState {
    window: DomainWindow,
}

impl DomainState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current window.
    #[must_use]
    pub fn current(&self) -> DomainWindow {
        self.window
    }

    /// Install a new window from a brush report.
    ///
    /// A report without bounds (selection cleared, gesture aborted) is a
    /// no-op: the prior window is retained. Otherwise the window becomes
    /// `[max(0, x0), x1]`. Only the lower bound is clamped; the upper bound
    /// is deliberately left unclamped against the domain ceiling. Degenerate
    /// windows are guarded at render time instead.
    pub fn set_from_brush(&mut self, bounds: Option<(f64, f64)>) {
        let Some((x0, x1)) = bounds else {
            return;
        };
        self.window = DomainWindow {
            x0: x0.max(0.0),
            x1,
        };
    }

    /// Reset to the full day.
    pub fn reset(&mut self) {
        self.window = DomainWindow::full();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_full_domain() {
        let state = DomainState::new();
        assert_eq!(state.current(), DomainWindow::full());
    }

    #[test]
    fn none_bounds_is_a_no_op() {
        let mut state = DomainState::new();
        state.set_from_brush(Some((3.0, 9.0)));
        let before = state.current();

        state.set_from_brush(None);
        assert_eq!(state.current(), before);
    }

    #[test]
    fn lower_bound_clamped_to_zero() {
        let mut state = DomainState::new();
        state.set_from_brush(Some((-2.5, 10.0)));
        assert_eq!(state.current(), DomainWindow { x0: 0.0, x1: 10.0 });
    }

    #[test]
    fn upper_bound_is_not_clamped() {
        let mut state = DomainState::new();
        state.set_from_brush(Some((20.0, 30.0)));
        assert_eq!(state.current(), DomainWindow { x0: 20.0, x1: 30.0 });
    }

    #[test]
    fn inverted_window_is_stored_but_invalid() {
        let mut state = DomainState::new();
        state.set_from_brush(Some((10.0, 4.0)));
        assert!(!state.current().is_valid());
        assert_eq!(state.current().width(), 0.0);
    }

    #[test]
    fn reset_restores_full_day() {
        let mut state = DomainState::new();
        state.set_from_brush(Some((3.0, 9.0)));
        state.reset();
        assert_eq!(state.current(), DomainWindow::full());
    }
}
