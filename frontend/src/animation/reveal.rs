/// Client rect of an element, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether `bounds` overlaps the viewport grown by `margin_px` on every side.
///
/// A positive margin fires before the element actually scrolls in; a negative
/// one waits until it is that far inside.
pub fn intersects(bounds: Bounds, viewport: Viewport, margin_px: f64) -> bool {
    bounds.bottom >= -margin_px
        && bounds.top <= viewport.height + margin_px
        && bounds.right >= -margin_px
        && bounds.left <= viewport.width + margin_px
}

/// One-shot reveal flag. Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub const fn hidden() -> Self {
        Self { revealed: false }
    }

    pub const fn revealed() -> Self {
        Self { revealed: true }
    }

    /// Without a viewport nothing would ever trigger, so content starts visible.
    pub const fn without_viewport() -> Self {
        Self::revealed()
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feeds one visibility check. Returns true only for the observation that
    /// flipped the state.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Viewport = Viewport { width: 1280.0, height: 800.0 };

    fn at(top: f64, height: f64) -> Bounds {
        Bounds { top, bottom: top + height, left: 0.0, right: 400.0 }
    }

    #[test]
    fn element_below_fold_is_not_visible() {
        assert!(!intersects(at(900.0, 200.0), SCREEN, 0.0));
        assert!(intersects(at(900.0, 200.0), SCREEN, 120.0));
    }

    #[test]
    fn element_above_viewport_is_not_visible() {
        assert!(!intersects(at(-500.0, 200.0), SCREEN, 0.0));
        assert!(intersects(at(-250.0, 200.0), SCREEN, 100.0));
    }

    #[test]
    fn negative_margin_waits_until_inside() {
        assert!(intersects(at(780.0, 200.0), SCREEN, 0.0));
        assert!(!intersects(at(780.0, 200.0), SCREEN, -100.0));
        assert!(intersects(at(650.0, 200.0), SCREEN, -100.0));
    }

    #[test]
    fn site_margin_fires_once_eighty_pixels_inside() {
        let margin = crate::config::REVEAL_MARGIN_PX;
        let bottom_edge = SCREEN.height;
        assert!(!intersects(at(bottom_edge - 40.0, 200.0), SCREEN, margin));
        assert!(intersects(at(bottom_edge - 80.0, 200.0), SCREEN, margin));
        assert!(intersects(at(bottom_edge - 120.0, 200.0), SCREEN, margin));
    }

    #[test]
    fn offscreen_horizontally() {
        let bounds = Bounds { top: 100.0, bottom: 200.0, left: 1400.0, right: 1600.0 };
        assert!(!intersects(bounds, SCREEN, 0.0));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut state = RevealState::hidden();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());

        assert!(state.observe(true));
        assert!(state.is_revealed());

        for visible in [false, false, true, false] {
            assert!(!state.observe(visible));
            assert!(state.is_revealed());
        }
    }

    #[test]
    fn missing_viewport_defaults_to_revealed() {
        assert!(RevealState::without_viewport().is_revealed());
        assert!(!RevealState::default().is_revealed());
    }
}
