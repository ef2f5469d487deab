//! Arrow direction selection
//!
//! Prefer placing the panel below the anchor. When the desired panel does not
//! fit there, fall back to whichever side of the anchor has strictly more room.

use crate::geometry::{ArrowDirection, Rect, ViewportSize};

/// Pick the side of the anchor the panel is drawn on.
///
/// Depends only on the anchor position, viewport height, arrow thickness,
/// desired height and bottom margin. Never fails: a side that is too small
/// is handled later by clamping the panel height.
pub fn choose_direction(
    anchor: &Rect,
    viewport: &ViewportSize,
    arrow_thickness: f32,
    desired_height: f32,
    margin_bottom: f32,
) -> ArrowDirection {
    let anchor_bottom = anchor.bottom();
    let needed_below = anchor_bottom + arrow_thickness * 2.0 + desired_height + margin_bottom;
    if needed_below <= viewport.height {
        return ArrowDirection::Up;
    }

    let space_above = anchor.y;
    let space_below = viewport.height - anchor_bottom;
    if space_above > space_below {
        ArrowDirection::Down
    } else {
        ArrowDirection::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: ViewportSize = ViewportSize::new(320.0, 568.0);

    #[test]
    fn test_fits_below() {
        let anchor = Rect::new(40.0, 500.0, 100.0, 20.0);
        // 520 + 12 + 30 + 0 = 562 <= 568
        assert_eq!(
            choose_direction(&anchor, &PHONE, 6.0, 30.0, 0.0),
            ArrowDirection::Up
        );
    }

    #[test]
    fn test_exact_fit_stays_below() {
        let anchor = Rect::new(0.0, 500.0, 100.0, 20.0);
        // 520 + 12 + 36 = 568
        assert_eq!(
            choose_direction(&anchor, &PHONE, 6.0, 36.0, 0.0),
            ArrowDirection::Up
        );
    }

    #[test]
    fn test_bottom_margin_pushes_above() {
        let anchor = Rect::new(40.0, 500.0, 100.0, 20.0);
        assert_eq!(
            choose_direction(&anchor, &PHONE, 6.0, 30.0, 10.0),
            ArrowDirection::Down
        );
    }

    #[test]
    fn test_falls_back_to_roomier_side() {
        // Near the top: more room below even though the panel does not fit
        let top_anchor = Rect::new(0.0, 10.0, 100.0, 60.0);
        assert_eq!(
            choose_direction(&top_anchor, &PHONE, 6.0, 500.0, 0.0),
            ArrowDirection::Up
        );

        // Near the bottom: more room above
        let bottom_anchor = Rect::new(0.0, 400.0, 100.0, 20.0);
        assert_eq!(
            choose_direction(&bottom_anchor, &PHONE, 6.0, 500.0, 0.0),
            ArrowDirection::Down
        );
    }

    #[test]
    fn test_tie_prefers_below() {
        // 274 above, 274 below
        let anchor = Rect::new(0.0, 274.0, 100.0, 20.0);
        assert_eq!(
            choose_direction(&anchor, &PHONE, 6.0, 400.0, 0.0),
            ArrowDirection::Up
        );
    }

    #[test]
    fn test_deterministic() {
        let anchor = Rect::new(12.0, 333.0, 40.0, 18.0);
        let first = choose_direction(&anchor, &PHONE, 6.0, 250.0, 8.0);
        for _ in 0..5 {
            assert_eq!(choose_direction(&anchor, &PHONE, 6.0, 250.0, 8.0), first);
        }
    }
}
