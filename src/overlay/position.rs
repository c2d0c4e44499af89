use derive_more::Constructor;
use std::fmt;

// Height reserved for the overlay panel, in page units.
pub const OVERLAY_HEIGHT: f64 = 365.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Constructor)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
}

impl AnchorRect {
    // an anchor the host never laid out measures as all zeroes
    pub fn is_degenerate(&self) -> bool {
        self.top == 0.0 && self.left == 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Auto,
    Px(f64),
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Auto => write!(f, "auto"),
            Edge::Px(value) => write!(f, "{}px", value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub top: Edge,
    pub left: Edge,
    pub right: Edge,
    pub bottom: Edge,
}

impl OverlayStyle {
    fn below(top: f64, left: f64) -> Self {
        OverlayStyle {
            top: Edge::Px(top),
            left: Edge::Px(left),
            right: Edge::Auto,
            bottom: Edge::Auto,
        }
    }

    fn flipped(left: f64) -> Self {
        OverlayStyle {
            top: Edge::Auto,
            left: Edge::Px(left),
            right: Edge::Auto,
            bottom: Edge::Px(0.0),
        }
    }
}

impl fmt::Display for OverlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: absolute; top: {}; left: {}; right: {}; bottom: {}",
            self.top, self.left, self.right, self.bottom
        )
    }
}

// The panel hangs from the anchor's bottom-left corner. When it would run
// past the bottom of a viewport tall enough to hold it, it is pinned to the
// viewport bottom and opens upwards instead.
pub fn place(anchor: &AnchorRect, viewport_height: f64) -> OverlayStyle {
    let top = anchor.bottom;
    let left = anchor.left;

    if top + OVERLAY_HEIGHT > viewport_height && viewport_height > OVERLAY_HEIGHT {
        OverlayStyle::flipped(left)
    } else {
        OverlayStyle::below(top, left)
    }
}

// With an explicit fallback position the overlay opens there; without one
// the vertical placement is kept and only left is pinned to the viewport
// edge.
pub fn place_fallback(computed: OverlayStyle, fallback: Option<(f64, f64)>) -> OverlayStyle {
    match fallback {
        Some((x, y)) => OverlayStyle {
            top: Edge::Px(y),
            left: Edge::Px(x),
            right: Edge::Auto,
            bottom: Edge::Auto,
        },
        None => OverlayStyle {
            left: Edge::Px(0.0),
            ..computed
        },
    }
}
