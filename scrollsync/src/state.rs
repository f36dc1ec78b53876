use crate::{AxisPair, EdgeState, Size, ThumbGeometry};

/// A read-only snapshot of everything the engine derives for both axes.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Authoritative content-space offsets (`scrollLeft`, `scrollTop`).
    pub offsets: AxisPair<f64>,
    pub thumbs: AxisPair<ThumbGeometry>,
    pub edges: AxisPair<EdgeState>,
    /// Last measured sizes, `None` until the observer reported them.
    pub viewport: Option<Size>,
    pub content: Option<Size>,
}

impl ScrollState {
    /// "Has a horizontal/vertical scrollbar" state, derived from the thumb lengths.
    pub fn has_scrollbar(&self) -> AxisPair<bool> {
        self.thumbs.map(|_, thumb| !thumb.is_hidden())
    }
}
