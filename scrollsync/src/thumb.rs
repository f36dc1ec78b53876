use crate::{Axis, Element, ScrollError, ScrollHost, ScrollResult, ThumbGeometry};

/// One axis' thumb: its geometry plus the writes that keep the host's thumb element in
/// sync with it.
///
/// The engine is the only writer; consumers get read access through
/// [`crate::Scrollable::thumb`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thumb {
    axis: Axis,
    geometry: ThumbGeometry,
}

impl Thumb {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            geometry: ThumbGeometry::default(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn geometry(&self) -> ThumbGeometry {
        self.geometry
    }

    pub fn length(&self) -> f64 {
        self.geometry.length
    }

    pub fn offset(&self) -> f64 {
        self.geometry.offset
    }

    pub fn is_hidden(&self) -> bool {
        self.geometry.is_hidden()
    }

    /// Track-space offset of the vertical thumb.
    pub fn scroll_top(&self) -> ScrollResult<f64> {
        self.offset_along(Axis::Vertical)
    }

    /// Track-space offset of the horizontal thumb.
    pub fn scroll_left(&self) -> ScrollResult<f64> {
        self.offset_along(Axis::Horizontal)
    }

    fn offset_along(&self, axis: Axis) -> ScrollResult<f64> {
        if axis != self.axis {
            return Err(ScrollError::AxisMismatch {
                expected: self.axis,
                actual: axis,
            });
        }
        Ok(self.geometry.offset)
    }

    /// Writes the static accessibility attributes plus the current geometry.
    pub(crate) fn mount(&self, host: &mut impl ScrollHost, content_id: &str, scroll_offset: f64) {
        let element = Element::Thumb(self.axis);
        host.set_attribute(element, "role", "scrollbar");
        host.set_attribute(element, "aria-orientation", self.axis.orientation());
        host.set_attribute(element, "aria-controls", content_id);
        self.write_length(host);
        self.write_offset(host, scroll_offset);
    }

    pub(crate) fn set_length(&mut self, length: f64, host: Option<&mut impl ScrollHost>) {
        self.geometry.length = length;
        if length == 0.0 {
            self.geometry.offset = 0.0;
        }
        if let Some(host) = host {
            self.write_length(host);
        }
    }

    pub(crate) fn set_offset(
        &mut self,
        track_offset: f64,
        scroll_offset: f64,
        host: Option<&mut impl ScrollHost>,
    ) {
        self.geometry.offset = track_offset;
        if let Some(host) = host {
            self.write_offset(host, scroll_offset);
        }
    }

    fn write_length(&self, host: &mut impl ScrollHost) {
        let hidden = self.is_hidden();
        host.write_thumb_length(self.axis, self.geometry.length);
        host.set_attribute(
            Element::Thumb(self.axis),
            "aria-hidden",
            if hidden { "true" } else { "false" },
        );
        host.set_scrollbar_visible(self.axis, !hidden);
    }

    fn write_offset(&self, host: &mut impl ScrollHost, scroll_offset: f64) {
        let element = Element::Thumb(self.axis);
        host.write_thumb_offset(self.axis, self.geometry.offset);
        host.set_attribute(element, "aria-valuenow", &scroll_offset.to_string());
        host.set_attribute(
            element,
            self.axis.offset_attribute(),
            &self.geometry.offset.to_string(),
        );
    }
}
