//! Scrolling track - two tiled road segments plus dashed lane markers.
//!
//! Nothing here is ever re-created: segments and dashes are repositioned once
//! they scroll past the bottom edge, so the road appears to be infinite.

use crate::types::{
    Rect, LANE_DASH_LEN, LANE_DASH_SPACING, LANE_DASH_START, LANE_X, ROAD_LEFT, ROAD_RIGHT,
    TRACK_HEIGHT,
};

/// Number of dashes needed to cover one track height.
pub const LANE_MARKER_COUNT: usize =
    ((TRACK_HEIGHT - LANE_DASH_START + LANE_DASH_SPACING - 1) / LANE_DASH_SPACING) as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollingTrack {
    height: i32,
    segments: [Rect; 2],
    lane_markers: [Rect; LANE_MARKER_COUNT],
}

impl ScrollingTrack {
    pub fn new() -> Self {
        let height = TRACK_HEIGHT;
        let segments = [
            Rect::new(ROAD_LEFT, 0, ROAD_RIGHT, height),
            Rect::new(ROAD_LEFT, -height, ROAD_RIGHT, 0),
        ];

        let mut lane_markers = [Rect::default(); LANE_MARKER_COUNT];
        for (i, marker) in lane_markers.iter_mut().enumerate() {
            let y = LANE_DASH_START + (i as i32) * LANE_DASH_SPACING;
            *marker = Rect::new(LANE_X, y, LANE_X, y + LANE_DASH_LEN);
        }

        Self {
            height,
            segments,
            lane_markers,
        }
    }

    pub fn segments(&self) -> &[Rect; 2] {
        &self.segments
    }

    pub fn lane_markers(&self) -> &[Rect; LANE_MARKER_COUNT] {
        &self.lane_markers
    }

    /// Scroll everything down by `delta` units.
    pub fn advance(&mut self, delta: i32) {
        let height = self.height;

        for marker in self.lane_markers.iter_mut() {
            marker.translate(0, delta);
            // Shift by a whole track height so the dash cadence is preserved.
            if marker.y_min > height {
                marker.translate(0, -height);
            }
        }

        for segment in self.segments.iter_mut() {
            segment.translate(0, delta);
            if segment.y_min > height {
                *segment = Rect::new(segment.x_min, -height, segment.x_max, 0);
            }
        }
    }
}

impl Default for ScrollingTrack {
    fn default() -> Self {
        Self::new()
    }
}
