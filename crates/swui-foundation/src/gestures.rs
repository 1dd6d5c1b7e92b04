//! Two-finger gesture math.

use swui_core::TouchPoint;

/// Angle of the line from `first` to `second`, in degrees.
pub fn two_point_angle(first: TouchPoint, second: TouchPoint) -> f64 {
    (second.client_y - first.client_y)
        .atan2(second.client_x - first.client_x)
        .to_degrees()
}

pub fn two_point_distance(first: TouchPoint, second: TouchPoint) -> f64 {
    (second.client_x - first.client_x).hypot(second.client_y - first.client_y)
}
