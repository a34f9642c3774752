pub const FULL_TURN_DEG: f64 = 360.0;

/// The pointer sits at the 3 o'clock edge, angle 0 in the wheel frame.
pub const POINTER_ANGLE_DEG: f64 = 0.0;

pub fn angle_per_segment(count: usize) -> f64 {
    FULL_TURN_DEG / count as f64
}

/// Wedge `[start, end)` in degrees for segment `index`, unrotated frame,
/// clockwise from 3 o'clock.
pub fn segment_arc(index: usize, count: usize) -> (f64, f64) {
    let per = angle_per_segment(count);
    (index as f64 * per, (index as f64 + 1.0) * per)
}

pub fn segment_mid_angle(index: usize, count: usize) -> f64 {
    let per = angle_per_segment(count);
    index as f64 * per + per * 0.5
}

/// Rotation (mod 360) that parks the center of segment `winning_index`
/// under the pointer. Applying `rotation` moves a point at angle `a` to
/// `a + rotation`, so the winner's mid-angle needs its complement.
pub fn target_angle(winning_index: usize, count: usize) -> f64 {
    FULL_TURN_DEG - segment_mid_angle(winning_index, count)
}

pub fn normalize_angle(mut angle: f64) -> f64 {
    angle %= FULL_TURN_DEG;
    if angle < 0.0 {
        angle += FULL_TURN_DEG;
    }
    angle
}

pub fn angle_delta(target: f64, current: f64) -> f64 {
    let mut diff = normalize_angle(target - current);
    if diff > FULL_TURN_DEG * 0.5 {
        diff -= FULL_TURN_DEG;
    }
    diff
}

pub fn angle_matches(a: f64, b: f64, tolerance: f64) -> bool {
    angle_delta(a, b).abs() <= tolerance
}
