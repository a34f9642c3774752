pub mod entries;
pub mod palette;
pub mod rng;
pub mod spin;
pub mod wheel;

pub use entries::{
    EntryError, EntryList, CLEARED_ENTRIES, DEFAULT_ENTRIES, MAX_ENTRIES, MAX_ENTRY_LEN,
    MIN_ENTRIES,
};
pub use palette::{color_of, COLOR_STRIDE, WHEEL_COLORS};
pub use rng::{rand_index, rand_range, rand_unit, shuffle, splitmix64};
pub use spin::{
    ease_out_quart, SpinPhase, SpinSession, FULL_TURNS_MAX, FULL_TURNS_MIN, SETTLE_MS,
    SPIN_DURATION_MAX_MS, SPIN_DURATION_MIN_MS, SPIN_TICK_MS,
};
pub use wheel::{
    angle_delta, angle_matches, angle_per_segment, normalize_angle, segment_arc,
    segment_mid_angle, target_angle, POINTER_ANGLE_DEG,
};
