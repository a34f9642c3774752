pub const WHEEL_COLORS: [&str; 16] = [
    "#007AFF", // blue
    "#FF3B30", // red
    "#34C759", // green
    "#FF9500", // orange
    "#AF52DE", // purple
    "#FFCC00", // yellow
    "#5AC8FA", // cyan
    "#FF2D92", // pink
    "#30D158", // lime
    "#FF6B35", // orange red
    "#64D2FF", // light blue
    "#BF5AF2", // light purple
    "#32D74B", // bright green
    "#FF453A", // bright red
    "#0A84FF", // system blue
    "#FF9F0A", // amber
];

// Stride of 3 over 16 slots keeps sequential segments on well-separated
// hues. Counts sharing a factor with 16 can still place similar colors
// next to each other; accepted as cosmetic.
pub const COLOR_STRIDE: usize = 3;

pub fn color_of(index: usize) -> &'static str {
    WHEEL_COLORS[(index * COLOR_STRIDE) % WHEEL_COLORS.len()]
}
