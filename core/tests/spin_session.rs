use kururi_core::{
    ease_out_quart, target_angle, EntryList, SpinPhase, SpinSession, FULL_TURNS_MAX,
    FULL_TURNS_MIN, SETTLE_MS, SPIN_DURATION_MAX_MS, SPIN_DURATION_MIN_MS, SPIN_TICK_MS,
};

fn session(count: usize, seed: u64) -> SpinSession {
    SpinSession::begin(count, 0.0, 0.0, seed)
}

fn derived_turns(s: &SpinSession, count: usize) -> u32 {
    let spun = s.target_rotation - s.start_rotation - target_angle(s.winning_index, count);
    (spun / 360.0).round() as u32
}

#[test]
fn same_seed_reproduces_the_session() {
    let a = session(8, 0xBEEF);
    let b = session(8, 0xBEEF);
    assert_eq!(a, b);
}

#[test]
fn winner_index_stays_in_bounds() {
    for count in 2..=20usize {
        for seed in 0..200u64 {
            let s = session(count, seed);
            assert!(s.winning_index < count, "count {count} seed {seed}");
        }
    }
}

#[test]
fn every_winner_is_reachable() {
    let count = 8;
    let mut hit = [false; 8];
    for seed in 0..500u64 {
        hit[session(count, seed).winning_index] = true;
    }
    assert!(hit.iter().all(|&h| h), "unreached winners: {hit:?}");
}

#[test]
fn turns_and_duration_stay_in_range() {
    for seed in 0..500u64 {
        let s = session(6, seed);
        assert!(
            s.duration_ms >= SPIN_DURATION_MIN_MS && s.duration_ms < SPIN_DURATION_MAX_MS,
            "seed {seed}: duration {}",
            s.duration_ms
        );
        let turns = derived_turns(&s, 6);
        assert!(
            (FULL_TURNS_MIN..=FULL_TURNS_MAX).contains(&turns),
            "seed {seed}: {turns} turns"
        );
    }
}

#[test]
fn rotation_pins_to_start_and_target() {
    let s = SpinSession::with_winner(3, 8, 45.0, 1000.0, 0x51DE);
    assert_eq!(s.rotation_at(1000.0), 45.0);
    assert_eq!(s.rotation_at(500.0), 45.0);
    assert_eq!(s.rotation_at(1000.0 + s.duration_ms), s.target_rotation);
    assert_eq!(s.rotation_at(1000.0 + s.duration_ms + 9999.0), s.target_rotation);
}

#[test]
fn rotation_never_decreases_under_frame_sampling() {
    for seed in [1u64, 7, 0xABCD] {
        let s = session(5, seed);
        let mut previous = s.rotation_at(0.0);
        let mut now = 0.0;
        while now < s.duration_ms + 100.0 {
            now += SPIN_TICK_MS as f64;
            let rotation = s.rotation_at(now);
            assert!(
                rotation >= previous,
                "seed {seed}: rotation fell from {previous} to {rotation} at {now}ms"
            );
            previous = rotation;
        }
        assert_eq!(previous, s.target_rotation);
    }
}

#[test]
fn phase_walk_follows_the_clock() {
    let s = session(4, 0xFEED);
    assert_eq!(s.phase_at(0.0), SpinPhase::Spinning);
    assert_eq!(s.phase_at(s.duration_ms * 0.5), SpinPhase::Spinning);
    assert_eq!(s.phase_at(s.duration_ms), SpinPhase::Settling);
    assert_eq!(s.phase_at(s.duration_ms + SETTLE_MS * 0.5), SpinPhase::Settling);
    assert_eq!(s.phase_at(s.duration_ms + SETTLE_MS), SpinPhase::WinnerShown);
    assert_eq!(s.phase_at(s.duration_ms + SETTLE_MS + 60_000.0), SpinPhase::WinnerShown);
}

#[test]
fn forced_winner_lands_on_its_label() {
    let list = EntryList::from_labels(["A", "B", "C", "D"]);
    let s = SpinSession::with_winner(2, list.len(), 0.0, 0.0, 0x7357);
    assert_eq!(list.get(s.winning_index), Some("C"));
    let done = s.duration_ms + SETTLE_MS;
    assert_eq!(s.phase_at(done), SpinPhase::WinnerShown);
    assert_eq!(s.rotation_at(done), s.target_rotation);
}

#[test]
fn zero_duration_session_is_already_finished() {
    let s = SpinSession {
        winning_index: 0,
        start_rotation: 10.0,
        target_rotation: 1900.0,
        start_time_ms: 0.0,
        duration_ms: 0.0,
    };
    assert_eq!(s.progress(0.0), 1.0);
    assert_eq!(s.rotation_at(0.0), 1900.0);
}

#[test]
fn winner_choice_is_roughly_uniform() {
    let count = 4;
    let trials = 4000u64;
    let mut histogram = [0usize; 4];
    for seed in 0..trials {
        histogram[session(count, seed).winning_index] += 1;
    }
    let expected = trials as usize / count;
    for (index, &hits) in histogram.iter().enumerate() {
        let deviation = hits.abs_diff(expected);
        assert!(
            deviation < expected / 5,
            "index {index}: {hits} hits, expected about {expected}"
        );
    }
}

#[test]
fn easing_clamps_and_rises_monotonically() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert_eq!(ease_out_quart(0.5), 0.9375);
    assert_eq!(ease_out_quart(-2.0), 0.0);
    assert_eq!(ease_out_quart(3.0), 1.0);
    let mut previous = 0.0;
    for step in 1..=100 {
        let eased = ease_out_quart(step as f64 / 100.0);
        assert!(eased >= previous);
        previous = eased;
    }
    // Ease-out: the first half covers far more ground than the second.
    assert!(ease_out_quart(0.5) > 0.9);
}
