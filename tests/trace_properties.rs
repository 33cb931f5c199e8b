// ==============================================
// SIMULATOR PROPERTY TESTS (integration)
// ==============================================
//
// Cross-module checks: the simulator is compared against an independent
// naive model, and the tracker/frame-table invariants are asserted after
// every step. These span tracker, frame table, simulator, and reporter,
// so they live here rather than in any single source file.

use framesim::report::{TextRenderer, TraceLog};
use framesim::sim::{AccessKind, Simulator};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Naive O(n) LRU model: `order` front = most recently used.
///
/// Returns (hit, victim) and mutates `frames` the same way the real frame
/// table does: first empty slot, or the victim's slot.
fn model_step(
    order: &mut Vec<u16>,
    frames: &mut [Option<u16>],
    capacity: usize,
    id: u16,
) -> (bool, Option<u16>) {
    if let Some(pos) = order.iter().position(|&x| x == id) {
        order.remove(pos);
        order.insert(0, id);
        return (true, None);
    }

    let victim = if order.len() == capacity {
        order.pop()
    } else {
        None
    };
    order.insert(0, id);

    let slot = match victim {
        Some(victim) => frames
            .iter()
            .position(|&s| s == Some(victim))
            .expect("model victim must be in frames"),
        None => frames
            .iter()
            .position(|s| s.is_none())
            .expect("model must have an empty slot"),
    };
    frames[slot] = Some(id);
    (false, victim)
}

fn assert_invariants(sim: &Simulator<u16>, frames: &[Option<u16>]) {
    let occupied = frames.iter().filter(|s| s.is_some()).count();
    assert!(sim.len() <= sim.capacity());
    assert_eq!(occupied, sim.len());

    let mut resident: Vec<u16> = sim.recency().copied().collect();
    let mut placed: Vec<u16> = frames.iter().filter_map(|s| *s).collect();
    resident.sort_unstable();
    placed.sort_unstable();
    assert_eq!(resident, placed);
}

proptest! {
    #[test]
    fn simulator_matches_naive_model(
        capacity in 1usize..=8,
        accesses in proptest::collection::vec(0u16..16, 0..64),
    ) {
        let mut sim = Simulator::new(capacity);
        let mut order: Vec<u16> = Vec::new();
        let mut frames: Vec<Option<u16>> = vec![None; capacity];

        for &id in &accesses {
            let rec = sim.step(id).expect("no invariant violation on valid input");
            let (hit, victim) = model_step(&mut order, &mut frames, capacity, id);

            prop_assert_eq!(rec.kind == AccessKind::Hit, hit);
            prop_assert_eq!(rec.victim, victim);
            prop_assert_eq!(&rec.frames, &frames);
            assert_invariants(&sim, &rec.frames);
        }
    }

    #[test]
    fn totals_are_consistent(
        capacity in 1usize..=6,
        accesses in proptest::collection::vec(0u16..12, 0..48),
    ) {
        let mut sim = Simulator::new(capacity);
        let mut log = TraceLog::new();
        let report = sim.run(accesses.iter().copied(), &mut log).unwrap();

        prop_assert_eq!(report.accesses, accesses.len());
        prop_assert_eq!(report.hits + report.faults, accesses.len() as u64);
        prop_assert_eq!(report.final_frames, sim.frames());
        if let Some(last) = log.records().last() {
            prop_assert_eq!(last.hit_count, report.hits);
            prop_assert_eq!(last.fault_count, report.faults);
        }
    }
}

#[test]
fn seeded_soak_never_violates_invariants() {
    let mut rng = StdRng::seed_from_u64(0xf5a3);
    for capacity in [1usize, 2, 3, 7, 16] {
        let mut sim = Simulator::new(capacity);
        for _ in 0..10_000 {
            let id: u16 = rng.gen_range(0..64);
            let rec = sim.step(id).expect("valid input never errors");
            assert_invariants(&sim, &rec.frames);
        }
    }
}

#[test]
fn reference_trace_renders_byte_for_byte() {
    let mut sim = Simulator::new(3);
    let mut renderer = TextRenderer::new(Vec::new());
    let report = sim.run([1u64, 2, 3, 1, 4], &mut renderer).unwrap();

    let out = String::from_utf8(renderer.finish().unwrap()).unwrap();
    assert_eq!(
        out,
        "Access 1: MISS -> [1 -1 -1 ]\n\
         Access 2: MISS -> [1 2 -1 ]\n\
         Access 3: MISS -> [1 2 3 ]\n\
         Access 1: HIT -> [1 2 3 ]\n\
         Access 4: MISS -> [1 4 3 ]\n"
    );
    assert_eq!(report.hits, 1);
    assert_eq!(report.faults, 4);
}

#[test]
fn capacity_one_alternation() {
    let mut sim = Simulator::new(1);
    let mut log = TraceLog::new();
    sim.run([1u16, 2, 1, 2], &mut log).unwrap();

    let victims: Vec<_> = log.records().iter().map(|r| r.victim).collect();
    assert_eq!(victims, vec![None, Some(1), Some(2), Some(1)]);
    assert!(log.records().iter().all(|r| r.kind == AccessKind::Miss));
}

#[test]
fn parsed_input_drives_simulation_end_to_end() {
    let ids = framesim::input::parse_reference_string("1, 2 3 1,4").unwrap();
    let capacity = framesim::input::validate_frame_count(3).unwrap();

    let mut sim = Simulator::try_new(capacity).unwrap();
    let mut log = TraceLog::new();
    let report = sim.run(ids, &mut log).unwrap();

    assert_eq!(report.final_frames, vec![Some(1), Some(4), Some(3)]);
    assert_eq!(log.records()[4].victim, Some(2));
}
