//! Property tests for invariants shared by every policy.

use proptest::prelude::*;

use super::{run_algorithm, run_fcfs, Algorithm};
use crate::models::{ProcessDescriptor, SimulationResult};

const PROPTEST_CASES: u32 = 256;

fn process_set() -> impl Strategy<Value = Vec<ProcessDescriptor>> {
    proptest::collection::vec((0i64..30, 1i64..12), 0..16).prop_map(|draws| {
        draws
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst))| {
                ProcessDescriptor::new(format!("P{}", i + 1), arrival, burst)
            })
            .collect()
    })
}

fn check_invariants(
    procs: &[ProcessDescriptor],
    res: &SimulationResult,
) -> Result<(), TestCaseError> {
    // Contiguous cover of [0, total_time)
    let mut cursor = 0;
    for seg in &res.timeline {
        prop_assert_eq!(seg.start, cursor);
        prop_assert!(seg.duration() > 0);
        cursor = seg.end;
    }
    prop_assert_eq!(cursor, res.total_time);

    // Conservation of service
    let bursts: i64 = procs.iter().map(|p| p.burst).sum();
    prop_assert_eq!(res.busy_time, bursts);
    prop_assert!(res.busy_time <= res.total_time);
    if let Some(u) = res.utilization() {
        prop_assert!((0.0..=1.0).contains(&u));
    }

    // Idle segments never touch each other
    for pair in res.timeline.windows(2) {
        prop_assert!(!(pair[0].is_idle() && pair[1].is_idle()));
    }

    // One record per process, each consistent with its own segments
    prop_assert_eq!(res.summary.len(), procs.len());
    for (p, r) in procs.iter().zip(&res.summary) {
        prop_assert_eq!(&r.id, &p.id);
        prop_assert_eq!(r.turnaround, r.waiting + r.burst);
        prop_assert!(r.waiting >= 0);
        prop_assert!(r.response >= 0 && r.response <= r.waiting);

        let segs = res.segments_for(&p.id);
        let served: i64 = segs.iter().map(|s| s.duration()).sum();
        prop_assert_eq!(served, p.burst);
        prop_assert!(segs.iter().all(|s| s.start >= p.arrival));
        prop_assert_eq!(segs.last().map(|s| s.end), Some(r.completion));
    }

    prop_assert_eq!(
        res.totals.sum_waiting,
        res.summary.iter().map(|r| r.waiting).sum::<i64>()
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn prop_invariants_hold_for_every_policy(procs in process_set(), quantum in 1i64..6) {
        for algorithm in Algorithm::ALL {
            let res = run_algorithm(algorithm, &procs, quantum).unwrap();
            check_invariants(&procs, &res)?;
        }
    }

    #[test]
    fn prop_runs_are_deterministic(procs in process_set(), quantum in 1i64..6) {
        for algorithm in Algorithm::ALL {
            let a = run_algorithm(algorithm, &procs, quantum).unwrap();
            let b = run_algorithm(algorithm, &procs, quantum).unwrap();
            prop_assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    }

    #[test]
    fn prop_schedule_independent_of_input_order(procs in process_set(), quantum in 1i64..6) {
        let mut reversed = procs.clone();
        reversed.reverse();
        for algorithm in Algorithm::ALL {
            let a = run_algorithm(algorithm, &procs, quantum).unwrap();
            let b = run_algorithm(algorithm, &reversed, quantum).unwrap();
            prop_assert_eq!(&a.timeline, &b.timeline);
            prop_assert_eq!(a.totals, b.totals);
        }
    }

    #[test]
    fn prop_fcfs_completes_in_arrival_order(procs in process_set()) {
        let res = run_fcfs(&procs).unwrap();
        let mut records: Vec<_> = res.summary.iter().collect();
        records.sort_by_key(|r| r.completion);
        for pair in records.windows(2) {
            prop_assert!(pair[0].arrival <= pair[1].arrival);
        }
    }

    #[test]
    fn prop_srtf_never_waits_more_on_average_than_fcfs(procs in process_set()) {
        let srtf = run_algorithm(Algorithm::Srtf, &procs, 1).unwrap();
        let fcfs = run_fcfs(&procs).unwrap();
        prop_assert!(srtf.totals.sum_waiting <= fcfs.totals.sum_waiting);
        prop_assert_eq!(srtf.total_time, fcfs.total_time);
    }
}
