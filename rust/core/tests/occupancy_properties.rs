// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coverage and search properties of the occupancy model, checked over a
//! deterministic spread of generated cabinets.

use dcim_lite_core::{
    compute_free_runs, find_available_starts, find_overlaps, is_placement_valid, CabinetId,
    Device, DeviceCategory, DeviceId, SlotRange,
};

/// Small linear congruential generator so the cases are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next() % (hi - lo + 1) as u64) as i32
    }
}

/// Cabinets with a mix of clean, overlapping, reversed and out-of-bounds devices.
fn generated_cases() -> Vec<(i32, Vec<Device>)> {
    let mut rng = Lcg(0x5eed);
    (0..200)
        .map(|_| {
            let u_height = rng.range(1, 48);
            let count = rng.range(0, 8);
            let devices = (0..count)
                .map(|i| {
                    let start_u = rng.range(-3, u_height + 3);
                    let end_u = start_u + rng.range(-1, 6);
                    Device {
                        id: DeviceId(i as u64 + 1),
                        name: format!("dev-{}", i),
                        cabinet_id: CabinetId(1),
                        category: DeviceCategory::Other,
                        start_u,
                        end_u,
                    }
                })
                .collect();
            (u_height, devices)
        })
        .collect()
}

fn clamped_occupied(u_height: i32, devices: &[Device]) -> Vec<bool> {
    let mut occupied = vec![false; u_height as usize];
    for device in devices {
        if let Some(range) = device.slots().clamp_to(u_height) {
            for u in range.slots() {
                occupied[(u - 1) as usize] = true;
            }
        }
    }
    occupied
}

#[test]
fn free_runs_and_occupancy_partition_the_cabinet() {
    for (u_height, devices) in generated_cases() {
        let occupied = clamped_occupied(u_height, &devices);
        let mut covered = vec![0u32; u_height as usize];

        for run in compute_free_runs(u_height, &devices) {
            assert!(run.fits_within(u_height), "run {} outside 1..={}", run, u_height);
            for u in run.slots() {
                assert!(!occupied[(u - 1) as usize], "run {} covers occupied U{}", run, u);
                covered[(u - 1) as usize] += 1;
            }
        }

        for (index, count) in covered.iter().enumerate() {
            let expected = if occupied[index] { 0 } else { 1 };
            assert_eq!(*count, expected, "U{} of {}: {:?}", index + 1, u_height, devices);
        }
    }
}

#[test]
fn free_runs_ascend_and_never_touch() {
    for (u_height, devices) in generated_cases() {
        let runs = compute_free_runs(u_height, &devices);
        for pair in runs.windows(2) {
            assert!(
                pair[0].end_u + 1 < pair[1].start_u,
                "runs {} and {} should have merged",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn free_runs_are_idempotent_and_order_independent() {
    for (u_height, mut devices) in generated_cases() {
        let first = compute_free_runs(u_height, &devices);
        assert_eq!(first, compute_free_runs(u_height, &devices));

        devices.reverse();
        assert_eq!(first, compute_free_runs(u_height, &devices));
    }
}

#[test]
fn available_starts_are_exactly_the_valid_ones() {
    for (u_height, devices) in generated_cases() {
        for height in 1..=4 {
            let starts = find_available_starts(u_height, &devices, height);
            let expected: Vec<i32> = (1..=u_height)
                .filter(|&start| {
                    is_placement_valid(
                        u_height,
                        &devices,
                        SlotRange::with_height(start, height),
                        None,
                    )
                })
                .collect();
            assert_eq!(starts, expected, "height {} in {}: {:?}", height, u_height, devices);
        }
    }
}

#[test]
fn overlaps_do_not_depend_on_input_order() {
    for (u_height, mut devices) in generated_cases() {
        let forward = find_overlaps(u_height, &devices);
        devices.reverse();
        assert_eq!(forward, find_overlaps(u_height, &devices));
        for overlap in &forward {
            assert!(overlap.first < overlap.second);
            assert!(overlap.range.fits_within(u_height));
        }
    }
}

#[test]
fn scenario_forty_two_u_cabinet() {
    let devices = vec![
        Device {
            id: DeviceId(1),
            name: "sw".into(),
            cabinet_id: CabinetId(1),
            category: DeviceCategory::Switch,
            start_u: 5,
            end_u: 6,
        },
        Device {
            id: DeviceId(2),
            name: "fw".into(),
            cabinet_id: CabinetId(1),
            category: DeviceCategory::Firewall,
            start_u: 10,
            end_u: 10,
        },
    ];

    assert_eq!(
        compute_free_runs(42, &devices),
        vec![
            SlotRange::new(1, 4),
            SlotRange::new(7, 9),
            SlotRange::new(11, 42)
        ]
    );

    let starts = find_available_starts(42, &devices, 3);
    assert!(starts.contains(&7));
    assert!(!starts.contains(&8));
    assert!(!starts.contains(&4));
    assert!(!starts.contains(&9));
    assert_eq!(starts.last(), Some(&40));
}
