//! Property-based tests for sweep invariants using the `proptest` crate.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use tubesweep::math::{Point2, Point3, Vector3};
use tubesweep::operations::sweep::{Frame, RegularProfile, TransformRing};
use tubesweep::{FrameMode, Sweep, SweepParams, TorusKnot, TrefoilKnot};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary direction that is neither tiny nor close to the up axis.
fn arb_direction() -> impl Strategy<Value = Vector3> {
    (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0)
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
        .prop_filter("non-degenerate, not vertical", |v| {
            v.norm() > 1e-3 && v.x.hypot(v.y) > 1e-3 * v.norm()
        })
}

fn arb_frame_mode() -> impl Strategy<Value = FrameMode> {
    prop_oneof![
        Just(FrameMode::FixedUp),
        Just(FrameMode::RotationMinimizing),
    ]
}

const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// 1. Fixed-up frames are orthonormal and right-handed
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn frame_is_orthonormal(dir in arb_direction()) {
        let frame = Frame::from_direction(&dir, &Frame::up()).unwrap();
        prop_assert!(frame.normal.dot(&frame.binormal).abs() < TOL);
        prop_assert!(frame.normal.dot(&frame.tangent).abs() < TOL);
        prop_assert!(frame.binormal.dot(&frame.tangent).abs() < TOL);
        prop_assert!((frame.normal.cross(&frame.binormal) - frame.tangent).norm() < TOL);
        prop_assert!((frame.tangent - dir.normalize()).norm() < TOL);
    }
}

// ---------------------------------------------------------------------------
// 2. Ring placement is rigid: profile distances survive any twist and frame
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn ring_preserves_profile_distances(
        dir in arb_direction(),
        sides in 3usize..24,
        radius in 0.01f64..50.0,
        twist in -720.0f64..720.0,
        (ox, oy, oz) in (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0),
    ) {
        let profile = RegularProfile::new(sides, radius).unwrap();
        let frame = Frame::from_direction(&dir, &Frame::up()).unwrap();
        let ring = TransformRing::new(twist).execute(&profile, &frame, &Point3::new(ox, oy, oz));

        let pts: &[Point2] = profile.points();
        for a in 0..sides {
            for b in (a + 1)..sides {
                let local = (pts[b] - pts[a]).norm();
                let world = (ring.points()[b] - ring.points()[a]).norm();
                prop_assert!((local - world).abs() < 1e-9 * radius.max(1.0));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Mesh sizes and face indices for arbitrary configurations
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn mesh_dimensions_and_indices(
        steps in 2usize..160,
        sides in 3usize..16,
        scale in 0.5f64..20.0,
        radius in 0.01f64..1.0,
        twist in -10.0f64..10.0,
        mode in arb_frame_mode(),
    ) {
        let params = SweepParams::default()
            .with_step_count(steps)
            .with_profile_sides(sides)
            .with_path_scale(scale)
            .with_tube_radius(radius)
            .with_twist_factor(twist)
            .with_frame_mode(mode);
        let mesh = Sweep::new(TrefoilKnot, params).execute().unwrap();

        let n = steps * sides;
        prop_assert_eq!(mesh.vertex_count(), n);
        prop_assert_eq!(mesh.face_count(), n);
        for face in &mesh.faces {
            for (a, &va) in face.iter().enumerate() {
                prop_assert!((va as usize) < n);
                for &vb in &face[a + 1..] {
                    prop_assert_ne!(va, vb);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 4. The pipeline is a pure function of its inputs
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sweep_is_deterministic(
        steps in 3usize..120,
        sides in 3usize..10,
        twist in -5.0f64..5.0,
        mode in arb_frame_mode(),
    ) {
        let knot = TorusKnot::default();
        let params = SweepParams::default()
            .with_step_count(steps)
            .with_profile_sides(sides)
            .with_twist_factor(twist)
            .with_frame_mode(mode);
        let a = Sweep::new(knot, params).execute().unwrap();
        let b = Sweep::new(knot, params).execute().unwrap();
        prop_assert_eq!(a, b);
    }
}
