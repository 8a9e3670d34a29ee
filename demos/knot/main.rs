//! Sweeps a tube along one of the bundled curves and logs the result.
//!
//! Usage:
//! ```text
//! cargo run --example knot                     # trefoil, fixed-up frames
//! cargo run --example knot -- torus rmf        # (2, 3) torus knot, rotation-minimizing
//! cargo run --example knot -- circle strict 4  # circle, strict frames, 4 degrees twist
//! ```

use tracing::{error, info};
use tubesweep::{CirclePath, FrameMode, PathCurve, Sweep, SweepParams, TorusKnot, TrefoilKnot};

fn main() -> tubesweep::Result<()> {
    // Default: WARN for everything, INFO for the sweep.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tubesweep=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("knot=info".parse().unwrap_or_default())
        .add_directive("tubesweep=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let curve_name = args.first().map_or("trefoil", String::as_str);
    let frame_mode = match args.get(1).map(String::as_str) {
        Some("strict") => FrameMode::Strict,
        Some("rmf") => FrameMode::RotationMinimizing,
        _ => FrameMode::FixedUp,
    };
    let twist = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.0);

    let params = SweepParams::default()
        .with_frame_mode(frame_mode)
        .with_twist_factor(twist)
        .with_closure_tolerance(1e-9);

    match curve_name {
        "torus" => run(TorusKnot::default(), params),
        "circle" => run(CirclePath::new(1.0)?, params),
        "trefoil" => run(TrefoilKnot, params),
        other => {
            error!(curve = other, "unknown curve, expected trefoil, torus or circle");
            Ok(())
        }
    }
}

fn run<C: PathCurve>(curve: C, params: SweepParams) -> tubesweep::Result<()> {
    let mesh = Sweep::new(curve, params).execute()?;
    let triangles = mesh.triangulate();

    if let Some(aabb) = mesh.bounding_box() {
        let size = aabb.size();
        info!(
            x = size.x,
            y = size.y,
            z = size.z,
            "bounding box"
        );
    }
    info!(
        rings = mesh.rings,
        sides = mesh.sides,
        quads = mesh.face_count(),
        triangles = triangles.indices.len(),
        "tube ready"
    );
    Ok(())
}
