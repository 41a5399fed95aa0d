//! Placement demo
//!
//! Headless run of the placement flow: a simulated tracking session detects
//! feature points on a floor patch, then scripted touches place one of each
//! hero. Run with `RUST_LOG=info` to watch the session's state transitions.

use ar_engine::prelude::*;
use rand::Rng;

const FLOOR_POINTS: usize = 200;
const MAX_TOUCHES_PER_HERO: usize = 500;

fn main() {
    env_logger::init();
    log::info!("starting placement demo");

    let mut session = PlacerSession::default();
    let mut bridge = RecordingBridge::new();
    let camera = ArCamera::default();
    let mut timer = FrameTimer::new();
    let mut rng = rand::thread_rng();

    // Simulated surface detection: a patch of tracked floor in front of the
    // camera, points accumulating in detection order like a warming-up session
    let mut cloud = FeaturePointCloud::default();
    for _ in 0..FLOOR_POINTS {
        cloud.detect(Vec3::new(
            rng.gen_range(-1.5..1.5),
            rng.gen_range(-0.7..-0.3),
            rng.gen_range(-3.0..-1.0),
        ));
    }
    log::info!("tracking warmed up with {} feature points", cloud.len());

    for kind in HeroKind::all() {
        session.on_hero_picked(kind);

        // Tap around until a touch lands on a tracked point; misses are
        // silent no-ops, exactly like aiming at an untracked patch of floor
        for _ in 0..MAX_TOUCHES_PER_HERO {
            let touch = Point2::new(
                rng.gen_range(0.0..camera.viewport.x),
                rng.gen_range(0.0..camera.viewport.y),
            );
            session.on_touch(touch, &cloud, &camera, &mut bridge);

            // One displayed frame elapses between touches
            timer.update();
            session.on_frame(timer.delta_time(), &camera);

            if session.pending_hero().is_none() {
                break;
            }
        }
    }

    println!(
        "placed {} heroes ({} attached to the scene graph) over {} frames:",
        session.registry().len(),
        bridge.attached_count(),
        timer.frame_count()
    );
    for (_, hero) in session.registry().iter() {
        let p = hero.transform.position;
        println!(
            "  {:>16} at ({:+.2}, {:+.2}, {:+.2})",
            hero.kind.asset_name(),
            p.x,
            p.y,
            p.z
        );
    }
}
