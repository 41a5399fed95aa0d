//! Edit-mode demo
//!
//! Scripted walkthrough of the manipulation flow: place two heroes, enter
//! edit mode, aim the focus point at one of them, then rotate, lift, pinch,
//! and finally remove it. Run with `RUST_LOG=debug` to watch selection
//! changes.

use ar_engine::prelude::*;
use ar_engine::selection::focus_point;

/// Camera translated so its focus ray passes through `target` at `depth`
fn aim_focus_at(target: Vec3, depth: f32) -> ArCamera {
    let base = ArCamera::default();
    let focus = focus_point(base.viewport, PlacerConfig::default().focus_bias);
    let (_, direction) = base.pick_ray(focus);

    let position = target - direction * depth;
    ArCamera::new(
        position,
        position + Vec3::new(0.0, 0.0, -1.0),
        base.fov,
        base.viewport,
    )
}

fn run_frames(session: &mut PlacerSession, camera: &ArCamera, frames: usize, dt: f32) {
    for _ in 0..frames {
        session.on_frame(dt, camera);
    }
}

fn report(label: &str, session: &PlacerSession) {
    println!("--- {}", label);
    println!(
        "    mode={:?} selected={} panel={} reticle={}",
        session.edit_mode(),
        session.selected().is_some(),
        session.ui().action_panel_visible,
        session.ui().focus_reticle_visible,
    );
    for (_, hero) in session.registry().iter() {
        let t = &hero.transform;
        println!(
            "    {:>16}: pos=({:+.2}, {:+.2}, {:+.2}) scale={:.3} indicator={}",
            hero.kind.asset_name(),
            t.position.x,
            t.position.y,
            t.position.z,
            t.scale.x,
            hero.indicator_visible,
        );
    }
}

fn main() {
    env_logger::init();
    log::info!("starting edit-mode demo");

    let mut session = PlacerSession::default();
    let mut bridge = RecordingBridge::new();

    let hulk_at = Vec3::new(1.0, 0.0, -2.0);
    session.on_hero_picked(HeroKind::Hulk);
    session.place_hero(hulk_at, &mut bridge);
    session.on_hero_picked(HeroKind::IronMan);
    session.place_hero(Vec3::new(-1.0, 0.0, -2.5), &mut bridge);
    report("placed two heroes", &session);

    // Aim the focus point at the hulk's indicator and start editing
    let indicator = hulk_at + session.config().indicator_offset;
    let camera = aim_focus_at(indicator, 2.0);
    session.enter_edit_mode();
    run_frames(&mut session, &camera, 3, 0.016);
    report("edit mode, hulk under focus", &session);

    // Hold the rotate control for half a second
    session.on_action_gesture(ActionKind::Rotate, GesturePhase::Began);
    run_frames(&mut session, &camera, 5, 0.1);
    session.on_action_gesture(ActionKind::Rotate, GesturePhase::Ended);
    report("after 0.5 s of rotation", &session);

    // Lift it two ticks, then pinch it bigger
    session.on_action_gesture(ActionKind::MoveUp, GesturePhase::Began);
    run_frames(&mut session, &camera, 2, 0.1);
    session.on_action_gesture(ActionKind::MoveUp, GesturePhase::Ended);
    session.on_pinch_gesture(GesturePhase::Began, 1.0);
    session.on_pinch_gesture(GesturePhase::Changed, 2.0);
    session.on_pinch_gesture(GesturePhase::Changed, 1.25);
    session.on_pinch_gesture(GesturePhase::Ended, 1.25);
    report("after lift and pinch", &session);

    // Remove it, leave edit mode
    session.remove_selected(&mut bridge);
    session.exit_edit_mode();
    report("after removal and edit-mode exit", &session);

    println!(
        "scene graph now holds {} hero(es); {} detach event(s) total",
        bridge.attached_count(),
        bridge.detach_count()
    );
}
