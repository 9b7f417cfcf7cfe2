//! Profiling feature wiring.
//!
//! `infinipage-core` only compiles puffin scopes in when this crate's
//! `profiling` feature asks for them.

use infinipage::prelude::*;
use infinipage_core::profiling;

#[test]
fn test_core_profiling_follows_crate_feature() {
    assert_eq!(profiling::ENABLED, cfg!(feature = "profiling"));
}

#[test]
fn test_engine_runs_with_or_without_scopes() {
    let mut pager = PagerGestureEngine::new(PagerConfig::default()).unwrap();
    pager.set_viewport(ViewportSize::new(300.0, 300.0));

    pager.drag_changed(DragSample::changed(Vec2::new(-20.0, 0.0)));
    let release = Vec2::new(-20.0, 0.0);
    pager.drag_ended(DragSample::ended(release, release));
    while pager.tick(1.0 / 60.0).is_none() {}

    assert_eq!(pager.phase(), GesturePhase::Idle);
}
