//! End-to-end gesture behavior.
//!
//! These tests drive a [`PagerGestureEngine`] the way a host would: drag
//! samples in, frames ticked, outcomes read back.

use infinipage::page_index::{self, PageDirection};
use infinipage::prelude::*;
use infinipage::{EasingFunction, PagerError, TransitionId};
use infinipage_test_utils::{GestureScript, settle};

fn pager(config: PagerConfig, page: PageCoord) -> PagerGestureEngine {
    let mut pager = PagerGestureEngine::with_initial_page(config, page).unwrap();
    pager.set_viewport(ViewportSize::new(300.0, 300.0));
    pager
}

fn assert_at_rest(pager: &PagerGestureEngine) {
    assert_eq!(pager.live_offset(), Vec2::ZERO);
    assert_eq!(pager.locked_axis(), None);
    assert!(!pager.is_dragging());
    assert_eq!(pager.phase(), GesturePhase::Idle);
    assert!(pager.transition().is_none());
}

#[test]
fn test_predicted_translation_past_threshold_commits() {
    let config = PagerConfig::default().total_horizontal_pages(Some(5));
    let mut pager = pager(config, PageCoord::new(2, 0));

    GestureScript::swipe(Vec2::new(-40.0, 0.0), 2)
        .release_with_prediction(Vec2::new(-150.0, 0.0))
        .play(&mut pager);
    assert_eq!(pager.phase(), GesturePhase::AnimatingCommit);
    // The index only moves once the animation has finished.
    assert_eq!(pager.current_horizontal_page(), 2);

    assert_eq!(
        settle(&mut pager),
        Some(TransitionOutcome::Committed {
            axis: Axis::Horizontal,
            from: 2,
            to: 3
        })
    );
    assert_eq!(pager.current_horizontal_page(), 3);
    assert_at_rest(&pager);
}

#[test]
fn test_translation_below_threshold_cancels() {
    let config = PagerConfig::default().total_horizontal_pages(Some(5));
    let mut pager = pager(config, PageCoord::new(2, 0));

    GestureScript::swipe(Vec2::new(-50.0, 0.0), 5).play(&mut pager);
    assert_eq!(pager.phase(), GesturePhase::AnimatingCancel);

    assert_eq!(
        settle(&mut pager),
        Some(TransitionOutcome::Cancelled {
            axis: Some(Axis::Horizontal)
        })
    );
    assert_eq!(pager.current_page(), PageCoord::new(2, 0));
    assert_at_rest(&pager);
}

#[test]
fn test_boundary_blocks_commit_past_threshold() {
    let config = PagerConfig::default().total_horizontal_pages(Some(5));
    let mut pager = pager(config, PageCoord::new(0, 0));

    GestureScript::swipe(Vec2::new(250.0, 0.0), 5)
        .held()
        .play(&mut pager);
    // Rubber-banded: less than the raw drag, less than half a page.
    let offset = pager.live_offset().x;
    assert!(offset > 0.0 && offset < 150.0, "offset {offset}");

    let release = Vec2::new(250.0, 0.0);
    pager.drag_ended(DragSample::ended(release, release));
    assert_eq!(pager.phase(), GesturePhase::AnimatingCancel);
    settle(&mut pager);
    assert_eq!(pager.current_horizontal_page(), 0);
    assert_at_rest(&pager);
}

#[test]
fn test_locked_axis_never_moves_the_other_axis() {
    let config = PagerConfig::default()
        .total_horizontal_pages(Some(5))
        .total_vertical_pages(Some(5));
    let mut pager = pager(config, PageCoord::new(1, 2));

    let script = GestureScript::new([
        Vec2::new(-30.0, 5.0),
        Vec2::new(-40.0, -400.0),
        Vec2::new(-60.0, -500.0),
    ])
    .release_with_prediction(Vec2::new(-150.0, -900.0));

    for &translation in script.samples() {
        pager.drag_changed(DragSample::changed(translation));
        assert_eq!(pager.locked_axis(), Some(Axis::Horizontal));
        assert_eq!(pager.live_offset().y, 0.0);
    }
    let predicted = Vec2::new(-150.0, -900.0);
    pager.drag_ended(DragSample::ended(script.last_translation(), predicted));

    settle(&mut pager);
    assert_eq!(pager.current_page(), PageCoord::new(2, 2));
}

#[test]
fn test_vertical_gesture_commits_on_vertical_axis() {
    let mut pager = pager(PagerConfig::default(), PageCoord::new(1, 1));

    // Vertical threshold is a quarter page.
    GestureScript::swipe(Vec2::new(4.0, 80.0), 4).play(&mut pager);
    assert_eq!(
        settle(&mut pager),
        Some(TransitionOutcome::Committed {
            axis: Axis::Vertical,
            from: 1,
            to: 0
        })
    );
    assert_eq!(pager.current_page(), PageCoord::new(1, 0));
    assert_eq!(pager.current_vertical_page(), 0);
}

#[test]
fn test_disabled_axis_never_locks() {
    let config = PagerConfig::default().total_horizontal_pages(Some(0));
    let mut pager = pager(config, PageCoord::default());

    let script = GestureScript::swipe(Vec2::new(-240.0, 0.0), 6);
    for &translation in script.samples() {
        pager.drag_changed(DragSample::changed(translation));
        assert_eq!(pager.locked_axis(), None);
        assert_eq!(pager.live_offset(), Vec2::ZERO);
    }

    let release = DragSample::ended(Vec2::new(-240.0, 0.0), Vec2::new(-400.0, 0.0));
    assert_eq!(pager.drag_ended(release), None);
    assert_at_rest(&pager);
    assert_eq!(pager.current_page(), PageCoord::default());
}

#[test]
fn test_unbounded_axis_counts_past_zero() {
    let config = PagerConfig::default().unbounded_horizontal();
    let mut pager = pager(config, PageCoord::default());

    for expected in [-1, -2, -3] {
        GestureScript::swipe(Vec2::new(60.0, 0.0), 3)
            .release_with_prediction(Vec2::new(180.0, 0.0))
            .play(&mut pager);
        settle(&mut pager);
        assert_eq!(pager.current_horizontal_page(), expected);
    }
    // No rubber-banding without a boundary.
    GestureScript::swipe(Vec2::new(290.0, 0.0), 1)
        .held()
        .play(&mut pager);
    assert_eq!(pager.live_offset(), Vec2::new(290.0, 0.0));
}

#[test]
fn test_wraparound_for_every_bounded_total() {
    for total in 1..=8u32 {
        let last = i64::from(total) - 1;
        let total = Some(total);
        assert_eq!(page_index::advance(last, total, PageDirection::Forward), 0);
        assert_eq!(page_index::advance(0, total, PageDirection::Backward), last);
    }
    for page in [-7, 0, 12] {
        let next = page_index::advance(page, None, PageDirection::Forward);
        let previous = page_index::advance(page, None, PageDirection::Backward);
        assert_eq!((previous, next), (page - 1, page + 1));
    }
}

#[test]
fn test_interrupted_drag_springs_back() {
    let mut pager = pager(PagerConfig::default(), PageCoord::default());

    let id = GestureScript::swipe(Vec2::new(-200.0, 0.0), 4)
        .interrupted()
        .play(&mut pager);
    assert!(id.is_some());
    assert_eq!(pager.phase(), GesturePhase::AnimatingCancel);

    settle(&mut pager);
    assert_eq!(pager.current_page(), PageCoord::default());
    assert_at_rest(&pager);
}

#[test]
fn test_host_completion_rejects_superseded_transition() {
    let mut pager = pager(PagerConfig::default(), PageCoord::default());

    let stale = GestureScript::swipe(Vec2::new(-50.0, 0.0), 2)
        .play(&mut pager)
        .unwrap();
    assert_eq!(pager.phase(), GesturePhase::AnimatingCancel);

    // A new gesture interrupts the cancel and commits.
    let current = GestureScript::swipe(Vec2::new(-130.0, 0.0), 4)
        .release_with_prediction(Vec2::new(-160.0, 0.0))
        .play(&mut pager)
        .unwrap();
    assert_ne!(stale, current);

    assert_eq!(
        pager.finish_transition(stale),
        Err(PagerError::StaleTransition {
            requested: stale,
            current
        })
    );
    assert_eq!(pager.phase(), GesturePhase::AnimatingCommit);
    assert_eq!(pager.current_horizontal_page(), 0);

    assert_eq!(
        pager.finish_transition(current),
        Ok(TransitionOutcome::Committed {
            axis: Axis::Horizontal,
            from: 0,
            to: 1
        })
    );
    assert_at_rest(&pager);
    assert_eq!(
        pager.finish_transition(current),
        Err(PagerError::NoTransitionInFlight { requested: current })
    );
}

#[test]
fn test_commit_ignores_new_samples() {
    let mut pager = pager(PagerConfig::default(), PageCoord::default());

    GestureScript::swipe(Vec2::new(-120.0, 0.0), 3)
        .release_with_prediction(Vec2::new(-200.0, 0.0))
        .play(&mut pager);
    pager.tick(1.0 / 60.0);
    let in_flight = pager.transition().map(|t| t.id());

    pager.drag_changed(DragSample::changed(Vec2::new(0.0, 90.0)));
    pager.drag_cancelled();
    assert_eq!(pager.transition().map(|t| t.id()), in_flight);
    assert_eq!(pager.locked_axis(), Some(Axis::Horizontal));

    assert!(matches!(
        settle(&mut pager),
        Some(TransitionOutcome::Committed { to: 1, .. })
    ));
}

#[test]
fn test_jump_to_wraps_and_retires_transition() {
    let mut pager = pager(PagerConfig::default(), PageCoord::default());

    GestureScript::swipe(Vec2::new(-50.0, 0.0), 2).play(&mut pager);
    assert!(pager.transition().is_some());

    assert!(pager.jump_to(PageCoord::new(4, -1)));
    assert_eq!(pager.current_page(), PageCoord::new(1, 2));
    assert_at_rest(&pager);
    assert_eq!(pager.tick(1.0), None);
}

#[test]
fn test_tick_without_transition_is_noop() {
    let mut pager = pager(PagerConfig::default(), PageCoord::default());
    assert_eq!(pager.tick(1.0 / 60.0), None);
    assert_eq!(
        pager.finish_transition(TransitionId::new(7)),
        Err(PagerError::NoTransitionInFlight {
            requested: TransitionId::new(7)
        })
    );
}

#[test]
fn test_host_reads_transition_parameters() {
    let config = PagerConfig::default()
        .commit_duration(0.3)
        .commit_easing(EasingFunction::CubicOut);
    let mut pager = pager(config, PageCoord::default());

    let id = GestureScript::swipe(Vec2::new(-120.0, 0.0), 3)
        .play(&mut pager)
        .unwrap();

    let transition = pager.transition().unwrap();
    assert_eq!(transition.id(), id);
    assert!(transition.is_commit());
    let animation = transition.animation();
    assert_eq!(animation.to_value(), Vec2::new(-300.0, 0.0));
    assert_eq!(animation.duration_seconds(), 0.3);
    assert_eq!(animation.easing_function(), EasingFunction::CubicOut);
    assert!(!animation.is_complete());

    assert!(pager.finish_transition(id).is_ok());
    assert_eq!(pager.current_horizontal_page(), 1);
}
