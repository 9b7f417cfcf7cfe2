//! Headless pager example driving the gesture engine without a UI.
//!
//! This example shows:
//! - Configuring a pager with one bounded and one unbounded axis
//! - Feeding scripted drag gestures
//! - Ticking transitions to completion on a fixed frame clock
//! - Rendering the current cell and its neighbors
//!
//! Run with `RUST_LOG=infinipage=trace` for per-sample logging.

use infinipage::prelude::*;
use infinipage_core::logging;
use infinipage_test_utils::{GestureScript, settle};

fn main() -> Result<(), PagerError> {
    logging::init();

    let config = PagerConfig::default()
        .unbounded_horizontal()
        .total_vertical_pages(Some(4))
        .enable_visibility_reporting(true);
    let mut pager = PagerGestureEngine::new(config)?;
    pager.set_viewport(ViewportSize::new(390.0, 844.0));

    let gestures = [
        (
            "flick left",
            GestureScript::swipe(Vec2::new(-90.0, 6.0), 6)
                .release_with_prediction(Vec2::new(-260.0, 10.0)),
        ),
        ("short drag up", GestureScript::swipe(Vec2::new(2.0, -120.0), 6)),
        ("drag up", GestureScript::swipe(Vec2::new(2.0, -260.0), 8)),
        ("pull past top", GestureScript::swipe(Vec2::new(0.0, 500.0), 10)),
        ("flick right", GestureScript::swipe(Vec2::new(150.0, -4.0), 5)),
    ];

    for (name, script) in gestures {
        script.drag(&mut pager);
        if let Some(visibility) = pager.visibility() {
            println!(
                "{name}: offset {:?}, visibility {:+.2} on {:?}",
                pager.live_offset(),
                visibility.main_page_percent,
                visibility.axis
            );
        }

        script.finish(&mut pager);
        match settle(&mut pager) {
            Some(outcome) => println!("{name}: {outcome:?}, now at {}", pager.current_page()),
            None => println!("{name}: no transition, still at {}", pager.current_page()),
        }
    }

    let mut label = |page: PageCoord, ctx: &CellContext| format!("{:?} {page}", ctx.slot);
    let cells = pager.render_cells(&mut label);
    for row in cells.grid() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match cell.and_then(|cell| cell.content()) {
                Some(label) => format!("{label:^16}"),
                None => format!("{:^16}", "."),
            })
            .collect();
        println!("{}", line.join("|"));
    }

    Ok(())
}
