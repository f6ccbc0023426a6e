// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{HeadlessSurface, InvalidationReason, RenderController, StaleRenderDiscarded};
use crate::remote::CurrentGraph;

fn graph(version: u64, label: &str) -> CurrentGraph {
    CurrentGraph { version, dot: format!("digraph {{ graph [label=\"{label}\"] }}") }
}

#[fixture]
fn controller() -> RenderController<HeadlessSurface> {
    RenderController::new(HeadlessSurface::default())
}

#[rstest]
fn generation_starts_at_zero_and_strictly_increases(
    mut controller: RenderController<HeadlessSurface>,
) {
    assert_eq!(controller.generation(), 0);
    let reasons = [
        InvalidationReason::FirstMount,
        InvalidationReason::SettingsCommitted,
        InvalidationReason::SettingsCommitted,
        InvalidationReason::TablesChanged,
        InvalidationReason::ManualRefresh,
    ];
    let mut last = 0;
    for reason in reasons {
        let ticket = controller.invalidate(reason);
        assert!(ticket.generation() > last);
        assert_eq!(ticket.reason(), reason);
        assert_eq!(ticket.generation(), controller.generation());
        last = ticket.generation();
    }
}

#[rstest]
fn out_of_order_arrival_keeps_the_newest_generation(
    mut controller: RenderController<HeadlessSurface>,
) {
    let first = controller.invalidate(InvalidationReason::SettingsCommitted);
    let second = controller.invalidate(InvalidationReason::SettingsCommitted);

    let applied = controller.accept(second, graph(8, "second")).expect("apply second");
    assert_eq!(applied.generation(), 2);

    let err = controller.accept(first, graph(7, "first")).unwrap_err();
    assert_eq!(err, StaleRenderDiscarded { ticket_generation: 1, current_generation: 2 });

    let current = controller.current().expect("current");
    assert_eq!(current.generation(), 2);
    assert!(current.source_description().contains("second"));
    assert_eq!(controller.surface().drawn_generations(), &[2]);
}

#[rstest]
fn staleness_is_judged_at_arrival_not_at_request(
    mut controller: RenderController<HeadlessSurface>,
) {
    let ticket = controller.invalidate(InvalidationReason::ManualRefresh);
    // Still current when requested, superseded before the response lands.
    controller.invalidate(InvalidationReason::TablesChanged);
    assert!(controller.accept(ticket, graph(1, "late")).is_err());
    assert!(controller.current().is_none());
    assert!(controller.binding().is_none());
}

#[rstest]
fn handlers_are_detached_before_each_redraw(mut controller: RenderController<HeadlessSurface>) {
    let first = controller.invalidate(InvalidationReason::FirstMount);
    controller.accept(first, graph(1, "a")).expect("apply");
    let binding = controller.binding().expect("bound");
    assert_eq!(binding.generation(), 1);
    assert_eq!(controller.surface().detach_count(), 0);

    let second = controller.invalidate(InvalidationReason::ManualRefresh);
    controller.accept(second, graph(1, "b")).expect("apply");
    let rebound = controller.binding().expect("bound");
    assert_eq!(rebound.generation(), 2);
    assert_ne!(rebound.id(), binding.id());
    assert_eq!(controller.surface().detach_count(), 1);
    assert_eq!(controller.surface().attached(), Some(rebound));
}

#[test]
fn controllers_do_not_share_counters() {
    let mut a = RenderController::new(HeadlessSurface::default());
    let mut b = RenderController::new(HeadlessSurface::default());
    a.invalidate(InvalidationReason::FirstMount);
    a.invalidate(InvalidationReason::ManualRefresh);
    let ticket = b.invalidate(InvalidationReason::FirstMount);
    assert_eq!(ticket.generation(), 1);
    b.accept(ticket, graph(3, "b")).expect("apply");
    assert_eq!(b.binding().map(|binding| binding.id()), Some(0));
}
