//! Layout selection, element membership, swapping, and fixed-point
//! iteration.

mod support;

use gridkit_host::{ElementHost, HeadlessHost};
use gridkit_layout::{
    Alignment, Axes, Cell, GridContainer, LayoutError, LayoutSpec, Position, Rect, Size,
    DEFAULT_MAX_LAYOUT_PASSES,
};
use support::{assert_frame, host_with_surface, init_tracing};

#[test]
fn test_portrait_falls_back_to_default_spec() {
    init_tracing();
    let (mut host, surface) = host_with_surface(300.0, 400.0);
    let wide_item = host.create_sized(10.0, 10.0);
    let tall_item = host.create_sized(10.0, 10.0);

    let mut container: GridContainer = GridContainer::new(surface);
    container.add_layout_with_trigger(
        LayoutSpec::new()
            .with_columns([1.0])
            .with_rows([1.0])
            .add(Cell::at(wide_item, 0, 0)),
        |state| state.size.width > state.size.height,
    );
    container.add_layout(
        LayoutSpec::new()
            .with_columns([1.0])
            .with_rows([1.0])
            .add(Cell::at(tall_item, 0, 0)),
    );

    container.perform_layout(&mut host).unwrap();

    // Portrait: the trigger fails, the untriggered spec is the default.
    assert_eq!(host.children_of(surface), vec![tall_item]);
    assert_frame(&host, tall_item, Rect::new(0.0, 0.0, 300.0, 400.0));

    // Landscape: the triggered spec takes over and membership flips.
    host.set_frame(surface, Rect::new(0.0, 0.0, 400.0, 300.0))
        .unwrap();
    container.perform_layout(&mut host).unwrap();

    assert_eq!(host.children_of(surface), vec![wide_item]);
    assert_eq!(host.parent_of(tall_item), None);
    assert_frame(&host, wide_item, Rect::new(0.0, 0.0, 400.0, 300.0));
}

#[test]
fn test_shared_elements_stay_attached_across_switch() {
    let (mut host, surface) = host_with_surface(300.0, 400.0);
    let shared = host.create_sized(10.0, 10.0);
    let portrait_only = host.create_sized(10.0, 10.0);

    let mut container: GridContainer = GridContainer::new(surface);
    container.add_layout_with_trigger(
        LayoutSpec::new()
            .with_columns([1.0])
            .with_rows([1.0])
            .add(Cell::at(shared, 0, 0)),
        |state| state.is_landscape(),
    );
    container.add_layout(
        LayoutSpec::new()
            .with_columns([1.0])
            .with_rows([0.5, 0.5])
            .add(Cell::at(shared, 0, 0))
            .add(Cell::at(portrait_only, 1, 0)),
    );

    container.perform_layout(&mut host).unwrap();
    assert_eq!(host.children_of(surface), vec![shared, portrait_only]);

    host.set_frame(surface, Rect::new(0.0, 0.0, 400.0, 300.0))
        .unwrap();
    container.perform_layout(&mut host).unwrap();

    // Only the element absent from the new spec is detached.
    assert_eq!(host.children_of(surface), vec![shared]);
    assert_eq!(host.parent_of(portrait_only), None);
}

#[test]
fn test_no_qualifying_spec_is_noop() {
    let (mut host, surface) = host_with_surface(100.0, 100.0);
    let item = host.create_sized(10.0, 10.0);

    let mut container: GridContainer = GridContainer::new(surface);
    container.add_layout_with_trigger(
        LayoutSpec::new()
            .with_columns([1.0])
            .with_rows([1.0])
            .add(Cell::at(item, 0, 0)),
        |state| state.size.width > 500.0,
    );

    let report = container.perform_layout(&mut host).unwrap();

    assert!(!report.resized());
    assert!(container.current_layout().is_none());
    assert_frame(&host, item, Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(host.children_of(surface), Vec::new());
}

#[test]
fn test_swap_element_keeps_structure() {
    let (mut host, surface) = host_with_surface(200.0, 100.0);
    let old_badge = host.create_sized(10.0, 10.0);
    let new_badge = host.create_sized(10.0, 10.0);

    let mut container: GridContainer = GridContainer::new(surface);
    container.add_layout(
        LayoutSpec::new()
            .with_columns([1.0])
            .with_rows([1.0])
            .add(Cell::new(old_badge, Position::at(0, 0).margin_all(4.0))),
    );

    container.perform_layout(&mut host).unwrap();
    assert_eq!(host.children_of(surface), vec![old_badge]);

    container
        .swap_element(&mut host, old_badge, new_badge)
        .unwrap();
    assert_eq!(host.children_of(surface), vec![new_badge]);
    assert_eq!(host.parent_of(old_badge), None);

    container.perform_layout(&mut host).unwrap();
    assert_frame(&host, new_badge, Rect::new(4.0, 4.0, 192.0, 92.0));

    // The swapped-out element is gone from every spec.
    let result = container.swap_element(&mut host, old_badge, new_badge);
    assert!(matches!(result, Err(LayoutError::ElementNotPlaced(_))));
}

#[test]
fn test_fixed_point_across_selection_change() {
    let mut host = HeadlessHost::new();
    let surface = host.create_element(Rect::zero());
    let item = host.create_sized(10.0, 10.0);

    let mut container: GridContainer = GridContainer::new(surface);
    container.auto_width = true;
    container.auto_height = true;
    // Once the container has grown past 100, the wide spec takes over and
    // settles at 200x60.
    container.add_layout_with_trigger(
        LayoutSpec::new()
            .with_columns([200.0])
            .with_rows([60.0])
            .add(Cell::at(item, 0, 0)),
        |state| state.size.width >= 100.0,
    );
    container.add_layout(
        LayoutSpec::new()
            .with_columns([120.0])
            .with_rows([40.0])
            .add(Cell::at(item, 0, 0)),
    );

    let report = container
        .perform_layout_until_stable(&mut host, DEFAULT_MAX_LAYOUT_PASSES)
        .unwrap();

    assert_eq!(report.size_before, Size::zero());
    assert_eq!(report.size_after, Size::new(200.0, 60.0));
    assert_eq!(host.frame(surface).unwrap().size(), Size::new(200.0, 60.0));
    assert_frame(&host, item, Rect::new(0.0, 0.0, 200.0, 60.0));
}

#[test]
fn test_oscillating_selection_hits_the_pass_cap() {
    let mut host = HeadlessHost::new();
    let surface = host.create_element(Rect::zero());
    let item = host.create_sized(10.0, 10.0);

    let mut container: GridContainer = GridContainer::new(surface);
    container.auto_width = true;
    // The wide spec shrinks the container below its own trigger, which
    // re-activates the narrow spec: the size never settles.
    container.add_layout_with_trigger(
        LayoutSpec::new()
            .with_columns([50.0])
            .with_rows([40.0])
            .add(Cell::at(item, 0, 0)),
        |state| state.size.width >= 150.0,
    );
    container.add_layout(
        LayoutSpec::new()
            .with_columns([150.0])
            .with_rows([40.0])
            .add(Cell::at(item, 0, 0)),
    );

    // The driver must terminate and accept the last computed size.
    let report = container
        .perform_layout_until_stable(&mut host, DEFAULT_MAX_LAYOUT_PASSES)
        .unwrap();

    let width = report.size_after.width;
    assert!(width == 50.0 || width == 150.0);
    assert_eq!(host.frame(surface).unwrap().width, width);
}

#[test]
fn test_report_carries_sizes_across_stabilization() {
    let mut host = HeadlessHost::new();
    let surface = host.create_element(Rect::new(0.0, 0.0, 7.0, 9.0));
    let item = host.create_sized(25.0, 15.0);

    let mut container: GridContainer = GridContainer::new(surface);
    container.auto_width = true;
    container.auto_height = true;
    container.add_layout(
        LayoutSpec::new()
            .with_columns([-1.0])
            .with_rows([-1.0])
            .add(Cell::new(
                item,
                Position::at(0, 0).align(Axes::Both, Alignment::Start),
            )),
    );

    let report = container
        .perform_layout_until_stable(&mut host, DEFAULT_MAX_LAYOUT_PASSES)
        .unwrap();

    assert_eq!(report.size_before, Size::new(7.0, 9.0));
    assert_eq!(report.size_after, Size::new(25.0, 15.0));
    assert!(report.resized());
}
