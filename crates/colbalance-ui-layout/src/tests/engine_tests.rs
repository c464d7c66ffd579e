use super::*;

fn viewport(width: f32, height: f32) -> Viewport {
    Viewport::new(width, height).unwrap()
}

fn sizes(pairs: &[(f32, f32)]) -> Vec<Size> {
    pairs.iter().map(|&(w, h)| Size::new(w, h)).collect()
}

fn layout(items: &[Size], viewport: Viewport, spec: ColumnBalanceSpec) -> SizedLayout {
    let mut engine = LayoutEngine::new(viewport, spec);
    engine.assign_items(items).unwrap();
    engine.calculate_column_sizes()
}

fn indices(column: &Column) -> Vec<usize> {
    column.elements().iter().map(|entry| entry.index).collect()
}

#[test]
fn second_item_overflows_when_no_new_column_fits() {
    let items = sizes(&[(350.0, 250.0), (300.0, 198.0)]);
    let layout = layout(&items, viewport(360.0, 300.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 1);
    let column = &layout.columns()[0];
    assert_eq!(indices(column), vec![0, 1]);
    assert_eq!(column.desired_height(), 448.0);
    assert!(column.is_overflowed());
    assert_eq!(layout.spare_space(), 10.0);
    assert_eq!(column.calculated_width(), 360.0);
    assert_eq!(layout.total_size(), Size::new(360.0, 448.0));
}

#[test]
fn items_fill_first_column_up_to_exact_budget() {
    let items = sizes(&[(50.0, 100.0), (50.0, 100.0), (50.0, 100.0)]);
    let layout = layout(&items, viewport(360.0, 300.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 1);
    let column = &layout.columns()[0];
    assert_eq!(column.desired_height(), 300.0);
    assert!(!column.is_overflowed());

    let ys: Vec<f32> = layout.placements().iter().map(|p| p.rect.y).collect();
    assert_eq!(ys, vec![0.0, 100.0, 200.0]);
}

#[test]
fn empty_input_produces_no_columns_and_zero_size() {
    let items: Vec<Size> = Vec::new();
    let layout = layout(&items, viewport(360.0, 300.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 0);
    assert_eq!(layout.total_size(), Size::ZERO);
    assert_eq!(layout.spare_space(), 0.0);
    assert!(layout.placements().is_empty());
}

#[test]
fn negative_slack_shrinks_every_column_evenly() {
    // Narrow first items open three columns; wide followers then widen them.
    let items = sizes(&[
        (50.0, 200.0),
        (50.0, 200.0),
        (50.0, 200.0),
        (200.0, 100.0),
        (200.0, 100.0),
        (200.0, 100.0),
    ]);
    let layout = layout(&items, viewport(300.0, 300.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 3);
    assert_eq!(layout.total_desired_width(), 600.0);
    assert_eq!(layout.spare_space(), -300.0);
    for column in layout.columns() {
        assert_eq!(column.desired_width(), 200.0);
        assert_eq!(column.calculated_width(), 100.0);
    }
    assert_eq!(layout.total_size().width, 300.0);
}

#[test]
fn negative_widths_are_clamped_to_zero() {
    let items = sizes(&[
        (50.0, 200.0),
        (50.0, 200.0),
        (10.0, 200.0),
        (290.0, 100.0),
        (290.0, 100.0),
        (10.0, 100.0),
    ]);
    let layout = layout(&items, viewport(300.0, 300.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 3);
    assert_eq!(layout.columns()[2].desired_width(), 10.0);
    assert_eq!(layout.columns()[2].calculated_width(), 0.0);
    for placement in layout.placements() {
        assert!(placement.rect.width >= 0.0);
    }
}

#[test]
fn first_fit_prefers_earliest_column_with_room() {
    let items = sizes(&[(100.0, 100.0), (100.0, 250.0), (100.0, 40.0)]);
    let layout = layout(&items, viewport(1000.0, 300.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 2);
    assert_eq!(layout.column_of(2), Some(0));
}

#[test]
fn best_fit_prefers_tightest_column() {
    let items = sizes(&[(100.0, 100.0), (100.0, 250.0), (100.0, 40.0)]);
    let spec = ColumnBalanceSpec::new().fit(ColumnFit::BestFit);
    let layout = layout(&items, viewport(1000.0, 300.0), spec);

    assert_eq!(layout.column_count(), 2);
    assert_eq!(layout.column_of(2), Some(1));
}

#[test]
fn best_fit_ties_go_to_earliest_column() {
    // Columns 1 and 2 tie on remaining height; column 0 has more room.
    let items = sizes(&[
        (100.0, 100.0),
        (100.0, 250.0),
        (100.0, 250.0),
        (100.0, 40.0),
    ]);
    let spec = ColumnBalanceSpec::new().fit(ColumnFit::BestFit);
    let layout = layout(&items, viewport(1000.0, 300.0), spec);

    assert_eq!(layout.column_count(), 3);
    assert_eq!(layout.column_of(3), Some(1));
    assert_eq!(layout.columns()[1].desired_height(), 290.0);
    assert_eq!(layout.columns()[2].desired_height(), 250.0);
}

#[test]
fn overflow_goes_to_shortest_column_with_earliest_tie_break() {
    let items = sizes(&[(90.0, 100.0), (90.0, 100.0), (90.0, 50.0), (90.0, 50.0)]);
    let layout = layout(&items, viewport(200.0, 100.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 2);
    assert_eq!(indices(&layout.columns()[0]), vec![0, 2]);
    assert_eq!(indices(&layout.columns()[1]), vec![1, 3]);
    assert!(layout.columns().iter().all(Column::is_overflowed));
    assert_eq!(layout.total_size().height, 150.0);
}

#[test]
fn new_column_requires_strictly_less_than_viewport_width() {
    // 100 + 100 == 200 is not strictly less, so the second item overflows.
    let items = sizes(&[(100.0, 100.0), (100.0, 100.0)]);
    let layout = layout(&items, viewport(200.0, 100.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 1);
    assert!(layout.columns()[0].is_overflowed());
}

#[test]
fn uniform_slack_ignores_column_widths() {
    let items = sizes(&[(100.0, 100.0), (50.0, 100.0)]);
    let layout = layout(&items, viewport(400.0, 100.0), ColumnBalanceSpec::default());

    assert_eq!(layout.columns()[0].calculated_width(), 225.0);
    assert_eq!(layout.columns()[1].calculated_width(), 175.0);
    assert_eq!(layout.total_size().width, 400.0);
}

#[test]
fn proportional_slack_keeps_width_ratios() {
    let items = sizes(&[(100.0, 100.0), (50.0, 100.0)]);
    let spec = ColumnBalanceSpec::new().slack(SlackDistribution::Proportional);
    let layout = layout(&items, viewport(400.0, 100.0), spec);

    let first = layout.columns()[0].calculated_width();
    let second = layout.columns()[1].calculated_width();
    assert!((first - 800.0 / 3.0).abs() < 1e-3);
    assert!((second - 400.0 / 3.0).abs() < 1e-3);
    assert!((first / second - 2.0).abs() < 1e-4);
}

#[test]
fn proportional_slack_with_zero_width_columns_falls_back_to_uniform() {
    let items = sizes(&[(0.0, 100.0), (0.0, 100.0)]);
    let spec = ColumnBalanceSpec::new().slack(SlackDistribution::Proportional);
    let layout = layout(&items, viewport(100.0, 100.0), spec);

    assert_eq!(layout.column_count(), 2);
    assert_eq!(layout.columns()[0].calculated_width(), 50.0);
    assert_eq!(layout.columns()[1].calculated_width(), 50.0);
}

#[test]
fn unbounded_height_keeps_everything_in_one_column() {
    let items = sizes(&[(80.0, 1000.0), (80.0, 1000.0)]);
    let layout = layout(
        &items,
        viewport(100.0, f32::INFINITY),
        ColumnBalanceSpec::default(),
    );

    assert_eq!(layout.column_count(), 1);
    assert!(!layout.columns()[0].is_overflowed());
    assert_eq!(layout.total_size(), Size::new(100.0, 2000.0));
}

#[test]
fn unbounded_width_distributes_no_slack() {
    let items = sizes(&[(50.0, 100.0), (60.0, 100.0)]);
    let layout = layout(
        &items,
        viewport(f32::INFINITY, 100.0),
        ColumnBalanceSpec::default(),
    );

    assert_eq!(layout.column_count(), 2);
    assert_eq!(layout.columns()[0].calculated_width(), 50.0);
    assert_eq!(layout.columns()[1].calculated_width(), 60.0);
    assert_eq!(layout.total_size().width, 110.0);
}

#[test]
fn placements_stretch_width_and_keep_height() {
    let items = sizes(&[(40.0, 60.0), (30.0, 80.0), (20.0, 50.0)]);
    let layout = layout(&items, viewport(200.0, 120.0), ColumnBalanceSpec::default());

    assert_eq!(layout.column_count(), 2);
    let placements = layout.placements();
    let first_width = layout.columns()[0].calculated_width();

    assert_eq!(placements[0].rect, Rect::new(0.0, 0.0, first_width, 60.0));
    assert_eq!(placements[1].rect.y, 60.0);
    assert_eq!(placements[1].rect.height, 50.0);
    assert_eq!(placements[1].index, 2);
    assert_eq!(placements[2].index, 1);
    assert_eq!(placements[2].column, 1);
    assert_eq!(placements[2].rect.x, first_width);
    assert_eq!(placements[2].rect.y, 0.0);
    assert_eq!(
        placements[2].rect.width,
        layout.columns()[1].calculated_width()
    );
}

#[test]
fn repeated_passes_are_identical() {
    let items = sizes(&[
        (120.0, 90.0),
        (80.0, 200.0),
        (60.0, 150.0),
        (200.0, 40.0),
        (90.0, 260.0),
    ]);
    let viewport = viewport(360.0, 300.0);
    let first = layout(&items, viewport, ColumnBalanceSpec::default());
    let second = layout(&items, viewport, ColumnBalanceSpec::default());

    assert_eq!(first, second);
    assert_eq!(first.placements(), second.placements());
}

#[test]
fn later_batches_continue_the_index_sequence() {
    let mut engine = LayoutEngine::new(viewport(360.0, 300.0), ColumnBalanceSpec::default());
    engine.assign_items(&sizes(&[(50.0, 100.0)])).unwrap();
    engine.assign_items(&sizes(&[(50.0, 100.0)])).unwrap();

    let layout = engine.calculate_column_sizes();
    assert_eq!(indices(&layout.columns()[0]), vec![0, 1]);
}

#[test]
fn invalid_item_rejects_whole_batch() {
    let mut engine = LayoutEngine::new(viewport(360.0, 300.0), ColumnBalanceSpec::default());
    let result = engine.assign_items(&sizes(&[(50.0, 100.0), (-1.0, 10.0)]));

    assert!(matches!(
        result,
        Err(LayoutError::InvalidItemSize { index: 1, .. })
    ));
    assert!(engine.columns().is_empty());
}

#[test]
fn nan_and_infinite_item_sizes_are_rejected() {
    let mut engine = LayoutEngine::new(viewport(360.0, 300.0), ColumnBalanceSpec::default());
    assert!(engine
        .assign_items(&sizes(&[(f32::NAN, 10.0)]))
        .is_err());
    assert!(engine
        .assign_items(&sizes(&[(10.0, f32::INFINITY)]))
        .is_err());
}
