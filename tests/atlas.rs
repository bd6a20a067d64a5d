use playground::atlas::{AtlasLayout, RowOrder, UvRect, MAX_SIDE_COUNT};
use playground::Error;

const EPSILON: f32 = 1e-6;

const ROW_ORDERS: [RowOrder; 2] = [RowOrder::TopDown, RowOrder::BottomUp];

fn layout(side_count: u32, row_order: RowOrder) -> AtlasLayout {
    AtlasLayout::with_row_order(side_count, row_order).unwrap()
}

fn assert_rect(expected: [f32; 4], actual: UvRect) {
    let actual = actual.to_array();
    for (e, a) in expected.iter().zip(actual.iter()) {
        assert!((e - a).abs() < EPSILON, "expected {:?}, got {:?}", expected, actual);
    }
}

#[test]
fn center_maps_back_to_its_index() {
    for &row_order in &ROW_ORDERS {
        for side_count in 1 ..= 64 {
            let layout = layout(side_count, row_order);
            for (index, rect) in layout.regions() {
                let (u, v) = rect.center();
                assert_eq!(
                    index,
                    layout.index_for_point(u, v).unwrap(),
                    "side_count {} {:?}",
                    side_count,
                    row_order,
                );
            }
        }
    }
}

#[test]
fn regions_have_uniform_size() {
    for &row_order in &ROW_ORDERS {
        for &side_count in &[1, 2, 3, 4, 7, 10, 16, 100] {
            let layout = layout(side_count, row_order);
            let size = 1.0 / side_count as f32;
            for (_, rect) in layout.regions() {
                assert!((rect.width() - size).abs() < EPSILON);
                assert!((rect.height() - size).abs() < EPSILON);
                assert!(rect.u_min >= 0.0 && rect.u_max <= 1.0);
                assert!(rect.v_min >= 0.0 && rect.v_max <= 1.0);
            }
        }
    }
}

#[test]
fn neighbours_in_a_row_differ_only_in_u() {
    for &row_order in &ROW_ORDERS {
        let layout = layout(5, row_order);
        let size = layout.region_size();
        for index in 0 .. layout.region_count() - 1 {
            if (index + 1) % layout.side_count() == 0 {
                continue;
            }
            let a = layout.rect_for_index(index).unwrap();
            let b = layout.rect_for_index(index + 1).unwrap();
            assert!((b.u_min - a.u_min - size).abs() < EPSILON);
            assert!((b.u_max - a.u_max - size).abs() < EPSILON);
            assert_eq!(a.v_min, b.v_min);
            assert_eq!(a.v_max, b.v_max);
        }
    }
}

#[test]
fn top_down_four_by_four() {
    let layout = AtlasLayout::new(4).unwrap();
    assert_rect([0.0, 0.75, 0.25, 1.0], layout.rect_for_index(0).unwrap());
    assert_rect([0.5, 0.5, 0.75, 0.75], layout.rect_for_index(6).unwrap());
    assert_rect([0.75, 0.0, 1.0, 0.25], layout.rect_for_index(15).unwrap());
}

#[test]
fn bottom_up_four_by_four() {
    let layout = layout(4, RowOrder::BottomUp);
    assert_rect([0.0, 0.0, 0.25, 0.25], layout.rect_for_index(0).unwrap());
    assert_rect([0.75, 0.75, 1.0, 1.0], layout.rect_for_index(15).unwrap());
}

#[test]
fn single_region_covers_the_atlas() {
    for &row_order in &ROW_ORDERS {
        let layout = layout(1, row_order);
        assert_rect([0.0, 0.0, 1.0, 1.0], layout.rect_for_index(0).unwrap());
        assert_eq!(0, layout.index_for_point(1.0, 1.0).unwrap());
    }
}

#[test]
fn one_past_the_end_is_out_of_range() {
    for &side_count in &[1, 4, 9] {
        let layout = AtlasLayout::new(side_count).unwrap();
        let count = side_count * side_count;
        match layout.rect_for_index(count) {
            Err(Error::OutOfRange { index, count: c }) => {
                assert_eq!(count, index);
                assert_eq!(count, c);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(layout.rect_for_index(count - 1).is_ok());
    }
}

#[test]
fn invalid_side_counts_are_rejected() {
    for &side_count in &[0, MAX_SIDE_COUNT + 1, u32::max_value()] {
        match AtlasLayout::new(side_count) {
            Err(Error::InvalidLayout { side_count: s }) => assert_eq!(side_count, s),
            other => panic!("unexpected {:?}", other),
        }
    }
    let largest = AtlasLayout::new(MAX_SIDE_COUNT).unwrap();
    assert!(largest.rect_for_index(largest.region_count() - 1).is_ok());
}

#[test]
fn shared_edges_resolve_to_the_higher_cell() {
    let layout = layout(4, RowOrder::BottomUp);
    assert_eq!(1, layout.index_for_point(0.25, 0.0).unwrap());
    assert_eq!(4, layout.index_for_point(0.0, 0.25).unwrap());
    assert_eq!(15, layout.index_for_point(1.0, 1.0).unwrap());
}
