//! Property-Based Tests for Filter Partitioning
//!
//! Verifies the stage selector across arbitrary filter sets and
//! interpolator states.

use std::sync::Arc;

use openstylus_filters::prelude::*;
use openstylus_geometry::Point;
use proptest::prelude::*;

#[derive(Debug)]
struct Numbered {
    stage: FilterStage,
    index: f64,
}

impl PositionFilter for Numbered {
    fn stage(&self) -> FilterStage {
        self.stage
    }
    fn apply(&self, _p: Point) -> Point {
        Point::new(self.index, 0.0)
    }
}

fn stage_strategy() -> impl Strategy<Value = FilterStage> {
    prop_oneof![
        Just(FilterStage::PreInterpolate),
        Just(FilterStage::PreTranspose),
        Just(FilterStage::PostTranspose),
    ]
}

fn filter_set(stages: &[FilterStage]) -> Vec<FilterHandle> {
    stages
        .iter()
        .enumerate()
        .map(|(i, &stage)| {
            Arc::new(Numbered {
                stage,
                index: i as f64,
            }) as FilterHandle
        })
        .collect()
}

fn indices(list: &[FilterHandle]) -> Vec<f64> {
    list.iter().map(|f| f.apply(Point::ZERO).x).collect()
}

proptest! {
    #[test]
    fn partition_loses_nothing_when_interpolator_idle(
        stages in prop::collection::vec(stage_strategy(), 0..16)
    ) {
        let filters = filter_set(&stages);
        let (pre, post) = partition_filters(&filters, false);
        prop_assert_eq!(pre.len() + post.len(), filters.len());
    }

    #[test]
    fn partition_drops_only_pre_interpolate_when_active(
        stages in prop::collection::vec(stage_strategy(), 0..16)
    ) {
        let filters = filter_set(&stages);
        let dropped = stages
            .iter()
            .filter(|s| **s == FilterStage::PreInterpolate)
            .count();

        let (pre, post) = partition_filters(&filters, true);
        prop_assert_eq!(pre.len() + post.len() + dropped, filters.len());
        prop_assert!(pre.iter().all(|f| f.stage() == FilterStage::PreTranspose));
    }

    #[test]
    fn partition_preserves_relative_order(
        stages in prop::collection::vec(stage_strategy(), 0..16),
        interpolator_active in any::<bool>(),
    ) {
        let filters = filter_set(&stages);
        let (pre, post) = partition_filters(&filters, interpolator_active);

        for list in [indices(&pre), indices(&post)] {
            prop_assert!(list.windows(2).all(|w| w[0] < w[1]), "out of order: {list:?}");
        }
    }

    #[test]
    fn post_list_is_independent_of_interpolator(
        stages in prop::collection::vec(stage_strategy(), 0..16)
    ) {
        let filters = filter_set(&stages);
        let (_, post_idle) = partition_filters(&filters, false);
        let (_, post_active) = partition_filters(&filters, true);
        prop_assert_eq!(indices(&post_idle), indices(&post_active));
    }
}
