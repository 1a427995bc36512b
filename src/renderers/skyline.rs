//! Obstruction contour used to keep a chord symbol clear of staff content.

use serde::{Deserialize, Serialize};

use super::display_list::Rect;

/// Boxes already placed on the staff, in the same coordinates as the
/// element being checked.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Skyline {
    pub boxes: Vec<Rect>,
}

impl Skyline {
    pub fn new(boxes: Vec<Rect>) -> Self {
        Self { boxes }
    }

    pub fn add(&mut self, r: Rect) {
        self.boxes.push(r);
    }

    /// Overlap of `r` with the highest box below it that shares its
    /// horizontal extent: positive when they intersect, negative for the
    /// free gap. `None` when nothing lies underneath. A box counts as below
    /// when its vertical centre is not above the centre of `r`.
    pub fn min_distance_below(&self, r: &Rect) -> Option<f64> {
        self.boxes
            .iter()
            .filter(|b| b.overlaps_horizontally(r) && b.center_y() >= r.center_y())
            .map(|b| r.bottom() - b.y)
            .reduce(f64::max)
    }

    /// Overlap of `r` with the lowest box above it, same sign convention as
    /// [`Skyline::min_distance_below`].
    pub fn min_distance_above(&self, r: &Rect) -> Option<f64> {
        self.boxes
            .iter()
            .filter(|b| b.overlaps_horizontally(r) && b.center_y() <= r.center_y())
            .map(|b| b.bottom() - r.y)
            .reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_below_reports_gap_and_overlap() {
        let sky = Skyline::new(vec![Rect::new(0.0, 10.0, 20.0, 5.0), Rect::new(50.0, 0.0, 5.0, 5.0)]);
        assert_eq!(sky.min_distance_below(&Rect::new(5.0, 0.0, 5.0, 6.0)), Some(-4.0));
        assert_eq!(sky.min_distance_below(&Rect::new(5.0, 0.0, 5.0, 12.0)), Some(2.0));
        assert_eq!(sky.min_distance_below(&Rect::new(30.0, 0.0, 5.0, 12.0)), None);
    }

    #[test]
    fn test_distance_above_uses_lowest_box() {
        let mut sky = Skyline::default();
        sky.add(Rect::new(0.0, 0.0, 10.0, 4.0));
        sky.add(Rect::new(0.0, 0.0, 10.0, 8.0));
        assert_eq!(sky.min_distance_above(&Rect::new(2.0, 10.0, 2.0, 2.0)), Some(-2.0));
    }

    #[test]
    fn test_boxes_on_the_near_side_are_ignored() {
        // symbol at y 40..48 between a box above (0..10) and one below (100..110)
        let sky = Skyline::new(vec![Rect::new(0.0, 0.0, 100.0, 10.0), Rect::new(0.0, 100.0, 100.0, 10.0)]);
        let r = Rect::new(10.0, 40.0, 20.0, 8.0);
        assert_eq!(sky.min_distance_below(&r), Some(-52.0));
        assert_eq!(sky.min_distance_above(&r), Some(-30.0));
    }
}
