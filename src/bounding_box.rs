//! Axis aligned bounding boxes

use num::Float;

use crate::vector::Vector;

/// Axis aligned box spanned by its two extreme corners.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<K: Float = f64> {
    /// Corner with the smallest coordinates
    pub min: Vector<K>,
    /// Corner with the largest coordinates
    pub max: Vector<K>,
}

impl<K: Float> BoundingBox<K> {
    /// Computes the smallest box containing all `points`.
    ///
    /// Returns `None` for an empty iterator.
    /// All points are expected to share one dimension.
    pub fn from_iter<'a, I>(mut points: I) -> Option<BoundingBox<K>>
    where
        I: Iterator<Item = &'a Vector<K>>,
        K: 'a,
    {
        let first = points.next()?;
        let mut min: Vec<K> = first.to_vec();
        let mut max: Vec<K> = first.to_vec();
        for p in points {
            for (i, &x) in p.iter().enumerate().take(min.len()) {
                min[i] = min[i].min(x);
                max[i] = max[i].max(x);
            }
        }
        Some(BoundingBox {
            min: Vector::new(min),
            max: Vector::new(max),
        })
    }

    /// Grows the box by `margin` in every direction.
    pub fn inflate(&self, margin: K) -> BoundingBox<K> {
        BoundingBox {
            min: Vector::new(self.min.iter().map(|&x| x - margin)),
            max: Vector::new(self.max.iter().map(|&x| x + margin)),
        }
    }

    /// Checks whether `point` lies inside the box or on its border.
    pub fn contains(&self, point: &Vector<K>) -> bool {
        &self.min <= point && point <= &self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let points = [
            Vector::xy(0.0, 1.0),
            Vector::xy(2.0, -1.0),
            Vector::xy(1.0, 3.0),
        ];
        let bb = BoundingBox::from_iter(points.iter()).unwrap();
        assert_eq!(bb.min, Vector::xy(0.0, -1.0));
        assert_eq!(bb.max, Vector::xy(2.0, 3.0));
        assert!(bb.contains(&Vector::xy(1.0, 0.0)));
        assert!(bb.contains(&Vector::xy(2.0, 3.0)));
        assert!(!bb.contains(&Vector::xy(2.5, 0.0)));
        assert!(bb.inflate(1.0).contains(&Vector::xy(2.5, 0.0)));
    }

    #[test]
    fn empty() {
        assert_eq!(BoundingBox::<f64>::from_iter(std::iter::empty()), None);
    }
}
