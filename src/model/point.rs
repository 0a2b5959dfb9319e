//! Image-space point types and the ordered annotation store.

/// A coordinate in image pixel space.
///
/// Carries sub-pixel precision; rounding is a display and export
/// concern, not the model's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

impl ImagePoint {
    /// Create a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A captured point with its user-supplied name.
///
/// Immutable once stored; the name may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PointAnnotation {
    /// X coordinate in image pixels.
    pub x: f64,
    /// Y coordinate in image pixels.
    pub y: f64,
    /// Optional label; empty string when the user declined to name it.
    pub name: String,
}

/// Ordered collection of captured points.
///
/// Insertion order is significant — it is the export order. Duplicate
/// coordinates and duplicate (or empty) names are allowed by design;
/// no deduplication happens here.
#[derive(Debug, Clone, Default)]
pub struct PointAnnotationStore {
    points: Vec<PointAnnotation>,
}

impl PointAnnotationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point with its name.
    pub fn add_point(&mut self, point: ImagePoint, name: impl Into<String>) {
        self.points.push(PointAnnotation {
            x: point.x,
            y: point.y,
            name: name.into(),
        });
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PointAnnotation> {
        self.points.iter()
    }

    /// The stored points as a slice, in insertion order.
    pub fn points(&self) -> &[PointAnnotation] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_preserves_insertion_order() {
        let mut store = PointAnnotationStore::new();
        store.add_point(ImagePoint::new(3.0, 4.0), "b");
        store.add_point(ImagePoint::new(1.0, 2.0), "a");

        let names: Vec<_> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_store_allows_duplicates_and_empty_names() {
        let mut store = PointAnnotationStore::new();
        store.add_point(ImagePoint::new(5.0, 5.0), "");
        store.add_point(ImagePoint::new(5.0, 5.0), "");

        assert_eq!(store.len(), 2);
        assert_eq!(store.points()[0], store.points()[1]);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = PointAnnotationStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
