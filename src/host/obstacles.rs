use crate::core::Rect;

/// Source of the page regions the widget bounces off.
///
/// Queried on every simulation frame so moving or resized regions are seen.
pub trait ObstacleProvider {
    fn obstacles(&self) -> &[Rect];
}

/// Obstacles pushed in by the page script
#[derive(Clone, Debug, Default)]
pub struct ObstacleList {
    rects: Vec<Rect>,
}

impl ObstacleList {
    /// Replace the list from a flat `[left, top, right, bottom, ...]` buffer
    pub fn set_flat(&mut self, values: &[f64]) {
        self.rects = Rect::from_flat(values);
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl ObstacleProvider for ObstacleList {
    fn obstacles(&self) -> &[Rect] {
        &self.rects
    }
}

impl ObstacleProvider for Vec<Rect> {
    fn obstacles(&self) -> &[Rect] {
        self
    }
}

/// No obstacles at all
impl ObstacleProvider for () {
    fn obstacles(&self) -> &[Rect] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_buffer_replaces_the_list() {
        let mut list = ObstacleList::default();
        assert!(list.is_empty());

        list.set_flat(&[0.0, 0.0, 10.0, 10.0, 20.0, 20.0, 30.0, 30.0]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.obstacles()[1], Rect::new(20.0, 20.0, 30.0, 30.0));

        list.set_flat(&[1.0, 2.0, 3.0]);
        assert!(list.is_empty());
    }
}
