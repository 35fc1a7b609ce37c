//! Batched transforms for swarm-sized entity counts.
//!
//! Hundreds to low thousands of instances share one material; per-instance
//! state is just a transform written into a contiguous Pod buffer so a
//! renderer can upload the whole batch in one copy.

use engine_core::{InstanceTransform, Transform};

/// A fixed-capacity batch of instance transforms with a dirty flag.
#[derive(Debug)]
pub struct InstancedBatch {
    transforms: Vec<InstanceTransform>,
    dirty: bool,
}

impl InstancedBatch {
    /// Create a batch of `count` identity transforms.
    pub fn new(count: usize) -> Self {
        Self {
            transforms: vec![Transform::default().into(); count],
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Write one instance transform and mark the batch dirty.
    pub fn set(&mut self, index: usize, transform: &Transform) {
        self.transforms[index] = transform.into();
        self.dirty = true;
    }

    /// Raw instance data for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.transforms)
    }

    pub fn transforms(&self) -> &[InstanceTransform] {
        &self.transforms
    }

    /// Whether the batch changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn set_marks_dirty() {
        let mut batch = InstancedBatch::new(4);
        batch.clear_dirty();
        assert!(!batch.is_dirty());
        batch.set(2, &Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
        assert!(batch.is_dirty());
        assert_eq!(batch.transforms()[2].model[3][0], 1.0);
        assert_eq!(batch.transforms()[2].model[3][1], 2.0);
    }

    #[test]
    fn bytes_cover_all_instances() {
        let batch = InstancedBatch::new(10);
        assert_eq!(batch.as_bytes().len(), 10 * std::mem::size_of::<InstanceTransform>());
    }
}
