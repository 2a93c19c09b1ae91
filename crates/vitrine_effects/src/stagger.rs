//! Entrance stagger for item sequences
//!
//! Assigns each item of an ordered sequence an entrance delay of
//! `index * step_ms`, so the items animate in one after another. Applied
//! once; re-applying is a no-op.

use vitrine_core::{ElementId, Scene};

use crate::config::PresenterConfig;

/// One-shot stagger over an ordered item sequence
pub struct Stagger {
    items: Vec<ElementId>,
    step_ms: u32,
    applied: bool,
}

impl Stagger {
    pub fn new(items: Vec<ElementId>, config: &PresenterConfig) -> Self {
        Self {
            items,
            step_ms: config.stagger_step_ms,
            applied: false,
        }
    }

    /// Assign the delays; subsequent calls do nothing
    pub fn apply(&mut self, scene: &mut Scene) {
        if self.applied {
            return;
        }
        for (index, &id) in self.items.iter().enumerate() {
            scene.set_delay(id, index as u32 * self.step_ms);
        }
        self.applied = true;
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::Element;

    #[test]
    fn test_delays_grow_by_step() {
        let mut scene = Scene::new();
        let items: Vec<_> = (0..4).map(|_| scene.insert(Element::default())).collect();

        let mut stagger = Stagger::new(items.clone(), &PresenterConfig::default());
        stagger.apply(&mut scene);

        for (index, &id) in items.iter().enumerate() {
            assert_eq!(scene.get(id).unwrap().delay_ms, index as u32 * 200);
        }
    }

    #[test]
    fn test_apply_is_one_shot() {
        let mut scene = Scene::new();
        let item = scene.insert(Element::default());
        let mut stagger = Stagger::new(vec![item], &PresenterConfig::default());

        stagger.apply(&mut scene);
        assert!(stagger.is_applied());

        // Host changed the delay; a second apply must not clobber it
        scene.set_delay(item, 999);
        stagger.apply(&mut scene);
        assert_eq!(scene.get(item).unwrap().delay_ms, 999);
    }
}
