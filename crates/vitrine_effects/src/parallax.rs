//! Parallax translation for decorative layers
//!
//! Each watched layer drifts with scroll at its own speed: layer `i`
//! translates by `scroll_y * (i + 1) * base_speed`, so later layers move
//! faster and the set separates visually as the page scrolls.

use vitrine_core::{ElementId, Scene, Vec2, Viewport};

use crate::config::PresenterConfig;

/// Scroll-driven parallax over an ordered set of layers
pub struct Parallax {
    layers: Vec<ElementId>,
    base_speed: f32,
}

impl Parallax {
    pub fn new(layers: Vec<ElementId>, config: &PresenterConfig) -> Self {
        Self {
            layers,
            base_speed: config.parallax_base_speed,
        }
    }

    /// Retranslate every layer for the current scroll offset
    pub fn apply(&self, scene: &mut Scene, viewport: &Viewport) {
        for (index, &id) in self.layers.iter().enumerate() {
            let speed = (index + 1) as f32 * self.base_speed;
            scene.set_translation(id, Vec2::new(0.0, viewport.scroll_y * speed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{Element, Rect};

    #[test]
    fn test_layers_move_at_increasing_speeds() {
        let mut scene = Scene::new();
        let layers: Vec<_> = (0..3)
            .map(|_| scene.insert(Element::new(Rect::new(0.0, 0.0, 50.0, 50.0))))
            .collect();
        let mut viewport = Viewport::new(600.0, 3000.0);
        viewport.scroll_y = 100.0;

        let parallax = Parallax::new(layers.clone(), &PresenterConfig::default());
        parallax.apply(&mut scene, &viewport);

        assert_eq!(scene.translation(layers[0]), Some(Vec2::new(0.0, 30.0)));
        assert_eq!(scene.translation(layers[1]), Some(Vec2::new(0.0, 60.0)));
        assert_eq!(scene.translation(layers[2]), Some(Vec2::new(0.0, 90.0)));
    }

    #[test]
    fn test_zero_scroll_resets_translation() {
        let mut scene = Scene::new();
        let layer = scene.insert(Element::new(Rect::new(0.0, 0.0, 50.0, 50.0)));
        let mut viewport = Viewport::new(600.0, 3000.0);
        let parallax = Parallax::new(vec![layer], &PresenterConfig::default());

        viewport.scroll_y = 500.0;
        parallax.apply(&mut scene, &viewport);
        assert_ne!(scene.translation(layer), Some(Vec2::ZERO));

        viewport.scroll_y = 0.0;
        parallax.apply(&mut scene, &viewport);
        assert_eq!(scene.translation(layer), Some(Vec2::ZERO));
    }
}
