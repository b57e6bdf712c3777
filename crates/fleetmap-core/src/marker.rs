//! Marker appearance descriptors and their cache.
//!
//! Styles are pure functions of an entity's identity and the inputs that
//! affect its look (selection equality, and shipment count for shipping
//! markers). The cache hands out `Rc`-shared descriptors so repeated calls
//! for an unchanged key are referentially identical, and is cleared
//! wholesale on any selection change — recomputation is cheap and stale
//! visuals are not acceptable.

use std::collections::HashMap;
use std::rc::Rc;

use crate::record::{ShippingLocation, Terminal};

/// Discrete ten-bucket color scale over shipment count, red (highest)
/// down to blue. Thresholds and colors are part of the compatibility
/// contract and must not drift.
pub fn shipping_color(count: u32) -> &'static str {
    match count {
        c if c > 45 => "#F44336",
        c if c > 40 => "#FF5722",
        c if c > 35 => "#FF9800",
        c if c > 30 => "#FFC107",
        c if c > 25 => "#FFEB3B",
        c if c > 20 => "#CDDC39",
        c if c > 15 => "#8BC34A",
        c if c > 10 => "#4CAF50",
        c if c > 5 => "#00BCD4",
        _ => "#2196F3",
    }
}

/// Shipping marker radius: `clamp(8 + count/5, 8, 25)`.
pub fn shipping_size(count: u32) -> f64 {
    (8.0 + count as f64 / 5.0).clamp(8.0, 25.0)
}

/// What to draw for a marker, beyond its position.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerIcon {
    /// Fixed-color facility pin; selected terminals render larger with a
    /// highlight ring.
    Terminal { selected: bool },
    /// Count-scaled scatter circle.
    Shipping {
        fill: &'static str,
        stroke: &'static str,
        stroke_width: f64,
        opacity: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub icon: MarkerIcon,
    pub size: f64,
    pub z_index: i32,
}

pub fn terminal_style(selected: bool) -> MarkerStyle {
    MarkerStyle {
        icon: MarkerIcon::Terminal { selected },
        size: if selected { 32.0 } else { 24.0 },
        z_index: if selected { 1000 } else { 100 },
    }
}

pub fn shipping_style(count: u32, selected: bool) -> MarkerStyle {
    MarkerStyle {
        icon: MarkerIcon::Shipping {
            fill: shipping_color(count),
            stroke: if selected { "#FFEB3B" } else { "rgba(255,255,255,0.8)" },
            stroke_width: if selected { 3.0 } else { 1.5 },
            opacity: if selected { 1.0 } else { 0.8 },
        },
        size: shipping_size(count),
        z_index: if selected { 500 } else { 50 },
    }
}

/// Memoizes generated marker styles per entity. Owned by whichever
/// component renders markers; the store never reads it. `invalidate`
/// clears both entity kinds at once.
#[derive(Debug, Default)]
pub struct MarkerCache {
    terminals: HashMap<(String, bool), Rc<MarkerStyle>>,
    shipping: HashMap<(String, u32, bool), Rc<MarkerStyle>>,
}

impl MarkerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for a terminal marker. `selected` is the selection-equality
    /// input (is this terminal the active filter).
    pub fn terminal(&mut self, terminal: &Terminal, selected: bool) -> Rc<MarkerStyle> {
        self.terminals
            .entry((terminal.id.clone(), selected))
            .or_insert_with(|| Rc::new(terminal_style(selected)))
            .clone()
    }

    /// Style for a shipping marker; the count feeds both color and size,
    /// so it is part of the key.
    pub fn shipping(&mut self, location: &ShippingLocation, selected: bool) -> Rc<MarkerStyle> {
        self.shipping
            .entry((location.id.clone(), location.count, selected))
            .or_insert_with(|| Rc::new(shipping_style(location.count, selected)))
            .clone()
    }

    /// Drop every cached style for both entity kinds.
    pub fn invalidate(&mut self) {
        self.terminals.clear();
        self.shipping.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty() && self.shipping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Position;

    fn location(id: &str, count: u32) -> ShippingLocation {
        ShippingLocation {
            id: id.to_string(),
            name: String::new(),
            terminal_source: "22".to_string(),
            city: String::new(),
            state: String::new(),
            count,
            position: Position { lat: 0.0, lng: 0.0 },
        }
    }

    #[test]
    fn color_ladder_matches_the_fixed_scale() {
        assert_eq!(shipping_color(50), "#F44336");
        assert_eq!(shipping_color(46), "#F44336");
        assert_eq!(shipping_color(45), "#FF5722");
        assert_eq!(shipping_color(42), "#FF5722");
        assert_eq!(shipping_color(36), "#FF9800");
        // 30 is not >30, it falls into the >25 bucket
        assert_eq!(shipping_color(30), "#FFEB3B");
        assert_eq!(shipping_color(21), "#CDDC39");
        assert_eq!(shipping_color(11), "#4CAF50");
        assert_eq!(shipping_color(6), "#00BCD4");
        assert_eq!(shipping_color(5), "#2196F3");
        assert_eq!(shipping_color(0), "#2196F3");
    }

    #[test]
    fn shipping_size_is_clamped() {
        assert_eq!(shipping_size(0), 8.0);
        assert_eq!(shipping_size(10), 10.0);
        assert_eq!(shipping_size(85), 25.0);
        assert_eq!(shipping_size(1000), 25.0);
    }

    #[test]
    fn terminal_style_scales_and_reorders_when_selected() {
        let plain = terminal_style(false);
        assert_eq!(plain.size, 24.0);
        assert_eq!(plain.z_index, 100);
        let selected = terminal_style(true);
        assert_eq!(selected.size, 32.0);
        assert_eq!(selected.z_index, 1000);
        assert_eq!(selected.icon, MarkerIcon::Terminal { selected: true });
    }

    #[test]
    fn cached_styles_are_referentially_identical() {
        let mut cache = MarkerCache::new();
        let loc = location("1", 42);
        let a = cache.shipping(&loc, false);
        let b = cache.shipping(&loc, false);
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn selection_equality_is_part_of_the_key() {
        let mut cache = MarkerCache::new();
        let loc = location("1", 42);
        let unselected = cache.shipping(&loc, false);
        let selected = cache.shipping(&loc, true);
        assert!(!Rc::ptr_eq(&unselected, &selected));
        assert_ne!(*unselected, *selected);
    }

    #[test]
    fn invalidate_drops_both_kinds() {
        let mut cache = MarkerCache::new();
        let loc = location("1", 7);
        let term = crate::sample::terminals().remove(0);

        let before_loc = cache.shipping(&loc, false);
        let before_term = cache.terminal(&term, false);
        assert!(!cache.is_empty());

        cache.invalidate();
        assert!(cache.is_empty());

        // Same raw inputs after invalidation produce fresh descriptors
        let after_loc = cache.shipping(&loc, false);
        let after_term = cache.terminal(&term, false);
        assert!(!Rc::ptr_eq(&before_loc, &after_loc));
        assert!(!Rc::ptr_eq(&before_term, &after_term));
        assert_eq!(*before_loc, *after_loc);
        assert_eq!(*before_term, *after_term);
    }
}
