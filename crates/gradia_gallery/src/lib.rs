//! Gradia Gallery Sequencer
//!
//! Orders a batch of saved gradients so that visually similar ones sit
//! next to each other in the grid. Each gradient is summarized by a
//! single Lab-space "dominant color"; the ordering is a greedy
//! nearest-neighbor chain under deltaE76 — O(n^2) and not globally
//! optimal, chosen for predictability and bounded cost on the gallery
//! sizes the loader fetches.
//!
//! Items are assumed structurally valid: the loading collaborator
//! filters malformed stored records before they get here.

use gradia_color::Lab;
use gradia_paint::Gradient;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A saved gradient with the prompt that produced it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub gradient: Gradient,
    /// The user query shown as the item's caption
    #[serde(default)]
    pub label: String,
}

impl GalleryItem {
    pub fn new(gradient: Gradient, label: impl Into<String>) -> Self {
        Self {
            gradient,
            label: label.into(),
        }
    }
}

/// Positions sampled to summarize a linear gradient
const LINEAR_SAMPLES: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Summarize a gradient as one Lab color.
///
/// Linear gradients are sampled at five evenly spaced positions; radial
/// gradients average their center, outer, and mid colors directly, with
/// no positional weighting. The result is the componentwise mean.
pub fn dominant_color(gradient: &Gradient) -> Lab {
    let labs: Vec<Lab> = match gradient {
        Gradient::Linear(g) => LINEAR_SAMPLES
            .iter()
            .map(|&t| g.sample(t).to_lab())
            .collect(),
        Gradient::Radial(_) => gradient.colors().iter().map(|c| c.to_lab()).collect(),
    };
    let n = labs.len() as f64;
    labs.iter().fold(Lab::default(), |acc, lab| Lab {
        l: acc.l + lab.l / n,
        a: acc.a + lab.a / n,
        b: acc.b + lab.b / n,
    })
}

/// Order items as a greedy nearest-neighbor tour.
///
/// The first item seeds the sequence; each step appends the unplaced
/// item closest (deltaE76 of dominant colors) to the most recently
/// placed one. Ties go to the lowest original index: the scan is
/// index-ascending and the comparison strict.
pub fn order_by_similarity(items: Vec<GalleryItem>) -> Vec<GalleryItem> {
    if items.len() <= 1 {
        return items;
    }

    let labs: Vec<Lab> = items.iter().map(|it| dominant_color(&it.gradient)).collect();
    debug!(count = items.len(), "ordering gallery by similarity");

    let mut placed = vec![false; items.len()];
    let mut order = Vec::with_capacity(items.len());
    order.push(0);
    placed[0] = true;

    let mut last = 0;
    while order.len() < items.len() {
        let mut best: Option<usize> = None;
        let mut best_distance = f64::INFINITY;
        for (i, done) in placed.iter().enumerate() {
            if *done {
                continue;
            }
            let d = labs[last].delta_e76(&labs[i]);
            if d < best_distance {
                best_distance = d;
                best = Some(i);
            }
        }
        let Some(next) = best else { break };
        placed[next] = true;
        order.push(next);
        last = next;
    }

    let mut slots: Vec<Option<GalleryItem>> = items.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradia_color::Rgb;
    use gradia_paint::{LinearGradient, RadialGradient, Stop};

    fn solid(hex: &str) -> GalleryItem {
        let c = Rgb::from_hex(hex).unwrap();
        GalleryItem::new(
            Gradient::Linear(LinearGradient::from_colors(&[c, c]).unwrap()),
            hex.to_string(),
        )
    }

    #[test]
    fn empty_and_singleton_pass_through() {
        assert_eq!(order_by_similarity(Vec::new()), Vec::new());
        let one = vec![solid("#ff0000")];
        assert_eq!(order_by_similarity(one.clone()), one);
    }

    #[test]
    fn closer_item_is_placed_first() {
        // B (dark navy) is visually closer to A (near-black blue) than C
        // (bright orange) is
        let a = solid("#000518");
        let b = solid("#0a1128");
        let c = solid("#ff6b35");
        let ordered = order_by_similarity(vec![a.clone(), c.clone(), b.clone()]);
        assert_eq!(ordered, vec![a, b, c]);
    }

    #[test]
    fn ties_resolve_to_the_lowest_original_index() {
        let labeled = |hex: &str, label: &str| {
            let mut item = solid(hex);
            item.label = label.to_string();
            item
        };
        let a = labeled("#204060", "seed");
        let twin_lo = labeled("#406080", "lower index");
        let twin_hi = labeled("#406080", "higher index");
        let ordered = order_by_similarity(vec![a, twin_lo, twin_hi]);
        // Equidistant twins: storage order decides
        assert_eq!(ordered[1].label, "lower index");
        assert_eq!(ordered[2].label, "higher index");
    }

    #[test]
    fn dominant_color_of_a_solid_gradient_is_that_color() {
        let lab = dominant_color(&Gradient::Linear(
            LinearGradient::from_colors(&[Rgb::RED, Rgb::RED]).unwrap(),
        ));
        assert!(lab.delta_e76(&Rgb::RED.to_lab()) < 1e-9);
    }

    #[test]
    fn dominant_color_averages_radial_colors_unweighted() {
        let mut radial = RadialGradient::simple(Rgb::BLACK, Rgb::WHITE);
        radial.mid_colors = vec![Stop::new(10, Rgb::GRAY)];
        let lab = dominant_color(&Gradient::Radial(radial));

        let mean_l =
            (Rgb::BLACK.to_lab().l + Rgb::GRAY.to_lab().l + Rgb::WHITE.to_lab().l) / 3.0;
        assert!((lab.l - mean_l).abs() < 1e-9);
    }

    #[test]
    fn items_load_from_stored_json() {
        let json = r##"[
            {"gradient":{"kind":"linear","stops":[
                {"position":0,"color":"#0a1128"},{"position":100,"color":"#1e3a8a"}]},
             "label":"night sky"},
            {"gradient":{"kind":"radial","centerColor":"#fff5d7","outerColor":"#1a1a40"}}
        ]"##;
        let items: Vec<GalleryItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "night sky");
        assert_eq!(items[1].gradient.kind(), "radial");
    }
}
