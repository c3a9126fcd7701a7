//! Cluster quality scoring
//!
//! Ranks converged clusters by a blend of coverage, uniqueness, chroma, and
//! lightness balance. The sub-scores are kept on each ranked color because
//! role assignment reuses coverage and uniqueness in its own scoring.

use crate::color::Color;
use crate::config::{
    RANKED_KEEP, SCORE_W_CHROMA, SCORE_W_COVERAGE, SCORE_W_LIGHTNESS, SCORE_W_UNIQUENESS,
};
use crate::color_ops::distance::delta_e_lab;
use crate::kmeans::Cluster;

/// A cluster promoted to a ranked palette candidate
#[derive(Debug, Clone, Copy)]
pub struct RankedColor {
    pub color: Color,
    /// Raw pixel weight of the originating cluster
    pub weight: f64,
    pub coverage: f64,
    pub uniqueness: f64,
    pub chroma: f64,
    pub lightness_balance: f64,
    /// Combined quality score
    pub score: f64,
}

/// Score and rank clusters, keeping the best [`RANKED_KEEP`]
#[must_use]
pub fn rank(clusters: &[Cluster]) -> Vec<RankedColor> {
    let total_weight: f64 = clusters.iter().map(|c| c.weight).sum();
    let mut ranked: Vec<RankedColor> = clusters
        .iter()
        .enumerate()
        .map(|(index, cluster)| score_cluster(index, cluster, clusters, total_weight))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.weight.total_cmp(&a.weight))
    });
    ranked.truncate(RANKED_KEEP);
    ranked
}

fn score_cluster(
    index: usize,
    cluster: &Cluster,
    all: &[Cluster],
    total_weight: f64,
) -> RankedColor {
    let coverage = if total_weight > 0.0 {
        (1.0 + cluster.weight).ln() / (1.0 + total_weight).ln()
    } else {
        0.0
    };

    let nearest = all
        .iter()
        .enumerate()
        .filter(|(other, _)| *other != index)
        .map(|(_, other)| delta_e_lab(cluster.centroid, other.centroid))
        .fold(f32::INFINITY, f32::min);
    let uniqueness = if nearest.is_finite() {
        (f64::from(nearest) / 50.0).clamp(0.0, 1.0)
    } else {
        // sole cluster: maximally unique
        1.0
    };

    let lab = cluster.centroid;
    let chroma_raw = f64::from(lab.a).hypot(f64::from(lab.b));
    let chroma = (chroma_raw / 140.0).clamp(0.0, 1.0);

    let lightness_balance = (1.0 - (f64::from(lab.l) - 50.0).abs() / 50.0).clamp(0.0, 1.0);

    let score = SCORE_W_COVERAGE * coverage
        + SCORE_W_UNIQUENESS * uniqueness
        + SCORE_W_CHROMA * chroma
        + SCORE_W_LIGHTNESS * lightness_balance;

    RankedColor {
        color: Color::from_lab_value(lab),
        weight: cluster.weight,
        coverage,
        uniqueness,
        chroma,
        lightness_balance,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Lab;

    fn cluster(l: f32, a: f32, b: f32, weight: f64) -> Cluster {
        Cluster {
            centroid: Lab::new(l, a, b),
            weight,
        }
    }

    #[test]
    fn dominant_midtone_chromatic_cluster_ranks_first() {
        let clusters = vec![
            cluster(50.0, 40.0, 20.0, 500.0),
            cluster(95.0, 0.0, 0.0, 10.0),
            cluster(5.0, 0.0, 0.0, 10.0),
        ];
        let ranked = rank(&clusters);
        assert_eq!(ranked.len(), 3);
        assert!((ranked[0].color.lab().l - 50.0).abs() < 1e-4);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn sub_scores_are_normalized() {
        let clusters = vec![
            cluster(50.0, 200.0, 200.0, 100.0),
            cluster(10.0, 0.0, 0.0, 1.0),
        ];
        for ranked in rank(&clusters) {
            assert!((0.0..=1.0).contains(&ranked.coverage));
            assert!((0.0..=1.0).contains(&ranked.uniqueness));
            assert!((0.0..=1.0).contains(&ranked.chroma));
            assert!((0.0..=1.0).contains(&ranked.lightness_balance));
        }
    }

    #[test]
    fn single_cluster_is_fully_unique() {
        let ranked = rank(&[cluster(60.0, 10.0, 10.0, 42.0)]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].uniqueness, 1.0);
        // sole cluster covers everything: log(1+w)/log(1+w) = 1
        assert!((ranked[0].coverage - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ranking_truncates_to_keep_limit() {
        let clusters: Vec<Cluster> = (0..20)
            .map(|i| cluster(5.0 * i as f32, i as f32, 0.0, 10.0 + f64::from(i)))
            .collect();
        assert_eq!(rank(&clusters).len(), RANKED_KEEP);
    }
}
