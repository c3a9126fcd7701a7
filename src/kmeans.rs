//! Weighted k-means clustering in LAB
//!
//! Standard k-means++ seeding over the sampler's weighted points, Lloyd
//! iterations with a convergence cap, then a ΔE merge pass so perceptually
//! identical clusters collapse. The RNG is seeded from the image dimensions:
//! identical image bytes always produce identical clusters.

use palette::Lab;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::color_ops::distance::delta_e_lab;
use crate::config::{CLUSTER_MERGE_DELTA_E, KMEANS_CONVERGENCE, KMEANS_K};
use crate::error::{LuminolError, Result};
use crate::sampler::{SampleSet, WeightedPoint};

/// A converged cluster: centroid plus accumulated pixel weight
#[derive(Debug, Clone, Copy)]
pub struct Cluster {
    pub centroid: Lab,
    pub weight: f64,
}

/// Cluster the sample set
///
/// `max_iterations` comes from the CLI quality level. The result typically
/// holds 5-8 clusters after merging.
///
/// # Errors
/// Fails only on an empty sample set (the sampler already rejects fully
/// transparent images).
pub fn cluster(samples: &SampleSet, max_iterations: usize) -> Result<Vec<Cluster>> {
    if samples.points.is_empty() {
        return Err(LuminolError::ImageError(
            "cannot cluster an empty sample set".into(),
        ));
    }

    let unique = unique_colors(&samples.points);
    if unique.len() < KMEANS_K {
        // fewer distinct colors than k: one cluster per unique color
        return Ok(unique);
    }

    let mut rng = SmallRng::seed_from_u64(samples.seed());
    let mut centroids = seed_centroids(&samples.points, KMEANS_K, &mut rng);

    for _ in 0..max_iterations {
        let updated = lloyd_step(&samples.points, &centroids);
        let max_shift = centroids
            .iter()
            .zip(&updated)
            .map(|(old, new)| delta_e_lab(*old, *new))
            .fold(0.0f32, f32::max);
        centroids = updated;
        if max_shift < KMEANS_CONVERGENCE {
            break;
        }
    }

    let clusters = accumulate(&samples.points, &centroids);
    Ok(merge_close(clusters))
}

/// Collapse exactly-equal LAB points; used for the low-color fallback
fn unique_colors(points: &[WeightedPoint]) -> Vec<Cluster> {
    let mut unique: Vec<Cluster> = Vec::new();
    for point in points {
        match unique
            .iter_mut()
            .find(|c| c.centroid == point.lab)
        {
            Some(cluster) => cluster.weight += f64::from(point.weight),
            None => {
                if unique.len() >= KMEANS_K {
                    // more uniques than k: the caller runs full k-means
                    return unique;
                }
                unique.push(Cluster {
                    centroid: point.lab,
                    weight: f64::from(point.weight),
                });
            }
        }
    }
    unique
}

/// k-means++ seeding: first centroid weight-sampled, the rest by weight x D²
fn seed_centroids(points: &[WeightedPoint], k: usize, rng: &mut SmallRng) -> Vec<Lab> {
    let mut centroids = Vec::with_capacity(k);
    let first = weighted_pick(points, rng, |p| f64::from(p.weight));
    centroids.push(points[first].lab);

    while centroids.len() < k {
        let next = weighted_pick(points, rng, |p| {
            let nearest = nearest_distance(p.lab, &centroids);
            f64::from(p.weight) * f64::from(nearest * nearest)
        });
        centroids.push(points[next].lab);
    }
    centroids
}

/// Sample an index with probability proportional to `mass`
fn weighted_pick<F>(points: &[WeightedPoint], rng: &mut SmallRng, mass: F) -> usize
where
    F: Fn(&WeightedPoint) -> f64,
{
    let total: f64 = points.iter().map(&mass).sum();
    if total <= 0.0 {
        return 0;
    }
    let mut target = rng.random_range(0.0..total);
    for (index, point) in points.iter().enumerate() {
        target -= mass(point);
        if target <= 0.0 {
            return index;
        }
    }
    points.len() - 1
}

fn nearest_distance(lab: Lab, centroids: &[Lab]) -> f32 {
    centroids
        .iter()
        .map(|c| delta_e_lab(lab, *c))
        .fold(f32::INFINITY, f32::min)
}

fn nearest_index(lab: Lab, centroids: &[Lab]) -> usize {
    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = delta_e_lab(lab, *centroid);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

/// One Lloyd iteration: assign points, recompute weighted centroids
fn lloyd_step(points: &[WeightedPoint], centroids: &[Lab]) -> Vec<Lab> {
    let mut sums = vec![[0.0f64; 3]; centroids.len()];
    let mut weights = vec![0.0f64; centroids.len()];

    for point in points {
        let index = nearest_index(point.lab, centroids);
        let w = f64::from(point.weight);
        sums[index][0] += f64::from(point.lab.l) * w;
        sums[index][1] += f64::from(point.lab.a) * w;
        sums[index][2] += f64::from(point.lab.b) * w;
        weights[index] += w;
    }

    centroids
        .iter()
        .enumerate()
        .map(|(index, old)| {
            if weights[index] > 0.0 {
                Lab::new(
                    (sums[index][0] / weights[index]) as f32,
                    (sums[index][1] / weights[index]) as f32,
                    (sums[index][2] / weights[index]) as f32,
                )
            } else {
                // orphaned centroid keeps its position
                *old
            }
        })
        .collect()
}

/// Final accumulation of weights per centroid, dropping empty and
/// degenerate (NaN) clusters
fn accumulate(points: &[WeightedPoint], centroids: &[Lab]) -> Vec<Cluster> {
    let mut weights = vec![0.0f64; centroids.len()];
    for point in points {
        weights[nearest_index(point.lab, centroids)] += f64::from(point.weight);
    }
    centroids
        .iter()
        .zip(weights)
        .filter(|(centroid, weight)| {
            *weight > 0.0
                && centroid.l.is_finite()
                && centroid.a.is_finite()
                && centroid.b.is_finite()
        })
        .map(|(centroid, weight)| Cluster {
            centroid: *centroid,
            weight,
        })
        .collect()
}

/// Merge cluster pairs closer than the ΔE threshold by weighted average
fn merge_close(mut clusters: Vec<Cluster>) -> Vec<Cluster> {
    loop {
        let mut closest: Option<(usize, usize, f32)> = None;
        for i in 0..clusters.len() {
            for j in (i + 1)..clusters.len() {
                let distance = delta_e_lab(clusters[i].centroid, clusters[j].centroid);
                if distance < CLUSTER_MERGE_DELTA_E
                    && closest.is_none_or(|(_, _, best)| distance < best)
                {
                    closest = Some((i, j, distance));
                }
            }
        }
        let Some((i, j, _)) = closest else {
            return clusters;
        };
        let a = clusters[i];
        let b = clusters.swap_remove(j);
        let total = a.weight + b.weight;
        clusters[i] = Cluster {
            centroid: Lab::new(
                ((f64::from(a.centroid.l) * a.weight + f64::from(b.centroid.l) * b.weight) / total)
                    as f32,
                ((f64::from(a.centroid.a) * a.weight + f64::from(b.centroid.a) * b.weight) / total)
                    as f32,
                ((f64::from(a.centroid.b) * a.weight + f64::from(b.centroid.b) * b.weight) / total)
                    as f32,
            ),
            weight: total,
        };
    }
}
