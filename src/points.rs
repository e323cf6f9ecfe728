//! # Points Formula
//!
//! Converts the team's adjusted accuracy into a leaderboard point value.
//!
//! The adjusted percentage is scaled up and weighted by how hard the game
//! was: shape difficulty, target size, team size and elapsed time. Every
//! coefficient lives in [`ScoreConfig`](crate::ScoreConfig); the per-shape
//! difficulty defaults mirror the template catalog's.

use crate::{ScoreConfig, ShapeKind, ShapeTemplate};

/// Difficulty multiplier for a resolved shape.
///
/// The template's explicit multiplier wins when positive; otherwise each
/// parametric shape has a fixed default and catalog/freehand shapes are
/// neutral.
pub fn difficulty_multiplier(multiplier: Option<f64>, shape: Option<&ShapeTemplate>) -> f64 {
    if let Some(m) = multiplier {
        if m > 0.0 {
            return m;
        }
    }
    match shape {
        Some(ShapeTemplate::Parametric { kind, .. }) => match kind {
            ShapeKind::Star => 1.6,
            ShapeKind::Square => 1.3,
            ShapeKind::Triangle => 1.15,
            ShapeKind::Circle => 1.05,
        },
        _ => 1.0,
    }
}

/// Final point value for one game.
///
/// `points = round(adjusted_pct * base_scale * difficulty * radius_factor
/// * team_factor * time_factor)` where:
/// - `radius_factor` down-weights small targets (harder to miss) and
///   up-weights large ones, clamped around a 100 m baseline
/// - `team_factor = 1 + log10(team_size)` gives diminishing returns for
///   more contributing brushes
/// - `time_factor` rewards finishing faster than the 90 s baseline,
///   clamped both directions with a 30 s floor
pub fn game_points(
    adjusted_pct: u32,
    difficulty: f64,
    radius_meters: f64,
    team_size: usize,
    time_seconds: f64,
    config: &ScoreConfig,
) -> u32 {
    let base = adjusted_pct as f64 * config.points_base_scale;

    let radius_factor = (radius_meters / config.radius_baseline_meters)
        .clamp(config.radius_factor_min, config.radius_factor_max);

    let team_factor = 1.0 + (team_size.max(1) as f64).log10();

    let time_factor = (config.time_baseline_seconds / time_seconds.max(config.time_floor_seconds))
        .clamp(config.time_factor_min, config.time_factor_max);

    (base * difficulty * radius_factor * team_factor * time_factor).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn parametric(kind: ShapeKind) -> ShapeTemplate {
        ShapeTemplate::Parametric {
            kind,
            center: GeoPoint::new(0.0, 0.0),
            radius_meters: 100.0,
        }
    }

    #[test]
    fn test_difficulty_defaults_per_shape() {
        assert_eq!(difficulty_multiplier(None, Some(&parametric(ShapeKind::Star))), 1.6);
        assert_eq!(difficulty_multiplier(None, Some(&parametric(ShapeKind::Square))), 1.3);
        assert_eq!(
            difficulty_multiplier(None, Some(&parametric(ShapeKind::Triangle))),
            1.15
        );
        assert_eq!(
            difficulty_multiplier(None, Some(&parametric(ShapeKind::Circle))),
            1.05
        );

        let polygon = ShapeTemplate::Polygon {
            vertices: vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.001, 0.0)],
        };
        assert_eq!(difficulty_multiplier(None, Some(&polygon)), 1.0);
        assert_eq!(difficulty_multiplier(None, None), 1.0);
    }

    #[test]
    fn test_explicit_multiplier_wins() {
        assert_eq!(
            difficulty_multiplier(Some(2.5), Some(&parametric(ShapeKind::Circle))),
            2.5
        );
        // Non-positive multipliers fall back to the shape default
        assert_eq!(
            difficulty_multiplier(Some(0.0), Some(&parametric(ShapeKind::Star))),
            1.6
        );
        assert_eq!(
            difficulty_multiplier(Some(-1.0), Some(&parametric(ShapeKind::Star))),
            1.6
        );
    }

    #[test]
    fn test_points_baseline_scenario() {
        // Team of 1, adjustedPct 80, default circle, 100m radius, 90s:
        // every factor but difficulty is neutral
        let points = game_points(80, 1.05, 100.0, 1, 90.0, &ScoreConfig::default());
        assert_eq!(points, 1008); // round(80 * 12 * 1.05)
    }

    #[test]
    fn test_radius_factor_clamps() {
        let config = ScoreConfig::default();
        // 50m radius: 0.5 clamped up to 0.8
        let small = game_points(100, 1.0, 50.0, 1, 90.0, &config);
        assert_eq!(small, (100.0_f64 * 12.0 * 0.8).round() as u32);
        // 500m radius: 5.0 clamped down to 1.5
        let large = game_points(100, 1.0, 500.0, 1, 90.0, &config);
        assert_eq!(large, (100.0_f64 * 12.0 * 1.5).round() as u32);
    }

    #[test]
    fn test_team_factor_diminishing_returns() {
        let config = ScoreConfig::default();
        let solo = game_points(100, 1.0, 100.0, 1, 90.0, &config);
        let ten = game_points(100, 1.0, 100.0, 10, 90.0, &config);
        let hundred = game_points(100, 1.0, 100.0, 100, 90.0, &config);
        // log10: 1 -> x1, 10 -> x2, 100 -> x3
        assert_eq!(ten, solo * 2);
        assert_eq!(hundred, solo * 3);
        // Zero contributors count as one
        assert_eq!(game_points(100, 1.0, 100.0, 0, 90.0, &config), solo);
    }

    #[test]
    fn test_time_factor_clamps() {
        let config = ScoreConfig::default();
        // Very fast games hit the 30s floor then the 1.2 cap
        let fast = game_points(100, 1.0, 100.0, 1, 10.0, &config);
        assert_eq!(fast, (100.0_f64 * 12.0 * 1.2).round() as u32);
        // Slow games bottom out at 0.8
        let slow = game_points(100, 1.0, 100.0, 1, 600.0, &config);
        assert_eq!(slow, (100.0_f64 * 12.0 * 0.8).round() as u32);
        // 90s is neutral
        let neutral = game_points(100, 1.0, 100.0, 1, 90.0, &config);
        assert_eq!(neutral, 1200);
    }

    #[test]
    fn test_zero_accuracy_scores_zero_points() {
        assert_eq!(game_points(0, 1.6, 500.0, 10, 30.0, &ScoreConfig::default()), 0);
    }

    #[test]
    fn test_factors_compose() {
        let config = ScoreConfig::default();
        let points = game_points(80, 1.3, 150.0, 2, 45.0, &config);
        let expected = 80.0 * 12.0 * 1.3 * 1.5 * (1.0 + 2.0_f64.log10()) * 1.2;
        assert!(approx_eq(points as f64, expected.round(), 0.5));
    }
}
