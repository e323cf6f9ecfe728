//! Basic example of scoring a walked trail against a square target.
//!
//! Run with: cargo run --example basic_scoring

use shape_tracer::{
    build_boundary, score_game, tolerance_for_radius, GameParams, GeoPoint, GpsPoint, ScoreConfig,
    TemplateDescriptor,
};
use shape_tracer::projection::{to_geo, to_planar, PlanarPoint};
use std::collections::HashMap;

/// Walk the target outline corner to corner at ~2m spacing, with a small
/// fixed wobble imitating GPS noise.
fn walk_outline(template: &TemplateDescriptor, wobble_meters: f64) -> Vec<GpsPoint> {
    let config = ScoreConfig::default();
    let shape = template.resolve().expect("demo template resolves");
    let boundary = build_boundary(&shape, &config);
    let origin = shape.center().expect("demo template has a center");

    let mut out = Vec::new();
    let n = boundary.len();
    for i in 0..n {
        let a = to_planar(&boundary[i], &origin);
        let b = to_planar(&boundary[(i + 1) % n], &origin);
        let steps = (a.distance_to(&b) / 2.0).ceil() as usize;
        for s in 0..steps {
            let t = s as f64 / steps as f64;
            // Alternate the wobble side so the path zigzags around the edge
            let w = if (out.len()) % 2 == 0 {
                wobble_meters
            } else {
                -wobble_meters
            };
            let p = PlanarPoint::new(a.x + (b.x - a.x) * t + w, a.y + (b.y - a.y) * t - w);
            let g = to_geo(&p, &origin);
            out.push(GpsPoint::new(g.lat, g.lng));
        }
    }
    // Close the loop
    let first = boundary[0];
    out.push(GpsPoint::new(first.lat, first.lng));
    out
}

fn main() {
    // A 100m square target in central London
    let template = TemplateDescriptor {
        template_id: Some("square".to_string()),
        center: Some(GeoPoint::new(51.5074, -0.1278)),
        radius_meters: Some(100.0),
        ..TemplateDescriptor::default()
    };

    let config = ScoreConfig::default();
    let tol = tolerance_for_radius(template.radius_meters, &config);

    println!("Shape Tracing Example\n");
    println!(
        "Target: square, radius {}m, tolerance {:.1}m\n",
        template.radius_meters.unwrap(),
        tol
    );

    // Three brushes with increasingly sloppy walks
    let mut trails: HashMap<String, Vec<GpsPoint>> = HashMap::new();
    trails.insert("precise".to_string(), walk_outline(&template, 0.5));
    trails.insert("casual".to_string(), walk_outline(&template, 4.0));
    trails.insert("lost".to_string(), walk_outline(&template, 15.0));

    let params = GameParams {
        time_seconds: 120.0,
        roster: None,
    };
    let score = score_game(&trails, &template, &params, &config);

    println!("Per-player results:");
    for player in &score.per_player {
        println!(
            "  {:>8}: {:>3}% accuracy (coverage {:.2}, precision {:.2}), walked {:.0}m",
            player.username,
            player.breakdown.accuracy_pct,
            player.breakdown.coverage,
            player.breakdown.precision,
            player.walked_meters
        );
    }

    println!("\nTeam result:");
    println!(
        "  accuracy: {}%  adjusted: {}%",
        score.team.breakdown.accuracy_pct, score.team.breakdown.adjusted_pct
    );
    println!("  points:   {}", score.team.points);
}
