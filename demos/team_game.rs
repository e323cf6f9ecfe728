//! Team scoring example: several brushes each trace part of a star target
//! and the union is scored in parallel.
//!
//! Run with: cargo run --example team_game --features parallel

use shape_tracer::{
    build_boundary, score_game_parallel, GameParams, GeoPoint, GpsPoint, ScoreConfig,
    TemplateDescriptor,
};
use shape_tracer::projection::{to_geo, to_planar, PlanarPoint};
use std::collections::HashMap;

/// Trace a contiguous run of the target's edges at ~2m spacing.
fn trace_edges(template: &TemplateDescriptor, from_edge: usize, edge_count: usize) -> Vec<GpsPoint> {
    let config = ScoreConfig::default();
    let shape = template.resolve().expect("demo template resolves");
    let boundary = build_boundary(&shape, &config);
    let origin = shape.center().expect("demo template has a center");

    let n = boundary.len();
    let mut out = Vec::new();
    for e in from_edge..from_edge + edge_count {
        let a = to_planar(&boundary[e % n], &origin);
        let b = to_planar(&boundary[(e + 1) % n], &origin);
        let steps = (a.distance_to(&b) / 2.0).ceil() as usize;
        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            let p = PlanarPoint::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
            let g = to_geo(&p, &origin);
            out.push(GpsPoint::new(g.lat, g.lng));
        }
    }
    out
}

fn main() {
    // An 80m star over Stockholm, flagged harder by the catalog
    let template = TemplateDescriptor {
        template_id: Some("star".to_string()),
        center: Some(GeoPoint::new(59.3293, 18.0686)),
        radius_meters: Some(80.0),
        multiplier: Some(1.6),
        ..TemplateDescriptor::default()
    };

    // A 10-vertex star has 10 edges; split them across the team,
    // with one brush who joined but never sent a sample
    let mut trails: HashMap<String, Vec<GpsPoint>> = HashMap::new();
    trails.insert("alice".to_string(), trace_edges(&template, 0, 4));
    trails.insert("bob".to_string(), trace_edges(&template, 4, 3));
    trails.insert("carol".to_string(), trace_edges(&template, 7, 3));
    trails.insert("dave".to_string(), Vec::new());

    let params = GameParams {
        time_seconds: 75.0,
        roster: None,
    };
    let score = score_game_parallel(&trails, &template, &params, &ScoreConfig::default());

    println!("Team Star Tracing\n");
    for player in &score.per_player {
        match &player.breakdown.reason {
            Some(reason) => println!("  {:>6}: no score ({reason})", player.username),
            None => println!(
                "  {:>6}: {:>3}% accuracy, covered {:.0}% of the outline, walked {:.0}m",
                player.username,
                player.breakdown.accuracy_pct,
                player.breakdown.coverage * 100.0,
                player.walked_meters
            ),
        }
    }

    println!(
        "\nTeam: {}% accuracy ({} contributors, {:.0}s game)",
        score.team.breakdown.accuracy_pct,
        score.per_player.len(),
        params.time_seconds
    );
    println!("Points: {}", score.team.points);
}
