//! Team dependency-graph geometry — evenly spaced nodes on a circle,
//! one line segment per communication path.
//!
//! Coordinates target a 240x240 SVG viewport. Iteration order is the
//! sorted pair order from the kernel, so output is deterministic.

use serde::Serialize;

use success_engine::graph::team_pairs;

/// Display labels for up to ten teams.
pub const TEAM_LABELS: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

const RADIUS: f64 = 80.0;
const CENTER_X: f64 = 120.0;
const CENTER_Y: f64 = 120.0;

/// One team node on the circle.
#[derive(Debug, Clone, Serialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
}

/// One communication-path line between two nodes.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Place `team_count` nodes on the circle, first node at the top,
/// clockwise. Counts beyond the label set are truncated to ten.
pub fn node_positions(team_count: usize) -> Vec<NodePosition> {
    let n = team_count.min(TEAM_LABELS.len());
    let step = 2.0 * std::f64::consts::PI / n as f64;

    (0..n)
        .map(|i| {
            let angle = i as f64 * step - std::f64::consts::FRAC_PI_2;
            NodePosition {
                x: CENTER_X + RADIUS * angle.cos(),
                y: CENTER_Y + RADIUS * angle.sin(),
                label: TEAM_LABELS[i],
            }
        })
        .collect()
}

/// One line per unordered team pair.
pub fn edges(team_count: usize) -> Vec<EdgeLine> {
    let positions = node_positions(team_count);

    team_pairs(positions.len())
        .into_iter()
        .map(|(i, j)| EdgeLine {
            x1: positions[i].x,
            y1: positions[i].y,
            x2: positions[j].x,
            y2: positions[j].y,
        })
        .collect()
}
