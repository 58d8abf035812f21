/// SuccessModel v1.0 — Coordination Graph Utilities
///
/// Pure graph arithmetic. The coordination structure is always the
/// complete graph on the teams, so everything here is closed-form.

/// Number of unique unordered team pairs: `n * (n - 1) / 2`.
/// Returns 0 for fewer than 2 teams — a single team has no
/// cross-team channel.
pub fn communication_paths(n: i64) -> i64 {
    if n < 2 {
        return 0;
    }
    n * (n - 1) / 2
}

/// Enumerate the unordered team pairs `(i, j)` with `i < j`, in
/// sorted order for determinism. Consumed by the dependency-graph
/// layout; length always equals `communication_paths`.
pub fn team_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}
