mod error;
pub mod num;
mod roster;
mod weights;

use rand::seq::SliceRandom as _;

pub use crate::error::SelectionError;
pub use crate::num::Normalized;
pub use crate::roster::{Participant, Roster};

/// How the consideration adjustment is parameterized.
///
/// `Factor(k)` scales a favored participant's probability to `k` times the
/// uniform `1/N`. `Advantage(ptj_v)` states the favored-over-unfavored
/// advantage as a fraction, `ptj_v = p_v/p_s - 1`. Both describe the same
/// family of distributions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionMode {
    Factor(f64),
    Advantage(f64),
}

impl SelectionMode {
    /// Build a mode from its string tag, for callers driven by untyped
    /// input. Recognized tags are `"k"` and `"ptj_v"`.
    pub fn from_tag(tag: &str, value: f64) -> Result<Self, SelectionError> {
        match tag {
            "k" => Ok(Self::Factor(value)),
            "ptj_v" => Ok(Self::Advantage(value)),
            other => Err(SelectionError::UnknownMode(other.to_string())),
        }
    }
}

impl Default for SelectionMode {
    fn default() -> Self {
        Self::Factor(1.05)
    }
}

/// Draw one winner from an (N, 2) table of (name, consideration) rows, where
/// the consideration cell is the literal `"True"` or `"False"`.
///
/// Favored participants are drawn with probability `p_v` each and unfavored
/// with `p_s` each, derived from `mode` against the current category counts.
/// If only one category is present the draw is uniform and `mode` is
/// ignored. The input is never mutated.
pub fn select_one<R>(
    rng: &mut R,
    rows: &[Vec<String>],
    mode: SelectionMode,
) -> Result<String, SelectionError>
where
    R: rand::Rng,
{
    let roster = Roster::parse(rows)?;
    let nv = roster.favored_count();
    let ns = roster.unfavored_count();

    if nv == 0 || ns == 0 {
        log::info!(
            "only one consideration category present, drawing uniformly from {} participants",
            roster.len(),
        );
        // The roster is non-empty after validation.
        let pick = roster.entries().choose(rng).expect("non-empty roster");
        return Ok(pick.name.clone());
    }

    let weights = weights::derive(nv, ns, mode)?;
    let (p_v, p_s) = (*weights.favored.as_f64(), *weights.unfavored.as_f64());
    if weights.unfavored.is_zero() {
        log::info!("unfavored participants carry zero probability mass in this draw");
    } else {
        log::info!(
            "favored participants hold a {:.2}% advantage in this draw",
            (p_v / p_s - 1.0) * 100.0,
        );
    }

    let pool: Vec<(&str, f64)> = roster
        .entries()
        .iter()
        .map(|p| (p.name.as_str(), if p.favored { p_v } else { p_s }))
        .collect();
    let (name, _) = pool
        .choose_weighted(rng, |(_, weight)| *weight)
        .map_err(|_| SelectionError::InvariantViolation {
            p_v,
            p_s,
            mass: nv as f64 * p_v + ns as f64 * p_s,
        })?;
    Ok((*name).to_string())
}

/// Produce the full elimination ordering (the "lunch list"): draw a winner,
/// remove it, and repeat until the pool is empty.
///
/// Each round revalidates the remaining table and re-derives the weights, so
/// the effective `p_v`/`p_s` shift as winners leave and the category counts
/// change. Once a single category remains, the remaining rounds fall back to
/// the uniform draw. Any round's failure aborts the whole call with no
/// partial list. The caller's table is never mutated; removal happens on an
/// owned working copy.
pub fn select_sequence<R>(
    rng: &mut R,
    rows: &[Vec<String>],
    mode: SelectionMode,
) -> Result<Vec<String>, SelectionError>
where
    R: rand::Rng,
{
    let mut pool: Vec<Vec<String>> = rows.to_vec();
    let mut order = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let winner = select_one(rng, &pool, mode)?;
        // Names are unique, so exactly one row leaves per round.
        pool.retain(|row| row[0] != winner);
        order.push(winner);
    }
    Ok(order)
}
