use crate::error::SelectionError;
use crate::num::Normalized;
use crate::SelectionMode;

/// Tolerance on the total-mass postcondition `Nv*p_v + Ns*p_s == 1`.
pub(crate) const MASS_TOLERANCE: f64 = 1e-9;

/// Per-category selection probabilities. Favored participants share
/// `favored` (p_v), unfavored share `unfavored` (p_s).
pub(crate) struct CategoryWeights {
    pub favored: Normalized,
    pub unfavored: Normalized,
}

/// Derive `(p_v, p_s)` for `nv` favored and `ns` unfavored participants.
/// Requires both categories present; single-category rosters take the
/// uniform path and never reach derivation.
pub(crate) fn derive(
    nv: usize,
    ns: usize,
    mode: SelectionMode,
) -> Result<CategoryWeights, SelectionError> {
    debug_assert!(nv > 0 && ns > 0);
    let (nv_f, ns_f) = (nv as f64, ns as f64);
    let n = nv_f + ns_f;

    let (p_v, p_s) = match mode {
        SelectionMode::Factor(k) => {
            let upper = n / nv_f;
            if !(0.0..=upper).contains(&k) {
                return Err(SelectionError::OutOfRange {
                    parameter: "k",
                    lower: 0.0,
                    upper,
                    value: k,
                });
            }
            let p_v = k / n;
            // k at the upper bound puts all mass on the favored category;
            // force the exact zero so 1 - Nv*p_v cannot leave a residue.
            let p_s = if k == upper {
                0.0
            } else {
                (1.0 - nv_f * p_v) / ns_f
            };
            (p_v, p_s)
        }
        SelectionMode::Advantage(ptj_v) => {
            // The documented upper bound is self-referential: p_s in the
            // bound formula is evaluated at the candidate ptj_v as given.
            let p_s_probe = 1.0 / (ns_f + nv_f * (1.0 + ptj_v));
            let upper = 1.0 / (p_s_probe * nv_f) - 1.0;
            if !(-1.0..=upper).contains(&ptj_v) {
                return Err(SelectionError::OutOfRange {
                    parameter: "ptj_v",
                    lower: -1.0,
                    upper,
                    value: ptj_v,
                });
            }
            let p_s = 1.0 / (ns_f + nv_f * (1.0 + ptj_v));
            let p_v = p_s * (1.0 + ptj_v);
            (p_v, p_s)
        }
    };

    // A value one rounding step below the upper bound can still leave a tiny
    // negative residue on p_s.
    let p_s = if p_s < 0.0 && p_s >= -MASS_TOLERANCE {
        0.0
    } else {
        p_s
    };

    let mass = nv_f * p_v + ns_f * p_s;
    let violation = || SelectionError::InvariantViolation { p_v, p_s, mass };
    if (mass - 1.0).abs() > MASS_TOLERANCE {
        return Err(violation());
    }
    // Normalized rejects negative (and NaN) probabilities.
    let favored = Normalized::new(p_v).ok_or_else(violation)?;
    let unfavored = Normalized::new(p_s).ok_or_else(violation)?;
    Ok(CategoryWeights { favored, unfavored })
}
