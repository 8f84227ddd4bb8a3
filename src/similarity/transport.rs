// Entropically regularized transport plan between two discrete weight
// distributions (Sinkhorn matrix scaling).
//
// Given weights a (length m), b (length n), and an m×n cost matrix,
// the plan P moves the mass of a onto b while keeping the transport
// cost ⟨P, C⟩ low. Regularization keeps the scaling numerically
// well-behaved; the iteration stops once the row marginals of P match
// a within tolerance.

use anyhow::Result;
use ndarray::{Array1, Array2};

/// Floor for scaling denominators. Keeps a division from producing
/// infinities when the kernel underflows at very low regularization.
const EPSILON: f64 = 1e-12;

/// Compute the transport plan between `a` and `b` under `cost`.
///
/// Both weight vectors must be strictly positive and should each sum
/// to 1; the plan's row sums converge to `a` and column sums to `b`.
pub fn sinkhorn_plan(
    a: &Array1<f64>,
    b: &Array1<f64>,
    cost: &Array2<f64>,
    reg: f64,
    max_iter: usize,
    tol: f64,
) -> Result<Array2<f64>> {
    let (m, n) = cost.dim();
    if a.len() != m || b.len() != n {
        anyhow::bail!(
            "weight lengths ({}, {}) do not match cost matrix {}x{}",
            a.len(),
            b.len(),
            m,
            n
        );
    }
    if m == 0 || n == 0 {
        anyhow::bail!("cannot transport between empty distributions");
    }
    if a.iter().chain(b.iter()).any(|&w| w <= 0.0 || !w.is_finite()) {
        anyhow::bail!("transport weights must be strictly positive and finite");
    }
    if reg <= 0.0 {
        anyhow::bail!("regularization must be positive, got {reg}");
    }

    let kernel = cost.mapv(|c| (-c / reg).exp());
    let kernel_t = kernel.t();

    let mut u = Array1::from_elem(m, 1.0);
    let mut v = Array1::from_elem(n, 1.0);

    for _ in 0..max_iter {
        let kv = kernel.dot(&v).mapv(|x| x.max(EPSILON));
        u = a / &kv;
        let ktu = kernel_t.dot(&u).mapv(|x| x.max(EPSILON));
        v = b / &ktu;

        // Row marginal violation; column marginals are exact right
        // after the v update.
        let rows = &u * &kernel.dot(&v);
        let err = rows
            .iter()
            .zip(a.iter())
            .map(|(row, target)| (row - target).abs())
            .fold(0.0, f64::max);
        if err < tol {
            break;
        }
    }

    let mut plan = kernel;
    for ((i, j), value) in plan.indexed_iter_mut() {
        *value *= u[i] * v[j];
    }
    Ok(plan)
}

/// Total cost of a transport plan: ⟨plan, cost⟩.
pub fn plan_cost(plan: &Array2<f64>, cost: &Array2<f64>) -> f64 {
    (plan * cost).sum()
}
