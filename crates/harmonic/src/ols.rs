//! Ordinary least-squares solve via the normal equations.

use faer::Mat;
use faer::linalg::solvers::Solve;

/// Solves the overdetermined system `x · β ≈ y` in the least-squares sense.
///
/// Forms the normal equations `(XᵀX) β = Xᵀy` and solves them with a
/// full-pivot LU decomposition. The solution is unique whenever `x` has
/// full column rank; a rank-deficient or ill-conditioned system is solved
/// as-is, without a conditioning check.
///
/// # Panics
///
/// Panics if `y.len()` differs from the row count of `x`.
pub(crate) fn solve_least_squares(x: &Mat<f64>, y: &[f64]) -> Vec<f64> {
    let n = x.nrows();
    let k = x.ncols();
    assert_eq!(y.len(), n, "solve_least_squares: row count mismatch");

    // XᵀX (symmetric, k × k)
    let mut xtx = Mat::<f64>::zeros(k, k);
    for i in 0..k {
        for j in i..k {
            let mut sum = 0.0;
            for r in 0..n {
                sum += x[(r, i)] * x[(r, j)];
            }
            xtx[(i, j)] = sum;
            xtx[(j, i)] = sum;
        }
    }

    // Xᵀy (k × 1)
    let mut xty = Mat::<f64>::zeros(k, 1);
    for i in 0..k {
        let mut sum = 0.0;
        for r in 0..n {
            sum += x[(r, i)] * y[r];
        }
        xty[(i, 0)] = sum;
    }

    let lu = xtx.as_ref().full_piv_lu();
    let beta = lu.solve(&xty);

    (0..k).map(|i| beta[(i, 0)]).collect()
}
