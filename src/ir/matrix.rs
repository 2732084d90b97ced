//! Matrix construction helpers shared by the gate descriptors.

use nalgebra::DMatrix;
use num_complex::Complex64;

/// Unitary matrix representation used throughout the crate.
pub type Unitary = DMatrix<Complex64>;

/// Tolerance used by the approximate comparisons below.
pub const EPSILON: f64 = 1e-10;

/// The four powers of the primitive 4th root of unity `i`, indexed by exponent mod 4.
const FOURTH_ROOTS: [Complex64; 4] = [
    Complex64::new(1.0, 0.0),
    Complex64::new(0.0, 1.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(0.0, -1.0),
];

/// Returns `i^exponent` exactly, for any signed exponent.
pub fn fourth_root_power(exponent: i64) -> Complex64 {
    FOURTH_ROOTS[exponent.rem_euclid(4) as usize]
}

/// `d x d` identity matrix.
pub fn identity(d: usize) -> Unitary {
    DMatrix::identity(d, d)
}

/// Permutation matrix sending basis state `|k>` to `|k + shift mod d>`.
pub fn cyclic_shift(d: usize, shift: usize) -> Unitary {
    DMatrix::from_fn(d, d, |row, col| {
        if row == (col + shift) % d {
            Complex64::new(1.0, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        }
    })
}

/// Identity matrix of size `d` with rows `i` and `j` exchanged.
///
/// Callers are responsible for `i, j < d`.
pub fn transposition(d: usize, i: usize, j: usize) -> Unitary {
    let mut m = identity(d);
    m.swap_rows(i, j);
    m
}

/// Block-diagonal operator on a `control (x) target` pair of qudits that applies
/// `target` when the control qudit is in state `control` and acts trivially otherwise.
pub fn controlled(d_control: usize, control: usize, target: &Unitary) -> Unitary {
    let d_target = target.nrows();
    let mut m = identity(d_control * d_target);
    let offset = control * d_target;
    m.view_mut((offset, offset), (d_target, d_target))
        .copy_from(target);
    m
}

/// Kronecker product `a (x) b`.
pub fn kron(a: &Unitary, b: &Unitary) -> Unitary {
    a.kronecker(b)
}

/// Element-wise approximate equality.
pub fn approx_eq(a: &Unitary, b: &Unitary) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < EPSILON)
}

/// Whether `m` is square and satisfies `m^dagger m = 1`.
pub fn is_unitary(m: &Unitary) -> bool {
    m.is_square() && approx_eq(&(m.adjoint() * m), &identity(m.nrows()))
}

/// Whether `m` has exactly one unit entry in every row and column and zeros elsewhere.
pub fn is_permutation(m: &Unitary) -> bool {
    if !m.is_square() {
        return false;
    }
    let one = Complex64::new(1.0, 0.0);
    let entries_ok = m
        .iter()
        .all(|z| (z - one).norm() < EPSILON || z.norm() < EPSILON);
    let rows_ok = m
        .row_iter()
        .all(|row| row.iter().filter(|z| z.norm() > EPSILON).count() == 1);
    let cols_ok = m
        .column_iter()
        .all(|col| col.iter().filter(|z| z.norm() > EPSILON).count() == 1);
    entries_ok && rows_ok && cols_ok
}

/// Whether `m` has no off-diagonal entries.
pub fn is_diagonal(m: &Unitary) -> bool {
    m.is_square()
        && m.iter()
            .enumerate()
            .all(|(idx, z)| idx / m.nrows() == idx % m.nrows() || z.norm() < EPSILON)
}
