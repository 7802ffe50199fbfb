//! Trapezoidal velocity profiles: the solved segment type, the closed-form
//! segment solver, and a cubic interpolation helper.

mod interp;
mod segment;
mod solver;

pub use interp::interpolate_cubic;
pub use segment::Segment;
pub use solver::generate_segment;

// Sign convention with positive zero, used by the ramp evaluation and solver.
#[inline]
pub(crate) fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}
