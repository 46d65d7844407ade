// Derived analytics over ad-analysis records.
//
// Everything in this module is a pure function of already-resolved records:
// no I/O, no ambient state, recompute-on-demand.

pub mod compare;
pub mod copygate;
pub mod narrative;
pub mod platforms;
