//! The EPA algorithm for penetration depth computation.

pub use self::epa3::{Epa, EpaResult, Penetration, MAX_FACES, MAX_VERTICES};

mod epa3;
