/*!
riposte3d
========

**riposte3d** is a 3-dimensional narrow-phase collision detection library
written with the rust programming language.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]

#[macro_use]
extern crate approx;
extern crate nalgebra as na;
extern crate num_traits as num;

pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
