//! Terminal consumers: drive an enumeration once and return a single value.
//!
//! Absent and empty sources produce the documented default (`0`, `None`,
//! `false`, an empty collection); absence is never an error. Short-circuiting
//! reducers stop pulling at the earliest moment the answer is known.

pub mod aggregate;
pub mod element;
pub mod extremum;
pub mod materialize;
