//! Request handlers for the movie catalog.
//!
//! Every operation is one read-modify-(write) cycle against the injected
//! [`marquee_store::MovieStore`]; mutating handlers additionally hold the
//! state's write lock across the whole cycle.

pub mod movies;
