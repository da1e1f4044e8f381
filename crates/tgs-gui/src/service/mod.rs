//! Background services.
//!
//! The generation run is the only asynchronous operation in the
//! application; everything else happens on the UI thread.

pub mod convert;
