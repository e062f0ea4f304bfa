//! Arithmetic utilities: primality sieve and odd radicals.

pub mod primes;
pub mod radical;

pub use primes::*;
pub use radical::*;
