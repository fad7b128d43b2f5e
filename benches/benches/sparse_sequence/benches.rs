#![allow(missing_docs)]
#![allow(unused_results)]

use criterion::criterion_main;

mod dense_ops;
mod insert;
mod iter;
mod remove;

criterion_main!(dense_ops::benches, insert::benches, iter::benches, remove::benches);
