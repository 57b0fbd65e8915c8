#![allow(non_snake_case)]
pub mod Examples;
pub mod symbolic;

use crate::Examples::symbolic_examples::sym_diff_examples;
use simplelog::{Config, LevelFilter, SimpleLogger};

fn main() {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());
    let example = 0;
    sym_diff_examples(example);
}
