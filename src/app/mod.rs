mod usecases;

pub use usecases::*;
