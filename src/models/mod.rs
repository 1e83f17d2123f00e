pub mod arc;
pub mod fake_predictor;
pub mod prediction;
pub mod predictor;
pub mod randomizer;
pub mod reading;
pub mod validation;
