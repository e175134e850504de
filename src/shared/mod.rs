pub mod constants;
pub mod display;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
