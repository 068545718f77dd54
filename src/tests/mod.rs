#[cfg(test)]
pub mod protocol_tests;
