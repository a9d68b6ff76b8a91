pub mod util;

#[cfg(test)]
mod integration_test;
