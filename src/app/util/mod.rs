pub mod reqwest;
#[cfg(test)]
pub mod test_server;
