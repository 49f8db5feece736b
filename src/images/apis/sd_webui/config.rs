pub static SAMPLER_NAME: &str = "DPM++ 2M SDE";
/// The WebUI picks a fresh random seed for -1.
pub static RANDOM_SEED: i64 = -1;
