mod load_profile;

pub use load_profile::load_profile;
