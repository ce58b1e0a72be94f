// Thu Jan 22 2026 - Alex

pub mod banner;

pub use banner::Banner;
