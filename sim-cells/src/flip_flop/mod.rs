mod sr_latch;

pub use sr_latch::SrLatch;
