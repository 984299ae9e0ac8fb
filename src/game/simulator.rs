//! Balance soak for the clicker loop.
//! Run with: cargo test simulate -- --nocapture
