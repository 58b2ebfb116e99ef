use middleware::{global::GlobalLimiter, write::WriteRateLimiter};

pub mod middleware {
    pub mod global;
    pub mod write;
}

pub fn global_middleware(permits_per_second: u32) -> GlobalLimiter {
    GlobalLimiter::new(permits_per_second)
}

/// Keyed limiter for write-heavy surfaces (likes, lead capture).
pub fn write_middleware(permits_per_minute: u32) -> WriteRateLimiter {
    WriteRateLimiter::new(permits_per_minute)
}
