pub mod config;
pub mod contact;
pub mod nav;
pub mod notify;
pub mod particles;
pub mod rain;
pub mod random;
pub mod reveal;
pub mod schedule;
pub mod telemetry;
pub mod typing;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
