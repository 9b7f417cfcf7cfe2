//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled, [`profile_function!`] and
//! [`profile_scope!`] expand to nothing and [`init_profiling`] only logs.

/// Whether puffin scopes are compiled in.
pub const ENABLED: bool = cfg!(feature = "profiling");

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

#[cfg(feature = "profiling")]
pub use enabled::*;

#[cfg(feature = "profiling")]
mod enabled {
    use std::sync::OnceLock;

    use super::ProfilingBackend;

    pub use puffin::{profile_function, profile_scope};

    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Initialize profiling with the specified backend.
    ///
    /// # Example
    /// ```no_run
    /// use infinipage_core::profiling::{init_profiling, ProfilingBackend};
    ///
    /// init_profiling(ProfilingBackend::PuffinHttp);
    /// ```
    pub fn init_profiling(backend: ProfilingBackend) {
        match backend {
            ProfilingBackend::PuffinHttp => {
                puffin::set_scopes_on(true);

                match puffin_http::Server::new("127.0.0.1:8585") {
                    Ok(server) => {
                        tracing::info!("Puffin profiler server started on http://127.0.0.1:8585");
                        let _ = PROFILING_SERVER.set(server);
                    }
                    Err(e) => {
                        tracing::error!("Failed to start puffin server: {}", e);
                    }
                }
            }
        }
    }

    /// Mark the start of a new frame for profiling.
    #[inline]
    pub fn new_frame() {
        puffin::GlobalProfiler::lock().new_frame();
    }
}

#[cfg(not(feature = "profiling"))]
pub use disabled::*;

#[cfg(not(feature = "profiling"))]
mod disabled {
    use super::ProfilingBackend;

    pub use crate::{profile_function, profile_scope};

    pub fn init_profiling(backend: ProfilingBackend) {
        tracing::warn!(?backend, "profiling requested but the `profiling` feature is disabled");
    }

    #[inline]
    pub fn new_frame() {}
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
#[doc(hidden)]
macro_rules! profile_function {
    () => {};
    ($data:expr) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
#[doc(hidden)]
macro_rules! profile_scope {
    ($name:expr) => {};
    ($name:expr, $data:expr) => {};
}
