//! Configuration settings for the solver.

/// Solver settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Integer feasibility tolerance.
    ///
    /// A relaxation value is considered binary if it is within this
    /// distance of 0 or of 1.
    pub int_feas_tol: f64,

    /// Maximum number of nodes to expand before giving up.
    pub max_nodes: u64,

    /// Wall-clock limit in milliseconds (None = unlimited).
    ///
    /// Checked once per loop iteration; an in-flight relaxation solve
    /// is allowed to finish.
    pub time_limit_ms: Option<u64>,

    /// Print a trace line per expanded node.
    pub verbose: bool,

    /// Trace frequency (log every N expanded nodes).
    pub log_freq: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            int_feas_tol: 1e-6,
            max_nodes: 1_000_000,
            time_limit_ms: None,
            verbose: false,
            log_freq: 1,
        }
    }
}

impl Settings {
    /// Create settings with per-node tracing enabled.
    pub fn verbose() -> Self {
        let mut s = Self::default();
        s.verbose = true;
        s
    }

    /// Set the integer feasibility tolerance.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.int_feas_tol = tol;
        self
    }

    /// Set the node budget.
    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Set the wall-clock limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit_ms = Some((seconds * 1000.0) as u64);
        self
    }
}
