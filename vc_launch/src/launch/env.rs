//! Environment variables set on the synthesis process.
//!
//! Both are consumed by the numeric runtime inside the child; the
//! launcher's own environment is never modified.

/// Allocator-strategy selector read by the child's numeric runtime.
pub const ALLOCATOR_STRATEGY_VAR: &str = "FLAGS_allocator_strategy";

/// Allocation policy name, opaque to the launcher.
pub const ALLOCATOR_STRATEGY: &str = "naive_best_fit";

/// GPU-memory-fraction selector read by the child's numeric runtime.
pub const GPU_MEMORY_FRACTION_VAR: &str = "FLAGS_fraction_of_gpu_memory_to_use";

/// Fraction of accelerator memory the child may reserve up front.
pub const GPU_MEMORY_FRACTION: &str = "0.01";

/// The pairs applied to every child invocation, in a fixed order.
pub fn runtime_env() -> [(&'static str, &'static str); 2] {
    [
        (ALLOCATOR_STRATEGY_VAR, ALLOCATOR_STRATEGY),
        (GPU_MEMORY_FRACTION_VAR, GPU_MEMORY_FRACTION),
    ]
}
