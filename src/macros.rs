//! Target-tagged log macros, one family per module, thinly wrapping `log`.
//!
//! Mirrors the `grpc_debug!`/`grpc_info!` family a gRPC service would define
//! for its own module: each family logs under a distinct target so a
//! `log4rs.yaml` can route it to its own appender independently of the rest
//! of the crate.

macro_rules! target_log_macros {
    ($target:literal, $debug:ident, $info:ident, $warn:ident, $error:ident) => {
        #[allow(unused_macros)]
        macro_rules! $debug {
            ($($arg:tt)+) => { log::debug!(target: $target, $($arg)+) };
        }
        #[allow(unused_macros)]
        macro_rules! $info {
            ($($arg:tt)+) => { log::info!(target: $target, $($arg)+) };
        }
        #[allow(unused_macros)]
        macro_rules! $warn {
            ($($arg:tt)+) => { log::warn!(target: $target, $($arg)+) };
        }
        #[allow(unused_macros)]
        macro_rules! $error {
            ($($arg:tt)+) => { log::error!(target: $target, $($arg)+) };
        }
    };
}

target_log_macros!("app::layout", layout_debug, layout_info, layout_warn, layout_error);
target_log_macros!("app::schedule", sched_debug, sched_info, sched_warn, sched_error);
target_log_macros!("app::decomposer", decomp_debug, decomp_info, decomp_warn, decomp_error);
target_log_macros!("app::costs", cost_debug, cost_info, cost_warn, cost_error);
target_log_macros!("app::model", model_debug, model_info, model_warn, model_error);
target_log_macros!("app::solver", solver_debug, solver_info, solver_warn, solver_error);
