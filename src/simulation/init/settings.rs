use crate::domain::config::LateralVelocity;

use super::perf_stats::PerfStats;
use super::SandCore;

pub(super) fn enable_perf_metrics(core: &mut SandCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SandCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_lateral_velocity(core: &mut SandCore, policy: LateralVelocity) {
    core.lateral_velocity = policy;
}

pub(super) fn lateral_velocity(core: &SandCore) -> LateralVelocity {
    core.lateral_velocity
}
