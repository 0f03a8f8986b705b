/// timestep.rs
/// Fixed-step simulation clock helpers
///
/// 경기 시간은 누적하지 않고 항상 `tick × dt`로 계산한다 (float drift 방지).

/// 기본 tick 길이 (66ms)
pub const DEFAULT_DT: f64 = 0.066;

/// tick 시작 시점의 경과 시간 (초)
#[inline]
pub fn elapsed_seconds(tick: u64, dt: f64) -> f64 {
    tick as f64 * dt
}

/// `max_time`에 도달하는 데 필요한 tick 수 = ⌈max_time / dt⌉
pub fn tick_budget(max_time: f64, dt: f64) -> u64 {
    if dt <= 0.0 || max_time <= 0.0 {
        return 0;
    }
    (max_time / dt).ceil() as u64
}
