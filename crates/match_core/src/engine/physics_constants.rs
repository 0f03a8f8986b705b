//! Physics constants for match simulation
//!
//! 경기장 좌표는 미터 단위. x = 폭 (touchline to touchline), y = 길이 (goal to goal).
//! Team 0은 y = length 방향으로 공격한다.

// ============================================================
// Pitch
// ============================================================
pub mod field {
    /// 7인제 기본 폭 (m)
    pub const DEFAULT_WIDTH_M: f32 = 34.0;
    /// 7인제 기본 길이 (m)
    pub const DEFAULT_LENGTH_M: f32 = 52.0;
}

// ============================================================
// Player movement
// ============================================================
pub mod player {
    /// 매 tick 적분 후 속도 감쇠
    pub const FRICTION: f32 = 0.9;

    /// 목표 지점과의 거리가 이보다 클 때만 재조향
    pub const RESTEER_DISTANCE_M: f32 = 2.0;

    /// 전술 목표는 경기장 가장자리에서 이 거리 안쪽으로 제한
    pub const TARGET_MARGIN_M: f32 = 5.0;

    /// GK 라인 (자기 골라인 기준)
    pub const GK_LINE_M: f32 = 5.0;
    /// DEF 밴드 (자기 골라인 기준)
    pub const DEFENDER_LINE_M: f32 = 15.0;
    /// FWD 밴드 (상대 골라인 기준)
    pub const FORWARD_LINE_M: f32 = 15.0;

    /// 전술 목표 jitter (정규분포 sigma)
    pub const JITTER_SIGMA_X: f32 = 3.0;
    pub const JITTER_SIGMA_Y: f32 = 2.0;
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    /// 굴러가는 공의 tick당 감쇠
    pub const FRICTION: f32 = 0.92;

    /// 경계에서 반사 시 속도 성분에 곱해지는 계수 (부호 반전 포함)
    pub const BOUNCE_RESTITUTION: f32 = 0.6;

    /// 이 속도 미만이면 정지
    pub const STOP_SPEED: f32 = 0.3;
}

// ============================================================
// Possession resolution
// ============================================================
pub mod possession {
    /// 루즈볼 획득 후보 반경 (strict <)
    pub const CAPTURE_RADIUS_M: f32 = 3.0;

    /// 가장 가까운 후보가 이 거리 안일 때만 경합 규칙 적용
    pub const CONTEST_RADIUS_M: f32 = 1.5;

    /// 상대 팀 후보가 최근접 거리 + margin 안이면 상대가 가져간다
    pub const INTERCEPT_MARGIN_M: f32 = 0.5;
}

// ============================================================
// Kicks (pass / clear)
// ============================================================
pub mod kick {
    pub const PASS_SPEED_MEAN: f32 = 15.0;
    pub const PASS_SPEED_SIGMA: f32 = 2.0;
    pub const PASS_SPEED_MAX: f32 = 20.0;

    /// 패스 목표 좌표 오차 sigma (m)
    pub const PASS_TARGET_SIGMA_M: f32 = 0.3;

    /// 클리어는 가까운 touchline 쪽으로 x ± 25m
    pub const CLEAR_LATERAL_M: f32 = 25.0;
    pub const CLEAR_SPEED: f32 = 15.0;
}

// ============================================================
// Shooting
// ============================================================
pub mod shot {
    /// 유효 슈팅 확률
    pub const ON_TARGET_PROB: f64 = 0.6;
    /// 유효 슈팅 중 득점 확률
    pub const CONVERSION_ON_TARGET: f64 = 0.15;
}
