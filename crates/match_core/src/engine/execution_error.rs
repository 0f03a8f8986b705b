//! # Execution Error
//!
//! **Intent + Error = Actual Result**
//!
//! 의도한 목표/속도에 정규분포 오차를 더한다. 모든 draw는 매치 RNG 하나에서 나온다.

use rand::Rng;
use rand_distr::StandardNormal;

use super::coordinates::{MeterPos, Pitch};
use super::physics_constants::{kick, player};

/// `N(mean, sigma)` sample
#[inline]
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f32, sigma: f32) -> f32 {
    let z: f32 = rng.sample(StandardNormal);
    mean + sigma * z
}

/// 패스 목표 + 축별 오차, 경기장 안으로 clamp
pub fn noisy_pass_target<R: Rng + ?Sized>(rng: &mut R, target: MeterPos, pitch: Pitch) -> MeterPos {
    let nx = gaussian(rng, 0.0, kick::PASS_TARGET_SIGMA_M);
    let ny = gaussian(rng, 0.0, kick::PASS_TARGET_SIGMA_M);
    pitch.clamp((target.0 + nx, target.1 + ny))
}

/// `min(20, N(15, 2))`, floored at 0
pub fn pass_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    gaussian(rng, kick::PASS_SPEED_MEAN, kick::PASS_SPEED_SIGMA).clamp(0.0, kick::PASS_SPEED_MAX)
}

/// 전술 목표 위치 jitter `(N(0, 3), N(0, 2))`
pub fn positioning_jitter<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    let jx = gaussian(rng, 0.0, player::JITTER_SIGMA_X);
    let jy = gaussian(rng, 0.0, player::JITTER_SIGMA_Y);
    (jx, jy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pass_speed_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..5000 {
            let s = pass_speed(&mut rng);
            assert!((0.0..=20.0).contains(&s));
        }
    }

    #[test]
    fn test_noisy_target_stays_on_pitch() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let pitch = Pitch::default();
        for _ in 0..2000 {
            let t = noisy_pass_target(&mut rng, (0.0, 52.0), pitch);
            assert!(pitch.contains(t));
        }
    }

    #[test]
    fn test_gaussian_mean_is_close() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let n = 20_000;
        let mean: f32 = (0..n).map(|_| gaussian(&mut rng, 15.0, 2.0)).sum::<f32>() / n as f32;
        assert!((mean - 15.0).abs() < 0.1, "mean = {mean}");
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(positioning_jitter(&mut a), positioning_jitter(&mut b));
    }
}
