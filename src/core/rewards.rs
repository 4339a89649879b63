use super::constants::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Secret {
    CrystalClarity,
    SirenVoice,
}

impl Secret {
    pub fn message(self) -> &'static str {
        match self {
            Secret::CrystalClarity => "Secret Unlocked: Crystal Clarity",
            Secret::SirenVoice => "Secret Unlocked: Siren Voice",
        }
    }

    pub fn chime_hz(self) -> f32 {
        match self {
            Secret::CrystalClarity => REWARD_CRYSTAL_HZ,
            Secret::SirenVoice => REWARD_SIREN_HZ,
        }
    }

    /// Text for the toast that announces this secret.
    pub fn toast_text(self) -> String {
        format!("✨ {}", self.message())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardState {
    Armed,
    Fired,
}

/// One scroll-window reward with hysteresis: it fires on entering its
/// trigger window and re-arms only inside the (wider) reset band.
#[derive(Clone, Debug)]
pub struct Reward {
    pub secret: Secret,
    window: (f64, f64),
    state: RewardState,
}

impl Reward {
    pub fn new(secret: Secret, window: (f64, f64)) -> Self {
        Self {
            secret,
            window,
            state: RewardState::Armed,
        }
    }

    #[inline]
    pub fn state(&self) -> RewardState {
        self.state
    }

    #[inline]
    pub fn in_window(&self, p: f64) -> bool {
        p >= self.window.0 && p < self.window.1
    }

    /// Feed a progress sample; returns true exactly when the reward fires.
    pub fn observe(&mut self, p: f64) -> bool {
        match self.state {
            RewardState::Armed if self.in_window(p) => {
                self.state = RewardState::Fired;
                true
            }
            RewardState::Fired if in_reset_band(p) => {
                self.state = RewardState::Armed;
                false
            }
            _ => false,
        }
    }
}

#[inline]
pub fn in_reset_band(p: f64) -> bool {
    p < REWARD_RESET_BELOW || p > REWARD_RESET_ABOVE
}

#[derive(Clone, Debug)]
pub struct RewardSet {
    rewards: [Reward; 2],
}

impl Default for RewardSet {
    fn default() -> Self {
        Self {
            rewards: [
                Reward::new(Secret::CrystalClarity, REWARD_CRYSTAL_WINDOW),
                Reward::new(Secret::SirenVoice, REWARD_SIREN_WINDOW),
            ],
        }
    }
}

impl RewardSet {
    /// Secrets unlocked by this progress sample, in page order.
    pub fn observe(&mut self, p: f64) -> SmallVec<[Secret; 2]> {
        self.rewards
            .iter_mut()
            .filter_map(|r| r.observe(p).then_some(r.secret))
            .collect()
    }

    pub fn state_of(&self, secret: Secret) -> RewardState {
        self.rewards
            .iter()
            .find(|r| r.secret == secret)
            .map(|r| r.state())
            .unwrap_or(RewardState::Armed)
    }
}
