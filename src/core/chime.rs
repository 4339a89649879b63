use super::constants::*;

/// A single decaying sine tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chime {
    pub frequency_hz: f32,
    pub peak_gain: f32,
    pub attack_sec: f64,
    pub length_sec: f64,
    pub floor_gain: f32,
}

impl Chime {
    pub fn new(frequency_hz: f32) -> Self {
        Self {
            frequency_hz,
            peak_gain: CHIME_PEAK_GAIN,
            attack_sec: CHIME_ATTACK_SEC,
            length_sec: CHIME_LENGTH_SEC,
            floor_gain: CHIME_FLOOR_GAIN,
        }
    }

    /// Envelope value `t` seconds after the tone starts: linear attack to
    /// the peak, exponential decay to the floor, silence once stopped.
    pub fn gain_at(&self, t: f64) -> f32 {
        if t <= 0.0 || t >= self.length_sec {
            return 0.0;
        }
        if t < self.attack_sec {
            return self.peak_gain * (t / self.attack_sec) as f32;
        }
        let k = (t - self.attack_sec) / (self.length_sec - self.attack_sec);
        let ratio = (self.floor_gain / self.peak_gain) as f64;
        self.peak_gain * ratio.powf(k) as f32
    }
}

/// Audio output capable of playing chimes. Opening may need a user gesture,
/// so it happens lazily.
pub trait ChimeBackend: Sized {
    type Error: std::fmt::Debug;

    fn open(master_volume: f32) -> Result<Self, Self::Error>;
    fn play(&self, chime: &Chime) -> Result<(), Self::Error>;

    /// Wake an output the browser suspended. Only meaningful inside a
    /// user gesture.
    fn resume(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub enum AudioSession<B> {
    Uninitialized,
    Ready(B),
}

impl<B> Default for AudioSession<B> {
    fn default() -> Self {
        AudioSession::Uninitialized
    }
}

impl<B: ChimeBackend> AudioSession<B> {
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, AudioSession::Ready(_))
    }

    /// Open the backend if it is not open yet. Safe to call on every
    /// gesture; a failed open is retried on the next one.
    pub fn init(&mut self) {
        if self.is_ready() {
            return;
        }
        match B::open(MASTER_VOLUME) {
            Ok(backend) => {
                log::info!("[audio] context ready");
                *self = AudioSession::Ready(backend);
            }
            Err(e) => log::warn!("[audio] open failed: {:?}", e),
        }
    }

    /// Play a chime; does nothing before `init`. Returns whether a tone
    /// was scheduled.
    pub fn play_chime(&self, frequency_hz: f32) -> bool {
        let AudioSession::Ready(backend) = self else {
            return false;
        };
        match backend.play(&Chime::new(frequency_hz)) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[audio] chime {:.0} Hz failed: {:?}", frequency_hz, e);
                false
            }
        }
    }

    /// Resume an open backend; does nothing before `init`.
    pub fn resume(&self) {
        if let AudioSession::Ready(backend) = self {
            if let Err(e) = backend.resume() {
                log::warn!("[audio] resume failed: {:?}", e);
            }
        }
    }

    pub fn backend(&self) -> Option<&B> {
        match self {
            AudioSession::Ready(b) => Some(b),
            AudioSession::Uninitialized => None,
        }
    }
}
