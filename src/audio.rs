use crate::core::chime::{Chime, ChimeBackend};
use wasm_bindgen::JsValue;
use web_sys as web;

/// WebAudio context plus the master bus every chime feeds into.
pub struct WebAudio {
    ctx: web::AudioContext,
    master_gain: web::GainNode,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, JsValue> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(e)
        }
    }
}

impl ChimeBackend for WebAudio {
    type Error = JsValue;

    fn open(master_volume: f32) -> Result<Self, JsValue> {
        let ctx = web::AudioContext::new()?;
        // Created inside a gesture handler, but some browsers still start suspended
        _ = ctx.resume();
        let master_gain = create_gain(&ctx, master_volume, "Master")?;
        master_gain.connect_with_audio_node(&ctx.destination())?;
        Ok(Self { ctx, master_gain })
    }

    fn resume(&self) -> Result<(), JsValue> {
        // The returned promise only reports state; the next gesture retries
        self.ctx.resume().map(|_| ())
    }

    // Each chime owns its oscillator and envelope gain; both are dropped by
    // the browser once the oscillator stops.
    fn play(&self, chime: &Chime) -> Result<(), JsValue> {
        let now = self.ctx.current_time();
        let src = web::OscillatorNode::new(&self.ctx)?;
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value_at_time(chime.frequency_hz, now)?;

        let env = create_gain(&self.ctx, 0.0, "Chime")?;
        let gain = env.gain();
        gain.set_value_at_time(0.0, now)?;
        gain.linear_ramp_to_value_at_time(chime.peak_gain, now + chime.attack_sec)?;
        gain.exponential_ramp_to_value_at_time(chime.floor_gain, now + chime.length_sec)?;

        src.connect_with_audio_node(&env)?;
        env.connect_with_audio_node(&self.master_gain)?;
        src.start()?;
        src.stop_with_when(now + chime.length_sec)?;
        Ok(())
    }
}
