use crate::buffer::codec::decode_image;
use crate::buffer::pixel_buffer::PixelBuffer;
use crate::buffer::raster::Raster;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::GlitchResult;
use crate::foundation::rng::{GlitchRng, frame_seed, time_seed};
use crate::pipeline::config::GlitchConfig;
use crate::pipeline::plan::EffectPlan;
use crate::pipeline::rules::{DriftState, FrameRules, RenderMode};

/// Renders glitched frames from one decoded source.
///
/// The source is decoded and the plan resolved once; every frame starts from a fresh copy of the
/// source and a freshly seeded RNG.
#[derive(Clone, Debug)]
pub struct Glitcher {
    source: Raster,
    plan: EffectPlan,
    config: GlitchConfig,
}

impl Glitcher {
    /// Decode `source_bytes` (PNG or JPEG) and resolve `config`.
    pub fn new(source_bytes: &[u8], config: GlitchConfig) -> GlitchResult<Self> {
        let source = decode_image(source_bytes)?;
        Self::from_raster(source, config)
    }

    /// Build around an already decoded source.
    pub fn from_raster(source: Raster, config: GlitchConfig) -> GlitchResult<Self> {
        let plan = EffectPlan::build(&config)?;
        Ok(Self {
            source,
            plan,
            config,
        })
    }

    /// The decoded source.
    pub fn source(&self) -> &Raster {
        &self.source
    }

    /// The resolved effect plan.
    pub fn plan(&self) -> &EffectPlan {
        &self.plan
    }

    /// The run configuration.
    pub fn config(&self) -> &GlitchConfig {
        &self.config
    }

    /// Render one frame with its own drift state.
    pub fn render_frame(
        &self,
        frame: FrameIndex,
        mode: RenderMode,
        seed: u64,
    ) -> GlitchResult<PixelBuffer> {
        self.render_frame_with_drift(frame, mode, seed, &mut DriftState::default())
    }

    /// Render the still image: frame 1 seeded with `config.seed`, or wall-clock time.
    pub fn render_still(&self) -> GlitchResult<PixelBuffer> {
        let seed = self.config.seed.unwrap_or_else(time_seed);
        self.render_frame(FrameIndex::STILL, RenderMode::Still, seed)
    }

    /// Render `gif_frames` frames into `sink`, in index order.
    ///
    /// Frame `n` is seeded from the run seed and `n`; streak drift accumulates across frames.
    pub fn render_animation(&self, sink: &mut dyn FrameSink) -> GlitchResult<()> {
        let run_seed = self.config.seed.unwrap_or_else(time_seed);
        sink.begin(SinkConfig {
            width: self.source.width(),
            height: self.source.height(),
            frame_count: self.config.gif_frames,
            delay_cs: self.config.gif_delay,
        })?;

        let mut drift = DriftState::default();
        for n in 0..u64::from(self.config.gif_frames) {
            let frame = FrameIndex(n);
            let buf = self.render_frame_with_drift(
                frame,
                RenderMode::Animation,
                frame_seed(run_seed, frame),
                &mut drift,
            )?;
            sink.push_frame(frame, &buf.output)?;
        }
        sink.end()
    }

    #[tracing::instrument(skip(self, drift), fields(effects = self.plan.effects().len()))]
    fn render_frame_with_drift(
        &self,
        frame: FrameIndex,
        mode: RenderMode,
        seed: u64,
        drift: &mut DriftState,
    ) -> GlitchResult<PixelBuffer> {
        let mut buf = PixelBuffer::from_source(self.source.clone()).with_format(self.config.format);
        buf.copy_source_to_output()?;
        let mut rng = GlitchRng::new(seed);
        let rules = FrameRules::new(mode, frame, self.plan.overlay_every_nth());

        for base in self.plan.effects() {
            match rules.resolve(base, drift, &mut rng) {
                Some(effect) => {
                    tracing::info!(effect = %effect.kind(), "applying");
                    effect.apply(&mut buf, &mut rng)?;
                }
                None => tracing::debug!(effect = %base.kind(), "skipped for this frame"),
            }
        }
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/render.rs"]
mod tests;
