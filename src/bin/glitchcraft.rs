use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use glitchcraft::{
    Channel, GifSink, GlitchConfig, Glitcher, OutputFormat, PngSequenceSink, sorted_frame_paths,
};

/// Glitch an image, or build a looping GIF from many glitched variants of it.
#[derive(Parser, Debug)]
#[command(name = "glitchcraft", version)]
struct Cli {
    /// Input PNG or JPEG.
    #[arg(short, long)]
    input: PathBuf,

    /// Output path (default `./glitched.png`, or `./glitched.gif` with `--gif`).
    #[arg(long, visible_alias = "out")]
    output: Option<PathBuf>,

    /// JSON configuration; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated effect order.
    #[arg(short = 'o', long)]
    order: Option<String>,

    /// Run seed.
    #[arg(long, visible_alias = "se")]
    seed: Option<u64>,

    /// Number of streaks.
    #[arg(long, visible_alias = "sa")]
    streak_amount: Option<u32>,

    /// Streak length; negative runs to the image edge.
    #[arg(long, visible_alias = "sw", allow_negative_numbers = true)]
    streak_width: Option<i32>,

    /// Streak toward the left.
    #[arg(long, visible_aliases = ["sd", "streak-direction"])]
    streak_left: bool,

    /// Noise tint (`#RRGGBB` or `#RGB`).
    #[arg(short = 'n', long)]
    noise_color: Option<String>,

    /// Rotate channels left instead of right.
    #[arg(long, visible_aliases = ["scd", "shift-channel-direction"])]
    shift_channel_left: bool,

    /// Channel to boost.
    #[arg(long, visible_alias = "cb", value_enum)]
    color_boost: Option<ChannelArg>,

    /// Split band height.
    #[arg(long, visible_alias = "spw")]
    split_width: Option<i32>,

    /// Split horizontal shift.
    #[arg(long, visible_alias = "spl")]
    split_length: Option<i32>,

    /// Vertical split band width.
    #[arg(long, visible_alias = "vspw")]
    vertical_split_width: Option<i32>,

    /// Vertical split vertical shift.
    #[arg(long, visible_alias = "vspl")]
    vertical_split_length: Option<i32>,

    /// PNG used by `OverlayImage`.
    #[arg(long)]
    overlay_image: Option<PathBuf>,

    /// Apply `OverlayImage` on every Nth animation frame.
    #[arg(long)]
    overlay_every_nth_frame: Option<u64>,

    /// Fill corruptions with the channel-shifted source pixel.
    #[arg(long)]
    corruption_shift_color: bool,

    /// Still output container; inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Render an animated GIF.
    #[arg(short, long, conflicts_with = "frames_dir")]
    gif: bool,

    /// Delay between GIF frames, in hundredths of a second.
    #[arg(long, visible_alias = "gd")]
    gif_delay: Option<u16>,

    /// Number of animation frames.
    #[arg(long, visible_alias = "gf")]
    gif_frames: Option<u32>,

    /// Write animation frames as numbered PNGs into this directory.
    #[arg(long)]
    frames_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChannelArg {
    Red,
    Green,
    Blue,
}

impl From<ChannelArg> for Channel {
    fn from(c: ChannelArg) -> Self {
        match c {
            ChannelArg::Red => Channel::Red,
            ChannelArg::Green => Channel::Green,
            ChannelArg::Blue => Channel::Blue,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Png,
    Jpeg,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Jpeg => OutputFormat::Jpeg,
        }
    }
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None if self.gif => PathBuf::from("./glitched.gif"),
            None => PathBuf::from("./glitched.png"),
        }
    }

    fn load_config(&self) -> anyhow::Result<GlitchConfig> {
        let mut cfg = match &self.config {
            Some(path) => GlitchConfig::from_path(path)?,
            None => GlitchConfig::default(),
        };

        if let Some(v) = &self.order {
            cfg.order = v.clone();
        }
        if let Some(v) = self.seed {
            cfg.seed = Some(v);
        }
        if let Some(v) = self.streak_amount {
            cfg.streak_amount = v;
        }
        if let Some(v) = self.streak_width {
            cfg.streak_width = v;
        }
        cfg.streak_left |= self.streak_left;
        if let Some(v) = &self.noise_color {
            cfg.noise_color = v.clone();
        }
        cfg.shift_channel_left |= self.shift_channel_left;
        if let Some(v) = self.color_boost {
            cfg.color_boost = v.into();
        }
        if let Some(v) = self.split_width {
            cfg.split_width = v;
        }
        if let Some(v) = self.split_length {
            cfg.split_length = v;
        }
        if let Some(v) = self.vertical_split_width {
            cfg.vertical_split_width = v;
        }
        if let Some(v) = self.vertical_split_length {
            cfg.vertical_split_length = v;
        }
        if let Some(v) = &self.overlay_image {
            cfg.overlay_image = Some(v.clone());
        }
        if let Some(v) = self.overlay_every_nth_frame {
            cfg.overlay_every_nth_frame = v;
        }
        cfg.corruption_shift_color |= self.corruption_shift_color;
        if let Some(v) = self.gif_delay {
            cfg.gif_delay = v;
        }
        if let Some(v) = self.gif_frames {
            cfg.gif_frames = v;
        }
        match self.format {
            Some(f) => cfg.format = f.into(),
            None => {
                if let Some(f) = OutputFormat::from_path(&self.output_path()) {
                    cfg.format = f;
                }
            }
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let cfg = cli.load_config()?;
    let bytes =
        std::fs::read(&cli.input).with_context(|| format!("read input '{}'", cli.input.display()))?;
    let glitcher = Glitcher::new(&bytes, cfg)?;

    if let Some(dir) = &cli.frames_dir {
        let mut sink = PngSequenceSink::new(dir);
        glitcher.render_animation(&mut sink)?;
        let frames = sorted_frame_paths(dir)?;
        eprintln!("wrote {} frames to {}", frames.len(), dir.display());
        return Ok(());
    }

    let out = cli.output_path();
    create_parent_dir(&out)?;
    let file =
        File::create(&out).with_context(|| format!("create output '{}'", out.display()))?;

    if cli.gif {
        let mut sink = GifSink::new(BufWriter::new(file));
        glitcher.render_animation(&mut sink)?;
        if sink.dropped() > 0 {
            eprintln!("dropped {} frame(s)", sink.dropped());
        }
    } else {
        let buf = glitcher.render_still()?;
        buf.encode(BufWriter::new(file))?;
    }

    tracing::info!(path = %out.display(), "wrote output");
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
