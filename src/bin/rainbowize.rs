use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rainbowize", version)]
struct Cli {
    /// Log pipeline diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the animated rainbow SVG and its hex payload.
    Compose(ComposeArgs),
    /// Write the pixelated 400x400-bounded preview as a PNG.
    Preview(PreviewArgs),
    /// Render one moment of the animation as a PNG.
    Frame(FrameArgs),
    /// Print the eth_sendTransaction JSON-RPC request that inscribes the SVG.
    Tx(TxArgs),
    /// Recover the SVG markup from a hex payload.
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
struct ColorArgs {
    /// Seven comma-separated #rrggbb colors.
    #[arg(long, conflicts_with = "palette")]
    colors: Option<rainbowize::GradientColors>,

    /// JSON palette file: {"colors": [seven #rrggbb strings]}.
    #[arg(long)]
    palette: Option<PathBuf>,
}

impl ColorArgs {
    fn resolve(&self) -> anyhow::Result<rainbowize::GradientColors> {
        if let Some(colors) = self.colors {
            return Ok(colors);
        }
        match &self.palette {
            Some(path) => Ok(rainbowize::Palette::load(path)?.colors),
            None => Ok(rainbowize::GradientColors::default()),
        }
    }
}

#[derive(Args, Debug)]
struct ComposeArgs {
    /// Input raster image.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    colors: ColorArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the uppercase hex payload here.
    #[arg(long)]
    hex_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Input raster image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Input raster image.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    colors: ColorArgs,

    /// Seconds into the 7s cycle.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct TxArgs {
    /// Input raster image.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    colors: ColorArgs,

    /// Sending (and receiving) account.
    #[arg(long)]
    from: String,

    /// Write the request here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// File holding the hex payload (optionally 0x-prefixed).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Tx(args) => cmd_tx(args),
        Command::Decode(args) => cmd_decode(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_upload(path: &Path) -> anyhow::Result<rainbowize::UploadedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let upload = rainbowize::decode_upload(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(upload)
}

fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn write_png(path: &Path, img: &image::RgbaImage) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn compose(
    in_path: &Path,
    colors: &ColorArgs,
) -> anyhow::Result<(rainbowize::ComposedSvg, rainbowize::EncodedPayload)> {
    let upload = read_upload(in_path)?;
    let colors = colors.resolve()?;
    let svg = rainbowize::compose_rainbow(&upload, &colors);
    let payload = rainbowize::encode_payload(svg.markup())?;
    Ok((svg, payload))
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let (svg, payload) = compose(&args.in_path, &args.colors)?;
    write_output(&args.out, svg.markup())?;
    if let Some(hex_out) = &args.hex_out {
        write_output(hex_out, payload.as_str())?;
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let upload = read_upload(&args.in_path)?;
    let preview = rainbowize::render_preview(&upload)?;
    eprintln!(
        "preview {:.2}x{:.2} (scale {:.4})",
        preview.dims.width, preview.dims.height, preview.dims.scale
    );
    write_png(&args.out, &preview.image)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let upload = read_upload(&args.in_path)?;
    let colors = args.colors.resolve()?;
    let frame = rainbowize::render_still(&upload, &colors, args.time)?;
    write_png(&args.out, &frame)
}

fn cmd_tx(args: TxArgs) -> anyhow::Result<()> {
    let (_, payload) = compose(&args.in_path, &args.colors)?;
    let tx = rainbowize::TransactionRequest::self_inscription(&args.from, &payload);
    let json = serde_json::to_string_pretty(&tx.to_rpc_request(1))?;
    match &args.out {
        Some(path) => write_output(path, json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let hex = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read payload '{}'", args.in_path.display()))?;
    let markup = rainbowize::decode_payload(&hex)?;
    let bytes = rainbowize::latin1_bytes(&markup)?;
    write_output(&args.out, bytes)
}
