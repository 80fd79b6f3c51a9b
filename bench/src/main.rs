use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use framebuf::{BlitOptions, PixelFormat, Quadrants, Surface};
use serde_json::json;
use sha2::Digest as _;

#[derive(Clone, Debug)]
struct BenchArgs {
    iterations: u32,
    warmup: u32,
    repeats: u32,
    only: Option<PixelFormat>,
    out_json: Option<PathBuf>,
}

/// A display configuration worth timing.
#[derive(Clone, Copy, Debug)]
struct Profile {
    label: &'static str,
    width: u16,
    height: u16,
    format: PixelFormat,
    ink: u32,
}

const PROFILES: &[Profile] = &[
    Profile {
        label: "ssd1306 oled",
        width: 128,
        height: 64,
        format: PixelFormat::MonoVlsb,
        ink: 1,
    },
    Profile {
        label: "horizontal mono",
        width: 128,
        height: 64,
        format: PixelFormat::MonoHlsb,
        ink: 1,
    },
    Profile {
        label: "color tft",
        width: 64,
        height: 64,
        format: PixelFormat::Rgb565,
        ink: 0xF800,
    },
    Profile {
        label: "grayscale",
        width: 128,
        height: 128,
        format: PixelFormat::Gs8,
        ink: 0xC0,
    },
    Profile {
        label: "e-paper gs2",
        width: 128,
        height: 64,
        format: PixelFormat::Gs2Hmsb,
        ink: 2,
    },
    Profile {
        label: "oled gs4",
        width: 128,
        height: 64,
        format: PixelFormat::Gs4Hmsb,
        ink: 0xA,
    },
];

type Op = fn(&mut Surface<Vec<u8>>, &Surface<Vec<u8>>, &Profile) -> anyhow::Result<()>;

const OPS: &[(&str, Op)] = &[
    ("fill", |fb, _, p| {
        fb.fill(p.ink);
        Ok(())
    }),
    ("hline", |fb, _, p| {
        fb.hline(0, i32::from(p.height) / 2, i32::from(p.width), p.ink);
        Ok(())
    }),
    ("vline", |fb, _, p| {
        fb.vline(i32::from(p.width) / 2, 0, i32::from(p.height), p.ink);
        Ok(())
    }),
    ("pixel_set_x100", |fb, _, p| {
        for i in 0..100 {
            fb.set_pixel(
                (i * 37) % i32::from(p.width),
                (i * 23) % i32::from(p.height),
                p.ink,
            );
        }
        Ok(())
    }),
    ("pixel_get_x100", |fb, _, p| {
        let mut total = 0u32;
        for i in 0..100 {
            total = total.wrapping_add(fb.get_pixel(
                (i * 37) % i32::from(p.width),
                (i * 23) % i32::from(p.height),
            ));
        }
        std::hint::black_box(total);
        Ok(())
    }),
    ("blit_8x8", |fb, sprite, p| {
        fb.blit(sprite, i32::from(p.width) / 2 - 4, i32::from(p.height) / 2 - 4)
            .context("blit sprite")?;
        Ok(())
    }),
    ("blit_8x8_key", |fb, sprite, p| {
        fb.blit_with(
            sprite,
            i32::from(p.width) / 2 - 4,
            i32::from(p.height) / 2 - 4,
            BlitOptions::default().with_key(0),
        )
        .context("blit keyed sprite")?;
        Ok(())
    }),
    ("fill_rect_clipped", |fb, _, p| {
        fb.fill_rect(-3, 5, i32::from(p.width) - 2, 20, p.ink);
        Ok(())
    }),
    ("text_16", |fb, _, p| {
        fb.text("0123456789abcdef", 0, 8, p.ink);
        Ok(())
    }),
    ("ellipse_fill", |fb, _, p| {
        fb.ellipse(
            i32::from(p.width) / 2,
            i32::from(p.height) / 2,
            i32::from(p.width) / 3,
            i32::from(p.height) / 3,
            p.ink,
            true,
            Quadrants::ALL,
        );
        Ok(())
    }),
    ("scroll", |fb, _, _| {
        fb.scroll(1, 1);
        Ok(())
    }),
];

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;
    if args.iterations == 0 || args.repeats == 0 {
        anyhow::bail!("--iterations and --repeats must be > 0");
    }

    eprintln!(
        "bench: {repeats} run(s) x {iterations} iteration(s) ({profile} build)",
        repeats = args.repeats,
        iterations = args.iterations,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
    );

    let mut summary = Vec::new();
    for profile in PROFILES
        .iter()
        .filter(|p| args.only.is_none_or(|f| f == p.format))
    {
        summary.push(run_profile(&args, profile)?);
    }

    if let Some(path) = &args.out_json {
        let doc = json!({ "repeats": args.repeats, "iterations": args.iterations, "profiles": summary });
        std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("write summary '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn run_profile(args: &BenchArgs, p: &Profile) -> anyhow::Result<serde_json::Value> {
    let mut fb = Surface::alloc(p.width, p.height, p.format)?;
    let mut sprite = Surface::alloc(8, 8, p.format)?;
    sprite.fill(p.ink);
    sprite.fill_rect(2, 2, 4, 4, 0);

    eprintln!(
        "\n{label}: {format} {w}x{h}, {len} bytes (p50/p90/p99 per call)",
        label = p.label,
        format = p.format,
        w = p.width,
        h = p.height,
        len = fb.as_bytes().len(),
    );

    let mut ops = Vec::new();
    for &(name, op) in OPS {
        for _ in 0..args.warmup {
            op(&mut fb, &sprite, p).with_context(|| format!("warm up {name}"))?;
        }
        let mut runs = Vec::with_capacity(args.repeats as usize);
        for _ in 0..args.repeats {
            let t0 = Instant::now();
            for _ in 0..args.iterations {
                op(&mut fb, &sprite, p)?;
            }
            runs.push(t0.elapsed() / args.iterations);
        }
        let (p50, p90, p99) = percentiles(&mut runs);
        eprintln!(
            "  {name:18} p50={p50:>10}  p90={p90:>10}  p99={p99:>10}",
            p50 = fmt_us(p50),
            p90 = fmt_us(p90),
            p99 = fmt_us(p99)
        );
        ops.push(json!({
            "op": name,
            "p50_ns": p50.as_nanos() as u64,
            "p90_ns": p90.as_nanos() as u64,
            "p99_ns": p99.as_nanos() as u64,
        }));
    }

    // The final buffer is deterministic for a given args set.
    let digest = sha256_hex(fb.as_bytes());
    eprintln!("  buffer sha256 {digest}");
    Ok(json!({
        "label": p.label,
        "format": p.format,
        "width": p.width,
        "height": p.height,
        "sha256": digest,
        "ops": ops,
    }))
}

fn percentiles(v: &mut [Duration]) -> (Duration, Duration, Duration) {
    fn p(v: &[Duration], p: f64) -> Duration {
        if v.is_empty() {
            return Duration::ZERO;
        }
        let n = v.len();
        let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
        v[rank - 1]
    }

    v.sort_by_key(|d| d.as_nanos());
    (p(v, 0.50), p(v, 0.90), p(v, 0.99))
}

fn fmt_us(d: Duration) -> String {
    format!("{:.2}us", d.as_secs_f64() * 1e6)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        iterations: 200,
        warmup: 10,
        repeats: 50,
        only: None,
        out_json: None,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--iterations" => out.iterations = parse_u32(args.next(), "--iterations")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--only" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing value for --only (a format name)"))?;
                out.only = Some(
                    v.parse::<PixelFormat>()
                        .with_context(|| format!("parse --only value '{v}'"))?,
                );
            }
            "--out-json" => {
                out.out_json = Some(PathBuf::from(args.next().ok_or_else(|| {
                    anyhow::anyhow!("missing value for --out-json (expected a path)")
                })?))
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"framebuf-bench

Times drawing operations on typical small-display surfaces and reports
p50/p90/p99 per call.

Usage:
  cargo run -q --release
  cargo run -q --release -- --only mono_vlsb --repeats 200
  cargo run -q --release -- --out-json target/bench.json

Args:
  --iterations N   calls per timed run (default 200)
  --warmup N       untimed calls per op before timing (default 10)
  --repeats N      timed runs per op (default 50)
  --only FORMAT    restrict to one pixel format (e.g. rgb565, gs4_hmsb)
  --out-json PATH  write a JSON summary
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}
