/// SNES core CLI
///
/// Provides subcommands for running ROMs headlessly and inspecting their headers.
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use core_lib::cpu::RESET_VECTOR;
use core_lib::mmu::Memory;
use core_lib::ppu::framebuffer_to_ppm;
use core_lib::{Button, Emulator, EmulatorConfig, MemoryBus};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug output globally (for troubleshooting and development)
    #[arg(long, global = true)]
    debug: bool,
    /// Enable verbose output globally (per-instruction trace logs)
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a ROM headlessly for a number of frames
    Run {
        /// Path to the ROM file
        #[arg(value_name = "ROM_PATH")]
        rom_path: PathBuf,
        /// Frames to emulate
        #[arg(long, default_value_t = 1)]
        frames: u32,
        /// CPU instructions per PPU line
        #[arg(long, default_value_t = core_lib::config::DEFAULT_CPU_STEPS_PER_TICK)]
        steps_per_tick: usize,
        /// Buttons held for the whole run, comma separated (e.g. "start,a")
        #[arg(long, value_delimiter = ',')]
        press: Vec<Button>,
        /// Write the last frame as a binary PPM image
        #[arg(long, value_name = "PATH")]
        dump: Option<PathBuf>,
        /// Sleep between frames to hold ~60 frames per second
        #[arg(long, default_value_t = false)]
        paced: bool,
        /// Frame period used by `--paced`, in milliseconds
        #[arg(long, value_name = "MS", default_value_t = 16)]
        frame_interval_ms: u64,
    },
    /// Print ROM layout and internal header information
    Info {
        /// Path to the ROM file
        #[arg(value_name = "ROM_PATH")]
        rom_path: PathBuf,
    },
}

/// Options for the `run` subcommand
struct RunOptions<'a> {
    frames: u32,
    steps_per_tick: usize,
    press: &'a [Button],
    dump: Option<&'a Path>,
    paced: bool,
    frame_interval: Duration,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);
    match &cli.command {
        Commands::Run {
            rom_path,
            frames,
            steps_per_tick,
            press,
            dump,
            paced,
            frame_interval_ms,
        } => run_rom(
            rom_path,
            &RunOptions {
                frames: *frames,
                steps_per_tick: *steps_per_tick,
                press,
                dump: dump.as_deref(),
                paced: *paced,
                frame_interval: Duration::from_millis(*frame_interval_ms),
            },
        ),
        Commands::Info { rom_path } => print_info(rom_path),
    }
}

/// `--verbose` selects trace, `--debug` selects debug, otherwise `RUST_LOG` or info.
fn init_tracing(debug: bool, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_rom(rom_path: &Path) -> anyhow::Result<Vec<u8>> {
    if !rom_path.exists() {
        bail!("ROM file not found: {}", rom_path.display());
    }
    std::fs::read(rom_path)
        .with_context(|| format!("Failed to read ROM from {}", rom_path.display()))
}

/// Load a ROM, hold the requested buttons, run the frames and report the CPU state.
fn run_rom(rom_path: &Path, opts: &RunOptions<'_>) -> anyhow::Result<()> {
    let rom_data = read_rom(rom_path)?;

    let config = EmulatorConfig::default()
        .with_cpu_steps_per_tick(opts.steps_per_tick)
        .with_frame_interval(opts.frame_interval);
    let mut emu = Emulator::new(config);
    emu.load_rom(&rom_data)
        .with_context(|| format!("Failed to load ROM from {}", rom_path.display()))?;
    info!(
        path = %rom_path.display(),
        banks = emu.memory.rom_bank_count(),
        "ROM loaded"
    );

    for &button in opts.press {
        emu.press(button);
    }
    if !opts.press.is_empty() {
        debug!(buttons = ?emu.controller.pressed_buttons(), "holding buttons");
    }

    let mut completed = 0u32;
    for frame in 0..opts.frames {
        let started = Instant::now();
        if !emu.run_frame() {
            warn!(frame, "frame did not complete");
            break;
        }
        completed += 1;
        if opts.paced {
            if let Some(rest) = config.frame_interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    let regs = &emu.cpu.regs;
    println!("frames: {completed}");
    println!("cycles: {}", emu.cpu.cycles());
    println!(
        "PC={:02X}:{:04X} A={:04X} X={:04X} Y={:04X} SP={:04X} DB={:02X} P={:02X} E={}",
        regs.pb,
        regs.pc,
        regs.a,
        regs.x,
        regs.y,
        regs.sp,
        regs.db,
        regs.p.bits(),
        u8::from(regs.e)
    );

    if let Some(path) = opts.dump {
        std::fs::write(path, framebuffer_to_ppm(emu.frame_buffer()))
            .with_context(|| format!("Failed to write frame to {}", path.display()))?;
        info!(path = %path.display(), "frame written");
    }
    Ok(())
}

fn print_info(rom_path: &Path) -> anyhow::Result<()> {
    let rom_data = read_rom(rom_path)?;
    let mut mem = Memory::new();
    mem.load_rom(&rom_data)
        .with_context(|| format!("Failed to load ROM from {}", rom_path.display()))?;
    let rom = mem.rom();

    println!("size: {} bytes", rom.len());
    println!("banks: {}", rom.bank_count());
    println!(
        "copier header: {}",
        if rom.had_copier_header() { "yes" } else { "no" }
    );
    println!("reset vector: {:#06X}", mem.read_word(RESET_VECTOR));

    match rom.header() {
        Ok(header) => {
            println!("title: {}", header.title);
            println!(
                "map mode: {:?}{}",
                header.map_mode,
                if header.fast_rom { " (FastROM)" } else { "" }
            );
            println!("cartridge type: {:#04X}", header.cartridge_type);
            println!("rom size: {} KiB", header.rom_size_kib);
            println!("sram size: {} KiB", header.sram_size_kib);
            println!("region: {:?}", header.region);
            println!("version: 1.{}", header.version);
            println!(
                "checksum: {:#06X} (complement {:#06X}, {})",
                header.checksum,
                header.checksum_complement,
                if header.checksum_pair_valid() {
                    "consistent"
                } else {
                    "inconsistent"
                }
            );
        }
        Err(err) => println!("header: unavailable ({err})"),
    }
    Ok(())
}
