//! Emulated Camera Callback Dispatch CLI
//!
//! Command-line demonstration that wires a synthetic camera to the
//! callback notifier and streams frames through it.

use clap::Parser;
use emucam_notify::{
    CallbackNotifier, CameraCallbacks, FileConfig, MessageFlags, SyntheticCamera,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "emucam-notify")]
#[command(about = "Stream synthetic camera frames through the callback notifier", long_about = None)]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to stream (overrides the configuration)
    #[arg(long)]
    frames: Option<u32>,

    /// Video recording frame rate cap in fps (overrides the configuration)
    #[arg(long)]
    fps: Option<i32>,

    /// Keep streaming until interrupted with Ctrl-C
    #[arg(long)]
    continuous: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Emulated Camera Notifier v{}", emucam_notify::VERSION);
    info!("This is a demonstration using a synthetic camera source");

    // Load configuration, then apply command line overrides
    let mut config = match args.config {
        Some(ref path) => match FileConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };
    if let Some(frames) = args.frames {
        config.run.frame_count = frames;
    }
    if let Some(fps) = args.fps {
        config.recording.fps = fps;
    }
    if args.continuous {
        config.run.continuous = true;
    }

    let mut camera = SyntheticCamera::new();
    if let Err(e) = camera.open(&config.capture) {
        eprintln!("Failed to open camera: {}", e);
        std::process::exit(1);
    }

    // Wire up the notifier with counting handlers
    let notifier = CallbackNotifier::new();
    let video_frames = Arc::new(AtomicUsize::new(0));
    let preview_frames = Arc::new(AtomicUsize::new(0));

    let videos = video_frames.clone();
    let previews = preview_frames.clone();
    notifier.set_callbacks(
        CameraCallbacks::new()
            .with_notify(|kind, ext1, ext2| {
                warn!("Notification {}: ext1={}, ext2={}", kind, ext1, ext2);
            })
            .with_data(move |_kind, _buffer, _index| {
                previews.fetch_add(1, Ordering::SeqCst);
            })
            .with_timestamped_data(move |timestamp, _kind, buffer, _index| {
                videos.fetch_add(1, Ordering::SeqCst);
                debug!("Video frame at {} ns ({} bytes)", timestamp, buffer.len());
            })
            .with_heap_allocator(),
    );

    notifier.enable_message(
        MessageFlags::ERROR | MessageFlags::PREVIEW_FRAME | MessageFlags::VIDEO_FRAME,
    );
    if let Err(e) = notifier.enable_video_recording(config.recording.fps) {
        eprintln!("Failed to enable video recording: {}", e);
        std::process::exit(1);
    }

    // Ctrl-C flips the flag; the loop notices on its next iteration
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || r.store(false, Ordering::SeqCst)) {
        warn!("Failed to install Ctrl-C handler: {}", e);
    }

    info!(
        "Streaming at {} fps source rate with a {} fps recording cap...",
        config.capture.source_fps, config.recording.fps
    );

    // Stream frames through the notifier
    let pacing = Duration::from_nanos(config.capture.frame_interval_ns() as u64);
    let mut streamed: u64 = 0;

    while running.load(Ordering::SeqCst) {
        if !config.run.continuous && streamed >= u64::from(config.run.frame_count) {
            break;
        }

        let frame = match camera.capture() {
            Ok(f) => f,
            Err(e) => {
                warn!("Frame capture failed: {}", e);
                break;
            }
        };
        notifier.on_next_frame_available(frame.data(), frame.timestamp(), &camera);
        streamed += 1;

        // Exercise the error path once, halfway through a bounded run
        if !config.run.continuous && streamed == u64::from(config.run.frame_count) / 2 {
            notifier.on_device_error(-1);
        }

        if config.run.continuous {
            std::thread::sleep(pacing);
        }
    }

    notifier.disable_video_recording();
    notifier.cleanup();
    camera.close();

    info!(
        "Streamed {} frames: {} video deliveries, {} preview deliveries",
        streamed,
        video_frames.load(Ordering::SeqCst),
        preview_frames.load(Ordering::SeqCst)
    );

    println!(
        "{} frames in, {} video out, {} preview out",
        streamed,
        video_frames.load(Ordering::SeqCst),
        preview_frames.load(Ordering::SeqCst)
    );

    info!("Done.");
}
