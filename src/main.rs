#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod verifier;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use profiledesk_core::{DeviceLockVerifier, FixedVerifier, LocalStore, ProfileStore};
use tracing_subscriber::EnvFilter;

use crate::verifier::DialogVerifier;

/// Store opened at startup, shared with every component
static STORE: OnceLock<Arc<dyn ProfileStore>> = OnceLock::new();

/// Device-lock verifier chosen on the command line
static VERIFIER: OnceLock<Arc<dyn DeviceLockVerifier>> = OnceLock::new();

pub fn get_store() -> Option<Arc<dyn ProfileStore>> {
    STORE.get().cloned()
}

pub fn get_verifier() -> Arc<dyn DeviceLockVerifier> {
    VERIFIER
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(FixedVerifier::new(false)))
}

/// How device-lock changes are confirmed
#[derive(Clone, Copy, Debug, ValueEnum)]
enum VerifierMode {
    /// Ask through a system dialog
    Dialog,
    /// Accept every change (headless demos)
    Allow,
    /// Reject every change
    Deny,
}

/// Profile Desk - profile, addresses and security settings
#[derive(Parser, Debug)]
#[command(name = "profiledesk-desktop")]
#[command(about = "Profile Desk - manage your profile, saved addresses and app security")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: profiledesk-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Device-lock verification backend
    #[arg(long, value_enum, default_value = "dialog")]
    verifier: VerifierMode,
}

fn default_data_dir(name: Option<&str>) -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    match name {
        Some(name) => base.join(format!("profiledesk-{}", name)),
        None => base.join("profiledesk"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| default_data_dir(args.name.as_deref()));
    let db_path = data_dir.join("profile.redb");

    let store = LocalStore::open(&db_path)
        .with_context(|| format!("opening profile store at {}", db_path.display()))?;
    let _ = STORE.set(Arc::new(store));

    let verifier: Arc<dyn DeviceLockVerifier> = match args.verifier {
        VerifierMode::Dialog => Arc::new(DialogVerifier),
        VerifierMode::Allow => Arc::new(FixedVerifier::new(true)),
        VerifierMode::Deny => Arc::new(FixedVerifier::new(false)),
    };
    let _ = VERIFIER.set(verifier);

    tracing::info!(verifier = ?args.verifier, "Starting with data dir: {:?}", data_dir);

    let title = match &args.name {
        Some(name) => format!("Profile Desk - {}", name),
        None => "Profile Desk".to_string(),
    };

    // Phone-sized window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(420.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
