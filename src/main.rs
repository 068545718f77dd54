use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

// Use mimalloc as the global allocator for the binary (non-Windows only)
#[cfg(not(windows))]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod channel;
mod error;
mod netns;
mod probe;
mod protocol;
mod session;

// Test helpers for binary tests
#[cfg(any(test, feature = "test-internals"))]
mod test_helpers;

use probe::{ProbeOptions, run_probe};
use protocol::DEFAULT_RECV_BUF_LEN;

#[derive(Parser, Debug)]
#[command(
    name = "nldump",
    author,
    version,
    disable_version_flag = true,
    about = "Dump the kernel link table over rtnetlink, before and after entering a fresh network namespace"
)]
struct Cli {
    /// Print the version and exit
    #[arg(short = 'v', long = "version", action = clap::ArgAction::SetTrue)]
    print_version: bool,

    /// Receive buffer size in bytes; one reply datagram must fit
    #[arg(long = "recv-buffer", default_value_t = DEFAULT_RECV_BUF_LEN)]
    recv_buffer: usize,

    /// Dump twice without switching namespaces (needs no privileges)
    #[arg(long = "skip-unshare")]
    skip_unshare: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Cli::parse();
    if args.print_version {
        let version = env!("CARGO_PKG_VERSION");
        let git_hash = env!("GIT_HASH");
        let git_branch = env!("GIT_BRANCH");
        let git_dirty = env!("GIT_DIRTY");

        println!(
            "{} ({}@{}{}) [{}]",
            version,
            git_branch,
            git_hash,
            git_dirty,
            env!("CARGO_PKG_NAME")
        );
        return Ok(());
    }

    let opts = ProbeOptions {
        recv_buf_len: args.recv_buffer,
        skip_unshare: args.skip_unshare,
    };
    run_probe(&opts).context("nldump failed")
}
