use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Every example binary shipped by the workspace, one per API call.
const EXAMPLE_COMMANDS: &[&str] = &[
    "create_topic",
    "delete_topic",
    "publish_message",
    "create_queue",
    "delete_queue",
    "send_message",
    "create_vault",
    "delete_vault",
    "create_file_system",
    "delete_file_system",
    "describe_file_systems",
    "create_bucket",
    "delete_bucket",
    "list_buckets",
    "put_encrypted_object",
];

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the AWS example-command workspace",
    long_about = "A unified CLI for running CI checks and packaging the\n\
                  single-call AWS example binaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks (fmt, clippy, tests, example builds)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build and package the example binaries into a distributable zip
    Package {
        /// Compilation target triple for the example binaries
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for binaries
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build every example binary
    Examples,
    /// Run check + examples
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn package_example_commands(target: &str, profile: BuildProfile) {
    ensure_rust_target_installed(target);

    step("Build example binaries");

    let mut cargo_args = vec![
        "build",
        "-p",
        "aws_demos_cli",
        "--bins",
        "--target",
        target,
    ];
    if let Some(flag) = profile.as_cargo_flag() {
        cargo_args.push(flag);
    }
    run_cargo(&cargo_args);

    step("Package example zip artifact");
    let profile_dir = profile.dir_name();
    let target_dir = Path::new("target").join(target).join(profile_dir);
    let dist_dir = Path::new("dist");
    fs::create_dir_all(dist_dir).expect("failed to create dist directory");

    let zip_path = dist_dir.join("aws_demo_commands.zip");
    package_commands_zip(&target_dir, target, &zip_path);

    eprintln!("\nPackaged artifact:\n- {}", zip_path.display());
}

fn ensure_rust_target_installed(target: &str) {
    let output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output();

    let output = match output {
        Ok(value) => value,
        Err(error) => {
            eprintln!(
                "warning: failed to run `rustup target list --installed` ({error}); continuing without target preflight"
            );
            return;
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "failed to list installed rust targets; run `rustup target list --installed` manually. details: {}",
            stderr.trim()
        );
    }

    let installed = String::from_utf8_lossy(&output.stdout);
    if !installed.lines().any(|line| line.trim() == target) {
        panic!(
            "required rust target `{target}` is not installed. install it with `rustup target add {target}` and re-run `cargo run -p xtask -- package`"
        );
    }
}

fn binary_name(bin_name: &str, target: &str) -> String {
    if target.contains("windows") {
        format!("{bin_name}.exe")
    } else {
        bin_name.to_string()
    }
}

fn package_commands_zip(target_dir: &Path, target: &str, zip_path: &Path) {
    let file = fs::File::create(zip_path).expect("failed to create commands zip");
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);

    for command in EXAMPLE_COMMANDS {
        let entry_name = binary_name(command, target);
        let binary_path = target_dir.join(&entry_name);
        if !binary_path.exists() {
            panic!("expected example binary at '{}'", binary_path.display());
        }

        let binary = fs::read(&binary_path).expect("failed to read example binary");
        zip.start_file(entry_name, options)
            .expect("failed to start entry in commands zip");
        zip.write_all(&binary)
            .expect("failed to write entry in commands zip");
    }

    zip.finish().expect("failed to finish commands zip");
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test aws_demos_core");
    run_cargo(&["test", "-p", "aws_demos_core"]);

    step("Test aws_demos_cli");
    run_cargo(&["test", "-p", "aws_demos_cli"]);
}

fn ci_examples() {
    step("Build example binaries");
    run_cargo(&["build", "-p", "aws_demos_cli", "--bins"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Examples => ci_examples(),
            CiJob::All => {
                ci_check();
                ci_examples();
            }
        },
        Commands::Package { target, profile } => {
            package_example_commands(&target, profile);
        }
    }
}
