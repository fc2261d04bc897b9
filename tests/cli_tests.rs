//! CLI integration tests

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Binary with config, data and cache dirs pointed into `home`
fn terminal_sound_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_terminal-sound"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("XDG_CACHE_HOME", home.join("cache"))
        .env_remove("TERMINAL_SOUND_PATH")
        .env_remove("RUST_LOG");
    cmd
}

/// A file that passes for a sound; the `none` player never decodes it
fn fake_sound(home: &Path) -> String {
    let path = home.join("beep.wav");
    std::fs::write(&path, b"RIFF").unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    let output = terminal_sound_bin(home.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in ["generate", "run", "hook", "watch", "sound", "config", "--player"] {
        assert!(stdout.contains(expected), "missing {} in {}", expected, stdout);
    }
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    let output = terminal_sound_bin(home.path())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("terminal-sound"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let output = terminal_sound_bin(home.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("terminal-sound"));
    assert!(stdout.contains("config.toml"));
}

#[cfg(unix)]
#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    let status = terminal_sound_bin(home.path())
        .args(["config", "set", "cooldown", "1500ms"])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = terminal_sound_bin(home.path())
        .args(["config", "get", "cooldown"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1500ms");
}

#[test]
fn config_list_shows_every_key() {
    let home = TempDir::new().unwrap();
    let output = terminal_sound_bin(home.path())
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in ["enabled", "cooldown", "custom_sound_path", "error_keywords", "player"] {
        assert!(stdout.contains(key), "missing {} in {}", key, stdout);
    }
}

#[test]
fn generate_writes_decodable_wav() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("out/error.wav");

    let output = terminal_sound_bin(home.path())
        .args(["generate", "-o"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("26504 bytes"), "got: {}", stderr);

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.len(), 13_230);

    let samples: Vec<i16> = reader.into_samples().map(Result::unwrap).collect();
    assert_eq!(samples[0], 0);
    assert!(samples.iter().any(|s| *s > 15_000));
}

#[cfg(unix)]
#[test]
fn generate_defaults_to_data_dir() {
    let home = TempDir::new().unwrap();
    let status = terminal_sound_bin(home.path())
        .arg("generate")
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = terminal_sound_bin(home.path())
        .args(["sound", "path"])
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let resolved = Path::new(stdout.trim());
    assert!(resolved.ends_with("terminal-sound/sounds/error.wav"));
    assert!(resolved.exists());
}

#[test]
fn generate_custom_tone() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("low.wav");

    let status = terminal_sound_bin(home.path())
        .args([
            "generate",
            "--sample-rate",
            "8000",
            "--duration",
            "1",
            "--frequency",
            "220",
            "--fade",
            "0",
            "-o",
        ])
        .arg(&path)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().sample_rate, 8_000);
    assert_eq!(reader.len(), 8_000);
}

#[test]
fn hook_success_exits_zero() {
    let home = TempDir::new().unwrap();
    let status = terminal_sound_bin(home.path())
        .args(["hook", "0", "--player", "none"])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());
}

#[cfg(target_os = "linux")]
#[test]
fn hook_failure_still_exits_zero() {
    let home = TempDir::new().unwrap();
    let sound = fake_sound(home.path());
    let status = terminal_sound_bin(home.path())
        .args(["hook", "2", "--player", "none", "--sound", &sound])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());
    assert!(home.path().join("cache/terminal-sound/last-trigger").exists());
}

#[cfg(unix)]
#[test]
fn run_mirrors_child_exit_code() {
    let home = TempDir::new().unwrap();
    let sound = fake_sound(home.path());
    let output = terminal_sound_bin(home.path())
        .args(["run", "--player", "none", "--sound", &sound, "--", "sh", "-c", "echo hi; exit 3"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hi");
}

#[cfg(target_os = "linux")]
#[test]
fn run_success_exits_zero() {
    let home = TempDir::new().unwrap();
    let status = terminal_sound_bin(home.path())
        .args(["run", "--player", "none", "--", "true"])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());
    assert!(!home.path().join("cache/terminal-sound/last-trigger").exists());
}

#[test]
fn run_missing_program_exits_127() {
    let home = TempDir::new().unwrap();
    let sound = fake_sound(home.path());
    let output = terminal_sound_bin(home.path())
        .args(["run", "--player", "none", "--sound", &sound, "--", "terminal-sound-no-such-program"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(127));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to run"), "got: {}", stderr);
}

#[test]
fn watch_reads_until_eof() {
    use std::io::Write;
    use std::process::Stdio;

    let home = TempDir::new().unwrap();
    let sound = fake_sound(home.path());
    let mut child = terminal_sound_bin(home.path())
        .args(["watch", "--player", "none", "--sound", &sound])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to execute command");

    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"exit 0 ls\nexit 1 make\nsome output\n").unwrap();
    }

    assert!(child.wait().unwrap().success());
}

#[cfg(unix)]
#[test]
fn sound_set_and_clear() {
    let home = TempDir::new().unwrap();
    let sound = fake_sound(home.path());

    let output = terminal_sound_bin(home.path())
        .args(["sound", "set", &sound])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Custom sound set! File: beep.wav"), "got: {}", stderr);

    let output = terminal_sound_bin(home.path())
        .args(["config", "get", "custom_sound_path"])
        .output()
        .expect("Failed to execute command");
    assert!(String::from_utf8_lossy(&output.stdout).contains("beep.wav"));

    let status = terminal_sound_bin(home.path())
        .args(["sound", "clear"])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = terminal_sound_bin(home.path())
        .args(["config", "get", "custom_sound_path"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "(not set)");
}

#[test]
fn sound_test_with_env_override() {
    let home = TempDir::new().unwrap();
    let sound = fake_sound(home.path());

    let output = terminal_sound_bin(home.path())
        .env("TERMINAL_SOUND_PATH", &sound)
        .args(["sound", "test", "--player", "none"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Playing test sound..."), "got: {}", stderr);
}
