use std::path::PathBuf;
use std::process::Command;

fn git(args: &[&str], workspace_root: &std::path::Path) -> String {
    Command::new("git")
        .args(args)
        .current_dir(workspace_root)
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                Some(String::from_utf8_lossy(&o.stdout).trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // console/ sits directly below the workspace root
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir).to_path_buf();

    let hash = git(&["rev-parse", "HEAD"], &workspace_root);
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"], &workspace_root);
    let tag = git(&["describe", "--tags", "--abbrev=0"], &workspace_root);

    let build_time = match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        Ok(dur) => format!("{}", dur.as_secs()),
        Err(_) => "unknown".to_string(),
    };

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", hash);
    println!("cargo:rustc-env=GIT_BRANCH={}", branch);
    println!("cargo:rustc-env=GIT_TAG={}", tag);
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
    println!("cargo:rustc-env=CARGO_CFG_TARGET_OS={}", target_os);
}
