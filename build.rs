//! Build script: embeds the version string via `COPY_FROM_LIST_VERSION`.

use std::process::Command;

fn main() {
    // Release builds pass COPY_FROM_LIST_VERSION; local builds use git describe.
    if let Ok(version) = std::env::var("COPY_FROM_LIST_VERSION") {
        println!("cargo:rustc-env=COPY_FROM_LIST_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=COPY_FROM_LIST_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=COPY_FROM_LIST_VERSION");
}
