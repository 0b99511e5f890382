//! Host-side helper: `cargo run` compiles the WASM bundle into `static/pkg`
//! and serves the portfolio from `static/` for local preview.

use std::process::{Command, Stdio};
use std::{thread, time::Duration};

fn main() {
    println!("Building WASM pkg ...");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors.");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found in PATH. Serving whatever is already in static/pkg; \
                 install it from https://rustwasm.github.io/wasm-pack/ for a fresh build."
            );
        }
    }

    println!("Serving the portfolio at http://127.0.0.1:8000 ...");
    let _server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Keep process alive while the server runs.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
