#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = blueprint_ui::run() {
        eprintln!("Blueprint3D failed: {err}");
        std::process::exit(1);
    }
}
