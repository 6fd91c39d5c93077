// Binary entry point for the GUI application.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use matchday::paths::AppPaths;
use std::path::PathBuf;

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                if i + 1 < args.len() {
                    AppPaths::set_root_override(PathBuf::from(&args[i + 1]));
                    i += 1; // Also consumed the value
                }
            }
            _ => { /* Ignore unknown flags */ }
        }
        i += 1;
    }

    init_logging();
    matchday::gui::run()
}

// Logging goes to a file so it never fights the GUI; failure to set it up
// is not fatal.
fn init_logging() {
    let Ok(path) = AppPaths::get_log_file_path() else {
        return;
    };
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = simplelog::WriteLogger::init(
            log::LevelFilter::Info,
            simplelog::Config::default(),
            file,
        );
    }
}

fn print_help() {
    println!(
        "Matchday v{} - upcoming games for your favorite teams (GUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    matchday [--root <path>]");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Directory holding teams.txt, favorites.txt,");
    println!("                          events.txt and logos/ (default: current dir).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("Edit favorites.txt from any editor while the window is open; the view");
    println!("refreshes within a second.");
}
