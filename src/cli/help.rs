use crate::terminal::{box_bottom, box_line, box_opt, box_top};

pub fn print_help() {
    box_top(&format!("entropass {}", env!("CARGO_PKG_VERSION")));
    box_line("Readable random passwords for a minimum entropy target.");
    box_line("No adjacent repeats, at most two of a class in a row.");
    box_bottom();
    println!();

    box_top("Options");
    box_opt("-e, --entropy <bits>", "Minimum entropy per password (default 64)");
    box_opt("-n, --number <count>", "How many passwords to generate (default 10)");
    box_opt("    --symbols <set>", "Custom symbol class (printable ASCII, 2+ unique)");
    box_opt("-b, --board", "Copy all passwords to the clipboard, one per line");
    box_opt("-r, --random", "Copy one randomly chosen password to the clipboard");
    box_opt("-i, --interactive", "Key menu after the cards: 1-0 copy one, r random, a all");
    box_opt("-p, --plain", "Print passwords only, one per line");
    box_opt("-s, --saved", "Start from saved settings");
    box_opt("    --save", "Save the effective settings");
    box_opt("-q, --quiet", "Suppress warnings and confirmations");
    box_opt("-h, --help", "Show this help");
    box_opt("-v, --version", "Show version");
    box_bottom();
    println!();

    box_top("Environment");
    box_opt("ENTROPASS_SETTINGS", "Settings file path");
    box_opt("ENTROPASS_LOG", "Log filter, e.g. entropass=debug");
    box_bottom();
}
