use cjam_core::language::Language;

use crate::output;

/// Print each supported language with its aliases and the files `init` writes.
pub fn run() {
    output::print_header("cjam languages");

    for lang in Language::ALL {
        println!();
        println!("{} ({})", lang.name(), lang.display_name());
        output::print_key_value("Aliases", &lang.aliases().join(", "));
        for file in lang.files() {
            output::print_key_value(file.destination, file.source);
        }
        output::print_key_value("Run", lang.run_hint());
    }
    println!();
}
