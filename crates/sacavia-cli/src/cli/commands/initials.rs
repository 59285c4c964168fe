//! `sacavia initials <name>` – print avatar initials.

use sacavia_core::initials::initials;

pub fn run_initials(name: &str) {
    println!("{}", initials(name));
}
