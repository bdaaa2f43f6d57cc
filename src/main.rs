//! seatlogger main entrypoint.

use seatlogger::run;
use seatlogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(e.exit_code());
    }
}
