//! fitlog main entrypoint.

use fitlog::errors::AppError;
use fitlog::run;
use fitlog::ui::messages::field_errors;

fn main() {
    println!();
    if let Err(e) = run() {
        match &e {
            AppError::Validation(fields) => {
                eprintln!("Error: invalid input");
                field_errors(fields);
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
