use std::process::ExitCode;

fn main() -> ExitCode {
    match rcs4cvs::run(std::env::args_os()) {
        0 => ExitCode::SUCCESS,
        code => ExitCode::from(u8::try_from(code).unwrap_or(1)),
    }
}
