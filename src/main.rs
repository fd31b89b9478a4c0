use logify::run;
use std::process::ExitCode;
fn main() -> ExitCode {
  run()
}
