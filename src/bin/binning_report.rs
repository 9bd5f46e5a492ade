use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    popbin::example_apps::run_binning_report(std::env::args().skip(1))
}
