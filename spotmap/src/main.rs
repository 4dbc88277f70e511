use clap::Parser;
use spotmap::app::{SpotmapApp, SpotmapAppError};

fn main() -> Result<(), SpotmapAppError> {
    env_logger::init();
    let args = SpotmapApp::parse();
    args.op.run()
}
