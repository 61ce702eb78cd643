use argh::FromArgs;
use dqkin::kinematics::KinematicChain;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Forward kinematics of a serial arm described by a DH table
struct Args {
    /// path to the JSON file with the DH table of the arm
    #[argh(option, short = 'c')]
    config: PathBuf,

    /// joint angles in radians, one per link, comma separated
    #[argh(
        option,
        short = 'j',
        default = "String::from(\"0.7853981633974483,0,0,0,0.7853981633974483,0.7853981633974483\")"
    )]
    joints: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let chain: KinematicChain = serde_json::from_reader(std::fs::File::open(&args.config)?)?;
    log::info!(
        "loaded a chain with {} joints from {:?}",
        chain.num_joints(),
        args.config
    );

    let joints = args
        .joints
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;

    let end = chain.forward(&joints)?;
    let position = end.position()?;
    let orientation = end.orientation();

    println!(
        "position: [{:.8}, {:.8}, {:.8}]",
        position.x, position.y, position.z
    );
    println!(
        "orientation (w, x, y, z): {:?}, norm {:.8}",
        orientation.to_wxyz(),
        orientation.length()
    );

    Ok(())
}
