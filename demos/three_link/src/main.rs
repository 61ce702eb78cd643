use argh::FromArgs;
use dqkin::kinematics::{build_link, Point};

#[derive(FromArgs)]
/// Place the end of a three link arm given its joint angles in degrees
struct Args {
    /// angle of the first joint in degrees
    #[argh(option, default = "60.0")]
    q1: f64,

    /// angle of the second joint in degrees
    #[argh(option, default = "30.0")]
    q2: f64,

    /// angle of the third joint in degrees
    #[argh(option, default = "-40.0")]
    q3: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // a point is a frame placed in space, we start at the origin
    let origin = Point::ORIGIN;

    // every link is a transformation built from its DH parameters [theta, d, a, alpha]
    let link1 = build_link(args.q1.to_radians(), 7.0, 0.0, std::f64::consts::FRAC_PI_2);
    let link2 = build_link(args.q2.to_radians(), 0.0, 10.0, 0.0);
    let link3 = build_link(args.q3.to_radians(), 0.0, 10.0, 0.0);

    // Point * Transformation -> Point
    let end = origin * link1 * link2 * link3;

    let position = end.position()?;
    let orientation = end.orientation();

    println!(
        "position: [{:.8}, {:.8}, {:.8}]",
        position.x, position.y, position.z
    );
    println!("orientation (w, x, y, z): {:?}", orientation.to_wxyz());

    Ok(())
}
