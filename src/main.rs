use clap::Parser;
use glam::Vec3;
use ik_scene::render::{Camera, DebugLines};
use ik_scene::rig::{RoboticArm, SolverSettings, TargetPath};
use ik_scene::scene::SceneGraph;
use ik_scene::IkResult;

/// Headless robotic-arm IK demo: drives the arm toward a target for a fixed
/// number of frames and reports how close it gets.
#[derive(Debug, Parser)]
#[command(name = "ik-demo", version)]
struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Simulated frame rate; each frame advances the clock by 1/fps seconds.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Solver velocity, multiplied by the frame time before every solve.
    #[arg(long, default_value_t = 0.001)]
    velocity: f32,

    #[arg(long, default_value_t = 100.0)]
    target_x: f32,

    #[arg(long, default_value_t = 50.0)]
    target_y: f32,

    #[arg(long, default_value_t = 50.0)]
    target_z: f32,

    /// Sweep the target along its looping path instead of holding it still.
    #[arg(long)]
    animate: bool,

    /// Log progress every N frames (0 disables).
    #[arg(long, default_value_t = 60)]
    report_every: u32,
}

struct App {
    graph: SceneGraph,
    arm: RoboticArm,
    settings: SolverSettings,
    path: TargetPath,
    camera: Camera,
    lines: DebugLines,
    clock: f32,
}

impl App {
    fn new(settings: SolverSettings) -> IkResult<Self> {
        let mut graph = SceneGraph::new();
        let arm = RoboticArm::new(&mut graph)?;
        let mut camera = Camera::third_person(Vec3::new(-50.0, 100.0, 100.0), -20.0, 315.0);
        camera.set_aspect(1920.0 / 1080.0);

        Ok(Self {
            graph,
            arm,
            settings,
            path: TargetPath::default(),
            camera,
            lines: DebugLines::new(),
            clock: 0.0,
        })
    }

    fn update(&mut self, dt: f32) {
        self.clock += dt;

        if self.settings.animate_target {
            self.settings.target = self.path.position(self.clock, self.settings.target.x);
        }

        if self.settings.enabled {
            let velocity = self.settings.step_velocity(dt);
            self.arm.chain.solve(&mut self.graph, self.settings.target, velocity);
        }
    }

    fn render(&mut self) {
        self.lines.clear();
        self.lines.push_chain(&self.arm.chain, &self.graph, 2.0);
        self.lines.push_cross(self.settings.target, 4.0, ik_scene::render::debug::TARGET_COLOR);
    }

    fn distance(&self) -> f32 {
        self.arm.chain.distance_to(&self.graph, self.settings.target)
    }
}

fn main() -> IkResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = SolverSettings {
        velocity: args.velocity,
        animate_target: args.animate,
        target: Vec3::new(args.target_x, args.target_y, args.target_z),
        ..SolverSettings::default()
    };

    let mut app = App::new(settings)?;
    let dt = 1.0 / args.fps.max(1.0);

    log::info!(
        "solving {} frames at {} fps, start distance {:.3}",
        args.frames,
        args.fps,
        app.distance()
    );

    for frame in 1..=args.frames {
        app.update(dt);
        app.render();

        if args.report_every > 0 && frame % args.report_every == 0 {
            log::info!(
                "frame {frame}: target {:?}, distance {:.3}",
                app.settings.target,
                app.distance()
            );
        }
    }

    let degrees: Vec<Vec3> = app
        .arm
        .chain
        .rotations(&app.graph)
        .into_iter()
        .map(|r| r * (180.0 / std::f32::consts::PI))
        .collect();

    let effector = app.arm.chain.end_effector(&app.graph);
    let ndc = app.camera.view_projection().project_point3(effector);

    log::info!(
        "done: distance {:.3}, joint rotations (deg) {:?}, {} debug vertices",
        app.distance(),
        degrees,
        app.lines.vertices().len()
    );
    log::info!("end-effector {:?} at ndc {:?}", effector, ndc);

    Ok(())
}
