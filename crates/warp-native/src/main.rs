mod batch;
mod gpu;
mod scene;

use batch::SpriteBatch;
use clap::Parser;
use gpu::GpuState;
use instant::Instant;
use scene::{Scene, SceneKind, SceneOptions};
use warp_core::Viewport;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

#[derive(Parser, Debug)]
#[command(name = "warp-native")]
#[command(about = "Native viewer for the warpfield intro and scroll camera rigs", long_about = None)]
#[command(version)]
struct Args {
    /// Scene to show
    #[arg(long, value_enum, default_value_t = SceneKind::Warp)]
    scene: SceneKind,

    /// Start in the terminal phase (the completion callback never fires)
    #[arg(long)]
    skip: bool,

    /// Star count (defaults to the scene preset)
    #[arg(long)]
    stars: Option<usize>,

    /// Seed for the star field and camera shake
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Content blocks on the spiral
    #[arg(long, default_value_t = 12)]
    blocks: usize,
}

impl Args {
    fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            kind: self.scene,
            skip: self.skip,
            stars: self.stars,
            seed: self.seed,
            blocks: self.blocks,
        }
    }
}

fn viewport_of(size: winit::dpi::PhysicalSize<u32>) -> Viewport {
    Viewport::new(size.width as f32, size.height as f32)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("warpfield (native)")
        .build(&event_loop)?;

    let mut scene = Scene::new(&args.scene_options(), viewport_of(window.inner_size()))?;
    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut batch = SpriteBatch::default();
    let start = Instant::now();
    let mut last_frame = start;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            scene.resize(viewport_of(size));
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => match logical_key {
            Key::Named(NamedKey::Escape) => elwt.exit(),
            Key::Named(NamedKey::Space) => scene.skip(),
            Key::Character(ref c) if c.eq_ignore_ascii_case("s") => scene.skip(),
            _ => {}
        },
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let size = state.window.inner_size();
            if size.width > 0 && size.height > 0 {
                scene.pointer([
                    (position.x / size.width as f64) as f32,
                    (position.y / size.height as f64) as f32,
                ]);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => match delta {
            MouseScrollDelta::LineDelta(_, y) => scene.wheel(y, 0.0),
            MouseScrollDelta::PixelDelta(p) => scene.wheel(0.0, p.y as f32),
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;
            let now_ms = (now - start).as_secs_f64() * 1000.0;

            scene.frame(now_ms, dt);
            if scene.take_reveal() {
                state.window.set_title("warpfield (native): content revealed");
            }
            batch.clear();
            scene.draw(&mut batch);
            match state.render(&batch) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame dropped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
