//! Ping Pong entry point

use winit::event_loop::{ControlFlow, EventLoop};

use ping_pong::app::App;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Ping Pong starting...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    log::info!("Ping Pong exited cleanly");
    Ok(())
}
