// Some query helpers (get_pixel, scene counters) are only exercised by tests
#![allow(dead_code)]

mod display;
mod renderer;
mod scene;
mod util;

use display::{Display, InputEvent, RenderTarget, Surface, DEFAULT_SCALE};
use renderer::render_frame;
use scene::Scene;
use util::FpsSnapshot;

/// Parse command line arguments and return (scale, vsync)
fn parse_args() -> (u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut scale = DEFAULT_SCALE;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--scale" | "-s" => {
                if i + 1 < args.len() {
                    if let Ok(s) = args[i + 1].parse::<u32>() {
                        scale = s.max(1);
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: trirast [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --scale N, -s N   Window scale factor (default: {})",
                    DEFAULT_SCALE
                );
                println!("  --no-vsync        Disable VSync for uncapped framerate");
                println!("  --help            Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (scale, vsync)
}

fn main() -> Result<(), String> {
    let (scale, vsync) = parse_args();

    let (mut display, texture_creator) = Display::new("trirast", scale, vsync)?;
    let mut target = RenderTarget::new(&texture_creator)?;
    let mut surface = Surface::new();

    // Static scene: registered once at startup, drawn every frame
    let mut scene = Scene::new();
    scene.add_triangle(50, 50, 150, 100, 100, 150, 10);
    scene.add_triangle(120, 30, 200, 80, 170, 160, 12);
    scene.add_triangle(60, 120, 140, 180, 90, 190, 9);

    let mut fps_counter = FpsSnapshot::new();

    println!("=== trirast ===");
    println!(
        "Surface: {}x{}, 16 colors, window scale {}x",
        display::WIDTH,
        display::HEIGHT,
        scale
    );
    if vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Press any key to quit.");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(_) => break 'main,
            }
        }

        let fps = fps_counter.tick();
        render_frame(&scene, &mut surface, fps);
        display.present(&mut target, &surface)?;
    }

    Ok(())
}
