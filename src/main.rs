//! Interactive wireframe surface plotter.
//!
//! ```bash
//! cargo run --release -- --surface waves --x -10:10:0.2 --z -10:10:0.5
//! ```
//!
//! Arrow keys rotate the view, `+`/`-` zoom, `Esc` quits.

use anyhow::Result;
use clap::Parser;
use glam::{vec2, vec3};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::Instant;

use horizon_rs::{HeightField, Interval, Point2, RenderError, ViewTransform, render};

const ANGLE_STEP: f32 = 5.0; // degrees per key press
const ZOOM_STEP: f32 = 1.1;

#[derive(Parser, Debug)]
#[command(about = "Floating-horizon hidden-line surface plotter")]
struct Args {
    /// Surface to plot
    #[arg(long, value_enum, default_value_t = HeightField::Waves)]
    surface: HeightField,

    /// Column (x) axis as start:end:step
    #[arg(long, default_value = "-10:10:0.2", value_parser = parse_interval)]
    x: Interval,

    /// Depth (z) axis as start:end:step, swept rear to front
    #[arg(long, default_value = "-10:10:0.5", value_parser = parse_interval)]
    z: Interval,

    /// Initial rotation about the X axis, degrees
    #[arg(long, default_value_t = 30.0)]
    angle_x: f32,

    /// Initial rotation about the Y axis, degrees
    #[arg(long, default_value_t = 15.0)]
    angle_y: f32,

    /// Initial rotation about the Z axis, degrees
    #[arg(long, default_value_t = 0.0)]
    angle_z: f32,

    /// Pixels per surface unit
    #[arg(long, default_value_t = 12.0)]
    scale: f32,

    #[arg(long, default_value_t = 1024)]
    width: usize,

    #[arg(long, default_value_t = 768)]
    height: usize,
}

/// Parse `start:end:step`, rejecting the malformed intervals the renderer
/// treats as caller preconditions.
fn parse_interval(s: &str) -> Result<Interval, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [start, end, step] = parts.as_slice() else {
        return Err("expected start:end:step".into());
    };
    let start: f32 = start.trim().parse().map_err(|e| format!("bad start: {e}"))?;
    let end: f32 = end.trim().parse().map_err(|e| format!("bad end: {e}"))?;
    let step: f32 = step.trim().parse().map_err(|e| format!("bad step: {e}"))?;
    if step == 0.0 {
        return Err("step must be nonzero".into());
    }
    if (end - start) * step < 0.0 {
        return Err("step sign must match end - start".into());
    }
    Ok(Interval::new(start, end, step))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut angles = vec3(args.angle_x, args.angle_y, args.angle_z);
    let mut scale = args.scale;
    let centre = vec2(args.width as f32 * 0.5, args.height as f32 * 0.5);

    let mut window = Window::new(
        "Floating horizon",
        args.width,
        args.height,
        WindowOptions::default(),
    )?;
    window.set_target_fps(60);

    let mut buffer = vec![0u32; args.width * args.height];
    let mut dirty = true;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Left, KeyRepeat::Yes) {
            angles.y -= ANGLE_STEP;
            dirty = true;
        }
        if window.is_key_pressed(Key::Right, KeyRepeat::Yes) {
            angles.y += ANGLE_STEP;
            dirty = true;
        }
        if window.is_key_pressed(Key::Up, KeyRepeat::Yes) {
            angles.x -= ANGLE_STEP;
            dirty = true;
        }
        if window.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            angles.x += ANGLE_STEP;
            dirty = true;
        }
        if window.is_key_pressed(Key::Equal, KeyRepeat::Yes) {
            scale *= ZOOM_STEP;
            dirty = true;
        }
        if window.is_key_pressed(Key::Minus, KeyRepeat::Yes) {
            scale /= ZOOM_STEP;
            dirty = true;
        }

        if dirty {
            let view = ViewTransform::compose(angles, scale, centre);
            let t0 = Instant::now();
            match render(
                args.z,
                args.x,
                |x, z| args.surface.eval(x, z),
                &view,
                args.width,
                args.height,
            ) {
                Ok(segments) => {
                    buffer.fill(0xFF_00_00_00);
                    for s in &segments {
                        draw_line(&mut buffer, args.width, args.height, s.p1, s.p2, 0x00_FF_FF_FF);
                    }
                    println!(
                        "{} segments in {:.2} ms",
                        segments.len(),
                        t0.elapsed().as_secs_f64() * 1000.0
                    );
                }
                // keep the previous frame; the inputs need adjusting
                Err(err @ RenderError::OutOfViewport { .. }) => {
                    eprintln!("{err}: reduce the scale or narrow the intervals");
                }
            }
            dirty = false;
        }

        window.update_with_buffer(&buffer, args.width, args.height)?;
    }
    Ok(())
}

/// Integer Bresenham line rasterizer.
fn draw_line(buf: &mut [u32], w: usize, h: usize, p1: Point2, p2: Point2, colour: u32) {
    let (mut x0, mut y0) = (p1.x, p1.y);
    let (x1, y1) = (p2.x, p2.y);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}
