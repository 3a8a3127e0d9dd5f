//! Render system.
//!
//! Draws the whole frame with raylib immediate-mode primitives: the grid
//! background, the schematic for the active problem (animated track for
//! motion problems, static cross-section for geometry, placeholder panel
//! otherwise), the header, the transport bar, and the optional debug
//! overlay.
//!
//! Scene entities are drawn with a painter's algorithm: collect
//! (position, drawable, z), sort by z, paint back to front, then the text
//! labels on top.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::agent::Agent;
use crate::components::drawable::{Drawable, Shape as DrawShape};
use crate::components::dynamictext::DynamicText;
use crate::components::scenepos::ScenePosition;
use crate::components::zindex::ZIndex;
use crate::problem::{GeometryParams, ProblemData, SceneType, Shape};
use crate::resources::activeproblem::ActiveProblem;
use crate::resources::debugmode::DebugMode;
use crate::resources::playback::Playback;
use crate::resources::screensize::ScreenSize;
use crate::systems::layout::{COLOR_ANNOTATION, COLOR_EVENT, COLOR_INK, COLOR_TRACK};

const BACKGROUND: Color = Color { r: 248, g: 250, b: 252, a: 255 };
const GRID: Color = Color { r: 240, g: 240, b: 240, a: 255 };
const PANEL: Color = Color { r: 255, g: 255, b: 255, a: 255 };
const GEOMETRY_FILL: Color = Color { r: 224, g: 231, b: 255, a: 255 };
const GEOMETRY_EDGE: Color = Color { r: 79, g: 70, b: 229, a: 255 };
const GRID_STEP: i32 = 40;
const TRANSPORT_BAR_H: i32 = 76;

/// Draw one full frame.
///
/// Exclusive system: takes the raylib handle out of the world for the
/// duration of the drawing scope and puts it back afterwards.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("raylib handle missing");
    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("raylib thread missing");

    {
        let screen = *world.resource::<ScreenSize>();
        let playback = *world.resource::<Playback>();
        let active = world.resource::<ActiveProblem>().clone();
        let problem = active.problem();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        draw_grid(&mut d, screen);

        match problem.scene_type {
            SceneType::Movement if problem.has_motion_scene() => {
                draw_scene_entities(world, &mut d);
                draw_agent_arrows(world, &mut d);
                draw_transport_bar(&mut d, screen, &playback, problem);
            }
            SceneType::Geometry => {
                if let Some(params) = problem.geometry_params.as_ref() {
                    draw_geometry_panel(&mut d, screen, params);
                } else {
                    draw_placeholder(&mut d, screen);
                }
            }
            _ => draw_placeholder(&mut d, screen),
        }

        draw_header(&mut d, problem, active.catalog_index, world);

        if world.contains_resource::<DebugMode>() {
            draw_debug_overlay(&mut d, screen, &playback);
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Faint square grid, the schematic's graph-paper backdrop.
fn draw_grid(d: &mut RaylibDrawHandle, screen: ScreenSize) {
    let mut x = 0;
    while x < screen.w {
        d.draw_line(x, 0, x, screen.h, GRID);
        x += GRID_STEP;
    }
    let mut y = 0;
    while y < screen.h {
        d.draw_line(0, y, screen.w, y, GRID);
        y += GRID_STEP;
    }
}

/// Painter's-algorithm pass over the scene entities.
fn draw_scene_entities(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut shapes: Vec<(ScenePosition, Drawable, ZIndex)> = {
        let mut q = world.query::<(&ScenePosition, &Drawable, &ZIndex)>();
        q.iter(world)
            .filter(|(_, drawable, _)| drawable.visible)
            .map(|(p, s, z)| (*p, *s, *z))
            .collect()
    };
    shapes.sort_by_key(|(_, _, z)| *z);
    for (pos, drawable, _) in &shapes {
        draw_shape(d, pos.pos, drawable);
    }

    let mut texts: Vec<(ScenePosition, DynamicText, ZIndex)> = {
        let mut q = world.query::<(&ScenePosition, &DynamicText, &ZIndex)>();
        q.iter(world)
            .filter(|(_, text, _)| !text.content.is_empty())
            .map(|(p, t, z)| (*p, t.clone(), *z))
            .collect()
    };
    texts.sort_by_key(|(_, _, z)| *z);
    for (pos, text, _) in &texts {
        draw_label(d, pos.pos, text);
    }
}

fn draw_shape(d: &mut RaylibDrawHandle, pos: Vector2, drawable: &Drawable) {
    match drawable.shape {
        DrawShape::Circle { radius } => {
            d.draw_circle_v(pos, radius, drawable.color);
            // Halo ring, like the original's translucent outline.
            d.draw_circle_lines(pos.x as i32, pos.y as i32, radius + 6.0, drawable.color);
        }
        DrawShape::Rect { w, h } => {
            d.draw_rectangle(
                (pos.x - w * 0.5) as i32,
                (pos.y - h * 0.5) as i32,
                w as i32,
                h as i32,
                drawable.color,
            );
        }
        DrawShape::Line { dx, dy, thickness } => {
            d.draw_line_ex(
                pos,
                Vector2 { x: pos.x + dx, y: pos.y + dy },
                thickness,
                drawable.color,
            );
        }
        DrawShape::DashedLine { dx, dash } => {
            let steps = (dx.abs() / (dash * 2.0)).floor() as i32;
            for i in 0..=steps {
                let x0 = pos.x + i as f32 * dash * 2.0 * dx.signum();
                let x1 = (x0 + dash * dx.signum()).clamp(pos.x.min(pos.x + dx), pos.x.max(pos.x + dx));
                d.draw_line_ex(
                    Vector2 { x: x0, y: pos.y },
                    Vector2 { x: x1, y: pos.y },
                    1.0,
                    drawable.color,
                );
            }
        }
        DrawShape::Flag { height } => {
            let top = pos.y - height;
            d.draw_line_ex(pos, Vector2 { x: pos.x, y: top }, 2.0, COLOR_ANNOTATION);
            d.draw_rectangle(pos.x as i32, top as i32, 18, 12, drawable.color);
        }
        DrawShape::Arrow { dx } => {
            let tip = Vector2 { x: pos.x + dx, y: pos.y };
            d.draw_line_ex(pos, tip, 2.0, drawable.color);
            let back = -dx.signum() * 6.0;
            d.draw_line_ex(tip, Vector2 { x: tip.x + back, y: tip.y - 4.0 }, 2.0, drawable.color);
            d.draw_line_ex(tip, Vector2 { x: tip.x + back, y: tip.y + 4.0 }, 2.0, drawable.color);
        }
    }
}

fn draw_label(d: &mut RaylibDrawHandle, pos: Vector2, text: &DynamicText) {
    let x = if text.centered {
        pos.x as i32 - measure_text(&text.content, text.font_size) / 2
    } else {
        pos.x as i32
    };
    d.draw_text(&text.content, x, pos.y as i32, text.font_size, text.color);
}

/// Velocity direction arrows next to agents that are in motion.
fn draw_agent_arrows(world: &mut World, d: &mut RaylibDrawHandle) {
    let agents: Vec<(ScenePosition, Agent, Drawable)> = {
        let mut q = world.query::<(&ScenePosition, &Agent, &Drawable)>();
        q.iter(world)
            .map(|(p, a, dr)| (*p, a.clone(), *dr))
            .collect()
    };
    for (pos, agent, drawable) in &agents {
        if agent.heading == 0.0 {
            continue;
        }
        let arrow = Drawable::new(DrawShape::Arrow { dx: agent.heading * 26.0 }, drawable.color);
        let start = Vector2 {
            x: pos.pos.x + agent.heading * 14.0,
            y: pos.pos.y - 18.0,
        };
        draw_shape(d, start, &arrow);
    }
}

/// Title, source tag, and catalog position at the top of the frame.
fn draw_header(d: &mut RaylibDrawHandle, problem: &ProblemData, index: usize, world: &World) {
    d.draw_text(&problem.title, 16, 14, 22, COLOR_INK);
    let mut x = 16;
    if let Some(source) = problem.source.as_deref() {
        d.draw_text(source, x, 42, 13, COLOR_ANNOTATION);
        x += measure_text(source, 13) + 16;
    }
    let tag = problem.scene_type.tag();
    d.draw_text(tag, x, 42, 13, GEOMETRY_EDGE);

    let total = world
        .get_resource::<crate::resources::catalog::ProblemCatalog>()
        .map(|c| c.len())
        .unwrap_or(0);
    if total > 0 {
        let counter = format!("{} / {}  (N/P)", index + 1, total);
        let w = measure_text(&counter, 13);
        let screen = world.resource::<ScreenSize>();
        d.draw_text(&counter, screen.w - w - 16, 14, 13, COLOR_ANNOTATION);
    }
}

/// Progress gauge, time readouts, and state line at the bottom of the frame.
fn draw_transport_bar(
    d: &mut RaylibDrawHandle,
    screen: ScreenSize,
    playback: &Playback,
    problem: &ProblemData,
) {
    let total_time = problem
        .movement_params
        .as_ref()
        .map(|p| p.total_time)
        .unwrap_or(0.0);
    let top = screen.h - TRANSPORT_BAR_H;
    d.draw_rectangle(0, top, screen.w, TRANSPORT_BAR_H, PANEL);
    d.draw_line(0, top, screen.w, top, COLOR_TRACK);

    // Progress gauge.
    let gauge_x = 70;
    let gauge_w = screen.w - 2 * gauge_x;
    let gauge_y = top + 18;
    d.draw_rectangle(gauge_x, gauge_y, gauge_w, 6, COLOR_TRACK);
    d.draw_rectangle(
        gauge_x,
        gauge_y,
        (gauge_w as f32 * playback.progress()) as i32,
        6,
        GEOMETRY_EDGE,
    );

    // Time readouts on either side of the gauge.
    let elapsed = playback.progress() * total_time;
    let left = format!("{elapsed:.1}s");
    let right = format!("{total_time}s");
    d.draw_text(&left, gauge_x - measure_text(&left, 13) - 10, gauge_y - 4, 13, COLOR_INK);
    d.draw_text(&right, gauge_x + gauge_w + 10, gauge_y - 4, 13, COLOR_ANNOTATION);

    // State line.
    let state = if playback.is_completed() {
        "done"
    } else if playback.is_playing() {
        "playing"
    } else {
        "paused"
    };
    let line = format!(
        "{state}  |  x{}  |  SPACE play/pause   ←/→ scrub   TAB rate   R reset",
        playback.rate()
    );
    d.draw_text(&line, gauge_x, gauge_y + 20, 13, COLOR_ANNOTATION);
}

/// Static cross-section panel for geometry problems.
fn draw_geometry_panel(d: &mut RaylibDrawHandle, screen: ScreenSize, params: &GeometryParams) {
    let cx = screen.w / 2;
    let cy = screen.h / 2;

    match params.shape {
        Shape::Cube => {
            d.draw_rectangle(cx - 100, cy - 100, 200, 200, GEOMETRY_FILL);
            d.draw_rectangle_lines(cx - 100, cy - 100, 200, 200, GEOMETRY_EDGE);
            let caption = format!("边长: {}", params.dimension_a);
            let w = measure_text(&caption, 15);
            d.draw_text(&caption, cx - w / 2, cy + 112, 15, COLOR_INK);
        }
        Shape::Sphere => {
            d.draw_circle(cx, cy, 100.0, GEOMETRY_FILL);
            d.draw_circle_lines(cx, cy, 100.0, GEOMETRY_EDGE);
            d.draw_line(cx, cy, cx + 100, cy, GEOMETRY_EDGE);
            let caption = format!("r: {}", params.dimension_a);
            d.draw_text(&caption, cx + 30, cy - 20, 15, COLOR_INK);
        }
        Shape::Cylinder => {
            d.draw_rectangle(cx - 60, cy - 100, 120, 200, GEOMETRY_FILL);
            d.draw_rectangle_lines(cx - 60, cy - 100, 120, 200, GEOMETRY_EDGE);
            let radius = format!("r: {}", params.dimension_a);
            let w = measure_text(&radius, 15);
            d.draw_text(&radius, cx - w / 2, cy + 112, 15, COLOR_INK);
            if let Some(height) = params.dimension_b {
                let caption = format!("h: {height}");
                d.draw_text(&caption, cx + 72, cy - 8, 15, COLOR_INK);
            }
        }
    }

    let label_w = measure_text(&params.label, 17);
    d.draw_text(&params.label, cx - label_w / 2, cy - 140, 17, GEOMETRY_EDGE);
    let desc_w = measure_text(&params.description, 13);
    d.draw_text(&params.description, cx - desc_w / 2, cy + 140, 13, COLOR_ANNOTATION);
}

/// Panel shown for problem types without a schematic.
fn draw_placeholder(d: &mut RaylibDrawHandle, screen: ScreenSize) {
    let text = "暂无示意图 (no schematic for this problem type)";
    let w = measure_text(text, 17);
    d.draw_text(text, (screen.w - w) / 2, screen.h / 2 - 8, 17, COLOR_ANNOTATION);
}

/// Frame and clock diagnostics, toggled with F11.
fn draw_debug_overlay(d: &mut RaylibDrawHandle, screen: ScreenSize, playback: &Playback) {
    let fps = d.get_fps();
    let text = format!(
        "FPS: {fps} | progress: {:.4} | playing: {} | rate: x{}",
        playback.progress(),
        playback.is_playing(),
        playback.rate()
    );
    d.draw_text(&text, 10, screen.h - TRANSPORT_BAR_H - 20, 10, COLOR_EVENT);
}
