// src/main.rs
use nannou::image::{DynamicImage, RgbaImage};
use nannou::prelude::*;
use std::time::Instant;

use pixelrush::{
    animation::AnimationSession,
    config::{Config, RunMode},
    pixel::{self, PixelBuffer},
};

struct Model {
    // Core components:
    mode: RunMode,
    session: AnimationSession,
    pixels: PixelBuffer, // the sampled canvas, kept for session restarts

    // Rendering components:
    texture: wgpu::Texture,
    draw: nannou::Draw,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,
    image_texture: Option<wgpu::Texture>, // grayscale presentation
    random: rand::rngs::ThreadRng,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let mode = config.run.mode;
    let image_path = config.resolve_image_path();

    // Build the pixel canvas for the selected mode. Grayscale works at the
    // image's natural resolution; particles work on the configured canvas.
    let (pixels, canvas_width, canvas_height) = match mode {
        RunMode::Grayscale => {
            let image = nannou::image::open(&image_path)
                .unwrap_or_else(|e| panic!("Failed to load {}: {}", image_path.display(), e))
                .to_rgba8();
            let (w, h) = image.dimensions();
            let mut pixels = PixelBuffer::from_image(&image);
            pixel::convert_in_place(&mut pixels);
            (pixels, w, h)
        }
        RunMode::Particles => {
            let mut pixels = PixelBuffer::new(config.window.width, config.window.height);
            // a failed load leaves the canvas transparent: no particles
            if let Ok(image) = nannou::image::open(&image_path) {
                pixels.blit(&image.to_rgba8());
            }
            (pixels, config.window.width, config.window.height)
        }
    };

    // Create window
    let window_id = app
        .new_window()
        .title("pixelrush 0.1.0")
        .size(canvas_width, canvas_height)
        .msaa_samples(1)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    // Set up render texture
    let device = window.device();
    let draw = nannou::Draw::new();
    let texture = wgpu::TextureBuilder::new()
        .size([canvas_width, canvas_height])
        // Our texture will be used as the RENDER_ATTACHMENT for our `Draw` render pass.
        // It will also be SAMPLED by the `TextureReshaper`.
        .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
        .sample_count(1)
        .format(wgpu::TextureFormat::Rgba16Float)
        .build(device);

    // Set up rendering pipeline
    let draw_renderer = nannou::draw::RendererBuilder::new()
        .build_from_texture_descriptor(device, texture.descriptor());
    let sample_count = window.msaa_samples();

    // Create the texture reshaper.
    let texture_view = texture.view().build();
    let texture_sample_count = texture.sample_count();
    let texture_sample_type = texture.sample_type();
    let dst_format = Frame::TEXTURE_FORMAT;
    let texture_reshaper = wgpu::TextureReshaper::new(
        device,
        &texture_view,
        texture_sample_count,
        texture_sample_type,
        sample_count,
        dst_format,
    );

    // Grayscale output is static: upload it once and repaint it each frame.
    let image_texture = match mode {
        RunMode::Grayscale => {
            let image = RgbaImage::from_raw(canvas_width, canvas_height, pixels.bytes().to_vec())
                .expect("pixel buffer length mismatch");
            Some(wgpu::Texture::from_image(
                app,
                &DynamicImage::ImageRgba8(image),
            ))
        }
        RunMode::Particles => None,
    };

    let mut random = rand::thread_rng();

    // Populate the particle set once, straight after the image decode.
    let mut session = AnimationSession::new(canvas_width, canvas_height);
    if mode == RunMode::Particles {
        session.sample(&pixels, &mut random);
    }

    Model {
        mode,
        session,
        pixels,

        texture,
        draw,
        draw_renderer,
        texture_reshaper,
        image_texture,
        random,

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // restart the session: fresh random starting positions
        Key::R => {
            if model.mode == RunMode::Particles {
                model.session.reset();
                model.session.sample(&model.pixels, &mut model.random);
            }
        }
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q | Key::Escape => {
            app.quit();
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    model.draw.reset();
    model.draw.background().color(BLACK);

    /*********************  Main per-frame work **********************/
    match model.mode {
        RunMode::Grayscale => {
            if let Some(image_texture) = &model.image_texture {
                model.draw.texture(image_texture);
            }
        }
        RunMode::Particles => {
            // draw first, then ease: the rendered frame always shows the
            // positions from before this frame's easing step
            model.session.draw(&model.draw);
            model.session.update();
        }
    }
    /*****************************************************************/

    // Visualize FPS (Optional)
    if model.debug_flag {
        model
            .draw
            .text(&format!("FPS: {:.1}", model.fps))
            .x_y(0.0, 0.0)
            .color(RED);
    }

    render_to_texture(app, model);
}

// Draw the state of Model into the given Frame
fn view(_app: &App, model: &Model, frame: Frame) {
    //resize texture to screen
    let mut encoder = frame.command_encoder();

    model
        .texture_reshaper
        .encode_render_pass(frame.texture_view(), &mut encoder);
}

// ******************************* Rendering *****************************

fn render_to_texture(app: &App, model: &mut Model) {
    let window = app.main_window();
    let device = window.device();
    let ce_desc = wgpu::CommandEncoderDescriptor {
        label: Some("Texture renderer"),
    };
    let mut encoder = device.create_command_encoder(&ce_desc);
    let texture_view = model.texture.view().build();

    model.draw_renderer.encode_render_pass(
        device,
        &mut encoder,
        &model.draw,
        1.0,
        model.texture.size(),
        &texture_view,
        None,
    );

    window.queue().submit(Some(encoder.finish()));
    device.poll(wgpu::Maintain::Wait);
}
