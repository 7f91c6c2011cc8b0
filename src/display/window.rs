// Window module - Shows the scaled image in a preview window
//
// This module provides window creation and frame rendering for the
// magnified image using the winit and pixels crates.

use crate::config::ExportConfig;
use crate::image::{png_io, HostImage};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Convert packed pixels to the RGBA bytes the surface expects
///
/// Alpha is forced opaque; the preview never blends against the desktop.
fn frame_to_rgba(src: &[u32], dst: &mut [u8]) {
    for (pixel, out) in src.iter().zip(dst.chunks_exact_mut(4)) {
        out[0] = ((pixel >> 16) & 0xFF) as u8; // R
        out[1] = ((pixel >> 8) & 0xFF) as u8; // G
        out[2] = (pixel & 0xFF) as u8; // B
        out[3] = 0xFF; // A
    }
}

/// Preview window for a scaled image
///
/// Keys: `Esc` closes the window, `S` exports the image as a PNG.
pub struct ViewerWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    title: String,
    image: HostImage,
    frame: Vec<u32>,
    export: ExportConfig,
}

impl ViewerWindow {
    /// Create a new viewer (the window itself is created when the event
    /// loop starts)
    pub fn new(image: HostImage, title: String, export: ExportConfig) -> Self {
        let frame = image.pixels();
        Self {
            window: None,
            pixels: None,
            title,
            image,
            frame,
            export,
        }
    }

    /// Render the image to the window
    fn render(&mut self) -> Result<(), pixels::Error> {
        if let Some(pixels) = &mut self.pixels {
            frame_to_rgba(&self.frame, pixels.frame_mut());
            pixels.render()?;
        }
        Ok(())
    }

    /// Export the displayed image as a PNG file
    fn export_frame(&self) {
        match png_io::export_image(
            &self.image,
            &self.export.directory,
            self.export.include_timestamp,
        ) {
            Ok(path) => println!("Exported to: {}", path.display()),
            Err(err) => eprintln!("Export error: {}", err),
        }
    }
}

impl ApplicationHandler for ViewerWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let width = self.image.width() as u32;
        let height = self.image.height() as u32;

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");

        // Wrap window in Arc for shared ownership
        let window = Arc::new(window);
        let window_size = window.inner_size();

        // Create surface texture using Arc<Window> for safe 'static lifetime
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        let pixels =
            Pixels::new(width, height, surface_texture).expect("Failed to create pixel buffer");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                println!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => {
                    event_loop.exit();
                }
                KeyCode::KeyS => {
                    self.export_frame();
                }
                _ => {}
            },
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render() {
                    eprintln!("Render error: {}", err);
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create and run the preview window
///
/// # Arguments
/// * `image` - The scaled image to display
/// * `title` - Window title
/// * `vsync` - Whether to wait for events or poll continuously
/// * `export` - Where exported PNGs are written
///
/// # Returns
/// Result indicating success or error
pub fn run_preview(
    image: HostImage,
    title: String,
    vsync: bool,
    export: ExportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    // Set control flow based on VSync setting
    if vsync {
        event_loop.set_control_flow(ControlFlow::Wait);
    } else {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    println!("Starting preview window...");
    println!("  Image size: {}x{}", image.width(), image.height());
    println!("  VSync: {}", vsync);
    println!("  Esc closes the window, S exports a PNG");

    let mut viewer = ViewerWindow::new(image, title, export);
    event_loop.run_app(&mut viewer)?;

    Ok(())
}
