use std::cell::RefCell;
use std::rc::Rc;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use backdrop_core::{
    GpuDevice, NetworkScene, SceneConfig, SceneRenderer, ThemeMode, ThemeWatch, Viewport,
    OVERRIDE_KEYS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// `point-count` -> `BACKDROP_POINT_COUNT`
fn env_var_name(key: &str) -> String {
    format!("BACKDROP_{}", key.to_uppercase().replace('-', "_"))
}

fn config_from_env() -> anyhow::Result<SceneConfig> {
    let found: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| std::env::var(env_var_name(key)).ok().map(|v| (*key, v)))
        .collect();
    for (key, value) in &found {
        log::info!("[config] {}={}", key, value);
    }
    Ok(SceneConfig::default().with_overrides(found.iter().map(|(k, v)| (*k, v.as_str())))?)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config_from_env()?;
    let mode = ThemeMode::from_attribute(std::env::var("BACKDROP_THEME").ok().as_deref());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Neural backdrop (native)")
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;
    let size = window.inner_size();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = Rc::new(RefCell::new(NetworkScene::new(
        config,
        mode,
        Viewport::new(size.width, size.height),
        &mut rng,
    )));

    // T stands in for the page's theme attribute
    let mut watch = ThemeWatch::new(mode);
    {
        let scene = scene.clone();
        watch.subscribe(move |mode| scene.borrow_mut().apply_theme(mode));
    }

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let gpu = pollster::block_on(GpuDevice::request(&instance, &surface))?;
    let mut renderer = SceneRenderer::new(gpu, surface, &scene.borrow());
    log::info!("[native] press T to toggle theme, Esc to quit");

    // The surface borrows the window, so the loop only gets a reference
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                scene.borrow_mut().resize(size.width, size.height);
                renderer.resize_if_needed(size.width, size.height);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.logical_key.as_ref() {
                    Key::Character("t") | Key::Character("T") => {
                        let next = watch.current().toggled();
                        watch.set(next);
                    }
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    _ => {}
                }
            }
            WindowEvent::RedrawRequested => {
                let mut scene = scene.borrow_mut();
                scene.tick();
                match renderer.render(&scene) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::warn!("render error: {:?}", e),
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_names_are_upper_snake_case() {
        assert_eq!(env_var_name("point-count"), "BACKDROP_POINT_COUNT");
        assert_eq!(env_var_name("seed"), "BACKDROP_SEED");
    }
}
